use regex::Regex;
use std::sync::LazyLock;

use crate::{error::ForecastError, model::TempScale, zipmap::ZipCodeMap};

/// Exactly five ASCII digits.
static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("zip code pattern must compile"));

/// weather.gov detailed-forecast URL syntax: scheme, host, MapClick
/// path, lat/lon, optional extra query parameters, and the text
/// forecast type with an optional Celsius unit selector.
static FORECAST_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https://forecast\.weather\.gov/MapClick\.php\?lat=-?[0-9]+(\.[0-9]+)?&lon=-?[0-9]+(\.[0-9]+)?(&[A-Za-z0-9]+=[A-Za-z0-9]+)*&FcstType=text(&unit=1)?$",
    )
    .expect("forecast URL pattern must compile")
});

/// Validate a user-entered temperature scale token and return the
/// parsed scale.
///
/// Fails with `NoTempScale` on an empty string and `InvalidTempScale`
/// when the token is in neither accepted synonym set. Matching is
/// trimmed and case-insensitive.
pub fn validate_temp_scale(input: &str) -> Result<TempScale, ForecastError> {
    TempScale::try_from(input)
}

/// Validate a user-entered zip code against the lookup table.
///
/// Checks run in a fixed order, format before presence before data
/// availability, since the later checks assume the key exists:
/// `NoZipCode` on empty input, `InvalidZipCodeFormat` unless exactly
/// five digits, `ZipCodeNotFound` when the table has no such key, and
/// `NoDataForZipCode` when the table's value is the empty sentinel.
pub fn validate_zip_code(map: &ZipCodeMap, input: &str) -> Result<(), ForecastError> {
    if input.is_empty() {
        return Err(ForecastError::NoZipCode);
    }
    if !ZIP_CODE.is_match(input) {
        return Err(ForecastError::InvalidZipCodeFormat);
    }
    match map.url_for(input) {
        None => Err(ForecastError::ZipCodeNotFound),
        Some("") => Err(ForecastError::NoDataForZipCode(input.to_string())),
        Some(_) => Ok(()),
    }
}

/// Check a constructed URL against the forecast-service syntax.
///
/// This is a defense check after URL construction, not user input
/// validation.
pub fn validate_url(url: &str) -> Result<(), ForecastError> {
    if FORECAST_URL.is_match(url) {
        Ok(())
    } else {
        Err(ForecastError::InvalidUrlFormat)
    }
}

/// Build the forecast URL for a zip code: validate the zip, append the
/// scale's unit suffix to the base URL from the table, and syntax-check
/// the result.
pub fn forecast_url(
    map: &ZipCodeMap,
    zip_code: &str,
    scale: TempScale,
) -> Result<String, ForecastError> {
    validate_zip_code(map, zip_code)?;

    // validate_zip_code guarantees the key exists with a non-empty value.
    let base = map.url_for(zip_code).ok_or(ForecastError::ZipCodeNotFound)?;
    let url = format!("{base}{}", scale.url_suffix());

    validate_url(&url)?;
    Ok(url)
}
