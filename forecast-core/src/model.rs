use std::fmt;

use crate::error::ForecastError;

/// Suffix appended to a forecast URL to request Celsius temperatures.
pub const CELSIUS_URL_SUFFIX: &str = "&FcstType=text&unit=1";

/// Temperature scale for a session. Chosen once at startup, either
/// from a CLI flag or the interactive prompt, and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempScale {
    Fahrenheit,
    Celsius,
}

impl TempScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            TempScale::Fahrenheit => "fahrenheit",
            TempScale::Celsius => "celsius",
        }
    }

    /// Query-string suffix selecting this scale on the forecast page.
    /// Fahrenheit is the page default and needs no suffix.
    pub fn url_suffix(&self) -> &'static str {
        match self {
            TempScale::Fahrenheit => "",
            TempScale::Celsius => CELSIUS_URL_SUFFIX,
        }
    }
}

impl fmt::Display for TempScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TempScale {
    type Error = ForecastError;

    /// Parse a user-entered scale token, case-insensitive and trimmed.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let token = value.trim().to_lowercase();

        match token.as_str() {
            "" => Err(ForecastError::NoTempScale),
            "celsius" | "c" => Ok(TempScale::Celsius),
            "fahrenheit" | "f" => Ok(TempScale::Fahrenheit),
            _ => Err(ForecastError::InvalidTempScale),
        }
    }
}

/// One day label paired with its detailed forecast text, as extracted
/// from the forecast page. Produced per fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayForecast {
    pub day: String,
    pub text: String,
}

impl fmt::Display for DayForecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.day, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_tokens_parse_case_insensitively() {
        assert_eq!(TempScale::try_from("celsius").unwrap(), TempScale::Celsius);
        assert_eq!(TempScale::try_from("C").unwrap(), TempScale::Celsius);
        assert_eq!(TempScale::try_from(" Fahrenheit ").unwrap(), TempScale::Fahrenheit);
        assert_eq!(TempScale::try_from("f").unwrap(), TempScale::Fahrenheit);
    }

    #[test]
    fn empty_scale_is_distinct_from_invalid() {
        assert!(matches!(TempScale::try_from(""), Err(ForecastError::NoTempScale)));
        assert!(matches!(TempScale::try_from("   "), Err(ForecastError::NoTempScale)));
        assert!(matches!(
            TempScale::try_from("kelvin"),
            Err(ForecastError::InvalidTempScale)
        ));
    }

    #[test]
    fn only_celsius_carries_a_url_suffix() {
        assert_eq!(TempScale::Celsius.url_suffix(), "&FcstType=text&unit=1");
        assert_eq!(TempScale::Fahrenheit.url_suffix(), "");
    }

    #[test]
    fn day_forecast_displays_as_day_colon_text() {
        let pair = DayForecast {
            day: "Tonight".to_string(),
            text: "Partly cloudy, with a low around 60.".to_string(),
        };
        assert_eq!(pair.to_string(), "Tonight: Partly cloudy, with a low around 60.");
    }
}
