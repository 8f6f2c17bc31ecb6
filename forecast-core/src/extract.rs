use std::sync::LazyLock;
use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::{error::ForecastError, model::DayForecast};

/// Applies to the single request attempt; timeouts surface to the
/// caller instead of being retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Container holding the per-day detailed forecast entries.
static FORECAST_BODY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div#detailed-forecast-body").expect("forecast body selector must parse")
});

/// Bold day labels within the forecast body.
static DAY_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("b").expect("day label selector must parse"));

/// Forecast text cells, matched by class substring anywhere in the
/// document.
static FORECAST_TEXT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[class*="forecast-text"]"#).expect("forecast text selector must parse")
});

/// Fetch the forecast page at `url` and extract its per-day entries.
///
/// One blocking GET, one attempt. Connection failures map to
/// `NoInternetConnection` and timeouts to `RequestTimeout`; the caller
/// decides whether to prompt again.
pub fn fetch_forecast(url: &str) -> Result<Vec<DayForecast>, ForecastError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|err| ForecastError::Unexpected(err.into()))?;

    debug!(url, "requesting forecast page");
    let response = client.get(url).send().map_err(classify_request_error)?;
    let body = response.text().map_err(classify_request_error)?;
    debug!(bytes = body.len(), "received forecast page");

    extract_forecast(&body)
}

fn classify_request_error(err: reqwest::Error) -> ForecastError {
    if err.is_timeout() {
        ForecastError::RequestTimeout(err)
    } else if err.is_connect() {
        ForecastError::NoInternetConnection(err)
    } else {
        ForecastError::Unexpected(err.into())
    }
}

/// Extract (day label, forecast text) pairs from a detailed-forecast
/// page.
///
/// Day labels and text cells are collected in document order and
/// paired by index; when the page is well-formed the lists have equal
/// length. Unequal lists truncate to the shorter one, dropping
/// trailing entries. The combined sequence is then reversed so the
/// page's final entry is returned first and ends up printed nearest
/// the console prompt.
pub fn extract_forecast(html: &str) -> Result<Vec<DayForecast>, ForecastError> {
    let document = Html::parse_document(html);

    let forecast_body = document
        .select(&FORECAST_BODY)
        .next()
        .ok_or(ForecastError::HtmlElementNotFound("forecast body"))?;

    let days: Vec<String> = forecast_body.select(&DAY_LABEL).map(element_text).collect();
    if days.is_empty() {
        return Err(ForecastError::HtmlElementNotFound("forecast days"));
    }

    let texts: Vec<String> = document.select(&FORECAST_TEXT).map(element_text).collect();
    if texts.is_empty() {
        return Err(ForecastError::HtmlElementNotFound("forecast text"));
    }

    if days.len() != texts.len() {
        debug!(
            days = days.len(),
            texts = texts.len(),
            "day label and forecast text counts differ; truncating to the shorter list"
        );
    }

    let mut pairs: Vec<DayForecast> = days
        .into_iter()
        .zip(texts)
        .map(|(day, text)| DayForecast { day, text })
        .collect();
    pairs.reverse();

    Ok(pairs)
}

/// Concatenated visible text of an element, trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
