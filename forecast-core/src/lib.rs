//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The bundled zip-code-to-URL lookup table
//! - Input and URL validation
//! - Forecast page fetching and HTML extraction
//! - Display formatting for forecast text
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries.

pub mod error;
pub mod extract;
pub mod format;
pub mod model;
pub mod validation;
pub mod zipmap;

pub use error::ForecastError;
pub use extract::{extract_forecast, fetch_forecast};
pub use format::format_forecasts;
pub use model::{CELSIUS_URL_SUFFIX, DayForecast, TempScale};
pub use validation::{forecast_url, validate_temp_scale, validate_url, validate_zip_code};
pub use zipmap::ZipCodeMap;
