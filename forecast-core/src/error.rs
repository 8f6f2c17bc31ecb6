use thiserror::Error;

/// Errors produced while validating input, building forecast URLs, and
/// retrieving forecast pages.
///
/// The variants fall into two families the interactive loop treats
/// differently: input errors (empty or malformed zip/scale), which are
/// resolved by re-entering input, and data/network errors, which are
/// reported before moving on to the next prompt. None are fatal.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The temperature scale string was empty.
    #[error("No temperature scale entered.")]
    NoTempScale,

    /// The temperature scale string matched neither accepted token set.
    #[error("Not a valid temperature scale.")]
    InvalidTempScale,

    /// The zip code string was empty.
    #[error("No zip code entered.")]
    NoZipCode,

    /// The zip code string was not exactly five ASCII digits.
    #[error("Invalid zip code format.")]
    InvalidZipCodeFormat,

    /// The zip code is not a key in the bundled lookup table.
    #[error("Zip code not found.")]
    ZipCodeNotFound,

    /// The lookup table has no forecast URL for this zip code.
    #[error("No data available for {0}.")]
    NoDataForZipCode(String),

    /// A constructed URL did not match the forecast-service syntax.
    #[error("Invalid URL for that zip code.")]
    InvalidUrlFormat,

    /// The HTTP request could not reach the forecast service.
    #[error("No internet connection. Please try again.")]
    NoInternetConnection(#[source] reqwest::Error),

    /// The HTTP request exceeded the timeout. Not retried; the caller
    /// decides whether to re-prompt.
    #[error("The request timed out. Please try again.")]
    RequestTimeout(#[source] reqwest::Error),

    /// An expected element was missing from the forecast page HTML.
    /// The detail names the missing piece ("forecast body",
    /// "forecast days" or "forecast text").
    #[error("HTML element not found: {0} not found for that zip code.")]
    HtmlElementNotFound(&'static str),

    /// Catch-all for conditions outside the families above.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl ForecastError {
    /// Whether this error is resolved by the user re-entering input,
    /// as opposed to a data or network condition.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NoTempScale
                | Self::InvalidTempScale
                | Self::NoZipCode
                | Self::InvalidZipCodeFormat
                | Self::InvalidUrlFormat
        )
    }
}
