use clap::Parser;
use forecast_core::TempScale;

/// Top-level CLI struct.
///
/// The two scale flags are mutually exclusive; when neither is given
/// the user is prompted for a scale interactively.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "NOAA weather forecasts by zip code")]
pub struct Cli {
    /// Get the forecast in Celsius.
    #[arg(short, long, conflicts_with = "fahrenheit")]
    pub celsius: bool,

    /// Get the forecast in Fahrenheit.
    #[arg(short, long)]
    pub fahrenheit: bool,
}

impl Cli {
    /// The scale selected by flags, if any.
    pub fn temp_scale(&self) -> Option<TempScale> {
        if self.celsius {
            Some(TempScale::Celsius)
        } else if self.fahrenheit {
            Some(TempScale::Fahrenheit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["forecast", "-c", "-f"]).is_err());
    }

    #[test]
    fn flags_map_to_scales() {
        let celsius = Cli::try_parse_from(["forecast", "--celsius"]).unwrap();
        assert_eq!(celsius.temp_scale(), Some(TempScale::Celsius));

        let fahrenheit = Cli::try_parse_from(["forecast", "-f"]).unwrap();
        assert_eq!(fahrenheit.temp_scale(), Some(TempScale::Fahrenheit));

        let neither = Cli::try_parse_from(["forecast"]).unwrap();
        assert_eq!(neither.temp_scale(), None);
    }
}
