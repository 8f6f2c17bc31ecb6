//! Interactive prompt loop.
//!
//! Drives validation, URL building, page extraction and formatting for
//! each zip code the user enters. Every error is reported and followed
//! by another prompt; only an explicit exit signal (an exit token, Esc
//! or Ctrl-C) ends the loop.

use anyhow::Result;
use inquire::{InquireError, Text};

use forecast_core::{
    ForecastError, TempScale, ZipCodeMap, fetch_forecast, forecast_url, format_forecasts,
    validate_temp_scale,
};

const ENTER_TEMP_SCALE_PROMPT: &str = "Enter a temperature scale (Celsius [C] or Fahrenheit [F])";
const ENTER_VALID_TEMP_SCALE_PROMPT: &str = "Please enter Celsius (C) or Fahrenheit (F)";
const ENTER_ZIP_PROMPT: &str = "Enter zip code (5 digits)";
const ENTER_VALID_ZIP_PROMPT: &str = "Please enter a valid zip code";
const ANY_OTHER_ZIP_PROMPT: &str = "Any other zip code? (5 digits)";
const EXIT_MESSAGE: &str = "Exiting the program...";

/// Inputs for exiting the program.
const EXIT_INPUTS: &[&str] = &["quit", "q", "exit", "e"];
/// Inputs for a negative response, treated as an exit at any prompt.
const NO_INPUTS: &[&str] = &["no", "n"];
/// Inputs for an affirmative response to "any other zip code?".
const YES_INPUTS: &[&str] = &["yes", "y"];

/// A controller for the zip-code prompt loop.
pub struct ForecastLoop {
    map: ZipCodeMap,
    scale: TempScale,
}

impl ForecastLoop {
    pub fn new(map: ZipCodeMap, scale: TempScale) -> Self {
        Self { map, scale }
    }

    /// Prompt for zip codes and print forecasts until the user exits.
    pub fn run(&self) -> Result<()> {
        let mut prompt = ENTER_ZIP_PROMPT;

        loop {
            let Some(input) = read_line(prompt)? else {
                return Ok(());
            };
            let token = input.trim().to_lowercase();

            if EXIT_INPUTS.contains(&token.as_str()) || NO_INPUTS.contains(&token.as_str()) {
                return Ok(());
            }
            if YES_INPUTS.contains(&token.as_str()) {
                prompt = ENTER_VALID_ZIP_PROMPT;
                continue;
            }

            prompt = self.show_forecast(&token);
        }
    }

    /// Run the pipeline for one zip code and report the outcome.
    /// Returns the prompt to issue next.
    fn show_forecast(&self, zip_code: &str) -> &'static str {
        let url = match forecast_url(&self.map, zip_code, self.scale) {
            Ok(url) => url,
            Err(err @ (ForecastError::NoZipCode | ForecastError::InvalidZipCodeFormat)) => {
                println!("\n{err}");
                return ENTER_VALID_ZIP_PROMPT;
            }
            Err(err) => {
                println!("\n{err}");
                return ANY_OTHER_ZIP_PROMPT;
            }
        };

        match fetch_forecast(&url) {
            Ok(pairs) => {
                let lines: Vec<String> = pairs.iter().map(ToString::to_string).collect();
                for line in format_forecasts(&lines) {
                    println!("\n{line}");
                }
            }
            Err(err) => println!("\n{err}"),
        }

        ANY_OTHER_ZIP_PROMPT
    }
}

/// Prompt until the user enters a valid temperature scale. `None`
/// means the user signalled exit.
pub fn prompt_for_temp_scale() -> Result<Option<TempScale>> {
    let mut prompt = ENTER_TEMP_SCALE_PROMPT;

    loop {
        let Some(input) = read_line(prompt)? else {
            return Ok(None);
        };
        let token = input.trim().to_lowercase();

        if EXIT_INPUTS.contains(&token.as_str()) || NO_INPUTS.contains(&token.as_str()) {
            return Ok(None);
        }

        match validate_temp_scale(&token) {
            Ok(scale) => return Ok(Some(scale)),
            Err(err) => {
                println!("\n{err}");
                prompt = ENTER_VALID_TEMP_SCALE_PROMPT;
            }
        }
    }
}

pub fn print_exit_message() {
    println!("\n{EXIT_MESSAGE}");
}

/// Read one line of input. `None` means the user cancelled (Esc) or
/// interrupted (Ctrl-C) the prompt, which counts as the exit signal.
fn read_line(prompt: &str) -> Result<Option<String>> {
    match Text::new(prompt).prompt() {
        Ok(line) => Ok(Some(line)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
