//! Display formatting for extracted forecast text.
//!
//! Three pure string transforms composed in a fixed order. Whitespace
//! collapsing runs first so the spaces inserted for meridiem tokens
//! are not themselves collapsed away.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A whitespace run: the first character is kept, the rest are
/// duplicates.
static DUPLICATE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s)\s+").expect("whitespace pattern must compile"));

/// A meridiem token glued directly to the preceding digit, in any
/// punctuation variant ("6am", "10p.m.").
static MERIDIEM_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9])([ap]\.?m\b\.?)").expect("meridiem boundary pattern must compile")
});

/// A digit-anchored meridiem token in any spelling or casing ("am",
/// "PM", "a.m", "p.m."), to be rewritten as `<letter>.m.`.
static MERIDIEM_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9])(\s)([ap])\.?m\b\.?").expect("meridiem format pattern must compile")
});

/// Collapse each whitespace run to its first character.
fn collapse_whitespace(text: &str) -> String {
    DUPLICATE_WHITESPACE.replace_all(text, "$1").into_owned()
}

/// Insert a single space between a digit and a meridiem token glued to
/// it.
fn space_before_meridiem(text: &str) -> String {
    MERIDIEM_BOUNDARY.replace_all(text, "$1 $2").into_owned()
}

/// Rewrite every digit-anchored meridiem token as exactly
/// `<lowercase letter>.m.`.
fn canonicalize_meridiem(text: &str) -> String {
    MERIDIEM_FORMAT
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}{}.m.", &caps[1], &caps[2], caps[3].to_lowercase())
        })
        .into_owned()
}

/// Format extracted forecast lines for printing.
///
/// Pure and infallible; applying it twice yields the same result as
/// applying it once.
pub fn format_forecasts(forecasts: &[String]) -> Vec<String> {
    forecasts
        .iter()
        .map(|text| canonicalize_meridiem(&space_before_meridiem(&collapse_whitespace(text))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_one(text: &str) -> String {
        format_forecasts(&[text.to_string()])
            .pop()
            .expect("one line in, one line out")
    }

    #[test]
    fn duplicate_spaces_collapse_and_meridiems_canonicalize() {
        assert_eq!(
            format_one("TODAY:  High  near 75. Winds light.6am to 10pm."),
            "TODAY: High near 75. Winds light.6 a.m. to 10 p.m."
        );
    }

    #[test]
    fn whitespace_runs_keep_their_first_character() {
        assert_eq!(format_one("High\n  near 75."), "High\nnear 75.");
        assert_eq!(format_one("a \t b"), "a b");
    }

    #[test]
    fn meridiem_variants_all_canonicalize() {
        assert_eq!(format_one("around 6 am"), "around 6 a.m.");
        assert_eq!(format_one("around 6 a.m"), "around 6 a.m.");
        assert_eq!(format_one("around 6 AM"), "around 6 a.m.");
        assert_eq!(format_one("until 10 PM."), "until 10 p.m.");
        assert_eq!(format_one("until 10pm"), "until 10 p.m.");
        assert_eq!(format_one("until 10p.m."), "until 10 p.m.");
    }

    #[test]
    fn words_containing_meridiem_letters_are_untouched() {
        for text in ["Tampa Bay area", "a damp morning", "ample sunshine", "I am sure"] {
            assert_eq!(format_one(text), text);
        }
    }

    #[test]
    fn formatting_is_idempotent() {
        let once = format_forecasts(&["TODAY:  High  near 75. Winds light.6am to 10pm.".into()]);
        let twice = format_forecasts(&once);
        assert_eq!(once, twice);

        let canonical = vec!["Sunny until 6 p.m., then clear.".to_string()];
        assert_eq!(format_forecasts(&canonical), canonical);
    }

    #[test]
    fn empty_and_plain_lines_pass_through() {
        assert_eq!(format_one(""), "");
        assert_eq!(format_one("Sunny."), "Sunny.");
    }
}
