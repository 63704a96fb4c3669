mod en_us;

pub use en_us::EnUs;

use crate::Value;
use std::cmp::Ordering;

/// Identifies a localized distance phrase, such as "N months" or "about N hours".
#[derive(Clone, Copy, PartialEq, Eq, std::hash::Hash, Debug)]
#[allow(missing_docs)]
pub enum Token {
    LessThanXSeconds,
    XSeconds,
    HalfAMinute,
    LessThanXMinutes,
    XMinutes,
    AboutXHours,
    XHours,
    XDays,
    AboutXWeeks,
    XWeeks,
    AboutXMonths,
    XMonths,
    AboutXYears,
    XYears,
    OverXYears,
    AlmostXYears,
}

impl Token {
    /// Returns the identifier of the token, e.g. `xMonths`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LessThanXSeconds => "lessThanXSeconds",
            Self::XSeconds => "xSeconds",
            Self::HalfAMinute => "halfAMinute",
            Self::LessThanXMinutes => "lessThanXMinutes",
            Self::XMinutes => "xMinutes",
            Self::AboutXHours => "aboutXHours",
            Self::XHours => "xHours",
            Self::XDays => "xDays",
            Self::AboutXWeeks => "aboutXWeeks",
            Self::XWeeks => "xWeeks",
            Self::AboutXMonths => "aboutXMonths",
            Self::XMonths => "xMonths",
            Self::AboutXYears => "aboutXYears",
            Self::XYears => "xYears",
            Self::OverXYears => "overXYears",
            Self::AlmostXYears => "almostXYears",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options passed to [`Locale::format_distance`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct DistanceOptions {
    /// If `true`, the phrase is rendered relative to now ("in 2 days", "2 days ago").
    pub add_suffix: bool,

    /// Whether the distance lies in the future (`Greater`) or the past.
    pub comparison: Option<Ordering>,
}

/// Renders distance phrases for a language.
///
/// Implementations should be free of side effects, so formatting stays deterministic.
///
/// Any `Fn(Token, Value) -> String` closure can be used as a locale:
///
/// ```
/// use humanspan::{format_duration_with, Duration, FormatOptions, Token};
///
/// let terse = |token: Token, count: u64| match token {
///     Token::XHours => format!("{count}h"),
///     Token::XMinutes => format!("{count}m"),
///     _ => format!("{count}?"),
/// };
///
/// let opts = FormatOptions::new().locale(&terse);
///
/// assert_eq!(
///     "5h 9m",
///     format_duration_with(&Duration::new().hours(5).minutes(9), &opts),
/// );
/// ```
pub trait Locale {
    /// Renders `count` in terms of the phrase identified by `token`.
    fn format_distance(&self, token: Token, count: Value, options: &DistanceOptions) -> String;
}

impl<F> Locale for F
where
    F: Fn(Token, Value) -> String,
{
    fn format_distance(&self, token: Token, count: Value, _: &DistanceOptions) -> String {
        self(token, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn token_display() {
        assert_eq!("xMonths", Token::XMonths.to_string());
        assert_eq!("halfAMinute", Token::HalfAMinute.to_string());
    }

    #[test_log::test]
    fn closure_locale() {
        let locale = |token: Token, count: Value| format!("{count} {token}");

        assert_eq!(
            "3 xDays",
            locale.format_distance(
                Token::XDays,
                3,
                &DistanceOptions {
                    add_suffix: true,
                    comparison: Some(Ordering::Greater),
                },
            ),
        );
    }
}
