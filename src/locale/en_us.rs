use super::{DistanceOptions, Locale, Token};
use crate::Value;
use std::cmp::Ordering;

const COUNT: &str = "{{count}}";

struct Phrase {
    one: &'static str,
    other: &'static str,
}

const fn phrase(one: &'static str, other: &'static str) -> Phrase {
    Phrase { one, other }
}

const fn lookup(token: Token) -> Phrase {
    match token {
        Token::LessThanXSeconds => phrase("less than a second", "less than {{count}} seconds"),
        Token::XSeconds => phrase("1 second", "{{count}} seconds"),
        Token::HalfAMinute => phrase("half a minute", "half a minute"),
        Token::LessThanXMinutes => phrase("less than a minute", "less than {{count}} minutes"),
        Token::XMinutes => phrase("1 minute", "{{count}} minutes"),
        Token::AboutXHours => phrase("about 1 hour", "about {{count}} hours"),
        Token::XHours => phrase("1 hour", "{{count}} hours"),
        Token::XDays => phrase("1 day", "{{count}} days"),
        Token::AboutXWeeks => phrase("about 1 week", "about {{count}} weeks"),
        Token::XWeeks => phrase("1 week", "{{count}} weeks"),
        Token::AboutXMonths => phrase("about 1 month", "about {{count}} months"),
        Token::XMonths => phrase("1 month", "{{count}} months"),
        Token::AboutXYears => phrase("about 1 year", "about {{count}} years"),
        Token::XYears => phrase("1 year", "{{count}} years"),
        Token::OverXYears => phrase("over 1 year", "over {{count}} years"),
        Token::AlmostXYears => phrase("almost 1 year", "almost {{count}} years"),
    }
}

/// English (United States), the default locale.
///
/// ```
/// use humanspan::{DistanceOptions, EnUs, Locale, Token};
///
/// assert_eq!("1 week", EnUs.format_distance(Token::XWeeks, 1, &DistanceOptions::default()));
/// assert_eq!("3 weeks", EnUs.format_distance(Token::XWeeks, 3, &DistanceOptions::default()));
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct EnUs;

impl Locale for EnUs {
    fn format_distance(&self, token: Token, count: Value, options: &DistanceOptions) -> String {
        let phrase = lookup(token);

        let result = if count == 1 {
            phrase.one.to_owned()
        } else {
            phrase.other.replace(COUNT, &count.to_string())
        };

        if !options.add_suffix {
            return result;
        }

        if options.comparison == Some(Ordering::Greater) {
            format!("in {result}")
        } else {
            format!("{result} ago")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(token: Token, count: Value) -> String {
        EnUs.format_distance(token, count, &DistanceOptions::default())
    }

    #[test_log::test]
    fn en_us_singular() {
        assert_eq!("1 year", plain(Token::XYears, 1));
        assert_eq!("1 month", plain(Token::XMonths, 1));
        assert_eq!("1 second", plain(Token::XSeconds, 1));
        assert_eq!("less than a second", plain(Token::LessThanXSeconds, 1));
        assert_eq!("about 1 hour", plain(Token::AboutXHours, 1));
    }

    #[test_log::test]
    fn en_us_plural() {
        assert_eq!("0 years", plain(Token::XYears, 0));
        assert_eq!("9 months", plain(Token::XMonths, 9));
        assert_eq!("30 seconds", plain(Token::XSeconds, 30));
        assert_eq!("less than 10 minutes", plain(Token::LessThanXMinutes, 10));
        assert_eq!("almost 4 years", plain(Token::AlmostXYears, 4));
    }

    #[test_log::test]
    fn en_us_half_a_minute() {
        assert_eq!("half a minute", plain(Token::HalfAMinute, 1));
        assert_eq!("half a minute", plain(Token::HalfAMinute, 30));
    }

    #[test_log::test]
    fn en_us_suffix() {
        let future = DistanceOptions {
            add_suffix: true,
            comparison: Some(Ordering::Greater),
        };
        let past = DistanceOptions {
            add_suffix: true,
            comparison: Some(Ordering::Less),
        };
        let unknown = DistanceOptions {
            add_suffix: true,
            comparison: None,
        };

        assert_eq!("in 2 days", EnUs.format_distance(Token::XDays, 2, &future));
        assert_eq!("2 days ago", EnUs.format_distance(Token::XDays, 2, &past));
        assert_eq!(
            "over 1 year ago",
            EnUs.format_distance(Token::OverXYears, 1, &unknown)
        );
    }

    #[test_log::test]
    fn en_us_comparison_without_suffix() {
        let opts = DistanceOptions {
            add_suffix: false,
            comparison: Some(Ordering::Greater),
        };

        assert_eq!("5 hours", EnUs.format_distance(Token::XHours, 5, &opts));
    }
}
