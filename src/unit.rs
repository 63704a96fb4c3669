use crate::locale::Token;

/// A duration unit.
///
/// Units are ordered from largest to smallest, so sorting a list of units
/// yields the canonical order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash, Debug)]
pub enum Unit {
    /// Calendar years
    Years,

    /// Calendar months
    Months,

    /// Weeks
    Weeks,

    /// Days
    Days,

    /// Hours
    Hours,

    /// Minutes
    Minutes,

    /// Seconds
    Seconds,
}

impl Unit {
    /// All units in canonical, descending order of magnitude.
    pub const ALL: [Self; 7] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    /// Returns the lowercase plural name of the unit, e.g. `months`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    /// Returns the locale token used to render an exact count of this unit.
    #[must_use]
    pub const fn token(self) -> Token {
        match self {
            Self::Years => Token::XYears,
            Self::Months => Token::XMonths,
            Self::Weeks => Token::XWeeks,
            Self::Days => Token::XDays,
            Self::Hours => Token::XHours,
            Self::Minutes => Token::XMinutes,
            Self::Seconds => Token::XSeconds,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Unit {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.name() == value)
            .ok_or_else(|| crate::Error::UnknownUnit(value.to_owned()))
    }
}

impl std::str::FromStr for Unit {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test_log::test]
    fn unit_canonical_order() {
        let mut units = vec![Unit::Seconds, Unit::Years, Unit::Days, Unit::Months];
        units.sort();

        assert_eq!(
            vec![Unit::Years, Unit::Months, Unit::Days, Unit::Seconds],
            units
        );
    }

    #[test_log::test]
    fn unit_parse() {
        for unit in Unit::ALL {
            assert_eq!(Ok(unit), unit.name().parse::<Unit>());
        }
    }

    #[test_log::test]
    fn unit_parse_unknown() {
        assert_eq!(
            Err(Error::UnknownUnit("fortnights".into())),
            Unit::try_from("fortnights"),
        );

        // names are case sensitive
        assert!(Unit::try_from("Years").is_err());
        assert!(Unit::try_from("year").is_err());
    }

    #[test_log::test]
    fn unit_token_is_capitalized_name() {
        for unit in Unit::ALL {
            let name = unit.name();
            let mut chars = name.chars();

            let expected = chars.next().map_or_else(String::new, |first| {
                format!("x{}{}", first.to_ascii_uppercase(), chars.as_str())
            });

            assert_eq!(expected, unit.token().as_str());
        }
    }
}
