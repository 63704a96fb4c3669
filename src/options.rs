use crate::{locale::Locale, EnUs, Unit};

/// Options for [`format_duration_with`](crate::format_duration_with).
///
/// ```
/// use humanspan::{format_duration_with, Duration, FormatOptions, Unit};
///
/// let duration = Duration::new().years(0).months(9).weeks(1);
///
/// let opts = FormatOptions::new()
///     .format([Unit::Years, Unit::Months])
///     .zero(true)
///     .delimiter(", ");
///
/// assert_eq!("0 years, 9 months", format_duration_with(&duration, &opts));
/// ```
#[derive(Clone)]
pub struct FormatOptions<'a> {
    pub(crate) units: Vec<Unit>,
    pub(crate) zero: bool,
    pub(crate) delimiter: &'a str,
    pub(crate) locale: &'a dyn Locale,
}

impl Default for FormatOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormatOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatOptions")
            .field("units", &self.units)
            .field("zero", &self.zero)
            .field("delimiter", &self.delimiter)
            .finish_non_exhaustive()
    }
}

impl<'a> FormatOptions<'a> {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            units: Unit::ALL.to_vec(),
            zero: false,
            delimiter: " ",
            locale: &EnUs,
        }
    }

    /// Sets the units to format, in output order.
    ///
    /// A unit listed more than once is formatted more than once.
    ///
    /// Default = all units, from years to seconds
    #[must_use]
    pub fn format<I: IntoIterator<Item = Unit>>(mut self, units: I) -> Self {
        self.units = units.into_iter().collect();
        self
    }

    /// Sets the units to format by name, in output order.
    ///
    /// Unknown unit names are ignored.
    #[must_use]
    pub fn format_names<'n, I: IntoIterator<Item = &'n str>>(self, names: I) -> Self {
        let units = names
            .into_iter()
            .filter_map(|name| match Unit::try_from(name) {
                Ok(unit) => Some(unit),
                Err(e) => {
                    log::trace!("ignoring format entry: {e}");
                    None
                }
            })
            .collect::<Vec<_>>();

        self.format(units)
    }

    /// If `true`, units with a value of zero are included in the output.
    ///
    /// Default = false
    #[must_use]
    pub fn zero(mut self, enabled: bool) -> Self {
        self.zero = enabled;
        self
    }

    /// Sets the string placed between formatted units.
    ///
    /// Default = `" "`
    #[must_use]
    pub fn delimiter(mut self, delimiter: &'a str) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the locale used to render each unit.
    ///
    /// Default = [`EnUs`]
    #[must_use]
    pub fn locale(mut self, locale: &'a dyn Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the units to format, in output order.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn options_defaults() {
        let opts = FormatOptions::default();

        assert_eq!(&Unit::ALL, opts.units());
        assert!(!opts.zero);
        assert_eq!(" ", opts.delimiter);
    }

    #[test_log::test]
    fn options_format_names() {
        let opts = FormatOptions::new().format_names(["days", "eons", "hours", "Hours", "days"]);

        assert_eq!(&[Unit::Days, Unit::Hours, Unit::Days], opts.units());
    }

    #[test_log::test]
    fn options_format_empty() {
        let opts = FormatOptions::new().format([]);
        assert!(opts.units().is_empty());
    }
}
