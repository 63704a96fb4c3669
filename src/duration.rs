use crate::{Unit, Value};

/// A duration, split into calendar and clock units.
///
/// Every unit is either specified (possibly as zero) or left out.
/// Units that are left out never show up in formatted output.
///
/// ```
/// use humanspan::{Duration, Unit};
///
/// let duration = Duration::new().months(9).days(2);
///
/// assert_eq!(Some(9), duration.get(Unit::Months));
/// assert_eq!(None, duration.get(Unit::Years));
/// assert_eq!("9 months 2 days", humanspan::format_duration(&duration));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, std::hash::Hash, Debug)]
pub struct Duration([Option<Value>; 7]);

impl Duration {
    /// Creates a duration with no units specified.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 7])
    }

    /// Sets the amount of years.
    #[must_use]
    pub const fn years(self, n: Value) -> Self {
        self.with(Unit::Years, n)
    }

    /// Sets the amount of months.
    #[must_use]
    pub const fn months(self, n: Value) -> Self {
        self.with(Unit::Months, n)
    }

    /// Sets the amount of weeks.
    #[must_use]
    pub const fn weeks(self, n: Value) -> Self {
        self.with(Unit::Weeks, n)
    }

    /// Sets the amount of days.
    #[must_use]
    pub const fn days(self, n: Value) -> Self {
        self.with(Unit::Days, n)
    }

    /// Sets the amount of hours.
    #[must_use]
    pub const fn hours(self, n: Value) -> Self {
        self.with(Unit::Hours, n)
    }

    /// Sets the amount of minutes.
    #[must_use]
    pub const fn minutes(self, n: Value) -> Self {
        self.with(Unit::Minutes, n)
    }

    /// Sets the amount of seconds.
    #[must_use]
    pub const fn seconds(self, n: Value) -> Self {
        self.with(Unit::Seconds, n)
    }

    /// Sets the amount of the given unit.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub const fn with(mut self, unit: Unit, n: Value) -> Self {
        self.0[unit.index()] = Some(n);
        self
    }

    /// Returns the amount of the given unit, or `None` if it is not specified.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub const fn get(&self, unit: Unit) -> Option<Value> {
        self.0[unit.index()]
    }

    /// Sets the amount of the given unit.
    #[allow(clippy::indexing_slicing)]
    pub fn set(&mut self, unit: Unit, n: Value) {
        self.0[unit.index()] = Some(n);
    }

    /// Marks the given unit as not specified, returning its previous amount.
    #[allow(clippy::indexing_slicing)]
    pub fn clear(&mut self, unit: Unit) -> Option<Value> {
        self.0[unit.index()].take()
    }

    /// Returns `true` if no unit is specified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Iterates over the specified units in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Unit, Value)> + '_ {
        Unit::ALL
            .into_iter()
            .filter_map(|unit| self.get(unit).map(|n| (unit, n)))
    }

    /// Builds a duration from `(unit name, amount)` pairs.
    ///
    /// Unknown unit names are ignored. If a unit occurs more than once,
    /// the last amount wins.
    ///
    /// ```
    /// use humanspan::Duration;
    ///
    /// let duration = Duration::from_pairs([("years", 2), ("fortnights", 3)]);
    /// assert_eq!(Duration::new().years(2), duration);
    /// ```
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        pairs
            .into_iter()
            .filter_map(|(name, n)| match Unit::try_from(name) {
                Ok(unit) => Some((unit, n)),
                Err(e) => {
                    log::trace!("ignoring duration entry: {e}");
                    None
                }
            })
            .collect()
    }
}

impl FromIterator<(Unit, Value)> for Duration {
    fn from_iter<T: IntoIterator<Item = (Unit, Value)>>(iter: T) -> Self {
        let mut duration = Self::new();

        for (unit, n) in iter {
            duration.set(unit, n);
        }

        duration
    }
}

impl From<std::time::Duration> for Duration {
    /// Splits a clock duration into days, hours, minutes and seconds.
    ///
    /// Sub-second precision is dropped. Larger units are not derived,
    /// because their length depends on the calendar.
    fn from(value: std::time::Duration) -> Self {
        let secs = value.as_secs();

        Self::new()
            .days(secs / 86_400)
            .hours(secs / 3_600 % 24)
            .minutes(secs / 60 % 60)
            .seconds(secs % 60)
    }
}
