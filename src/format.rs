use crate::{locale::DistanceOptions, Duration, FormatOptions};

/// Formats a duration using the default options.
///
/// Units are written from years to seconds, leaving out units that are
/// not specified or zero.
///
/// ```
/// use humanspan::{format_duration, Duration};
///
/// let duration = Duration::new()
///     .years(2)
///     .months(9)
///     .weeks(1)
///     .days(7)
///     .hours(5)
///     .minutes(9)
///     .seconds(30);
///
/// assert_eq!(
///     "2 years 9 months 1 week 7 days 5 hours 9 minutes 30 seconds",
///     format_duration(&duration),
/// );
/// ```
#[must_use]
pub fn format_duration(duration: &Duration) -> String {
    format_duration_with(duration, &FormatOptions::default())
}

/// Formats a duration.
///
/// Each unit in the options' format list is rendered by the locale, in
/// list order, and the results are joined by the delimiter. A unit is
/// skipped if the duration does not specify it, or if its value is zero
/// and zeros are not enabled.
///
/// Returns an empty string if no unit is rendered.
#[must_use]
pub fn format_duration_with(duration: &Duration, options: &FormatOptions<'_>) -> String {
    let distance_opts = DistanceOptions::default();

    let chunks = options
        .units
        .iter()
        .filter_map(|&unit| {
            let Some(n) = duration.get(unit) else {
                log::trace!("skipping {unit}: not specified");
                return None;
            };

            if n == 0 && !options.zero {
                log::trace!("skipping {unit}: zero");
                return None;
            }

            Some(
                options
                    .locale
                    .format_distance(unit.token(), n, &distance_opts),
            )
        })
        .collect::<Vec<_>>();

    chunks.join(options.delimiter)
}

/// Formats a duration that may be missing, e.g. one coming from an
/// untyped call boundary.
///
/// # Errors
///
/// Returns [`Error::MissingDuration`](crate::Error::MissingDuration) if no duration is given.
///
/// ```
/// use humanspan::{try_format_duration, Duration, Error, FormatOptions};
///
/// let opts = FormatOptions::default();
///
/// assert_eq!(
///     "9 months",
///     try_format_duration(Some(&Duration::new().years(0).months(9)), &opts)?,
/// );
/// assert_eq!(Err(Error::MissingDuration), try_format_duration(None, &opts));
/// #
/// # Ok::<(), humanspan::Error>(())
/// ```
pub fn try_format_duration(
    duration: Option<&Duration>,
    options: &FormatOptions<'_>,
) -> crate::Result<String> {
    let Some(duration) = duration else {
        return Err(crate::Error::MissingDuration);
    };

    Ok(format_duration_with(duration, options))
}
