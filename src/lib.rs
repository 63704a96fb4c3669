//! Formats durations as human-readable, localized text.
//!
//! A [`Duration`] holds an optional amount per unit, from years down to seconds.
//! Formatting renders every requested unit through a [`Locale`], which takes care of
//! pluralization, and joins the results with a delimiter.
//!
//! Units that are not specified are never written. Units that are zero are left out
//! unless [`FormatOptions::zero`] is enabled.
//!
//! ```
//! use humanspan::{format_duration, format_duration_with, Duration, FormatOptions, Unit};
//!
//! assert_eq!("9 months 2 days", format_duration(&Duration::new().months(9).days(2)));
//!
//! let duration = Duration::new().years(2).months(9).weeks(3);
//!
//! let opts = FormatOptions::new()
//!     .format([Unit::Months, Unit::Weeks])
//!     .delimiter(", ");
//!
//! assert_eq!("9 months, 3 weeks", format_duration_with(&duration, &opts));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod duration;
mod error;
mod format;
mod locale;
mod options;
mod unit;

pub use duration::Duration;
pub use error::{Error, Result};
pub use format::{format_duration, format_duration_with, try_format_duration};
pub use locale::{DistanceOptions, EnUs, Locale, Token};
pub use options::FormatOptions;
pub use unit::Unit;

/// Amount of a single unit in a [`Duration`]
pub type Value = u64;
