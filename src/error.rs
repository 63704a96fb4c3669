/// Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The formatter was called without a duration.
    MissingDuration,

    /// A unit name did not match any known unit.
    UnknownUnit(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDuration => {
                write!(f, "invalid call: duration argument is required")
            }
            Self::UnknownUnit(name) => {
                write!(f, "unknown duration unit: {name:?}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
