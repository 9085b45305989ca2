//! Error types for pillar derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_base::BaseError;
use ganzhi_time::TimeError;

/// Errors from pillar derivation and range clipping.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PillarError {
    /// Invalid stem, branch or pillar.
    Base(BaseError),
    /// Error from the solar calendar.
    Time(TimeError),
}

impl Display for PillarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for PillarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Base(e) => Some(e),
            Self::Time(e) => Some(e),
        }
    }
}

impl From<BaseError> for PillarError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}

impl From<TimeError> for PillarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
