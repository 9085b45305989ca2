//! Error types for calendar conversion and term-table loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the solar calendar.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A date or time field is outside the supported calendar.
    InvalidCalendarDate(String),
    /// The term table holds no solar terms for this year.
    NoData(i32),
    /// Term table parsing failed.
    TableParse { line: usize, message: String },
    /// I/O error.
    Io(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCalendarDate(msg) => write!(f, "invalid calendar date: {msg}"),
            Self::NoData(year) => write!(f, "no solar-term data for year {year}"),
            Self::TableParse { line, message } => {
                write!(f, "term table parse error at line {line}: {message}")
            }
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::io::Error> for TimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
