use std::error::Error;
use std::fmt;

/// Errors raised when a draft is turned into an admission record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    /// A required field was empty at submission.
    MissingField(&'static str),
    /// The age input did not parse as a non-negative integer.
    InvalidAge(String),
}

impl fmt::Display for AdmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(name) => write!(f, "required field missing: {name}"),
            Self::InvalidAge(raw) => write!(f, "invalid age: {raw:?}"),
        }
    }
}

impl Error for AdmissionError {}
