//! Error type for the pure-math Tajika calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Varshaphala base calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VedicError {
    /// A caller-supplied parameter was outside its valid domain.
    InvalidInput(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for VedicError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_input() {
        let e = VedicError::InvalidInput("year length must be at least 1 day");
        assert_eq!(
            e.to_string(),
            "invalid input: year length must be at least 1 day"
        );
    }
}
