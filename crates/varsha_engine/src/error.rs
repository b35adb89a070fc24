//! Error taxonomy for annual-chart computation.
//!
//! Every error is terminal for the single request. The engine never
//! retries internally: the computation is deterministic, so a retry on
//! unchanged input cannot change the outcome.

use std::error::Error;
use std::fmt::{Display, Formatter};

use varsha_base::VedicError;

use crate::ephemeris::EphemerisError;

/// Errors surfaced by [`crate::VarshaphalaEngine`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VarshaError {
    /// Bad caller input: a target year before birth, a malformed chart,
    /// or an out-of-range configuration value.
    Validation(String),
    /// Root-finding failed to bracket or converge on the solar return.
    Convergence(&'static str),
    /// An internal arithmetic precondition failed, including ephemeris
    /// evaluation errors.
    Calculation(String),
    /// The caller cancelled the in-flight computation.
    Cancelled,
}

impl Display for VarshaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation error: {msg}"),
            Self::Convergence(msg) => write!(f, "convergence error: {msg}"),
            Self::Calculation(msg) => write!(f, "calculation error: {msg}"),
            Self::Cancelled => write!(f, "computation cancelled"),
        }
    }
}

impl Error for VarshaError {}

impl From<EphemerisError> for VarshaError {
    fn from(e: EphemerisError) -> Self {
        Self::Calculation(e.to_string())
    }
}

impl From<VedicError> for VarshaError {
    fn from(e: VedicError) -> Self {
        Self::Calculation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_variants() {
        assert_eq!(
            VarshaError::Validation("year 1980 precedes birth year 1990".into()).to_string(),
            "validation error: year 1980 precedes birth year 1990"
        );
        assert_eq!(
            VarshaError::Convergence("no bracket").to_string(),
            "convergence error: no bracket"
        );
        assert_eq!(VarshaError::Cancelled.to_string(), "computation cancelled");
    }

    #[test]
    fn wraps_base_error() {
        let e: VarshaError = VedicError::InvalidInput("year length must be at least 1 day").into();
        assert!(matches!(e, VarshaError::Calculation(_)));
    }
}
