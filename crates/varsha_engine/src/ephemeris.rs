//! Ephemeris port: the seam between annual-chart math and position data.
//!
//! The engine never computes raw positions itself. Callers inject an
//! [`EphemerisSource`] that answers sidereal longitudes (with whatever
//! ayanamsha the natal chart was cast in) and the ascendant for a
//! geographic location. Test code injects analytic stand-ins.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use varsha_base::Graha;

/// Sidereal state of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Sidereal ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub retrograde: bool,
}

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(EphemerisError::InvalidLocation(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        if !self.altitude_m.is_finite() {
            return Err(EphemerisError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }
}

/// Position supplier injected by the caller.
///
/// Implementations must be deterministic per instant: the root-finder
/// re-evaluates the Sun many times around the same epoch and relies on
/// the longitude being a continuous, repeatable function of `jd_ut`.
pub trait EphemerisSource: Send + Sync {
    /// Sidereal longitude and retrograde flag for a body at `jd_ut`.
    fn body_state(&self, graha: Graha, jd_ut: f64) -> Result<BodyState, EphemerisError>;

    /// Sidereal ascendant longitude at `jd_ut` for `location`.
    fn ascendant_deg(&self, jd_ut: f64, location: &GeoLocation) -> Result<f64, EphemerisError>;
}

/// Errors from an [`EphemerisSource`] implementation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    InvalidLocation(&'static str),
    EpochOutOfRange { jd_ut: f64 },
    Lookup(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::EpochOutOfRange { jd_ut } => write!(f, "epoch out of range: jd {jd_ut}"),
            Self::Lookup(msg) => write!(f, "ephemeris lookup failed: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
