//! Solar-return search: the instant the Sun comes back to its natal
//! longitude in the target year.
//!
//! Algorithm: coarse scan + bisection on f(t) = normalize(sun(t) - natal).
//! The normalize function wraps to [-180, +180] so zero-crossings
//! correspond to the return. The Sun advances close to one degree per
//! day, so scanning a window around the birthday anniversary at one-day
//! steps always brackets the unique crossing for a well-formed
//! ephemeris.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use varsha_base::{DAYS_PER_YEAR, Graha, normalize_to_pm180};

use crate::chart::NatalChart;
use crate::ephemeris::EphemerisSource;
use crate::error::VarshaError;
use crate::time::jd_from_datetime;

/// Tuning for the solar-return search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarReturnConfig {
    /// Convergence tolerance on the wrapped longitude difference, degrees.
    /// At the Sun's ~1 deg/day rate, 1e-4 deg is sub-minute timing.
    pub tolerance_deg: f64,
    /// Half-width of the scan window around the anniversary seed, days.
    pub bracket_days: f64,
    /// Coarse scan step, days.
    pub scan_step_days: f64,
    /// Maximum bisection iterations after a bracket is found.
    pub max_iterations: u32,
}

impl Default for SolarReturnConfig {
    fn default() -> Self {
        Self {
            tolerance_deg: 1e-4,
            bracket_days: 20.0,
            scan_step_days: 1.0,
            max_iterations: 64,
        }
    }
}

impl SolarReturnConfig {
    pub fn validate(&self) -> Result<(), VarshaError> {
        if !(self.tolerance_deg.is_finite() && self.tolerance_deg > 0.0) {
            return Err(VarshaError::Validation(
                "tolerance_deg must be positive".into(),
            ));
        }
        if !(self.bracket_days.is_finite() && self.bracket_days > 0.0) {
            return Err(VarshaError::Validation(
                "bracket_days must be positive".into(),
            ));
        }
        if !(self.scan_step_days.is_finite() && self.scan_step_days > 0.0) {
            return Err(VarshaError::Validation(
                "scan_step_days must be positive".into(),
            ));
        }
        if self.scan_step_days > self.bracket_days {
            return Err(VarshaError::Validation(
                "scan_step_days must not exceed bracket_days".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(VarshaError::Validation(
                "max_iterations must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Cooperative cancellation flag, shared between the caller and an
/// in-flight computation. Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. The computation aborts at its next check.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    pub(crate) fn bail_if_cancelled(&self) -> Result<(), VarshaError> {
        if self.is_cancelled() {
            Err(VarshaError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// A sign change is a genuine crossing only when it is not the
/// +180/-180 wrap of the normalized difference.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Locate the solar-return instant (JD UT) for `target_year`.
///
/// Seeds at the birthday anniversary (birth JD plus whole mean years),
/// scans `±bracket_days` for a sign change of the wrapped difference,
/// then bisects until the difference is within `tolerance_deg`.
pub fn find_solar_return<E: EphemerisSource + ?Sized>(
    eph: &E,
    natal: &NatalChart,
    target_year: i32,
    config: &SolarReturnConfig,
    cancel: &CancelToken,
) -> Result<f64, VarshaError> {
    config.validate()?;
    let natal_sun = natal.sun_longitude();
    let birth_jd = jd_from_datetime(&natal.birth_utc);
    let years = f64::from(target_year - natal.birth_year());
    let seed = birth_jd + years * DAYS_PER_YEAR;

    let offset = |t: f64| -> Result<f64, VarshaError> {
        let state = eph.body_state(Graha::Surya, t)?;
        Ok(normalize_to_pm180(state.longitude_deg - natal_sun))
    };

    // Coarse scan for a bracket.
    let scan_end = seed + config.bracket_days;
    let mut t_prev = seed - config.bracket_days;
    let mut f_prev = offset(t_prev)?;
    let mut bracket = None;
    while t_prev < scan_end {
        cancel.bail_if_cancelled()?;
        if f_prev.abs() <= config.tolerance_deg {
            return Ok(t_prev);
        }
        let t_curr = (t_prev + config.scan_step_days).min(scan_end);
        let f_curr = offset(t_curr)?;
        if is_genuine_crossing(f_prev, f_curr) {
            bracket = Some((t_prev, f_prev, t_curr));
            break;
        }
        t_prev = t_curr;
        f_prev = f_curr;
    }
    let (mut t_a, mut f_a, mut t_b) = bracket.ok_or(VarshaError::Convergence(
        "no solar-return crossing inside the scan window",
    ))?;

    // Bisection refinement.
    for _ in 0..config.max_iterations {
        cancel.bail_if_cancelled()?;
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = offset(t_mid)?;
        if f_mid.abs() <= config.tolerance_deg {
            return Ok(t_mid);
        }
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }
    Err(VarshaError::Convergence(
        "bisection did not reach tolerance within max_iterations",
    ))
}
