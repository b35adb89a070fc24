//! Tajika aspects over the annual chart.
//!
//! The geometry (classification, orb, strength, applying) lives in
//! `varsha_base`; this module supplies the instantaneous speeds by
//! sampling the ephemeris a small step ahead, then decorates each
//! matched pair with the houses it touches and an effect line.

use serde::{Deserialize, Serialize};
use varsha_base::{AspectGeometry, SAPTA_GRAHAS, aspect_pairs, normalize_to_pm180};

use crate::chart::AnnualChart;
use crate::ephemeris::EphemerisSource;
use crate::error::VarshaError;
use crate::texts::{Language, TextProvider};

/// Forward-difference step for speed estimation, days.
pub const SPEED_SAMPLE_DAYS: f64 = 0.01;

/// One matched aspect with its chart context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TajikaAspectResult {
    pub geometry: AspectGeometry,
    /// House of the first graha, 1..=12.
    pub house_a: u8,
    /// House of the second graha, 1..=12.
    pub house_b: u8,
    pub effect: String,
}

/// Instantaneous longitude speeds of the seven visible planets,
/// degrees per day, SAPTA_GRAHAS order.
pub fn sapta_speeds<E: EphemerisSource + ?Sized>(
    eph: &E,
    annual: &AnnualChart,
) -> Result<[f64; 7], VarshaError> {
    let mut speeds = [0.0f64; 7];
    for (i, &graha) in SAPTA_GRAHAS.iter().enumerate() {
        let ahead = eph
            .body_state(graha, annual.return_jd + SPEED_SAMPLE_DAYS)?
            .longitude_deg;
        let now = annual.positions[i].longitude_deg;
        speeds[i] = normalize_to_pm180(ahead - now) / SPEED_SAMPLE_DAYS;
    }
    Ok(speeds)
}

/// All Tajika aspects among the seven visible planets of the annual
/// chart. Pairs outside every orb window produce no row.
pub fn compute_tajika_aspects<E: EphemerisSource + ?Sized, T: TextProvider + ?Sized>(
    eph: &E,
    texts: &T,
    annual: &AnnualChart,
    language: Language,
) -> Result<Vec<TajikaAspectResult>, VarshaError> {
    let lons = annual.sapta_longitudes();
    let speeds = sapta_speeds(eph, annual)?;
    let results = aspect_pairs(&lons, &speeds)
        .into_iter()
        .map(|geometry| TajikaAspectResult {
            house_a: annual.house_of(geometry.graha_a),
            house_b: annual.house_of(geometry.graha_b),
            effect: texts.aspect_effect(language, &geometry),
            geometry,
        })
        .collect();
    Ok(results)
}
