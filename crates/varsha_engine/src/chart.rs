//! Natal input and the derived annual (solar-return) chart.
//!
//! The natal chart arrives fully cast: the caller supplies the birth
//! instant, location, ascendant and all nine sidereal longitudes in one
//! immutable value. The annual chart is rebuilt from the ephemeris at
//! the solar-return instant, with houses counted whole-sign from the
//! annual ascendant.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use varsha_base::{
    ALL_GRAHAS, Graha, Nakshatra, Rashi, Vaar, house_from_asc, nakshatra_from_longitude,
    normalize_360, rashi_from_longitude,
};

use crate::ephemeris::{EphemerisSource, GeoLocation};
use crate::error::VarshaError;
use crate::time::{datetime_from_jd, local_hora_lord, local_vaar};

/// A cast natal chart, supplied by the caller.
///
/// `longitudes` holds sidereal degrees in ALL_GRAHAS order. The engine
/// treats the chart as immutable input and never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub birth_utc: DateTime<Utc>,
    /// Offset of the birth civil clock from UTC, in hours (east positive).
    pub utc_offset_hours: f64,
    pub location: GeoLocation,
    /// Sidereal ascendant longitude, degrees.
    pub ascendant_deg: f64,
    /// Sidereal longitudes, degrees, indexed in ALL_GRAHAS order.
    pub longitudes: [f64; 9],
}

impl NatalChart {
    pub fn validate(&self) -> Result<(), VarshaError> {
        self.location
            .validate()
            .map_err(|e| VarshaError::Validation(e.to_string()))?;
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > 14.0 {
            return Err(VarshaError::Validation(
                "utc_offset_hours must be within [-14, 14]".into(),
            ));
        }
        if !self.ascendant_deg.is_finite() {
            return Err(VarshaError::Validation("ascendant must be finite".into()));
        }
        for (i, lon) in self.longitudes.iter().enumerate() {
            if !lon.is_finite() {
                return Err(VarshaError::Validation(format!(
                    "longitude of {} must be finite",
                    ALL_GRAHAS[i].name()
                )));
            }
        }
        Ok(())
    }

    /// Calendar year of birth (UTC).
    pub fn birth_year(&self) -> i32 {
        self.birth_utc.year()
    }

    pub fn sun_longitude(&self) -> f64 {
        self.longitudes[Graha::Surya.index() as usize]
    }

    pub fn ascendant_rashi(&self) -> Rashi {
        rashi_from_longitude(self.ascendant_deg)
    }
}

/// One body's placement in the annual chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Sidereal longitude, degrees, [0, 360).
    pub longitude_deg: f64,
    pub rashi: Rashi,
    /// Whole-sign house from the annual ascendant, 1..=12.
    pub house: u8,
    pub retrograde: bool,
}

/// The solar-return chart: every body recast at the return instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualChart {
    /// Solar-return instant, JD UT.
    pub return_jd: f64,
    pub return_utc: DateTime<Utc>,
    /// Sidereal ascendant at the return instant, degrees.
    pub ascendant_deg: f64,
    pub ascendant_rashi: Rashi,
    /// Placements in ALL_GRAHAS order.
    pub positions: [GrahaPosition; 9],
    pub moon_rashi: Rashi,
    pub moon_nakshatra: Nakshatra,
    /// Weekday of the return instant at the birth civil clock.
    pub vaar: Vaar,
    /// Lord of the hora running at the return instant.
    pub hora_lord: Graha,
}

impl AnnualChart {
    pub fn position(&self, graha: Graha) -> &GrahaPosition {
        &self.positions[graha.index() as usize]
    }

    pub fn house_of(&self, graha: Graha) -> u8 {
        self.position(graha).house
    }

    /// All grahas occupying a house, in ALL_GRAHAS order.
    pub fn occupants(&self, house: u8) -> Vec<Graha> {
        self.positions
            .iter()
            .filter(|p| p.house == house)
            .map(|p| p.graha)
            .collect()
    }

    /// Sign on a whole-sign house cusp, 1..=12.
    pub fn house_rashi(&self, house: u8) -> Rashi {
        varsha_base::rashi_ahead(self.ascendant_rashi, (house - 1) % 12)
    }

    /// Longitudes of the seven visible planets, SAPTA_GRAHAS order.
    pub fn sapta_longitudes(&self) -> [f64; 7] {
        core::array::from_fn(|i| self.positions[i].longitude_deg)
    }

    /// Houses of the seven visible planets, SAPTA_GRAHAS order.
    pub fn sapta_houses(&self) -> [u8; 7] {
        core::array::from_fn(|i| self.positions[i].house)
    }
}

/// Cast the annual chart at a resolved solar-return instant.
pub fn build_annual_chart<E: EphemerisSource + ?Sized>(
    eph: &E,
    natal: &NatalChart,
    return_jd: f64,
) -> Result<AnnualChart, VarshaError> {
    let ascendant_deg = normalize_360(eph.ascendant_deg(return_jd, &natal.location)?);
    let ascendant_rashi = rashi_from_longitude(ascendant_deg);

    let mut positions: [GrahaPosition; 9] = [GrahaPosition {
        graha: Graha::Surya,
        longitude_deg: 0.0,
        rashi: Rashi::Mesha,
        house: 1,
        retrograde: false,
    }; 9];
    for (i, &graha) in ALL_GRAHAS.iter().enumerate() {
        let state = eph.body_state(graha, return_jd)?;
        let longitude_deg = normalize_360(state.longitude_deg);
        let rashi = rashi_from_longitude(longitude_deg);
        positions[i] = GrahaPosition {
            graha,
            longitude_deg,
            rashi,
            house: house_from_asc(ascendant_rashi, rashi),
            retrograde: state.retrograde,
        };
    }

    let moon = positions[Graha::Chandra.index() as usize];
    let return_utc = datetime_from_jd(return_jd).ok_or_else(|| {
        VarshaError::Calculation(format!("return instant jd {return_jd} out of range"))
    })?;

    Ok(AnnualChart {
        return_jd,
        return_utc,
        ascendant_deg,
        ascendant_rashi,
        positions,
        moon_rashi: moon.rashi,
        moon_nakshatra: nakshatra_from_longitude(moon.longitude_deg),
        vaar: local_vaar(return_jd, natal.utc_offset_hours),
        hora_lord: local_hora_lord(return_jd, natal.utc_offset_hours),
    })
}
