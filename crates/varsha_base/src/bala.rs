//! Pancha Vargiya Bala: the fivefold annual strength score.
//!
//! Five bounded sub-scores, each in [0, 4], so the total can never leave
//! [0, 20]: kshetra (sign dignity), uchcha (exaltation proximity), dig
//! (directional placement), kala (weekday and hora rulership at the
//! return instant), kendradi (house-group strength). Scored for the seven
//! visible planets; the shadow points do not enter the strength contest.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::relations::{Dignity, dignity_in_rashi, exaltation_degree, in_moolatrikona};
use crate::util::arc_distance;
use crate::vaar::Vaar;

/// Maximum of each sub-score.
pub const SUB_SCORE_MAX: f64 = 4.0;

/// Maximum total (five sub-scores).
pub const BALA_TOTAL_MAX: f64 = 20.0;

/// Grade bands over the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalaGrade {
    /// >= 16: excellent.
    Purna,
    /// >= 12: strong.
    Adhika,
    /// >= 8: average.
    Madhya,
    /// >= 4: weak.
    Alpa,
    /// < 4: debilitated-equivalent.
    Heena,
}

impl BalaGrade {
    /// Band a total score. Cut-points are monotonic and exhaustive.
    pub fn from_total(total: f64) -> Self {
        if total >= 16.0 {
            Self::Purna
        } else if total >= 12.0 {
            Self::Adhika
        } else if total >= 8.0 {
            Self::Madhya
        } else if total >= 4.0 {
            Self::Alpa
        } else {
            Self::Heena
        }
    }

    /// Sanskrit name of the band.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purna => "Purna",
            Self::Adhika => "Adhika",
            Self::Madhya => "Madhya",
            Self::Alpa => "Alpa",
            Self::Heena => "Heena",
        }
    }

    /// English descriptor of the band.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Purna => "Excellent",
            Self::Adhika => "Strong",
            Self::Madhya => "Average",
            Self::Alpa => "Weak",
            Self::Heena => "Debilitated",
        }
    }

    /// 1-5 rating equivalent of the band (Heena = 1, Purna = 5).
    pub const fn rating(self) -> u8 {
        match self {
            Self::Purna => 5,
            Self::Adhika => 4,
            Self::Madhya => 3,
            Self::Alpa => 2,
            Self::Heena => 1,
        }
    }
}

/// Five-component strength breakdown for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanchaVargiyaBala {
    pub graha: Graha,
    pub kshetra: f64,
    pub uchcha: f64,
    pub dig: f64,
    pub kala: f64,
    pub kendradi: f64,
    pub total: f64,
    pub grade: BalaGrade,
}

/// Kshetra bala: dignity of the graha in its occupied sign.
///
/// Exalted/own 4.0, moolatrikona 3.5, friendly 3.0, neutral 2.0,
/// inimical 1.0, debilitated 0.0.
pub fn kshetra_bala(graha: Graha, lon: f64) -> f64 {
    match dignity_in_rashi(graha, lon) {
        Dignity::Exalted => 4.0,
        Dignity::OwnSign => {
            if in_moolatrikona(graha, lon) {
                3.5
            } else {
                4.0
            }
        }
        Dignity::Friendly => 3.0,
        Dignity::Neutral => 2.0,
        Dignity::Inimical => 1.0,
        Dignity::Debilitated => 0.0,
    }
}

/// Uchcha bala: 4 x (1 - d/180) where d is the arc distance from the
/// exaltation degree. Full at the exaltation point, zero at debilitation.
pub fn uchcha_bala(graha: Graha, lon: f64) -> f64 {
    match exaltation_degree(graha) {
        Some(exalt) => SUB_SCORE_MAX * (1.0 - arc_distance(lon, exalt) / 180.0),
        None => 0.0,
    }
}

/// House where each sapta graha has full directional strength.
/// Order matches SAPTA_GRAHAS: Sun 10, Moon 4, Mars 10, Mercury 1,
/// Jupiter 1, Venus 4, Saturn 7.
const DIG_POWER_HOUSE: [u8; 7] = [10, 4, 10, 1, 1, 4, 7];

/// Dig bala: 4 x (1 - h/6) where h is the cyclic house distance (0-6)
/// from the graha's power house.
pub fn dig_bala(graha: Graha, house: u8) -> f64 {
    let idx = graha.index() as usize;
    if idx >= DIG_POWER_HOUSE.len() {
        return 0.0;
    }
    let power = DIG_POWER_HOUSE[idx];
    let raw = (house as i16 - power as i16).rem_euclid(12);
    let dist = raw.min(12 - raw) as f64;
    SUB_SCORE_MAX * (1.0 - dist / 6.0)
}

/// Kala bala: 2.0 when the graha rules the weekday of the return instant,
/// plus 2.0 when it rules the running hora.
pub fn kala_bala(graha: Graha, vaar: Vaar, hora_lord: Graha) -> f64 {
    let mut score = 0.0;
    if graha == vaar.lord() {
        score += 2.0;
    }
    if graha == hora_lord {
        score += 2.0;
    }
    score
}

/// Kendradi bala: kendra houses 4.0, panapara 2.0, apoklima 1.0.
pub fn kendradi_bala(house: u8) -> f64 {
    match house {
        1 | 4 | 7 | 10 => 4.0,
        2 | 5 | 8 | 11 => 2.0,
        _ => 1.0,
    }
}

/// Score one graha from its annual-chart placement.
pub fn pancha_vargiya(
    graha: Graha,
    lon: f64,
    house: u8,
    vaar: Vaar,
    hora_lord: Graha,
) -> PanchaVargiyaBala {
    let kshetra = kshetra_bala(graha, lon);
    let uchcha = uchcha_bala(graha, lon);
    let dig = dig_bala(graha, house);
    let kala = kala_bala(graha, vaar, hora_lord);
    let kendradi = kendradi_bala(house);
    let total = kshetra + uchcha + dig + kala + kendradi;
    PanchaVargiyaBala {
        graha,
        kshetra,
        uchcha,
        dig,
        kala,
        kendradi,
        total,
        grade: BalaGrade::from_total(total),
    }
}

/// Score all seven visible planets.
///
/// `lons` and `houses` are indexed in SAPTA_GRAHAS order.
pub fn pancha_vargiya_all(
    lons: &[f64; 7],
    houses: &[u8; 7],
    vaar: Vaar,
    hora_lord: Graha,
) -> [PanchaVargiyaBala; 7] {
    core::array::from_fn(|i| {
        pancha_vargiya(SAPTA_GRAHAS[i], lons[i], houses[i], vaar, hora_lord)
    })
}

/// The strongest graha by total, ties resolved by SAPTA_GRAHAS order.
pub fn strongest_graha(balas: &[PanchaVargiyaBala]) -> Option<Graha> {
    let mut best: Option<&PanchaVargiyaBala> = None;
    for b in balas {
        match best {
            Some(current) if current.total >= b.total => {}
            _ => best = Some(b),
        }
    }
    best.map(|b| b.graha)
}
