//! Rashi (sidereal sign) enum, longitude mapping, and whole-sign houses.
//!
//! The sidereal zodiac is divided into 12 equal rashis of 30 degrees.
//! Annual-chart houses follow the whole-sign rule: the rising sign is
//! house 1, the next sign house 2, and so on.

use serde::{Deserialize, Serialize};

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis from Mesha (Aries) to Meena (Pisces).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western tropical name of the same sign position.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index into ALL_RASHIS (0 = Mesha, 11 = Meena).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }
}

/// Map a sidereal longitude to its rashi.
///
/// Longitude is normalized to [0, 360) first; the index is clamped so a
/// value of exactly 360.0 (possible after float rounding) stays in Meena.
pub fn rashi_from_longitude(lon: f64) -> Rashi {
    let lon = crate::util::normalize_360(lon);
    let idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    ALL_RASHIS[idx as usize]
}

/// Degrees into the occupied rashi, in [0, 30).
pub fn deg_in_rashi(lon: f64) -> f64 {
    crate::util::normalize_360(lon) % RASHI_SPAN
}

/// The rashi `steps` signs ahead of `rashi` (0 = same sign).
pub fn rashi_ahead(rashi: Rashi, steps: u8) -> Rashi {
    let idx = (rashi.index() as u16 + steps as u16) % 12;
    ALL_RASHIS[idx as usize]
}

/// Whole-sign house (1-12) of `rashi` in a chart rising in `asc`.
pub fn house_from_asc(asc: Rashi, rashi: Rashi) -> u8 {
    ((rashi.index() + 12 - asc.index()) % 12) + 1
}
