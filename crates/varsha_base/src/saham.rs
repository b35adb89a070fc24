//! Saham (sensitive point) calculations for the annual chart.
//!
//! 16 classical Tajika sahams, each a fixed linear combination of body
//! longitudes of the form `A + B - C (mod 360)`. All functions are pure
//! math: sidereal longitudes in, sidereal longitude out, always in
//! [0, 360). The day-birth formula set is used throughout.
//!
//! Clean-room implementation from standard Tajika texts (Tajika
//! Nilakanthi, Varshaphala convention).

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 16 saham types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Saham {
    Punya,
    Vidya,
    Yasha,
    Mitra,
    Mahatmya,
    Asha,
    Samartha,
    Bhratri,
    Gaurava,
    Pitri,
    Matri,
    Putra,
    Jeeva,
    Karma,
    Roga,
    Vivaha,
}

/// All 16 sahams in order.
pub const ALL_SAHAMS: [Saham; 16] = [
    Saham::Punya,
    Saham::Vidya,
    Saham::Yasha,
    Saham::Mitra,
    Saham::Mahatmya,
    Saham::Asha,
    Saham::Samartha,
    Saham::Bhratri,
    Saham::Gaurava,
    Saham::Pitri,
    Saham::Matri,
    Saham::Putra,
    Saham::Jeeva,
    Saham::Karma,
    Saham::Roga,
    Saham::Vivaha,
];

impl Saham {
    /// Sanskrit name of the saham.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Punya => "Punya",
            Self::Vidya => "Vidya",
            Self::Yasha => "Yasha",
            Self::Mitra => "Mitra",
            Self::Mahatmya => "Mahatmya",
            Self::Asha => "Asha",
            Self::Samartha => "Samartha",
            Self::Bhratri => "Bhratri",
            Self::Gaurava => "Gaurava",
            Self::Pitri => "Pitri",
            Self::Matri => "Matri",
            Self::Putra => "Putra",
            Self::Jeeva => "Jeeva",
            Self::Karma => "Karma",
            Self::Roga => "Roga",
            Self::Vivaha => "Vivaha",
        }
    }

    /// English gloss of the saham's signification.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Punya => "Fortune",
            Self::Vidya => "Learning",
            Self::Yasha => "Fame",
            Self::Mitra => "Friends",
            Self::Mahatmya => "Greatness",
            Self::Asha => "Hopes",
            Self::Samartha => "Capability",
            Self::Bhratri => "Siblings",
            Self::Gaurava => "Honor",
            Self::Pitri => "Father",
            Self::Matri => "Mother",
            Self::Putra => "Children",
            Self::Jeeva => "Livelihood",
            Self::Karma => "Action",
            Self::Roga => "Illness",
            Self::Vivaha => "Marriage",
        }
    }

    /// 0-based index into ALL_SAHAMS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Punya => 0,
            Self::Vidya => 1,
            Self::Yasha => 2,
            Self::Mitra => 3,
            Self::Mahatmya => 4,
            Self::Asha => 5,
            Self::Samartha => 6,
            Self::Bhratri => 7,
            Self::Gaurava => 8,
            Self::Pitri => 9,
            Self::Matri => 10,
            Self::Putra => 11,
            Self::Jeeva => 12,
            Self::Karma => 13,
            Self::Roga => 14,
            Self::Vivaha => 15,
        }
    }
}

/// Punya Saham (fortune).
///
/// Formula: `(moon - sun + lagna) % 360`
pub fn punya_saham(moon: f64, sun: f64, lagna: f64) -> f64 {
    normalize_360(moon - sun + lagna)
}

/// Vidya Saham (learning).
///
/// Formula: `(sun - moon + lagna) % 360`
pub fn vidya_saham(sun: f64, moon: f64, lagna: f64) -> f64 {
    normalize_360(sun - moon + lagna)
}

/// Yasha Saham (fame).
///
/// Formula: `(jupiter - punya + lagna) % 360`
pub fn yasha_saham(jupiter: f64, punya: f64, lagna: f64) -> f64 {
    normalize_360(jupiter - punya + lagna)
}

/// Mitra Saham (friends).
///
/// Formula: `(jupiter - punya + venus) % 360`
pub fn mitra_saham(jupiter: f64, punya: f64, venus: f64) -> f64 {
    normalize_360(jupiter - punya + venus)
}

/// Mahatmya Saham (greatness).
///
/// Formula: `(punya - mars + lagna) % 360`
pub fn mahatmya_saham(punya: f64, mars: f64, lagna: f64) -> f64 {
    normalize_360(punya - mars + lagna)
}

/// Asha Saham (hopes).
///
/// Formula: `(saturn - mars + lagna) % 360`
pub fn asha_saham(saturn: f64, mars: f64, lagna: f64) -> f64 {
    normalize_360(saturn - mars + lagna)
}

/// Samartha Saham (capability).
///
/// Formula: `(mars - lagna_lord + lagna) % 360`
pub fn samartha_saham(mars: f64, lagna_lord: f64, lagna: f64) -> f64 {
    normalize_360(mars - lagna_lord + lagna)
}

/// Bhratri Saham (siblings).
///
/// Formula: `(jupiter - saturn + lagna) % 360`
pub fn bhratri_saham(jupiter: f64, saturn: f64, lagna: f64) -> f64 {
    normalize_360(jupiter - saturn + lagna)
}

/// Gaurava Saham (honor).
///
/// Formula: `(jupiter - moon + sun) % 360`
pub fn gaurava_saham(jupiter: f64, moon: f64, sun: f64) -> f64 {
    normalize_360(jupiter - moon + sun)
}

/// Pitri Saham (father).
///
/// Formula: `(saturn - sun + lagna) % 360`
pub fn pitri_saham(saturn: f64, sun: f64, lagna: f64) -> f64 {
    normalize_360(saturn - sun + lagna)
}

/// Matri Saham (mother).
///
/// Formula: `(moon - venus + lagna) % 360`
pub fn matri_saham(moon: f64, venus: f64, lagna: f64) -> f64 {
    normalize_360(moon - venus + lagna)
}

/// Putra Saham (children).
///
/// Formula: `(jupiter - moon + lagna) % 360`
pub fn putra_saham(jupiter: f64, moon: f64, lagna: f64) -> f64 {
    normalize_360(jupiter - moon + lagna)
}

/// Jeeva Saham (livelihood).
///
/// Formula: `(saturn - jupiter + lagna) % 360`
pub fn jeeva_saham(saturn: f64, jupiter: f64, lagna: f64) -> f64 {
    normalize_360(saturn - jupiter + lagna)
}

/// Karma Saham (action).
///
/// Formula: `(mars - mercury + lagna) % 360`
pub fn karma_saham(mars: f64, mercury: f64, lagna: f64) -> f64 {
    normalize_360(mars - mercury + lagna)
}

/// Roga Saham (illness).
///
/// Formula: `(lagna - moon + lagna) % 360`
pub fn roga_saham(lagna: f64, moon: f64) -> f64 {
    normalize_360(lagna - moon + lagna)
}

/// Vivaha Saham (marriage).
///
/// Formula: `(venus - saturn + lagna) % 360`
pub fn vivaha_saham(venus: f64, saturn: f64, lagna: f64) -> f64 {
    normalize_360(venus - saturn + lagna)
}

// ---------------------------------------------------------------------------
// Batch computation
// ---------------------------------------------------------------------------

/// Input longitudes for computing all 16 sahams.
///
/// All values are sidereal ecliptic longitudes in degrees. `lagna_lord`
/// is the longitude of the annual ascendant's ruling planet.
#[derive(Debug, Clone, Copy)]
pub struct SahamInputs {
    pub sun: f64,
    pub moon: f64,
    pub mars: f64,
    pub mercury: f64,
    pub jupiter: f64,
    pub venus: f64,
    pub saturn: f64,
    pub lagna: f64,
    pub lagna_lord: f64,
}

/// Compute all 16 sahams from one input set.
///
/// Punya is computed first; Yasha, Mitra, and Mahatmya consume it.
pub fn all_sahams(inputs: &SahamInputs) -> [(Saham, f64); 16] {
    let punya = punya_saham(inputs.moon, inputs.sun, inputs.lagna);
    [
        (Saham::Punya, punya),
        (Saham::Vidya, vidya_saham(inputs.sun, inputs.moon, inputs.lagna)),
        (Saham::Yasha, yasha_saham(inputs.jupiter, punya, inputs.lagna)),
        (Saham::Mitra, mitra_saham(inputs.jupiter, punya, inputs.venus)),
        (Saham::Mahatmya, mahatmya_saham(punya, inputs.mars, inputs.lagna)),
        (Saham::Asha, asha_saham(inputs.saturn, inputs.mars, inputs.lagna)),
        (
            Saham::Samartha,
            samartha_saham(inputs.mars, inputs.lagna_lord, inputs.lagna),
        ),
        (
            Saham::Bhratri,
            bhratri_saham(inputs.jupiter, inputs.saturn, inputs.lagna),
        ),
        (
            Saham::Gaurava,
            gaurava_saham(inputs.jupiter, inputs.moon, inputs.sun),
        ),
        (Saham::Pitri, pitri_saham(inputs.saturn, inputs.sun, inputs.lagna)),
        (Saham::Matri, matri_saham(inputs.moon, inputs.venus, inputs.lagna)),
        (Saham::Putra, putra_saham(inputs.jupiter, inputs.moon, inputs.lagna)),
        (Saham::Jeeva, jeeva_saham(inputs.saturn, inputs.jupiter, inputs.lagna)),
        (Saham::Karma, karma_saham(inputs.mars, inputs.mercury, inputs.lagna)),
        (Saham::Roga, roga_saham(inputs.lagna, inputs.moon)),
        (
            Saham::Vivaha,
            vivaha_saham(inputs.venus, inputs.saturn, inputs.lagna),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    fn sample_inputs() -> SahamInputs {
        SahamInputs {
            sun: 15.0,
            moon: 100.0,
            mars: 310.0,
            mercury: 28.0,
            jupiter: 95.0,
            venus: 350.0,
            saturn: 200.0,
            lagna: 75.0,
            lagna_lord: 28.0,
        }
    }

    #[test]
    fn punya_known_value() {
        // 100 - 15 + 75 = 160.
        assert!((punya_saham(100.0, 15.0, 75.0) - 160.0).abs() < EPS);
    }

    #[test]
    fn punya_wraps_negative() {
        // 10 - 350 + 20 = -320 -> 40.
        assert!((punya_saham(10.0, 350.0, 20.0) - 40.0).abs() < EPS);
    }

    #[test]
    fn all_sahams_in_range() {
        let results = all_sahams(&sample_inputs());
        assert_eq!(results.len(), 16);
        for (saham, deg) in results {
            assert!(
                (0.0..360.0).contains(&deg),
                "{} out of range: {deg}",
                saham.name()
            );
        }
    }

    #[test]
    fn batch_matches_individual() {
        let inputs = sample_inputs();
        let results = all_sahams(&inputs);
        let punya = punya_saham(inputs.moon, inputs.sun, inputs.lagna);
        assert!((results[0].1 - punya).abs() < EPS);
        assert!(
            (results[2].1 - yasha_saham(inputs.jupiter, punya, inputs.lagna)).abs() < EPS
        );
        assert!(
            (results[15].1 - vivaha_saham(inputs.venus, inputs.saturn, inputs.lagna)).abs()
                < EPS
        );
    }

    #[test]
    fn batch_order_matches_enum() {
        for (i, (saham, _)) in all_sahams(&sample_inputs()).iter().enumerate() {
            assert_eq!(saham.index() as usize, i);
            assert_eq!(*saham, ALL_SAHAMS[i]);
        }
    }

    #[test]
    fn roga_doubles_lagna() {
        // lagna 75, moon 100: 75 - 100 + 75 = 50.
        assert!((roga_saham(75.0, 100.0) - 50.0).abs() < EPS);
    }
}
