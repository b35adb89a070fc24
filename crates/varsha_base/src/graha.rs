//! Vedic planet (graha) enum, rashi lordship, and fixed per-graha attributes.
//!
//! The 9 grahas form the foundation of every Varshaphala calculation. Each
//! rashi has a planetary lord, and each graha carries a fixed Vimshottari
//! year-allotment used by the Mudda dasha.
//!
//! Clean-room implementation from standard Tajika texts (Tajika Nilakanthi,
//! Varshaphala convention).

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
/// Tajika aspects are cast only among these seven; the shadow points
/// occupy houses and sectors but never aspect.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Natural benefic/malefic nature of a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Astrological glyph for chart rendering.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Surya => "\u{2609}",
            Self::Chandra => "\u{263D}",
            Self::Mangal => "\u{2642}",
            Self::Buddh => "\u{263F}",
            Self::Guru => "\u{2643}",
            Self::Shukra => "\u{2640}",
            Self::Shani => "\u{2644}",
            Self::Rahu => "\u{260A}",
            Self::Ketu => "\u{260B}",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Vimshottari year-allotment (out of 120), the weight behind the
    /// Mudda dasha proportional split.
    pub const fn mudda_years(self) -> u16 {
        match self {
            Self::Surya => 6,
            Self::Chandra => 10,
            Self::Mangal => 7,
            Self::Buddh => 17,
            Self::Guru => 16,
            Self::Shukra => 20,
            Self::Shani => 19,
            Self::Rahu => 18,
            Self::Ketu => 7,
        }
    }

    /// Natural benefic/malefic classification.
    ///
    /// Chandra and Buddh are taken as benefic in their natural state; the
    /// annual system does not re-grade them by phase or association.
    pub const fn natural_nature(self) -> BeneficNature {
        match self {
            Self::Chandra | Self::Buddh | Self::Guru | Self::Shukra => BeneficNature::Benefic,
            Self::Surya | Self::Mangal | Self::Shani | Self::Rahu | Self::Ketu => {
                BeneficNature::Malefic
            }
        }
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard lordship assignment (universal Vedic convention):
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}
