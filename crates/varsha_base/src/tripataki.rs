//! Tri-Pataki Chakra: the three-flag partition of the annual zodiac.
//!
//! Starting from the annual ascendant, the twelve signs split into three
//! contiguous arcs of four signs each. Every graha (all nine, shadow
//! points included) falls in exactly one arc by its sign. The arc holding
//! the most grahas dominates the year; ties resolve by the fixed sector
//! priority Adya > Madhya > Antya.

use serde::{Deserialize, Serialize};

use crate::graha::{ALL_GRAHAS, Graha};
use crate::rashi::{Rashi, house_from_asc};

/// The three flag sectors, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatakiSector {
    /// Houses 1-4: the foundation arc (self, resources, home ground).
    Adya,
    /// Houses 5-8: the engagement arc (creation, opposition, change).
    Madhya,
    /// Houses 9-12: the culmination arc (fortune, career, release).
    Antya,
}

/// All three sectors in priority order.
pub const ALL_SECTORS: [PatakiSector; 3] = [
    PatakiSector::Adya,
    PatakiSector::Madhya,
    PatakiSector::Antya,
];

impl PatakiSector {
    /// Sanskrit name of the sector.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adya => "Adya",
            Self::Madhya => "Madhya",
            Self::Antya => "Antya",
        }
    }

    /// Descriptive role of the sector.
    pub const fn role(self) -> &'static str {
        match self {
            Self::Adya => "Foundation",
            Self::Madhya => "Engagement",
            Self::Antya => "Culmination",
        }
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        match self {
            Self::Adya => 0,
            Self::Madhya => 1,
            Self::Antya => 2,
        }
    }
}

/// Sector of a sign in a chart rising in `asc`.
pub fn sector_of(asc: Rashi, rashi: Rashi) -> PatakiSector {
    match house_from_asc(asc, rashi) {
        1..=4 => PatakiSector::Adya,
        5..=8 => PatakiSector::Madhya,
        _ => PatakiSector::Antya,
    }
}

/// Occupancy of the three sectors, given each graha's sign.
///
/// `rashis` is indexed in ALL_GRAHAS order. Output preserves ALL_GRAHAS
/// order within each sector.
pub fn sector_occupancy(asc: Rashi, rashis: &[Rashi; 9]) -> [Vec<Graha>; 3] {
    let mut sectors: [Vec<Graha>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for (i, graha) in ALL_GRAHAS.iter().enumerate() {
        let sector = sector_of(asc, rashis[i]);
        sectors[sector.index() as usize].push(*graha);
    }
    sectors
}

/// The dominant sector: most occupants, ties to the earlier sector in
/// priority order.
pub fn dominant_sector(occupancy: &[Vec<Graha>; 3]) -> PatakiSector {
    let mut best = PatakiSector::Adya;
    for sector in ALL_SECTORS {
        if occupancy[sector.index() as usize].len() > occupancy[best.index() as usize].len() {
            best = sector;
        }
    }
    best
}
