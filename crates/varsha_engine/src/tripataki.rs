//! Tri-Pataki Chakra assembly for the annual chart.

use serde::{Deserialize, Serialize};
use varsha_base::{Graha, PatakiSector, Rashi, dominant_sector, sector_occupancy};

use crate::chart::AnnualChart;
use crate::texts::{Language, TextProvider};

/// One flag arc and the grahas standing in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorOccupancy {
    pub sector: PatakiSector,
    /// Occupants in ALL_GRAHAS order.
    pub occupants: Vec<Graha>,
}

/// The assembled three-flag chart with its dominant arc read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriPatakiChakra {
    pub sectors: [SectorOccupancy; 3],
    pub dominant: PatakiSector,
    pub interpretation: String,
}

impl TriPatakiChakra {
    pub fn occupants_of(&self, sector: PatakiSector) -> &[Graha] {
        &self.sectors[sector.index() as usize].occupants
    }
}

/// Partition all nine grahas of the annual chart into the three arcs.
pub fn build_tri_pataki<T: TextProvider + ?Sized>(
    texts: &T,
    annual: &AnnualChart,
    language: Language,
) -> TriPatakiChakra {
    let rashis: [Rashi; 9] = core::array::from_fn(|i| annual.positions[i].rashi);
    let occupancy = sector_occupancy(annual.ascendant_rashi, &rashis);
    let dominant = dominant_sector(&occupancy);
    let count = occupancy[dominant.index() as usize].len();
    let interpretation = texts.tri_pataki_interpretation(language, dominant, count);
    let [adya, madhya, antya] = occupancy;
    TriPatakiChakra {
        sectors: [
            SectorOccupancy {
                sector: PatakiSector::Adya,
                occupants: adya,
            },
            SectorOccupancy {
                sector: PatakiSector::Madhya,
                occupants: madhya,
            },
            SectorOccupancy {
                sector: PatakiSector::Antya,
                occupants: antya,
            },
        ],
        dominant,
        interpretation,
    }
}
