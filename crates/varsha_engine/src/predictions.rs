//! Per-house predictive scores for the annual chart.
//!
//! Each of the twelve houses earns a composite score from its
//! occupants, the placement of its lord, and the strong Tajika aspects
//! touching it. The score lives on the same 0-20 scale as the Pancha
//! Vargiya total, so the grade bands and 1-5 ratings carry over.

use serde::{Deserialize, Serialize};
use varsha_base::{
    AspectNature, AspectStrength, BalaGrade, BeneficNature, Graha, Rashi, rashi_lord,
};

use crate::aspects::TajikaAspectResult;
use crate::chart::AnnualChart;
use crate::muntha::Muntha;
use crate::texts::{Language, TextProvider};
use crate::year_lord::YearLord;

const BASE_SCORE: f64 = 10.0;
const OCCUPANT_POINTS: f64 = 2.0;
const LORD_PLACEMENT_POINTS: f64 = 3.0;
const ASPECT_POINTS: f64 = 2.0;

/// Signification keywords, houses 1 through 12.
const HOUSE_KEYWORDS: [&[&str]; 12] = [
    &["self", "vitality", "direction"],
    &["wealth", "family", "speech"],
    &["courage", "siblings", "effort"],
    &["home", "mother", "property"],
    &["children", "creativity", "intellect"],
    &["health", "service", "rivals"],
    &["partnership", "marriage", "contracts"],
    &["longevity", "obstacles", "shared assets"],
    &["fortune", "dharma", "long travel"],
    &["career", "status", "authority"],
    &["gains", "friends", "aspirations"],
    &["expenses", "seclusion", "release"],
];

/// One house's outlook for the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePrediction {
    /// House number, 1..=12.
    pub house: u8,
    /// Sign on the whole-sign cusp.
    pub rashi: Rashi,
    pub lord: Graha,
    /// The lord's own house in the annual chart.
    pub lord_house: u8,
    /// Occupants in ALL_GRAHAS order.
    pub occupants: Vec<Graha>,
    /// Composite score on the 0-20 bala scale.
    pub score: f64,
    pub grade: BalaGrade,
    /// 1-5 rating derived from the grade.
    pub rating: u8,
    pub keywords: Vec<String>,
    pub narrative: String,
    /// Notable placements seated in this house.
    pub events: Vec<String>,
}

/// Points for the house lord's own seat: kendra and trikona houses
/// lift the house, dusthana houses drag it.
fn lord_placement_points(lord_house: u8) -> f64 {
    match lord_house {
        1 | 4 | 5 | 7 | 9 | 10 => LORD_PLACEMENT_POINTS,
        6 | 8 | 12 => -LORD_PLACEMENT_POINTS,
        _ => 0.0,
    }
}

/// Points from one aspect touching the house. Only the two strongest
/// bands move the score; weaker contacts read as background noise.
fn aspect_points(result: &TajikaAspectResult) -> f64 {
    if result.geometry.strength > AspectStrength::Strong {
        return 0.0;
    }
    match result.geometry.aspect.nature() {
        AspectNature::Harmonious => ASPECT_POINTS,
        AspectNature::Tense => -ASPECT_POINTS,
        AspectNature::Neutral => 0.0,
    }
}

/// Score all twelve houses.
pub fn score_houses<T: TextProvider + ?Sized>(
    texts: &T,
    annual: &AnnualChart,
    aspects: &[TajikaAspectResult],
    year_lord: &YearLord,
    muntha: &Muntha,
    language: Language,
) -> Vec<HousePrediction> {
    (1..=12u8)
        .map(|house| {
            let rashi = annual.house_rashi(house);
            let lord = rashi_lord(rashi);
            let lord_house = annual.house_of(lord);
            let occupants = annual.occupants(house);

            let mut score = BASE_SCORE;
            for g in &occupants {
                score += match g.natural_nature() {
                    BeneficNature::Benefic => OCCUPANT_POINTS,
                    BeneficNature::Malefic => -OCCUPANT_POINTS,
                };
            }
            score += lord_placement_points(lord_house);
            for a in aspects {
                if a.house_a == house || a.house_b == house {
                    score += aspect_points(a);
                }
            }
            let score = score.clamp(0.0, 20.0);
            let grade = BalaGrade::from_total(score);

            let mut events = Vec::new();
            if year_lord.house == house {
                events.push(texts.year_lord_presence(language, year_lord.graha, house));
            }
            if muntha.house == house {
                events.push(texts.muntha_presence(language, house));
            }

            HousePrediction {
                house,
                rashi,
                lord,
                lord_house,
                occupants,
                score,
                grade,
                rating: grade.rating(),
                keywords: HOUSE_KEYWORDS[house as usize - 1]
                    .iter()
                    .map(|k| (*k).to_owned())
                    .collect(),
                narrative: texts.house_narrative(language, house, grade),
                events,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kendra_trikona_lift_dusthana_drag() {
        for h in [1, 4, 5, 7, 9, 10] {
            assert_eq!(lord_placement_points(h), LORD_PLACEMENT_POINTS);
        }
        for h in [6, 8, 12] {
            assert_eq!(lord_placement_points(h), -LORD_PLACEMENT_POINTS);
        }
        for h in [2, 3, 11] {
            assert_eq!(lord_placement_points(h), 0.0);
        }
    }

    #[test]
    fn keywords_cover_every_house() {
        assert_eq!(HOUSE_KEYWORDS.len(), 12);
        for k in HOUSE_KEYWORDS {
            assert!(!k.is_empty());
        }
    }
}
