//! Muntha: the progressed ascendant point of the annual chart.
//!
//! The natal ascendant advances one whole sign per completed year of
//! age; the degree inside the sign stays the natal ascendant's. Its
//! house in the annual chart marks where the year's attention settles.

use serde::{Deserialize, Serialize};
use varsha_base::{
    Graha, RASHI_SPAN, Rashi, deg_in_rashi, house_from_asc, muntha_rashi, muntha_themes,
    rashi_lord,
};

use crate::chart::{AnnualChart, NatalChart};
use crate::texts::{Language, TextProvider};

/// The progressed-ascendant point, placed in the annual chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Muntha {
    pub rashi: Rashi,
    /// Full sidereal longitude of the Muntha point, degrees.
    pub longitude_deg: f64,
    /// Whole-sign house in the annual chart, 1..=12.
    pub house: u8,
    pub lord: Graha,
    /// The lord's own house in the annual chart, 1..=12.
    pub lord_house: u8,
    pub themes: Vec<String>,
    pub narrative: String,
}

/// Progress the natal ascendant by `age` whole signs and place it.
pub fn resolve_muntha<T: TextProvider + ?Sized>(
    texts: &T,
    natal: &NatalChart,
    annual: &AnnualChart,
    age: u32,
    language: Language,
) -> Muntha {
    let rashi = muntha_rashi(natal.ascendant_rashi(), age);
    let degree = deg_in_rashi(natal.ascendant_deg);
    let house = house_from_asc(annual.ascendant_rashi, rashi);
    let lord = rashi_lord(rashi);
    Muntha {
        rashi,
        longitude_deg: f64::from(rashi.index()) * RASHI_SPAN + degree,
        house,
        lord,
        lord_house: annual.house_of(lord),
        themes: muntha_themes(rashi).iter().map(|t| (*t).to_owned()).collect(),
        narrative: texts.muntha_narrative(language, rashi, house),
    }
}
