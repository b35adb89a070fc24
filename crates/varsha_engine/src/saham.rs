//! Saham placement and activation in the annual chart.
//!
//! The pure formulas live in `varsha_base::saham`; this module feeds
//! them the annual longitudes and marks each point active when its
//! sign lord is the running Mudda dasha lord.

use serde::{Deserialize, Serialize};
use varsha_base::{
    Graha, Rashi, Saham, SahamInputs, all_sahams, house_from_asc, rashi_from_longitude,
    rashi_lord,
};

use crate::chart::AnnualChart;
use crate::texts::{Language, TextProvider};

/// One saham placed in the annual chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SahamResult {
    pub saham: Saham,
    /// Sidereal longitude, degrees, [0, 360).
    pub longitude_deg: f64,
    pub rashi: Rashi,
    /// Whole-sign house from the annual ascendant, 1..=12.
    pub house: u8,
    /// Lord of the saham's sign.
    pub lord: Graha,
    /// True when the sign lord is the running dasha lord.
    pub active: bool,
    pub narrative: String,
}

/// Compute and place all 16 sahams.
///
/// `dasha_lord` is the graha ruling the Mudda period that contains the
/// reference date, `None` when that date falls outside the scheduled
/// year; sahams ruled by it are flagged active.
pub fn compute_sahams<T: TextProvider + ?Sized>(
    texts: &T,
    annual: &AnnualChart,
    dasha_lord: Option<Graha>,
    language: Language,
) -> Vec<SahamResult> {
    let lagna_lord = rashi_lord(annual.ascendant_rashi);
    let inputs = SahamInputs {
        sun: annual.position(Graha::Surya).longitude_deg,
        moon: annual.position(Graha::Chandra).longitude_deg,
        mars: annual.position(Graha::Mangal).longitude_deg,
        mercury: annual.position(Graha::Buddh).longitude_deg,
        jupiter: annual.position(Graha::Guru).longitude_deg,
        venus: annual.position(Graha::Shukra).longitude_deg,
        saturn: annual.position(Graha::Shani).longitude_deg,
        lagna: annual.ascendant_deg,
        lagna_lord: annual.position(lagna_lord).longitude_deg,
    };
    all_sahams(&inputs)
        .into_iter()
        .map(|(saham, longitude_deg)| {
            let rashi = rashi_from_longitude(longitude_deg);
            let lord = rashi_lord(rashi);
            let active = dasha_lord == Some(lord);
            SahamResult {
                saham,
                longitude_deg,
                rashi,
                house: house_from_asc(annual.ascendant_rashi, rashi),
                lord,
                active,
                narrative: texts.saham_narrative(language, saham, active),
            }
        })
        .collect()
}
