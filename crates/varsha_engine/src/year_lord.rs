//! Year Lord election.
//!
//! Five fixed offices nominate a candidate each: the annual ascendant
//! lord, the Sun-sign lord, the Muntha-sign lord, the strongest graha
//! by Pancha Vargiya Bala, and the weekday lord of the return instant.
//! The graha with the most nominations rules the year; ties fall to the
//! earlier office in the order above.

use serde::{Deserialize, Serialize};
use varsha_base::{
    Dignity, Graha, PanchaVargiyaBala, Rashi, dignity_in_rashi, rashi_lord, strongest_graha,
};

use crate::chart::AnnualChart;
use crate::error::VarshaError;

/// The five nominating offices, in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearLordCandidate {
    LagnaLord,
    SuryaRashiLord,
    MunthaLord,
    StrongestGraha,
    VaarLord,
}

impl YearLordCandidate {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LagnaLord => "lagna lord",
            Self::SuryaRashiLord => "sun-sign lord",
            Self::MunthaLord => "muntha lord",
            Self::StrongestGraha => "strongest graha",
            Self::VaarLord => "weekday lord",
        }
    }
}

/// The elected ruler of the year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearLord {
    pub graha: Graha,
    /// The lord's own house in the annual chart, 1..=12.
    pub house: u8,
    pub dignity: Dignity,
    /// Nominations the winner received, 1..=5.
    pub votes: u8,
    /// Every office's nomination, for the record.
    pub nominations: [(YearLordCandidate, Graha); 5],
}

/// Run the election over the annual chart.
pub fn resolve_year_lord(
    annual: &AnnualChart,
    muntha_rashi: Rashi,
    balas: &[PanchaVargiyaBala; 7],
) -> Result<YearLord, VarshaError> {
    let strongest = strongest_graha(balas)
        .ok_or_else(|| VarshaError::Calculation("no strength scores to rank".into()))?;
    let sun_rashi = annual.position(Graha::Surya).rashi;
    let nominations = [
        (YearLordCandidate::LagnaLord, rashi_lord(annual.ascendant_rashi)),
        (YearLordCandidate::SuryaRashiLord, rashi_lord(sun_rashi)),
        (YearLordCandidate::MunthaLord, rashi_lord(muntha_rashi)),
        (YearLordCandidate::StrongestGraha, strongest),
        (YearLordCandidate::VaarLord, annual.vaar.lord()),
    ];

    // First office whose graha holds the top count wins ties.
    let mut winner = nominations[0].1;
    let mut winner_votes = 0u8;
    for &(_, graha) in &nominations {
        let votes = nominations.iter().filter(|(_, g)| *g == graha).count() as u8;
        if votes > winner_votes {
            winner = graha;
            winner_votes = votes;
        }
    }

    Ok(YearLord {
        graha: winner,
        house: annual.house_of(winner),
        dignity: dignity_in_rashi(winner, annual.position(winner).longitude_deg),
        votes: winner_votes,
        nominations,
    })
}
