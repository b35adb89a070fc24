//! Muntha: the progressed ascendant of the annual chart.
//!
//! The Muntha stands in the natal ascendant sign at birth and advances
//! exactly one sign per completed year of age, so its sign for a target
//! year is the natal ascendant sign plus `age mod 12`.

use crate::rashi::{Rashi, rashi_ahead};

/// Muntha sign for a given age in completed years.
pub fn muntha_rashi(natal_asc: Rashi, age: u32) -> Rashi {
    rashi_ahead(natal_asc, (age % 12) as u8)
}

/// Fixed thematic keywords for a Muntha sign.
pub fn muntha_themes(rashi: Rashi) -> &'static [&'static str] {
    match rashi {
        Rashi::Mesha => &["initiative", "new ventures", "self-assertion"],
        Rashi::Vrishabha => &["finances", "stability", "accumulation"],
        Rashi::Mithuna => &["communication", "learning", "short journeys"],
        Rashi::Karka => &["home", "emotional security", "family matters"],
        Rashi::Simha => &["authority", "recognition", "leadership"],
        Rashi::Kanya => &["health", "service", "detailed work"],
        Rashi::Tula => &["partnership", "balance", "public dealings"],
        Rashi::Vrischika => &["transformation", "research", "shared resources"],
        Rashi::Dhanu => &["fortune", "higher learning", "long journeys"],
        Rashi::Makara => &["career", "discipline", "slow gains"],
        Rashi::Kumbha => &["networks", "aspirations", "collective work"],
        Rashi::Meena => &["retreat", "spirituality", "completion"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_zero_is_natal_ascendant() {
        for r in crate::rashi::ALL_RASHIS {
            assert_eq!(muntha_rashi(r, 0), r);
        }
    }

    #[test]
    fn advances_one_sign_per_year() {
        assert_eq!(muntha_rashi(Rashi::Mesha, 1), Rashi::Vrishabha);
        assert_eq!(muntha_rashi(Rashi::Mesha, 11), Rashi::Meena);
    }

    #[test]
    fn cycle_repeats_every_twelve() {
        assert_eq!(muntha_rashi(Rashi::Karka, 12), Rashi::Karka);
        assert_eq!(muntha_rashi(Rashi::Karka, 37), muntha_rashi(Rashi::Karka, 1));
    }

    #[test]
    fn every_sign_has_themes() {
        for r in crate::rashi::ALL_RASHIS {
            assert!(!muntha_themes(r).is_empty());
        }
    }
}
