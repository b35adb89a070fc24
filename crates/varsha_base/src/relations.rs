//! Graha dignity: exaltation, own signs, moolatrikona, and natural friendship.
//!
//! The annual system grades dignity from fixed tables only (naisargika
//! maitri); it does not re-grade friendships by chart-relative positions
//! the way natal shadbala does.
//!
//! Clean-room implementation from the standard BPHS tables.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, deg_in_rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maitri {
    Friend,
    Neutral,
    Enemy,
}

/// Dignity of a graha in its occupied sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    OwnSign,
    Friendly,
    Neutral,
    Inimical,
    Debilitated,
}

impl Dignity {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::OwnSign => "Own Sign",
            Self::Friendly => "Friendly",
            Self::Neutral => "Neutral",
            Self::Inimical => "Inimical",
            Self::Debilitated => "Debilitated",
        }
    }
}

/// Exaltation degree (sidereal). Returns None for Rahu/Ketu.
///
/// Sun 10 Ari, Moon 3 Tau, Mars 28 Cap, Mercury 15 Vir,
/// Jupiter 5 Can, Venus 27 Pis, Saturn 20 Lib.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation degree = exaltation + 180 mod 360. Returns None for Rahu/Ketu.
pub const fn debilitation_degree(graha: Graha) -> Option<f64> {
    match exaltation_degree(graha) {
        Some(e) => {
            let d = e + 180.0;
            if d >= 360.0 { Some(d - 360.0) } else { Some(d) }
        }
        None => None,
    }
}

/// Own-sign rashis. Returns an empty slice for Rahu/Ketu.
pub fn own_rashis(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Moolatrikona range: (rashi, start deg in rashi, end deg in rashi).
/// Returns None for Rahu/Ketu.
///
/// Sun 0-20 Leo, Moon 4-20 Tau, Mars 0-12 Ari, Mercury 16-20 Vir,
/// Jupiter 0-10 Sag, Venus 0-15 Lib, Saturn 0-20 Aqu.
pub const fn moolatrikona_range(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Surya => Some((Rashi::Simha, 0.0, 20.0)),
        Graha::Chandra => Some((Rashi::Vrishabha, 4.0, 20.0)),
        Graha::Mangal => Some((Rashi::Mesha, 0.0, 12.0)),
        Graha::Buddh => Some((Rashi::Kanya, 16.0, 20.0)),
        Graha::Guru => Some((Rashi::Dhanu, 0.0, 10.0)),
        Graha::Shukra => Some((Rashi::Tula, 0.0, 15.0)),
        Graha::Shani => Some((Rashi::Kumbha, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Natural (naisargika) friendship between two sapta grahas (BPHS table).
/// Any pairing involving Rahu/Ketu, or a graha with itself, is Neutral.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> Maitri {
    use Graha::*;
    use Maitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => return Neutral,
        _ => {}
    }

    match (graha, other) {
        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn; neutral=Mercury
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,
        (Surya, _) => Neutral,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Buddh) => Friend,
        (Chandra, _) => Neutral,

        // Mars: friends=Sun,Moon,Jupiter; enemy=Mercury
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,
        (Mangal, _) => Neutral,

        // Mercury: friends=Sun,Venus; enemy=Moon
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,
        (Buddh, _) => Neutral,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,
        (Guru, _) => Neutral,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,
        (Shukra, _) => Neutral,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,
        (Shani, _) => Neutral,

        // Unreachable: node pairings already returned Neutral above.
        (Rahu | Ketu, _) => Neutral,
    }
}

/// True if the longitude falls inside the graha's moolatrikona range.
pub fn in_moolatrikona(graha: Graha, sidereal_lon: f64) -> bool {
    match moolatrikona_range(graha) {
        Some((mt_rashi, start, end)) => {
            let lon = normalize_360(sidereal_lon);
            rashi_from_longitude(lon) == mt_rashi && {
                let d = deg_in_rashi(lon);
                d >= start && d < end
            }
        }
        None => false,
    }
}

fn occupies_sign_of(degree: Option<f64>, lon: f64) -> bool {
    match degree {
        Some(d) => rashi_from_longitude(d) == rashi_from_longitude(lon),
        None => false,
    }
}

/// Dignity of a graha at a sidereal longitude.
///
/// Priority: exaltation sign > debilitation sign > own sign (moolatrikona
/// included) > naisargika friendship with the sign lord. Rahu/Ketu are
/// always Neutral.
pub fn dignity_in_rashi(graha: Graha, sidereal_lon: f64) -> Dignity {
    if matches!(graha, Graha::Rahu | Graha::Ketu) {
        return Dignity::Neutral;
    }

    let lon = normalize_360(sidereal_lon);
    if occupies_sign_of(exaltation_degree(graha), lon) {
        return Dignity::Exalted;
    }
    if occupies_sign_of(debilitation_degree(graha), lon) {
        return Dignity::Debilitated;
    }

    let rashi = rashi_from_longitude(lon);
    if own_rashis(graha).contains(&rashi) || in_moolatrikona(graha, lon) {
        return Dignity::OwnSign;
    }

    match naisargika_maitri(graha, rashi_lord(rashi)) {
        Maitri::Friend => Dignity::Friendly,
        Maitri::Neutral => Dignity::Neutral,
        Maitri::Enemy => Dignity::Inimical,
    }
}
