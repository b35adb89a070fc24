//! Vaar (weekday) enum, weekday lords, and the Chaldean hora sequence.
//!
//! The weekday lord of the solar-return instant is one of the five Year
//! Lord candidates and feeds the kala sub-score of Pancha Vargiya Bala.
//! Horas (planetary hours) follow the Chaldean sequence starting from the
//! day lord; 24 horas later the cycle lands on the next day's lord.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// The 7 weekdays, Ravivaar (Sunday) through Shanivaar (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All 7 vaars in week order.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

/// Chaldean planet sequence (slowest to fastest), the hora rotation order.
pub const CHALDEAN_SEQUENCE: [Graha; 7] = [
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
];

impl Vaar {
    /// Sanskrit name of the weekday.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    /// English name of the weekday.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0-based index (0 = Ravivaar/Sunday).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ravivaar => 0,
            Self::Somvaar => 1,
            Self::Mangalvaar => 2,
            Self::Budhvaar => 3,
            Self::Guruvaar => 4,
            Self::Shukravaar => 5,
            Self::Shanivaar => 6,
        }
    }

    /// Weekday lord.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somvaar => Graha::Chandra,
            Self::Mangalvaar => Graha::Mangal,
            Self::Budhvaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }
}

/// Weekday of a JD instant, using UTC civil-day boundaries.
///
/// The JD number of the civil day is `floor(jd + 0.5)`; JDN 2440588
/// (1970-01-01) was a Thursday, which fixes the week phase.
pub fn vaar_from_jd(jd_utc: f64) -> Vaar {
    let jdn = (jd_utc + 0.5).floor() as i64;
    let idx = (jdn + 1).rem_euclid(7) as usize;
    ALL_VAARS[idx]
}

/// Hora (planetary hour) lord for hour `hora_index` of a day.
///
/// Hora 0 is ruled by the day lord; each following hora steps forward
/// through the Chaldean sequence.
pub fn hora_lord(vaar: Vaar, hora_index: u8) -> Graha {
    let day_lord = vaar.lord();
    let start = CHALDEAN_SEQUENCE
        .iter()
        .position(|&g| g == day_lord)
        .unwrap_or(0);
    CHALDEAN_SEQUENCE[(start + hora_index as usize) % 7]
}
