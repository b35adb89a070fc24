//! Pure Varshaphala (Tajika annual horoscopy) calculations.
//!
//! This crate provides:
//! - Graha, rashi, nakshatra and weekday enumerations with their lords
//! - Pancha Vargiya Bala (five-fold planetary strength, 0..20 scale)
//! - Tajika aspects with orbs, applying/separating and strength bands
//! - Sixteen Sahams (sensitive points) from their classical formulas
//! - Muntha progression and Tri-Pataki Chakra sectors
//! - Mudda dasha scheduling with exact whole-day tiling
//!
//! Everything here is pure math over sidereal longitudes; ephemeris
//! lookups and civil-time handling live in `varsha_engine`. All
//! implementations are clean-room, derived from standard Tajika texts
//! (Tajika Neelakanthi, Brihat Parashara Hora Shastra).

pub mod bala;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod muntha;
pub mod nakshatra;
pub mod rashi;
pub mod relations;
pub mod saham;
pub mod tajika;
pub mod tripataki;
pub mod util;
pub mod vaar;

pub use bala::{
    BALA_TOTAL_MAX, BalaGrade, PanchaVargiyaBala, SUB_SCORE_MAX, pancha_vargiya,
    pancha_vargiya_all, strongest_graha,
};
pub use dasha::{
    DAYS_PER_YEAR, MAX_MUDDA_DEPTH, MUDDA_SEQUENCE, MUDDA_TOTAL_YEARS, MuddaPeriod, active_path,
    allocate_days, mudda_schedule, subdivide,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, BeneficNature, Graha, SAPTA_GRAHAS, rashi_lord};
pub use muntha::{muntha_rashi, muntha_themes};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, nakshatra_from_longitude};
pub use rashi::{
    ALL_RASHIS, RASHI_SPAN, Rashi, deg_in_rashi, house_from_asc, rashi_ahead,
    rashi_from_longitude,
};
pub use relations::{Dignity, Maitri, dignity_in_rashi, exaltation_degree, naisargika_maitri};
pub use saham::{ALL_SAHAMS, Saham, SahamInputs, all_sahams};
pub use tajika::{
    AspectGeometry, AspectNature, AspectStrength, TajikaAspect, aspect_pairs,
    classify_separation, is_applying, strength_from_orb,
};
pub use tripataki::{ALL_SECTORS, PatakiSector, dominant_sector, sector_occupancy, sector_of};
pub use util::{arc_distance, normalize_360, normalize_to_pm180};
pub use vaar::{ALL_VAARS, CHALDEAN_SEQUENCE, Vaar, hora_lord, vaar_from_jd};
