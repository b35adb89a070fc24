//! Varshaphala (Tajika annual horoscope) computation engine.
//!
//! Finds the solar-return instant for a natal chart and target year,
//! casts the annual chart, and derives the full Tajika analysis: year
//! lord, Muntha, annual aspects, fivefold strengths, Tri-Pataki
//! Chakra, sahams, the Mudda dasha timeline, and per-house predictive
//! scores. Pure calculations live in `varsha_base`; this crate adds
//! the ephemeris and text ports, the root-finding, calendar anchoring,
//! orchestration, and memoization.
//!
//! The engine touches no network, file, or ambient state: it consumes
//! an injected [`EphemerisSource`] and [`TextProvider`] and returns
//! immutable result values safe to share across threads.

pub mod aspects;
pub mod cache;
pub mod chart;
pub mod dasha;
pub mod ephemeris;
pub mod error;
pub mod muntha;
pub mod predictions;
pub mod saham;
pub mod solar_return;
pub mod texts;
pub mod time;
pub mod tripataki;
pub mod varshaphala;
pub mod year_lord;

pub use aspects::{TajikaAspectResult, compute_tajika_aspects, sapta_speeds};
pub use cache::{CacheKey, CacheStats, VarshaphalaCache, chart_fingerprint};
pub use chart::{AnnualChart, GrahaPosition, NatalChart, build_annual_chart};
pub use dasha::{MuddaDasha, MuddaDashaPeriod, build_mudda_dasha, starting_graha};
pub use ephemeris::{BodyState, EphemerisError, EphemerisSource, GeoLocation};
pub use error::VarshaError;
pub use muntha::{Muntha, resolve_muntha};
pub use predictions::{HousePrediction, score_houses};
pub use saham::{SahamResult, compute_sahams};
pub use solar_return::{CancelToken, SolarReturnConfig, find_solar_return};
pub use texts::{BuiltinTexts, Language, TextProvider};
pub use time::{
    datetime_from_jd, jd_from_datetime, local_date, local_hora_index, local_hora_lord, local_jd,
    local_vaar,
};
pub use tripataki::{SectorOccupancy, TriPatakiChakra, build_tri_pataki};
pub use varshaphala::{
    KeyEvent, VarshaphalaConfig, VarshaphalaEngine, VarshaphalaResult, compute_varshaphala,
};
pub use year_lord::{YearLord, YearLordCandidate, resolve_year_lord};
