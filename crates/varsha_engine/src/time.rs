//! Civil-time plumbing: Julian Day conversions and local-clock helpers.
//!
//! The ephemeris port speaks Julian Days in UT; callers speak `chrono`
//! datetimes. Weekday and hora are civil-clock concepts, so both are
//! taken at the chart's local offset, with the first hora of the day
//! starting at local midnight.

use chrono::{DateTime, NaiveDate, Utc};
use varsha_base::{Graha, Vaar, hora_lord, vaar_from_jd};

/// JD of the Unix epoch, 1970-01-01T00:00:00 UT.
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day (UT) for a UTC instant.
pub fn jd_from_datetime(dt: &DateTime<Utc>) -> f64 {
    let secs = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_micros()) / 1e6;
    JD_UNIX_EPOCH + secs / SECONDS_PER_DAY
}

/// UTC instant for a Julian Day (UT), rounded to the millisecond.
///
/// An f64 JD resolves to roughly 40 microseconds at modern epochs, so
/// millisecond rounding loses nothing the JD still carries. None only
/// for JDs outside chrono's representable range.
pub fn datetime_from_jd(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - JD_UNIX_EPOCH) * SECONDS_PER_DAY * 1e3).round() as i64;
    DateTime::<Utc>::from_timestamp_millis(millis)
}

/// Shift a UT Julian Day to the local civil clock.
pub fn local_jd(jd_ut: f64, utc_offset_hours: f64) -> f64 {
    jd_ut + utc_offset_hours / 24.0
}

/// Local civil calendar date of a UT instant.
pub fn local_date(jd_ut: f64, utc_offset_hours: f64) -> Option<NaiveDate> {
    datetime_from_jd(local_jd(jd_ut, utc_offset_hours)).map(|dt| dt.date_naive())
}

/// Weekday at the local civil clock.
pub fn local_vaar(jd_ut: f64, utc_offset_hours: f64) -> Vaar {
    vaar_from_jd(local_jd(jd_ut, utc_offset_hours))
}

/// Hora slot (0..23) since local midnight.
pub fn local_hora_index(jd_ut: f64, utc_offset_hours: f64) -> u8 {
    let frac = (local_jd(jd_ut, utc_offset_hours) + 0.5).fract();
    (frac * 24.0).floor().clamp(0.0, 23.0) as u8
}

/// Lord of the running hora at the local civil clock.
pub fn local_hora_lord(jd_ut: f64, utc_offset_hours: f64) -> Graha {
    let vaar = local_vaar(jd_ut, utc_offset_hours);
    hora_lord(vaar, local_hora_index(jd_ut, utc_offset_hours))
}
