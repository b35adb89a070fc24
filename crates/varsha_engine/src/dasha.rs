//! Mudda dasha timeline with civil dates attached.
//!
//! The proportional split lives in `varsha_base::dasha` as whole-day
//! offsets; this module anchors those offsets to the local civil date
//! of the solar return, marks the periods containing the reference
//! date, and reports the running lords for downstream consumers (the
//! saham active flags and the summary months).

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use varsha_base::{Graha, MuddaPeriod, active_path, mudda_schedule};

use crate::chart::AnnualChart;
use crate::error::VarshaError;
use crate::time::local_date;

/// One Mudda period on the calendar.
///
/// `end` is exclusive. Siblings tile their parent exactly; the nine
/// top-level periods tile the whole year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuddaDashaPeriod {
    pub graha: Graha,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration_days: i64,
    /// 0 = top-level, 1 = first subdivision, ...
    pub level: u8,
    /// True when the reference date falls inside [start, end).
    pub current: bool,
    /// Elapsed fraction at the reference date, clamped to [0, 1].
    pub progress: f64,
    pub sub_periods: Vec<MuddaDashaPeriod>,
}

/// The scheduled year: nine top-level periods plus the running lords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuddaDasha {
    /// Local civil date the annual year opens on.
    pub year_start: NaiveDate,
    /// Exclusive end of the scheduled year.
    pub year_end: NaiveDate,
    pub starting_graha: Graha,
    pub periods: Vec<MuddaDashaPeriod>,
    /// Lord of the top-level period containing the reference date.
    pub current_lord: Option<Graha>,
    /// Lord of the innermost period containing the reference date.
    pub current_sub_lord: Option<Graha>,
}

/// The planet that opens the Mudda cycle: the Vimshottari lord of the
/// annual Moon's nakshatra.
pub fn starting_graha(annual: &AnnualChart) -> Graha {
    annual.moon_nakshatra.vimshottari_lord()
}

/// Schedule the year and anchor it to the local return date.
///
/// `reference_date` drives the current flags and progress fractions;
/// a date outside the year leaves every period non-current.
pub fn build_mudda_dasha(
    annual: &AnnualChart,
    utc_offset_hours: f64,
    year_length_days: u32,
    depth: u8,
    reference_date: NaiveDate,
) -> Result<MuddaDasha, VarshaError> {
    let year_start = local_date(annual.return_jd, utc_offset_hours).ok_or_else(|| {
        VarshaError::Calculation(format!(
            "return instant jd {} has no civil date",
            annual.return_jd
        ))
    })?;
    let year_end = add_days(year_start, i64::from(year_length_days))?;
    let start = starting_graha(annual);
    let schedule = mudda_schedule(year_length_days, start, depth)?;

    let reference_offset = reference_date.signed_duration_since(year_start).num_days();
    let path = active_path(&schedule, reference_offset);
    let current_lord = path.first().map(|&i| schedule[i].graha);
    let current_sub_lord = innermost_lord(&schedule, &path);

    Ok(MuddaDasha {
        year_start,
        year_end,
        starting_graha: start,
        periods: attach_dates(&schedule, year_start, reference_offset)?,
        current_lord,
        current_sub_lord,
    })
}

fn innermost_lord(schedule: &[MuddaPeriod], path: &[usize]) -> Option<Graha> {
    let mut current = schedule;
    let mut lord = None;
    for &idx in path {
        lord = Some(current[idx].graha);
        current = &current[idx].sub_periods;
    }
    lord
}

fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, VarshaError> {
    // Schedule offsets are never negative.
    date.checked_add_days(Days::new(days as u64))
        .ok_or_else(|| VarshaError::Calculation("period date outside calendar range".into()))
}

fn attach_dates(
    periods: &[MuddaPeriod],
    year_start: NaiveDate,
    reference_offset: i64,
) -> Result<Vec<MuddaDashaPeriod>, VarshaError> {
    periods
        .iter()
        .map(|p| {
            let duration = p.duration_days();
            let progress = if duration == 0 {
                if reference_offset >= p.end_day { 1.0 } else { 0.0 }
            } else {
                ((reference_offset - p.start_day) as f64 / duration as f64).clamp(0.0, 1.0)
            };
            Ok(MuddaDashaPeriod {
                graha: p.graha,
                start: add_days(year_start, p.start_day)?,
                end: add_days(year_start, p.end_day)?,
                duration_days: duration,
                level: p.level,
                current: p.contains_day(reference_offset),
                progress,
                sub_periods: attach_dates(&p.sub_periods, year_start, reference_offset)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use varsha_base::{
        ALL_GRAHAS, Nakshatra, Vaar, house_from_asc, nakshatra_from_longitude,
        rashi_from_longitude,
    };

    use crate::chart::GrahaPosition;

    fn annual_fixture(moon_lon: f64) -> AnnualChart {
        let asc = 10.0;
        let mut lons = [15.0, 0.0, 297.0, 120.0, 64.0, 160.0, 350.0, 55.0, 235.0];
        lons[Graha::Chandra.index() as usize] = moon_lon;
        let asc_rashi = rashi_from_longitude(asc);
        let positions: [GrahaPosition; 9] = core::array::from_fn(|i| {
            let rashi = rashi_from_longitude(lons[i]);
            GrahaPosition {
                graha: ALL_GRAHAS[i],
                longitude_deg: lons[i],
                rashi,
                house: house_from_asc(asc_rashi, rashi),
                retrograde: false,
            }
        });
        AnnualChart {
            // 2024-04-13 12:00 UT.
            return_jd: 2460414.0,
            return_utc: Utc.with_ymd_and_hms(2024, 4, 13, 12, 0, 0).unwrap(),
            ascendant_deg: asc,
            ascendant_rashi: asc_rashi,
            positions,
            moon_rashi: rashi_from_longitude(moon_lon),
            moon_nakshatra: nakshatra_from_longitude(moon_lon),
            vaar: Vaar::Shanivaar,
            hora_lord: Graha::Shani,
        }
    }

    #[test]
    fn moon_nakshatra_seeds_the_cycle() {
        // Moon at 125 sits in Magha, whose Vimshottari lord is Ketu.
        let annual = annual_fixture(125.0);
        assert_eq!(annual.moon_nakshatra, Nakshatra::Magha);
        assert_eq!(starting_graha(&annual), Graha::Ketu);
    }

    #[test]
    fn periods_tile_the_civil_year() {
        let annual = annual_fixture(125.0);
        let ref_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let dasha = build_mudda_dasha(&annual, 5.5, 365, 1, ref_date).unwrap();

        // Return at 12:00 UT is 17:30 local on the same civil day.
        assert_eq!(dasha.year_start, NaiveDate::from_ymd_opt(2024, 4, 13).unwrap());
        assert_eq!(dasha.year_end, NaiveDate::from_ymd_opt(2025, 4, 13).unwrap());
        assert_eq!(dasha.periods.len(), 9);
        assert_eq!(dasha.periods[0].start, dasha.year_start);
        assert_eq!(dasha.periods[8].end, dasha.year_end);
        for w in dasha.periods.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        for p in &dasha.periods {
            assert_eq!(p.sub_periods[0].start, p.start);
            assert_eq!(p.sub_periods[8].end, p.end);
        }
    }

    #[test]
    fn reference_date_marks_one_period_per_level() {
        let annual = annual_fixture(125.0);
        let ref_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let dasha = build_mudda_dasha(&annual, 5.5, 365, 1, ref_date).unwrap();

        let current: Vec<&MuddaDashaPeriod> =
            dasha.periods.iter().filter(|p| p.current).collect();
        assert_eq!(current.len(), 1);
        assert!(current[0].start <= ref_date && ref_date < current[0].end);
        assert_eq!(dasha.current_lord, Some(current[0].graha));

        let inner: Vec<&MuddaDashaPeriod> =
            current[0].sub_periods.iter().filter(|p| p.current).collect();
        assert_eq!(inner.len(), 1);
        assert_eq!(dasha.current_sub_lord, Some(inner[0].graha));
        assert!(current[0].progress > 0.0 && current[0].progress < 1.0);
    }

    #[test]
    fn reference_outside_year_leaves_nothing_current() {
        let annual = annual_fixture(125.0);
        let ref_date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let dasha = build_mudda_dasha(&annual, 5.5, 365, 1, ref_date).unwrap();
        assert_eq!(dasha.current_lord, None);
        assert_eq!(dasha.current_sub_lord, None);
        assert!(dasha.periods.iter().all(|p| !p.current));
        // A reference after the year reads every period as fully elapsed.
        assert!(dasha.periods.iter().all(|p| p.progress == 1.0));
    }

    #[test]
    fn past_and_future_periods_pin_progress() {
        let annual = annual_fixture(125.0);
        let ref_date = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        let dasha = build_mudda_dasha(&annual, 5.5, 365, 0, ref_date).unwrap();
        let current_idx = dasha.periods.iter().position(|p| p.current).unwrap();
        for (i, p) in dasha.periods.iter().enumerate() {
            if i < current_idx {
                assert_eq!(p.progress, 1.0);
            } else if i > current_idx {
                assert_eq!(p.progress, 0.0);
            }
        }
    }
}
