//! Mudda dasha: the Vimshottari cycle compressed into one solar year.
//!
//! Nine grahas own fixed year-allotments summing to 120; each receives
//! `allotment / 120` of the year. Day boundaries come from rounding the
//! running weighted sum, so sibling durations always sum exactly to the
//! parent duration, at every level. Sub-periods reuse the same split,
//! scaled to the parent and starting from the parent's own graha.
//!
//! All positions here are whole-day offsets from the year start; the
//! caller attaches civil dates.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;

/// Mean solar year length in days, used to seed return searches.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Total Vimshottari allotment behind the proportional split.
pub const MUDDA_TOTAL_YEARS: u16 = 120;

/// Deepest supported subdivision level (0 = top-level periods only).
pub const MAX_MUDDA_DEPTH: u8 = 2;

/// The nine grahas in Vimshottari dasha order.
pub const MUDDA_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// One Mudda period: a graha's slice of the year (or of a parent period),
/// with its own sub-periods nested inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuddaPeriod {
    pub graha: Graha,
    /// Day offset from the year start, inclusive.
    pub start_day: i64,
    /// Day offset from the year start, exclusive.
    pub end_day: i64,
    /// 0 = top-level, 1 = first subdivision, ...
    pub level: u8,
    /// 1-based position among siblings.
    pub order: u8,
    pub sub_periods: Vec<MuddaPeriod>,
}

impl MuddaPeriod {
    /// Duration in whole days.
    pub fn duration_days(&self) -> i64 {
        self.end_day - self.start_day
    }

    /// True when the day offset falls inside [start, end). A zero-length
    /// period contains no day and is never current.
    pub fn contains_day(&self, day_offset: i64) -> bool {
        day_offset >= self.start_day && day_offset < self.end_day
    }
}

/// The Vimshottari sequence rotated to begin at `first`.
fn rotation_from(first: Graha) -> [Graha; 9] {
    let start = MUDDA_SEQUENCE
        .iter()
        .position(|&g| g == first)
        .unwrap_or(0);
    core::array::from_fn(|i| MUDDA_SEQUENCE[(start + i) % 9])
}

/// Allocate `total_days` across `weights` by cumulative rounding.
///
/// Boundary k is `round(scale * sum(weights[..=k]))`, so the durations
/// telescope: they always sum to `total_days` exactly, and the first
/// entry equals `round(total_days * weights[0] / total_weight)`.
/// Individual entries can be zero when the parent is very short.
pub fn allocate_days(total_days: i64, weights: &[u16]) -> Vec<i64> {
    let total_weight: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    if total_weight == 0 {
        return vec![0; weights.len()];
    }
    let scale = total_days as f64 / total_weight as f64;
    let mut durations = Vec::with_capacity(weights.len());
    let mut cum: i64 = 0;
    let mut prev_boundary: i64 = 0;
    for &w in weights {
        cum += i64::from(w);
        let boundary = (cum as f64 * scale).round() as i64;
        durations.push(boundary - prev_boundary);
        prev_boundary = boundary;
    }
    durations
}

/// Split `[start_day, start_day + duration_days)` into nine Mudda periods
/// beginning at `first`, recursing while `level < depth`.
///
/// One function serves every level: sub-periods are produced by calling
/// it again on each slice, seeded with that slice's own graha.
pub fn subdivide(
    start_day: i64,
    duration_days: i64,
    first: Graha,
    level: u8,
    depth: u8,
) -> Vec<MuddaPeriod> {
    let sequence = rotation_from(first);
    let weights: [u16; 9] = core::array::from_fn(|i| sequence[i].mudda_years());
    let durations = allocate_days(duration_days, &weights);

    let mut periods = Vec::with_capacity(9);
    let mut cursor = start_day;
    for (i, (&graha, duration)) in sequence.iter().zip(durations).enumerate() {
        let end = cursor + duration;
        let sub_periods = if level < depth && duration > 0 {
            subdivide(cursor, duration, graha, level + 1, depth)
        } else {
            Vec::new()
        };
        periods.push(MuddaPeriod {
            graha,
            start_day: cursor,
            end_day: end,
            level,
            order: (i + 1) as u8,
            sub_periods,
        });
        cursor = end;
    }
    periods
}

/// Build the full Mudda schedule for one year.
///
/// `depth` is the number of subdivision levels below the top (0 = nine
/// top-level periods only, 1 = each carries nine sub-periods).
pub fn mudda_schedule(
    year_length_days: u32,
    start: Graha,
    depth: u8,
) -> Result<Vec<MuddaPeriod>, VedicError> {
    if year_length_days == 0 {
        return Err(VedicError::InvalidInput("year length must be at least 1 day"));
    }
    if depth > MAX_MUDDA_DEPTH {
        return Err(VedicError::InvalidInput("dasha depth exceeds MAX_MUDDA_DEPTH"));
    }
    Ok(subdivide(0, i64::from(year_length_days), start, 0, depth))
}

/// Index chain of the periods containing `day_offset`, outermost first.
///
/// Empty when the offset falls outside the scheduled year.
pub fn active_path(periods: &[MuddaPeriod], day_offset: i64) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = periods;
    loop {
        match current.iter().position(|p| p.contains_day(day_offset)) {
            Some(idx) => {
                path.push(idx);
                current = &current[idx].sub_periods;
                if current.is_empty() {
                    return path;
                }
            }
            None => return path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tiles(parent_start: i64, parent_end: i64, periods: &[MuddaPeriod]) {
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].start_day, parent_start);
        assert_eq!(periods[8].end_day, parent_end);
        for w in periods.windows(2) {
            assert_eq!(w[0].end_day, w[1].start_day, "gap or overlap");
        }
        let sum: i64 = periods.iter().map(MuddaPeriod::duration_days).sum();
        assert_eq!(sum, parent_end - parent_start);
        for p in periods {
            if !p.sub_periods.is_empty() {
                assert_tiles(p.start_day, p.end_day, &p.sub_periods);
            }
        }
    }

    #[test]
    fn allocation_sums_exactly() {
        let weights: [u16; 9] = core::array::from_fn(|i| MUDDA_SEQUENCE[i].mudda_years());
        for total in [1, 28, 365, 366, 1000] {
            let days = allocate_days(total, &weights);
            assert_eq!(days.iter().sum::<i64>(), total, "total {total}");
            assert!(days.iter().all(|&d| d >= 0));
        }
    }

    #[test]
    fn first_entry_is_rounded_share() {
        // A 365-day year starting with the Sun (6 of 120): round(365*6/120) = 18.
        let schedule = mudda_schedule(365, Graha::Surya, 0).unwrap();
        assert_eq!(schedule[0].graha, Graha::Surya);
        assert_eq!(schedule[0].duration_days(), 18);
        let total: i64 = schedule.iter().map(MuddaPeriod::duration_days).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn schedule_tiles_recursively() {
        let schedule = mudda_schedule(365, Graha::Ketu, 1).unwrap();
        assert_tiles(0, 365, &schedule);
        for p in &schedule {
            assert_eq!(p.sub_periods.len(), 9);
            // Child order starts from the parent's own graha.
            assert_eq!(p.sub_periods[0].graha, p.graha);
        }
    }

    #[test]
    fn leap_year_tiles_too() {
        let schedule = mudda_schedule(366, Graha::Shukra, 1).unwrap();
        assert_tiles(0, 366, &schedule);
    }

    #[test]
    fn sequence_rotation() {
        let schedule = mudda_schedule(365, Graha::Guru, 0).unwrap();
        let order: Vec<Graha> = schedule.iter().map(|p| p.graha).collect();
        assert_eq!(
            order,
            vec![
                Graha::Guru,
                Graha::Shani,
                Graha::Buddh,
                Graha::Ketu,
                Graha::Shukra,
                Graha::Surya,
                Graha::Chandra,
                Graha::Mangal,
                Graha::Rahu,
            ]
        );
    }

    #[test]
    fn orders_and_levels() {
        let schedule = mudda_schedule(365, Graha::Ketu, 1).unwrap();
        for (i, p) in schedule.iter().enumerate() {
            assert_eq!(p.level, 0);
            assert_eq!(p.order as usize, i + 1);
            for (j, c) in p.sub_periods.iter().enumerate() {
                assert_eq!(c.level, 1);
                assert_eq!(c.order as usize, j + 1);
            }
        }
    }

    #[test]
    fn exactly_one_active_per_level_inside_year() {
        let schedule = mudda_schedule(365, Graha::Chandra, 1).unwrap();
        for day in [0, 17, 100, 200, 364] {
            let containing: Vec<&MuddaPeriod> =
                schedule.iter().filter(|p| p.contains_day(day)).collect();
            assert_eq!(containing.len(), 1, "day {day}");
            let inner: Vec<&MuddaPeriod> = containing[0]
                .sub_periods
                .iter()
                .filter(|p| p.contains_day(day))
                .collect();
            assert_eq!(inner.len(), 1, "day {day}");
        }
    }

    #[test]
    fn active_path_walks_both_levels() {
        let schedule = mudda_schedule(365, Graha::Ketu, 1).unwrap();
        let path = active_path(&schedule, 100);
        assert_eq!(path.len(), 2);
        let top = &schedule[path[0]];
        assert!(top.contains_day(100));
        assert!(top.sub_periods[path[1]].contains_day(100));
    }

    #[test]
    fn active_path_empty_outside_year() {
        let schedule = mudda_schedule(365, Graha::Ketu, 1).unwrap();
        assert!(active_path(&schedule, -1).is_empty());
        assert!(active_path(&schedule, 365).is_empty());
    }

    #[test]
    fn rejects_zero_length_year() {
        assert_eq!(
            mudda_schedule(0, Graha::Ketu, 0),
            Err(VedicError::InvalidInput("year length must be at least 1 day"))
        );
    }

    #[test]
    fn rejects_excess_depth() {
        assert!(mudda_schedule(365, Graha::Ketu, MAX_MUDDA_DEPTH + 1).is_err());
    }

    #[test]
    fn starting_graha_leads() {
        for g in MUDDA_SEQUENCE {
            let schedule = mudda_schedule(365, g, 0).unwrap();
            assert_eq!(schedule[0].graha, g);
            assert_eq!(schedule[0].start_day, 0);
        }
    }
}
