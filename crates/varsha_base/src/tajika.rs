//! Tajika aspect geometry: the annual-chart aspect catalogue.
//!
//! Aspects are cast only among the seven visible planets. The catalogue is
//! the annual system's fixed eight-angle set (it is not the Western major
//! set: the quintile family and the 45/150 angles participate, each with
//! its own orb). A pair either lands inside exactly one angle's orb window
//! or forms no aspect at all.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::util::normalize_to_pm180;

/// The eight Tajika aspect-angle classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TajikaAspect {
    Conjunction,
    SemiSquare,
    Quintile,
    Square,
    Trine,
    Biquintile,
    Quincunx,
    Opposition,
}

/// All aspect classes in ascending angle order.
pub const ALL_TAJIKA_ASPECTS: [TajikaAspect; 8] = [
    TajikaAspect::Conjunction,
    TajikaAspect::SemiSquare,
    TajikaAspect::Quintile,
    TajikaAspect::Square,
    TajikaAspect::Trine,
    TajikaAspect::Biquintile,
    TajikaAspect::Quincunx,
    TajikaAspect::Opposition,
];

/// Harmonic tone of an aspect class, used when weighing house influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectNature {
    Harmonious,
    Tense,
    Neutral,
}

/// Strength band of a matched aspect, from the orb relative to the
/// class maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AspectStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

impl TajikaAspect {
    /// Exact angle of the class in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::SemiSquare => 45.0,
            Self::Quintile => 72.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Biquintile => 144.0,
            Self::Quincunx => 150.0,
            Self::Opposition => 180.0,
        }
    }

    /// Maximum orb for the class. The four major angles carry wide orbs,
    /// the four minor ones tight orbs.
    pub const fn max_orb(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition => 8.0,
            Self::Square | Self::Trine => 7.0,
            Self::SemiSquare | Self::Quincunx => 3.0,
            Self::Quintile | Self::Biquintile => 2.0,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::SemiSquare => "Semi-Square",
            Self::Quintile => "Quintile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Biquintile => "Biquintile",
            Self::Quincunx => "Quincunx",
            Self::Opposition => "Opposition",
        }
    }

    /// Harmonic tone of the class.
    pub const fn nature(self) -> AspectNature {
        match self {
            Self::Trine | Self::Quintile | Self::Biquintile => AspectNature::Harmonious,
            Self::SemiSquare | Self::Square | Self::Quincunx | Self::Opposition => {
                AspectNature::Tense
            }
            Self::Conjunction => AspectNature::Neutral,
        }
    }
}

impl AspectStrength {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryStrong => "Very Strong",
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
            Self::VeryWeak => "Very Weak",
        }
    }
}

/// Band the orb into the five strength classes by its fraction of the
/// class maximum (steps at 20/40/60/80 percent).
pub fn strength_from_orb(orb_abs: f64, max_orb: f64) -> AspectStrength {
    let ratio = orb_abs / max_orb;
    if ratio <= 0.2 {
        AspectStrength::VeryStrong
    } else if ratio <= 0.4 {
        AspectStrength::Strong
    } else if ratio <= 0.6 {
        AspectStrength::Moderate
    } else if ratio <= 0.8 {
        AspectStrength::Weak
    } else {
        AspectStrength::VeryWeak
    }
}

/// Classify an angular separation (reduced to [0, 180]) against the
/// catalogue. Returns the matched class and the signed orb (separation
/// minus exact angle), or None when no orb window contains it.
///
/// The orb windows do not overlap, but the nearest match is taken anyway
/// so a future orb-table change cannot silently double-classify.
pub fn classify_separation(separation: f64) -> Option<(TajikaAspect, f64)> {
    let mut best: Option<(TajikaAspect, f64)> = None;
    for aspect in ALL_TAJIKA_ASPECTS {
        let orb = separation - aspect.angle();
        if orb.abs() <= aspect.max_orb() {
            match best {
                Some((_, b)) if b.abs() <= orb.abs() => {}
                _ => best = Some((aspect, orb)),
            }
        }
    }
    best
}

/// One matched aspect between two grahas, geometry only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectGeometry {
    pub graha_a: Graha,
    pub graha_b: Graha,
    pub aspect: TajikaAspect,
    /// Signed orb: separation minus the exact angle.
    pub orb_deg: f64,
    pub applying: bool,
    pub strength: AspectStrength,
}

/// Applying/separating from the instantaneous rate of the separation.
///
/// The separation `s = |Δlon|` grows at `±(speed_a − speed_b)` depending
/// on which side of the conjunction axis the pair sits. The pair is
/// applying while the signed orb is shrinking toward the exact angle; an
/// exactly partile aspect counts as applying.
pub fn is_applying(lon_a: f64, speed_a: f64, lon_b: f64, speed_b: f64, orb: f64) -> bool {
    let d = normalize_to_pm180(lon_a - lon_b);
    let rate = if d >= 0.0 {
        speed_a - speed_b
    } else {
        speed_b - speed_a
    };
    if orb > 0.0 {
        rate < 0.0
    } else if orb < 0.0 {
        rate > 0.0
    } else {
        true
    }
}

/// Scan all unordered pairs of the seven visible planets.
///
/// `lons` and `speeds` are indexed in SAPTA_GRAHAS order (deg, deg/day).
/// At most one geometry row per pair; pairs outside every orb window are
/// omitted.
pub fn aspect_pairs(lons: &[f64; 7], speeds: &[f64; 7]) -> Vec<AspectGeometry> {
    let mut out = Vec::new();
    for i in 0..7 {
        for j in (i + 1)..7 {
            let separation = normalize_to_pm180(lons[i] - lons[j]).abs();
            if let Some((aspect, orb)) = classify_separation(separation) {
                out.push(AspectGeometry {
                    graha_a: SAPTA_GRAHAS[i],
                    graha_b: SAPTA_GRAHAS[j],
                    aspect,
                    orb_deg: orb,
                    applying: is_applying(lons[i], speeds[i], lons[j], speeds[j], orb),
                    strength: strength_from_orb(orb.abs(), aspect.max_orb()),
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn catalogue_angles_ascend() {
        for w in ALL_TAJIKA_ASPECTS.windows(2) {
            assert!(w[0].angle() < w[1].angle());
        }
    }

    #[test]
    fn exact_square() {
        let (aspect, orb) = classify_separation(90.0).unwrap();
        assert_eq!(aspect, TajikaAspect::Square);
        assert!(orb.abs() < EPS);
        assert_eq!(strength_from_orb(orb.abs(), aspect.max_orb()), AspectStrength::VeryStrong);
    }

    #[test]
    fn semisquare_off_by_two() {
        let (aspect, orb) = classify_separation(47.0).unwrap();
        assert_eq!(aspect, TajikaAspect::SemiSquare);
        assert!((orb - 2.0).abs() < EPS);
    }

    #[test]
    fn gap_between_windows_is_no_aspect() {
        assert!(classify_separation(30.0).is_none());
        assert!(classify_separation(60.0).is_none());
        assert!(classify_separation(105.0).is_none());
    }

    #[test]
    fn orb_bound_respected() {
        for sep in [0.0, 8.0, 44.0, 73.9, 96.9, 126.9, 145.9, 152.9, 172.0] {
            if let Some((aspect, orb)) = classify_separation(sep) {
                assert!(orb.abs() <= aspect.max_orb() + EPS, "sep {sep}");
            }
        }
    }

    #[test]
    fn strength_bands() {
        assert_eq!(strength_from_orb(0.0, 8.0), AspectStrength::VeryStrong);
        assert_eq!(strength_from_orb(2.0, 8.0), AspectStrength::Strong);
        assert_eq!(strength_from_orb(4.0, 8.0), AspectStrength::Moderate);
        assert_eq!(strength_from_orb(6.0, 8.0), AspectStrength::Weak);
        assert_eq!(strength_from_orb(7.9, 8.0), AspectStrength::VeryWeak);
    }

    #[test]
    fn applying_when_faster_body_closes_in() {
        // Moon 85 deg ahead of the Sun, separation rising toward the square.
        assert!(is_applying(85.0, 13.2, 0.0, 0.9856, -5.0));
        // Moon past the square and still pulling ahead: separating.
        assert!(!is_applying(95.0, 13.2, 0.0, 0.9856, 5.0));
    }

    #[test]
    fn exact_aspect_counts_as_applying() {
        assert!(is_applying(90.0, 13.2, 0.0, 0.9856, 0.0));
    }

    #[test]
    fn pair_scan_unique_per_pair() {
        // Sun, Moon square; Mars trine Sun; others far from any window.
        let lons = [0.0, 90.0, 120.0, 30.5, 210.5, 60.0, 285.0];
        let speeds = [0.9856, 13.2, 0.5, 1.2, 0.08, 1.1, 0.03];
        let hits = aspect_pairs(&lons, &speeds);
        for i in 0..hits.len() {
            for j in (i + 1)..hits.len() {
                let same_pair = hits[i].graha_a == hits[j].graha_a
                    && hits[i].graha_b == hits[j].graha_b;
                assert!(!same_pair, "duplicate pair row");
            }
        }
        assert!(hits.iter().any(|h| {
            h.graha_a == Graha::Surya
                && h.graha_b == Graha::Chandra
                && h.aspect == TajikaAspect::Square
        }));
        assert!(hits.iter().any(|h| {
            h.graha_a == Graha::Surya
                && h.graha_b == Graha::Mangal
                && h.aspect == TajikaAspect::Trine
        }));
    }

    #[test]
    fn nodes_never_in_pair_scan() {
        // The scan is defined over SAPTA_GRAHAS only; the output can never
        // name a shadow point.
        let lons = [0.0; 7];
        let speeds = [1.0; 7];
        for hit in aspect_pairs(&lons, &speeds) {
            assert!(SAPTA_GRAHAS.contains(&hit.graha_a));
            assert!(SAPTA_GRAHAS.contains(&hit.graha_b));
        }
    }
}
