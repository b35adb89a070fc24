//! Integration tests for Pancha Vargiya Bala.
//!
//! Pure-math tests over hand-built placements.

use varsha_base::bala::{dig_bala, kala_bala, kendradi_bala, kshetra_bala, uchcha_bala};
use varsha_base::{
    BalaGrade, Graha, SAPTA_GRAHAS, Vaar, pancha_vargiya, pancha_vargiya_all, strongest_graha,
};

// ---------------------------------------------------------------------------
// Component ranges
// ---------------------------------------------------------------------------

#[test]
fn components_stay_in_unit_range() {
    for &graha in &SAPTA_GRAHAS {
        for step in 0..72 {
            let lon = step as f64 * 5.0;
            for house in 1..=12u8 {
                let parts = [
                    kshetra_bala(graha, lon),
                    uchcha_bala(graha, lon),
                    dig_bala(graha, house),
                    kala_bala(graha, Vaar::Budhvaar, Graha::Shukra),
                    kendradi_bala(house),
                ];
                for (i, p) in parts.iter().enumerate() {
                    assert!(
                        (0.0..=4.0).contains(p),
                        "{} component {i} at lon {lon} house {house}: {p}",
                        graha.name()
                    );
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Full scoring scenarios
// ---------------------------------------------------------------------------

#[test]
fn exalted_sun_in_tenth_on_sunday_scores_full() {
    // Sun at 10.0 Mesha (exact exaltation), 10th house (its directional
    // house), Sunday in the Sun's own hora: every component maxes out.
    let bala = pancha_vargiya(Graha::Surya, 10.0, 10, Vaar::Ravivaar, Graha::Surya);
    assert_eq!(bala.kshetra, 4.0);
    assert_eq!(bala.uchcha, 4.0);
    assert_eq!(bala.dig, 4.0);
    assert_eq!(bala.kala, 4.0);
    assert_eq!(bala.kendradi, 4.0);
    assert_eq!(bala.total, 20.0);
    assert_eq!(bala.grade, BalaGrade::Purna);
    assert_eq!(bala.grade.rating(), 5);
}

#[test]
fn debilitated_sun_in_fifth_scores_heena() {
    // Sun at 190.0 (exact debilitation in Tula), 5th house, on a day and
    // hora it does not rule. Only a sliver of dig and the panaphara
    // kendradi score remain.
    let bala = pancha_vargiya(Graha::Surya, 190.0, 5, Vaar::Somvaar, Graha::Chandra);
    assert_eq!(bala.kshetra, 0.0);
    assert_eq!(bala.uchcha, 0.0);
    assert!((bala.dig - 4.0 / 6.0).abs() < 1e-12, "dig = {}", bala.dig);
    assert_eq!(bala.kala, 0.0);
    assert_eq!(bala.kendradi, 2.0);
    assert_eq!(bala.grade, BalaGrade::Heena);
    assert_eq!(bala.grade.rating(), 1);
}

#[test]
fn moon_in_own_hora_gets_half_kala() {
    // Moon on a Wednesday (not its day) during a Moon hora: 0 + 2.
    assert_eq!(kala_bala(Graha::Chandra, Vaar::Budhvaar, Graha::Chandra), 2.0);
    // Moon on Monday during a Moon hora: 2 + 2.
    assert_eq!(kala_bala(Graha::Chandra, Vaar::Somvaar, Graha::Chandra), 4.0);
}

#[test]
fn grade_cut_points() {
    assert_eq!(BalaGrade::from_total(20.0), BalaGrade::Purna);
    assert_eq!(BalaGrade::from_total(16.0), BalaGrade::Purna);
    assert_eq!(BalaGrade::from_total(15.9), BalaGrade::Adhika);
    assert_eq!(BalaGrade::from_total(12.0), BalaGrade::Adhika);
    assert_eq!(BalaGrade::from_total(11.9), BalaGrade::Madhya);
    assert_eq!(BalaGrade::from_total(8.0), BalaGrade::Madhya);
    assert_eq!(BalaGrade::from_total(7.9), BalaGrade::Alpa);
    assert_eq!(BalaGrade::from_total(4.0), BalaGrade::Alpa);
    assert_eq!(BalaGrade::from_total(3.9), BalaGrade::Heena);
    assert_eq!(BalaGrade::from_total(0.0), BalaGrade::Heena);
}

// ---------------------------------------------------------------------------
// Batch scoring and ranking
// ---------------------------------------------------------------------------

#[test]
fn batch_scores_seven_in_sapta_order() {
    let lons = [10.0, 33.0, 298.0, 165.0, 95.0, 357.0, 200.0];
    let houses = [10, 4, 1, 7, 5, 9, 3];
    let all = pancha_vargiya_all(&lons, &houses, Vaar::Ravivaar, Graha::Surya);
    assert_eq!(all.len(), 7);
    for (i, bala) in all.iter().enumerate() {
        assert_eq!(bala.graha, SAPTA_GRAHAS[i]);
        assert!(bala.total <= 20.0 + 1e-9);
        assert!(bala.total >= 0.0);
    }
}

#[test]
fn all_exalted_ranks_by_remaining_components() {
    // Every graha at its exaltation degree; houses and day then decide.
    let lons = [10.0, 33.0, 298.0, 165.0, 95.0, 357.0, 200.0];
    let houses = [10, 4, 10, 1, 1, 4, 7];
    let all = pancha_vargiya_all(&lons, &houses, Vaar::Ravivaar, Graha::Surya);
    // Sun: exalted (4) + uchcha (4) + dig house 10 (4) + day and hora (4)
    // + kendra (4) = 20, untouchable here.
    let strongest = strongest_graha(&all);
    assert_eq!(strongest, Some(Graha::Surya));
}

#[test]
fn strongest_of_empty_is_none() {
    assert_eq!(strongest_graha(&[]), None);
}
