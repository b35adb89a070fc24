//! The Varshaphala orchestrator.
//!
//! One `compute` call runs the whole annual analysis: solar return,
//! annual chart, strengths, year lord, Muntha, aspects, Tri-Pataki,
//! Mudda dasha, sahams, house predictions, and the summary fields.
//! Components run in a fixed order; the saham active flags are the one
//! true data dependency (they need the dasha's running lord). Results
//! are immutable aggregates, memoized per chart, year, language, and
//! reference date.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use varsha_base::{
    BalaGrade, BeneficNature, Graha, MAX_MUDDA_DEPTH, PanchaVargiyaBala, pancha_vargiya_all,
};

use crate::aspects::{TajikaAspectResult, compute_tajika_aspects};
use crate::cache::{CacheStats, VarshaphalaCache, chart_fingerprint};
use crate::chart::{AnnualChart, NatalChart, build_annual_chart};
use crate::dasha::{MuddaDasha, build_mudda_dasha};
use crate::ephemeris::EphemerisSource;
use crate::error::VarshaError;
use crate::muntha::{Muntha, resolve_muntha};
use crate::predictions::{HousePrediction, score_houses};
use crate::saham::{SahamResult, compute_sahams};
use crate::solar_return::{CancelToken, SolarReturnConfig, find_solar_return};
use crate::texts::{Language, TextProvider};
use crate::tripataki::{TriPatakiChakra, build_tri_pataki};
use crate::year_lord::{YearLord, resolve_year_lord};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct VarshaphalaConfig {
    pub solar_return: SolarReturnConfig,
    /// Days the Mudda schedule spans from the return date.
    pub year_length_days: u32,
    /// Subdivision levels below the nine top-level periods.
    pub dasha_depth: u8,
    /// Date the dasha current flags are relative to; `None` reads the
    /// current UTC date at compute time.
    pub reference_date: Option<NaiveDate>,
}

impl Default for VarshaphalaConfig {
    fn default() -> Self {
        Self {
            solar_return: SolarReturnConfig::default(),
            year_length_days: 365,
            dasha_depth: 1,
            reference_date: None,
        }
    }
}

impl VarshaphalaConfig {
    pub fn validate(&self) -> Result<(), VarshaError> {
        self.solar_return.validate()?;
        if self.year_length_days == 0 {
            return Err(VarshaError::Validation(
                "year_length_days must be at least 1".into(),
            ));
        }
        if self.dasha_depth > MAX_MUDDA_DEPTH {
            return Err(VarshaError::Validation(format!(
                "dasha_depth must be at most {MAX_MUDDA_DEPTH}"
            )));
        }
        Ok(())
    }
}

/// One dated highlight of the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub date: NaiveDate,
    pub description: String,
}

/// The full annual analysis for one (chart, year, language) request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarshaphalaResult {
    pub year: i32,
    pub language: Language,
    /// Date the dasha current flags were resolved against.
    pub reference_date: NaiveDate,
    pub annual_chart: AnnualChart,
    pub balas: [PanchaVargiyaBala; 7],
    pub year_lord: YearLord,
    pub muntha: Muntha,
    pub aspects: Vec<TajikaAspectResult>,
    pub tri_pataki: TriPatakiChakra,
    pub dasha: MuddaDasha,
    pub sahams: Vec<SahamResult>,
    pub houses: Vec<HousePrediction>,
    /// Months (1-12) whose running periods favor the native.
    pub favorable_months: Vec<u32>,
    /// Months (1-12) whose running periods demand care.
    pub challenging_months: Vec<u32>,
    pub key_events: Vec<KeyEvent>,
    pub summary: String,
}

/// The annual-horoscope engine: an ephemeris source, a text provider,
/// and a result cache behind one compute surface.
#[derive(Debug)]
pub struct VarshaphalaEngine<E, T> {
    eph: E,
    texts: T,
    config: VarshaphalaConfig,
    cache: VarshaphalaCache,
}

impl<E: EphemerisSource, T: TextProvider> VarshaphalaEngine<E, T> {
    pub fn new(eph: E, texts: T, config: VarshaphalaConfig) -> Result<Self, VarshaError> {
        config.validate()?;
        Ok(Self {
            eph,
            texts,
            config,
            cache: VarshaphalaCache::new(),
        })
    }

    pub fn config(&self) -> &VarshaphalaConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear()
    }

    /// Compute the annual horoscope, reusing a cached result when the
    /// same request was answered before.
    pub fn compute(
        &self,
        natal: &NatalChart,
        year: i32,
        language: Language,
    ) -> Result<Arc<VarshaphalaResult>, VarshaError> {
        self.compute_cancellable(natal, year, language, &CancelToken::new())
    }

    /// Like [`compute`](Self::compute), aborting with
    /// [`VarshaError::Cancelled`] when the token fires. Cancellation is
    /// checked inside the root-finding loops and between components.
    pub fn compute_cancellable(
        &self,
        natal: &NatalChart,
        year: i32,
        language: Language,
        cancel: &CancelToken,
    ) -> Result<Arc<VarshaphalaResult>, VarshaError> {
        natal.validate()?;
        if year < natal.birth_year() {
            return Err(VarshaError::Validation(self.texts.year_before_birth(
                language,
                year,
                natal.birth_year(),
            )));
        }
        let reference_date = self
            .config
            .reference_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let key = (chart_fingerprint(natal), year, language, reference_date);
        self.cache.get_or_compute(key, || {
            self.compute_fresh(natal, year, language, reference_date, cancel)
        })
    }

    fn compute_fresh(
        &self,
        natal: &NatalChart,
        year: i32,
        language: Language,
        reference_date: NaiveDate,
        cancel: &CancelToken,
    ) -> Result<VarshaphalaResult, VarshaError> {
        let return_jd =
            find_solar_return(&self.eph, natal, year, &self.config.solar_return, cancel)?;
        let annual_chart = build_annual_chart(&self.eph, natal, return_jd)?;
        cancel.bail_if_cancelled()?;

        let balas = pancha_vargiya_all(
            &annual_chart.sapta_longitudes(),
            &annual_chart.sapta_houses(),
            annual_chart.vaar,
            annual_chart.hora_lord,
        );
        let age = year.saturating_sub(natal.birth_year()) as u32;
        let muntha = resolve_muntha(&self.texts, natal, &annual_chart, age, language);
        let year_lord = resolve_year_lord(&annual_chart, muntha.rashi, &balas)?;
        cancel.bail_if_cancelled()?;

        let aspects = compute_tajika_aspects(&self.eph, &self.texts, &annual_chart, language)?;
        let tri_pataki = build_tri_pataki(&self.texts, &annual_chart, language);
        cancel.bail_if_cancelled()?;

        let dasha = build_mudda_dasha(
            &annual_chart,
            natal.utc_offset_hours,
            self.config.year_length_days,
            self.config.dasha_depth,
            reference_date,
        )?;
        let sahams = compute_sahams(&self.texts, &annual_chart, dasha.current_lord, language);
        cancel.bail_if_cancelled()?;

        let houses = score_houses(
            &self.texts,
            &annual_chart,
            &aspects,
            &year_lord,
            &muntha,
            language,
        );

        let (favorable_months, challenging_months) = classify_months(&dasha, &balas);
        let key_events = collect_key_events(&self.texts, &dasha, language);
        let lord_grade = sapta_grade(&balas, year_lord.graha)?;
        let summary = self
            .texts
            .overall_summary(language, year_lord.graha, lord_grade);

        Ok(VarshaphalaResult {
            year,
            language,
            reference_date,
            annual_chart,
            balas,
            year_lord,
            muntha,
            aspects,
            tri_pataki,
            dasha,
            sahams,
            houses,
            favorable_months,
            challenging_months,
            key_events,
            summary,
        })
    }
}

/// One-shot convenience wrapper: a throwaway engine with the default
/// configuration.
pub fn compute_varshaphala<E: EphemerisSource, T: TextProvider>(
    eph: E,
    texts: T,
    natal: &NatalChart,
    year: i32,
    language: Language,
) -> Result<Arc<VarshaphalaResult>, VarshaError> {
    VarshaphalaEngine::new(eph, texts, VarshaphalaConfig::default())?
        .compute(natal, year, language)
}

fn sapta_grade(balas: &[PanchaVargiyaBala; 7], graha: Graha) -> Result<BalaGrade, VarshaError> {
    balas
        .get(graha.index() as usize)
        .map(|b| b.grade)
        .ok_or_else(|| {
            VarshaError::Calculation(format!("{} carries no strength score", graha.name()))
        })
}

/// Whether a period lord leans the month its period covers toward
/// gain. Strong grades override the lord's natural nature; the shadow
/// points carry no grade and fall back to nature alone.
fn favors(graha: Graha, balas: &[PanchaVargiyaBala; 7]) -> bool {
    match balas.get(graha.index() as usize) {
        Some(b) => match b.grade {
            BalaGrade::Purna | BalaGrade::Adhika => true,
            BalaGrade::Heena => false,
            BalaGrade::Madhya | BalaGrade::Alpa => {
                graha.natural_nature() == BeneficNature::Benefic
            }
        },
        None => graha.natural_nature() == BeneficNature::Benefic,
    }
}

/// Classify each top-level period's midpoint month. A month touched by
/// both kinds of period reads as favorable.
fn classify_months(
    dasha: &MuddaDasha,
    balas: &[PanchaVargiyaBala; 7],
) -> (Vec<u32>, Vec<u32>) {
    let mut favorable = Vec::new();
    let mut challenging = Vec::new();
    for p in &dasha.periods {
        if p.duration_days == 0 {
            continue;
        }
        let mid = p
            .start
            .checked_add_days(Days::new((p.duration_days / 2) as u64))
            .unwrap_or(p.start);
        let month = mid.month();
        if favors(p.graha, balas) {
            favorable.push(month);
        } else {
            challenging.push(month);
        }
    }
    favorable.sort_unstable();
    favorable.dedup();
    challenging.sort_unstable();
    challenging.dedup();
    challenging.retain(|m| !favorable.contains(m));
    (favorable, challenging)
}

fn collect_key_events<T: TextProvider + ?Sized>(
    texts: &T,
    dasha: &MuddaDasha,
    language: Language,
) -> Vec<KeyEvent> {
    let mut events = Vec::with_capacity(1 + dasha.periods.len());
    events.push(KeyEvent {
        date: dasha.year_start,
        description: texts.solar_return_event(language),
    });
    for p in &dasha.periods {
        if p.duration_days == 0 {
            continue;
        }
        events.push(KeyEvent {
            date: p.start,
            description: texts.period_begins(language, p.graha),
        });
    }
    events
}
