use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use varsha_base::{Graha, normalize_360};
use varsha_engine::{
    BodyState, BuiltinTexts, CancelToken, EphemerisError, EphemerisSource, GeoLocation,
    Language, NatalChart, SolarReturnConfig, VarshaphalaConfig, VarshaphalaEngine,
    find_solar_return, jd_from_datetime,
};

#[derive(Debug, Clone)]
struct LinearEphemeris {
    epoch_jd: f64,
}

impl EphemerisSource for LinearEphemeris {
    fn body_state(&self, graha: Graha, jd_ut: f64) -> Result<BodyState, EphemerisError> {
        let days = jd_ut - self.epoch_jd;
        let (epoch_lon, rate) = match graha {
            Graha::Surya => (15.0, 360.0 / 365.2422),
            Graha::Chandra => (300.0, 13.176),
            Graha::Mangal => (120.0, 0.524),
            Graha::Buddh => (40.0, 1.383),
            Graha::Guru => (200.0, 0.083),
            Graha::Shukra => (75.0, 1.2),
            Graha::Shani => (280.0, 0.033),
            Graha::Rahu => (10.0, -0.053),
            Graha::Ketu => (190.0, -0.053),
        };
        Ok(BodyState {
            longitude_deg: normalize_360(epoch_lon + rate * days),
            retrograde: rate < 0.0,
        })
    }

    fn ascendant_deg(&self, jd_ut: f64, _location: &GeoLocation) -> Result<f64, EphemerisError> {
        Ok(normalize_360(100.0 + (jd_ut - self.epoch_jd) * 361.0))
    }
}

fn natal_chart() -> NatalChart {
    NatalChart {
        birth_utc: Utc.with_ymd_and_hms(1990, 4, 14, 6, 30, 0).unwrap(),
        utc_offset_hours: 5.5,
        location: GeoLocation {
            latitude_deg: 28.6139,
            longitude_deg: 77.209,
            altitude_m: 216.0,
        },
        ascendant_deg: 45.0,
        longitudes: [15.0, 220.0, 300.0, 30.0, 100.0, 350.0, 280.0, 120.0, 300.0],
    }
}

fn solar_return_bench(c: &mut Criterion) {
    let natal = natal_chart();
    let eph = LinearEphemeris {
        epoch_jd: jd_from_datetime(&natal.birth_utc),
    };
    let config = SolarReturnConfig::default();
    let cancel = CancelToken::new();

    let mut group = c.benchmark_group("solar_return");
    group.bench_function("find", |b| {
        b.iter(|| {
            find_solar_return(&eph, black_box(&natal), black_box(2024), &config, &cancel)
        })
    });
    group.finish();
}

fn full_computation_bench(c: &mut Criterion) {
    let natal = natal_chart();
    let eph = LinearEphemeris {
        epoch_jd: jd_from_datetime(&natal.birth_utc),
    };
    let mut config = VarshaphalaConfig::default();
    config.reference_date = NaiveDate::from_ymd_opt(2024, 8, 1);
    let engine = VarshaphalaEngine::new(eph, BuiltinTexts, config).unwrap();

    let mut group = c.benchmark_group("varshaphala");
    group.bench_function("compute_uncached", |b| {
        b.iter(|| {
            engine.clear_cache();
            engine.compute(black_box(&natal), black_box(2024), Language::English)
        })
    });
    group.bench_function("compute_cached", |b| {
        b.iter(|| engine.compute(black_box(&natal), black_box(2024), Language::English))
    });
    group.finish();
}

criterion_group!(benches, solar_return_bench, full_computation_bench);
criterion_main!(benches);
