//! End-to-end golden tests for the daily panchang and its JSON envelope.
//!
//! Pure-math tests (mean longitudes, placeholder sunrise unless noted).

use panchang_config::{NamingConfig, PanchangConfig};
use panchang_engine::{
    GeoLocation, PanchangEngine, PanchangRequest, TimezoneInput, respond, respond_json,
};
use panchang_vedic::{Nakshatra, Observance, Paksha, RashiNaming, TithiNaming, Yoga};
use serde_json::Value;

fn engine() -> PanchangEngine {
    PanchangEngine::default()
}

fn request(date: &str) -> PanchangRequest {
    PanchangRequest {
        date: date.to_string(),
        latitude: 28.6,
        longitude: 77.2,
        timezone: TimezoneInput::Hours(5.5),
    }
}

fn to_value(req: &PanchangRequest, engine: &PanchangEngine) -> Value {
    serde_json::from_str(&respond(req, engine).to_json()).unwrap()
}

// ---------------------------------------------------------------------------
// 2024-01-01, New Delhi
// ---------------------------------------------------------------------------

#[test]
fn delhi_2024_01_01_info() {
    let info = engine()
        .for_date(
            "2024-01-01".parse().unwrap(),
            &GeoLocation::new(28.6, 77.2),
            5.5,
        )
        .unwrap();
    let c = info.classification;
    assert_eq!(info.jdn, 2_460_311);
    assert!((c.sun_longitude - 280.651_232_897).abs() < 1e-6);
    assert!((c.moon_longitude - 162.607_853_009).abs() < 1e-6);
    assert_eq!(c.tithi.paksha, Paksha::Krishna);
    assert_eq!(c.tithi.tithi_in_paksha, 6);
    assert_eq!(c.nakshatra.nakshatra, Nakshatra::Hasta);
    assert_eq!(c.yoga.yoga, Yoga::Sukarma);
}

#[test]
fn delhi_2024_01_01_json() {
    let v = to_value(&request("2024-01-01"), &engine());
    assert_eq!(v["success"], true);
    assert_eq!(v["date"], "2024-01-01");
    assert_eq!(v["tithi"], 6);
    assert_eq!(v["tithiName"], "Shashthi");
    assert_eq!(v["paksha"], "Krishna");
    assert_eq!(v["nakshatra"], "Hasta");
    assert_eq!(v["yoga"], "Sukarma");
    assert_eq!(v["yogaEffect"], "Auspicious");
    assert_eq!(v["sunRashi"], "Capricorn");
    assert_eq!(v["moonRashi"], "Virgo");
    assert_eq!(v["sunLongitude"], 280.65);
    assert_eq!(v["moonLongitude"], 162.61);
    assert_eq!(v["sunrise"], "06:00");
    assert_eq!(v["coordinates"]["latitude"], 28.6);
    assert_eq!(v["coordinates"]["longitude"], 77.2);
    assert_eq!(v["timezone"], 5.5);
    assert_eq!(v["karana"], "Gara");
    assert_eq!(v["vaar"], "Somvaar");
    assert_eq!(v["nadi"], "Chandra");
    assert_eq!(v["auspicious"], true);
    assert_eq!(v["observances"], serde_json::json!(["Good for New Endeavors"]));
    assert!(v.get("error").is_none());
}

// ---------------------------------------------------------------------------
// Interpretation
// ---------------------------------------------------------------------------

#[test]
fn delhi_2024_01_01_interpretation() {
    let info = engine()
        .for_date(
            "2024-01-01".parse().unwrap(),
            &GeoLocation::new(28.6, 77.2),
            5.5,
        )
        .unwrap();
    assert!(info.is_auspicious());
    assert_eq!(info.observances(), vec![Observance::NewEndeavors]);

    let reading = info.interpretation();
    assert_eq!(reading.summary, "Monday, Shashthi in Hasta");
    assert_eq!(
        reading.details,
        vec![
            "Shashthi (Krishna) - 21/30".to_string(),
            "Nakshatra: Hasta (pada 1)".to_string(),
            "Yoga: Sukarma - Auspicious".to_string(),
            "Moon in Virgo".to_string(),
        ]
    );
    assert_eq!(reading.recommendation, "Favorable day for important activities");
}

#[test]
fn ekadashi_days_suggest_the_fast() {
    let days = engine()
        .for_range(
            "2024-01-01".parse().unwrap(),
            60,
            &GeoLocation::new(28.6, 77.2),
            5.5,
        )
        .unwrap();
    let mut seen = 0;
    for info in &days {
        let obs = info.observances();
        let ekadashi = info.classification.tithi.tithi_in_paksha == 11;
        assert_eq!(obs.contains(&Observance::EkadashiVrat), ekadashi, "{}", info.date);
        if ekadashi {
            seen += 1;
        }
    }
    assert!(seen >= 2, "only {seen} Ekadashi days in 60");
}

#[test]
fn location_does_not_change_classification() {
    let e = engine();
    let a = to_value(&request("2024-01-01"), &e);
    let mut far = request("2024-01-01");
    far.latitude = -33.9;
    far.longitude = 18.4;
    far.timezone = TimezoneInput::Hours(2.0);
    let b = to_value(&far, &e);
    for key in ["tithi", "paksha", "nakshatra", "yoga", "sunRashi", "moonRashi"] {
        assert_eq!(a[key], b[key], "{key}");
    }
}

// ---------------------------------------------------------------------------
// Naming options
// ---------------------------------------------------------------------------

#[test]
fn sanskrit_rashi_names() {
    let config = PanchangConfig {
        naming: NamingConfig {
            tithi: TithiNaming::PakshaAware,
            rashi: RashiNaming::Sanskrit,
        },
        ..PanchangConfig::default()
    };
    let e = PanchangEngine::from_config(&config).unwrap();
    let v = to_value(&request("2024-01-01"), &e);
    assert_eq!(v["sunRashi"], "Makara");
    assert_eq!(v["moonRashi"], "Kanya");
}

#[test]
fn amavasya_vs_legacy_name_over_a_month() {
    let loc = GeoLocation::new(28.6, 77.2);
    let start = "2024-01-01".parse().unwrap();
    let legacy = PanchangEngine::from_config(&PanchangConfig {
        naming: NamingConfig {
            tithi: TithiNaming::LegacySingleList,
            rashi: RashiNaming::Western,
        },
        ..PanchangConfig::default()
    })
    .unwrap();

    let canonical = engine().for_range(start, 60, &loc, 5.5).unwrap();
    let old = legacy.for_range(start, 60, &loc, 5.5).unwrap();

    let mut saw_krishna_15 = false;
    for (a, b) in canonical.iter().zip(&old) {
        let t = a.classification.tithi;
        if t.paksha == Paksha::Krishna && t.tithi_in_paksha == 15 {
            saw_krishna_15 = true;
            assert_eq!(a.tithi_name(), "Amavasya");
            assert_eq!(b.tithi_name(), "Purnima");
        } else {
            assert_eq!(a.tithi_name(), b.tithi_name());
        }
    }
    assert!(saw_krishna_15, "no Krishna 15 in 60 days");
}

// ---------------------------------------------------------------------------
// Failure shapes
// ---------------------------------------------------------------------------

#[test]
fn invalid_date_is_failure() {
    let v = to_value(&request("2024-13-40"), &engine());
    assert_eq!(v["success"], false);
    let err = v["error"].as_str().unwrap();
    assert!(!err.is_empty());
    assert!(err.contains("month 13"), "{err}");
    assert!(v.get("tithi").is_none());
}

#[test]
fn invalid_latitude_is_failure() {
    let mut req = request("2024-01-01");
    req.latitude = 91.0;
    let v = to_value(&req, &engine());
    assert_eq!(v["success"], false);
    assert!(v["error"].as_str().unwrap().contains("latitude"));
}

#[test]
fn unknown_timezone_is_failure() {
    let mut req = request("2024-01-01");
    req.timezone = TimezoneInput::Name("Nowhere/Special".to_string());
    let v = to_value(&req, &engine());
    assert_eq!(v["success"], false);
}

#[test]
fn malformed_json_is_failure() {
    let r = respond_json("{ not json", &engine());
    assert!(!r.success);
    assert!(r.error.unwrap().starts_with("invalid request"));
}

#[test]
fn json_request_with_alias() {
    let r = respond_json(
        r#"{"date":"2024-01-01","latitude":28.6,"longitude":77.2,"timezone":"Asia/Kolkata"}"#,
        &engine(),
    );
    assert!(r.success);
    assert_eq!(r.report.unwrap().timezone, 5.5);
}

// ---------------------------------------------------------------------------
// Approximate sunrise
// ---------------------------------------------------------------------------

#[test]
fn approximate_sunrise_in_json() {
    let config =
        PanchangConfig::from_json_str(r#"{"sunrise":{"mode":"approximate"}}"#).unwrap();
    let e = PanchangEngine::from_config(&config).unwrap();
    let v = to_value(&request("2024-01-01"), &e);
    let s = v["sunrise"].as_str().unwrap();
    assert!(("06:45"..="07:30").contains(&s), "sunrise {s}");
}
