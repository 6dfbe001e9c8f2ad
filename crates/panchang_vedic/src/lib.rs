//! Vedic calendar classification over ecliptic longitudes.
//!
//! This crate provides:
//! - Exact-fraction angular partitions shared by rashi, nakshatra and yoga
//! - Rashi (12 signs) with DMS conversion
//! - Nakshatra (27 mansions) with pada
//! - Tithi, paksha and karana from Moon-Sun elongation
//! - Yoga from the Sun + Moon sum, with auspiciousness
//! - Vaar (weekday) and nadi
//! - [`classify`], which runs all of the above for one longitude pair
//! - Day verdict and suggested observances over a classification
//!
//! Everything here is pure arithmetic; no ephemeris access.

pub mod classify;
pub mod error;
pub mod karana;
pub mod nadi;
pub mod nakshatra;
pub mod observance;
pub mod partition;
pub mod rashi;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use classify::{PanchangClassification, classify};
pub use error::VedicError;
pub use karana::{KARANA_SPAN, Karana, KaranaInfo, karana_from_elongation};
pub use nadi::{Nadi, nadi_for};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use observance::{
    Observance, is_amavasya, is_auspicious_day, is_purnima, observances, recommendation,
};
pub use partition::{
    AngularPartition, NAKSHATRA_PARTITION, PADA_PARTITION, RASHI_PARTITION, YOGA_PARTITION,
};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, RashiNaming, deg_to_dms, dms_to_deg, rashi_from_longitude,
};
pub use tithi::{
    KRISHNA_TITHI_NAMES, Paksha, SHUKLA_TITHI_NAMES, TITHI_SPAN, TithiInfo, TithiNaming,
    tithi_from_elongation,
};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jdn};
pub use yoga::{ALL_YOGAS, Yoga, YogaEffect, YogaInfo, yoga_from_sum};
