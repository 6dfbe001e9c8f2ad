//! Tithi (lunar day) and paksha (fortnight).
//!
//! The Moon-Sun elongation is cut into 30 tithis of 12 deg. Indices 0-14
//! form Shukla paksha (waxing), 15-29 Krishna paksha (waning); each paksha
//! numbers its tithis 1-15 on its own.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Elongation covered by one tithi.
pub const TITHI_SPAN: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, new moon to full moon.
    Shukla,
    /// Waning half, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names for Shukla paksha, ending at the full moon.
pub const SHUKLA_TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

/// Tithi names for Krishna paksha, ending at the new moon.
pub const KRISHNA_TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Amavasya",
];

/// How tithi names are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TithiNaming {
    /// Per-paksha lists: Krishna 15 is Amavasya.
    #[default]
    PakshaAware,
    /// One list for both pakshas, so Krishna 15 also reads Purnima.
    /// Matches older reports that used a single table.
    LegacySingleList,
}

/// Result of a tithi lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// 0-based tithi index across the month (0..29).
    pub tithi_index: u8,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Elongation already covered inside this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

impl TithiInfo {
    /// Tithi name under the chosen convention.
    pub fn name(&self, naming: TithiNaming) -> &'static str {
        let table = match (naming, self.paksha) {
            (TithiNaming::PakshaAware, Paksha::Krishna) => &KRISHNA_TITHI_NAMES,
            _ => &SHUKLA_TITHI_NAMES,
        };
        table[(self.tithi_in_paksha.clamp(1, 15) - 1) as usize]
    }
}

/// Determine tithi from the Moon-Sun elongation in degrees.
///
/// The elongation is normalized first, so `moon - sun` can be passed
/// straight in.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let d = normalize_360(elongation_deg);
    let idx = ((d / TITHI_SPAN).floor() as u8).min(29);
    let (paksha, tithi_in_paksha) = if idx < 15 {
        (Paksha::Shukla, idx + 1)
    } else {
        (Paksha::Krishna, idx - 14)
    };

    TithiInfo {
        tithi_index: idx,
        paksha,
        tithi_in_paksha,
        degrees_in_tithi: (d - idx as f64 * TITHI_SPAN).max(0.0),
    }
}
