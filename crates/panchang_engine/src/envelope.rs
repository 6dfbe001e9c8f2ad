//! JSON request/response envelope.
//!
//! Request:
//!
//! ```json
//! { "date": "2024-01-01", "latitude": 28.6, "longitude": 77.2, "timezone": 5.5 }
//! ```
//!
//! `timezone` may also be a numeric string or a name such as `"IST"`,
//! `"Asia/Kolkata"` or `"UTC"`. The response always carries `success`; on
//! failure the only other field is `error`.

use serde::{Deserialize, Serialize};

use panchang_time::CalendarDate;

use crate::engine::PanchangEngine;
use crate::error::PanchangError;
use crate::location::{GeoLocation, validate_tz_hours};
use crate::panchang_types::PanchangInfo;

/// Known time-zone names and their fixed offsets (no daylight-saving rules).
const TIMEZONE_ALIASES: &[(&str, f64)] = &[
    ("asia/kolkata", 5.5),
    ("asia/calcutta", 5.5),
    ("kolkata", 5.5),
    ("ist", 5.5),
    ("asia/delhi", 5.5),
    ("asia/mumbai", 5.5),
    ("asia/kathmandu", 5.75),
    ("asia/dhaka", 6.0),
    ("asia/dubai", 4.0),
    ("asia/singapore", 8.0),
    ("asia/tokyo", 9.0),
    ("asia/jakarta", 7.0),
    ("utc", 0.0),
    ("gmt", 0.0),
    ("europe/london", 0.0),
    ("europe/paris", 1.0),
    ("america/new_york", -5.0),
    ("america/los_angeles", -8.0),
    ("pst", -8.0),
    ("pdt", -7.0),
    ("est", -5.0),
    ("edt", -4.0),
    ("bst", 1.0),
    ("cest", 2.0),
];

/// Time-zone field: hours east of UTC, or a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimezoneInput {
    Hours(f64),
    Name(String),
}

impl TimezoneInput {
    /// Offset in hours, validated to [-14, 14].
    pub fn resolve(&self) -> Result<f64, PanchangError> {
        let hours = match self {
            Self::Hours(h) => *h,
            Self::Name(name) => resolve_timezone_name(name)?,
        };
        validate_tz_hours(hours)
    }
}

/// Look up a numeric string or alias, case-insensitively.
pub fn resolve_timezone_name(name: &str) -> Result<f64, PanchangError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PanchangError::InvalidTimezone("empty timezone".to_string()));
    }
    if let Ok(h) = trimmed.parse::<f64>() {
        return Ok(h);
    }
    let key = trimmed.to_ascii_lowercase();
    TIMEZONE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|&(_, h)| h)
        .ok_or_else(|| PanchangError::InvalidTimezone(format!("unknown timezone '{trimmed}'")))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanchangRequest {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: TimezoneInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Success payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangReport {
    pub date: String,
    /// Tithi number within the paksha, 1-15.
    pub tithi: u8,
    pub tithi_name: String,
    pub paksha: String,
    pub nakshatra: String,
    pub yoga: String,
    pub yoga_effect: String,
    pub sun_rashi: String,
    pub moon_rashi: String,
    pub moon_longitude: f64,
    pub sun_longitude: f64,
    pub sunrise: String,
    pub coordinates: Coordinates,
    pub timezone: f64,
    pub karana: String,
    pub vaar: String,
    pub nadi: String,
    pub auspicious: bool,
    pub observances: Vec<String>,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl From<&PanchangInfo> for PanchangReport {
    fn from(info: &PanchangInfo) -> Self {
        let c = &info.classification;
        Self {
            date: info.date.to_string(),
            tithi: c.tithi.tithi_in_paksha,
            tithi_name: info.tithi_name().to_string(),
            paksha: c.tithi.paksha.name().to_string(),
            nakshatra: c.nakshatra.nakshatra.name().to_string(),
            yoga: c.yoga.yoga.name().to_string(),
            yoga_effect: c.yoga.effect.label().to_string(),
            sun_rashi: info.sun_rashi_name().to_string(),
            moon_rashi: info.moon_rashi_name().to_string(),
            moon_longitude: round2(c.moon_longitude),
            sun_longitude: round2(c.sun_longitude),
            sunrise: info.sunrise.hh_mm(),
            coordinates: Coordinates {
                latitude: info.location.latitude_deg,
                longitude: info.location.longitude_deg,
            },
            timezone: info.tz_hours,
            karana: c.karana.karana.name().to_string(),
            vaar: info.vaar.name().to_string(),
            nadi: c.nadi.name().to_string(),
            auspicious: info.is_auspicious(),
            observances: info
                .observances()
                .iter()
                .map(|o| o.name().to_string())
                .collect(),
        }
    }
}

/// Response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: Option<PanchangReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PanchangResponse {
    pub fn ok(report: PanchangReport) -> Self {
        Self {
            success: true,
            report: Some(report),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            report: None,
            error: Some(message.into()),
        }
    }

    /// Compact JSON. Falls back to a hand-built failure object if
    /// serialization itself fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({ "success": false, "error": e.to_string() }).to_string()
        })
    }
}

fn try_respond(
    request: &PanchangRequest,
    engine: &PanchangEngine,
) -> Result<PanchangReport, PanchangError> {
    let date: CalendarDate = request.date.parse()?;
    let location = GeoLocation::checked(request.latitude, request.longitude)?;
    let tz_hours = request.timezone.resolve()?;
    let info = engine.for_date(date, &location, tz_hours)?;
    Ok(PanchangReport::from(&info))
}

/// Answer a request. Every failure becomes `success = false`.
pub fn respond(request: &PanchangRequest, engine: &PanchangEngine) -> PanchangResponse {
    match try_respond(request, engine) {
        Ok(report) => PanchangResponse::ok(report),
        Err(e) => {
            log::warn!("panchang request for '{}' failed: {e}", request.date);
            PanchangResponse::failure(e.to_string())
        }
    }
}

/// Parse a JSON request and answer it. Malformed JSON is a failure response.
pub fn respond_json(input: &str, engine: &PanchangEngine) -> PanchangResponse {
    match serde_json::from_str::<PanchangRequest>(input) {
        Ok(request) => respond(&request, engine),
        Err(e) => {
            log::warn!("malformed panchang request: {e}");
            PanchangResponse::failure(format!("invalid request: {e}"))
        }
    }
}
