//! Tabulated Sun/Moon longitudes with linear interpolation.
//!
//! Plain-text table, one epoch per row:
//!
//! ```text
//! # jd            sun_deg      moon_deg
//! 2460310.5       280.1234     150.9876
//! 2460311.5       281.1423     164.1011
//! ```
//!
//! Columns are whitespace separated. Blank lines and lines starting with
//! `#` are ignored. Rows may appear in any order; they are sorted on load.
//! Between rows the longitude is interpolated along the shorter arc, so a
//! step from 359° to 1° passes through 0° and not backwards through 180°.
//! Row spacing must keep each body's motion under 180° per step.

use std::path::Path;

use panchang_time::normalize_360;

use crate::error::EphemerisError;
use crate::{Body, CelestialLongitudeProvider};

/// One table row.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Row {
    jd: f64,
    sun: f64,
    moon: f64,
}

impl Row {
    fn lon(&self, body: Body) -> f64 {
        match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
        }
    }
}

/// Longitudes loaded from a table, sorted ascending by Julian Date.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedEphemeris {
    rows: Vec<Row>,
}

impl TabulatedEphemeris {
    /// Load a table from disk.
    pub fn load(path: &Path) -> Result<Self, EphemerisError> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::parse(&content)?;
        let (start, end) = table.range();
        log::debug!(
            "loaded {} ephemeris rows from {} (JD {start} .. {end})",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse table text.
    ///
    /// Unlike comment lines, a data row that does not hold exactly three
    /// finite numbers is an error rather than being skipped.
    pub fn parse(content: &str) -> Result<Self, EphemerisError> {
        let mut rows = Vec::new();

        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(EphemerisError::Parse(format!(
                    "line {}: expected 3 columns, found {}",
                    lineno + 1,
                    fields.len()
                )));
            }

            let mut vals = [0.0f64; 3];
            for (slot, field) in vals.iter_mut().zip(&fields) {
                let v: f64 = field.parse().map_err(|_| {
                    EphemerisError::Parse(format!("line {}: bad number '{field}'", lineno + 1))
                })?;
                if !v.is_finite() {
                    return Err(EphemerisError::Parse(format!(
                        "line {}: non-finite value '{field}'",
                        lineno + 1
                    )));
                }
                *slot = v;
            }

            rows.push(Row {
                jd: vals[0],
                sun: normalize_360(vals[1]),
                moon: normalize_360(vals[2]),
            });
        }

        if rows.is_empty() {
            return Err(EphemerisError::Parse("no ephemeris rows found".to_string()));
        }

        rows.sort_by(|a, b| a.jd.total_cmp(&b.jd));

        Ok(Self { rows })
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty. Always false for a parsed table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Julian Date range covered by the table: (first, last).
    pub fn range(&self) -> (f64, f64) {
        match (self.rows.first(), self.rows.last()) {
            (Some(a), Some(b)) => (a.jd, b.jd),
            _ => (f64::NAN, f64::NAN),
        }
    }

    /// Interpolated longitude of `body` at `jd`, in [0, 360).
    pub fn interpolate(&self, body: Body, jd: f64) -> Result<f64, EphemerisError> {
        if !jd.is_finite() {
            return Err(EphemerisError::NonFinite("julian date"));
        }
        let (start, end) = self.range();
        if !(start..=end).contains(&jd) {
            return Err(EphemerisError::EpochOutOfRange { jd });
        }

        let idx = self
            .rows
            .partition_point(|r| r.jd < jd)
            .saturating_sub(1);

        if idx + 1 >= self.rows.len() {
            return Ok(self.rows[idx].lon(body));
        }

        let r0 = self.rows[idx];
        let r1 = self.rows[idx + 1];
        if (r1.jd - r0.jd).abs() < 1e-12 {
            return Ok(r0.lon(body));
        }

        let l0 = r0.lon(body);
        let mut delta = r1.lon(body) - l0;
        if delta > 180.0 {
            delta -= 360.0;
        } else if delta < -180.0 {
            delta += 360.0;
        }

        let frac = (jd - r0.jd) / (r1.jd - r0.jd);
        Ok(normalize_360(l0 + frac * delta))
    }
}

impl CelestialLongitudeProvider for TabulatedEphemeris {
    fn name(&self) -> &'static str {
        "tabulated"
    }

    fn longitude_deg(&self, body: Body, jd: f64) -> Result<f64, EphemerisError> {
        self.interpolate(body, jd)
    }
}
