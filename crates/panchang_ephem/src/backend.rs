//! Backend selection.

use std::path::Path;

use crate::error::EphemerisError;
use crate::mean::MeanLongitudeModel;
use crate::tabulated::TabulatedEphemeris;
use crate::{Body, CelestialLongitudeProvider};

/// The longitude source chosen at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum LongitudeBackend {
    Mean(MeanLongitudeModel),
    Tabulated(TabulatedEphemeris),
}

impl LongitudeBackend {
    /// Polynomial mean longitudes.
    pub fn mean() -> Self {
        Self::Mean(MeanLongitudeModel)
    }

    /// Load a longitude table from `path`.
    pub fn tabulated(path: &Path) -> Result<Self, EphemerisError> {
        TabulatedEphemeris::load(path).map(Self::Tabulated)
    }
}

impl Default for LongitudeBackend {
    fn default() -> Self {
        Self::mean()
    }
}

impl CelestialLongitudeProvider for LongitudeBackend {
    fn name(&self) -> &'static str {
        match self {
            Self::Mean(m) => m.name(),
            Self::Tabulated(t) => t.name(),
        }
    }

    fn longitude_deg(&self, body: Body, jd: f64) -> Result<f64, EphemerisError> {
        match self {
            Self::Mean(m) => m.longitude_deg(body, jd),
            Self::Tabulated(t) => t.longitude_deg(body, jd),
        }
    }
}
