//! Ecliptic longitudes of the Sun and Moon.
//!
//! Two interchangeable sources sit behind [`CelestialLongitudeProvider`]:
//! - [`MeanLongitudeModel`]: low-precision mean-longitude polynomials
//! - [`TabulatedEphemeris`]: longitudes read from an external table and
//!   interpolated
//!
//! [`LongitudeBackend`] picks one at startup. All outputs are degrees in
//! [0, 360).

pub mod backend;
pub mod error;
pub mod mean;
pub mod tabulated;

pub use backend::LongitudeBackend;
pub use error::EphemerisError;
pub use mean::{MeanLongitudeModel, moon_mean_longitude_deg, sun_mean_longitude_deg};
pub use tabulated::TabulatedEphemeris;

/// Bodies whose longitude a provider can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

/// Both bodies in query order.
pub const ALL_BODIES: [Body; 2] = [Body::Sun, Body::Moon];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Source of geocentric ecliptic longitudes.
///
/// Implementations must be deterministic and return degrees in [0, 360).
pub trait CelestialLongitudeProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn longitude_deg(&self, body: Body, jd: f64) -> Result<f64, EphemerisError>;
}

/// Sun and Moon longitudes at `jd`, in that order.
pub fn sun_moon_longitudes(
    provider: &dyn CelestialLongitudeProvider,
    jd: f64,
) -> Result<(f64, f64), EphemerisError> {
    let sun = provider.longitude_deg(Body::Sun, jd)?;
    let moon = provider.longitude_deg(Body::Moon, jd)?;
    log::debug!("{} @ JD {jd}: sun={sun:.6} moon={moon:.6}", provider.name());
    Ok((sun, moon))
}
