//! Engine configuration.
//!
//! A JSON file selects the longitude backend, the sunrise mode, and the
//! naming conventions used in reports. Every field has a default, so an
//! empty object `{}` is a valid configuration:
//!
//! ```json
//! {
//!   "ephemeris": { "backend": "tabulated", "table_path": "data/lon.txt" },
//!   "sunrise": { "mode": "approximate" },
//!   "naming": { "tithi": "paksha-aware", "rashi": "western" }
//! }
//! ```

pub mod error;

use std::path::{Path, PathBuf};

use panchang_vedic::{RashiNaming, TithiNaming};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Environment variable consulted when no config path is given.
pub const CONFIG_ENV_VAR: &str = "PANCHANG_CONFIG";

/// Fixed sunrise string reported in placeholder mode.
pub const DEFAULT_SUNRISE_PLACEHOLDER: &str = "06:00";

/// Which longitude source to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    #[default]
    Mean,
    Tabulated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EphemerisConfig {
    pub backend: BackendKind,
    /// Longitude table, required for the tabulated backend.
    pub table_path: Option<PathBuf>,
}

/// How the sunrise field is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SunriseMode {
    #[default]
    Placeholder,
    Approximate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SunriseConfig {
    pub mode: SunriseMode,
    /// `HH:MM` reported in placeholder mode.
    pub placeholder: String,
}

impl Default for SunriseConfig {
    fn default() -> Self {
        Self {
            mode: SunriseMode::default(),
            placeholder: DEFAULT_SUNRISE_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub tithi: TithiNaming,
    pub rashi: RashiNaming,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanchangConfig {
    pub ephemeris: EphemerisConfig,
    pub sunrise: SunriseConfig,
    pub naming: NamingConfig,
}

impl PanchangConfig {
    /// Parse and validate JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, else from `$PANCHANG_CONFIG`, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(p) = path {
            return Self::load(p);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(p) if !p.is_empty() => Self::load(Path::new(&p)),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ephemeris.backend == BackendKind::Tabulated {
            match &self.ephemeris.table_path {
                None => {
                    return Err(ConfigError::Invalid(
                        "ephemeris.table_path is required for the tabulated backend",
                    ));
                }
                Some(p) if p.as_os_str().is_empty() => {
                    return Err(ConfigError::Invalid("ephemeris.table_path must not be empty"));
                }
                Some(_) => {}
            }
        }
        if !is_hh_mm(&self.sunrise.placeholder) {
            return Err(ConfigError::Invalid(
                "sunrise.placeholder must be HH:MM (00:00-23:59)",
            ));
        }
        Ok(())
    }
}

/// `HH:MM`, 24-hour, zero padded.
fn is_hh_mm(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 5 || b[2] != b':' {
        return false;
    }
    let digits = [b[0], b[1], b[3], b[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hh = (b[0] - b'0') * 10 + (b[1] - b'0');
    let mm = (b[3] - b'0') * 10 + (b[4] - b'0');
    hh < 24 && mm < 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let c = PanchangConfig::from_json_str("{}").unwrap();
        assert_eq!(c, PanchangConfig::default());
        assert_eq!(c.ephemeris.backend, BackendKind::Mean);
        assert_eq!(c.sunrise.mode, SunriseMode::Placeholder);
        assert_eq!(c.sunrise.placeholder, "06:00");
        assert_eq!(c.naming.tithi, TithiNaming::PakshaAware);
        assert_eq!(c.naming.rashi, RashiNaming::Western);
    }

    #[test]
    fn full_config() {
        let c = PanchangConfig::from_json_str(
            r#"{
                "ephemeris": { "backend": "tabulated", "table_path": "lon.txt" },
                "sunrise": { "mode": "approximate" },
                "naming": { "tithi": "legacy-single-list", "rashi": "sanskrit" }
            }"#,
        )
        .unwrap();
        assert_eq!(c.ephemeris.backend, BackendKind::Tabulated);
        assert_eq!(c.ephemeris.table_path.as_deref(), Some(Path::new("lon.txt")));
        assert_eq!(c.sunrise.mode, SunriseMode::Approximate);
        assert_eq!(c.naming.tithi, TithiNaming::LegacySingleList);
        assert_eq!(c.naming.rashi, RashiNaming::Sanskrit);
    }

    #[test]
    fn tabulated_without_path_is_invalid() {
        let err = PanchangConfig::from_json_str(r#"{"ephemeris":{"backend":"tabulated"}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn bad_placeholder_is_invalid() {
        for p in ["6:00", "24:00", "06:60", "ab:cd", "06-00"] {
            let json = format!(r#"{{"sunrise":{{"placeholder":"{p}"}}}}"#);
            assert!(
                matches!(PanchangConfig::from_json_str(&json), Err(ConfigError::Invalid(_))),
                "{p} accepted"
            );
        }
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let err = PanchangConfig::from_json_str(r#"{"ephemris":{}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PanchangConfig::load(Path::new("/nonexistent/panchang.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn explicit_path_wins_over_defaults() {
        let dir = std::env::temp_dir().join(format!("panchang_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("c.json");
        std::fs::write(&path, r#"{"naming":{"rashi":"sanskrit"}}"#).unwrap();
        let c = PanchangConfig::resolve(Some(&path)).unwrap();
        assert_eq!(c.naming.rashi, RashiNaming::Sanskrit);
        std::fs::remove_dir_all(&dir).ok();
    }
}
