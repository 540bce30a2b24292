//! Settings file loading.
//!
//! An explicit `--config` path must exist. Without one, `drillpipe.toml` in
//! the working directory is read when present; otherwise built-in defaults
//! are used.
//!
//! ```toml
//! sample_count = 200
//! safety_margin = 20
//!
//! [units]
//! torque_unit = "kNm"
//! tension_unit = "mT"
//!
//! [default_pipe]
//! size = "5"
//! weight_lb_ft = 19.5
//! grade = "G-105"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use drillpipe_core::AnalysisSettings;
use tracing::{debug, info};

use crate::error::{CliError, Result};

/// Settings file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "drillpipe.toml";

pub fn load(explicit: Option<&Path>) -> Result<AnalysisSettings> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::ConfigNotFound(path.to_path_buf()));
            }
            load_from(path)
        }
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if path.exists() {
                load_from(&path)
            } else {
                debug!("no {} found, using default settings", DEFAULT_CONFIG_FILE);
                Ok(AnalysisSettings::default())
            }
        }
    }
}

pub fn load_from(path: &Path) -> Result<AnalysisSettings> {
    let content = fs::read_to_string(path)?;
    let settings: AnalysisSettings = toml::from_str(&content).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drillpipe_core::catalog::{NominalSize, PipeGrade};
    use drillpipe_core::{TensionUnit, TorqueUnit};
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"
sample_count = 50
safety_margin = 20

[units]
torque_unit = "kNm"
tension_unit = "mT"

[default_pipe]
size = "3-1/2"
weight_lb_ft = 13.3
grade = "S-135"
"#,
        );
        let settings = load(Some(file.path())).unwrap();
        assert_eq!(settings.sample_count, 50);
        assert_eq!(settings.safety_margin.percent(), 20);
        assert_eq!(settings.units.torque_unit, TorqueUnit::KiloNewtonMeter);
        assert_eq!(settings.units.tension_unit, TensionUnit::MetricTon);
        assert_eq!(settings.default_pipe.size, NominalSize::D3_5);
        assert_eq!(settings.default_pipe.grade, PipeGrade::S135);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_config("safety_margin = 10\n");
        let settings = load_from(file.path()).unwrap();
        assert_eq!(settings.safety_margin.percent(), 10);
        assert_eq!(settings.sample_count, 200);
        assert_eq!(settings.default_pipe.size, NominalSize::D5);
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load(Some(Path::new("/definitely/not/here/drillpipe.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigNotFound(_)));
    }

    #[test]
    fn test_invalid_margin_is_parse_error() {
        let file = write_config("safety_margin = 95\n");
        let err = load_from(file.path()).unwrap_err();
        assert!(matches!(err, CliError::ConfigParse { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
