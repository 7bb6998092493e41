use std::path::{Path, PathBuf};

use dealergen_core::Classifier;
use dealergen_generate::{GenerateOptions, Palette};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::write_bytes_atomic;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `dealergen_generate=debug`.
    pub level: String,
    pub format: LogFormat,
    /// Append logs here instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            file: None,
        }
    }
}

/// Everything a `dealergen.toml` can set. Missing sections keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealergenSettings {
    /// Catalog JSON to load instead of the embedded one.
    pub catalog: Option<PathBuf>,
    pub classifier: Option<Classifier>,
    pub generate: GenerateOptions,
    pub palette: Palette,
    pub log: LogSettings,
}

impl DealergenSettings {
    pub fn validate(&self) -> SettingsResult<()> {
        self.generate
            .validate()
            .map_err(|err| SettingsError::Invalid(err.to_string()))?;
        self.palette
            .validate()
            .map_err(|err| SettingsError::Invalid(err.to_string()))?;
        if self.log.level.trim().is_empty() {
            return Err(SettingsError::Invalid("log.level must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Read settings from `path`, or fall back to defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> SettingsResult<DealergenSettings> {
    let settings = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            parse_settings(&content)?
        }
        None => DealergenSettings::default(),
    };
    settings.validate()?;
    Ok(settings)
}

pub fn parse_settings(content: &str) -> SettingsResult<DealergenSettings> {
    Ok(toml::from_str(content)?)
}

pub fn save_settings(path: &Path, settings: &DealergenSettings) -> SettingsResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use dealergen_core::ViewKind;
    use dealergen_generate::{CountRange, VinScope};

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = parse_settings("").expect("parse");
        assert_eq!(settings, DealergenSettings::default());
        assert_eq!(settings.generate.dealers, CountRange::new(3, 7));
        assert_eq!(settings.log.format, LogFormat::Text);
    }

    #[test]
    fn partial_sections_override_only_their_keys() {
        let settings = parse_settings(
            r#"
            [generate]
            view = "exotic"
            vin_scope = "dealer"
            seed = 7

            [generate.vehicles]
            min = 1
            max = 2

            [palette]
            colors = ["Red", "Blue"]

            [log]
            format = "json"
            "#,
        )
        .expect("parse");

        assert_eq!(settings.generate.view, ViewKind::Exotic);
        assert_eq!(settings.generate.vin_scope, VinScope::Dealer);
        assert_eq!(settings.generate.seed, Some(7));
        assert_eq!(settings.generate.vehicles, CountRange::new(1, 2));
        assert_eq!(settings.generate.dealers, CountRange::new(3, 7));
        assert_eq!(settings.palette.colors, vec!["Red", "Blue"]);
        assert!(!settings.palette.suffixes.is_empty());
        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.log.level, "info");
    }

    #[test]
    fn classifier_section_replaces_the_default() {
        let settings = parse_settings(
            r#"
            [classifier]
            exotic_groups = ["Gr.X"]
            exotic_makes = []
            "#,
        )
        .expect("parse");
        let classifier = settings.classifier.expect("classifier");
        assert_eq!(classifier.exotic_groups, vec!["Gr.X"]);
        assert!(classifier.exotic_makes.is_empty());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let settings = parse_settings(
            r#"
            [generate.dealers]
            min = 5
            max = 2
            "#,
        )
        .expect("parse");
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn saved_settings_load_back() {
        let path = std::env::temp_dir().join(format!("dealergen_{}.toml", uuid::Uuid::new_v4()));
        let mut settings = DealergenSettings::default();
        settings.generate.seed = Some(11);
        settings.log.level = "debug".to_string();

        save_settings(&path, &settings).expect("save");
        let loaded = load_settings(Some(&path)).expect("load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }
}
