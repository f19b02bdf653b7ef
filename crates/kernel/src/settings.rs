use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "LIBRIS_ENV";
const CONFIG_DIR_ENV: &str = "LIBRIS_CONFIG_DIR";
const ENV_PREFIX: &str = "LIBRIS";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    /// Parse an environment name as accepted by `LIBRIS_ENV`.
    pub fn parse(name: &str) -> anyhow::Result<Self> {
        match name {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    ///
    /// `LIBRIS_ENV` picks the overlay and `LIBRIS_CONFIG_DIR` the directory
    /// holding `base.toml` and `<env>.toml`.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(None, None)
    }

    /// Like [`Settings::load`], with explicit values taking precedence over
    /// `LIBRIS_CONFIG_DIR` and `LIBRIS_ENV`.
    pub fn load_with(config_dir: Option<&Path>, environment: Option<&str>) -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = match environment {
            Some(env) => env.to_string(),
            None => std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string()),
        };
        let config_dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => match std::env::var(CONFIG_DIR_ENV) {
                Ok(dir) => PathBuf::from(dir),
                // Default to the `config` directory next to the working directory.
                Err(_) => std::env::current_dir()
                    .map(|cwd| cwd.join("config"))
                    .with_context(|| "unable to resolve current directory")?,
            },
        };

        Self::load_from(&config_dir, &environment)
    }

    /// Load configuration from an explicit directory and environment name.
    ///
    /// Both files are optional; `LIBRIS__<SECTION>__<KEY>` variables win over them.
    pub fn load_from(config_dir: &Path, environment: &str) -> anyhow::Result<Self> {
        let parsed_env = Environment::parse(environment)?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // The selected overlay is authoritative, whatever the files say.
        settings.environment = parsed_env;

        Ok(settings)
    }
}

/// What happens to an outstanding loan when its book is removed from the catalog.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Return the book on the holder's behalf, then remove it.
    #[default]
    ForceReturn,
    /// Refuse to remove a book while a user holds it.
    RejectWhileBorrowed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "CatalogSettings::default_seed_sample_data")]
    pub seed_sample_data: bool,
    #[serde(default)]
    pub removal_policy: RemovalPolicy,
}

impl CatalogSettings {
    fn default_seed_sample_data() -> bool {
        true
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            seed_sample_data: Self::default_seed_sample_data(),
            removal_policy: RemovalPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default = "TelemetrySettings::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl TelemetrySettings {
    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DisplaySettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How the menu renders operation results.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_config_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config")
    }

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_catalog_seeds_and_force_returns() {
        let settings = Settings::default();
        assert!(settings.catalog.seed_sample_data);
        assert_eq!(settings.catalog.removal_policy, RemovalPolicy::ForceReturn);
    }

    #[test]
    fn default_display_is_text() {
        let settings = Settings::default();
        assert_eq!(settings.display.format, OutputFormat::Text);
        assert_eq!(settings.telemetry.log_level, "warn");
    }

    #[test]
    fn missing_config_dir_yields_defaults() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("does-not-exist");
        let settings = Settings::load_from(&dir, "staging").unwrap();
        assert_eq!(settings.environment, Environment::Staging);
        assert!(settings.catalog.seed_sample_data);
    }

    #[test]
    fn production_overlay_overrides_base() {
        let settings = Settings::load_from(&repo_config_dir(), "production").unwrap();
        assert_eq!(settings.environment, Environment::Production);
        assert!(!settings.catalog.seed_sample_data);
        assert_eq!(
            settings.catalog.removal_policy,
            RemovalPolicy::RejectWhileBorrowed
        );
        assert_eq!(settings.telemetry.log_format, LogFormat::Json);
    }

    #[test]
    fn explicit_arguments_win() {
        let dir = repo_config_dir();
        let settings = Settings::load_with(Some(&dir), Some("local")).unwrap();
        assert_eq!(settings.environment, Environment::Local);
        assert_eq!(settings.telemetry.log_level, "info");
        assert_eq!(settings.catalog.removal_policy, RemovalPolicy::ForceReturn);
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = Settings::load_from(&repo_config_dir(), "moon").unwrap_err();
        assert!(err.to_string().contains("unsupported environment 'moon'"));
    }
}
