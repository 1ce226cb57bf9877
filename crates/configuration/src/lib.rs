use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{AnalysisSettings, Config, RiskFreeSettings};

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "perfstat.toml";

/// Prefix for environment overrides, e.g. `PERFSTAT_ANALYSIS__SCALE=252`.
pub const ENV_PREFIX: &str = "PERFSTAT";

/// Loads the application configuration.
///
/// An explicit `path` must exist. Without one, `perfstat.toml` in the working
/// directory is read if present. Environment variables prefixed with
/// `PERFSTAT_` (sections separated by `__`) override file values, and any key
/// left unset keeps its default.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(p) => config::File::from(p).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{DownsideMethod, KurtosisEstimator, TimingModel};
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_toml(
            r#"
            [analysis]
            scale = 252
            downside_method = "subset"
            kurtosis_estimator = "sample_excess"
            "#,
        );
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.analysis.scale, 252);
        assert_eq!(config.analysis.downside_method, DownsideMethod::Subset);
        assert_eq!(config.analysis.kurtosis_estimator, KurtosisEstimator::SampleExcess);
        assert!(config.analysis.geometric);
        assert_eq!(config.analysis.timing_model, TimingModel::TreynorMazuy);
        assert_eq!(config.risk_free.rate, 0.0);
    }

    #[test]
    fn legacy_all_tag_selects_full_normalization() {
        let file = write_toml(
            r#"
            [analysis]
            downside_method = "all"
            timing_model = "henriksson_merton"

            [risk_free]
            rate = 0.0033
            "#,
        );
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.analysis.downside_method, DownsideMethod::Full);
        assert_eq!(config.analysis.timing_model, TimingModel::HenrikssonMerton);
        assert_eq!(config.risk_free.rate, 0.0033);
    }

    #[test]
    fn zero_scale_fails_validation() {
        let file = write_toml("[analysis]\nscale = 0\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "analysis.scale", .. }));
    }

    #[test]
    fn unknown_estimator_is_a_load_error() {
        let file = write_toml("[analysis]\nskewness_estimator = \"pearson\"\n");
        assert!(matches!(load_config(Some(file.path())), Err(ConfigError::Load(_))));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = Path::new("/definitely/not/here/perfstat.toml");
        assert!(matches!(load_config(Some(missing)), Err(ConfigError::Load(_))));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
