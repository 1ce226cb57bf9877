use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file or an environment override could not be read or deserialized.
    #[error("Failed to load analysis settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}
