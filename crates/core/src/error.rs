use thiserror::Error;

/// Configuration failures detected at process start.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    #[error("{0} environment variable is set but empty")]
    EmptyVar(&'static str),
}
