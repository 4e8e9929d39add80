use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
