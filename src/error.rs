use thiserror::Error;

use crate::config::ConfigError;
use crate::sleep::SleepError;

/// Top-level error for the server binary, wrapping each module's failure
/// mode.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("sleep generation error: {0}")]
    Sleep(#[from] SleepError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
