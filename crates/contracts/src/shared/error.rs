use thiserror::Error;

/// Errors produced while parsing theme data.
#[derive(Debug, Error)]
pub enum ContractsError {
    #[error("unknown color token: {0}")]
    UnknownToken(String),

    #[error("invalid color value: {0}")]
    InvalidColor(String),

    #[error("invalid palette: {0}")]
    InvalidPalette(#[from] serde_json::Error),
}
