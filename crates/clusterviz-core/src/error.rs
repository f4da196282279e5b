// crates/clusterviz-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("palette exhausted: cannot assign a color from an empty palette")]
    ExhaustedPalette,

    #[error("event format error: {0}")]
    EventFormat(String),

    #[error("validation error: {0}")]
    Validation(String),
}
