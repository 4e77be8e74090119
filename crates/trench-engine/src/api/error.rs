use crate::present::presentation::SlideId;

/// Errors surfaced by the engine API.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("slide {0:?} is not part of the presentation")]
    UnknownSlide(SlideId),
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
