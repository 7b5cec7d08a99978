use thiserror::Error;

/// Pipeline failures, kept distinct from the empty-OCR case: `extract()`
/// returns `Result<Extraction, ExtractError>` and `Extraction::NoText` is a
/// success value. The caller must always be able to tell "nothing was
/// recognized" apart from "capture/recognition itself failed".
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Pixel acquisition could not be performed (invalid region bounds,
    /// capture backend unavailable, no monitor).
    #[error("screen capture failed: {0}")]
    Capture(String),

    /// The OCR engine invocation itself errored (missing binary, unreadable
    /// image, engine-internal error).
    #[error("recognition engine failed: {0}")]
    Engine(String),
}

impl ExtractError {
    pub fn capture(err: impl std::fmt::Display) -> Self {
        Self::Capture(err.to_string())
    }

    pub fn engine(err: impl std::fmt::Display) -> Self {
        Self::Engine(err.to_string())
    }
}
