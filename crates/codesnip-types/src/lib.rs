pub mod types;

pub use types::{
    AppEvent, CaptureRegion, Extraction, ExtractionOutcome, LogicalPoint, LogicalRect,
    PointerEvent, RawImage, SelectionGesture, UiEvent, RECOGNITION_WHITELIST,
};
