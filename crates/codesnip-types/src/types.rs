use serde::{Deserialize, Serialize};

/// Characters the recognizer is allowed to emit.
///
/// Restricting the whitelist to code-relevant symbols measurably reduces
/// misrecognition on short monospaced blocks, at the cost of being unable to
/// transcribe code containing excluded punctuation (`{}`, `;`, `.`, `<`, `>`,
/// arithmetic operators, ...). Known limitation, not a bug.
pub const RECOGNITION_WHITELIST: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_\"':=()";

/// Pointer position in logical UI units, global screen origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalPoint {
    pub x: f64,
    pub y: f64,
}

impl LogicalPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One finished drag. Immutable once emitted by the selector; a zero-area
/// gesture is valid input for the pipeline, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionGesture {
    pub start: LogicalPoint,
    pub end: LogicalPoint,
}

/// Normalized (top-left anchored) rectangle in logical units. Used for the
/// ephemeral preview while a drag is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Rectangle in physical device pixels. Coordinates are non-negative by
/// construction (logical coordinates originate at the overlay's top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// RGBA8 pixel buffer covering exactly one [`CaptureRegion`]. Produced once
/// by the grabber, consumed immediately by preprocessing, never retained.
pub struct RawImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// What the pipeline recovered from the captured pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Non-empty, whitespace-trimmed recognized text.
    Text(String),
    /// OCR ran successfully but produced nothing after trimming.
    NoText,
}

/// The user-facing tagged result. The backend never conflates the variants;
/// the presentation layer chooses wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Text(String),
    NoTextRecognized,
    OperationFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(LogicalPoint),
    Moved(LogicalPoint),
    Released(LogicalPoint),
    /// Escape while dragging aborts the gesture.
    Cancelled,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Show,
    Hide,
    Close,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    UiEvent(UiEvent),
    /// Hotkey or launcher button: start a new capture gesture.
    TriggerCapture,
    /// Forwarded from the overlay toolkit while a gesture is active.
    PointerInput(PointerEvent),
    /// Ephemeral normalized rectangle for the overlay to draw while the
    /// drag is in flight.
    SelectionPreview(LogicalRect),
    /// Emitted by the overlay session exactly once per gesture.
    SelectionMade(SelectionGesture),
    SelectionCancelled,
    /// Pipeline result for the UI to display.
    ShowExtraction(ExtractionOutcome),
    /// Colorized rendering of a successful extraction, when enabled.
    ShowHighlighted { plain: String, rendered: String },
    /// UI asks the backend to send `code` to the comment service.
    CommentRequest { code: String },
    ShowCommented { original: String, commented: String },
    StatusUpdate { status: String, capturing: bool },
    BackendReady,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelist_contains_exactly_the_documented_classes() {
        for c in 'A'..='Z' {
            assert!(RECOGNITION_WHITELIST.contains(c), "missing {c}");
        }
        for c in 'a'..='z' {
            assert!(RECOGNITION_WHITELIST.contains(c), "missing {c}");
        }
        for c in '0'..='9' {
            assert!(RECOGNITION_WHITELIST.contains(c), "missing {c}");
        }
        for c in ['_', '"', '\'', ':', '=', '(', ')'] {
            assert!(RECOGNITION_WHITELIST.contains(c), "missing {c}");
        }
        // 52 letters + 10 digits + 7 symbols, nothing else
        assert_eq!(RECOGNITION_WHITELIST.chars().count(), 69);
    }

    #[test]
    fn whitelist_excludes_braces_and_semicolons() {
        for c in ['{', '}', ';', '.', '<', '>', '+', '-', '*', '/', ',', ' '] {
            assert!(!RECOGNITION_WHITELIST.contains(c), "unexpected {c}");
        }
    }

    #[test]
    fn zero_area_region_is_empty() {
        let region = CaptureRegion {
            x: 10,
            y: 10,
            width: 0,
            height: 5,
        };
        assert!(region.is_empty());
    }
}
