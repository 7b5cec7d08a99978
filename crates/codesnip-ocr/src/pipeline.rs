use codesnip_core::output::classify;
use codesnip_core::{DisplayContext, ExtractError};
use codesnip_types::{Extraction, SelectionGesture};

use crate::capture::ScreenGrabber;
use crate::engine::TextRecognizer;
use crate::preprocess;

/// The capture-and-recognition pipeline. One-shot and stateless relative to
/// prior captures; the only retained value is the read-only display context.
pub struct Extractor<G, R> {
    display: DisplayContext,
    grabber: G,
    recognizer: R,
}

impl<G: ScreenGrabber, R: TextRecognizer> Extractor<G, R> {
    pub fn new(display: DisplayContext, grabber: G, recognizer: R) -> Self {
        Self {
            display,
            grabber,
            recognizer,
        }
    }

    /// Normalize, scale to device pixels, grab, preprocess, recognize,
    /// classify. `NoText` is a success value; failures are typed so the
    /// caller can tell "nothing recognized" from "capture/engine broke".
    pub fn extract(&self, gesture: &SelectionGesture) -> Result<Extraction, ExtractError> {
        let region = self.display.to_physical(gesture);
        tracing::debug!(
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height,
            "capturing physical region"
        );

        let raw = self.grabber.grab(region)?;

        // A zero-area grab cannot contain glyphs; classify it directly
        // rather than handing the engine a 0x0 image it would reject.
        if raw.width == 0 || raw.height == 0 {
            return Ok(Extraction::NoText);
        }

        let prepared = preprocess::prepare(&raw)?;
        let text = self.recognizer.recognize(&prepared)?;
        tracing::debug!(chars = text.len(), "engine output received");

        Ok(classify(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codesnip_types::{CaptureRegion, LogicalPoint, RawImage};
    use image::GrayImage;

    struct StubGrabber {
        fail: bool,
    }

    impl ScreenGrabber for StubGrabber {
        fn grab(&self, region: CaptureRegion) -> Result<RawImage, ExtractError> {
            if self.fail {
                return Err(ExtractError::Capture("backend unavailable".into()));
            }
            Ok(RawImage {
                data: vec![200u8; (region.width * region.height * 4) as usize],
                width: region.width,
                height: region.height,
            })
        }
    }

    struct StubRecognizer {
        output: Option<&'static str>,
    }

    impl TextRecognizer for StubRecognizer {
        fn recognize(&self, _image: &GrayImage) -> Result<String, ExtractError> {
            match self.output {
                Some(text) => Ok(text.to_string()),
                None => Err(ExtractError::Engine("tesseract not found".into())),
            }
        }
    }

    fn gesture(x1: f64, y1: f64, x2: f64, y2: f64) -> SelectionGesture {
        SelectionGesture {
            start: LogicalPoint::new(x1, y1),
            end: LogicalPoint::new(x2, y2),
        }
    }

    fn extractor(
        scale: f64,
        fail_grab: bool,
        output: Option<&'static str>,
    ) -> Extractor<StubGrabber, StubRecognizer> {
        Extractor::new(
            DisplayContext::new(scale),
            StubGrabber { fail: fail_grab },
            StubRecognizer { output },
        )
    }

    #[test]
    fn recognized_text_is_trimmed_and_returned() {
        let result = extractor(1.0, false, Some("  fn main()  \n"))
            .extract(&gesture(0.0, 0.0, 40.0, 20.0))
            .unwrap();
        assert_eq!(result, Extraction::Text("fn main()".to_string()));
    }

    #[test]
    fn empty_engine_output_classifies_as_no_text() {
        let result = extractor(1.0, false, Some("  \n "))
            .extract(&gesture(0.0, 0.0, 40.0, 20.0))
            .unwrap();
        assert_eq!(result, Extraction::NoText);
    }

    #[test]
    fn degenerate_gesture_does_not_raise() {
        let result = extractor(2.0, false, Some("ignored"))
            .extract(&gesture(50.0, 50.0, 50.0, 50.0))
            .unwrap();
        assert_eq!(result, Extraction::NoText);
    }

    #[test]
    fn capture_failure_is_not_reported_as_no_text() {
        let err = extractor(1.0, true, Some("ignored"))
            .extract(&gesture(0.0, 0.0, 10.0, 10.0))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Capture(_)));
    }

    #[test]
    fn engine_failure_is_not_reported_as_no_text() {
        let err = extractor(1.0, false, None)
            .extract(&gesture(0.0, 0.0, 10.0, 10.0))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Engine(_)));
    }

    #[test]
    fn up_left_drag_extracts_like_down_right() {
        let down_right = extractor(1.0, false, Some("x = 1"))
            .extract(&gesture(10.0, 10.0, 60.0, 40.0))
            .unwrap();
        let up_left = extractor(1.0, false, Some("x = 1"))
            .extract(&gesture(60.0, 40.0, 10.0, 10.0))
            .unwrap();
        assert_eq!(down_right, up_left);
    }
}
