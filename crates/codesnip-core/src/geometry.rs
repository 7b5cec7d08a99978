use codesnip_types::{CaptureRegion, LogicalRect, SelectionGesture};

/// Read-only display facts the pipeline needs, captured once at startup.
/// Replaces ambient window-system globals; fixed for the session (no
/// mid-session display-change handling).
#[derive(Debug, Clone, Copy)]
pub struct DisplayContext {
    scale_factor: f64,
}

impl DisplayContext {
    /// `scale_factor` is the ratio of device pixels to logical units on the
    /// active display, >= 1.0 on any real display.
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor: scale_factor.max(1.0),
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Normalize a gesture and scale it to physical device pixels.
    ///
    /// Mandatory on high-density displays: skipping the scale step captures
    /// a region offset/undersized relative to what the user selected.
    pub fn to_physical(&self, gesture: &SelectionGesture) -> CaptureRegion {
        let rect = normalized(gesture);
        let s = self.scale_factor;
        CaptureRegion {
            x: (rect.x * s).round() as i32,
            y: (rect.y * s).round() as i32,
            width: (rect.width * s).round() as u32,
            height: (rect.height * s).round() as u32,
        }
    }
}

/// Top-left anchored rectangle for a gesture dragged in any direction.
pub fn normalized(gesture: &SelectionGesture) -> LogicalRect {
    let (x1, y1) = (gesture.start.x, gesture.start.y);
    let (x2, y2) = (gesture.end.x, gesture.end.y);
    LogicalRect {
        x: x1.min(x2),
        y: y1.min(y2),
        width: (x2 - x1).abs(),
        height: (y2 - y1).abs(),
    }
}
