use codesnip_core::{DisplayContext, ExtractError};
use codesnip_types::{CaptureRegion, RawImage};
use xcap::Monitor;

/// Pixel acquisition seam. Implementations must accept zero-area regions
/// without raising; all other failures are `ExtractError::Capture`.
pub trait ScreenGrabber: Send + Sync {
    fn grab(&self, region: CaptureRegion) -> Result<RawImage, ExtractError>;
}

/// Query the active display's pixel-density scale factor, once, at startup.
/// An explicit override wins over the monitor query.
pub fn display_context(scale_override: Option<f64>) -> Result<DisplayContext, ExtractError> {
    if let Some(scale) = scale_override {
        return Ok(DisplayContext::new(scale));
    }

    let monitors = Monitor::all().map_err(ExtractError::capture)?;
    let monitor = monitors
        .first()
        .ok_or_else(|| ExtractError::Capture("no monitor found".into()))?;

    Ok(DisplayContext::new(monitor.scale_factor() as f64))
}

/// Production grabber backed by xcap monitor capture.
pub struct XcapGrabber;

impl XcapGrabber {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XcapGrabber {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenGrabber for XcapGrabber {
    fn grab(&self, region: CaptureRegion) -> Result<RawImage, ExtractError> {
        let monitors = Monitor::all().map_err(ExtractError::capture)?;

        // Prefer the monitor that fully contains the region; multi-origin
        // environments place secondary monitors at negative coordinates.
        let monitor = monitors
            .iter()
            .find(|m| {
                region.x >= m.x()
                    && region.y >= m.y()
                    && region.x + region.width as i32 <= m.x() + m.width() as i32
                    && region.y + region.height as i32 <= m.y() + m.height() as i32
            })
            .or(monitors.first())
            .ok_or_else(|| ExtractError::Capture("no monitor found".into()))?;

        let image = monitor.capture_image().map_err(ExtractError::capture)?;

        if region.is_empty() {
            // Degenerate capture: still a success, carrying an empty buffer.
            return Ok(RawImage {
                data: Vec::new(),
                width: region.width,
                height: region.height,
            });
        }

        let local_x = region.x - monitor.x();
        let local_y = region.y - monitor.y();
        if local_x < 0 || local_y < 0 {
            return Err(ExtractError::Capture(format!(
                "region ({}, {}) outside monitor bounds",
                region.x, region.y
            )));
        }

        // Crop to region using xcap's image re-export
        let cropped = xcap::image::imageops::crop_imm(
            &image,
            local_x as u32,
            local_y as u32,
            region.width,
            region.height,
        )
        .to_image();

        if cropped.width() != region.width || cropped.height() != region.height {
            return Err(ExtractError::Capture(format!(
                "requested {}x{} but monitor yielded {}x{}",
                region.width,
                region.height,
                cropped.width(),
                cropped.height()
            )));
        }

        Ok(RawImage {
            width: cropped.width(),
            height: cropped.height(),
            data: cropped.into_raw(),
        })
    }
}
