use codesnip_core::ExtractError;
use codesnip_types::RawImage;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, RgbaImage};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};

/// Drop the alpha channel and collapse to single-channel grayscale.
pub fn to_grayscale(raw: &RawImage) -> Result<GrayImage, ExtractError> {
    if raw.width == 0 || raw.height == 0 {
        return Ok(GrayImage::new(raw.width, raw.height));
    }

    let rgba = RgbaImage::from_raw(raw.width, raw.height, raw.data.clone()).ok_or_else(|| {
        ExtractError::Capture(format!(
            "pixel buffer of {} bytes does not match {}x{} RGBA",
            raw.data.len(),
            raw.width,
            raw.height
        ))
    })?;

    Ok(DynamicImage::ImageRgba8(rgba).to_luma8())
}

/// Otsu global-threshold binarization: strict two-level output. OCR engines
/// are markedly more accurate on bilevel input than on anti-aliased screen
/// grabs.
pub fn binarize(gray: &GrayImage) -> GrayImage {
    if gray.width() == 0 || gray.height() == 0 {
        return gray.clone();
    }
    let level = otsu_level(gray);
    threshold(gray, level, ThresholdType::Binary)
}

/// Exact 2x upscale with cubic interpolation. UI font rendering is small
/// relative to the engine's trained input scale; upscaling improves
/// character segmentation.
pub fn upscale_2x(bilevel: &GrayImage) -> GrayImage {
    if bilevel.width() == 0 || bilevel.height() == 0 {
        return bilevel.clone();
    }
    imageops::resize(
        bilevel,
        bilevel.width() * 2,
        bilevel.height() * 2,
        FilterType::CatmullRom,
    )
}

/// Full preprocessing chain: grayscale -> binarize -> 2x upscale.
/// Deterministic: the same input always yields a bit-identical image.
pub fn prepare(raw: &RawImage) -> Result<GrayImage, ExtractError> {
    let gray = to_grayscale(raw)?;
    Ok(upscale_2x(&binarize(&gray)))
}
