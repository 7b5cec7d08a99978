use std::collections::HashMap;

use codesnip_config::ocr::OcrConfig;
use codesnip_core::ExtractError;
use codesnip_types::RECOGNITION_WHITELIST;
use image::{DynamicImage, GrayImage};
use rusty_tesseract::{Args, Image};

/// Recognition seam. Implementations take the preprocessed bilevel image
/// and return the engine's raw (untrimmed) output.
pub trait TextRecognizer: Send + Sync {
    fn recognize(&self, image: &GrayImage) -> Result<String, ExtractError>;
}

/// Tesseract invocation with a fixed contract: configured language and DPI,
/// page segmentation tuned for a single uniform block, and the
/// code-character whitelist.
pub struct TesseractEngine {
    args: Args,
}

impl TesseractEngine {
    pub fn from_config(config: &OcrConfig) -> Self {
        let config_variables = HashMap::from([(
            "tessedit_char_whitelist".to_string(),
            RECOGNITION_WHITELIST.to_string(),
        )]);

        Self {
            args: Args {
                lang: config.language.clone(),
                config_variables,
                dpi: Some(config.dpi),
                psm: Some(config.psm),
                oem: Some(3),
            },
        }
    }

    /// Resolve the engine at startup. A missing or broken tesseract binary
    /// fails launch here instead of surfacing mid-gesture.
    pub fn probe() -> Result<String, ExtractError> {
        rusty_tesseract::get_tesseract_version().map_err(ExtractError::engine)
    }

    #[cfg(test)]
    pub(crate) fn args(&self) -> &Args {
        &self.args
    }
}

impl TextRecognizer for TesseractEngine {
    fn recognize(&self, image: &GrayImage) -> Result<String, ExtractError> {
        let dynamic = DynamicImage::ImageLuma8(image.clone());
        let input = Image::from_dynamic_image(&dynamic).map_err(ExtractError::engine)?;

        rusty_tesseract::image_to_string(&input, &self.args).map_err(ExtractError::engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_args_carry_the_whitelist_and_block_mode() {
        let engine = TesseractEngine::from_config(&OcrConfig::new());
        let args = engine.args();

        assert_eq!(args.lang, "eng");
        assert_eq!(args.psm, Some(6));
        assert_eq!(
            args.config_variables.get("tessedit_char_whitelist"),
            Some(&RECOGNITION_WHITELIST.to_string())
        );
    }

    #[test]
    fn engine_honors_config_overrides() {
        let config = OcrConfig {
            enabled: true,
            language: "deu".to_string(),
            psm: 7,
            dpi: 300,
        };
        let engine = TesseractEngine::from_config(&config);
        assert_eq!(engine.args().lang, "deu");
        assert_eq!(engine.args().psm, Some(7));
        assert_eq!(engine.args().dpi, Some(300));
    }
}
