//! Tesseract OCR engine wrapper
//!
//! Thin wrapper over `leptess`. The engine receives a preprocessed grayscale
//! image and returns raw recognized text; all interpretation of that text
//! happens in the extraction core.

use anyhow::{Context, Result};
use image::GrayImage;
use leptess::{LepTess, Variable};
use tracing::debug;

use crate::config::OcrSettings;

/// Tesseract-backed OCR engine
pub struct OcrEngine {
    tesseract: LepTess,
    source_dpi: u32,
}

impl OcrEngine {
    /// Initialize Tesseract with the configured language and page
    /// segmentation mode.
    pub fn new(settings: &OcrSettings) -> Result<Self> {
        let mut tesseract = LepTess::new(None, &settings.language)
            .context("Failed to initialize Tesseract. Is Tesseract installed?")?;

        // PSM 6 (uniform block of text) suits product labels
        tesseract
            .set_variable(
                Variable::TesseditPagesegMode,
                &settings.page_seg_mode.to_string(),
            )
            .context("Failed to set page segmentation mode")?;

        Ok(Self {
            tesseract,
            source_dpi: settings.source_dpi,
        })
    }

    /// Run OCR on a preprocessed grayscale image and return the raw text.
    pub fn recognize(&mut self, image: &GrayImage) -> Result<String> {
        // leptess wants image data in an encoded format
        let mut png_bytes = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut png_bytes);
        image
            .write_to(&mut cursor, image::ImageFormat::Png)
            .context("Failed to encode image as PNG")?;

        self.tesseract
            .set_image_from_mem(&png_bytes)
            .context("Failed to load image into Tesseract")?;

        // Must be called after set_image
        self.tesseract.set_source_resolution(self.source_dpi as i32);

        let text = self
            .tesseract
            .get_utf8_text()
            .context("Failed to extract text from image")?;

        debug!("OCR produced {} chars of text", text.len());

        Ok(text)
    }
}
