//! Vision/OCR Layer
//!
//! Turns a label photo into cleaned plain text for the extraction core.
//! The contract at this boundary is narrow: the pipeline always yields a
//! string (possibly empty) on success, and never an extraction decision.

pub mod preprocess;
pub mod tesseract;

use std::time::Instant;

use anyhow::Result;
use image::DynamicImage;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::config::AppConfig;

pub use preprocess::prepare_for_ocr;
pub use tesseract::OcrEngine;

lazy_static! {
    // Collapse runs of blank lines left behind by label whitespace
    static ref BLANK_LINES: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// OCR pipeline: preprocessing plus recognition
pub struct OcrPipeline {
    engine: OcrEngine,
    config: AppConfig,
}

impl OcrPipeline {
    /// Create a pipeline from application settings
    pub fn new(config: AppConfig) -> Result<Self> {
        info!(
            "Initializing OCR pipeline (language: {}, psm: {})",
            config.ocr.language, config.ocr.page_seg_mode
        );
        let engine = OcrEngine::new(&config.ocr)?;
        Ok(Self { engine, config })
    }

    /// Recognize text on a label image.
    ///
    /// Returns cleaned text, which is empty when the image contains nothing
    /// readable. Recoverable recognition issues surface here as an error,
    /// never past the caller into the extraction core.
    pub fn recognize(&mut self, image: &DynamicImage) -> Result<String> {
        let start = Instant::now();

        let prepared = prepare_for_ocr(image, &self.config.preprocess);
        let raw = self.engine.recognize(&prepared)?;
        let cleaned = clean_ocr_text(&raw);

        debug!(
            "OCR pipeline complete in {:?}: {} chars after cleanup",
            start.elapsed(),
            cleaned.len()
        );

        Ok(cleaned)
    }
}

/// Normalize raw OCR output before extraction.
///
/// Curly quote artifacts (a common misread of the inch mark on labels) are
/// straightened, surrounding whitespace is trimmed, and runs of blank lines
/// collapse to single line breaks.
pub fn clean_ocr_text(text: &str) -> String {
    let straightened = text.replace('\u{201d}', "\"");
    let trimmed = straightened.trim();
    BLANK_LINES.replace_all(trimmed, "\n").into_owned()
}
