//! Image preprocessing for OCR
//!
//! Label photos are converted to grayscale and binarized with Otsu
//! thresholding before recognition. Printed label text is high contrast, so
//! a global threshold is enough to separate glyphs from background.

use image::{DynamicImage, GrayImage};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use tracing::debug;

use crate::config::PreprocessSettings;

/// Apply the configured preprocessing steps to a loaded label image.
///
/// Returns a grayscale image ready for the OCR engine. With binarization
/// disabled this is just the grayscale conversion, which the engine needs
/// regardless.
pub fn prepare_for_ocr(image: &DynamicImage, settings: &PreprocessSettings) -> GrayImage {
    let gray = image.to_luma8();

    if !settings.binarize {
        debug!("Binarization disabled, using plain grayscale");
        return gray;
    }

    let level = otsu_level(&gray);
    debug!("Otsu threshold level: {}", level);

    threshold(&gray, level, ThresholdType::Binary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    /// Dark text-like block on a light background
    fn synthetic_label() -> DynamicImage {
        let mut img = RgbImage::from_pixel(32, 32, Rgb([230, 230, 230]));
        for y in 10..20 {
            for x in 4..28 {
                img.put_pixel(x, y, Rgb([20, 20, 20]));
            }
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_binarize_produces_two_levels() {
        let settings = PreprocessSettings::default();
        assert!(settings.binarize);

        let out = prepare_for_ocr(&synthetic_label(), &settings);
        for pixel in out.pixels() {
            let Luma([v]) = *pixel;
            assert!(v == 0 || v == 255, "non-binary pixel value {}", v);
        }
    }

    #[test]
    fn test_binarize_separates_text_from_background() {
        let out = prepare_for_ocr(&synthetic_label(), &PreprocessSettings::default());
        // Text block black, background white
        assert_eq!(out.get_pixel(16, 15).0[0], 0);
        assert_eq!(out.get_pixel(0, 0).0[0], 255);
    }

    #[test]
    fn test_binarize_disabled_keeps_grayscale() {
        let settings = PreprocessSettings { binarize: false };
        let out = prepare_for_ocr(&synthetic_label(), &settings);
        // Light gray background survives untouched
        assert!(out.get_pixel(0, 0).0[0] > 200);
    }
}
