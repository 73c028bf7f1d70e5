//! Application Configuration
//!
//! User settings stored in TOML format in the platform config directory.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// OCR engine settings
    pub ocr: OcrSettings,
    /// Image preprocessing settings
    pub preprocess: PreprocessSettings,
    /// URL fetch settings
    pub fetch: FetchSettings,
}

/// OCR engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    /// Tesseract language code (e.g. "eng")
    pub language: String,
    /// Page segmentation mode; 6 = single uniform block of text, the right
    /// mode for product labels
    pub page_seg_mode: u32,
    /// Source resolution hint in DPI
    pub source_dpi: u32,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            page_seg_mode: 6,
            source_dpi: 300,
        }
    }
}

/// Image preprocessing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessSettings {
    /// Otsu binarization after grayscale conversion
    pub binarize: bool,
}

impl Default for PreprocessSettings {
    fn default() -> Self {
        Self { binarize: true }
    }
}

/// URL fetch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum accepted image size in bytes
    pub max_image_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_image_bytes: 20 * 1024 * 1024,
        }
    }
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "cashea", "labelscan")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
