//! Contents.json data model for Apple's Asset Catalog format.
//!
//! Mirrors the subset of the asset catalog Contents.json schema that an
//! AppIcon set uses: one entry per icon file with its device idiom, point
//! size, and scale, plus the authorship block.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a Contents.json file.
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// Image entries for the different sizes, scales, and device types.
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information.
    pub info: Info,
}

/// Individual image entry within the asset catalog.
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// Name of the image file inside the set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Device type, e.g. "iphone", "ipad", or "ios-marketing".
    pub idiom: String,

    /// Size in points, e.g. "29x29" or "83.5x83.5".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Scale factor, e.g. "1x", "2x", "3x".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

/// Versioning and authorship information for the asset catalog.
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// Format version of the asset catalog (always 1).
    pub version: u8,

    /// Tool that authored the catalog.
    pub author: String,
}

impl ContentsFile {
    /// Create an empty Contents.json structure with the given author.
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }
}

impl ImageEntry {
    /// Entry for one app-icon slot.
    pub fn app_icon(filename: String, idiom: String, size: String, scale: String) -> Self {
        Self {
            filename: Some(filename),
            idiom,
            size: Some(size),
            scale: Some(scale),
        }
    }
}

impl Default for Info {
    fn default() -> Self {
        Self {
            version: 1,
            author: "store-gen".to_string(),
        }
    }
}

/// Write a Contents.json file into `dir` with the provided image entries.
///
/// # Errors
/// Returns an error if JSON serialization or the file write fails.
pub fn write_contents_json(dir: &Path, images: Vec<ImageEntry>) -> Result<()> {
    let cf = ContentsFile {
        images,
        info: Info::default(),
    };
    let json = serde_json::to_string_pretty(&cf).context("Failed to serialize Contents.json")?;
    std::fs::write(dir.join("Contents.json"), json).context("write Contents.json")
}
