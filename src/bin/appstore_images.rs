use anyhow::Result;
use std::path::Path;
use store_gen::screenshot::generate_appstore_images;

/// Standalone entry point for the App Store screenshot/preview bundle.
fn main() -> Result<()> {
    generate_appstore_images(Path::new("."))
}
