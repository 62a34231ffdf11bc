use anyhow::Result;
use std::path::Path;
use store_gen::icon::{generate_icon_set, IconStyle};

/// Standalone entry point for the flat fallback icon set.
fn main() -> Result<()> {
    generate_icon_set(Path::new("."), IconStyle::Simple)
}
