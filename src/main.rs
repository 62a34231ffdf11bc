use anyhow::Result;
use std::path::Path;
use store_gen::{icon, screenshot};

/// Full asset bundle: the shipping (sophisticated) icon set plus all App
/// Store imagery, written under the current working directory.
fn main() -> Result<()> {
    let root = Path::new(".");

    icon::generate_icon_set(root, icon::IconStyle::Sophisticated)?;
    screenshot::generate_appstore_images(root)?;

    println!("✓ Store asset bundle complete");
    Ok(())
}
