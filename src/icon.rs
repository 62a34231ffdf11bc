//! App icon rendering and the iOS icon-set writer.
//!
//! Two faces are available: the flat `Simple` style and the layered
//! `Sophisticated` style that ships. Both are drawn from scratch at every
//! target pixel size rather than downscaled from a master, so even the
//! 20px slots stay crisp.

use crate::contents_json::{self, ImageEntry};
use crate::draw;
use crate::gradient;
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use std::f32::consts::PI;
use std::fs::create_dir_all;
use std::path::Path;

/// Asset-catalog location the icon set is written to, relative to the
/// working directory.
pub const APPICONSET_DIR: &str = "Sources/Assets.xcassets/AppIcon.appiconset";

const SYSTEM_BLUE: Rgba<u8> = Rgba([0, 122, 255, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// One slot of the iOS icon set: point size, scale multiplier, and the
/// pixel size of the rendered file.
pub struct IconSlot {
    base: &'static str,
    scale: u32,
    pub pixels: u32,
}

/// Every slot an App Store submission expects, from the 20pt notification
/// icon up to the 1024px marketing tile.
pub const ICON_SLOTS: &[IconSlot] = &[
    IconSlot { base: "20", scale: 1, pixels: 20 },
    IconSlot { base: "20", scale: 2, pixels: 40 },
    IconSlot { base: "20", scale: 3, pixels: 60 },
    IconSlot { base: "29", scale: 1, pixels: 29 },
    IconSlot { base: "29", scale: 2, pixels: 58 },
    IconSlot { base: "29", scale: 3, pixels: 87 },
    IconSlot { base: "40", scale: 1, pixels: 40 },
    IconSlot { base: "40", scale: 2, pixels: 80 },
    IconSlot { base: "40", scale: 3, pixels: 120 },
    IconSlot { base: "60", scale: 1, pixels: 60 },
    IconSlot { base: "60", scale: 2, pixels: 120 },
    IconSlot { base: "60", scale: 3, pixels: 180 },
    IconSlot { base: "76", scale: 1, pixels: 76 },
    IconSlot { base: "76", scale: 2, pixels: 152 },
    IconSlot { base: "83.5", scale: 2, pixels: 167 },
    IconSlot { base: "1024", scale: 1, pixels: 1024 },
];

impl IconSlot {
    pub fn filename(&self) -> String {
        if self.scale == 1 {
            format!("Icon-{}.png", self.base)
        } else {
            format!("Icon-{}@{}x.png", self.base, self.scale)
        }
    }

    pub fn idiom(&self) -> &'static str {
        match self.base {
            "1024" => "ios-marketing",
            "76" | "83.5" => "ipad",
            _ => "iphone",
        }
    }

    fn size_label(&self) -> String {
        format!("{0}x{0}", self.base)
    }
}

/// Which of the two icon faces to render.
#[derive(Clone, Copy, Debug)]
pub enum IconStyle {
    Simple,
    Sophisticated,
}

impl IconStyle {
    fn label(self) -> &'static str {
        match self {
            IconStyle::Simple => "simple",
            IconStyle::Sophisticated => "sophisticated",
        }
    }
}

pub fn render(style: IconStyle, size: u32) -> RgbaImage {
    match style {
        IconStyle::Simple => render_simple(size),
        IconStyle::Sophisticated => render_sophisticated(size),
    }
}

/// Flat fallback face: blue field, white border, centered white drop disc.
fn render_simple(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, SYSTEM_BLUE);

    let border = (size / 20).max(1);
    draw::frame(&mut img, border, WHITE);

    let center = (size / 2) as i64;
    draw::fill_circle(&mut img, center, center, (size / 3) as i64, WHITE);

    img
}

/// Layered gradient face used for the shipping icon set: radial background,
/// center glow, drop shadow, glass water drop, highlights, ripple rings,
/// and orbiting particles. Full bleed, no border.
fn render_sophisticated(size: u32) -> RgbaImage {
    let mut img = gradient::radial(size);
    let center = (size / 2) as i64;

    // soft glow over the core, fading outward
    let glow_radius = (size / 4) as i64;
    for i in (1..=glow_radius).rev() {
        let alpha = (30.0 * i as f32 / glow_radius as f32) as u8;
        draw::fill_circle(&mut img, center, center, i, Rgba([100, 200, 255, alpha]));
    }

    let drop_radius = (size / 3) as i64;

    // offset shadow behind the drop
    let shadow_offset = (size / 25) as i64;
    let shadow_blur = (size / 30) as i64;
    for i in 0..shadow_blur {
        let alpha = (40.0 * (1.0 - i as f32 / shadow_blur as f32)) as u8;
        draw::fill_circle(
            &mut img,
            center + shadow_offset,
            center + shadow_offset,
            drop_radius + i,
            Rgba([0, 0, 0, alpha]),
        );
    }

    // glass drop, shaded in three tones toward the core
    for i in 0..drop_radius {
        let alpha = (200.0 - i as f32 / drop_radius as f32 * 100.0) as u8;
        let [r, g, b] = if (i as f32) < drop_radius as f32 * 0.3 {
            [255, 255, 255]
        } else if (i as f32) < drop_radius as f32 * 0.7 {
            [220, 240, 255]
        } else {
            [180, 220, 255]
        };
        draw::fill_circle(&mut img, center, center, drop_radius - i, Rgba([r, g, b, alpha]));
    }

    // highlights offset toward the upper right
    let highlight_radius = drop_radius / 2;
    let highlight_offset = drop_radius / 4;
    draw::fill_circle(
        &mut img,
        center + highlight_offset,
        center - highlight_offset,
        highlight_radius,
        Rgba([255, 255, 255, 180]),
    );
    draw::fill_circle(
        &mut img,
        center + highlight_offset / 2,
        center - highlight_offset / 2,
        highlight_radius / 2,
        Rgba([255, 255, 255, 220]),
    );

    // two ripple rings, the outer one fainter
    for i in 0..2i64 {
        let ring_radius = (size / 3) as i64 + i * (size / 6) as i64;
        let ring_alpha = (80 - i * 30) as f32;
        let ring_width = ((size / 80) as i64).max(1);
        for j in 0..ring_width {
            let alpha = (ring_alpha * (1.0 - j as f32 / ring_width as f32)) as u8;
            draw::stroke_circle(
                &mut img,
                center,
                center,
                ring_radius + j,
                Rgba([255, 255, 255, alpha]),
            );
        }
    }

    // six particles orbiting the drop, alternating sizes
    let particle_count = 6u32;
    let orbit = (size as f32 / 2.5).floor();
    for i in 0..particle_count {
        let angle = i as f32 / particle_count as f32 * 2.0 * PI;
        let px = center + (angle.cos() * orbit) as i64;
        let py = center + (angle.sin() * orbit) as i64;
        let particle_radius = (size / 50 + (i % 2) * (size / 100)) as i64;
        for j in 0..particle_radius {
            let alpha = (150.0 * (1.0 - j as f32 / particle_radius as f32)) as u8;
            draw::fill_circle(&mut img, px, py, j, Rgba([255, 255, 255, alpha]));
        }
    }

    img
}

/// Render every slot of the iOS icon set into
/// `<root>/Sources/Assets.xcassets/AppIcon.appiconset/`, then write the
/// catalog's Contents.json next to the files.
pub fn generate_icon_set(root: &Path, style: IconStyle) -> Result<()> {
    let set_dir = root.join(APPICONSET_DIR);
    create_dir_all(&set_dir).context("Can't create icon set directory")?;

    println!("Generating {} app icon set...", style.label());

    let mut images = Vec::new();
    for slot in ICON_SLOTS {
        let filename = slot.filename();
        let icon = render(style, slot.pixels);
        save_png(&icon, &set_dir.join(&filename))?;
        println!("  ✓ Generated {} ({1}x{1})", filename, slot.pixels);

        images.push(ImageEntry::app_icon(
            filename,
            slot.idiom().to_string(),
            slot.size_label(),
            format!("{}x", slot.scale),
        ));
    }

    contents_json::write_contents_json(&set_dir, images)?;
    println!("  ✓ Generated Contents.json");

    Ok(())
}

/// Write an RGBA buffer as a PNG file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_table_covers_the_full_submission_set() {
        assert_eq!(ICON_SLOTS.len(), 16);

        let filenames: Vec<String> = ICON_SLOTS.iter().map(|s| s.filename()).collect();
        assert!(filenames.contains(&"Icon-20.png".to_string()));
        assert!(filenames.contains(&"Icon-60@3x.png".to_string()));
        assert!(filenames.contains(&"Icon-83.5@2x.png".to_string()));
        assert!(filenames.contains(&"Icon-1024.png".to_string()));
    }

    #[test]
    fn slot_pixel_sizes_multiply_out() {
        for slot in ICON_SLOTS {
            if slot.base == "83.5" {
                assert_eq!(slot.pixels, 167);
            } else {
                let base: u32 = slot.base.parse().unwrap();
                assert_eq!(slot.pixels, base * slot.scale);
            }
        }
    }

    #[test]
    fn idioms_follow_base_point_size() {
        for slot in ICON_SLOTS {
            let expected = match slot.base {
                "1024" => "ios-marketing",
                "76" | "83.5" => "ipad",
                _ => "iphone",
            };
            assert_eq!(slot.idiom(), expected);
        }
    }

    #[test]
    fn simple_icon_has_border_field_and_disc() {
        let size = 64;
        let img = render_simple(size);

        // border
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert_eq!(*img.get_pixel(63, 63), WHITE);
        // blue field between border and disc
        assert_eq!(*img.get_pixel(6, 32), SYSTEM_BLUE);
        // white disc at the center
        assert_eq!(*img.get_pixel(32, 32), WHITE);
    }

    #[test]
    fn sophisticated_corners_keep_the_outer_gradient_band() {
        let img = render_sophisticated(64);
        assert_eq!(*img.get_pixel(0, 0), Rgba([180, 216, 251, 255]));
        assert_eq!(*img.get_pixel(63, 0), Rgba([180, 216, 251, 255]));
    }

    #[test]
    fn sophisticated_center_is_bright_glass() {
        let img = render_sophisticated(128);
        let center = img.get_pixel(64, 64);
        assert!(center[0] > 150 && center[1] > 180 && center[2] > 200);
    }

    #[test]
    fn tiny_sizes_render_without_panicking() {
        for size in [0, 1, 2, 20] {
            let img = render_sophisticated(size);
            assert_eq!(img.width(), size);
            let img = render_simple(size);
            assert_eq!(img.width(), size);
        }
    }

    #[test]
    fn icon_set_writes_all_slots_and_catalog() {
        let temp = tempfile::TempDir::new().unwrap();
        generate_icon_set(temp.path(), IconStyle::Simple).unwrap();

        let set_dir = temp.path().join(APPICONSET_DIR);
        for slot in ICON_SLOTS {
            let img = image::open(set_dir.join(slot.filename())).unwrap();
            assert_eq!(img.width(), slot.pixels);
            assert_eq!(img.height(), slot.pixels);
        }

        let catalog = std::fs::read_to_string(set_dir.join("Contents.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&catalog).unwrap();
        assert_eq!(parsed["images"].as_array().unwrap().len(), ICON_SLOTS.len());
    }
}
