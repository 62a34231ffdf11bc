//! App Store screenshot and preview rendering.
//!
//! Every canvas is a vertical gradient with the water-drop badge and
//! centered marketing copy; screenshots carry three feature bullets and a
//! `#N` page marker, previews a single description line. Content and
//! dimensions are fixed constants.

use crate::draw;
use crate::gradient;
use crate::icon::save_png;
use crate::text::Typeface;
use anyhow::{Context, Result};
use image::{imageops, Rgba, RgbaImage};
use std::fmt::Write as _;
use std::fs::create_dir_all;
use std::path::Path;

/// Device canvases App Store Connect expects, portrait and landscape.
pub const REQUIRED_DIMENSIONS: &[(u32, u32)] =
    &[(1242, 2688), (2688, 1242), (1284, 2778), (2778, 1284)];

/// Output directory, relative to the working directory.
pub const OUTPUT_DIR: &str = "AppStore_Images";

const SKY_BLUE: Rgba<u8> = Rgba([135, 206, 250, 255]);
const STEEL_BLUE: Rgba<u8> = Rgba([70, 130, 180, 255]);
const TITLE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SUBTITLE_GRAY: Rgba<u8> = Rgba([200, 200, 200, 255]);

/// Marketing copy for the ten screenshots: title, subtitle, features.
const SCREENSHOTS: &[(&str, &str, [&str; 3])] = &[
    (
        "Stay Hydrated",
        "Track your daily water intake",
        ["• Beautiful progress circle", "• Quick add buttons", "• Daily goals"],
    ),
    (
        "Smart Reminders",
        "Never forget to drink water",
        ["• Custom intervals", "• Active hours", "• Push notifications"],
    ),
    (
        "Progress Tracking",
        "Monitor your hydration",
        ["• Visual progress", "• Daily statistics", "• Goal achievement"],
    ),
    (
        "Custom Settings",
        "Personalize your experience",
        ["• Adjustable goals", "• Flexible schedules", "• User preferences"],
    ),
    (
        "Beautiful UI",
        "Modern design",
        ["• Clean interface", "• Smooth animations", "• Intuitive navigation"],
    ),
    (
        "Health Focus",
        "Prioritize wellness",
        ["• Hydration tracking", "• Health reminders", "• Wellness goals"],
    ),
    (
        "Daily Goals",
        "Set achievable targets",
        ["• Customizable amounts", "• Progress tracking", "• Success celebration"],
    ),
    (
        "Smart Notifications",
        "Stay on track",
        ["• Timely reminders", "• Custom schedules", "• Background processing"],
    ),
    (
        "Data Insights",
        "Track your progress",
        ["• Daily statistics", "• Progress history", "• Achievement tracking"],
    ),
    (
        "Easy to Use",
        "Simple and intuitive",
        ["• One-tap adding", "• Quick settings", "• User-friendly design"],
    ),
];

/// Marketing copy for the three app previews: title, description.
const PREVIEWS: &[(&str, &str)] = &[
    (
        "Stay Hydrated",
        "Track your daily water intake with beautiful visual progress and smart reminders",
    ),
    (
        "Smart Reminders",
        "Get notified when it's time to drink water with customizable intervals and schedules",
    ),
    (
        "Health Focus",
        "Prioritize your wellness with easy water tracking and progress monitoring",
    ),
];

/// Render the transparent water-drop glyph composited onto every canvas.
pub fn water_drop_badge(size: u32, color: Rgba<u8>) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let cx = (size / 2) as i64;
    let cy = (size / 2) as i64;
    let drop_width = (size / 3) as i64;
    let drop_height = (size / 2) as i64;

    draw::fill_triangle(
        &mut img,
        [
            (cx, cy - drop_height / 2),
            (cx - drop_width / 2, cy + drop_height / 2),
            (cx + drop_width / 2, cy + drop_height / 2),
        ],
        color,
    );

    // round highlight near the tip
    let highlight = (size / 6) as i64;
    draw::fill_circle(
        &mut img,
        cx,
        cy - drop_height / 3 + highlight / 2,
        highlight / 2,
        Rgba([255, 255, 255, 128]),
    );

    img
}

/// Render one screenshot canvas.
pub fn render_screenshot(
    face: &Typeface,
    width: u32,
    height: u32,
    title: &str,
    subtitle: &str,
    features: &[&str],
    number: usize,
) -> RgbaImage {
    let mut img = gradient::linear_vertical(width, height, SKY_BLUE, STEEL_BLUE);

    let badge_size = width / 8;
    let badge = water_drop_badge(badge_size, STEEL_BLUE);
    let badge_y = (height / 6) as i64;
    imageops::overlay(&mut img, &badge, ((width - badge_size) / 2) as i64, badge_y);

    let title_px = (width / 20) as f32;
    let subtitle_px = (width / 30) as f32;
    let feature_px = (width / 35) as f32;

    let title_y = badge_y + badge_size as i64 + (height / 20) as i64;
    draw_centered(face, &mut img, title, title_y, title_px, TITLE_WHITE);

    let subtitle_y = title_y + (height / 15) as i64;
    draw_centered(face, &mut img, subtitle, subtitle_y, subtitle_px, SUBTITLE_GRAY);

    let mut feature_y = subtitle_y + (height / 12) as i64;
    for feature in features {
        draw_centered(face, &mut img, feature, feature_y, feature_px, TITLE_WHITE);
        feature_y += (height / 20) as i64;
    }

    let marker = format!("#{number}");
    face.draw_text(
        &mut img,
        &marker,
        width.saturating_sub(100) as i64,
        height.saturating_sub(50) as i64,
        subtitle_px,
        TITLE_WHITE,
    );

    img
}

/// Render one app-preview canvas. The gradient runs opposite to the
/// screenshots and the badge is larger and white.
pub fn render_preview(
    face: &Typeface,
    width: u32,
    height: u32,
    title: &str,
    description: &str,
    number: usize,
) -> RgbaImage {
    let mut img = gradient::linear_vertical(width, height, STEEL_BLUE, SKY_BLUE);

    let badge_size = width / 6;
    let badge = water_drop_badge(badge_size, TITLE_WHITE);
    let badge_y = (height / 4) as i64;
    imageops::overlay(&mut img, &badge, ((width - badge_size) / 2) as i64, badge_y);

    let title_px = (width / 15) as f32;
    let description_px = (width / 25) as f32;

    let title_y = badge_y + badge_size as i64 + (height / 15) as i64;
    draw_centered(face, &mut img, title, title_y, title_px, TITLE_WHITE);

    let description_y = title_y + (height / 10) as i64;
    draw_centered(face, &mut img, description, description_y, description_px, SUBTITLE_GRAY);

    let marker = format!("Preview {number}");
    face.draw_text(
        &mut img,
        &marker,
        width.saturating_sub(120) as i64,
        height.saturating_sub(60) as i64,
        description_px,
        TITLE_WHITE,
    );

    img
}

fn draw_centered(
    face: &Typeface,
    img: &mut RgbaImage,
    line: &str,
    y: i64,
    px: f32,
    color: Rgba<u8>,
) {
    let line_width = face.text_width(line, px) as i64;
    let x = (img.width() as i64 - line_width) / 2;
    face.draw_text(img, line, x, y, px, color);
}

/// Render the full screenshot/preview bundle for every required dimension
/// into `<root>/AppStore_Images/`, plus the README summary.
pub fn generate_appstore_images(root: &Path) -> Result<()> {
    let out_dir = root.join(OUTPUT_DIR);
    create_dir_all(&out_dir).context("Can't create output directory")?;

    let face = Typeface::load();
    for &(width, height) in REQUIRED_DIMENSIONS {
        generate_dimension(&out_dir, &face, width, height)?;
    }

    write_summary(&out_dir)?;
    println!("  ✓ Generated README.md");

    Ok(())
}

/// Render the 10 screenshots and 3 previews for a single device dimension
/// into `<out_dir>/<W>x<H>/`.
pub fn generate_dimension(out_dir: &Path, face: &Typeface, width: u32, height: u32) -> Result<()> {
    let dimension_dir = out_dir.join(format!("{width}x{height}"));
    create_dir_all(&dimension_dir).context("Can't create dimension directory")?;

    println!("Generating {width}x{height} images...");

    for (i, (title, subtitle, features)) in SCREENSHOTS.iter().enumerate() {
        let number = i + 1;
        let img = render_screenshot(face, width, height, title, subtitle, features, number);
        let filename = format!("screenshot_{number:02}_{width}x{height}.png");
        save_png(&img, &dimension_dir.join(&filename))?;
        println!("  ✓ Generated {filename}");
    }

    for (i, (title, description)) in PREVIEWS.iter().enumerate() {
        let number = i + 1;
        let img = render_preview(face, width, height, title, description, number);
        let filename = format!("preview_{number:02}_{width}x{height}.png");
        save_png(&img, &dimension_dir.join(&filename))?;
        println!("  ✓ Generated {filename}");
    }

    Ok(())
}

/// Write the README.md summarizing the generated set.
pub fn write_summary(out_dir: &Path) -> Result<()> {
    let mut summary = String::new();
    summary.push_str("# App Store Images for Water Reminder App\n\n");
    summary.push_str("## Generated Images\n\n");
    for (width, height) in REQUIRED_DIMENSIONS {
        let _ = writeln!(summary, "### {width}x{height} Dimension");
        let _ = writeln!(summary, "- **Screenshots**: {} images", SCREENSHOTS.len());
        let _ = writeln!(summary, "- **App Previews**: {} images", PREVIEWS.len());
        let _ = writeln!(
            summary,
            "- **Total**: {} images\n",
            SCREENSHOTS.len() + PREVIEWS.len()
        );
    }
    summary.push_str("## Usage\n\n");
    summary.push_str("1. Upload screenshots to App Store Connect\n");
    summary.push_str("2. Upload app previews to App Store Connect\n");
    summary.push_str("3. Ensure all required dimensions are covered\n");

    std::fs::write(out_dir.join("README.md"), summary).context("write README.md")
}
