use tempfile::TempDir;

use store_gen::screenshot::{generate_dimension, write_summary, REQUIRED_DIMENSIONS};
use store_gen::text::Typeface;

/// Generates one full device dimension and checks every expected file.
#[test]
fn test_dimension_produces_thirteen_canvases() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (width, height) = REQUIRED_DIMENSIONS[0];

    // the bitmap face keeps the run independent of host fonts
    generate_dimension(temp_dir.path(), &Typeface::Bitmap, width, height)
        .expect("generate_dimension failed");

    let dimension_dir = temp_dir.path().join(format!("{width}x{height}"));

    for n in 1..=10 {
        let path = dimension_dir.join(format!("screenshot_{n:02}_{width}x{height}.png"));
        assert!(path.exists(), "missing {}", path.display());
    }
    for n in 1..=3 {
        let path = dimension_dir.join(format!("preview_{n:02}_{width}x{height}.png"));
        assert!(path.exists(), "missing {}", path.display());
    }

    let first = image::open(dimension_dir.join(format!("screenshot_01_{width}x{height}.png")))
        .expect("Failed to decode screenshot");
    assert_eq!(first.width(), width);
    assert_eq!(first.height(), height);

    let preview = image::open(dimension_dir.join(format!("preview_03_{width}x{height}.png")))
        .expect("Failed to decode preview");
    assert_eq!(preview.width(), width);
    assert_eq!(preview.height(), height);
}

/// The README summary enumerates all dimensions and the per-dimension
/// counts.
#[test]
fn test_summary_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_summary(temp_dir.path()).expect("write_summary failed");

    let summary = std::fs::read_to_string(temp_dir.path().join("README.md")).unwrap();
    assert!(summary.contains("# App Store Images for Water Reminder App"));
    for (width, height) in REQUIRED_DIMENSIONS {
        assert!(summary.contains(&format!("### {width}x{height} Dimension")));
    }
    assert!(summary.contains("- **Total**: 13 images"));
}
