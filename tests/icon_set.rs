use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use store_gen::icon::{APPICONSET_DIR, ICON_SLOTS};

/// Runs the `simple_icon` binary in a temp working directory and asserts
/// that every slot of the icon set is produced with the right pixel size
/// and that the catalog's Contents.json is valid.
#[test]
fn test_simple_icon_set_generation() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = Command::new(get_binary_path("simple_icon"))
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run simple_icon");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("simple_icon command failed");
    }

    let set_dir = temp_dir.path().join(APPICONSET_DIR);
    for slot in ICON_SLOTS {
        let path = set_dir.join(slot.filename());
        assert!(path.exists(), "missing icon file: {}", path.display());

        let img = image::open(&path).expect("Failed to decode generated icon");
        assert_eq!(img.width(), slot.pixels);
        assert_eq!(img.height(), slot.pixels);
    }

    // the marketing tile keeps the white border of the simple face
    let tile = image::open(set_dir.join("Icon-1024.png")).unwrap().to_rgba8();
    assert_eq!(*tile.get_pixel(0, 0), image::Rgba([255, 255, 255, 255]));

    verify_contents_json(&set_dir);
}

/// Runs the `sophisticated_icon` binary and probes the gradient face: the
/// corners of the marketing tile must hold the clamped outermost band color.
#[test]
fn test_sophisticated_icon_set_generation() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = Command::new(get_binary_path("sophisticated_icon"))
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run sophisticated_icon");

    assert!(output.status.success(), "sophisticated_icon command failed");

    let set_dir = temp_dir.path().join(APPICONSET_DIR);
    let tile = image::open(set_dir.join("Icon-1024.png")).unwrap().to_rgba8();

    assert_eq!(*tile.get_pixel(0, 0), image::Rgba([180, 216, 251, 255]));
    assert_eq!(*tile.get_pixel(1023, 1023), image::Rgba([180, 216, 251, 255]));

    // center of the glass drop stays bright
    let center = tile.get_pixel(512, 512);
    assert!(center[0] > 150 && center[1] > 180 && center[2] > 200);

    verify_contents_json(&set_dir);
}

fn verify_contents_json(set_dir: &Path) {
    let contents_path = set_dir.join("Contents.json");
    assert!(
        contents_path.exists(),
        "Contents.json should exist at: {}",
        contents_path.display()
    );

    let content = std::fs::read_to_string(&contents_path).expect("Failed to read Contents.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Contents.json should contain valid JSON");

    let images = parsed["images"].as_array().expect("images array");
    assert_eq!(images.len(), ICON_SLOTS.len());

    for (i, image) in images.iter().enumerate() {
        assert!(image["filename"].is_string(), "entry {} missing filename", i);
        assert!(image["idiom"].is_string(), "entry {} missing idiom", i);
        assert!(image["size"].is_string(), "entry {} missing size", i);
        assert!(image["scale"].is_string(), "entry {} missing scale", i);
    }

    assert_eq!(parsed["info"]["version"], 1);
    assert!(parsed["info"]["author"].is_string());
}

/// Path to a named binary, building it first if this test runs before it
/// exists.
fn get_binary_path(name: &str) -> PathBuf {
    let debug_path = Path::new("target/debug").join(name);
    if debug_path.exists() {
        return debug_path.canonicalize().expect("Failed to canonicalize binary path");
    }

    let build_output = Command::new("cargo")
        .args(["build", "--bin", name])
        .output()
        .expect("Failed to run cargo build");

    if !build_output.status.success() {
        panic!(
            "Failed to build {name} binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    debug_path.canonicalize().expect("Failed to canonicalize binary path")
}
