//! Gradient backgrounds.
//!
//! `radial` is the icon background: a three-band blue gradient keyed on the
//! normalized distance of each pixel from the image center. `linear_vertical`
//! is the screenshot background. Both are pure functions of their inputs.

use image::{Rgba, RgbaImage};

/// Band thresholds in normalized-distance units.
const INNER_BAND_END: f32 = 0.3;
const MIDDLE_BAND_END: f32 = 0.7;

/// Render a `size` x `size` three-band radial gradient.
///
/// Each pixel's color depends only on its Euclidean distance from the image
/// center: a dark-blue core inside 0.3 of the maximum radius, a medium-blue
/// ring up to 0.7, and light blue beyond. Distances past the maximum radius
/// clamp to the outermost color, so corners stay flat. Size 0 yields an
/// empty image.
pub fn radial(size: u32) -> RgbaImage {
    let center = (size / 2) as f32;
    let max_radius = (size / 2) as f32;

    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let distance = (dx * dx + dy * dy).sqrt();
        let normalized = if max_radius > 0.0 {
            (distance / max_radius).min(1.0)
        } else {
            0.0
        };
        band_color(normalized)
    })
}

/// Map a normalized distance in [0, 1] to its band color.
///
/// Each band interpolates per channel over its own sub-range; intermediate
/// values are truncated and clamped into [0, 255] before storage.
pub fn band_color(normalized: f32) -> Rgba<u8> {
    let (r, g, b) = if normalized < INNER_BAND_END {
        (
            normalized * 50.0,
            30.0 + normalized * 70.0,
            120.0 + normalized * 80.0,
        )
    } else if normalized < MIDDLE_BAND_END {
        (
            50.0 + (normalized - INNER_BAND_END) * 100.0,
            100.0 + (normalized - INNER_BAND_END) * 100.0,
            200.0 + (normalized - INNER_BAND_END) * 50.0,
        )
    } else {
        (
            150.0 + (normalized - MIDDLE_BAND_END) * 100.0,
            200.0 + (normalized - MIDDLE_BAND_END) * 55.0,
            250.0 + (normalized - MIDDLE_BAND_END) * 5.0,
        )
    };

    Rgba([clamp_channel(r), clamp_channel(g), clamp_channel(b), 255])
}

/// Render a `width` x `height` vertical gradient from `top` to `bottom`.
///
/// Every row is a single color; row 0 is exactly `top`.
pub fn linear_vertical(width: u32, height: u32, top: Rgba<u8>, bottom: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_fn(width, height, |_, y| {
        let t = y as f32 / height as f32;
        Rgba([
            lerp_channel(top[0], bottom[0], t),
            lerp_channel(top[1], bottom[1], t),
            lerp_channel(top[2], bottom[2], t),
            255,
        ])
    })
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    clamp_channel(a as f32 + (b as f32 - a as f32) * t)
}

fn clamp_channel(value: f32) -> u8 {
    (value as i32).clamp(0, 255) as u8
}
