//! Text rendering for screenshot typography.
//!
//! Loads the first TrueType face found among a fixed candidate list; when
//! none is available the built-in 5x7 bitmap face takes over, so the asset
//! set can still be produced on a bare machine.

use crate::draw;
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

/// System faces probed in order. Helvetica first to match the store artwork
/// as rendered on macOS.
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub enum Typeface {
    Truetype(Font<'static>),
    Bitmap,
}

impl Typeface {
    /// Load the first available system face, or the bitmap fallback.
    pub fn load() -> Self {
        for path in FONT_CANDIDATES {
            if let Ok(data) = std::fs::read(path) {
                if let Some(font) = Font::try_from_vec(data) {
                    return Typeface::Truetype(font);
                }
            }
        }
        Typeface::Bitmap
    }

    /// Pixel width of `text` laid out at the given height.
    pub fn text_width(&self, text: &str, height: f32) -> u32 {
        match self {
            Typeface::Truetype(font) => {
                let scale = Scale::uniform(height);
                let width = font
                    .layout(text, scale, point(0.0, 0.0))
                    .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                    .last()
                    .unwrap_or(0.0);
                width.ceil() as u32
            }
            Typeface::Bitmap => bitmap::text_width(text, bitmap::scale_for(height)),
        }
    }

    /// Draw `text` with its top-left corner at (x, y).
    pub fn draw_text(
        &self,
        img: &mut RgbaImage,
        text: &str,
        x: i64,
        y: i64,
        height: f32,
        color: Rgba<u8>,
    ) {
        match self {
            Typeface::Truetype(font) => {
                let scale = Scale::uniform(height);
                let ascent = font.v_metrics(scale).ascent;
                for glyph in font.layout(text, scale, point(x as f32, y as f32 + ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, coverage| {
                            if coverage <= 0.0 {
                                return;
                            }
                            let mut c = color;
                            c[3] = (color[3] as f32 * coverage) as u8;
                            draw::blend_pixel(
                                img,
                                bb.min.x as i64 + gx as i64,
                                bb.min.y as i64 + gy as i64,
                                c,
                            );
                        });
                    }
                }
            }
            Typeface::Bitmap => {
                bitmap::draw_text(img, text, x, y, bitmap::scale_for(height), color)
            }
        }
    }
}

/// 5x7 fallback face. Uppercase-only; lowercase input is folded, anything
/// outside the table renders as a blank advance.
mod bitmap {
    use crate::draw;
    use image::{Rgba, RgbaImage};

    const GLYPH_WIDTH: u32 = 5;
    const GLYPH_HEIGHT: u32 = 7;
    const ADVANCE: u32 = GLYPH_WIDTH + 1;

    /// Integer cell magnification that approximates the requested pixel
    /// height. Never below 1.
    pub fn scale_for(height: f32) -> u32 {
        ((height / (GLYPH_HEIGHT as f32 + 1.0)) as u32).max(1)
    }

    pub fn text_width(text: &str, scale: u32) -> u32 {
        text.chars().count() as u32 * ADVANCE * scale
    }

    pub fn draw_text(
        img: &mut RgbaImage,
        text: &str,
        x: i64,
        y: i64,
        scale: u32,
        color: Rgba<u8>,
    ) {
        let mut pen_x = x;
        for ch in text.chars() {
            let rows = glyph(ch);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0b10000 >> col) == 0 {
                        continue;
                    }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            draw::blend_pixel(
                                img,
                                pen_x + (col * scale + sx) as i64,
                                y + (row as u32 * scale + sy) as i64,
                                color,
                            );
                        }
                    }
                }
            }
            pen_x += (ADVANCE * scale) as i64;
        }
    }

    fn glyph(ch: char) -> [u8; 7] {
        match ch.to_ascii_uppercase() {
            'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
            'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
            'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
            'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
            'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
            'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
            'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
            'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
            'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
            'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
            'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
            'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
            'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
            'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
            'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
            'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
            'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
            'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
            'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
            'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
            'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
            'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100],
            'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
            'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
            'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
            'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
            '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
            '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
            '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
            '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
            '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
            '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
            '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
            '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
            '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
            '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
            '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
            '-' => [0b00000, 0b00000, 0b00000, 0b01110, 0b00000, 0b00000, 0b00000],
            '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
            ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00100, 0b01000],
            '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
            ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
            '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
            '•' => [0b00000, 0b01110, 0b11111, 0b11111, 0b01110, 0b00000, 0b00000],
            _ => [0b00000; 7],
        }
    }
}
