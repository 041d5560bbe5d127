//! Colors and CSS fill strings
//!
//! Canvas fill styles are CSS strings, so every paint ends up formatted by
//! [`Paint::to_css`].

use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Material palette used for confetti
pub const CONFETTI_PALETTE: [Rgb; 15] = [
    Rgb::new(0xf4, 0x43, 0x36),
    Rgb::new(0xe9, 0x1e, 0x63),
    Rgb::new(0x9c, 0x27, 0xb0),
    Rgb::new(0x67, 0x3a, 0xb7),
    Rgb::new(0x3f, 0x51, 0xb5),
    Rgb::new(0x21, 0x96, 0xf3),
    Rgb::new(0x03, 0xa9, 0xf4),
    Rgb::new(0x00, 0xbc, 0xd4),
    Rgb::new(0x00, 0x96, 0x88),
    Rgb::new(0x4c, 0xaf, 0x50),
    Rgb::new(0x8b, 0xc3, 0x4a),
    Rgb::new(0xff, 0xeb, 0x3b),
    Rgb::new(0xff, 0xc1, 0x07),
    Rgb::new(0xff, 0x98, 0x00),
    Rgb::new(0xff, 0x57, 0x22),
];

/// Heart fill
pub const HEART_COLOR: Rgb = Rgb::new(0xff, 0x6b, 0x95);

/// Saturation/lightness used for hue-cycling particles
pub const HUE_SATURATION: u8 = 70;
pub const HUE_LIGHTNESS: u8 = 60;

/// A fill style handed to the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Opaque solid color (alpha comes from the surface's global alpha)
    Solid(Rgb),
    /// `hsla(hue, 70%, 60%, alpha)`
    Hsla { hue: f32, alpha: f32 },
}

impl Paint {
    pub fn to_css(&self) -> String {
        match *self {
            Paint::Solid(rgb) => rgb.to_hex(),
            Paint::Hsla { hue, alpha } => format!(
                "hsla({:.1}, {}%, {}%, {:.3})",
                hue, HUE_SATURATION, HUE_LIGHTNESS, alpha
            ),
        }
    }
}
