// #RRGGBB color parsing, formatting, and blending.
//
// Construct bodies take the per-channel mean of their three pieces' colors.
// Unparseable colors contribute white rather than erroring — the silent
// fallback the original shipped with, preserved here on purpose.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse a `#RRGGBB` hex string. The leading `#` is optional and hex
    /// digits are case-insensitive. Returns `None` for anything else.
    pub fn parse(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&digits[0..2], 16).ok()?,
            g: u8::from_str_radix(&digits[2..4], 16).ok()?,
            b: u8::from_str_radix(&digits[4..6], 16).ok()?,
        })
    }

    /// Parse with the white fallback used throughout the generator.
    pub fn parse_or_white(hex: &str) -> Self {
        Self::parse(hex).unwrap_or(Self::WHITE)
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Blend colors by averaging each channel independently (integer floor of
/// the mean). The slice must be non-empty; the generator always passes
/// three entries.
pub fn blend(colors: &[Rgb]) -> Rgb {
    let n = colors.len() as u32;
    let sum = |f: fn(&Rgb) -> u8| colors.iter().map(|c| f(c) as u32).sum::<u32>();
    Rgb {
        r: (sum(|c| c.r) / n) as u8,
        g: (sum(|c| c.g) / n) as u8,
        b: (sum(|c| c.b) / n) as u8,
    }
}

/// Blend three hex color strings into one hex color string, substituting
/// white for any string that fails to parse.
pub fn blend_hex(colors: &[String; 3]) -> String {
    let rgbs: Vec<Rgb> = colors.iter().map(|c| Rgb::parse_or_white(c)).collect();
    blend(&rgbs).to_hex()
}
