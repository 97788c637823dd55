use std::fmt;

use image::RgbImage;

use crate::error::FaceframeError;

/// RGB color for the rectangle outlines, parsed from a `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default outline color (`#00FF00`).
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };

    /// Parse a `#RRGGBB` hex string. The leading `#` is optional and digits
    /// may be upper- or lowercase. Anything else is rejected with
    /// [`FaceframeError::InvalidColor`].
    pub fn from_hex(hex: &str) -> Result<Self, FaceframeError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        // from_str_radix would also accept a leading sign, so gate on raw digits.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FaceframeError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| FaceframeError::InvalidColor(hex.to_string()))
        };
        Ok(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Format as `#RRGGBB`, the exact inverse of [`Color::from_hex`].
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

/// Axis-aligned bounding box of one detected face, in pixel coordinates of
/// the source image. The detector gives no ordering or uniqueness guarantee;
/// overlapping boxes are possible and are not merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Backend confidence score for this detection.
    pub score: f64,
}

impl FaceBox {
    /// Inclusive far-corner x coordinate (`x + width`).
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Inclusive far-corner y coordinate (`y + height`).
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Result of one detect-and-annotate pass.
pub struct DetectionOutcome {
    pub faces: Vec<FaceBox>,
    pub annotated: RgbImage,
}
