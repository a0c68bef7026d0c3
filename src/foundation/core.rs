use crate::foundation::error::{PlacardError, PlacardResult};

pub use kurbo::{Affine, BezPath, Circle, Point, Rect, RoundedRect, Vec2};

/// Logical canvas width in layout units. All templates target exactly this surface.
pub const LOGICAL_WIDTH: f64 = 1500.0;
/// Logical canvas height in layout units.
pub const LOGICAL_HEIGHT: f64 = 2100.0;

/// Pixel multiplier applied when exporting, independent of on-screen zoom.
pub const EXPORT_SUPERSAMPLE: f64 = 2.0;

/// Fixed pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// The single logical poster surface shared by all three templates.
    pub const LOGICAL: CanvasSize = CanvasSize {
        width: LOGICAL_WIDTH as u32,
        height: LOGICAL_HEIGHT as u32,
    };

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

/// Straight (non-premultiplied) RGBA8 color as carried by scene nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Theme color: a 6-hex-digit RGB value.
///
/// Parsing is tolerant (`abc`, `#ABC`, `aabbcc`, `#AABBCC`); the canonical
/// form is always uppercase `#RRGGBB`, which is also the serialized form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string, accepting 3- or 6-digit forms with or
    /// without a leading `#`.
    pub fn parse(raw: &str) -> PlacardResult<Self> {
        let s = raw.trim().trim_start_matches('#');
        let digits: Vec<u8> = match s.len() {
            3 => {
                let mut out = Vec::with_capacity(6);
                for c in s.chars() {
                    out.push(hex_nibble(c)?);
                    out.push(hex_nibble(c)?);
                }
                out
            }
            6 => {
                let mut out = Vec::with_capacity(6);
                for c in s.chars() {
                    out.push(hex_nibble(c)?);
                }
                out
            }
            _ => {
                return Err(PlacardError::validation(format!(
                    "invalid hex color '{raw}'"
                )));
            }
        };
        Ok(Self {
            r: digits[0] << 4 | digits[1],
            g: digits[2] << 4 | digits[3],
            b: digits[4] << 4 | digits[5],
        })
    }

    /// Canonical uppercase `#RRGGBB` form.
    pub fn canonical(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8::opaque(self.r, self.g, self.b)
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl TryFrom<String> for HexColor {
    type Error = PlacardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.canonical()
    }
}

fn hex_nibble(c: char) -> PlacardResult<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| PlacardError::validation(format!("invalid hex digit '{c}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
