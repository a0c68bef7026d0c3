use crate::foundation::core::{BezPath, Circle, HexColor, RoundedRect};
use crate::model::theme::{BadgeStyle, Theme};

use kurbo::Shape;

/// Badge footprint before length scaling.
pub const BADGE_BASE_WIDTH: f64 = 240.0;
pub const BADGE_BASE_HEIGHT: f64 = 130.0;
/// Base font size for short price strings (< 5 digits displayed).
pub const BADGE_FONT_SHORT: f64 = 60.0;
/// Base font size once the string gets long enough to crowd the badge.
pub const BADGE_FONT_LONG: f64 = 56.0;
/// Spike pairs in the starburst outline.
pub const STARBURST_SPIKES: usize = 24;
/// Divisor keeping the sticker circle from outgrowing its cell.
pub const STICKER_DIVISOR: f64 = 1.8;

/// Purely descriptive badge geometry: dimensions, font size, a closed shape
/// path centered on the origin, and the theme's badge colors. Drawing is the
/// composer/rasterizer's job.
#[derive(Clone, Debug)]
pub struct BadgeSpec {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub shape: BezPath,
    pub fill: HexColor,
    pub text_color: HexColor,
}

/// Length-bucketed scale factor over the displayed price string. The length
/// metric is the digit count, so currency symbols and separators never bump
/// a price into a larger bucket ("$5.00" stays small, "$1234.56" does not).
pub fn badge_scale(price: &str) -> f64 {
    match digit_count(price) {
        n if n >= 6 => 1.28,
        5 => 1.16,
        4 => 1.06,
        _ => 0.96,
    }
}

fn digit_count(price: &str) -> usize {
    price.chars().filter(char::is_ascii_digit).count()
}

/// Compute badge geometry for a price string under the theme's badge style.
///
/// Total for any finite input: every style yields a closed shape. Empty
/// prices are replaced upstream (`$0.00`) before reaching this point.
pub fn badge_spec(price: &str, theme: &Theme) -> BadgeSpec {
    let scale = badge_scale(price);
    let width = BADGE_BASE_WIDTH * scale;
    let height = BADGE_BASE_HEIGHT * scale;
    let base_font = if digit_count(price) >= 5 {
        BADGE_FONT_LONG
    } else {
        BADGE_FONT_SHORT
    };

    let shape = match theme.badge_style {
        BadgeStyle::Starburst => starburst_path(width, height),
        BadgeStyle::Pill => rounded_path(width, height, height * 0.5),
        BadgeStyle::Badge => rounded_path(width, height, height * 0.22),
        BadgeStyle::Sticker => {
            let radius = width.max(height) / STICKER_DIVISOR;
            Circle::new((0.0, 0.0), radius).to_path(0.1)
        }
    };

    BadgeSpec {
        width,
        height,
        font_size: base_font * scale,
        shape,
        fill: theme.badge.background,
        text_color: theme.badge.text,
    }
}

/// Many-point burst outline: vertices alternate between an outer and inner
/// ellipse across `STARBURST_SPIKES` spikes, then close.
fn starburst_path(width: f64, height: f64) -> BezPath {
    let outer_rx = width * 0.5 * 1.12;
    let outer_ry = height * 0.5 * 1.18;
    let inner_rx = width * 0.5 * 0.88;
    let inner_ry = height * 0.5 * 0.88;

    let mut path = BezPath::new();
    let steps = STARBURST_SPIKES * 2;
    for i in 0..steps {
        let angle = (i as f64) * std::f64::consts::PI / (STARBURST_SPIKES as f64);
        let (rx, ry) = if i % 2 == 0 {
            (outer_rx, outer_ry)
        } else {
            (inner_rx, inner_ry)
        };
        let point = (angle.cos() * rx, angle.sin() * ry);
        if i == 0 {
            path.move_to(point);
        } else {
            path.line_to(point);
        }
    }
    path.close_path();
    path
}

fn rounded_path(width: f64, height: f64, radius: f64) -> BezPath {
    RoundedRect::new(-width * 0.5, -height * 0.5, width * 0.5, height * 0.5, radius).to_path(0.1)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/badge.rs"]
mod tests;
