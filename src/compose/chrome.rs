use kurbo::{RoundedRectRadii, Shape};

use crate::compose::scene::{Scene, TextAlign, Z_BAND, Z_BACKGROUND, Z_SCALLOP, Z_TEXT};
use crate::foundation::core::{BezPath, LOGICAL_HEIGHT, LOGICAL_WIDTH, Point, Rect, RoundedRect};
use crate::model::data::StoreInfo;
use crate::model::theme::Theme;

/// Header band height, shared by all three templates.
pub const HEADER_HEIGHT: f64 = 260.0;
/// Footer band height.
pub const FOOTER_HEIGHT: f64 = 170.0;
/// Width of one scallop along the awning edge.
pub const SCALLOP_BAND_WIDTH: f64 = 125.0;
/// Horizontal overlap between adjacent scallops, hiding seam hairlines.
pub const SCALLOP_OVERLAP: f64 = 1.0;
/// How far each scallop dips below the header band.
const SCALLOP_DEPTH: f64 = 30.0;
/// Fraction of the poster width given to the footer text column.
const FOOTER_COLUMN_FRAC: f64 = 0.62;
/// Footer font size at a full-width column; the actual size grows as the
/// column narrows so the copy stays legible at print scale.
const FOOTER_BASE_FONT: f64 = 22.0;

/// Vertical extent available to template bodies, between header and footer.
pub fn body_rect() -> Rect {
    Rect::new(
        0.0,
        HEADER_HEIGHT + SCALLOP_DEPTH,
        LOGICAL_WIDTH,
        LOGICAL_HEIGHT - FOOTER_HEIGHT,
    )
}

/// Push the canvas background and the awning-style header: band, scallops
/// alternating between the two awning colors, store name, the two-line left
/// label, the date range, and a rule under the band.
pub fn push_header(scene: &mut Scene, store: &StoreInfo, theme: &Theme) {
    let full = Rect::new(0.0, 0.0, LOGICAL_WIDTH, LOGICAL_HEIGHT);
    scene.push_rect(Z_BACKGROUND, full, theme.background.to_rgba8());

    let band = Rect::new(0.0, 0.0, LOGICAL_WIDTH, HEADER_HEIGHT);
    scene.push_rect(Z_BAND, band, theme.awning_primary.to_rgba8());

    // Scallops run past both edges so a partial band never shows a gap.
    let count = (LOGICAL_WIDTH / SCALLOP_BAND_WIDTH).ceil() as usize + 2;
    for i in 0..count {
        let left = (i as f64 - 1.0) * SCALLOP_BAND_WIDTH - SCALLOP_OVERLAP * i as f64;
        let color = if i % 2 == 0 {
            theme.awning_primary
        } else {
            theme.awning_secondary
        };
        scene.push_fill(
            Z_SCALLOP,
            scallop_path(left, SCALLOP_BAND_WIDTH + SCALLOP_OVERLAP, HEADER_HEIGHT),
            color.to_rgba8(),
        );
    }

    let company = theme.company.text.to_rgba8();
    scene.push_text(
        Z_TEXT,
        store.name.clone(),
        Point::new(LOGICAL_WIDTH * 0.5, 78.0),
        68.0,
        company,
        TextAlign::Center,
        Some(LOGICAL_WIDTH - 360.0),
    );

    let label_color = theme.awning_secondary.to_rgba8();
    for (i, line) in store.label_lines.iter().enumerate() {
        scene.push_text(
            Z_TEXT,
            line.clone(),
            Point::new(56.0, 52.0 + i as f64 * 34.0),
            26.0,
            label_color,
            TextAlign::Left,
            None,
        );
    }

    scene.push_text(
        Z_TEXT,
        store.date_range.clone(),
        Point::new(LOGICAL_WIDTH * 0.5, 168.0),
        34.0,
        theme.date.text.to_rgba8(),
        TextAlign::Center,
        None,
    );

    let rule = Rect::new(
        LOGICAL_WIDTH * 0.25,
        214.0,
        LOGICAL_WIDTH * 0.75,
        218.0,
    );
    scene.push_rect(Z_TEXT, rule, theme.date.text.to_rgba8());
}

/// Push the footer band with rounded top corners and the two fixed copy
/// lines (hours, then address) stacked and centered in one column.
pub fn push_footer(scene: &mut Scene, store: &StoreInfo, theme: &Theme) {
    let top = LOGICAL_HEIGHT - FOOTER_HEIGHT;
    let band = RoundedRect::new(
        0.0,
        top,
        LOGICAL_WIDTH,
        LOGICAL_HEIGHT,
        RoundedRectRadii::new(24.0, 24.0, 0.0, 0.0),
    );
    scene.push_fill(Z_BAND, band.to_path(0.1), theme.awning_primary.to_rgba8());

    let text = theme.awning_secondary.to_rgba8();
    let column = LOGICAL_WIDTH * FOOTER_COLUMN_FRAC;
    let font_size = FOOTER_BASE_FONT / FOOTER_COLUMN_FRAC;
    let leading = font_size * 1.3;
    // Center the two-line block inside the band.
    let first_y = top + (FOOTER_HEIGHT - leading - font_size) * 0.5;

    for (i, line) in [&store.hours, &store.address].into_iter().enumerate() {
        scene.push_text(
            Z_TEXT,
            line.clone(),
            Point::new(LOGICAL_WIDTH * 0.5, first_y + i as f64 * leading),
            font_size,
            text,
            TextAlign::Center,
            Some(column),
        );
    }
}

/// One semicircular scallop hanging off the bottom of the header band,
/// approximated with a single cubic per half for a stable vertex count.
fn scallop_path(left: f64, width: f64, band_bottom: f64) -> BezPath {
    let right = left + width;
    let mid = left + width * 0.5;
    let bottom = band_bottom + SCALLOP_DEPTH;
    // Cubic control offset for a near-circular arc segment.
    let k = SCALLOP_DEPTH * 4.0 / 3.0;

    let mut path = BezPath::new();
    path.move_to((left, band_bottom));
    path.curve_to(
        (left, band_bottom + k),
        (mid - width * 0.25, bottom),
        (mid, bottom),
    );
    path.curve_to(
        (mid + width * 0.25, bottom),
        (right, band_bottom + k),
        (right, band_bottom),
    );
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/compose/chrome.rs"]
mod tests;
