use crate::compose::scene::{Scene, TextAlign, Z_BAND, Z_TEXT};
use crate::foundation::core::{Point, Rect};
use crate::layout::metrics::SectionMetrics;
use crate::model::data::Row;
use crate::model::theme::Theme;

/// Inset of row text from its column edge.
const CELL_PADDING: f64 = 18.0;

/// Push one titled table section at vertical position `top`: the category
/// header band, zebra-striped rows, and the three text columns (name, size,
/// right-aligned price).
///
/// Returns the y coordinate just below the section.
pub fn push_section(
    scene: &mut Scene,
    title: &str,
    rows: &[Row],
    metrics: &SectionMetrics,
    top: f64,
    theme: &Theme,
) -> f64 {
    let right = metrics.left + metrics.usable_width;

    let header = Rect::new(metrics.left, top, right, top + metrics.header_height);
    scene.push_rect(Z_BAND, header, theme.category_header.background.to_rgba8());
    scene.push_text(
        Z_TEXT,
        title,
        Point::new(
            metrics.left + CELL_PADDING,
            top + (metrics.header_height - metrics.header_height * 0.55) * 0.5,
        ),
        metrics.header_height * 0.55,
        theme.category_header.text.to_rgba8(),
        TextAlign::Left,
        Some(metrics.usable_width - 2.0 * CELL_PADDING),
    );

    let row_text = theme.sale_rows.text.to_rgba8();
    let stripe = theme.sale_rows.background.to_rgba8();
    let name_x = metrics.left + CELL_PADDING;
    let size_x = metrics.left + metrics.columns.name + CELL_PADDING;
    let price_x = right - CELL_PADDING;

    for (i, row) in rows.iter().enumerate() {
        let row_top = top + metrics.header_height + i as f64 * metrics.row_height;
        if i % 2 == 1 {
            let band = Rect::new(metrics.left, row_top, right, row_top + metrics.row_height);
            scene.push_rect(Z_BAND, band, stripe);
        }
        let text_y = row_top + (metrics.row_height - metrics.font_size) * 0.5;

        scene.push_text(
            Z_TEXT,
            row.name.clone(),
            Point::new(name_x, text_y),
            metrics.font_size,
            row_text,
            TextAlign::Left,
            Some(metrics.columns.name - 2.0 * CELL_PADDING),
        );
        scene.push_text(
            Z_TEXT,
            row.size.clone(),
            Point::new(size_x, text_y),
            metrics.font_size,
            row_text,
            TextAlign::Left,
            Some(metrics.columns.size - CELL_PADDING),
        );
        scene.push_text(
            Z_TEXT,
            row.price.clone(),
            Point::new(price_x, text_y),
            metrics.font_size,
            row_text,
            TextAlign::Right,
            Some(metrics.columns.price - CELL_PADDING),
        );
    }

    top + metrics.total_height
}

#[cfg(test)]
#[path = "../../tests/unit/compose/tables.rs"]
mod tests;
