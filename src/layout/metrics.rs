use crate::foundation::core::{LOGICAL_WIDTH, Rect};

/// Fixed outer margin applied on both sides of every table section.
pub const CANVAS_MARGIN: f64 = 48.0;
/// Row height before leading, density, and font-scale multipliers.
pub const BASE_ROW_HEIGHT: f64 = 44.0;
/// Leading multiplier applied to every row.
pub const ROW_LEADING: f64 = 1.25;
/// Row count at which the density scale bottoms out.
pub const MAX_DENSITY_ROWS: f64 = 30.0;
/// Density scale clamp bounds.
pub const DENSITY_MIN: f64 = 0.85;
pub const DENSITY_MAX: f64 = 1.0;
/// Height of a section's category header band, before font scaling.
pub const SECTION_HEADER_HEIGHT: f64 = 64.0;
/// Fraction of the row height used as the row font size.
pub const ROW_FONT_RATIO: f64 = 0.55;
/// Column fractions over the usable width. The price column takes the exact
/// remainder so the three widths always partition the usable width.
pub const NAME_COLUMN_FRACTION: f64 = 0.60;
pub const SIZE_COLUMN_FRACTION: f64 = 0.15;

/// Widths of the three row columns. `name + size + price` equals the usable
/// width exactly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColumnWidths {
    pub name: f64,
    pub size: f64,
    pub price: f64,
}

impl ColumnWidths {
    pub fn total(self) -> f64 {
        self.name + self.size + self.price
    }
}

/// Computed geometry for one table section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionMetrics {
    pub header_height: f64,
    pub row_height: f64,
    pub font_size: f64,
    pub total_height: f64,
    pub columns: ColumnWidths,
    /// Left x of the usable area (margin plus the caller's side inset).
    pub left: f64,
    pub usable_width: f64,
}

/// Heuristic shrink factor applied to row height as row count grows.
///
/// Few rows get full-height rows (1.0×); crowded tables shrink toward 0.85×.
/// Clamped for all non-negative row counts.
pub fn density_scale(row_count: usize) -> f64 {
    (MAX_DENSITY_ROWS / (row_count.max(1) as f64)).clamp(DENSITY_MIN, DENSITY_MAX)
}

/// Compute the geometry of a single table section.
///
/// Pure in all inputs; safe to call on every recomposition. The density
/// scale is a best-effort fit: extreme row counts can still overflow the
/// fixed canvas height, which is accepted rather than clipped or paginated.
pub fn section_metrics(row_count: usize, font_scale: f64, side_inset: f64) -> SectionMetrics {
    let usable_width = (LOGICAL_WIDTH - 2.0 * (CANVAS_MARGIN + side_inset)).max(0.0);
    let row_height = BASE_ROW_HEIGHT * ROW_LEADING * density_scale(row_count) * font_scale;
    let font_size = row_height * ROW_FONT_RATIO;
    let header_height = SECTION_HEADER_HEIGHT * font_scale;
    SectionMetrics {
        header_height,
        row_height,
        font_size,
        total_height: header_height + row_height * row_count as f64,
        columns: partition_columns(usable_width),
        left: CANVAS_MARGIN + side_inset,
        usable_width,
    }
}

/// Split a usable width into the three row columns. The price column takes
/// the remainder so the partition is exact for any non-negative width.
pub fn partition_columns(usable_width: f64) -> ColumnWidths {
    let usable = usable_width.max(0.0);
    let name = usable * NAME_COLUMN_FRACTION;
    let size = usable * SIZE_COLUMN_FRACTION;
    ColumnWidths {
        name,
        size,
        price: usable - name - size,
    }
}

/// One section of a stacked multi-table layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackedSection {
    pub metrics: SectionMetrics,
    /// Vertical offset of the section top, relative to the body origin.
    pub offset_y: f64,
}

/// Stack sections vertically with a gap of half of each section's own row
/// height, so spacing stays visually consistent as row counts vary.
pub fn stack_sections(
    row_counts: &[usize],
    font_scale: f64,
    side_inset: f64,
) -> Vec<StackedSection> {
    let mut out = Vec::with_capacity(row_counts.len());
    let mut cursor = 0.0;
    for (idx, &rows) in row_counts.iter().enumerate() {
        let metrics = section_metrics(rows, font_scale, side_inset);
        if idx > 0 {
            cursor += metrics.row_height * 0.5;
        }
        out.push(StackedSection {
            metrics,
            offset_y: cursor,
        });
        cursor += metrics.total_height;
    }
    out
}

/// Place content of natural size `(width, height)` into `area`, scaled
/// uniformly to fit, centered, never distorting aspect ratio.
///
/// Degenerate natural sizes yield an empty rect at the area center.
pub fn contain_fit(area: Rect, width: f64, height: f64) -> Rect {
    let center = area.center();
    if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
        return Rect::from_center_size(center, (0.0, 0.0));
    }
    let scale = (area.width() / width).min(area.height() / height);
    Rect::from_center_size(center, (width * scale, height * scale))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/metrics.rs"]
mod tests;
