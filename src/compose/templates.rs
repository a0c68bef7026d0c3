use tracing::debug;

use crate::compose::chrome::{self, body_rect};
use crate::compose::scene::{
    Scene, TextAlign, Z_BADGE, Z_BADGE_TEXT, Z_CARD, Z_CARD_BAND, Z_IMAGE, Z_TEXT,
};
use crate::compose::tables;
use kurbo::{RoundedRectRadii, Shape};

use crate::foundation::core::{Affine, CanvasSize, Point, Rect, Rgba8, RoundedRect};
use crate::layout::badge::badge_spec;
use crate::layout::metrics::{self, CANVAS_MARGIN};
use crate::model::data::{FlyerData, GROUP_SECTION_TITLES, Row, Template};
use crate::model::theme::Theme;

/// Featured grid shape and spacing.
const GRID_COLS: usize = 3;
const GRID_ROWS: usize = 3;
const GRID_GUTTER: f64 = 28.0;
/// Vertical breathing room between the chrome and a template body.
const BODY_PADDING: f64 = 28.0;
/// Fraction of a card reserved under the image for the name/size band.
const CARD_TEXT_FRACTION: f64 = 0.22;
/// Extra side inset for the stacked Groups tables.
const GROUPS_SIDE_INSET: f64 = 18.0;
/// Neutral card surface behind the product image.
const CARD_FILL: Rgba8 = Rgba8::opaque(255, 255, 255);

/// Compose one template into a scene.
///
/// Pure over its inputs: no IO, no clock, no randomness. The same data and
/// theme always produce the same display list, and an empty data set still
/// yields a valid poster with header and footer only.
pub fn compose(template: Template, data: &FlyerData, theme: &Theme) -> Scene {
    let mut scene = Scene::new(CanvasSize::LOGICAL);
    chrome::push_header(&mut scene, &data.store, theme);

    match template {
        Template::Featured => compose_featured(&mut scene, data, theme),
        Template::Grocery => compose_grocery(&mut scene, data, theme),
        Template::Groups => compose_groups(&mut scene, data, theme),
    }

    chrome::push_footer(&mut scene, &data.store, theme);
    debug!(template = ?template, nodes = scene.nodes.len(), "composed scene");
    scene
}

/// 3×3 card grid. Items fill left-to-right, top-to-bottom; trailing cells
/// stay empty. Each card carries an image area, a name/size band, and a
/// price badge pinned to the image's top-right corner.
fn compose_featured(scene: &mut Scene, data: &FlyerData, theme: &Theme) {
    let body = body_rect();
    let area = Rect::new(
        CANVAS_MARGIN,
        body.y0 + BODY_PADDING,
        body.x1 - CANVAS_MARGIN,
        body.y1 - BODY_PADDING,
    );
    let cell_w = (area.width() - (GRID_COLS as f64 - 1.0) * GRID_GUTTER) / GRID_COLS as f64;
    let cell_h = (area.height() - (GRID_ROWS as f64 - 1.0) * GRID_GUTTER) / GRID_ROWS as f64;

    for (idx, item) in data.featured.iter().enumerate() {
        let col = idx % GRID_COLS;
        let row = idx / GRID_COLS;
        if row >= GRID_ROWS {
            break;
        }
        let x0 = area.x0 + col as f64 * (cell_w + GRID_GUTTER);
        let y0 = area.y0 + row as f64 * (cell_h + GRID_GUTTER);
        let card = Rect::new(x0, y0, x0 + cell_w, y0 + cell_h);

        scene.push_rect(Z_CARD, card, CARD_FILL);

        let image_box = Rect::new(
            card.x0,
            card.y0,
            card.x1,
            card.y1 - cell_h * CARD_TEXT_FRACTION,
        );
        scene.push_image(Z_IMAGE, item.image_ref.clone(), image_box.inset(-10.0));

        let text_color = theme.featured_band.text.to_rgba8();
        let band_top = image_box.y1;
        let band = RoundedRect::new(
            card.x0,
            band_top,
            card.x1,
            card.y1,
            RoundedRectRadii::new(0.0, 0.0, 12.0, 12.0),
        );
        scene.push_fill(
            Z_CARD_BAND,
            band.to_path(0.1),
            theme.featured_band.background.to_rgba8(),
        );

        let name_size = cell_h * CARD_TEXT_FRACTION * 0.42;
        scene.push_text(
            Z_TEXT,
            item.row.name.clone(),
            Point::new(card.center().x, band_top + 8.0),
            name_size,
            text_color,
            TextAlign::Center,
            Some(cell_w - 24.0),
        );
        scene.push_text(
            Z_TEXT,
            item.row.size.clone(),
            Point::new(card.center().x, band_top + 8.0 + name_size * 1.25),
            name_size * 0.72,
            text_color,
            TextAlign::Center,
            Some(cell_w - 24.0),
        );

        push_badge(scene, &item.row.price, Point::new(image_box.x1, image_box.y0), theme);
    }
}

/// Single full-width table under the shared header.
fn compose_grocery(scene: &mut Scene, data: &FlyerData, theme: &Theme) {
    let body = body_rect();
    let m = metrics::section_metrics(data.grocery.len(), theme.grocery_font_scale, 0.0);
    tables::push_section(
        scene,
        Template::Grocery.title(),
        &data.grocery,
        &m,
        body.y0 + BODY_PADDING,
        theme,
    );
}

/// Three stacked tables in fixed order, spaced by half a row height each.
fn compose_groups(scene: &mut Scene, data: &FlyerData, theme: &Theme) {
    let body = body_rect();
    let categories: [&[Row]; 3] = [&data.frozen, &data.meat, &data.produce];
    let row_counts: Vec<usize> = categories.iter().map(|c| c.len()).collect();
    let stacked = metrics::stack_sections(&row_counts, theme.groups_font_scale, GROUPS_SIDE_INSET);

    let top = body.y0 + BODY_PADDING;
    for ((section, rows), title) in stacked.iter().zip(categories).zip(GROUP_SECTION_TITLES) {
        tables::push_section(
            scene,
            title,
            rows,
            &section.metrics,
            top + section.offset_y,
            theme,
        );
    }
}

/// Badge shape plus centered price text, anchored so the shape's center
/// lands on `anchor` (an image-box corner).
fn push_badge(scene: &mut Scene, price: &str, anchor: Point, theme: &Theme) {
    let spec = badge_spec(price, theme);
    let mut shape = spec.shape.clone();
    shape.apply_affine(Affine::translate((anchor.x, anchor.y)));
    scene.push_fill(Z_BADGE, shape, spec.fill.to_rgba8());
    scene.push_text(
        Z_BADGE_TEXT,
        price,
        Point::new(anchor.x, anchor.y - spec.font_size * 0.5),
        spec.font_size,
        spec.text_color.to_rgba8(),
        TextAlign::Center,
        Some(spec.width),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/compose/templates.rs"]
mod tests;
