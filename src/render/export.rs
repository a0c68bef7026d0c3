use tracing::{info, warn};

use crate::compose::templates::compose;
use crate::foundation::core::EXPORT_SUPERSAMPLE;
use crate::foundation::error::PlacardResult;
use crate::media::resolver::ImageBank;
use crate::model::data::{FlyerData, Template};
use crate::model::theme::Theme;
use crate::render::fonts::FontCatalog;
use crate::render::raster::{self, FrameRgba};

/// Compose and rasterize one template at the fixed export resolution.
pub fn render_template(
    template: Template,
    data: &FlyerData,
    theme: &Theme,
    images: &ImageBank,
    fonts: &FontCatalog,
) -> PlacardResult<FrameRgba> {
    let scene = compose(template, data, theme);
    raster::render_scene(
        &scene,
        EXPORT_SUPERSAMPLE,
        images,
        fonts,
        &theme.font_family,
    )
}

/// Render one template to PNG bytes.
pub fn export_png(
    template: Template,
    data: &FlyerData,
    theme: &Theme,
    images: &ImageBank,
    fonts: &FontCatalog,
) -> PlacardResult<Vec<u8>> {
    let frame = render_template(template, data, theme, images, fonts)?;
    raster::encode_png(&frame)
}

/// Export all three templates, strictly in order.
///
/// Each render completes (or fails) before the next begins, and one
/// template's failure never aborts the rest of the batch.
pub fn export_all(
    data: &FlyerData,
    theme: &Theme,
    images: &ImageBank,
    fonts: &FontCatalog,
) -> Vec<(Template, PlacardResult<Vec<u8>>)> {
    Template::ALL
        .iter()
        .map(|&template| {
            info!(template = ?template, "exporting poster");
            let result = export_png(template, data, theme, images, fonts);
            if let Err(e) = &result {
                warn!(template = ?template, error = %e, "poster export failed");
            }
            (template, result)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/export.rs"]
mod tests;
