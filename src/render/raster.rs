use std::sync::Arc;

use anyhow::Context;
use tracing::warn;

use crate::compose::scene::{NodeKind, Scene, TextAlign};
use crate::foundation::core::{Affine, BezPath, Rect, Rgba8};
use crate::foundation::error::{PlacardError, PlacardResult};
use crate::layout::metrics::contain_fit;
use crate::media::resolver::ImageBank;
use crate::render::fonts::{FontCatalog, FontFace};

/// Finished frame in straight (non-premultiplied) RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub rgba8: Vec<u8>,
}

/// RGBA8 brush carried through parley layout styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TextBrush {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

/// Stateful parley wrapper shaping single-style text runs from raw font
/// bytes.
struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
}

impl TextEngine {
    fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    fn layout(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrush,
        max_width_px: Option<f32>,
        alignment: parley::Alignment,
    ) -> PlacardResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PlacardError::validation("text size must be finite and > 0"));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| PlacardError::validation("no font families in font bytes"))?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PlacardError::validation("font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        if let Some(w) = max_width_px {
            layout.break_all_lines(Some(w));
            layout.align(Some(w), alignment, parley::AlignmentOptions::default());
        } else {
            layout.break_all_lines(None);
        }
        Ok(layout)
    }
}

/// Rasterize a composed scene at a uniform scale factor.
///
/// Text nodes are skipped (with a warning) when the catalog has no usable
/// face, and image nodes are skipped silently when the bank never resolved
/// their reference; neither condition fails the render.
pub fn render_scene(
    scene: &Scene,
    scale: f64,
    images: &ImageBank,
    fonts: &FontCatalog,
    font_family: &str,
) -> PlacardResult<FrameRgba> {
    let width_px = (scene.canvas.width_f64() * scale).round();
    let height_px = (scene.canvas.height_f64() * scale).round();
    let w: u16 = (width_px as u32)
        .try_into()
        .map_err(|_| PlacardError::validation("render width exceeds u16"))?;
    let h: u16 = (height_px as u32)
        .try_into()
        .map_err(|_| PlacardError::validation("render height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    let base = Affine::scale(scale);

    let face = fonts.resolve(font_family);
    if face.is_none() && scene_has_text(scene) {
        warn!(font_family, "no font face available; text will be skipped");
    }
    let mut text_engine = TextEngine::new();

    for node in scene.clone().into_sorted() {
        match node.kind {
            NodeKind::Fill { path, color } => {
                ctx.set_transform(affine_to_cpu(base));
                ctx.set_paint(paint_color(color));
                ctx.fill_path(&bezpath_to_cpu(&path));
            }
            NodeKind::Image { reference, area } => {
                let Some(img) = images.get(&reference) else {
                    continue;
                };
                let fit = contain_fit(area, f64::from(img.width), f64::from(img.height));
                if fit.width() <= 0.0 || fit.height() <= 0.0 {
                    continue;
                }
                let paint =
                    rgba_premul_to_image(&img.rgba8_premul, img.width, img.height)?;
                let tr = base
                    * Affine::translate((fit.x0, fit.y0))
                    * Affine::scale_non_uniform(
                        fit.width() / f64::from(img.width),
                        fit.height() / f64::from(img.height),
                    );
                ctx.set_transform(affine_to_cpu(tr));
                ctx.set_paint(paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(img.width),
                    f64::from(img.height),
                ));
            }
            NodeKind::Text {
                content,
                origin,
                size,
                color,
                align,
                max_width,
            } => {
                let Some(face) = face else {
                    continue;
                };
                draw_text(
                    &mut ctx,
                    &mut text_engine,
                    face,
                    base,
                    &content,
                    origin,
                    size,
                    color,
                    align,
                    max_width,
                )?;
            }
        }
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    let mut rgba8 = pixmap.data_as_u8_slice().to_vec();
    unpremultiply_rgba8_in_place(&mut rgba8);
    Ok(FrameRgba {
        width: u32::from(w),
        height: u32::from(h),
        rgba8,
    })
}

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &FrameRgba) -> PlacardResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.rgba8.clone())
        .ok_or_else(|| PlacardError::validation("frame byte length mismatch"))?;
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out.into_inner())
}

fn scene_has_text(scene: &Scene) -> bool {
    scene
        .nodes
        .iter()
        .any(|n| matches!(n.kind, NodeKind::Text { .. }))
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    ctx: &mut vello_cpu::RenderContext,
    engine: &mut TextEngine,
    face: &FontFace,
    base: Affine,
    content: &str,
    origin: crate::foundation::core::Point,
    size: f64,
    color: Rgba8,
    align: TextAlign,
    max_width: Option<f64>,
) -> PlacardResult<()> {
    let brush = TextBrush {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    };
    let alignment = parley_alignment(align);
    let layout = engine.layout(
        content,
        &face.bytes,
        size as f32,
        brush,
        max_width.map(|w| w as f32),
        alignment,
    )?;

    // With a container width, parley already aligned within [0, w]; shift the
    // container so the origin lands on the requested anchor. Without one,
    // align against the measured line extent.
    let extent = max_width.unwrap_or_else(|| measured_width(&layout));
    let x = match align {
        TextAlign::Left => origin.x,
        TextAlign::Center => origin.x - extent * 0.5,
        TextAlign::Right => origin.x - extent,
    };
    let tr = base * Affine::translate((x, origin.y));
    ctx.set_transform(affine_to_cpu(tr));

    let font =
        vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(face.bytes.as_ref().clone()), 0);
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let b = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(b.r, b.g, b.b, b.a));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    Ok(())
}

fn parley_alignment(align: TextAlign) -> parley::Alignment {
    match align {
        TextAlign::Left => parley::Alignment::Start,
        TextAlign::Center => parley::Alignment::Center,
        TextAlign::Right => parley::Alignment::End,
    }
}

fn measured_width(layout: &parley::Layout<TextBrush>) -> f64 {
    layout
        .lines()
        .map(|l| f64::from(l.metrics().advance))
        .fold(0.0, f64::max)
}

fn paint_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> PlacardResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| PlacardError::validation("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| PlacardError::validation("image height exceeds u16"))?;
    if bytes_premul.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(PlacardError::validation("image byte length mismatch"));
    }
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes_premul.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u32 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u32 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u32 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
