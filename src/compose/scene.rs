use crate::foundation::core::{BezPath, CanvasSize, Point, Rect, Rgba8};

/// Z-order bands. Nodes are drawn in ascending `z`; ties keep push order.
pub const Z_BACKGROUND: i32 = 0;
pub const Z_BAND: i32 = 10;
pub const Z_SCALLOP: i32 = 12;
pub const Z_CARD: i32 = 20;
pub const Z_CARD_BAND: i32 = 22;
pub const Z_IMAGE: i32 = 30;
pub const Z_TEXT: i32 = 40;
/// Badges (shape then text) float above everything else on the poster.
pub const Z_BADGE: i32 = 100;
pub const Z_BADGE_TEXT: i32 = 101;

/// Horizontal anchoring of a text node's origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Origin is the left edge of the line box.
    Left,
    /// Origin is the horizontal center of the line box.
    Center,
    /// Origin is the right edge of the line box.
    Right,
}

/// One drawable element. Coordinates are logical canvas units; the
/// rasterizer applies the output scale uniformly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum NodeKind {
    /// A filled path.
    Fill { path: BezPath, color: Rgba8 },
    /// A single line of text. `origin.y` is the top of the line box; the
    /// x meaning depends on `align`. `max_width` caps the line when set.
    Text {
        content: String,
        origin: Point,
        size: f64,
        color: Rgba8,
        align: TextAlign,
        max_width: Option<f64>,
    },
    /// An image area. `reference` is the raw data-model reference string;
    /// the rasterizer contain-fits whatever the image bank resolved for it
    /// and silently skips unresolved references.
    Image { reference: String, area: Rect },
}

/// A z-ordered drawable.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub z: i32,
    pub kind: NodeKind,
}

/// Flat display list for one poster. Composition emits a `Scene`; rendering
/// walks the sorted nodes. Serializable so composition output can be
/// snapshot-compared without rasterizing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub canvas: CanvasSize,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, z: i32, kind: NodeKind) {
        self.nodes.push(Node { z, kind });
    }

    pub fn push_fill(&mut self, z: i32, path: BezPath, color: Rgba8) {
        self.push(z, NodeKind::Fill { path, color });
    }

    pub fn push_rect(&mut self, z: i32, rect: Rect, color: Rgba8) {
        self.push_fill(z, rect_path(rect), color);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn push_text(
        &mut self,
        z: i32,
        content: impl Into<String>,
        origin: Point,
        size: f64,
        color: Rgba8,
        align: TextAlign,
        max_width: Option<f64>,
    ) {
        let content = content.into();
        if content.is_empty() {
            return;
        }
        self.push(
            z,
            NodeKind::Text {
                content,
                origin,
                size,
                color,
                align,
                max_width,
            },
        );
    }

    pub fn push_image(&mut self, z: i32, reference: impl Into<String>, area: Rect) {
        let reference = reference.into();
        if reference.is_empty() {
            return;
        }
        self.push(z, NodeKind::Image { reference, area });
    }

    /// Nodes in paint order. The sort is stable, so nodes sharing a z band
    /// keep their push order.
    pub fn into_sorted(mut self) -> Vec<Node> {
        self.nodes.sort_by_key(|n| n.z);
        self.nodes
    }
}

/// Axis-aligned rectangle as a closed path.
pub fn rect_path(rect: Rect) -> BezPath {
    use kurbo::Shape;
    rect.to_path(0.1)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/scene.rs"]
mod tests;
