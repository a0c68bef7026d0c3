//! Placard is a deterministic grocery-flyer composition and rendering engine.
//!
//! It turns a validated table set (`FlyerData`) plus a theme (`Theme`) into a
//! poster on a fixed 1500x2100 logical canvas, via a flat display list
//! (`Scene`) rasterized on the CPU.
//!
//! # Pipeline overview
//!
//! 1. **Sanitize**: `FlyerData::sanitize` repairs rows and collects warnings
//! 2. **Resolve**: `ImageBank::prepare` front-loads every image fetch/decode
//! 3. **Compose**: `compose(Template, &FlyerData, &Theme) -> Scene`
//! 4. **Render**: `render_scene -> FrameRgba`, `encode_png` for PNG export
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: composition is pure for a given input;
//!   the same data and theme always produce the same display list.
//! - **No IO in composers or renderers**: network and blob reads are
//!   front-loaded in [`ImageBank`].
//! - **Total over user input**: malformed rows, unresolvable images, and
//!   corrupted saved state degrade per item, never panic.
#![forbid(unsafe_code)]

mod compose;
mod foundation;
mod layout;
mod media;
mod model;
mod persist;
mod render;

pub use compose::chrome::{FOOTER_HEIGHT, HEADER_HEIGHT, body_rect};
pub use compose::scene::{
    Node, NodeKind, Scene, TextAlign, Z_BACKGROUND, Z_BADGE, Z_BADGE_TEXT, Z_BAND, Z_CARD,
    Z_CARD_BAND, Z_IMAGE, Z_SCALLOP, Z_TEXT, rect_path,
};
pub use compose::templates::compose;
pub use foundation::core::{
    Affine, BezPath, CanvasSize, Circle, EXPORT_SUPERSAMPLE, HexColor, LOGICAL_HEIGHT,
    LOGICAL_WIDTH, Point, Rect, Rgba8, RoundedRect, Vec2,
};
pub use foundation::debounce::{DATA_DEBOUNCE, Debounce, DebouncedSlot, THEME_DEBOUNCE};
pub use foundation::error::{PlacardError, PlacardResult};
pub use layout::badge::{
    BADGE_BASE_HEIGHT, BADGE_BASE_WIDTH, BadgeSpec, badge_scale, badge_spec,
};
pub use layout::metrics::{
    CANVAS_MARGIN, ColumnWidths, SectionMetrics, StackedSection, contain_fit, density_scale,
    partition_columns, section_metrics, stack_sections,
};
pub use layout::viewport::{
    FitMode, Viewport, ZOOM_MAX_PERCENT, ZOOM_MIN_PERCENT, ZOOM_STEP_PERCENT,
};
pub use media::resolver::{
    ImageBank, ImageFetcher, ImageRequest, ImageSource, PreparedImage, ResolveState, classify,
    decode_image, drive_candidates, resolve_image, url_candidates,
};
#[cfg(feature = "http")]
pub use media::resolver::HttpFetcher;
pub use media::store::{
    InMemoryMediaStore, MediaItem, MediaStore, PACK_INDEX_PATH, PACK_MEDIA_PREFIX, export_pack,
    import_pack,
};
pub use media::token::{ASSET_SCHEME, MEDIA_SCHEME, MediaToken, asset_token, media_token, parse_token};
pub use model::data::{
    FEATURED_MAX, FeaturedItem, FlyerData, GROUP_SECTION_TITLES, IssueSeverity, Row, RowIssue,
    StoreInfo, Template, normalize_price,
};
pub use model::theme::{AreaColors, BadgeStyle, FONT_SCALE_MAX, FONT_SCALE_MIN, Theme};
pub use persist::session::{
    FsStateStore, KEY_DATA, KEY_TAB, KEY_THEME, MemoryStateStore, SessionSaver, SessionState,
    StateStore, load_session, save_session,
};
pub use render::export::{export_all, export_png, render_template};
pub use render::fonts::{FontCatalog, FontFace};
pub use render::raster::{FrameRgba, encode_png, render_scene};
