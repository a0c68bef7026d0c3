use crate::foundation::core::HexColor;
use crate::foundation::error::{PlacardError, PlacardResult};

/// Price-badge silhouette selected by the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Starburst,
    Pill,
    Badge,
    Sticker,
}

/// Text/background color pair for one semantic area of the poster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AreaColors {
    pub text: HexColor,
    pub background: HexColor,
}

impl AreaColors {
    pub const fn new(text: HexColor, background: HexColor) -> Self {
        Self { text, background }
    }
}

/// Flat theme configuration: one font family, a palette keyed by semantic
/// area, the badge style, and two independent table font scales.
///
/// Historical note: the font scale was originally a single shared value.
/// Persisted state from that era is migrated by [`Theme::migrate_value`],
/// which copies the legacy `font_scale` into both per-template scales.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub background: HexColor,
    pub awning_primary: HexColor,
    pub awning_secondary: HexColor,
    pub company: AreaColors,
    pub date: AreaColors,
    pub category_header: AreaColors,
    pub featured_band: AreaColors,
    pub sale_rows: AreaColors,
    pub badge_style: BadgeStyle,
    pub badge: AreaColors,
    pub grocery_font_scale: f64,
    pub groups_font_scale: f64,
}

/// Nominal range for the per-template font scale multipliers.
pub const FONT_SCALE_MIN: f64 = 0.8;
pub const FONT_SCALE_MAX: f64 = 1.4;

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "Archivo".to_string(),
            background: HexColor::new(0xFF, 0xF7, 0xEA),
            awning_primary: HexColor::new(0xC6, 0x2F, 0x2F),
            awning_secondary: HexColor::new(0xFF, 0xFF, 0xFF),
            company: AreaColors::new(
                HexColor::new(0x23, 0x1A, 0x12),
                HexColor::new(0xFF, 0xF7, 0xEA),
            ),
            date: AreaColors::new(
                HexColor::new(0x7A, 0x30, 0x1A),
                HexColor::new(0xFF, 0xF7, 0xEA),
            ),
            category_header: AreaColors::new(
                HexColor::new(0xFF, 0xFF, 0xFF),
                HexColor::new(0x1F, 0x3A, 0x2E),
            ),
            featured_band: AreaColors::new(
                HexColor::new(0x23, 0x1A, 0x12),
                HexColor::new(0xF4, 0xE3, 0xC8),
            ),
            sale_rows: AreaColors::new(
                HexColor::new(0x2B, 0x21, 0x18),
                HexColor::new(0xF8, 0xEF, 0xDD),
            ),
            badge_style: BadgeStyle::Starburst,
            badge: AreaColors::new(
                HexColor::new(0xFF, 0xFF, 0xFF),
                HexColor::new(0xC6, 0x2F, 0x2F),
            ),
            grocery_font_scale: 1.0,
            groups_font_scale: 1.0,
        }
    }
}

impl Theme {
    /// Clamp both font scales into the supported range.
    pub fn clamp_font_scales(&mut self) {
        self.grocery_font_scale = self.grocery_font_scale.clamp(FONT_SCALE_MIN, FONT_SCALE_MAX);
        self.groups_font_scale = self.groups_font_scale.clamp(FONT_SCALE_MIN, FONT_SCALE_MAX);
    }

    /// Deserialize a theme from persisted JSON, migrating the legacy
    /// single-scale shape (`font_scale`) into the current two-scale model.
    pub fn migrate_value(mut value: serde_json::Value) -> PlacardResult<Theme> {
        if let Some(obj) = value.as_object_mut()
            && let Some(legacy) = obj.get("font_scale").cloned()
        {
            obj.entry("grocery_font_scale").or_insert(legacy.clone());
            obj.entry("groups_font_scale").or_insert(legacy);
            obj.remove("font_scale");
        }
        let mut theme: Theme = serde_json::from_value(value)
            .map_err(|e| PlacardError::serde(format!("theme: {e}")))?;
        theme.clamp_font_scales();
        Ok(theme)
    }

    /// Built-in presets offered alongside the default theme.
    pub fn presets() -> Vec<(&'static str, Theme)> {
        let classic = Theme::default();

        let mut chalkboard = Theme::default();
        chalkboard.background = HexColor::new(0x17, 0x21, 0x1B);
        chalkboard.awning_primary = HexColor::new(0xE8, 0xC5, 0x47);
        chalkboard.awning_secondary = HexColor::new(0x17, 0x21, 0x1B);
        chalkboard.company = AreaColors::new(
            HexColor::new(0xF5, 0xF0, 0xE1),
            HexColor::new(0x17, 0x21, 0x1B),
        );
        chalkboard.date = AreaColors::new(
            HexColor::new(0xE8, 0xC5, 0x47),
            HexColor::new(0x17, 0x21, 0x1B),
        );
        chalkboard.category_header = AreaColors::new(
            HexColor::new(0x17, 0x21, 0x1B),
            HexColor::new(0xE8, 0xC5, 0x47),
        );
        chalkboard.featured_band = AreaColors::new(
            HexColor::new(0xF5, 0xF0, 0xE1),
            HexColor::new(0x24, 0x33, 0x2A),
        );
        chalkboard.sale_rows = AreaColors::new(
            HexColor::new(0xF5, 0xF0, 0xE1),
            HexColor::new(0x1D, 0x2A, 0x22),
        );
        chalkboard.badge_style = BadgeStyle::Sticker;
        chalkboard.badge = AreaColors::new(
            HexColor::new(0x17, 0x21, 0x1B),
            HexColor::new(0xE8, 0xC5, 0x47),
        );

        let mut bold = Theme::default();
        bold.background = HexColor::new(0xFF, 0xFF, 0xFF);
        bold.awning_primary = HexColor::new(0x1D, 0x4E, 0xD8);
        bold.awning_secondary = HexColor::new(0xFA, 0xCC, 0x15);
        bold.category_header = AreaColors::new(
            HexColor::new(0xFF, 0xFF, 0xFF),
            HexColor::new(0x1D, 0x4E, 0xD8),
        );
        bold.badge_style = BadgeStyle::Pill;
        bold.badge = AreaColors::new(
            HexColor::new(0x1D, 0x4E, 0xD8),
            HexColor::new(0xFA, 0xCC, 0x15),
        );

        vec![
            ("Classic Market", classic),
            ("Chalkboard", chalkboard),
            ("Bold Blue", bold),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/theme.rs"]
mod tests;
