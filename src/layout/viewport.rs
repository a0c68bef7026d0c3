use crate::foundation::core::{EXPORT_SUPERSAMPLE, LOGICAL_HEIGHT, LOGICAL_WIDTH};

/// Manual zoom step, in percent.
pub const ZOOM_STEP_PERCENT: u32 = 10;
/// Manual zoom clamp bounds, in percent.
pub const ZOOM_MIN_PERCENT: u32 = 25;
pub const ZOOM_MAX_PERCENT: u32 = 400;

/// How the on-screen scale is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Scale tracks the container width continuously.
    FitWidth,
    /// User-controlled percentage, stepped and clamped.
    Manual,
}

/// Maps the fixed logical canvas to an on-screen size.
///
/// Display-only: nothing here affects exported pixel dimensions, which are
/// always the logical size times [`EXPORT_SUPERSAMPLE`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    mode: FitMode,
    manual_percent: u32,
    container_width: f64,
    container_height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            mode: FitMode::FitWidth,
            manual_percent: 100,
            container_width: LOGICAL_WIDTH,
            container_height: LOGICAL_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FitMode {
        self.mode
    }

    /// Last manual zoom percentage. Retained while in fit-width mode.
    pub fn manual_percent(&self) -> u32 {
        self.manual_percent
    }

    /// Record the latest container size. Callers feed this from a resize
    /// observer so fit-width tracks the container continuously.
    pub fn set_container(&mut self, width: f64, height: f64) {
        self.container_width = width.max(0.0);
        self.container_height = height.max(0.0);
    }

    /// Current uniform display scale factor.
    pub fn scale(&self) -> f64 {
        match self.mode {
            FitMode::FitWidth => self.container_width / LOGICAL_WIDTH,
            FitMode::Manual => f64::from(self.manual_percent) / 100.0,
        }
    }

    /// On-screen size of the canvas at the current scale.
    pub fn display_size(&self) -> (f64, f64) {
        let s = self.scale();
        (LOGICAL_WIDTH * s, LOGICAL_HEIGHT * s)
    }

    /// Switch to fit-width; the fit scale applies immediately via `scale()`.
    pub fn fit_width(&mut self) {
        self.mode = FitMode::FitWidth;
    }

    /// Switch back to manual zoom, restoring the last manual percentage
    /// rather than the fit-derived scale.
    pub fn manual(&mut self) {
        self.mode = FitMode::Manual;
    }

    /// Set an explicit zoom percentage (clamped) and enter manual mode.
    pub fn set_percent(&mut self, percent: u32) {
        self.manual_percent = percent.clamp(ZOOM_MIN_PERCENT, ZOOM_MAX_PERCENT);
        self.mode = FitMode::Manual;
    }

    pub fn zoom_in(&mut self) {
        self.set_percent(self.manual_percent.saturating_add(ZOOM_STEP_PERCENT));
    }

    pub fn zoom_out(&mut self) {
        self.set_percent(self.manual_percent.saturating_sub(ZOOM_STEP_PERCENT));
    }

    /// Exported pixel dimensions: full logical resolution at the fixed
    /// supersampling multiplier, independent of zoom or fit state.
    pub fn export_pixel_size() -> (u32, u32) {
        (
            (LOGICAL_WIDTH * EXPORT_SUPERSAMPLE).round() as u32,
            (LOGICAL_HEIGHT * EXPORT_SUPERSAMPLE).round() as u32,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/viewport.rs"]
mod tests;
