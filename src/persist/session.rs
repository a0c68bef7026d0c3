use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use tracing::warn;

use crate::foundation::debounce::{DATA_DEBOUNCE, DebouncedSlot, THEME_DEBOUNCE};
use crate::foundation::error::PlacardResult;
use crate::model::data::{FlyerData, Template};
use crate::model::theme::Theme;

/// Storage keys for the three persisted slots.
pub const KEY_DATA: &str = "placard.data";
pub const KEY_THEME: &str = "placard.theme";
pub const KEY_TAB: &str = "placard.tab";

/// Simple string key/value backing store for session state.
pub trait StateStore {
    fn get(&self, key: &str) -> PlacardResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> PlacardResult<()>;
}

/// In-memory store, used in tests and as a null backend.
#[derive(Clone, Debug, Default)]
pub struct MemoryStateStore {
    values: BTreeMap<String, String>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> PlacardResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PlacardResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: each key becomes one JSON file.
#[derive(Clone, Debug)]
pub struct FsStateStore {
    dir: PathBuf,
}

impl FsStateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FsStateStore {
    fn get(&self, key: &str) -> PlacardResult<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::Error::from(e)
                .context(format!("read '{}'", path.display()))
                .into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> PlacardResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create '{}'", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value).with_context(|| format!("write '{}'", path.display()))?;
        Ok(())
    }
}

/// Everything restored at startup: the table set, the theme, and the active
/// template tab.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub data: FlyerData,
    pub theme: Theme,
    pub active: Template,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            data: FlyerData::default(),
            theme: Theme::default(),
            active: Template::Featured,
        }
    }
}

/// Load persisted state, falling back to defaults per slot.
///
/// A missing or unreadable slot never fails the load: the corrupted slot is
/// logged and replaced by its default, so a damaged theme cannot take the
/// saved tables down with it. Legacy theme shapes are migrated on the way in.
pub fn load_session(store: &dyn StateStore) -> SessionState {
    let mut state = SessionState::default();

    if let Some(raw) = slot_value(store, KEY_DATA) {
        match serde_json::from_str(&raw) {
            Ok(data) => state.data = data,
            Err(e) => warn!(error = %e, "saved table data is unreadable; using defaults"),
        }
    }

    if let Some(raw) = slot_value(store, KEY_THEME) {
        match serde_json::from_str::<serde_json::Value>(&raw)
            .map_err(anyhow::Error::from)
            .and_then(|v| Theme::migrate_value(v).map_err(anyhow::Error::from))
        {
            Ok(theme) => state.theme = theme,
            Err(e) => warn!(error = %e, "saved theme is unreadable; using defaults"),
        }
    }

    if let Some(raw) = slot_value(store, KEY_TAB) {
        match serde_json::from_str(&raw) {
            Ok(tab) => state.active = tab,
            Err(e) => warn!(error = %e, "saved tab is unreadable; using defaults"),
        }
    }

    state
}

fn slot_value(store: &dyn StateStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(v) => v,
        Err(e) => {
            warn!(key, error = %e, "state slot failed to read");
            None
        }
    }
}

/// Persist all three slots. Write failures are logged, never propagated;
/// editing continues against the in-memory state either way.
pub fn save_session(store: &mut dyn StateStore, state: &SessionState) {
    save_slot(store, KEY_DATA, &state.data);
    save_slot(store, KEY_THEME, &state.theme);
    save_slot(store, KEY_TAB, &state.active);
}

fn save_slot<T: serde::Serialize>(store: &mut dyn StateStore, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(r) => r,
        Err(e) => {
            warn!(key, error = %e, "state slot failed to serialize");
            return;
        }
    };
    if let Err(e) = store.set(key, &raw) {
        warn!(key, error = %e, "state slot failed to write");
    }
}

/// Debounced persistence front-end: edits are scheduled and only flushed to
/// the store once the per-slot quiet window has elapsed. Data and theme use
/// separate windows so a theme tweak does not reset a pending data save.
#[derive(Debug)]
pub struct SessionSaver {
    data: DebouncedSlot<FlyerData>,
    theme: DebouncedSlot<Theme>,
}

impl Default for SessionSaver {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSaver {
    pub fn new() -> Self {
        Self {
            data: DebouncedSlot::new(DATA_DEBOUNCE),
            theme: DebouncedSlot::new(THEME_DEBOUNCE),
        }
    }

    pub fn schedule_data(&mut self, now: Instant, data: FlyerData) {
        self.data.schedule(now, data);
    }

    pub fn schedule_theme(&mut self, now: Instant, theme: Theme) {
        self.theme.schedule(now, theme);
    }

    pub fn has_pending(&self) -> bool {
        self.data.is_pending() || self.theme.is_pending()
    }

    /// Flush any slot whose quiet window has elapsed by `now`.
    pub fn poll(&mut self, store: &mut dyn StateStore, now: Instant) {
        if let Some(data) = self.data.take_due(now) {
            save_slot(store, KEY_DATA, &data);
        }
        if let Some(theme) = self.theme.take_due(now) {
            save_slot(store, KEY_THEME, &theme);
        }
    }

    /// Flush everything immediately, pending or not due yet.
    pub fn flush(&mut self, store: &mut dyn StateStore, now: Instant) {
        if let Some(data) = self.data.take_due(now).or_else(|| self.data.take_now()) {
            save_slot(store, KEY_DATA, &data);
        }
        if let Some(theme) = self.theme.take_due(now).or_else(|| self.theme.take_now()) {
            save_slot(store, KEY_THEME, &theme);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/persist/session.rs"]
mod tests;
