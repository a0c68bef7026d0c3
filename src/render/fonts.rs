use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, warn};

use crate::foundation::error::PlacardResult;

/// One loadable font face: the family name parley reports for it plus the
/// raw file bytes handed to the text shaper and rasterizer.
#[derive(Clone, Debug)]
pub struct FontFace {
    pub family: String,
    pub bytes: Arc<Vec<u8>>,
}

/// Font faces available to the rasterizer, keyed by family name.
///
/// Theme font families resolve case-insensitively; an unknown family falls
/// back to the first loaded face, and an empty catalog makes the rasterizer
/// skip text nodes rather than fail the render.
#[derive(Clone, Debug, Default)]
pub struct FontCatalog {
    faces: Vec<FontFace>,
}

impl FontCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register a face under an explicit family name.
    pub fn with_face(family: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mut catalog = Self::empty();
        catalog.add_face(family, bytes);
        catalog
    }

    pub fn add_face(&mut self, family: impl Into<String>, bytes: Vec<u8>) {
        self.faces.push(FontFace {
            family: family.into(),
            bytes: Arc::new(bytes),
        });
    }

    /// Load every `.ttf`/`.otf`/`.ttc` file in a directory, learning each
    /// face's family name from the font itself. Unreadable or unparsable
    /// files are skipped with a warning.
    pub fn scan_dir(dir: impl AsRef<Path>) -> PlacardResult<Self> {
        let dir = dir.as_ref();
        let mut catalog = Self::empty();
        let mut font_ctx = parley::FontContext::default();

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("read font directory '{}'", dir.display()))?;
        for entry in entries {
            let path = entry.context("read font directory entry")?.path();
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase);
            if !matches!(ext.as_deref(), Some("ttf" | "otf" | "ttc")) {
                continue;
            }
            let bytes = match std::fs::read(&path) {
                Ok(b) => b,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable font file");
                    continue;
                }
            };
            let families = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
            let Some(family) = families
                .first()
                .and_then(|(id, _)| font_ctx.collection.family_name(*id))
                .map(str::to_string)
            else {
                warn!(path = %path.display(), "skipping font file with no family name");
                continue;
            };
            debug!(path = %path.display(), family, "loaded font face");
            catalog.add_face(family, bytes);
        }
        Ok(catalog)
    }

    /// Find the face for a family name (case-insensitive). Unknown families
    /// fall back to the first loaded face; an empty catalog yields `None`.
    pub fn resolve(&self, family: &str) -> Option<&FontFace> {
        self.faces
            .iter()
            .find(|f| f.family.eq_ignore_ascii_case(family))
            .or_else(|| self.faces.first())
    }

    pub fn families(&self) -> Vec<&str> {
        self.faces.iter().map(|f| f.family.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
