use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::warn;

use crate::media::token::{self, MediaToken};

/// Manifest entry describing one stored media item. The serialized form
/// matches the media-pack `index.json` schema.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub size: u64,
    pub created_at: u64,
}

/// Abstract local blob store. Bundled assets and user uploads share one
/// logical namespace, distinguished by token prefix (`asset://` vs
/// `media://`); bundled assets silently reject rename/remove.
pub trait MediaStore {
    /// All items: bundled assets first, then uploads in insertion order.
    fn list(&self) -> Vec<MediaItem>;

    /// Store uploaded files, assigning fresh IDs. `files` carries
    /// `(name, mime, bytes)` triples.
    fn add(&mut self, files: Vec<(String, String, Vec<u8>)>) -> Vec<MediaItem>;

    /// Remove an upload. Idempotent: a second remove of the same ID is a
    /// no-op, as is removing a bundled asset.
    fn remove(&mut self, id: &str) -> bool;

    /// Rename an upload. Renaming a bundled asset is a no-op.
    fn rename(&mut self, id: &str, name: &str) -> bool;

    /// Resolve a token to the stored bytes, or `None` if unknown.
    fn resolve(&self, token: &str) -> Option<Arc<Vec<u8>>>;

    /// The token string consumers should use to reference an item.
    fn token_for(&self, id: &str) -> Option<String>;
}

#[derive(Clone, Debug)]
struct StoredBlob {
    item: MediaItem,
    bytes: Arc<Vec<u8>>,
}

/// In-memory media store. Uploads are keyed by generated IDs; bundled
/// assets are registered at construction under their names.
#[derive(Debug, Default)]
pub struct InMemoryMediaStore {
    uploads: BTreeMap<String, StoredBlob>,
    bundled: BTreeMap<String, StoredBlob>,
    /// IDs that must never be issued again: removed uploads and every ID
    /// seen in an imported pack manifest. Keeps stale references from
    /// silently pointing at a different blob.
    retired: BTreeSet<String>,
    next_id: u64,
    clock_ms: u64,
}

impl InMemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bundled, read-only assets by `(name, mime, bytes)`.
    pub fn with_bundled(entries: Vec<(String, String, Vec<u8>)>) -> Self {
        let mut store = Self::new();
        for (name, mime, bytes) in entries {
            let size = bytes.len() as u64;
            store.bundled.insert(
                name.clone(),
                StoredBlob {
                    item: MediaItem {
                        id: name.clone(),
                        name,
                        mime,
                        size,
                        created_at: 0,
                    },
                    bytes: Arc::new(bytes),
                },
            );
        }
        store
    }

    fn fresh_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = format!("m{:08x}", self.next_id);
            if !self.uploads.contains_key(&id) && !self.retired.contains(&id) {
                return id;
            }
        }
    }
}

impl MediaStore for InMemoryMediaStore {
    fn list(&self) -> Vec<MediaItem> {
        self.bundled
            .values()
            .chain(self.uploads.values())
            .map(|b| b.item.clone())
            .collect()
    }

    fn add(&mut self, files: Vec<(String, String, Vec<u8>)>) -> Vec<MediaItem> {
        let mut out = Vec::with_capacity(files.len());
        for (name, mime, bytes) in files {
            // Basic MIME gate; anything non-image is refused per item.
            if !mime.starts_with("image/") {
                warn!(name, mime, "skipping non-image upload");
                continue;
            }
            let id = self.fresh_id();
            self.clock_ms += 1;
            let item = MediaItem {
                id: id.clone(),
                name,
                mime,
                size: bytes.len() as u64,
                created_at: self.clock_ms,
            };
            self.uploads.insert(
                id,
                StoredBlob {
                    item: item.clone(),
                    bytes: Arc::new(bytes),
                },
            );
            out.push(item);
        }
        out
    }

    fn remove(&mut self, id: &str) -> bool {
        // Bundled assets and unknown ids fall through to a no-op.
        match self.uploads.remove(id) {
            Some(_) => {
                self.retired.insert(id.to_string());
                true
            }
            None => false,
        }
    }

    fn rename(&mut self, id: &str, name: &str) -> bool {
        match self.uploads.get_mut(id) {
            Some(blob) => {
                blob.item.name = name.to_string();
                true
            }
            None => false,
        }
    }

    fn resolve(&self, token: &str) -> Option<Arc<Vec<u8>>> {
        match token::parse_token(token)? {
            MediaToken::Media(id) => self.uploads.get(&id).map(|b| b.bytes.clone()),
            MediaToken::Asset(name) => self.bundled.get(&name).map(|b| b.bytes.clone()),
        }
    }

    fn token_for(&self, id: &str) -> Option<String> {
        if self.uploads.contains_key(id) {
            return Some(token::media_token(id));
        }
        if self.bundled.contains_key(id) {
            return Some(token::asset_token(id));
        }
        None
    }
}

/// Path of the manifest inside a media pack.
pub const PACK_INDEX_PATH: &str = "index.json";
/// Directory prefix of blob entries inside a media pack.
pub const PACK_MEDIA_PREFIX: &str = "media/";

/// Serialize a store's uploads as media-pack entries: an `index.json`
/// manifest plus `media/<id>-<name>` blobs. Bundled assets are not packed.
pub fn export_pack(store: &InMemoryMediaStore) -> Vec<(String, Vec<u8>)> {
    let manifest: Vec<MediaItem> = store.uploads.values().map(|b| b.item.clone()).collect();
    let mut entries = Vec::with_capacity(manifest.len() + 1);
    // Manifest serialization of plain data cannot fail.
    let index = serde_json::to_vec_pretty(&manifest).unwrap_or_default();
    entries.push((PACK_INDEX_PATH.to_string(), index));
    for blob in store.uploads.values() {
        entries.push((
            format!("{PACK_MEDIA_PREFIX}{}-{}", blob.item.id, blob.item.name),
            blob.bytes.as_ref().clone(),
        ));
    }
    entries
}

/// Import media-pack entries into a store.
///
/// Fresh IDs are assigned on import and the manifest's own IDs are retired
/// first, so an imported item can never end up under the exporter's ID.
/// Entries outside `index.json` and the `media/` prefix are ignored, and a
/// manifest row whose blob is missing is skipped without aborting the rest
/// of the batch.
pub fn import_pack(
    store: &mut InMemoryMediaStore,
    entries: &[(String, Vec<u8>)],
) -> Vec<MediaItem> {
    let Some(index) = entries.iter().find(|(path, _)| path == PACK_INDEX_PATH) else {
        warn!("media pack has no index.json; nothing imported");
        return Vec::new();
    };
    let manifest: Vec<MediaItem> = match serde_json::from_slice(&index.1) {
        Ok(m) => m,
        Err(e) => {
            warn!(error = %e, "media pack manifest is unreadable");
            return Vec::new();
        }
    };

    store
        .retired
        .extend(manifest.iter().map(|item| item.id.clone()));

    let mut imported = Vec::new();
    for item in manifest {
        let prefix = format!("{PACK_MEDIA_PREFIX}{}-", item.id);
        let Some((_, bytes)) = entries.iter().find(|(path, _)| path.starts_with(&prefix)) else {
            warn!(id = %item.id, "media pack entry missing its blob; skipped");
            continue;
        };
        let mut added = store.add(vec![(item.name, item.mime, bytes.clone())]);
        imported.append(&mut added);
    }
    imported
}

#[cfg(test)]
#[path = "../../tests/unit/media/store.rs"]
mod tests;
