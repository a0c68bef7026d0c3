/// Scheme prefix for user-uploaded blobs in the local media store.
pub const MEDIA_SCHEME: &str = "media://";
/// Scheme prefix for bundled, read-only assets.
pub const ASSET_SCHEME: &str = "asset://";

/// Parsed opaque image token, namespaced by source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaToken {
    /// `media://<id>` — user upload in the local blob store.
    Media(String),
    /// `asset://<name>` — bundled read-only asset.
    Asset(String),
}

impl MediaToken {
    /// Render the token back to its string form.
    pub fn to_token_string(&self) -> String {
        match self {
            MediaToken::Media(id) => media_token(id),
            MediaToken::Asset(name) => asset_token(name),
        }
    }

    /// The bare identifier inside the token.
    pub fn id(&self) -> &str {
        match self {
            MediaToken::Media(id) => id,
            MediaToken::Asset(name) => name,
        }
    }
}

/// Build a `media://` token for a store ID.
pub fn media_token(id: &str) -> String {
    format!("{MEDIA_SCHEME}{id}")
}

/// Build an `asset://` token for a bundled asset name.
pub fn asset_token(name: &str) -> String {
    format!("{ASSET_SCHEME}{name}")
}

/// Parse a token string; returns `None` for anything outside the two
/// namespaces or with an empty identifier.
pub fn parse_token(raw: &str) -> Option<MediaToken> {
    if let Some(id) = raw.strip_prefix(MEDIA_SCHEME) {
        if id.is_empty() {
            return None;
        }
        return Some(MediaToken::Media(id.to_string()));
    }
    if let Some(name) = raw.strip_prefix(ASSET_SCHEME) {
        if name.is_empty() {
            return None;
        }
        return Some(MediaToken::Asset(name.to_string()));
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/media/token.rs"]
mod tests;
