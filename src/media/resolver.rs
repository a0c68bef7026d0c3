use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use crate::foundation::error::{PlacardError, PlacardResult};
use crate::media::store::MediaStore;
use crate::media::token::{self, MediaToken};

/// Classified image reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// Empty or unrecognized: the image area renders nothing.
    None,
    /// Direct HTTP(S) URL, used verbatim as the single candidate.
    Direct(String),
    /// Cloud-drive file ID extracted from a share URL or given bare.
    Drive(String),
    /// `media://<id>` local-store token.
    Media(String),
    /// `asset://<name>` bundled-asset token.
    Asset(String),
}

/// Minimum length of a bare drive file ID.
const DRIVE_ID_MIN_LEN: usize = 25;

/// Classify a raw image reference string.
pub fn classify(reference: &str) -> ImageSource {
    let r = reference.trim();
    if r.is_empty() {
        return ImageSource::None;
    }
    if let Some(t) = token::parse_token(r) {
        return match t {
            MediaToken::Media(id) => ImageSource::Media(id),
            MediaToken::Asset(name) => ImageSource::Asset(name),
        };
    }
    if r.starts_with("http://") || r.starts_with("https://") {
        if let Some(id) = extract_drive_id(r) {
            return ImageSource::Drive(id);
        }
        return ImageSource::Direct(r.to_string());
    }
    if is_bare_drive_id(r) {
        return ImageSource::Drive(r.to_string());
    }
    ImageSource::None
}

/// Pull a drive file ID out of the common share-URL shapes:
/// `/file/d/<id>`, `open?id=<id>`, `uc?...id=<id>`.
fn extract_drive_id(url: &str) -> Option<String> {
    if !url.contains("drive.google.com") {
        return None;
    }
    if let Some(rest) = url.split("/file/d/").nth(1) {
        let id: String = rest
            .chars()
            .take_while(|c| is_drive_id_char(*c))
            .collect();
        if !id.is_empty() {
            return Some(id);
        }
    }
    if let Some(rest) = url.split("id=").nth(1) {
        let id: String = rest
            .chars()
            .take_while(|c| is_drive_id_char(*c))
            .collect();
        if !id.is_empty() {
            return Some(id);
        }
    }
    None
}

fn is_drive_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_bare_drive_id(s: &str) -> bool {
    s.len() >= DRIVE_ID_MIN_LEN && s.chars().all(is_drive_id_char)
}

/// Ordered fallback candidate URLs for a drive file ID: direct download,
/// view, thumbnail service, then the alternate CDN host.
pub fn drive_candidates(id: &str) -> Vec<String> {
    vec![
        format!("https://drive.google.com/uc?export=download&id={id}"),
        format!("https://drive.google.com/uc?export=view&id={id}"),
        format!("https://drive.google.com/thumbnail?id={id}&sz=w2000"),
        format!("https://lh3.googleusercontent.com/d/{id}"),
    ]
}

/// Candidate URLs for a classified source. Token-backed sources resolve via
/// the media store instead and yield no URL candidates.
pub fn url_candidates(source: &ImageSource) -> Vec<String> {
    match source {
        ImageSource::Direct(url) => vec![url.clone()],
        ImageSource::Drive(id) => drive_candidates(id),
        ImageSource::None | ImageSource::Media(_) | ImageSource::Asset(_) => Vec::new(),
    }
}

/// Per-request resolution state: advance through candidates on failure,
/// terminal on success or exhaustion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveState {
    Pending(usize),
    Loaded,
    Exhausted,
}

/// One image reference's resolution attempt over an ordered candidate list.
#[derive(Clone, Debug)]
pub struct ImageRequest {
    candidates: Vec<String>,
    state: ResolveState,
}

impl ImageRequest {
    pub fn new(candidates: Vec<String>) -> Self {
        let state = if candidates.is_empty() {
            ResolveState::Exhausted
        } else {
            ResolveState::Pending(0)
        };
        Self { candidates, state }
    }

    pub fn state(&self) -> ResolveState {
        self.state
    }

    /// The candidate currently being attempted, if any.
    pub fn current(&self) -> Option<&str> {
        match self.state {
            ResolveState::Pending(i) => self.candidates.get(i).map(String::as_str),
            _ => None,
        }
    }

    /// Record a failed attempt: `Pending(i) -> Pending(i + 1)`, or
    /// `Exhausted` past the last candidate.
    pub fn fail(&mut self) {
        if let ResolveState::Pending(i) = self.state {
            let next = i + 1;
            if next < self.candidates.len() {
                debug!(candidate = next, "image candidate failed; advancing");
                self.state = ResolveState::Pending(next);
            } else {
                debug!("image candidates exhausted");
                self.state = ResolveState::Exhausted;
            }
        }
    }

    /// Record a successful load.
    pub fn succeed(&mut self) {
        if matches!(self.state, ResolveState::Pending(_)) {
            self.state = ResolveState::Loaded;
        }
    }
}

/// Fetches raw bytes for a candidate URL. The engine itself performs no
/// network IO; callers plug in [`HttpFetcher`] or a test double.
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> PlacardResult<Vec<u8>>;
}

/// Blocking HTTP fetcher over reqwest.
#[cfg(feature = "http")]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    pub fn new() -> PlacardResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("placard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self { client })
    }
}

#[cfg(feature = "http")]
impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> PlacardResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("fetch '{url}'"))?;
        if !response.status().is_success() {
            return Err(PlacardError::resolve(format!(
                "fetch '{url}': HTTP {}",
                response.status()
            )));
        }
        let bytes = response.bytes().context("read image body")?;
        Ok(bytes.to_vec())
    }
}

/// Decoded raster image in premultiplied RGBA8 form, ready for the
/// rasterizer.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> PlacardResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// Resolve one reference to decoded pixels, walking URL candidates in order
/// and trying the media store for token references.
///
/// Failures never escape: exhausting every candidate (or an unknown token)
/// yields `None`, and the affected image area simply renders nothing.
pub fn resolve_image(
    reference: &str,
    store: &dyn MediaStore,
    fetcher: &dyn ImageFetcher,
) -> Option<PreparedImage> {
    match classify(reference) {
        ImageSource::None => None,
        ImageSource::Media(_) | ImageSource::Asset(_) => {
            let bytes = store.resolve(reference)?;
            match decode_image(&bytes) {
                Ok(img) => Some(img),
                Err(e) => {
                    debug!(reference, error = %e, "stored image failed to decode");
                    None
                }
            }
        }
        source => {
            let mut request = ImageRequest::new(url_candidates(&source));
            while let Some(url) = request.current().map(str::to_string) {
                match fetcher.fetch(&url).and_then(|bytes| decode_image(&bytes)) {
                    Ok(img) => {
                        request.succeed();
                        return Some(img);
                    }
                    Err(e) => {
                        debug!(url = %url, error = %e, "image candidate failed");
                        request.fail();
                    }
                }
            }
            None
        }
    }
}

/// Resolved images keyed by their raw reference string.
///
/// Mirrors the front-loaded IO model of a prepared asset store: all network
/// and blob reads happen here, so composing and rasterizing stay IO-free.
/// Replacing or dropping an entry releases the underlying pixel buffer.
#[derive(Clone, Debug, Default)]
pub struct ImageBank {
    by_ref: HashMap<String, PreparedImage>,
}

impl ImageBank {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve every reference independently; failures leave gaps rather
    /// than aborting the batch.
    pub fn prepare(
        references: &[String],
        store: &dyn MediaStore,
        fetcher: &dyn ImageFetcher,
    ) -> Self {
        let mut by_ref = HashMap::with_capacity(references.len());
        for reference in references {
            if by_ref.contains_key(reference) {
                continue;
            }
            if let Some(img) = resolve_image(reference, store, fetcher) {
                by_ref.insert(reference.clone(), img);
            }
        }
        Self { by_ref }
    }

    pub fn get(&self, reference: &str) -> Option<&PreparedImage> {
        self.by_ref.get(reference)
    }

    pub fn insert(&mut self, reference: impl Into<String>, image: PreparedImage) {
        self.by_ref.insert(reference.into(), image);
    }

    pub fn len(&self) -> usize {
        self.by_ref.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ref.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/resolver.rs"]
mod tests;
