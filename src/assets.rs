//! Local image assets: the cached background encoding and the profile photo.
//!
//! Both files are optional. A missing background means the stylesheet falls
//! back to a gradient; a missing profile photo is replaced by a placeholder
//! bitmap. Nothing in here reports an error to the caller.

use base64::Engine as Base64Engine;
use crate::{Error, Result};
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use log::{debug, warn};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Side length of the placeholder profile bitmap in pixels
pub const PLACEHOLDER_SIZE: u32 = 300;

/// Fill color of the placeholder profile bitmap (`#c3cfe2`)
pub const PLACEHOLDER_COLOR: [u8; 3] = [0xc3, 0xcf, 0xe2];

/// A file's bytes as base64 text plus the MIME type to put in a data URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: &'static str,
    pub base64: String,
}

impl EncodedImage {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            mime: sniff_mime(bytes),
            base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// `data:<mime>;base64,<payload>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

// Unknown formats are labelled PNG; browsers sniff the payload anyway.
fn sniff_mime(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::Gif) => "image/gif",
        Ok(ImageFormat::WebP) => "image/webp",
        Ok(ImageFormat::Bmp) => "image/bmp",
        _ => "image/png",
    }
}

/// Process-wide memo of encoded background images, keyed by path.
///
/// Only successful reads are stored, so a file created after a miss is picked
/// up by the next render. Stored values are never mutated.
#[derive(Debug, Default)]
pub struct AssetCache {
    backgrounds: Mutex<HashMap<PathBuf, Arc<EncodedImage>>>,
}

static SHARED_CACHE: OnceLock<Arc<AssetCache>> = OnceLock::new();

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache shared by every assembler in this process
    pub fn shared() -> Arc<AssetCache> {
        SHARED_CACHE
            .get_or_init(|| Arc::new(AssetCache::new()))
            .clone()
    }

    /// Return the base64 encoding of the file at `path`, reading it at most
    /// once per process. `None` means the caller should use the fallback.
    pub fn background(&self, path: &Path) -> Option<Arc<EncodedImage>> {
        if let Ok(lock) = self.backgrounds.lock() {
            if let Some(hit) = lock.get(path) {
                debug!("background cache hit for {}", path.display());
                return Some(hit.clone());
            }
        }

        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no background at {}, using gradient", path.display());
                return None;
            }
            Err(e) => {
                warn!("cannot read background {}: {}", path.display(), e);
                return None;
            }
        };

        let encoded = Arc::new(EncodedImage::from_bytes(&bytes));
        debug!(
            "encoded background {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            encoded.mime
        );

        // A poisoned lock only costs us the memo; the encoding is still valid.
        if let Ok(mut lock) = self.backgrounds.lock() {
            return Some(lock.entry(path.to_path_buf()).or_insert(encoded).clone());
        }
        Some(encoded)
    }

    /// Number of memoized backgrounds
    pub fn len(&self) -> usize {
        self.backgrounds.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load the background through the process-wide cache.
pub fn load_background(path: impl AsRef<Path>) -> Option<Arc<EncodedImage>> {
    AssetCache::shared().background(path.as_ref())
}

/// A fresh 300×300 single-color bitmap used when no profile photo exists
pub fn placeholder_profile() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(
        PLACEHOLDER_SIZE,
        PLACEHOLDER_SIZE,
        Rgb(PLACEHOLDER_COLOR),
    ))
}

/// Decode the profile photo, or return the placeholder if it is missing or
/// cannot be decoded.
pub fn load_profile_image(path: impl AsRef<Path>) -> DynamicImage {
    let path = path.as_ref();
    if !path.exists() {
        debug!("no profile photo at {}, using placeholder", path.display());
        return placeholder_profile();
    }
    match decode_image(path) {
        Ok(img) => img,
        Err(e) => {
            warn!("cannot decode profile photo {}: {}", path.display(), e);
            placeholder_profile()
        }
    }
}

// Decoder is chosen from the file contents, not the extension.
fn decode_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| Error::AssetError(format!("cannot open {}: {}", path.display(), e)))?;
    Ok(reader.decode()?)
}
