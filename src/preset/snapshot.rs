//! Defines the [SignatureSnapshot] struct, an opaque rendered image of a signature used
//! for preset thumbnails and the cursor-follow preview.

use bytes::Bytes;

#[cfg(feature = "image_025")]
use crate::error::PresetError;

#[cfg(feature = "image_025")]
use image_025::DynamicImage;

/// An encoded image of a signature canvas, captured from the annotation engine.
///
/// The bytes are never interpreted by this crate except by [SignatureSnapshot::as_image()].
/// Cloning a [SignatureSnapshot] is cheap; the underlying buffer is reference counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureSnapshot {
    data: Bytes,
}

impl SignatureSnapshot {
    /// Wraps the given encoded image bytes in a new [SignatureSnapshot].
    #[inline]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Creates a [SignatureSnapshot] from a static byte slice without copying.
    #[inline]
    pub const fn from_static(data: &'static [u8]) -> Self {
        Self {
            data: Bytes::from_static(data),
        }
    }

    /// Returns the encoded image bytes of this [SignatureSnapshot].
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of encoded bytes in this [SignatureSnapshot].
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Decodes this [SignatureSnapshot] into an [DynamicImage], for hosts that draw
    /// the preset thumbnails themselves.
    #[cfg(feature = "image_025")]
    pub fn as_image(&self) -> Result<DynamicImage, PresetError> {
        image_025::load_from_memory(&self.data)
            .map_err(|err| PresetError::SnapshotDecodeError(err.to_string()))
    }
}

impl From<Vec<u8>> for SignatureSnapshot {
    #[inline]
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}
