//! Defines the [SignatureRecord] struct, a single saved signature preset.

use crate::preset::path::SignaturePaths;
use crate::preset::snapshot::SignatureSnapshot;
use crate::preset::style::SignatureStyle;

/// A single saved signature preset: a rendered snapshot, the owned stroke data, and
/// the style the snapshot was rendered with.
///
/// Records are replaced rather than mutated. A style change produces a new record
/// through [SignatureRecord::restyled()] that shares the same stroke data.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureRecord {
    snapshot: SignatureSnapshot,
    paths: SignaturePaths,
    style: SignatureStyle,
}

impl SignatureRecord {
    #[inline]
    pub fn new(snapshot: SignatureSnapshot, paths: SignaturePaths, style: SignatureStyle) -> Self {
        Self {
            snapshot,
            paths,
            style,
        }
    }

    /// Returns the rendered image of this preset.
    #[inline]
    pub fn snapshot(&self) -> &SignatureSnapshot {
        &self.snapshot
    }

    /// Returns the stroke data of this preset.
    #[inline]
    pub fn paths(&self) -> &SignaturePaths {
        &self.paths
    }

    #[inline]
    pub fn style(&self) -> &SignatureStyle {
        &self.style
    }

    /// Returns a new [SignatureRecord] with the same stroke data as this one, rendered
    /// with the given style.
    pub fn restyled(&self, snapshot: SignatureSnapshot, style: SignatureStyle) -> Self {
        Self {
            snapshot,
            paths: self.paths.clone(),
            style,
        }
    }
}
