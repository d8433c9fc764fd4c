//! Defines the [SignatureCapture] struct, which turns a signature the user has just
//! saved as a default into a [SignatureRecord] and adds it to a [SignaturePresetStore].

use crate::bindings::{AnnotationHandle, SignatureToolBindings};
use crate::error::PresetError;
use crate::preset::path::{SignaturePathPoint, SignaturePaths};
use crate::preset::record::SignatureRecord;
use crate::preset::store::SignaturePresetStore;
use log::debug;

/// The result of a successful capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOutcome {
    /// The oldest preset, if the store was full and it was evicted to make room.
    pub evicted: Option<SignatureRecord>,
}

/// Captures newly saved signatures into a [SignaturePresetStore].
pub struct SignatureCapture<'a> {
    bindings: &'a dyn SignatureToolBindings,
}

impl<'a> SignatureCapture<'a> {
    #[inline]
    pub fn new(bindings: &'a dyn SignatureToolBindings) -> Self {
        SignatureCapture { bindings }
    }

    /// Builds a [SignatureRecord] from the given tool-owned strokes and adds it to the store.
    ///
    /// The strokes are copied point by point before this function returns. The snapshot is
    /// read from the signature tool's canvas now, and the style from the given annotation.
    ///
    /// On error the store is left untouched.
    pub fn capture(
        &self,
        store: &mut SignaturePresetStore,
        paths: &[Vec<SignaturePathPoint>],
        annotation: AnnotationHandle,
    ) -> Result<CaptureOutcome, PresetError> {
        let record = self.build_record(paths, annotation)?;

        let evicted = store.add(record);

        debug!(
            "captured signature preset, store now holds {} of {}",
            store.len(),
            store.capacity()
        );

        Ok(CaptureOutcome { evicted })
    }

    fn build_record(
        &self,
        paths: &[Vec<SignaturePathPoint>],
        annotation: AnnotationHandle,
    ) -> Result<SignatureRecord, PresetError> {
        let paths = SignaturePaths::copy_from(paths)?;

        let snapshot = self.bindings.render_snapshot()?;

        let style = self.bindings.annotation_style(annotation)?;

        Ok(SignatureRecord::new(snapshot, paths, style))
    }
}
