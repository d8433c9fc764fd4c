//! Defines the [StyleSyncObserver] struct, which keeps every saved preset rendered in
//! the style most recently applied to a placed signature annotation.

use crate::bindings::{AnnotationChangeKind, AnnotationHandle, SignatureToolBindings};
use crate::error::PresetError;
use crate::preset::record::SignatureRecord;
use crate::preset::store::SignaturePresetStore;
use crate::preset::style::SignatureStyle;
use itertools::Itertools;
use log::{debug, warn};

/// The result of offering a single "annotation changed" event to a [StyleSyncObserver].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSyncOutcome {
    /// The event was not a modification of exactly one signature annotation.
    NotApplicable,

    /// The event applied, but the new style could not be read. No record changed.
    Skipped,

    /// Every record was offered the new style. `restyled` of them were re-rendered;
    /// the remainder kept their previous snapshot and style.
    Applied {
        style: SignatureStyle,
        restyled: usize,
    },
}

/// Re-renders every preset in a [SignaturePresetStore] when the user edits the style of
/// a placed signature annotation.
pub struct StyleSyncObserver<'a> {
    bindings: &'a dyn SignatureToolBindings,
}

impl<'a> StyleSyncObserver<'a> {
    #[inline]
    pub fn new(bindings: &'a dyn SignatureToolBindings) -> Self {
        StyleSyncObserver { bindings }
    }

    /// Returns `true` if the given change is a modification of exactly one annotation,
    /// and that annotation is a signature.
    pub fn applies_to(&self, annotations: &[AnnotationHandle], kind: AnnotationChangeKind) -> bool {
        kind == AnnotationChangeKind::Modify
            && annotations.len() == 1
            && self.bindings.is_signature_annotation(annotations[0])
    }

    /// Responds to a single "annotation changed" event.
    ///
    /// When the event applies, every record is re-rendered in order with the changed
    /// annotation's style, and the store's records are replaced in one step. Stroke
    /// data is carried over unchanged.
    pub fn on_annotation_changed(
        &self,
        store: &mut SignaturePresetStore,
        annotations: &[AnnotationHandle],
        kind: AnnotationChangeKind,
    ) -> StyleSyncOutcome {
        if !self.applies_to(annotations, kind) {
            return StyleSyncOutcome::NotApplicable;
        }

        let style = match self.bindings.annotation_style(annotations[0]) {
            Ok(style) => style,
            Err(err) => {
                warn!("signature style sync skipped: {}", err);

                return StyleSyncOutcome::Skipped;
            }
        };

        let mut restyled = 0;

        let records = store
            .iter()
            .enumerate()
            .map(|(index, record)| match self.restyle(record, &style) {
                Ok(record) => {
                    restyled += 1;

                    record
                }
                Err(err) => {
                    warn!(
                        "signature preset {} kept its previous style: {}",
                        index, err
                    );

                    record.clone()
                }
            })
            .collect_vec();

        store.replace_all(records);

        debug!(
            "signature style sync applied to {} of {} presets",
            restyled,
            store.len()
        );

        StyleSyncOutcome::Applied { style, restyled }
    }

    fn restyle(
        &self,
        record: &SignatureRecord,
        style: &SignatureStyle,
    ) -> Result<SignatureRecord, PresetError> {
        self.bindings.draw_signature(record.paths(), style)?;

        let snapshot = self.bindings.render_snapshot()?;

        Ok(record.restyled(snapshot, *style))
    }
}
