//! Defines the [SignatureToolEvent] enum, the events delivered by the annotation engine
//! to a [crate::preset::overlay::SignatureOverlay], and the [ListenerId] handles
//! used to register for them.

use crate::bindings::{AnnotationChangeKind, AnnotationHandle};
use crate::preset::path::SignaturePathPoint;

/// A handle to a single listener registration held by the annotation engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The kinds of event a [crate::preset::overlay::SignatureOverlay] listens for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SignatureToolEventKind {
    SaveDefault,
    AnnotationChanged,
    SignaturePlaced,
}

impl SignatureToolEventKind {
    pub const ALL: [SignatureToolEventKind; 3] = [
        SignatureToolEventKind::SaveDefault,
        SignatureToolEventKind::AnnotationChanged,
        SignatureToolEventKind::SignaturePlaced,
    ];
}

/// A single event raised by the annotation engine.
///
/// Event payloads borrow engine-owned buffers. They are only valid for the
/// duration of a single call to [crate::preset::overlay::SignatureOverlay::handle_event()].
#[derive(Debug, Clone, Copy)]
pub enum SignatureToolEvent<'a> {
    /// The user finished drawing a signature and saved it as a default.
    SaveDefault {
        paths: &'a [Vec<SignaturePathPoint>],
        annotation: AnnotationHandle,
    },

    /// One or more annotations in the document changed.
    AnnotationChanged {
        annotations: &'a [AnnotationHandle],
        kind: AnnotationChangeKind,
    },

    /// The user clicked to place a signature that was following the cursor.
    SignaturePlaced,
}

impl<'a> SignatureToolEvent<'a> {
    /// Returns the [SignatureToolEventKind] of this event.
    #[inline]
    pub fn kind(&self) -> SignatureToolEventKind {
        match self {
            SignatureToolEvent::SaveDefault { .. } => SignatureToolEventKind::SaveDefault,
            SignatureToolEvent::AnnotationChanged { .. } => {
                SignatureToolEventKind::AnnotationChanged
            }
            SignatureToolEvent::SignaturePlaced => SignatureToolEventKind::SignaturePlaced,
        }
    }
}
