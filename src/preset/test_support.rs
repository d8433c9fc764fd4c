//! Recording implementations of [SignatureToolBindings] and [OverlayHost] for unit tests.

use crate::bindings::{AnnotationHandle, SignatureToolBindings, ToolMode};
use crate::error::{PresetEngineError, PresetError};
use crate::events::{ListenerId, SignatureToolEventKind};
use crate::host::{OverlayElements, OverlayHost};
use crate::preset::path::{SignaturePathPoint, SignaturePaths};
use crate::preset::record::SignatureRecord;
use crate::preset::snapshot::SignatureSnapshot;
use crate::preset::style::SignatureStyle;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EngineCall {
    SetToolMode(ToolMode),
    LoadPendingSignature(SignaturePaths, SignatureStyle),
    CommitPlacement,
    ClearPendingSignature,
    DrawSignature(SignaturePaths, SignatureStyle),
    NotifyNoPresetsRemain,
}

/// Snapshots are encoded as `[first x of the signature, stroke width]`, so tests can
/// tell which paths and style produced them.
#[derive(Default)]
pub(crate) struct RecordingBindings {
    pub calls: RefCell<Vec<EngineCall>>,
    pub has_location: Cell<bool>,
    pub style_unavailable: Cell<bool>,
    pub signature_annotations: RefCell<HashMap<AnnotationHandle, SignatureStyle>>,
    pub failing_draws: RefCell<Vec<f32>>,
    pub canvas: RefCell<Option<(f32, f32)>>,
    pub next_listener: Cell<u64>,
    pub listeners: RefCell<Vec<(ListenerId, SignatureToolEventKind)>>,
}

impl RecordingBindings {
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &EngineCall) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn add_signature_annotation(&self, handle: AnnotationHandle, style: SignatureStyle) {
        self.signature_annotations
            .borrow_mut()
            .insert(handle, style);
    }
}

impl SignatureToolBindings for RecordingBindings {
    fn set_tool_mode(&self, mode: ToolMode) {
        self.calls.borrow_mut().push(EngineCall::SetToolMode(mode));
    }

    fn load_pending_signature(&self, paths: &SignaturePaths, style: &SignatureStyle) {
        self.calls
            .borrow_mut()
            .push(EngineCall::LoadPendingSignature(paths.clone(), *style));
    }

    fn has_known_placement_location(&self) -> bool {
        self.has_location.get()
    }

    fn commit_placement(&self) {
        self.calls.borrow_mut().push(EngineCall::CommitPlacement);
    }

    fn clear_pending_signature(&self) {
        self.calls.borrow_mut().push(EngineCall::ClearPendingSignature);
    }

    fn draw_signature(
        &self,
        paths: &SignaturePaths,
        style: &SignatureStyle,
    ) -> Result<(), PresetError> {
        self.calls
            .borrow_mut()
            .push(EngineCall::DrawSignature(paths.clone(), *style));

        let first_x = paths.strokes().flatten().next().map(|p| p.x).unwrap_or_default();

        if self.failing_draws.borrow().contains(&first_x) {
            return Err(PresetEngineError::DrawRejected.into());
        }

        *self.canvas.borrow_mut() = Some((first_x, style.stroke_width()));

        Ok(())
    }

    fn render_snapshot(&self) -> Result<SignatureSnapshot, PresetError> {
        match *self.canvas.borrow() {
            Some((x, width)) => Ok(SignatureSnapshot::new(vec![x as u8, width as u8])),
            None => Err(PresetEngineError::SnapshotUnavailable.into()),
        }
    }

    fn notify_no_presets_remain(&self) {
        self.calls.borrow_mut().push(EngineCall::NotifyNoPresetsRemain);
    }

    fn is_signature_annotation(&self, annotation: AnnotationHandle) -> bool {
        self.signature_annotations
            .borrow()
            .contains_key(&annotation)
    }

    fn annotation_style(&self, annotation: AnnotationHandle) -> Result<SignatureStyle, PresetError> {
        if self.style_unavailable.get() {
            return Err(PresetError::StyleUnavailable);
        }

        self.signature_annotations
            .borrow()
            .get(&annotation)
            .copied()
            .ok_or(PresetError::StyleUnavailable)
    }

    fn add_event_listener(&self, kind: SignatureToolEventKind) -> ListenerId {
        let id = ListenerId::new(self.next_listener.get());

        self.next_listener.set(id.value() + 1);
        self.listeners.borrow_mut().push((id, kind));

        id
    }

    fn remove_event_listener(&self, listener: ListenerId) {
        self.listeners.borrow_mut().retain(|(id, _)| *id != listener);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostCall {
    Open(OverlayElements),
    Close(OverlayElements),
    CursorImage(Option<SignatureSnapshot>),
}

#[derive(Default)]
pub(crate) struct RecordingHost {
    pub calls: RefCell<Vec<HostCall>>,
    pub disabled: Cell<OverlayElements>,
}

impl RecordingHost {
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn cursor_image(&self) -> Option<SignatureSnapshot> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find_map(|call| match call {
                HostCall::CursorImage(image) => Some(image.clone()),
                _ => None,
            })
            .flatten()
    }
}

impl OverlayHost for RecordingHost {
    fn open_elements(&self, elements: OverlayElements) {
        self.calls.borrow_mut().push(HostCall::Open(elements));
    }

    fn close_elements(&self, elements: OverlayElements) {
        self.calls.borrow_mut().push(HostCall::Close(elements));
    }

    fn set_cursor_overlay_image(&self, image: Option<&SignatureSnapshot>) {
        self.calls
            .borrow_mut()
            .push(HostCall::CursorImage(image.cloned()));
    }

    fn is_element_disabled(&self, element: OverlayElements) -> bool {
        self.disabled.get().contains(element)
    }
}

/// A single-stroke record whose stroke starts at `(x, x)`, with a snapshot of `[x]`.
pub(crate) fn record(x: f32, style: SignatureStyle) -> SignatureRecord {
    SignatureRecord::new(
        SignatureSnapshot::new(vec![x as u8]),
        paths(x),
        style,
    )
}

pub(crate) fn paths(x: f32) -> SignaturePaths {
    SignaturePaths::copy_from(&[vec![
        SignaturePathPoint::new(x, x),
        SignaturePathPoint::new(x + 1.0, x + 2.0),
    ]])
    .unwrap()
}
