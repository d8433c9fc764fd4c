#![allow(dead_code)]

use signature_presets::prelude::*;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetToolMode(ToolMode),
    LoadPendingSignature(SignaturePaths, SignatureStyle),
    CommitPlacement,
    ClearPendingSignature,
    NotifyNoPresetsRemain,
    OpenElements(OverlayElements),
    CloseElements(OverlayElements),
    CursorImage(Option<SignatureSnapshot>),
}

/// A stand-in for the annotation engine and the UI state layer. Every annotation with
/// an even handle is a signature annotation, styled with `style`.
pub struct FakeEngine {
    pub calls: RefCell<Vec<Call>>,
    pub has_location: Cell<bool>,
    pub style: Cell<SignatureStyle>,
    pub canvas: RefCell<Vec<u8>>,
    pub next_listener: Cell<u64>,
    pub listeners: RefCell<Vec<ListenerId>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        FakeEngine {
            calls: RefCell::new(Vec::new()),
            has_location: Cell::new(false),
            style: Cell::new(SignatureStyle::new()),
            canvas: RefCell::new(b"canvas".to_vec()),
            next_listener: Cell::new(1),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn last_cursor_image(&self) -> Option<Option<SignatureSnapshot>> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            Call::CursorImage(image) => Some(image.clone()),
            _ => None,
        })
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl SignatureToolBindings for FakeEngine {
    fn set_tool_mode(&self, mode: ToolMode) {
        self.push(Call::SetToolMode(mode));
    }

    fn load_pending_signature(&self, paths: &SignaturePaths, style: &SignatureStyle) {
        self.push(Call::LoadPendingSignature(paths.clone(), *style));
    }

    fn has_known_placement_location(&self) -> bool {
        self.has_location.get()
    }

    fn commit_placement(&self) {
        self.push(Call::CommitPlacement);
    }

    fn clear_pending_signature(&self) {
        self.push(Call::ClearPendingSignature);
    }

    fn draw_signature(
        &self,
        paths: &SignaturePaths,
        style: &SignatureStyle,
    ) -> Result<(), PresetError> {
        let mut canvas = format!("{:?}", paths.to_tuples()).into_bytes();

        canvas.push(style.stroke_width() as u8);

        *self.canvas.borrow_mut() = canvas;

        Ok(())
    }

    fn render_snapshot(&self) -> Result<SignatureSnapshot, PresetError> {
        Ok(SignatureSnapshot::new(self.canvas.borrow().clone()))
    }

    fn notify_no_presets_remain(&self) {
        self.push(Call::NotifyNoPresetsRemain);
    }

    fn is_signature_annotation(&self, annotation: AnnotationHandle) -> bool {
        annotation.value() % 2 == 0
    }

    fn annotation_style(&self, annotation: AnnotationHandle) -> Result<SignatureStyle, PresetError> {
        if self.is_signature_annotation(annotation) {
            Ok(self.style.get())
        } else {
            Err(PresetError::StyleUnavailable)
        }
    }

    fn add_event_listener(&self, _: SignatureToolEventKind) -> ListenerId {
        let id = ListenerId::new(self.next_listener.get());

        self.next_listener.set(id.value() + 1);
        self.listeners.borrow_mut().push(id);

        id
    }

    fn remove_event_listener(&self, listener: ListenerId) {
        self.listeners.borrow_mut().retain(|id| *id != listener);
    }
}

impl OverlayHost for FakeEngine {
    fn open_elements(&self, elements: OverlayElements) {
        self.push(Call::OpenElements(elements));
    }

    fn close_elements(&self, elements: OverlayElements) {
        self.push(Call::CloseElements(elements));
    }

    fn set_cursor_overlay_image(&self, image: Option<&SignatureSnapshot>) {
        self.push(Call::CursorImage(image.cloned()));
    }

    fn is_element_disabled(&self, _: OverlayElements) -> bool {
        false
    }
}

pub const SIGNATURE: AnnotationHandle = AnnotationHandle::new(2);

/// A signature whose single stroke begins at `(x, 0)`.
pub fn signature(x: f32) -> Vec<Vec<SignaturePathPoint>> {
    vec![vec![
        SignaturePathPoint::new(x, 0.0),
        SignaturePathPoint::new(x + 10.0, 5.0),
        SignaturePathPoint::new(x + 20.0, 0.0),
    ]]
}

pub fn save(overlay: &mut SignatureOverlay, paths: &[Vec<SignaturePathPoint>]) -> OverlayEventOutcome {
    overlay.handle_event(SignatureToolEvent::SaveDefault {
        paths,
        annotation: SIGNATURE,
    })
}

pub fn first_xs(overlay: &SignatureOverlay) -> Vec<f32> {
    overlay
        .store()
        .iter()
        .map(|record| record.paths().stroke(0).unwrap()[0].x)
        .collect()
}
