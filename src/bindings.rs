//! Defines the [SignatureToolBindings] trait, the narrow interface through which
//! signature presets reach the annotation engine and its signature tool.

use crate::error::PresetError;
use crate::events::{ListenerId, SignatureToolEventKind};
use crate::preset::path::SignaturePaths;
use crate::preset::snapshot::SignatureSnapshot;
use crate::preset::style::SignatureStyle;

/// An opaque handle to a single annotation owned by the annotation engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationHandle(u64);

impl AnnotationHandle {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The tool modes this crate asks the annotation engine to enter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ToolMode {
    /// The signature creation tool, used to place a pending signature.
    SignatureCreation,
}

/// The kind of mutation reported by an "annotation changed" event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationChangeKind {
    Add,
    Modify,
    Delete,
}

/// Platform-independent function bindings to the annotation engine's signature tool
/// and document event bus.
///
/// All functions take `&self`. The engine is an external singleton; implementations
/// are expected to use interior mutability where they record state.
pub trait SignatureToolBindings {
    /// Switches the engine's active tool.
    fn set_tool_mode(&self, mode: ToolMode);

    /// Loads the given paths and style into the signature tool's pending-signature slot.
    fn load_pending_signature(&self, paths: &SignaturePaths, style: &SignatureStyle);

    /// Returns `true` if the signature tool already knows where the pending signature
    /// should be placed, for instance from an earlier click on the page.
    fn has_known_placement_location(&self) -> bool;

    /// Places the pending signature at its known location.
    fn commit_placement(&self);

    /// Discards any pending signature held by the signature tool.
    fn clear_pending_signature(&self);

    /// Draws the given paths with the given style onto the signature tool's canvas,
    /// ready for [SignatureToolBindings::render_snapshot()].
    fn draw_signature(
        &self,
        paths: &SignaturePaths,
        style: &SignatureStyle,
    ) -> Result<(), PresetError>;

    /// Reads the current contents of the signature tool's canvas.
    fn render_snapshot(&self) -> Result<SignatureSnapshot, PresetError>;

    /// Informs the signature tool that no presets remain.
    fn notify_no_presets_remain(&self);

    /// Returns `true` if the given annotation is a signature annotation.
    fn is_signature_annotation(&self, annotation: AnnotationHandle) -> bool;

    /// Reads the style of the given annotation.
    fn annotation_style(&self, annotation: AnnotationHandle) -> Result<SignatureStyle, PresetError>;

    /// Registers interest in the given event kind, returning a handle that must later be
    /// passed to [SignatureToolBindings::remove_event_listener()].
    fn add_event_listener(&self, kind: SignatureToolEventKind) -> ListenerId;

    /// Releases a listener previously registered with
    /// [SignatureToolBindings::add_event_listener()].
    fn remove_event_listener(&self, listener: ListenerId);
}
