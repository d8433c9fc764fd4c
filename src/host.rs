//! Defines the [OverlayHost] trait, the interface to the surrounding UI state layer,
//! and the [OverlayElements] flags naming the surfaces it can open and close.

use crate::preset::snapshot::SignatureSnapshot;
use bitflags::bitflags;

bitflags! {
    /// Named UI surfaces that a [crate::preset::overlay::SignatureOverlay] opens and closes.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct OverlayElements: u32 {
        const SIGNATURE_OVERLAY = 1 << 0;
        const CURSOR_OVERLAY = 1 << 1;
        const SIGNATURE_MODAL = 1 << 2;
        const VIEW_CONTROLS_OVERLAY = 1 << 3;
        const SEARCH_OVERLAY = 1 << 4;
        const MENU_OVERLAY = 1 << 5;
        const TOOLS_OVERLAY = 1 << 6;
        const ZOOM_OVERLAY = 1 << 7;
        const TOOL_STYLE_POPUP = 1 << 8;
    }
}

impl OverlayElements {
    /// The surfaces closed when the signature overlay opens, so that only one
    /// popup surface is visible at a time.
    pub const CLOSED_ON_SIGNATURE_OVERLAY_OPEN: OverlayElements = OverlayElements::VIEW_CONTROLS_OVERLAY
        .union(OverlayElements::SEARCH_OVERLAY)
        .union(OverlayElements::MENU_OVERLAY)
        .union(OverlayElements::TOOLS_OVERLAY)
        .union(OverlayElements::ZOOM_OVERLAY)
        .union(OverlayElements::TOOL_STYLE_POPUP);
}

/// The UI state layer surrounding the signature overlay. Implementations dispatch
/// these calls into whatever state container the host application uses.
pub trait OverlayHost {
    fn open_elements(&self, elements: OverlayElements);

    fn close_elements(&self, elements: OverlayElements);

    /// Sets, or clears when `None`, the image that follows the pointer while a signature
    /// awaits placement.
    fn set_cursor_overlay_image(&self, image: Option<&SignatureSnapshot>);

    /// Returns `true` if the given element has been disabled by the host application.
    fn is_element_disabled(&self, element: OverlayElements) -> bool;
}
