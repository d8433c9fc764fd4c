//! Defines the [SignatureOverlayConfig] struct, a builder-based approach to configuring
//! the capacity and panel behaviour of a [crate::preset::overlay::SignatureOverlay].

use crate::host::OverlayElements;

/// The default number of signature presets a store holds before evicting the oldest.
pub const MAX_DEFAULT_SIGNATURES: usize = 2;

/// Configures the behaviour of a [crate::preset::overlay::SignatureOverlay].
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureOverlayConfig {
    capacity: usize,
    elements_closed_on_open: OverlayElements,
}

impl SignatureOverlayConfig {
    /// Creates a new [SignatureOverlayConfig] object with all settings initialized with
    /// their default values.
    pub fn new() -> Self {
        SignatureOverlayConfig {
            capacity: MAX_DEFAULT_SIGNATURES,
            elements_closed_on_open: OverlayElements::CLOSED_ON_SIGNATURE_OVERLAY_OPEN,
        }
    }

    /// Sets the maximum number of presets held at once. A capacity of zero is
    /// raised to one.
    #[inline]
    pub fn set_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);

        self
    }

    /// Sets the surfaces closed whenever the signature overlay is opened.
    #[inline]
    pub fn set_elements_closed_on_open(mut self, elements: OverlayElements) -> Self {
        self.elements_closed_on_open = elements;

        self
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn elements_closed_on_open(&self) -> OverlayElements {
        self.elements_closed_on_open
    }
}

impl Default for SignatureOverlayConfig {
    #[inline]
    fn default() -> Self {
        SignatureOverlayConfig::new()
    }
}
