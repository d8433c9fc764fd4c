//! Defines the [SelectionController] struct, the state machine that arms a saved preset
//! for placement and decides whether it can be placed immediately or must follow the
//! cursor until the user clicks.

use crate::bindings::{SignatureToolBindings, ToolMode};
use crate::error::PresetError;
use crate::host::{OverlayElements, OverlayHost};
use crate::preset::store::{PresetIndex, SignaturePresetStore};
use log::debug;

/// The state of a [SelectionController].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// No preset awaits placement.
    Idle,

    /// The preset at the given index is following the cursor, awaiting a click to place it.
    Armed(PresetIndex),
}

/// The result of arming a preset with [SelectionController::arm()].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The signature tool already knew where to place the preset, and placed it.
    Placed,

    /// The preset's snapshot now follows the cursor until the user clicks to place it.
    FollowingCursor,
}

/// Tracks which preset, if any, is armed for placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    #[inline]
    pub fn new() -> Self {
        SelectionController {
            state: SelectionState::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Returns the index of the armed preset, if any.
    #[inline]
    pub fn armed_index(&self) -> Option<PresetIndex> {
        match self.state {
            SelectionState::Armed(index) => Some(index),
            SelectionState::Idle => None,
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed_index().is_some()
    }

    /// Arms the preset at the given index.
    ///
    /// The signature tool is activated and loaded with the preset's paths and style. If the
    /// tool already knows a placement location the preset is placed at once, any preview
    /// of a previously armed preset is removed, and the controller returns to
    /// [SelectionState::Idle]; otherwise the preset's snapshot is
    /// handed to the host as the cursor-follow image. The signature overlay is closed
    /// in both cases.
    ///
    /// Returns [PresetError::PresetIndexOutOfBounds], with no side effects, if the index
    /// does not refer to a preset in the given store.
    pub fn arm(
        &mut self,
        index: PresetIndex,
        store: &SignaturePresetStore,
        bindings: &dyn SignatureToolBindings,
        host: &dyn OverlayHost,
    ) -> Result<PlacementOutcome, PresetError> {
        let record = store.get(index)?;

        bindings.set_tool_mode(ToolMode::SignatureCreation);
        bindings.load_pending_signature(record.paths(), record.style());

        let outcome = if bindings.has_known_placement_location() {
            bindings.commit_placement();

            if self.is_armed() {
                Self::release_cursor(host);
            }

            self.state = SelectionState::Idle;

            PlacementOutcome::Placed
        } else {
            host.open_elements(OverlayElements::CURSOR_OVERLAY);
            host.set_cursor_overlay_image(Some(record.snapshot()));

            self.state = SelectionState::Armed(index);

            PlacementOutcome::FollowingCursor
        };

        host.close_elements(OverlayElements::SIGNATURE_OVERLAY);

        debug!("armed signature preset {}: {:?}", index, outcome);

        Ok(outcome)
    }

    /// Discards any pending signature, clears the cursor-follow image, and returns to
    /// [SelectionState::Idle].
    pub fn clear(&mut self, bindings: &dyn SignatureToolBindings, host: &dyn OverlayHost) {
        bindings.clear_pending_signature();
        Self::release_cursor(host);

        if let SelectionState::Armed(index) = self.state {
            debug!("cleared armed signature preset {}", index);
        }

        self.state = SelectionState::Idle;
    }

    fn release_cursor(host: &dyn OverlayHost) {
        host.set_cursor_overlay_image(None);
        host.close_elements(OverlayElements::CURSOR_OVERLAY);
    }

    /// Returns to [SelectionState::Idle] once the user has placed a signature that was
    /// following the cursor. The signature tool owns the placed signature, so it is
    /// not cleared.
    #[inline]
    pub fn placement_completed(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Adjusts the armed index after the preset at `removed` leaves the store.
    ///
    /// Removing the armed preset clears the selection, including the signature tool's
    /// pending signature. Removing an earlier preset shifts the armed index down by one
    /// so it keeps referring to the same preset.
    pub fn record_removed(
        &mut self,
        removed: PresetIndex,
        bindings: &dyn SignatureToolBindings,
        host: &dyn OverlayHost,
    ) {
        match self.state {
            SelectionState::Armed(index) if index == removed => self.clear(bindings, host),
            SelectionState::Armed(index) if index > removed => {
                self.state = SelectionState::Armed(index - 1);
            }
            _ => {}
        }
    }

    /// Adjusts the armed index after the oldest preset is evicted to make room for a
    /// newly saved signature.
    ///
    /// Evicting the armed preset returns to [SelectionState::Idle] and drops the
    /// cursor-follow image, but leaves the signature tool's pending signature alone,
    /// since the tool may be about to place the signature that was just saved.
    pub fn record_evicted(&mut self, evicted: PresetIndex, host: &dyn OverlayHost) {
        match self.state {
            SelectionState::Armed(index) if index == evicted => {
                Self::release_cursor(host);

                debug!("armed signature preset {} evicted", index);

                self.state = SelectionState::Idle;
            }
            SelectionState::Armed(index) if index > evicted => {
                self.state = SelectionState::Armed(index - 1);
            }
            _ => {}
        }
    }
}

impl Default for SelectionController {
    #[inline]
    fn default() -> Self {
        SelectionController::new()
    }
}
