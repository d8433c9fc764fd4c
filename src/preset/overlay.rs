//! Defines the [SignatureOverlay] struct, the signature preset panel. It owns the
//! preset store and the selection state, reacts to events from the annotation engine,
//! and carries out the user's select, delete, and add-signature actions.

use crate::bindings::SignatureToolBindings;
use crate::config::SignatureOverlayConfig;
use crate::error::PresetError;
use crate::events::{ListenerId, SignatureToolEvent, SignatureToolEventKind};
use crate::host::{OverlayElements, OverlayHost};
use crate::preset::capture::SignatureCapture;
use crate::preset::selection::{PlacementOutcome, SelectionController, SelectionState};
use crate::preset::snapshot::SignatureSnapshot;
use crate::preset::store::{PresetIndex, SignaturePresetStore};
use crate::preset::sync::{StyleSyncObserver, StyleSyncOutcome};
use log::{debug, warn};

/// The result of delivering a single [SignatureToolEvent] to a [SignatureOverlay].
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEventOutcome {
    /// The overlay is detached, so the event was not processed.
    Ignored,

    /// A saved signature was added to the store. `evicted` is `true` if the oldest
    /// preset was removed to make room.
    Captured { evicted: bool },

    /// A saved signature could not be captured and was dropped. The store is unchanged.
    CaptureDropped(PresetError),

    StyleSync(StyleSyncOutcome),

    /// A cursor-follow placement finished.
    PlacementCompleted,
}

/// A single preset as shown in the signature overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetEntry {
    pub index: PresetIndex,
    pub snapshot: SignatureSnapshot,
    pub is_armed: bool,
}

/// Everything the host needs to draw the signature overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub entries: Vec<PresetEntry>,
    pub add_signature_enabled: bool,
}

/// The signature preset panel.
///
/// All mutation goes through `&mut self`, so each event or user action runs to
/// completion before the next begins, and no reader can observe the store part way
/// through an update.
pub struct SignatureOverlay<'a> {
    bindings: &'a dyn SignatureToolBindings,
    host: &'a dyn OverlayHost,
    config: SignatureOverlayConfig,
    store: SignaturePresetStore,
    selection: SelectionController,
    listeners: Vec<ListenerId>,
    is_open: bool,
}

impl<'a> SignatureOverlay<'a> {
    /// Creates a new, detached [SignatureOverlay] with the default configuration.
    #[inline]
    pub fn new(bindings: &'a dyn SignatureToolBindings, host: &'a dyn OverlayHost) -> Self {
        Self::with_config(bindings, host, SignatureOverlayConfig::default())
    }

    /// Creates a new, detached [SignatureOverlay] with the given configuration.
    pub fn with_config(
        bindings: &'a dyn SignatureToolBindings,
        host: &'a dyn OverlayHost,
        config: SignatureOverlayConfig,
    ) -> Self {
        SignatureOverlay {
            bindings,
            host,
            store: SignaturePresetStore::with_capacity(config.capacity()),
            config,
            selection: SelectionController::new(),
            listeners: Vec::new(),
            is_open: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &SignatureOverlayConfig {
        &self.config
    }

    /// Returns the presets held by this [SignatureOverlay].
    #[inline]
    pub fn store(&self) -> &SignaturePresetStore {
        &self.store
    }

    #[inline]
    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Returns `true` if this [SignatureOverlay] holds listener registrations with the
    /// annotation engine.
    #[inline]
    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Registers this [SignatureOverlay] for every [SignatureToolEventKind]. Has no effect
    /// if already attached.
    pub fn attach(&mut self) {
        if self.is_attached() {
            return;
        }

        self.listeners = SignatureToolEventKind::ALL
            .iter()
            .map(|kind| self.bindings.add_event_listener(*kind))
            .collect();

        debug!("signature overlay attached with {} listeners", self.listeners.len());
    }

    /// Releases every listener registration held by this [SignatureOverlay].
    pub fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            self.bindings.remove_event_listener(listener);
        }
    }

    /// Delivers a single event from the annotation engine.
    ///
    /// Errors never propagate out of this function: a signature that cannot be captured
    /// is dropped, and a style change that cannot be read is skipped. Both are logged.
    pub fn handle_event(&mut self, event: SignatureToolEvent<'_>) -> OverlayEventOutcome {
        if !self.is_attached() {
            debug!("signature overlay detached, ignoring {:?} event", event.kind());

            return OverlayEventOutcome::Ignored;
        }

        match event {
            SignatureToolEvent::SaveDefault { paths, annotation } => {
                match SignatureCapture::new(self.bindings).capture(
                    &mut self.store,
                    paths,
                    annotation,
                ) {
                    Ok(outcome) => {
                        let evicted = outcome.evicted.is_some();

                        if evicted {
                            self.selection.record_evicted(0, self.host);
                        }

                        OverlayEventOutcome::Captured { evicted }
                    }
                    Err(err) => {
                        warn!("signature preset not saved: {}", err);

                        OverlayEventOutcome::CaptureDropped(err)
                    }
                }
            }
            SignatureToolEvent::AnnotationChanged { annotations, kind } => {
                OverlayEventOutcome::StyleSync(
                    StyleSyncObserver::new(self.bindings).on_annotation_changed(
                        &mut self.store,
                        annotations,
                        kind,
                    ),
                )
            }
            SignatureToolEvent::SignaturePlaced => {
                self.selection.placement_completed();

                OverlayEventOutcome::PlacementCompleted
            }
        }
    }

    /// Arms the preset at the given index for placement.
    #[inline]
    pub fn select_preset(&mut self, index: PresetIndex) -> Result<PlacementOutcome, PresetError> {
        self.selection
            .arm(index, &self.store, self.bindings, self.host)
    }

    /// Deletes the preset at the given index.
    ///
    /// Deleting the armed preset clears the pending signature and the cursor-follow image.
    /// Deleting the last preset notifies the signature tool that no presets remain.
    pub fn delete_preset(&mut self, index: PresetIndex) -> Result<(), PresetError> {
        self.store.remove(index)?;

        self.selection
            .record_removed(index, self.bindings, self.host);

        if self.store.is_empty() {
            self.bindings.notify_no_presets_remain();
        }

        debug!(
            "deleted signature preset {}, {} remain",
            index,
            self.store.len()
        );

        Ok(())
    }

    /// Cancels any armed preset. Has no effect when nothing is armed.
    pub fn cancel(&mut self) {
        if self.selection.is_armed() {
            self.selection.clear(self.bindings, self.host);
        }
    }

    /// Returns `true` if the store has room for another preset without evicting one.
    #[inline]
    pub fn is_add_signature_enabled(&self) -> bool {
        !self.store.is_full()
    }

    /// Opens the signature drawing modal in place of this overlay, if the store has room
    /// for another preset. Returns `true` if the modal was opened.
    pub fn open_signature_modal(&self) -> bool {
        if !self.is_add_signature_enabled() {
            return false;
        }

        self.host.open_elements(OverlayElements::SIGNATURE_MODAL);
        self.host.close_elements(OverlayElements::SIGNATURE_OVERLAY);

        true
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Records whether the host is showing this overlay. When it becomes visible, the
    /// configured competing surfaces are closed.
    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.is_open {
            let elements = self.config.elements_closed_on_open();

            if !elements.is_empty() {
                self.host.close_elements(elements);
            }
        }

        self.is_open = is_open;
    }

    /// Returns the contents of the overlay, or `None` if the host has disabled it.
    pub fn view(&self) -> Option<OverlayView> {
        if self
            .host
            .is_element_disabled(OverlayElements::SIGNATURE_OVERLAY)
        {
            return None;
        }

        let armed = self.selection.armed_index();

        Some(OverlayView {
            entries: self
                .store
                .iter()
                .enumerate()
                .map(|(index, record)| PresetEntry {
                    index,
                    snapshot: record.snapshot().clone(),
                    is_armed: armed == Some(index),
                })
                .collect(),
            add_signature_enabled: self.is_add_signature_enabled(),
        })
    }
}

impl<'a> Drop for SignatureOverlay<'a> {
    /// Releases any listener registrations still held by this [SignatureOverlay].
    #[inline]
    fn drop(&mut self) {
        self.detach();
    }
}
