//! Defines the [PresetError] enum, used to wrap error conditions raised while
//! capturing, storing, synchronizing, or placing signature presets.

use crate::preset::store::PresetIndex;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A wrapped error condition raised by the annotation engine that backs a
/// [crate::bindings::SignatureToolBindings] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetEngineError {
    /// The engine could not render its signature canvas into a snapshot.
    SnapshotUnavailable,

    /// The engine rejected the signature paths or style it was asked to draw.
    DrawRejected,

    /// Any other engine failure, described by the engine.
    Other(String),
}

/// A wrapped error condition raised by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum PresetError {
    /// The given preset index does not refer to a record in the store.
    PresetIndexOutOfBounds {
        index: PresetIndex,
        len: usize,
    },

    /// The store contains no presets.
    NoPresetsInStore,

    /// A captured signature contained no points.
    EmptySignaturePath,

    /// A captured signature contained a point with a non-finite coordinate.
    InvalidSignaturePoint {
        stroke: usize,
        point: usize,
    },

    /// The style of a changed annotation could not be read.
    StyleUnavailable,

    /// The annotation engine reported a failure.
    EngineError(PresetEngineError),

    /// The snapshot bytes could not be decoded into an image.
    #[cfg(feature = "image_api")]
    SnapshotDecodeError(String),
}

impl Display for PresetEngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PresetEngineError::SnapshotUnavailable => {
                write!(f, "signature canvas snapshot unavailable")
            }
            PresetEngineError::DrawRejected => write!(f, "signature draw rejected"),
            PresetEngineError::Other(message) => write!(f, "{}", message),
        }
    }
}

impl Display for PresetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PresetError::PresetIndexOutOfBounds { index, len } => write!(
                f,
                "preset index {} out of bounds for store of length {}",
                index, len
            ),
            PresetError::NoPresetsInStore => write!(f, "no presets in store"),
            PresetError::EmptySignaturePath => write!(f, "signature path is empty"),
            PresetError::InvalidSignaturePoint { stroke, point } => write!(
                f,
                "signature point {} of stroke {} has a non-finite coordinate",
                point, stroke
            ),
            PresetError::StyleUnavailable => write!(f, "annotation style unavailable"),
            PresetError::EngineError(err) => write!(f, "annotation engine error: {}", err),
            #[cfg(feature = "image_api")]
            PresetError::SnapshotDecodeError(message) => {
                write!(f, "snapshot decode error: {}", message)
            }
        }
    }
}

impl Error for PresetEngineError {}

impl Error for PresetError {}

impl From<PresetEngineError> for PresetError {
    #[inline]
    fn from(err: PresetEngineError) -> Self {
        PresetError::EngineError(err)
    }
}
