#![doc = include_str!("../README.md")]

pub mod bindings;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod preset;

/// A prelude for conveniently importing all public `signature-presets` definitions at once.
///
/// Usage:
/// ```
/// use signature_presets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        bindings::*, config::*, error::*, events::*, host::*, preset::capture::*,
        preset::overlay::*, preset::path::*, preset::record::*, preset::selection::*,
        preset::snapshot::*, preset::store::*, preset::style::*, preset::sync::*,
    };
}
