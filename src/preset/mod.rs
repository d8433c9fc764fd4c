//! Defines the signature preset store and the components that keep it consistent:
//! capture of newly saved signatures, style synchronization, and placement selection.

pub mod capture;
pub mod overlay;
pub mod path;
pub mod record;
pub mod selection;
pub mod snapshot;
pub mod store;
pub mod style;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_support;
