//! Domain layer - Sound model and bundle format

pub mod bundle;
pub mod sound;

pub use bundle::{Bundle, BundleEntry, BUNDLE_EXTENSION, BUNDLE_VERSION};
pub use sound::{Colour, Sound};
