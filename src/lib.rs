//! soundboard - Grid of buttons that play short audio clips
//!
//! Keeps an ordered list of sounds in a workspace directory, copies their
//! audio into a managed asset area, and moves whole soundboards between
//! machines as single `.stosb` bundle files.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SoundboardError;
