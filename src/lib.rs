//! Fishtank: fish chase food dropped into a terminal aquarium.
//!
//! The simulation lives in `fishtank_core`; this crate wires it to a
//! terminal UI, audio cues and a headless runner.

pub mod app;
pub mod error;
pub mod model;
