//! Core data structures for the Fishtank simulation.

pub mod entity;
pub mod event;
pub mod viewport;

pub use entity::*;
pub use event::*;
pub use viewport::*;
