//! Plain data types shared by the Fishtank simulation, renderer and app.

pub mod data;

pub use data::*;
