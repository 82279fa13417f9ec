//! Per-tick simulation systems, listed in tick order: food physics,
//! pursuit with eating and growth, idle wander, assignment.

pub mod assignment;
pub mod audio;
pub mod boundary;
pub mod food;
pub mod growth;
pub mod motion;
