pub mod config {
    pub use fishtank_core::config::*;
}
pub mod snapshot {
    pub use fishtank_core::snapshot::*;
}
pub mod tank {
    pub use fishtank_core::tank::*;
}

pub mod persistence;
