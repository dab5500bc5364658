pub mod context;
pub mod indicators;
pub mod pacing;
pub mod signal;
