//! Shared utilities

pub mod fs;
pub mod root;

pub use root::locate_root;
