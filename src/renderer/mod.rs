//! Rendering module
//!
//! Immediate-mode 2D drawing through macroquad. Reads simulation state, never
//! mutates it.

pub mod window;

pub use window::{Window, to_color};
