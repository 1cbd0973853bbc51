//! Platform abstraction layer
//!
//! Translates window events and frame times into simulation input.

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{InputHandler, InputPoll};
