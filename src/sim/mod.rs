//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use body::{Body, Rgb, Shape, palette};
pub use collision::{Brick, Side, SideKind};
pub use rect::Rect;
pub use state::{Ball, GamePhase, GameState, Paddle};
pub use tick::{TickInput, generate_field, tick};
