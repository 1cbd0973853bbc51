//! Brick collision detection and response
//!
//! A brick does not reflect the ball itself. It carries four 1px-thin edge
//! colliders; whichever edges the ball overlaps decide which velocity
//! component flips. A ball clipping a corner can hit two edges in the same
//! tick and gets both flips.

use glam::Vec2;

use super::body::{Body, Shape, palette};
use super::rect::Rect;
use super::state::Ball;
use crate::consts::BRICK_SIZE;

/// Which velocity component an edge collider reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideKind {
    /// Left/right edge: flips horizontal velocity
    Vertical,
    /// Top/bottom edge: flips vertical velocity
    Horizontal,
}

/// A thin collider bound to one edge of a brick
#[derive(Debug, Clone)]
pub struct Side {
    pub kind: SideKind,
    pub frame: Rect,
}

impl Side {
    pub fn vertical(pos: Vec2, height: f32) -> Self {
        Self {
            kind: SideKind::Vertical,
            frame: Rect::new(pos.x, pos.y, 1.0, height),
        }
    }

    pub fn horizontal(pos: Vec2, width: f32) -> Self {
        Self {
            kind: SideKind::Horizontal,
            frame: Rect::new(pos.x, pos.y, width, 1.0),
        }
    }

    /// Reflect the ball if it overlaps this edge. Returns whether it did.
    pub fn check(&self, ball: &mut Ball) -> bool {
        if !self.frame.intersects(ball.frame()) {
            return false;
        }
        match self.kind {
            SideKind::Vertical => ball.vel.x = -ball.vel.x,
            SideKind::Horizontal => ball.vel.y = -ball.vel.y,
        }
        true
    }
}

/// A destructible brick
#[derive(Debug, Clone)]
pub struct Brick {
    pub body: Body,
    pub hits_remaining: u8,
    /// Edge colliders in test order: left, right, top, bottom
    pub sides: [Side; 4],
}

impl Brick {
    pub fn new(pos: Vec2, hits: u8) -> Self {
        let size = BRICK_SIZE;
        Self {
            body: Body::new(pos, size, palette::GREEN, Shape::Rectangle),
            hits_remaining: hits,
            sides: [
                Side::vertical(pos, size.y),
                Side::vertical(Vec2::new(pos.x + size.x, pos.y), size.y),
                Side::horizontal(pos, size.x),
                Side::horizontal(Vec2::new(pos.x, pos.y + size.y), size.x),
            ],
        }
    }

    #[inline]
    pub fn frame(&self) -> &Rect {
        self.body.frame()
    }

    /// Resolve this tick's contact with the ball.
    ///
    /// Returns true when the hit just taken was the brick's last one.
    pub fn check_collision(&mut self, ball: &mut Ball) -> bool {
        if !self.frame().intersects(ball.frame()) {
            return false;
        }

        // Non-short-circuiting: every overlapping edge gets its flip.
        let mut hit = false;
        for side in &self.sides {
            hit |= side.check(ball);
        }

        if hit {
            self.hits_remaining = self.hits_remaining.saturating_sub(1);
            log::debug!(
                "Brick at ({}, {}) hit, {} left",
                self.body.pos.x,
                self.body.pos.y,
                self.hits_remaining
            );
        }

        if let Some(color) = palette::for_hits_remaining(self.hits_remaining) {
            self.body.color = color;
        }

        hit && self.hits_remaining == 0
    }
}
