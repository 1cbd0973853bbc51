//! Renderable entity data shared by the ball, paddle and bricks
//!
//! A `Body` is plain data: the logical position the simulation moves, and
//! the bounding box (`frame`) that collisions and drawing read. The two are
//! only brought back in line by [`Body::sync`].

use glam::Vec2;

use super::rect::Rect;

/// How a body is filled when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle,
    /// Ellipse inscribed in the bounding box
    Ellipse,
}

/// 8-bit RGB color, independent of any graphics backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub mod palette {
    use super::Rgb;

    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);

    /// Durability color for a brick with `hits` hits left.
    /// `None` means the current color is kept.
    pub fn for_hits_remaining(hits: u8) -> Option<Rgb> {
        match hits {
            3 => Some(BLUE),
            2 => Some(YELLOW),
            1 => Some(RED),
            _ => None,
        }
    }
}

/// Position, size, color and shape of a drawable entity
#[derive(Debug, Clone)]
pub struct Body {
    /// Logical top-left position
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgb,
    pub shape: Shape,
    /// Bounding box as of the last `sync`
    frame: Rect,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, color: Rgb, shape: Shape) -> Self {
        Self {
            pos,
            size,
            color,
            shape,
            frame: Rect::from_pos_size(pos, size),
        }
    }

    /// Bring the bounding box up to date with the logical position
    #[inline]
    pub fn sync(&mut self) {
        self.frame.set_pos(self.pos);
    }

    /// Bounding box used for collisions and drawing
    #[inline]
    pub fn frame(&self) -> &Rect {
        &self.frame
    }
}
