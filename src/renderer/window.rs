//! The game window: background, entities and the score/lives HUD

use macroquad::prelude::*;

use crate::consts::*;
use crate::sim::{Body, GameState, Rgb, Shape, palette};

/// Convert a simulation color into a macroquad color
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

/// Owns the display-side resources and draws a frame
pub struct Window {
    background: Color,
    text_color: Color,
    font: Option<Font>,
}

impl Window {
    /// Set up drawing, loading the HUD font if one is configured.
    ///
    /// A configured font that cannot be loaded is a fatal startup error.
    pub async fn open(font_path: Option<&str>) -> Result<Self, macroquad::Error> {
        let font = match font_path {
            Some(path) => {
                let font = load_ttf_font(path).await?;
                log::info!("Loaded HUD font {}", path);
                Some(font)
            }
            None => None,
        };

        Ok(Self {
            background: to_color(palette::BLACK),
            text_color: to_color(palette::WHITE),
            font,
        })
    }

    /// Clear the frame to the background color
    pub fn refresh(&self) {
        clear_background(self.background);
    }

    /// Fill a body's current bounding box
    pub fn draw_body(&self, body: &Body) {
        let frame = body.frame();
        let color = to_color(body.color);
        match body.shape {
            Shape::Rectangle => draw_rectangle(frame.x, frame.y, frame.w, frame.h, color),
            Shape::Ellipse => {
                let (rx, ry) = (frame.w / 2.0, frame.h / 2.0);
                draw_ellipse(frame.x + rx, frame.y + ry, rx, ry, 0.0, color);
            }
        }
    }

    /// Draw a whole frame. Presenting is left to the caller (`next_frame`).
    pub fn draw_frame(&self, state: &GameState, fps: Option<i32>) {
        self.refresh();

        self.draw_body(&state.paddle.body);
        self.draw_body(&state.ball.body);
        for brick in &state.bricks {
            self.draw_body(&brick.body);
        }

        let score = state.score.to_string();
        self.draw_label(&score, HUD_MARGIN, HUD_MARGIN);

        // Lives hug the right edge
        let lives = state.lives.to_string();
        let width = measure_text(&lives, self.font.as_ref(), HUD_FONT_SIZE, 1.0).width;
        self.draw_label(&lives, SCREEN_WIDTH - HUD_MARGIN - width, HUD_MARGIN);

        if let Some(fps) = fps {
            let text = format!("FPS: {}", fps);
            let height = measure_text(&text, self.font.as_ref(), HUD_FONT_SIZE, 1.0).height;
            self.draw_label(&text, HUD_MARGIN, SCREEN_HEIGHT - HUD_MARGIN - height);
        }
    }

    /// Draw text with its top-left corner at (x, y)
    fn draw_label(&self, text: &str, x: f32, y: f32) {
        let dims = measure_text(text, self.font.as_ref(), HUD_FONT_SIZE, 1.0);
        draw_text_ex(
            text,
            x,
            y + dims.offset_y,
            TextParams {
                font: self.font.as_ref(),
                font_size: HUD_FONT_SIZE,
                color: self.text_color,
                ..Default::default()
            },
        );
    }
}
