//! Fixed timestep simulation tick
//!
//! Core game loop step that advances simulation deterministically.

use glam::Vec2;
use rand::Rng;

use super::collision::Brick;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Held keys for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
}

/// Advance the game state by one tick
///
/// Order within the tick: paddle, ball (and life loss), game-over check,
/// brick collisions. Bricks are still resolved on the tick that ends the
/// game so the final frame shows them.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    state.paddle.step(input);

    if state.ball.step(state.paddle.frame()) {
        state.lives = state.lives.saturating_sub(1);
        log::info!("Ball missed, {} lives left", state.lives);
    }

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at tick {} with score {}", state.time_ticks, state.score);
    }

    let ball = &mut state.ball;
    let score = &mut state.score;
    state.bricks.retain_mut(|brick| {
        let destroyed = brick.check_collision(ball);
        if destroyed {
            *score += 1;
            log::debug!("Brick destroyed, score {}", score);
        }
        !destroyed
    });
}

/// Generate the brick field
///
/// Walks the candidate grid column by column. Whether a cell gets a brick
/// is a pick from `[prev, prev, true, false]`, so runs of filled and empty
/// cells tend to repeat. A hit count is drawn for every cell, placed or not,
/// keeping the RNG stream independent of the placement outcome.
pub fn generate_field<R: Rng>(rng: &mut R) -> Vec<Brick> {
    let mut bricks = Vec::new();
    let mut placing = true;

    for x in FIELD_X_RANGE.step_by(FIELD_COL_STEP) {
        for y in FIELD_Y_RANGE.step_by(FIELD_ROW_STEP) {
            let choices = [placing, placing, true, false];
            placing = choices[rng.random_range(0..choices.len())];
            let hits = rng.random_range(BRICK_MIN_HITS..=BRICK_MAX_HITS);
            if placing {
                bricks.push(Brick::new(Vec2::new(x as f32, y as f32), hits));
            }
        }
    }

    bricks
}
