//! Breakout entry point
//!
//! Opens the window and runs the game loop.

use macroquad::prelude::*;

use breakout::Settings;
use breakout::consts::*;
use breakout::platform::{FrameClock, InputHandler};
use breakout::renderer::Window;
use breakout::sim::{GamePhase, GameState, TickInput, tick};

/// Game instance holding all state
struct Game {
    state: GameState,
    window: Window,
    settings: Settings,
    clock: FrameClock,
}

impl Game {
    async fn new(settings: Settings) -> Result<Self, macroquad::Error> {
        let window = Window::open(settings.font_path.as_deref()).await?;
        let seed = settings.run_seed();
        log::info!("Game initialized with seed: {}", seed);

        Ok(Self {
            state: GameState::new(seed),
            window,
            settings,
            clock: FrameClock::new(),
        })
    }

    /// Run the simulation ticks that are due this frame
    fn update(&mut self, input: &TickInput, dt: f32) {
        for _ in 0..self.clock.advance(dt) {
            tick(&mut self.state, input);

            if self.state.phase == GamePhase::GameOver {
                println!("Score: {}", self.state.score);
                println!("Game Over!");
                break;
            }
        }
    }

    fn render(&self) {
        let fps = self.settings.show_fps.then(get_fps);
        self.window.draw_frame(&self.state, fps);
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run() -> Result<(), macroquad::Error> {
    let settings = Settings::load();
    let mut game = Game::new(settings).await?;
    InputHandler::install();

    log::info!("Breakout running!");
    loop {
        let poll = InputHandler::poll();
        if poll.quit {
            log::info!("Quit requested");
            return Ok(());
        }

        game.update(&poll.input, get_frame_time());
        game.render();
        next_frame().await;

        // The game-over frame has been shown once; stop here.
        if game.state.is_over() {
            return Ok(());
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Breakout starting...");

    if let Err(e) = run().await {
        log::error!("Failed to start: {:?}", e);
        std::process::exit(1);
    }
}
