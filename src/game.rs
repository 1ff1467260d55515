//! Game controller: owns the entities and drives each frame

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::draw::Surface;
use crate::food::Food;
use crate::input::GameInput;
use crate::snake::Snake;

pub const GAME_OVER_MESSAGE: &str = "Game Over! Press R to Restart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Whether the outer loop should keep pumping frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Game<R = SmallRng> {
    config: GameConfig,
    snake: Snake,
    food: Food,
    score: u32,
    tick_rate: u32,
    phase: Phase,
    rng: R,
}

impl Game<SmallRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let grid = config.grid();
        let snake = Snake::new(grid);
        let mut food = Food::new(grid);
        food.reset_position(&snake, &mut rng);

        Self {
            tick_rate: config.initial_tick_rate,
            config,
            snake,
            food,
            score: 0,
            phase: Phase::Running,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Run one frame: apply every input, advance the simulation, then draw.
    ///
    /// A quit request still lets the frame finish; the caller stops pumping
    /// frames once this returns [`Flow::Quit`].
    pub fn frame<S, I>(&mut self, inputs: I, surface: &mut S) -> Flow
    where
        S: Surface,
        I: IntoIterator<Item = GameInput>,
    {
        let mut flow = Flow::Continue;
        for input in inputs {
            if self.handle_input(input) == Flow::Quit {
                flow = Flow::Quit;
            }
        }
        self.update();
        self.render(surface);
        flow
    }

    pub fn handle_input(&mut self, input: GameInput) -> Flow {
        match input {
            GameInput::Quit => return Flow::Quit,
            GameInput::Turn(dir) => {
                if !self.snake.change_direction(dir) {
                    debug!(?dir, "ignored reversal");
                }
            }
            GameInput::Restart if self.phase == Phase::GameOver => self.restart(),
            GameInput::Restart | GameInput::Ignored => {}
        }
        Flow::Continue
    }

    /// Advance the simulation by one tick; a no-op after game over
    pub fn update(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        self.snake.advance();

        if self.snake.is_self_collision() || self.snake.is_wall_collision() {
            self.phase = Phase::GameOver;
            info!(score = self.score, length = self.snake.len(), "game over");
            return;
        }

        if self.food.is_at(self.snake.head()) {
            self.snake.grow();
            self.food.reset_position(&self.snake, &mut self.rng);
            self.score += 1;
            self.tick_rate = (self.tick_rate + 1).min(self.config.max_tick_rate);
            debug!(
                score = self.score,
                tick_rate = self.tick_rate,
                food = ?self.food.position(),
                "food eaten"
            );
        }
    }

    /// Start over with a fresh snake, food, score and speed
    pub fn restart(&mut self) {
        self.snake.reset();
        self.food.reset_position(&self.snake, &mut self.rng);
        self.score = 0;
        self.tick_rate = self.config.initial_tick_rate;
        self.phase = Phase::Running;
        info!("game restarted");
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        let palette = &self.config.palette;
        surface.clear(palette.background);

        self.snake.draw(surface, palette.snake);
        self.food.draw(surface, palette.food);

        let (score_x, score_y) = self.config.score_position;
        surface.draw_text(
            &format!("Score: {}", self.score),
            score_x,
            score_y,
            palette.score_text,
        );

        if self.phase == Phase::GameOver {
            let text_width = surface.text_width(GAME_OVER_MESSAGE) as i32;
            let x = (self.config.width / 2) as i32 - text_width / 2;
            let y = (self.config.height / 2) as i32;
            surface.draw_text(GAME_OVER_MESSAGE, x, y, palette.game_over_text);
        }
    }
}
