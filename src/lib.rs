//! Pixel Snake - a windowed, grid-based snake game
//!
//! The simulation (snake, food, game controller) is independent of the
//! window; it draws through the [`Surface`] trait and consumes [`GameInput`]
//! values, so it can be driven headless in tests.

pub mod clock;
pub mod config;
pub mod display;
pub mod draw;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod snake;

pub use clock::FrameClock;
pub use config::{GameConfig, Palette, Rgb};
pub use display::Display;
pub use draw::{Frame, Rect, Surface};
pub use error::{Error, Result};
pub use food::Food;
pub use game::{Flow, Game, Phase};
pub use grid::{Cell, Direction, Grid};
pub use input::{GameInput, InputQueue};
pub use snake::Snake;
