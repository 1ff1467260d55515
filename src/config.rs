//! Game configuration

use crate::grid::Grid;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

/// Colors used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub snake: Rgb,
    pub food: Rgb,
    pub score_text: Rgb,
    pub game_over_text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            snake: Rgb::GREEN,
            food: Rgb::RED,
            score_text: Rgb::WHITE,
            game_over_text: Rgb::RED,
        }
    }
}

/// Immutable configuration held by the game controller
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Arena width in pixels
    pub width: u32,
    /// Arena height in pixels
    pub height: u32,
    /// Side of one grid cell (and one snake segment) in pixels
    pub cell_size: u32,
    /// Ticks per second at the start of a game
    pub initial_tick_rate: u32,
    /// Upper bound for the tick rate
    pub max_tick_rate: u32,
    /// Window title
    pub title: &'static str,
    /// Scale factor applied to the 5x7 bitmap font
    pub font_scale: u32,
    /// Top-left pixel of the score line
    pub score_position: (i32, i32),
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 20,
            initial_tick_rate: 5,
            max_tick_rate: 20,
            title: "Snake",
            font_scale: 3,
            score_position: (10, 10),
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Grid geometry derived from the arena size
    pub fn grid(&self) -> Grid {
        Grid::new(self.width as i32, self.height as i32, self.cell_size as i32)
    }
}
