//! Translation of window events into game input

use std::collections::VecDeque;

use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};

use crate::grid::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Quit,
    Turn(Direction),
    Restart,
    Ignored,
}

impl GameInput {
    pub fn from_key(key: VirtualKeyCode) -> Self {
        match key {
            VirtualKeyCode::Up | VirtualKeyCode::W => GameInput::Turn(Direction::Up),
            VirtualKeyCode::Down | VirtualKeyCode::S => GameInput::Turn(Direction::Down),
            VirtualKeyCode::Left | VirtualKeyCode::A => GameInput::Turn(Direction::Left),
            VirtualKeyCode::Right | VirtualKeyCode::D => GameInput::Turn(Direction::Right),
            VirtualKeyCode::R => GameInput::Restart,
            VirtualKeyCode::Escape => GameInput::Quit,
            _ => GameInput::Ignored,
        }
    }
}

/// Game input collected between frames, in arrival order
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<GameInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue whatever game input `event` carries
    pub fn record<T>(&mut self, event: &Event<'_, T>) {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        let input = match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => GameInput::Quit,
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => GameInput::from_key(*key),
            _ => GameInput::Ignored,
        };
        if input != GameInput::Ignored {
            self.pending.push_back(input);
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every queued input, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = GameInput> + '_ {
        self.pending.drain(..)
    }
}
