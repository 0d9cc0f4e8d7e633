// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

use crate::game::characters::Direction;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Step one tile in a diagonal direction
    Move(Direction),

    // Meta actions
    Pause,
    Menu,
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default bindings for Player 1 (WASD, rotated onto the isometric diagonals)
pub fn default_p1_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyW), Action::Move(Direction::NorthWest)),
        (InputSource::key(KeyCode::KeyS), Action::Move(Direction::SouthEast)),
        (InputSource::key(KeyCode::KeyD), Action::Move(Direction::NorthEast)),
        (InputSource::key(KeyCode::KeyA), Action::Move(Direction::SouthWest)),
    ]
}

/// Default bindings for Player 2 (arrow keys)
pub fn default_p2_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowUp), Action::Move(Direction::NorthWest)),
        (InputSource::key(KeyCode::ArrowDown), Action::Move(Direction::SouthEast)),
        (InputSource::key(KeyCode::ArrowRight), Action::Move(Direction::NorthEast)),
        (InputSource::key(KeyCode::ArrowLeft), Action::Move(Direction::SouthWest)),
    ]
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::Escape), Action::Menu),
        (InputSource::key(KeyCode::KeyP), Action::Pause),
    ]
}
