// Core math: isometric projection, tile coordinates and shared helpers
//
// Nothing in here touches the window, input or the map; everything is pure
// and safe to call from any thread.

pub mod iso;
pub mod math;

pub use iso::{IsoProjection, TileCoord, VerticalAxis};

use crate::game::characters::{Direction, MotionState};

/// Configuration errors. These are fatal and surface at startup, never
/// during a tick.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("No animation clip for {direction:?} while {state:?}")]
    MissingClip {
        direction: Direction,
        state: MotionState,
    },

    #[error("Animation clip for {direction:?} while {state:?} has no frames")]
    EmptyClip {
        direction: Direction,
        state: MotionState,
    },

    #[error("Frame duration must be positive, got {0}")]
    InvalidFrameDuration(f32),

    #[error("Move duration must be longer than 1e-5 s, got {0}")]
    InvalidMoveDuration(f32),

    #[error("Tile size must be positive, got {width}x{height}")]
    InvalidTileSize { width: f32, height: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingClip {
            direction: Direction::NorthEast,
            state: MotionState::Moving,
        };
        assert_eq!(err.to_string(), "No animation clip for NorthEast while Moving");

        let err = ConfigError::InvalidMoveDuration(0.0);
        assert_eq!(err.to_string(), "Move duration must be longer than 1e-5 s, got 0");
    }
}
