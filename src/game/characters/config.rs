// Character configuration - timing and sprite constants shared by every
// character built from the same sprite sheet

use glam::Vec2;

use crate::core::math::TIME_EPSILON;
use crate::core::ConfigError;

use super::state::StepTable;

/// Tunable character constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterConfig {
    // Movement
    /// Seconds needed to walk exactly one tile
    pub move_duration: f32,
    /// Direction → tile delta table
    pub steps: StepTable,

    // Sprite sheet
    /// Width of one sprite sheet frame in pixels
    pub frame_width: u32,
    /// Height of one sprite sheet frame in pixels
    pub frame_height: u32,
    /// Number of frame columns per sheet row
    pub frames_per_row: u32,
    /// Seconds each animation frame is shown
    pub frame_duration: f32,
    /// Sheet column shown while standing still
    pub idle_column: u32,

    // Rendering
    /// Offset from the tile's projected position to the sprite's draw origin
    pub sprite_offset: Vec2,
}

/// The preset every character uses unless told otherwise
pub const BASE_CONFIG: CharacterConfig = CharacterConfig {
    move_duration: 0.5,
    steps: StepTable::CANONICAL,

    // 24x32 frames, three per row (walk cycle plays 0,1,2,1)
    frame_width: 24,
    frame_height: 32,
    frames_per_row: 3,
    frame_duration: 0.125,
    idle_column: 1,

    sprite_offset: Vec2::new(20.0, 15.0),
};

impl Default for CharacterConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl CharacterConfig {
    /// Standard preset with a different move duration
    pub fn with_move_duration(mut self, seconds: f32) -> Self {
        self.move_duration = seconds;
        self
    }

    /// Check the values that would otherwise break the movement clock
    pub fn validate(&self) -> Result<(), ConfigError> {
        // A move must outlast the completion tolerance, or a zero-length
        // tick could finish it
        if !(self.move_duration.is_finite() && self.move_duration > TIME_EPSILON) {
            return Err(ConfigError::InvalidMoveDuration(self.move_duration));
        }
        if !(self.frame_duration.is_finite() && self.frame_duration > 0.0) {
            return Err(ConfigError::InvalidFrameDuration(self.frame_duration));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CharacterConfig::default();
        assert_eq!(config.move_duration, 0.5);
        assert_eq!(config.frame_duration, 0.125);
        assert_eq!(config.sprite_offset, Vec2::new(20.0, 15.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_move_duration() {
        for bad in [0.0, -0.5, 1e-6, TIME_EPSILON, f32::NAN, f32::INFINITY] {
            let config = CharacterConfig::default().with_move_duration(bad);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidMoveDuration(_))
            ));
        }
    }

    #[test]
    fn test_accepts_move_duration_just_above_tolerance() {
        let config = CharacterConfig::default().with_move_duration(2.0 * TIME_EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_frame_duration() {
        let config = CharacterConfig {
            frame_duration: 0.0,
            ..BASE_CONFIG
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidFrameDuration(0.0))
        );
    }
}
