// Character system
//
// This module contains everything related to characters walking the map:
// - Facing directions, motion state and intent resolution
// - Animation clip table and playback clock
// - Tile-by-tile movement state machine
// - Character data structure and management

pub mod animation;
pub mod character;
pub mod config;
pub mod movement;
pub mod state;

// Re-export commonly used types
pub use animation::{
    AnimationClip, AnimationSelector, ClipId, ClipTable, ClipTableBuilder, FrameRef, PlayMode,
    SpriteSheetLayout,
};
pub use character::{Character, CharacterId, CharacterManager};
pub use config::{CharacterConfig, BASE_CONFIG};
pub use movement::{MoveOutcome, MovementController, RenderFrame};
pub use state::{Direction, DirectionSet, Motion, MotionState, StepTable};
