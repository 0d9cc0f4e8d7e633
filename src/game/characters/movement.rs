// Tile-by-tile movement state machine
//
// Idle --(intent, target free)--> Moving --(clock >= move_duration)--> Idle
//
// The tile coordinate is committed the moment a move starts; the screen
// position then catches up over `move_duration` seconds. Intents received
// while moving are dropped and there is no cancellation.

use std::sync::Arc;

use glam::Vec2;
use log::{debug, trace, warn};

use crate::core::math::{approx_equal_vec2, clamp, lerp_vec2, POSITION_EPSILON, TIME_EPSILON};
use crate::core::{ConfigError, IsoProjection, TileCoord};
use crate::game::map::CollisionOracle;

use super::animation::{AnimationSelector, ClipTable, FrameRef};
use super::config::CharacterConfig;
use super::state::{Direction, DirectionSet, Motion, MotionState};

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A new tile transition began
    Started,
    /// The target was blocked, out of bounds or the step was empty; only
    /// the facing changed
    Turned,
    /// A move is already in progress; nothing changed
    Ignored,
}

/// Everything the renderer needs to draw a character this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    /// Projected position of the character
    pub position: Vec2,
    /// Offset the renderer adds before drawing the sprite
    pub sprite_offset: Vec2,
    pub frame: FrameRef,
}

/// Owns one character's tile, screen position, facing and motion
#[derive(Debug, Clone)]
pub struct MovementController {
    tile: TileCoord,
    position: Vec2,
    direction: Direction,
    motion: Motion,
    projection: IsoProjection,
    config: CharacterConfig,
    animation: AnimationSelector,
    frame: FrameRef,
}

impl MovementController {
    /// Spawn an idle character resting on `tile`
    pub fn new(
        tile: TileCoord,
        projection: IsoProjection,
        config: CharacterConfig,
        clips: Arc<ClipTable>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let direction = Direction::default();
        let animation = AnimationSelector::new(clips);
        let frame = animation.peek(animation.select(direction, MotionState::Idle));

        Ok(Self {
            tile,
            position: projection.tile_to_iso(tile),
            direction,
            motion: Motion::Idle,
            projection,
            config,
            animation,
            frame,
        })
    }

    /// Spawn on the tile containing a screen-space map marker. The character
    /// is snapped onto that tile's projection.
    pub fn spawn_at_marker(
        marker: Vec2,
        projection: IsoProjection,
        config: CharacterConfig,
        clips: Arc<ClipTable>,
    ) -> Result<Self, ConfigError> {
        let tile = projection.tile_at(marker);
        debug!("Spawn marker at {marker} resolves to tile {tile:?}");
        Self::new(tile, projection, config, clips)
    }

    /// Try to step one tile in `direction`.
    pub fn request_move<O>(&mut self, direction: Direction, oracle: &O) -> MoveOutcome
    where
        O: CollisionOracle + ?Sized,
    {
        if self.motion.is_moving() {
            trace!("Ignoring {direction:?} intent while moving to {:?}", self.tile);
            return MoveOutcome::Ignored;
        }

        self.direction = direction;

        let (d_col, d_row) = self.config.steps.delta(direction);
        let candidate = self.tile.offset(d_col, d_row);
        if candidate == self.tile || oracle.is_blocked(candidate) {
            trace!("Turned {direction:?} at {:?}, {candidate:?} not enterable", self.tile);
            return MoveOutcome::Turned;
        }

        self.begin_move(candidate);
        MoveOutcome::Started
    }

    /// Advance one simulation tick of `delta` seconds and return the frame
    /// to draw.
    ///
    /// When idle the intent is resolved and a move attempted; when moving the
    /// interpolation advances and the intent is dropped. A move started this
    /// tick starts interpolating on the next one.
    pub fn tick<O>(&mut self, delta: f32, intent: DirectionSet, oracle: &O) -> FrameRef
    where
        O: CollisionOracle + ?Sized,
    {
        let delta = if delta.is_finite() && delta > 0.0 {
            delta
        } else {
            0.0
        };

        match self.motion {
            Motion::Idle => {
                if let Some(direction) = intent.resolve() {
                    self.request_move(direction, oracle);
                }
            }
            Motion::Moving { .. } if delta > 0.0 => self.interpolate(delta),
            Motion::Moving { .. } => {}
        }

        let clip = self.animation.select(self.direction, self.motion.state());
        self.frame = self.animation.advance(clip, delta);
        self.frame
    }

    fn begin_move(&mut self, candidate: TileCoord) {
        debug_assert!(
            !self.motion.is_moving(),
            "move started while already moving"
        );
        if self.motion.is_moving() {
            warn!("Refusing to start a move to {candidate:?} while already moving");
            return;
        }

        let origin = self.position;
        let target = self.projection.tile_to_iso(candidate);
        debug!(
            "Moving {:?} -> {candidate:?} ({origin} -> {target})",
            self.tile
        );

        self.tile = candidate;
        self.motion = Motion::Moving {
            origin,
            target,
            elapsed: 0.0,
        };
    }

    fn interpolate(&mut self, delta: f32) {
        let Motion::Moving {
            origin,
            target,
            elapsed,
        } = self.motion
        else {
            return;
        };

        let elapsed = elapsed + f64::from(delta);
        let duration = f64::from(self.config.move_duration);
        let fraction = clamp(elapsed / duration, 0.0, 1.0) as f32;
        let position = lerp_vec2(origin, target, fraction);

        if elapsed >= duration - f64::from(TIME_EPSILON)
            || approx_equal_vec2(position, target, POSITION_EPSILON)
        {
            self.finish_move();
        } else {
            self.position = position;
            self.motion = Motion::Moving {
                origin,
                target,
                elapsed,
            };
        }
    }

    fn finish_move(&mut self) {
        self.position = self.projection.tile_to_iso(self.tile);
        self.motion = Motion::Idle;
        trace!("Arrived at {:?}", self.tile);
    }

    pub fn tile(&self) -> TileCoord {
        self.tile
    }

    /// Current screen position, without the sprite offset
    pub fn render_position(&self) -> Vec2 {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn motion_state(&self) -> MotionState {
        self.motion.state()
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_moving()
    }

    /// Fraction of the current move completed, 0 when idle
    pub fn move_progress(&self) -> f32 {
        match self.motion {
            Motion::Idle => 0.0,
            Motion::Moving { elapsed, .. } => {
                clamp(elapsed / f64::from(self.config.move_duration), 0.0, 1.0) as f32
            }
        }
    }

    /// Frame produced by the last tick
    pub fn current_frame(&self) -> FrameRef {
        self.frame
    }

    pub fn sprite_offset(&self) -> Vec2 {
        self.config.sprite_offset
    }

    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame {
            position: self.position,
            sprite_offset: self.config.sprite_offset,
            frame: self.frame,
        }
    }

    pub fn projection(&self) -> &IsoProjection {
        &self.projection
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }
}
