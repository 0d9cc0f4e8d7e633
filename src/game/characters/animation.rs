// Character animation: clip table keyed by (direction, motion state) and the
// per-character playback clock

use std::sync::Arc;

use crate::core::ConfigError;

use super::config::CharacterConfig;
use super::state::{Direction, MotionState};

/// How a clip walks through its frames over time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Always shows the first frame
    Single,
    /// 0, 1, .., n-1, 0, 1, ..
    Loop,
    /// 0, 1, .., n-1, n-2, .., 1, 0, 1, ..
    LoopPingPong,
}

/// Handle to one cell of the sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameRef {
    pub row: u32,
    pub column: u32,
}

/// A single animation clip: a row of the sprite sheet played in some order
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Sprite sheet row the frames come from
    pub row: u32,
    /// Sheet columns in forward playback order
    pub columns: Vec<u32>,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    pub mode: PlayMode,
}

impl AnimationClip {
    pub fn new(row: u32, columns: Vec<u32>, frame_duration: f32, mode: PlayMode) -> Self {
        Self {
            row,
            columns,
            frame_duration,
            mode,
        }
    }

    /// A clip that holds one frame forever
    pub fn single(row: u32, column: u32, frame_duration: f32) -> Self {
        Self::new(row, vec![column], frame_duration, PlayMode::Single)
    }

    /// A clip looping over the first `frame_count` columns of a row
    pub fn looping(row: u32, frame_count: u32, frame_duration: f32) -> Self {
        Self::new(row, (0..frame_count).collect(), frame_duration, PlayMode::Loop)
    }

    /// A clip bouncing back and forth over the first `frame_count` columns of a row
    pub fn ping_pong(row: u32, frame_count: u32, frame_duration: f32) -> Self {
        Self::new(
            row,
            (0..frame_count).collect(),
            frame_duration,
            PlayMode::LoopPingPong,
        )
    }

    pub fn frame_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of frame slots in one full cycle
    fn steps_per_cycle(&self) -> usize {
        let n = self.frame_count();
        match self.mode {
            PlayMode::Single => 1,
            PlayMode::Loop => n.max(1),
            PlayMode::LoopPingPong if n <= 1 => 1,
            PlayMode::LoopPingPong => 2 * n - 2,
        }
    }

    /// Length of one full cycle in seconds
    pub fn cycle_duration(&self) -> f32 {
        self.steps_per_cycle() as f32 * self.frame_duration
    }

    /// Index into `columns` shown at `time` seconds into the clip
    pub fn frame_index_at(&self, time: f32) -> usize {
        let n = self.frame_count();
        if n <= 1 || self.mode == PlayMode::Single {
            return 0;
        }

        let step = (time / self.frame_duration).max(0.0) as usize % self.steps_per_cycle();
        match self.mode {
            PlayMode::LoopPingPong if step >= n => 2 * n - 2 - step,
            _ => step,
        }
    }

    /// Sheet cell shown at `time` seconds into the clip
    pub fn frame_at(&self, time: f32) -> FrameRef {
        let column = self
            .columns
            .get(self.frame_index_at(time))
            .copied()
            .unwrap_or_default();
        FrameRef {
            row: self.row,
            column,
        }
    }
}

/// Key of a clip in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId {
    pub direction: Direction,
    pub state: MotionState,
}

impl ClipId {
    pub fn new(direction: Direction, state: MotionState) -> Self {
        Self { direction, state }
    }
}

/// Collects clips for a [`ClipTable`]; `build` refuses incomplete tables
#[derive(Debug, Default)]
pub struct ClipTableBuilder {
    slots: [[Option<AnimationClip>; 2]; 4],
}

impl ClipTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clip(mut self, direction: Direction, state: MotionState, clip: AnimationClip) -> Self {
        self.insert(direction, state, clip);
        self
    }

    pub fn insert(&mut self, direction: Direction, state: MotionState, clip: AnimationClip) {
        self.slots[direction.index()][state.index()] = Some(clip);
    }

    pub fn build(mut self) -> Result<ClipTable, ConfigError> {
        let mut pair = |direction: Direction| -> Result<[AnimationClip; 2], ConfigError> {
            Ok([
                self.take(direction, MotionState::Idle)?,
                self.take(direction, MotionState::Moving)?,
            ])
        };

        // Rows follow `Direction::index`
        let clips = [
            pair(Direction::NorthWest)?,
            pair(Direction::SouthEast)?,
            pair(Direction::NorthEast)?,
            pair(Direction::SouthWest)?,
        ];
        Ok(ClipTable { clips })
    }

    fn take(&mut self, direction: Direction, state: MotionState) -> Result<AnimationClip, ConfigError> {
        let clip = self.slots[direction.index()][state.index()]
            .take()
            .ok_or(ConfigError::MissingClip { direction, state })?;

        if clip.columns.is_empty() {
            return Err(ConfigError::EmptyClip { direction, state });
        }
        if !(clip.frame_duration.is_finite() && clip.frame_duration > 0.0) {
            return Err(ConfigError::InvalidFrameDuration(clip.frame_duration));
        }
        Ok(clip)
    }
}

/// Exactly one clip per (direction, motion state); immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct ClipTable {
    /// Indexed by `[Direction::index][MotionState::index]`
    clips: [[AnimationClip; 2]; 4],
}

impl ClipTable {
    pub fn builder() -> ClipTableBuilder {
        ClipTableBuilder::new()
    }

    /// The standard four-row character sheet: rows NW, NE, SE, SW; walking
    /// ping-pongs across the row, standing shows the idle column.
    pub fn standard(config: &CharacterConfig) -> Result<Self, ConfigError> {
        let rows = [
            (Direction::NorthWest, 0),
            (Direction::NorthEast, 1),
            (Direction::SouthEast, 2),
            (Direction::SouthWest, 3),
        ];

        let mut builder = Self::builder();
        for (direction, row) in rows {
            builder.insert(
                direction,
                MotionState::Moving,
                AnimationClip::ping_pong(row, config.frames_per_row, config.frame_duration),
            );
            builder.insert(
                direction,
                MotionState::Idle,
                AnimationClip::single(row, config.idle_column, config.frame_duration),
            );
        }
        builder.build()
    }

    pub fn get(&self, id: ClipId) -> &AnimationClip {
        &self.clips[id.direction.index()][id.state.index()]
    }
}

/// Picks the clip for a character and owns its playback clock
#[derive(Debug, Clone)]
pub struct AnimationSelector {
    table: Arc<ClipTable>,
    active: Option<ClipId>,
    /// Seconds into the active clip, always below its cycle duration
    clock: f32,
}

impl AnimationSelector {
    pub fn new(table: Arc<ClipTable>) -> Self {
        Self {
            table,
            active: None,
            clock: 0.0,
        }
    }

    /// Clip to play for a facing and motion state
    pub fn select(&self, direction: Direction, state: MotionState) -> ClipId {
        ClipId::new(direction, state)
    }

    /// Advance `clip`'s clock by `elapsed` seconds and return the frame to draw.
    ///
    /// Switching clips restarts the clock. A non-positive or non-finite
    /// `elapsed` leaves the clock untouched.
    pub fn advance(&mut self, clip: ClipId, elapsed: f32) -> FrameRef {
        if self.active != Some(clip) {
            self.active = Some(clip);
            self.clock = 0.0;
        }

        let clip_data = self.table.get(clip);
        if elapsed.is_finite() && elapsed > 0.0 {
            self.clock += elapsed;
            let cycle = clip_data.cycle_duration();
            if self.clock >= cycle {
                self.clock %= cycle;
            }
        }

        clip_data.frame_at(self.clock)
    }

    /// Frame `clip` would show right now, without advancing anything
    pub fn peek(&self, clip: ClipId) -> FrameRef {
        let time = if self.active == Some(clip) { self.clock } else { 0.0 };
        self.table.get(clip).frame_at(time)
    }

    pub fn active(&self) -> Option<ClipId> {
        self.active
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn table(&self) -> &Arc<ClipTable> {
        &self.table
    }
}

/// Pixel layout of a character sprite sheet, for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheetLayout {
    /// Width of each frame in pixels
    pub frame_width: u32,
    /// Height of each frame in pixels
    pub frame_height: u32,
}

impl SpriteSheetLayout {
    pub fn new(frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_width,
            frame_height,
        }
    }

    pub fn from_config(config: &CharacterConfig) -> Self {
        Self::new(config.frame_width, config.frame_height)
    }

    /// Top-left pixel of a frame on the sheet
    pub fn frame_origin(&self, frame: FrameRef) -> (u32, u32) {
        (frame.column * self.frame_width, frame.row * self.frame_height)
    }

    /// UV rectangle of a frame
    /// Returns (u_min, v_min, u_max, v_max) in normalized coordinates [0, 1]
    pub fn frame_uvs(
        &self,
        frame: FrameRef,
        texture_width: u32,
        texture_height: u32,
    ) -> (f32, f32, f32, f32) {
        let (x, y) = self.frame_origin(frame);
        let tw = texture_width as f32;
        let th = texture_height as f32;

        (
            x as f32 / tw,
            y as f32 / th,
            (x + self.frame_width) as f32 / tw,
            (y + self.frame_height) as f32 / th,
        )
    }
}
