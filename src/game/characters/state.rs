// Facing directions, motion state and intent resolution

use glam::Vec2;

/// One of the four diagonal facings of an isometric character.
///
/// Declaration order is the intent priority order: when several directions
/// are asserted in the same tick the earliest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up-left on screen
    NorthWest,
    /// Down-right on screen
    SouthEast,
    /// Up-right on screen
    NorthEast,
    /// Down-left on screen
    SouthWest,
}

impl Default for Direction {
    fn default() -> Self {
        Self::SouthEast
    }
}

impl Direction {
    /// Every direction in priority order
    pub const PRIORITY: [Direction; 4] = [
        Self::NorthWest,
        Self::SouthEast,
        Self::NorthEast,
        Self::SouthWest,
    ];

    /// Dense index used by fixed-size lookup tables
    pub fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::SouthEast => 1,
            Self::NorthEast => 2,
            Self::SouthWest => 3,
        }
    }
}

/// Coarse classification used for animation lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Moving,
}

impl MotionState {
    pub const ALL: [MotionState; 2] = [Self::Idle, Self::Moving];

    pub fn index(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Moving => 1,
        }
    }
}

/// Movement state owned by a controller. A move always carries its
/// endpoints and clock, so there is no "moving without a target".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Motion {
    #[default]
    Idle,
    Moving {
        origin: Vec2,
        target: Vec2,
        /// Interpolation clock in seconds. Kept in f64 so thousands of
        /// small ticks still sum to the move duration within `TIME_EPSILON`.
        elapsed: f64,
    },
}

impl Motion {
    pub fn state(&self) -> MotionState {
        match self {
            Self::Idle => MotionState::Idle,
            Self::Moving { .. } => MotionState::Moving,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Moving { .. })
    }
}

/// Tile delta `(d_col, d_row)` taken by one step in each direction.
///
/// Fixed once at construction; the controller never re-derives deltas from
/// raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTable {
    deltas: [(i32, i32); 4],
}

impl StepTable {
    /// NW/SE walk along the column axis, NE/SW along the row axis
    pub const CANONICAL: StepTable = StepTable {
        deltas: [(-1, 0), (1, 0), (0, -1), (0, 1)],
    };

    /// Build a table from an explicit delta per direction
    pub fn new(
        north_west: (i32, i32),
        south_east: (i32, i32),
        north_east: (i32, i32),
        south_west: (i32, i32),
    ) -> Self {
        Self {
            deltas: [north_west, south_east, north_east, south_west],
        }
    }

    /// Delta for a direction as `(d_col, d_row)`
    pub fn delta(&self, direction: Direction) -> (i32, i32) {
        self.deltas[direction.index()]
    }
}

impl Default for StepTable {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Set of directions asserted by an input source during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionSet {
    asserted: [bool; 4],
}

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet {
        asserted: [false; 4],
    };

    pub fn single(direction: Direction) -> Self {
        let mut set = Self::EMPTY;
        set.insert(direction);
        set
    }

    pub fn insert(&mut self, direction: Direction) {
        self.asserted[direction.index()] = true;
    }

    pub fn remove(&mut self, direction: Direction) {
        self.asserted[direction.index()] = false;
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.asserted[direction.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.asserted.iter().any(|&a| a)
    }

    /// The single winning direction, first in [`Direction::PRIORITY`] order
    pub fn resolve(&self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|&direction| self.contains(direction))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        Self::single(direction)
    }
}
