// Map collaborator: collision queries and a simple in-memory grid
//
// The real map (tiles, layers, objects) lives outside the movement core.
// All the core needs is "can I step onto this tile?".

use crate::core::TileCoord;

/// Answers whether a tile is impassable.
///
/// Implementations must be pure queries: callable any number of times per
/// tick, from any thread holding a shared reference, without side effects.
/// Tiles outside the map count as blocked.
pub trait CollisionOracle {
    fn is_blocked(&self, tile: TileCoord) -> bool;
}

impl<F> CollisionOracle for F
where
    F: Fn(TileCoord) -> bool,
{
    fn is_blocked(&self, tile: TileCoord) -> bool {
        self(tile)
    }
}

/// Map layout parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("Map layout is empty")]
    EmptyLayout,

    #[error("Row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown tile '{glyph}' at column {col}, row {row}")]
    UnknownTile { glyph: char, col: usize, row: usize },
}

/// Rectangular grid of passable/blocked tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: u32,
    height: u32,
    blocked: Vec<bool>,
    spawn: Option<TileCoord>,
}

impl GridMap {
    /// Fully open map of the given size
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; width as usize * height as usize],
            spawn: None,
        }
    }

    /// Parse an ASCII layout, one line per row:
    /// `.` open, `#` blocked, `S` open spawn tile. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn from_ascii(layout: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(MapError::EmptyLayout);
        };
        let width = first.chars().count();

        let mut blocked = Vec::with_capacity(width * rows.len());
        let mut spawn = None;
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            for (col, glyph) in line.chars().enumerate() {
                match glyph {
                    '.' => blocked.push(false),
                    '#' => blocked.push(true),
                    'S' => {
                        blocked.push(false);
                        spawn = Some(TileCoord::new(col as i32, row as i32));
                    }
                    _ => return Err(MapError::UnknownTile { glyph, col, row }),
                }
            }
        }

        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            blocked,
            spawn,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Spawn tile marked in the layout, if any
    pub fn spawn(&self) -> Option<TileCoord> {
        self.spawn
    }

    pub fn in_bounds(&self, tile: TileCoord) -> bool {
        tile.col >= 0
            && tile.row >= 0
            && (tile.col as u32) < self.width
            && (tile.row as u32) < self.height
    }

    /// Mark a tile as blocked or open. Out-of-bounds tiles are ignored.
    pub fn set_blocked(&mut self, tile: TileCoord, blocked: bool) {
        if let Some(index) = self.index(tile) {
            self.blocked[index] = blocked;
        }
    }

    fn index(&self, tile: TileCoord) -> Option<usize> {
        self.in_bounds(tile)
            .then(|| tile.row as usize * self.width as usize + tile.col as usize)
    }
}

impl CollisionOracle for GridMap {
    fn is_blocked(&self, tile: TileCoord) -> bool {
        self.index(tile).map_or(true, |index| self.blocked[index])
    }
}
