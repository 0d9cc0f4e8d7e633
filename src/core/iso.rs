// Isometric projection between tile grid coordinates and screen space

use glam::Vec2;

use super::ConfigError;

/// Integer cell address on the logical map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Tile reached by stepping `(d_col, d_row)` from this one
    pub fn offset(self, d_col: i32, d_row: i32) -> Self {
        Self::new(self.col + d_col, self.row + d_row)
    }

    /// Floor fractional tile coordinates onto the cell containing them
    pub fn from_fractional(col: f32, row: f32) -> Self {
        Self::new(col.floor() as i32, row.floor() as i32)
    }
}

/// Which way screen-space y grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAxis {
    /// y grows downward (window coordinates); the projection is added to the origin
    #[default]
    Down,
    /// y grows upward (GL-style world space); the projection is subtracted from the origin
    Up,
}

impl VerticalAxis {
    fn sign(self) -> f32 {
        match self {
            Self::Down => 1.0,
            Self::Up => -1.0,
        }
    }
}

/// Tile ↔ screen mapping for a diamond-shaped isometric map.
///
/// `screen.x = origin.x + (col - row) * tile_width / 2`
/// `screen.y = origin.y ± (col + row) * tile_height / 2`
///
/// The origin is the screen position of the map's top corner (tile 0,0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    half_width: f32,
    half_height: f32,
    origin: Vec2,
    axis: VerticalAxis,
}

impl IsoProjection {
    /// Create a projection for tiles of `tile_width` x `tile_height` pixels
    pub fn new(tile_width: f32, tile_height: f32, origin: Vec2) -> Result<Self, ConfigError> {
        Self::with_axis(tile_width, tile_height, origin, VerticalAxis::Down)
    }

    /// Create a projection with an explicit vertical axis orientation
    pub fn with_axis(
        tile_width: f32,
        tile_height: f32,
        origin: Vec2,
        axis: VerticalAxis,
    ) -> Result<Self, ConfigError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(tile_width) || !valid(tile_height) {
            return Err(ConfigError::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }

        Ok(Self {
            half_width: tile_width / 2.0,
            half_height: tile_height / 2.0,
            origin,
            axis,
        })
    }

    /// Screen position of the map's top corner
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn tile_width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn tile_height(&self) -> f32 {
        self.half_height * 2.0
    }

    pub fn axis(&self) -> VerticalAxis {
        self.axis
    }

    /// Project an integer tile onto the screen
    pub fn tile_to_iso(&self, tile: TileCoord) -> Vec2 {
        self.tile_to_iso_f(tile.col as f32, tile.row as f32)
    }

    /// Project fractional tile coordinates onto the screen
    pub fn tile_to_iso_f(&self, col: f32, row: f32) -> Vec2 {
        Vec2::new(
            self.origin.x + (col - row) * self.half_width,
            self.origin.y + self.axis.sign() * (col + row) * self.half_height,
        )
    }

    /// Inverse of [`tile_to_iso_f`](Self::tile_to_iso_f). Returns `(col, row)`
    /// as fractions; callers decide how to snap.
    pub fn iso_to_tile(&self, screen: Vec2) -> (f32, f32) {
        let diff = (screen.x - self.origin.x) / self.half_width; // col - row
        let sum = self.axis.sign() * (screen.y - self.origin.y) / self.half_height; // col + row
        ((sum + diff) / 2.0, (sum - diff) / 2.0)
    }

    /// Tile whose cell contains the given screen point
    pub fn tile_at(&self, screen: Vec2) -> TileCoord {
        let (col, row) = self.iso_to_tile(screen);
        TileCoord::from_fractional(col, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn projection() -> IsoProjection {
        IsoProjection::new(64.0, 32.0, Vec2::new(320.0, 16.0)).unwrap()
    }

    #[test]
    fn test_origin_tile_projects_to_origin() {
        let iso = projection();
        assert_eq!(iso.tile_to_iso(TileCoord::new(0, 0)), Vec2::new(320.0, 16.0));
    }

    #[test]
    fn test_projection_formula() {
        let iso = projection();
        // (col - row) * 32, (col + row) * 16
        assert_eq!(iso.tile_to_iso(TileCoord::new(3, 1)), Vec2::new(320.0 + 64.0, 16.0 + 64.0));
        assert_eq!(iso.tile_to_iso(TileCoord::new(0, 2)), Vec2::new(320.0 - 64.0, 16.0 + 32.0));
    }

    #[test]
    fn test_increasing_col_and_row_move_down_the_screen() {
        let iso = projection();
        let base = iso.tile_to_iso(TileCoord::new(5, 5));
        let next_col = iso.tile_to_iso(TileCoord::new(6, 5));
        let next_row = iso.tile_to_iso(TileCoord::new(5, 6));
        assert!(next_col.y > base.y && next_col.x > base.x);
        assert!(next_row.y > base.y && next_row.x < base.x);
    }

    #[test]
    fn test_round_trip_over_grid() {
        for axis in [VerticalAxis::Down, VerticalAxis::Up] {
            let iso = IsoProjection::with_axis(64.0, 32.0, Vec2::new(400.0, 900.0), axis).unwrap();
            for col in -20..=60 {
                for row in -20..=60 {
                    let (c, r) = iso.iso_to_tile(iso.tile_to_iso(TileCoord::new(col, row)));
                    assert_abs_diff_eq!(c, col as f32, epsilon = 1e-4);
                    assert_abs_diff_eq!(r, row as f32, epsilon = 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_up_axis_subtracts_from_origin() {
        let iso =
            IsoProjection::with_axis(64.0, 32.0, Vec2::new(0.0, 500.0), VerticalAxis::Up).unwrap();
        assert_eq!(iso.tile_to_iso(TileCoord::new(1, 1)), Vec2::new(0.0, 500.0 - 32.0));
    }

    #[test]
    fn test_fractional_inverse() {
        let iso = projection();
        let screen = iso.tile_to_iso_f(2.5, 7.25);
        let (col, row) = iso.iso_to_tile(screen);
        assert_abs_diff_eq!(col, 2.5, epsilon = 1e-4);
        assert_abs_diff_eq!(row, 7.25, epsilon = 1e-4);
    }

    #[test]
    fn test_tile_at_floors() {
        let iso = projection();
        assert_eq!(iso.tile_at(iso.tile_to_iso_f(3.9, 4.2)), TileCoord::new(3, 4));
        assert_eq!(iso.tile_at(iso.tile_to_iso_f(-0.5, 1.5)), TileCoord::new(-1, 1));
    }

    #[test]
    fn test_invalid_tile_size() {
        assert!(IsoProjection::new(0.0, 32.0, Vec2::ZERO).is_err());
        assert!(IsoProjection::new(64.0, -1.0, Vec2::ZERO).is_err());
        assert!(IsoProjection::new(f32::NAN, 32.0, Vec2::ZERO).is_err());
    }

    #[test]
    fn test_tile_offset() {
        assert_eq!(TileCoord::new(5, 5).offset(0, -1), TileCoord::new(5, 4));
        assert_eq!(TileCoord::new(5, 5).offset(1, 0), TileCoord::new(6, 5));
    }
}
