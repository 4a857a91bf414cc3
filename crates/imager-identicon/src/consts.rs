//! Fixed geometry constants.

/// Edge length of one tile of the 3×3 grid, in canvas pixels.
pub const TILE_SIZE: u32 = 128;

/// Largest in-tile coordinate (`TILE_SIZE - 1`); normalized points scale by this.
pub const TILE_COORD: u32 = TILE_SIZE - 1;

/// Edge length of the square canvas.
pub const CANVAS_SIZE: u32 = TILE_SIZE * 3;
