//! Sprite and center block polygon tables.
//!
//! Points are normalized to the unit square and listed in drawing order.
//! Several shapes revisit a vertex or self-intersect, so the order decides the
//! filled silhouette and must not be changed.

/// Normalized `(x, y)` point in `[0, 1] × [0, 1]`.
pub type Point = (f64, f64);

/// Corner and side sprites, indexed by a 4-bit shape code.
static SPRITES: [&[Point]; 16] = [
    // triangle
    &[(0.5, 1.0), (1.0, 0.0), (1.0, 1.0)],
    // parallelogram
    &[(0.5, 0.0), (1.0, 0.0), (0.5, 1.0), (0.0, 1.0)],
    // mouse ears
    &[(0.5, 0.0), (1.0, 0.0), (1.0, 1.0), (0.5, 1.0), (1.0, 0.5)],
    // ribbon
    &[(0.0, 0.5), (0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.5, 0.5)],
    // sails
    &[(0.0, 0.5), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.5)],
    // fins
    &[(1.0, 0.0), (1.0, 1.0), (0.5, 1.0), (1.0, 0.5), (0.5, 0.5)],
    // beak
    &[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 0.5),
        (0.0, 0.0),
        (0.5, 1.0),
        (0.0, 1.0),
    ],
    // chevron
    &[
        (0.0, 0.0),
        (0.5, 0.0),
        (1.0, 0.5),
        (0.5, 1.0),
        (0.0, 1.0),
        (0.5, 0.5),
    ],
    // fish
    &[
        (0.5, 0.0),
        (0.5, 0.5),
        (1.0, 0.5),
        (1.0, 1.0),
        (0.5, 1.0),
        (0.5, 0.5),
        (0.0, 0.5),
    ],
    // kite
    &[
        (0.0, 0.0),
        (1.0, 0.0),
        (0.5, 0.5),
        (1.0, 0.5),
        (0.5, 1.0),
        (0.5, 0.5),
        (0.0, 1.0),
    ],
    // trough
    &[
        (0.0, 0.5),
        (0.5, 1.0),
        (1.0, 0.5),
        (0.5, 0.0),
        (1.0, 0.0),
        (1.0, 1.0),
        (0.0, 1.0),
    ],
    // rays
    &[
        (0.5, 0.0),
        (1.0, 0.0),
        (1.0, 1.0),
        (0.5, 1.0),
        (1.0, 0.75),
        (0.5, 0.5),
        (1.0, 0.25),
    ],
    // double rhombus
    &[
        (0.0, 0.5),
        (0.5, 0.0),
        (0.5, 0.5),
        (1.0, 0.0),
        (1.0, 0.5),
        (0.5, 1.0),
        (0.5, 0.5),
        (0.0, 1.0),
    ],
    // crown
    &[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 1.0),
        (0.0, 1.0),
        (1.0, 0.5),
        (0.5, 0.25),
        (0.5, 0.75),
        (0.0, 0.5),
        (0.5, 0.25),
    ],
    // radioactive
    &[
        (0.0, 0.5),
        (0.5, 0.5),
        (0.5, 0.0),
        (1.0, 0.0),
        (0.5, 0.5),
        (1.0, 0.5),
        (0.5, 1.0),
        (0.5, 0.5),
        (0.0, 1.0),
    ],
    // tiles
    &[
        (0.0, 0.0),
        (1.0, 0.0),
        (0.5, 0.5),
        (0.5, 0.0),
        (0.0, 0.5),
        (1.0, 0.5),
        (0.5, 1.0),
        (0.5, 0.5),
        (0.0, 1.0),
    ],
];

/// Center blocks, indexed by a 3-bit shape code. Index 0 draws nothing.
static CENTERS: [&[Point]; 8] = [
    // empty
    &[],
    // fill
    &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
    // diamond
    &[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5)],
    // reverse diamond
    &[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 1.0),
        (0.0, 1.0),
        (0.0, 0.5),
        (0.5, 1.0),
        (1.0, 0.5),
        (0.5, 0.0),
        (0.0, 0.5),
    ],
    // cross
    &[
        (0.25, 0.0),
        (0.75, 0.0),
        (0.5, 0.5),
        (1.0, 0.25),
        (1.0, 0.75),
        (0.5, 0.5),
        (0.75, 1.0),
        (0.25, 1.0),
        (0.5, 0.5),
        (0.0, 0.75),
        (0.0, 0.25),
        (0.5, 0.5),
    ],
    // morning star
    &[
        (0.0, 0.0),
        (0.5, 0.25),
        (1.0, 0.0),
        (0.75, 0.5),
        (1.0, 1.0),
        (0.5, 0.75),
        (0.0, 1.0),
        (0.25, 0.5),
    ],
    // small square
    &[(0.33, 0.33), (0.67, 0.33), (0.67, 0.67), (0.33, 0.67)],
    // checkerboard
    &[
        (0.0, 0.0),
        (0.33, 0.0),
        (0.33, 0.33),
        (0.66, 0.33),
        (0.67, 0.0),
        (1.0, 0.0),
        (1.0, 0.33),
        (0.67, 0.33),
        (0.67, 0.67),
        (1.0, 0.67),
        (1.0, 1.0),
        (0.67, 1.0),
        (0.67, 0.67),
        (0.33, 0.67),
        (0.33, 1.0),
        (0.0, 1.0),
        (0.0, 0.67),
        (0.33, 0.67),
        (0.33, 0.33),
        (0.0, 0.33),
    ],
];

/// Polygon for a corner or side sprite.
///
/// Indices past the table fall back to the last entry (tiles).
#[must_use]
pub fn sprite_polygon(shape: u8) -> &'static [Point] {
    SPRITES
        .get(usize::from(shape))
        .copied()
        .unwrap_or(SPRITES[SPRITES.len() - 1])
}

/// Polygon for a center block, empty for index 0 or any unknown index.
#[must_use]
pub fn center_polygon(shape: u8) -> &'static [Point] {
    CENTERS.get(usize::from(shape)).copied().unwrap_or(&[])
}
