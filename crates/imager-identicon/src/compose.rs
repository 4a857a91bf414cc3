//! Sprite placement on the 3×3 tile grid.
//!
//! Corner sprites go to the four grid corners and side sprites to the four
//! edge midpoints, each instance turned one more quarter clockwise than the
//! previous one. The center block sits in the middle tile, unrotated.

use crate::consts::{TILE_COORD, TILE_SIZE};
use crate::params::{Rgb, VisualParameters};
use crate::shapes::{Point, center_polygon, sprite_polygon};

/// Rotation by a whole number of quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Rotation for `turns` quarter turns, wrapping at a full turn.
    #[must_use]
    pub fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// Angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Origin shift that keeps a sprite rotated about `(0, 0)` inside its tile.
    fn origin_offset(self) -> (f64, f64) {
        let edge = f64::from(TILE_COORD);
        match self {
            Self::Deg0 => (0.0, 0.0),
            Self::Deg90 => (0.0, -edge),
            Self::Deg180 => (-edge, -edge),
            Self::Deg270 => (-edge, 0.0),
        }
    }
}

/// A polygon positioned on the canvas, ready to be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedShape {
    /// Tile-local pixel coordinates, already shifted for `rotation`.
    pub points: Vec<Point>,
    pub rotation: Rotation,
    /// Canvas position of the tile's top-left corner.
    pub translate: (u32, u32),
    pub fill: Rgb,
    /// Solid tile background painted before the polygon (center block only).
    pub background: Option<Rgb>,
}

/// Tile positions of the corner sprites, clockwise from top-left.
const CORNER_TILES: [(u32, u32); 4] = [
    (0, 0),
    (2 * TILE_SIZE, 0),
    (2 * TILE_SIZE, 2 * TILE_SIZE),
    (0, 2 * TILE_SIZE),
];

/// Tile positions of the side sprites, clockwise from top.
const SIDE_TILES: [(u32, u32); 4] = [
    (TILE_SIZE, 0),
    (2 * TILE_SIZE, TILE_SIZE),
    (TILE_SIZE, 2 * TILE_SIZE),
    (0, TILE_SIZE),
];

const CENTER_TILE: (u32, u32) = (TILE_SIZE, TILE_SIZE);

/// Scale normalized points to tile pixels and apply the rotation offset.
fn to_tile_pixels(points: &[Point], rotation: Rotation) -> Vec<Point> {
    let edge = f64::from(TILE_COORD);
    let (dx, dy) = rotation.origin_offset();
    points
        .iter()
        .map(|&(x, y)| (x * edge + dx, y * edge + dy))
        .collect()
}

/// Four rotationally symmetric instances of one sprite.
fn ring(
    shape: u8,
    base_rotation: u8,
    fill: Rgb,
    tiles: [(u32, u32); 4],
) -> impl Iterator<Item = PlacedShape> {
    let polygon = sprite_polygon(shape);
    tiles.into_iter().zip(0u8..).map(move |(translate, step)| {
        let rotation = Rotation::from_quarter_turns(base_rotation + step);
        PlacedShape {
            points: to_tile_pixels(polygon, rotation),
            rotation,
            translate,
            fill,
            background: None,
        }
    })
}

/// Lay out all nine shapes of an identicon.
///
/// Returns the four corner sprites, then the four side sprites, then the
/// center block. Later shapes paint over earlier ones.
#[must_use]
pub fn compose(params: &VisualParameters) -> Vec<PlacedShape> {
    let background = if params.uses_colored_center() {
        params.side_color
    } else {
        Rgb::WHITE
    };

    let center = PlacedShape {
        points: to_tile_pixels(center_polygon(params.center_shape), Rotation::Deg0),
        rotation: Rotation::Deg0,
        translate: CENTER_TILE,
        fill: params.corner_color,
        background: Some(background),
    };

    ring(
        params.corner_shape,
        params.corner_rotation,
        params.corner_color,
        CORNER_TILES,
    )
    .chain(ring(
        params.side_shape,
        params.side_rotation,
        params.side_color,
        SIDE_TILES,
    ))
    .chain(std::iter::once(center))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ColorDelta;
    use pretty_assertions::assert_eq;

    fn params(corner_rotation: u8, side_rotation: u8) -> VisualParameters {
        let color = Rgb::new(10, 20, 30);
        VisualParameters {
            corner_shape: 0,
            side_shape: 1,
            center_shape: 2,
            corner_rotation,
            side_rotation,
            center_background: false,
            corner_color: color,
            side_color: color,
            contrast: ColorDelta { r: 0, g: 0, b: 0 },
        }
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(Rotation::from_quarter_turns(0), Rotation::Deg0);
        assert_eq!(Rotation::from_quarter_turns(3), Rotation::Deg270);
        assert_eq!(Rotation::from_quarter_turns(5), Rotation::Deg90);
        assert_eq!(Rotation::from_quarter_turns(6).degrees(), 180);
    }

    #[test]
    fn test_origin_offsets() {
        assert_eq!(Rotation::Deg0.origin_offset(), (0.0, 0.0));
        assert_eq!(Rotation::Deg90.origin_offset(), (0.0, -127.0));
        assert_eq!(Rotation::Deg180.origin_offset(), (-127.0, -127.0));
        assert_eq!(Rotation::Deg270.origin_offset(), (-127.0, 0.0));
    }

    #[test]
    fn test_compose_layout() {
        let shapes = compose(&params(0, 0));
        let translates: Vec<(u32, u32)> = shapes.iter().map(|s| s.translate).collect();

        assert_eq!(
            translates,
            vec![
                (0, 0),
                (256, 0),
                (256, 256),
                (0, 256),
                (128, 0),
                (256, 128),
                (128, 256),
                (0, 128),
                (128, 128),
            ]
        );
    }

    #[test]
    fn test_rotations_step_clockwise() {
        let shapes = compose(&params(1, 3));
        let degrees: Vec<u16> = shapes.iter().map(|s| s.rotation.degrees()).collect();

        assert_eq!(degrees, vec![90, 180, 270, 0, 270, 0, 90, 180, 0]);
    }

    #[test]
    fn test_points_scaled_and_offset() {
        let shapes = compose(&params(0, 0));

        // triangle at 0°
        assert_eq!(
            shapes[0].points,
            vec![(63.5, 127.0), (127.0, 0.0), (127.0, 127.0)]
        );
        // triangle at 90° is shifted up by one tile edge
        assert_eq!(
            shapes[1].points,
            vec![(63.5, 0.0), (127.0, -127.0), (127.0, 0.0)]
        );
        // triangle at 180°
        assert_eq!(
            shapes[2].points,
            vec![(-63.5, 0.0), (0.0, -127.0), (0.0, 0.0)]
        );
        // triangle at 270°
        assert_eq!(
            shapes[3].points,
            vec![(-63.5, 127.0), (0.0, 0.0), (0.0, 127.0)]
        );
    }

    #[test]
    fn test_center_is_last_and_unrotated() {
        let shapes = compose(&params(2, 2));
        let center = shapes.last().unwrap();

        assert_eq!(shapes.len(), 9);
        assert_eq!(center.rotation, Rotation::Deg0);
        assert_eq!(center.translate, (128, 128));
        assert_eq!(
            center.points,
            vec![(63.5, 0.0), (127.0, 63.5), (63.5, 127.0), (0.0, 63.5)]
        );
    }

    #[test]
    fn test_center_background_white_without_contrast() {
        let mut p = params(0, 0);
        p.center_background = true;
        let center = compose(&p).pop().unwrap();

        assert_eq!(center.background, Some(Rgb::WHITE));
        assert_eq!(center.fill, p.corner_color);
    }

    #[test]
    fn test_center_background_white_without_flag() {
        let mut p = params(0, 0);
        p.contrast = ColorDelta { r: 200, g: 0, b: 0 };
        let center = compose(&p).pop().unwrap();

        assert_eq!(center.background, Some(Rgb::WHITE));
    }

    #[test]
    fn test_center_background_colored_with_flag_and_contrast() {
        let mut p = params(0, 0);
        p.center_background = true;
        p.contrast = ColorDelta { r: 0, g: -128, b: 0 };
        let center = compose(&p).pop().unwrap();

        assert_eq!(center.background, Some(p.side_color));
    }

    #[test]
    fn test_empty_center_keeps_background() {
        let mut p = params(0, 0);
        p.center_shape = 0;
        let center = compose(&p).pop().unwrap();

        assert!(center.points.is_empty());
        assert_eq!(center.background, Some(Rgb::WHITE));
    }

    #[test]
    fn test_sprites_use_shared_color() {
        let p = VisualParameters::derive("alice").unwrap();
        let shapes = compose(&p);

        for shape in &shapes {
            assert_eq!(shape.fill, p.corner_color);
        }
        assert!(shapes[..8].iter().all(|s| s.background.is_none()));
    }
}
