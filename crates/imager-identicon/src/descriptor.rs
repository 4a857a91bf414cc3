//! Renderer-agnostic drawing descriptor.

use crate::compose::PlacedShape;
use crate::consts::{CANVAS_SIZE, TILE_COORD};
use crate::error::IdenticonError;
use crate::params::Rgb;
use crate::shapes::Point;

/// A single drawing instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Save the graphics state.
    PushContext,
    /// Move the origin.
    Translate { x: u32, y: u32 },
    /// Rotate the coordinate system clockwise, in degrees.
    Rotate(u16),
    /// Set the fill colour for subsequent drawing.
    Fill(Rgb),
    /// Filled rectangle from the origin to `(width, height)`.
    Rectangle { width: u32, height: u32 },
    /// Filled closed polygon.
    Path(Vec<Point>),
    /// Restore the last saved graphics state.
    PopContext,
}

/// Complete, ordered drawing of one identicon.
///
/// Consumed by a renderer, which paints `ops` onto a `canvas_size` square
/// filled with `background` and scales the result to `output_size`.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawingDescriptor {
    pub canvas_size: u32,
    pub background: Rgb,
    /// Fill in effect before the first [`DrawOp::Fill`]; `None` fills nothing.
    pub default_fill: Option<Rgb>,
    pub ops: Vec<DrawOp>,
    /// Edge length of the final square image.
    pub output_size: u32,
}

/// Serialize placed shapes into a descriptor scaled to `output_size`.
///
/// Each shape becomes a self-contained group between [`DrawOp::PushContext`]
/// and [`DrawOp::PopContext`]. A shape with a background paints a full tile
/// rectangle first; a shape without points paints no path.
///
/// # Errors
///
/// Returns [`IdenticonError::InvalidSize`] if `output_size` is zero.
pub fn build(
    shapes: Vec<PlacedShape>,
    output_size: u32,
) -> Result<DrawingDescriptor, IdenticonError> {
    if output_size == 0 {
        return Err(IdenticonError::InvalidSize(output_size));
    }

    let mut ops = Vec::with_capacity(shapes.len() * 6 + 2);
    for shape in shapes {
        ops.push(DrawOp::PushContext);
        ops.push(DrawOp::Translate {
            x: shape.translate.0,
            y: shape.translate.1,
        });
        ops.push(DrawOp::Rotate(shape.rotation.degrees()));
        if let Some(background) = shape.background {
            ops.push(DrawOp::Fill(background));
            ops.push(DrawOp::Rectangle {
                width: TILE_COORD,
                height: TILE_COORD,
            });
        }
        if !shape.points.is_empty() {
            ops.push(DrawOp::Fill(shape.fill));
            ops.push(DrawOp::Path(shape.points));
        }
        ops.push(DrawOp::PopContext);
    }

    Ok(DrawingDescriptor {
        canvas_size: CANVAS_SIZE,
        background: Rgb::WHITE,
        default_fill: None,
        ops,
        output_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Rotation;
    use pretty_assertions::assert_eq;

    fn sprite() -> PlacedShape {
        PlacedShape {
            points: vec![(63.5, 0.0), (127.0, -127.0), (127.0, 0.0)],
            rotation: Rotation::Deg90,
            translate: (256, 0),
            fill: Rgb::new(1, 2, 3),
            background: None,
        }
    }

    #[test]
    fn test_build_sprite_group() {
        let descriptor = build(vec![sprite()], 128).unwrap();

        assert_eq!(
            descriptor.ops,
            vec![
                DrawOp::PushContext,
                DrawOp::Translate { x: 256, y: 0 },
                DrawOp::Rotate(90),
                DrawOp::Fill(Rgb::new(1, 2, 3)),
                DrawOp::Path(vec![(63.5, 0.0), (127.0, -127.0), (127.0, 0.0)]),
                DrawOp::PopContext,
            ]
        );
    }

    #[test]
    fn test_build_canvas() {
        let descriptor = build(Vec::new(), 64).unwrap();

        assert_eq!(descriptor.canvas_size, 384);
        assert_eq!(descriptor.background, Rgb::WHITE);
        assert_eq!(descriptor.default_fill, None);
        assert_eq!(descriptor.output_size, 64);
        assert!(descriptor.ops.is_empty());
    }

    #[test]
    fn test_build_center_with_background() {
        let center = PlacedShape {
            points: vec![(0.0, 0.0), (127.0, 0.0), (127.0, 127.0)],
            rotation: Rotation::Deg0,
            translate: (128, 128),
            fill: Rgb::new(9, 9, 9),
            background: Some(Rgb::WHITE),
        };
        let descriptor = build(vec![center], 128).unwrap();

        assert_eq!(
            descriptor.ops,
            vec![
                DrawOp::PushContext,
                DrawOp::Translate { x: 128, y: 128 },
                DrawOp::Rotate(0),
                DrawOp::Fill(Rgb::WHITE),
                DrawOp::Rectangle {
                    width: 127,
                    height: 127
                },
                DrawOp::Fill(Rgb::new(9, 9, 9)),
                DrawOp::Path(vec![(0.0, 0.0), (127.0, 0.0), (127.0, 127.0)]),
                DrawOp::PopContext,
            ]
        );
    }

    #[test]
    fn test_build_empty_center_draws_background_only() {
        let center = PlacedShape {
            points: Vec::new(),
            rotation: Rotation::Deg0,
            translate: (128, 128),
            fill: Rgb::new(9, 9, 9),
            background: Some(Rgb::new(4, 5, 6)),
        };
        let descriptor = build(vec![center], 128).unwrap();

        assert!(descriptor.ops.contains(&DrawOp::Fill(Rgb::new(4, 5, 6))));
        assert!(!descriptor.ops.contains(&DrawOp::Fill(Rgb::new(9, 9, 9))));
        assert!(
            !descriptor
                .ops
                .iter()
                .any(|op| matches!(op, DrawOp::Path(_)))
        );
    }

    #[test]
    fn test_build_preserves_order() {
        let mut second = sprite();
        second.translate = (0, 128);
        let descriptor = build(vec![sprite(), second], 128).unwrap();

        let translates: Vec<&DrawOp> = descriptor
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Translate { .. }))
            .collect();
        assert_eq!(
            translates,
            vec![
                &DrawOp::Translate { x: 256, y: 0 },
                &DrawOp::Translate { x: 0, y: 128 }
            ]
        );
    }

    #[test]
    fn test_build_rejects_zero_size() {
        assert_eq!(
            build(vec![sprite()], 0),
            Err(IdenticonError::InvalidSize(0))
        );
    }
}
