//! ImageMagick draw-primitive (MVG) serialization.

use std::fmt::Write as _;

use imager_identicon::{DrawOp, DrawingDescriptor};

/// Serialize the descriptor's operations as a single `-draw` argument.
///
/// Operations are separated by one space. Coordinates use the shortest
/// decimal form that round-trips, so `63.5` stays `63.5` and `127.0` prints
/// as `127`.
#[must_use]
pub fn draw_primitives(descriptor: &DrawingDescriptor) -> String {
    let mut out = String::new();
    for (i, op) in descriptor.ops.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_op(&mut out, op);
    }
    out
}

fn write_op(out: &mut String, op: &DrawOp) {
    // Writing to a String cannot fail.
    let _ = match op {
        DrawOp::PushContext => write!(out, "push graphic-context"),
        DrawOp::Translate { x, y } => write!(out, "translate {x},{y}"),
        DrawOp::Rotate(degrees) => write!(out, "rotate {degrees}"),
        DrawOp::Fill(rgb) => write!(out, "fill {rgb}"),
        DrawOp::Rectangle { width, height } => write!(out, "rectangle 0,0 {width},{height}"),
        DrawOp::Path(points) => {
            out.push_str("path 'M");
            for (x, y) in points {
                let _ = write!(out, " {x},{y}");
            }
            write!(out, " Z'")
        }
        DrawOp::PopContext => write!(out, "pop graphic-context"),
    };
}

/// Full ImageMagick argument vector writing a PNG to stdout.
#[must_use]
pub fn magick_args(descriptor: &DrawingDescriptor) -> Vec<String> {
    let canvas = descriptor.canvas_size;
    let output = descriptor.output_size;
    let fill = descriptor
        .default_fill
        .map_or_else(|| "none".to_owned(), |rgb| rgb.to_string());

    vec![
        "-size".to_owned(),
        format!("{canvas}x{canvas}"),
        format!("xc:{}", descriptor.background),
        "-fill".to_owned(),
        fill,
        "-draw".to_owned(),
        draw_primitives(descriptor),
        "-scale".to_owned(),
        format!("{output}x{output}"),
        "png:-".to_owned(),
    ]
}
