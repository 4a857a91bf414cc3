//! Deterministic identicon geometry for imager.
//!
//! Turns an arbitrary string into a fully specified vector drawing. The
//! pipeline is pure and has no I/O:
//!
//! 1. [`VisualParameters::derive`] hashes the input (SHA-1 of `input + "\n"`)
//!    and reads shapes, rotations and colours at fixed digest offsets.
//! 2. [`compose`] places four corner sprites, four side sprites and a center
//!    block on a 3×3 grid of 128-pixel tiles.
//! 3. [`build`] serializes the placed shapes into a [`DrawingDescriptor`]
//!    that a renderer turns into pixels.
//!
//! The same input always yields the same descriptor, on any machine. The
//! output size only affects the final scale, never the geometry.
//!
//! # Example
//!
//! ```
//! use imager_identicon::{DrawOp, identicon};
//!
//! let descriptor = identicon("koh110", 128).unwrap();
//! assert_eq!(descriptor.canvas_size, 384);
//! assert_eq!(descriptor.ops.first(), Some(&DrawOp::PushContext));
//! ```

mod compose;
mod consts;
mod descriptor;
mod error;
mod params;
mod shapes;

pub use compose::{PlacedShape, Rotation, compose};
pub use consts::{CANVAS_SIZE, TILE_COORD, TILE_SIZE};
pub use descriptor::{DrawOp, DrawingDescriptor, build};
pub use error::IdenticonError;
pub use params::{ColorDelta, Digest, Rgb, VisualParameters};
pub use shapes::{Point, center_polygon, sprite_polygon};

/// A validated request for one identicon.
///
/// Holds a non-empty input and a positive output size. Both travel together
/// into the cache key, while only the input feeds the geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdenticonRequest<'a> {
    input: &'a str,
    size: u32,
}

impl<'a> IdenticonRequest<'a> {
    /// Validate `input` and `size`.
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::EmptyInput`] for an empty `input` and
    /// [`IdenticonError::InvalidSize`] for a zero `size`.
    pub fn new(input: &'a str, size: u32) -> Result<Self, IdenticonError> {
        if input.is_empty() {
            return Err(IdenticonError::EmptyInput);
        }
        if size == 0 {
            return Err(IdenticonError::InvalidSize(size));
        }
        Ok(Self { input, size })
    }

    #[must_use]
    pub fn input(&self) -> &'a str {
        self.input
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Build the drawing for this request.
    ///
    /// # Errors
    ///
    /// Never fails for a request built through [`IdenticonRequest::new`]; the
    /// result mirrors [`identicon`].
    pub fn descriptor(&self) -> Result<DrawingDescriptor, IdenticonError> {
        identicon(self.input, self.size)
    }
}

/// Derive, compose and describe the identicon for `input` at `size` pixels.
///
/// # Errors
///
/// Returns [`IdenticonError::EmptyInput`] for an empty `input` and
/// [`IdenticonError::InvalidSize`] for a zero `size`.
pub fn identicon(input: &str, size: u32) -> Result<DrawingDescriptor, IdenticonError> {
    let params = VisualParameters::derive(input)?;
    build(compose(&params), size)
}
