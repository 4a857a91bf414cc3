//! Digest and visual parameter derivation.
//!
//! Every visual property of an identicon comes from the SHA-1 digest of the
//! input string followed by a newline. The digest is read as 40 hex
//! characters; individual characters (nibbles) and character pairs (bytes)
//! at fixed offsets select shapes, rotations and colours:
//!
//! ```text
//! hex[0]      corner shape       (0..=15)
//! hex[1]      side shape         (0..=15)
//! hex[2] & 7  center shape       (0..=7)
//! hex[3] & 3  corner rotation    (quarter turns)
//! hex[4] & 3  side rotation      (quarter turns)
//! hex[5] % 2  center background flag
//! hex[6..12]  corner colour      (r, g, b)
//! hex[12..18] contrast reference (r, g, b)
//! ```
//!
//! Changing any offset changes every generated image.

use std::fmt;

use sha1::{Digest as _, Sha1};

use crate::error::IdenticonError;

/// Number of raw bytes in a SHA-1 digest.
const DIGEST_LEN: usize = 20;

/// SHA-1 digest of an identicon input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hash `input` with a trailing newline appended.
    #[must_use]
    pub fn of(input: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(input.as_bytes());
        hasher.update(b"\n");
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&hasher.finalize());
        Self(bytes)
    }

    /// Lowercase hex form (40 characters).
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Value of the hex character at `index` (0..40).
    fn nibble(&self, index: usize) -> u8 {
        let byte = self.0[index / 2];
        if index % 2 == 0 { byte >> 4 } else { byte & 0x0f }
    }

    /// Value of the two hex characters starting at `index` (must be even).
    fn byte_at(&self, index: usize) -> u8 {
        debug_assert!(index % 2 == 0, "byte offsets are even hex positions");
        self.0[index / 2]
    }

    fn rgb_at(&self, index: usize) -> Rgb {
        Rgb::new(
            self.byte_at(index),
            self.byte_at(index + 2),
            self.byte_at(index + 4),
        )
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 24-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Componentwise `self - other`.
    #[must_use]
    pub fn delta(self, other: Self) -> ColorDelta {
        ColorDelta {
            r: i16::from(self.r) - i16::from(other.r),
            g: i16::from(self.g) - i16::from(other.g),
            b: i16::from(self.b) - i16::from(other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Signed per-channel difference between two colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorDelta {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl ColorDelta {
    /// Threshold above which a single channel counts as strongly contrasting.
    const STRONG: i16 = 127;

    /// True if any channel differs by more than half the channel range.
    #[must_use]
    pub fn is_strong(self) -> bool {
        self.r.abs() > Self::STRONG || self.g.abs() > Self::STRONG || self.b.abs() > Self::STRONG
    }
}

/// Everything needed to compose an identicon, derived from a [`Digest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualParameters {
    /// Index into the corner/side sprite table (0..=15).
    pub corner_shape: u8,
    /// Index into the corner/side sprite table (0..=15).
    pub side_shape: u8,
    /// Index into the center block table (0..=7).
    pub center_shape: u8,
    /// Base rotation of the corner sprites, in quarter turns (0..=3).
    pub corner_rotation: u8,
    /// Base rotation of the side sprites, in quarter turns (0..=3).
    pub side_rotation: u8,
    /// Whether the center block may use the sprite colour as background.
    pub center_background: bool,
    pub corner_color: Rgb,
    /// Always equal to `corner_color`; the digest bytes that would give the
    /// side sprites their own colour only feed `contrast`.
    pub side_color: Rgb,
    /// `corner_color` minus the colour parsed from `hex[12..18]`.
    pub contrast: ColorDelta,
}

impl VisualParameters {
    /// Derive parameters from a non-empty input string.
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::EmptyInput`] if `input` is empty.
    pub fn derive(input: &str) -> Result<Self, IdenticonError> {
        if input.is_empty() {
            return Err(IdenticonError::EmptyInput);
        }
        Ok(Self::from_digest(&Digest::of(input)))
    }

    /// Extract parameters from an existing digest.
    #[must_use]
    pub fn from_digest(digest: &Digest) -> Self {
        let corner_color = digest.rgb_at(6);
        let reference = digest.rgb_at(12);

        Self {
            corner_shape: digest.nibble(0),
            side_shape: digest.nibble(1),
            center_shape: digest.nibble(2) & 7,
            corner_rotation: digest.nibble(3) & 3,
            side_rotation: digest.nibble(4) & 3,
            center_background: digest.nibble(5) % 2 == 1,
            corner_color,
            side_color: corner_color,
            contrast: corner_color.delta(reference),
        }
    }

    /// Whether the center block is drawn on the sprite colour instead of white.
    #[must_use]
    pub fn uses_colored_center(&self) -> bool {
        self.center_background && self.contrast.is_strong()
    }
}
