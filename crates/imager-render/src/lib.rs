//! Rendering capability for imager drawings.
//!
//! A [`Renderer`] turns a [`DrawingDescriptor`] into encoded image bytes. The
//! trait is the seam between the pure identicon geometry and whatever engine
//! rasterizes it:
//!
//! - [`MagickRenderer`]: runs the ImageMagick CLI and captures PNG output
//!
//! Renderers must respect [`RenderLimits`]; callers such as the cache store
//! enforce the same limits again around any implementation.

mod error;
mod magick;
mod mvg;

use std::time::Duration;

pub use error::RenderError;
use imager_identicon::DrawingDescriptor;
pub use magick::MagickRenderer;
pub use mvg::{draw_primitives, magick_args};

/// Default rendering timeout (10 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default ceiling on rendered output (6000 KiB).
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 6000 * 1024;

/// Time and size budget for a single render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderLimits {
    /// Wall-clock budget for one render.
    pub timeout: Duration,
    /// Largest accepted output, in bytes.
    pub max_output_bytes: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }
}

/// Rasterizes drawing descriptors.
///
/// Implementations must be pure with respect to the descriptor: rendering the
/// same descriptor twice yields equally valid output. Concurrent calls are
/// allowed.
pub trait Renderer: Send + Sync {
    /// Render `descriptor` to encoded image bytes.
    fn render(
        &self,
        descriptor: &DrawingDescriptor,
    ) -> impl Future<Output = Result<Vec<u8>, RenderError>> + Send;
}
