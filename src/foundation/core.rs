use crate::foundation::error::{PixelcatError, PixelcatResult};

pub use kurbo::{Point, Vec2};

/// Integer upscale factor: one logical pixel becomes an S×S block in the
/// output image.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Scale(pub u32);

impl Scale {
    /// Upscale factor used by the portfolio page.
    pub const DEFAULT: Scale = Scale(4);

    /// Validate and build a scale. Zero is rejected.
    pub fn new(s: u32) -> PixelcatResult<Self> {
        if s == 0 {
            return Err(PixelcatError::validation("Scale must be > 0"));
        }
        Ok(Self(s))
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pixel dimensions of a rendered sprite image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpriteSize {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
