use crate::color::Rgba;
use crate::coords::Vec2;

use super::Texture2d;

/// Behavior for texture coordinates outside [0, 1).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WrapMode {
    /// Tile the texture.
    #[default]
    Repeat,
    /// Clamp to the edge texel.
    ClampToEdge,
}

/// Nearest-texel sampler.
///
/// Coordinate resolution (wrap modes, out-of-range handling) lives here,
/// not in the shading stage. Filtering beyond nearest is out of scope.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Sampler {
    pub wrap: WrapMode,
}

impl Sampler {
    #[inline]
    pub const fn new(wrap: WrapMode) -> Self {
        Self { wrap }
    }

    /// Samples the texture at normalized UV coordinates.
    ///
    /// Returns the texel as stored: RGB still sRGB-encoded, alpha linear.
    #[inline]
    pub fn sample(&self, texture: &Texture2d, uv: Vec2) -> Rgba {
        let x = self.resolve_axis(uv.x, texture.width());
        let y = self.resolve_axis(uv.y, texture.height());
        texture.fetch(x, y)
    }

    #[inline]
    fn resolve_axis(&self, coord: f32, size: u32) -> u32 {
        let n = size as f32;
        match self.wrap {
            WrapMode::Repeat => {
                // rem_euclid keeps the texel index in [0, n) for any sign.
                let t = (coord * n).rem_euclid(n);
                (t as u32).min(size - 1)
            }
            WrapMode::ClampToEdge => {
                let t = (coord * n).clamp(0.0, n - 1.0);
                t as u32
            }
        }
    }
}
