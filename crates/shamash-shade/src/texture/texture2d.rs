use bytemuck::{Pod, Zeroable};

use crate::color::Rgba;

use super::TextureError;

/// Packed 8-bit RGBA texel, the upload/readback wire layout.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Texel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// 2D texture resource.
///
/// Texels are stored as f32 exactly as uploaded: RGB channels sRGB-encoded,
/// alpha linear. The resource is immutable after construction — the shading
/// stage only reads it, via [`Sampler`](super::Sampler).
#[derive(Debug, Clone)]
pub struct Texture2d {
    width: u32,
    height: u32,
    texels: Vec<Rgba>,
}

impl Texture2d {
    /// Creates a texture from f32 texel data (row-major, top-left origin).
    pub fn from_texels(width: u32, height: u32, texels: Vec<Rgba>) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if texels.len() != expected {
            return Err(TextureError::SizeMismatch {
                expected,
                actual: texels.len(),
            });
        }

        log::debug!("texture created: {width}x{height} (f32 upload)");
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Creates a texture from packed 8-bit RGBA bytes (row-major RGBA8,
    /// e.g. a decoded PNG payload). RGB bytes are assumed sRGB-encoded.
    pub fn from_srgb8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if bytes.len() != expected * 4 {
            return Err(TextureError::SizeMismatch {
                expected,
                actual: bytes.len() / 4,
            });
        }

        let packed: &[Texel] = bytemuck::cast_slice(bytes);
        let texels = packed
            .iter()
            .map(|t| Rgba::from_srgb8(t.r, t.g, t.b, t.a))
            .collect();

        log::debug!("texture created: {width}x{height} (srgb8 upload)");
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fetches one texel by integer coordinate. Callers are expected to
    /// resolve wrap modes first; coordinates must be in bounds.
    #[inline]
    pub fn fetch(&self, x: u32, y: u32) -> Rgba {
        debug_assert!(x < self.width && y < self.height);
        self.texels[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_texels_rejects_wrong_count() {
        let err = Texture2d::from_texels(2, 2, vec![Rgba::white(); 3]).unwrap_err();
        assert_eq!(
            err,
            TextureError::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn from_texels_rejects_zero_dimension() {
        let err = Texture2d::from_texels(0, 4, Vec::new()).unwrap_err();
        assert!(matches!(err, TextureError::ZeroDimension { .. }));
    }

    #[test]
    fn from_srgb8_rejects_truncated_payload() {
        let err = Texture2d::from_srgb8(2, 1, &[0u8; 7]).unwrap_err();
        assert!(matches!(err, TextureError::SizeMismatch { .. }));
    }

    // ── fetch ─────────────────────────────────────────────────────────────

    #[test]
    fn fetch_is_row_major() {
        let texels = vec![
            Rgba::new(0.0, 0.0, 0.0, 1.0),
            Rgba::new(1.0, 0.0, 0.0, 1.0),
            Rgba::new(0.0, 1.0, 0.0, 1.0),
            Rgba::new(0.0, 0.0, 1.0, 1.0),
        ];
        let tex = Texture2d::from_texels(2, 2, texels).unwrap();
        assert_eq!(tex.fetch(1, 0), Rgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(tex.fetch(0, 1), Rgba::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn from_srgb8_scales_bytes_without_decoding() {
        let tex = Texture2d::from_srgb8(1, 1, &[255, 0, 51, 128]).unwrap();
        let t = tex.fetch(0, 0);
        assert_eq!(t.r, 1.0);
        assert_eq!(t.g, 0.0);
        assert!((t.b - 0.2).abs() < 1e-6);
    }
}
