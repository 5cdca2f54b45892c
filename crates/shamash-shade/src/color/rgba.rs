use core::ops::Mul;

use super::srgb::{linear_to_srgb, srgb_to_linear};

/// Straight-alpha RGBA color.
///
/// Channels are nominally in [0, 1] but this type never clamps; values
/// outside the range flow through untouched so that out-of-gamut policy
/// stays with the pipeline stage that quantizes for output.
///
/// Alpha is always linear — the sRGB transfer functions apply to RGB only.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from 8-bit texel data (`0`–`255` per channel).
    ///
    /// Channels are scaled to [0, 1] but NOT transfer-decoded; texture
    /// storage stays sRGB-encoded until [`to_linear`](Self::to_linear).
    #[inline]
    pub fn from_srgb8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Decodes sRGB-encoded RGB channels to linear light.
    ///
    /// Alpha passes through unchanged: `c.to_linear().a == c.a` always.
    #[inline]
    pub fn to_linear(self) -> Self {
        Self {
            r: srgb_to_linear(self.r),
            g: srgb_to_linear(self.g),
            b: srgb_to_linear(self.b),
            a: self.a,
        }
    }

    /// Encodes linear-light RGB channels to sRGB. Alpha passes through.
    #[inline]
    pub fn to_srgb(self) -> Self {
        Self {
            r: linear_to_srgb(self.r),
            g: linear_to_srgb(self.g),
            b: linear_to_srgb(self.b),
            a: self.a,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

/// Component-wise multiply across all 4 channels.
///
/// Alpha multiplies alpha, producing combined opacity — this is the tint
/// composition used by the diffuse stage.
impl Mul for Rgba {
    type Output = Rgba;
    #[inline]
    fn mul(self, rhs: Rgba) -> Rgba {
        Rgba::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── transfer round trips ──────────────────────────────────────────────

    #[test]
    fn to_linear_leaves_alpha_untouched() {
        for a in [0.0, 0.25, 0.5, 1.0] {
            let c = Rgba::new(0.5, 0.2, 0.8, a);
            assert_eq!(c.to_linear().a, a);
            assert_eq!(c.to_srgb().a, a);
        }
    }

    #[test]
    fn to_linear_is_not_idempotent() {
        let c = Rgba::new(0.5, 0.5, 0.5, 1.0);
        let once = c.to_linear();
        let twice = once.to_linear();
        assert_ne!(once, twice);
    }

    #[test]
    fn to_linear_decodes_each_channel_independently() {
        let c = Rgba::new(0.0, 1.0, 0.04045, 0.5).to_linear();
        assert_eq!(c.r, 0.0);
        assert!((c.g - 1.0).abs() < 1e-6);
        assert!((c.b - 0.003131).abs() < 1e-5);
        assert_eq!(c.a, 0.5);
    }

    // ── from_srgb8 ────────────────────────────────────────────────────────

    #[test]
    fn from_srgb8_scales_without_decoding() {
        let c = Rgba::from_srgb8(255, 0, 51, 128);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    // ── multiply ──────────────────────────────────────────────────────────

    #[test]
    fn mul_is_component_wise_including_alpha() {
        let a = Rgba::new(0.5, 1.0, 0.25, 0.5);
        let b = Rgba::new(2.0, 0.0, 1.0, 0.5);
        assert_eq!(a * b, Rgba::new(1.0, 0.0, 0.25, 0.25));
    }

    #[test]
    fn mul_by_white_is_identity() {
        let c = Rgba::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c * Rgba::white(), c);
    }
}
