use crate::color::Rgba;
use crate::texture::{Sampler, Texture2d};

use super::{FragmentInput, FragmentStage};

/// Diffuse textured stage: samples an sRGB-encoded texture, decodes the
/// sample to linear light, and multiplies by a draw-constant tint.
///
/// `output = tint * sample(texture, tex_coord).to_linear()`
///
/// The tint is already linear and is applied across all 4 channels (alpha
/// times alpha gives combined opacity). Nothing here clamps; out-of-range
/// values flow through to the attachment.
pub struct DiffuseStage<'a> {
    texture: &'a Texture2d,
    sampler: Sampler,
    tint: Rgba,
}

impl<'a> DiffuseStage<'a> {
    #[inline]
    pub fn new(texture: &'a Texture2d, sampler: Sampler, tint: Rgba) -> Self {
        Self {
            texture,
            sampler,
            tint,
        }
    }

    /// Untinted variant, equivalent to a white tint.
    #[inline]
    pub fn untinted(texture: &'a Texture2d, sampler: Sampler) -> Self {
        Self::new(texture, sampler, Rgba::white())
    }
}

impl FragmentStage for DiffuseStage<'_> {
    #[inline]
    fn shade(&self, input: FragmentInput) -> Rgba {
        let texel = self.sampler.sample(self.texture, input.tex_coord);
        self.tint * texel.to_linear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::target::ColorAttachment;

    fn solid(texel: Rgba) -> Texture2d {
        Texture2d::from_texels(1, 1, vec![texel]).unwrap()
    }

    fn shade_once(texture: &Texture2d, tint: Rgba) -> Rgba {
        let stage = DiffuseStage::new(texture, Sampler::default(), tint);
        stage.shade(FragmentInput {
            tex_coord: Vec2::splat(0.5),
        })
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    // ── end-to-end composition ────────────────────────────────────────────

    #[test]
    fn midgray_with_white_tint() {
        let out = shade_once(&solid(Rgba::new(0.5, 0.5, 0.5, 1.0)), Rgba::white());
        assert_close(out.r, 0.214041);
        assert_close(out.g, 0.214041);
        assert_close(out.b, 0.214041);
        assert_eq!(out.a, 1.0);
    }

    #[test]
    fn tint_scales_after_decoding() {
        let out = shade_once(
            &solid(Rgba::new(0.0, 1.0, 0.04045, 0.5)),
            Rgba::new(2.0, 0.0, 1.0, 1.0),
        );
        assert_close(out.r, 0.0);
        assert_close(out.g, 0.0);
        assert_close(out.b, 0.003131);
        assert_eq!(out.a, 0.5);
    }

    #[test]
    fn alpha_is_never_transfer_decoded() {
        // Texel alpha 0.5 would decode to ~0.214 if it went through the
        // EOTF; it must come out untouched.
        let out = shade_once(&solid(Rgba::new(0.0, 0.0, 0.0, 0.5)), Rgba::white());
        assert_eq!(out.a, 0.5);
    }

    #[test]
    fn tint_alpha_produces_combined_opacity() {
        let out = shade_once(
            &solid(Rgba::new(0.0, 0.0, 0.0, 0.5)),
            Rgba::new(1.0, 1.0, 1.0, 0.5),
        );
        assert_eq!(out.a, 0.25);
    }

    // ── full pass ─────────────────────────────────────────────────────────

    #[test]
    fn pass_over_attachment_decodes_every_texel() {
        let texture = solid(Rgba::new(0.5, 0.5, 0.5, 1.0));
        let stage = DiffuseStage::untinted(&texture, Sampler::default());
        let mut target = ColorAttachment::new(3, 2);
        crate::stage::run(&stage, &mut target);
        for &texel in target.texels() {
            assert_close(texel.r, 0.214041);
            assert_eq!(texel.a, 1.0);
        }
    }
}
