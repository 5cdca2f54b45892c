//! Output color attachment.
//!
//! The attachment is the `FragColor` destination: a linear-light f32 RGBA
//! buffer the stage executor writes exactly once per texel. Values are
//! stored unclamped; readback helpers that quantize for 8-bit export are
//! the one place clamping happens.

use bytemuck::cast_slice;

use crate::color::Rgba;
use crate::texture::Texel;

/// Linear-light render target written by [`stage::run`](crate::stage::run).
#[derive(Debug, Clone)]
pub struct ColorAttachment {
    width: u32,
    height: u32,
    texels: Vec<Rgba>,
}

impl ColorAttachment {
    /// Creates an attachment cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texels: vec![Rgba::transparent(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Writes one texel. The executor calls this exactly once per texel
    /// per pass; nothing mutates the value after that write.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Rgba) {
        debug_assert!(x < self.width && y < self.height);
        self.texels[y as usize * self.width as usize + x as usize] = color;
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        debug_assert!(x < self.width && y < self.height);
        self.texels[y as usize * self.width as usize + x as usize]
    }

    /// Linear-light texels, row-major.
    #[inline]
    pub fn texels(&self) -> &[Rgba] {
        &self.texels
    }

    /// Quantizes to packed 8-bit RGBA after re-encoding RGB to sRGB.
    ///
    /// This is the display-referred export path. Quantization clamps to
    /// [0, 1] — the only clamp in the pipeline, applied at the last stage.
    pub fn to_srgb8(&self) -> Vec<u8> {
        self.quantize(|c| c.to_srgb())
    }

    /// Quantizes to packed 8-bit RGBA without re-encoding.
    ///
    /// Keeps the payload linear-light; dark tones will band at 8 bits.
    pub fn to_linear8(&self) -> Vec<u8> {
        self.quantize(|c| c)
    }

    fn quantize(&self, encode: impl Fn(Rgba) -> Rgba) -> Vec<u8> {
        let packed: Vec<Texel> = self
            .texels
            .iter()
            .map(|&c| {
                let c = encode(c);
                Texel {
                    r: quantize_channel(c.r),
                    g: quantize_channel(c.g),
                    b: quantize_channel(c.b),
                    a: quantize_channel(c.a),
                }
            })
            .collect();
        cast_slice(&packed).to_vec()
    }
}

#[inline]
fn quantize_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
