//! Fragment shading stages and their execution model.
//!
//! A stage is a pure per-fragment function: `&self` plus the per-invocation
//! varyings in, one color out. Stages hold their draw-constant uniforms and
//! borrow their resources read-only, so a single stage value can shade any
//! number of fragments in any order with no synchronization. The executor
//! here runs them one texel at a time; iteration order is unobservable.

mod diffuse;

pub use diffuse::DiffuseStage;

use crate::coords::Vec2;
use crate::color::Rgba;
use crate::target::ColorAttachment;

/// Per-invocation varyings handed to a stage by the executor (or by a
/// rasterizer interpolating vertex outputs).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FragmentInput {
    /// Interpolated texture coordinate for this fragment.
    pub tex_coord: Vec2,
}

/// A fragment shading stage.
///
/// Implementations must be pure: no interior mutability observable across
/// invocations, no failure modes — a total function over its numeric domain.
pub trait FragmentStage {
    fn shade(&self, input: FragmentInput) -> Rgba;
}

/// Shades every texel of the attachment and writes each output once.
///
/// The texture coordinate for texel `(x, y)` is the texel center,
/// `((x + 0.5) / width, (y + 0.5) / height)`.
pub fn run<S: FragmentStage>(stage: &S, target: &mut ColorAttachment) {
    let width = target.width();
    let height = target.height();
    log::debug!("fragment pass: {width}x{height}");

    let inv_w = 1.0 / width as f32;
    let inv_h = 1.0 / height as f32;
    for y in 0..height {
        for x in 0..width {
            let input = FragmentInput {
                tex_coord: Vec2::new((x as f32 + 0.5) * inv_w, (y as f32 + 0.5) * inv_h),
            };
            target.put(x, y, stage.shade(input));
        }
    }
}
