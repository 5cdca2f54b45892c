//! Texture resources and sampling.
//!
//! Textures store sRGB-encoded RGB with linear alpha, exactly as uploaded.
//! Sampling returns encoded values; transfer decoding happens in the
//! shading stage, not here. What this module does own is coordinate
//! resolution: wrap modes and texel fetch.

mod error;
mod sampler;
mod texture2d;

pub use error::TextureError;
pub use sampler::{Sampler, WrapMode};
pub use texture2d::{Texel, Texture2d};
