//! Color model shared between textures and shading stages.
//!
//! Scope:
//! - straight-alpha RGBA representation (`Rgba`)
//! - the sRGB transfer functions (`srgb`)
//!
//! `Rgba` itself does not record whether its RGB channels are sRGB-encoded
//! or linear; that is positional — texture fetches produce encoded values,
//! everything after [`Rgba::to_linear`] is linear light.

pub mod rgba;
pub mod srgb;

pub use rgba::Rgba;
pub use srgb::{linear_to_srgb, srgb_to_linear};
