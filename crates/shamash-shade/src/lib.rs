//! Shamash shading crate.
//!
//! This crate owns the CPU fragment-shading pieces used by higher layers:
//! texture resources, the color/transfer-function model, and the diffuse
//! fragment stage that samples sRGB-encoded textures into linear light.
//!
//! Convention:
//! - Texture storage holds sRGB-encoded RGB plus linear alpha.
//! - Everything downstream of [`stage`] is linear light.

pub mod color;
pub mod coords;
pub mod stage;
pub mod target;
pub mod texture;

pub mod logging;
