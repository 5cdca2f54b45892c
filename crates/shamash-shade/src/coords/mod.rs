//! Geometry vocabulary shared between textures and shading stages.

mod vec2;

pub use vec2::Vec2;
