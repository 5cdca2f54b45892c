use std::fmt;

/// An error constructing a texture resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    /// Pixel payload length does not match `width * height` texels.
    SizeMismatch { expected: usize, actual: usize },
    /// Zero-sized textures cannot be sampled.
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::SizeMismatch { expected, actual } => write!(
                f,
                "texture payload length mismatch: expected {expected} texels, got {actual}"
            ),
            TextureError::ZeroDimension { width, height } => {
                write!(f, "texture has a zero dimension: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for TextureError {}
