//! The sRGB transfer functions (IEC 61966-2-1).
//!
//! Both directions are total over all finite inputs and never clamp:
//! out-of-[0, 1] values (HDR content, additive blending artifacts) go
//! through the same piecewise formula. Clamping is a policy decision that
//! belongs to whatever pipeline stage quantizes for output.

/// Encoded-domain breakpoint of the piecewise EOTF.
const EOTF_CUTOFF: f32 = 0.04045;
/// Linear-domain breakpoint of the piecewise OETF.
const OETF_CUTOFF: f32 = 0.0031308;

/// Decodes one sRGB-encoded channel to linear light (the EOTF).
///
/// Monotonically increasing and continuous at the breakpoint; both branches
/// agree at `x = 0.04045` within floating-point tolerance. Not idempotent —
/// this is a one-shot decode, not a toggle.
#[inline]
pub fn srgb_to_linear(x: f32) -> f32 {
    if x <= EOTF_CUTOFF {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes one linear-light channel to sRGB (the OETF, inverse of
/// [`srgb_to_linear`]).
#[inline]
pub fn linear_to_srgb(x: f32) -> f32 {
    if x <= OETF_CUTOFF {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}
