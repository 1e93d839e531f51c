//! Colorimetric constants and reference values
//!
//! This module contains compile-time constants for color conversion and
//! color difference, based on the CIE and IEC standards they come from.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65 represents average daylight with a correlated
/// color temperature of 6504K. This is the reference white for sRGB and for
/// every Lab value handled by this crate.
pub mod d65 {
    /// D65 white point in CIE XYZ, normalized so that Y is 100
    pub const WHITE_POINT_XYZ: [f64; 3] = [95.047, 100.000, 108.883];
}

/// Re-export D65 white point at top level for convenience
pub const D65_WHITE_POINT_XYZ: [f64; 3] = d65::WHITE_POINT_XYZ;

/// sRGB transfer function and primaries (IEC 61966-2-1)
pub mod srgb {
    /// Maximum value of an 8-bit channel
    pub const CHANNEL_MAX: f64 = 255.0;

    /// Encoded value below which the transfer function is linear
    pub const LINEAR_THRESHOLD: f64 = 0.04045;

    /// Slope of the linear segment
    pub const LINEAR_SLOPE: f64 = 12.92;

    /// Offset and scale of the power segment
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_SCALE: f64 = 1.055;

    /// Exponent of the power segment
    pub const GAMMA: f64 = 2.4;

    /// Linear channels are scaled to this range before the matrix step
    pub const LINEAR_SCALE: f64 = 100.0;

    /// Linear RGB to XYZ matrix for sRGB primaries under D65, rows X, Y, Z
    pub const RGB_TO_XYZ: [[f64; 3]; 3] = [
        [0.4124, 0.3576, 0.1805],
        [0.2126, 0.7152, 0.0722],
        [0.0193, 0.1192, 0.9505],
    ];
}

/// CIE 1976 L*a*b* nonlinearity
pub mod cielab {
    /// δ = 6/29
    pub const DELTA: f64 = 6.0 / 29.0;

    /// ε = δ³ ≈ 0.008856, below which f(t) is linear
    pub const EPSILON: f64 = DELTA * DELTA * DELTA;

    /// Offset of the linear segment, 4/29
    pub const LINEAR_OFFSET: f64 = 4.0 / 29.0;
}

/// CIEDE2000 (ΔE00) formula constants, from Sharma, Wu and Dalal (2005)
pub mod ciede2000 {
    /// Chroma at which the G and R_C ratios C⁷ / (C⁷ + 25⁷) equal one half
    pub const CHROMA_PIVOT: f64 = 25.0;

    /// T weighting angles in degrees
    pub const T_ANGLE_30_DEG: f64 = 30.0;
    pub const T_ANGLE_6_DEG: f64 = 6.0;
    pub const T_ANGLE_63_DEG: f64 = 63.0;

    /// Rotation term centre and width in degrees
    pub const RT_CENTRE_DEG: f64 = 275.0;
    pub const RT_WIDTH_DEG: f64 = 25.0;
    pub const RT_PEAK_DEG: f64 = 30.0;

    /// S_L weighting: lightness midpoint and denominator offset
    pub const SL_L_MIDPOINT: f64 = 50.0;
    pub const SL_DENOM_OFFSET: f64 = 20.0;
}

/// Perceptual thresholds on ΔE00
pub mod thresholds {
    /// Below this, a difference is not perceptible
    pub const IMPERCEPTIBLE_DELTA_E: f64 = 1.0;

    /// Below this, a difference is only visible on close inspection
    pub const BARELY_PERCEPTIBLE_DELTA_E: f64 = 2.0;

    /// Below this, colors are noticeably different but clearly related
    pub const NOTICEABLE_DELTA_E: f64 = 10.0;

    /// Below this, colors are more similar than opposite
    pub const DISTINCT_DELTA_E: f64 = 50.0;

    /// Default tolerance for deciding that two colors match
    pub const JUST_NOTICEABLE_DELTA_E: f64 = 2.0;
}
