//! Color space conversion utilities
//!
//! Converts 8-bit BGR colors to CIE L*a*b* through linear sRGB and XYZ:
//! - inverse sRGB companding of each channel
//! - linear RGB to XYZ with the sRGB/D65 matrix
//! - normalization against the D65 white point
//! - the CIELAB cube-root nonlinearity with its linear segment near black

use serde::{Deserialize, Serialize};

use super::types::{BgrColor, LabColor, XyzColor};
use crate::constants::{cielab, d65, srgb};
use crate::Result;

/// What to do with integer channels outside 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelPolicy {
    /// Fail with [`ColorError::ChannelOutOfRange`](crate::ColorError::ChannelOutOfRange)
    #[default]
    Reject,
    /// Saturate the channel into 0-255
    Clamp,
}

/// BGR to Lab converter using the D65 reference white
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorConverter {
    policy: ChannelPolicy,
}

impl ColorConverter {
    /// Create a converter that rejects out-of-range channels
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with an explicit out-of-range channel policy
    pub fn with_policy(policy: ChannelPolicy) -> Self {
        Self { policy }
    }

    /// The policy applied by [`bgr_channels_to_lab`](Self::bgr_channels_to_lab)
    pub fn policy(&self) -> ChannelPolicy {
        self.policy
    }

    /// Convert an 8-bit BGR color to Lab
    ///
    /// Total for every input: the `u8` channels already satisfy the 0-255 contract.
    pub fn bgr_to_lab(&self, bgr: BgrColor) -> LabColor {
        xyz_to_lab(bgr_to_xyz(bgr))
    }

    /// Convert wide integer BGR channels to Lab
    ///
    /// # Errors
    ///
    /// With [`ChannelPolicy::Reject`], returns
    /// [`ColorError::ChannelOutOfRange`](crate::ColorError::ChannelOutOfRange)
    /// if any channel is outside 0-255. [`ChannelPolicy::Clamp`] never fails.
    pub fn bgr_channels_to_lab(&self, b: i32, g: i32, r: i32) -> Result<LabColor> {
        let bgr = match self.policy {
            ChannelPolicy::Reject => BgrColor::try_from_channels(b, g, r)?,
            ChannelPolicy::Clamp => {
                let clamped = BgrColor::clamped(b, g, r);
                if (clamped.b as i32, clamped.g as i32, clamped.r as i32) != (b, g, r) {
                    log::warn!(
                        "clamped out-of-range BGR channels ({}, {}, {}) to ({}, {}, {})",
                        b, g, r, clamped.b, clamped.g, clamped.r
                    );
                }
                clamped
            }
        };
        Ok(self.bgr_to_lab(bgr))
    }
}

/// Inverse sRGB companding of a channel normalized to [0, 1]
fn srgb_to_linear(channel: f64) -> f64 {
    if channel > srgb::LINEAR_THRESHOLD {
        ((channel + srgb::GAMMA_OFFSET) / srgb::GAMMA_SCALE).powf(srgb::GAMMA)
    } else {
        channel / srgb::LINEAR_SLOPE
    }
}

/// BGR to XYZ, scaled so that white has Y = 100
fn bgr_to_xyz(bgr: BgrColor) -> XyzColor {
    // The matrix expects R, G, B order
    let rgb = bgr
        .to_rgb()
        .map(|c| srgb_to_linear(f64::from(c) / srgb::CHANNEL_MAX) * srgb::LINEAR_SCALE);

    let [x, y, z] = srgb::RGB_TO_XYZ.map(|row| row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2]);
    XyzColor { x, y, z }
}

/// CIELAB nonlinearity, linear below ε = (6/29)³ to avoid the cube-root slope near black
fn lab_f(t: f64) -> f64 {
    if t > cielab::EPSILON {
        t.cbrt()
    } else {
        t / (3.0 * cielab::DELTA * cielab::DELTA) + cielab::LINEAR_OFFSET
    }
}

/// XYZ to Lab against the D65 white point
fn xyz_to_lab(xyz: XyzColor) -> LabColor {
    let [xn, yn, zn] = d65::WHITE_POINT_XYZ;
    let fx = lab_f(xyz.x / xn);
    let fy = lab_f(xyz.y / yn);
    let fz = lab_f(xyz.z / zn);

    LabColor {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}
