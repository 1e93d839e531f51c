//! Color value types
//!
//! [`LabColor`] and [`BgrColor`] are plain `Copy` values: every conversion
//! produces a new value and nothing is shared between calls. [`XyzColor`]
//! only exists inside a single conversion.

use palette::{white_point::D65, Lab};
use serde::{Deserialize, Serialize};

use crate::{ColorError, Result};

/// A color in the CIE L*a*b* color space, relative to the D65 white point.
///
/// `l` is lightness, nominally 0-100. `a` and `b` are the opponent color
/// axes; they are unbounded but usually within ±128 for visible colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    /// Lightness (L*)
    pub l: f64,
    /// Green-red axis (a*)
    pub a: f64,
    /// Blue-yellow axis (b*)
    pub b: f64,
}

impl LabColor {
    /// Create a new Lab color
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// True when every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }

    /// Reject non-finite components, naming the first offending one.
    ///
    /// `name` prefixes the component in the error, e.g. `lab1` gives `lab1.a`.
    pub fn validate(&self, name: &str) -> Result<()> {
        for (component, value) in [("l", self.l), ("a", self.a), ("b", self.b)] {
            if !value.is_finite() {
                log::trace!("rejecting non-finite {}.{} = {}", name, component, value);
                return Err(ColorError::invalid_input(
                    format!("{}.{}", name, component),
                    value,
                ));
            }
        }
        Ok(())
    }
}

impl From<(f64, f64, f64)> for LabColor {
    fn from((l, a, b): (f64, f64, f64)) -> Self {
        Self::new(l, a, b)
    }
}

impl From<LabColor> for (f64, f64, f64) {
    fn from(color: LabColor) -> Self {
        (color.l, color.a, color.b)
    }
}

impl From<LabColor> for Lab<D65, f64> {
    fn from(color: LabColor) -> Self {
        Lab::new(color.l, color.a, color.b)
    }
}

impl From<Lab<D65, f64>> for LabColor {
    fn from(lab: Lab<D65, f64>) -> Self {
        Self::new(lab.l, lab.a, lab.b)
    }
}

/// An 8-bit color in blue-green-red channel order, as stored in BGR pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BgrColor {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
}

impl BgrColor {
    /// Create a new BGR color
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Build a color from wide integer channels, rejecting any outside 0-255
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ChannelOutOfRange`] for the first channel (in
    /// B, G, R order) that does not fit in a `u8`.
    pub fn try_from_channels(b: i32, g: i32, r: i32) -> Result<Self> {
        let channel = |name: char, value: i32| {
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
                channel: name,
                value,
            })
        };
        Ok(Self::new(channel('B', b)?, channel('G', g)?, channel('R', r)?))
    }

    /// Build a color from wide integer channels, saturating each into 0-255
    pub fn clamped(b: i32, g: i32, r: i32) -> Self {
        // clamp keeps the value inside u8 range, so the cast cannot truncate
        let saturate = |value: i32| value.clamp(0, u8::MAX as i32) as u8;
        Self::new(saturate(b), saturate(g), saturate(r))
    }

    /// Channels reordered as (R, G, B)
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for BgrColor {
    fn from((b, g, r): (u8, u8, u8)) -> Self {
        Self::new(b, g, r)
    }
}

impl From<[u8; 3]> for BgrColor {
    fn from([b, g, r]: [u8; 3]) -> Self {
        Self::new(b, g, r)
    }
}

/// CIE 1931 XYZ tristimulus values, scaled so that the D65 white has Y = 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct XyzColor {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
