//! # CIEDE2000
//!
//! Perceptual color difference and color conversion without an image
//! processing library.
//!
//! This library provides:
//! - The CIEDE2000 (ΔE00) color difference between two CIE L*a*b* colors
//! - Conversion of 8-bit BGR colors to L*a*b* through linear sRGB and XYZ
//!
//! Every Lab value is relative to the D65 white point, the same white used by
//! sRGB. Mixing in Lab data measured under another illuminant gives
//! meaningless distances.
//!
//! ## Example
//!
//! ```rust
//! use ciede2000::{bgr_to_lab, distance, BgrColor, LabColor};
//!
//! let de = distance(
//!     LabColor::new(50.0, 2.6772, -79.7751),
//!     LabColor::new(50.0, 0.0, -82.7485),
//! );
//! assert!((de - 2.0425).abs() < 1e-4);
//!
//! let white = bgr_to_lab(BgrColor::new(255, 255, 255));
//! assert!((white.l - 100.0).abs() < 0.01);
//! ```
//!
//! ## Input contract
//!
//! [`distance`] is total over finite input; non-finite components propagate
//! as `NaN`. [`DistanceCalculator::try_distance`] rejects them with
//! [`ColorError::InvalidInput`] instead. [`bgr_to_lab`] takes `u8` channels,
//! so it cannot receive out-of-range values; wider integers go through
//! [`ColorConverter::bgr_channels_to_lab`], which rejects or clamps according
//! to its [`ChannelPolicy`].

pub mod color;
pub mod config;
pub mod constants;
pub mod error;

pub use color::{
    BgrColor, ChannelPolicy, ColorConverter, DeltaECategory, DistanceCalculator, LabColor,
    ParametricFactors,
};
pub use config::DifferenceConfig;
pub use error::{ColorError, Result};

/// CIEDE2000 ΔE00 between two Lab colors under reference conditions
///
/// Identical colors give exactly 0 and the result does not depend on
/// argument order.
pub fn distance(lab1: LabColor, lab2: LabColor) -> f64 {
    DistanceCalculator::new().distance(lab1, lab2)
}

/// Convert an 8-bit BGR color to Lab (D65)
pub fn bgr_to_lab(bgr: BgrColor) -> LabColor {
    ColorConverter::new().bgr_to_lab(bgr)
}
