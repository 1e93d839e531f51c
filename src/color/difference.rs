//! CIEDE2000 color difference
//!
//! Implements ΔE00 as published by Sharma, Wu and Dalal, "The CIEDE2000
//! Color-Difference Formula: Implementation Notes, Supplementary Test Data,
//! and Mathematical Observations" (2005).
//!
//! Hue angles are carried in degrees between steps and converted to radians
//! only at each trigonometric call.

use serde::{Deserialize, Serialize};

use super::types::LabColor;
use crate::constants::{ciede2000, thresholds};
use crate::Result;

/// Parametric weighting factors k_L, k_C and k_H
///
/// They divide the lightness, chroma and hue terms respectively. All 1.0
/// under the reference conditions of the formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParametricFactors {
    pub k_l: f64,
    pub k_c: f64,
    pub k_h: f64,
}

impl Default for ParametricFactors {
    fn default() -> Self {
        Self::reference()
    }
}

impl ParametricFactors {
    /// Reference conditions (graphic arts): k_L = k_C = k_H = 1
    pub const fn reference() -> Self {
        Self { k_l: 1.0, k_c: 1.0, k_h: 1.0 }
    }

    /// Textile industry convention: k_L = 2
    pub const fn textiles() -> Self {
        Self { k_l: 2.0, k_c: 1.0, k_h: 1.0 }
    }

    /// Check that every factor is finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("k_l", self.k_l), ("k_c", self.k_c), ("k_h", self.k_h)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(crate::ColorError::invalid_input(name, value));
            }
        }
        Ok(())
    }
}

/// Perceptual category of a ΔE00 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaECategory {
    /// ΔE00 < 1.0
    Imperceptible,
    /// ΔE00 1.0-2.0, visible on close inspection
    BarelyPerceptible,
    /// ΔE00 2.0-10.0, visible at a glance
    Noticeable,
    /// ΔE00 10.0-50.0
    Distinct,
    /// ΔE00 >= 50.0, nearly opposite colors
    VeryDistinct,
}

impl DeltaECategory {
    /// Categorize a ΔE00 value
    pub fn from_delta_e(delta_e: f64) -> Self {
        if delta_e < thresholds::IMPERCEPTIBLE_DELTA_E {
            Self::Imperceptible
        } else if delta_e < thresholds::BARELY_PERCEPTIBLE_DELTA_E {
            Self::BarelyPerceptible
        } else if delta_e < thresholds::NOTICEABLE_DELTA_E {
            Self::Noticeable
        } else if delta_e < thresholds::DISTINCT_DELTA_E {
            Self::Distinct
        } else {
            Self::VeryDistinct
        }
    }
}

/// CIEDE2000 distance calculator
///
/// Stateless apart from its parametric factors; safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceCalculator {
    weights: ParametricFactors,
}

impl DistanceCalculator {
    /// Create a calculator with the reference parametric factors
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom parametric factors
    ///
    /// The factors are not checked here; [`try_distance`](Self::try_distance)
    /// rejects zero, negative or non-finite factors.
    pub fn with_weights(weights: ParametricFactors) -> Self {
        Self { weights }
    }

    /// The parametric factors in use
    pub fn weights(&self) -> ParametricFactors {
        self.weights
    }

    /// Compute ΔE00 between two Lab colors
    ///
    /// Total over finite input and symmetric in its arguments; identical
    /// colors give exactly 0. Non-finite components propagate as `NaN`
    /// rather than failing; use [`try_distance`](Self::try_distance) to
    /// reject them instead.
    pub fn distance(&self, lab1: LabColor, lab2: LabColor) -> f64 {
        let LabColor { l: l1, a: a1, b: b1 } = lab1;
        let LabColor { l: l2, a: a2, b: b2 } = lab2;

        // Chroma correction of the a* axis
        let c1_ab = a1.hypot(b1);
        let c2_ab = a2.hypot(b2);
        let g = 0.5 * (1.0 - seventh_power_ratio(c1_ab / 2.0 + c2_ab / 2.0).sqrt());

        let a1_prime = (1.0 + g) * a1;
        let a2_prime = (1.0 + g) * a2;

        let c1_prime = a1_prime.hypot(b1);
        let c2_prime = a2_prime.hypot(b2);

        let h1_prime = hue_angle(a1_prime, b1);
        let h2_prime = hue_angle(a2_prime, b2);

        let delta_l_prime = l2 - l1;
        let delta_c_prime = c2_prime - c1_prime;

        // Hue is undefined for a neutral color, so any hue difference is dropped
        let achromatic = c1_prime == 0.0 || c2_prime == 0.0;
        let delta_h_prime = if achromatic {
            0.0
        } else {
            let diff = h2_prime - h1_prime;
            if diff > 180.0 {
                diff - 360.0
            } else if diff < -180.0 {
                diff + 360.0
            } else {
                diff
            }
        };
        // Rooted separately so the chroma product cannot overflow to inf
        let delta_big_h_prime =
            2.0 * c1_prime.sqrt() * c2_prime.sqrt() * (delta_h_prime / 2.0).to_radians().sin();

        let l_prime_mean = l1 / 2.0 + l2 / 2.0;
        let c_prime_mean = c1_prime / 2.0 + c2_prime / 2.0;

        let h_prime_mean = if achromatic {
            h1_prime + h2_prime
        } else if (h1_prime - h2_prime).abs() <= 180.0 {
            (h1_prime + h2_prime) / 2.0
        } else if h1_prime + h2_prime < 360.0 {
            (h1_prime + h2_prime + 360.0) / 2.0
        } else {
            (h1_prime + h2_prime - 360.0) / 2.0
        };

        let t = 1.0 - 0.17 * (h_prime_mean - ciede2000::T_ANGLE_30_DEG).to_radians().cos()
            + 0.24 * (2.0 * h_prime_mean).to_radians().cos()
            + 0.32 * (3.0 * h_prime_mean + ciede2000::T_ANGLE_6_DEG).to_radians().cos()
            - 0.20 * (4.0 * h_prime_mean - ciede2000::T_ANGLE_63_DEG).to_radians().cos();

        let l_offset_sq = (l_prime_mean - ciede2000::SL_L_MIDPOINT).powi(2);
        let s_l = 1.0 + 0.015 * l_offset_sq / (ciede2000::SL_DENOM_OFFSET + l_offset_sq).sqrt();
        let s_c = 1.0 + 0.045 * c_prime_mean;
        let s_h = 1.0 + 0.015 * c_prime_mean * t;

        // Rotation term for the blue region
        let delta_theta = ciede2000::RT_PEAK_DEG
            * (-((h_prime_mean - ciede2000::RT_CENTRE_DEG) / ciede2000::RT_WIDTH_DEG).powi(2)).exp();
        let r_c = 2.0 * seventh_power_ratio(c_prime_mean).sqrt();
        let r_t = -r_c * (2.0 * delta_theta).to_radians().sin();

        let term_l = delta_l_prime / (self.weights.k_l * s_l);
        let term_c = delta_c_prime / (self.weights.k_c * s_c);
        let term_h = delta_big_h_prime / (self.weights.k_h * s_h);

        (term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h).sqrt()
    }

    /// Compute ΔE00, rejecting non-finite input
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidInput`](crate::ColorError::InvalidInput)
    /// naming the first non-finite component, e.g. `lab2.b`, or the first
    /// parametric factor that is not finite and positive.
    pub fn try_distance(&self, lab1: LabColor, lab2: LabColor) -> Result<f64> {
        self.weights.validate()?;
        lab1.validate("lab1")?;
        lab2.validate("lab2")?;
        Ok(self.distance(lab1, lab2))
    }

    /// Perceptual category of the difference between two colors
    pub fn categorize(&self, lab1: LabColor, lab2: LabColor) -> DeltaECategory {
        DeltaECategory::from_delta_e(self.distance(lab1, lab2))
    }

    /// True when the colors differ by at most `tolerance` ΔE00
    pub fn is_match(&self, lab1: LabColor, lab2: LabColor, tolerance: f64) -> bool {
        self.distance(lab1, lab2) <= tolerance
    }
}

/// sqrt-free part of the G and R_C terms: C⁷ / (C⁷ + 25⁷)
///
/// Evaluated as 1 / (1 + (25 / C)⁷), which stays finite for any finite chroma.
fn seventh_power_ratio(chroma: f64) -> f64 {
    if chroma == 0.0 {
        return 0.0;
    }
    1.0 / (1.0 + (ciede2000::CHROMA_PIVOT / chroma).powi(7))
}

/// Hue angle in degrees, in [0, 360); 0 at the neutral axis where atan2 is undefined
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    let h = if h < 0.0 { h + 360.0 } else { h };
    // A tiny negative angle rounds up to exactly 360 above
    if h >= 360.0 {
        h - 360.0
    } else {
        h
    }
}
