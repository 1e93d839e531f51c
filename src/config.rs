//! Configuration for color difference and conversion.
//!
//! Groups the tunable parameters of the library: the CIEDE2000 parametric
//! factors, the policy for out-of-range BGR channels, and the tolerance used
//! when deciding that two colors match.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use ciede2000::DifferenceConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = DifferenceConfig::from_json_file(Path::new("difference.json"))?;
//!
//! // Or use defaults
//! let config = DifferenceConfig::default();
//! let calculator = config.calculator();
//! # Ok::<(), ciede2000::ColorError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::{ChannelPolicy, ColorConverter, DistanceCalculator, LabColor, ParametricFactors};
use crate::constants::thresholds;
use crate::{ColorError, Result};

/// Complete configuration for comparing colors.
///
/// Every field has a default, so a JSON file only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifferenceConfig {
    /// CIEDE2000 parametric factors k_L, k_C, k_H
    pub weights: ParametricFactors,

    /// Handling of integer BGR channels outside 0-255
    pub channel_policy: ChannelPolicy,

    /// Maximum ΔE00 at which two colors are considered a match
    pub match_tolerance: f64,
}

impl Default for DifferenceConfig {
    fn default() -> Self {
        Self {
            weights: ParametricFactors::reference(),
            channel_policy: ChannelPolicy::Reject,
            match_tolerance: thresholds::JUST_NOTICEABLE_DELTA_E,
        }
    }
}

impl DifferenceConfig {
    /// Check the parametric factors and the tolerance
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if !self.match_tolerance.is_finite() || self.match_tolerance < 0.0 {
            return Err(ColorError::invalid_input("match_tolerance", self.match_tolerance));
        }
        Ok(())
    }

    /// Distance calculator using these parametric factors
    pub fn calculator(&self) -> DistanceCalculator {
        DistanceCalculator::with_weights(self.weights)
    }

    /// Converter using this channel policy
    pub fn converter(&self) -> ColorConverter {
        ColorConverter::with_policy(self.channel_policy)
    }

    /// Whether two colors match within the configured tolerance
    pub fn is_match(&self, lab1: LabColor, lab2: LabColor) -> bool {
        self.calculator().is_match(lab1, lab2, self.match_tolerance)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ColorError::config("Invalid configuration JSON", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        log::debug!("loading difference config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColorError::config(format!("Failed to read {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        log::debug!("writing difference config to {}", path.display());
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            ColorError::config(format!("Failed to write {}", path.display()), e)
        })
    }
}
