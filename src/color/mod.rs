//! Color difference and conversion module
//!
//! This module holds the Lab and BGR value types, the CIEDE2000
//! distance calculator, and the BGR to Lab converter.

pub mod conversion;
pub mod difference;
pub mod types;

pub use conversion::{ChannelPolicy, ColorConverter};
pub use difference::{DeltaECategory, DistanceCalculator, ParametricFactors};
pub use types::{BgrColor, LabColor};
