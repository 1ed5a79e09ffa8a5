//! Air quality index computation across national scales.
//!
//! Converts pollutant concentrations into the index value (and descriptor
//! label) defined by ten national and supranational scales: Australia's
//! AQI, Canada's AQHI, the European CAQI, Hong Kong's AQHI, India's AQI,
//! Mainland China's AQI, Singapore's PSI, South Korea's CAI, the United
//! Kingdom's DAQI and the United States' AQI.
//!
//! All concentrations are supplied in µg/m³, keyed by pollutant and
//! averaging window. Scales whose regulations are written in ppm or ppb
//! carry their own declarative conversion, including the EPA truncation
//! step, so callers never pre-convert.
//!
//! ```
//! use aqindex::{compute_aqi, describe_aqi, Concentrations, Pollutant, ScaleId, Window};
//!
//! let readings = Concentrations::new()
//!     .with(Pollutant::No2, Window::H1, 60.0)
//!     .with(Pollutant::O3, Window::H1, 90.0)
//!     .with(Pollutant::Pm10, Window::H1, 40.0)
//!     .with(Pollutant::Pm2_5, Window::H1, 20.0);
//!
//! let aqi = compute_aqi(ScaleId::Europe, &readings).unwrap();
//! assert_eq!(aqi, 40);
//! assert_eq!(describe_aqi(ScaleId::Europe, aqi).unwrap(), "Low");
//! ```

#![forbid(unsafe_code)]

mod descriptor;
mod error;
mod piecewise;
mod pollutant;
mod risk;
mod scale;
mod tables;

pub use descriptor::{DescriptorBand, DescriptorTable};
pub use error::AqiError;
pub use piecewise::Breakpoint;
pub use pollutant::{Concentrations, Pollutant, Window};
pub use risk::{ExponentialScale, RiskBand, RiskFinalize, RiskTerm};
pub use scale::{Conversion, Formula, Gate, Method, ScaleDefinition, ScaleEntry, ScaleId};

/// Computes the index value for one scale from a set of µg/m³ readings.
///
/// Readings a scale does not use are ignored. A reading the scale requires
/// but cannot find yields [`AqiError::MissingPollutant`]; if every
/// applicable pollutant is gated out the result is
/// [`AqiError::InsufficientData`]. A concentration beyond the top of a
/// scale's tables returns the scale's fixed "beyond index" sentinel
/// (`max_index + 1`), never an extrapolated value.
pub fn compute_aqi(scale: ScaleId, readings: &Concentrations) -> Result<i32, AqiError> {
    scale::evaluate(scale.definition(), readings)
}

/// Maps a previously computed index value to the scale's descriptor label.
///
/// Values above the scale's top band fall into its final (open-ended)
/// band; negative values are rejected with [`AqiError::InvalidAqi`].
pub fn describe_aqi(scale: ScaleId, aqi: i32) -> Result<&'static str, AqiError> {
    descriptor::describe(scale.definition().descriptors, aqi)
}
