use core::fmt;

use serde::{Deserialize, Serialize};

/// Chemical species tracked by at least one national scale.
///
/// All concentrations cross the API boundary in µg/m³. For scales whose
/// published tables are expressed in ppb/ppm (United States, South Korea)
/// the fixed molar-mass-derived factors below are applied declaratively by
/// the scale definition; callers never convert units themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pollutant {
    /// Carbon monoxide.
    Co,
    /// Ammonia.
    Nh3,
    /// Nitric oxide.
    No,
    /// Nitrogen dioxide.
    No2,
    /// Ground-level ozone.
    O3,
    /// Lead.
    Pb,
    /// Sulfur dioxide.
    So2,
    /// Coarse particulate matter (< 10 µm).
    Pm10,
    /// Fine particulate matter (< 2.5 µm).
    Pm2_5,
}

impl Pollutant {
    /// µg/m³ per ppb at 25 °C / 1 atm (molecular weight / 24.45).
    ///
    /// Documented for callers holding ppb readings; the particulate classes
    /// are measured gravimetrically and have no molar conversion.
    pub const fn ug_per_ppb(self) -> Option<f64> {
        match self {
            Pollutant::Co => Some(1.1456),
            Pollutant::Nh3 => Some(0.6966),
            Pollutant::No => Some(1.2274),
            Pollutant::No2 => Some(1.8816),
            Pollutant::O3 => Some(1.9632),
            Pollutant::Pb => Some(8.4912),
            Pollutant::So2 => Some(8.4744),
            Pollutant::Pm10 | Pollutant::Pm2_5 => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Pollutant::Co => "CO",
            Pollutant::Nh3 => "NH3",
            Pollutant::No => "NO",
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::Pb => "Pb",
            Pollutant::So2 => "SO2",
            Pollutant::Pm10 => "PM10",
            Pollutant::Pm2_5 => "PM2.5",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Averaging window a reading was computed over.
///
/// The caller is responsible for supplying values already averaged over the
/// window the chosen scale demands; no windowing happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Window {
    Min15,
    H1,
    H3,
    H4,
    H8,
    H24,
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let txt = match self {
            Window::Min15 => "15min",
            Window::H1 => "1h",
            Window::H3 => "3h",
            Window::H4 => "4h",
            Window::H8 => "8h",
            Window::H24 => "24h",
        };
        f.write_str(txt)
    }
}

/// The caller-supplied reading set for one evaluation.
///
/// A reading that was never set is "not supplied" — distinct from an
/// explicit zero, which is a valid physical measurement. At most a couple
/// dozen readings exist per call, so a flat vector beats a hash map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Concentrations {
    readings: Vec<(Pollutant, Window, f64)>,
}

impl Concentrations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a later value for the same key replaces the
    /// earlier one.
    pub fn with(mut self, pollutant: Pollutant, window: Window, value: f64) -> Self {
        self.set(pollutant, window, value);
        self
    }

    pub fn set(&mut self, pollutant: Pollutant, window: Window, value: f64) {
        if let Some(slot) = self
            .readings
            .iter_mut()
            .find(|(p, w, _)| *p == pollutant && *w == window)
        {
            slot.2 = value;
        } else {
            self.readings.push((pollutant, window, value));
        }
    }

    pub fn get(&self, pollutant: Pollutant, window: Window) -> Option<f64> {
        self.readings
            .iter()
            .find(|(p, w, _)| *p == pollutant && *w == window)
            .map(|(_, _, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_reading_is_none_not_zero() {
        let c = Concentrations::new().with(Pollutant::No2, Window::H1, 0.0);
        assert_eq!(c.get(Pollutant::No2, Window::H1), Some(0.0));
        assert_eq!(c.get(Pollutant::No2, Window::H24), None);
        assert_eq!(c.get(Pollutant::O3, Window::H1), None);
    }

    #[test]
    fn set_replaces_existing_key() {
        let mut c = Concentrations::new();
        c.set(Pollutant::Pm2_5, Window::H24, 10.0);
        c.set(Pollutant::Pm2_5, Window::H24, 12.5);
        assert_eq!(c.get(Pollutant::Pm2_5, Window::H24), Some(12.5));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn particulates_have_no_molar_factor() {
        assert!(Pollutant::Pm10.ug_per_ppb().is_none());
        assert!(Pollutant::Pm2_5.ug_per_ppb().is_none());
        assert_eq!(Pollutant::No2.ug_per_ppb(), Some(1.8816));
    }
}
