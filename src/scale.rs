//! Scale definitions and the evaluator that dispatches one computation
//! strategy per pollutant and aggregates the sub-indices.
//!
//! Each national scale is a declarative value consumed by one generic
//! evaluator; the per-scale branching ladders live in the tables, not in
//! control flow.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::DescriptorTable;
use crate::error::AqiError;
use crate::piecewise::{self, Breakpoint};
use crate::pollutant::{Concentrations, Pollutant, Window};
use crate::risk::{self, ExponentialScale};
use crate::tables;

/// The fixed set of supported national/regional scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleId {
    Australia,
    Canada,
    Europe,
    HongKong,
    India,
    MainlandChina,
    Singapore,
    SouthKorea,
    UnitedKingdom,
    UnitedStates,
}

impl ScaleId {
    pub const ALL: [ScaleId; 10] = [
        ScaleId::Australia,
        ScaleId::Canada,
        ScaleId::Europe,
        ScaleId::HongKong,
        ScaleId::India,
        ScaleId::MainlandChina,
        ScaleId::Singapore,
        ScaleId::SouthKorea,
        ScaleId::UnitedKingdom,
        ScaleId::UnitedStates,
    ];

    /// Nominal maximum defined index; results above it are the scale's
    /// "above top of scale" sentinel (typically `max_index + 1`).
    pub fn max_index(self) -> i32 {
        self.definition().max_index
    }

    pub(crate) fn definition(self) -> &'static ScaleDefinition {
        match self {
            ScaleId::Australia => &tables::AUSTRALIA,
            ScaleId::Canada => &tables::CANADA,
            ScaleId::Europe => &tables::EUROPE,
            ScaleId::HongKong => &tables::HONG_KONG,
            ScaleId::India => &tables::INDIA,
            ScaleId::MainlandChina => &tables::MAINLAND_CHINA,
            ScaleId::Singapore => &tables::SINGAPORE,
            ScaleId::SouthKorea => &tables::SOUTH_KOREA,
            ScaleId::UnitedKingdom => &tables::UNITED_KINGDOM,
            ScaleId::UnitedStates => &tables::UNITED_STATES,
        }
    }
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScaleId::Australia => "Australia AQI",
            ScaleId::Canada => "Canada AQHI",
            ScaleId::Europe => "Europe CAQI",
            ScaleId::HongKong => "Hong Kong AQHI",
            ScaleId::India => "India AQI",
            ScaleId::MainlandChina => "Mainland China AQI",
            ScaleId::Singapore => "Singapore PSI",
            ScaleId::SouthKorea => "South Korea CAI",
            ScaleId::UnitedKingdom => "United Kingdom DAQI",
            ScaleId::UnitedStates => "United States AQI",
        };
        f.write_str(name)
    }
}

/// Declarative µg/m³ → published-unit conversion, including the EPA
/// truncation-to-reporting-precision step.
#[derive(Debug, Clone, Copy)]
pub struct Conversion {
    /// µg/m³ per published unit (e.g. 1963.2 for O3 in ppm).
    pub divisor: f64,
    /// Decimal places kept; the remainder is truncated, not rounded.
    pub decimals: u32,
}

impl Conversion {
    fn apply(&self, raw: f64) -> f64 {
        let v = raw / self.divisor;
        let n = 10f64.powi(self.decimals as i32);
        (v * n).floor() / n
    }
}

/// Validity condition attached to one entry. Readings excluded by a gate
/// produce no sub-index at all — not a zero.
#[derive(Debug, Clone, Copy)]
pub enum Gate {
    Always,
    /// Converted value above the limit: this window's sub-index is not
    /// defined (another window takes over, or the pollutant drops out).
    SkipAbove(f64),
    /// Converted value below the limit: the scale defines no sub-index in
    /// this range (e.g. Singapore NO2 below 1130 µg/m³).
    SkipBelow(f64),
    /// Applies only while another raw reading exceeds `at_most` (or is
    /// absent); e.g. US SO2-24h takes over from SO2-1h past 185 ppb.
    UnlessOther {
        pollutant: Pollutant,
        window: Window,
        at_most: f64,
    },
}

/// Per-pollutant computation strategy.
#[derive(Debug, Clone, Copy)]
pub enum Method {
    Breakpoints(&'static [Breakpoint]),
    /// NEPM percentage-of-standard with the given µg/m³ standard.
    Ratio(f64),
}

/// One pollutant/window slot of a scale definition.
#[derive(Debug, Clone, Copy)]
pub struct ScaleEntry {
    pub pollutant: Pollutant,
    pub window: Window,
    /// Mandatory entries fail with `MissingPollutant` when absent;
    /// optional ones are skipped.
    pub required: bool,
    pub gate: Gate,
    pub convert: Option<Conversion>,
    pub method: Method,
}

/// Aggregation strategy for the whole scale.
#[derive(Debug, Clone, Copy)]
pub enum Formula {
    /// Worst pollutant dominates; an out-of-table sub-index short-circuits
    /// to the ceiling-plus-one sentinel.
    SubIndexMax {
        entries: &'static [ScaleEntry],
        above_table: i32,
    },
    /// Risk is combined across pollutants before the final mapping.
    Exponential(ExponentialScale),
}

/// Immutable per-scale record; all ten live as statics in [`tables`].
#[derive(Debug, Clone, Copy)]
pub struct ScaleDefinition {
    pub id: ScaleId,
    pub formula: Formula,
    pub max_index: i32,
    pub descriptors: DescriptorTable,
}

/// Outcome of one entry before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubIndex {
    /// Optional reading absent, or excluded by the entry's gate.
    Skipped,
    /// Beyond the last breakpoint; never extrapolated.
    AboveTable,
    Value(i32),
}

/// Compute one entry's sub-index in isolation.
pub(crate) fn sub_index(
    scale: ScaleId,
    entry: &ScaleEntry,
    readings: &Concentrations,
) -> Result<SubIndex, AqiError> {
    let raw = match readings.get(entry.pollutant, entry.window) {
        Some(v) => v,
        None if entry.required => {
            return Err(AqiError::MissingPollutant {
                scale,
                pollutant: entry.pollutant,
                window: entry.window,
            })
        }
        None => return Ok(SubIndex::Skipped),
    };
    if !raw.is_finite() || raw < 0.0 {
        return Err(AqiError::InvalidInput { value: raw });
    }

    let value = match &entry.convert {
        Some(conv) => conv.apply(raw),
        None => raw,
    };

    match entry.gate {
        Gate::SkipAbove(limit) if value > limit => return Ok(SubIndex::Skipped),
        Gate::SkipBelow(limit) if value < limit => return Ok(SubIndex::Skipped),
        Gate::UnlessOther {
            pollutant,
            window,
            at_most,
        } => match readings.get(pollutant, window) {
            Some(other) if other <= at_most => return Ok(SubIndex::Skipped),
            _ => {}
        },
        _ => {}
    }

    match entry.method {
        Method::Breakpoints(table) => match piecewise::interpolate(table, value)? {
            Some(idx) => Ok(SubIndex::Value(idx)),
            None => Ok(SubIndex::AboveTable),
        },
        Method::Ratio(standard) => Ok(SubIndex::Value(piecewise::ratio_index(standard, value)?)),
    }
}

/// Evaluate one scale over one reading set.
pub fn evaluate(def: &ScaleDefinition, readings: &Concentrations) -> Result<i32, AqiError> {
    match &def.formula {
        Formula::Exponential(exp) => risk::evaluate(def.id, exp, readings),
        Formula::SubIndexMax {
            entries,
            above_table,
        } => {
            let mut worst: Option<i32> = None;
            for entry in *entries {
                match sub_index(def.id, entry, readings)? {
                    SubIndex::Skipped => {}
                    SubIndex::AboveTable => return Ok(*above_table),
                    SubIndex::Value(idx) => {
                        worst = Some(worst.map_or(idx, |w| w.max(idx)));
                    }
                }
            }
            worst.ok_or(AqiError::InsufficientData { scale: def.id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DescriptorBand;

    static TWO_BAND: [Breakpoint; 2] = [
        Breakpoint { index_lo: 0, index_hi: 50, conc_lo: 0.0, conc_hi: 100.0 },
        Breakpoint { index_lo: 50, index_hi: 100, conc_lo: 100.0, conc_hi: 200.0 },
    ];

    static ENTRIES: [ScaleEntry; 2] = [
        ScaleEntry {
            pollutant: Pollutant::No2,
            window: Window::H1,
            required: true,
            gate: Gate::Always,
            convert: None,
            method: Method::Breakpoints(&TWO_BAND),
        },
        ScaleEntry {
            pollutant: Pollutant::O3,
            window: Window::H1,
            required: false,
            gate: Gate::SkipAbove(150.0),
            convert: None,
            method: Method::Breakpoints(&TWO_BAND),
        },
    ];

    static DEF: ScaleDefinition = ScaleDefinition {
        id: ScaleId::Europe,
        formula: Formula::SubIndexMax {
            entries: &ENTRIES,
            above_table: 101,
        },
        max_index: 100,
        descriptors: DescriptorTable(&[DescriptorBand { lo: 0, hi: 100, label: "x" }]),
    };

    #[test]
    fn worst_sub_index_wins() {
        let readings = Concentrations::new()
            .with(Pollutant::No2, Window::H1, 40.0)
            .with(Pollutant::O3, Window::H1, 120.0);
        // NO2 -> 20, O3 -> 60.
        assert_eq!(evaluate(&DEF, &readings).unwrap(), 60);
    }

    #[test]
    fn missing_mandatory_fails() {
        let readings = Concentrations::new().with(Pollutant::O3, Window::H1, 50.0);
        assert!(matches!(
            evaluate(&DEF, &readings),
            Err(AqiError::MissingPollutant { pollutant: Pollutant::No2, .. })
        ));
    }

    #[test]
    fn optional_absent_is_skipped_not_zeroed() {
        let readings = Concentrations::new().with(Pollutant::No2, Window::H1, 40.0);
        assert_eq!(evaluate(&DEF, &readings).unwrap(), 20);
    }

    #[test]
    fn gated_out_reading_contributes_nothing() {
        // O3 above its SkipAbove limit must not drag the result up.
        let readings = Concentrations::new()
            .with(Pollutant::No2, Window::H1, 40.0)
            .with(Pollutant::O3, Window::H1, 180.0);
        assert_eq!(evaluate(&DEF, &readings).unwrap(), 20);
    }

    #[test]
    fn above_table_short_circuits_to_sentinel() {
        let readings = Concentrations::new().with(Pollutant::No2, Window::H1, 250.0);
        assert_eq!(evaluate(&DEF, &readings).unwrap(), 101);
    }

    #[test]
    fn all_entries_skipped_is_insufficient_data() {
        static OPTIONAL_ONLY: [ScaleEntry; 1] = [ScaleEntry {
            pollutant: Pollutant::O3,
            window: Window::H1,
            required: false,
            gate: Gate::Always,
            convert: None,
            method: Method::Breakpoints(&TWO_BAND),
        }];
        static OPT_DEF: ScaleDefinition = ScaleDefinition {
            id: ScaleId::Europe,
            formula: Formula::SubIndexMax {
                entries: &OPTIONAL_ONLY,
                above_table: 101,
            },
            max_index: 100,
            descriptors: DescriptorTable(&[DescriptorBand { lo: 0, hi: 100, label: "x" }]),
        };
        assert!(matches!(
            evaluate(&OPT_DEF, &Concentrations::new()),
            Err(AqiError::InsufficientData { .. })
        ));
    }

    #[test]
    fn unless_other_gate_defers_to_primary_window() {
        static HANDOVER: [ScaleEntry; 2] = [
            ScaleEntry {
                pollutant: Pollutant::So2,
                window: Window::H1,
                required: true,
                gate: Gate::SkipAbove(150.0),
                convert: None,
                method: Method::Breakpoints(&TWO_BAND),
            },
            ScaleEntry {
                pollutant: Pollutant::So2,
                window: Window::H24,
                required: false,
                gate: Gate::UnlessOther {
                    pollutant: Pollutant::So2,
                    window: Window::H1,
                    at_most: 150.0,
                },
                convert: None,
                method: Method::Breakpoints(&TWO_BAND),
            },
        ];
        static HANDOVER_DEF: ScaleDefinition = ScaleDefinition {
            id: ScaleId::UnitedStates,
            formula: Formula::SubIndexMax {
                entries: &HANDOVER,
                above_table: 101,
            },
            max_index: 100,
            descriptors: DescriptorTable(&[DescriptorBand { lo: 0, hi: 100, label: "x" }]),
        };

        // 1h within range: the 24h reading is ignored even though present.
        let readings = Concentrations::new()
            .with(Pollutant::So2, Window::H1, 100.0)
            .with(Pollutant::So2, Window::H24, 190.0);
        assert_eq!(evaluate(&HANDOVER_DEF, &readings).unwrap(), 50);

        // 1h past the limit: the 24h table takes over.
        let readings = Concentrations::new()
            .with(Pollutant::So2, Window::H1, 160.0)
            .with(Pollutant::So2, Window::H24, 190.0);
        assert_eq!(evaluate(&HANDOVER_DEF, &readings).unwrap(), 95);
    }

    #[test]
    fn conversion_truncates_before_lookup() {
        let conv = Conversion { divisor: 2.0, decimals: 1 };
        // 25.38 / 2 = 12.69 -> truncated to 12.6, not rounded to 12.7.
        assert!((conv.apply(25.38) - 12.6).abs() < 1e-9);
        let whole = Conversion { divisor: 1.0, decimals: 0 };
        assert!((whole.apply(54.9) - 54.0).abs() < 1e-9);
    }
}
