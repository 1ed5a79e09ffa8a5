//! Exponential added-risk aggregation for AQHI-style health-risk scales.
//!
//! Unlike the breakpoint scales, these combine all pollutants *before* the
//! final mapping: each contributor adds `100 * (exp(k * c) - 1)` percent
//! added risk, alternates for the same physical hazard contribute the worse
//! of their two terms, and the summed risk is finalized into a bounded
//! category with a floor of 1.

use crate::error::AqiError;
use crate::pollutant::{Concentrations, Pollutant, Window};
use crate::scale::ScaleId;

/// One exponential contributor.
#[derive(Debug, Clone, Copy)]
pub struct RiskTerm {
    pub pollutant: Pollutant,
    pub window: Window,
    /// Published per-µg/m³ risk coefficient.
    pub coefficient: f64,
}

/// One non-linear risk band: summed risk up to `hi` maps to `category`.
#[derive(Debug, Clone, Copy)]
pub struct RiskBand {
    pub hi: f64,
    pub category: i32,
}

/// How the summed risk becomes a reported category.
#[derive(Debug, Clone, Copy)]
pub enum RiskFinalize {
    /// `max(1, round(amplitude * risk))` — Canada AQHI.
    Scaled { amplitude: f64 },
    /// Band lookup with an above-table sentinel — Hong Kong AQHI.
    Banded {
        bands: &'static [RiskBand],
        above: i32,
    },
}

/// Full definition of an exponential-risk scale.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialScale {
    /// Independently summed contributors.
    pub terms: &'static [RiskTerm],
    /// Alternates for one shared hazard; the pair contributes the maximum
    /// of its two terms so the hazard is never double-counted.
    pub alternates: &'static [[RiskTerm; 2]],
    pub finalize: RiskFinalize,
}

fn added_risk(coefficient: f64, concentration: f64) -> Result<f64, AqiError> {
    if !concentration.is_finite() || concentration < 0.0 {
        return Err(AqiError::InvalidInput {
            value: concentration,
        });
    }
    Ok(100.0 * ((coefficient * concentration).exp() - 1.0))
}

/// Sum the risk terms and finalize into a bounded category.
///
/// Every summed term is mandatory. Within an alternate pair either reading
/// suffices; only when both are absent is the pair reported missing.
/// All-zero concentrations still report category 1, never 0.
pub fn evaluate(
    scale: ScaleId,
    def: &ExponentialScale,
    readings: &Concentrations,
) -> Result<i32, AqiError> {
    let mut risk = 0.0;

    for term in def.terms {
        let c = readings.get(term.pollutant, term.window).ok_or(
            AqiError::MissingPollutant {
                scale,
                pollutant: term.pollutant,
                window: term.window,
            },
        )?;
        risk += added_risk(term.coefficient, c)?;
    }

    for pair in def.alternates {
        let mut worst: Option<f64> = None;
        for term in pair {
            if let Some(c) = readings.get(term.pollutant, term.window) {
                let r = added_risk(term.coefficient, c)?;
                worst = Some(match worst {
                    Some(w) if w >= r => w,
                    _ => r,
                });
            }
        }
        risk += worst.ok_or(AqiError::MissingPollutant {
            scale,
            pollutant: pair[0].pollutant,
            window: pair[0].window,
        })?;
    }

    let category = match def.finalize {
        RiskFinalize::Scaled { amplitude } => (amplitude * risk).round() as i32,
        RiskFinalize::Banded { bands, above } => bands
            .iter()
            .find(|band| risk <= band.hi)
            .map(|band| band.category)
            .unwrap_or(above),
    };
    Ok(category.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERMS: [RiskTerm; 2] = [
        RiskTerm { pollutant: Pollutant::No2, window: Window::H3, coefficient: 0.0004 },
        RiskTerm { pollutant: Pollutant::O3, window: Window::H3, coefficient: 0.0005 },
    ];
    const PM_PAIR: [[RiskTerm; 2]; 1] = [[
        RiskTerm { pollutant: Pollutant::Pm10, window: Window::H3, coefficient: 0.0003 },
        RiskTerm { pollutant: Pollutant::Pm2_5, window: Window::H3, coefficient: 0.0002 },
    ]];
    const BANDS: [RiskBand; 3] = [
        RiskBand { hi: 2.0, category: 1 },
        RiskBand { hi: 4.0, category: 2 },
        RiskBand { hi: 6.0, category: 3 },
    ];

    const DEF: ExponentialScale = ExponentialScale {
        terms: &TERMS,
        alternates: &PM_PAIR,
        finalize: RiskFinalize::Banded { bands: &BANDS, above: 4 },
    };

    fn all_zero() -> Concentrations {
        Concentrations::new()
            .with(Pollutant::No2, Window::H3, 0.0)
            .with(Pollutant::O3, Window::H3, 0.0)
            .with(Pollutant::Pm10, Window::H3, 0.0)
            .with(Pollutant::Pm2_5, Window::H3, 0.0)
    }

    #[test]
    fn zero_risk_floors_at_category_one() {
        assert_eq!(evaluate(ScaleId::HongKong, &DEF, &all_zero()).unwrap(), 1);
    }

    #[test]
    fn scaled_finalize_floors_at_one() {
        let def = ExponentialScale {
            finalize: RiskFinalize::Scaled { amplitude: 10.0 / 10.4 },
            ..DEF
        };
        assert_eq!(evaluate(ScaleId::Canada, &def, &all_zero()).unwrap(), 1);
    }

    #[test]
    fn alternate_pair_takes_worst_not_sum() {
        // PM10 term dominates: risk must grow by the PM10 term only.
        let with_both = all_zero()
            .with(Pollutant::Pm10, Window::H3, 5000.0)
            .with(Pollutant::Pm2_5, Window::H3, 5000.0);
        let with_pm10 = all_zero().with(Pollutant::Pm10, Window::H3, 5000.0);
        assert_eq!(
            evaluate(ScaleId::HongKong, &DEF, &with_both).unwrap(),
            evaluate(ScaleId::HongKong, &DEF, &with_pm10).unwrap()
        );
    }

    #[test]
    fn one_alternate_suffices_but_both_absent_is_missing() {
        let only_pm25 = Concentrations::new()
            .with(Pollutant::No2, Window::H3, 0.0)
            .with(Pollutant::O3, Window::H3, 0.0)
            .with(Pollutant::Pm2_5, Window::H3, 10.0);
        assert!(evaluate(ScaleId::HongKong, &DEF, &only_pm25).is_ok());

        let no_pm = Concentrations::new()
            .with(Pollutant::No2, Window::H3, 0.0)
            .with(Pollutant::O3, Window::H3, 0.0);
        assert!(matches!(
            evaluate(ScaleId::HongKong, &DEF, &no_pm),
            Err(AqiError::MissingPollutant { pollutant: Pollutant::Pm10, .. })
        ));
    }

    #[test]
    fn missing_summed_term_is_reported() {
        let missing_o3 = Concentrations::new()
            .with(Pollutant::No2, Window::H3, 0.0)
            .with(Pollutant::Pm10, Window::H3, 0.0);
        assert!(matches!(
            evaluate(ScaleId::HongKong, &DEF, &missing_o3),
            Err(AqiError::MissingPollutant { pollutant: Pollutant::O3, .. })
        ));
    }

    #[test]
    fn above_all_bands_reports_sentinel() {
        let heavy = all_zero()
            .with(Pollutant::No2, Window::H3, 20000.0)
            .with(Pollutant::O3, Window::H3, 20000.0);
        assert_eq!(evaluate(ScaleId::HongKong, &DEF, &heavy).unwrap(), 4);
    }

    #[test]
    fn negative_reading_rejected() {
        let bad = all_zero().with(Pollutant::O3, Window::H3, -3.0);
        assert!(matches!(
            evaluate(ScaleId::HongKong, &DEF, &bad),
            Err(AqiError::InvalidInput { .. })
        ));
    }
}
