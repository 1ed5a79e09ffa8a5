//! Piecewise-linear breakpoint interpolation and the NEPM ratio formula.
//!
//! Breakpoint tables are contiguous in both axes: interval *n* starts at the
//! concentration where interval *n-1* ends, and its index range starts at
//! the index where *n-1*'s ends. The piecewise function is therefore
//! continuous at every boundary by construction, and a concentration landing
//! exactly on a shared boundary yields the same index from either side.

use crate::error::AqiError;

/// One linear segment of an index scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub index_lo: i32,
    pub index_hi: i32,
    pub conc_lo: f64,
    pub conc_hi: f64,
}

/// Locate the containing interval and linearly interpolate the index.
///
/// Returns `Ok(None)` when the concentration lies beyond the last interval:
/// the value is deliberately never extrapolated, and the caller maps `None`
/// to the scale's ceiling-plus-one sentinel. Rounding is half-away-from-zero
/// (`f64::round`), matching the published index formulas.
pub fn interpolate(table: &[Breakpoint], concentration: f64) -> Result<Option<i32>, AqiError> {
    if !concentration.is_finite() || concentration < 0.0 {
        return Err(AqiError::InvalidInput {
            value: concentration,
        });
    }
    for bp in table {
        if concentration <= bp.conc_hi {
            let span = bp.conc_hi - bp.conc_lo;
            let t = if span > 0.0 {
                (concentration - bp.conc_lo) / span
            } else {
                0.0
            };
            let raw = (bp.index_hi - bp.index_lo) as f64 * t + bp.index_lo as f64;
            return Ok(Some(raw.round() as i32));
        }
    }
    Ok(None)
}

/// NEPM-style percentage-of-standard index: `round(c / standard * 100)`.
///
/// No upper bound; readings over the regulatory limit legitimately index
/// above 100.
pub fn ratio_index(standard: f64, concentration: f64) -> Result<i32, AqiError> {
    if !concentration.is_finite() || concentration < 0.0 {
        return Err(AqiError::InvalidInput {
            value: concentration,
        });
    }
    Ok((concentration / standard * 100.0).round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Europe CAQI NO2 table, restated with shared endpoints.
    const NO2: [Breakpoint; 4] = [
        Breakpoint { index_lo: 0, index_hi: 25, conc_lo: 0.0, conc_hi: 50.0 },
        Breakpoint { index_lo: 25, index_hi: 50, conc_lo: 50.0, conc_hi: 100.0 },
        Breakpoint { index_lo: 50, index_hi: 75, conc_lo: 100.0, conc_hi: 200.0 },
        Breakpoint { index_lo: 75, index_hi: 100, conc_lo: 200.0, conc_hi: 400.0 },
    ];

    #[test]
    fn interpolates_within_band() {
        assert_eq!(interpolate(&NO2, 60.0).unwrap(), Some(30));
        assert_eq!(interpolate(&NO2, 0.0).unwrap(), Some(0));
        assert_eq!(interpolate(&NO2, 400.0).unwrap(), Some(100));
    }

    #[test]
    fn shared_boundary_is_continuous() {
        // Approaching 100 from either band yields the same index.
        assert_eq!(interpolate(&NO2, 100.0).unwrap(), Some(50));
        assert_eq!(interpolate(&NO2, 99.999).unwrap(), Some(50));
        assert_eq!(interpolate(&NO2, 100.001).unwrap(), Some(50));
    }

    #[test]
    fn beyond_last_interval_is_none() {
        assert_eq!(interpolate(&NO2, 400.001).unwrap(), None);
        assert_eq!(interpolate(&NO2, 450.0).unwrap(), None);
    }

    #[test]
    fn negative_and_non_finite_rejected() {
        assert!(matches!(
            interpolate(&NO2, -1.0),
            Err(AqiError::InvalidInput { .. })
        ));
        assert!(matches!(
            interpolate(&NO2, f64::NAN),
            Err(AqiError::InvalidInput { .. })
        ));
        assert!(matches!(
            interpolate(&NO2, f64::INFINITY),
            Err(AqiError::InvalidInput { .. })
        ));
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 75 µg/m³ sits halfway through the 50..100 band: 25 + 12.5 = 37.5.
        assert_eq!(interpolate(&NO2, 75.0).unwrap(), Some(38));
    }

    #[test]
    fn monotone_over_full_range() {
        let mut last = 0;
        let mut c = 0.0;
        while c <= 400.0 {
            let idx = interpolate(&NO2, c).unwrap().unwrap();
            assert!(idx >= last, "index decreased at c={c}");
            last = idx;
            c += 0.5;
        }
    }

    #[test]
    fn degenerate_span_returns_lower_index() {
        let step = [Breakpoint { index_lo: 4, index_hi: 4, conc_lo: 10.0, conc_hi: 10.0 }];
        assert_eq!(interpolate(&step, 10.0).unwrap(), Some(4));
    }

    #[test]
    fn ratio_formula_exactness() {
        // Australia CO standard.
        assert_eq!(ratio_index(10310.4, 10310.4).unwrap(), 100);
        assert_eq!(ratio_index(10310.4, 0.0).unwrap(), 0);
        // Above the standard is legitimate.
        assert_eq!(ratio_index(50.0, 125.0).unwrap(), 250);
    }

    #[test]
    fn ratio_rejects_bad_input() {
        assert!(matches!(
            ratio_index(50.0, -0.1),
            Err(AqiError::InvalidInput { .. })
        ));
        assert!(matches!(
            ratio_index(50.0, f64::NAN),
            Err(AqiError::InvalidInput { .. })
        ));
    }
}
