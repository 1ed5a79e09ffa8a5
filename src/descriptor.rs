//! Index-to-category-label mapping. Presentation only; descriptor tables
//! never feed back into index computation.

use crate::error::AqiError;

/// One inclusive index range with its category label.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorBand {
    pub lo: i32,
    pub hi: i32,
    pub label: &'static str,
}

/// Ordered category bands for one scale.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorTable(pub &'static [DescriptorBand]);

/// First containing band wins. An index above the table's top boundary is
/// still meaningfully "the worst category" and returns the last label;
/// only a negative index is an error.
pub fn describe(table: DescriptorTable, aqi: i32) -> Result<&'static str, AqiError> {
    if aqi < 0 {
        return Err(AqiError::InvalidAqi(aqi));
    }
    let band = table
        .0
        .iter()
        .find(|band| aqi >= band.lo && aqi <= band.hi)
        .or_else(|| table.0.last());
    // Tables are static and non-empty; the unwrap is on table data, not input.
    Ok(band.map(|band| band.label).unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: DescriptorTable = DescriptorTable(&[
        DescriptorBand { lo: 0, hi: 50, label: "Good" },
        DescriptorBand { lo: 51, hi: 100, label: "Moderate" },
        DescriptorBand { lo: 101, hi: 200, label: "Unhealthy" },
    ]);

    #[test]
    fn picks_containing_band() {
        assert_eq!(describe(TABLE, 0).unwrap(), "Good");
        assert_eq!(describe(TABLE, 50).unwrap(), "Good");
        assert_eq!(describe(TABLE, 51).unwrap(), "Moderate");
        assert_eq!(describe(TABLE, 200).unwrap(), "Unhealthy");
    }

    #[test]
    fn above_top_is_worst_label_not_error() {
        assert_eq!(describe(TABLE, 201).unwrap(), "Unhealthy");
        assert_eq!(describe(TABLE, 9999).unwrap(), "Unhealthy");
    }

    #[test]
    fn negative_index_is_rejected() {
        assert_eq!(describe(TABLE, -1), Err(AqiError::InvalidAqi(-1)));
    }
}
