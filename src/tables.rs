//! Static scale definitions: breakpoint tables, NEPM standards, risk
//! coefficients and descriptor tables for the ten supported scales.
//!
//! Every table is contiguous in both axes (concentration and index ranges
//! share their endpoints), so each scale's piecewise function is continuous
//! at every boundary. Concentration boundaries are the published regulatory
//! values; scales whose standards are written in ppm/ppb carry a
//! declarative conversion instead of pre-scaled caller input.

use crate::descriptor::{DescriptorBand, DescriptorTable};
use crate::piecewise::Breakpoint;
use crate::pollutant::{Pollutant, Window};
use crate::risk::{ExponentialScale, RiskBand, RiskFinalize, RiskTerm};
use crate::scale::{Conversion, Formula, Gate, Method, ScaleDefinition, ScaleEntry, ScaleId};

const fn bp(index_lo: i32, index_hi: i32, conc_lo: f64, conc_hi: f64) -> Breakpoint {
    Breakpoint {
        index_lo,
        index_hi,
        conc_lo,
        conc_hi,
    }
}

const fn band(lo: i32, hi: i32, label: &'static str) -> DescriptorBand {
    DescriptorBand { lo, hi, label }
}

const fn entry(
    pollutant: Pollutant,
    window: Window,
    table: &'static [Breakpoint],
) -> ScaleEntry {
    ScaleEntry {
        pollutant,
        window,
        required: true,
        gate: Gate::Always,
        convert: None,
        method: Method::Breakpoints(table),
    }
}

// ---- Australia (AQI, NEPM ratio) ------------------------------------------
//
// Index = concentration as a percentage of the NEPM standard; the worst
// pollutant dominates. Standards below are the published ppm/ppb limits
// expressed in µg/m³ (e.g. CO: 9.0 ppm × 1145.6).

const fn nepm(pollutant: Pollutant, window: Window, standard: f64) -> ScaleEntry {
    ScaleEntry {
        pollutant,
        window,
        required: true,
        gate: Gate::Always,
        convert: None,
        method: Method::Ratio(standard),
    }
}

static AUSTRALIA_ENTRIES: [ScaleEntry; 7] = [
    nepm(Pollutant::Co, Window::H8, 10310.4),
    nepm(Pollutant::No2, Window::H1, 225.792),
    nepm(Pollutant::O3, Window::H1, 196.32),
    nepm(Pollutant::O3, Window::H4, 157.056),
    nepm(Pollutant::So2, Window::H1, 1694.88),
    nepm(Pollutant::Pm10, Window::H24, 50.0),
    nepm(Pollutant::Pm2_5, Window::H24, 25.0),
];

static AUSTRALIA_DESC: [DescriptorBand; 6] = [
    band(0, 33, "Very Good"),
    band(34, 66, "Good"),
    band(67, 99, "Fair"),
    band(100, 149, "Poor"),
    band(150, 200, "Very Poor"),
    band(201, i32::MAX, "Hazardous"),
];

pub static AUSTRALIA: ScaleDefinition = ScaleDefinition {
    id: ScaleId::Australia,
    formula: Formula::SubIndexMax {
        entries: &AUSTRALIA_ENTRIES,
        // The ratio formula is unbounded; no table can be exceeded.
        above_table: 201,
    },
    max_index: 200,
    descriptors: DescriptorTable(&AUSTRALIA_DESC),
};

// ---- Canada (AQHI, exponential) -------------------------------------------
//
// AQHI = max(1, round((1000 / 10.4) * Σ (exp(k·c) - 1))). Coefficients are
// the published per-ppb values divided by the ppb→µg/m³ factors.

static CANADA_TERMS: [RiskTerm; 3] = [
    RiskTerm { pollutant: Pollutant::No2, window: Window::H3, coefficient: 0.000462904 },
    RiskTerm { pollutant: Pollutant::O3, window: Window::H3, coefficient: 0.000273533 },
    RiskTerm { pollutant: Pollutant::Pm2_5, window: Window::H3, coefficient: 0.000487 },
];

static CANADA_DESC: [DescriptorBand; 4] = [
    band(0, 4, "Low"),
    band(5, 6, "Moderate"),
    band(7, 10, "High"),
    band(11, i32::MAX, "Very High"),
];

pub static CANADA: ScaleDefinition = ScaleDefinition {
    id: ScaleId::Canada,
    formula: Formula::Exponential(ExponentialScale {
        terms: &CANADA_TERMS,
        alternates: &[],
        finalize: RiskFinalize::Scaled { amplitude: 10.0 / 10.4 },
    }),
    max_index: 10,
    descriptors: DescriptorTable(&CANADA_DESC),
};

// ---- Europe (CAQI) --------------------------------------------------------

static EUROPE_NO2: [Breakpoint; 4] = [
    bp(0, 25, 0.0, 50.0),
    bp(25, 50, 50.0, 100.0),
    bp(50, 75, 100.0, 200.0),
    bp(75, 100, 200.0, 400.0),
];
static EUROPE_O3: [Breakpoint; 4] = [
    bp(0, 25, 0.0, 60.0),
    bp(25, 50, 60.0, 120.0),
    bp(50, 75, 120.0, 180.0),
    bp(75, 100, 180.0, 240.0),
];
static EUROPE_PM10: [Breakpoint; 4] = [
    bp(0, 25, 0.0, 25.0),
    bp(25, 50, 25.0, 50.0),
    bp(50, 75, 50.0, 90.0),
    bp(75, 100, 90.0, 180.0),
];
static EUROPE_PM2_5: [Breakpoint; 4] = [
    bp(0, 25, 0.0, 15.0),
    bp(25, 50, 15.0, 30.0),
    bp(50, 75, 30.0, 55.0),
    bp(75, 100, 55.0, 110.0),
];

static EUROPE_ENTRIES: [ScaleEntry; 4] = [
    entry(Pollutant::No2, Window::H1, &EUROPE_NO2),
    entry(Pollutant::O3, Window::H1, &EUROPE_O3),
    entry(Pollutant::Pm10, Window::H1, &EUROPE_PM10),
    entry(Pollutant::Pm2_5, Window::H1, &EUROPE_PM2_5),
];

static EUROPE_DESC: [DescriptorBand; 5] = [
    band(0, 25, "Very Low"),
    band(26, 50, "Low"),
    band(51, 75, "Medium"),
    band(76, 100, "High"),
    band(101, i32::MAX, "Very High"),
];

pub static EUROPE: ScaleDefinition = ScaleDefinition {
    id: ScaleId::Europe,
    formula: Formula::SubIndexMax {
        entries: &EUROPE_ENTRIES,
        above_table: 101,
    },
    max_index: 100,
    descriptors: DescriptorTable(&EUROPE_DESC),
};

// ---- Hong Kong (AQHI, exponential) ----------------------------------------
//
// %AR bands; PM10 and PM2.5 are alternates for the shared particulate
// hazard and contribute the worse of their two terms.

static HONG_KONG_TERMS: [RiskTerm; 3] = [
    RiskTerm { pollutant: Pollutant::No2, window: Window::H3, coefficient: 0.0004462559 },
    RiskTerm { pollutant: Pollutant::So2, window: Window::H3, coefficient: 0.0001393235 },
    RiskTerm { pollutant: Pollutant::O3, window: Window::H3, coefficient: 0.0005116328 },
];
static HONG_KONG_PM: [[RiskTerm; 2]; 1] = [[
    RiskTerm { pollutant: Pollutant::Pm10, window: Window::H3, coefficient: 0.0002821751 },
    RiskTerm { pollutant: Pollutant::Pm2_5, window: Window::H3, coefficient: 0.0002180567 },
]];
static HONG_KONG_BANDS: [RiskBand; 10] = [
    RiskBand { hi: 1.88, category: 1 },
    RiskBand { hi: 3.76, category: 2 },
    RiskBand { hi: 5.64, category: 3 },
    RiskBand { hi: 7.52, category: 4 },
    RiskBand { hi: 9.41, category: 5 },
    RiskBand { hi: 11.29, category: 6 },
    RiskBand { hi: 12.91, category: 7 },
    RiskBand { hi: 15.07, category: 8 },
    RiskBand { hi: 17.22, category: 9 },
    RiskBand { hi: 19.37, category: 10 },
];

static HONG_KONG_DESC: [DescriptorBand; 5] = [
    band(0, 3, "Low"),
    band(4, 6, "Moderate"),
    band(7, 7, "High"),
    band(8, 10, "Very High"),
    band(11, i32::MAX, "Hazardous"),
];

pub static HONG_KONG: ScaleDefinition = ScaleDefinition {
    id: ScaleId::HongKong,
    formula: Formula::Exponential(ExponentialScale {
        terms: &HONG_KONG_TERMS,
        alternates: &HONG_KONG_PM,
        finalize: RiskFinalize::Banded { bands: &HONG_KONG_BANDS, above: 11 },
    }),
    max_index: 10,
    descriptors: DescriptorTable(&HONG_KONG_DESC),
};

// ---- India (AQI) ----------------------------------------------------------
//
// CPCB boundaries, restated contiguously (the published tables leave
// cosmetic gaps between bands; the shared boundary is the band top).

static INDIA_CO: [Breakpoint; 5] = [
    bp(0, 50, 0.0, 1000.0),
    bp(50, 100, 1000.0, 2000.0),
    bp(100, 200, 2000.0, 10000.0),
    bp(200, 300, 10000.0, 17000.0),
    bp(300, 400, 17000.0, 34000.0),
];
static INDIA_NH3: [Breakpoint; 5] = [
    bp(0, 50, 0.0, 200.0),
    bp(50, 100, 200.0, 400.0),
    bp(100, 200, 400.0, 800.0),
    bp(200, 300, 800.0, 1200.0),
    bp(300, 400, 1200.0, 1800.0),
];
static INDIA_NO2: [Breakpoint; 5] = [
    bp(0, 50, 0.0, 40.0),
    bp(50, 100, 40.0, 80.0),
    bp(100, 200, 80.0, 180.0),
    bp(200, 300, 180.0, 280.0),
    bp(300, 400, 280.0, 400.0),
];
static INDIA_O3: [Breakpoint; 5] = [
    bp(0, 50, 0.0, 50.0),
    bp(50, 100, 50.0, 100.0),
    bp(100, 200, 100.0, 168.0),
    bp(200, 300, 168.0, 208.0),
    bp(300, 400, 208.0, 748.0),
];
static INDIA_PB: [Breakpoint; 5] = [
    bp(0, 50, 0.0, 0.5),
    bp(50, 100, 0.5, 1.0),
    bp(100, 200, 1.0, 2.0),
    bp(200, 300, 2.0, 3.0),
    bp(300, 400, 3.0, 3.5),
];
static INDIA_SO2: [Breakpoint; 5] = [
    bp(0, 50, 0.0, 40.0),
    bp(50, 100, 40.0, 80.0),
    bp(100, 200, 80.0, 380.0),
    bp(200, 300, 380.0, 800.0),
    bp(300, 400, 800.0, 1600.0),
];
static INDIA_PM10: [Breakpoint; 5] = [
    bp(0, 50, 0.0, 50.0),
    bp(50, 100, 50.0, 100.0),
    bp(100, 200, 100.0, 250.0),
    bp(200, 300, 250.0, 350.0),
    bp(300, 400, 350.0, 430.0),
];
static INDIA_PM2_5: [Breakpoint; 5] = [
    bp(0, 50, 0.0, 30.0),
    bp(50, 100, 30.0, 60.0),
    bp(100, 200, 60.0, 90.0),
    bp(200, 300, 90.0, 120.0),
    bp(300, 400, 120.0, 250.0),
];

static INDIA_ENTRIES: [ScaleEntry; 8] = [
    entry(Pollutant::Co, Window::H8, &INDIA_CO),
    entry(Pollutant::Nh3, Window::H24, &INDIA_NH3),
    entry(Pollutant::No2, Window::H24, &INDIA_NO2),
    entry(Pollutant::O3, Window::H8, &INDIA_O3),
    entry(Pollutant::Pb, Window::H24, &INDIA_PB),
    entry(Pollutant::So2, Window::H24, &INDIA_SO2),
    entry(Pollutant::Pm10, Window::H24, &INDIA_PM10),
    entry(Pollutant::Pm2_5, Window::H24, &INDIA_PM2_5),
];

static INDIA_DESC: [DescriptorBand; 6] = [
    band(0, 50, "Good"),
    band(51, 100, "Satisfactory"),
    band(101, 200, "Moderate"),
    band(201, 300, "Poor"),
    band(301, 400, "Very Poor"),
    band(401, i32::MAX, "Severe"),
];

pub static INDIA: ScaleDefinition = ScaleDefinition {
    id: ScaleId::India,
    formula: Formula::SubIndexMax {
        entries: &INDIA_ENTRIES,
        above_table: 401,
    },
    max_index: 400,
    descriptors: DescriptorTable(&INDIA_DESC),
};

// ---- Mainland China (AQI) -------------------------------------------------
//
// HJ 633-2012. O3-8h has no defined sub-index above 800 µg/m³ and SO2-1h
// none above 800; those windows drop out rather than extrapolate.

static CHINA_CO_1H: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 5000.0),
    bp(50, 100, 5000.0, 10000.0),
    bp(100, 150, 10000.0, 35000.0),
    bp(150, 200, 35000.0, 60000.0),
    bp(200, 300, 60000.0, 90000.0),
    bp(300, 400, 90000.0, 120000.0),
    bp(400, 500, 120000.0, 150000.0),
];
static CHINA_CO_24H: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 2000.0),
    bp(50, 100, 2000.0, 4000.0),
    bp(100, 150, 4000.0, 14000.0),
    bp(150, 200, 14000.0, 24000.0),
    bp(200, 300, 24000.0, 36000.0),
    bp(300, 400, 36000.0, 48000.0),
    bp(400, 500, 48000.0, 60000.0),
];
static CHINA_NO2_1H: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 100.0),
    bp(50, 100, 100.0, 200.0),
    bp(100, 150, 200.0, 700.0),
    bp(150, 200, 700.0, 1200.0),
    bp(200, 300, 1200.0, 2340.0),
    bp(300, 400, 2340.0, 3090.0),
    bp(400, 500, 3090.0, 3840.0),
];
static CHINA_NO2_24H: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 40.0),
    bp(50, 100, 40.0, 80.0),
    bp(100, 150, 80.0, 180.0),
    bp(150, 200, 180.0, 280.0),
    bp(200, 300, 280.0, 565.0),
    bp(300, 400, 565.0, 750.0),
    bp(400, 500, 750.0, 940.0),
];
static CHINA_O3_1H: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 160.0),
    bp(50, 100, 160.0, 200.0),
    bp(100, 150, 200.0, 300.0),
    bp(150, 200, 300.0, 400.0),
    bp(200, 300, 400.0, 800.0),
    bp(300, 400, 800.0, 1000.0),
    bp(400, 500, 1000.0, 1200.0),
];
static CHINA_O3_8H: [Breakpoint; 5] = [
    bp(0, 50, 0.0, 100.0),
    bp(50, 100, 100.0, 160.0),
    bp(100, 150, 160.0, 215.0),
    bp(150, 200, 215.0, 265.0),
    bp(200, 300, 265.0, 800.0),
];
static CHINA_SO2_1H: [Breakpoint; 4] = [
    bp(0, 50, 0.0, 150.0),
    bp(50, 100, 150.0, 500.0),
    bp(100, 150, 500.0, 650.0),
    bp(150, 200, 650.0, 800.0),
];
static CHINA_SO2_24H: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 50.0),
    bp(50, 100, 50.0, 150.0),
    bp(100, 150, 150.0, 475.0),
    bp(150, 200, 475.0, 800.0),
    bp(200, 300, 800.0, 1600.0),
    bp(300, 400, 1600.0, 2100.0),
    bp(400, 500, 2100.0, 2620.0),
];
static CHINA_PM10: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 50.0),
    bp(50, 100, 50.0, 150.0),
    bp(100, 150, 150.0, 250.0),
    bp(150, 200, 250.0, 350.0),
    bp(200, 300, 350.0, 420.0),
    bp(300, 400, 420.0, 500.0),
    bp(400, 500, 500.0, 600.0),
];
static CHINA_PM2_5: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 35.0),
    bp(50, 100, 35.0, 75.0),
    bp(100, 150, 75.0, 115.0),
    bp(150, 200, 115.0, 150.0),
    bp(200, 300, 150.0, 250.0),
    bp(300, 400, 250.0, 350.0),
    bp(400, 500, 350.0, 500.0),
];

static CHINA_ENTRIES: [ScaleEntry; 10] = [
    entry(Pollutant::Co, Window::H1, &CHINA_CO_1H),
    entry(Pollutant::Co, Window::H24, &CHINA_CO_24H),
    entry(Pollutant::No2, Window::H1, &CHINA_NO2_1H),
    entry(Pollutant::No2, Window::H24, &CHINA_NO2_24H),
    entry(Pollutant::O3, Window::H1, &CHINA_O3_1H),
    ScaleEntry {
        pollutant: Pollutant::O3,
        window: Window::H8,
        required: true,
        gate: Gate::SkipAbove(800.0),
        convert: None,
        method: Method::Breakpoints(&CHINA_O3_8H),
    },
    ScaleEntry {
        pollutant: Pollutant::So2,
        window: Window::H1,
        required: true,
        gate: Gate::SkipAbove(800.0),
        convert: None,
        method: Method::Breakpoints(&CHINA_SO2_1H),
    },
    entry(Pollutant::So2, Window::H24, &CHINA_SO2_24H),
    entry(Pollutant::Pm10, Window::H24, &CHINA_PM10),
    entry(Pollutant::Pm2_5, Window::H24, &CHINA_PM2_5),
];

static CHINA_DESC: [DescriptorBand; 6] = [
    band(0, 50, "Excellent"),
    band(51, 100, "Good"),
    band(101, 150, "Lightly Polluted"),
    band(151, 200, "Moderately Polluted"),
    band(201, 300, "Heavily Polluted"),
    band(301, i32::MAX, "Severely Polluted"),
];

pub static MAINLAND_CHINA: ScaleDefinition = ScaleDefinition {
    id: ScaleId::MainlandChina,
    formula: Formula::SubIndexMax {
        entries: &CHINA_ENTRIES,
        above_table: 501,
    },
    max_index: 500,
    descriptors: DescriptorTable(&CHINA_DESC),
};

// ---- Singapore (PSI) ------------------------------------------------------
//
// The NO2 sub-index is only defined from 1130 µg/m³ upward. The O3
// sub-index uses the 8-hour reading, handing over to the 1-hour reading
// when the 8-hour average exceeds 785 µg/m³.

static SINGAPORE_CO: [Breakpoint; 6] = [
    bp(0, 50, 0.0, 5000.0),
    bp(50, 100, 5000.0, 10000.0),
    bp(100, 200, 10000.0, 17000.0),
    bp(200, 300, 17000.0, 34000.0),
    bp(300, 400, 34000.0, 46000.0),
    bp(400, 500, 46000.0, 57500.0),
];
static SINGAPORE_O3_8H: [Breakpoint; 4] = [
    bp(0, 50, 0.0, 118.0),
    bp(50, 100, 118.0, 157.0),
    bp(100, 200, 157.0, 235.0),
    bp(200, 300, 235.0, 785.0),
];
static SINGAPORE_O3_1H: [Breakpoint; 6] = [
    bp(0, 50, 0.0, 118.0),
    bp(50, 100, 118.0, 157.0),
    bp(100, 200, 157.0, 235.0),
    bp(200, 300, 235.0, 785.0),
    bp(300, 400, 785.0, 980.0),
    bp(400, 500, 980.0, 1180.0),
];
static SINGAPORE_NO2: [Breakpoint; 3] = [
    bp(200, 300, 1130.0, 2260.0),
    bp(300, 400, 2260.0, 3000.0),
    bp(400, 500, 3000.0, 3750.0),
];
static SINGAPORE_SO2: [Breakpoint; 6] = [
    bp(0, 50, 0.0, 80.0),
    bp(50, 100, 80.0, 365.0),
    bp(100, 200, 365.0, 800.0),
    bp(200, 300, 800.0, 1600.0),
    bp(300, 400, 1600.0, 2100.0),
    bp(400, 500, 2100.0, 2620.0),
];
static SINGAPORE_PM10: [Breakpoint; 6] = [
    bp(0, 50, 0.0, 50.0),
    bp(50, 100, 50.0, 150.0),
    bp(100, 200, 150.0, 350.0),
    bp(200, 300, 350.0, 420.0),
    bp(300, 400, 420.0, 500.0),
    bp(400, 500, 500.0, 600.0),
];
static SINGAPORE_PM2_5: [Breakpoint; 6] = [
    bp(0, 50, 0.0, 12.0),
    bp(50, 100, 12.0, 55.0),
    bp(100, 200, 55.0, 150.0),
    bp(200, 300, 150.0, 250.0),
    bp(300, 400, 250.0, 350.0),
    bp(400, 500, 350.0, 500.0),
];

static SINGAPORE_ENTRIES: [ScaleEntry; 7] = [
    entry(Pollutant::Co, Window::H8, &SINGAPORE_CO),
    ScaleEntry {
        pollutant: Pollutant::O3,
        window: Window::H8,
        required: true,
        gate: Gate::SkipAbove(785.0),
        convert: None,
        method: Method::Breakpoints(&SINGAPORE_O3_8H),
    },
    ScaleEntry {
        pollutant: Pollutant::O3,
        window: Window::H1,
        required: false,
        gate: Gate::UnlessOther {
            pollutant: Pollutant::O3,
            window: Window::H8,
            at_most: 785.0,
        },
        convert: None,
        method: Method::Breakpoints(&SINGAPORE_O3_1H),
    },
    ScaleEntry {
        pollutant: Pollutant::No2,
        window: Window::H1,
        required: false,
        gate: Gate::SkipBelow(1130.0),
        convert: None,
        method: Method::Breakpoints(&SINGAPORE_NO2),
    },
    entry(Pollutant::So2, Window::H24, &SINGAPORE_SO2),
    entry(Pollutant::Pm10, Window::H24, &SINGAPORE_PM10),
    entry(Pollutant::Pm2_5, Window::H24, &SINGAPORE_PM2_5),
];

static SINGAPORE_DESC: [DescriptorBand; 5] = [
    band(0, 50, "Good"),
    band(51, 100, "Moderate"),
    band(101, 200, "Unhealthy"),
    band(201, 300, "Very Unhealthy"),
    band(301, i32::MAX, "Hazardous"),
];

pub static SINGAPORE: ScaleDefinition = ScaleDefinition {
    id: ScaleId::Singapore,
    formula: Formula::SubIndexMax {
        entries: &SINGAPORE_ENTRIES,
        above_table: 501,
    },
    max_index: 500,
    descriptors: DescriptorTable(&SINGAPORE_DESC),
};

// ---- South Korea (CAI) ----------------------------------------------------
//
// Published tables are in ppm; boundaries below are the fixed µg/m³
// equivalents (ppm × 1000 × µg-per-ppb factor).

static KOREA_CO: [Breakpoint; 4] = [
    bp(0, 50, 0.0, 2291.2),
    bp(50, 100, 2291.2, 10310.4),
    bp(100, 250, 10310.4, 17184.0),
    bp(250, 500, 17184.0, 57280.0),
];
static KOREA_NO2: [Breakpoint; 4] = [
    bp(0, 50, 0.0, 56.448),
    bp(50, 100, 56.448, 112.896),
    bp(100, 250, 112.896, 376.32),
    bp(250, 500, 376.32, 3763.2),
];
static KOREA_O3: [Breakpoint; 4] = [
    bp(0, 50, 0.0, 58.896),
    bp(50, 100, 58.896, 176.688),
    bp(100, 250, 176.688, 294.48),
    bp(250, 500, 294.48, 1177.92),
];
static KOREA_SO2: [Breakpoint; 4] = [
    bp(0, 50, 0.0, 169.488),
    bp(50, 100, 169.488, 423.72),
    bp(100, 250, 423.72, 1271.16),
    bp(250, 500, 1271.16, 8474.4),
];
static KOREA_PM10: [Breakpoint; 4] = [
    bp(0, 50, 0.0, 30.0),
    bp(50, 100, 30.0, 80.0),
    bp(100, 250, 80.0, 150.0),
    bp(250, 500, 150.0, 600.0),
];
static KOREA_PM2_5: [Breakpoint; 4] = [
    bp(0, 50, 0.0, 15.0),
    bp(50, 100, 15.0, 35.0),
    bp(100, 250, 35.0, 75.0),
    bp(250, 500, 75.0, 500.0),
];

static KOREA_ENTRIES: [ScaleEntry; 6] = [
    entry(Pollutant::Co, Window::H1, &KOREA_CO),
    entry(Pollutant::No2, Window::H1, &KOREA_NO2),
    entry(Pollutant::O3, Window::H1, &KOREA_O3),
    entry(Pollutant::So2, Window::H1, &KOREA_SO2),
    entry(Pollutant::Pm10, Window::H24, &KOREA_PM10),
    entry(Pollutant::Pm2_5, Window::H24, &KOREA_PM2_5),
];

static KOREA_DESC: [DescriptorBand; 4] = [
    band(0, 50, "Good"),
    band(51, 100, "Medium"),
    band(101, 250, "Unhealthy"),
    band(251, i32::MAX, "Very Unhealthy"),
];

pub static SOUTH_KOREA: ScaleDefinition = ScaleDefinition {
    id: ScaleId::SouthKorea,
    formula: Formula::SubIndexMax {
        entries: &KOREA_ENTRIES,
        above_table: 501,
    },
    max_index: 500,
    descriptors: DescriptorTable(&KOREA_DESC),
};

// ---- United Kingdom (DAQI) ------------------------------------------------
//
// Ten flat bands per pollutant; the reported index is the band number
// itself, and band 10 is unbounded above. Boundaries sit at the published
// integer limits plus 0.5, because DAQI rounds pollutant averages to the
// nearest integer before banding.

const fn steps(cuts: &[f64; 9]) -> [Breakpoint; 10] {
    [
        bp(1, 1, 0.0, cuts[0]),
        bp(2, 2, cuts[0], cuts[1]),
        bp(3, 3, cuts[1], cuts[2]),
        bp(4, 4, cuts[2], cuts[3]),
        bp(5, 5, cuts[3], cuts[4]),
        bp(6, 6, cuts[4], cuts[5]),
        bp(7, 7, cuts[5], cuts[6]),
        bp(8, 8, cuts[6], cuts[7]),
        bp(9, 9, cuts[7], cuts[8]),
        bp(10, 10, cuts[8], f64::INFINITY),
    ]
}

static UK_O3: [Breakpoint; 10] =
    steps(&[33.5, 66.5, 100.5, 120.5, 140.5, 160.5, 187.5, 213.5, 240.5]);
static UK_NO2: [Breakpoint; 10] =
    steps(&[67.5, 134.5, 200.5, 267.5, 334.5, 400.5, 467.5, 534.5, 600.5]);
static UK_SO2: [Breakpoint; 10] =
    steps(&[88.5, 177.5, 266.5, 354.5, 443.5, 532.5, 710.5, 887.5, 1064.5]);
static UK_PM10: [Breakpoint; 10] =
    steps(&[16.5, 33.5, 50.5, 58.5, 66.5, 75.5, 83.5, 91.5, 100.5]);
static UK_PM2_5: [Breakpoint; 10] =
    steps(&[11.5, 23.5, 35.5, 41.5, 47.5, 53.5, 58.5, 64.5, 70.5]);

static UK_ENTRIES: [ScaleEntry; 5] = [
    entry(Pollutant::No2, Window::H1, &UK_NO2),
    entry(Pollutant::O3, Window::H8, &UK_O3),
    entry(Pollutant::So2, Window::Min15, &UK_SO2),
    entry(Pollutant::Pm10, Window::H24, &UK_PM10),
    entry(Pollutant::Pm2_5, Window::H24, &UK_PM2_5),
];

static UK_DESC: [DescriptorBand; 4] = [
    band(0, 3, "Low"),
    band(4, 6, "Moderate"),
    band(7, 9, "High"),
    band(10, i32::MAX, "Very High"),
];

pub static UNITED_KINGDOM: ScaleDefinition = ScaleDefinition {
    id: ScaleId::UnitedKingdom,
    formula: Formula::SubIndexMax {
        entries: &UK_ENTRIES,
        // Band 10 is unbounded; the sentinel is unreachable.
        above_table: 10,
    },
    max_index: 10,
    descriptors: DescriptorTable(&UK_DESC),
};

// ---- United States (AQI) --------------------------------------------------
//
// EPA tables are in ppm/ppb; readings are converted and truncated to the
// EPA reporting precision before lookup. O3-1h applies only from
// 0.125 ppm, O3-8h only up to 0.200 ppm; SO2-24h takes over from SO2-1h
// above 185 ppb (1567.764 µg/m³).

const US_PPM_CO: Conversion = Conversion { divisor: 1145.6, decimals: 1 };
const US_PPB_NO2: Conversion = Conversion { divisor: 1.8816, decimals: 0 };
const US_PPM_O3: Conversion = Conversion { divisor: 1963.2, decimals: 3 };
const US_PPB_SO2: Conversion = Conversion { divisor: 8.4744, decimals: 0 };
const US_UG_WHOLE: Conversion = Conversion { divisor: 1.0, decimals: 0 };
const US_UG_TENTHS: Conversion = Conversion { divisor: 1.0, decimals: 1 };

static US_CO: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 4.4),
    bp(50, 100, 4.4, 9.4),
    bp(100, 150, 9.4, 12.4),
    bp(150, 200, 12.4, 15.4),
    bp(200, 300, 15.4, 30.4),
    bp(300, 400, 30.4, 40.4),
    bp(400, 500, 40.4, 50.4),
];
static US_NO2: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 53.0),
    bp(50, 100, 53.0, 100.0),
    bp(100, 150, 100.0, 360.0),
    bp(150, 200, 360.0, 649.0),
    bp(200, 300, 649.0, 1249.0),
    bp(300, 400, 1249.0, 1649.0),
    bp(400, 500, 1649.0, 2049.0),
];
static US_O3_1H: [Breakpoint; 5] = [
    bp(100, 150, 0.125, 0.164),
    bp(150, 200, 0.164, 0.204),
    bp(200, 300, 0.204, 0.404),
    bp(300, 400, 0.404, 0.504),
    bp(400, 500, 0.504, 0.604),
];
static US_O3_8H: [Breakpoint; 5] = [
    bp(0, 50, 0.0, 0.054),
    bp(50, 100, 0.054, 0.070),
    bp(100, 150, 0.070, 0.085),
    bp(150, 200, 0.085, 0.105),
    bp(200, 300, 0.105, 0.200),
];
static US_SO2_1H: [Breakpoint; 3] = [
    bp(0, 50, 0.0, 35.0),
    bp(50, 100, 35.0, 75.0),
    bp(100, 150, 75.0, 185.0),
];
static US_SO2_24H: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 35.0),
    bp(50, 100, 35.0, 75.0),
    bp(100, 150, 75.0, 185.0),
    bp(150, 200, 185.0, 304.0),
    bp(200, 300, 304.0, 604.0),
    bp(300, 400, 604.0, 804.0),
    bp(400, 500, 804.0, 1004.0),
];
static US_PM10: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 54.0),
    bp(50, 100, 54.0, 154.0),
    bp(100, 150, 154.0, 254.0),
    bp(150, 200, 254.0, 354.0),
    bp(200, 300, 354.0, 424.0),
    bp(300, 400, 424.0, 504.0),
    bp(400, 500, 504.0, 604.0),
];
static US_PM2_5: [Breakpoint; 7] = [
    bp(0, 50, 0.0, 12.0),
    bp(50, 100, 12.0, 35.4),
    bp(100, 150, 35.4, 55.4),
    bp(150, 200, 55.4, 150.4),
    bp(200, 300, 150.4, 250.4),
    bp(300, 400, 250.4, 350.4),
    bp(400, 500, 350.4, 500.4),
];

static US_ENTRIES: [ScaleEntry; 8] = [
    ScaleEntry {
        pollutant: Pollutant::Co,
        window: Window::H8,
        required: true,
        gate: Gate::Always,
        convert: Some(US_PPM_CO),
        method: Method::Breakpoints(&US_CO),
    },
    ScaleEntry {
        pollutant: Pollutant::No2,
        window: Window::H1,
        required: true,
        gate: Gate::Always,
        convert: Some(US_PPB_NO2),
        method: Method::Breakpoints(&US_NO2),
    },
    ScaleEntry {
        pollutant: Pollutant::O3,
        window: Window::H1,
        required: false,
        gate: Gate::SkipBelow(0.125),
        convert: Some(US_PPM_O3),
        method: Method::Breakpoints(&US_O3_1H),
    },
    ScaleEntry {
        pollutant: Pollutant::O3,
        window: Window::H8,
        required: true,
        gate: Gate::SkipAbove(0.200),
        convert: Some(US_PPM_O3),
        method: Method::Breakpoints(&US_O3_8H),
    },
    ScaleEntry {
        pollutant: Pollutant::So2,
        window: Window::H1,
        required: true,
        gate: Gate::SkipAbove(185.0),
        convert: Some(US_PPB_SO2),
        method: Method::Breakpoints(&US_SO2_1H),
    },
    ScaleEntry {
        pollutant: Pollutant::So2,
        window: Window::H24,
        required: false,
        gate: Gate::UnlessOther {
            pollutant: Pollutant::So2,
            window: Window::H1,
            at_most: 1567.764,
        },
        convert: Some(US_PPB_SO2),
        method: Method::Breakpoints(&US_SO2_24H),
    },
    ScaleEntry {
        pollutant: Pollutant::Pm10,
        window: Window::H24,
        required: true,
        gate: Gate::Always,
        convert: Some(US_UG_WHOLE),
        method: Method::Breakpoints(&US_PM10),
    },
    ScaleEntry {
        pollutant: Pollutant::Pm2_5,
        window: Window::H24,
        required: true,
        gate: Gate::Always,
        convert: Some(US_UG_TENTHS),
        method: Method::Breakpoints(&US_PM2_5),
    },
];

static US_DESC: [DescriptorBand; 6] = [
    band(0, 50, "Good"),
    band(51, 100, "Moderate"),
    band(101, 150, "Unhealthy for Sensitive Groups"),
    band(151, 200, "Unhealthy"),
    band(201, 300, "Very Unhealthy"),
    band(301, i32::MAX, "Hazardous"),
];

pub static UNITED_STATES: ScaleDefinition = ScaleDefinition {
    id: ScaleId::UnitedStates,
    formula: Formula::SubIndexMax {
        entries: &US_ENTRIES,
        above_table: 501,
    },
    max_index: 500,
    descriptors: DescriptorTable(&US_DESC),
};
