//! Standard resistor value series.
//!
//! Preferred-number tables (IEC 60063) give the values available in one
//! decade; real catalogs repeat them across decades. The default catalog is
//! a fixed "parts drawer" list rather than a full series — what matters to
//! the search is only that it is an ordered list of positive magnitudes.

/// E12 series: 12 values per decade, ±10% tolerance parts.
pub const E12: [f64; 12] = [
    1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2,
];

/// E24 series: 24 values per decade, ±5% tolerance parts.
pub const E24: [f64; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

/// Expand a per-decade table across an inclusive decade range.
///
/// `expand_decades(&E24, 0, 6)` covers 1 Ω through 9.1 MΩ. Values come out
/// ordered: ascending within each decade, decades ascending.
pub fn expand_decades(series: &[f64], first: i32, last: i32) -> Vec<f64> {
    let mut out = Vec::with_capacity(series.len() * (last - first + 1).max(0) as usize);
    for decade in first..=last {
        let mult = 10f64.powi(decade);
        out.extend(series.iter().map(|r| r * mult));
    }
    out
}

/// The default catalog: the fixed on-hand assortment, 10 Ω to 1 MΩ.
pub fn stock() -> Vec<f64> {
    vec![
        10.0, 22.0, 47.0, 100.0, 150.0, 200.0, 220.0, 270.0, 330.0, 470.0, 680.0, 1_000.0,
        2_000.0, 2_200.0, 3_300.0, 4_700.0, 5_100.0, 6_800.0, 10_000.0, 20_000.0, 47_000.0,
        51_000.0, 68_000.0, 100_000.0, 220_000.0, 300_000.0, 470_000.0, 510_000.0, 680_000.0,
        1e6,
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
