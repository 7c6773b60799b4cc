//! Closest-value lookup and the ratio-pair search.
//!
//! The search is a single pass over the catalog: each value in turn plays
//! the base resistor R2, the two scaled targets are snapped to the nearest
//! catalog value, and the candidate is kept only if both achieved ratios
//! land within the tolerance. Everything is deterministic — same catalog,
//! same targets, same output order.

use crate::gain::RatioPair;
use crate::notation::format_resistor;
use std::fmt;
use thiserror::Error;

/// Default absolute ratio tolerance. ±0.005 on a ratio near 0.14 is a bit
/// under 4%, in line with using ±5% parts.
pub const DEFAULT_TOLERANCE: f64 = 0.005;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("catalog is empty")]
    EmptyCatalog,
    #[error("catalog values must be positive and finite, got {0}")]
    BadCatalogValue(f64),
    #[error("target ratios must be positive and finite, got {0}")]
    BadRatio(f64),
    #[error("tolerance must be positive and finite, got {0}")]
    BadTolerance(f64),
}

/// One accepted triple. The matched values are always catalog members and
/// the achieved ratios are exactly `matched / base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Base value assigned to R2.
    pub r2: f64,
    /// Catalog value snapped to the R3 target.
    pub r3: f64,
    /// Catalog value snapped to the R4 target.
    pub r4: f64,
    /// Achieved R3/R2.
    pub ratio3: f64,
    /// Achieved R4/R2.
    pub ratio4: f64,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found possible pair: R2={}, R3={}, R4={}",
            format_resistor(self.r2),
            format_resistor(self.r3),
            format_resistor(self.r4)
        )
    }
}

/// Return the catalog element nearest to `target`.
///
/// Ties go to the first minimal element in iteration order. The catalog
/// must be non-empty; [`find_pairs`] validates that before calling.
pub fn closest(target: f64, catalog: &[f64]) -> f64 {
    debug_assert!(!catalog.is_empty());
    let mut best = catalog[0];
    for &v in &catalog[1..] {
        if (v - target).abs() < (best - target).abs() {
            best = v;
        }
    }
    best
}

/// Search the catalog for base values whose snapped companions achieve both
/// target ratios within `tolerance` (strict less-than).
///
/// Results come back in catalog order, one [`Candidate`] per accepted base.
pub fn find_pairs(
    catalog: &[f64],
    targets: RatioPair,
    tolerance: f64,
) -> Result<Vec<Candidate>, SearchError> {
    if catalog.is_empty() {
        return Err(SearchError::EmptyCatalog);
    }
    if let Some(&bad) = catalog.iter().find(|v| !v.is_finite() || **v <= 0.0) {
        return Err(SearchError::BadCatalogValue(bad));
    }
    for ratio in [targets.r3, targets.r4] {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(SearchError::BadRatio(ratio));
        }
    }
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(SearchError::BadTolerance(tolerance));
    }

    let mut found = Vec::new();
    for &r2 in catalog {
        let r3 = closest(targets.r3 * r2, catalog);
        let r4 = closest(targets.r4 * r2, catalog);
        let ratio3 = r3 / r2;
        let ratio4 = r4 / r2;

        if (ratio3 - targets.r3).abs() < tolerance && (ratio4 - targets.r4).abs() < tolerance {
            found.push(Candidate {
                r2,
                r3,
                r4,
                ratio3,
                ratio4,
            });
        }
    }
    Ok(found)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series;

    fn original_targets() -> RatioPair {
        RatioPair {
            r3: 50.0 / 343.0,
            r4: 50.0 / 357.0,
        }
    }

    #[test]
    fn closest_returns_a_member() {
        let cat = series::stock();
        for target in [0.0, 1.0, 137.0, 4999.0, 2e6] {
            let c = closest(target, &cat);
            assert!(cat.contains(&c), "{c} not in catalog for target {target}");
        }
    }

    #[test]
    fn closest_tie_goes_to_first() {
        // 90 and 110 are equidistant from 100; iteration order decides.
        assert_eq!(closest(100.0, &[90.0, 110.0]), 90.0);
        assert_eq!(closest(100.0, &[110.0, 90.0]), 110.0);
    }

    #[test]
    fn stock_catalog_accepted_set() {
        let found = find_pairs(&series::stock(), original_targets(), DEFAULT_TOLERANCE).unwrap();
        let triples: Vec<(f64, f64, f64)> = found.iter().map(|c| (c.r2, c.r3, c.r4)).collect();
        assert_eq!(
            triples,
            vec![
                (330.0, 47.0, 47.0),
                (3300.0, 470.0, 470.0),
                (4700.0, 680.0, 680.0),
                (47000.0, 6800.0, 6800.0),
                (470000.0, 68000.0, 68000.0),
            ]
        );
    }

    #[test]
    fn base_1000_is_evaluated_and_rejected() {
        // R4 target is 140.06, snapping to 150 — a deviation of 0.00994,
        // outside the 0.005 window. R3 alone would pass (dev 0.00423).
        let cat = series::stock();
        assert!(cat.contains(&1000.0));
        let found = find_pairs(&cat, original_targets(), DEFAULT_TOLERANCE).unwrap();
        assert!(found.iter().all(|c| c.r2 != 1000.0));
    }

    #[test]
    fn achieved_ratio_is_exact_quotient() {
        let found = find_pairs(&series::stock(), original_targets(), DEFAULT_TOLERANCE).unwrap();
        for c in &found {
            assert_eq!(c.ratio3, c.r3 / c.r2);
            assert_eq!(c.ratio4, c.r4 / c.r2);
        }
    }

    #[test]
    fn deviation_exactly_at_tolerance_is_excluded() {
        // All values binary-exact: base 128, targets 0.25, snap lands on 36
        // (scaled target 32), achieved 36/128 = 0.28125, deviation exactly
        // 0.03125 — the strict < must reject it.
        let cat = [128.0, 36.0];
        let targets = RatioPair { r3: 0.25, r4: 0.25 };
        let found = find_pairs(&cat, targets, 0.03125).unwrap();
        assert!(found.is_empty());
        // A hair more tolerance admits it.
        let found = find_pairs(&cat, targets, 0.03125 + 1e-9).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].r2, 128.0);
        assert_eq!(found[0].r3, 36.0);
    }

    #[test]
    fn search_is_deterministic() {
        let a = find_pairs(&series::stock(), original_targets(), DEFAULT_TOLERANCE).unwrap();
        let b = find_pairs(&series::stock(), original_targets(), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_catalog_rejected() {
        assert_eq!(
            find_pairs(&[], original_targets(), DEFAULT_TOLERANCE),
            Err(SearchError::EmptyCatalog)
        );
    }

    #[test]
    fn nonpositive_catalog_value_rejected() {
        assert_eq!(
            find_pairs(&[100.0, 0.0], original_targets(), DEFAULT_TOLERANCE),
            Err(SearchError::BadCatalogValue(0.0))
        );
    }

    #[test]
    fn bad_tolerance_rejected() {
        assert_eq!(
            find_pairs(&[100.0], original_targets(), 0.0),
            Err(SearchError::BadTolerance(0.0))
        );
    }

    #[test]
    fn bad_ratio_rejected() {
        let targets = RatioPair { r3: -1.0, r4: 0.5 };
        assert_eq!(
            find_pairs(&[100.0], targets, DEFAULT_TOLERANCE),
            Err(SearchError::BadRatio(-1.0))
        );
    }

    #[test]
    fn display_uses_notation() {
        let c = Candidate {
            r2: 4700.0,
            r3: 680.0,
            r4: 680.0,
            ratio3: 680.0 / 4700.0,
            ratio4: 680.0 / 4700.0,
        };
        assert_eq!(
            c.to_string(),
            "Found possible pair: R2=4.7K, R3=680R, R4=680R"
        );
    }
}
