//! End-to-end checks: gain equations through catalog search through the
//! printed notation, on both the stock catalog and generated E-series.

use gainmatch::gain::{GainStage, RatioPair};
use gainmatch::{find_pairs, notation, search, series};

fn original_targets() -> RatioPair {
    RatioPair {
        r3: 50.0 / 343.0,
        r4: 50.0 / 357.0,
    }
}

#[test]
fn stock_search_reproduces_known_output() {
    let found = find_pairs(&series::stock(), original_targets(), search::DEFAULT_TOLERANCE)
        .unwrap();
    let report: Vec<String> = found.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        report,
        vec![
            "Found possible pair: R2=330R, R3=47R, R4=47R",
            "Found possible pair: R2=3.3K, R3=470R, R4=470R",
            "Found possible pair: R2=4.7K, R3=680R, R4=680R",
            "Found possible pair: R2=47K, R3=6.8K, R4=6.8K",
            "Found possible pair: R2=470K, R3=68K, R4=68K",
        ]
    );
}

#[test]
fn solved_stage_matches_hand_constants_end_to_end() {
    let stage = GainStage {
        gain: 15.0,
        v_ref: 5.0,
        v_tap: 2.45,
    };
    let solved = stage.target_ratios().unwrap();
    let from_solver = find_pairs(&series::stock(), solved, 0.005).unwrap();
    let from_constants = find_pairs(&series::stock(), original_targets(), 0.005).unwrap();
    assert_eq!(from_solver, from_constants);
}

#[test]
fn every_match_is_a_catalog_member() {
    let catalog = series::expand_decades(&series::E24, 0, 6);
    let found = find_pairs(&catalog, original_targets(), 0.005).unwrap();
    assert!(!found.is_empty());
    for c in &found {
        assert!(catalog.contains(&c.r2));
        assert!(catalog.contains(&c.r3));
        assert!(catalog.contains(&c.r4));
        assert!((c.ratio3 - original_targets().r3).abs() < 0.005);
        assert!((c.ratio4 - original_targets().r4).abs() < 0.005);
    }
}

#[test]
fn e24_catalog_finds_more_options_than_stock() {
    let stock = find_pairs(&series::stock(), original_targets(), 0.005).unwrap();
    let e24 = find_pairs(
        &series::expand_decades(&series::E24, 0, 6),
        original_targets(),
        0.005,
    )
    .unwrap();
    assert!(e24.len() > stock.len());
}

#[test]
fn reported_notation_parses_back_to_the_value() {
    let found = find_pairs(&series::stock(), original_targets(), 0.005).unwrap();
    for c in &found {
        for v in [c.r2, c.r3, c.r4] {
            let text = notation::format_resistor(v);
            assert_eq!(notation::parse_resistor(&text).unwrap(), v);
        }
    }
}
