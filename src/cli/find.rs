use super::{resolve_catalog, search_and_report, SearchOpts};
use gainmatch::gain::RatioPair;

pub fn run(ratio_r3: f64, ratio_r4: f64, opts: &SearchOpts) {
    let catalog = resolve_catalog(opts);
    let targets = RatioPair {
        r3: ratio_r3,
        r4: ratio_r4,
    };

    eprintln!(
        "Targets: R3/R2={:.6}, R4/R2={:.6} over {} catalog values",
        targets.r3,
        targets.r4,
        catalog.len()
    );
    search_and_report(&catalog, targets, opts.tolerance);
}
