use super::{resolve_catalog, search_and_report, SearchOpts};
use gainmatch::gain::GainStage;
use std::process;

pub fn run(gain: f64, vref: f64, vtap: f64, opts: &SearchOpts) {
    let stage = GainStage {
        gain,
        v_ref: vref,
        v_tap: vtap,
    };
    let targets = stage.target_ratios().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let catalog = resolve_catalog(opts);
    eprintln!(
        "Stage:   G={gain}, Vref={vref} V, Vtap={vtap} V",
    );
    eprintln!(
        "Targets: R3/R2={:.6}, R4/R2={:.6} over {} catalog values",
        targets.r3,
        targets.r4,
        catalog.len()
    );
    search_and_report(&catalog, targets, opts.tolerance);
}
