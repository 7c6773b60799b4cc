//! Subcommand drivers: catalog resolution plus the shared search/report path.

pub mod find;
pub mod solve;

use clap::Args;
use colored::Colorize;
use gainmatch::gain::RatioPair;
use gainmatch::{config, search, series};
use std::path::Path;
use std::process;

/// Catalog and tolerance options shared by every subcommand.
#[derive(Args, Debug)]
pub struct SearchOpts {
    /// Maximum absolute deviation of an achieved ratio from its target.
    #[arg(long, default_value_t = search::DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Value series: "stock" (on-hand assortment), "e12", or "e24".
    #[arg(long, default_value = "stock")]
    pub series: String,

    /// Inclusive decade range for e12/e24 expansion, e.g. "0..6" (1Ω–9.1MΩ).
    #[arg(long, default_value = "0..6")]
    pub decades: String,

    /// Read the catalog from a file instead (one value per line, "#" comments).
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Build the catalog from the options, falling back to the built-in stock
/// list. Exits with a message on any error.
pub fn resolve_catalog(opts: &SearchOpts) -> Vec<f64> {
    if let Some(path) = &opts.catalog {
        return config::load_catalog_file(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        });
    }

    match opts.series.as_str() {
        "stock" => {
            // ~/.config/gainmatch/catalog overrides the built-in list
            match config::load_user_catalog() {
                Ok(Some(catalog)) => catalog,
                Ok(None) => series::stock(),
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            }
        }
        "e12" | "e24" => {
            let (first, last) = parse_decades(&opts.decades).unwrap_or_else(|| {
                eprintln!(
                    "Error: --decades must look like LO..HI (e.g. 0..6), got {:?}",
                    opts.decades
                );
                process::exit(1);
            });
            let table: &[f64] = if opts.series == "e12" {
                &series::E12
            } else {
                &series::E24
            };
            series::expand_decades(table, first, last)
        }
        other => {
            eprintln!("Error: unknown series {other:?}, expected stock, e12 or e24");
            process::exit(1);
        }
    }
}

fn parse_decades(range: &str) -> Option<(i32, i32)> {
    let (lo, hi) = range.split_once("..")?;
    let first = lo.trim().parse().ok()?;
    let last = hi.trim().parse().ok()?;
    (first <= last).then_some((first, last))
}

/// Run the search and print one line per candidate. The summary goes to
/// stderr so stdout stays pipeable.
pub fn search_and_report(catalog: &[f64], targets: RatioPair, tolerance: f64) {
    let found = search::find_pairs(catalog, targets, tolerance).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    for candidate in &found {
        println!("{candidate}");
    }

    if found.is_empty() {
        eprintln!(
            "{} no catalog base hits both ratios within ±{tolerance}",
            "No matches:".yellow()
        );
    } else {
        eprintln!(
            "{} {} of {} base values matched within ±{tolerance}",
            "Done:".green(),
            found.len(),
            catalog.len()
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
