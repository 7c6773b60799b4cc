mod cli;

use clap::{Parser, Subcommand};
use cli::SearchOpts;

#[derive(Parser)]
#[command(
    name = "gainmatch",
    about = "Standard resistor matcher — op-amp gain ratios → E-series triples"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog for R2/R3/R4 triples hitting explicit target ratios.
    Find {
        /// Target R3/R2 ratio.
        #[arg(long, default_value_t = 50.0 / 343.0)]
        ratio_r3: f64,
        /// Target R4/R2 ratio.
        #[arg(long, default_value_t = 50.0 / 357.0)]
        ratio_r4: f64,
        #[command(flatten)]
        opts: SearchOpts,
    },
    /// Derive the target ratios from the gain equations, then search.
    Solve {
        /// Closed-loop gain of the non-inverting stage.
        #[arg(long, default_value_t = 15.0)]
        gain: f64,
        /// Voltage across the full R3+R4 divider.
        #[arg(long, default_value_t = 5.0)]
        vref: f64,
        /// Desired voltage at the R3/R4 junction.
        #[arg(long, default_value_t = 2.45)]
        vtap: f64,
        #[command(flatten)]
        opts: SearchOpts,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Find {
            ratio_r3,
            ratio_r4,
            opts,
        } => cli::find::run(ratio_r3, ratio_r4, &opts),
        Command::Solve {
            gain,
            vref,
            vtap,
            opts,
        } => cli::solve::run(gain, vref, vtap, &opts),
    }
}
