//! gainmatch — pick standard resistor values for op-amp gain networks.
//!
//! Given a non-inverting gain stage whose feedback divider is split into two
//! resistors (R3, R4) against a reference resistor (R2), the target ratios
//! R3/R2 and R4/R2 rarely land on standard component values. This crate
//! searches a catalog of standard magnitudes for base values whose snapped
//! companions hit both ratios within a tolerance.
//!
//! # Modules
//!
//! - [`series`] — E-series value tables, decade expansion, stock catalog
//! - [`notation`] — engineering notation (`4.7K`, `470R`, `1M`) in and out
//! - [`gain`] — target ratios from the gain and divider equations
//! - [`search`] — closest-value lookup and ratio-pair search
//! - [`config`] — optional user catalog under `~/.config/gainmatch/`

pub mod config;
pub mod gain;
pub mod notation;
pub mod search;
pub mod series;

pub use gain::{GainStage, RatioPair};
pub use search::{closest, find_pairs, Candidate};

// ---------------------------------------------------------------------------
// Integration tests
// ---------------------------------------------------------------------------
