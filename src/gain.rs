//! Target ratios from the op-amp gain and divider equations.
//!
//! The stage under design is a non-inverting amplifier whose feedback
//! network is split so the junction of R3 and R4 doubles as a reference
//! divider:
//!
//! ```text
//!   gain:    1 + R2·(R3 + R4) / (R3·R4) = G
//!   divider: R4 / (R3 + R4) · Vref      = Vtap
//! ```
//!
//! With `k = Vtap/Vref` these solve in closed form to
//! `R3/R2 = 1/(k·(G−1))` and `R4/R2 = 1/((1−k)·(G−1))`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GainError {
    #[error("closed-loop gain must be greater than 1, got {0}")]
    GainTooLow(f64),
    #[error("reference voltage must be positive, got {0}")]
    BadReference(f64),
    #[error("tap voltage {v_tap} must lie strictly between 0 and the reference {v_ref}")]
    TapOutOfRange { v_tap: f64, v_ref: f64 },
}

/// A pair of target ratios relative to the base resistor R2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPair {
    /// Target R3/R2.
    pub r3: f64,
    /// Target R4/R2.
    pub r4: f64,
}

/// Design point for the stage: closed-loop gain plus the divider voltages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainStage {
    /// Closed-loop gain G of the non-inverting stage.
    pub gain: f64,
    /// Voltage across the full R3+R4 divider.
    pub v_ref: f64,
    /// Desired voltage at the R3/R4 junction.
    pub v_tap: f64,
}

impl GainStage {
    /// Solve the stage equations for the two resistor ratios.
    pub fn target_ratios(&self) -> Result<RatioPair, GainError> {
        if !self.gain.is_finite() || self.gain <= 1.0 {
            return Err(GainError::GainTooLow(self.gain));
        }
        if !self.v_ref.is_finite() || self.v_ref <= 0.0 {
            return Err(GainError::BadReference(self.v_ref));
        }
        if !self.v_tap.is_finite() || self.v_tap <= 0.0 || self.v_tap >= self.v_ref {
            return Err(GainError::TapOutOfRange {
                v_tap: self.v_tap,
                v_ref: self.v_ref,
            });
        }

        let k = self.v_tap / self.v_ref;
        Ok(RatioPair {
            r3: 1.0 / (k * (self.gain - 1.0)),
            r4: 1.0 / ((1.0 - k) * (self.gain - 1.0)),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
