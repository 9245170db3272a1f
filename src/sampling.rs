//! Per-trial noise models.
//!
//! Two independent sources of physical uncertainty feed each trial:
//!
//! 1. **Packing efficiency**: `0.64 + Beta(2, 5) × 0.10`, landing in
//!    [0.64, 0.74). The asymmetric Beta shape is deliberate over a uniform
//!    draw: random sphere packings cluster near random close packing (0.64)
//!    with a long right tail toward denser arrangements.
//! 2. **Diameter jitter**: a `Uniform(0.99, 1.01)` multiplier on the nominal
//!    gumball diameter, modeling ±1% manufacturing and measurement variance.

use rand::Rng;
use rand_distr::{Beta, Distribution, Uniform};

use crate::constants::{
    DIAMETER_JITTER_HIGH, DIAMETER_JITTER_LOW, PACKING_BETA_ALPHA, PACKING_BETA_BETA, PACKING_MIN,
    PACKING_SPAN,
};

/// Draws the per-trial perturbations from an injected generator.
#[derive(Debug, Clone)]
pub(crate) struct TrialSampler {
    packing: Beta<f64>,
    jitter: Uniform<f64>,
}

impl TrialSampler {
    pub(crate) fn new() -> Self {
        // Both constructions are infallible for the fixed engine constants.
        let packing = Beta::new(PACKING_BETA_ALPHA, PACKING_BETA_BETA)
            .expect("Beta shape parameters are fixed engine constants");
        let jitter = Uniform::new(DIAMETER_JITTER_LOW, DIAMETER_JITTER_HIGH)
            .expect("jitter bounds are fixed engine constants");
        Self { packing, jitter }
    }

    /// Packing efficiency for one trial, in [`PACKING_MIN`, `PACKING_MIN + PACKING_SPAN`).
    pub(crate) fn packing_efficiency<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        PACKING_MIN + self.packing.sample(rng) * PACKING_SPAN
    }

    /// Diameter multiplier for one trial.
    pub(crate) fn diameter_multiplier<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.jitter.sample(rng)
    }
}
