//! Fixed engine constants for the Monte Carlo estimator.
//!
//! The noise-model parameters below are engine constants, not caller-tunable
//! configuration: the packing-efficiency distribution and the diameter jitter
//! encode physical assumptions about random sphere packing and measurement
//! variance, and changing them changes what the estimate means.

// =============================================================================
// Packing-efficiency noise model
// =============================================================================

/// Shape parameter α of the Beta draw for per-trial packing efficiency.
pub const PACKING_BETA_ALPHA: f64 = 2.0;

/// Shape parameter β of the Beta draw for per-trial packing efficiency.
///
/// Beta(2, 5) concentrates mass toward the lower end of the packing range
/// with a long right tail, matching how random (non-crystalline) sphere
/// packings empirically cluster near random close packing.
pub const PACKING_BETA_BETA: f64 = 5.0;

/// Lower bound of the packing-efficiency range (random close packing ≈ 0.64).
pub const PACKING_MIN: f64 = 0.64;

/// Width of the packing-efficiency range.
///
/// Per-trial draws land in `[PACKING_MIN, PACKING_MIN + PACKING_SPAN)`.
pub const PACKING_SPAN: f64 = 0.10;

// =============================================================================
// Diameter noise model
// =============================================================================

/// Lower bound of the per-trial diameter multiplier (−1% variance).
pub const DIAMETER_JITTER_LOW: f64 = 0.99;

/// Upper bound of the per-trial diameter multiplier (+1% variance).
pub const DIAMETER_JITTER_HIGH: f64 = 1.01;

// =============================================================================
// Aggregation
// =============================================================================

/// Two-sided confidence level for the interval on the mean estimate.
pub const CONFIDENCE_LEVEL: f64 = 0.95;

/// Default number of Monte Carlo trials per run.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Hard ceiling on trials per run.
///
/// The per-trial estimate buffer costs 8 bytes per trial, so this bound keeps
/// a single run under 1 GiB. Requests beyond it are rejected as invalid input
/// at the aggregator boundary.
pub const MAX_TRIALS: usize = 100_000_000;
