//! Result types for a completed simulation run.

use serde::{Deserialize, Serialize};

/// Two-sided confidence interval for the mean estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
}

impl ConfidenceInterval {
    /// Midpoint of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Width of the interval (an uncertainty measure).
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Whether the interval contains `value`.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Aggregate outcome of one Monte Carlo run.
///
/// Immutable once returned. The per-trial estimates are kept alongside the
/// summaries so an external reporting collaborator can render histograms,
/// box plots, or CDFs without re-running the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Per-trial estimates in accumulation order; length equals the
    /// configured trial count.
    pub estimates: Vec<f64>,

    /// Arithmetic mean of the estimates.
    pub mean: f64,

    /// Population standard deviation of the estimates (divisor N).
    pub std_dev: f64,

    /// Median of the estimates.
    pub median: f64,

    /// Standard error of the mean, computed from the sample standard
    /// deviation (divisor N − 1). Deliberately a different convention from
    /// [`std_dev`](Self::std_dev); reports show both values.
    pub standard_error: f64,

    /// 95% Student-t confidence interval for the mean.
    pub confidence_interval: ConfidenceInterval,

    /// Packing efficiency drawn for the final trial only.
    ///
    /// A per-trial diagnostic, not an aggregate: it says nothing about the
    /// other trials and must not be read as representative of the run.
    pub last_packing_efficiency: f64,
}

impl SimulationResult {
    /// Number of trials behind this result.
    pub fn trials(&self) -> usize {
        self.estimates.len()
    }
}
