//! Configuration for simulation runs.

use crate::constants::{DEFAULT_TRIALS, MAX_TRIALS};
use crate::error::SimulationError;
use crate::geometry::{GumballSpec, JarSpec};

/// One simulation request: the physical scenario plus run controls.
///
/// All state for a run lives here and travels into the aggregator by
/// argument; nothing is process-wide. Lengths must be self-consistent in
/// one unit system chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Dimensions of the jar.
    pub jar: JarSpec,

    /// Nominal dimensions of one gumball.
    pub gumball: GumballSpec,

    /// Fraction of the jar's total volume occupied by the gumball mass,
    /// in (0, 1]. Accounts for headspace above the fill line; see
    /// [`JarSpec::fill_fraction_with_headspace`] to derive it from a
    /// headspace measurement.
    pub fill_fraction: f64,

    /// Number of Monte Carlo trials. Must be at least 2 (a confidence
    /// interval needs one degree of freedom) and at most
    /// [`MAX_TRIALS`]. Default: 10,000.
    pub trials: usize,

    /// Optional deterministic seed for the trial generator.
    ///
    /// When set, runs are reproducible: same configuration + same seed =
    /// same result. Default: None (seed drawn from process entropy).
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a configuration with default run controls.
    pub fn new(jar: JarSpec, gumball: GumballSpec, fill_fraction: f64) -> Self {
        Self {
            jar,
            gumball,
            fill_fraction,
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the trial count.
    pub fn trials(mut self, trials: usize) -> Self {
        assert!(trials > 0, "trials must be > 0");
        self.trials = trials;
        self
    }

    /// Set a deterministic seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration can produce a sound estimate.
    ///
    /// Runs the same screen the aggregator applies at its boundary, so
    /// callers can reject bad requests before paying for a run.
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidInput`] for out-of-range geometry,
    /// fractions, or trial counts; [`SimulationError::InsufficientSamples`]
    /// for a trial count of 1.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.jar.height > 0.0) {
            return Err(SimulationError::InvalidInput {
                parameter: "jar.height",
                value: self.jar.height,
            });
        }
        if !(self.jar.circumference > 0.0) {
            return Err(SimulationError::InvalidInput {
                parameter: "jar.circumference",
                value: self.jar.circumference,
            });
        }
        if !(self.gumball.diameter > 0.0) {
            return Err(SimulationError::InvalidInput {
                parameter: "gumball.diameter",
                value: self.gumball.diameter,
            });
        }
        if !(self.fill_fraction > 0.0 && self.fill_fraction <= 1.0) {
            return Err(SimulationError::InvalidInput {
                parameter: "fill_fraction",
                value: self.fill_fraction,
            });
        }
        if self.trials == 0 || self.trials > MAX_TRIALS {
            return Err(SimulationError::InvalidInput {
                parameter: "trials",
                value: self.trials as f64,
            });
        }
        if self.trials < 2 {
            return Err(SimulationError::InsufficientSamples {
                trials: self.trials,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_config() -> SimulationConfig {
        SimulationConfig::new(
            JarSpec::new(0.144, 0.453),
            GumballSpec::new(0.0155),
            0.37,
        )
    }

    #[test]
    fn test_defaults() {
        let config = reference_config();
        assert_eq!(config.trials, DEFAULT_TRIALS);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_methods() {
        let config = reference_config().trials(500).seed(99);
        assert_eq!(config.trials, 500);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(reference_config().validate().is_ok());
    }

    #[test]
    fn test_zero_height_rejected() {
        let mut config = reference_config();
        config.jar.height = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidInput {
                parameter: "jar.height",
                ..
            })
        ));
    }

    #[test]
    fn test_fill_fraction_bounds() {
        let mut config = reference_config();
        config.fill_fraction = 0.0;
        assert!(config.validate().is_err());

        config.fill_fraction = 1.0;
        assert!(config.validate().is_ok());

        config.fill_fraction = 1.0001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_single_trial_is_insufficient() {
        let mut config = reference_config();
        config.trials = 1;
        assert_eq!(
            config.validate(),
            Err(SimulationError::InsufficientSamples { trials: 1 })
        );
    }

    #[test]
    fn test_zero_trials_is_invalid_input() {
        let mut config = reference_config();
        config.trials = 0;
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidInput {
                parameter: "trials",
                ..
            })
        ));
    }

    #[test]
    fn test_trial_ceiling_enforced() {
        let mut config = reference_config();
        config.trials = MAX_TRIALS;
        assert!(config.validate().is_ok());

        config.trials = MAX_TRIALS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    #[should_panic(expected = "trials must be > 0")]
    fn test_builder_zero_trials_panics() {
        let _ = reference_config().trials(0);
    }
}
