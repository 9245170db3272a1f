//! Monte Carlo aggregation over randomized trials.
//!
//! The aggregator is the only component that touches randomness or
//! statistical reduction. Each trial draws a fresh packing efficiency and a
//! jittered gumball diameter, runs the deterministic single-trial estimator,
//! and appends the estimate; the full sequence is then reduced into summary
//! statistics and a Student-t confidence interval for the mean.
//!
//! Randomness is injected: [`run_simulation_with_rng`] accepts any [`Rng`],
//! and [`run_simulation`] wraps it with a `Xoshiro256PlusPlus` seeded from
//! the configuration (or from process entropy when no seed is set).

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::SimulationConfig;
use crate::constants::CONFIDENCE_LEVEL;
use crate::error::SimulationError;
use crate::estimator::estimate_count;
use crate::geometry::{GumballSpec, JarSpec};
use crate::result::SimulationResult;
use crate::sampling::TrialSampler;
use crate::statistics;

/// Run a full simulation with a generator owned by this call.
///
/// Resolves the configured seed (drawing one from process entropy if the
/// configuration has none) and delegates to [`run_simulation_with_rng`].
///
/// # Errors
///
/// See [`run_simulation_with_rng`].
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult, SimulationError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, trials = config.trials, "running gumball simulation");

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    run_simulation_with_rng(config, &mut rng)
}

/// Run a full simulation, drawing all trial noise from `rng`.
///
/// This is the core entry point; injecting the generator keeps runs
/// deterministic under test. Trials execute sequentially and independently,
/// and the estimate sequence preserves trial order (the aggregate statistics
/// are order-invariant).
///
/// # Errors
///
/// [`SimulationError::InvalidInput`] if any geometric input, fraction, or
/// the trial count is out of range; [`SimulationError::InsufficientSamples`]
/// if the trial count is 1. Validation happens before the first trial, so a
/// failed call has done no sampling work.
pub fn run_simulation_with_rng<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationResult, SimulationError> {
    config.validate()?;

    let sampler = TrialSampler::new();
    let mut estimates = Vec::with_capacity(config.trials);
    // Overwritten on every trial; validate() guarantees at least two.
    let mut last_packing_efficiency = 0.0;

    for _ in 0..config.trials {
        let packing_efficiency = sampler.packing_efficiency(rng);
        let varied_gumball =
            GumballSpec::new(config.gumball.diameter * sampler.diameter_multiplier(rng));

        let estimate = estimate_count(
            &config.jar,
            &varied_gumball,
            config.fill_fraction,
            packing_efficiency,
        )?;

        estimates.push(estimate);
        last_packing_efficiency = packing_efficiency;
    }

    let mean = statistics::mean(&estimates);
    let std_dev = statistics::population_std_dev(&estimates);
    let median = statistics::median(&estimates);
    let standard_error = statistics::standard_error(&estimates);
    let confidence_interval =
        statistics::confidence_interval(mean, standard_error, estimates.len(), CONFIDENCE_LEVEL);

    Ok(SimulationResult {
        estimates,
        mean,
        std_dev,
        median,
        standard_error,
        confidence_interval,
        last_packing_efficiency,
    })
}

/// Run the same scenario at several trial counts.
///
/// Useful for showing how the confidence interval narrows as the trial
/// count grows. All runs share one generator stream seeded from the
/// configuration, so a seeded sweep is reproducible end to end.
///
/// # Errors
///
/// Fails on the first trial count that is out of range; results for
/// earlier counts are discarded.
pub fn run_sweep(
    config: &SimulationConfig,
    trial_counts: &[usize],
) -> Result<Vec<SimulationResult>, SimulationError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    let mut results = Vec::with_capacity(trial_counts.len());
    for &trials in trial_counts {
        let run = SimulationConfig {
            trials,
            ..config.clone()
        };
        results.push(run_simulation_with_rng(&run, &mut rng)?);
    }
    Ok(results)
}

/// Builder-style entry point for one-off runs.
///
/// # Example
///
/// ```
/// use gumball_sim::{GumballSpec, JarSpec, Simulator};
///
/// let result = Simulator::new(
///     JarSpec::new(0.144, 0.453),
///     GumballSpec::new(0.0155),
///     0.37,
/// )
/// .trials(1_000)
/// .seed(42)
/// .run()
/// .unwrap();
///
/// assert_eq!(result.trials(), 1_000);
/// assert!(result.confidence_interval.contains(result.mean));
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Create a simulator for the given physical scenario.
    pub fn new(jar: JarSpec, gumball: GumballSpec, fill_fraction: f64) -> Self {
        Self {
            config: SimulationConfig::new(jar, gumball, fill_fraction),
        }
    }

    /// Set the trial count.
    pub fn trials(mut self, trials: usize) -> Self {
        self.config = self.config.trials(trials);
        self
    }

    /// Set a deterministic seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.seed(seed);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the simulation.
    ///
    /// # Errors
    ///
    /// See [`run_simulation`].
    pub fn run(self) -> Result<SimulationResult, SimulationError> {
        run_simulation(&self.config)
    }

    /// Run the simulation with an injected generator.
    ///
    /// # Errors
    ///
    /// See [`run_simulation_with_rng`].
    pub fn run_with_rng<R: Rng + ?Sized>(
        self,
        rng: &mut R,
    ) -> Result<SimulationResult, SimulationError> {
        run_simulation_with_rng(&self.config, rng)
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
    fn test_seeded_runs_are_reproducible() {
        let config = reference_config().trials(200).seed(7);
        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = run_simulation(&reference_config().trials(200).seed(1)).unwrap();
        let b = run_simulation(&reference_config().trials(200).seed(2)).unwrap();
        assert_ne!(a.estimates, b.estimates);
    }

    #[test]
    fn test_invalid_config_fails_before_sampling() {
        let mut config = reference_config();
        config.gumball.diameter = 0.0;
        assert!(matches!(
            run_simulation(&config),
            Err(SimulationError::InvalidInput {
                parameter: "gumball.diameter",
                ..
            })
        ));
    }

    #[test]
    fn test_sweep_produces_one_result_per_count() {
        let config = reference_config().seed(3);
        let results = run_sweep(&config, &[10, 100, 1000]).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].trials(), 10);
        assert_eq!(results[1].trials(), 100);
        assert_eq!(results[2].trials(), 1000);
    }

    #[test]
    fn test_sweep_is_reproducible_when_seeded() {
        let config = reference_config().seed(5);
        let a = run_sweep(&config, &[10, 50]).unwrap();
        let b = run_sweep(&config, &[10, 50]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulator_builder_round_trip() {
        let simulator = Simulator::new(
            JarSpec::new(0.144, 0.453),
            GumballSpec::new(0.0155),
            0.37,
        )
        .trials(500)
        .seed(42);

        assert_eq!(simulator.config().trials, 500);
        assert_eq!(simulator.config().seed, Some(42));
    }
}
