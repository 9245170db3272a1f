//! # gumball-sim
//!
//! Estimate how many gumballs fit in a cylindrical jar.
//!
//! The estimate is volumetric: the jar's usable volume (total volume ×
//! fill fraction × packing efficiency) divided by the volume of one gumball.
//! Because two of those factors are physically uncertain, the crate wraps
//! the arithmetic in a Monte Carlo engine that perturbs them per trial and
//! reports the resulting spread:
//! - Packing efficiency drawn from a scaled Beta(2, 5) over [0.64, 0.74)
//! - Gumball diameter jittered by a Uniform(0.99, 1.01) multiplier
//! - Mean, standard deviation, median, standard error, and a 95% Student-t
//!   confidence interval over the per-trial estimates
//!
//! Plotting and report formatting are out of scope: results carry the raw
//! per-trial estimates alongside the summaries so external tooling can
//! render them.
//!
//! ## Quick Start
//!
//! ```
//! use gumball_sim::{GumballSpec, JarSpec, Simulator};
//!
//! // A 14.4 cm tall jar, 45.3 cm around, filled to 37% of its volume
//! // with gumballs averaging 15.5 mm across. All lengths in meters.
//! let result = Simulator::new(
//!     JarSpec::new(0.144, 0.453),
//!     GumballSpec::new(0.0155),
//!     0.37,
//! )
//! .trials(10_000)
//! .seed(42)
//! .run()
//! .unwrap();
//!
//! println!(
//!     "{:.0} gumballs (95% CI {:.0}..{:.0})",
//!     result.mean, result.confidence_interval.low, result.confidence_interval.high,
//! );
//! ```
//!
//! Runs are reproducible when seeded; leave the seed unset for an
//! entropy-seeded run. For deterministic tests, inject a generator through
//! [`run_simulation_with_rng`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod constants;
mod error;
mod estimator;
mod geometry;
mod result;
mod sampling;
mod simulation;
pub mod statistics;

pub use config::SimulationConfig;
pub use constants::{
    CONFIDENCE_LEVEL, DEFAULT_TRIALS, DIAMETER_JITTER_HIGH, DIAMETER_JITTER_LOW, MAX_TRIALS,
    PACKING_BETA_ALPHA, PACKING_BETA_BETA, PACKING_MIN, PACKING_SPAN,
};
pub use error::SimulationError;
pub use estimator::estimate_count;
pub use geometry::{cylinder_volume, sphere_volume, GumballSpec, JarSpec};
pub use result::{ConfidenceInterval, SimulationResult};
pub use simulation::{run_simulation, run_simulation_with_rng, run_sweep, Simulator};
