//! Single-trial volumetric estimator.
//!
//! One deterministic estimate: how many gumballs of a given diameter fit in
//! the usable fraction of a jar at a given packing efficiency. The Monte
//! Carlo aggregator calls this once per trial with perturbed inputs; it is
//! equally usable standalone for a point estimate.

use crate::error::SimulationError;
use crate::geometry::{GumballSpec, JarSpec};

/// Estimate the gumball count for one fixed set of inputs.
///
/// The usable volume is `jar volume × fill_fraction × packing_efficiency`;
/// the estimate is that volume divided by the volume of one gumball. The
/// result is deterministic and non-negative, and is left fractional: callers
/// decide whether to floor it to a whole count.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidInput`] if any jar dimension or the
/// gumball diameter is non-positive, or if `fill_fraction` or
/// `packing_efficiency` falls outside (0, 1]. In particular a zero diameter
/// is rejected here rather than dividing through to infinity.
pub fn estimate_count(
    jar: &JarSpec,
    gumball: &GumballSpec,
    fill_fraction: f64,
    packing_efficiency: f64,
) -> Result<f64, SimulationError> {
    ensure_positive("jar.height", jar.height)?;
    ensure_positive("jar.circumference", jar.circumference)?;
    ensure_positive("gumball.diameter", gumball.diameter)?;
    ensure_unit_fraction("fill_fraction", fill_fraction)?;
    ensure_unit_fraction("packing_efficiency", packing_efficiency)?;

    let usable = jar.volume() * fill_fraction * packing_efficiency;
    Ok(usable / gumball.volume())
}

fn ensure_positive(parameter: &'static str, value: f64) -> Result<(), SimulationError> {
    // `!(value > 0.0)` also catches NaN.
    if !(value > 0.0) {
        return Err(SimulationError::InvalidInput { parameter, value });
    }
    Ok(())
}

fn ensure_unit_fraction(parameter: &'static str, value: f64) -> Result<(), SimulationError> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(SimulationError::InvalidInput { parameter, value });
    }
    Ok(())
}
