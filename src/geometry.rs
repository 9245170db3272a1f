//! Volume primitives for jar and gumball geometry.
//!
//! The two free functions are pure and total over positive reals. They do
//! not validate their inputs: a zero or negative dimension produces a zero
//! or negative volume, and it is the caller's job to screen inputs first
//! (the estimator and aggregator boundaries do).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Volume of a right circular cylinder from its height and circumference.
///
/// The radius is derived as `circumference / (2π)`, giving `π·r²·height`.
///
/// Precondition: `height > 0`, `circumference > 0` (not validated).
pub fn cylinder_volume(height: f64, circumference: f64) -> f64 {
    let radius = circumference / (2.0 * PI);
    PI * radius * radius * height
}

/// Volume of a sphere from its diameter: `(4/3)·π·(d/2)³`.
///
/// Precondition: `diameter > 0` (not validated).
pub fn sphere_volume(diameter: f64) -> f64 {
    let radius = diameter / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// Physical dimensions of the cylindrical jar.
///
/// Lengths must share one unit system with everything else in the request
/// (all meters, all millimeters, ...); the crate never converts units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JarSpec {
    /// Interior height of the jar.
    pub height: f64,
    /// Exterior circumference of the jar.
    pub circumference: f64,
}

impl JarSpec {
    /// Create a jar specification.
    pub fn new(height: f64, circumference: f64) -> Self {
        Self {
            height,
            circumference,
        }
    }

    /// Total interior volume of the jar.
    pub fn volume(&self) -> f64 {
        cylinder_volume(self.height, self.circumference)
    }

    /// Derive a fill fraction from a measured headspace.
    ///
    /// The fill fraction is the ratio of the used cylinder volume (jar
    /// height minus `headspace`) to the total cylinder volume, scaled by a
    /// `compaction` factor in (0, 1] that accounts for the gumball mass
    /// settling short of the fill line.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidInput`] if the jar dimensions are
    /// non-positive, `headspace` is negative or at least the jar height, or
    /// `compaction` is outside (0, 1].
    pub fn fill_fraction_with_headspace(
        &self,
        headspace: f64,
        compaction: f64,
    ) -> Result<f64, SimulationError> {
        if !(self.height > 0.0) {
            return Err(SimulationError::InvalidInput {
                parameter: "jar.height",
                value: self.height,
            });
        }
        if !(self.circumference > 0.0) {
            return Err(SimulationError::InvalidInput {
                parameter: "jar.circumference",
                value: self.circumference,
            });
        }
        if !(0.0..self.height).contains(&headspace) {
            return Err(SimulationError::InvalidInput {
                parameter: "headspace",
                value: headspace,
            });
        }
        if !(compaction > 0.0 && compaction <= 1.0) {
            return Err(SimulationError::InvalidInput {
                parameter: "compaction",
                value: compaction,
            });
        }

        let used = cylinder_volume(self.height - headspace, self.circumference);
        Ok(used / self.volume() * compaction)
    }
}

/// Nominal dimensions of a single gumball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GumballSpec {
    /// Nominal gumball diameter.
    pub diameter: f64,
}

impl GumballSpec {
    /// Create a gumball specification from a nominal diameter.
    pub fn new(diameter: f64) -> Self {
        Self { diameter }
    }

    /// Nominal volume of one gumball.
    pub fn volume(&self) -> f64 {
        sphere_volume(self.diameter)
    }

    /// Build a specification from hand-measured diameters.
    ///
    /// The nominal diameter is the arithmetic mean of the measurements.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidInput`] if `measurements` is empty
    /// or contains a non-positive value.
    pub fn from_measurements(measurements: &[f64]) -> Result<Self, SimulationError> {
        if measurements.is_empty() {
            return Err(SimulationError::InvalidInput {
                parameter: "measurements.len",
                value: 0.0,
            });
        }
        for &d in measurements {
            if !(d > 0.0) {
                return Err(SimulationError::InvalidInput {
                    parameter: "measurements",
                    value: d,
                });
            }
        }

        let mean = measurements.iter().sum::<f64>() / measurements.len() as f64;
        Ok(Self::new(mean))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_volume_known_value() {
        // Unit radius: circumference 2π, height 1 gives volume π.
        let v = cylinder_volume(1.0, 2.0 * PI);
        assert!((v - PI).abs() < 1e-12, "volume was {v}");
    }

    #[test]
    fn test_sphere_volume_known_value() {
        // Unit radius: diameter 2 gives volume 4π/3.
        let v = sphere_volume(2.0);
        assert!((v - 4.0 * PI / 3.0).abs() < 1e-12, "volume was {v}");
    }

    #[test]
    fn test_sphere_volume_cubic_scaling() {
        let d = 0.0155;
        let ratio = sphere_volume(2.0 * d) / sphere_volume(d);
        assert!((ratio - 8.0).abs() < 1e-10, "ratio was {ratio}");
    }

    #[test]
    fn test_cylinder_volume_monotone_in_each_dimension() {
        let base = cylinder_volume(0.144, 0.453);
        assert!(cylinder_volume(0.2, 0.453) > base);
        assert!(cylinder_volume(0.144, 0.5) > base);
    }

    #[test]
    fn test_cylinder_volume_linear_in_height() {
        let single = cylinder_volume(0.1, 0.453);
        let double = cylinder_volume(0.2, 0.453);
        assert!((double - 2.0 * single).abs() < 1e-12 * single.abs());
    }

    #[test]
    fn test_jar_volume_matches_free_function() {
        let jar = JarSpec::new(0.144, 0.453);
        assert_eq!(jar.volume(), cylinder_volume(0.144, 0.453));
    }

    #[test]
    fn test_fill_fraction_with_headspace() {
        // Used height 0.068 of 0.144; the circumference cancels, so the
        // ratio is the height ratio times the compaction factor.
        let jar = JarSpec::new(0.144, 0.453);
        let fill = jar.fill_fraction_with_headspace(0.076, 0.7).unwrap();
        let expected = (0.068 / 0.144) * 0.7;
        assert!((fill - expected).abs() < 1e-12, "fill was {fill}");
    }

    #[test]
    fn test_fill_fraction_rejects_headspace_at_height() {
        let jar = JarSpec::new(0.144, 0.453);
        let err = jar.fill_fraction_with_headspace(0.144, 0.7).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidInput {
                parameter: "headspace",
                ..
            }
        ));
    }

    #[test]
    fn test_fill_fraction_rejects_zero_compaction() {
        let jar = JarSpec::new(0.144, 0.453);
        assert!(jar.fill_fraction_with_headspace(0.076, 0.0).is_err());
    }

    #[test]
    fn test_gumball_from_measurements_averages() {
        let spec = GumballSpec::from_measurements(&[15.0, 15.5, 16.0]).unwrap();
        assert!((spec.diameter - 15.5).abs() < 1e-12);
    }

    #[test]
    fn test_gumball_from_measurements_rejects_empty() {
        assert!(GumballSpec::from_measurements(&[]).is_err());
    }

    #[test]
    fn test_gumball_from_measurements_rejects_nonpositive() {
        let err = GumballSpec::from_measurements(&[15.0, 0.0]).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput { .. }));
    }
}
