//! Error types for simulation requests.

/// Error returned when a simulation request cannot produce a sound estimate.
///
/// Both variants are detected up front, before any trial runs. A rejected
/// request fails whole: there are no partial results and nothing to retry,
/// so callers get a descriptive error instead of a NaN or infinite estimate
/// propagating through downstream statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationError {
    /// An input parameter was outside its valid range.
    ///
    /// Covers non-positive geometry (height, circumference, diameter),
    /// fractions outside (0, 1], and trial counts of zero or beyond the
    /// resource ceiling.
    InvalidInput {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Too few trials to form a confidence interval.
    ///
    /// A Student-t interval on the mean needs N − 1 ≥ 1 degrees of freedom;
    /// with a single trial the critical value is infinite and the interval
    /// is undefined.
    InsufficientSamples {
        /// The requested trial count.
        trials: usize,
    },
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { parameter, value } => {
                write!(f, "invalid input: {parameter} = {value} is outside its valid range")
            }
            Self::InsufficientSamples { trials } => {
                write!(
                    f,
                    "{trials} trial(s) cannot support a confidence interval; at least 2 are required"
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {}
