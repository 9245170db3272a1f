//! Student-t confidence interval for the sample mean.
//!
//! Uses T-distribution critical values via `statrs`. The t-distribution is
//! the right reference here because the spread of the trial sequence is
//! itself estimated from the sample.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::result::ConfidenceInterval;

/// Two-tailed critical value of the t-distribution.
///
/// Returns t such that a t-distributed variable with `df` degrees of freedom
/// lands in [−t, t] with probability `confidence`.
///
/// # Panics
///
/// Panics if `df` is not positive or `confidence` is outside (0, 1). The
/// aggregator's trial-count validation guarantees both before calling in.
pub fn t_critical_value(df: f64, confidence: f64) -> f64 {
    assert!(df > 0.0, "degrees of freedom must be positive");
    assert!(
        confidence > 0.0 && confidence < 1.0,
        "confidence must be in (0, 1)"
    );

    let upper_tail = 1.0 - (1.0 - confidence) / 2.0;
    let t_dist = StudentsT::new(0.0, 1.0, df).expect("standard t-distribution with positive df");
    t_dist.inverse_cdf(upper_tail)
}

/// Confidence interval for the mean: [mean − t·SE, mean + t·SE].
///
/// `n` is the number of trials behind `mean`; the critical value uses
/// n − 1 degrees of freedom.
///
/// # Panics
///
/// Panics if `n < 2` (zero degrees of freedom has no finite critical value)
/// or `confidence` is outside (0, 1).
pub fn confidence_interval(
    mean: f64,
    standard_error: f64,
    n: usize,
    confidence: f64,
) -> ConfidenceInterval {
    assert!(n >= 2, "confidence interval requires at least 2 samples");

    let t = t_critical_value((n - 1) as f64, confidence);
    ConfidenceInterval {
        low: mean - t * standard_error,
        high: mean + t * standard_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_critical_value_df_9() {
        // Two-tailed 95% with df = 9: tabulated value 2.2622.
        let t = t_critical_value(9.0, 0.95);
        assert!((t - 2.2622).abs() < 1e-3, "t was {t}");
    }

    #[test]
    fn test_t_critical_value_df_1() {
        // df = 1 is the heaviest tail: tabulated value 12.706.
        let t = t_critical_value(1.0, 0.95);
        assert!((t - 12.706).abs() < 1e-2, "t was {t}");
    }

    #[test]
    fn test_t_critical_value_approaches_normal() {
        // Large df converges toward the normal quantile 1.9600.
        let t = t_critical_value(100_000.0, 0.95);
        assert!((t - 1.96).abs() < 1e-3, "t was {t}");
    }

    #[test]
    fn test_t_critical_value_grows_with_confidence() {
        assert!(t_critical_value(9.0, 0.99) > t_critical_value(9.0, 0.95));
    }

    #[test]
    fn test_interval_brackets_mean_symmetrically() {
        let ci = confidence_interval(100.0, 2.0, 10, 0.95);
        assert!(ci.low < 100.0 && 100.0 < ci.high);
        assert!(((100.0 - ci.low) - (ci.high - 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_interval_collapses_with_zero_error() {
        let ci = confidence_interval(100.0, 0.0, 10, 0.95);
        assert_eq!(ci.low, 100.0);
        assert_eq!(ci.high, 100.0);
    }

    #[test]
    #[should_panic(expected = "at least 2 samples")]
    fn test_interval_single_sample_panics() {
        confidence_interval(100.0, 2.0, 1, 0.95);
    }
}
