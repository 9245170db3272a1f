//! Scalar summary statistics.
//!
//! Two standard-deviation conventions coexist here on purpose. The reported
//! spread of the trial sequence uses the population convention (divisor N),
//! while the standard error of the mean uses the sample convention
//! (divisor N − 1). Downstream reports show both values, so both are exposed
//! rather than one derived from the other.

/// Arithmetic mean.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "cannot compute mean of empty slice");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divisor N).
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn population_std_dev(values: &[f64]) -> f64 {
    assert!(
        !values.is_empty(),
        "cannot compute standard deviation of empty slice"
    );
    let mu = mean(values);
    let variance = values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Sample standard deviation (divisor N − 1).
///
/// # Panics
///
/// Panics if `values` has fewer than two elements.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    assert!(
        values.len() >= 2,
        "sample standard deviation requires at least 2 values"
    );
    let mu = mean(values);
    let variance =
        values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Median: the midpoint of the sorted sequence.
///
/// For an even-length sequence this is the average of the two middle
/// elements.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn median(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "cannot compute median of empty slice");
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Standard error of the mean: sample standard deviation / √N.
///
/// # Panics
///
/// Panics if `values` has fewer than two elements.
pub fn standard_error(values: &[f64]) -> f64 {
    sample_std_dev(values) / (values.len() as f64).sqrt()
}
