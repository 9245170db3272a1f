//! Statistical reductions over a trial sequence.
//!
//! This module provides the scalar summaries the aggregator reports:
//! - Location and spread ([`summary`]): mean, standard deviations under both
//!   divisor conventions, median, standard error of the mean
//! - Interval estimation ([`interval`]): Student-t confidence interval for
//!   the mean at small or unknown-variance sample sizes

mod interval;
mod summary;

pub use interval::{confidence_interval, t_critical_value};
pub use summary::{mean, median, population_std_dev, sample_std_dev, standard_error};
