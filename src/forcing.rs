//! Time-indexed forcing data.
//!
//! A [`ForcingSeries`] holds samples of an external forcing (an ocean
//! temperature record, a climatological monthly cycle) and resamples them
//! onto the times the model asks for. Periodic series wrap around
//! continuously, with no need to duplicate the first sample at the end.

use tracing::debug;

use crate::error::{RegridError, Result};
use crate::interpolation::common::{check_length, check_strictly_increasing};
use crate::interpolation::{Policy, WeightTable};

/// Length of the model year in seconds (365 days)
pub const SECONDS_PER_YEAR: f64 = 365.0 * 86_400.0;

/// Upper bound on the samples taken by [`ForcingSeries::average`]
pub const MAX_AVERAGE_SAMPLES: usize = 1_000_000;

/// A named forcing time series
#[derive(Debug, Clone)]
pub struct ForcingSeries {
    name: String,
    times: Vec<f64>,
    values: Vec<f64>,
    period: Option<f64>,
    reference_time: f64,
}

impl ForcingSeries {
    /// Create a non-periodic series; values are held flat outside the record.
    pub fn new(name: &str, times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        check_strictly_increasing(&format!("times of '{}'", name), &times)?;
        check_length(&format!("values of '{}'", name), &values, times.len())?;
        Ok(Self {
            name: name.to_string(),
            times,
            values,
            period: None,
            reference_time: 0.0,
        })
    }

    /// Make the series periodic.
    ///
    /// Sample times are taken relative to `reference_time`, the model time
    /// at which the first period starts.
    pub fn periodic(mut self, period: f64, reference_time: f64) -> Result<Self> {
        // validate now rather than on the first sample
        WeightTable::linear_periodic(&self.times, &[], period)?;
        self.period = Some(period);
        self.reference_time = reference_time;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn period(&self) -> Option<f64> {
        self.period
    }

    fn policy(&self) -> Policy {
        match self.period {
            Some(period) => Policy::LinearPeriodic { period },
            None => Policy::Linear,
        }
    }

    /// Weights mapping the record onto model times `times`
    pub fn weights(&self, times: &[f64]) -> Result<WeightTable> {
        let shifted: Vec<f64> = times.iter().map(|t| t - self.reference_time).collect();
        WeightTable::new(self.policy(), &self.times, &shifted)
    }

    /// Values at model times `times`
    pub fn sample(&self, times: &[f64]) -> Result<Vec<f64>> {
        self.weights(times)?.interpolate(&self.values)
    }

    /// Value at model time `t`
    pub fn value_at(&self, t: f64) -> Result<f64> {
        Ok(self.sample(&[t])?[0])
    }

    /// Mean value over the time step `[t, t + dt]`.
    ///
    /// Uses `max(1, ceil(evaluations_per_year * dt / SECONDS_PER_YEAR))`
    /// equally spaced samples starting at `t`.
    pub fn average(&self, t: f64, dt: f64, evaluations_per_year: u32) -> Result<f64> {
        if !(dt >= 0.0) || !dt.is_finite() {
            return Err(RegridError::InvalidTimeStep {
                series: self.name.clone(),
                message: format!("dt must be finite and non-negative, got {}", dt),
            });
        }

        let count = (f64::from(evaluations_per_year) * dt / SECONDS_PER_YEAR).ceil();
        if count > MAX_AVERAGE_SAMPLES as f64 {
            return Err(RegridError::InvalidTimeStep {
                series: self.name.clone(),
                message: format!(
                    "dt = {} needs {} samples, at most {} are allowed",
                    dt, count, MAX_AVERAGE_SAMPLES
                ),
            });
        }
        let count = if count >= 1.0 { count as usize } else { 1 };
        let step = dt / count as f64;
        let times: Vec<f64> = (0..count).map(|k| t + k as f64 * step).collect();

        let samples = self.sample(&times)?;
        debug!(
            forcing = %self.name,
            t = t,
            dt = dt,
            samples = count,
            "Averaged forcing over time step"
        );
        Ok(samples.iter().sum::<f64>() / count as f64)
    }
}
