mod strategy;

pub use strategy::{DiscontinuityStrategy, NonFiniteOnly, SlopeThreshold};

use crate::expression::Function;
use log::debug;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A run of connected finite samples.
pub type Polyline = Vec<Point>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("domain bounds must be finite with x_min < x_max, got [{x_min}, {x_max}]")]
    InvalidDomain { x_min: f64, x_max: f64 },

    #[error("step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("sampling would take {required} points, limit is {limit}")]
    TooManySamples { required: usize, limit: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub step: f64,
    pub max_samples: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            step: 0.01,
            max_samples: 1_000_000,
        }
    }
}

impl SampleConfig {
    pub fn with_domain(mut self, x_min: f64, x_max: f64) -> Self {
        self.x_min = x_min;
        self.x_max = x_max;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Checks the configuration and returns how many points it produces.
    pub fn sample_count(&self) -> Result<usize, SampleError> {
        if !(self.x_min.is_finite() && self.x_max.is_finite() && self.x_min < self.x_max) {
            return Err(SampleError::InvalidDomain {
                x_min: self.x_min,
                x_max: self.x_max,
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SampleError::InvalidStep(self.step));
        }

        let intervals = ((self.x_max - self.x_min) / self.step).floor();
        if intervals >= self.max_samples as f64 {
            return Err(SampleError::TooManySamples {
                required: intervals.min(usize::MAX as f64) as usize,
                limit: self.max_samples,
            });
        }
        Ok(intervals as usize + 1)
    }
}

/// Evaluates a [`Function`] across a domain and turns the samples into
/// drawable polylines.
pub struct Sampler {
    config: SampleConfig,
    strategy: Box<dyn DiscontinuityStrategy>,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(SampleConfig::default())
    }
}

impl Sampler {
    pub fn new(config: SampleConfig) -> Self {
        Self {
            config,
            strategy: Box::new(SlopeThreshold::default()),
        }
    }

    pub fn with_strategy<S>(mut self, strategy: S) -> Self
    where
        S: DiscontinuityStrategy + 'static,
    {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Samples `x_min, x_min + step, ...` up to `x_max`, in order.
    ///
    /// Points are computed on the rayon pool. Functions are pure, so the
    /// result is the same as a sequential loop.
    pub fn sample(&self, function: &Function) -> Result<Vec<Point>, SampleError> {
        let count = self.config.sample_count()?;
        let SampleConfig { x_min, step, .. } = self.config;
        debug!("Sampling {} points from {} with step {}", count, x_min, step);

        Ok((0..count)
            .into_par_iter()
            .map(|i| {
                let x = x_min + i as f64 * step;
                Point {
                    x,
                    y: function.eval(x),
                }
            })
            .collect())
    }

    pub fn polylines(&self, function: &Function) -> Result<Vec<Polyline>, SampleError> {
        let points = self.sample(function)?;
        Ok(self.split(&points))
    }

    /// Splits samples into polylines. Non-finite samples are dropped and end
    /// the current line; the strategy is asked about every other pair of
    /// neighbours.
    pub fn split(&self, points: &[Point]) -> Vec<Polyline> {
        let mut polylines = Vec::new();
        let mut current: Polyline = Vec::new();

        for &point in points {
            if !point.is_finite() {
                flush(&mut polylines, &mut current);
                continue;
            }
            if let Some(&previous) = current.last() {
                if self.strategy.is_break(previous, point) {
                    flush(&mut polylines, &mut current);
                }
            }
            current.push(point);
        }
        flush(&mut polylines, &mut current);

        debug!("Split {} samples into {} polylines", points.len(), polylines.len());
        polylines
    }
}

fn flush(polylines: &mut Vec<Polyline>, current: &mut Polyline) {
    if !current.is_empty() {
        polylines.push(std::mem::take(current));
    }
}
