use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::AppError;
use crate::math::function::mathfunction::MathFunction;
use crate::scan::sample::Sample;

/// Absorbs rounding in `(end - start) / step` so that `end` itself is
/// reached when it is a multiple of `step` away from `start`.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Upper bound on the number of steps in one scan.
pub const MAX_STEPS: usize = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScanConfigError {
    #[error("step must be positive!")]
    NonPositiveStep(f64),
    #[error("start must be less than end!")]
    StartAfterEnd { start: f64, end: f64 },
    #[error("interval bounds and step must be finite numbers!")]
    NonFinite,
    #[error("too many points: interval / step must not exceed {}!", MAX_STEPS)]
    TooManyPoints(f64),
}

// ─────────────────────────────────────────────
// ScanConfig
// ─────────────────────────────────────────────

#[derive(Deserialize)]
struct ScanConfigJsonProp {
    start: f64,
    end: f64,
    step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    start: f64,
    end: f64,
    step: f64,
}

impl ScanConfig {
    /// Validates once, before anything is evaluated or opened.
    pub fn new(start: f64, end: f64, step: f64) -> Result<ScanConfig, ScanConfigError> {
        ScanConfig { start, end, step }.validated()
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<ScanConfig, AppError> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|source| AppError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        let json_prop: ScanConfigJsonProp = serde_json::from_reader(reader)?;
        Ok(ScanConfig::new(json_prop.start, json_prop.end, json_prop.step)?)
    }

    fn validated(self) -> Result<ScanConfig, ScanConfigError> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite()) {
            Err(ScanConfigError::NonFinite)
        } else if self.step <= 0.0 {
            Err(ScanConfigError::NonPositiveStep(self.step))
        } else if self.start > self.end {
            Err(ScanConfigError::StartAfterEnd { start: self.start, end: self.end })
        } else if !self.steps().is_finite() || self.steps() > MAX_STEPS as f64 {
            Err(ScanConfigError::TooManyPoints(self.steps()))
        } else {
            Ok(self)
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    fn steps(&self) -> f64 {
        ((self.end - self.start) / self.step + BOUNDARY_TOLERANCE).floor()
    }

    /// Never exceeds `MAX_STEPS + 1`; larger scans are rejected on construction.
    pub fn len(&self) -> usize {
        let steps = self.steps().min(MAX_STEPS as f64) as usize;
        steps.checked_add(1).unwrap_or(MAX_STEPS + 1)
    }

    pub fn points(&self) -> ScanPoints<'_> {
        ScanPoints { config: self, index: 0 }
    }

    pub fn samples<'a, F: MathFunction + 'a>(&'a self, function: &'a F) -> impl Iterator<Item = Sample> + 'a {
        self.points().map(move |x| Sample::evaluate(function, x))
    }
}

// ─────────────────────────────────────────────
// ScanPoints: x_i = start + i * step
// ─────────────────────────────────────────────

pub struct ScanPoints<'a> {
    config: &'a ScanConfig,
    index: usize,
}

impl<'a> Iterator for ScanPoints<'a> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.config.len() {
            let x = self.config.start + self.index as f64 * self.config.step;
            self.index += 1;
            Some(x)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}
