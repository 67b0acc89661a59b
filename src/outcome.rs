// src/outcome.rs
use crate::error::{InjectError, Result};
use serde::Serialize;
use std::fmt;

/// What happened to a single visited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Left untouched.
    Ok,
    /// Deleted from the file system.
    Missing,
    /// Grown by an appended suffix.
    Mismatch,
}

/// Cumulative upper bounds used to classify a sample drawn from `[0, 1)`.
///
/// A sample `<= mismatch` is a mismatch, a sample `<= missing` is a missing
/// file, anything above is left alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    mismatch: f64,
    missing: f64,
}

impl Thresholds {
    pub const DEFAULT_MISMATCH: f64 = 0.001;
    pub const DEFAULT_MISSING: f64 = 0.005;

    /// # Errors
    /// Returns `InvalidThresholds` unless `0 <= mismatch <= missing <= 1`.
    pub fn new(mismatch: f64, missing: f64) -> Result<Self> {
        // NaN fails every comparison, so it is rejected here too.
        let valid = (0.0..=1.0).contains(&mismatch)
            && (0.0..=1.0).contains(&missing)
            && mismatch <= missing;
        if !valid {
            return Err(InjectError::InvalidThresholds { mismatch, missing });
        }
        Ok(Self { mismatch, missing })
    }

    pub const fn mismatch(&self) -> f64 {
        self.mismatch
    }

    pub const fn missing(&self) -> f64 {
        self.missing
    }

    pub fn classify(&self, sample: f64) -> Outcome {
        if sample <= self.mismatch {
            Outcome::Mismatch
        } else if sample <= self.missing {
            Outcome::Missing
        } else {
            Outcome::Ok
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            mismatch: Self::DEFAULT_MISMATCH,
            missing: Self::DEFAULT_MISSING,
        }
    }
}

/// Per-run outcome counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub ok: u64,
    pub missing: u64,
    pub mismatch: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Ok => self.ok += 1,
            Outcome::Missing => self.missing += 1,
            Outcome::Mismatch => self.mismatch += 1,
        }
    }

    pub const fn total(&self) -> u64 {
        self.ok + self.missing + self.mismatch
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "After generating discrepancies, there should be {} OK, {} missing, {} with size mismatch",
            self.ok, self.missing, self.mismatch
        )
    }
}
