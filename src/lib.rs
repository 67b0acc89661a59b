//! Randomly inject file-integrity discrepancies into a directory tree.
//!
//! Every regular file under the target directory gets exactly one
//! [`Outcome`]: left alone, deleted, or grown by a short alphabetic suffix.
//! The resulting tree is meant to be fed to a verifier or backup checker
//! that should report the same counts.

pub mod args;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod injector;
pub mod logging;
pub mod mutation;
pub mod outcome;
pub mod presentation;
pub mod sampler;

pub use config::{InjectConfig, InjectConfigBuilder};
pub use error::{InjectError, Result};
pub use injector::Injector;
pub use outcome::{Outcome, Tally, Thresholds};
pub use sampler::{RngSampler, Sampler};
