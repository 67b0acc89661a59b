// src/injector.rs
use crate::config::InjectConfig;
use crate::error::Result;
use crate::filesystem;
use crate::mutation;
use crate::outcome::{Outcome, Tally};
use crate::sampler::Sampler;
use std::path::Path;
use tracing::{debug, info};

/// Walks a directory once and assigns every regular file one [`Outcome`].
#[derive(Debug)]
pub struct Injector<S> {
    config: InjectConfig,
    sampler: S,
}

impl<S: Sampler> Injector<S> {
    pub const fn new(config: InjectConfig, sampler: S) -> Self {
        Self { config, sampler }
    }

    /// Run over `root` and return the final tally.
    ///
    /// # Errors
    /// Stops at the first walk, append or remove failure. Files already
    /// mutated stay mutated.
    pub fn run(&mut self, root: &Path) -> Result<Tally> {
        self.run_with(root, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `observer` once per file after its
    /// outcome has been applied.
    ///
    /// # Errors
    /// See [`run`](Self::run).
    pub fn run_with<F>(&mut self, root: &Path, mut observer: F) -> Result<Tally>
    where
        F: FnMut(&Path, Outcome),
    {
        info!(root = %root.display(), "injecting discrepancies");
        let mut tally = Tally::default();

        for path in filesystem::regular_files(root)? {
            let path = path?;
            let outcome = self.config.thresholds.classify(self.sampler.sample());

            match outcome {
                Outcome::Mismatch => {
                    let suffix = self.sampler.suffix(self.config.suffix_len);
                    mutation::append_suffix(&path, &suffix)?;
                    debug!(path = %path.display(), bytes = suffix.len(), "appended suffix");
                }
                Outcome::Missing => {
                    mutation::remove(&path)?;
                    debug!(path = %path.display(), "removed file");
                }
                Outcome::Ok => {}
            }

            tally.record(outcome);
            observer(&path, outcome);
        }

        info!(
            ok = tally.ok,
            missing = tally.missing,
            mismatch = tally.mismatch,
            "finished"
        );
        Ok(tally)
    }
}
