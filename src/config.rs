// src/config.rs
use crate::error::{InjectError, Result};
use crate::outcome::Thresholds;
use derive_builder::Builder;

pub const DEFAULT_SUFFIX_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate", error = "InjectError"))]
pub struct InjectConfig {
    #[builder(default)]
    pub thresholds: Thresholds,
    #[builder(default = "DEFAULT_SUFFIX_LEN")]
    pub suffix_len: usize,
    #[builder(default)]
    pub seed: Option<u64>,
}

impl InjectConfigBuilder {
    fn validate(&self) -> std::result::Result<(), InjectError> {
        if self.suffix_len == Some(0) {
            return Err(InjectError::EmptySuffix);
        }
        Ok(())
    }
}

impl From<derive_builder::UninitializedFieldError> for InjectError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        Self::Config(e.to_string())
    }
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            suffix_len: DEFAULT_SUFFIX_LEN,
            seed: None,
        }
    }
}

impl InjectConfig {
    /// Validated config from raw threshold values.
    ///
    /// # Errors
    /// Fails on out-of-order thresholds or a zero suffix length.
    pub fn from_parts(
        mismatch: f64,
        missing: f64,
        suffix_len: usize,
        seed: Option<u64>,
    ) -> Result<Self> {
        InjectConfigBuilder::default()
            .thresholds(Thresholds::new(mismatch, missing)?)
            .suffix_len(suffix_len)
            .seed(seed)
            .build()
    }
}
