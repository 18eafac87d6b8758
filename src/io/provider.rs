use anyhow::{Context, Result};
use inquire::CustomType;

/// Sample count offered by an interactive prompt.
pub const DEFAULT_SAMPLES: i64 = 10_000;

/// Supplies the sample count for one estimation run.
pub trait SampleCountProvider {
    fn provide_sample_count(&mut self) -> Result<i64>;
}

/// Always provides the same count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCount(pub i64);

impl SampleCountProvider for FixedCount {
    fn provide_sample_count(&mut self) -> Result<i64> {
        Ok(self.0)
    }
}

/// Parses the count from a string such as a command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentCount {
    raw: String,
}

impl ArgumentCount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl SampleCountProvider for ArgumentCount {
    fn provide_sample_count(&mut self) -> Result<i64> {
        let trimmed = self.raw.trim().replace('_', "");
        trimmed
            .parse::<i64>()
            .with_context(|| format!("invalid sample count '{}'", self.raw))
    }
}

/// Asks for the count on the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCount {
    default: i64,
}

impl PromptCount {
    pub fn new(default: i64) -> Self {
        Self { default }
    }
}

impl Default for PromptCount {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES)
    }
}

impl SampleCountProvider for PromptCount {
    fn provide_sample_count(&mut self) -> Result<i64> {
        Ok(CustomType::<i64>::new("Enter no. of samples:")
            .with_default(self.default)
            .with_help_message("Counts below 100 are raised to 100")
            .with_error_message("Please type a whole number")
            .prompt()?)
    }
}
