//! File-based configuration for the CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vecbench_bench::BenchConfig;
use vecbench_datagen::GeneratorConfig;

/// Top-level configuration file. Every section and field is optional;
/// command line flags override what the file sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VecbenchConfig {
    pub generator: GeneratorConfig,
    pub bench: BenchConfig,
}

impl VecbenchConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {:?}", path))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        self.bench.validate()?;
        Ok(())
    }
}
