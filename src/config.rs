//! Scenario configuration, loaded from TOML.
//!
//! Every field is optional in the file; missing fields take the reference
//! scenario values (actual level 2, seeded at 5, 100 rounds, seeds 1..=5).
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DdaError, DdaResult};
use crate::simulation::Scenario;

pub const DEFAULT_ACTUAL_LEVEL: i32 = 2;
pub const DEFAULT_INITIAL_TEMPORARY_LEVEL: i32 = 5;
pub const DEFAULT_ROUNDS: usize = 100;
pub const DEFAULT_SEEDS: [u64; 5] = [1, 2, 3, 4, 5];
pub const DEFAULT_FILE_PREFIX: &str = "output";
pub const DEFAULT_TAIL: usize = 50;
pub const DEFAULT_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub actual_level: i32,
    pub initial_temporary_level: i32,
    pub rounds: usize,
    /// One run (and one output file) per seed.
    pub seeds: Vec<u64>,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    /// Rounds at the end of a run averaged for the summary.
    pub tail: usize,
    /// Allowed distance between the tail mean and the actual level.
    pub tolerance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            actual_level: DEFAULT_ACTUAL_LEVEL,
            initial_temporary_level: DEFAULT_INITIAL_TEMPORARY_LEVEL,
            rounds: DEFAULT_ROUNDS,
            seeds: DEFAULT_SEEDS.to_vec(),
            output_dir: PathBuf::from("."),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            tail: DEFAULT_TAIL,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = "\
# dda-sim configuration
# All values here can be overridden by CLI flags.

# The player's hidden skill (0..10 scale)
# actual_level = 2

# Seed of the estimation window
# initial_temporary_level = 5

# Rounds per run
# rounds = 100

# One run and one CSV file per seed
# seeds = [1, 2, 3, 4, 5]

# Where CSV files go, named <file_prefix>_<seed>.csv
# output_dir = \".\"
# file_prefix = \"output\"

# Summary: mean estimate over the last `tail` rounds must be within `tolerance`
# tail = 50
# tolerance = 1.0
";

impl SimulationConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> DdaResult<Self> {
        toml::from_str(content).map_err(|source| DdaError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> DdaResult<()> {
        let reason = if self.rounds == 0 {
            "rounds must be at least 1"
        } else if self.seeds.is_empty() {
            "at least one seed is required"
        } else if self.tail == 0 {
            "tail must be at least 1"
        } else if self.tolerance.is_nan() || self.tolerance < 0.0 {
            "tolerance must be a non-negative number"
        } else if self.file_prefix.is_empty() {
            "file_prefix must not be empty"
        } else {
            return Ok(());
        };
        Err(DdaError::InvalidScenario { reason: reason.to_string() })
    }

    /// One scenario per seed, in seed order as configured.
    pub fn scenarios(&self) -> impl Iterator<Item = Scenario> + '_ {
        self.seeds.iter().map(|&seed| Scenario {
            actual_level: self.actual_level,
            initial_temporary_level: self.initial_temporary_level,
            rounds: self.rounds,
            seed,
        })
    }

    pub fn output_path(&self, seed: u64) -> PathBuf {
        self.output_dir.join(format!("{}_{seed}.csv", self.file_prefix))
    }
}

/// Load config from `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> DdaResult<SimulationConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => SimulationConfig::from_toml_str(&content, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SimulationConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// Write the commented default config. Errors if the file already exists.
pub fn create_default_config(path: &Path) -> DdaResult<()> {
    if path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("config file already exists at {}", path.display()),
        )
        .into());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(())
}
