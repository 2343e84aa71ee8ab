//! Toolchain configuration
//!
//! Defaults target a checkout with `circom` on `PATH` and the packages in
//! `package.json` installed (`npm install`), which provides both circomlib
//! and the `snarkjs` CLI under `node_modules/`. Every setting can be
//! overridden through the environment.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::OracleError;

pub const CIRCOM_BIN_ENV: &str = "CIRCOM_BIN";
pub const SNARKJS_BIN_ENV: &str = "SNARKJS_BIN";
pub const CIRCUITS_DIR_ENV: &str = "CIRCUITS_DIR";
pub const CIRCOM_INCLUDE_ENV: &str = "CIRCOM_INCLUDE";
pub const TIMEOUT_ENV: &str = "CIRCUIT_TIMEOUT_SECS";

/// Ceiling for compiling and evaluating one circuit case.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Locations and limits for the external circuit toolchain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// Circuit compiler executable
    pub circom_bin: PathBuf,
    /// Witness calculator/exporter executable
    pub snarkjs_bin: PathBuf,
    /// Directory holding `<circuit>.circom` files
    pub circuits_dir: PathBuf,
    /// Library paths passed to the compiler with `-l`
    pub include_dirs: Vec<PathBuf>,
    /// Deadline shared by all steps of one case
    pub timeout: Duration,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        let root = workspace_root();
        Self {
            circom_bin: PathBuf::from("circom"),
            snarkjs_bin: root.join("node_modules").join(".bin").join("snarkjs"),
            circuits_dir: root.join("circuits"),
            include_dirs: vec![root.join("node_modules")],
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ToolchainConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, OracleError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, OracleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(bin) = lookup(CIRCOM_BIN_ENV) {
            config.circom_bin = PathBuf::from(bin);
        }
        if let Some(bin) = lookup(SNARKJS_BIN_ENV) {
            config.snarkjs_bin = PathBuf::from(bin);
        }
        if let Some(dir) = lookup(CIRCUITS_DIR_ENV) {
            config.circuits_dir = PathBuf::from(dir);
        }
        if let Some(paths) = lookup(CIRCOM_INCLUDE_ENV) {
            config.include_dirs = env::split_paths(&paths).collect();
        }
        if let Some(secs) = lookup(TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                OracleError::Config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got {secs:?}"))
            })?;
            if secs == 0 {
                return Err(OracleError::Config(format!("{TIMEOUT_ENV} must be positive")));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Path of the circuit description for `circuit`
    pub fn circuit_path(&self, circuit: &str) -> PathBuf {
        self.circuits_dir.join(format!("{circuit}.circom"))
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
