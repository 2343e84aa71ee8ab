//! External circuit toolchain driver
//!
//! Each case runs in its own scratch directory:
//!
//! ```text
//! input.json ──circom──> <name>_js/<name>.wasm
//!            ──snarkjs wtns calculate──> witness.wtns
//!            ──snarkjs wtns export json──> witness.json
//! ```
//!
//! Tool output goes to log files inside the scratch directory rather than
//! pipes, so a chatty compiler cannot stall on a full pipe while we poll.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;
use tracing::{debug, info};

use crate::case::CircuitCase;
use crate::config::ToolchainConfig;
use crate::document::WitnessDocument;
use crate::error::{OracleError, Step};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub const INPUT_FILE: &str = "input.json";
pub const WITNESS_FILE: &str = "witness.wtns";
pub const WITNESS_JSON_FILE: &str = "witness.json";

#[derive(Clone, Debug)]
pub struct Toolchain {
    config: ToolchainConfig,
    scratch_root: Option<PathBuf>,
}

impl Toolchain {
    pub fn new(config: ToolchainConfig) -> Self {
        Self {
            config,
            scratch_root: None,
        }
    }

    pub fn from_env() -> Result<Self, OracleError> {
        Ok(Self::new(ToolchainConfig::from_env()?))
    }

    /// Create scratch directories under `root` instead of the system
    /// temporary directory.
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(root.into());
        self
    }

    /// Compile the case's circuit, evaluate it on the case's inputs and
    /// return the exported witness.
    pub fn run<C: CircuitCase + ?Sized>(&self, case: &C) -> Result<WitnessDocument, OracleError> {
        let circuit = case.circuit();
        let circuit_path = self.config.circuit_path(circuit);
        if !circuit_path.is_file() {
            return Err(OracleError::io(
                circuit_path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "circuit file not found"),
            ));
        }

        let scratch = self.scratch_dir()?;
        let dir = scratch.path();
        debug!(circuit, scratch = %dir.display(), "created scratch directory");

        let input = dir.join(INPUT_FILE);
        case.input_document()?.write_to(&input)?;

        let wasm = dir
            .join(format!("{circuit}_js"))
            .join(format!("{circuit}.wasm"));
        let wtns = dir.join(WITNESS_FILE);
        let witness_json = dir.join(WITNESS_JSON_FILE);

        let deadline = Instant::now() + self.config.timeout;

        let mut compile: Vec<OsString> = vec![
            circuit_path.into_os_string(),
            "--r1cs".into(),
            "--wasm".into(),
            "--sym".into(),
            "-o".into(),
            dir.as_os_str().to_owned(),
        ];
        for include in &self.config.include_dirs {
            compile.push("-l".into());
            compile.push(include.as_os_str().to_owned());
        }
        self.run_step(Step::Compile, &self.config.circom_bin, &compile, dir, deadline)?;

        let calculate: Vec<OsString> = vec![
            "wtns".into(),
            "calculate".into(),
            wasm.into_os_string(),
            input.into_os_string(),
            wtns.as_os_str().to_owned(),
        ];
        self.run_step(
            Step::CalculateWitness,
            &self.config.snarkjs_bin,
            &calculate,
            dir,
            deadline,
        )?;

        let export: Vec<OsString> = vec![
            "wtns".into(),
            "export".into(),
            "json".into(),
            wtns.into_os_string(),
            witness_json.as_os_str().to_owned(),
        ];
        self.run_step(
            Step::ExportWitness,
            &self.config.snarkjs_bin,
            &export,
            dir,
            deadline,
        )?;

        let witness = WitnessDocument::read(&witness_json)?;
        info!(circuit, signals = witness.signals().len(), "witness exported");
        Ok(witness)
    }

    fn scratch_dir(&self) -> Result<TempDir, OracleError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("circuit-oracle-");
        match &self.scratch_root {
            Some(root) => builder
                .tempdir_in(root)
                .map_err(|err| OracleError::io(root, err)),
            None => builder
                .tempdir()
                .map_err(|err| OracleError::io(std::env::temp_dir(), err)),
        }
    }

    fn run_step(
        &self,
        step: Step,
        program: &Path,
        args: &[OsString],
        dir: &Path,
        deadline: Instant,
    ) -> Result<(), OracleError> {
        let stem = step.as_str().replace(' ', "-");
        let stdout_path = dir.join(format!("{stem}.stdout"));
        let stderr_path = dir.join(format!("{stem}.stderr"));
        let stdout = File::create(&stdout_path).map_err(|err| OracleError::io(&stdout_path, err))?;
        let stderr = File::create(&stderr_path).map_err(|err| OracleError::io(&stderr_path, err))?;

        debug!(%step, program = %program.display(), ?args, "running external tool");
        let started = Instant::now();

        let mut child = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .spawn()
            .map_err(|err| OracleError::io(program, err))?;

        let status = loop {
            if let Some(status) = child.try_wait().map_err(|err| OracleError::io(program, err))? {
                break status;
            }
            let now = Instant::now();
            if now >= deadline {
                // The child may exit between the poll and the kill.
                let _ = child.kill();
                let _ = child.wait();
                return Err(OracleError::Timeout {
                    step,
                    limit: self.config.timeout,
                });
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        };

        let stderr = fs::read(&stderr_path).map_err(|err| OracleError::io(&stderr_path, err))?;
        let stderr = String::from_utf8_lossy(&stderr).trim().to_string();
        check_status(step, status, stderr)?;

        debug!(%step, elapsed_ms = started.elapsed().as_millis() as u64, "external tool finished");
        Ok(())
    }
}

fn check_status(step: Step, status: ExitStatus, stderr: String) -> Result<(), OracleError> {
    if status.success() && stderr.is_empty() {
        return Ok(());
    }
    Err(OracleError::ExternalToolFailure {
        step,
        status: status.code(),
        stderr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors;

    #[test]
    fn test_missing_circuit_is_io_error() {
        let empty = tempfile::tempdir().unwrap();
        let config = ToolchainConfig {
            circuits_dir: empty.path().to_path_buf(),
            ..ToolchainConfig::default()
        };

        let err = Toolchain::new(config)
            .run(&vectors::compressed_account())
            .unwrap_err();
        match err {
            OracleError::Io { path, .. } => {
                assert!(path.ends_with("compressed_account.circom"))
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_binary_is_io_error() {
        let circuits = tempfile::tempdir().unwrap();
        fs::write(circuits.path().join("compressed_account.circom"), "").unwrap();
        let config = ToolchainConfig {
            circom_bin: circuits.path().join("no-such-circom"),
            circuits_dir: circuits.path().to_path_buf(),
            ..ToolchainConfig::default()
        };

        let err = Toolchain::new(config)
            .run(&vectors::compressed_account())
            .unwrap_err();
        assert!(matches!(err, OracleError::Io { .. }));
    }
}
