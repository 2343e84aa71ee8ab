//! Error types for the circuit oracle

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use account_hash::error::{EncodingError, HashError};

/// The three external invocations of one case, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Compile,
    CalculateWitness,
    ExportWitness,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Compile => "compile",
            Step::CalculateWitness => "witness calculation",
            Step::ExportWitness => "witness export",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("invalid toolchain configuration: {0}")]
    Config(String),

    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A tool exited abnormally or wrote to stderr. `status` is `None` when
    /// the process was terminated by a signal.
    #[error("{step} failed (exit status {status:?}): {stderr}")]
    ExternalToolFailure {
        step: Step,
        status: Option<i32>,
        stderr: String,
    },

    #[error("{step} did not finish within {limit:?}")]
    Timeout { step: Step, limit: Duration },

    #[error("malformed witness document: {0}")]
    MalformedWitness(String),

    #[error("reference commitment failed: {0}")]
    Hash(#[from] HashError),

    /// `observed` is the value compared against the reference by `check`;
    /// `circuit` is always the circuit's actual output.
    #[error("{check} mismatch: reference {reference}, observed {observed} (circuit output {circuit})")]
    AssertionMismatch {
        check: &'static str,
        reference: String,
        observed: String,
        circuit: String,
    },
}

impl From<EncodingError> for OracleError {
    fn from(err: EncodingError) -> Self {
        OracleError::Hash(HashError::from(err))
    }
}

impl OracleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OracleError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error came from the external toolchain rather than from
    /// the comparison itself.
    pub fn is_toolchain_failure(&self) -> bool {
        matches!(
            self,
            OracleError::ExternalToolFailure { .. }
                | OracleError::Timeout { .. }
                | OracleError::MalformedWitness(_)
                | OracleError::Io { .. }
                | OracleError::Json(_)
        )
    }
}
