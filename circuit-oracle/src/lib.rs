//! Circuit Oracle - cross-validates account commitments against circom
//!
//! The reference hasher in `account-hash` and the circuits in `circuits/`
//! must agree bit for bit. This crate evaluates the real circuit through
//! `circom` and `snarkjs` and compares its output with the reference
//! commitment, so an encoding bug shared by hand-written code and its
//! tests still surfaces.
//!
//! ```no_run
//! use circuit_oracle::{cross_validate, vectors, Toolchain};
//!
//! let toolchain = Toolchain::from_env()?;
//! let outcome = cross_validate(&toolchain, &vectors::compressed_account())?;
//! println!("{}", outcome.commitment);
//! # Ok::<(), circuit_oracle::OracleError>(())
//! ```

pub mod case;
pub mod config;
pub mod document;
pub mod error;
pub mod harness;
pub mod toolchain;
pub mod vectors;

pub use case::{CircuitCase, Pinned};
pub use config::ToolchainConfig;
pub use document::{InputDocument, WitnessDocument};
pub use error::{OracleError, Step};
pub use harness::{cross_validate, CrossValidation};
pub use toolchain::Toolchain;
