//! Records that can be checked against a circuit

use account_hash::hasher::{decimal_to_field, Commit};
use account_hash::state::{CompressedAccount, TokenAccountState};
use ark_bn254::Fr;

use crate::document::InputDocument;
use crate::error::OracleError;

/// One cross-validation case: a record, the circuit that hashes it, and
/// optionally a commitment pinned independently of the reference hasher.
pub trait CircuitCase {
    /// Circuit file stem under the circuits directory
    fn circuit(&self) -> &str;

    /// Signals for the witness calculator, before domain separation
    fn input_document(&self) -> Result<InputDocument, OracleError>;

    /// Commitment computed by the reference hasher
    fn reference_commitment(&self) -> Result<Fr, OracleError>;

    /// Pinned commitment as a decimal string
    fn expected(&self) -> Option<&str> {
        None
    }
}

impl CircuitCase for CompressedAccount {
    fn circuit(&self) -> &str {
        CompressedAccount::CIRCUIT
    }

    fn input_document(&self) -> Result<InputDocument, OracleError> {
        Ok(InputDocument::from_inputs(&self.circuit_inputs()?))
    }

    fn reference_commitment(&self) -> Result<Fr, OracleError> {
        Ok(self.commit()?)
    }
}

impl CircuitCase for TokenAccountState {
    fn circuit(&self) -> &str {
        TokenAccountState::CIRCUIT
    }

    fn input_document(&self) -> Result<InputDocument, OracleError> {
        Ok(InputDocument::from_inputs(&self.circuit_inputs()?))
    }

    fn reference_commitment(&self) -> Result<Fr, OracleError> {
        Ok(self.commit()?)
    }
}

/// A case carrying a hard-coded expected commitment.
#[derive(Clone, Debug)]
pub struct Pinned<C> {
    pub case: C,
    pub expected: String,
}

impl<C: CircuitCase> Pinned<C> {
    pub fn new(case: C, expected: impl Into<String>) -> Self {
        Self {
            case,
            expected: expected.into(),
        }
    }

    /// Parsed pinned value.
    pub fn expected_field(&self) -> Result<Fr, OracleError> {
        Ok(decimal_to_field(&self.expected)?)
    }
}

impl<C: CircuitCase> CircuitCase for Pinned<C> {
    fn circuit(&self) -> &str {
        self.case.circuit()
    }

    fn input_document(&self) -> Result<InputDocument, OracleError> {
        self.case.input_document()
    }

    fn reference_commitment(&self) -> Result<Fr, OracleError> {
        self.case.reference_commitment()
    }

    fn expected(&self) -> Option<&str> {
        Some(&self.expected)
    }
}
