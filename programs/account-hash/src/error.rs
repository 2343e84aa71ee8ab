//! Error types for the account hash program
//!
//! Library code returns [`EncodingError`] and [`HashError`]; instruction
//! handlers convert them into [`AccountHashError`] so error codes stay
//! stable for clients.

use anchor_lang::prelude::*;
use light_poseidon::PoseidonError;

/// Failure to turn raw bytes or text into a BN254 scalar field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The big-endian integer is not below the scalar field modulus.
    #[error("value is not below the BN254 scalar field modulus")]
    OutOfRange,

    /// Text is not a base-10 unsigned integer.
    #[error("value is not a base-10 unsigned integer")]
    InvalidDecimal,
}

/// Failure while computing a commitment.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("poseidon permutation failed: {0}")]
    Poseidon(#[from] PoseidonError),
}

#[error_code]
pub enum AccountHashError {
    // ========== Encoding Errors (6000-6001) ==========

    /// A field does not fit the BN254 scalar field
    #[msg("Value is not below the BN254 scalar field modulus")]
    ValueOutOfRange, // 6000

    /// A decimal field element could not be parsed
    #[msg("Value is not a base-10 unsigned integer")]
    InvalidDecimal, // 6001

    // ========== Hasher Errors (6002) ==========

    /// The Poseidon hasher rejected its inputs
    #[msg("Poseidon hasher failed")]
    HasherFailure, // 6002
}

impl From<EncodingError> for AccountHashError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::OutOfRange => AccountHashError::ValueOutOfRange,
            EncodingError::InvalidDecimal => AccountHashError::InvalidDecimal,
        }
    }
}

impl From<HashError> for AccountHashError {
    fn from(err: HashError) -> Self {
        match err {
            HashError::Encoding(encoding) => encoding.into(),
            HashError::Poseidon(_) => AccountHashError::HasherFailure,
        }
    }
}

impl From<HashError> for anchor_lang::error::Error {
    fn from(err: HashError) -> Self {
        AccountHashError::from(err).into()
    }
}
