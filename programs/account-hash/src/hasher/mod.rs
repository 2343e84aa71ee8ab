//! Canonical hashing for compressed records
//!
//! # Pipeline
//!
//! ```text
//! raw bytes -> field encoder -> domain separation (discriminator only)
//!           -> ordered inputs (conditional arity) -> Poseidon -> commitment
//! ```
//!
//! The input order of every record is part of the contract with the
//! circuits in `circuits/`: permuting inputs changes the hash.
//!
//! # Circuit Compatibility
//!
//! The circuits take the raw field values (before domain separation) as
//! decimal strings and apply separation and conditional arity themselves.
//! [`Commit::circuit_inputs`] returns exactly those values; the
//! Poseidon input list comes from [`Commit::hash_inputs`].

pub mod domain;
pub mod field;
pub mod inputs;
pub mod poseidon;

use ark_bn254::Fr;

use crate::error::{EncodingError, HashError};

pub use domain::{separate_discriminator, DISCRIMINATOR_DOMAIN};
pub use field::{
    bytes_to_field, decimal_to_field, field_to_bytes_be, field_to_decimal, reduce_hash_to_field,
};
pub use inputs::{HashInput, HashInputs};
pub use poseidon::poseidon;

/// A record with a canonical Poseidon commitment.
pub trait Commit {
    /// Named field values as the circuit receives them: every field, in
    /// schema order, before domain separation.
    fn circuit_inputs(&self) -> Result<HashInputs, EncodingError>;

    /// The exact Poseidon input list, after domain separation and with
    /// conditional inputs applied.
    fn hash_inputs(&self) -> Result<HashInputs, EncodingError>;

    /// The commitment as a field element.
    fn commit(&self) -> Result<Fr, HashError> {
        self.hash_inputs()?.hash()
    }

    /// The commitment as 32 big-endian bytes.
    fn hash(&self) -> Result<[u8; 32], HashError> {
        Ok(field_to_bytes_be(&self.commit()?))
    }
}

/// Compute the commitment of any record.
pub fn commit<R: Commit + ?Sized>(record: &R) -> Result<Fr, HashError> {
    record.commit()
}
