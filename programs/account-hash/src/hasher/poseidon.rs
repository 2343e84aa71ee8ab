//! Poseidon primitive
//!
//! Thin wrapper over `light-poseidon` with circomlib-compatible parameters
//! for BN254 (x^5 S-boxes, 8 full rounds, width-dependent partial rounds).
//! The width is `inputs.len() + 1`, so each arity selects its own
//! parameter set exactly as circomlib's `Poseidon(n)` template does.

use ark_bn254::Fr;
use light_poseidon::{Poseidon, PoseidonError, PoseidonHasher};

use crate::error::HashError;

/// Largest number of inputs supported by the circom parameter sets.
pub const MAX_INPUTS: usize = light_poseidon::MAX_X5_LEN - 1;

/// Hash a non-empty list of field elements.
pub fn poseidon(inputs: &[Fr]) -> Result<Fr, HashError> {
    if inputs.is_empty() {
        return Err(PoseidonError::EmptyInput.into());
    }
    let mut hasher = Poseidon::<Fr>::new_circom(inputs.len())?;
    Ok(hasher.hash(inputs)?)
}
