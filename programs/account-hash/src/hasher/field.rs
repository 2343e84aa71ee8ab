//! Field Encoder
//!
//! Converts raw byte-oriented record fields into elements of the BN254
//! scalar field (`Fr`). Every 32-byte buffer is read big-endian, which is
//! the encoding the circuits use for their decimal inputs.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use num_traits::Num;
use solana_program::keccak;

use crate::error::EncodingError;

/// BN254 scalar field modulus (r), big-endian.
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const BN254_SCALAR_MODULUS_BE: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29,
    0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91,
    0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// Check whether a big-endian 32-byte integer is below the scalar modulus.
#[inline]
pub fn is_canonical_be(bytes: &[u8; 32]) -> bool {
    // Lexicographic order on equal-length big-endian arrays is numeric order.
    bytes < &BN254_SCALAR_MODULUS_BE
}

/// Interpret 32 bytes as a big-endian unsigned integer and return it as a
/// field element.
///
/// Fails with [`EncodingError::OutOfRange`] if the integer is `>= r`. No
/// reduction is ever applied here.
pub fn bytes_to_field(bytes: &[u8; 32]) -> Result<Fr, EncodingError> {
    if !is_canonical_be(bytes) {
        return Err(EncodingError::OutOfRange);
    }
    Ok(Fr::from_be_bytes_mod_order(bytes))
}

/// Keccak-256 digest of `bytes` with the most significant byte zeroed.
///
/// A 248-bit integer is always below the 254-bit modulus, so the result
/// is a valid big-endian field element.
pub fn hash_to_field_bytes(bytes: &[u8]) -> [u8; 32] {
    let mut digest = keccak::hashv(&[bytes]).to_bytes();
    digest[0] = 0;
    digest
}

/// Hash arbitrary bytes into a single field element.
///
/// Used to compress identities (owners, mints, trees) into one element.
pub fn reduce_hash_to_field(bytes: &[u8]) -> Fr {
    Fr::from_be_bytes_mod_order(&hash_to_field_bytes(bytes))
}

/// Convert u64 to 32-byte big-endian representation.
///
/// Places the 8-byte big-endian value in the last 8 bytes.
/// Used for encoding amounts and leaf indices as field elements.
#[inline]
pub fn u64_to_bytes32_be(value: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[24..32].copy_from_slice(&value.to_be_bytes());
    bytes
}

/// Place a one-byte state flag in the last byte of a 32-byte buffer.
#[inline]
pub fn state_flag_bytes(flag: u8) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[31] = flag;
    bytes
}

/// Place an 8-byte discriminator in the last 8 bytes of a 32-byte buffer.
///
/// The discriminator bytes are copied as-is, so they read as a big-endian
/// integer: `[1, 0, 0, 0, 0, 0, 0, 0]` encodes 2^56.
#[inline]
pub fn discriminator_bytes(discriminator: [u8; 8]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[24..32].copy_from_slice(&discriminator);
    bytes
}

/// Canonical 32-byte big-endian encoding of a field element.
pub fn field_to_bytes_be(value: &Fr) -> [u8; 32] {
    let be = value.into_bigint().to_bytes_be();
    let mut bytes = [0u8; 32];
    bytes[32 - be.len()..].copy_from_slice(&be);
    bytes
}

/// Base-10 rendering of a field element, as the circuit documents use.
pub fn field_to_decimal(value: &Fr) -> String {
    BigUint::from(value.into_bigint()).to_string()
}

/// Parse a base-10 field element. Values `>= r` are rejected, not reduced.
pub fn decimal_to_field(text: &str) -> Result<Fr, EncodingError> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EncodingError::InvalidDecimal);
    }
    let value = BigUint::from_str_radix(text, 10).map_err(|_| EncodingError::InvalidDecimal)?;
    let be = value.to_bytes_be();
    if be.len() > 32 {
        return Err(EncodingError::OutOfRange);
    }
    let mut bytes = [0u8; 32];
    bytes[32 - be.len()..].copy_from_slice(&be);
    bytes_to_field(&bytes)
}
