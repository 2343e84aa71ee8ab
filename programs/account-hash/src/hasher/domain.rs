//! Discriminator domain separation.

use ark_bn254::Fr;

/// Offset added to every discriminator before hashing: 2^65.
///
/// In a 32-byte big-endian buffer this is byte 23 set to `0x02`, just above
/// the 8 bytes a discriminator can occupy, so a separated discriminator
/// never equals a raw 8-byte value. This is a protocol constant: changing it
/// changes every commitment and requires a new version of the scheme.
pub const DISCRIMINATOR_DOMAIN: u128 = 36_893_488_147_419_103_232;

/// Apply domain separation to an encoded discriminator: `d + 2^65 (mod r)`.
#[inline]
pub fn separate_discriminator(discriminator: Fr) -> Fr {
    discriminator + Fr::from(DISCRIMINATOR_DOMAIN)
}
