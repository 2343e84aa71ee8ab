//! Generic compressed account record
//!
//! # Hash Layout
//! ```text
//! Poseidon(owner_hashed, leaf_index, merkle_tree_hashed,
//!          discriminator + 2^65, data_hash)
//! ```

use anchor_lang::prelude::*;
use ark_bn254::Fr;

use crate::error::EncodingError;
use crate::hasher::field::{
    bytes_to_field, discriminator_bytes, hash_to_field_bytes, u64_to_bytes32_be,
};
use crate::hasher::{separate_discriminator, Commit, HashInputs};

/// Compressed account state, as it is hashed into a Merkle leaf.
///
/// Built immediately before hashing; only the resulting hash is stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CompressedAccount {
    /// Owner identity, already hashed into the field (big-endian)
    pub owner_hashed: [u8; 32],

    /// Position of the account in its state tree
    pub leaf_index: u32,

    /// State tree identity, already hashed into the field (big-endian)
    pub merkle_tree_hashed: [u8; 32],

    /// Account type tag
    pub discriminator: [u8; 8],

    /// Commitment to the account payload, computed by the owning program
    pub data_hash: [u8; 32],
}

impl CompressedAccount {
    /// Number of Poseidon inputs
    pub const HASH_INPUTS: usize = 5;

    /// Circuit compiled for this record
    pub const CIRCUIT: &'static str = "compressed_account";

    /// Build a record from raw identities, hashing them into the field.
    pub fn new(
        owner: &Pubkey,
        leaf_index: u32,
        merkle_tree: &Pubkey,
        discriminator: [u8; 8],
        data_hash: [u8; 32],
    ) -> Self {
        Self {
            owner_hashed: hash_to_field_bytes(owner.as_ref()),
            leaf_index,
            merkle_tree_hashed: hash_to_field_bytes(merkle_tree.as_ref()),
            discriminator,
            data_hash,
        }
    }
}

impl CompressedAccount {
    fn leaf_index_field(&self) -> std::result::Result<Fr, EncodingError> {
        bytes_to_field(&u64_to_bytes32_be(u64::from(self.leaf_index)))
    }

    fn discriminator_field(&self) -> std::result::Result<Fr, EncodingError> {
        bytes_to_field(&discriminator_bytes(self.discriminator))
    }
}

impl Commit for CompressedAccount {
    fn circuit_inputs(&self) -> std::result::Result<HashInputs, EncodingError> {
        Ok(HashInputs::with_capacity(Self::HASH_INPUTS)
            .push("owner_hashed", bytes_to_field(&self.owner_hashed)?)
            .push("leaf_index", self.leaf_index_field()?)
            .push("merkle_tree_hashed", bytes_to_field(&self.merkle_tree_hashed)?)
            .push("discriminator", self.discriminator_field()?)
            .push("data_hash", bytes_to_field(&self.data_hash)?))
    }

    fn hash_inputs(&self) -> std::result::Result<HashInputs, EncodingError> {
        Ok(HashInputs::with_capacity(Self::HASH_INPUTS)
            .push("owner_hashed", bytes_to_field(&self.owner_hashed)?)
            .push("leaf_index", self.leaf_index_field()?)
            .push("merkle_tree_hashed", bytes_to_field(&self.merkle_tree_hashed)?)
            .push("discriminator", separate_discriminator(self.discriminator_field()?))
            .push("data_hash", bytes_to_field(&self.data_hash)?))
    }
}
