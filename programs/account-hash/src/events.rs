//! Event definitions for the account hash program
//!
//! Indexers pair these with the Merkle tree updates that consume the
//! commitments.

use anchor_lang::prelude::*;

/// Emitted when a compressed account commitment is computed.
#[event]
pub struct CompressedAccountHashed {
    /// Big-endian commitment
    pub hash: [u8; 32],
    /// Leaf the account occupies
    pub leaf_index: u32,
}

/// Emitted when a token account commitment is computed.
#[event]
pub struct TokenAccountHashed {
    /// Big-endian commitment
    pub hash: [u8; 32],
    /// Whether the state flag was part of the hash
    pub frozen: bool,
}
