//! Account Hash - canonical Poseidon commitments for compressed state
//!
//! Computes the leaf hash of a [`state::CompressedAccount`] or a
//! [`state::TokenAccountState`] exactly as the circuits in `circuits/` do.
//! The hashing core lives in [`hasher`] and is usable off-chain; the
//! program exposes it as instructions returning the commitment.

use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod hasher;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod tests;

use instructions::*;
use state::{CompressedAccount, TokenAccountState};

declare_id!("HMWiSNBPdR5WCbd2rb29CwS9RRT3L3F5E6EGod1kGPpD");

#[program]
pub mod account_hash {
    use super::*;

    pub fn hash_compressed_account(
        ctx: Context<HashCompressedAccount>,
        account: CompressedAccount,
    ) -> Result<[u8; 32]> {
        instructions::hash_compressed_account::handler(ctx, account)
    }

    pub fn hash_token_account(
        ctx: Context<HashTokenAccount>,
        token: TokenAccountState,
    ) -> Result<[u8; 32]> {
        instructions::hash_token_account::handler(ctx, token)
    }

    pub fn hash_spl_token_account(ctx: Context<HashSplTokenAccount>) -> Result<[u8; 32]> {
        instructions::hash_token_account::spl_handler(ctx)
    }
}
