//! Hash Token Account Instructions
//!
//! Computes the Poseidon commitment of token account state, either from a
//! record passed as instruction data or from a live SPL token account.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::events::TokenAccountHashed;
use crate::hasher::Commit;
use crate::state::TokenAccountState;

/// No accounts required; the record is passed as instruction data.
#[derive(Accounts)]
pub struct HashTokenAccount {}

/// Accounts for hash_spl_token_account instruction.
#[derive(Accounts)]
pub struct HashSplTokenAccount<'info> {
    /// SPL token account whose state is hashed (read-only).
    pub token_account: Account<'info, TokenAccount>,
}

/// Handler for hash_token_account instruction.
///
/// # Returns
/// The 32-byte big-endian commitment.
pub fn handler(_ctx: Context<HashTokenAccount>, token: TokenAccountState) -> Result<[u8; 32]> {
    hash_and_emit(&token)
}

/// Handler for hash_spl_token_account instruction.
pub fn spl_handler(ctx: Context<HashSplTokenAccount>) -> Result<[u8; 32]> {
    let token = TokenAccountState::from_spl_account(&ctx.accounts.token_account);
    msg!("Token account: {}", ctx.accounts.token_account.key());
    hash_and_emit(&token)
}

fn hash_and_emit(token: &TokenAccountState) -> Result<[u8; 32]> {
    let event = hashed_event(token)?;
    let hash = event.hash;

    msg!("Token account hashed");
    msg!("Frozen: {}", event.frozen);
    msg!("Hash: {:?}", &hash[..8]);

    emit!(event);
    Ok(hash)
}

fn hashed_event(token: &TokenAccountState) -> Result<TokenAccountHashed> {
    Ok(TokenAccountHashed {
        hash: token.hash()?,
        frozen: token.is_frozen(),
    })
}
