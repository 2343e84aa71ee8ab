//! Hash Compressed Account Instruction
//!
//! Computes the Poseidon commitment of a generic compressed account and
//! returns it as instruction return data.

use anchor_lang::prelude::*;

use crate::events::CompressedAccountHashed;
use crate::hasher::Commit;
use crate::state::CompressedAccount;

/// No accounts required; the record is passed as instruction data.
#[derive(Accounts)]
pub struct HashCompressedAccount {}

/// Handler for hash_compressed_account instruction.
///
/// # Returns
/// The 32-byte big-endian commitment.
pub fn handler(_ctx: Context<HashCompressedAccount>, account: CompressedAccount) -> Result<[u8; 32]> {
    let event = hashed_event(&account)?;
    let hash = event.hash;

    msg!("Compressed account hashed");
    msg!("Leaf index: {}", event.leaf_index);
    msg!("Hash: {:?}", &hash[..8]);

    emit!(event);
    Ok(hash)
}

fn hashed_event(account: &CompressedAccount) -> Result<CompressedAccountHashed> {
    Ok(CompressedAccountHashed {
        hash: account.hash()?,
        leaf_index: account.leaf_index,
    })
}
