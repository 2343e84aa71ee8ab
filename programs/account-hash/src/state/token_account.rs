//! Compressed token account state
//!
//! # Hash Layout
//! ```text
//! initialized: Poseidon(mint, owner, amount, delegate)
//! frozen:      Poseidon(mint, owner, amount, delegate, state)
//! ```
//!
//! The state flag is appended only for frozen accounts. An initialized
//! account hashes four elements, which is NOT the same as hashing a zero
//! fifth element.

use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::state::{
    Account as SplTokenAccount, AccountState as SplAccountState,
};
use ark_bn254::Fr;
use solana_program::program_option::COption;

use crate::error::EncodingError;
use crate::hasher::field::{bytes_to_field, hash_to_field_bytes, state_flag_bytes, u64_to_bytes32_be};
use crate::hasher::{Commit, HashInputs};

/// Lifecycle flag of a token account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountState {
    #[default]
    Initialized,
    Frozen,
}

impl AccountState {
    /// One-byte flag as encoded in the last byte of the state field
    #[inline]
    pub fn flag(self) -> u8 {
        match self {
            AccountState::Initialized => 0,
            AccountState::Frozen => 1,
        }
    }

    /// The state is hashed only when its flag is non-zero.
    #[inline]
    pub fn is_frozen(self) -> bool {
        self.flag() != 0
    }
}

/// Token account state, as it is hashed into a Merkle leaf.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenAccountState {
    /// Mint identity, hashed into the field (big-endian)
    pub mint: [u8; 32],

    /// Owner identity, hashed into the field (big-endian)
    pub owner: [u8; 32],

    /// Token amount
    pub amount: u64,

    /// Delegate identity, hashed into the field; all zeros when absent
    pub delegate: [u8; 32],

    /// Lifecycle flag
    pub state: AccountState,
}

impl TokenAccountState {
    /// Poseidon inputs for an initialized account
    pub const BASE_HASH_INPUTS: usize = 4;

    /// Circuit compiled for this record
    pub const CIRCUIT: &'static str = "token_hash";

    /// Build a record from raw identities, hashing them into the field.
    pub fn new(
        mint: &Pubkey,
        owner: &Pubkey,
        amount: u64,
        delegate: Option<&Pubkey>,
        state: AccountState,
    ) -> Self {
        Self {
            mint: hash_to_field_bytes(mint.as_ref()),
            owner: hash_to_field_bytes(owner.as_ref()),
            amount,
            delegate: delegate.map_or([0u8; 32], |delegate| hash_to_field_bytes(delegate.as_ref())),
            state,
        }
    }

    /// Build a record from an SPL token account.
    ///
    /// Only a frozen SPL account maps to [`AccountState::Frozen`].
    pub fn from_spl_account(account: &SplTokenAccount) -> Self {
        let delegate = match &account.delegate {
            COption::Some(delegate) => Some(delegate),
            COption::None => None,
        };
        let state = match account.state {
            SplAccountState::Frozen => AccountState::Frozen,
            _ => AccountState::Initialized,
        };
        Self::new(&account.mint, &account.owner, account.amount, delegate, state)
    }

    pub fn is_frozen(&self) -> bool {
        self.state.is_frozen()
    }
}

impl TokenAccountState {
    fn fields(&self) -> std::result::Result<[Fr; 5], EncodingError> {
        Ok([
            bytes_to_field(&self.mint)?,
            bytes_to_field(&self.owner)?,
            bytes_to_field(&u64_to_bytes32_be(self.amount))?,
            bytes_to_field(&self.delegate)?,
            bytes_to_field(&state_flag_bytes(self.state.flag()))?,
        ])
    }
}

impl Commit for TokenAccountState {
    fn circuit_inputs(&self) -> std::result::Result<HashInputs, EncodingError> {
        let [mint, owner, amount, delegate, state] = self.fields()?;
        Ok(HashInputs::with_capacity(Self::BASE_HASH_INPUTS + 1)
            .push("mint", mint)
            .push("owner", owner)
            .push("amount", amount)
            .push("delegate", delegate)
            .push("state", state))
    }

    fn hash_inputs(&self) -> std::result::Result<HashInputs, EncodingError> {
        let [mint, owner, amount, delegate, state] = self.fields()?;
        Ok(HashInputs::with_capacity(Self::BASE_HASH_INPUTS + 1)
            .push("mint", mint)
            .push("owner", owner)
            .push("amount", amount)
            .push("delegate", delegate)
            .push_if(self.is_frozen(), "state", state))
    }
}
