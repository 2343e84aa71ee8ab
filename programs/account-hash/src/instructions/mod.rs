//! Instruction handlers for the account hash program

pub mod hash_compressed_account;
pub mod hash_token_account;

pub use hash_compressed_account::*;
pub use hash_token_account::*;
