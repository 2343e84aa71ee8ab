//! Record definitions hashed into compressed state trees

pub mod compressed_account;
pub mod token_account;

pub use compressed_account::CompressedAccount;
pub use token_account::{AccountState, TokenAccountState};
