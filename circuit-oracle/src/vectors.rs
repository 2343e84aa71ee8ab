//! Fixed test vectors with independently pinned commitments.

use account_hash::state::{AccountState, CompressedAccount, TokenAccountState};

use crate::case::Pinned;

pub const COMPRESSED_ACCOUNT_COMMITMENT: &str =
    "12498065428815918942000464692933860380913811111270787006365562838788535993910";

pub const TOKEN_INITIALIZED_COMMITMENT: &str =
    "12698830169693734517877055378728747723888091986541703429186543307137690361131";

pub const TOKEN_FROZEN_COMMITMENT: &str =
    "7188696457424284786113238940722917576136875372396101198431462415737271631859";

pub fn compressed_account() -> Pinned<CompressedAccount> {
    let account = CompressedAccount {
        owner_hashed: [
            0, 240, 209, 28, 82, 70, 103, 214, 246, 226, 83, 97, 137, 180, 113, 71, 46, 201, 52,
            185, 158, 5, 253, 44, 32, 38, 56, 214, 68, 105, 0, 200,
        ],
        leaf_index: 0,
        merkle_tree_hashed: [
            0, 115, 209, 89, 76, 77, 207, 229, 229, 194, 80, 54, 250, 149, 132, 99, 87, 70, 93,
            146, 224, 105, 149, 82, 88, 71, 4, 181, 90, 87, 182, 156,
        ],
        discriminator: [1, 0, 0, 0, 0, 0, 0, 0],
        data_hash: [
            0, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42,
            42, 42, 42, 42, 42, 42, 42, 42, 42, 42,
        ],
    };
    Pinned::new(account, COMPRESSED_ACCOUNT_COMMITMENT)
}

pub fn token_account(state: AccountState) -> Pinned<TokenAccountState> {
    let token = TokenAccountState {
        mint: [
            0, 75, 210, 47, 243, 170, 140, 220, 211, 163, 58, 52, 240, 75, 191, 71, 2, 215, 169,
            56, 197, 32, 33, 202, 202, 92, 255, 53, 40, 238, 108, 122,
        ],
        owner: [
            0, 21, 245, 15, 61, 157, 224, 84, 69, 48, 190, 72, 43, 19, 47, 25, 14, 118, 20, 147,
            40, 141, 175, 33, 233, 58, 36, 179, 73, 137, 84, 99,
        ],
        amount: 1_000_000,
        delegate: [
            0, 155, 121, 92, 67, 29, 239, 43, 250, 185, 208, 203, 226, 231, 229, 145, 86, 17, 89,
            184, 3, 237, 99, 93, 130, 109, 28, 219, 129, 105, 181, 69,
        ],
        state,
    };
    let expected = match state {
        AccountState::Initialized => TOKEN_INITIALIZED_COMMITMENT,
        AccountState::Frozen => TOKEN_FROZEN_COMMITMENT,
    };
    Pinned::new(token, expected)
}
