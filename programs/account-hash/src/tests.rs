//! Test Suite for the account hash program
//!
//! # Test Categories
//!
//! 1. **Reference Vector Tests**: pinned commitments computed with circomlib
//!    parameters
//! 2. **Ordering Tests**: input order is part of the hash
//! 3. **Conditional Arity Tests**: the token state flag
//! 4. **Domain Separation Tests**: discriminator offset
//! 5. **Property Tests**: randomized invariants

#[cfg(test)]
mod reference_vector_tests {
    use crate::hasher::{commit, field_to_bytes_be, field_to_decimal, Commit};
    use crate::state::{AccountState, CompressedAccount, TokenAccountState};

    pub(crate) fn reference_account() -> CompressedAccount {
        CompressedAccount {
            owner_hashed: [
                0, 240, 209, 28, 82, 70, 103, 214, 246, 226, 83, 97, 137, 180, 113, 71, 46, 201,
                52, 185, 158, 5, 253, 44, 32, 38, 56, 214, 68, 105, 0, 200,
            ],
            leaf_index: 0,
            merkle_tree_hashed: [
                0, 115, 209, 89, 76, 77, 207, 229, 229, 194, 80, 54, 250, 149, 132, 99, 87, 70,
                93, 146, 224, 105, 149, 82, 88, 71, 4, 181, 90, 87, 182, 156,
            ],
            discriminator: [1, 0, 0, 0, 0, 0, 0, 0],
            data_hash: [
                0, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42,
                42, 42, 42, 42, 42, 42, 42, 42, 42, 42, 42,
            ],
        }
    }

    pub(crate) fn reference_token(state: AccountState) -> TokenAccountState {
        let from_decimal = |text: &str| {
            field_to_bytes_be(&crate::hasher::decimal_to_field(text).unwrap())
        };
        TokenAccountState {
            mint: from_decimal(
                "133964189369745375817643650762572252425757995588871671688134800968986291322",
            ),
            owner: from_decimal(
                "38795127103506095060616951389784305450515281095163674791955527140240872547",
            ),
            amount: 1_000_000,
            delegate: from_decimal(
                "274698893731942391252194363483372283063414035850745528064643496257815950661",
            ),
            state,
        }
    }

    #[test]
    fn test_compressed_account_reference_commitment() {
        let commitment = commit(&reference_account()).unwrap();
        assert_eq!(
            field_to_bytes_be(&commitment),
            [
                27, 161, 167, 131, 154, 66, 146, 127, 231, 77, 51, 117, 90, 88, 219, 247, 27, 66,
                249, 253, 215, 189, 3, 96, 100, 81, 185, 192, 172, 211, 198, 54
            ]
        );
        assert_eq!(
            field_to_decimal(&commitment),
            "12498065428815918942000464692933860380913811111270787006365562838788535993910"
        );
    }

    #[test]
    fn test_compressed_account_circuit_inputs() {
        let inputs = reference_account().circuit_inputs().unwrap();
        let decimals: Vec<String> = inputs.values().iter().map(field_to_decimal).collect();
        assert_eq!(
            decimals,
            vec![
                "425486524076369257696200123446467084772697753461519990418189180169295036616",
                "0",
                "204632284906991010944508403885998306218274587686377339013368285764139857564",
                "72057594037927936",
                "74498586825479169849723979325442587773243556310614333481268666181561756202",
            ]
        );
    }

    #[test]
    fn test_token_reference_commitment() {
        let commitment = commit(&reference_token(AccountState::Initialized)).unwrap();
        assert_eq!(
            field_to_decimal(&commitment),
            "12698830169693734517877055378728747723888091986541703429186543307137690361131"
        );
    }

    #[test]
    fn test_commit_is_deterministic() {
        let account = reference_account();
        assert_eq!(account.commit().unwrap(), account.commit().unwrap());

        let token = reference_token(AccountState::Frozen);
        assert_eq!(token.hash().unwrap(), token.hash().unwrap());
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::reference_vector_tests::reference_account;
    use crate::hasher::{poseidon, Commit};

    #[test]
    fn test_permuted_inputs_change_hash() {
        let values = reference_account().hash_inputs().unwrap().values();
        let expected = poseidon(&values).unwrap();

        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                if values[i] == values[j] {
                    continue;
                }
                let mut permuted = values.clone();
                permuted.swap(i, j);
                assert_ne!(
                    poseidon(&permuted).unwrap(),
                    expected,
                    "swapping inputs {} and {} must change the hash",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_owner_and_tree_are_not_interchangeable() {
        let account = reference_account();
        let mut swapped = account.clone();
        swapped.owner_hashed = account.merkle_tree_hashed;
        swapped.merkle_tree_hashed = account.owner_hashed;
        assert_ne!(account.hash().unwrap(), swapped.hash().unwrap());
    }
}

#[cfg(test)]
mod conditional_arity_tests {
    use super::reference_vector_tests::reference_token;
    use crate::hasher::{poseidon, Commit};
    use crate::state::AccountState;

    #[test]
    fn test_initialized_is_four_element_hash() {
        let token = reference_token(AccountState::Initialized);
        let all = token.circuit_inputs().unwrap().values();
        assert_eq!(token.commit().unwrap(), poseidon(&all[..4]).unwrap());
    }

    #[test]
    fn test_frozen_is_five_element_hash() {
        let token = reference_token(AccountState::Frozen);
        let all = token.circuit_inputs().unwrap().values();
        assert_eq!(all.len(), 5);
        assert_eq!(token.commit().unwrap(), poseidon(&all).unwrap());
    }

    #[test]
    fn test_initialized_is_not_zero_padded() {
        let token = reference_token(AccountState::Initialized);
        let padded = poseidon(&token.circuit_inputs().unwrap().values()).unwrap();
        assert_ne!(token.commit().unwrap(), padded);
    }

    #[test]
    fn test_frozen_and_initialized_differ() {
        assert_ne!(
            reference_token(AccountState::Initialized).hash().unwrap(),
            reference_token(AccountState::Frozen).hash().unwrap()
        );
    }
}

#[cfg(test)]
mod domain_separation_tests {
    use super::reference_vector_tests::reference_account;
    use crate::hasher::{
        field_to_bytes_be, poseidon, separate_discriminator, Commit, DISCRIMINATOR_DOMAIN,
    };
    use ark_bn254::Fr;

    #[test]
    fn test_unseparated_discriminator_changes_hash() {
        let account = reference_account();
        let raw = account.circuit_inputs().unwrap().values();
        assert_ne!(account.commit().unwrap(), poseidon(&raw).unwrap());
    }

    #[test]
    fn test_separated_value_exceeds_any_raw_discriminator() {
        // Raw discriminators fit in 8 bytes; every separated value is >= 2^65.
        for d in [0u64, 1, 1 << 56, u64::MAX] {
            let separated = field_to_bytes_be(&separate_discriminator(Fr::from(d)));
            assert!(separated[..24].iter().any(|&b| b != 0));
        }
        assert_eq!(
            separate_discriminator(Fr::from(0u64)),
            Fr::from(DISCRIMINATOR_DOMAIN)
        );
    }
}

#[cfg(test)]
mod identity_tests {
    use anchor_lang::prelude::Pubkey;
    use rand::Rng;

    use crate::hasher::Commit;
    use crate::state::{AccountState, CompressedAccount, TokenAccountState};

    fn random_pubkey(rng: &mut impl Rng) -> Pubkey {
        Pubkey::new_from_array(rng.gen())
    }

    #[test]
    fn test_hashed_identities_always_encode() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let owner = random_pubkey(&mut rng);
            let tree = random_pubkey(&mut rng);
            let account = CompressedAccount::new(&owner, rng.gen(), &tree, rng.gen(), [0u8; 32]);
            assert!(account.hash().is_ok());

            let delegate = random_pubkey(&mut rng);
            let token = TokenAccountState::new(
                &owner,
                &tree,
                rng.gen(),
                Some(&delegate),
                AccountState::Frozen,
            );
            assert!(token.hash().is_ok());
        }
    }

    #[test]
    fn test_distinct_owners_distinct_commitments() {
        let mut rng = rand::thread_rng();
        let tree = random_pubkey(&mut rng);
        let a = CompressedAccount::new(&random_pubkey(&mut rng), 0, &tree, [0u8; 8], [0u8; 32]);
        let b = CompressedAccount::new(&random_pubkey(&mut rng), 0, &tree, [0u8; 8], [0u8; 32]);
        assert_ne!(a.hash().unwrap(), b.hash().unwrap());
    }
}

// ============================================================================
// PROPERTY-BASED TESTS (using proptest)
// ============================================================================

#[cfg(test)]
mod property_tests {
    use ark_bn254::Fr;
    use proptest::prelude::*;

    use crate::error::EncodingError;
    use crate::hasher::field::{bytes_to_field, field_to_bytes_be, is_canonical_be};
    use crate::hasher::{separate_discriminator, Commit};
    use crate::state::{AccountState, CompressedAccount, TokenAccountState};

    fn field_bytes() -> impl Strategy<Value = [u8; 32]> {
        // Clearing the top byte keeps values below the modulus.
        any::<[u8; 32]>().prop_map(|mut bytes| {
            bytes[0] = 0;
            bytes
        })
    }

    proptest! {
        #[test]
        fn prop_compressed_account_deterministic(
            owner in field_bytes(),
            tree in field_bytes(),
            data in field_bytes(),
            leaf_index in any::<u32>(),
            discriminator in any::<[u8; 8]>(),
        ) {
            let account = CompressedAccount {
                owner_hashed: owner,
                leaf_index,
                merkle_tree_hashed: tree,
                discriminator,
                data_hash: data,
            };
            prop_assert_eq!(account.hash().unwrap(), account.hash().unwrap());
        }

        #[test]
        fn prop_token_arity_follows_state(
            mint in field_bytes(),
            owner in field_bytes(),
            delegate in field_bytes(),
            amount in any::<u64>(),
            frozen in any::<bool>(),
        ) {
            let state = if frozen { AccountState::Frozen } else { AccountState::Initialized };
            let token = TokenAccountState { mint, owner, amount, delegate, state };
            let expected = if frozen { 5 } else { 4 };
            prop_assert_eq!(token.hash_inputs().unwrap().len(), expected);
        }

        #[test]
        fn prop_separation_is_injective(a in any::<u64>(), b in any::<u64>()) {
            prop_assume!(a != b);
            prop_assert_ne!(
                separate_discriminator(Fr::from(a)),
                separate_discriminator(Fr::from(b))
            );
        }

        #[test]
        fn prop_separation_never_fixes_a_point(d in any::<u64>()) {
            prop_assert_ne!(separate_discriminator(Fr::from(d)), Fr::from(d));
        }

        #[test]
        fn prop_range_enforcement(bytes in any::<[u8; 32]>()) {
            match bytes_to_field(&bytes) {
                Ok(value) => {
                    prop_assert!(is_canonical_be(&bytes));
                    prop_assert_eq!(field_to_bytes_be(&value), bytes);
                }
                Err(err) => {
                    prop_assert!(!is_canonical_be(&bytes));
                    prop_assert_eq!(err, EncodingError::OutOfRange);
                }
            }
        }
    }
}
