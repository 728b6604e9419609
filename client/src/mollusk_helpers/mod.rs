use std::{collections::HashMap, path::PathBuf};

use mollusk_svm::{Mollusk, MolluskContext};
use solana_account::Account;
use solana_address::Address;
use solana_sdk::pubkey::Pubkey;

pub mod checks;
pub mod utils;

/// Converts an input deploy file to a program name used by the [`Mollusk::new`] function.
///
/// Requires the full file name; for example, `zk_private_message.so` would return the absolute
/// path version of `../target/deploy/zk_private_message`, which is exactly what
/// [`Mollusk::new`] expects.
fn deploy_file_to_program_name(program_name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../target/deploy/")
        .join(program_name)
        .canonicalize()
        .map(|p| {
            p.to_str()
                .expect("Path should convert to a &str")
                .strip_suffix(".so")
                .expect("Deploy file should have an `.so` suffix")
                .to_string()
        })
        .expect("Should create relative target/deploy/ path")
}

pub fn program_address() -> Address {
    Address::new_from_array(zk_private_message::ID)
}

/// Bridges the SDK pubkey type used by the instruction builders to the address type mollusk's
/// account store is keyed by.
pub fn to_address(pubkey: &Pubkey) -> Address {
    Address::new_from_array(pubkey.to_bytes())
}

/// Creates and returns a [`MolluskContext`] with the `zk-private-message` program loaded and
/// the accounts passed created.
pub fn new_message_mollusk_context(
    accounts: Vec<(Address, Account)>,
) -> MolluskContext<HashMap<Address, Account>> {
    let mollusk = Mollusk::new(
        &program_address(),
        &deploy_file_to_program_name("zk_private_message.so"),
    );

    // Create mollusk context with the simple hashmap implementation for the AccountStore.
    let context = mollusk.with_context(HashMap::new());

    // Create each account passed in at its respective address using the specified account
    // data. This "funds" accounts in the sense that it will create the account with the
    // specified lamport balance in its account data.
    for (address, account) in accounts {
        context.account_store.borrow_mut().insert(address, account);
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_program_path() {
        let program = deploy_file_to_program_name("zk_private_message.so");
        assert!(program.ends_with("zk_private_message"));

        // Ensure the program deploy path is a valid file.
        assert!(PathBuf::from([program.as_str(), ".so"].concat()).is_file());
    }
}
