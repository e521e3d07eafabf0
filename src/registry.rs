//! Canonical ownership ledger: token id to owner, and owner to balance.

use alloy_primitives::{Address, U256};
use stylus_sdk::{
    prelude::*,
    storage::{StorageAddress, StorageMap, StorageU256},
};

use crate::error::{ERC721InvalidOwner, ERC721NonexistentToken, Error};

/// Maps every minted token to its owner and every account to the number of
/// tokens it holds. Leaf data store: mutations happen only through the mint
/// and transfer paths of [`crate::CappedNft`], which keep both maps in sync
/// so that summing all balances always yields the total supply.
///
/// An owner of `Address::ZERO` is the storage-level sentinel for a token
/// that was never minted.
#[storage]
pub struct Registry {
    owners: StorageMap<U256, StorageAddress>,
    balances: StorageMap<Address, StorageU256>,
}

impl Registry {
    /// Returns the number of tokens held by `owner`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If `owner` is `Address::ZERO`.
    pub fn balance_of(&self, owner: Address) -> Result<U256, Error> {
        if owner.is_zero() {
            return Err(ERC721InvalidOwner { owner: Address::ZERO }.into());
        }
        Ok(self.balances.get(owner))
    }

    /// Returns the owner of `token_id`, or `Address::ZERO` if the token was
    /// never minted. Does not error; callers that require existence should
    /// use [`Self::require_owned`].
    #[must_use]
    pub fn owner_of(&self, token_id: U256) -> Address {
        self.owners.get(token_id)
    }

    /// Returns the owner of `token_id`, failing if no owner is recorded.
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token was never minted.
    pub fn require_owned(&self, token_id: U256) -> Result<Address, Error> {
        let owner = self.owner_of(token_id);
        if owner.is_zero() {
            return Err(ERC721NonexistentToken { token_id }.into());
        }
        Ok(owner)
    }

    /// Records `to` as the owner of the freshly assigned `token_id` and
    /// increments its balance. The caller guarantees `token_id` is unused
    /// and `to` is a real account.
    pub(crate) fn record_mint(&mut self, to: Address, token_id: U256) {
        self.owners.setter(token_id).set(to);

        let mut to_balance = self.balances.setter(to);
        let balance = to_balance.get() + U256::from(1);
        to_balance.set(balance);
    }

    /// Moves `token_id` from `from` to `to`, updating both balances. The
    /// caller guarantees that `from` is the current owner and `to` is a real
    /// account.
    pub(crate) fn record_transfer(&mut self, from: Address, to: Address, token_id: U256) {
        self.owners.setter(token_id).set(to);

        let mut from_balance = self.balances.setter(from);
        let balance = from_balance.get() - U256::from(1);
        from_balance.set(balance);

        let mut to_balance = self.balances.setter(to);
        let balance = to_balance.get() + U256::from(1);
        to_balance.set(balance);
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, uint, Address, U256};
    use stylus_sdk::testing::*;

    use crate::error::{ERC721InvalidOwner, ERC721NonexistentToken, Error};
    use crate::CappedNft;

    const ALICE: Address = address!("00000000000000000000000000000000000a11ce");
    const BOB: Address = address!("0000000000000000000000000000000000000b0b");

    const TOKEN_ID: U256 = uint!(7_U256);

    #[test]
    fn error_when_checking_balance_of_zero_address() {
        let vm = TestVM::default();
        let contract = CappedNft::from(&vm);

        let err = contract
            .registry
            .balance_of(Address::ZERO)
            .expect_err("should return `Error::InvalidOwner`");
        assert!(matches!(
            err,
            Error::InvalidOwner(ERC721InvalidOwner { owner: Address::ZERO })
        ));
    }

    #[test]
    fn balance_of_account_without_tokens_is_zero() {
        let vm = TestVM::default();
        let contract = CappedNft::from(&vm);

        let balance = contract
            .registry
            .balance_of(ALICE)
            .expect("should return Alice's balance");
        assert_eq!(U256::ZERO, balance);
    }

    #[test]
    fn owner_of_unminted_token_is_the_zero_sentinel() {
        let vm = TestVM::default();
        let contract = CappedNft::from(&vm);

        assert_eq!(Address::ZERO, contract.registry.owner_of(TOKEN_ID));
    }

    #[test]
    fn error_when_requiring_owner_of_unminted_token() {
        let vm = TestVM::default();
        let contract = CappedNft::from(&vm);

        let err = contract
            .registry
            .require_owned(TOKEN_ID)
            .expect_err("should return `Error::NonexistentToken`");
        assert!(matches!(
            err,
            Error::NonexistentToken(ERC721NonexistentToken {
                token_id
            }) if token_id == TOKEN_ID
        ));
    }

    #[test]
    fn records_mint_ownership_and_balance() {
        let vm = TestVM::default();
        let mut contract = CappedNft::from(&vm);

        contract.registry.record_mint(ALICE, TOKEN_ID);

        assert_eq!(ALICE, contract.registry.owner_of(TOKEN_ID));
        let balance = contract
            .registry
            .balance_of(ALICE)
            .expect("should return Alice's balance");
        assert_eq!(uint!(1_U256), balance);
    }

    #[test]
    fn records_transfer_moving_the_balance() {
        let vm = TestVM::default();
        let mut contract = CappedNft::from(&vm);

        contract.registry.record_mint(ALICE, TOKEN_ID);
        contract.registry.record_transfer(ALICE, BOB, TOKEN_ID);

        assert_eq!(BOB, contract.registry.owner_of(TOKEN_ID));
        let alice_balance = contract
            .registry
            .balance_of(ALICE)
            .expect("should return Alice's balance");
        let bob_balance = contract
            .registry
            .balance_of(BOB)
            .expect("should return Bob's balance");
        assert_eq!(U256::ZERO, alice_balance);
        assert_eq!(uint!(1_U256), bob_balance);
    }
}
