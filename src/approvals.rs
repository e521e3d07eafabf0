//! Two-tier transfer authorization state: a single approved address per
//! token, and blanket operator delegation per owner.

use alloy_primitives::{Address, U256};
use stylus_sdk::{
    evm,
    prelude::*,
    storage::{StorageAddress, StorageBool, StorageMap},
};

use crate::{
    error::{ERC721InvalidApprover, ERC721InvalidOperator, Error},
    Approval, ApprovalForAll,
};

/// Holds the authorization state consulted on every transfer: at most one
/// approved address per token (cleared on every owner transition) and the
/// `(owner, operator)` delegation flags (persistent until revoked).
#[storage]
pub struct ApprovalStore {
    token_approvals: StorageMap<U256, StorageAddress>,
    operator_approvals: StorageMap<Address, StorageMap<Address, StorageBool>>,
}

impl ApprovalStore {
    /// Returns the address approved for `token_id`, or `Address::ZERO` when
    /// none is set. Never fails; unminted tokens report no approval.
    #[must_use]
    pub fn get_approved(&self, token_id: U256) -> Address {
        self.token_approvals.get(token_id)
    }

    /// Returns whether `operator` may act on all of `owner`'s tokens.
    #[must_use]
    pub fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.operator_approvals.getter(owner).get(operator)
    }

    /// Overwrites the approval entry for `token_id` with `to` and emits
    /// [`Approval`]. Passing `Address::ZERO` clears the entry.
    ///
    /// `caller` must be `owner` or one of `owner`'s operators; in particular
    /// a per-token approved address cannot grant approvals itself.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidApprover`] - If `caller` is neither the owner nor an
    ///   operator of the owner.
    pub(crate) fn approve(
        &mut self,
        caller: Address,
        to: Address,
        owner: Address,
        token_id: U256,
    ) -> Result<(), Error> {
        if caller != owner && !self.is_approved_for_all(owner, caller) {
            return Err(ERC721InvalidApprover { approver: caller }.into());
        }

        self.token_approvals.setter(token_id).set(to);
        evm::log(self.vm(), Approval { owner, approved: to, token_id });
        Ok(())
    }

    /// Sets or revokes `operator`'s blanket delegation for `owner` and emits
    /// [`ApprovalForAll`]. Self-delegation is not rejected; it is a harmless
    /// no-op in practice.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOperator`] - If `operator` is `Address::ZERO`.
    pub(crate) fn set_approval_for_all(
        &mut self,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error> {
        if operator.is_zero() {
            return Err(ERC721InvalidOperator { operator }.into());
        }

        self.operator_approvals.setter(owner).insert(operator, approved);
        evm::log(self.vm(), ApprovalForAll { owner, operator, approved });
        Ok(())
    }

    /// Clears the per-token approval without emitting an event; part of
    /// every owner transition.
    pub(crate) fn clear(&mut self, token_id: U256) {
        self.token_approvals.delete(token_id);
    }
}
