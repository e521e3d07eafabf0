//! Fee-gated, supply-capped NFT ownership registry.
//!
//! An ERC-721 style contract tracking which account owns each sequentially
//! minted token, and who may move it: a single approved address per token
//! plus per-owner operator delegation. Minting costs an exact fee and stops
//! at a fixed supply cap; tokens are never burned.
//!
//! Metadata/URI handling, royalties, enumeration and safe-transfer receiver
//! callbacks are intentionally out of scope.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

pub mod approvals;
pub mod error;
pub mod registry;
pub mod supply;

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::{evm, prelude::*};

use crate::{
    approvals::ApprovalStore,
    error::{ERC721IncorrectOwner, ERC721InsufficientApproval, ERC721InvalidReceiver, Error},
    registry::Registry,
    supply::{SupplyController, MAX_SUPPLY, MINT_PRICE},
};

sol! {
    /// Emitted when ownership of `token_id` moves from `from` to `to`.
    /// Minting emits this with `from` set to the zero address.
    event Transfer(address indexed from, address indexed to, uint256 indexed token_id);

    /// Emitted when `owner` approves `approved` to transfer `token_id`.
    event Approval(address indexed owner, address indexed approved, uint256 indexed token_id);

    /// Emitted when `owner` grants or revokes `operator` over all of its
    /// tokens.
    event ApprovalForAll(address indexed owner, address indexed operator, bool approved);
}

/// Contract storage: the ownership ledger plus the two collaborating stores
/// consulted on every mint and transfer. Each public operation runs against
/// this one storage object to completion; a returned error performs no
/// mutation at all.
#[entrypoint]
#[storage]
pub struct CappedNft {
    pub registry: Registry,
    pub supply: SupplyController,
    pub approvals: ApprovalStore,
}

#[public]
impl CappedNft {
    /// Mints the next sequential token to the caller.
    ///
    /// The attached payment must be exactly [`MINT_PRICE`] and the supply
    /// cap must not have been reached; both are checked before any state
    /// moves, so a failed mint is a full no-op.
    ///
    /// # Errors
    ///
    /// * [`Error::IncorrectPayment`] - If the payment is not exactly
    ///   [`MINT_PRICE`].
    /// * [`Error::SoldOut`] - If [`MAX_SUPPLY`] tokens already exist.
    ///
    /// # Events
    ///
    /// * [`Transfer`] - With `from` set to `Address::ZERO`.
    #[payable]
    pub fn mint(&mut self) -> Result<U256, Error> {
        let minter = self.vm().msg_sender();
        let token_id = self.supply.assign_next_id(self.vm().msg_value())?;
        self.registry.record_mint(minter, token_id);

        evm::log(self.vm(), Transfer { from: Address::ZERO, to: minter, token_id });
        Ok(token_id)
    }

    /// Number of tokens minted so far.
    pub fn total_supply(&self) -> U256 {
        self.supply.total_supply()
    }

    /// Exact payment required to mint one token, in wei.
    pub fn mint_price(&self) -> U256 {
        MINT_PRICE
    }

    /// Ceiling on the number of tokens that can ever exist.
    pub fn max_supply(&self) -> U256 {
        MAX_SUPPLY
    }

    /// Returns the number of tokens held by `owner`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If `owner` is `Address::ZERO`.
    pub fn balance_of(&self, owner: Address) -> Result<U256, Error> {
        self.registry.balance_of(owner)
    }

    /// Returns the owner of `token_id`.
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token was never minted.
    pub fn owner_of(&self, token_id: U256) -> Result<Address, Error> {
        self.registry.require_owned(token_id)
    }

    /// Returns the account approved for `token_id`, or `Address::ZERO` when
    /// none is set. Never fails; an unminted token reports no approval.
    pub fn get_approved(&self, token_id: U256) -> Address {
        self.approvals.get_approved(token_id)
    }

    /// Returns whether `operator` may act on all of `owner`'s tokens.
    pub fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.approvals.is_approved_for_all(owner, operator)
    }

    /// Approves `to` to transfer `token_id` on the owner's behalf. The
    /// approval is cleared when the token is transferred, and approving
    /// `Address::ZERO` clears it explicitly.
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token was never minted.
    /// * [`Error::InvalidApprover`] - If the caller is neither the owner nor
    ///   one of the owner's operators.
    ///
    /// # Events
    ///
    /// * [`Approval`].
    pub fn approve(&mut self, to: Address, token_id: U256) -> Result<(), Error> {
        let owner = self.registry.require_owned(token_id)?;
        let caller = self.vm().msg_sender();
        self.approvals.approve(caller, to, owner, token_id)
    }

    /// Grants or revokes `operator`'s right to act on all of the caller's
    /// tokens, current and future, until revoked.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOperator`] - If `operator` is `Address::ZERO`.
    ///
    /// # Events
    ///
    /// * [`ApprovalForAll`].
    pub fn set_approval_for_all(&mut self, operator: Address, approved: bool) -> Result<(), Error> {
        let owner = self.vm().msg_sender();
        self.approvals.set_approval_for_all(owner, operator, approved)
    }

    /// Transfers `token_id` from `from` to `to`, clearing the token's
    /// approval entry.
    ///
    /// The caller must be the current owner, the token's approved address,
    /// or an operator of the owner. Every precondition is checked before any
    /// state is touched, so a failing call leaves ownership, balances and
    /// approvals exactly as they were.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If `to` is `Address::ZERO`.
    /// * [`Error::NonexistentToken`] - If the token was never minted.
    /// * [`Error::IncorrectOwner`] - If `from` is not the current owner.
    /// * [`Error::InsufficientApproval`] - If the caller lacks owner,
    ///   approved or operator standing.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    pub fn transfer_from(&mut self, from: Address, to: Address, token_id: U256) -> Result<(), Error> {
        if to.is_zero() {
            return Err(ERC721InvalidReceiver { receiver: Address::ZERO }.into());
        }

        let owner = self.registry.require_owned(token_id)?;
        if owner != from {
            return Err(ERC721IncorrectOwner { sender: from, token_id, owner }.into());
        }

        let caller = self.vm().msg_sender();
        if !self.is_authorized(owner, caller, token_id) {
            return Err(ERC721InsufficientApproval { operator: caller, token_id }.into());
        }

        self.approvals.clear(token_id);
        self.registry.record_transfer(from, to, token_id);

        evm::log(self.vm(), Transfer { from, to, token_id });
        Ok(())
    }
}

impl CappedNft {
    /// The single authorization rule for moving `token_id`: `spender` is the
    /// owner, the token's approved address, or one of the owner's operators.
    ///
    /// Assumes `owner` is the token's actual owner; callers resolve it from
    /// the registry first.
    fn is_authorized(&self, owner: Address, spender: Address, token_id: U256) -> bool {
        !spender.is_zero()
            && (owner == spender
                || self.approvals.is_approved_for_all(owner, spender)
                || self.approvals.get_approved(token_id) == spender)
    }
}
