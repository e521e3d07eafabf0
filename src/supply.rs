//! Mint gating: sequential id assignment, exact-fee payment and the supply
//! cap.

use alloy_primitives::{uint, U256};
use stylus_sdk::{prelude::*, storage::StorageU256};

use crate::error::{Error, MintIncorrectPayment, MintSoldOut};

/// Exact payment required for each mint, in wei (0.001 ETH).
pub const MINT_PRICE: U256 = uint!(1_000_000_000_000_000_U256);

/// Ceiling on the number of tokens that can ever be minted.
pub const MAX_SUPPLY: U256 = uint!(10_000_U256);

/// Owns the monotonically increasing token-id counter. Ids are dense and
/// sequential: the minted set is always `{0, …, total_supply - 1}`, and the
/// counter never decreases because no burn operation exists.
#[storage]
pub struct SupplyController {
    total_supply: StorageU256,
}

impl SupplyController {
    /// Number of tokens minted so far; equivalently, the next id to assign.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get()
    }

    /// Validates `payment` against [`MINT_PRICE`] and the counter against
    /// [`MAX_SUPPLY`], then assigns and returns the next token id.
    ///
    /// Both checks run before the counter moves, so a failed mint leaves the
    /// supply untouched.
    ///
    /// # Errors
    ///
    /// * [`Error::IncorrectPayment`] - If `payment` is not exactly
    ///   [`MINT_PRICE`].
    /// * [`Error::SoldOut`] - If `total_supply` has reached [`MAX_SUPPLY`].
    pub(crate) fn assign_next_id(&mut self, payment: U256) -> Result<U256, Error> {
        if payment != MINT_PRICE {
            return Err(MintIncorrectPayment { sent: payment, price: MINT_PRICE }.into());
        }

        let token_id = self.total_supply.get();
        if token_id >= MAX_SUPPLY {
            return Err(MintSoldOut { max_supply: MAX_SUPPLY }.into());
        }

        self.total_supply.set(token_id + uint!(1_U256));
        Ok(token_id)
    }
}
