//! Failure conditions for every public operation, declared as Solidity custom
//! errors in the style of [ERC-6093] so callers can branch on the exact
//! precondition that failed. Each error carries the offending address or
//! token id.
//!
//! [ERC-6093]: https://eips.ethereum.org/EIPS/eip-6093

use alloy_sol_types::sol;
use stylus_sdk::prelude::*;

sol! {
    /// Indicates that an address can't be an owner.
    /// `Address::ZERO` is a forbidden owner. Used in balance queries.
    #[derive(Debug)]
    error ERC721InvalidOwner(address owner);

    /// Indicates a `token_id` with no recorded owner.
    #[derive(Debug)]
    error ERC721NonexistentToken(uint256 token_id);

    /// Indicates that `sender` is not the recorded owner of `token_id`.
    /// Used in transfers.
    #[derive(Debug)]
    error ERC721IncorrectOwner(address sender, uint256 token_id, address owner);

    /// Indicates a failure with the token `receiver`. Used in transfers.
    #[derive(Debug)]
    error ERC721InvalidReceiver(address receiver);

    /// Indicates that `operator` is neither the owner of `token_id`, its
    /// approved address, nor an operator of the owner. Used in transfers.
    #[derive(Debug)]
    error ERC721InsufficientApproval(address operator, uint256 token_id);

    /// Indicates a failure with the `approver` of a token to be approved:
    /// only the owner or one of its operators may approve.
    #[derive(Debug)]
    error ERC721InvalidApprover(address approver);

    /// Indicates a failure with the `operator` to be delegated to.
    /// `Address::ZERO` cannot be an operator.
    #[derive(Debug)]
    error ERC721InvalidOperator(address operator);

    /// Indicates that a mint was attempted with a payment other than the
    /// exact mint price.
    #[derive(Debug)]
    error MintIncorrectPayment(uint256 sent, uint256 price);

    /// Indicates that a mint was attempted after the supply cap was reached.
    #[derive(Debug)]
    error MintSoldOut(uint256 max_supply);
}

/// Represents the ways operations on the registry may fail.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The queried owner address is the zero address.
    InvalidOwner(ERC721InvalidOwner),
    /// The token has no recorded owner.
    NonexistentToken(ERC721NonexistentToken),
    /// The `from` of a transfer does not match the recorded owner.
    IncorrectOwner(ERC721IncorrectOwner),
    /// The transfer receiver is the zero address.
    InvalidReceiver(ERC721InvalidReceiver),
    /// The caller lacks owner, approved or operator standing for the token.
    InsufficientApproval(ERC721InsufficientApproval),
    /// The caller may not grant approvals for the token.
    InvalidApprover(ERC721InvalidApprover),
    /// The delegated operator is the zero address.
    InvalidOperator(ERC721InvalidOperator),
    /// The mint payment is not exactly the mint price.
    IncorrectPayment(MintIncorrectPayment),
    /// The supply cap has been reached.
    SoldOut(MintSoldOut),
}
