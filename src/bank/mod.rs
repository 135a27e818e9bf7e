//! Bank and ledger.
//!
//! The bank is the only code that changes cash balances or the unowned-deed
//! pool. Auctions take their bids from a synchronous [`Bidder`].

pub mod auction;
pub mod ledger;

pub use auction::{AuctionOutcome, Bidder, SealedBids};
pub use ledger::Bank;
