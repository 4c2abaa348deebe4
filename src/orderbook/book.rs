//! Core OrderBook type: the pair of side books, account registry, and the
//! read-only statistics surface.

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

use super::accounts::AccountTracker;
use super::order::{Id, Order, Price, Side, Size};
use super::sidebook::SideBook;
use super::snapshot::DepthInfo;

/// Tunables carried by the book for external collaborators. The matching core
/// does not consult these; renderers read `plot_tick_max` to bound bar-chart
/// depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookOptions {
    /// Maximum number of price levels an external renderer should draw
    pub plot_tick_max: usize,
}

impl Default for BookOptions {
    fn default() -> Self {
        Self { plot_tick_max: 10 }
    }
}

/// A single-symbol limit order book: bid and ask sides plus per-account order
/// tracking. One logical actor owns the book and invokes its operations
/// serially; nothing inside blocks or locks.
///
/// The four type parameters fix the scalar types for one book instance:
/// order size `Sz`, price `Px`, order id `Oid`, and account id `Aid`.
#[derive(Debug, Clone)]
pub struct OrderBook<Sz = u64, Px = u64, Oid = u64, Aid = u64> {
    pub(super) bids: SideBook<Sz, Px, Oid, Aid>,
    pub(super) asks: SideBook<Sz, Px, Oid, Aid>,
    pub(super) accounts: AccountTracker<Sz, Px, Oid, Aid>,
    options: BookOptions,
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> OrderBook<Sz, Px, Oid, Aid> {
    /// Create an empty book with default options.
    pub fn new() -> Self {
        Self::with_options(BookOptions::default())
    }

    /// Create an empty book with explicit options.
    pub fn with_options(options: BookOptions) -> Self {
        Self {
            bids: SideBook::new(Side::Buy),
            asks: SideBook::new(Side::Sell),
            accounts: AccountTracker::new(),
            options,
        }
    }

    /// The options this book was created with.
    pub fn options(&self) -> &BookOptions {
        &self.options
    }

    /// The side book an order of the given side rests in.
    pub(super) fn side_book_mut(&mut self, side: Side) -> &mut SideBook<Sz, Px, Oid, Aid> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Get the best bid price, if any.
    pub fn best_bid(&self) -> Option<Px> {
        self.bids.best_price()
    }

    /// Get the best ask price, if any.
    pub fn best_ask(&self) -> Option<Px> {
        self.asks.best_price()
    }

    /// Best bid and best ask together.
    pub fn best_bid_ask(&self) -> (Option<Px>, Option<Px>) {
        (self.best_bid(), self.best_ask())
    }

    /// Get the mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid.to_f64()? + ask.to_f64()?) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask minus best bid).
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.to_f64()? - bid.to_f64()?),
            _ => None,
        }
    }

    /// Total resting volume on (bid, ask).
    pub fn volume_bid_ask(&self) -> (Sz, Sz) {
        (self.bids.total_volume(), self.asks.total_volume())
    }

    /// Total resting notional on (bid, ask), in currency units. Advisory
    /// aggregate, not authoritative for settlement.
    pub fn volume_funds_bid_ask(&self) -> (f64, f64) {
        (self.bids.total_volume_funds(), self.asks.total_volume_funds())
    }

    /// Number of resting orders on (bid, ask).
    pub fn n_orders_bid_ask(&self) -> (usize, usize) {
        (self.bids.num_orders(), self.asks.num_orders())
    }

    /// True when neither side holds a resting order.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Per-side depth up to `max_depth` levels from the best price, as
    /// parallel price/volume/order-count arrays.
    pub fn book_depth_info(&self, max_depth: usize) -> DepthInfo<Px, Sz> {
        trace!("book_depth_info: max_depth {}", max_depth);
        DepthInfo {
            bids: self.bids.depth_levels(max_depth),
            asks: self.asks.depth_levels(max_depth),
        }
    }

    /// The open orders of one account, keyed by order id, or `None` if the
    /// account has no resting orders.
    pub fn get_account(&self, account_id: Aid) -> Option<&HashMap<Oid, Order<Sz, Px, Oid, Aid>>> {
        self.accounts.get(account_id)
    }

    /// All resting bids in price-time priority order.
    pub fn bid_orders(&self) -> impl Iterator<Item = &Order<Sz, Px, Oid, Aid>> {
        self.bids.iter_orders()
    }

    /// All resting asks in price-time priority order.
    pub fn ask_orders(&self) -> impl Iterator<Item = &Order<Sz, Px, Oid, Aid>> {
        self.asks.iter_orders()
    }
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> Default for OrderBook<Sz, Px, Oid, Aid> {
    fn default() -> Self {
        Self::new()
    }
}
