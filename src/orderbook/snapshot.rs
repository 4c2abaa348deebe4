//! Depth snapshots and serialization of the resting book.

use serde::{Deserialize, Serialize};
use std::io;

use num_traits::{ToPrimitive, Zero};

use super::book::OrderBook;
use super::order::{Id, Price, Size};
use crate::utils::current_time_millis;

/// One side's depth as parallel arrays: `price[i]`, `volume[i]` and
/// `orders[i]` describe the i-th level out from the best price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthLevels<Px, Sz> {
    /// Level prices, most aggressive first
    pub price: Vec<Px>,
    /// Total resting volume per level
    pub volume: Vec<Sz>,
    /// Resting order count per level
    pub orders: Vec<usize>,
}

impl<Px, Sz> DepthLevels<Px, Sz> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            price: Vec::with_capacity(capacity),
            volume: Vec::with_capacity(capacity),
            orders: Vec::with_capacity(capacity),
        }
    }

    /// Number of levels captured.
    pub fn len(&self) -> usize {
        self.price.len()
    }

    pub fn is_empty(&self) -> bool {
        self.price.is_empty()
    }
}

/// Depth for both sides of the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthInfo<Px, Sz> {
    /// Bid levels, best (highest) first
    pub bids: DepthLevels<Px, Sz>,
    /// Ask levels, best (lowest) first
    pub asks: DepthLevels<Px, Sz>,
}

/// A snapshot of the order book's depth at a specific point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot<Px, Sz> {
    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,
    /// Per-side depth at snapshot time
    pub depth: DepthInfo<Px, Sz>,
}

impl<Px: Price, Sz: Size> BookSnapshot<Px, Sz> {
    /// Get the best bid price and volume.
    pub fn best_bid(&self) -> Option<(Px, Sz)> {
        let bids = &self.depth.bids;
        Some((*bids.price.first()?, *bids.volume.first()?))
    }

    /// Get the best ask price and volume.
    pub fn best_ask(&self) -> Option<(Px, Sz)> {
        let asks = &self.depth.asks;
        Some((*asks.price.first()?, *asks.volume.first()?))
    }

    /// Get the mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some((bid.to_f64()? + ask.to_f64()?) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask minus best bid).
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask.to_f64()? - bid.to_f64()?),
            _ => None,
        }
    }

    /// Total captured volume on the bid side.
    pub fn total_bid_volume(&self) -> Sz {
        let mut total = Sz::zero();
        for volume in &self.depth.bids.volume {
            total += *volume;
        }
        total
    }

    /// Total captured volume on the ask side.
    pub fn total_ask_volume(&self) -> Sz {
        let mut total = Sz::zero();
        for volume in &self.depth.asks.volume {
            total += *volume;
        }
        total
    }
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> OrderBook<Sz, Px, Oid, Aid> {
    /// Capture a timestamped depth snapshot up to `depth` levels per side.
    pub fn snapshot(&self, depth: usize) -> BookSnapshot<Px, Sz> {
        BookSnapshot {
            timestamp: current_time_millis(),
            depth: self.book_depth_info(depth),
        }
    }

    /// Write every resting order as CSV, one row per order, bids before asks.
    ///
    /// The row set equals the set of resting orders at the moment iteration
    /// begins. Format: header `TRD,ID,SIDE,SIZE,PX,ACCT`, rows
    /// `LMT,<order_id>,<side>,<size>,<price>,<account_id>` with an empty
    /// account field for untracked orders.
    pub fn write_csv<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "TRD,ID,SIDE,SIZE,PX,ACCT")?;
        for order in self.bid_orders().chain(self.ask_orders()) {
            let account = match order.account_id {
                Some(account_id) => account_id.to_string(),
                None => String::new(),
            };
            writeln!(
                writer,
                "LMT,{},{},{},{},{}",
                order.order_id, order.side, order.size, order.price, account
            )?;
        }
        Ok(())
    }
}
