//! # Single-Symbol Limit Order Book Matching Engine
//!
//! A price-time (FIFO) priority limit order book implementation written in Rust,
//! designed for backtesting trading strategies and market simulation. The engine
//! maintains two opposing price-ordered books of resting limit orders and matches
//! incoming orders against them.
//!
//! ## Key Features
//!
//! - **Price-Time Priority**: Strict price priority across levels, strict arrival
//!   (FIFO) priority within a level. A partially filled resting order keeps its
//!   arrival position at the front of its queue.
//!
//! - **Order Traits**: All-or-none, immediate-or-cancel, and crossing permission
//!   are selected per order through flag bundles, with `VANILLA`, `IOC`, and
//!   `FILL_OR_KILL` presets.
//!
//! - **Market Orders by Size or Funds**: Execute a quantity of shares, or spend
//!   a notional amount of currency walking the opposite book.
//!
//! - **Account Tracking**: Resting orders can be registered under an account id
//!   and are kept consistent with the book through matches and cancels.
//!
//! - **Aggregate Statistics**: Cached per-side volume, order counts, and depth
//!   snapshots that stay coherent with the queues under every mutation.
//!
//! - **Parametric Scalars**: Size, price, order id and account id types are
//!   chosen per book instance; integer sizes with fixed-point prices are the
//!   intended use.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: Every operation maintains the book's aggregate and
//!    ordering invariants.
//! 2. **Determinism**: A strictly single-threaded, synchronous core; operations
//!    are applied in submission order and matches are emitted in price-time
//!    priority, which makes backtests reproducible.
//! 3. **Simplicity**: Ownership is a strict tree (book, side, queue, order);
//!    behavior is selected by flag bits, not dispatch.
//!
//! ## Use Cases
//!
//! - **Backtesting**: Replay recorded or synthetic order flow against a book
//!   with realistic matching semantics.
//! - **Market Simulation**: Study queue dynamics, liquidity consumption and
//!   depth evolution.
//! - **Research and Education**: Reference implementation of FIFO matching.
//!
//! Hosts that want parallelism should shard by symbol (one book per thread) or
//! wrap the book in a mutex; the core itself never blocks, yields, or locks.

mod orderbook;

mod utils;

pub use orderbook::{
    BookOptions, BookSnapshot, DepthInfo, DepthLevels, FundsMatchResult, Id, LimitResult,
    MatchResult, Order, OrderBook, OrderBookError, OrderTraits, Price, Side, Size,
};
pub use utils::current_time_millis;
