//! Order values, sides, and the per-order trait flags that select matching
//! behavior.

use num_traits::{FromPrimitive, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::ops::{AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// Scalar usable as an order size. Integer sizes are the intended use; any
/// ordered additive type convertible through `f64` qualifies.
pub trait Size:
    Copy
    + Ord
    + Zero
    + AddAssign
    + SubAssign
    + Sub<Output = Self>
    + fmt::Debug
    + fmt::Display
    + ToPrimitive
    + FromPrimitive
{
}

impl<T> Size for T where
    T: Copy
        + Ord
        + Zero
        + AddAssign
        + SubAssign
        + Sub<Output = T>
        + fmt::Debug
        + fmt::Display
        + ToPrimitive
        + FromPrimitive
{
}

/// Scalar usable as a price key. Must have a total order because it keys the
/// per-side level map; fixed-point (integer tick) prices are the intended use,
/// and `OrderedFloat` works where float prices are wanted.
pub trait Price: Copy + Ord + Zero + fmt::Debug + fmt::Display + ToPrimitive {}

impl<T> Price for T where T: Copy + Ord + Zero + fmt::Debug + fmt::Display + ToPrimitive {}

/// Scalar usable as an order or account identifier.
pub trait Id: Copy + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> Id for T where T: Copy + Eq + Hash + fmt::Debug + fmt::Display {}

/// Side of an order: buys rest in the bid book, sells in the ask book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy order (bid side)
    Buy,
    /// Sell order (ask side)
    Sell,
}

impl Side {
    /// The side an incoming order matches against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Flags selecting matching behavior for a single submission.
///
/// | flag | effect |
/// |---|---|
/// | `all_or_none` | match nothing unless the full requested quantity is available within the price constraint |
/// | `immediate_or_cancel` | any residual after matching is discarded instead of resting |
/// | `allow_cross` | a limit priced through the opposite best may match; otherwise it is refused |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderTraits {
    /// Abort with zero fills if available liquidity is less than requested
    pub all_or_none: bool,
    /// Discard any residual instead of resting it
    pub immediate_or_cancel: bool,
    /// Permit matching when the limit price crosses the opposite best
    pub allow_cross: bool,
}

impl OrderTraits {
    /// Plain limit/market behavior: rest residuals, allow crossing.
    pub const VANILLA: OrderTraits = OrderTraits {
        all_or_none: false,
        immediate_or_cancel: false,
        allow_cross: true,
    };

    /// Immediate-or-cancel: match what is available now, drop the rest.
    pub const IOC: OrderTraits = OrderTraits {
        all_or_none: false,
        immediate_or_cancel: true,
        allow_cross: true,
    };

    /// Fill-or-kill: match the full quantity now or nothing at all.
    pub const FILL_OR_KILL: OrderTraits = OrderTraits {
        all_or_none: true,
        immediate_or_cancel: true,
        allow_cross: true,
    };

    /// True when residuals must not rest.
    pub fn is_immediate(&self) -> bool {
        self.immediate_or_cancel
    }
}

impl Default for OrderTraits {
    fn default() -> Self {
        OrderTraits::VANILLA
    }
}

impl fmt::Display for OrderTraits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OrderTraits::VANILLA => write!(f, "VANILLA"),
            OrderTraits::IOC => write!(f, "IOC"),
            OrderTraits::FILL_OR_KILL => write!(f, "FOK"),
            OrderTraits {
                all_or_none,
                immediate_or_cancel,
                allow_cross,
            } => write!(
                f,
                "AON={}-IOC={}-CROSS={}",
                all_or_none, immediate_or_cancel, allow_cross
            ),
        }
    }
}

impl FromStr for OrderTraits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VANILLA" => Ok(OrderTraits::VANILLA),
            "IOC" => Ok(OrderTraits::IOC),
            "FOK" => Ok(OrderTraits::FILL_OR_KILL),
            _ => Err(format!("Invalid order traits: {}", s)),
        }
    }
}

/// An immutable resting limit order. Matching never mutates an order in
/// place; a partial fill produces a new `Order` sharing every field except
/// `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order<Sz, Px, Oid, Aid> {
    /// Buy or sell
    pub side: Side,
    /// Unfilled quantity, always positive
    pub size: Sz,
    /// Limit price, always positive
    pub price: Px,
    /// Identifier, unique among resting orders in one book
    pub order_id: Oid,
    /// Owning account, if tracked
    pub account_id: Option<Aid>,
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> Order<Sz, Px, Oid, Aid> {
    /// A copy of this order with a different size; used for split fills and
    /// their residuals.
    pub(crate) fn with_size(&self, size: Sz) -> Self {
        Order { size, ..*self }
    }
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> fmt::Display for Order<Sz, Px, Oid, Aid> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {} (id {})",
            self.side, self.size, self.price, self.order_id
        )
    }
}
