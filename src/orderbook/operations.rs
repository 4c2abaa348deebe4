//! Order book operations: submitting limit and market orders, and cancels.

use num_traits::Zero;
use tracing::trace;

use super::accounts::AccountTracker;
use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Id, Order, OrderTraits, Price, Side, Size};
use super::sidebook::SideBook;

/// Outcome of a limit order submission: the resting residual (if any), the
/// orders consumed from the opposite side in price-time order, and the size
/// that neither matched nor rested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitResult<Sz, Px, Oid, Aid> {
    /// The order left resting in the book, if a residual rested
    pub resting: Option<Order<Sz, Px, Oid, Aid>>,
    /// Filled portions of opposite-side orders, in consumption order
    pub matches: Vec<Order<Sz, Px, Oid, Aid>>,
    /// Size returned to the caller unfilled (refused cross or IOC residual)
    pub remaining: Sz,
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> LimitResult<Sz, Px, Oid, Aid> {
    /// Total size matched by this submission.
    pub fn executed(&self) -> Sz {
        executed_size(&self.matches)
    }
}

/// Outcome of a market order by size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<Sz, Px, Oid, Aid> {
    /// Filled portions of opposite-side orders, in consumption order
    pub matches: Vec<Order<Sz, Px, Oid, Aid>>,
    /// Requested size that found no liquidity
    pub remaining: Sz,
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> MatchResult<Sz, Px, Oid, Aid> {
    /// Total size matched by this order.
    pub fn executed(&self) -> Sz {
        executed_size(&self.matches)
    }
}

/// Outcome of a market order by notional funds.
#[derive(Debug, Clone, PartialEq)]
pub struct FundsMatchResult<Sz, Px, Oid, Aid> {
    /// Filled portions of opposite-side orders, in consumption order
    pub matches: Vec<Order<Sz, Px, Oid, Aid>>,
    /// Funds left unspent, in currency units
    pub funds_remaining: f64,
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> FundsMatchResult<Sz, Px, Oid, Aid> {
    /// Total size matched by this order.
    pub fn executed(&self) -> Sz {
        executed_size(&self.matches)
    }
}

fn executed_size<Sz: Size, Px: Price, Oid: Id, Aid: Id>(
    matches: &[Order<Sz, Px, Oid, Aid>],
) -> Sz {
    let mut total = Sz::zero();
    for m in matches {
        total += m.size;
    }
    total
}

/// Bring the account registry in line with a completed walk: a consumed order
/// disappears from its account, a split order's stored copy is refreshed to
/// the resting residual.
fn settle_account_fills<Sz: Size, Px: Price, Oid: Id, Aid: Id>(
    accounts: &mut AccountTracker<Sz, Px, Oid, Aid>,
    walked: &SideBook<Sz, Px, Oid, Aid>,
    matches: &[Order<Sz, Px, Oid, Aid>],
) {
    for m in matches {
        let Some(account_id) = m.account_id else {
            continue;
        };
        match walked.find(m.price, m.order_id) {
            Some(residual) => accounts.register(residual),
            None => accounts.unregister(account_id, m.order_id),
        }
    }
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> OrderBook<Sz, Px, Oid, Aid> {
    /// Submit a limit order.
    ///
    /// If the price crosses the opposite best and the traits permit crossing,
    /// the order first matches against the opposite side bounded by its own
    /// price. A residual rests in its own side unless the traits are
    /// immediate-or-cancel, in which case it is returned in `remaining`.
    ///
    /// Fails with [`OrderBookError`] on non-positive size or price, without
    /// touching the book.
    pub fn submit_limit_order(
        &mut self,
        order_id: Oid,
        side: Side,
        price: Px,
        size: Sz,
        account_id: Option<Aid>,
        traits: OrderTraits,
    ) -> Result<LimitResult<Sz, Px, Oid, Aid>, OrderBookError> {
        if size <= Sz::zero() {
            return Err(OrderBookError::InvalidSize(size.to_string()));
        }
        if price <= Px::zero() {
            return Err(OrderBookError::InvalidPrice(price.to_string()));
        }
        trace!(
            "submit_limit_order: id {} {} {} @ {} traits {}",
            order_id,
            side,
            size,
            price,
            traits
        );

        let crosses = self.crosses_opposite(side, price);
        if crosses && !traits.allow_cross {
            // Refused crossing limit: no fills, nothing rests.
            return Ok(LimitResult {
                resting: None,
                matches: Vec::new(),
                remaining: size,
            });
        }

        let (matches, mut remaining) = if crosses {
            let opposite = match side {
                Side::Buy => &mut self.asks,
                Side::Sell => &mut self.bids,
            };
            opposite.walk_by_size(size, Some(price), traits)
        } else {
            (Vec::new(), size)
        };
        match side {
            Side::Buy => settle_account_fills(&mut self.accounts, &self.asks, &matches),
            Side::Sell => settle_account_fills(&mut self.accounts, &self.bids, &matches),
        }

        let mut resting = None;
        if !traits.immediate_or_cancel
            && remaining > Sz::zero()
            && self.rests_inside_spread(side, price)
        {
            let order = Order {
                side,
                size: remaining,
                price,
                order_id,
                account_id,
            };
            self.side_book_mut(side).insert_order(order);
            self.accounts.register(&order);
            resting = Some(order);
            remaining = Sz::zero();
        }

        Ok(LimitResult {
            resting,
            matches,
            remaining,
        })
    }

    /// Submit a market order for `size` shares. Walks the opposite side
    /// unbounded by price; only the all-or-none trait is consulted. An empty
    /// opposite book yields empty matches and the full size as `remaining`.
    pub fn submit_market_order(
        &mut self,
        side: Side,
        size: Sz,
        traits: OrderTraits,
    ) -> Result<MatchResult<Sz, Px, Oid, Aid>, OrderBookError> {
        if size <= Sz::zero() {
            return Err(OrderBookError::InvalidSize(size.to_string()));
        }
        trace!("submit_market_order: {} {} traits {}", side, size, traits);

        let (matches, remaining) = match side {
            Side::Buy => self.asks.walk_by_size(size, None, traits),
            Side::Sell => self.bids.walk_by_size(size, None, traits),
        };
        match side {
            Side::Buy => settle_account_fills(&mut self.accounts, &self.asks, &matches),
            Side::Sell => settle_account_fills(&mut self.accounts, &self.bids, &matches),
        }

        Ok(MatchResult { matches, remaining })
    }

    /// Submit a market order spending up to `funds` currency units. Walks the
    /// opposite side unbounded by price, filling whole shares only; unspent
    /// funds come back in `funds_remaining`.
    pub fn submit_market_order_by_funds(
        &mut self,
        side: Side,
        funds: f64,
        traits: OrderTraits,
    ) -> Result<FundsMatchResult<Sz, Px, Oid, Aid>, OrderBookError> {
        if !(funds > 0.0) {
            return Err(OrderBookError::InvalidFunds(funds.to_string()));
        }
        trace!(
            "submit_market_order_by_funds: {} {} traits {}",
            side,
            funds,
            traits
        );

        let (matches, funds_remaining) = match side {
            Side::Buy => self.asks.walk_by_funds(funds, None, traits),
            Side::Sell => self.bids.walk_by_funds(funds, None, traits),
        };
        match side {
            Side::Buy => settle_account_fills(&mut self.accounts, &self.asks, &matches),
            Side::Sell => settle_account_fills(&mut self.accounts, &self.bids, &matches),
        }

        Ok(FundsMatchResult {
            matches,
            funds_remaining,
        })
    }

    /// Cancel the resting order with the given id at the given side and
    /// price. Returns the removed order, or `None` if no such order rests;
    /// cancelling a missing order is not an error.
    pub fn cancel_order(&mut self, order_id: Oid, side: Side, price: Px) -> Option<Order<Sz, Px, Oid, Aid>> {
        let removed = self.side_book_mut(side).pop_order(price, order_id)?;
        if let Some(account_id) = removed.account_id {
            self.accounts.unregister(account_id, order_id);
        }
        trace!("cancel_order: removed {}", removed);
        Some(removed)
    }

    /// Cancel a resting order identified by an order value previously
    /// returned from this book.
    pub fn cancel(&mut self, order: &Order<Sz, Px, Oid, Aid>) -> Option<Order<Sz, Px, Oid, Aid>> {
        self.cancel_order(order.order_id, order.side, order.price)
    }
}
