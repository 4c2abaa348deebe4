//! One side of the order book: an ordered map from price to FIFO queue.
//!
//! Levels are kept in a `BTreeMap` so arbitrary-price insertion stays
//! O(log n) and iteration yields levels in price order. The bid side reads the
//! map back-to-front so that "front" uniformly means the most aggressive price
//! on both sides.

use num_traits::Zero;
use std::collections::BTreeMap;

use super::order::{Id, Order, Price, Side, Size};
use super::queue::OrderQueue;
use super::snapshot::DepthLevels;
use crate::utils::numeric::notional;

/// The bid or ask half of an order book, with cached side-wide aggregates.
///
/// Invariants at rest: `total_volume` and `num_orders` equal the sums over all
/// queued orders, `total_volume_funds` equals the sum of queue volume times
/// queue price, and the best price is the most aggressive level key (unset iff
/// the side is empty).
#[derive(Debug, Clone)]
pub(crate) struct SideBook<Sz, Px, Oid, Aid> {
    /// Which side this book holds; `Buy` means bids
    side: Side,
    /// Price levels in ascending key order
    levels: BTreeMap<Px, OrderQueue<Sz, Px, Oid, Aid>>,
    /// Cached sum of resting order sizes
    total_volume: Sz,
    /// Cached sum of resting size times price; advisory, not authoritative
    /// for settlement
    total_volume_funds: f64,
    /// Cached count of resting orders
    num_orders: usize,
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> SideBook<Sz, Px, Oid, Aid> {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            total_volume: Sz::zero(),
            total_volume_funds: 0.0,
            num_orders: 0,
        }
    }

    /// The most aggressive resting price: highest bid or lowest ask.
    pub(crate) fn best_price(&self) -> Option<Px> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Whether `price` is at or inside `limit` for this side. A missing limit
    /// (market order) never constrains.
    pub(crate) fn price_in_limit(&self, price: Px, limit: Option<Px>) -> bool {
        match limit {
            None => true,
            Some(limit) => match self.side {
                Side::Buy => price >= limit,
                Side::Sell => price <= limit,
            },
        }
    }

    /// Insert a resting order, creating its price level if absent.
    pub(crate) fn insert_order(&mut self, order: Order<Sz, Px, Oid, Aid>) {
        let queue = self
            .levels
            .entry(order.price)
            .or_insert_with(|| OrderQueue::new(order.price));
        queue.push_back(order);
        self.total_volume += order.size;
        self.total_volume_funds += notional(order.size, order.price);
        self.num_orders += 1;
    }

    /// Remove the order with the given id at the given price, dropping the
    /// level if it empties. Returns `None` when no such order rests.
    pub(crate) fn pop_order(&mut self, price: Px, order_id: Oid) -> Option<Order<Sz, Px, Oid, Aid>> {
        let queue = self.levels.get_mut(&price)?;
        let order = queue.pop_by_id(order_id)?;
        if queue.is_empty() {
            self.levels.remove(&price);
        }
        self.total_volume -= order.size;
        self.total_volume_funds -= notional(order.size, order.price);
        self.num_orders -= 1;
        Some(order)
    }

    /// Look up a resting order without removing it.
    pub(crate) fn find(&self, price: Px, order_id: Oid) -> Option<&Order<Sz, Px, Oid, Aid>> {
        self.levels.get(&price)?.find(order_id)
    }

    /// Total size matchable within `limit_price`. Walks levels in priority
    /// order and stops at the first out-of-range level; a missing limit
    /// returns the cached side total.
    pub(crate) fn size_available(&self, limit_price: Option<Px>) -> Sz {
        match limit_price {
            None => self.total_volume,
            Some(_) => {
                let mut available = Sz::zero();
                for queue in self.queues_in_priority() {
                    if !self.price_in_limit(queue.price(), limit_price) {
                        break;
                    }
                    available += queue.total_volume();
                }
                available
            }
        }
    }

    /// Total notional matchable within `limit_price`, in currency units.
    pub(crate) fn funds_available(&self, limit_price: Option<Px>) -> f64 {
        match limit_price {
            None => self.total_volume_funds,
            Some(_) => {
                let mut available = 0.0;
                for queue in self.queues_in_priority() {
                    if !self.price_in_limit(queue.price(), limit_price) {
                        break;
                    }
                    available += notional(queue.total_volume(), queue.price());
                }
                available
            }
        }
    }

    /// Level queues from most to least aggressive price.
    pub(crate) fn queues_in_priority(
        &self,
    ) -> Box<dyn Iterator<Item = &OrderQueue<Sz, Px, Oid, Aid>> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    /// Resting orders in price-time priority order.
    pub(crate) fn iter_orders(&self) -> impl Iterator<Item = &Order<Sz, Px, Oid, Aid>> {
        self.queues_in_priority().flat_map(|queue| queue.iter())
    }

    /// Top `max_depth` levels as parallel price/volume/order-count arrays.
    pub(crate) fn depth_levels(&self, max_depth: usize) -> DepthLevels<Px, Sz> {
        let mut depth = DepthLevels::with_capacity(max_depth.min(self.levels.len()));
        for queue in self.queues_in_priority().take(max_depth) {
            depth.price.push(queue.price());
            depth.volume.push(queue.total_volume());
            depth.orders.push(queue.len());
        }
        depth
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub(crate) fn total_volume(&self) -> Sz {
        self.total_volume
    }

    pub(crate) fn total_volume_funds(&self) -> f64 {
        self.total_volume_funds
    }

    pub(crate) fn num_orders(&self) -> usize {
        self.num_orders
    }

    // Matching-loop internals: the walkers in `matching.rs` detach the best
    // level, consume from its front, and reattach whatever survives.

    /// Detach the most aggressive level if it lies within `limit_price`.
    pub(crate) fn detach_best_queue(
        &mut self,
        limit_price: Option<Px>,
    ) -> Option<OrderQueue<Sz, Px, Oid, Aid>> {
        let price = self.best_price()?;
        if !self.price_in_limit(price, limit_price) {
            return None;
        }
        self.levels.remove(&price)
    }

    /// Reattach a level detached by [`detach_best_queue`]. Empty queues are
    /// dropped instead.
    pub(crate) fn reattach_queue(&mut self, queue: OrderQueue<Sz, Px, Oid, Aid>) {
        if !queue.is_empty() {
            self.levels.insert(queue.price(), queue);
        }
    }

    /// Record that matching consumed `size` shares at `price`, keeping the
    /// cached aggregates coherent. `orders_consumed` counts orders fully
    /// removed (zero for the split portion of a partially filled order).
    pub(crate) fn record_consumed(&mut self, size: Sz, price: Px, orders_consumed: usize) {
        self.total_volume -= size;
        self.total_volume_funds -= notional(size, price);
        self.num_orders -= orders_consumed;
    }
}
