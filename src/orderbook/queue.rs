//! FIFO queue of resting orders sharing one price level.
//!
//! Orders are kept in arrival order to enforce time priority. The queue caches
//! the sum of its orders' sizes so depth queries never rescan the orders.

use num_traits::Zero;
use std::collections::VecDeque;

use super::order::{Id, Order, Price, Size};

/// All resting orders at a single price, in arrival (FIFO) order.
///
/// Invariants at rest: `total_volume` equals the sum of queued sizes, and every
/// queued order carries this queue's price. The containing side book creates a
/// queue when the first order at its price arrives and drops it once empty.
#[derive(Debug, Clone)]
pub(crate) struct OrderQueue<Sz, Px, Oid, Aid> {
    /// Price shared by every order in the queue
    price: Px,
    /// Orders in arrival order; the front matches first
    orders: VecDeque<Order<Sz, Px, Oid, Aid>>,
    /// Cached sum of queued order sizes
    total_volume: Sz,
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> OrderQueue<Sz, Px, Oid, Aid> {
    /// Create an empty queue for the given price.
    pub(crate) fn new(price: Px) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
            total_volume: Sz::zero(),
        }
    }

    /// The price level this queue represents.
    pub(crate) fn price(&self) -> Px {
        self.price
    }

    /// Append an order at the back of the queue (lowest time priority).
    pub(crate) fn push_back(&mut self, order: Order<Sz, Px, Oid, Aid>) {
        self.total_volume += order.size;
        self.orders.push_back(order);
    }

    /// Insert an order at the front of the queue. Used to return a split
    /// residual to its original arrival position.
    pub(crate) fn push_front(&mut self, order: Order<Sz, Px, Oid, Aid>) {
        self.total_volume += order.size;
        self.orders.push_front(order);
    }

    /// Remove and return the order with the highest time priority.
    pub(crate) fn pop_front(&mut self) -> Option<Order<Sz, Px, Oid, Aid>> {
        let order = self.orders.pop_front()?;
        self.total_volume -= order.size;
        Some(order)
    }

    /// Remove and return the order with the given id, or `None` if no such
    /// order is queued. Linear scan; price-level depth is small for typical
    /// instruments.
    pub(crate) fn pop_by_id(&mut self, order_id: Oid) -> Option<Order<Sz, Px, Oid, Aid>> {
        let position = self.orders.iter().position(|o| o.order_id == order_id)?;
        let order = self.orders.remove(position)?;
        self.total_volume -= order.size;
        Some(order)
    }

    /// Find an order by id without removing it.
    pub(crate) fn find(&self, order_id: Oid) -> Option<&Order<Sz, Px, Oid, Aid>> {
        self.orders.iter().find(|o| o.order_id == order_id)
    }

    /// Iterate queued orders in arrival order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Order<Sz, Px, Oid, Aid>> {
        self.orders.iter()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of queued orders.
    pub(crate) fn len(&self) -> usize {
        self.orders.len()
    }

    /// Cached sum of queued order sizes.
    pub(crate) fn total_volume(&self) -> Sz {
        self.total_volume
    }
}
