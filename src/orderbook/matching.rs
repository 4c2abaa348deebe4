//! Matching primitives: walk one side of the book consuming liquidity in
//! price-time priority.
//!
//! Both walkers share the same structure: an all-or-none pre-check against the
//! liquidity within the price constraint, a fast path that swallows a whole
//! level when the incoming quantity covers it, and a FIFO inner loop that
//! splits the last touched order. The residual of a split goes back to the
//! *front* of its queue, so it keeps its arrival priority.

use num_traits::Zero;
use tracing::trace;

use super::order::{Id, Order, OrderTraits, Price, Size};
use super::sidebook::SideBook;
use crate::utils::numeric::{notional, shares_affordable};

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> SideBook<Sz, Px, Oid, Aid> {
    /// Consume up to `size` shares from this side, best price first, bounded
    /// by `limit_price` when present. Returns the matched orders in
    /// consumption order and the unconsumed remainder.
    pub(crate) fn walk_by_size(
        &mut self,
        size: Sz,
        limit_price: Option<Px>,
        traits: OrderTraits,
    ) -> (Vec<Order<Sz, Px, Oid, Aid>>, Sz) {
        trace!(
            "walk_by_size: size {} limit {:?} traits {}",
            size,
            limit_price,
            traits
        );
        let mut matches = Vec::new();
        let mut remaining = size;

        if traits.all_or_none && self.size_available(limit_price) < size {
            return (matches, remaining);
        }

        while remaining > Sz::zero() {
            let mut queue = match self.detach_best_queue(limit_price) {
                Some(queue) => queue,
                None => break,
            };
            let price = queue.price();

            if queue.total_volume() <= remaining {
                // The incoming quantity swallows the whole level.
                remaining -= queue.total_volume();
                self.record_consumed(queue.total_volume(), price, queue.len());
                while let Some(order) = queue.pop_front() {
                    matches.push(order);
                }
                continue;
            }

            // The level outlasts the incoming quantity: consume from the
            // front until a split exhausts it.
            while let Some(order) = queue.pop_front() {
                if order.size <= remaining {
                    remaining -= order.size;
                    self.record_consumed(order.size, price, 1);
                    matches.push(order);
                    if remaining == Sz::zero() {
                        break;
                    }
                } else {
                    let filled = remaining;
                    queue.push_front(order.with_size(order.size - filled));
                    matches.push(order.with_size(filled));
                    self.record_consumed(filled, price, 0);
                    remaining = Sz::zero();
                    break;
                }
            }
            self.reattach_queue(queue);
        }

        (matches, remaining)
    }

    /// Consume liquidity from this side until `funds` currency units are
    /// spent, best price first. A split fills `floor(remaining / price)`
    /// shares; when that is zero the walk stops and the unspent funds are
    /// returned as-is.
    pub(crate) fn walk_by_funds(
        &mut self,
        funds: f64,
        limit_price: Option<Px>,
        traits: OrderTraits,
    ) -> (Vec<Order<Sz, Px, Oid, Aid>>, f64) {
        trace!(
            "walk_by_funds: funds {} limit {:?} traits {}",
            funds,
            limit_price,
            traits
        );
        let mut matches = Vec::new();
        let mut remaining = funds;

        if traits.all_or_none && self.funds_available(limit_price) < funds {
            return (matches, remaining);
        }

        'walk: while remaining > 0.0 {
            let mut queue = match self.detach_best_queue(limit_price) {
                Some(queue) => queue,
                None => break,
            };
            let price = queue.price();

            let level_funds = notional(queue.total_volume(), price);
            if level_funds <= remaining {
                remaining -= level_funds;
                self.record_consumed(queue.total_volume(), price, queue.len());
                while let Some(order) = queue.pop_front() {
                    matches.push(order);
                }
                continue;
            }

            while let Some(order) = queue.pop_front() {
                let order_funds = notional(order.size, price);
                if order_funds <= remaining {
                    remaining -= order_funds;
                    self.record_consumed(order.size, price, 1);
                    matches.push(order);
                } else {
                    let filled: Sz = shares_affordable(remaining, price);
                    if filled.is_zero() {
                        // Not enough funds left for a single share at this
                        // price; put the order back untouched and stop.
                        queue.push_front(order);
                        self.reattach_queue(queue);
                        break 'walk;
                    }
                    queue.push_front(order.with_size(order.size - filled));
                    matches.push(order.with_size(filled));
                    self.record_consumed(filled, price, 0);
                    remaining -= notional(filled, price);
                    break;
                }
            }
            self.reattach_queue(queue);
        }

        (matches, remaining)
    }
}
