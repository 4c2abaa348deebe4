use super::book::OrderBook;
use super::order::{Id, Price, Side, Size};

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> OrderBook<Sz, Px, Oid, Aid> {
    /// Check whether a limit at `price` would cross the opposite best.
    pub(super) fn crosses_opposite(&self, side: Side, price: Px) -> bool {
        match side {
            Side::Buy => match self.best_ask() {
                Some(best_ask) => price >= best_ask,
                None => false,
            },
            Side::Sell => match self.best_bid() {
                Some(best_bid) => price <= best_bid,
                None => false,
            },
        }
    }

    /// Check whether a residual at `price` can rest strictly inside the
    /// spread on its own side. Evaluated after matching, against the
    /// possibly-changed opposite best.
    pub(super) fn rests_inside_spread(&self, side: Side, price: Px) -> bool {
        match side {
            Side::Buy => match self.best_ask() {
                Some(best_ask) => price < best_ask,
                None => true,
            },
            Side::Sell => match self.best_bid() {
                Some(best_bid) => price > best_bid,
                None => true,
            },
        }
    }
}
