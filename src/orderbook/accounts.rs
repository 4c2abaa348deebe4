//! Per-account registry of open orders.
//!
//! The registry holds a copy of each resting order keyed by account and order
//! id. Every book mutation that adds, consumes, or cancels a tracked order
//! updates the registry in the same operation, so the registry always mirrors
//! the resting set.

use std::collections::HashMap;

use super::order::{Id, Order, Price, Size};

/// Mapping from account id to that account's open orders.
#[derive(Debug, Clone)]
pub(crate) struct AccountTracker<Sz, Px, Oid, Aid> {
    accounts: HashMap<Aid, HashMap<Oid, Order<Sz, Px, Oid, Aid>>>,
}

impl<Sz: Size, Px: Price, Oid: Id, Aid: Id> AccountTracker<Sz, Px, Oid, Aid> {
    pub(crate) fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Record a resting order under its account, if it has one. Re-registering
    /// an id replaces the stored copy; a split refreshes it to the residual.
    pub(crate) fn register(&mut self, order: &Order<Sz, Px, Oid, Aid>) {
        if let Some(account_id) = order.account_id {
            self.accounts
                .entry(account_id)
                .or_default()
                .insert(order.order_id, *order);
        }
    }

    /// Drop the registry entry for an order that left the book. Accounts with
    /// no remaining open orders are pruned.
    pub(crate) fn unregister(&mut self, account_id: Aid, order_id: Oid) {
        if let Some(open_orders) = self.accounts.get_mut(&account_id) {
            open_orders.remove(&order_id);
            if open_orders.is_empty() {
                self.accounts.remove(&account_id);
            }
        }
    }

    /// The open orders of one account, keyed by order id.
    pub(crate) fn get(&self, account_id: Aid) -> Option<&HashMap<Oid, Order<Sz, Px, Oid, Aid>>> {
        self.accounts.get(&account_id)
    }
}
