//! Account registry consistency through high-volume submit/cancel round trips.

use matchbook::{OrderBook, OrderTraits, Side};

type TickBook = OrderBook<u64, u64, u64, u64>;

const ACCT: u64 = 10101;

#[test]
fn submit_and_cancel_round_trip() {
    let mut book = TickBook::new();

    // 50,000 resting limits on alternating sides, all under one account.
    // Bids stay below 10_000 and asks above, so nothing ever crosses.
    let n = 50_000u64;
    for id in 0..n {
        let (side, price) = if id % 2 == 0 {
            (Side::Buy, 9_000 + id % 500)
        } else {
            (Side::Sell, 11_000 + id % 500)
        };
        book.submit_limit_order(id, side, price, 1 + id % 7, Some(ACCT), OrderTraits::VANILLA)
            .unwrap();
    }

    assert_eq!(book.get_account(ACCT).unwrap().len(), n as usize);
    let (bid_count, ask_count) = book.n_orders_bid_ask();
    assert_eq!(bid_count + ask_count, n as usize);

    // Cancel every order through the (id, side, price) surface
    for id in 0..n {
        let (side, price) = if id % 2 == 0 {
            (Side::Buy, 9_000 + id % 500)
        } else {
            (Side::Sell, 11_000 + id % 500)
        };
        let removed = book.cancel_order(id, side, price);
        assert!(removed.is_some(), "order {} should still be resting", id);
    }

    assert!(book.is_empty());
    assert_eq!(book.n_orders_bid_ask(), (0, 0));
    assert_eq!(book.volume_bid_ask(), (0, 0));
    assert!(book.get_account(ACCT).is_none());
}

#[test]
fn double_cancel_returns_none_and_changes_nothing() {
    let mut book = TickBook::new();
    book.submit_limit_order(1, Side::Buy, 1000, 10, Some(ACCT), OrderTraits::VANILLA)
        .unwrap();

    assert!(book.cancel_order(1, Side::Buy, 1000).is_some());
    let volume_after_first = book.volume_bid_ask();
    let orders_after_first = book.n_orders_bid_ask();

    assert!(book.cancel_order(1, Side::Buy, 1000).is_none());
    assert_eq!(book.volume_bid_ask(), volume_after_first);
    assert_eq!(book.n_orders_bid_ask(), orders_after_first);
    assert!(book.get_account(ACCT).is_none());
}

#[test]
fn cancel_after_submit_restores_prior_state() {
    let mut book = TickBook::new();
    book.submit_limit_order(1, Side::Buy, 990, 5, None, OrderTraits::VANILLA)
        .unwrap();
    book.submit_limit_order(2, Side::Sell, 1010, 5, None, OrderTraits::VANILLA)
        .unwrap();

    let best_before = book.best_bid_ask();
    let volume_before = book.volume_bid_ask();
    let orders_before = book.n_orders_bid_ask();
    let depth_before = book.book_depth_info(10);

    book.submit_limit_order(3, Side::Buy, 1000, 7, Some(ACCT), OrderTraits::VANILLA)
        .unwrap();
    let removed = book.cancel_order(3, Side::Buy, 1000).unwrap();
    assert_eq!(removed.size, 7);

    assert_eq!(book.best_bid_ask(), best_before);
    assert_eq!(book.volume_bid_ask(), volume_before);
    assert_eq!(book.n_orders_bid_ask(), orders_before);
    assert_eq!(book.book_depth_info(10), depth_before);
    assert!(book.get_account(ACCT).is_none());
}

#[test]
fn matched_away_orders_leave_the_registry() {
    let mut book = TickBook::new();
    for id in 0..10u64 {
        book.submit_limit_order(id, Side::Sell, 1000 + id, 5, Some(ACCT), OrderTraits::VANILLA)
            .unwrap();
    }
    assert_eq!(book.get_account(ACCT).unwrap().len(), 10);

    // Sweep the first three levels entirely and half of the fourth
    let result = book
        .submit_market_order(Side::Buy, 17, OrderTraits::VANILLA)
        .unwrap();
    assert_eq!(result.executed(), 17);

    let open = book.get_account(ACCT).unwrap();
    assert_eq!(open.len(), 7);
    // The split order's tracked copy reflects its residual
    assert_eq!(open.get(&3).unwrap().size, 3);
    assert!(open.get(&0).is_none());
}
