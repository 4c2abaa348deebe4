#[cfg(test)]
mod tests {
    use crate::{BookOptions, OrderBook, OrderTraits, Side};

    type Book = OrderBook<u64, u64, u64, u64>;

    fn populated_book() -> Book {
        let mut book = Book::new();
        let _ = book.submit_limit_order(1, Side::Buy, 1000, 10, None, OrderTraits::VANILLA);
        let _ = book.submit_limit_order(2, Side::Buy, 990, 20, None, OrderTraits::VANILLA);
        let _ = book.submit_limit_order(3, Side::Sell, 1010, 5, None, OrderTraits::VANILLA);
        let _ = book.submit_limit_order(4, Side::Sell, 1020, 15, None, OrderTraits::VANILLA);
        book
    }

    #[test]
    fn test_new_order_book() {
        let book = Book::new();

        assert!(book.is_empty());
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
        assert_eq!(book.best_bid_ask(), (None, None));
        assert_eq!(book.mid_price(), None);
        assert_eq!(book.spread(), None);
        assert_eq!(book.volume_bid_ask(), (0, 0));
        assert_eq!(book.n_orders_bid_ask(), (0, 0));
    }

    #[test]
    fn test_options_default_and_custom() {
        let book = Book::new();
        assert_eq!(book.options().plot_tick_max, 10);

        let book = Book::with_options(BookOptions { plot_tick_max: 25 });
        assert_eq!(book.options().plot_tick_max, 25);
    }

    #[test]
    fn test_best_prices_and_spread() {
        let book = populated_book();

        assert_eq!(book.best_bid_ask(), (Some(1000), Some(1010)));
        assert_eq!(book.mid_price(), Some(1005.0));
        assert_eq!(book.spread(), Some(10.0));
    }

    #[test]
    fn test_volume_and_order_counts() {
        let book = populated_book();

        assert_eq!(book.volume_bid_ask(), (30, 20));
        assert_eq!(book.n_orders_bid_ask(), (2, 2));
        let (bid_funds, ask_funds) = book.volume_funds_bid_ask();
        assert_eq!(bid_funds, 10_000.0 + 19_800.0);
        assert_eq!(ask_funds, 5_050.0 + 15_300.0);
    }

    #[test]
    fn test_depth_info_orders_levels_out_from_best() {
        let book = populated_book();
        let depth = book.book_depth_info(10);

        assert_eq!(depth.bids.price, vec![1000, 990]);
        assert_eq!(depth.bids.volume, vec![10, 20]);
        assert_eq!(depth.bids.orders, vec![1, 1]);
        assert_eq!(depth.asks.price, vec![1010, 1020]);
        assert_eq!(depth.asks.volume, vec![5, 15]);
        assert_eq!(depth.asks.orders, vec![1, 1]);
    }

    #[test]
    fn test_depth_info_truncates_to_max_depth() {
        let book = populated_book();
        let depth = book.book_depth_info(1);

        assert_eq!(depth.bids.len(), 1);
        assert_eq!(depth.asks.len(), 1);
        assert_eq!(depth.bids.price, vec![1000]);
        assert_eq!(depth.asks.price, vec![1010]);
    }

    #[test]
    fn test_order_iterators_price_time_priority() {
        let mut book = populated_book();
        // Second order at the best bid, behind order 1 in time
        let _ = book.submit_limit_order(5, Side::Buy, 1000, 3, None, OrderTraits::VANILLA);

        let bid_ids: Vec<u64> = book.bid_orders().map(|o| o.order_id).collect();
        assert_eq!(bid_ids, vec![1, 5, 2]);

        let ask_ids: Vec<u64> = book.ask_orders().map(|o| o.order_id).collect();
        assert_eq!(ask_ids, vec![3, 4]);
    }

    #[test]
    fn test_float_prices_with_ordered_float() {
        use ordered_float::OrderedFloat;

        let mut book: OrderBook<i64, OrderedFloat<f32>, u64, u64> = OrderBook::new();
        let _ = book.submit_limit_order(
            1,
            Side::Buy,
            OrderedFloat(99.98),
            10,
            None,
            OrderTraits::VANILLA,
        );
        let _ = book.submit_limit_order(
            2,
            Side::Sell,
            OrderedFloat(100.02),
            5,
            None,
            OrderTraits::VANILLA,
        );

        assert_eq!(book.best_bid(), Some(OrderedFloat(99.98)));
        assert_eq!(book.best_ask(), Some(OrderedFloat(100.02)));
        let mid = book.mid_price().unwrap();
        assert!((mid - 100.0).abs() < 1e-3);
    }
}
