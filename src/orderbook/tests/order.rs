#[cfg(test)]
mod tests {
    use crate::{Order, OrderTraits, Side};
    use std::str::FromStr;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(format!("{}", Side::Buy), "BUY");
        assert_eq!(format!("{}", Side::Sell), "SELL");
    }

    #[test]
    fn test_traits_presets() {
        assert!(!OrderTraits::VANILLA.all_or_none);
        assert!(!OrderTraits::VANILLA.immediate_or_cancel);
        assert!(OrderTraits::VANILLA.allow_cross);

        assert!(!OrderTraits::IOC.all_or_none);
        assert!(OrderTraits::IOC.immediate_or_cancel);
        assert!(OrderTraits::IOC.allow_cross);

        assert!(OrderTraits::FILL_OR_KILL.all_or_none);
        assert!(OrderTraits::FILL_OR_KILL.immediate_or_cancel);
        assert!(OrderTraits::FILL_OR_KILL.allow_cross);
    }

    #[test]
    fn test_traits_default_is_vanilla() {
        assert_eq!(OrderTraits::default(), OrderTraits::VANILLA);
    }

    #[test]
    fn test_traits_immediate_property() {
        assert!(
            !OrderTraits::VANILLA.is_immediate(),
            "VANILLA should not be immediate"
        );
        assert!(OrderTraits::IOC.is_immediate(), "IOC should be immediate");
        assert!(
            OrderTraits::FILL_OR_KILL.is_immediate(),
            "FOK should be immediate"
        );
    }

    #[test]
    fn test_traits_display() {
        assert_eq!(format!("{}", OrderTraits::VANILLA), "VANILLA");
        assert_eq!(format!("{}", OrderTraits::IOC), "IOC");
        assert_eq!(format!("{}", OrderTraits::FILL_OR_KILL), "FOK");

        let custom = OrderTraits {
            all_or_none: true,
            immediate_or_cancel: false,
            allow_cross: false,
        };
        assert_eq!(format!("{}", custom), "AON=true-IOC=false-CROSS=false");
    }

    #[test]
    fn test_traits_from_str() {
        assert_eq!(
            OrderTraits::from_str("VANILLA").unwrap(),
            OrderTraits::VANILLA
        );
        assert_eq!(OrderTraits::from_str("IOC").unwrap(), OrderTraits::IOC);
        assert_eq!(
            OrderTraits::from_str("FOK").unwrap(),
            OrderTraits::FILL_OR_KILL
        );
        assert!(OrderTraits::from_str("GTC").is_err());
    }

    #[test]
    fn test_order_with_size_keeps_identity() {
        let order: Order<u64, u64, u64, u64> = Order {
            side: Side::Buy,
            size: 10,
            price: 1000,
            order_id: 7,
            account_id: Some(42),
        };

        let smaller = order.with_size(3);
        assert_eq!(smaller.size, 3);
        assert_eq!(smaller.price, order.price);
        assert_eq!(smaller.order_id, order.order_id);
        assert_eq!(smaller.account_id, order.account_id);
        assert_eq!(smaller.side, order.side);
    }

    #[test]
    fn test_order_display() {
        let order: Order<u64, u64, u64, u64> = Order {
            side: Side::Sell,
            size: 5,
            price: 1001,
            order_id: 9,
            account_id: None,
        };
        assert_eq!(format!("{}", order), "SELL 5 @ 1001 (id 9)");
    }
}
