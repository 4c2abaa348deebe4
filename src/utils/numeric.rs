//! Coercions between the book's scalar parameters and currency funds.
//!
//! Funds are carried as `f64`: wide enough that summing a full day of
//! size-times-price products stays lossless for the intended operating range
//! of integer sizes and fixed-point prices.

use num_traits::{FromPrimitive, ToPrimitive, Zero};

/// Notional value of `size` shares at `price`, in currency units.
pub(crate) fn notional<Sz: ToPrimitive, Px: ToPrimitive>(size: Sz, price: Px) -> f64 {
    size.to_f64().unwrap_or(0.0) * price.to_f64().unwrap_or(0.0)
}

/// Whole shares purchasable with `funds` at `price`, expressed in the size
/// scalar. Zero when `funds` does not cover a single share, the price is not
/// positive, or the share count does not fit the size type.
pub(crate) fn shares_affordable<Sz, Px>(funds: f64, price: Px) -> Sz
where
    Sz: Zero + FromPrimitive,
    Px: ToPrimitive,
{
    let price = price.to_f64().unwrap_or(0.0);
    if price <= 0.0 || funds <= 0.0 {
        return Sz::zero();
    }
    Sz::from_f64((funds / price).floor()).unwrap_or_else(Sz::zero)
}
