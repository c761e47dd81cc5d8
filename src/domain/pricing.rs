//! Quantity-tiered pricing.
//!
//! Totals are computed with [`Decimal`] so that currency values never pick up
//! binary floating-point drift. The stored total is not rounded, only
//! normalized (trailing zeros dropped); use [`round_to_cents`] when a
//! two-decimal figure is needed for display.

use crate::domain::model::MAX_QUANTITY;
use rust_decimal::{Decimal, RoundingStrategy};

pub const BULK_MIN_QUANTITY: i32 = 10;
pub const WHOLESALE_MIN_QUANTITY: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountTier {
    /// 1..=9 kits, full price.
    None,
    /// 10..=49 kits, 5% off.
    Bulk,
    /// 50 or more kits, 15% off.
    Wholesale,
}

impl DiscountTier {
    /// Tier boundaries belong to the higher tier: exactly 10 is `Bulk`,
    /// exactly 50 is `Wholesale`.
    pub fn for_quantity(quantity: i32) -> Self {
        if quantity >= WHOLESALE_MIN_QUANTITY {
            DiscountTier::Wholesale
        } else if quantity >= BULK_MIN_QUANTITY {
            DiscountTier::Bulk
        } else {
            DiscountTier::None
        }
    }

    pub fn factor(self) -> Decimal {
        match self {
            DiscountTier::None => Decimal::ONE,
            DiscountTier::Bulk => Decimal::new(95, 2),
            DiscountTier::Wholesale => Decimal::new(85, 2),
        }
    }
}

pub fn total_price(base_price: Decimal, quantity: i32) -> Decimal {
    let gross = base_price * Decimal::from(quantity);
    let tier = DiscountTier::for_quantity(quantity);
    let total = match tier {
        DiscountTier::None => gross,
        _ => gross * tier.factor(),
    };
    total.normalize()
}

/// A base price the catalog can accept: positive, and small enough that an
/// order of `MAX_QUANTITY` kits still fits in a `Decimal`.
pub fn is_orderable_price(base_price: Decimal) -> bool {
    base_price > Decimal::ZERO
        && base_price
            .checked_mul(Decimal::from(MAX_QUANTITY))
            .is_some()
}

/// Two decimal places, midpoint away from zero (940.405 -> 940.41).
pub fn round_to_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
