//! The one and only price derivation, shared by every surface.

use crate::quantity::{
    money::{Pounds, WholePounds},
    percent::Percent,
};

/// Markup applied to the total to obtain the struck-through «was» price.
const LIST_PRICE_FACTOR: f64 = 1.15;

/// Share of the total advertised as the saving.
const SAVING_FACTOR: f64 = 0.15;

/// VAT-inclusive price rounded to whole pounds.
pub fn total_price(price_before_vat: Pounds, vat: Percent) -> WholePounds {
    debug_assert!(price_before_vat >= Pounds::zero());
    debug_assert!(vat >= Percent::zero());
    gross_price(price_before_vat, vat).round()
}

/// Same as [`total_price`], but `None` when the total or its list price cannot be displayed
/// to the pound.
pub fn checked_total_price(price_before_vat: Pounds, vat: Percent) -> Option<WholePounds> {
    let gross = gross_price(price_before_vat, vat);
    (gross.0.is_finite()
        && gross >= Pounds::zero()
        && gross * LIST_PRICE_FACTOR <= Pounds::MAX_EXACT)
        .then(|| gross.round())
}

fn gross_price(price_before_vat: Pounds, vat: Percent) -> Pounds {
    price_before_vat * (1.0 + vat.to_proportion())
}

/// Struck-through price displayed next to the total on a grid card.
pub fn list_price(total: WholePounds) -> WholePounds {
    total.scale(LIST_PRICE_FACTOR)
}

/// Advertised saving displayed on a grid card.
pub fn saving(total: WholePounds) -> WholePounds {
    total.scale(SAVING_FACTOR)
}
