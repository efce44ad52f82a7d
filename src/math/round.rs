//! Fixed-precision rounding of formula results.
//!
//! Published reference values are rounded the way a correctly-rounded decimal
//! rendering of the stored `f64` would be:
//!
//! - the exact binary value is what gets rounded, so `2.675` (stored as
//!   `2.67499…`) rounds down to `2.67`
//! - exact ties go to the even digit (`0.125 → 0.12`, `2.5 → 2`)
//!
//! Naive `(x * 10^n).round() / 10^n` breaks both rules (the multiplication
//! itself rounds, and `f64::round` sends ties away from zero), so we go through
//! `rust_decimal` instead.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `places` decimal places (half to even on the exact binary value).
///
/// Values `rust_decimal` cannot represent (non-finite, or beyond ~7.9e28) are
/// returned unchanged.
pub fn round_to(value: f64, places: u32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    exact
        .round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
        .to_f64()
        .unwrap_or(value)
}

/// Round to a whole number, half to even.
pub fn round_whole(value: f64) -> f64 {
    round_to(value, 0)
}
