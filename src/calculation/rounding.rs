//! Rounding for persisted calculation values.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every computed `calculation_value` carries.
pub const CALCULATION_SCALE: u32 = 3;

/// Rounds a value half away from zero to three places and pins its scale to
/// three, so the string form always has exactly three fractional digits.
///
/// # Examples
///
/// ```
/// use payroll_components::calculation::to_fixed_3;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(to_fixed_3(Decimal::from(150)).to_string(), "150.000");
/// assert_eq!(to_fixed_3(Decimal::from_str("23576.9230769").unwrap()).to_string(), "23576.923");
/// assert_eq!(to_fixed_3(Decimal::from_str("0.0005").unwrap()).to_string(), "0.001");
/// ```
pub fn to_fixed_3(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CALCULATION_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CALCULATION_SCALE);
    rounded
}
