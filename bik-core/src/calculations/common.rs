//! Shared helpers for yen arithmetic.

use rust_decimal::Decimal;

/// Floors a value to whole yen (toward negative infinity).
///
/// The reference tax tables never emit fractional yen; every division or
/// rate multiplication in the engine passes through this before it reaches
/// a result field.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use bik_core::calculations::common::floor_yen;
///
/// assert_eq!(floor_yen(dec!(11020.9)), dec!(11020));
/// assert_eq!(floor_yen(dec!(11020)), dec!(11020));
/// ```
pub fn floor_yen(value: Decimal) -> Decimal {
    value.floor()
}

/// Returns the larger of two values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn floor_yen_truncates_fractions() {
        assert_eq!(floor_yen(dec!(123.9)), dec!(123));
        assert_eq!(floor_yen(dec!(123.0001)), dec!(123));
    }

    #[test]
    fn floor_yen_keeps_whole_yen() {
        assert_eq!(floor_yen(dec!(123)), dec!(123));
        assert_eq!(floor_yen(dec!(0)), dec!(0));
    }

    #[test]
    fn floor_yen_floors_toward_negative_infinity() {
        assert_eq!(floor_yen(dec!(-0.5)), dec!(-1));
    }

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100), dec!(200)), dec!(200));
        assert_eq!(max(dec!(200), dec!(100)), dec!(200));
        assert_eq!(max(dec!(-50), dec!(0)), dec!(0));
    }
}
