// src/shared/money.rs

use rust_decimal::Decimal;

/// Money columns are NUMERIC(19,4).
pub const MONEY_SCALE: u32 = 4;

/// 999999999999999.9999, the largest value a NUMERIC(19,4) column holds.
pub const MAX_MONEY: Decimal =
    Decimal::from_parts(0x89E7_FFFF, 0x8AC7_2304, 0, false, MONEY_SCALE);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("must not be negative")]
    Negative,
    #[error("must have at most 4 decimal places")]
    TooPrecise,
    #[error("must not exceed 999999999999999.9999")]
    TooLarge,
}

/// Checks that `value` can be stored in a money column without rounding.
pub fn check_money(value: Decimal) -> Result<(), MoneyError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(MoneyError::Negative);
    }
    if value.normalize().scale() > MONEY_SCALE {
        return Err(MoneyError::TooPrecise);
    }
    if value > MAX_MONEY {
        return Err(MoneyError::TooLarge);
    }
    Ok(())
}
