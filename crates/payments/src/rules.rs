//! Acceptance rules for recording a payment.

use rust_decimal::Decimal;

use pizzashop_core::{DomainError, DomainResult};

/// Lowest table number in the restaurant.
pub const MIN_TABLE_NUMBER: i32 = 1;
/// Highest table number in the restaurant.
pub const MAX_TABLE_NUMBER: i32 = 8;

pub fn validate_table_number(table_number: i32) -> DomainResult<()> {
    if !(MIN_TABLE_NUMBER..=MAX_TABLE_NUMBER).contains(&table_number) {
        return Err(DomainError::validation(format!(
            "table number must be between {MIN_TABLE_NUMBER} and {MAX_TABLE_NUMBER} inclusive, \
             got {table_number}"
        )));
    }
    Ok(())
}

pub fn validate_amount(amount: Decimal) -> DomainResult<()> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::validation(format!(
            "payment amount must be greater than 0, got {amount}"
        )));
    }
    Ok(())
}
