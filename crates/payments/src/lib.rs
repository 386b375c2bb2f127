//! Payments domain module.
//!
//! Business rules for table payments, implemented purely as deterministic
//! domain logic (no IO, no storage).

pub mod payment;
pub mod rules;
pub mod totals;

pub use payment::{Payment, PaymentType};
pub use rules::{MAX_TABLE_NUMBER, MIN_TABLE_NUMBER, validate_amount, validate_table_number};
pub use totals::{PaymentTotals, saturating_add, total_for};
