use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payment::{Payment, PaymentType};

/// Add two amounts, clamping at the representable bounds instead of panicking.
///
/// The log accepts any positive amount, so a day's takings can exceed what a
/// `Decimal` holds; the total then sticks at `Decimal::MAX`.
pub fn saturating_add(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!(%total, %amount, "payment total overflowed; clamping");
        if amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Sum of amounts for payments of the given type. Zero when nothing matches.
pub fn total_for<'a, I>(payments: I, payment_type: PaymentType) -> Decimal
where
    I: IntoIterator<Item = &'a Payment>,
{
    payments
        .into_iter()
        .filter(|p| p.payment_type() == payment_type)
        .map(Payment::amount)
        .fold(Decimal::ZERO, saturating_add)
}

/// Takings per payment type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTotals {
    pub cash: Decimal,
    pub card: Decimal,
}

impl PaymentTotals {
    pub fn from_payments<'a, I>(payments: I) -> Self
    where
        I: IntoIterator<Item = &'a Payment>,
    {
        payments
            .into_iter()
            .fold(Self::default(), |mut totals, p| {
                let slot = match p.payment_type() {
                    PaymentType::Cash => &mut totals.cash,
                    PaymentType::Card => &mut totals.card,
                };
                *slot = saturating_add(*slot, p.amount());
                totals
            })
    }

    pub fn get(&self, payment_type: PaymentType) -> Decimal {
        match payment_type {
            PaymentType::Cash => self.cash,
            PaymentType::Card => self.card,
        }
    }

    pub fn grand_total(&self) -> Decimal {
        saturating_add(self.cash, self.card)
    }
}
