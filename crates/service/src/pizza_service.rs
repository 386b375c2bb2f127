use rust_decimal::Decimal;

use pizzashop_infra::{MenuRepository, PaymentRepository};
use pizzashop_menu::MenuItem;
use pizzashop_payments::{
    Payment, PaymentTotals, PaymentType, total_for, validate_amount, validate_table_number,
};

use crate::error::ServiceError;

/// Front-of-house service: menu lookup, payment recording and takings.
///
/// Generic over the repositories so tests can run against in-memory stores
/// and the shop against text files.
#[derive(Debug, Clone)]
pub struct PizzaService<M, P> {
    menu_repo: M,
    payment_repo: P,
}

impl<M, P> PizzaService<M, P>
where
    M: MenuRepository,
    P: PaymentRepository,
{
    pub fn new(menu_repo: M, payment_repo: P) -> Self {
        Self {
            menu_repo,
            payment_repo,
        }
    }

    /// Current menu, reloaded from its source on every call.
    pub fn menu_data(&self) -> Vec<MenuItem> {
        self.menu_repo.menu()
    }

    /// Every recorded payment, in the order it was recorded.
    pub fn payments(&self) -> Vec<Payment> {
        self.payment_repo.all()
    }

    /// Record a payment for a table.
    ///
    /// Rejects table numbers outside 1..=8 and non-positive amounts before
    /// touching the store.
    pub fn add_payment(
        &self,
        table_number: i32,
        payment_type: PaymentType,
        amount: Decimal,
    ) -> Result<(), ServiceError> {
        validate_table_number(table_number)?;
        validate_amount(amount)?;

        let payment = Payment::new(table_number, payment_type, amount);
        self.payment_repo.add(payment)?;

        tracing::info!(table_number, %payment_type, %amount, "payment recorded");
        Ok(())
    }

    /// Sum of recorded amounts paid with `payment_type`.
    pub fn total_amount(&self, payment_type: PaymentType) -> Decimal {
        total_for(&self.payments(), payment_type)
    }

    /// Takings for every payment type from a single snapshot of the log.
    pub fn totals(&self) -> PaymentTotals {
        PaymentTotals::from_payments(&self.payments())
    }

    pub fn payment_repository(&self) -> &P {
        &self.payment_repo
    }
}
