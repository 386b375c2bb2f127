//! Checkout: asking a table how it wants to pay, and recording the answer.
//!
//! The question is a plain [`PaymentPrompt`] value and the answer an
//! `Option<PaymentChoice>` (`None` when the prompt was dismissed), so any
//! front end can drive it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pizzashop_infra::{MenuRepository, PaymentRepository};
use pizzashop_payments::PaymentType;

use crate::error::ServiceError;
use crate::pizza_service::PizzaService;

const BAR: &str = "--------------------------";

/// What to ask a table when it asks for the bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPrompt {
    table_number: i32,
    total_amount: Decimal,
}

impl PaymentPrompt {
    pub fn new(table_number: i32, total_amount: Decimal) -> Self {
        Self {
            table_number,
            total_amount,
        }
    }

    pub fn table_number(&self) -> i32 {
        self.table_number
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn title(&self) -> String {
        format!("Payment for Table {}", self.table_number)
    }

    pub fn header(&self) -> String {
        format!("Total amount: {}", self.total_amount)
    }

    pub fn content(&self) -> &'static str {
        "Please choose payment option"
    }

    /// Options offered to the table, in display order.
    pub fn choices(&self) -> [PaymentChoice; 3] {
        [PaymentChoice::Card, PaymentChoice::Cash, PaymentChoice::Cancel]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentChoice {
    Card,
    Cash,
    Cancel,
}

impl PaymentChoice {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentChoice::Card => "Pay by Card",
            PaymentChoice::Cash => "Pay Cash",
            PaymentChoice::Cancel => "Cancel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutOutcome {
    Paid(PaymentType),
    Cancelled,
}

/// Announcements made while a table pays.
pub trait PaymentOperation {
    fn card_payment(&self);
    fn cash_payment(&self);
    fn cancel_payment(&self);
}

/// Till that settles a table's bill through a [`PizzaService`].
#[derive(Debug)]
pub struct PaymentDesk<'a, M, P> {
    service: &'a PizzaService<M, P>,
}

impl<'a, M, P> PaymentDesk<'a, M, P>
where
    M: MenuRepository,
    P: PaymentRepository,
{
    pub fn new(service: &'a PizzaService<M, P>) -> Self {
        Self { service }
    }

    /// Act on the table's answer to `prompt`.
    ///
    /// Card and cash record one payment of the prompt's total; cancelling or
    /// dismissing the prompt records nothing.
    pub fn settle(
        &self,
        prompt: &PaymentPrompt,
        answer: Option<PaymentChoice>,
    ) -> Result<CheckoutOutcome, ServiceError> {
        let payment_type = match answer {
            Some(PaymentChoice::Card) => {
                self.card_payment();
                PaymentType::Card
            }
            Some(PaymentChoice::Cash) => {
                self.cash_payment();
                PaymentType::Cash
            }
            Some(PaymentChoice::Cancel) | None => {
                self.cancel_payment();
                return Ok(CheckoutOutcome::Cancelled);
            }
        };

        self.service
            .add_payment(prompt.table_number(), payment_type, prompt.total_amount())?;
        Ok(CheckoutOutcome::Paid(payment_type))
    }
}

impl<M, P> PaymentOperation for PaymentDesk<'_, M, P> {
    fn card_payment(&self) {
        tracing::info!("{BAR}");
        tracing::info!("Paying by card...");
        tracing::info!("Please insert your card!");
        tracing::info!("{BAR}");
    }

    fn cash_payment(&self) {
        tracing::info!("{BAR}");
        tracing::info!("Paying cash...");
        tracing::info!("Please show the cash...!");
        tracing::info!("{BAR}");
    }

    fn cancel_payment(&self) {
        tracing::info!("{BAR}");
        tracing::info!("Payment choice needed...");
        tracing::info!("{BAR}");
    }
}
