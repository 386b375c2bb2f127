//! End-of-day summary: what was on the menu and what was taken.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pizzashop_infra::{MenuRepository, PaymentRepository};
use pizzashop_menu::MenuItem;
use pizzashop_payments::PaymentTotals;

use crate::pizza_service::PizzaService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingReport {
    pub generated_at: DateTime<Utc>,
    pub menu: Vec<MenuItem>,
    pub payment_count: usize,
    pub totals: PaymentTotals,
}

impl ClosingReport {
    pub fn build<M, P>(service: &PizzaService<M, P>, generated_at: DateTime<Utc>) -> Self
    where
        M: MenuRepository,
        P: PaymentRepository,
    {
        let payments = service.payments();
        Self {
            generated_at,
            menu: service.menu_data(),
            payment_count: payments.len(),
            totals: PaymentTotals::from_payments(&payments),
        }
    }
}
