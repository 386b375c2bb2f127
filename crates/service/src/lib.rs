//! Application services for the shop: recording payments, checkout and the
//! closing report.
//!
//! Composes the repository traits from `pizzashop-infra` with the pure rules
//! in `pizzashop-payments`; contains no IO of its own.

pub mod checkout;
pub mod error;
pub mod pizza_service;
pub mod report;

pub use checkout::{CheckoutOutcome, PaymentChoice, PaymentDesk, PaymentOperation, PaymentPrompt};
pub use error::ServiceError;
pub use pizza_service::PizzaService;
pub use report::ClosingReport;
