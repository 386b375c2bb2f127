use std::sync::RwLock;

use pizzashop_payments::Payment;

use super::r#trait::{PaymentRepository, RepositoryError};

/// In-memory append-only payment log.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryPaymentRepository {
    payments: RwLock<Vec<Payment>>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the log with existing payments.
    pub fn with_payments(payments: impl IntoIterator<Item = Payment>) -> Self {
        Self {
            payments: RwLock::new(payments.into_iter().collect()),
        }
    }
}

impl PaymentRepository for InMemoryPaymentRepository {
    fn add(&self, payment: Payment) -> Result<(), RepositoryError> {
        let mut payments = self.payments.write().map_err(|_| RepositoryError::Lock)?;
        payments.push(payment);
        Ok(())
    }

    fn all(&self) -> Vec<Payment> {
        match self.payments.read() {
            Ok(payments) => payments.clone(),
            Err(_) => {
                tracing::error!("payment store lock poisoned; returning empty snapshot");
                vec![]
            }
        }
    }
}
