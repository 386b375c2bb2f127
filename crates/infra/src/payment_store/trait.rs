use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use pizzashop_payments::Payment;

/// Payment store operation error.
///
/// These are **infrastructure errors** (storage, locking) as opposed to
/// domain errors (validation). Read paths never return them: a damaged or
/// unreadable log is logged and yields whatever could be read.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store lock poisoned")]
    Lock,
}

/// Append-only payment log.
///
/// A flat, ordered log keyed by nothing: payments come back from `all()` in
/// the order they were added. There is no update or delete path.
pub trait PaymentRepository: Send + Sync {
    /// Append one payment to the log.
    fn add(&self, payment: Payment) -> Result<(), RepositoryError>;

    /// Snapshot of every recorded payment, in insertion order.
    fn all(&self) -> Vec<Payment>;
}

impl<R> PaymentRepository for Arc<R>
where
    R: PaymentRepository + ?Sized,
{
    fn add(&self, payment: Payment) -> Result<(), RepositoryError> {
        (**self).add(payment)
    }

    fn all(&self) -> Vec<Payment> {
        (**self).all()
    }
}
