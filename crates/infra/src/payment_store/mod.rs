//! Append-only payment log boundary.
//!
//! A narrow `add` / `all` contract with an in-memory implementation for tests
//! and a text-file implementation for the shop.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FilePaymentRepository;
pub use in_memory::InMemoryPaymentRepository;
pub use r#trait::{PaymentRepository, RepositoryError};
