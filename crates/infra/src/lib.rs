//! Infrastructure layer: file-backed stores and configuration.

pub mod config;
pub mod menu_store;
pub mod payment_store;

mod text_file;

pub use config::{ConfigError, ShopConfig};
pub use menu_store::{FileMenuRepository, InMemoryMenuRepository, MenuRepository};
pub use payment_store::{
    FilePaymentRepository, InMemoryPaymentRepository, PaymentRepository, RepositoryError,
};
