//! Menu domain module.
//!
//! Menu items and the `name,price` line format they are loaded from. Pure
//! domain logic (no IO); file loading lives in `pizzashop-infra`.

pub mod item;

pub use item::MenuItem;
