use std::sync::Arc;

use pizzashop_menu::MenuItem;

/// Read-only source of menu items.
///
/// Loading never fails outright: sources log what they could not read and
/// return what they could.
pub trait MenuRepository: Send + Sync {
    /// Fresh snapshot of the menu.
    fn menu(&self) -> Vec<MenuItem>;
}

impl<R> MenuRepository for Arc<R>
where
    R: MenuRepository + ?Sized,
{
    fn menu(&self) -> Vec<MenuItem> {
        (**self).menu()
    }
}
