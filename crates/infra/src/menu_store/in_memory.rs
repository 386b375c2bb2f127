use pizzashop_menu::MenuItem;

use super::r#trait::MenuRepository;

/// Fixed menu held in memory (tests/dev).
#[derive(Debug, Clone, Default)]
pub struct InMemoryMenuRepository {
    items: Vec<MenuItem>,
}

impl InMemoryMenuRepository {
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

impl MenuRepository for InMemoryMenuRepository {
    fn menu(&self) -> Vec<MenuItem> {
        self.items.clone()
    }
}
