use std::path::{Path, PathBuf};

use pizzashop_menu::MenuItem;

use super::r#trait::MenuRepository;
use crate::text_file::read_records;

/// Menu read from a `name,price` text file, one item per line.
#[derive(Debug, Clone)]
pub struct FileMenuRepository {
    path: PathBuf,
}

impl FileMenuRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MenuRepository for FileMenuRepository {
    fn menu(&self) -> Vec<MenuItem> {
        match read_records(&self.path, MenuItem::parse_line) {
            Ok(items) => {
                tracing::debug!(path = %self.path.display(), items = items.len(), "menu loaded");
                items
            }
            Err(err) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to open menu file"
                );
                vec![]
            }
        }
    }
}
