//! Store configuration: backing file locations and limits

use std::path::{Path, PathBuf};

/// Default on-hand backing file (relative to the working directory)
pub const DEFAULT_INVENTORY_FILE: &str = "ingredients.txt";

/// Default standing-list backing file
pub const DEFAULT_STANDING_FILE: &str = "singredients.txt";

/// Default shopping list document
pub const DEFAULT_OUTPUT_FILE: &str = "shopping_list.html";

/// Maximum number of on-hand records
pub const DEFAULT_CAPACITY: usize = 100;

/// Longest accepted ingredient name, in characters
pub const MAX_NAME_LEN: usize = 99;

/// Longest accepted unit token, in characters
pub const MAX_UNIT_LEN: usize = 19;

/// Paths and limits shared by both stores for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub inventory_path: PathBuf,
    pub standing_path: PathBuf,
    pub capacity: usize,
}

impl StoreConfig {
    pub fn new(
        inventory_path: impl Into<PathBuf>,
        standing_path: impl Into<PathBuf>,
        capacity: usize,
    ) -> Self {
        Self {
            inventory_path: inventory_path.into(),
            standing_path: standing_path.into(),
            capacity,
        }
    }

    /// Both backing files inside `dir`, using the default file names
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(
            dir.join(DEFAULT_INVENTORY_FILE),
            dir.join(DEFAULT_STANDING_FILE),
            DEFAULT_CAPACITY,
        )
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_FILE, DEFAULT_STANDING_FILE, DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_working_directory_files() {
        let config = StoreConfig::default();
        assert_eq!(config.inventory_path, PathBuf::from("ingredients.txt"));
        assert_eq!(config.standing_path, PathBuf::from("singredients.txt"));
        assert_eq!(config.capacity, 100);
    }

    #[test]
    fn in_dir_joins_default_names() {
        let config = StoreConfig::in_dir(Path::new("/tmp/kitchen"));
        assert_eq!(
            config.inventory_path,
            PathBuf::from("/tmp/kitchen/ingredients.txt")
        );
        assert_eq!(
            config.standing_path,
            PathBuf::from("/tmp/kitchen/singredients.txt")
        );
    }
}
