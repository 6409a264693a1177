use super::DataStore;
use crate::error::{CartError, Result};
use crate::model::{Document, Item};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    document: Document,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn add_item(&mut self, item: &Item, category: &str) -> Result<()> {
        self.document
            .entry(category.to_string())
            .or_default()
            .insert(item.name.clone(), item.note.clone());
        Ok(())
    }

    fn update_item(&mut self, item: &Item, category: &str) -> Result<()> {
        let items = self
            .document
            .get_mut(category)
            .ok_or_else(|| CartError::MissingCategory(category.to_string()))?;
        items.insert(item.name.clone(), item.note.clone());
        Ok(())
    }

    fn remove_item(&mut self, name: &str, category: &str) -> Result<()> {
        let items = self
            .document
            .get_mut(category)
            .ok_or_else(|| CartError::MissingCategory(category.to_string()))?;
        if items.remove(name).is_none() {
            return Err(CartError::MissingItem {
                name: name.to_string(),
                category: category.to_string(),
            });
        }
        Ok(())
    }

    fn get_items(&self) -> Result<Document> {
        Ok(self.document.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Category;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_item(mut self, category: Category, name: &str, note: &str) -> Self {
            self.store
                .add_item(&Item::new(name, note), category.as_str())
                .unwrap();
            self
        }

        pub fn with_empty_category(mut self, category: Category) -> Self {
            self.store
                .document
                .entry(category.as_str().to_string())
                .or_default();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::Category;

    #[test]
    fn mirrors_the_file_store_contract() {
        let mut store = InMemoryStore::new();
        store.add_item(&Item::new("bananas", "ripe"), "produce").unwrap();
        assert_eq!(store.get_items().unwrap()["produce"]["bananas"], "ripe");

        store.remove_item("bananas", "produce").unwrap();
        let document = store.get_items().unwrap();
        assert!(document.contains_key("produce"));
        assert!(document["produce"].is_empty());
    }

    #[test]
    fn update_and_remove_require_the_category() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.update_item(&Item::new("milk", ""), "dairy"),
            Err(CartError::MissingCategory(_))
        ));
        assert!(matches!(
            store.remove_item("milk", "dairy"),
            Err(CartError::MissingCategory(_))
        ));
    }

    #[test]
    fn fixture_builds_seeded_stores() {
        let fx = StoreFixture::new()
            .with_item(Category::Dairy, "milk", "")
            .with_empty_category(Category::Frozen);

        let document = fx.store.get_items().unwrap();
        assert_eq!(document["dairy"]["milk"], "");
        assert!(document["frozen"].is_empty());
    }
}
