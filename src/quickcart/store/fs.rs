use super::DataStore;
use crate::error::{CartError, Result};
use crate::model::{Document, Item};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// Default backing file, relative to the working directory.
pub const DEFAULT_DB_FILENAME: &str = "database.json";

/// File-backed store. Every operation runs a full load-mutate-save cycle
/// against `db_path`; no document state is held between calls.
pub struct FileStore {
    db_path: PathBuf,
}

impl FileStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// A missing or empty file is an empty document; anything else must
    /// parse as category -> item -> note.
    fn load(&self) -> Result<Document> {
        if !self.db_path.exists() {
            return Ok(Document::new());
        }
        let content = fs::read_to_string(&self.db_path)?;
        if content.trim().is_empty() {
            return Ok(Document::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Serialize the complete document in one write, 4-space indented.
    fn save(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document.serialize(&mut ser)?;
        fs::write(&self.db_path, buf)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn add_item(&mut self, item: &Item, category: &str) -> Result<()> {
        let mut document = self.load()?;
        document
            .entry(category.to_string())
            .or_default()
            .insert(item.name.clone(), item.note.clone());
        self.save(&document)
    }

    fn update_item(&mut self, item: &Item, category: &str) -> Result<()> {
        let mut document = self.load()?;
        let items = document
            .get_mut(category)
            .ok_or_else(|| CartError::MissingCategory(category.to_string()))?;
        items.insert(item.name.clone(), item.note.clone());
        self.save(&document)
    }

    fn remove_item(&mut self, name: &str, category: &str) -> Result<()> {
        let mut document = self.load()?;
        let items = document
            .get_mut(category)
            .ok_or_else(|| CartError::MissingCategory(category.to_string()))?;
        if items.remove(name).is_none() {
            return Err(CartError::MissingItem {
                name: name.to_string(),
                category: category.to_string(),
            });
        }
        self.save(&document)
    }

    fn get_items(&self) -> Result<Document> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join(DEFAULT_DB_FILENAME));
        (dir, store)
    }

    #[test]
    fn missing_file_is_empty_document() {
        let (_dir, store) = setup();
        assert!(store.get_items().unwrap().is_empty());
    }

    #[test]
    fn empty_file_is_empty_document() {
        let (_dir, store) = setup();
        fs::write(store.db_path(), "").unwrap();
        assert!(store.get_items().unwrap().is_empty());
    }

    #[test]
    fn add_then_get_round_trips() {
        let (_dir, mut store) = setup();
        store
            .add_item(&Item::new("bananas", "ripe"), "produce")
            .unwrap();

        let document = store.get_items().unwrap();
        assert_eq!(document.len(), 1);
        assert_eq!(document["produce"]["bananas"], "ripe");
    }

    #[test]
    fn add_preserves_existing_items() {
        let (_dir, mut store) = setup();
        fs::write(store.db_path(), r#"{"dairy": {"milk": ""}}"#).unwrap();

        store
            .add_item(&Item::new("cheese", "sharp"), "dairy")
            .unwrap();

        let document = store.get_items().unwrap();
        assert_eq!(document["dairy"]["milk"], "");
        assert_eq!(document["dairy"]["cheese"], "sharp");
    }

    #[test]
    fn second_add_overwrites_note() {
        let (_dir, mut store) = setup();
        store.add_item(&Item::new("milk", "whole"), "dairy").unwrap();
        store.add_item(&Item::new("milk", "skim"), "dairy").unwrap();

        let document = store.get_items().unwrap();
        assert_eq!(document["dairy"].len(), 1);
        assert_eq!(document["dairy"]["milk"], "skim");
    }

    #[test]
    fn same_name_can_live_in_two_categories() {
        let (_dir, mut store) = setup();
        store.add_item(&Item::new("juice", ""), "frozen").unwrap();
        store.add_item(&Item::new("juice", "fresh"), "other").unwrap();

        let document = store.get_items().unwrap();
        assert_eq!(document["frozen"]["juice"], "");
        assert_eq!(document["other"]["juice"], "fresh");
    }

    #[test]
    fn writes_four_space_indented_json() {
        let (_dir, mut store) = setup();
        store
            .add_item(&Item::new("bananas", "ripe"), "produce")
            .unwrap();

        let on_disk = fs::read_to_string(store.db_path()).unwrap();
        assert!(on_disk.contains("    \"produce\""));
        assert!(on_disk.contains("        \"bananas\": \"ripe\""));
    }

    #[test]
    fn update_requires_existing_category() {
        let (_dir, mut store) = setup();
        let err = store
            .update_item(&Item::new("milk", "fresh"), "dairy")
            .unwrap_err();
        assert!(matches!(err, CartError::MissingCategory(_)));
        assert!(!store.db_path().exists());
    }

    #[test]
    fn update_inserts_new_name_under_known_category() {
        let (_dir, mut store) = setup();
        fs::write(store.db_path(), r#"{"dairy": {"milk": ""}}"#).unwrap();

        store
            .update_item(&Item::new("yogurt", "plain"), "dairy")
            .unwrap();

        let document = store.get_items().unwrap();
        assert_eq!(document["dairy"]["yogurt"], "plain");
    }

    #[test]
    fn remove_keeps_the_emptied_category_key() {
        let (_dir, mut store) = setup();
        store.add_item(&Item::new("kale", "curly"), "produce").unwrap();

        store.remove_item("kale", "produce").unwrap();

        let document = store.get_items().unwrap();
        assert!(document.contains_key("produce"));
        assert!(document["produce"].is_empty());
    }

    #[test]
    fn remove_missing_item_leaves_file_unchanged() {
        let (_dir, mut store) = setup();
        fs::write(store.db_path(), r#"{"produce": {"kale": ""}}"#).unwrap();
        let before = fs::read_to_string(store.db_path()).unwrap();

        let err = store.remove_item("bread", "produce").unwrap_err();
        assert!(matches!(err, CartError::MissingItem { .. }));

        let err = store.remove_item("bread", "bakery").unwrap_err();
        assert!(matches!(err, CartError::MissingCategory(_)));

        assert_eq!(fs::read_to_string(store.db_path()).unwrap(), before);
    }

    #[test]
    fn corrupt_content_is_reported() {
        let (_dir, store) = setup();
        fs::write(store.db_path(), "definitely not json").unwrap();
        let err = store.get_items().unwrap_err();
        assert!(matches!(err, CartError::CorruptStore(_)));
    }

    #[test]
    fn wrongly_shaped_content_is_reported() {
        let (_dir, store) = setup();
        fs::write(store.db_path(), r#"{"produce": "bananas"}"#).unwrap();
        let err = store.get_items().unwrap_err();
        assert!(matches!(err, CartError::CorruptStore(_)));
    }
}
