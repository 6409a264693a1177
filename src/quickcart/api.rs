//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all cart operations, regardless of the UI driving them.
//!
//! The facade dispatches to the appropriate command function and returns
//! structured types (`Result<CmdResult>`). It holds no cart logic of its own
//! and performs no I/O or presentation work.
//!
//! ## Generic Over DataStore
//!
//! `CartApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CartApi<FileStore>`
//! - Testing: `CartApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{Category, Item};
use crate::store::DataStore;

/// The main API facade for cart operations.
///
/// Generic over `DataStore` to allow different storage backends.
pub struct CartApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> CartApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_item(&mut self, item: &Item, category: Category) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, item, category)
    }

    pub fn update_item(&mut self, name: &str, note: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, name, note)
    }

    pub fn remove_item(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, name)
    }

    pub fn view_cart(&self) -> Result<commands::CmdResult> {
        commands::view::run(&self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_through_the_store() {
        let mut api = CartApi::new(InMemoryStore::new());
        api.add_item(&Item::new("bananas", "ripe"), Category::Produce)
            .unwrap();

        let result = api.view_cart().unwrap();
        let document = result.document.unwrap();
        assert_eq!(document["produce"]["bananas"], "ripe");

        api.remove_item("bananas").unwrap();
        let document = api.view_cart().unwrap().document.unwrap();
        assert!(document["produce"].is_empty());
    }
}
