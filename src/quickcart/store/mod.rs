//! # Storage Layer
//!
//! This module defines the storage abstraction for quickcart. The
//! [`DataStore`] trait allows the application to work with different storage
//! backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep cart logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole document lives in one JSON file (`database.json` by default)
//!   - Every operation is an isolated read-modify-write cycle; nothing is
//!     cached across calls
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`, the file is a single JSON object mapping category names
//! to item collections:
//!
//! ```text
//! {
//!     "produce": {
//!         "bananas": "ripe"
//!     }
//! }
//! ```
//!
//! A missing or empty file reads as an empty document. Category keys are not
//! restricted to the shell's fixed menu set; any string found in the file is
//! accepted.

use crate::error::Result;
use crate::model::{Document, Item};

pub mod fs;
pub mod memory;

/// Abstract interface for cart storage.
///
/// Implementations must persist the full document on every mutation and
/// leave it untouched when an operation fails.
pub trait DataStore {
    /// Add an item under a category, creating the category if absent.
    /// Adding a name that already exists overwrites its note.
    fn add_item(&mut self, item: &Item, category: &str) -> Result<()>;

    /// Insert or overwrite an item under a category that must already exist.
    fn update_item(&mut self, item: &Item, category: &str) -> Result<()>;

    /// Remove an item from a category. The category key stays behind even
    /// when it ends up empty.
    fn remove_item(&mut self, name: &str, category: &str) -> Result<()>;

    /// The full persisted document.
    fn get_items(&self) -> Result<Document>;
}
