use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The full persisted cart: category name -> item name -> note.
///
/// BTreeMap keeps both levels in a stable order, so "the first category
/// containing an item" is well defined and the on-disk file diffs cleanly.
pub type Document = BTreeMap<String, BTreeMap<String, String>>;

/// The fixed set of groupings offered by the category picker.
///
/// The picker is closed, but the storage layer is not: any string is
/// accepted as a category key when reading documents written elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Dairy,
    Snacks,
    Frozen,
    Other,
}

impl Category {
    /// Menu order, positions 1 through 5.
    pub const ALL: [Category; 5] = [
        Category::Produce,
        Category::Dairy,
        Category::Snacks,
        Category::Frozen,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Snacks => "snacks",
            Category::Frozen => "frozen",
            Category::Other => "other",
        }
    }

    /// Map a 1-based menu choice to a category. Out-of-range is None.
    pub fn from_menu_choice(choice: usize) -> Option<Category> {
        Self::ALL.get(choice.checked_sub(1)?).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named entry with an optional free-text note. Transient: only the name
/// and note are written into the document, under a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub note: String,
}

impl Item {
    pub fn new(name: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            note: note.into(),
        }
    }
}
