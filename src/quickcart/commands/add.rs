use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Category, Item};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, item: &Item, category: Category) -> Result<CmdResult> {
    store.add_item(item, category.as_str())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item added ({}): {}",
        category, item.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_item_under_the_chosen_category() {
        let mut store = InMemoryStore::new();
        run(&mut store, &Item::new("bananas", "ripe"), Category::Produce).unwrap();

        let document = store.get_items().unwrap();
        assert_eq!(document["produce"]["bananas"], "ripe");
    }

    #[test]
    fn reports_success() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &Item::new("peas", ""), Category::Frozen).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Item added (frozen): peas");
    }

    #[test]
    fn adding_twice_keeps_the_latest_note() {
        let mut store = InMemoryStore::new();
        run(&mut store, &Item::new("milk", "whole"), Category::Dairy).unwrap();
        run(&mut store, &Item::new("milk", "skim"), Category::Dairy).unwrap();

        let document = store.get_items().unwrap();
        assert_eq!(document["dairy"].len(), 1);
        assert_eq!(document["dairy"]["milk"], "skim");
    }
}
