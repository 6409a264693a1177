use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::find_category;

pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let document = store.get_items()?;
    let mut result = CmdResult::default();

    match find_category(&document, name) {
        Some(category) => {
            store.remove_item(name, category)?;
            result.add_message(CmdMessage::success(format!(
                "Item removed ({}): {}",
                category, name
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(format!("{} not in your cart", name)));
        }
    }

    Ok(result)
}
