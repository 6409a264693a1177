use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let document = store.get_items()?;
    Ok(CmdResult::default().with_document(document))
}
