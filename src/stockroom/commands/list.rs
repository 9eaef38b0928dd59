use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// The catalog in insertion order.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_products(store.load_all()))
}
