use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let products = store.load_all();
    let before = products.len();
    let kept: Vec<_> = products.into_iter().filter(|p| p.id != id).collect();
    if kept.len() == before {
        return Err(StockError::NotFound(id));
    }

    store.save_all(&kept)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Product deleted successfully!"));
    Ok(result)
}
