use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Summary;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let products = store.load_all();
    Ok(CmdResult::default().with_summary(Summary::of(&products)))
}
