use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::Product;
use crate::store::DataStore;

use super::helpers::validate;

pub fn run<S: DataStore>(store: &mut S, product: Product) -> Result<CmdResult> {
    validate(&product)?;

    let mut products = store.load_all();
    if products.iter().any(|p| p.id == product.id) {
        return Err(StockError::DuplicateId(product.id));
    }

    products.push(product);
    store.save_all(&products)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Product added successfully!"));
    Ok(result)
}
