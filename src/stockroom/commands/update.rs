use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::Product;
use crate::store::DataStore;

use super::helpers::{position_of, validate};

/// Replaces the record bound to `old_id` with `product`, keeping its position.
/// The replacement may carry a new id as long as no other record already uses it.
pub fn run<S: DataStore>(store: &mut S, old_id: i64, product: Product) -> Result<CmdResult> {
    let mut products = store.load_all();
    let pos = position_of(&products, old_id)?;

    validate(&product)?;
    if product.id != old_id
        && products
            .iter()
            .enumerate()
            .any(|(i, p)| i != pos && p.id == product.id)
    {
        return Err(StockError::DuplicateId(product.id));
    }

    products[pos] = product;
    store.save_all(&products)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Product updated successfully!"));
    Ok(result)
}
