use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::position_of;

/// The record bound to `id`, as the single listed product.
pub fn run<S: DataStore>(store: &S, id: i64) -> Result<CmdResult> {
    let mut products = store.load_all();
    let pos = position_of(&products, id)?;
    Ok(CmdResult::default().with_listed_products(vec![products.swap_remove(pos)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::model::Product;
    use crate::store::memory::fixtures::{abc, store_with};

    #[test]
    fn finds_product_by_id() {
        let store = store_with(&abc());
        let listed = run(&store, 2).unwrap().listed_products;
        assert_eq!(listed, vec![Product::new(2, "B", 2, 2.0)]);
    }

    #[test]
    fn missing_id_is_not_found() {
        let store = store_with(&abc());
        assert!(matches!(run(&store, 9), Err(StockError::NotFound(9))));
    }
}
