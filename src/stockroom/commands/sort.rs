use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Product;
use crate::store::DataStore;
use std::cmp::Ordering;

/// Sort keys for the derived catalog views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
}

impl SortKey {
    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Price => a.price.total_cmp(&b.price),
        }
    }
}

/// A sorted copy of the catalog. Ties keep insertion order; the store is not written.
pub fn run<S: DataStore>(store: &S, key: SortKey) -> Result<CmdResult> {
    let mut products = store.load_all();
    // `sort_by` is stable.
    products.sort_by(|a, b| key.compare(a, b));
    Ok(CmdResult::default().with_listed_products(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::store_with;

    fn ids(result: CmdResult) -> Vec<i64> {
        result.listed_products.iter().map(|p| p.id).collect()
    }

    fn tied() -> Vec<Product> {
        vec![
            Product::new(1, "A", 1, 5.0),
            Product::new(2, "B", 1, 5.0),
            Product::new(3, "A", 1, 5.0),
        ]
    }

    #[test]
    fn by_name_is_stable() {
        let store = store_with(&tied());
        assert_eq!(ids(run(&store, SortKey::Name).unwrap()), vec![1, 3, 2]);
    }

    #[test]
    fn by_price_with_all_ties_keeps_order() {
        let store = store_with(&tied());
        assert_eq!(ids(run(&store, SortKey::Price).unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn by_price_ascending() {
        let store = store_with(&[
            Product::new(1, "A", 1, 3.0),
            Product::new(2, "B", 1, 0.5),
            Product::new(3, "C", 1, 10.0),
            Product::new(4, "D", 1, 0.5),
        ]);
        assert_eq!(ids(run(&store, SortKey::Price).unwrap()), vec![2, 4, 1, 3]);
    }

    #[test]
    fn by_name_compares_raw_strings() {
        let store = store_with(&[
            Product::new(1, "pen", 1, 1.0),
            Product::new(2, "Pen", 1, 1.0),
            Product::new(3, "Ink", 1, 1.0),
        ]);
        assert_eq!(ids(run(&store, SortKey::Name).unwrap()), vec![3, 2, 1]);
    }

    #[test]
    fn sorting_does_not_touch_the_catalog() {
        let store = store_with(&tied());
        let before = store.contents().map(str::to_string);

        run(&store, SortKey::Name).unwrap();
        run(&store, SortKey::Price).unwrap();

        assert_eq!(store.contents().map(str::to_string), before);
        assert_eq!(list::run(&store).unwrap().listed_products, tied());
    }
}
