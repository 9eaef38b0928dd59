use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// Records are replaced wholesale on update, never patched field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl Product {
    /// Builds a product, trimming surrounding whitespace from the name.
    pub fn new(id: i64, name: impl AsRef<str>, quantity: i64, price: f64) -> Self {
        Self {
            id,
            name: name.as_ref().trim().to_string(),
            quantity,
            price,
        }
    }

    /// Value of the stocked units at the unit price.
    pub fn stock_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Aggregate figures over the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_products: usize,
    pub total_quantity: i128,
    pub total_stock_value: f64,
}

impl Summary {
    pub fn of(products: &[Product]) -> Self {
        Self {
            total_products: products.len(),
            total_quantity: products.iter().map(|p| p.quantity as i128).sum(),
            total_stock_value: products.iter().map(Product::stock_value).sum(),
        }
    }
}
