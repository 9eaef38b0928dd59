use crate::error::{Result, StockError, ValidationError};
use crate::model::Product;

/// Per-record rules every product must satisfy before it is written.
/// Reports the first violation only.
pub fn validate(product: &Product) -> std::result::Result<(), ValidationError> {
    if product.id < 0 {
        return Err(ValidationError::NegativeId);
    }
    if product.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if product.quantity < 0 {
        return Err(ValidationError::NegativeQuantity);
    }
    if product.price < 0.0 {
        return Err(ValidationError::NegativePrice);
    }
    if !product.price.is_finite() {
        return Err(ValidationError::NonFinitePrice);
    }
    Ok(())
}

/// Position of the first record with `id`.
pub fn position_of(products: &[Product], id: i64) -> Result<usize> {
    products
        .iter()
        .position(|p| p.id == id)
        .ok_or(StockError::NotFound(id))
}
