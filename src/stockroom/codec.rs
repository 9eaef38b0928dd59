//! # Line Codec
//!
//! One product per line, four comma separated fields, no header:
//!
//! ```text
//! <id>,<name>,<quantity>,<price>
//! ```
//!
//! Empty fields at the end of a line are ignored, so a stray trailing comma does not
//! cost the record. The format has no escaping, so names holding a comma or a line break cannot be
//! encoded. Decoding is deliberately lenient about values: negative numbers and empty
//! names decode fine so that a hand-edited file can still be inspected. Enforcing the
//! catalog rules is left to the command layer.

use crate::model::Product;
use thiserror::Error;

pub const FIELD_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 4;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("name {0:?} contains a comma or line break")]
    UnsupportedName(String),

    #[error("price of product {0} is not a finite number")]
    NonFinitePrice(i64),
}

/// Why a line could not be turned into a product.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedLine {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid id")]
    InvalidId,

    #[error("invalid quantity")]
    InvalidQuantity,

    #[error("invalid price")]
    InvalidPrice,
}

/// Whether `name` can be written to a line without corrupting the format.
pub fn is_encodable_name(name: &str) -> bool {
    !name.contains([FIELD_SEPARATOR, '\n', '\r'])
}

pub fn encode(product: &Product) -> Result<String, EncodeError> {
    let name = product.name.trim();
    if !is_encodable_name(name) {
        return Err(EncodeError::UnsupportedName(name.to_string()));
    }
    if !product.price.is_finite() {
        return Err(EncodeError::NonFinitePrice(product.id));
    }
    // f64's Display is the shortest representation that parses back to the same value.
    Ok(format!(
        "{}{sep}{}{sep}{}{sep}{}",
        product.id,
        name,
        product.quantity,
        product.price,
        sep = FIELD_SEPARATOR
    ))
}

pub fn decode(line: &str) -> Result<Product, MalformedLine> {
    let mut fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    // Trailing empty fields are not fields: `1,Pen,10,2.5,` is still a record.
    while fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }
    let fields: Vec<&str> = fields.into_iter().map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(MalformedLine::FieldCount(fields.len()));
    }

    let id = fields[0].parse().map_err(|_| MalformedLine::InvalidId)?;
    let quantity = fields[2]
        .parse()
        .map_err(|_| MalformedLine::InvalidQuantity)?;
    let price: f64 = fields[3].parse().map_err(|_| MalformedLine::InvalidPrice)?;
    if !price.is_finite() {
        return Err(MalformedLine::InvalidPrice);
    }

    Ok(Product {
        id,
        name: fields[1].to_string(),
        quantity,
        price,
    })
}
