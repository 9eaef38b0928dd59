//! Text rendering for catalog views.
//!
//! Tables are tab separated with the price fixed to two decimals. The render
//! functions return plain strings; `print_messages` and `print_error` color by level.

use std::io::{self, Write};
use stockroom::api::CmdMessage;
use stockroom::error::StockError;
use stockroom::model::{Product, Summary};

pub const MENU: &str = "\n=== Inventory Menu ===
1. Add Product
2. View Products
3. Update Product
4. Delete Product
5. View Products Sorted by Name
6. View Products Sorted by Price
7. Inventory Summary
0. Exit
";

const TABLE_HEADER: &str = "ID\tName\tQty\tPrice";

/// Untitled views of an empty catalog say so; titled (sorted) views always show
/// their title and header.
pub fn render_products(products: &[Product], title: Option<&str>) -> String {
    if products.is_empty() && title.is_none() {
        return "No products found.\n".to_string();
    }

    let mut out = String::new();
    if let Some(title) = title {
        out.push_str(title);
        out.push('\n');
    }
    out.push_str(TABLE_HEADER);
    out.push('\n');
    for p in products {
        out.push_str(&format!(
            "{}\t{}\t{}\t{:.2}\n",
            p.id, p.name, p.quantity, p.price
        ));
    }
    out
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "=== Inventory Summary ===\nTotal Products: {}\nTotal Quantity: {}\nTotal Stock Value: {:.2}\n",
        summary.total_products, summary.total_quantity, summary.total_stock_value
    )
}

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        writeln!(out, "{}", message.styled())?;
    }
    Ok(())
}

/// One line explaining why an operation failed.
pub fn print_error<W: Write>(out: &mut W, err: &StockError) -> io::Result<()> {
    writeln!(out, "{}", CmdMessage::error(err.to_string()).styled())
}
