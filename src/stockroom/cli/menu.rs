//! The interactive menu.
//!
//! Reads one answer per line from any `BufRead` and writes to any `Write`, so the
//! whole loop can be driven from a byte buffer in tests. End of input behaves like
//! choosing `0`. Numeric answers that do not parse are reported here and never reach
//! the API.

use super::render::{print_error, print_messages, render_products, render_summary, MENU};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use stockroom::api::{CmdResult, InventoryApi};
use stockroom::codec::is_encodable_name;
use stockroom::error::Result as StockResult;
use stockroom::model::Product;
use stockroom::store::DataStore;
use tracing::debug;

const NAME_REJECTED: &str = "Name must not contain commas or line breaks.";

/// Why the current action stopped before completing.
enum Interrupt {
    Eof,
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(e: io::Error) -> Self {
        Interrupt::Io(e)
    }
}

type Step<T> = std::result::Result<T, Interrupt>;

pub struct Menu<'a, S: DataStore, R, W> {
    api: &'a mut InventoryApi<S>,
    input: R,
    out: W,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(api: &'a mut InventoryApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub fn run(mut self) -> io::Result<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) | Err(Interrupt::Eof) => break,
                Err(Interrupt::Io(e)) => return Err(e),
            }
        }
        writeln!(self.out, "Exiting...")?;
        self.out.flush()
    }

    /// Shows the menu and performs one action. `false` means the operator asked to leave.
    fn step(&mut self) -> Step<bool> {
        write!(self.out, "{}", MENU)?;
        let answer = self.ask("Choose an option: ")?;
        let choice: u32 = match answer.trim().parse() {
            Ok(choice) => choice,
            Err(_) => {
                writeln!(self.out, "Invalid input! Please enter a number.")?;
                return Ok(true);
            }
        };
        debug!(choice, "menu choice");

        match choice {
            1 => self.add()?,
            2 => {
                let result = self.api.list_products();
                self.show_products(result, None)?;
            }
            3 => self.update()?,
            4 => self.delete()?,
            5 => {
                let result = self.api.sorted_by_name();
                self.show_products(result, Some("Sorted by Name:"))?;
            }
            6 => {
                let result = self.api.sorted_by_price();
                self.show_products(result, Some("Sorted by Price:"))?;
            }
            7 => {
                let result = self.api.summary();
                self.show_summary(result)?;
            }
            0 => return Ok(false),
            _ => writeln!(self.out, "Invalid choice!")?,
        }
        Ok(true)
    }

    fn add(&mut self) -> Step<()> {
        let Some(id) = self.ask_number::<i64>("Enter product ID: ")? else {
            return self.invalid_number();
        };
        let name = self.ask("Enter product name: ")?;
        if !is_encodable_name(name.trim()) {
            writeln!(self.out, "{}", NAME_REJECTED)?;
            return Ok(());
        }
        let Some(quantity) = self.ask_number::<i64>("Enter quantity: ")? else {
            return self.invalid_number();
        };
        let Some(price) = self.ask_number::<f64>("Enter price: ")? else {
            return self.invalid_number();
        };

        let result = self.api.add_product(Product::new(id, name, quantity, price));
        self.show_outcome(result)
    }

    fn update(&mut self) -> Step<()> {
        let Some(old_id) = self.ask_number::<i64>("Enter product ID to update: ")? else {
            return self.invalid_number();
        };
        let current = match self.api.get_product(old_id) {
            Ok(mut result) => match result.listed_products.pop() {
                Some(product) => product,
                None => return Ok(()),
            },
            Err(e) => {
                print_error(&mut self.out, &e)?;
                return Ok(());
            }
        };

        let id_prompt = format!("Enter new ID (current: {}): ", current.id);
        let Some(id) = self.ask_or_keep(&id_prompt, current.id)? else {
            return self.invalid_number();
        };
        let name = self.ask(&format!("Enter new name (current: {}): ", current.name))?;
        let name = if name.trim().is_empty() {
            current.name.clone()
        } else {
            name
        };
        if !is_encodable_name(name.trim()) {
            writeln!(self.out, "{}", NAME_REJECTED)?;
            return Ok(());
        }
        let Some(quantity) = self.ask_or_keep(
            &format!("Enter new quantity (current: {}): ", current.quantity),
            current.quantity,
        )?
        else {
            return self.invalid_number();
        };
        let Some(price) = self.ask_or_keep(
            &format!("Enter new price (current: {:.2}): ", current.price),
            current.price,
        )?
        else {
            return self.invalid_number();
        };

        let result = self
            .api
            .update_product(old_id, Product::new(id, name, quantity, price));
        self.show_outcome(result)
    }

    fn delete(&mut self) -> Step<()> {
        let Some(id) = self.ask_number::<i64>("Enter product ID to delete: ")? else {
            return self.invalid_number();
        };
        let result = self.api.delete_product(id);
        self.show_outcome(result)
    }

    fn show_outcome(&mut self, result: StockResult<CmdResult>) -> Step<()> {
        match result {
            Ok(result) => print_messages(&mut self.out, &result.messages)?,
            Err(e) => print_error(&mut self.out, &e)?,
        }
        Ok(())
    }

    fn show_products(&mut self, result: StockResult<CmdResult>, title: Option<&str>) -> Step<()> {
        match result {
            Ok(result) => {
                writeln!(self.out)?;
                write!(self.out, "{}", render_products(&result.listed_products, title))?;
            }
            Err(e) => print_error(&mut self.out, &e)?,
        }
        Ok(())
    }

    fn show_summary(&mut self, result: StockResult<CmdResult>) -> Step<()> {
        match result {
            Ok(CmdResult {
                summary: Some(summary),
                ..
            }) => {
                writeln!(self.out)?;
                write!(self.out, "{}", render_summary(&summary))?;
            }
            Ok(_) => {}
            Err(e) => print_error(&mut self.out, &e)?,
        }
        Ok(())
    }

    fn invalid_number(&mut self) -> Step<()> {
        writeln!(self.out, "Invalid input! Please enter a valid number.")?;
        Ok(())
    }

    /// Prompts and reads one line, without its line terminator.
    fn ask(&mut self, prompt: &str) -> Step<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Err(Interrupt::Eof);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Step<Option<T>> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().parse().ok())
    }

    /// Like `ask_number`, but a blank answer keeps `current`.
    fn ask_or_keep<T: FromStr>(&mut self, prompt: &str, current: T) -> Step<Option<T>> {
        let answer = self.ask(prompt)?;
        if answer.trim().is_empty() {
            return Ok(Some(current));
        }
        Ok(answer.trim().parse().ok())
    }
}
