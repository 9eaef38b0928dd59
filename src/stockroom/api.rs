//! # API Facade
//!
//! The single entry point for catalog operations, whatever the UI. It dispatches to
//! the command layer and returns structured [`CmdResult`]s; it holds no business
//! logic and performs no terminal output.
//!
//! `InventoryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `InventoryApi<FileStore>`
//! - Testing: `InventoryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::Product;
use crate::store::DataStore;

pub struct InventoryApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> InventoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Make sure the backing storage exists before the first operation.
    pub fn init(&mut self) -> Result<()> {
        self.store.ensure_exists()
    }

    pub fn add_product(&mut self, product: Product) -> Result<CmdResult> {
        commands::add::run(&mut self.store, product)
    }

    pub fn list_products(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_product(&self, id: i64) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn update_product(&mut self, old_id: i64, product: Product) -> Result<CmdResult> {
        commands::update::run(&mut self.store, old_id, product)
    }

    pub fn delete_product(&mut self, id: i64) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn sorted_by_name(&self) -> Result<CmdResult> {
        commands::sort::run(&self.store, SortKey::Name)
    }

    pub fn sorted_by_price(&self) -> Result<CmdResult> {
        commands::sort::run(&self.store, SortKey::Price)
    }

    pub fn summary(&self) -> Result<CmdResult> {
        commands::summary::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::sort::SortKey;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
