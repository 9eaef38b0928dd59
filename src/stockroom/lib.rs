//! # Stockroom Architecture
//!
//! Stockroom is a single-user inventory register: a small catalog of products
//! (id, name, quantity, unit price) kept in a plain text file between sessions.
//! The library owns the catalog rules; the binary is a menu-driven terminal client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive menu and scriptable subcommands              │
//! │  - Parses operator input, renders tables and messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load, transform in memory, save                          │
//! │  - Enforces id uniqueness and per-record validation         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) over the line codec (codec.rs)      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Terminal Output in Core
//!
//! Results come back as values ([`api::CmdResult`]). Advisory text from the store
//! (file created, malformed line dropped) goes to an injected
//! [`diagnostics::DiagnosticSink`]; standard output is only the default sink.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per catalog operation
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: The `id,name,quantity,price` line format
//! - [`model`]: `Product` and `Summary`
//! - [`diagnostics`]: Advisory events and sinks
//! - [`config`]: Configuration file and defaults
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod store;
