//! # Command Layer
//!
//! One module per catalog operation. Every command is a self-contained
//! load, transform, save cycle against a [`DataStore`](crate::store::DataStore):
//! nothing is cached between calls, so each command sees what the previous one wrote.
//!
//! Commands never print. They return a [`CmdResult`] carrying the products to show,
//! an optional [`Summary`], and the confirmation messages for the UI to render.

use crate::model::{Product, Summary};
use colored::{ColoredString, Colorize};

pub mod add;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod sort;
pub mod summary;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    /// The content colored for its level. Plain when color is off (`NO_COLOR`, no tty).
    pub fn styled(&self) -> ColoredString {
        match self.level {
            MessageLevel::Info => self.content.dimmed(),
            MessageLevel::Success => self.content.green(),
            MessageLevel::Warning => self.content.yellow(),
            MessageLevel::Error => self.content.red(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<Product>,
    pub summary: Option<Summary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }
}
