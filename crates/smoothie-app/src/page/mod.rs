//! # Page Model
//!
//! A render pass appends [`Block`]s to a [`Page`] top to bottom, one per widget
//! or message, and [`Page::to_html`] turns the finished page into a document.
//! Keeping the page as data lets tests assert on what was shown without
//! parsing HTML.

mod form;
mod html;

pub use form::*;

use crate::fruit_info::DataTable;
use serde_json::Value;

/// Form field carrying the name text input.
pub const NAME_FIELD: &str = "name";
/// Form field carrying the chosen ingredients, repeated once per fruit.
pub const INGREDIENTS_FIELD: &str = "ingredients";
/// Form field naming a chosen ingredient to drop.
pub const REMOVE_FIELD: &str = "remove";
/// Form field set by the submit button.
pub const SUBMIT_FIELD: &str = "submit";

/// One visible element of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Text(String),
    /// A label followed by a value on one line.
    LabeledText {
        label: String,
        value: String,
    },
    TextInput {
        label: String,
        field: &'static str,
        value: String,
    },
    MultiSelect {
        label: String,
        field: &'static str,
        options: Vec<String>,
        selected: Vec<String>,
        max_selections: usize,
    },
    DataTable(DataTable),
    Json(Value),
    Button {
        label: String,
        field: &'static str,
    },
    Error(String),
    Warning(String),
    Success {
        message: String,
        icon: &'static str,
    },
}

/// The output of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    blocks: Vec<Block>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn has_button(&self) -> bool {
        self.blocks.iter().any(|b| matches!(b, Block::Button { .. }))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Warning(msg) => Some(msg.as_str()),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Error(msg) => Some(msg.as_str()),
            _ => None,
        })
    }

    pub fn successes(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Success { message, .. } => Some(message.as_str()),
            _ => None,
        })
    }

    /// Renders the page as a complete HTML document.
    pub fn to_html(&self) -> String {
        html::render_document(self)
    }
}

/// Body served when a render pass fails.
pub fn failure_html() -> String {
    html::render_failure()
}
