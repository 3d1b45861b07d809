//! Command handlers for the stocksight CLI.

mod chart;
mod ingest;
mod summary;

use crate::args::InputArgs;
use crate::error::Result;
use crate::model::normalize_batch;
use crate::repository::ProductRepository;
use crate::{import, utils};
use serde::Serialize;
use std::fmt::{Debug, Display};
use tracing::{debug, info};

pub use chart::{chart, Rows};
pub use ingest::{ingest, IngestReport};
pub use summary::summary;

/// The output type for a command: a message describing the outcome plus,
/// optionally, the structured data the command produced.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    message: String,
    structure: Option<T>,
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` and the structured data (if it exists) as
    /// JSON to `debug!`.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }

    /// Write the structured data to stdout, then print the message to
    /// `info!`. For commands whose payload is the deliverable.
    pub fn print_data(&self)
    where
        T: Display,
    {
        if let Some(structure) = self.structure() {
            println!("{structure}");
        }
        info!("{}", self.message);
    }
}

/// Builds a repository from either input surface: normalized products from a
/// JSON file, or raw CSV rows normalized on the spot. An empty `select` list
/// means every product.
pub(crate) fn load_repository(input: &InputArgs, select: &[String]) -> Result<ProductRepository> {
    let products = match input.products() {
        Some(path) => utils::read_json(path)?,
        None => {
            let rows = import::read_rows(input.file())?;
            normalize_batch(&rows).into_products()
        }
    };

    let mut repo = ProductRepository::new();
    repo.replace_all(products);
    if select.is_empty() {
        repo.select_all();
    } else {
        repo.set_selection(select.iter().cloned().collect());
    }
    Ok(repo)
}
