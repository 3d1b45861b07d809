//! Normalizes spreadsheet exports of per-product inventory activity into
//! dense per-day series, and derives multi-product aggregate series from a
//! selected subset for charting.

pub mod aggregate;
pub mod args;
pub mod commands;
mod error;
pub mod import;
pub mod model;
pub mod repository;
mod utils;
pub mod validate;

pub use aggregate::{aggregate, summarize, AggregatePoint, Summary};
pub use error::{Error, Result};
pub use model::{normalize_batch, Cell, DayRecord, NormalizedBatch, Product, RawRow};
pub use repository::ProductRepository;
pub use validate::{validate_rows, Validation};
