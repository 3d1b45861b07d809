//! Types that represent the core data model, such as `Product` and its
//! per-day activity records.
mod cell;
mod columns;
mod product;

pub use cell::Cell;
pub use product::{normalize_batch, DayRecord, NormalizedBatch, Product};

pub(crate) use columns::{
    max_day_in_labels, DayField, DAY_FIELDS, ID_COLUMNS, MIN_DAYS, NAME_COLUMNS,
    OPENING_INVENTORY_COLUMNS,
};

use std::collections::HashMap;

/// One record from a source spreadsheet, addressable by column label.
///
/// Labels are not known in advance; they are resolved against the synonym
/// tables during normalization. Values are scalar [`Cell`]s.
pub type RawRow = HashMap<String, Cell>;
