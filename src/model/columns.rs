//! Column-label resolution for spreadsheet exports.
//!
//! The synonym lists below are effectively the wire format for input
//! spreadsheets: known exports name their columns in one of these spellings,
//! and resolution probes them top to bottom, case-sensitively, first match
//! wins. Changing an entry or its position breaks compatibility.

use regex::Regex;
use std::sync::LazyLock;

/// The shortest series a product can have. Exports predating day-numbered
/// columns carried exactly three days of data, so short or empty rows still
/// normalize to a usable minimum series.
pub(crate) const MIN_DAYS: u32 = 3;

/// Header synonyms for the product identifier, probed in order.
pub(crate) const ID_COLUMNS: [&str; 6] = [
    "ID",
    "Product ID",
    "ProductID",
    "id",
    "product_id",
    "productId",
];

/// Header synonyms for the product name, probed in order.
pub(crate) const NAME_COLUMNS: [&str; 6] = [
    "Product Name",
    "ProductName",
    "Name",
    "product_name",
    "name",
    "productName",
];

/// Header synonyms for the opening inventory, probed in order.
pub(crate) const OPENING_INVENTORY_COLUMNS: [&str; 5] = [
    "Opening Inventory",
    "Opening Inventory on Day 1",
    "opening_inventory",
    "OpeningInventory",
    "openingInventory",
];

/// The four per-day figures a row can carry for each day of activity.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum DayField {
    ProcurementQty,
    ProcurementPrice,
    SalesQty,
    SalesPrice,
}

pub(crate) const DAY_FIELDS: [DayField; 4] = [
    DayField::ProcurementQty,
    DayField::ProcurementPrice,
    DayField::SalesQty,
    DayField::SalesPrice,
];

impl DayField {
    /// The canonical spreadsheet label for this figure on `day`, e.g.
    /// `Procurement Qty (Day 3)`. Used when reporting missing columns.
    pub(crate) fn label(&self, day: u32) -> String {
        format!("{} (Day {day})", self.words())
    }

    /// The three header spellings for this figure on `day`, probed in order:
    /// parenthesized, spaced, compact-camel.
    pub(crate) fn spellings(&self, day: u32) -> [String; 3] {
        [
            format!("{} (Day {day})", self.words()),
            format!("{} Day {day}", self.words()),
            format!("{}_day{day}", self.camel()),
        ]
    }

    fn words(&self) -> &'static str {
        match self {
            DayField::ProcurementQty => "Procurement Qty",
            DayField::ProcurementPrice => "Procurement Price",
            DayField::SalesQty => "Sales Qty",
            DayField::SalesPrice => "Sales Price",
        }
    }

    fn camel(&self) -> &'static str {
        match self {
            DayField::ProcurementQty => "procurementQty",
            DayField::ProcurementPrice => "procurementPrice",
            DayField::SalesQty => "salesQty",
            DayField::SalesPrice => "salesPrice",
        }
    }
}

/// Matches the word "day" followed by an integer anywhere in a column label.
static DAY_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)day\s*(\d+)").expect("day label pattern"));

/// The highest day number appearing in any of the given column labels, or 0
/// when none carries one. Day numbers too large to represent are ignored.
pub(crate) fn max_day_in_labels<'a, I>(labels: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .flat_map(|label| DAY_LABEL.captures_iter(label))
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
