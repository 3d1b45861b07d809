//! Pre-normalization shape checks for a raw-row batch.
//!
//! Normalization itself is total and never errors, so a batch that matched no
//! columns would silently become all-zero products. These checks run before
//! normalization to surface that as user-facing errors and warnings instead.
//! They gate only the ingest command; the library path never requires them.

use crate::model::{
    max_day_in_labels, RawRow, DAY_FIELDS, ID_COLUMNS, MIN_DAYS, NAME_COLUMNS,
    OPENING_INVENTORY_COLUMNS,
};
use serde::Serialize;
use std::collections::HashSet;

/// The outcome of validating a batch of raw rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Validation {
    errors: Vec<String>,
    warnings: Vec<String>,
    max_days: u32,
    total_rows: usize,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The day horizon detected from the batch's column labels, floored at
    /// the minimum series length.
    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }
}

/// Checks that a batch looks like a product spreadsheet.
pub fn validate_rows(rows: &[RawRow]) -> Validation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let columns: HashSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys())
        .map(String::as_str)
        .collect();

    let required: [(&str, &[&str]); 3] = [
        ("ID", &ID_COLUMNS),
        ("Product Name", &NAME_COLUMNS),
        ("Opening Inventory", &OPENING_INVENTORY_COLUMNS),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, synonyms)| !synonyms.iter().any(|name| columns.contains(name)))
        .map(|(label, _)| *label)
        .collect();
    if !missing.is_empty() {
        errors.push(format!("Missing required columns: {}", missing.join(", ")));
    }

    let max_days = max_day_in_labels(columns.iter().copied()).max(MIN_DAYS);

    let mut missing_day_columns = Vec::new();
    for day in 1..=max_days {
        for field in DAY_FIELDS {
            let found = field
                .spellings(day)
                .iter()
                .any(|spelling| columns.contains(spelling.as_str()));
            if !found {
                missing_day_columns.push(field.label(day));
            }
        }
    }
    if !missing_day_columns.is_empty() {
        let shown = missing_day_columns
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        let ellipsis = if missing_day_columns.len() > 3 { "..." } else { "" };
        warnings.push(format!(
            "Some day-specific columns are missing: {shown}{ellipsis}"
        ));
    }

    if rows.is_empty() {
        errors.push("The spreadsheet contains no data rows".to_string());
    }

    if rows.len() > 1000 {
        warnings.push(format!(
            "Large dataset detected ({} rows). Processing may take longer.",
            rows.len()
        ));
    }

    // Sanity check on day numbers inferred from the labels.
    if max_days > 365 {
        warnings.push(format!(
            "Detected {max_days} days - this seems unusually high. Please verify your column names."
        ));
    } else if max_days > 30 {
        warnings.push(format!("Detected {max_days} days of data."));
    }

    Validation {
        errors,
        warnings,
        max_days,
        total_rows: rows.len(),
    }
}
