//! The ingest command: validate and normalize a spreadsheet export.

use crate::args::IngestArgs;
use crate::commands::Out;
use crate::error::Result;
use crate::model::normalize_batch;
use crate::validate::validate_rows;
use crate::{import, utils};
use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

/// What an ingest run did, for the caller's records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IngestReport {
    batch_id: Uuid,
    received_at: DateTime<Utc>,
    products_processed: usize,
    rows_skipped: usize,
    max_days_detected: u32,
    warnings: Vec<String>,
}

impl IngestReport {
    pub fn batch_id(&self) -> Uuid {
        self.batch_id
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    pub fn products_processed(&self) -> usize {
        self.products_processed
    }

    pub fn rows_skipped(&self) -> usize {
        self.rows_skipped
    }

    pub fn max_days_detected(&self) -> u32 {
        self.max_days_detected
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Read, validate and normalize a CSV export. Batches that fail format
/// validation are refused before normalization; id-less rows are skipped and
/// counted. With `--out`, the normalized products are written as JSON for
/// later `chart`/`summary` runs.
pub fn ingest(args: &IngestArgs) -> Result<Out<IngestReport>> {
    let rows = import::read_rows(args.file())?;

    let validation = validate_rows(&rows);
    for warning in validation.warnings() {
        warn!("{warning}");
    }
    if !validation.is_valid() {
        bail!(
            "spreadsheet format validation failed: {}",
            validation.errors().join("; ")
        );
    }

    let batch = normalize_batch(&rows);
    if batch.products().is_empty() {
        bail!("no processable product rows found in the spreadsheet");
    }
    if batch.skipped_rows() > 0 {
        warn!(
            "{} row(s) resolved no product id and were skipped",
            batch.skipped_rows()
        );
    }

    if let Some(out_path) = args.out() {
        let products = batch.products();
        utils::write_json(out_path, &products)?;
    }

    let report = IngestReport {
        batch_id: Uuid::new_v4(),
        received_at: Utc::now(),
        products_processed: batch.products().len(),
        rows_skipped: batch.skipped_rows(),
        max_days_detected: validation.max_days(),
        warnings: validation.warnings().to_vec(),
    };
    let message = format!(
        "Processed {} products covering {} days of data",
        report.products_processed, report.max_days_detected
    );
    Ok(Out::new(message, report))
}
