use crate::error::Result;
use crate::model::{Cell, RawRow};
use anyhow::Context;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads raw rows from a CSV export. When `path` is `None`, input is taken
/// from stdin.
pub fn read_rows(path: Option<&Path>) -> Result<Vec<RawRow>> {
    let reader: Box<dyn BufRead> = match path {
        None => Box::new(BufReader::new(io::stdin())),
        Some(path) => {
            let f = std::fs::File::open(path)
                .with_context(|| format!("unable to open file {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
    };
    read_rows_from(reader)
}

/// Reads raw rows from any CSV source. The first record is the header row;
/// empty fields become [`Cell::Empty`] so blank values fall through synonym
/// probing instead of winning it.
pub fn read_rows_from(reader: impl io::Read) -> Result<Vec<RawRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .context("unable to read the CSV header row")?
        .clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.context("unable to read a CSV record")?;
        let mut row = RawRow::with_capacity(headers.len());
        for (header, field) in headers.iter().zip(record.iter()) {
            let cell = if field.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(field.to_string())
            };
            row.insert(header.to_string(), cell);
        }
        rows.push(row);
    }
    Ok(rows)
}
