//! The chart command: aggregate selected products into a per-day series.

use crate::aggregate::{aggregate, AggregatePoint};
use crate::args::{ChartArgs, Format};
use crate::commands::{load_repository, Out};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// Aggregate chart data in the requested output format.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rows {
    /// JSON array of aggregate points.
    Json(serde_json::Value),
    /// Fixed-width text table as a single formatted string.
    Table(String),
    /// CSV data as a properly escaped string.
    Csv(String),
}

impl Debug for Rows {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rows::Json(value) => write!(f, "Rows::Json({value:?})"),
            Rows::Table(s) => write!(f, "Rows::Table({} chars)", s.len()),
            Rows::Csv(s) => write!(f, "Rows::Csv({} chars)", s.len()),
        }
    }
}

impl Display for Rows {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rows::Json(value) => match serde_json::to_string_pretty(value) {
                Ok(s) => write!(f, "{s}"),
                Err(_) => write!(f, "{value:?}"),
            },
            Rows::Table(s) => write!(f, "{s}"),
            Rows::Csv(s) => write!(f, "{s}"),
        }
    }
}

/// Build the product set, restrict it to the selection, aggregate, and render
/// the series in the requested format.
pub fn chart(args: &ChartArgs) -> Result<Out<Rows>> {
    let repo = load_repository(args.input(), args.select())?;
    let selected = repo.selected_products();
    let points = aggregate(&selected);

    let message = if points.is_empty() {
        "No products selected; nothing to chart".to_string()
    } else {
        format!(
            "Aggregated {} products across {} days",
            selected.len(),
            points.len()
        )
    };
    let rows = render(&points, args.format())?;
    Ok(Out::new(message, rows))
}

fn render(points: &[AggregatePoint], format: Format) -> Result<Rows> {
    Ok(match format {
        Format::Json => Rows::Json(serde_json::to_value(points)?),
        Format::Csv => Rows::Csv(to_csv(points)?),
        Format::Table => Rows::Table(to_table(points)),
    })
}

fn to_csv(points: &[AggregatePoint]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for point in points {
        writer.serialize(point)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("unable to flush csv writer: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}

fn to_table(points: &[AggregatePoint]) -> String {
    let mut table = format!(
        "{:>4}  {:>14}  {:>14}  {:>14}",
        "Day", "Inventory", "Procurement", "Sales"
    );
    for point in points {
        table.push('\n');
        table.push_str(&format!(
            "{:>4}  {:>14.2}  {:>14.2}  {:>14.2}",
            point.day, point.inventory, point.procurement, point.sales
        ));
    }
    table
}
