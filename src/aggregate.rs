//! Multi-product aggregate series for charting.

use crate::model::{Product, MIN_DAYS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// One day's combined figures across the selected products.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AggregatePoint {
    /// 1-based day index.
    pub day: u32,
    /// Total running inventory through this day, in units.
    pub inventory: f64,
    /// Total procurement spend on this day.
    pub procurement: f64,
    /// Total sales revenue on this day.
    pub sales: f64,
}

/// Computes the per-day aggregate series for the given products.
///
/// The horizon is the highest day any selected product reaches, floored at
/// three days. An empty selection yields an empty series so callers can
/// render an empty state instead of a zeroed chart.
///
/// Running inventory is opening inventory plus cumulative procurement
/// quantity minus cumulative sales quantity. A product whose series ends
/// before the horizon holds its last-known inventory flat and contributes
/// nothing to later procurement or sales totals.
///
/// Pure over its input: repeated calls on the same products yield the same
/// series, and nothing is cached across calls.
pub fn aggregate(selected: &[Product]) -> Vec<AggregatePoint> {
    if selected.is_empty() {
        return Vec::new();
    }

    let horizon = selected
        .iter()
        .map(Product::max_day)
        .max()
        .unwrap_or(0)
        .max(MIN_DAYS);

    // One running-inventory accumulator per product, carried across the day
    // loop. Additions happen in day order, so the result matches a full
    // per-day recomputation.
    let mut running: Vec<f64> = selected.iter().map(Product::opening_inventory).collect();

    let mut points = Vec::with_capacity(horizon as usize);
    for day in 1..=horizon {
        let mut point = AggregatePoint {
            day,
            inventory: 0.0,
            procurement: 0.0,
            sales: 0.0,
        };
        for (ix, product) in selected.iter().enumerate() {
            if let Some(record) = product.procurement_on(day) {
                running[ix] += record.quantity();
                point.procurement += record.amount();
            }
            if let Some(record) = product.sales_on(day) {
                running[ix] -= record.quantity();
                point.sales += record.amount();
            }
            point.inventory += running[ix];
        }
        points.push(point);
    }
    points
}

/// Headline totals for an aggregate series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    /// Units in stock at the end of the series.
    pub final_inventory: f64,
    /// Spend across the whole series.
    pub total_procurement: f64,
    /// Revenue across the whole series.
    pub total_sales: f64,
    /// Number of days covered.
    pub days: u32,
}

/// Collapses an aggregate series into its headline totals.
pub fn summarize(points: &[AggregatePoint]) -> Summary {
    Summary {
        final_inventory: points.last().map(|point| point.inventory).unwrap_or(0.0),
        total_procurement: points.iter().map(|point| point.procurement).sum(),
        total_sales: points.iter().map(|point| point.sales).sum(),
        days: points.len() as u32,
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Final inventory:   {} units",
            format_num::format_num!(",.0", self.final_inventory)
        )?;
        writeln!(
            f,
            "Total procurement: ${}",
            format_num::format_num!(",.2", self.total_procurement)
        )?;
        writeln!(
            f,
            "Total sales:       ${}",
            format_num::format_num!(",.2", self.total_sales)
        )?;
        write!(f, "Days covered:      {}", self.days)
    }
}
