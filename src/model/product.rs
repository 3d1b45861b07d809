use crate::model::columns::{
    self, DayField, ID_COLUMNS, MIN_DAYS, NAME_COLUMNS, OPENING_INVENTORY_COLUMNS,
};
use crate::model::{Cell, RawRow};
use serde::{Deserialize, Serialize};

/// One day's activity of one kind (procurement or sales) for one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DayRecord {
    day: u32,
    quantity: f64,
    price: f64,
    amount: f64,
}

impl DayRecord {
    fn new(day: u32, quantity: f64, price: f64) -> Self {
        Self {
            day,
            quantity,
            price,
            amount: quantity * price,
        }
    }

    /// 1-based day index within the product's series.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Units moved on this day.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Unit price on this day.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Always `quantity * price`; computed at normalization, never mutated.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// One row of the source table, fully normalized.
///
/// Freshly normalized products are dense: both series hold exactly one record
/// per day from 1 to [`Product::max_day`], ascending, with absent source
/// columns normalized to zeros. Products re-hydrated from a collaborator may
/// have gaps (stores typically keep only non-zero days), which the day
/// lookups tolerate.
///
/// A product is immutable once normalized. A fresh normalization pass
/// replaces the whole collection rather than merging into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Product {
    id: String,
    name: String,
    opening_inventory: f64,
    procurement: Vec<DayRecord>,
    sales: Vec<DayRecord>,
}

impl Product {
    /// Converts one raw spreadsheet row into a normalized product.
    ///
    /// The series length is inferred from the highest day number appearing in
    /// any column label, floored at three days. Identifier, name, and opening
    /// inventory resolve through their synonym tables; `index` is the row's
    /// position in the batch and seeds the positional fallbacks.
    ///
    /// Total over any input: absent or malformed cells degrade to zeros and
    /// fallback strings rather than errors. A row that matched nothing at all
    /// still yields a structurally valid product; callers that care should
    /// inspect the batch for all-zero results.
    pub fn normalize(row: &RawRow, index: usize) -> Self {
        let max_day = columns::max_day_in_labels(row.keys().map(String::as_str)).max(MIN_DAYS);

        let mut procurement = Vec::with_capacity(max_day as usize);
        let mut sales = Vec::with_capacity(max_day as usize);
        for day in 1..=max_day {
            procurement.push(DayRecord::new(
                day,
                day_figure(row, DayField::ProcurementQty, day),
                day_figure(row, DayField::ProcurementPrice, day),
            ));
            sales.push(DayRecord::new(
                day,
                day_figure(row, DayField::SalesQty, day),
                day_figure(row, DayField::SalesPrice, day),
            ));
        }

        Self {
            id: resolve_text(row, &ID_COLUMNS).unwrap_or_else(|| format!("product-{index}")),
            name: resolve_text(row, &NAME_COLUMNS).unwrap_or_else(|| format!("Product {}", index + 1)),
            opening_inventory: resolve_number(row, &OPENING_INVENTORY_COLUMNS).unwrap_or(0.0),
            procurement,
            sales,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn opening_inventory(&self) -> f64 {
        self.opening_inventory
    }

    /// The procurement series, ordered by ascending day.
    pub fn procurement(&self) -> &[DayRecord] {
        &self.procurement
    }

    /// The sales series, ordered by ascending day.
    pub fn sales(&self) -> &[DayRecord] {
        &self.sales
    }

    /// The highest day either series reaches, or 0 for empty series.
    pub fn max_day(&self) -> u32 {
        self.procurement
            .iter()
            .chain(&self.sales)
            .map(|record| record.day)
            .max()
            .unwrap_or(0)
    }

    /// The procurement record for `day`, if the series carries one.
    pub fn procurement_on(&self, day: u32) -> Option<&DayRecord> {
        record_on(&self.procurement, day)
    }

    /// The sales record for `day`, if the series carries one.
    pub fn sales_on(&self, day: u32) -> Option<&DayRecord> {
        record_on(&self.sales, day)
    }
}

// Dense series index directly; sparse (re-hydrated) series fall back to a scan.
fn record_on(series: &[DayRecord], day: u32) -> Option<&DayRecord> {
    if day == 0 {
        return None;
    }
    match series.get(day as usize - 1) {
        Some(record) if record.day == day => Some(record),
        _ => series.iter().find(|record| record.day == day),
    }
}

/// First non-empty cell among the given header synonyms.
fn first_present<'a>(row: &'a RawRow, headers: &[&str]) -> Option<&'a Cell> {
    headers
        .iter()
        .filter_map(|header| row.get(*header))
        .find(|cell| !cell.is_empty())
}

fn resolve_text(row: &RawRow, headers: &[&str]) -> Option<String> {
    first_present(row, headers).and_then(Cell::to_text)
}

// A present but unparsable cell coerces to zero; it does not fall through to
// the next synonym. Only absent and blank cells fall through.
fn resolve_number(row: &RawRow, headers: &[&str]) -> Option<f64> {
    first_present(row, headers).map(|cell| cell.to_number().unwrap_or(0.0))
}

fn day_figure(row: &RawRow, field: DayField, day: u32) -> f64 {
    field
        .spellings(day)
        .iter()
        .filter_map(|header| row.get(header))
        .find(|cell| !cell.is_empty())
        .map(|cell| cell.to_number().unwrap_or(0.0))
        .unwrap_or(0.0)
}

/// The outcome of normalizing a whole batch of raw rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedBatch {
    products: Vec<Product>,
    skipped_rows: usize,
}

impl NormalizedBatch {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// How many rows resolved no product identifier and were dropped.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

/// Normalizes every row that resolves a product identifier.
///
/// Rows with no id column at all are skipped and counted rather than given
/// positional ids; use [`Product::normalize`] directly when every row must
/// yield a product. Duplicate ids across rows are not detected; such rows
/// coexist as distinct products.
pub fn normalize_batch(rows: &[RawRow]) -> NormalizedBatch {
    let mut products = Vec::with_capacity(rows.len());
    let mut skipped_rows = 0;
    for (index, row) in rows.iter().enumerate() {
        if resolve_text(row, &ID_COLUMNS).is_none() {
            skipped_rows += 1;
            continue;
        }
        products.push(Product::normalize(row, index));
    }
    NormalizedBatch {
        products,
        skipped_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, Cell)]) -> RawRow {
        cells
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_minimal_row_gets_three_zeroed_days() {
        let r = row(&[("ID", "p1".into()), ("OpeningInventory", Cell::Number(100.0))]);
        let p = Product::normalize(&r, 0);
        assert_eq!(p.id(), "p1");
        assert_eq!(p.name(), "Product 1");
        assert_eq!(p.opening_inventory(), 100.0);
        assert_eq!(p.procurement().len(), 3);
        assert_eq!(p.sales().len(), 3);
        for series in [p.procurement(), p.sales()] {
            for (ix, record) in series.iter().enumerate() {
                assert_eq!(record.day(), ix as u32 + 1);
                assert_eq!(record.quantity(), 0.0);
                assert_eq!(record.price(), 0.0);
                assert_eq!(record.amount(), 0.0);
            }
        }
    }

    #[test]
    fn test_series_length_follows_highest_day_label() {
        let r = row(&[("ID", "p1".into()), ("Sales Qty (Day 5)", Cell::Number(2.0))]);
        let p = Product::normalize(&r, 0);
        assert_eq!(p.max_day(), 5);
        assert_eq!(p.procurement().len(), 5);
        assert_eq!(p.sales().len(), 5);
        assert_eq!(p.sales_on(5).unwrap().quantity(), 2.0);
        assert_eq!(p.sales_on(4).unwrap().quantity(), 0.0);
    }

    #[test]
    fn test_floor_applies_regardless_of_content() {
        let p = Product::normalize(&RawRow::new(), 0);
        assert_eq!(p.max_day(), 3);
    }

    #[test]
    fn test_id_synonyms_resolve_in_order() {
        let r = row(&[("ID", "first".into()), ("Product ID", "second".into())]);
        assert_eq!(Product::normalize(&r, 0).id(), "first");
    }

    #[test]
    fn test_numeric_id_coerces_to_digit_string() {
        let r = row(&[("ID", Cell::Number(42.0))]);
        assert_eq!(Product::normalize(&r, 0).id(), "42");
    }

    #[test]
    fn test_blank_cell_falls_through_to_next_synonym() {
        let r = row(&[("ID", Cell::Empty), ("Product ID", "p2".into())]);
        assert_eq!(Product::normalize(&r, 0).id(), "p2");
    }

    #[test]
    fn test_positional_fallbacks_apply() {
        let r = row(&[("Opening Inventory", Cell::Number(5.0))]);
        let p = Product::normalize(&r, 3);
        assert_eq!(p.id(), "product-3");
        assert_eq!(p.name(), "Product 4");
    }

    #[test]
    fn test_unparsable_opening_inventory_coerces_to_zero() {
        // "n/a" is present, so it wins the probe and coerces to zero rather
        // than falling through to the parsable synonym after it.
        let r = row(&[
            ("ID", "p".into()),
            ("Opening Inventory", "n/a".into()),
            ("opening_inventory", Cell::Number(9.0)),
        ]);
        assert_eq!(Product::normalize(&r, 0).opening_inventory(), 0.0);
    }

    #[test]
    fn test_day_columns_resolve_across_spellings() {
        let r = row(&[
            ("ID", "p1".into()),
            ("Procurement Qty (Day 1)", Cell::Number(10.0)),
            ("Procurement Price Day 1", Cell::Number(2.0)),
            ("salesQty_day1", Cell::Number(4.0)),
            ("Sales Price (Day 1)", Cell::Number(3.0)),
        ]);
        let p = Product::normalize(&r, 0);
        assert_eq!(p.procurement_on(1).unwrap().quantity(), 10.0);
        assert_eq!(p.procurement_on(1).unwrap().amount(), 20.0);
        assert_eq!(p.sales_on(1).unwrap().amount(), 12.0);
    }

    #[test]
    fn test_parenthesized_spelling_wins() {
        let r = row(&[
            ("ID", "p".into()),
            ("Sales Qty (Day 1)", Cell::Number(7.0)),
            ("salesQty_day1", Cell::Number(9.0)),
        ]);
        assert_eq!(Product::normalize(&r, 0).sales_on(1).unwrap().quantity(), 7.0);
    }

    #[test]
    fn test_currency_formatted_prices_parse() {
        let r = row(&[
            ("ID", "p".into()),
            ("Sales Qty (Day 1)", Cell::Number(2.0)),
            ("Sales Price (Day 1)", "$1,250.50".into()),
        ]);
        let record = *Product::normalize(&r, 0).sales_on(1).unwrap();
        assert_eq!(record.price(), 1250.5);
        assert_eq!(record.amount(), 2501.0);
    }

    #[test]
    fn test_amount_is_quantity_times_price_everywhere() {
        let r = row(&[
            ("ID", "p".into()),
            ("Procurement Qty (Day 2)", Cell::Number(3.0)),
            ("Procurement Price (Day 2)", Cell::Number(1.5)),
            ("Sales Qty (Day 3)", Cell::Number(6.0)),
            ("Sales Price (Day 3)", Cell::Number(0.5)),
        ]);
        let p = Product::normalize(&r, 0);
        for record in p.procurement().iter().chain(p.sales()) {
            assert_eq!(record.amount(), record.quantity() * record.price());
        }
    }

    #[test]
    fn test_batch_skips_rows_without_ids() {
        let rows = vec![
            row(&[("ID", "p1".into())]),
            row(&[("Opening Inventory", Cell::Number(5.0))]),
        ];
        let batch = normalize_batch(&rows);
        assert_eq!(batch.products().len(), 1);
        assert_eq!(batch.products()[0].id(), "p1");
        assert_eq!(batch.skipped_rows(), 1);

        // The single-row contract still yields a product for the skipped row.
        assert_eq!(Product::normalize(&rows[1], 1).id(), "product-1");
    }

    #[test]
    fn test_product_round_trips_through_json() {
        let r = row(&[
            ("ID", "p1".into()),
            ("Product Name", "Widget".into()),
            ("Opening Inventory", Cell::Number(50.0)),
            ("Procurement Qty (Day 1)", Cell::Number(10.0)),
            ("Procurement Price (Day 1)", Cell::Number(2.0)),
        ]);
        let p = Product::normalize(&r, 0);
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn test_sparse_rehydrated_series_resolve_by_day_value() {
        // Collaborators store only non-zero days, so re-hydrated series can
        // have gaps that positional indexing would misread.
        let json = r#"{
            "id": "a", "name": "A", "opening_inventory": 10.0,
            "procurement": [{"day": 2, "quantity": 3.0, "price": 1.0, "amount": 3.0}],
            "sales": []
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.procurement_on(1).is_none());
        assert_eq!(p.procurement_on(2).unwrap().quantity(), 3.0);
        assert_eq!(p.max_day(), 2);
    }
}
