//! The summary command: headline totals for the selected products.

use crate::aggregate::{aggregate, summarize, Summary};
use crate::args::SummaryArgs;
use crate::commands::{load_repository, Out};
use crate::error::Result;

/// Aggregate the selected products and collapse the series into totals.
pub fn summary(args: &SummaryArgs) -> Result<Out<Summary>> {
    let repo = load_repository(args.input(), args.select())?;
    let selected = repo.selected_products();
    let points = aggregate(&selected);
    let totals = summarize(&points);

    let message = format!(
        "Summarized {} products across {} days",
        selected.len(),
        totals.days
    );
    Ok(Out::new(message, totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::InputArgs;
    use tempfile::TempDir;

    #[test]
    fn test_summary_totals() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.csv");
        std::fs::write(
            &path,
            "\
ID,Product Name,Opening Inventory,Procurement Qty (Day 1),Procurement Price (Day 1),Sales Qty (Day 1),Sales Price (Day 1)
p1,Widget,50,10,2,4,3
",
        )
        .unwrap();

        let args = SummaryArgs::new(InputArgs::new(Some(path), None), Vec::new());
        let out = summary(&args).unwrap();
        let totals = out.structure().unwrap();
        assert_eq!(totals.final_inventory, 56.0);
        assert_eq!(totals.total_procurement, 20.0);
        assert_eq!(totals.total_sales, 12.0);
        assert_eq!(totals.days, 3);
    }

    #[test]
    fn test_summary_from_pre_normalized_products() {
        let dir = TempDir::new().unwrap();
        let csv_path = dir.path().join("export.csv");
        std::fs::write(
            &csv_path,
            "ID,Product Name,Opening Inventory\np1,Widget,100\n",
        )
        .unwrap();
        let json_path = dir.path().join("products.json");

        let ingest_args = crate::args::IngestArgs::new(Some(csv_path), Some(json_path.clone()));
        crate::commands::ingest(&ingest_args).unwrap();

        let args = SummaryArgs::new(InputArgs::new(None, Some(json_path)), Vec::new());
        let out = summary(&args).unwrap();
        assert_eq!(out.structure().unwrap().final_inventory, 100.0);
    }
}
