//! These structs provide the CLI interface for the stocksight CLI.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

/// stocksight: normalize spreadsheet exports of inventory activity and chart
/// multi-product aggregates.
///
/// Feed it a CSV export with one row per product. Column naming is flexible:
/// ids, names and opening inventory resolve through a list of known
/// spellings, and per-day activity columns like "Procurement Qty (Day 2)" are
/// discovered by scanning the headers for day numbers. Any number of days is
/// supported; short rows still get a three-day minimum series.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate and normalize a spreadsheet export.
    ///
    /// Reads CSV from --file (or stdin), refuses batches that fail format
    /// validation, and reports what was processed. Use --out to write the
    /// normalized products to a JSON file for later chart/summary runs.
    Ingest(IngestArgs),
    /// Aggregate selected products into a per-day chart series.
    Chart(ChartArgs),
    /// Print headline totals for the selected products.
    Summary(SummaryArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, env = "STOCKSIGHT_LOG_LEVEL", default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
}

impl Common {
    pub fn new(log_level: LevelFilter) -> Self {
        Self { log_level }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

/// Args for the `stocksight ingest` command.
#[derive(Debug, Parser, Clone)]
pub struct IngestArgs {
    /// The CSV file to read. If not supplied, input will be taken from stdin.
    #[clap(long = "file", short = 'f')]
    file: Option<PathBuf>,

    /// Write the normalized products to this path as JSON.
    #[clap(long = "out", short = 'o')]
    out: Option<PathBuf>,
}

impl IngestArgs {
    pub fn new(file: Option<PathBuf>, out: Option<PathBuf>) -> Self {
        Self { file, out }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn out(&self) -> Option<&Path> {
        self.out.as_deref()
    }
}

/// Where the product data for a read command comes from.
#[derive(Debug, Parser, Clone)]
pub struct InputArgs {
    /// A CSV export of raw rows. If neither input is supplied, CSV is read
    /// from stdin.
    #[clap(long = "file", short = 'f', conflicts_with = "products")]
    file: Option<PathBuf>,

    /// A JSON file of already-normalized products, as written by
    /// `ingest --out`.
    #[clap(long = "products", short = 'p')]
    products: Option<PathBuf>,
}

impl InputArgs {
    pub fn new(file: Option<PathBuf>, products: Option<PathBuf>) -> Self {
        Self { file, products }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn products(&self) -> Option<&Path> {
        self.products.as_deref()
    }
}

/// Args for the `stocksight chart` command.
#[derive(Debug, Parser, Clone)]
pub struct ChartArgs {
    #[clap(flatten)]
    input: InputArgs,

    /// Product ids to include, comma separated. Defaults to every product.
    #[clap(long, short = 's', value_delimiter = ',')]
    select: Vec<String>,

    /// The output format for the aggregate series.
    #[clap(long, default_value_t = Format::Table)]
    format: Format,
}

impl ChartArgs {
    pub fn new(input: InputArgs, select: Vec<String>, format: Format) -> Self {
        Self {
            input,
            select,
            format,
        }
    }

    pub fn input(&self) -> &InputArgs {
        &self.input
    }

    pub fn select(&self) -> &[String] {
        &self.select
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

/// Args for the `stocksight summary` command.
#[derive(Debug, Parser, Clone)]
pub struct SummaryArgs {
    #[clap(flatten)]
    input: InputArgs,

    /// Product ids to include, comma separated. Defaults to every product.
    #[clap(long, short = 's', value_delimiter = ',')]
    select: Vec<String>,
}

impl SummaryArgs {
    pub fn new(input: InputArgs, select: Vec<String>) -> Self {
        Self { input, select }
    }

    pub fn input(&self) -> &InputArgs {
        &self.input
    }

    pub fn select(&self) -> &[String] {
        &self.select
    }
}

/// The output format for chart data.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Csv,
    #[default]
    Table,
}

serde_plain::derive_display_from_serialize!(Format);
serde_plain::derive_fromstr_from_deserialize!(Format);
