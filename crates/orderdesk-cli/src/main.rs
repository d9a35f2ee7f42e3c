//! Orderdesk CLI - feed extraction inspection tool
//!
//! Loads a local CSV file as a grid (a development stand-in for a decoded
//! upload or a fetched remote range) and runs one of the feed mappings over
//! it, or answers column designator conversions.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use orderdesk::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "orderdesk")]
#[command(
    author,
    version,
    about = "Feed extraction and column tools for the orderdesk back office"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract records from a CSV grid using a feed mapping
    Extract {
        /// Input CSV file standing in for a decoded feed grid
        input: PathBuf,

        /// Feed mapping to apply
        #[arg(short, long, value_enum, default_value = "upload")]
        feed: Feed,

        /// Header rows to skip from the top of the grid
        #[arg(long, default_value = "1")]
        header_rows: usize,

        /// Print extracted records as JSON instead of a count
        #[arg(short, long)]
        json: bool,
    },

    /// Convert column letters to zero-based indices and back
    Columns {
        /// Column letters (e.g. C K AA)
        letters: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Feed {
    /// Uploaded spreadsheet layout (columns C, K, L)
    Upload,
    /// Remote order range layout (columns G, H, I, K, N)
    Orders,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            feed,
            header_rows,
            json,
        } => extract(&input, feed, header_rows, json),
        Commands::Columns { letters } => columns(&letters),
    }
}

fn extract(input: &Path, feed: Feed, header_rows: usize, json: bool) -> Result<()> {
    let grid = load_grid(input)
        .with_context(|| format!("Failed to load grid from '{}'", input.display()))?;

    let extractor = RowExtractor::new(header_rows);
    match feed {
        Feed::Upload => {
            let items = extractor.extract(&grid, &UploadMapping::default(), &SystemClock);
            report(&items, json)
        }
        Feed::Orders => {
            let orders = extractor.extract(&grid, &RemoteOrderMapping, &SystemClock);
            report(&orders, json)
        }
    }
}

fn report<T: Serialize>(records: &[T], json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(records).context("Failed to encode records as JSON")?
        );
    } else {
        println!("{} record(s) extracted", records.len());
    }
    Ok(())
}

fn columns(letters: &[String]) -> Result<()> {
    if letters.is_empty() {
        bail!("No column letters given");
    }

    for letters in letters {
        let col = ColumnRef::parse(letters)
            .with_context(|| format!("Invalid column designator '{letters}'"))?;
        println!("{} = {}", col.to_letters(), col.index());
    }
    Ok(())
}

/// Load a CSV file into a grid, detecting cell types the way the feeds
/// deliver them: blank fields are absent cells, numeric text is numeric.
fn load_grid(path: &Path) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut grid = Grid::new();
    for result in reader.records() {
        let record = result?;
        grid.push_row(record.iter().map(detect_type));
    }
    Ok(grid)
}

/// Detect the type of a CSV field value
fn detect_type(field: &str) -> CellValue {
    let trimmed = field.trim();

    if trimmed.is_empty() {
        return CellValue::Empty;
    }

    match trimmed.to_lowercase().as_str() {
        "true" => return CellValue::Boolean(true),
        "false" => return CellValue::Boolean(false),
        _ => {}
    }

    if let Ok(n) = trimmed.parse::<f64>() {
        return CellValue::Number(n);
    }

    CellValue::string(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_type() {
        assert_eq!(detect_type(""), CellValue::Empty);
        assert_eq!(detect_type("  "), CellValue::Empty);
        assert_eq!(detect_type("42"), CellValue::Number(42.0));
        assert_eq!(detect_type("TRUE"), CellValue::Boolean(true));
        assert_eq!(detect_type("order-1"), CellValue::string("order-1"));
    }

    #[test]
    fn test_load_grid_keeps_ragged_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a,b,c").unwrap();
        writeln!(file, "d,e").unwrap();
        file.flush().unwrap();

        let grid = load_grid(file.path()).unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.row(0).unwrap().len(), 3);
        assert_eq!(grid.row(1).unwrap().len(), 2);
    }
}
