//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use assethub_entity::bulk::BulkIdResponse;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One bulk result rendered as a table row.
#[derive(Debug, Serialize, Tabled)]
struct BulkRow {
    /// Asset ID
    id: String,
    /// Outcome
    success: bool,
    /// Failure reason
    error: String,
}

/// Print bulk edit results, one line per requested id
pub fn print_results(results: &[BulkIdResponse], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<BulkRow> = results
                .iter()
                .map(|r| BulkRow {
                    id: r.id.to_string(),
                    success: r.success,
                    error: r.error.map(|e| e.to_string()).unwrap_or_default(),
                })
                .collect();
            print_list(&rows, format);

            let succeeded = results.iter().filter(|r| r.success).count();
            println!("{succeeded}/{} succeeded", results.len());
        }
        OutputFormat::Json => print_json(results),
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(items),
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + Tabled>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(std::slice::from_ref(item))),
        OutputFormat::Json => print_json(item),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Failed to serialize output: {e}")),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}
