//! Output formatting for human and JSON modes
//!
//! Command results are plain serializable structs that can be rendered either
//! as human-readable text or as machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::geometry::Vec3f;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of drawing from a weighted table
#[derive(Debug, Serialize)]
pub struct SampleResult {
    /// Table the draws came from (`None` for inline entries)
    pub table: Option<String>,
    /// Whether draws were made without replacement
    pub unique: bool,
    /// Drawn entries, in draw order
    pub draws: Vec<String>,
}

/// An entry and its weight
#[derive(Debug, Serialize)]
pub struct WeightedEntry {
    /// Entry name
    pub name: String,
    /// Entry weight
    pub weight: f32,
}

/// Configured table summary
#[derive(Debug, Serialize)]
pub struct TableInfo {
    /// Table name
    pub name: String,
    /// Number of entries
    pub entries: usize,
    /// Sum of entry weights
    pub total_weight: f32,
    /// Why the table cannot be used, if it is broken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of listing configured tables
#[derive(Debug, Serialize)]
pub struct TableListResult {
    /// Config file the tables were read from
    pub source: String,
    /// Tables in name order
    pub tables: Vec<TableInfo>,
}

/// Result of a vector computation
#[derive(Debug, Serialize)]
pub struct VectorResult {
    /// What was computed (`look`, `raycast`, `closest`)
    pub operation: String,
    /// The resulting point or direction (`None` on a miss or parallel lines)
    pub vector: Option<Vec3f>,
}

/// Generic result carrying a single line of text
#[derive(Debug, Serialize)]
pub struct TextResult {
    /// The text
    pub text: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl SampleResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for draw in &self.draws {
                    println!("{draw}");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl WeightedEntry {
    /// Render a weighted ordering of entries
    pub fn render_all(entries: &[Self], mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for (rank, entry) in entries.iter().enumerate() {
                    println!("{:>3}. {} {}", rank + 1, entry.name, format!("({})", entry.weight).dimmed());
                }
            },
            OutputMode::Json => print_json(&entries),
        }
    }
}

impl TableListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.tables.is_empty() {
            println!("No tables configured in {}.", self.source);
            return;
        }

        println!("{}\n", format!("Tables ({})", self.source).bold());
        for table in &self.tables {
            match &table.error {
                Some(error) => println!("  {}  {}", table.name.bold(), error.red()),
                None => println!(
                    "  {}  {} entries, total weight {}",
                    table.name.bold(),
                    table.entries,
                    table.total_weight
                ),
            }
        }
    }
}

impl VectorResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.vector {
                Some(v) => println!("{v}"),
                None => println!("{}", "no result".yellow()),
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl TextResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.text),
            OutputMode::Json => print_json(self),
        }
    }
}
