//! Sheet Fluent CLI - number format catalog tool

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use sheet_fluent_format::{
    FormatCatalog, FormatCategory, FormatInference, FormatPolicy, InputValue, NumericPolicy,
    UnclassifiedPolicy,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheet-fluent")]
#[command(author, version, about = "Inspect and validate number format catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every category and its pattern
    Catalog {
        /// Catalog JSON file (default: built-in en-ZA catalog)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Check that a catalog file defines every category
    Check {
        /// Catalog JSON file
        input: PathBuf,
    },

    /// Print the pattern of one category
    Resolve {
        /// Category name (e.g. "Currency", "short_date")
        category: String,

        /// Catalog JSON file (default: built-in en-ZA catalog)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show the category and pattern inferred for a value
    Infer {
        /// Value to classify
        value: String,

        /// How to interpret the value
        #[arg(short, long, value_enum, default_value_t = ValueKind::Auto)]
        kind: ValueKind,

        /// Format numbers as Number instead of ShortDate
        #[arg(long)]
        numeric_as_number: bool,

        /// Leave unrecognised values unformatted instead of General
        #[arg(long)]
        no_format: bool,

        /// Catalog JSON file (default: built-in en-ZA catalog)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ValueKind {
    /// Date, then number, then text
    Auto,
    Date,
    Number,
    Text,
    Empty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { file } => print_catalog(file.as_deref()),
        Commands::Check { input } => check_catalog(&input),
        Commands::Resolve { category, file } => resolve_category(&category, file.as_deref()),
        Commands::Infer {
            value,
            kind,
            numeric_as_number,
            no_format,
            file,
        } => {
            let inference = FormatInference::new()
                .numeric(if numeric_as_number {
                    NumericPolicy::Number
                } else {
                    NumericPolicy::LegacyShortDate
                })
                .unclassified(if no_format {
                    UnclassifiedPolicy::NoFormat
                } else {
                    UnclassifiedPolicy::General
                });
            infer_value(&value, kind, inference, file.as_deref())
        }
    }
}

fn load_catalog(file: Option<&Path>) -> Result<FormatCatalog> {
    match file {
        Some(path) => FormatCatalog::from_path(path)
            .with_context(|| format!("Failed to load catalog '{}'", path.display())),
        None => FormatCatalog::builtin().context("Built-in catalog is invalid"),
    }
}

fn print_catalog(file: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(file)?;

    if let Some(locale) = catalog.locale() {
        println!("Locale: {}", locale);
    }
    for category in FormatCategory::ALL {
        println!("{}\t{}", category, catalog.resolve(category)?);
    }

    Ok(())
}

fn check_catalog(input: &Path) -> Result<()> {
    // Loading validates completeness; the error lists missing categories
    let catalog = FormatCatalog::from_path(input)
        .with_context(|| format!("'{}' is not a valid catalog", input.display()))?;

    eprintln!(
        "'{}' defines all {} categories (locale: {})",
        input.display(),
        catalog.len(),
        catalog.locale().unwrap_or("none")
    );
    Ok(())
}

fn resolve_category(name: &str, file: Option<&Path>) -> Result<()> {
    let category: FormatCategory = name.parse()?;
    let catalog = load_catalog(file)?;
    let pattern = catalog.resolve(category)?;

    println!("{}", pattern);
    Ok(())
}

fn infer_value(
    raw: &str,
    kind: ValueKind,
    inference: FormatInference,
    file: Option<&Path>,
) -> Result<()> {
    let value = parse_value(raw, kind)?;
    let policy = FormatPolicy::new(load_catalog(file)?).with_inference(inference);

    match policy.infer(&value) {
        Some(category) => {
            let pattern = policy.resolve(category)?;
            println!("{}\t{}", category, pattern);
        }
        None => {
            println!("<none>");
            eprintln!("No format inferred; existing format would be kept");
        }
    }

    Ok(())
}

/// Turn command-line text into an [`InputValue`]
fn parse_value(raw: &str, kind: ValueKind) -> Result<InputValue> {
    let value = match kind {
        ValueKind::Auto => {
            if let Some(dt) = parse_temporal(raw) {
                InputValue::Temporal(dt)
            } else if let Ok(n) = raw.trim().parse::<f64>() {
                InputValue::from(n)
            } else if raw.is_empty() {
                InputValue::Empty
            } else {
                InputValue::text(raw)
            }
        }
        ValueKind::Date => match parse_temporal(raw) {
            Some(dt) => InputValue::Temporal(dt),
            None => bail!("'{}' is not a date (expected YYYY-MM-DD)", raw),
        },
        ValueKind::Number => {
            let n: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("'{}' is not a number", raw))?;
            InputValue::from(n)
        }
        ValueKind::Text => InputValue::text(raw),
        ValueKind::Empty => InputValue::Empty,
    };
    Ok(value)
}

fn parse_temporal(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
