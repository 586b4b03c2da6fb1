use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use spendsort_core::{ClassificationResult, NormalizedRecord, StatementType};
use spendsort_ingest::dispatch;
use std::fs;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "spendsort", version, about = "Sort statement exports into wants/needs tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one or more statement CSVs and print the two tables
    Classify {
        /// Statement input as <statement type>=<path>; repeat to aggregate
        #[arg(long = "input", value_name = "TYPE=PATH", required = true)]
        inputs: Vec<String>,

        /// Sort each table ascending by date before printing
        #[arg(long)]
        sort: bool,

        /// Print JSON instead of text tables
        #[arg(long)]
        json: bool,

        /// Print positional CSV rows (bucket,description,amount,category,date)
        #[arg(long)]
        csv: bool,
    },

    /// List the supported statement type labels
    Types,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Classify { inputs, sort, json, csv } => {
            let mut combined = ClassificationResult::default();
            for input in &inputs {
                let (label, path) = split_input(input)?;
                combined.absorb(classify_file(label, Path::new(path))?);
            }

            if sort {
                sort_by_date(&mut combined.wants);
                sort_by_date(&mut combined.needs);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&combined)?);
            } else if csv {
                write_csv(&combined)?;
            } else {
                print_table("wants", &combined.wants);
                print_table("needs", &combined.needs);
            }
        }

        Command::Types => {
            for statement in StatementType::ALL {
                println!("{}", statement.label());
            }
        }
    }

    Ok(())
}

fn split_input(input: &str) -> Result<(&str, &str)> {
    input
        .split_once('=')
        .with_context(|| format!("invalid --input '{input}' (expected TYPE=PATH)"))
}

fn classify_file(label: &str, path: &Path) -> Result<ClassificationResult> {
    if !path.exists() {
        bail!("CSV not found: {}", path.display());
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(dispatch::classify(&text, label)?)
}

/// Ascending by parsed date; records with unparsable dates keep their
/// insertion order at the end.
fn sort_by_date(records: &mut [NormalizedRecord]) {
    records.sort_by_key(|r| parse_date(&r.date).unwrap_or(NaiveDate::MAX));
}

/// The date formats the supported institutions emit.
fn parse_date(s: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
    FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

fn print_table(name: &str, records: &[NormalizedRecord]) {
    println!("{name} ({} records)", records.len());
    for record in records {
        let (description, amount, category, date) = record.as_row();
        println!("  {date:<12} {amount:>10.2}  {category:<16} {description}");
    }
}

fn write_csv(result: &ClassificationResult) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record(["bucket", "description", "amount", "category", "date"])?;
    for (bucket, records) in [("wants", &result.wants), ("needs", &result.needs)] {
        for record in records {
            let (description, amount, category, date) = record.as_row();
            wtr.write_record([bucket, description, &amount.to_string(), category, date])?;
        }
    }
    wtr.flush()?;
    Ok(())
}
