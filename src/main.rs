mod fetch;
mod parser;
mod records;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fetch::DocketKind;
use parser::roster::Roster;
use records::CaseRecord;

#[derive(Parser)]
#[command(name = "scotus_docket", about = "SCOTUS applications-and-motions docket extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a docket page from supremecourt.gov and print the parsed case as JSON
    Fetch {
        /// Court term (full year, 2003 or later)
        term: i32,
        /// Docket number within the term
        number: u32,
        /// Look in the motions series instead of applications
        #[arg(long)]
        motion: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Parse a saved docket HTML file and print the case as JSON
    Parse {
        /// Path to a docket .htm file
        path: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let roster = Roster::default();

    match cli.command {
        Commands::Fetch {
            term,
            number,
            motion,
            pretty,
        } => {
            let kind = if motion {
                DocketKind::Motion
            } else {
                DocketKind::Application
            };
            let client = reqwest::Client::new();
            match fetch::fetch_docket(&client, term, number, kind).await? {
                None => println!("No such docket: term {term}, number {number}"),
                Some(html) => {
                    let case = parser::parse_document(&html, &roster)?;
                    print_case(&case, pretty)?;
                }
            }
        }
        Commands::Parse { path, pretty } => {
            let html = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let case = parser::parse_document(&html, &roster)?;
            print_case(&case, pretty)?;
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn print_case(case: &CaseRecord, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(case)?
    } else {
        serde_json::to_string(case)?
    };
    println!("{json}");
    Ok(())
}
