use anyhow::{Context, Result};
use log::info;
use packparse::{DescriptionParser, ParserConfig, UnitMatching};
use std::env;
use std::fs;
use std::io::{self, Read, Write};

/// Line-oriented adapter around the parsing core: one description per input
/// line (file argument or stdin), one JSON record per output line. Blank
/// lines are excluded before parsing, mirroring the caller-side contract
/// that empty rows never reach the core.
fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting product description parser");

    let input = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read input file: {}", path))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read descriptions from stdin")?;
            buffer
        }
    };

    let config = ParserConfig {
        unit_matching: if env::var("PACKPARSE_FUZZY_UNITS").is_ok() {
            UnitMatching::Fuzzy {
                min_similarity: packparse::unit_normalizer::DEFAULT_MIN_SIMILARITY,
            }
        } else {
            UnitMatching::Exact
        },
    };
    let parser = DescriptionParser::with_config(config);

    let descriptions: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    info!("Parsing {} descriptions", descriptions.len());

    let records = parser.parse_all(descriptions);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        serde_json::to_writer(&mut out, record).context("failed to serialize record")?;
        writeln!(out)?;
    }

    info!("Wrote {} records", records.len());

    Ok(())
}
