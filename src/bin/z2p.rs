//! Citesub CLI - Zotero scannable cite to Pandoc Markdown citation converter

#[cfg(feature = "cli")]
use citesub::{scannable_to_pandoc_with_report, BibliographyIndex};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "z2p")]
#[command(version)]
#[command(about = "Citesub - Zotero scannable cite to Pandoc Markdown citation converter", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Bibliography export path (JSON array of {"zoteroKey", "id"} records)
    #[arg(short, long)]
    bib: Option<String>,

    /// Write a cited-vs-exported report JSON to this path
    #[arg(long)]
    report: Option<String>,

    /// Print the collected unique keys instead of the document
    #[arg(long)]
    list_keys: bool,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // Load the bibliography export; without one, every citation falls back
    // to its raw unique key.
    let index = match cli.bib {
        Some(ref path) => {
            let json = fs::read_to_string(path)?;
            match BibliographyIndex::from_json(&json) {
                Ok(index) => index,
                Err(e) => {
                    eprintln!("✗ {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => BibliographyIndex::new(),
    };

    // Convert
    let (result, report) = match scannable_to_pandoc_with_report(&input, &index) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = cli.report.as_ref() {
        let serialized = serde_json::to_string_pretty(&report)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        fs::write(path, serialized)?;
        eprintln!("✓ Report written to: {}", path);
    }

    let rendered = if cli.list_keys {
        result
            .collected
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        result.content
    };

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", rendered)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", rendered);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install citesub --features cli");
    eprintln!("  z2p [OPTIONS] [INPUT_FILE]");
}
