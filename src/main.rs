//! docmd command-line interface

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;

use docmd::{ExportFormat, analyze, convert, document, extract};

#[derive(Parser)]
#[command(name = "docmd")]
#[command(version)]
#[command(about = "Convert Word .docx documents to Markdown", long_about = None)]
struct Cli {
    /// Input .docx file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (defaults to <input-stem>.md for Markdown, stdout otherwise)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value = "markdown")]
    export: ExportFormat,

    /// Print a structure report instead of converting
    #[arg(long)]
    analyze: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if !cli.input.exists() {
        bail!("input file not found: {}", cli.input.display());
    }

    if cli.analyze {
        let doc = document::load_document(&cli.input)
            .with_context(|| format!("failed to analyze {}", cli.input.display()))?;
        print!("{}", analyze::analyze_document(&doc).render());
        return Ok(());
    }

    match cli.export {
        ExportFormat::Markdown => {
            let result = convert::convert_file(&cli.input, cli.output.as_deref())
                .with_context(|| format!("failed to convert {}", cli.input.display()))?;

            match result {
                Some(conversion) => {
                    println!(
                        "wrote {} ({} bytes)",
                        conversion.output_path.display(),
                        conversion.bytes_written
                    );
                }
                None => bail!(
                    "no content could be extracted from {}",
                    cli.input.display()
                ),
            }
        }
        ExportFormat::Text => {
            let Some(extraction) = extract::extract_content(&cli.input) else {
                bail!(
                    "no content could be extracted from {}",
                    cli.input.display()
                );
            };
            emit(cli.output.as_deref(), &extraction.content)?;
        }
        ExportFormat::Json => {
            let doc = document::load_document(&cli.input)
                .with_context(|| format!("failed to load {}", cli.input.display()))?;
            let json = serde_json::to_string_pretty(&doc)?;
            emit(cli.output.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn emit(output: Option<&std::path::Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{content}"),
    }
    Ok(())
}
