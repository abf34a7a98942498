//! CLI application for contact extraction from free-form text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use console::style;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use cardex_core::{ContactExtractor, ContactParser, ExtractionOutcome};
use cardex_model::{HttpModelLoader, ModelHandle};

/// Extract contact information from pasted Persian free text
#[derive(Parser)]
#[command(name = "cardex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file with the text block, or '-' for stdin
    input: PathBuf,

    /// NER model endpoint URL
    #[arg(short, long)]
    endpoint: String,

    /// Bearer token for the model endpoint
    #[arg(long)]
    token: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Accept suffix-matching BIO continuation (legacy decoder behavior)
    #[arg(long)]
    loose_continuation: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let text = read_input(&cli.input)?;
    debug!("read {} characters of input", text.chars().count());

    let mut loader = HttpModelLoader::new(&cli.endpoint);
    if let Some(token) = &cli.token {
        loader = loader.with_bearer(token.clone());
    }

    let parser = ContactParser::new(ModelHandle::new(Arc::new(loader)))
        .with_loose_continuation(cli.loose_continuation);

    let outcome = parser.extract(&text).await;

    for warning in &outcome.warnings {
        eprintln!("{} {}", style("!").yellow(), warning);
    }

    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&outcome.info)?,
        OutputFormat::Text => format_text(&outcome),
    };

    if let Some(output_path) = &cli.output {
        fs::write(output_path, &rendered)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{rendered}");
    }

    if !outcome.status.is_complete() {
        anyhow::bail!("extraction incomplete: {}", outcome.status);
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        Ok(fs::read_to_string(path)?)
    }
}

fn format_text(outcome: &ExtractionOutcome) -> String {
    let info = &outcome.info;
    let mut output = String::new();

    output.push_str(&format!("Name:     {} {}\n", info.first_name, info.last_name));
    output.push_str(&format!("Company:  {}\n", info.company));
    output.push_str(&format!("Position: {}\n", info.position));

    if !info.phone_numbers.is_empty() {
        output.push_str("Phones:\n");
        for phone in &info.phone_numbers {
            output.push_str(&format!("  {} ({})\n", phone.phone_number, phone.phone_type));
        }
    }

    if !info.email_addresses.is_empty() {
        output.push_str("Emails:\n");
        for email in &info.email_addresses {
            output.push_str(&format!("  {} ({})\n", email.email_address, email.email_type));
        }
    }

    if !info.notes.is_empty() {
        output.push_str(&format!("Notes:    {}\n", info.notes));
    }

    output.push_str(&format!(
        "\nStatus: {} ({}ms)\n",
        outcome.status, outcome.processing_time_ms
    ));

    output
}
