// Category CLI: Lexscrape
//
// Converts one Spanish legal document (local file or URL) into Markdown.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kodegen_tools_lexscrape::{
    ConversionConfig, ConversionConfigBuilder, convert_html_to_markdown, load_source,
};

#[derive(Parser)]
#[command(name = "kodegen-lexscrape")]
#[command(version, about = "Convert Spanish legal HTML documents to Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    kodegen-lexscrape ley.html                     Print Markdown to stdout
    kodegen-lexscrape https://example.org/lo1.html -o lo1.md
    kodegen-lexscrape ley.html --encoding utf-8 --report")]
struct Cli {
    /// Source document: local path or http(s) URL
    #[arg(value_name = "INPUT")]
    input: String,

    /// Write Markdown here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fallback source encoding (default iso-8859-1)
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Ignore charset declarations and always use --encoding
    #[arg(long)]
    force_encoding: bool,

    /// Element name of the document title
    #[arg(long, value_name = "TAG")]
    title_tag: Option<String>,

    /// Element name of structural headings
    #[arg(long, value_name = "TAG")]
    heading_tag: Option<String>,

    /// Print the walk report as JSON on stderr
    #[arg(long)]
    report: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    let base = match &cli.config {
        Some(path) => ConversionConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConversionConfig::default(),
    };

    let mut builder = ConversionConfigBuilder::from(base);
    if let Some(label) = &cli.encoding {
        builder = builder.source_encoding(label.clone());
    }
    if cli.force_encoding {
        builder = builder.force_encoding(true);
    }
    if let Some(tag) = &cli.title_tag {
        builder = builder.title_tag(tag.clone());
    }
    if let Some(tag) = &cli.heading_tag {
        builder = builder.heading_tag(tag.clone());
    }
    Ok(builder.build()?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;

    let source = load_source(&cli.input, &config)
        .await
        .with_context(|| format!("Failed to load {}", cli.input))?;
    let decoded = source.decode(&config)?;
    tracing::info!("Decoded {} as {}", source.origin, decoded.encoding);

    let mut output = convert_html_to_markdown(&decoded.html, &config)?;
    output.source_encoding = Some(decoded.encoding);

    if cli.report {
        eprintln!("{}", serde_json::to_string_pretty(&output.report)?);
    }
    if !output.report.is_clean() {
        tracing::warn!(
            "{} unrecognized nodes were dropped (run with --report for details)",
            output.report.nodes_skipped
        );
    }

    match &cli.output {
        Some(path) => tokio::fs::write(path, output.markdown.as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", output.markdown),
    }

    Ok(())
}
