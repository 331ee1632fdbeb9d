use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use analysis_render::{AnalysisResponse, Config, Error};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "analysis-render", version)]
#[command(about = "Render Markdown-like analysis text to HTML")]
struct Cli {
    /// Input file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output HTML file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat input as a JSON response with an `analysis` field
    #[arg(long)]
    json: bool,

    /// Emit a complete HTML page
    #[arg(long)]
    standalone: bool,

    /// Config file (defaults to analysis-render.toml in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at info level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };
    if cli.standalone {
        config.output.standalone = true;
    }

    let input = read_input(cli.input.as_ref())?;
    let html = render_input(&input, cli.json, &config)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &html)?;
            tracing::info!(path = %path.display(), bytes = html.len(), "wrote HTML");
        }
        None => io::stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}

/// --verbose enables INFO level, otherwise use `RUST_LOG` directives or default to WARN
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

/// Render raw analysis text, or the `analysis` field of a JSON response.
fn render_input(input: &str, json: bool, config: &Config) -> Result<String, Error> {
    if json {
        let response = AnalysisResponse::from_json(input)?;
        Ok(analysis_render::render_page(response.text(), config))
    } else {
        Ok(analysis_render::render_page(input, config))
    }
}

fn read_input(input: Option<&PathBuf>) -> io::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            tracing::info!(path = %path.display(), "reading input");
            fs::read_to_string(path)
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
