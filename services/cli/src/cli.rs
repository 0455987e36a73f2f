use clap::Parser;
use occupancy::config::{AppConfig, OutputFormat};
use occupancy::error::AppError;
use occupancy::household::{HouseholdImporter, ImportError, ReportBuilder};
use occupancy::telemetry;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "occupancy-report",
    about = "Group occupants by household address and list the adults living there",
    version
)]
struct Cli {
    /// Quoted-field input file (prompted for when omitted)
    input: Option<PathBuf>,
    /// Output format: text or json
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
    /// List only occupants strictly older than this age
    #[arg(long)]
    adult_age: Option<u32>,
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(raw)
        .ok_or_else(|| format!("unknown format '{raw}' (expected text or json)"))
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(cli, config, &mut stdin.lock(), &mut stdout.lock())
}

fn execute<R: BufRead, W: Write>(
    cli: Cli,
    mut config: AppConfig,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if let Some(adult_age) = cli.adult_age {
        config.report.adult_age = adult_age;
    }

    let path = match cli.input {
        Some(path) => path,
        None => prompt_for_path(input, output)?,
    };

    let registry = HouseholdImporter::from_path(&path)?;
    info!(?config.environment, path = %path.display(), "rendering household report");

    let builder = ReportBuilder::new(config.report.adult_age);
    match config.report.format {
        OutputFormat::Text => output.write_all(builder.render(&registry).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, &builder.summary(&registry))?;
            writeln!(output)?;
        }
    }
    output.flush()?;

    Ok(())
}

fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf, AppError> {
    write!(output, "Enter input file path: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let path = PathBuf::from(line.trim());
    if path.as_os_str().is_empty() {
        return Err(ImportError::InputNotFound { path }.into());
    }

    Ok(path)
}
