use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use glob::glob;
use pdfreports::{
    config::Config,
    extract,
    flatten::{self, OutputRecord},
    output::{self, CsvSink},
    route::{self, ReportKind},
    states::StateDirectory,
    ConvertError,
};
use tracing::{info, instrument};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load configuration ───────────────────────────────────────
    let config_path = env::args().nth(1).unwrap_or_else(|| "config.yaml".into());
    let config = Config::load(&config_path)?;
    info!(?config, "configuration");

    // ─── 3) load the state reference table ───────────────────────────
    let states = StateDirectory::load(&config.state_table)
        .with_context(|| format!("loading state table {}", config.state_table.display()))?;
    info!(states = states.len(), "loaded state directory");

    // ─── 4) prepare the output directory ─────────────────────────────
    let sink = CsvSink::new(&config.output_dir)?;
    output::copy_templates(&config.templates_dir, &config.output_dir)?;

    // ─── 5) discover input PDFs ──────────────────────────────────────
    if !config.input_dir.is_dir() {
        return Err(ConvertError::MissingInput(config.input_dir.clone()).into());
    }
    let pattern = format!("{}/**/*.pdf", config.input_dir.display());
    let mut inputs: Vec<_> = glob(&pattern)
        .context("invalid input glob pattern")?
        .filter_map(|entry| entry.ok())
        .collect();
    inputs.sort();
    info!(files = inputs.len(), "discovered input PDFs");

    // ─── 6) convert each file in order ───────────────────────────────
    // outputs are shared append targets, so files are processed
    // sequentially; any failure aborts the whole run
    for path in &inputs {
        process_file(path, &states, &sink)
            .with_context(|| format!("processing {}", path.display()))?;
    }

    info!("all done");
    Ok(())
}

/// Route, extract, flatten, and append a single input PDF.
#[instrument(level = "info", skip(path, states, sink), fields(file = %path.display()))]
fn process_file(path: &Path, states: &StateDirectory, sink: &CsvSink) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ConvertError::UnrecognizedFileName(path.display().to_string()))?;
    let descriptor = route::route(file_name)?;

    let text = extract::extract_text(path)?;
    let records: Vec<OutputRecord> = match descriptor.kind {
        ReportKind::Yearly { year } => flatten::yearly::flatten(&text, year, states)?,
        ReportKind::Combined { start, end } => flatten::range::flatten(&text, start, end, states)?,
    };

    sink.append(&descriptor.base_name, &records)?;
    info!(records = records.len(), base = %descriptor.base_name, "converted");
    Ok(())
}
