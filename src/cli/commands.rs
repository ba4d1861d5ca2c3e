//! Command implementations for the Lexiclean CLI.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde_json::Value;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexicleanError, Result};
use crate::normalize::{NormalizeMode, Normalizer, NormalizerConfig, NormalizerState, text_records};

/// Execute a CLI command.
pub fn execute_command(args: LexicleanArgs) -> Result<()> {
    match &args.command {
        Command::Fit(fit_args) => fit(fit_args.clone(), &args),
        Command::Apply(apply_args) => apply(apply_args.clone(), &args),
        Command::Clean(clean_args) => clean(clean_args.clone(), &args),
    }
}

/// Fit a normalizer on training records.
fn fit(args: FitArgs, cli_args: &LexicleanArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => NormalizerConfig::default(),
    };
    if let Some(top) = args.top_fraction {
        config = config.with_top_fraction(top);
    }
    if let Some(bottom) = args.bottom_fraction {
        config = config.with_bottom_fraction(bottom);
    }

    let normalizer = Normalizer::new(config)?;
    let records = read_records(&args.input)?;
    info!("fitting on {} records from {}", records.len(), args.input.display());

    let start_time = Instant::now();
    let cleaned = normalizer.normalize(&records, NormalizeMode::FitAndApply)?;
    let duration = start_time.elapsed();

    normalizer.state().save(&args.state)?;
    if let Some(output) = &args.output {
        write_records(output, &cleaned)?;
    }

    output_result(
        "Normalizer fitted successfully",
        &FitResult {
            records: cleaned.len(),
            fitted: normalizer.is_fitted(),
            vocabulary_size: normalizer.vocabulary().map_or(0, |v| v.len()),
            state_path: args.state.to_string_lossy().to_string(),
            output_path: args.output.as_ref().map(|p| p.to_string_lossy().to_string()),
            duration_ms: duration.as_millis() as u64,
            cleaned: args.output.is_none().then_some(cleaned),
        },
        cli_args,
    )
}

/// Clean records with a stored state.
fn apply(args: ApplyArgs, cli_args: &LexicleanArgs) -> Result<()> {
    let normalizer = Normalizer::from_state(NormalizerState::load(&args.state)?)?;
    let records = read_records(&args.input)?;
    info!("cleaning {} records from {}", records.len(), args.input.display());

    let start_time = Instant::now();
    let cleaned = normalizer.normalize(&records, NormalizeMode::ApplyOnly)?;
    let duration = start_time.elapsed();

    if let Some(output) = &args.output {
        write_records(output, &cleaned)?;
    }

    output_result(
        "Records cleaned successfully",
        &ApplyResult {
            records: cleaned.len(),
            vocabulary_size: normalizer.vocabulary().map_or(0, |v| v.len()),
            output_path: args.output.as_ref().map(|p| p.to_string_lossy().to_string()),
            duration_ms: duration.as_millis() as u64,
            cleaned: args.output.is_none().then_some(cleaned),
        },
        cli_args,
    )
}

/// Clean a single text.
fn clean(args: CleanArgs, cli_args: &LexicleanArgs) -> Result<()> {
    let normalizer = match &args.state {
        Some(path) => Normalizer::from_state(NormalizerState::load(path)?)?,
        None => Normalizer::new(NormalizerConfig::default())?,
    };
    let cleaned = normalizer.normalize_one(&args.text)?;

    output_result(
        "Text cleaned",
        &CleanResult {
            input: args.text,
            cleaned,
        },
        cli_args,
    )
}

/// Load a normalizer configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<NormalizerConfig> {
    let path = path.as_ref();
    debug!("loading config from {}", path.display());
    let config: NormalizerConfig = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    config.validate()?;
    Ok(config)
}

/// Read input records.
///
/// `.jsonl` files hold one JSON string per line; blank lines are skipped.
/// Any other file holds one raw record per line. A line that is not valid
/// UTF-8 is rejected as invalid input naming the file and line.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let lines = reader
        .lines()
        .enumerate()
        .map(|(line_num, line)| read_line(path, line_num, line));

    if !is_jsonl(path) {
        return lines.collect();
    }

    let mut values = Vec::new();
    for (line_num, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line).map_err(|e| {
            LexicleanError::invalid_input(format!(
                "{}: line {}: {e}",
                path.display(),
                line_num + 1
            ))
        })?;
        values.push(value);
    }
    text_records(&values)
}

fn read_line(path: &Path, line_num: usize, line: std::io::Result<String>) -> Result<String> {
    line.map_err(|e| match e.kind() {
        ErrorKind::InvalidData => LexicleanError::invalid_input(format!(
            "{}: line {}: not valid UTF-8",
            path.display(),
            line_num + 1
        )),
        _ => LexicleanError::Io(e),
    })
}

/// Write cleaned records in the layout [`read_records`] reads.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    let jsonl = is_jsonl(path);
    for record in records {
        if jsonl {
            serde_json::to_writer(&mut writer, record)?;
            writeln!(writer)?;
        } else {
            writeln!(writer, "{record}")?;
        }
    }
    writer.flush()?;
    debug!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn is_jsonl(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"))
}
