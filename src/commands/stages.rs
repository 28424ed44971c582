//! Standalone map, combine, and reduce stages over the intermediate wire
//! format.
//!
//! These compose the way an external scheduler would wire them: `map` turns
//! a corpus into a stream of per-match records, `combine` folds any number
//! of streams into one (and may be applied again to its own output), and
//! `reduce` folds streams into final averages. Any interleaving of combine
//! passes yields the same reduce output.

use crate::cli;
use crate::config::load_tag_pairs;
use crate::io::wire::{WireReader, WireWriter};
use crate::io::read_lines;
use crate::pipeline::{emit_line, AggregateMap};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub fn handle_map(input: &Path, tags: &Path, output: &Path) -> Result<()> {
    let pairs = load_tag_pairs(tags)?;
    let lines = read_lines(input)
        .with_context(|| format!("failed to read corpus {}", input.display()))?;

    let sink = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = WireWriter::new(BufWriter::new(sink))?;

    let mut emitted = 0usize;
    for line in &lines {
        for (key, value) in emit_line(line, &pairs) {
            writer.write_record(&key, &value)?;
            emitted += 1;
        }
    }
    writer.finish()?;

    log::info!(
        "mapped {} lines into {} records at {}",
        lines.len(),
        emitted,
        output.display()
    );
    Ok(())
}

pub fn handle_combine(inputs: &[PathBuf], output: &Path) -> Result<()> {
    let combined = fold_streams(inputs)?;

    let sink = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = WireWriter::new(BufWriter::new(sink))?;
    writer.write_map(&combined)?;
    writer.finish()?;

    log::info!(
        "combined {} streams into {} keys at {}",
        inputs.len(),
        combined.len(),
        output.display()
    );
    Ok(())
}

pub fn handle_reduce(
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: Option<cli::OutputFormat>,
) -> Result<()> {
    let combined = fold_streams(inputs)?;
    let results = combined.into_averages();

    let settings = crate::config::load_settings();
    let format = super::resolve_format(format, &settings.output.format);
    super::write_results(&results, output, format)
}

/// Fold every record of every input stream into one map.
fn fold_streams(inputs: &[PathBuf]) -> Result<AggregateMap> {
    let mut acc = AggregateMap::new();
    for path in inputs {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        WireReader::new(BufReader::new(file))?
            .fold_into(&mut acc)
            .with_context(|| format!("failed to read {}", path.display()))?;
    }
    Ok(acc)
}
