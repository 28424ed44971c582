//! CLI command implementations.
//!
//! Each submodule handles one command. `analyze` runs the whole pipeline in
//! process; `map`, `combine`, and `reduce` expose the individual stages over
//! the intermediate wire format so an external scheduler can compose them.

pub mod analyze;
pub mod init;
pub mod stages;
pub mod validate;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_settings;
pub use stages::{handle_combine, handle_map, handle_reduce};
pub use validate::handle_validate;

use crate::core::KeyAverage;
use crate::io::output::{create_writer, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write final rows to a file or stdout in the requested format.
pub(crate) fn write_results(
    results: &[KeyAverage],
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    create_writer(format, sink).write_results(results)
}

/// Pick the output format: explicit flag first, then settings, then TSV.
pub(crate) fn resolve_format(
    flag: Option<crate::cli::OutputFormat>,
    settings_format: &str,
) -> OutputFormat {
    if let Some(format) = flag {
        return format.into();
    }
    match settings_format {
        "json" => OutputFormat::Json,
        "tsv" => OutputFormat::Tsv,
        other => {
            log::warn!("unknown output format {other:?} in settings, using tsv");
            OutputFormat::Tsv
        }
    }
}
