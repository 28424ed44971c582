//! The whole pipeline in one process: scan, combine per chunk, reduce,
//! write averages.

use crate::cli;
use crate::config::{load_settings, load_tag_pairs, ParallelConfig};
use crate::io::read_lines;
use crate::pipeline::aggregate_lines;
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub tags: PathBuf,
    pub output: Option<PathBuf>,
    pub format: Option<cli::OutputFormat>,
    pub jobs: usize,
    pub no_parallel: bool,
    pub batch_size: Option<usize>,
    pub quiet: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = load_settings();
    let parallel = resolve_parallel(&settings.parallel, &config);

    if parallel.enabled {
        configure_thread_pool(&parallel);
    }

    let pairs = load_tag_pairs(&config.tags)?;
    log::info!("scanning for {} tag pairs", pairs.len());

    let lines = read_lines(&config.input)
        .with_context(|| format!("failed to read corpus {}", config.input.display()))?;

    let progress = build_progress(lines.len(), config.quiet);
    let aggregates = aggregate_lines(&lines, &pairs, &parallel, progress.as_ref());
    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    let results = aggregates.into_averages();
    let format = super::resolve_format(config.format, &settings.output.format);
    super::write_results(&results, config.output.as_deref(), format)?;

    if !config.quiet {
        eprintln!(
            "{} scanned {} lines against {} tag pairs, {} matched",
            "[done]".green(),
            lines.len(),
            pairs.len(),
            results.len()
        );
    }

    Ok(())
}

/// Flags override settings; settings fill everything else.
fn resolve_parallel(settings: &ParallelConfig, config: &AnalyzeConfig) -> ParallelConfig {
    ParallelConfig {
        enabled: settings.enabled && !config.no_parallel,
        jobs: if config.jobs > 0 {
            config.jobs
        } else {
            settings.jobs
        },
        batch_size: config.batch_size.unwrap_or(settings.batch_size),
    }
}

fn configure_thread_pool(parallel: &ParallelConfig) {
    if parallel.jobs == 0 {
        return;
    }
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(parallel.effective_jobs())
        .build_global()
    {
        log::debug!("thread pool already configured: {e}");
    }
}

fn build_progress(total: usize, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} lines ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    Some(bar)
}
