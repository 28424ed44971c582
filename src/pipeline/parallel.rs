//! Chunked parallel driver for the map and combine stages.
//!
//! Lines are split into disjoint chunks, each chunk is folded into its own
//! aggregate map on the rayon pool, and the per-chunk maps are merged
//! pairwise. No aggregate is ever shared between workers; each map is owned
//! by exactly one chunk until it is moved into the merge.

use crate::config::ParallelConfig;
use crate::core::TagPair;
use crate::pipeline::{map_line, AggregateMap};
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Fold a whole set of lines into one aggregate map.
///
/// Falls back to a sequential fold when parallelism is disabled or the
/// input is too small to be worth splitting. The result is identical either
/// way; only the partitioning differs.
pub fn aggregate_lines(
    lines: &[String],
    pairs: &[TagPair],
    config: &ParallelConfig,
    progress: Option<&ProgressBar>,
) -> AggregateMap {
    if !config.enabled || lines.len() <= 1 {
        let mut acc = AggregateMap::new();
        for line in lines {
            map_line(line, pairs, &mut acc);
            if let Some(bar) = progress {
                bar.inc(1);
            }
        }
        return acc;
    }

    let batch_size = config.effective_batch_size();
    lines
        .par_chunks(batch_size)
        .map(|chunk| {
            let mut acc = AggregateMap::new();
            for line in chunk {
                map_line(line, pairs, &mut acc);
            }
            if let Some(bar) = progress {
                bar.inc(chunk.len() as u64);
            }
            acc
        })
        .reduce(AggregateMap::new, AggregateMap::merge)
}
