//! Tag-pair resource loading and runtime settings.
//!
//! The tag resource is the side channel that defines what to scan for: one
//! `start,end` pair per line, order preserved. It is loaded once at setup
//! and any malformed line is fatal, since silently skipping entries would
//! silently change the output. Runtime settings (`.seqdist.toml`) are
//! optional and fall back to defaults.

use crate::core::{SeqdistError, SeqdistResult, TagPair};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default name of the optional runtime settings file.
pub const SETTINGS_FILE: &str = ".seqdist.toml";

/// Parse tag pairs from the contents of a tag resource.
///
/// `origin` names the resource in diagnostics. Line numbers are 1-based.
pub fn parse_tag_pairs(contents: &str, origin: &Path) -> SeqdistResult<Vec<TagPair>> {
    let mut pairs = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 2 {
            return Err(SeqdistError::TagFile {
                path: origin.to_path_buf(),
                line: index + 1,
                message: format!(
                    "expected exactly two comma-separated fields, got {}",
                    fields.len()
                ),
            });
        }

        let pair = TagPair::new(fields[0], fields[1]).map_err(|e| SeqdistError::TagFile {
            path: origin.to_path_buf(),
            line: index + 1,
            message: e.to_string(),
        })?;
        pairs.push(pair);
    }

    log::debug!(
        "loaded {} tag pairs from {}",
        pairs.len(),
        origin.display()
    );
    Ok(pairs)
}

/// Load the ordered tag-pair list from a resource file.
///
/// Failures here are fatal to setup; the caller decides whether that aborts
/// the partition or the whole job.
pub fn load_tag_pairs(path: &Path) -> SeqdistResult<Vec<TagPair>> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeqdistError::TagFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tag_pairs(&contents, path)
}

/// Runtime settings, optionally read from `.seqdist.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeqdistConfig {
    pub parallel: ParallelConfig,
    pub output: OutputConfig,
}

/// How the local driver splits work across the rayon pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Whether to use the thread pool at all
    pub enabled: bool,
    /// Worker threads; 0 means all available cores
    pub jobs: usize,
    /// Lines per chunk handed to one worker
    pub batch_size: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            jobs: 0,
            batch_size: 4096,
        }
    }
}

impl ParallelConfig {
    /// Settings for a strictly sequential fold.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn effective_jobs(&self) -> usize {
        if self.jobs == 0 {
            num_cpus::get()
        } else {
            self.jobs
        }
    }

    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }
}

/// Output defaults applied when the CLI does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format, "tsv" or "json"
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "tsv".to_string(),
        }
    }
}

/// Load runtime settings from `.seqdist.toml` in the working directory.
///
/// A missing file is normal. An unreadable or invalid file is reported and
/// the defaults are used; settings never abort a run.
pub fn load_settings() -> SeqdistConfig {
    load_settings_from(Path::new(SETTINGS_FILE))
}

/// Load runtime settings from a specific path.
pub fn load_settings_from(path: &Path) -> SeqdistConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to read {}: {}, using defaults", path.display(), e);
            }
            return SeqdistConfig::default();
        }
    };

    match toml::from_str::<SeqdistConfig>(&contents) {
        Ok(config) => {
            log::debug!("loaded settings from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("invalid {}: {}, using defaults", path.display(), e);
            SeqdistConfig::default()
        }
    }
}

/// The default settings file contents written by `seqdist init`.
pub fn default_settings_toml() -> &'static str {
    r#"# Seqdist configuration

[parallel]
enabled = true
# 0 means all available cores
jobs = 0
batch_size = 4096

[output]
format = "tsv"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn origin() -> &'static Path {
        Path::new("tags.txt")
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let pairs = parse_tag_pairs("ATG,TAA\nGGG,CCC\n", origin()).unwrap();
        assert_eq!(
            pairs,
            vec![
                TagPair::new("ATG", "TAA").unwrap(),
                TagPair::new("GGG", "CCC").unwrap(),
            ]
        );
    }

    #[test]
    fn test_parse_empty_resource_yields_no_pairs() {
        assert!(parse_tag_pairs("", origin()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_comma_is_fatal() {
        let err = parse_tag_pairs("ATG,TAA\nGGGCCC\n", origin()).unwrap_err();
        match err {
            SeqdistError::TagFile { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_many_fields_is_fatal() {
        let err = parse_tag_pairs("ATG,TAA,GGG\n", origin()).unwrap_err();
        assert!(matches!(err, SeqdistError::TagFile { line: 1, .. }));
    }

    #[test]
    fn test_empty_field_is_fatal() {
        let err = parse_tag_pairs("ATG,\n", origin()).unwrap_err();
        match err {
            SeqdistError::TagFile { line, message, .. } => {
                assert_eq!(line, 1);
                assert!(message.contains("empty end tag"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_line_is_fatal() {
        let err = parse_tag_pairs("ATG,TAA\n\nGGG,CCC\n", origin()).unwrap_err();
        assert!(matches!(err, SeqdistError::TagFile { line: 2, .. }));
    }

    #[test]
    fn test_settings_default_roundtrip() {
        let parsed: SeqdistConfig = toml::from_str(default_settings_toml()).unwrap();
        assert_eq!(parsed, SeqdistConfig::default());
    }

    #[test]
    fn test_settings_partial_file_fills_defaults() {
        let parsed: SeqdistConfig = toml::from_str("[parallel]\njobs = 2\n").unwrap();
        assert_eq!(parsed.parallel.jobs, 2);
        assert!(parsed.parallel.enabled);
        assert_eq!(parsed.output, OutputConfig::default());
    }

    #[test]
    fn test_effective_jobs_zero_means_all_cores() {
        let config = ParallelConfig::default();
        assert_eq!(config.effective_jobs(), num_cpus::get());
        let pinned = ParallelConfig {
            jobs: 3,
            ..Default::default()
        };
        assert_eq!(pinned.effective_jobs(), 3);
    }
}
