use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated rows, one per tag-pair key
    Tsv,
    /// JSON array of result rows
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tsv => Self::Tsv,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "seqdist")]
#[command(about = "DNA tag-pair distance scanner and aggregator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a corpus and report the average distance per tag pair
    Analyze {
        /// Corpus of sequence lines, or - for stdin
        input: PathBuf,

        /// Tag-pair resource, one start,end per line
        #[arg(short, long)]
        tags: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Worker threads; 0 means all available cores
        #[arg(long, default_value = "0")]
        jobs: usize,

        /// Disable parallel processing
        #[arg(long)]
        no_parallel: bool,

        /// Lines per worker batch
        #[arg(long)]
        batch_size: Option<usize>,

        /// Suppress progress and summary output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run only the scanner stage, writing intermediate records
    Map {
        /// Corpus of sequence lines, or - for stdin
        input: PathBuf,

        /// Tag-pair resource, one start,end per line
        #[arg(short, long)]
        tags: PathBuf,

        /// Intermediate stream to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Fold intermediate streams into one combined stream
    Combine {
        /// Intermediate streams to fold
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Combined stream to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Fold intermediate streams and emit final averages
    Reduce {
        /// Intermediate streams to fold
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check that a tag-pair resource parses
    Validate {
        /// Tag-pair resource to check
        #[arg(short, long)]
        tags: PathBuf,
    },

    /// Write a default .seqdist.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Tsv),
            crate::io::output::OutputFormat::Tsv
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from(["seqdist", "analyze", "corpus.txt", "--tags", "tags.txt"])
            .unwrap();
        match cli.command {
            Commands::Analyze {
                input, tags, jobs, ..
            } => {
                assert_eq!(input, PathBuf::from("corpus.txt"));
                assert_eq!(tags, PathBuf::from("tags.txt"));
                assert_eq!(jobs, 0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_combine_requires_inputs() {
        assert!(Cli::try_parse_from(["seqdist", "combine", "--output", "out.bin"]).is_err());
    }
}
