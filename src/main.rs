use anyhow::Result;
use clap::Parser;
use seqdist::cli::{Cli, Commands};
use seqdist::commands::{self, AnalyzeConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            tags,
            output,
            format,
            jobs,
            no_parallel,
            batch_size,
            quiet,
        } => commands::handle_analyze(AnalyzeConfig {
            input,
            tags,
            output,
            format,
            jobs,
            no_parallel,
            batch_size,
            quiet,
        }),
        Commands::Map {
            input,
            tags,
            output,
        } => commands::handle_map(&input, &tags, &output),
        Commands::Combine { inputs, output } => commands::handle_combine(&inputs, &output),
        Commands::Reduce {
            inputs,
            output,
            format,
        } => commands::handle_reduce(&inputs, output.as_deref(), format),
        Commands::Validate { tags } => commands::handle_validate(&tags),
        Commands::Init { force } => commands::init_settings(force),
    }
}
