//! Check a tag-pair resource without running a scan.

use crate::config::load_tag_pairs;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_validate(tags: &Path) -> Result<()> {
    let pairs = load_tag_pairs(tags)?;

    println!(
        "{} {} defines {} tag pairs",
        "[ok]".green(),
        tags.display(),
        pairs.len()
    );
    for pair in &pairs {
        println!("  {pair}");
    }

    Ok(())
}
