pub mod input;
pub mod output;
pub mod wire;

pub use input::{read_lines, read_lines_from};
pub use output::{create_writer, OutputFormat, OutputWriter};
pub use wire::{WireReader, WireWriter};
