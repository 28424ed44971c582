pub mod scanner;

pub use scanner::{scan_distances, Match, TagScanner};
