pub mod commands;

pub use commands::{ListDirectoryCommand, ListingSummary};
