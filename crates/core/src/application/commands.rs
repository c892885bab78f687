mod list_directory;

pub use list_directory::{ListDirectoryCommand, ListingSummary};
