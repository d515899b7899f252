mod catalog;
pub mod cli;
mod error;
mod migrate;
mod video;

pub use catalog::add_missing_descriptions;
pub use error::{MigrateError, Result};
pub use migrate::{count_missing, load, migrate, save, DEFAULT_PATH};
pub use video::{ensure_description, DESCRIPTION};
