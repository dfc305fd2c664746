pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::FixtureConfig;
pub use core::driver::FixtureDriver;
pub use domain::model::{Document, Item, Metadata, DEFAULT_AUTHOR, DEFAULT_TAGS};
pub use utils::error::{FixtureError, Result};
