pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::demo;
pub use domain::model::{Comparison, NullableString};
pub use utils::error::{DemoError, Result};
