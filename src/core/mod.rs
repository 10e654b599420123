pub mod demo;

pub use crate::domain::model::{Comparison, NullableString};
pub use crate::utils::error::Result;
