pub mod builder;
pub mod fetch;

pub use crate::domain::ports::TextSource;
pub use crate::utils::error::Result;
