pub mod error;
pub mod io;
pub mod json;
pub mod logger;
pub mod validation;
