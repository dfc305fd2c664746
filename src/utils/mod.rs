pub mod error;
pub mod logger;
