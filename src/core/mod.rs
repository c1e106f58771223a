pub mod config;
pub mod error;

pub use config::BoardConfig;
pub use error::ConfigError;
