pub mod analyzer;
pub mod baseline;
pub mod changelog;
pub mod cli;
pub mod command;
pub mod commits;
pub mod config;
pub mod error;
pub mod forge;
pub mod output;
pub mod result;

pub use cli::Args;
pub use error::NextverError;
pub use result::Result;
