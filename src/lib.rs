pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod git;
pub mod logging;
pub mod source;
pub mod ui;

pub use domain::{Version, VersionBump};
pub use error::{Result, TagverError};
