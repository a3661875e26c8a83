pub mod analyzer;
pub mod boundary;
pub mod ci;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod policy;
pub mod ui;

pub use error::{AutotagError, Result};
