//! Core module for Multitech
//!
//! Configuration and error types shared by every command.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ScaffoldError, ScaffoldResult};
