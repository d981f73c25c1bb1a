//! Core utilities and types for the objcgen declaration generator.
//!
//! This crate provides the generation options snapshot and the string
//! helpers shared by the generator crates.

mod error;
mod options;
mod utils;

pub use error::{ConfigError, Result};
pub use options::Options;
// String utilities
pub use utils::{camel_case_package, capitalize, pad};
