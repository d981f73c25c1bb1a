//! Core operations.
//!
//! This module contains the business logic for objcgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod unit;

pub use generate::{GenerateOptions, generate};
pub use unit::load_unit;
