mod completions;
mod generate;
mod header;
mod implementation;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use header::HeaderCommand;
use implementation::ImplCommand;
use objcgen_ast::CompilationUnit;
use objcgen_core::Options;

use crate::ops;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for objcgen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "objcgen")]
#[command(version)]
#[command(about = "Generate Objective-C declarations from resolved compilation units")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Header(cmd) => cmd.run(),
            Commands::Impl(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the header and implementation for a unit
    Generate(GenerateCommand),

    /// Print the header for a unit
    Header(HeaderCommand),

    /// Print the implementation for a unit
    Impl(ImplCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Arguments shared by every command that reads a unit.
#[derive(Args)]
pub(crate) struct UnitArgs {
    /// Path to the resolved compilation unit (JSON)
    pub unit: PathBuf,

    /// Path to objcgen.toml (defaults to ./objcgen.toml)
    #[arg(short, long, default_value = "objcgen.toml")]
    pub config: PathBuf,
}

impl UnitArgs {
    /// Load the options and the unit. A missing config file means defaults.
    pub fn load(&self) -> Result<(CompilationUnit, Options)> {
        let options = Options::open_or_default(&self.config).unwrap_or_exit();
        let unit = ops::load_unit(&self.unit)?;
        Ok((unit, options))
    }
}
