pub mod build;
pub mod clean;
pub mod completions;
pub mod help;
pub mod options;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::discovery::{discover, Project};
use crate::error::Result;
use crate::output::Printer;

/// bootskin - Boot-loader theme asset generator
#[derive(Parser, Debug)]
#[command(name = "bootskin")]
#[command(version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Project root holding icons/, templates/ and theme.conf
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Manifest file (default: <root>/theme.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the theme from icons and templates
    Build(build::BuildArgs),

    /// Delete the theme's build directory
    Clean(clean::CleanArgs),

    /// Show help for bootskin or one of its commands
    Help(help::HelpArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),

    /// Anything else falls back to the help banner
    #[command(external_subcommand)]
    Other(Vec<String>),
}

impl Cli {
    pub fn printer(&self) -> Printer {
        Printer::new().with_verbose(self.verbose)
    }

    /// Discover the project selected by `--root` and `--config`.
    pub fn project(&self) -> Result<Project> {
        discover(&self.root, self.config.as_deref())
    }

    /// Parse the process arguments, accepting subcommands in any case.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_command(std::env::args_os()))
    }
}

/// Trim and lowercase the subcommand so `BUILD` and ` Build ` run `build`.
///
/// Only the first positional argument is touched, and only when it names a
/// known subcommand; values of `--root` and `--config` are skipped.
pub fn normalize_command<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let mut i = 1;
    while i < args.len() {
        let Some(arg) = args[i].to_str() else {
            break;
        };
        if arg == "--root" || arg == "--config" {
            i += 2;
            continue;
        }
        if arg.starts_with('-') {
            i += 1;
            continue;
        }

        let name = arg.trim().to_lowercase();
        if command.find_subcommand(&name).is_some() {
            args[i] = name.into();
        }
        break;
    }

    args
}
