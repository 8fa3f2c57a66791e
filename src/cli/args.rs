//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Review sources, resource scripts and catalogs
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by every reviewing command.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source root directory (defaults to the current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Checks to run, comma separated (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub checks: Vec<String>,

    /// Minimum word count before a string is treated as user-facing
    #[arg(long)]
    pub min_words: Option<usize>,

    /// Maximum line length for the wide-line check
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Lowest C++ standard the code base targets (e.g. 11, 14, 17)
    #[arg(long)]
    pub cpp_version: Option<u8>,

    /// Also compare fuzzy catalog entries
    #[arg(long)]
    pub fuzzy: bool,

    /// Allow punctuation-only strings to be translatable
    #[arg(long)]
    pub punctuation_translatable: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Review strings, formatting and translation catalogs
    Check(CheckCommand),
    /// Initialize a new .i18nreviewrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_flags() {
        let args = Arguments::try_parse_from([
            "i18n-review",
            "check",
            "--checks",
            "printf-mismatch,fonts",
            "--min-words",
            "3",
            "--fuzzy",
            "-v",
        ])
        .unwrap();
        assert!(args.verbose());
        let Some(Command::Check(cmd)) = args.command else {
            panic!("expected check command");
        };
        assert_eq!(cmd.common.checks, vec!["printf-mismatch", "fonts"]);
        assert_eq!(cmd.common.min_words, Some(3));
        assert!(cmd.common.fuzzy);
        assert!(!cmd.common.punctuation_translatable);
    }

    #[test]
    fn test_no_command() {
        let args = Arguments::try_parse_from(["i18n-review"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.verbose());
    }
}
