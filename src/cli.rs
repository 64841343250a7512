//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::style::Style;

/// BCP-Shell banner generator - render decorative text banners to files.
#[derive(Parser, Debug)]
#[command(name = "bcp-banner", version, about)]
pub struct Cli {
    /// Command to run. Help is printed when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Storage root override (default: ~/.bcp-shell/banners/custom).
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create new banner
    Create {
        /// Banner name, used as the file name stem.
        name: String,

        /// Banner text.
        text: String,

        /// Banner style (default: box, or `defaults.style` from the config file).
        #[arg(long, value_enum)]
        style: Option<Style>,
    },

    /// List all banners
    List,

    /// Anything else prints help.
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_with_defaults() {
        let cli = Cli::parse_from(["bcp-banner", "create", "motd", "Hello"]);
        match cli.command {
            Some(Commands::Create { name, text, style }) => {
                assert_eq!(name, "motd");
                assert_eq!(text, "Hello");
                assert!(style.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.root.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn create_with_style() {
        let cli = Cli::parse_from(["bcp-banner", "create", "motd", "Hello", "--style", "ascii"]);
        assert!(matches!(cli.command, Some(Commands::Create { style: Some(Style::Ascii), .. })));
    }

    #[test]
    fn invalid_style_rejected() {
        let result = Cli::try_parse_from(["bcp-banner", "create", "motd", "Hello", "--style", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from(["bcp-banner", "list", "--root", "/tmp/b", "-v"]);
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/b")));
        assert!(cli.verbose);
    }

    #[test]
    fn no_subcommand() {
        let cli = Cli::parse_from(["bcp-banner"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn unknown_subcommand_captured() {
        let cli = Cli::parse_from(["bcp-banner", "frobnicate", "x"]);
        match cli.command {
            Some(Commands::Unknown(args)) => assert_eq!(args, vec!["frobnicate", "x"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
