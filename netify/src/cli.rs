// netify/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netify")]
#[command(
    about = "Converts the Netify application, domain and IP tables into a netify_data load file",
    long_about = None
)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Plain `netify` behaves like `netify prepare`.
    #[command(flatten)]
    pub prepare: TableArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Builds netify.csv from applications.csv, domains.csv and ips.csv
    Prepare(TableArgs),

    /// 📋 Prints the psql commands that (re)load netify_data
    Instructions(TableArgs),

    /// 🧹 Removes the generated output file
    Clean(TableArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Directory holding the Netify tables (and an optional netify.yaml)
    #[arg(long, env = "NETIFY_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Output file, relative to the data directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Prepare(self.prepare))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_without_subcommand_is_prepare() -> Result<()> {
        let args = Cli::parse_from(["netify"]);
        match args.into_command() {
            Commands::Prepare(table) => {
                assert_eq!(table.data_dir.to_string_lossy(), ".");
                assert_eq!(table.output, None);
                Ok(())
            }
            _ => bail!("Expected Prepare command"),
        }
    }

    #[test]
    fn test_cli_parse_prepare_options() -> Result<()> {
        let args = Cli::parse_from([
            "netify",
            "prepare",
            "--data-dir",
            "/srv/netify",
            "--output",
            "export.csv",
        ]);
        match args.into_command() {
            Commands::Prepare(table) => {
                assert_eq!(table.data_dir.to_string_lossy(), "/srv/netify");
                assert_eq!(table.output, Some(PathBuf::from("export.csv")));
                Ok(())
            }
            _ => bail!("Expected Prepare command"),
        }
    }

    #[test]
    fn test_cli_top_level_flags() -> Result<()> {
        let args = Cli::parse_from(["netify", "-o", "out.csv"]);
        match args.into_command() {
            Commands::Prepare(table) => {
                assert_eq!(table.output, Some(PathBuf::from("out.csv")));
                Ok(())
            }
            _ => bail!("Expected Prepare command"),
        }
    }

    #[test]
    fn test_cli_parse_clean() -> Result<()> {
        let args = Cli::parse_from(["netify", "clean", "--data-dir", "/tmp"]);
        match args.into_command() {
            Commands::Clean(table) => {
                assert_eq!(table.data_dir.to_string_lossy(), "/tmp");
                Ok(())
            }
            _ => bail!("Expected Clean command"),
        }
    }

    #[test]
    fn test_cli_parse_instructions() -> Result<()> {
        let args = Cli::parse_from(["netify", "instructions"]);
        match args.into_command() {
            Commands::Instructions(_) => Ok(()),
            _ => bail!("Expected Instructions command"),
        }
    }
}
