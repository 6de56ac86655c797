// vidscan-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Extensions probed when none are supplied on the command line.
pub const DEFAULT_EXTENSIONS: &str = "mp4,mkv,avi,webm,mov,m4v,wmv,flv,mpg,mpeg,ts,vob,3gp";

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Vidscan: video inventory and report tool",
    long_about = "Scans a directory tree for video files, probes them with ffprobe and assembles a flat CSV report via the vidscan-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scans a directory tree and writes a metadata report
    Report(ReportArgs),
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Directory tree to scan for video files
    #[arg(required = true, value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Optional: CSV file the report is written to
    /// (defaults to vidscan_report_<timestamp>.csv in the working directory)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Comma-separated video extensions to select, without leading dots
    #[arg(
        long,
        value_delimiter = ',',
        value_name = "EXTS",
        default_value = DEFAULT_EXTENSIONS
    )]
    pub extensions: Vec<String>,

    /// Keep filesystem enumeration order instead of natural sorting
    #[arg(long)]
    pub no_sort: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_report_basic_args() {
        let cli = Cli::parse_from(["vidscan", "report", "videos"]);

        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.input_dir, PathBuf::from("videos"));
                assert!(args.output.is_none());
                assert!(!args.no_sort);
                // Defaults split on commas
                assert!(args.extensions.iter().any(|e| e == "mp4"));
                assert!(args.extensions.iter().any(|e| e == "mkv"));
            }
        }
    }

    #[test]
    fn test_parse_report_with_options() {
        let cli = Cli::parse_from([
            "vidscan",
            "report",
            "videos",
            "--output",
            "out.csv",
            "--extensions",
            "mp4,webm",
            "--no-sort",
        ]);

        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.output, Some(PathBuf::from("out.csv")));
                assert_eq!(args.extensions, vec!["mp4", "webm"]);
                assert!(args.no_sort);
            }
        }
    }

    #[test]
    fn test_report_requires_input_dir() {
        assert!(Cli::try_parse_from(["vidscan", "report"]).is_err());
    }
}
