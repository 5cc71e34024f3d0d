//! CLI argument definitions for relfind.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use relfind_model::{DEFAULT_CLOSEST_N, DedupPolicy, FilterOrder, OverrideRule};

#[derive(Parser)]
#[command(
    name = "relfind",
    version,
    about = "Find upcoming product releases for a list of operators",
    long_about = "Resolve operator/product search lists against a product release export.\n\n\
                  Reports the closest upcoming releases per product, honoring optional\n\
                  version constraints from a reference list."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search releases for every operator in the search list.
    Search(SearchArgs),

    /// List the products present in a release table.
    Products(ProductsArgs),

    /// List the product abbreviations accepted in reference lists.
    Abbreviations,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Folder holding the release table, search list and reference list.
    #[arg(long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Release table CSV (default: discovered in DIR).
    #[arg(long = "data", value_name = "CSV")]
    pub data: Option<PathBuf>,

    /// Tab-separated search list (default: DIR/source.txt).
    #[arg(long = "source", value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Version reference list (default: DIR/reference.txt).
    #[arg(long = "reference", value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Results file (default: DIR/results.txt).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print results without writing the results file.
    #[arg(long = "no-write")]
    pub no_write: bool,

    /// Format printed to stdout.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Include releases regardless of GA date.
    #[arg(long = "show-all")]
    pub show_all: bool,

    /// Ignore the version reference list.
    #[arg(long = "no-version-filter")]
    pub no_version_filter: bool,

    /// Number of closest releases reported per product.
    #[arg(
        long = "closest",
        value_name = "N",
        default_value_t = DEFAULT_CLOSEST_N as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub closest: u64,

    /// Which row represents a release listed more than once.
    #[arg(long = "dedup", value_enum, default_value = "earliest")]
    pub dedup: DedupArg,

    /// Order of the version and GA date filters.
    #[arg(long = "filter-order", value_enum, default_value = "version-first")]
    pub filter_order: FilterOrderArg,

    /// Search TERM in release names for OPERATOR (repeatable).
    #[arg(long = "override", value_name = "OPERATOR=TERM", value_parser = parse_override)]
    pub overrides: Vec<OverrideRule>,

    /// Reference date for the GA date filter (default: today).
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct ProductsArgs {
    /// Folder to discover the release table in.
    #[arg(long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Release table CSV (default: discovered in DIR).
    #[arg(long = "data", value_name = "CSV")]
    pub data: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DedupArg {
    Earliest,
    Latest,
}

impl From<DedupArg> for DedupPolicy {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::Earliest => Self::Earliest,
            DedupArg::Latest => Self::Latest,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FilterOrderArg {
    VersionFirst,
    DateFirst,
}

impl From<FilterOrderArg> for FilterOrder {
    fn from(arg: FilterOrderArg) -> Self {
        match arg {
            FilterOrderArg::VersionFirst => Self::VersionThenTemporal,
            FilterOrderArg::DateFirst => Self::TemporalThenVersion,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_override(value: &str) -> Result<OverrideRule, String> {
    let (operator, term) = value
        .split_once('=')
        .ok_or_else(|| format!("expected OPERATOR=TERM, got {value:?}"))?;
    let (operator, term) = (operator.trim(), term.trim());
    if operator.is_empty() || term.is_empty() {
        return Err(format!("expected OPERATOR=TERM, got {value:?}"));
    }
    Ok(OverrideRule::new(operator, term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_needs_both_sides() {
        assert_eq!(
            parse_override("netobserv-operator = network observability"),
            Ok(OverrideRule::new("netobserv-operator", "network observability"))
        );
        assert!(parse_override("netobserv-operator").is_err());
        assert!(parse_override("=network observability").is_err());
    }

    #[test]
    fn search_flags_parse() {
        let cli = Cli::try_parse_from([
            "relfind",
            "search",
            "--dir",
            "data",
            "--closest",
            "3",
            "--dedup",
            "latest",
            "--filter-order",
            "date-first",
            "--override",
            "a=b",
            "--override",
            "c=d",
            "--today",
            "2026-10-18",
            "--show-all",
        ])
        .unwrap();
        let Command::Search(args) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.dir, PathBuf::from("data"));
        assert_eq!(args.closest, 3);
        assert!(matches!(args.dedup, DedupArg::Latest));
        assert!(matches!(args.filter_order, FilterOrderArg::DateFirst));
        assert_eq!(args.overrides.len(), 2);
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2026, 10, 18));
        assert!(args.show_all);
    }

    #[test]
    fn closest_must_be_positive() {
        assert!(Cli::try_parse_from(["relfind", "search", "--closest", "0"]).is_err());
    }
}
