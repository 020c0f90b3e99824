use crate::utils::parser::{AtomList, parse_atom_list, parse_dialect};
use clap::{Args, Parser, Subcommand};
use qbasis::Dialect;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "qbasis CLI - Convert, inspect and decontract Gaussian basis set files (gaussian94, gamess).",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a basis set in one dialect and write it in another.
    Convert(ConvertArgs),
    /// Print a per-atom summary of the shells in a basis set file.
    Info(InfoArgs),
    /// Split every contracted shell into single primitives and write the result.
    Decontract(DecontractArgs),
}

/// Dialect overrides shared by every command that reads a basis set.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct InputDialectArgs {
    /// Dialect of the input file, overriding `dialects.input` from the config file.
    #[arg(long = "from", value_name = "DIALECT", value_parser = parse_dialect)]
    pub from: Option<Dialect>,
}

/// Dialect overrides for commands that write a basis set.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputDialectArgs {
    /// Dialect of the output file, overriding `dialects.output` from the config file.
    #[arg(long = "to", value_name = "DIALECT", value_parser = parse_dialect)]
    pub to: Option<Dialect>,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input basis set file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output basis set file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub input_dialect: InputDialectArgs,

    #[command(flatten)]
    pub output_dialect: OutputDialectArgs,

    /// Comma-separated atoms to keep, in output order (e.g. 'H,C').
    /// Overrides `output.atoms` from the config file.
    #[arg(long, value_name = "LIST", value_parser = parse_atom_list)]
    pub atoms: Option<AtomList>,
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input basis set file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub input_dialect: InputDialectArgs,
}

/// Arguments for the `decontract` subcommand.
#[derive(Args, Debug)]
pub struct DecontractArgs {
    /// Path to the input basis set file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the decontracted output file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub input_dialect: InputDialectArgs,

    #[command(flatten)]
    pub output_dialect: OutputDialectArgs,
}
