//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tw_theme::Edition;

#[derive(Parser, Debug)]
#[command(
    name = "taleweave",
    version,
    about = "Resolve Taleweave chat themes and check text legibility",
    long_about = "Resolve a base palette and edition (light, dark, black) into the\n\
                  colors the chat client renders, including text colors that stay\n\
                  legible on the resolved background."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Load palettes from a JSON or TOML file instead of the builtin set.
    #[arg(long, value_name = "FILE", global = true)]
    pub palettes: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List palettes in gallery order.
    Palettes {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Resolve a palette and edition into final colors.
    Resolve(ResolveArgs),

    /// Show how the readability guard sees a single color.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Palette index. Out-of-range (or negative) indices use the first palette.
    #[arg(value_name = "INDEX", allow_negative_numbers = true, conflicts_with = "name")]
    pub index: Option<i64>,

    /// Select the palette by name instead of index.
    #[arg(long)]
    pub name: Option<String>,

    /// Edition to derive: light, dark or black.
    #[arg(long, short, default_value = "light")]
    pub edition: Edition,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Color to inspect (`#RRGGBB`, gradient, anything).
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Background to check the color against.
    #[arg(long, value_name = "BACKGROUND")]
    pub on: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
