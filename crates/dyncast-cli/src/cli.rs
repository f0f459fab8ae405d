//! CLI definitions for dyncast.

use clap::{Parser, Subcommand, ValueEnum};
use dyncast::Target;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dyncast",
    version,
    about = "Coerce loosely-typed values and summarize numeric samples",
    infer_subcommands = true,
    after_help = "Examples:\n  dyncast convert --to int 2.5 -2.5\n  dyncast convert --to time 2006-01-02\n  dyncast xfloat '1.234,56'\n  dyncast stats median 4 1 3 2"
)]
pub struct Cli {
    /// Configuration file (defaults to ./dyncast.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log coercion fallbacks and layout misses.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Coerce each input to one target type.
    #[command(
        after_help = "Examples:\n  dyncast convert --to bool 5 yes TRUE\n  dyncast convert --to bytes --json null true '\"hi\"'\n  dyncast convert --to duration --strict 1h30m"
    )]
    Convert {
        /// Target type.
        #[arg(long, value_parser = parse_target)]
        to: Target,
        /// Read each input as a JSON scalar instead of plain text.
        #[arg(long)]
        json: bool,
        /// Fail on the first input that does not coerce.
        #[arg(long)]
        strict: bool,
        /// Values to coerce.
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },
    /// Read numbers written with `.` or `,` as the decimal point.
    Xfloat {
        /// Fail on the first input that does not read as a number.
        #[arg(long)]
        strict: bool,
        /// Numeric text such as `1.234,56` or `$ 1,234.56`.
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },
    /// Summarize a sample; values are read as floats.
    Stats {
        /// Statistic to compute.
        #[arg(value_enum)]
        stat: Stat,
        /// Sample values.
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Integer and angle helpers.
    Math {
        #[command(subcommand)]
        op: MathOp,
    },
    /// Print the timestamp layouts in match order.
    Layouts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Stat {
    Sum,
    Min,
    Max,
    Median,
    Mean,
    Harmonic,
    Geometric,
    Count,
}

#[derive(Debug, Subcommand)]
pub enum MathOp {
    /// Floor of the integer square root.
    Sqrt {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    /// N-th prime, counting from 1.
    Prime {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
    /// Degrees to radians.
    #[command(name = "deg2rad")]
    DegToRad {
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
    /// Radians to degrees.
    #[command(name = "rad2deg")]
    RadToDeg {
        #[arg(allow_hyphen_values = true)]
        rad: f64,
    },
    /// Round half away from zero.
    Round {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
}

fn parse_target(text: &str) -> Result<Target, String> {
    text.parse::<Target>().map_err(|err| {
        let names: Vec<&str> = Target::ALL.iter().map(|target| target.name()).collect();
        format!("{err} (expected one of: {})", names.join(", "))
    })
}
