//! Subcommand implementations. Results go to the given writer, one per line.

use std::io::Write;

use anyhow::{bail, Context};
use dyncast::datetime::LAYOUTS;
use dyncast::value::format_f64;
use dyncast::{coerce, to_string, try_coerce, Target, Value};
use tracing::debug;

use crate::cli::{MathOp, Stat};
use crate::input::{json_value, text_value};

/// How `convert` and `xfloat` treat their inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mode {
    pub strict: bool,
    pub json: bool,
}

pub fn convert(
    out: &mut impl Write,
    target: Target,
    inputs: &[String],
    mode: Mode,
) -> anyhow::Result<()> {
    for arg in inputs {
        let value = if mode.json {
            json_value(arg)?
        } else {
            text_value(arg)
        };
        let result = if mode.strict {
            try_coerce(&value, target)
                .with_context(|| format!("cannot convert '{arg}' to {target}"))?
        } else {
            coerce(&value, target)
        };
        debug!(input = %arg, %target, ?result, "converted");
        writeln!(out, "{}", render(&result))?;
    }
    Ok(())
}

pub fn xfloat(out: &mut impl Write, inputs: &[String], strict: bool) -> anyhow::Result<()> {
    for arg in inputs {
        let value = if strict {
            dyncast::try_float_from_x_string(arg)
                .with_context(|| format!("cannot read '{arg}' as a number"))?
        } else {
            dyncast::float_from_x_string(arg)
        };
        writeln!(out, "{}", format_f64(value))?;
    }
    Ok(())
}

pub fn stats(out: &mut impl Write, stat: Stat, values: &[String]) -> anyhow::Result<()> {
    if values.is_empty() && matches!(stat, Stat::Min | Stat::Max | Stat::Median) {
        bail!("{} needs at least one value", stat_name(stat));
    }
    let result = match stat {
        Stat::Count => {
            writeln!(out, "{}", dyncast_xmath::count(values))?;
            return Ok(());
        }
        Stat::Sum => dyncast_xmath::sum(values),
        Stat::Min => dyncast_xmath::min(values),
        Stat::Max => dyncast_xmath::max(values),
        Stat::Median => dyncast_xmath::median(values),
        Stat::Mean => dyncast_xmath::arithmetic(values),
        Stat::Harmonic => dyncast_xmath::harmonic(values),
        Stat::Geometric => dyncast_xmath::geometric(values),
    };
    writeln!(out, "{}", format_f64(result))?;
    Ok(())
}

pub fn math(out: &mut impl Write, op: &MathOp) -> anyhow::Result<()> {
    match *op {
        MathOp::Sqrt { n } => writeln!(out, "{}", dyncast_xmath::sqrt(n))?,
        MathOp::Prime { n } => {
            let n = usize::try_from(n).context("prime index too large")?;
            writeln!(out, "{}", dyncast_xmath::prime(n))?;
        }
        MathOp::DegToRad { deg } => {
            writeln!(out, "{}", format_f64(dyncast_xmath::deg_to_rad(deg)))?;
        }
        MathOp::RadToDeg { rad } => {
            writeln!(out, "{}", format_f64(dyncast_xmath::rad_to_deg(rad)))?;
        }
        MathOp::Round { value } => writeln!(out, "{}", dyncast_xmath::round(value))?,
    }
    Ok(())
}

pub fn layouts(out: &mut impl Write) -> anyhow::Result<()> {
    for layout in LAYOUTS {
        writeln!(out, "{layout}")?;
    }
    Ok(())
}

/// Bytes print as lowercase hex, everything else as its string coercion.
fn render(value: &Value) -> String {
    match value {
        Value::Bytes(bytes) => bytes.iter().map(|byte| format!("{byte:02x}")).collect(),
        other => to_string(other),
    }
}

fn stat_name(stat: Stat) -> &'static str {
    match stat {
        Stat::Sum => "sum",
        Stat::Min => "min",
        Stat::Max => "max",
        Stat::Median => "median",
        Stat::Mean => "mean",
        Stat::Harmonic => "harmonic",
        Stat::Geometric => "geometric",
        Stat::Count => "count",
    }
}
