use crate::OutputFormat;
use crate::config::Config;
use crate::time::{Precision, PrecisionRange, format_range, format_time, parse_time_str};
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct Formatted {
    seconds: u32,
    range: PrecisionRange,
    text: String,
}

/// Parse a duration literal and print the seconds and inferred range.
pub fn parse(literal: &str, format: OutputFormat) -> Result<()> {
    let parsed = parse_time_str(literal)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&parsed).context("Failed to serialize")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{} ({})", parsed.seconds, parsed.range);
        }
    }

    Ok(())
}

/// Format seconds with the given precisions, falling back to `[display]` in config.
pub fn format(
    config: &Config,
    seconds: u32,
    upper: Option<Precision>,
    lower: Option<Precision>,
    format: OutputFormat,
) -> Result<()> {
    let upper = upper.unwrap_or(config.display.upper);
    let lower = lower.unwrap_or(config.display.lower);
    let text = format_time(seconds, upper, lower)?;
    let range = PrecisionRange::new(upper, lower)?;

    print_formatted(
        Formatted {
            seconds,
            range,
            text,
        },
        format,
    )
}

/// Parse a literal, then render it back with the range it was written in.
pub fn convert(literal: &str, format: OutputFormat) -> Result<()> {
    let parsed = parse_time_str(literal)?;
    let text = format_range(parsed.seconds, parsed.range)?;

    print_formatted(
        Formatted {
            seconds: parsed.seconds,
            range: parsed.range,
            text,
        },
        format,
    )
}

fn print_formatted(formatted: Formatted, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&formatted).context("Failed to serialize")?;
            println!("{}", json);
        }
        OutputFormat::Text => println!("{}", formatted.text),
    }
    Ok(())
}
