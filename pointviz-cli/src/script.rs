//! Text commands for replaying an interactive session.
//!
//! One command per line; blank lines and `#` comments are ignored:
//!
//! ```text
//! count 50
//! domain -10 10 0 5      # min_x max_x min_y max_y
//! radius 4
//! color red              # or: color 12 34 56
//! generate
//! redraw
//! ```

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use pointviz::{ColorPreset, Command, Rgb};

/// A script line that could not be turned into a command
#[derive(Debug)]
pub struct ParseIssue {
    pub line: usize,
    pub text: String,
    pub error: anyhow::Error,
}

/// Parse a whole script, keeping going past malformed lines.
///
/// Returns the commands (with their 1-based line numbers) and the lines that
/// failed to parse.
pub fn parse_script(source: &str) -> (Vec<(usize, Command)>, Vec<ParseIssue>) {
    let mut commands = Vec::new();
    let mut issues = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        match parse_line(text) {
            Ok(command) => commands.push((line, command)),
            Err(error) => issues.push(ParseIssue {
                line,
                text: text.to_string(),
                error,
            }),
        }
    }

    (commands, issues)
}

/// Parse a single command line
pub fn parse_line(text: &str) -> Result<Command> {
    let mut words = text.split_whitespace();
    let keyword = words
        .next()
        .ok_or_else(|| anyhow!("empty command"))?
        .to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let command = match keyword.as_str() {
        "count" => {
            expect_args(&keyword, &args, 1)?;
            Command::SetCount(number(args[0], "count")?)
        }
        "domain" => {
            expect_args(&keyword, &args, 4)?;
            Command::SetDomain {
                min_x: number(args[0], "min_x")?,
                max_x: number(args[1], "max_x")?,
                min_y: number(args[2], "min_y")?,
                max_y: number(args[3], "max_y")?,
            }
        }
        "radius" => {
            expect_args(&keyword, &args, 1)?;
            Command::SetRadius(number(args[0], "radius")?)
        }
        "color" => match args.as_slice() {
            [name] => ColorPreset::from_str(name)
                .map(Command::from)
                .map_err(|_| anyhow!("unknown color '{name}' (blue, red, green, purple)"))?,
            [r, g, b] => Command::SetColor(Rgb::new(
                number(r, "red")?,
                number(g, "green")?,
                number(b, "blue")?,
            )),
            _ => bail!("color takes a preset name or three 0-255 components"),
        },
        "generate" => {
            expect_args(&keyword, &args, 0)?;
            Command::Generate
        }
        "redraw" => {
            expect_args(&keyword, &args, 0)?;
            Command::Redraw
        }
        other => bail!("unknown command '{other}'"),
    };

    Ok(command)
}

fn expect_args(keyword: &str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() != expected {
        bail!(
            "'{keyword}' takes {expected} argument(s), got {}",
            args.len()
        );
    }
    Ok(())
}

fn number<T>(text: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse::<T>()
        .with_context(|| format!("invalid {what} '{text}'"))
}
