use anyhow::bail;
use scan_core::Decision;

use crate::commands::shared::parse::parse_enum;

/// One line of input to the review loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewCommand {
    Status,
    Decide(Decision),
    Undo,
    Summary,
    /// `None` means the configured default.
    Recent(Option<u32>),
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  status, show     show the current scan and progress
  healthy, h       mark the current scan healthy
  sick, s          mark the current scan sick
  undo, u          take back the last decision
  summary          show progress counts
  recent [n]       list the most recent decisions
  reset            start over from the first scan
  help             show this message
  quit, exit       leave the review";

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<ReviewCommand>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();
    if let Some(extra) = words.next() {
        bail!("unexpected argument '{extra}' (type 'help' for commands)");
    }

    let command = match (verb.to_ascii_lowercase().as_str(), argument) {
        ("status" | "show", None) => ReviewCommand::Status,
        ("h", None) => ReviewCommand::Decide(Decision::Healthy),
        ("s", None) => ReviewCommand::Decide(Decision::Sick),
        ("healthy" | "sick", None) => ReviewCommand::Decide(parse_enum(verb, "decision")?),
        ("undo" | "u", None) => ReviewCommand::Undo,
        ("summary", None) => ReviewCommand::Summary,
        ("recent", limit) => ReviewCommand::Recent(limit.map(parse_limit).transpose()?),
        ("reset", None) => ReviewCommand::Reset,
        ("help" | "?", None) => ReviewCommand::Help,
        ("quit" | "exit" | "q", None) => ReviewCommand::Quit,
        (_, Some(extra)) => bail!("'{verb}' takes no argument, got '{extra}'"),
        (other, None) => bail!("unknown command '{other}' (type 'help' for commands)"),
    };
    Ok(Some(command))
}

/// Non-positive limits are accepted and clamp to zero.
fn parse_limit(raw: &str) -> anyhow::Result<u32> {
    let value: i64 = raw
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid limit '{raw}': expected a whole number"))?;
    Ok(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
}
