//! Interactive review loop: one command per input line against a single
//! session in the application's `SessionStore`.

mod parse;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use anyhow::Context;
use scan_core::ReviewError;
use scan_core::responses::{DecisionResponse, RecentResponse, StatusResponse, UndoResponse};
use serde_json::json;

use crate::cli::root_commands::ReviewArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{TableView, render, render_view};
use crate::ui;

pub use parse::{HELP, ReviewCommand, parse_line};

/// Per-run settings for [`run_loop`].
#[derive(Clone, Debug)]
pub struct LoopSettings {
    pub session_key: String,
    pub format: OutputFormat,
    /// Global `--limit`, used by `recent` without an argument.
    pub limit: Option<u32>,
    pub prompt: bool,
}

/// Handle `scan-review review`.
pub fn handle(args: &ReviewArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = LoopSettings {
        session_key: ctx.session_key(args.session.as_deref()),
        format: flags.format,
        limit: flags.limit,
        prompt: args.script.is_none() && ui::prefs().interactive,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &args.script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open script {path}"))?;
            run_loop(BufReader::new(file), &mut out, ctx, &settings)
        }
        None => run_loop(std::io::stdin().lock(), &mut out, ctx, &settings),
    }
}

/// Read commands from `input` until EOF or `quit`, writing responses to `out`.
///
/// Bad input and decisions on an exhausted queue are reported and the loop
/// keeps going. Only I/O and scan-loading failures end it with an error.
pub fn run_loop<R, W>(
    input: R,
    out: &mut W,
    ctx: &mut AppContext,
    settings: &LoopSettings,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let key = settings.session_key.as_str();
    let status = StatusResponse::from_session(ctx.session(key)?);
    emit_view(out, &status, settings.format)?;

    let mut lines = input.lines();
    loop {
        if settings.prompt {
            write!(out, "review> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read review input")?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                emit_notice(out, "invalid_command", &error.to_string(), settings.format)?;
                continue;
            }
        };

        if command == ReviewCommand::Quit {
            break;
        }
        execute(command, out, ctx, settings)?;
    }

    tracing::debug!(session_key = key, "review loop finished");
    Ok(())
}

fn execute<W: Write>(
    command: ReviewCommand,
    out: &mut W,
    ctx: &mut AppContext,
    settings: &LoopSettings,
) -> anyhow::Result<()> {
    let key = settings.session_key.as_str();
    let format = settings.format;

    match command {
        ReviewCommand::Status => {
            let session = ctx.session(key)?;
            emit_view(out, &StatusResponse::from_session(session), format)
        }
        ReviewCommand::Decide(decision) => {
            let session = ctx.session(key)?;
            match session.record_decision(decision) {
                Ok(recorded) => {
                    let response = DecisionResponse {
                        recorded,
                        summary: session.summary(),
                    };
                    emit_view(out, &response, format)?;
                    if let (OutputFormat::Table, Some(next)) = (format, session.current_item()) {
                        writeln!(out, "\nNext: {} ({})", next.patient_name, next.scan_type)?;
                    }
                    Ok(())
                }
                Err(error @ ReviewError::EmptyQueue) => {
                    emit_notice(out, "empty_queue", &error.to_string(), format)
                }
            }
        }
        ReviewCommand::Undo => {
            let session = ctx.session(key)?;
            let undone = session.undo();
            let response = UndoResponse {
                undone,
                summary: session.summary(),
            };
            emit_view(out, &response, format)
        }
        ReviewCommand::Summary => {
            let summary = ctx.session(key)?.summary();
            emit_view(out, &summary, format)
        }
        ReviewCommand::Recent(local) => {
            let limit = effective_limit(local, settings.limit, ctx.config.review.recent_limit);
            let session = ctx.session(key)?;
            emit_view(out, &RecentResponse::from_session(session, limit), format)
        }
        ReviewCommand::Reset => {
            let session = ctx.reset_session(key)?;
            let status = StatusResponse::from_session(session);
            emit_notice(out, "reset", "Session reset. Starting from the first scan.", format)?;
            emit_view(out, &status, format)
        }
        ReviewCommand::Help => emit_notice(out, "help", HELP, format),
        ReviewCommand::Quit => Ok(()),
    }
}

fn emit_view<W, T>(out: &mut W, value: &T, format: OutputFormat) -> anyhow::Result<()>
where
    W: Write,
    T: serde::Serialize + TableView,
{
    writeln!(out, "{}", render_view(value, format)?)?;
    Ok(())
}

/// Plain text in table mode, a `{kind, message}` object otherwise.
fn emit_notice<W: Write>(
    out: &mut W,
    kind: &str,
    message: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => writeln!(out, "{message}")?,
        OutputFormat::Json | OutputFormat::Raw => {
            let notice = json!({ "notice": kind, "message": message });
            writeln!(out, "{}", render(&notice, format)?)?;
        }
    }
    Ok(())
}
