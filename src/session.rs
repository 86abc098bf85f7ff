use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};

use crate::cli::{split_line, SessionLine};
use crate::pages::Pages;
use crate::render::OutputFormat;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub executed: usize,
    pub rejected: usize,
}

/// Reads commands line by line until `exit`, `quit` or end of input.
/// A bad line is reported and the session carries on.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    pages: &mut Pages,
    format: OutputFormat,
    prompt: bool,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(out, "dormdesk> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading session input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        let args = match split_line(line) {
            Ok(args) => args,
            Err(err) => {
                writeln!(out, "❌ {err}")?;
                stats.rejected += 1;
                continue;
            }
        };
        let parsed = match SessionLine::try_parse_from(args) {
            Ok(parsed) => parsed,
            Err(err) => {
                write!(out, "{err}")?;
                stats.rejected += 1;
                continue;
            }
        };

        log::debug!("running {:?}", parsed.cmd);
        match parsed.cmd.run(pages, format) {
            Ok(Some(text)) => writeln!(out, "{text}")?,
            Ok(None) => {}
            Err(err) => {
                log::warn!("command failed: {:#}", err);
                writeln!(out, "❌ {err:#}")?;
            }
        }
        out.flush()?;
        stats.executed += 1;
    }

    log::info!(
        "session finished executed={} rejected={}",
        stats.executed,
        stats.rejected
    );
    Ok(stats)
}
