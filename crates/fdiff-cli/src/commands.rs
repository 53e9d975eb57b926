use std::fmt::Write;
use std::process::ExitCode;

use anyhow::bail;
use colored::Colorize;
use fdiff_diff::{read_document, DiffReport, LineReport, CARET, NO_DIFFERENCES};
use fdiff_types::has_terminator;
use tracing::debug;

use crate::cli::*;

/// Exit status for a failed run (bad arguments, unreadable files).
pub const ERROR_EXIT: u8 = 2;

/// Whether a comparison found a difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Identical,
    Differ,
}

impl Outcome {
    fn from_identical(identical: bool) -> Self {
        if identical {
            Self::Identical
        } else {
            Self::Differ
        }
    }

    /// 0 for identical input, 1 when a difference was reported.
    pub fn code(self) -> u8 {
        match self {
            Self::Identical => 0,
            Self::Differ => 1,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<Outcome> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    match cli.command {
        Command::Files(args) => cmd_files(args, &cli.format),
        Command::Lines(args) => cmd_lines(args, &cli.format),
    }
}

fn cmd_files(args: FilesArgs, format: &OutputFormat) -> anyhow::Result<Outcome> {
    let left = read_document(&args.left)?;
    let right = read_document(&args.right)?;
    debug!(left = %args.left, right = %args.right, "comparing files");

    let report = DiffReport::from_documents(&left, &right);
    match format {
        OutputFormat::Text => print!("{}", render_text(&report.rendered, true)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(Outcome::from_identical(report.identical))
}

fn cmd_lines(args: LinesArgs, format: &OutputFormat) -> anyhow::Result<Outcome> {
    if has_terminator(&args.left) || has_terminator(&args.right) {
        bail!("arguments must be single lines without line feeds or carriage returns");
    }

    let report = LineReport::from_lines(&args.left, &args.right);
    match format {
        OutputFormat::Text => print!("{}", render_text(&report.rendered, false)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(Outcome::from_identical(report.identical))
}

/// Color a rendered report for the terminal: the `Line N:` header (if any)
/// and the caret are highlighted. With colors off the text is unchanged.
fn render_text(rendered: &str, has_header: bool) -> String {
    if rendered == NO_DIFFERENCES {
        return format!("{}\n", "No differences".green().bold());
    }

    let marker_row = if has_header { 2 } else { 1 };
    let mut out = String::with_capacity(rendered.len());
    for (row, text) in rendered.lines().enumerate() {
        // Writing to a String cannot fail.
        let _ = if row == marker_row {
            let fill = text.trim_end_matches(CARET);
            writeln!(out, "{}{}", fill.dimmed(), CARET.to_string().red().bold())
        } else if has_header && row == 0 {
            writeln!(out, "{}", text.yellow().bold())
        } else {
            writeln!(out, "{text}")
        };
    }
    out
}
