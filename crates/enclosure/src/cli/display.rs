//! Common display utilities for CLI commands.

use std::path::Path;

use colored::Colorize;
use enclosure::{Language, LineRange, NodeSummary, Validity};

const MAX_DISPLAY_LINES: usize = 15;

/// Describe the enclosing node for `range`, with a source excerpt.
///
/// Shows up to `MAX_DISPLAY_LINES` lines of the node's text. If there are
/// more, shows "... and N more lines".
pub fn print_context(path: &Path, range: LineRange, context: Option<&NodeSummary>) {
    let location = format!("{}:{range}", path.display());

    let Some(node) = context else {
        println!(
            "{} {}",
            location.white().bold(),
            "no enclosing context".dimmed()
        );
        return;
    };

    let what = match (&node.label, &node.name) {
        (Some(label), Some(name)) => format!("{label} {}", name.cyan().bold()),
        (Some(label), None) => label.clone(),
        (None, Some(name)) => format!("{} {}", node.kind, name.cyan().bold()),
        (None, None) => node.kind.clone(),
    };

    println!(
        "{} is inside {} {}",
        location.white().bold(),
        what,
        format!(
            "({}, lines {}-{})",
            node.kind, node.span.start_line, node.span.end_line
        )
        .dimmed()
    );
    println!();

    let lines: Vec<&str> = node.text.lines().collect();
    let first_line = node.span.start_line as usize;
    let width = (first_line + lines.len()).to_string().len();

    for (offset, line) in lines.iter().take(MAX_DISPLAY_LINES).enumerate() {
        let number = first_line + offset;
        let gutter = format!("{number:>width$} │");
        if range.line_start() <= number && number <= range.line_end() {
            println!("  {} {line}", gutter.green());
        } else {
            println!("  {} {}", gutter.dimmed(), line.dimmed());
        }
    }

    if lines.len() > MAX_DISPLAY_LINES {
        println!(
            "  {} ... and {} more lines",
            " ".repeat(width + 2),
            lines.len() - MAX_DISPLAY_LINES
        );
    }
}

/// Report the outcome of a dry run.
pub fn print_validity(path: &Path, language: Language, validity: &Validity) {
    if validity.valid {
        println!(
            "{} {} {}",
            "✓".green().bold(),
            path.display().to_string().white().bold(),
            format!("parses as {language}").dimmed()
        );
    } else {
        println!(
            "{} {} {}: {}",
            "✗".red().bold(),
            path.display().to_string().white().bold(),
            format!("failed to parse as {language}").dimmed(),
            validity.error
        );
    }
}
