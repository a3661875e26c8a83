//! Pure formatting functions for console output.
//!
//! Progress goes to stdout; errors and warnings go to stderr so they stand
//! out in CI logs.

use console::style;

use crate::analyzer::CommitDecision;
use crate::boundary::BoundaryWarning;
use crate::domain::bump::describe_index;

const MAX_LISTED_COMMITS: usize = 10;
const MAX_SUBJECT_WIDTH: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Echo an external command before it runs.
pub fn display_command(command: &str) {
    println!("{}", style(format!("+ {}", command)).dim());
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the commit subjects found since `tag`.
///
/// Shows up to 10 subjects, truncated to 60 characters, and the count of any
/// remaining ones.
pub fn display_commit_analysis(subjects: &[String], tag: &str) {
    println!(
        "\n{}",
        style(format!("Analyzing {} commits since '{}'", subjects.len(), tag)).bold()
    );

    for (i, subject) in subjects.iter().take(MAX_LISTED_COMMITS).enumerate() {
        println!("  {}. {}", i + 1, truncate(subject, MAX_SUBJECT_WIDTH));
    }

    if subjects.len() > MAX_LISTED_COMMITS {
        println!(
            "  ... and {} more commits",
            subjects.len() - MAX_LISTED_COMMITS
        );
    }
}

/// Display the classifier's decision.
pub fn display_decision(decision: &CommitDecision) {
    let bump = decision
        .bump
        .map(describe_index)
        .unwrap_or_else(|| "none".to_string());
    display_status(&format!(
        "Release requested: {}, bump: {}",
        decision.release, bump
    ));
}

/// Display the proposed tag change (or initial tag).
pub fn display_proposed_tag(old_tag: Option<&str>, new_tag: &str) {
    match old_tag {
        Some(old) => {
            println!("\n{}", style("Proposed Tag Change:").bold());
            println!("  From: {}", style(old).red());
            println!("  To:   {}", style(new_tag).green());
        }
        None => {
            println!("\n{}", style("Initial Tag:").bold());
            println!("  New tag: {}", style(new_tag).green());
        }
    }
}

/// Shorten `text` to at most `width` characters.
fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
