//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each section leads
//! with what was produced — captions, documents, the manifest — with file
//! names as secondary context after a `→`. This keeps the output readable as
//! an inventory while still letting users trace results back to files.
//!
//! ## Check
//!
//! ```text
//! Form
//!     Project: cool-app
//!     Source: https://github.com/alice/cool-app
//!     Tone: professional
//!     Tags: React, TypeScript, AI
//!     Variations: 2
//!     Tech stack: detected
//! ```
//!
//! ## Generate
//!
//! ```text
//! Captions
//!     Caption 1 → caption-1.txt (412 bytes)
//!     Caption 2 → caption-2.txt (468 bytes)
//!
//! Documents
//!     README → README.md (1834 bytes)
//!     README preview → readme-preview.html (3020 bytes)
//!     Landing page → landing.html (9120 bytes)
//!
//! Manifest
//!     bundle.json
//!
//! Generated 2 captions, 3 documents → out
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::form::FormState;
use crate::generate::{Artifact, WriteReport};

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

fn artifact_line(artifact: &Artifact) -> String {
    format!(
        "    {} \u{2192} {} ({} bytes)",
        artifact.label, artifact.filename, artifact.bytes
    )
}

// ============================================================================
// Check output
// ============================================================================

/// Format the resolved form for the `check` command.
///
/// Optional fields the form left empty are skipped rather than shown blank.
pub fn format_check_output(form: &FormState) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Form".to_string());
    lines.push(format!("    Project: {}", form.project_name()));
    if !form.repo_url.is_empty() {
        lines.push(format!("    Source: {}", form.repo_url));
    }
    if !form.project_description.is_empty() {
        lines.push(format!(
            "    Description: {}",
            truncate_desc(&form.project_description, 60)
        ));
    }
    if !form.demo_url.is_empty() {
        lines.push(format!("    Demo: {}", form.demo_url));
    }
    lines.push(format!("    Tone: {}", form.tone));
    lines.push(format!("    Tags: {}", form.tag_list().join(", ")));
    lines.push(format!("    Variations: {}", form.variations));
    let stack = if form.auto_detect_tech {
        "detected"
    } else {
        "generic"
    };
    lines.push(format!("    Tech stack: {stack}"));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(form: &FormState) {
    for line in format_check_output(form) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format the write report produced by a full generation run.
pub fn format_generate_output(report: &WriteReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Captions".to_string());
    for artifact in &report.captions {
        lines.push(artifact_line(artifact));
    }

    lines.push(String::new());
    lines.push("Documents".to_string());
    for artifact in &report.documents {
        lines.push(artifact_line(artifact));
    }

    lines.push(String::new());
    lines.push("Manifest".to_string());
    lines.push(format!("    {}", report.manifest.filename));

    lines.push(String::new());
    lines.push(format!(
        "Generated {} captions, {} documents \u{2192} {}",
        report.captions.len(),
        report.documents.len(),
        report.out_dir.display()
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &WriteReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
