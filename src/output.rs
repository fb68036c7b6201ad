//! CLI output formatting for a conversion run.
//!
//! Output is component-first: each generated component leads with its
//! positional index and identifier, followed by `→` and the file written.
//! Source paths and native imports follow as indented context lines.
//!
//! ```text
//! 001 ArrowLeft → Arrow-left.js
//!     Source: arrow-left.svg
//! 002 Close → Close.js
//!     Source: close.svg
//!     Imports: Svg, Path
//!
//! Failed
//! 001 broken.svg
//!     unparsable input icons/broken.svg: unexpected end of stream
//!
//! Generated 2 components, 1 failed
//! ```
//!
//! Format functions are pure and return `Vec<String>` for testability; the
//! `print_*` wrapper writes to stdout.

use crate::process::{GeneratedFile, ProcessReport};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Lines describing one generated component.
fn generated_lines(index: usize, file: &GeneratedFile) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} \u{2192} {}",
        format_index(index),
        file.identifier,
        file_name(&file.output)
    )];
    lines.push(format!("{}Source: {}", indent(1), file_name(&file.source)));
    if !file.native_imports.is_empty() {
        lines.push(format!(
            "{}Imports: {}",
            indent(1),
            file.native_imports.join(", ")
        ));
    }
    lines
}

/// Format the outcome of a run.
pub fn format_report(report: &ProcessReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, file) in report.generated.iter().enumerate() {
        lines.extend(generated_lines(i + 1, file));
    }

    if !report.failed.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Failed".to_string());
        for (i, err) in report.failed.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), file_name(err.path())));
            lines.push(format!("{}{}", indent(1), err));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    let mut summary = format!("Generated {}", plural(report.generated.len(), "component"));
    if !report.failed.is_empty() {
        summary.push_str(&format!(", {} failed", report.failed.len()));
    }
    lines.push(summary);

    lines
}

/// Print the run report to stdout.
pub fn print_report(report: &ProcessReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::FileError;
    use std::path::PathBuf;

    fn generated(identifier: &str, source: &str, output: &str, imports: &[&str]) -> GeneratedFile {
        GeneratedFile {
            source: PathBuf::from(source),
            identifier: identifier.to_string(),
            output: PathBuf::from(output),
            native_imports: imports.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn empty_report_only_has_summary() {
        let lines = format_report(&ProcessReport::default());
        assert_eq!(lines, vec!["Generated 0 components"]);
    }

    #[test]
    fn generated_components_are_listed_with_source() {
        let report = ProcessReport {
            generated: vec![
                generated("ArrowLeft", "icons/arrow-left.svg", "out/Arrow-left.js", &[]),
                generated("Close", "icons/close.svg", "out/Close.js", &[]),
            ],
            failed: Vec::new(),
        };
        let lines = format_report(&report);
        assert_eq!(
            lines,
            vec![
                "001 ArrowLeft \u{2192} Arrow-left.js",
                "    Source: arrow-left.svg",
                "002 Close \u{2192} Close.js",
                "    Source: close.svg",
                "",
                "Generated 2 components",
            ]
        );
    }

    #[test]
    fn native_imports_are_shown() {
        let report = ProcessReport {
            generated: vec![generated("Icon", "icon.svg", "Icon.js", &["Svg", "Path"])],
            failed: Vec::new(),
        };
        let lines = format_report(&report);
        assert!(lines.contains(&"    Imports: Svg, Path".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 1 component");
    }

    #[test]
    fn failures_are_listed_after_generated() {
        let report = ProcessReport {
            generated: vec![generated("Good", "good.svg", "Good.js", &[])],
            failed: vec![FileError::UnsupportedTag {
                path: PathBuf::from("icons/titled.svg"),
                tag: "title".to_string(),
            }],
        };
        let lines = format_report(&report);
        let failed_at = lines.iter().position(|l| l == "Failed").unwrap();
        assert_eq!(lines[failed_at + 1], "001 titled.svg");
        assert!(lines[failed_at + 2].contains("unsupported tag <title>"));
        assert_eq!(lines.last().unwrap(), "Generated 1 component, 1 failed");
    }
}
