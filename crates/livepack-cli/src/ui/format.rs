//! Formatting utilities for sizes, durations, and build summaries.

use console::{Term, style};
use livepack_bundler::{BuildReport, FileKind};
use std::time::Duration;

/// Format file size in human-readable format.
///
/// # Examples
///
/// ```
/// use livepack_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format (ms, s, m:s).
///
/// ```
/// use std::time::Duration;
/// use livepack_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

fn kind_label(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Bundle => "bundle",
        FileKind::SourceMap => "map",
        FileKind::Asset => "asset",
    }
}

/// Print the committed files with their sizes, then the totals.
pub fn print_build_summary(report: &BuildReport) {
    let term = Term::stderr();
    let width = (term.size().1 as usize).min(80);
    let name_width = report
        .files()
        .iter()
        .map(|f| f.filename.len())
        .max()
        .unwrap_or(0);

    eprintln!("\n{}", style("Build Summary").bold().underlined());
    eprintln!("{}", "─".repeat(width));

    for file in report.files() {
        eprintln!(
            "  {} {:<name_width$}  {:>10}  {}",
            style("▸").blue(),
            style(&file.filename).white().bright().bold(),
            style(format_size(file.size)).dim(),
            style(kind_label(file.kind)).dim(),
        );
    }

    eprintln!("{}", "─".repeat(width));
    eprintln!(
        "  {} {} in {}",
        style("Total:").bold(),
        style(format_size(report.total_size())).green(),
        style(format_duration(report.duration())).green()
    );
    eprintln!(
        "  {} {}",
        style("Output:").bold(),
        report.output_dir().display()
    );
}
