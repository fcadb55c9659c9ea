//! Output formatting utilities

use crate::application::StripReport;

/// Format a strip report for display
pub fn format_strip_report(report: &StripReport) -> String {
    if report.changed_files == 0 {
        return format!("No tags found in {} file(s).", report.scanned_files);
    }

    let mut output = if report.dry_run {
        format!(
            "Dry run: {} file(s) would be updated with {} tag(s) removed.",
            report.changed_files, report.total_removed
        )
    } else {
        format!(
            "Stripped {} tag(s) from {} file(s).",
            report.total_removed, report.changed_files
        )
    };

    for change in &report.changes {
        output.push_str(&format!(
            "\n  {}: {} tag(s)",
            change.path.display(),
            change.removed
        ));
    }
    output
}
