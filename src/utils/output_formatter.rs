/// Output formatter for analysis and conversion reports
///
/// This module renders the report structs into the colored, human-readable
/// text the tool prints after each phase. The console output is a diagnostic
/// side channel, not a machine-readable format.

use colored::Colorize;

use crate::core::analyzer::{AnalysisReport, PREVIEW_LINES};
use crate::core::converter::{ConversionReport, SizeVerdict};
use crate::core::payload::{END_MARKER, START_MARKER};

/// Maximum characters of a preview line shown before truncation
const PREVIEW_WIDTH: usize = 80;

/// Format the analyzer's diagnostic report for console output.
///
/// # Arguments
///
/// * `report` - Statistics gathered by the analyzer
///
/// # Returns
///
/// Formatted string for console output
pub fn format_analysis(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "=== File Analysis ===".yellow().bold()));
    output.push_str(&format!("Total characters: {}\n", report.total_chars));
    output.push_str(&format!("Hex characters: {}\n", report.hex_chars));
    output.push_str(&format!("Potential bytes: {}\n", report.potential_bytes));

    output.push_str(&marker_line(START_MARKER, report.has_start_marker));
    output.push_str(&marker_line(END_MARKER, report.has_end_marker));

    output.push_str(&format!("\nFirst {} lines:\n", PREVIEW_LINES));
    for (i, line) in report.preview.iter().enumerate() {
        output.push_str(&format!("{:2}: {}\n", i + 1, truncate_line(line)));
    }

    output
}

/// Format the converter's result report, including the size verdict.
///
/// # Arguments
///
/// * `report` - Outcome of a completed conversion
///
/// # Returns
///
/// Formatted string for console output
pub fn format_conversion(report: &ConversionReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Conversion Results:".yellow().bold()));
    output.push_str(&format!("Expected bytes: {}\n", report.expected_bytes));
    output.push_str(&format!("Actual bytes: {}\n", report.actual_bytes));
    output.push_str(&format!(
        "Image dimensions: {}x{}\n",
        report.width, report.height
    ));
    output.push_str(&format!("Output file: {}\n", report.output_path.display()));

    match report.verdict() {
        SizeVerdict::Match => {
            output.push_str(&format!(
                "{}\n",
                "✓ Perfect match! Conversion successful.".green()
            ));
        }
        SizeVerdict::Surplus(extra) => {
            output.push_str(&format!(
                "{}\n",
                format!("⚠ Size mismatch. Difference: +{} bytes", extra).yellow()
            ));
            output.push_str("File is larger than expected - might contain extra data\n");
        }
        SizeVerdict::Deficit(missing) => {
            output.push_str(&format!(
                "{}\n",
                format!("⚠ Size mismatch. Difference: -{} bytes", missing).yellow()
            ));
            output.push_str("File is smaller than expected - might be incomplete\n");
        }
    }

    output
}

/// Render one marker-presence line.
fn marker_line(marker: &str, found: bool) -> String {
    if found {
        format!("{} Found {} marker\n", "✓".green(), marker)
    } else {
        format!("{} {} marker not found\n", "-".yellow(), marker)
    }
}

/// Truncate a preview line, appending an ellipsis when it was cut.
fn truncate_line(line: &str) -> String {
    if line.chars().count() > PREVIEW_WIDTH {
        let cut: String = line.chars().take(PREVIEW_WIDTH).collect();
        format!("{}...", cut)
    } else {
        line.to_string()
    }
}
