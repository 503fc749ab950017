/// Capture file analyzer
///
/// This file contains the diagnostic pass that runs before a conversion is
/// attempted: it gathers character statistics, checks for the frame markers
/// and keeps a short preview of the leading lines. Analysis never creates or
/// mutates any file.

use std::path::Path;

use log::info;

use crate::core::payload::{self, count_hex_digits};
use crate::utils::error::Result;
use crate::utils::file_utils::read_text_file;

/// Number of leading lines kept for the preview
pub const PREVIEW_LINES: usize = 10;

/// Diagnostic statistics for a capture file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Total characters in the capture
    pub total_chars: usize,
    /// Characters that are hexadecimal digits
    pub hex_chars: usize,
    /// Bytes the hex digits could decode to (integer division by two)
    pub potential_bytes: usize,
    /// Whether the DATA_START marker occurs anywhere in the capture
    pub has_start_marker: bool,
    /// Whether the DATA_END marker occurs anywhere in the capture
    pub has_end_marker: bool,
    /// Up to the first ten lines, untruncated
    pub preview: Vec<String>,
}

/// Analyze a capture file and gather its diagnostic statistics.
///
/// The statistics help debug a capture that does not convert cleanly: a low
/// hex count points at a truncated serial dump, missing markers at firmware
/// output that was cropped, and the preview shows what actually landed in
/// the file.
///
/// # Arguments
///
/// * `path` - Path to the capture file
///
/// # Returns
///
/// The analysis report, or the read failure for the caller's boundary to log
pub fn analyze_file(path: &Path) -> Result<AnalysisReport> {
    info!("Analyzing capture: {}", path.display());

    let content = read_text_file(path)?;

    let hex_chars = count_hex_digits(&content);
    let report = AnalysisReport {
        total_chars: content.chars().count(),
        hex_chars,
        potential_bytes: hex_chars / 2,
        has_start_marker: content.contains(payload::START_MARKER),
        has_end_marker: content.contains(payload::END_MARKER),
        preview: content
            .split('\n')
            .take(PREVIEW_LINES)
            .map(str::to_owned)
            .collect(),
    };

    info!(
        "Capture statistics: {} chars total, {} hex digits, {} potential bytes",
        report.total_chars, report.hex_chars, report.potential_bytes
    );

    Ok(report)
}
