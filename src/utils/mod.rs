/// Utility modules for the converter
///
/// This module contains the crate error taxonomy, file handling helpers and
/// the console output formatter.

pub mod error;
pub mod file_utils;
pub mod output_formatter;
