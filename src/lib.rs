/// RGB565 Hex to Binary Converter
///
/// This library converts text captures of hexadecimal pixel data, as printed
/// by an ESP32 camera over its serial channel, into raw binary RGB565 image
/// files. It also provides a diagnostic analyzer for inspecting captures
/// that do not convert cleanly.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export the main types for convenience
pub use crate::core::analyzer::{analyze_file, AnalysisReport};
pub use crate::core::converter::{
    convert_file, ConversionReport, ConvertOptions, SizeVerdict,
};
pub use crate::utils::error::ConvertError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert a capture using the default 96x96 frame dimensions.
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `input` - Path to the hex text capture
/// * `output` - Path for the decoded binary image
///
/// # Returns
///
/// The conversion report
pub fn convert<P, Q>(input: P, output: Q) -> crate::utils::error::Result<ConversionReport>
where
    P: AsRef<std::path::Path>,
    Q: AsRef<std::path::Path>,
{
    let options = ConvertOptions {
        input: input.as_ref().to_path_buf(),
        output: output.as_ref().to_path_buf(),
        ..ConvertOptions::default()
    };
    convert_file(&options)
}
