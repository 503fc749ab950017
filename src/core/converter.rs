/// Hex capture to RGB565 binary converter
///
/// This file contains the conversion pipeline: read the capture as text,
/// extract the payload between the frame markers (or take the whole file),
/// strip everything that is not a hex digit, decode the digit pairs and
/// write the raw bytes out. The resulting byte count is compared against
/// the frame size the camera was configured for.

use std::path::PathBuf;

use log::{info, warn};

use crate::core::payload::{self, decode_hex_pairs, extract_payload, filter_hex_digits};
use crate::utils::error::Result;
use crate::utils::file_utils::{read_text_file, write_binary_file};

/// Bytes per pixel in RGB565 encoding
pub const BYTES_PER_PIXEL: usize = 2;

/// Number of leading hex digits echoed for diagnostics
const FIRST_HEX_PREVIEW: usize = 32;

/// Conversion parameters
///
/// The defaults mirror the 96x96 RGB565 frames the capture firmware is
/// configured for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Path of the hex text capture
    pub input: PathBuf,
    /// Path of the raw binary image to write
    pub output: PathBuf,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("raw_rgb565.txt"),
            output: PathBuf::from("image.rgb565"),
            width: 96,
            height: 96,
        }
    }
}

impl ConvertOptions {
    /// Exact byte length of one full frame at these dimensions.
    pub fn expected_bytes(&self) -> usize {
        self.width as usize * self.height as usize * BYTES_PER_PIXEL
    }
}

/// How the decoded byte count compares to the expected frame size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeVerdict {
    /// Decoded exactly one frame
    Match,
    /// Decoded more bytes than one frame; the capture holds extra data
    Surplus(usize),
    /// Decoded fewer bytes than one frame; the capture is incomplete
    Deficit(usize),
}

/// Outcome of a completed conversion
///
/// The existence of this report means the read/decode/write pipeline ran to
/// completion. The size verdict is informational only and deliberately not
/// part of the success contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Characters read from the capture
    pub input_chars: usize,
    /// Whether both markers were found (false means whole-file fallback)
    pub used_markers: bool,
    /// Hex digits remaining after filtering, before odd-length trimming
    pub hex_digits: usize,
    /// Up to the first 32 filtered hex digits
    pub first_hex: String,
    /// Whether a trailing unpaired digit was dropped before decoding
    pub trimmed_odd_digit: bool,
    /// Bytes decoded and written
    pub actual_bytes: usize,
    /// Bytes one full frame should occupy
    pub expected_bytes: usize,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Where the binary image was written
    pub output_path: PathBuf,
}

impl ConversionReport {
    /// Compare the decoded size against the expected frame size.
    pub fn verdict(&self) -> SizeVerdict {
        if self.actual_bytes == self.expected_bytes {
            SizeVerdict::Match
        } else if self.actual_bytes > self.expected_bytes {
            SizeVerdict::Surplus(self.actual_bytes - self.expected_bytes)
        } else {
            SizeVerdict::Deficit(self.expected_bytes - self.actual_bytes)
        }
    }
}

/// Convert a hex text capture into a raw RGB565 binary file.
///
/// The pipeline is strictly linear: read, extract, filter, decode, write.
/// A size mismatch against `options.expected_bytes()` does not fail the
/// conversion; only read, decode and write problems do, and neither a read
/// nor a decode failure leaves an output file behind.
///
/// # Arguments
///
/// * `options` - Input/output paths and the expected frame dimensions
///
/// # Returns
///
/// A report describing the completed conversion
pub fn convert_file(options: &ConvertOptions) -> Result<ConversionReport> {
    info!("Reading from: {}", options.input.display());
    let content = read_text_file(&options.input)?;

    let input_chars = content.chars().count();
    info!("File size: {} characters", input_chars);

    let (raw_payload, used_markers) = extract_payload(&content);
    if used_markers {
        info!(
            "Found {} and {} markers",
            payload::START_MARKER,
            payload::END_MARKER
        );
    } else {
        info!("Markers not found, processing entire file");
    }

    let mut digits = filter_hex_digits(raw_payload);
    let hex_digits = digits.len();
    info!("Extracted hex characters: {}", hex_digits);

    let first_hex: String = digits.chars().take(FIRST_HEX_PREVIEW).collect();
    info!("First {} hex chars: {}", FIRST_HEX_PREVIEW, first_hex);

    let trimmed_odd_digit = digits.len() % 2 != 0;
    if trimmed_odd_digit {
        warn!("Odd number of hex characters, removing last character");
        digits.pop();
    }

    // Decode before touching the output path so a decode failure never
    // leaves a file behind.
    let bytes = decode_hex_pairs(&digits)?;

    write_binary_file(&options.output, &bytes)?;

    let report = ConversionReport {
        input_chars,
        used_markers,
        hex_digits,
        first_hex,
        trimmed_odd_digit,
        actual_bytes: bytes.len(),
        expected_bytes: options.expected_bytes(),
        width: options.width,
        height: options.height,
        output_path: options.output.clone(),
    };

    info!(
        "Conversion finished: {} bytes written, {} expected",
        report.actual_bytes, report.expected_bytes
    );

    Ok(report)
}
