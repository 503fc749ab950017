/// Integration tests for the RGB565 capture converter
///
/// These tests drive the library end to end: writing capture files to disk,
/// converting them, and checking the produced binaries and size verdicts.

use std::fs;
use std::path::{Path, PathBuf};

use rgb565_converter::core::analyzer::analyze_file;
use rgb565_converter::core::converter::{convert_file, ConvertOptions, SizeVerdict};
use rgb565_converter::ConvertError;

/// Write a capture into the test directory and build options pointing at it.
fn options_for(dir: &Path, capture: &str) -> ConvertOptions {
    let input = dir.join("capture.txt");
    fs::write(&input, capture).expect("Failed to write capture");
    ConvertOptions {
        input,
        output: dir.join("image.rgb565"),
        ..ConvertOptions::default()
    }
}

#[test]
fn test_concrete_marker_scenario() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let options = options_for(dir.path(), "noise DATA_START 00 FF 1a DATA_END trailing");

    let report = convert_file(&options).expect("Conversion failed");

    assert!(report.used_markers);
    assert_eq!(report.actual_bytes, 3);
    assert_eq!(fs::read(&options.output).unwrap(), vec![0x00, 0xFF, 0x1A]);
}

#[test]
fn test_round_trip_mixed_case() {
    let original: Vec<u8> = (0u8..=255).collect();

    // Alternate upper and lower case digits and break the payload into
    // 16-byte rows, the way a serial monitor would log it
    let mut encoded = String::new();
    for (i, byte) in original.iter().enumerate() {
        if i % 2 == 0 {
            encoded.push_str(&format!("{:02X}", byte));
        } else {
            encoded.push_str(&format!("{:02x}", byte));
        }
        encoded.push(if (i + 1) % 16 == 0 { '\n' } else { ' ' });
    }

    let capture = format!("boot log\nDATA_START\n{}\nDATA_END\ndone\n", encoded);

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let options = options_for(dir.path(), &capture);

    let report = convert_file(&options).expect("Conversion failed");

    assert_eq!(report.actual_bytes, original.len());
    assert_eq!(fs::read(&options.output).unwrap(), original);
}

#[test]
fn test_fallback_without_markers() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let options = options_for(dir.path(), "00 ff\n1A\n");

    let report = convert_file(&options).expect("Conversion failed");

    assert!(!report.used_markers);
    assert_eq!(fs::read(&options.output).unwrap(), vec![0x00, 0xFF, 0x1A]);
}

#[test]
fn test_non_hex_noise_does_not_change_output() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let clean = options_for(dir.path(), "DATA_START 00FF1a DATA_END");
    let clean_report = convert_file(&clean).expect("Conversion failed");

    let noisy_input = dir.path().join("noisy.txt");
    fs::write(
        &noisy_input,
        "DATA_START\t0|0,F;F\n1 .. a ??? DATA_END",
    )
    .expect("Failed to write capture");
    let noisy = ConvertOptions {
        input: noisy_input,
        output: dir.path().join("noisy.rgb565"),
        ..ConvertOptions::default()
    };
    let noisy_report = convert_file(&noisy).expect("Conversion failed");

    assert_eq!(clean_report.actual_bytes, noisy_report.actual_bytes);
    assert_eq!(
        fs::read(&clean.output).unwrap(),
        fs::read(&noisy.output).unwrap()
    );
}

#[test]
fn test_odd_length_trims_last_digit() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let options = options_for(dir.path(), "DATA_START ABC DATA_END");

    let report = convert_file(&options).expect("Conversion failed");

    assert!(report.trimmed_odd_digit);
    assert_eq!(fs::read(&options.output).unwrap(), vec![0xAB]);
}

#[test]
fn test_size_verdicts_at_default_dimensions() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    for (bytes, expected_verdict) in [
        (18432usize, SizeVerdict::Match),
        (18430, SizeVerdict::Deficit(2)),
        (18440, SizeVerdict::Surplus(8)),
    ] {
        let input = dir.path().join(format!("capture_{}.txt", bytes));
        let capture = format!("DATA_START {} DATA_END", "00".repeat(bytes));
        fs::write(&input, capture).expect("Failed to write capture");

        let options = ConvertOptions {
            input,
            output: dir.path().join(format!("image_{}.rgb565", bytes)),
            ..ConvertOptions::default()
        };

        let report = convert_file(&options).expect("Conversion failed");
        assert_eq!(report.expected_bytes, 18432);
        assert_eq!(report.actual_bytes, bytes);
        assert_eq!(report.verdict(), expected_verdict);
        assert_eq!(fs::read(&options.output).unwrap().len(), bytes);
    }
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let options = ConvertOptions {
        input: dir.path().join("missing.txt"),
        output: dir.path().join("image.rgb565"),
        ..ConvertOptions::default()
    };

    let err = convert_file(&options).unwrap_err();
    assert!(matches!(err, ConvertError::InputNotFound { .. }));
    assert!(!options.output.exists());
}

#[test]
fn test_esp32_fixture_decodes_one_8x8_frame() {
    let fixture = Path::new("tests/data/esp32_capture.txt");
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    // The capture's log noise contains hex-looking characters, but marker
    // extraction keeps only the frame rows
    let options = ConvertOptions {
        input: fixture.to_path_buf(),
        output: dir.path().join("frame.rgb565"),
        width: 8,
        height: 8,
    };

    let report = convert_file(&options).expect("Conversion failed");

    assert!(report.used_markers);
    assert_eq!(report.actual_bytes, 128);
    assert_eq!(report.verdict(), SizeVerdict::Match);

    let expected: Vec<u8> = (0u8..128).collect();
    assert_eq!(fs::read(&options.output).unwrap(), expected);
}

#[test]
fn test_analyzer_reads_fixture_statistics() {
    let fixture = Path::new("tests/data/esp32_capture.txt");
    let report = analyze_file(fixture).expect("Analysis failed");

    let content = fs::read_to_string(fixture).unwrap();
    assert_eq!(report.total_chars, content.chars().count());
    // At least the 256 payload digits, plus whatever the log noise adds
    assert!(report.hex_chars >= 256);
    assert_eq!(report.potential_bytes, report.hex_chars / 2);
    assert!(report.has_start_marker);
    assert!(report.has_end_marker);
    assert_eq!(report.preview.len(), 10);
    assert_eq!(report.preview[7], "DATA_START");
}

#[test]
fn test_convenience_convert_uses_default_frame() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("capture.txt");
    let output = dir.path().join("image.rgb565");
    fs::write(&input, "DATA_START CAFE DATA_END").expect("Failed to write capture");

    let report = rgb565_converter::convert(&input, &output).expect("Conversion failed");

    assert_eq!(report.expected_bytes, 18432);
    assert_eq!(report.output_path, PathBuf::from(&output));
    assert_eq!(fs::read(&output).unwrap(), vec![0xCA, 0xFE]);
}
