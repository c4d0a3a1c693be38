//! Tests for program image loading.

use std::io::Write;

use riscv_pipeline::sim::loader::{bin_to_hex, load_image, parse_hex, words_from_bytes};
use riscv_pipeline::SimError;

/// Words fill consecutive slots from zero.
#[test]
fn test_parse_hex_sequential() {
    let words = parse_hex("00100093 00200113\n003100B3").unwrap();
    assert_eq!(words, vec![0x0010_0093, 0x0020_0113, 0x0031_00B3]);
}

/// Address records select a word index and gaps read as zero.
#[test]
fn test_parse_hex_address_records() {
    let words = parse_hex("@00000002\nDEADBEEF\n@0\n00000013").unwrap();
    assert_eq!(words, vec![0x13, 0, 0xDEAD_BEEF]);
}

/// Comments and blank lines are ignored.
#[test]
fn test_parse_hex_comments() {
    let text = "// program\n\n@00000000 // start\n00000013 // nop\n";
    assert_eq!(parse_hex(text).unwrap(), vec![0x13]);
}

/// Malformed tokens report their line.
#[test]
fn test_parse_hex_bad_token() {
    let err = parse_hex("00000013\nNOTHEX\n").unwrap_err();
    assert!(matches!(err, SimError::HexImage { line: 2, .. }), "{}", err);
}

/// Address records beyond the supported range are rejected.
#[test]
fn test_parse_hex_address_out_of_range() {
    let err = parse_hex("@FFFFFFFF\n00000013").unwrap_err();
    assert!(matches!(err, SimError::HexImage { line: 1, .. }));
}

/// Raw bytes are little-endian and zero-padded to a whole word.
#[test]
fn test_words_from_bytes() {
    assert_eq!(
        words_from_bytes(&[0x93, 0x00, 0x10, 0x00, 0xAA]),
        vec![0x0010_0093, 0x0000_00AA]
    );
    assert!(words_from_bytes(&[]).is_empty());
}

/// Tests the hex image layout: header, upper-case words, four per line.
#[test]
fn test_bin_to_hex_layout() {
    let bytes: Vec<u8> = (0u8..20).collect();
    let hex = bin_to_hex(&bytes);
    assert_eq!(
        hex,
        "@00000000\n03020100 07060504 0B0A0908 0F0E0D0C\n13121110 "
    );
}

/// Converted images parse back to the same words.
#[test]
fn test_bin_to_hex_parses_back() {
    let bytes = [0x13u8, 0, 0, 0, 0xEF, 0xBE, 0xAD, 0xDE, 0x01];
    assert_eq!(parse_hex(&bin_to_hex(&bytes)).unwrap(), words_from_bytes(&bytes));
}

/// The file extension selects the format.
#[test]
fn test_load_image_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let hex_path = dir.path().join("prog.hex");
    std::fs::write(&hex_path, "@0\n00000013\n").unwrap();
    assert_eq!(load_image(&hex_path).unwrap(), vec![0x13]);

    let bin_path = dir.path().join("prog.bin");
    let mut file = std::fs::File::create(&bin_path).unwrap();
    file.write_all(&[0x13, 0, 0, 0]).unwrap();
    drop(file);
    assert_eq!(load_image(&bin_path).unwrap(), vec![0x13]);
}

/// A missing file is an I/O error naming the path.
#[test]
fn test_load_image_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.hex");
    let err = load_image(&path).unwrap_err();
    assert!(matches!(err, SimError::Io { .. }));
    assert!(err.to_string().contains("missing.hex"));
}
