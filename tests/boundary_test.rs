//! Boundary Tests for xlsxaudit
//!
//! Edge cases of the scan pass: empty archives, zero-byte members,
//! incompressible members and unusual member names.

use std::io::{Cursor, Write};
use xlsxaudit::{scan, AuditorBuilder};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

fn build_archive(entries: &[(&str, &[u8], CompressionMethod)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data, method) in entries {
        let options = FileOptions::default().compression_method(*method);
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_empty_archive() {
    let data = build_archive(&[]);
    let report = scan(Cursor::new(data)).unwrap();

    assert!(report.rows.is_empty());
    assert_eq!(report.summary.total_uncompressed, 0);
    assert_eq!(report.summary.total_compressed, 0);
    // Zero totals must not divide by zero
    assert_eq!(report.summary.overall_compression_savings_pct, 0.0);
    assert_eq!(report.summary.media_count, 0);
    assert_eq!(report.summary.shared_strings_uncompressed, None);
}

#[test]
fn test_empty_archive_suggestions_fall_back() {
    let data = build_archive(&[]);
    let auditor = AuditorBuilder::new().build().unwrap();
    let report = auditor.audit(Cursor::new(data)).unwrap();

    // No rows, no thresholds: only the generic fallback remains
    assert_eq!(report.suggestions.len(), 1);
    assert!(report.suggestions[0].contains("No single obvious culprit"));
}

#[test]
fn test_zero_byte_member_savings() {
    let data = build_archive(&[
        ("empty.bin", b"".as_slice(), CompressionMethod::Stored),
        ("xl/workbook.xml", b"<workbook/>".as_slice(), CompressionMethod::Deflated),
    ]);

    let report = scan(Cursor::new(data)).unwrap();
    let empty = report.rows.iter().find(|r| r.path == "empty.bin").unwrap();

    assert_eq!(empty.uncompressed_bytes, 0);
    assert_eq!(empty.compression_savings_pct, 0.0);
}

#[test]
fn test_incompressible_member_has_non_positive_savings() {
    // Deflate cannot shrink a single byte; the member may grow
    let data = build_archive(&[("tiny.bin", b"z".as_slice(), CompressionMethod::Deflated)]);

    let report = scan(Cursor::new(data)).unwrap();
    let row = &report.rows[0];

    assert_eq!(row.uncompressed_bytes, 1);
    assert!(row.compression_savings_pct <= 0.0);
}

#[test]
fn test_non_ascii_member_names_survive() {
    let data = build_archive(&[(
        "xl/media/画像1.png",
        &[0u8; 64],
        CompressionMethod::Stored,
    )]);

    let report = scan(Cursor::new(data)).unwrap();
    assert_eq!(report.rows[0].path, "xl/media/画像1.png");
    assert_eq!(report.summary.media_count, 1);
    assert_eq!(report.summary.media_uncompressed_total, 64);
}

#[test]
fn test_top_n_larger_than_member_count() {
    let data = build_archive(&[("one.bin", &[1u8; 8], CompressionMethod::Stored)]);

    let auditor = AuditorBuilder::new().with_top_n(1000).build().unwrap();
    let report = auditor.audit(Cursor::new(data)).unwrap();

    assert_eq!(report.rows.len(), 1);
    assert!(report
        .suggestions
        .iter()
        .any(|t| t.contains("Largest single item: one.bin")));
}

#[test]
fn test_prefix_classification_is_exact() {
    // Similar but non-matching paths must not be classified
    let data = build_archive(&[
        ("xl/media2/img.png", &[0u8; 32], CompressionMethod::Stored),
        ("media/img.png", &[0u8; 32], CompressionMethod::Stored),
        ("xl/worksheets_old/sheet.xml", &[0u8; 32], CompressionMethod::Stored),
        ("xl/sharedStrings.xml.bak", &[0u8; 32], CompressionMethod::Stored),
    ]);

    let report = scan(Cursor::new(data)).unwrap();
    assert_eq!(report.summary.media_count, 0);
    assert_eq!(report.summary.worksheets_uncompressed_total, 0);
    assert_eq!(report.summary.shared_strings_uncompressed, None);
}
