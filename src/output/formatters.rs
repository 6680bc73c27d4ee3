//! Report Formatters Implementation
//!
//! 各レポートフォーマットの実装を提供するモジュール。

use std::io::Write;
use unicode_width::UnicodeWidthStr;

use crate::error::XlsxAuditError;
use crate::types::AuditReport;

/// テキスト形式のフォーマッター
pub struct TextFormatter;

impl TextFormatter {
    pub fn render<W: Write>(
        &self,
        report: &AuditReport,
        top_n: usize,
        writer: &mut W,
    ) -> Result<(), XlsxAuditError> {
        let summary = &report.summary;

        writeln!(writer, "== SUMMARY ==")?;
        writeln!(
            writer,
            "Total size (uncompressed): {}",
            human_bytes(summary.total_uncompressed)
        )?;
        writeln!(
            writer,
            "Total size (compressed):   {}",
            human_bytes(summary.total_compressed)
        )?;
        writeln!(
            writer,
            "Overall compression:       {}%",
            summary.overall_compression_savings_pct
        )?;
        writeln!(
            writer,
            "Images: {} file(s), {} total",
            summary.media_count,
            human_bytes(summary.media_uncompressed_total)
        )?;
        if let Some(size) = summary.shared_strings_uncompressed {
            match summary.shared_strings_est_count {
                Some(count) => writeln!(
                    writer,
                    "sharedStrings.xml:         {}, ~{} entries",
                    human_bytes(size),
                    count
                )?,
                None => writeln!(writer, "sharedStrings.xml:         {}", human_bytes(size))?,
            }
        }
        writeln!(
            writer,
            "Worksheets total:          {}",
            human_bytes(summary.worksheets_uncompressed_total)
        )?;
        writeln!(writer)?;

        writeln!(writer, "== LARGEST ENTRIES ==")?;
        let top = &report.rows[..report.rows.len().min(top_n)];
        // パス列は表示幅で揃える（非ASCIIのメンバー名があっても崩さない）
        let path_width = top
            .iter()
            .map(|r| UnicodeWidthStr::width(r.path.as_str()))
            .max()
            .unwrap_or(0);
        for row in top {
            let pad = path_width - UnicodeWidthStr::width(row.path.as_str());
            writeln!(
                writer,
                "{:>10}  {}{}  (savings {}%)",
                human_bytes(row.uncompressed_bytes),
                row.path,
                " ".repeat(pad),
                row.compression_savings_pct
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "== SUGGESTIONS ==")?;
        for tip in &report.suggestions {
            writeln!(writer, "- {}", tip)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// JSON形式のフォーマッター
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn render<W: Write>(
        &self,
        report: &AuditReport,
        writer: &mut W,
    ) -> Result<(), XlsxAuditError> {
        use serde_json::json;

        let json_output = json!({
            "rows": &report.rows,
            "summary": &report.summary,
            "suggestions": &report.suggestions,
        });

        serde_json::to_writer_pretty(&mut *writer, &json_output)
            .map_err(|e| XlsxAuditError::Config(format!("JSON serialization error: {}", e)))?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// CSV形式のフォーマッター
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn render<W: Write>(
        &self,
        report: &AuditReport,
        writer: &mut W,
    ) -> Result<(), XlsxAuditError> {
        // 列順は固定
        writeln!(
            writer,
            "path,uncompressed_bytes,compressed_bytes,compression_savings_%"
        )?;

        for row in &report.rows {
            writeln!(
                writer,
                "{},{},{},{}",
                escape_csv(&row.path),
                row.uncompressed_bytes,
                row.compressed_bytes,
                row.compression_savings_pct
            )?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// バイト数を人間が読める単位の文字列に変換する
///
/// 1024進みの単位系（B, KB, MB, GB, TB）で、小数第2位まで表示します。
///
/// # 使用例
///
/// ```rust
/// use xlsxaudit::human_bytes;
///
/// assert_eq!(human_bytes(0), "0.00 B");
/// assert_eq!(human_bytes(1536), "1.50 KB");
/// assert_eq!(human_bytes(11 * 1024 * 1024), "11.00 MB");
/// ```
pub fn human_bytes(n: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = n as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// CSV文字列をエスケープ
///
/// ダブルクォート、改行、カンマを含む場合はダブルクォートで囲み、
/// 内部のダブルクォートは2つにエスケープします。
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
