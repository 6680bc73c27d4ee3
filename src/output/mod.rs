//! Output Format Module
//!
//! Strategy Patternによるレポート出力の抽象化と、レポートファイルの
//! 書き出しを提供するモジュール。コア（Scanner/Advisor）が生成した
//! データを消費するだけで、スキャン結果には影響しない。

mod formatters;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::api::ReportFormat;
use crate::error::XlsxAuditError;
use crate::types::AuditReport;

pub use formatters::{human_bytes, CsvFormatter, JsonFormatter, TextFormatter};

/// レポートフォーマッター（Strategy Pattern）
///
/// 各出力フォーマット（Text, Json, Csv）をenumとして表現します。
#[derive(Debug, Clone, Copy)]
pub enum ReportFormatter {
    Text,
    Json,
    Csv,
}

impl ReportFormatter {
    /// 出力フォーマットからフォーマッターを生成
    pub fn from_format(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => ReportFormatter::Text,
            ReportFormat::Json => ReportFormatter::Json,
            ReportFormat::Csv => ReportFormatter::Csv,
        }
    }

    /// 監査結果を指定されたフォーマットで出力する
    ///
    /// # 引数
    ///
    /// * `report` - 出力する監査結果
    /// * `top_n` - テキスト形式で表示するサイズ上位メンバー数
    /// * `writer` - 出力先のライター
    pub fn render<W: Write>(
        &self,
        report: &AuditReport,
        top_n: usize,
        writer: &mut W,
    ) -> Result<(), XlsxAuditError> {
        match self {
            ReportFormatter::Text => TextFormatter.render(report, top_n, writer),
            ReportFormatter::Json => JsonFormatter.render(report, writer),
            ReportFormatter::Csv => CsvFormatter.render(report, writer),
        }
    }
}

/// 入力パスからデフォルトのレポートパス（CSV, TXT）を導出する
///
/// 入力と同じディレクトリに、拡張子を除いたファイル名へ
/// `_xlsx_audit.csv` / `_xlsx_audit.txt` を付けたパスを返します。
///
/// # 使用例
///
/// ```rust
/// use std::path::Path;
/// use xlsxaudit::default_report_paths;
///
/// let (csv, txt) = default_report_paths(Path::new("data/report.xlsx"));
/// assert_eq!(csv, Path::new("data/report_xlsx_audit.csv"));
/// assert_eq!(txt, Path::new("data/report_xlsx_audit.txt"));
/// ```
pub fn default_report_paths(input: &Path) -> (PathBuf, PathBuf) {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "workbook".to_string());

    (
        input.with_file_name(format!("{}_xlsx_audit.csv", stem)),
        input.with_file_name(format!("{}_xlsx_audit.txt", stem)),
    )
}

/// メンバー一覧をCSVレポートとして書き出す
///
/// 全メンバーを展開後サイズ降順で、固定の列順
/// `path, uncompressed_bytes, compressed_bytes, compression_savings_%`
/// で出力します。
pub fn write_csv_report(path: &Path, report: &AuditReport) -> Result<(), XlsxAuditError> {
    let mut writer = BufWriter::new(File::create(path)?);
    CsvFormatter.render(report, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// テキストサマリーをTXTレポートとして書き出す
///
/// コンソール出力と同じ内容に、生成日時と入力ファイルのヘッダー行を
/// 加えたものを書き出します。
pub fn write_text_report(
    path: &Path,
    input: &Path,
    report: &AuditReport,
    top_n: usize,
) -> Result<(), XlsxAuditError> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "xlsxaudit report")?;
    writeln!(
        writer,
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(writer, "File: {} ({})", input.display(), human_bytes(report.summary.total_compressed))?;
    writeln!(writer)?;

    TextFormatter.render(report, top_n, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_paths_suffix() {
        let (csv, txt) = default_report_paths(Path::new("budget.xlsx"));
        assert_eq!(csv, Path::new("budget_xlsx_audit.csv"));
        assert_eq!(txt, Path::new("budget_xlsx_audit.txt"));
    }

    #[test]
    fn test_default_report_paths_keeps_directory() {
        let (csv, _) = default_report_paths(Path::new("/tmp/files/q3.xlsx"));
        assert_eq!(csv, Path::new("/tmp/files/q3_xlsx_audit.csv"));
    }

    #[test]
    fn test_default_report_paths_dotted_stem() {
        // ファイル名に複数のドットがあっても末尾の拡張子だけ外す
        let (csv, txt) = default_report_paths(Path::new("my.report.xlsx"));
        assert_eq!(csv, Path::new("my.report_xlsx_audit.csv"));
        assert_eq!(txt, Path::new("my.report_xlsx_audit.txt"));
    }
}
