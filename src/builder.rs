//! Builder Module
//!
//! Fluent Builder APIを提供し、`Auditor`インスタンスを段階的に構築する。

use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::Path;

use crate::advisor;
use crate::api::ReportFormat;
use crate::error::XlsxAuditError;
use crate::output::ReportFormatter;
use crate::scanner;
use crate::types::{AuditReport, ScanReport};

/// 監査処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct AuditConfig {
    /// サイズ上位として扱うメンバー数
    pub top_n: usize,

    /// 共有文字列エントリ数の概算を行うか
    pub estimate_shared_strings: bool,

    /// レポートの出力フォーマット
    pub report_format: ReportFormat,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            top_n: 25,
            estimate_shared_strings: true,
            report_format: ReportFormat::Text,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Auditor`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxaudit::{AuditorBuilder, ReportFormat};
///
/// # fn main() -> Result<(), xlsxaudit::XlsxAuditError> {
/// let auditor = AuditorBuilder::new()
///     .with_top_n(10)
///     .with_report_format(ReportFormat::Json)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AuditorBuilder {
    /// 内部設定（構築中）
    config: AuditConfig,
}

impl Default for AuditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditorBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - サイズ上位メンバー数: 25
    /// - 共有文字列エントリ数の概算: 有効
    /// - レポートフォーマット: テキスト
    pub fn new() -> Self {
        Self {
            config: AuditConfig::default(),
        }
    }

    /// サイズ上位として扱うメンバー数を指定する
    ///
    /// この値はテキストレポートの「LARGEST ENTRIES」に表示される行数と、
    /// Advisorに渡されるメンバー数の両方に使われます。
    ///
    /// # 引数
    ///
    /// * `top_n` - 上位メンバー数（1以上）
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.config.top_n = top_n;
        self
    }

    /// 共有文字列エントリ数の概算を有効/無効にする
    ///
    /// 無効にすると`xl/sharedStrings.xml`のストリーム読み取りを行わず、
    /// 概算エントリ数は常に`None`になります。巨大な共有文字列パーツを
    /// 持つファイルでスキャンを速くしたい場合に使います。
    pub fn with_shared_strings_estimate(mut self, enabled: bool) -> Self {
        self.config.estimate_shared_strings = enabled;
        self
    }

    /// レポートの出力フォーマットを指定する
    ///
    /// # 引数
    ///
    /// * `format: ReportFormat`: 出力フォーマット
    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.config.report_format = format;
        self
    }

    /// 設定を検証し、`Auditor`インスタンスを構築する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Auditor)` - 設定が有効な場合
    /// * `Err(XlsxAuditError::Config)` - 無効な設定が検出された場合
    ///   （例: `top_n == 0`）
    pub fn build(self) -> Result<Auditor, XlsxAuditError> {
        if self.config.top_n == 0 {
            return Err(XlsxAuditError::Config(
                "top_n must be at least 1".to_string(),
            ));
        }
        Ok(Auditor {
            config: self.config,
        })
    }
}

/// XLSXファイルのサイズ監査を実行する構造体
///
/// `AuditorBuilder`で構築します。1回の監査はスキャン（Scanner）と
/// サジェスチョン生成（Advisor）の2段で構成され、呼び出しごとに
/// 新しい結果を生成します。呼び出し間で共有される状態はありません。
pub struct Auditor {
    /// 監査設定
    config: AuditConfig,
}

impl Auditor {
    /// 指定パスのXLSXファイルを監査する
    ///
    /// # 戻り値
    ///
    /// * `Ok(AuditReport)` - メンバー一覧、集計値、サジェスチョン
    /// * `Err(XlsxAuditError::NotFound)` - パスが存在しない場合
    /// * `Err(XlsxAuditError::CorruptArchive)` - ZIPアーカイブとして開けない場合
    pub fn audit_path<P: AsRef<Path>>(&self, path: P) -> Result<AuditReport, XlsxAuditError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(XlsxAuditError::NotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        self.audit(file)
    }

    /// リーダーからXLSXアーカイブを監査する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use std::io::Cursor;
    /// use xlsxaudit::AuditorBuilder;
    ///
    /// # fn main() -> Result<(), xlsxaudit::XlsxAuditError> {
    /// let auditor = AuditorBuilder::new().build()?;
    /// let xlsx_data: Vec<u8> = vec![]; // XLSXファイルのバイト列
    /// let report = auditor.audit(Cursor::new(xlsx_data))?;
    /// for tip in &report.suggestions {
    ///     println!("- {}", tip);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn audit<R: Read + Seek>(&self, reader: R) -> Result<AuditReport, XlsxAuditError> {
        let ScanReport { rows, summary } =
            scanner::scan_with(reader, self.config.estimate_shared_strings)?;

        let top = &rows[..rows.len().min(self.config.top_n)];
        let suggestions = advisor::suggest(&summary, top);

        Ok(AuditReport {
            rows,
            summary,
            suggestions,
        })
    }

    /// 監査結果を設定済みのフォーマットでレンダリングする
    pub fn render<W: Write>(
        &self,
        report: &AuditReport,
        writer: &mut W,
    ) -> Result<(), XlsxAuditError> {
        ReportFormatter::from_format(self.config.report_format).render(
            report,
            self.config.top_n,
            writer,
        )
    }

    /// 設定されたサイズ上位メンバー数を取得する
    pub fn top_n(&self) -> usize {
        self.config.top_n
    }

    /// 設定されたレポートフォーマットを取得する
    pub fn report_format(&self) -> ReportFormat {
        self.config.report_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let auditor = AuditorBuilder::new().build().unwrap();
        assert_eq!(auditor.top_n(), 25);
        assert_eq!(auditor.report_format(), ReportFormat::Text);
    }

    #[test]
    fn test_build_rejects_zero_top_n() {
        let result = AuditorBuilder::new().with_top_n(0).build();
        match result {
            Err(XlsxAuditError::Config(msg)) => {
                assert!(msg.contains("top_n"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_builder_overrides() {
        let auditor = AuditorBuilder::new()
            .with_top_n(5)
            .with_report_format(ReportFormat::Csv)
            .build()
            .unwrap();
        assert_eq!(auditor.top_n(), 5);
        assert_eq!(auditor.report_format(), ReportFormat::Csv);
    }
}
