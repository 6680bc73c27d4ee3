//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;
use thiserror::Error;

/// xlsxauditクレート全体で使用するエラー型
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（読み書きの失敗など）
/// - `NotFound`: 指定されたパスが存在しない（スキャン全体が失敗する）
/// - `CorruptArchive`: パスは存在するがZIPアーカイブとして開けない（スキャン全体が失敗する）
/// - `Config`: 設定の検証に失敗したエラー（`AuditorBuilder::build()`時など）
///
/// 共有文字列パーツが存在しない、またはそのストリーム読み取りに失敗した
/// 場合はエラーにはなりません。対応する集計フィールドが`None`になるだけで、
/// スキャン自体は成功します。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxaudit::{scan_path, XlsxAuditError};
///
/// match scan_path("missing.xlsx") {
///     Err(XlsxAuditError::NotFound(path)) => {
///         println!("ファイルが存在しません: {}", path.display());
///     }
///     _ => {}
/// }
/// ```
#[derive(Error, Debug)]
pub enum XlsxAuditError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 指定されたパスが存在しないエラー
    ///
    /// スキャンは部分結果を返さずに失敗します。
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// ZIPアーカイブとして開けない、または解析できないエラー
    ///
    /// ファイルの破損、ZIP以外の形式などが原因となります。
    #[error("Corrupt archive: {0}")]
    CorruptArchive(String),

    /// 設定の検証に失敗したエラー
    ///
    /// `AuditorBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。レポートのシリアライズ失敗もここに分類されます。
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // Ioエラーのテスト
    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error: XlsxAuditError = io_err.into();

        match error {
            XlsxAuditError::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::other("disk on fire");
        let error: XlsxAuditError = io_err.into();

        let error_msg = error.to_string();
        assert!(error_msg.starts_with("IO error"));
        assert!(error_msg.contains("disk on fire"));
    }

    // NotFoundエラーのテスト
    #[test]
    fn test_not_found_display() {
        let error = XlsxAuditError::NotFound(PathBuf::from("missing.xlsx"));
        let error_msg = error.to_string();

        assert!(error_msg.starts_with("File not found"));
        assert!(error_msg.contains("missing.xlsx"));
    }

    // CorruptArchiveエラーのテスト
    #[test]
    fn test_corrupt_archive_display() {
        let error = XlsxAuditError::CorruptArchive("invalid Zip archive".to_string());
        let error_msg = error.to_string();

        assert!(error_msg.starts_with("Corrupt archive"));
        assert!(error_msg.contains("invalid Zip archive"));
    }

    // Configエラーのテスト
    #[test]
    fn test_config_error_display() {
        let error = XlsxAuditError::Config("top_n must be at least 1".to_string());
        let error_msg = error.to_string();

        assert!(error_msg.starts_with("Configuration error"));
        assert!(error_msg.contains("top_n"));
    }

    // エラー変換のテスト（?演算子の動作確認）
    #[test]
    fn test_error_conversion_with_question_mark() {
        fn io_operation() -> Result<(), XlsxAuditError> {
            let _file = std::fs::File::open("nonexistent_file.xlsx")?;
            Ok(())
        }

        let result = io_operation();
        assert!(result.is_err());

        match result {
            Err(XlsxAuditError::Io(_)) => {}
            _ => panic!("Expected Io error from ? operator"),
        }
    }
}
