//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// レポートの出力フォーマット
///
/// 監査結果をレンダリングする際の出力形式を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportFormat {
    /// テキスト形式（デフォルト）
    ///
    /// コンソール向けの整形済みテキストで出力します。
    /// サマリー、サイズ上位メンバー、サジェスチョンの3セクション構成です。
    ///
    /// # 出力例
    ///
    /// ```text
    /// == SUMMARY ==
    /// Total size (uncompressed): 11.00 MB
    /// Total size (compressed):   10.00 MB
    /// Overall compression:       9.09%
    /// ```
    Text,

    /// JSON形式
    ///
    /// メンバー一覧、集計値、サジェスチョンをJSONで出力します。
    /// フィールド名はCSVレポートの列名と揃えています。
    ///
    /// # 出力例
    ///
    /// ```json
    /// {
    ///   "rows": [
    ///     {
    ///       "path": "xl/media/img1.png",
    ///       "uncompressed_bytes": 11534336,
    ///       "compressed_bytes": 10485760,
    ///       "compression_savings_%": 9.09
    ///     }
    ///   ],
    ///   "summary": { "media_count": 1 },
    ///   "suggestions": []
    /// }
    /// ```
    Json,

    /// CSV形式
    ///
    /// メンバー一覧をCSV（Comma-Separated Values）で出力します。
    /// 列順は `path, uncompressed_bytes, compressed_bytes, compression_savings_%`
    /// に固定されています。
    ///
    /// # 出力例
    ///
    /// ```csv
    /// path,uncompressed_bytes,compressed_bytes,compression_savings_%
    /// xl/media/img1.png,11534336,10485760,9.09
    /// ```
    Csv,
}
