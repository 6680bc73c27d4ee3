//! Data Model Module
//!
//! スキャン結果のデータモデルを定義するモジュール。
//! フィールド名のserdeリネームは、レポート層が出力する境界データ形状
//! （`compression_savings_%` など）と一致させるためのもの。

use serde::Serialize;

/// ZIPアーカイブ内のメンバー1件のサイズ統計
///
/// セントラルディレクトリの申告値から導出され、永続化はされません。
/// `compression_savings_pct`は導出値で、`uncompressed_bytes == 0`の
/// 場合は`0.0`になります（ゼロ除算ガード）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveMember {
    /// アーカイブ内の相対パス（1回のスキャン内で一意）
    pub path: String,
    /// 展開後サイズ（バイト）
    pub uncompressed_bytes: u64,
    /// 圧縮後サイズ（バイト）。非圧縮性データでは展開後サイズを超えることがある
    pub compressed_bytes: u64,
    /// 圧縮削減率（%、小数第2位で丸め）
    #[serde(rename = "compression_savings_%")]
    pub compression_savings_pct: f64,
}

/// スキャン1回分の集計値
///
/// 生成後は不変。キャッシュやマージはされず、呼び出しごとに
/// 新しいインスタンスが生成されます。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSummary {
    /// 全メンバーの展開後サイズ合計（バイト）
    pub total_uncompressed: u64,
    /// 全メンバーの圧縮後サイズ合計（バイト）
    pub total_compressed: u64,
    /// 全体の圧縮削減率（%、合計値から算出）
    #[serde(rename = "overall_compression_savings_%")]
    pub overall_compression_savings_pct: f64,
    /// `xl/media/` 配下のメンバー数
    pub media_count: u64,
    /// `xl/media/` 配下の展開後サイズ合計（バイト）
    pub media_uncompressed_total: u64,
    /// `xl/worksheets/` 配下の展開後サイズ合計（バイト）
    pub worksheets_uncompressed_total: u64,
    /// `xl/sharedStrings.xml` の展開後サイズ。パーツが無い場合は`None`
    #[serde(rename = "sharedStrings_uncompressed")]
    pub shared_strings_uncompressed: Option<u64>,
    /// 共有文字列エントリ数の概算値。パーツが無い、読み取りに失敗した、
    /// または概算が無効化されている場合は`None`
    #[serde(rename = "sharedStrings_est_count")]
    pub shared_strings_est_count: Option<u64>,
}

/// Archive Scannerの結果
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// 展開後サイズ降順（同値は列挙順）のメンバー一覧
    pub rows: Vec<ArchiveMember>,
    /// 集計値
    pub summary: ScanSummary,
}

/// Auditorの結果（スキャン結果＋サジェスチョン）
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// 展開後サイズ降順のメンバー一覧
    pub rows: Vec<ArchiveMember>,
    /// 集計値
    pub summary: ScanSummary,
    /// 順序付きのサジェスチョン一覧
    pub suggestions: Vec<String>,
}

/// 圧縮削減率（%）を算出する
///
/// `(1 - compressed/uncompressed) * 100` を小数第2位で丸める。
/// `uncompressed == 0` のときは`0.0`を返す。
pub(crate) fn savings_pct(uncompressed: u64, compressed: u64) -> f64 {
    if uncompressed == 0 {
        return 0.0;
    }
    round2((1.0 - compressed as f64 / uncompressed as f64) * 100.0)
}

/// 小数第2位で丸める
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
