//! Advisor Module
//!
//! 集計値とサイズ上位のメンバー一覧から、肥大化の改善サジェスチョンを
//! 生成するモジュール。入力だけから決定的に出力する純粋関数で、I/Oは行わない。
//! 評価順序と発火条件が契約であり、文言自体は自由テキスト。

use crate::types::{ArchiveMember, ScanSummary};

/// 画像パーツ合計サイズの閾値（10 MiB）
const MEDIA_TOTAL_THRESHOLD: u64 = 10 * 1024 * 1024;
/// 共有文字列パーツサイズの閾値（10 MiB）
const SHARED_STRINGS_THRESHOLD: u64 = 10 * 1024 * 1024;
/// ワークシート合計サイズの閾値（20 MiB）
const WORKSHEETS_TOTAL_THRESHOLD: u64 = 20 * 1024 * 1024;

/// 改善サジェスチョンを生成する
///
/// ルールは固定順で評価され、各ルールは高々1件のサジェスチョンを追加する。
/// 「最大メンバー」ルールは閾値ルールの発火と無関係に、`top_rows`が
/// 空でなければ常に発火する。汎用フォールバックは閾値ルール（画像・
/// 共有文字列・ワークシート）が1つも発火しなかった場合にのみ、末尾に
/// 追加される。両者は同時に出力されうる。
///
/// # 引数
///
/// * `summary` - スキャンの集計値
/// * `top_rows` - 展開後サイズ降順のメンバー一覧（先頭が最大）
///
/// # 戻り値
///
/// 順序付きのサジェスチョン文字列。順序は評価順と一致する。
pub fn suggest(summary: &ScanSummary, top_rows: &[ArchiveMember]) -> Vec<String> {
    let mut tips = Vec::new();

    // 1. 画像
    if summary.media_count > 0 && summary.media_uncompressed_total > MEDIA_TOTAL_THRESHOLD {
        tips.push(
            "xl/media/ is large - consider compressing images (JPG/WebP), removing \
             duplicates, or reducing resolution."
                .to_string(),
        );
    }

    // 2. 共有文字列
    if matches!(summary.shared_strings_uncompressed, Some(size) if size > SHARED_STRINGS_THRESHOLD)
    {
        tips.push(
            "xl/sharedStrings.xml is very large - consider removing redundant text, \
             converting text formulas to values, or deduplicating repeated values."
                .to_string(),
        );
    }

    // 3. ワークシート
    if summary.worksheets_uncompressed_total > WORKSHEETS_TOTAL_THRESHOLD {
        tips.push(
            "Large sheets under xl/worksheets/ - check the used range, delete trailing \
             empty rows/columns, and resave the file."
                .to_string(),
        );
    }

    let threshold_tips = tips.len();

    // 4. 最大メンバー（閾値ルールとは独立に発火する）
    if let Some(worst) = top_rows.first() {
        tips.push(format!(
            "Largest single item: {} - check whether it is needed and whether it can be reduced.",
            worst.path
        ));
    }

    // 5. 汎用フォールバック（閾値ルールが1つも発火しなかった場合のみ）
    if threshold_tips == 0 {
        tips.push(
            "No single obvious culprit - consider used-range cleanup, image compression, \
             and removing unused styles/formatting."
                .to_string(),
        );
    }

    tips
}
