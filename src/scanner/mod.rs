//! Archive Scanner Module
//!
//! XLSXファイル（ZIPアーカイブ）のセントラルディレクトリを走査し、
//! メンバーごとのサイズ統計と集計値を算出するモジュール。
//! サイズはインデックスの申告値から読み取り、メンバー本体は展開しません。
//! 例外は共有文字列パーツのエントリ数概算で、そのパーツ1つだけを
//! ストリーム展開します。

mod shared_strings;

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

use crate::error::XlsxAuditError;
use crate::types::{savings_pct, ArchiveMember, ScanReport, ScanSummary};

use shared_strings::{count_si_markers, DEFAULT_CHUNK_SIZE};

/// 画像パーツのパスプレフィックス
const MEDIA_PREFIX: &str = "xl/media/";
/// ワークシートパーツのパスプレフィックス
const WORKSHEETS_PREFIX: &str = "xl/worksheets/";
/// 共有文字列パーツのパス
const SHARED_STRINGS_PATH: &str = "xl/sharedStrings.xml";

/// 指定パスのXLSXファイルをスキャンする
///
/// # 引数
///
/// * `path` - スキャンするXLSXファイルのパス
///
/// # 戻り値
///
/// * `Ok(ScanReport)` - 展開後サイズ降順のメンバー一覧と集計値
/// * `Err(XlsxAuditError::NotFound)` - パスが存在しない場合
/// * `Err(XlsxAuditError::CorruptArchive)` - ZIPアーカイブとして開けない場合
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxaudit::scan_path;
///
/// # fn main() -> Result<(), xlsxaudit::XlsxAuditError> {
/// let report = scan_path("report.xlsx")?;
/// for row in report.rows.iter().take(10) {
///     println!("{:>12}  {}", row.uncompressed_bytes, row.path);
/// }
/// # Ok(())
/// # }
/// ```
pub fn scan_path<P: AsRef<Path>>(path: P) -> Result<ScanReport, XlsxAuditError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(XlsxAuditError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    scan(file)
}

/// リーダーからXLSXアーカイブをスキャンする
///
/// ファイル以外のソース（`Cursor<Vec<u8>>`など）にも対応するため、
/// `Read + Seek`を実装する任意のリーダーを受け付けます。
/// 共有文字列パーツが存在する場合、エントリ数の概算も行います。
pub fn scan<R: Read + Seek>(reader: R) -> Result<ScanReport, XlsxAuditError> {
    scan_with(reader, true)
}

/// スキャン本体
///
/// `estimate_shared_strings`が`false`の場合、共有文字列パーツの
/// ストリーム読み取りを行わず、概算エントリ数は`None`になります。
pub(crate) fn scan_with<R: Read + Seek>(
    reader: R,
    estimate_shared_strings: bool,
) -> Result<ScanReport, XlsxAuditError> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| XlsxAuditError::CorruptArchive(format!("{}", e)))?;

    let mut rows: Vec<ArchiveMember> = Vec::with_capacity(archive.len());
    let mut total_uncompressed = 0u64;
    let mut total_compressed = 0u64;
    let mut media_count = 0u64;
    let mut media_uncompressed_total = 0u64;
    let mut worksheets_uncompressed_total = 0u64;
    let mut shared_strings_uncompressed: Option<u64> = None;

    // セントラルディレクトリをインデックス順に走査する。
    // サイズは申告値を使い、本体は展開しない。
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| XlsxAuditError::CorruptArchive(format!("{}", e)))?;

        let path = entry.name().to_string();
        let uncompressed = entry.size();
        let compressed = entry.compressed_size();

        total_uncompressed += uncompressed;
        total_compressed += compressed;

        if path.starts_with(MEDIA_PREFIX) {
            media_count += 1;
            media_uncompressed_total += uncompressed;
        }

        if path.starts_with(WORKSHEETS_PREFIX) {
            worksheets_uncompressed_total += uncompressed;
        }

        if path == SHARED_STRINGS_PATH {
            shared_strings_uncompressed = Some(uncompressed);
        }

        rows.push(ArchiveMember {
            path,
            uncompressed_bytes: uncompressed,
            compressed_bytes: compressed,
            compression_savings_pct: savings_pct(uncompressed, compressed),
        });
    }

    let shared_strings_est_count = if estimate_shared_strings && shared_strings_uncompressed.is_some()
    {
        estimate_entry_count(&mut archive)
    } else {
        None
    };

    // 展開後サイズ降順。sort_byは安定ソートなので、同サイズの
    // メンバーは列挙順を保つ。
    rows.sort_by(|a, b| b.uncompressed_bytes.cmp(&a.uncompressed_bytes));

    let summary = ScanSummary {
        total_uncompressed,
        total_compressed,
        overall_compression_savings_pct: savings_pct(total_uncompressed, total_compressed),
        media_count,
        media_uncompressed_total,
        worksheets_uncompressed_total,
        shared_strings_uncompressed,
        shared_strings_est_count,
    };

    Ok(ScanReport { rows, summary })
}

/// 共有文字列パーツのエントリ数を概算する
///
/// パーツが開けない、または読み取り中に失敗した場合は`None`。
/// スキャン全体のエラーにはしない。
fn estimate_entry_count<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Option<u64> {
    let entry = archive.by_name(SHARED_STRINGS_PATH).ok()?;
    count_si_markers(entry, DEFAULT_CHUNK_SIZE).ok()
}
