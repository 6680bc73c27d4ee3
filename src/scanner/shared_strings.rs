//! Shared Strings Estimate Module
//!
//! 共有文字列パーツ（`xl/sharedStrings.xml`）のエントリ数を概算するモジュール。
//! XMLとしては解析せず、3バイトのマーカー`<si`の出現回数を数えるだけの
//! 軽量なテキストスキャン。属性値の中などに`<si`が現れた場合も数えるため、
//! 結果は概算値であって検証済みの要素数ではない。

use std::io::{self, Read};

/// 数えるマーカーのバイト列
const SI_MARKER: &[u8] = b"<si";

/// ストリーム読み取りのチャンクサイズ（64 KiB）
pub(crate) const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// ストリーム中の`<si`マーカーの出現回数（重複なし）を数える
///
/// チャンク境界をまたぐマーカーを正確に1回だけ数えるため、各チャンクの
/// 末尾`マーカー長 - 1`バイト（2バイト）を次のチャンクの先頭に持ち越す。
/// 持ち越し分はマーカー全体より短いので、同じマーカーを二度数えることはない。
pub(crate) fn count_si_markers<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<u64> {
    debug_assert!(chunk_size >= 1);

    let mut chunk = vec![0u8; chunk_size];
    let mut window: Vec<u8> = Vec::with_capacity(chunk_size + SI_MARKER.len() - 1);
    let mut count = 0u64;

    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }

        window.extend_from_slice(&chunk[..n]);
        count += marker_count(&window);

        // 末尾2バイトだけ残す
        let keep = window.len().min(SI_MARKER.len() - 1);
        window.drain(..window.len() - keep);
    }

    Ok(count)
}

/// バッファ内の`<si`の出現回数（重複なし）を数える
fn marker_count(haystack: &[u8]) -> u64 {
    let mut count = 0u64;
    let mut i = 0;
    while i + SI_MARKER.len() <= haystack.len() {
        if &haystack[i..i + SI_MARKER.len()] == SI_MARKER {
            count += 1;
            i += SI_MARKER.len();
        } else {
            i += 1;
        }
    }
    count
}
