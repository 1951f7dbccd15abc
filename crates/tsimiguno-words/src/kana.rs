//! Kana transliteration
//!
//! Generated words are hiragana; the UI offers a katakana display toggle.

/// Offset between the hiragana and katakana Unicode blocks
const KANA_OFFSET: u32 = 0x60;

/// Convert hiragana characters to katakana, leaving everything else as is.
///
/// Covers the full block from small ぁ through ゖ, which includes the
/// voiced, semi-voiced and small kana the word generator can produce.
pub fn hira_to_kata(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'ぁ'..='ゖ' => char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c),
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(hira_to_kata("つぃみぐの"), "ツィミグノ");
        assert_eq!(hira_to_kata("ぺゆどち"), "ペユドチ");
    }

    #[test]
    fn test_voiced_and_small_kana() {
        assert_eq!(hira_to_kata("ゔぁいおりん"), "ヴァイオリン");
        assert_eq!(hira_to_kata("きっざにあ"), "キッザニア");
        assert_eq!(hira_to_kata("ちゅぱょ"), "チュパョ");
    }

    #[test]
    fn test_non_hiragana_passes_through() {
        assert_eq!(hira_to_kata("カナmixed123"), "カナmixed123");
        assert_eq!(hira_to_kata(""), "");
    }
}
