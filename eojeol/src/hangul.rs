//! ハングル文字の判定

/// 完成形ハングル音節の先頭 (`가`)
const SYLLABLE_FIRST: char = '\u{AC00}';

/// 完成形ハングル音節の末尾 (`힣`)
const SYLLABLE_LAST: char = '\u{D7A3}';

/// 文字が完成形のハングル音節 (`가`..=`힣`) であるかを判定します。
///
/// 単独の字母 (`ㄱ`, `ㅏ` など) は完成形ではないため `false` になります。
#[inline(always)]
pub fn is_complete_syllable(c: char) -> bool {
    (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&c)
}

/// 文字列がすべて完成形のハングル音節から成るかを判定します。
///
/// 空文字列に対しては `true` を返します。
pub fn is_complete_word(word: &str) -> bool {
    word.chars().all(is_complete_syllable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_syllable() {
        assert!(is_complete_syllable('가'));
        assert!(is_complete_syllable('힣'));
        assert!(!is_complete_syllable('ㄱ'));
        assert!(!is_complete_syllable('a'));
        assert!(!is_complete_syllable('漢'));
    }

    #[test]
    fn test_complete_word() {
        assert!(is_complete_word("사람이다"));
        assert!(!is_complete_word("사람2"));
        assert!(!is_complete_word("ㅋㅋ"));
    }
}
