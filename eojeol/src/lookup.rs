//! 語節の候補探索
//!
//! このモジュールは、語節 (空白区切りのトークン) から分割候補 [`Segment`] を
//! 列挙する2つの探索戦略と、それらをコーパス全体でキャッシュする
//! [`LookupCache`] を提供します。
//!
//! - [`LrLookup`]: 1か所の分割点だけを調べる探索
//! - [`TemplateLookup`]: 最大語長までのすべての部分文字列を調べ、
//!   テンプレートで組み合わせる探索
//!
//! どちらも [`Lookup`] トレイトを実装しており、構築時に選択します。
//!
//! # 例
//!
//! ```
//! use std::sync::Arc;
//! use eojeol::{Lookup, StemEomiLemmatizer, TagDictionary, TemplateLookup};
//!
//! let dict: Arc<TagDictionary> = Arc::new([
//!     ("Noun", vec!["밥"]),
//!     ("Josa", vec!["을"]),
//! ].into_iter().collect());
//! let lemmatizer = Arc::new(StemEomiLemmatizer::new(dict.clone()));
//! let lookup = TemplateLookup::new(dict, lemmatizer)?
//!     .templates([vec!["Noun"], vec!["Noun", "Josa"]])?;
//!
//! let segments = lookup.token_lookup("밥을", 0);
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].to_string(), "밥/Noun + 을/Josa");
//! # Ok::<(), eojeol::errors::TaggerError>(())
//! ```
mod cache;
pub(crate) mod lattice;
mod lr;
mod template;

pub use cache::LookupCache;
pub use lattice::Lattice;
pub use lr::LrLookup;
pub use template::TemplateLookup;

use crate::hangul;
use crate::lemmatizer::Lemmatizer;
use crate::segment::Segment;
use crate::utils::normalize_whitespace;

/// 語節から分割候補を列挙する探索戦略。
pub trait Lookup {
    /// 語節 `token` の分割候補をすべて返します。
    ///
    /// 候補の位置は `offset` を起点とした文字単位です。空のベクターは
    /// 解析できない語節であることを表し、エラーではありません。
    fn token_lookup(&self, token: &str, offset: usize) -> Vec<Segment>;

    /// 文を空白で語節に分け、各語節の候補を連結して返します。
    ///
    /// 各語節のオフセットは、それより前の語節の文字数の合計です。
    fn sentence_lookup(&self, sentence: &str) -> Vec<Segment> {
        lookup_sentence(sentence, |token, offset| self.token_lookup(token, offset))
    }
}

/// 文を正規化して語節ごとに `token_lookup` を呼び出します。
///
/// 語節のオフセットは、それまでに処理した語節のラティスのバケット数
/// (すなわち空白を除いた文字数) です。
pub(crate) fn lookup_sentence<F>(sentence: &str, mut token_lookup: F) -> Vec<Segment>
where
    F: FnMut(&str, usize) -> Vec<Segment>,
{
    let sentence = normalize_whitespace(sentence);
    let mut segments = vec![];
    let mut offset = 0;
    for token in sentence.split(' ').filter(|t| !t.is_empty()) {
        segments.extend(token_lookup(token, offset));
        offset += token.chars().count();
    }
    segments
}

/// 見出し語化器の結果を `offset` を起点とした候補に変換します。
///
/// `korean_only` が真の場合、完成形ハングル以外の文字を含む文字列は
/// 見出し語化器を呼ばずに空の結果になります。
pub(crate) fn lemmatize<L>(
    word: &str,
    lemmatizer: &L,
    offset: usize,
    korean_only: bool,
) -> Vec<Segment>
where
    L: Lemmatizer + ?Sized,
{
    if word.is_empty() || (korean_only && !hangul::is_complete_word(word)) {
        return vec![];
    }
    let end = offset + word.chars().count();
    lemmatizer
        .analyze(word)
        .into_iter()
        .map(|a| {
            let mid = offset + a.stem.chars().count();
            Segment::pair(a.stem, a.ending, a.stem_tag, a.ending_tag, offset, mid.min(end), end)
        })
        .collect()
}

/// 文字位置からバイト位置への対応を持つ語節。
pub(crate) struct TokenChars<'a> {
    raw: &'a str,
    c2b: Vec<usize>,
}

impl<'a> TokenChars<'a> {
    pub(crate) fn new(raw: &'a str) -> Self {
        let mut c2b: Vec<usize> = raw.char_indices().map(|(bi, _)| bi).collect();
        c2b.push(raw.len());
        Self { raw, c2b }
    }

    /// 文字数
    #[inline(always)]
    pub(crate) fn len_char(&self) -> usize {
        self.c2b.len() - 1
    }

    /// 文字範囲 `[b, e)` の部分文字列
    #[inline(always)]
    pub(crate) fn slice(&self, b: usize, e: usize) -> &'a str {
        &self.raw[self.c2b[b]..self.c2b[e]]
    }
}
