//! 用言の見出し語化
//!
//! 活用形を語幹と語尾に分ける処理は [`Lemmatizer`] トレイトを通して
//! 外部から与えられます。[`StemEomiLemmatizer`] は辞書の `Verb`、
//! `Adjective`、`Eomi` の単語集合だけを使う単純な実装で、
//! 不規則活用の規則は持ちません。

use std::sync::Arc;

use crate::dictionary::TagDictionary;
use crate::tag;

/// 見出し語化の結果の1つ。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Analysis {
    /// 語幹
    pub stem: String,
    /// 語尾
    pub ending: String,
    /// 語幹の品詞タグ
    pub stem_tag: String,
    /// 語尾の品詞タグ
    pub ending_tag: String,
}

impl Analysis {
    /// 新しい解析結果を作成します。
    pub fn new<A, B, C, D>(stem: A, ending: B, stem_tag: C, ending_tag: D) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
        D: Into<String>,
    {
        Self {
            stem: stem.into(),
            ending: ending.into(),
            stem_tag: stem_tag.into(),
            ending_tag: ending_tag.into(),
        }
    }
}

/// 表層形を用言として解析するトレイト。
///
/// 空のベクターは「用言ではない」ことを意味します。
pub trait Lemmatizer {
    /// `word` の語幹・語尾の分割候補をすべて返します。
    fn analyze(&self, word: &str) -> Vec<Analysis>;
}

/// 辞書の語幹集合と語尾集合の連結だけで解析する見出し語化器。
///
/// `word = stem + ending` となる分割のうち、`stem` が `Verb` または
/// `Adjective`、`ending` が `Eomi` に登録されているものを返します。
///
/// # 例
///
/// ```
/// use std::sync::Arc;
/// use eojeol::{Lemmatizer, StemEomiLemmatizer, TagDictionary};
///
/// let dict: TagDictionary = [
///     ("Verb", vec!["먹"]),
///     ("Eomi", vec!["었다"]),
/// ].into_iter().collect();
/// let lemmatizer = StemEomiLemmatizer::new(Arc::new(dict));
///
/// let analyses = lemmatizer.analyze("먹었다");
/// assert_eq!(analyses.len(), 1);
/// assert_eq!(analyses[0].stem, "먹");
/// assert_eq!(analyses[0].ending, "었다");
/// ```
#[derive(Clone, Debug)]
pub struct StemEomiLemmatizer {
    dict: Arc<TagDictionary>,
}

impl StemEomiLemmatizer {
    /// 辞書を共有して見出し語化器を作成します。
    pub fn new(dict: Arc<TagDictionary>) -> Self {
        Self { dict }
    }
}

impl Lemmatizer for StemEomiLemmatizer {
    fn analyze(&self, word: &str) -> Vec<Analysis> {
        let mut analyses = vec![];
        for (i, _) in word.char_indices().skip(1) {
            let (stem, ending) = word.split_at(i);
            if !self.dict.contains(tag::EOMI, ending) {
                continue;
            }
            for stem_tag in [tag::VERB, tag::ADJECTIVE] {
                if self.dict.contains(stem_tag, stem) {
                    analyses.push(Analysis::new(stem, ending, stem_tag, tag::EOMI));
                }
            }
        }
        analyses
    }
}
