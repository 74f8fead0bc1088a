//! テンプレートによる探索
//!
//! 最大語長までのすべての部分文字列に辞書のタグと見出し語化の結果を付け、
//! 隣接する区間をテンプレートに従って組み合わせます。

use std::sync::Arc;

use hashbrown::HashSet;

use crate::dictionary::TagDictionary;
use crate::errors::{Result, TaggerError};
use crate::lemmatizer::Lemmatizer;
use crate::lookup::lattice::Lattice;
use crate::lookup::{Lookup, TokenChars, lemmatize};
use crate::segment::Segment;
use crate::template::{Template, TemplateSet};

/// 辞書でタグ付けされた区間 `(word, tag, end)`。
type TaggedSpan<'a> = (&'a str, &'a str, usize);

/// テンプレートによる探索戦略。
///
/// # 例
///
/// ```
/// use std::sync::Arc;
/// use eojeol::{Lookup, StemEomiLemmatizer, TagDictionary, TemplateLookup};
///
/// let dict: Arc<TagDictionary> = Arc::new([
///     ("Noun", vec!["사과", "사"]),
///     ("Josa", vec!["를", "과"]),
/// ].into_iter().collect());
/// let lemmatizer = Arc::new(StemEomiLemmatizer::new(dict.clone()));
/// let lookup = TemplateLookup::new(dict, lemmatizer)?;
///
/// for seg in lookup.token_lookup("사과를", 0) {
///     println!("{:?} {}", seg.range(), seg);
/// }
/// # Ok::<(), eojeol::errors::TaggerError>(())
/// ```
pub struct TemplateLookup<L> {
    dict: Arc<TagDictionary>,
    lemmatizer: Arc<L>,
    templates: TemplateSet,
    max_word_len: usize,
    korean_only: bool,
}

impl<L> TemplateLookup<L>
where
    L: Lemmatizer,
{
    /// 既定のテンプレートで新しい探索戦略を作成します。
    ///
    /// 最大語長は辞書の最長の単語から導出されます。
    ///
    /// # エラー
    ///
    /// 辞書が空の場合、[`TaggerError`]が返されます。
    pub fn new(dict: Arc<TagDictionary>, lemmatizer: Arc<L>) -> Result<Self> {
        let max_word_len = dict.max_word_len().ok_or_else(|| {
            TaggerError::invalid_argument(
                "dict",
                "The dictionary must not be empty to derive the maximum word length.",
            )
        })?;
        log::debug!("Derived the maximum word length: {}", max_word_len);
        Ok(Self {
            dict,
            lemmatizer,
            templates: TemplateSet::default(),
            max_word_len,
            korean_only: true,
        })
    }

    /// テンプレートを置き換えます。
    ///
    /// # エラー
    ///
    /// いずれかのテンプレートが1～2個のタグでない場合、[`TaggerError`]が返されます。
    pub fn templates<I, T, S>(mut self, templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates = TemplateSet::new(templates)?;
        Ok(self)
    }

    /// 現在のテンプレートにテンプレートを追加します。
    ///
    /// # エラー
    ///
    /// いずれかのテンプレートが1～2個のタグでない場合、[`TaggerError`]が返されます。
    pub fn append_templates<I, T, S>(mut self, templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates = self.templates.extended(templates)?;
        Ok(self)
    }

    /// 部分文字列の最大文字数を設定します。
    ///
    /// # エラー
    ///
    /// `max_word_len` が0の場合、[`TaggerError`]が返されます。
    pub fn max_word_len(mut self, max_word_len: usize) -> Result<Self> {
        if max_word_len == 0 {
            return Err(TaggerError::invalid_argument(
                "max_word_len",
                "must be positive",
            ));
        }
        self.max_word_len = max_word_len;
        Ok(self)
    }

    /// 完成形ハングル以外を含む部分文字列を見出し語化しないかどうかを設定します。
    pub fn korean_only(mut self, yes: bool) -> Self {
        self.korean_only = yes;
        self
    }

    /// 現在のテンプレート。
    pub fn template_set(&self) -> &TemplateSet {
        &self.templates
    }

    /// 現在の最大語長。
    pub fn word_len_limit(&self) -> usize {
        self.max_word_len
    }

    /// 語節のラティスを構築します。
    ///
    /// 見出し語化の結果は内部に分割点を持つため重複除去の対象にならず、
    /// 重複除去の後にそれぞれの開始位置のバケットに追加されます。
    pub fn build_lattice(&self, token: &str, offset: usize) -> Lattice {
        let chars = TokenChars::new(token);
        let n = chars.len_char();

        // string match
        let mut spans: Vec<Vec<TaggedSpan>> = vec![vec![]; n];
        let mut predicators = vec![];
        let mut seen = HashSet::new();
        for (b, bucket) in spans.iter_mut().enumerate() {
            for e in b + 1..=(b + self.max_word_len).min(n) {
                let sub = chars.slice(b, e);
                for seg in lemmatize(sub, self.lemmatizer.as_ref(), offset + b, self.korean_only) {
                    if seen.insert(seg.clone()) {
                        predicators.push(seg);
                    }
                }
                for tag in self.dict.tags_of(sub) {
                    bucket.push((sub, tag, e));
                }
            }
        }

        // as segments
        let mut lattice = Lattice::new(n, offset);
        for (b, bucket) in spans.iter().enumerate() {
            for &(w0, t0, e) in bucket {
                for template in &self.templates {
                    if template.first() != t0 {
                        continue;
                    }
                    match template {
                        Template::Single(_) => {
                            lattice.push(Segment::single(w0, t0, offset + b, offset + e));
                        }
                        Template::Pair(_, second) if e < n => {
                            for &(w1, t1, e2) in &spans[e] {
                                if t1 == second {
                                    lattice.push(Segment::pair(
                                        w0,
                                        w1,
                                        t0,
                                        t1,
                                        offset + b,
                                        offset + e,
                                        offset + e2,
                                    ));
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        lattice.remove_subsumed();

        for seg in predicators {
            lattice.push(seg);
        }
        lattice
    }
}

impl<L> Lookup for TemplateLookup<L>
where
    L: Lemmatizer,
{
    fn token_lookup(&self, token: &str, offset: usize) -> Vec<Segment> {
        self.build_lattice(token, offset).into_segments()
    }
}
