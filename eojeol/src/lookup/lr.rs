//! 1分割点の探索 (LR探索)
//!
//! 語節を `left + right` の1か所で分け、「名詞+助詞」と
//! 「体言または用言 + 用言」の形だけを調べます。すべての部分文字列を
//! 調べるわけではないため、候補は開始位置0か分割点からしか始まりません。

use std::sync::Arc;

use hashbrown::HashSet;

use crate::dictionary::TagDictionary;
use crate::lemmatizer::Lemmatizer;
use crate::lookup::lattice::Lattice;
use crate::lookup::{Lookup, TokenChars, lemmatize};
use crate::segment::Segment;
use crate::tag;

/// 1分割点の探索戦略。
///
/// 辞書と見出し語化器は [`Arc`] で共有され、複製されません。
pub struct LrLookup<L> {
    dict: Arc<TagDictionary>,
    lemmatizer: Arc<L>,
    korean_only: bool,
}

impl<L> LrLookup<L>
where
    L: Lemmatizer,
{
    /// 新しい探索戦略を作成します。
    ///
    /// 既定では完成形ハングル以外を含む部分文字列を見出し語化しません。
    pub fn new(dict: Arc<TagDictionary>, lemmatizer: Arc<L>) -> Self {
        Self {
            dict,
            lemmatizer,
            korean_only: true,
        }
    }

    /// 完成形ハングル以外を含む部分文字列を見出し語化しないかどうかを設定します。
    pub fn korean_only(mut self, yes: bool) -> Self {
        self.korean_only = yes;
        self
    }

    /// 共有されている辞書。
    pub fn dictionary(&self) -> &TagDictionary {
        &self.dict
    }

    fn lemmatize(&self, word: &str, offset: usize) -> Vec<Segment> {
        lemmatize(word, self.lemmatizer.as_ref(), offset, self.korean_only)
    }

    /// 語節のラティスを構築します。
    pub fn build_lattice(&self, token: &str, offset: usize) -> Lattice {
        let chars = TokenChars::new(token);
        let n = chars.len_char();
        let mut lattice = Lattice::new(n, offset);
        if n == 0 {
            return lattice;
        }

        // the whole token as a predicator
        for seg in self.lemmatize(token, offset) {
            lattice.push(seg);
        }

        for i in 1..=n {
            let l = chars.slice(0, i);
            let r = chars.slice(i, n);
            let l_is_noun = self.dict.contains(tag::NOUN, l);

            if l_is_noun && self.dict.contains(tag::JOSA, r) {
                lattice.push(Segment::pair(
                    l,
                    r,
                    tag::NOUN,
                    tag::JOSA,
                    offset,
                    offset + i,
                    offset + n,
                ));
            }

            let l_pred = self.lemmatize(l, offset);
            let r_pred = self.lemmatize(r, offset + i);
            // noun / predicator + predicator
            if r_pred.is_empty() || (!l_is_noun && l_pred.is_empty()) {
                continue;
            }

            if l_is_noun {
                lattice.push(Segment::single(l, tag::NOUN, offset, offset + i));
                let mut pred_tags = HashSet::new();
                for pred in &r_pred {
                    if pred_tags.insert(pred.left_tag()) {
                        lattice.push(Segment::pair(
                            l,
                            r,
                            tag::NOUN,
                            pred.left_tag(),
                            offset,
                            offset + i,
                            offset + n,
                        ));
                    }
                }
            } else {
                for seg in l_pred {
                    lattice.push(seg);
                }
            }
            for seg in r_pred {
                lattice.push(seg);
            }
        }
        lattice
    }
}

impl<L> Lookup for LrLookup<L>
where
    L: Lemmatizer,
{
    fn token_lookup(&self, token: &str, offset: usize) -> Vec<Segment> {
        self.build_lattice(token, offset).into_segments()
    }
}
