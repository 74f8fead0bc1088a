//! 語節探索結果のキャッシュ
//!
//! コーパス中の語節は何度も現れるため、語節ごとの探索結果を使用回数と
//! 一緒に保持します。キャッシュはコーパス全体の処理の間存続し、
//! [`LookupCache::compact`] で使用回数の多いエントリだけを残して
//! メモリ使用量を抑えることができます。辞書のデータは削除されないため、
//! 削除されたエントリは次に参照されたときに再計算されるだけです。

use hashbrown::HashMap;

use crate::lookup::{Lookup, lookup_sentence};
use crate::segment::Segment;

/// キャッシュのエントリ。
#[derive(Clone, Debug)]
struct CacheEntry {
    // positions relative to the token start
    segments: Vec<Segment>,
    count: usize,
}

/// 探索戦略を包み、語節ごとの結果を記憶するキャッシュ。
///
/// 結果は語節の先頭を0とした位置で保存され、参照時に要求された
/// オフセットだけずらして返されます。そのため、キャッシュを通した結果と
/// 通さない結果は常に等しくなります。
///
/// # 例
///
/// ```
/// use std::sync::Arc;
/// use eojeol::{LookupCache, StemEomiLemmatizer, TagDictionary, TemplateLookup};
///
/// let dict: Arc<TagDictionary> = Arc::new([
///     ("Noun", vec!["밥"]),
///     ("Josa", vec!["을"]),
/// ].into_iter().collect());
/// let lemmatizer = Arc::new(StemEomiLemmatizer::new(dict.clone()));
/// let mut cache = LookupCache::new(TemplateLookup::new(dict, lemmatizer)?);
///
/// cache.sentence_lookup("밥을 밥을");
/// assert_eq!(cache.use_count("밥을"), 2);
/// # Ok::<(), eojeol::errors::TaggerError>(())
/// ```
pub struct LookupCache<T> {
    lookup: T,
    entries: HashMap<String, CacheEntry>,
}

impl<T> LookupCache<T>
where
    T: Lookup,
{
    /// 空のキャッシュを作成します。
    pub fn new(lookup: T) -> Self {
        Self {
            lookup,
            entries: HashMap::new(),
        }
    }

    /// 解析済みの結果で初期化したキャッシュを作成します。
    ///
    /// `preanalyzed` の候補の位置は語節の先頭を0とします。これらのエントリの
    /// 使用回数は0から始まり、探索戦略を呼ばずに返されます。
    pub fn with_preanalyzed<I, S>(lookup: T, preanalyzed: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Segment>)>,
        S: Into<String>,
    {
        let entries = preanalyzed
            .into_iter()
            .map(|(token, segments)| (token.into(), CacheEntry { segments, count: 0 }))
            .collect();
        Self { lookup, entries }
    }

    /// 包んでいる探索戦略。
    pub fn inner(&self) -> &T {
        &self.lookup
    }

    /// 語節の分割候補を返します。
    ///
    /// キャッシュにない語節は探索戦略で計算して保存し、使用回数を1にします。
    /// キャッシュにある語節は保存された結果を返し、使用回数を1増やします。
    pub fn token_lookup(&mut self, token: &str, offset: usize) -> Vec<Segment> {
        let lookup = &self.lookup;
        let entry = self.entries.entry_ref(token).or_insert_with(|| {
            log::trace!("cache miss: {}", token);
            CacheEntry {
                segments: lookup.token_lookup(token, 0),
                count: 0,
            }
        });
        entry.count += 1;
        if offset == 0 {
            entry.segments.clone()
        } else {
            entry.segments.iter().map(|s| s.shifted(offset)).collect()
        }
    }

    /// 文を空白で語節に分け、各語節の候補を連結して返します。
    ///
    /// 各語節のオフセットは、それより前の語節の文字数の合計です。
    pub fn sentence_lookup(&mut self, sentence: &str) -> Vec<Segment> {
        lookup_sentence(sentence, |token, offset| self.token_lookup(token, offset))
    }

    /// 語節の使用回数。キャッシュにない場合は0です。
    pub fn use_count(&self, token: &str) -> usize {
        self.entries.get(token).map_or(0, |e| e.count)
    }

    /// 語節がキャッシュにあるかどうか。
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// エントリの数。
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 空かどうか。
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 使用回数の多い上位 `top_k` 個のエントリだけを残します。
    ///
    /// 使用回数が等しい場合は語節の辞書順で先のものが残ります。
    pub fn compact(&mut self, top_k: usize) {
        let before = self.entries.len();
        if before <= top_k {
            return;
        }
        let mut ranked: Vec<(&String, usize)> =
            self.entries.iter().map(|(k, e)| (k, e.count)).collect();
        ranked.sort_unstable_by(|(k1, c1), (k2, c2)| c2.cmp(c1).then_with(|| k1.cmp(k2)));
        let evicted: Vec<String> = ranked[top_k..].iter().map(|(k, _)| (*k).clone()).collect();
        for token in &evicted {
            self.entries.remove(token);
        }
        log::debug!("Compacted the lookup cache: {} -> {} entries", before, self.entries.len());
    }
}
