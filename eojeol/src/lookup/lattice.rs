//! 語節内の候補ラティス
//!
//! ラティスは語節の文字数 `n` 個のバケットから成り、バケット `i` には
//! 語節内の開始位置が `i` の候補がすべて入ります。ラティスは1回の
//! 語節探索の間だけ存在し、候補を取り出した後に破棄されます。
//!
//! テンプレート探索は部分文字列を網羅的に組み合わせるため、他の候補に
//! 包含される冗長な候補を生みます。[`Lattice::remove_subsumed`] はそれらを
//! 取り除き、極大な候補だけを残します。

use hashbrown::HashSet;

use crate::segment::Segment;

/// 開始位置ごとのバケットに候補を保持するラティス。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lattice {
    buckets: Vec<Vec<Segment>>,
    offset: usize,
}

impl Lattice {
    /// 文字数 `len_char` の語節のための空のラティスを作成します。
    ///
    /// # 引数
    ///
    /// * `len_char` - 語節の文字数
    /// * `offset` - 語節の文頭からの位置。候補の位置はこれを含みます。
    pub fn new(len_char: usize, offset: usize) -> Self {
        Self {
            buckets: vec![vec![]; len_char],
            offset,
        }
    }

    /// 語節の文字数。
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.buckets.len()
    }

    /// 語節の文頭からの位置。
    #[inline(always)]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// 候補を開始位置のバケットに追加します。
    ///
    /// 候補は `offset <= begin` かつ `end <= offset + len_char` を満たす必要があります。
    pub(crate) fn push(&mut self, segment: Segment) {
        debug_assert!(self.offset <= segment.begin);
        debug_assert!(segment.end <= self.offset + self.len_char());
        let i = segment.begin - self.offset;
        self.buckets[i].push(segment);
    }

    /// 語節内の開始位置 `i` のバケット。
    #[inline(always)]
    pub fn bucket(&self, i: usize) -> &[Segment] {
        &self.buckets[i]
    }

    /// すべての候補を開始位置の順に返します。
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.buckets.iter().flatten()
    }

    /// 候補の総数。
    pub fn num_segments(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// 候補を開始位置の順に取り出します。
    pub fn into_segments(self) -> Vec<Segment> {
        self.buckets.into_iter().flatten().collect()
    }

    /// 包含される冗長な候補を取り除きます。
    ///
    /// 2形態素の候補の右部分 `[m, e)` について、開始位置の異なるどの候補も
    /// `begin < e` かつ `mid > m` を満たさないとき、その候補を
    /// 「重なりなし」と呼びます。同じバケットの候補は重なりとみなしません。重なりなしの2形態素の候補 `X` がある
    /// バケットでは、次の候補を削除します。
    ///
    /// - `X` と `(begin, mid)` と左タグが等しい1形態素の候補
    /// - `X` と `mid` と右タグが等しく、`end` が `X` より短い2形態素の候補
    ///
    /// 重なりのある候補は曖昧なものとして残されます。
    ///
    /// 削除される候補には、同じバケットに同じ `(begin, mid)` を持つ候補が
    /// 必ず残ります。そのため削除によって他の候補の重なりの有無は変わらず、
    /// この操作は冪等です。
    pub fn remove_subsumed(&mut self) {
        let spans: Vec<(usize, usize)> = self.iter().map(|s| (s.begin, s.mid)).collect();
        let is_open = |begin: usize, m: usize, e: usize| {
            !spans
                .iter()
                .any(|&(b, mid)| b != begin && b < e && m < mid)
        };

        let mut dominated = Vec::with_capacity(self.buckets.len());
        for bucket in &self.buckets {
            let mut heads = HashSet::new();
            let mut tails = HashSet::new();
            for seg in bucket {
                if let Some(right_tag) = seg.right_tag.as_deref() {
                    if is_open(seg.begin, seg.mid, seg.end) {
                        heads.insert((seg.begin, seg.mid, seg.left_tag.as_str()));
                        tails.insert((seg.mid, seg.end, right_tag));
                    }
                }
            }
            let flags: Vec<bool> = bucket
                .iter()
                .map(|seg| match seg.right_tag.as_deref() {
                    None => heads.contains(&(seg.begin, seg.mid, seg.left_tag.as_str())),
                    Some(right_tag) => tails
                        .iter()
                        .any(|&(m, e, t)| seg.mid == m && seg.end < e && right_tag == t),
                })
                .collect();
            dominated.push(flags);
        }

        for (bucket, flags) in self.buckets.iter_mut().zip(dominated) {
            let mut flags = flags.into_iter();
            bucket.retain(|_| !flags.next().unwrap_or(false));
        }
    }
}
