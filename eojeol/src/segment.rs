//! 解析候補の基本単位
//!
//! このモジュールは、すべての探索戦略が生成する候補 [`Segment`] を提供します。
//! 候補は1形態素 (左部分のみ) または2形態素 (語幹+語尾、名詞+助詞など) の
//! 分割を表し、文頭からの文字単位のオフセットを保持します。

use std::fmt;
use std::ops::Range;

/// 語節 (eojeol) の分割候補。
///
/// `begin <= mid <= end` が常に成り立ちます。右部分を持たない候補では
/// `right_text` が空、`right_tag` が `None` であり、`mid == end` となります。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub(crate) left_text: String,
    pub(crate) right_text: String,
    pub(crate) left_tag: String,
    pub(crate) right_tag: Option<String>,
    pub(crate) begin: usize,
    pub(crate) mid: usize,
    pub(crate) end: usize,
}

impl Segment {
    /// 1形態素の候補を作成します。
    ///
    /// # 引数
    ///
    /// * `text` - 表層形
    /// * `tag` - 品詞タグ
    /// * `begin` - 開始位置（文字単位）
    /// * `end` - 終了位置（文字単位）
    pub fn single<S, T>(text: S, tag: T, begin: usize, end: usize) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        debug_assert!(begin <= end);
        Self {
            left_text: text.into(),
            right_text: String::new(),
            left_tag: tag.into(),
            right_tag: None,
            begin,
            mid: end,
            end,
        }
    }

    /// 2形態素の候補を作成します。
    ///
    /// 右部分が空の場合は [`Segment::single`] と同じ1形態素の候補になります。
    #[allow(clippy::too_many_arguments)]
    pub fn pair<S0, S1, T0, T1>(
        left_text: S0,
        right_text: S1,
        left_tag: T0,
        right_tag: T1,
        begin: usize,
        mid: usize,
        end: usize,
    ) -> Self
    where
        S0: Into<String>,
        S1: Into<String>,
        T0: Into<String>,
        T1: Into<String>,
    {
        debug_assert!(begin <= mid && mid <= end);
        let right_text = right_text.into();
        if right_text.is_empty() {
            return Self::single(left_text, left_tag, begin, mid);
        }
        Self {
            left_text: left_text.into(),
            right_text,
            left_tag: left_tag.into(),
            right_tag: Some(right_tag.into()),
            begin,
            mid,
            end,
        }
    }

    /// 左部分の表層形。
    #[inline(always)]
    pub fn left_text(&self) -> &str {
        &self.left_text
    }

    /// 右部分の表層形。右部分がない場合は空文字列です。
    #[inline(always)]
    pub fn right_text(&self) -> &str {
        &self.right_text
    }

    /// 左部分の品詞タグ。
    #[inline(always)]
    pub fn left_tag(&self) -> &str {
        &self.left_tag
    }

    /// 右部分の品詞タグ。
    #[inline(always)]
    pub fn right_tag(&self) -> Option<&str> {
        self.right_tag.as_deref()
    }

    /// 開始位置（文字単位）。
    #[inline(always)]
    pub const fn begin(&self) -> usize {
        self.begin
    }

    /// 左右の境界位置（文字単位）。
    #[inline(always)]
    pub const fn mid(&self) -> usize {
        self.mid
    }

    /// 終了位置（文字単位）。
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// 1形態素の候補かどうか。
    #[inline(always)]
    pub fn is_single(&self) -> bool {
        self.right_tag.is_none()
    }

    /// 候補全体の文字範囲。
    #[inline(always)]
    pub const fn range(&self) -> Range<usize> {
        self.begin..self.end
    }

    /// 左部分の文字範囲。
    #[inline(always)]
    pub const fn left_range(&self) -> Range<usize> {
        self.begin..self.mid
    }

    /// 右部分の文字範囲。1形態素の候補では空の範囲です。
    #[inline(always)]
    pub const fn right_range(&self) -> Range<usize> {
        self.mid..self.end
    }

    /// 位置を `offset` だけ後ろにずらした候補を返します。
    pub(crate) fn shifted(&self, offset: usize) -> Self {
        let mut seg = self.clone();
        seg.begin += offset;
        seg.mid += offset;
        seg.end += offset;
        seg
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.right_tag {
            Some(right_tag) => write!(
                f,
                "{}/{} + {}/{}",
                self.left_text, self.left_tag, self.right_text, right_tag
            ),
            None => write!(f, "{}/{}", self.left_text, self.left_tag),
        }
    }
}
