//! 品詞タグから単語集合への辞書
//!
//! 辞書は構築後は読み取り専用で、探索戦略は [`Arc`](std::sync::Arc) を通して
//! 同じ辞書を共有します。必要な操作は所属判定だけです。

use std::io::{BufRead, BufReader, Read};

use hashbrown::{HashMap, HashSet};

use crate::errors::{Result, TaggerError};
use crate::utils::parse_csv_row;

/// 品詞タグごとの単語集合。
///
/// タグは挿入順に番号付けされます。[`TagDictionary::tags_of`] は単語が
/// 各タグに登録された順にタグを返します。
#[derive(Default, Clone, Debug)]
pub struct TagDictionary {
    tags: Vec<String>,
    words: Vec<HashSet<String>>,
    tag_ids: HashMap<String, usize>,
    // word -> tag ids
    index: HashMap<String, Vec<usize>>,
}

impl TagDictionary {
    /// 空の辞書を作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 単語を登録します。
    ///
    /// 同じ `(tag, word)` を2回登録しても1回と同じです。
    pub fn insert<T, W>(&mut self, tag: T, word: W)
    where
        T: AsRef<str>,
        W: Into<String>,
    {
        let tag_id = self.tag_id_or_insert(tag.as_ref());
        let word = word.into();
        if self.words[tag_id].insert(word.clone()) {
            self.index.entry(word).or_default().push(tag_id);
        }
    }

    fn tag_id_or_insert(&mut self, tag: &str) -> usize {
        if let Some(&id) = self.tag_ids.get(tag) {
            return id;
        }
        let id = self.tags.len();
        self.tags.push(tag.to_string());
        self.words.push(HashSet::new());
        self.tag_ids.insert(tag.to_string(), id);
        id
    }

    /// `tag,word` 形式のCSVから辞書を読み込みます。
    ///
    /// 空行と `#` で始まる行は無視されます。3列目以降の列は無視されます。
    ///
    /// # 引数
    ///
    /// * `rdr` - CSVのリーダー
    ///
    /// # エラー
    ///
    /// 列が2つ未満の行がある場合、[`TaggerError`]が返されます。
    ///
    /// # 例
    ///
    /// ```
    /// use eojeol::TagDictionary;
    ///
    /// let csv = "Noun,밥\nJosa,을\n";
    /// let dict = TagDictionary::from_reader(csv.as_bytes())?;
    /// assert!(dict.contains("Noun", "밥"));
    /// assert!(dict.contains("Josa", "을"));
    /// # Ok::<(), eojeol::errors::TaggerError>(())
    /// ```
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut dict = Self::new();
        for (i, line) in BufReader::new(rdr).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields = parse_csv_row(line)?;
            let (tag, word) = match fields.as_slice() {
                [tag, word, ..] => (tag.trim(), word.trim()),
                _ => {
                    let msg = format!("A row must have a tag and a word, line {}: {line:?}", i + 1);
                    return Err(TaggerError::invalid_format("dictionary", msg));
                }
            };
            if tag.is_empty() {
                let msg = format!("Empty tag, line {}: {line:?}", i + 1);
                return Err(TaggerError::invalid_format("dictionary", msg));
            }
            if word.is_empty() {
                log::warn!("Skipped an empty word, line {}: {:?}", i + 1, line);
                continue;
            }
            dict.insert(tag, word);
        }
        Ok(dict)
    }

    /// `word` が `tag` の単語として登録されているかを判定します。
    #[inline]
    pub fn contains(&self, tag: &str, word: &str) -> bool {
        self.tag_ids
            .get(tag)
            .is_some_and(|&id| self.words[id].contains(word))
    }

    /// `tag` の単語をすべて返します。未知のタグでは空のイテレータです。
    pub fn words_for<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.tag_ids
            .get(tag)
            .into_iter()
            .flat_map(move |&id| self.words[id].iter().map(String::as_str))
    }

    /// `word` を含むタグをすべて、`word` が登録された順に返します。
    pub fn tags_of<'a>(&'a self, word: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.index
            .get(word)
            .into_iter()
            .flat_map(move |ids| ids.iter().map(move |&id| self.tags[id].as_str()))
    }

    /// 登録されているタグを登録順に返します。
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// タグの数。
    pub fn num_tags(&self) -> usize {
        self.tags.len()
    }

    /// 単語が1つも登録されていないかどうか。
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// 登録されている単語の最大文字数。辞書が空の場合は `None` です。
    pub fn max_word_len(&self) -> Option<usize> {
        self.words
            .iter()
            .flat_map(|words| words.iter())
            .map(|word| word.chars().count())
            .max()
    }
}

impl<T, W, I> FromIterator<(T, I)> for TagDictionary
where
    T: AsRef<str>,
    W: Into<String>,
    I: IntoIterator<Item = W>,
{
    fn from_iter<It>(iter: It) -> Self
    where
        It: IntoIterator<Item = (T, I)>,
    {
        let mut dict = Self::new();
        for (tag, words) in iter {
            for word in words {
                dict.insert(tag.as_ref(), word);
            }
        }
        dict
    }
}
