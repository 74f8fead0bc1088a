//! 2スロットのタグテンプレート
//!
//! テンプレートは合法な分割の形を宣言します。1タグのテンプレート `(T)` は
//! タグ `T` の単語1つで覆われる区間を、2タグのテンプレート `(T0, T1)` は
//! 隣接する `T0` と `T1` の組を許可します。

use std::fmt;

use crate::errors::{Result, TaggerError};
use crate::tag;

/// 1つまたは2つのタグから成るテンプレート。
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Template {
    /// 1形態素の形 `(T)`
    Single(String),
    /// 2形態素の形 `(T0, T1)`
    Pair(String, String),
}

impl Template {
    /// タグの列からテンプレートを作成します。
    ///
    /// # エラー
    ///
    /// タグが1つもない場合、または3つ以上ある場合、[`TaggerError`]が返されます。
    ///
    /// # 例
    ///
    /// ```
    /// use eojeol::Template;
    ///
    /// let t = Template::new(["Noun", "Josa"])?;
    /// assert_eq!(t, Template::Pair("Noun".into(), "Josa".into()));
    ///
    /// assert!(Template::new(["Noun", "Josa", "Josa"]).is_err());
    /// # Ok::<(), eojeol::errors::TaggerError>(())
    /// ```
    pub fn new<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        match tags.len() {
            1 => Ok(Self::Single(tags.remove(0))),
            2 => {
                let right = tags.remove(1);
                let left = tags.remove(0);
                Ok(Self::Pair(left, right))
            }
            n => Err(TaggerError::invalid_argument(
                "templates",
                format!("A template must have one or two tags, but {tags:?} has {n}"),
            )),
        }
    }

    /// スロット数。
    pub fn num_slots(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Pair(..) => 2,
        }
    }

    /// 先頭スロットのタグ。
    pub fn first(&self) -> &str {
        match self {
            Self::Single(t) | Self::Pair(t, _) => t,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(t) => write!(f, "({t})"),
            Self::Pair(t0, t1) => write!(f, "({t0}, {t1})"),
        }
    }
}

/// 重複を除いたテンプレートの集合。
///
/// 1タグのテンプレートが先に、次にタグ名の辞書順に並びます。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    /// タグ列の列からテンプレート集合を作成します。
    ///
    /// # エラー
    ///
    /// いずれかのタグ列が1～2個のタグでない場合、[`TaggerError`]が返されます。
    pub fn new<I, T, S>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates = templates
            .into_iter()
            .map(Template::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_templates(templates))
    }

    fn from_templates(mut templates: Vec<Template>) -> Self {
        templates.sort_unstable();
        templates.dedup();
        let num_pairs = templates.iter().filter(|t| t.num_slots() == 2).count();
        log::debug!(
            "{} templates configured ({} two-slot)",
            templates.len(),
            num_pairs,
        );
        Self { templates }
    }

    /// テンプレートを追加した新しい集合を返します。
    pub fn extended<I, T, S>(&self, templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut merged = self.templates.clone();
        for t in templates {
            merged.push(Template::new(t)?);
        }
        Ok(Self::from_templates(merged))
    }

    /// テンプレートを順に返します。
    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// テンプレートの数。
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// 空かどうか。
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateSet {
    /// 体言と助詞を中心にした既定のテンプレート。
    fn default() -> Self {
        Self::from_templates(vec![
            Template::Single(tag::NOUN.to_string()),
            Template::Single(tag::PRONOUN.to_string()),
            Template::Single(tag::ADVERB.to_string()),
            Template::Single(tag::EXCLAMATION.to_string()),
            Template::Pair(tag::NOUN.to_string(), tag::JOSA.to_string()),
            Template::Pair(tag::PRONOUN.to_string(), tag::JOSA.to_string()),
            Template::Pair(tag::ADVERB.to_string(), tag::JOSA.to_string()),
        ])
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_and_order() {
        let set = TemplateSet::new([
            vec!["Noun", "Josa"],
            vec!["Noun"],
            vec!["Noun", "Josa"],
            vec!["Adverb"],
        ])
        .unwrap();
        let templates: Vec<_> = set.iter().map(ToString::to_string).collect();
        assert_eq!(templates, ["(Adverb)", "(Noun)", "(Noun, Josa)"]);
    }

    #[test]
    fn test_too_long_template() {
        let err = TemplateSet::new([vec!["Noun", "Josa", "Eomi"]]).unwrap_err();
        assert!(matches!(err, TaggerError::InvalidArgument(_)));
    }

    #[test]
    fn test_slots() {
        let single = Template::new(["Noun"]).unwrap();
        assert_eq!(single.num_slots(), 1);
        assert_eq!(single.first(), "Noun");

        let pair = Template::new(["Pronoun", "Josa"]).unwrap();
        assert_eq!(pair.num_slots(), 2);
        assert_eq!(pair.first(), "Pronoun");
    }

    #[test]
    fn test_empty_template() {
        assert!(Template::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_extended() {
        let set = TemplateSet::default()
            .extended([vec!["Noun", "Eomi"], vec!["Noun"]])
            .unwrap();
        assert_eq!(set.len(), TemplateSet::default().len() + 1);
    }
}
