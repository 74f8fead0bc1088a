//! 名詞と用言の複合語の判別
//!
//! 教師なしで抽出された名詞の候補には、実際には「名詞+助詞」や
//! 「名詞+用言」の複合である文字列が混ざります。
//! [`NounPredicatorDisambiguator`] は、用言の集合と名詞の品詞素性の集合を
//! 使ってそれらを取り除きます。名詞は、語幹+活用や名詞+助詞の合成として
//! 説明できない場合にだけ確定されます。

use hashbrown::{HashMap, HashSet};

/// 複合語と判定された根拠。
///
/// 分割位置はすべて文字単位です。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Compound {
    /// 文字列全体が既知の用言。
    Predicator,
    /// `word[..split]` と `word[split..]` がどちらも既知の用言。
    PredicatorPair {
        /// 分割位置
        split: usize,
    },
    /// `word[..split]` が名詞 (または名詞+品詞素性) で、`word[split..]` が
    /// 用言または品詞素性。
    NounSuffix {
        /// 分割位置
        split: usize,
        /// `word[..split]` 自体が名詞でない場合の、その内部の分割位置
        inner_split: Option<usize>,
    },
}

/// 名詞の候補を確定名詞と複合語に分けた結果。
#[derive(Clone, Debug, Default)]
pub struct Partition {
    /// 確定された名詞とそのスコア
    pub nouns: HashMap<String, f64>,
    /// 複合語として取り除かれた候補とそのスコア
    pub removals: HashMap<String, f64>,
}

/// 名詞の候補から名詞+用言・名詞+助詞の複合語を取り除く判別器。
///
/// # 例
///
/// ```
/// use hashbrown::{HashMap, HashSet};
/// use eojeol::NounPredicatorDisambiguator;
///
/// let predicators: HashSet<String> = ["했다"].iter().map(|s| s.to_string()).collect();
/// let disambiguator = NounPredicatorDisambiguator::new(predicators, HashSet::new(), HashSet::new());
///
/// let nouns: HashMap<String, f64> = [("공부".to_string(), 0.9), ("공부했다".to_string(), 0.4)]
///     .into_iter()
///     .collect();
/// let partition = disambiguator.partition(&nouns);
/// assert!(partition.nouns.contains_key("공부"));
/// assert!(partition.removals.contains_key("공부했다"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NounPredicatorDisambiguator {
    predicators: HashSet<String>,
    pos_features: HashSet<String>,
    common_features: HashSet<String>,
}

impl NounPredicatorDisambiguator {
    /// 新しい判別器を作成します。
    ///
    /// # 引数
    ///
    /// * `predicators` - 既知の用言の表層形
    /// * `pos_features` - ドメインの名詞の後ろに現れる品詞素性 (助詞など)
    /// * `common_features` - 一般的な名詞の品詞素性
    pub fn new(
        predicators: HashSet<String>,
        pos_features: HashSet<String>,
        common_features: HashSet<String>,
    ) -> Self {
        Self {
            predicators,
            pos_features,
            common_features,
        }
    }

    /// 名詞の候補を確定名詞と複合語に分けます。スコアはそのまま引き継がれます。
    pub fn partition(&self, nouns: &HashMap<String, f64>) -> Partition {
        let mut partition = Partition::default();
        for (noun, &score) in nouns {
            if self.is_compound(noun, nouns) {
                partition.removals.insert(noun.clone(), score);
            } else {
                partition.nouns.insert(noun.clone(), score);
            }
        }
        log::debug!(
            "{} nouns confirmed, {} removed as compounds",
            partition.nouns.len(),
            partition.removals.len(),
        );
        partition
    }

    /// `word` が複合語かどうかを判定します。
    pub fn is_compound(&self, word: &str, nouns: &HashMap<String, f64>) -> bool {
        self.decompose(word, nouns).is_some()
    }

    /// `word` が複合語であればその根拠を返します。
    ///
    /// 後ろの部分が1文字の分割から順に、後ろの部分が `n - 2` 文字の分割まで
    /// 調べ、最初に見つかった根拠を返します。
    pub fn decompose(&self, word: &str, nouns: &HashMap<String, f64>) -> Option<Compound> {
        if self.predicators.contains(word) {
            return Some(Compound::Predicator);
        }

        let c2b = char_boundaries(word);
        let n = c2b.len() - 1;
        for split in (2..n).rev() {
            let (prefix, suffix) = word.split_at(c2b[split]);
            let suffix_is_predicator = self.predicators.contains(suffix);
            if suffix_is_predicator && self.predicators.contains(prefix) {
                return Some(Compound::PredicatorPair { split });
            }
            if !(suffix_is_predicator || self.is_pos_feature(suffix)) {
                continue;
            }
            if let Some(inner_split) = self.noun_with_feature(prefix, nouns) {
                return Some(Compound::NounSuffix { split, inner_split });
            }
        }
        None
    }

    /// `prefix` が名詞、または「名詞 + 品詞素性」であるかを判定します。
    ///
    /// 名詞そのものであれば `Some(None)`、内部で分割できればその位置を返します。
    /// 内部の名詞は2文字以上です。
    fn noun_with_feature(&self, prefix: &str, nouns: &HashMap<String, f64>) -> Option<Option<usize>> {
        if nouns.contains_key(prefix) {
            return Some(None);
        }
        let c2b = char_boundaries(prefix);
        let n = c2b.len() - 1;
        (2..n).find_map(|i| {
            let (l, r) = prefix.split_at(c2b[i]);
            (nouns.contains_key(l) && self.is_pos_feature(r)).then_some(Some(i))
        })
    }

    fn is_pos_feature(&self, word: &str) -> bool {
        self.predicators.contains(word)
            || self.pos_features.contains(word)
            || self.common_features.contains(word)
    }
}

fn char_boundaries(word: &str) -> Vec<usize> {
    let mut c2b: Vec<usize> = word.char_indices().map(|(bi, _)| bi).collect();
    c2b.push(word.len());
    c2b
}
