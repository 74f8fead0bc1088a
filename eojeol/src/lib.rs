//! # eojeol
//!
//! 辞書に基づく韓国語の語節 (eojeol) の分割候補生成器です。
//!
//! ## 概要
//!
//! 空白で区切られた語節を、品詞タグから単語集合への辞書、用言の見出し語化器、
//! 2スロットのタグテンプレートを使って形態素の分割候補に分解します。
//! 統計的なスコア付けや最適経路の選択は行わず、残ったすべての候補を返します。
//! 候補の順位付けは呼び出し側の責任です。
//!
//! ## 主な機能
//!
//! - **LR探索**: 1か所の分割点で「名詞+助詞」「体言/用言+用言」を調べる探索
//! - **テンプレート探索**: 最大語長までの部分文字列のラティスを作り、テンプレートで組み合わせる探索
//! - **重複除去**: 他の候補に包含される冗長な候補の削除
//! - **キャッシュ**: コーパス全体での語節ごとの結果の記憶
//! - **複合語の判別**: 名詞の候補から名詞+用言・名詞+助詞の複合を取り除く
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use eojeol::{LookupCache, StemEomiLemmatizer, TagDictionary, TemplateLookup};
//!
//! let dict_csv = "Noun,밥\nNoun,아침밥\nJosa,을\nVerb,먹\nEomi,었다\n";
//! let dict = Arc::new(TagDictionary::from_reader(dict_csv.as_bytes())?);
//! let lemmatizer = Arc::new(StemEomiLemmatizer::new(dict.clone()));
//!
//! let lookup = TemplateLookup::new(dict, lemmatizer)?;
//! let mut cache = LookupCache::new(lookup);
//!
//! let segments = cache.sentence_lookup("밥을  먹었다");
//! assert_eq!(segments.len(), 2);
//!
//! assert_eq!(segments[0].to_string(), "밥/Noun + 을/Josa");
//! assert_eq!(segments[0].range(), 0..2);
//!
//! assert_eq!(segments[1].to_string(), "먹/Verb + 었다/Eomi");
//! assert_eq!(segments[1].range(), 2..5);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// 品詞タグから単語集合への辞書
pub mod dictionary;

/// 名詞と用言の複合語の判別
pub mod disambiguate;

/// エラー型の定義
pub mod errors;

/// ハングル文字の判定
pub mod hangul;

/// 用言の見出し語化
pub mod lemmatizer;

/// 語節の候補探索とキャッシュ
pub mod lookup;

/// 分割候補の型定義
pub mod segment;

/// 品詞タグ名の定数
pub mod tag;

/// タグテンプレート
pub mod template;

/// 内部ユーティリティ関数
pub mod utils;


// Re-exports
pub use dictionary::TagDictionary;
pub use disambiguate::{Compound, NounPredicatorDisambiguator, Partition};
pub use lemmatizer::{Analysis, Lemmatizer, StemEomiLemmatizer};
pub use lookup::{Lattice, Lookup, LookupCache, LrLookup, TemplateLookup};
pub use segment::Segment;
pub use template::{Template, TemplateSet};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
