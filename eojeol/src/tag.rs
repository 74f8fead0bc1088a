//! 品詞タグ名の定数
//!
//! 辞書のタグは任意の文字列ですが、探索戦略と既定のテンプレートは
//! 以下の名前を前提としています。

/// 名詞
pub const NOUN: &str = "Noun";

/// 代名詞
pub const PRONOUN: &str = "Pronoun";

/// 副詞
pub const ADVERB: &str = "Adverb";

/// 感嘆詞
pub const EXCLAMATION: &str = "Exclamation";

/// 助詞
pub const JOSA: &str = "Josa";

/// 動詞
pub const VERB: &str = "Verb";

/// 形容詞
pub const ADJECTIVE: &str = "Adjective";

/// 語尾
pub const EOMI: &str = "Eomi";
