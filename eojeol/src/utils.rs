//! ユーティリティ関数を提供するモジュール
//!
//! 主に以下の機能を提供します：
//!
//! - CSV行の解析と引用符処理
//! - 文中の空白の正規化
//! - テスト用のマクロ

use csv_core::ReadFieldResult;

use crate::errors::{Result, TaggerError};

/// CSV形式の行を解析してフィールドのベクターに分割する
///
/// ダブルクォートで囲まれたフィールドや、フィールド内のカンマも正しく処理します。
///
/// # 引数
///
/// * `row` - 解析するCSV形式の文字列
///
/// # 戻り値
///
/// 解析されたフィールドを格納する文字列のベクター
///
/// # エラー
///
/// フィールドが内部バッファに収まらない場合、またはフィールドが
/// UTF-8として不正な場合、[`TaggerError`]が返されます。
///
/// # 例
///
/// ```
/// # use eojeol::utils::parse_csv_row;
/// let fields = parse_csv_row("Noun,사람").unwrap();
/// assert_eq!(fields, vec!["Noun", "사람"]);
///
/// let fields_with_quote = parse_csv_row("Noun,\"1,2-디클로로에탄\"").unwrap();
/// assert_eq!(fields_with_quote, vec!["Noun", "1,2-디클로로에탄"]);
/// ```
pub fn parse_csv_row(row: &str) -> Result<Vec<String>> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        let end = match result {
            ReadFieldResult::InputEmpty => true,
            ReadFieldResult::Field { .. } => false,
            ReadFieldResult::End => true,
            ReadFieldResult::OutputFull => {
                return Err(TaggerError::invalid_format("csv", "Field too large"));
            }
        };
        fields.push(std::str::from_utf8(&output[..nout])?.to_string());
        if end {
            break;
        }
        bytes = &bytes[nin..];
    }
    Ok(fields)
}

/// 文中の連続する空白を1つのスペースにまとめ、前後の空白を取り除きます。
///
/// 位置オフセットはこの正規化後の文字列を基準に数えられます。
///
/// # 例
///
/// ```
/// # use eojeol::utils::normalize_whitespace;
/// assert_eq!(normalize_whitespace("  밥을   먹었다 "), "밥을 먹었다");
/// ```
pub fn normalize_whitespace(sentence: &str) -> String {
    sentence.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
/// HashMapリテラルを簡潔に記述するためのマクロ
///
/// キーと値のペアを`=>`演算子で指定し、カンマで区切って記述します。
///
/// # 例
///
/// ```ignore
/// let map = hashmap! {
///     "key1" => "value1",
///     "key2" => "value2",
/// };
/// ```
macro_rules! hashmap {
    ( $($k:expr => $v:expr,)* ) => {
        {
            #[allow(unused_mut)]
            let mut h = hashbrown::HashMap::new();
            $(
                h.insert($k, $v);
            )*
            h
        }
    };
    ( $($k:expr => $v:expr),* ) => {
        hashmap![$( $k => $v, )*]
    };
}

#[cfg(test)]
pub(crate) use hashmap;

#[cfg(test)]
/// 文字列のHashSetリテラルを記述するためのマクロ
macro_rules! hashset {
    ( $($v:expr),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut h = hashbrown::HashSet::<String>::new();
            $(
                h.insert($v.to_string());
            )*
            h
        }
    };
}

#[cfg(test)]
pub(crate) use hashset;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_row() {
        assert_eq!(
            &["Noun", "사람"],
            parse_csv_row("Noun,사람").unwrap().as_slice()
        );
    }

    #[test]
    fn test_parse_csv_row_with_quote() {
        assert_eq!(
            &["Noun", "1,2-디클로로에탄"],
            parse_csv_row("Noun,\"1,2-디클로로에탄\"").unwrap().as_slice()
        );
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("a  b\t\tc"), "a b c");
        assert_eq!(normalize_whitespace("   "), "");
    }
}
