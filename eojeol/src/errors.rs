//! エラー型の定義
//!
//! このモジュールは、このライブラリで使用されるすべてのエラー型を定義します。
//!
//! 解析処理そのものは失敗しません。エラーになるのは辞書・テンプレート・
//! 最大語長などの設定時の検査と、テキスト形式の辞書の読み込みだけです。

use std::error::Error;
use std::fmt::{self, Debug};

/// このライブラリ専用のResult型
///
/// エラー型としてデフォルトで[`TaggerError`]を使用します。
pub type Result<T, E = TaggerError> = std::result::Result<T, E>;

/// このライブラリのエラー型
#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    /// 無効な引数エラー
    ///
    /// 空の辞書から最大語長を導出しようとした場合や、
    /// 3スロット以上のテンプレートが指定された場合などに発生します。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// 辞書ファイルの行が `tag,word` の形式になっていない場合に発生します。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 標準I/Oエラー
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// UTF-8エンコーディングエラー
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),
}

impl TaggerError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl InvalidArgumentError {
    /// 問題のあった引数の名前を返します。
    pub fn arg(&self) -> &'static str {
        self.arg
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}
