//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum used to decide how a failure is shown
//! to the person filling in the form.

use serde::Serialize;

/// エラー種別の列挙体
///
/// フォームに表示されるエラーの分類を定義します。
/// 各バリアントはユーザーが再試行できるかどうかを示します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::InvalidInput;
/// assert_eq!(kind.as_str(), "Invalid Input");
/// assert!(kind.is_user_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力がパスワードポリシーを満たさない
    InvalidInput,
    /// 現在のパスワードが正しくない
    Unauthorized,
    /// バックエンドが一時的に利用不可
    Unavailable,
    /// 永続化ストアの読み書きに失敗
    Storage,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Unavailable.as_str(), "Unavailable");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Unavailable => "Unavailable",
            ErrorKind::Storage => "Storage",
        }
    }

    /// ユーザー側で修正できるエラーかどうかを判定
    ///
    /// 入力の修正で解消できるエラーは `true` を返します。
    #[inline]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, ErrorKind::InvalidInput | ErrorKind::Unauthorized)
    }

    /// 同じ入力で再試行する価値があるかどうか
    ///
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Unavailable | ErrorKind::Storage)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
