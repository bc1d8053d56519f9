//! peek_core::error — クレート全体で使う簡易エラー型
//!
//! 目的（概要）
//! - `no_std` 環境でも扱える軽量なエラー列挙体を提供します。
//! - 呼び出し側へ伝播させる失敗（`Error`）と、クライアント内部で握りつぶしてよい
//!   ステータスライン解析の失敗（`StatusLineError`）を型で分けています。
//!
//! 使い方（例）
//! ```ignore
//! use peek_core::error::Error;
//!
//! fn connect() -> Result<(), Error> {
//!     Err(Error::Network("connection refused".to_string()))
//! }
//! ```

use alloc::string::String;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// ネットワーク関連の失敗（DNS失敗・接続拒否・送受信エラーなど）
    #[error("network error: {0}")]
    Network(String),
    /// 予期しない入力（URL の形式不正・バッファサイズ 0 など）
    #[error("unexpected input: {0}")]
    UnexpectedInput(String),
}

/// ステータスライン（レスポンス1行目）の分解に失敗した理由。
///
/// `HttpClient::fetch` はこのエラーを外へ出さず、オブザーバへの通知を省くだけです。
/// 理由を知りたい呼び出し側は `fetch_status` の戻り値から受け取れます。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusLineError {
    /// `\r\n` が見つからない（空レスポンスを含む）
    #[error("no CRLF-terminated status line in response")]
    MissingLine,
    #[error("status line is not valid UTF-8")]
    NotUtf8,
    /// 空白区切りのトークンがちょうど3つではない
    #[error("expected 3 tokens in status line, found {0}")]
    TokenCount(usize),
    #[error("invalid status code {0:?}")]
    InvalidCode(String),
}
