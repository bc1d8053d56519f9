//! peek_core::http — リクエスト行の組み立てとステータスラインの分解
//!
//! ねらい
//! - ネットワーク処理はしません（ソケットは `net_std` が担当）。
//! - 送る側: `GET <path> HTTP/1.1\r\n\r\n` という最小のリクエストをバイト列にします。
//! - 受け取る側: 生のレスポンスから1行目（ステータスライン）だけを取り出し、
//!   バージョン/ステータスコード/理由句に分けます。ヘッダやボディは解析しません。
//!
//! 例（入力のイメージ）
//! ```text
//! HTTP/1.1 404 Not Found\r\n
//! Content-Length: 0\r\n
//! \r\n
//! ```
//! 1行目が空白区切りでちょうど3つ（バージョン/コード/理由句）のときだけ分解できます。
//! この例は理由句が2語なので4トークンになり、解析失敗（通知なし）の扱いです。

use crate::error::StatusLineError;
use crate::observer::{Observer, ReportValue, CODE, MSG, PROTO};
use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;
use log::trace;

const CRLF: &str = "\r\n";

/// GET だけを表す最小のリクエスト。
///
/// `path` は検証しません。改行を含む文字列もそのまま送られます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    path: String,
    host: Option<String>,
}

impl HttpRequest {
    pub fn get(path: &str) -> Self {
        Self {
            path: path.to_string(),
            host: None,
        }
    }

    /// `Host:` ヘッダを付けます。HTTP/1.1 として正しいリクエストにしたいとき用。
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut request = String::from("GET ");
        request.push_str(&self.path);
        request.push_str(" HTTP/1.1");
        request.push_str(CRLF);

        if let Some(host) = &self.host {
            request.push_str("Host: ");
            request.push_str(host);
            request.push_str(CRLF);
        }

        // 空行でリクエスト終わり
        request.push_str(CRLF);
        request.into_bytes()
    }
}

impl Default for HttpRequest {
    fn default() -> Self {
        Self::get("/")
    }
}

/// レスポンス1行目。例: `HTTP/1.1 200 OK`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    version: String,
    status_code: u16,
    reason: String,
}

impl StatusLine {
    /// 生のレスポンスから最初の `\r\n` までを取り出して分解します。
    ///
    /// 空白（スペース・タブ、連続も可）で区切り、ちょうど3つのトークンでなければ失敗です。
    /// 理由句に空白を含む行（`404 Not Found` など）も `TokenCount(4)` になります。
    pub fn parse(raw: &[u8]) -> Result<Self, StatusLineError> {
        let end = raw
            .windows(CRLF.len())
            .position(|w| w == CRLF.as_bytes())
            .ok_or(StatusLineError::MissingLine)?;

        let line = core::str::from_utf8(&raw[..end]).map_err(|_| StatusLineError::NotUtf8)?;

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(StatusLineError::TokenCount(tokens.len()));
        }

        let status_code = tokens[1]
            .parse::<u16>()
            .map_err(|_| StatusLineError::InvalidCode(tokens[1].to_string()))?;

        Ok(Self {
            version: tokens[0].to_string(),
            status_code,
            reason: tokens[2].to_string(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// `proto` → `code` → `msg` の順でオブザーバへ通知します。
    pub fn report_to(&self, observer: &dyn Observer) {
        trace!("reporting status line {:?}", self);
        observer.report(PROTO, ReportValue::Str(self.version.clone()));
        observer.report(CODE, ReportValue::Int(i64::from(self.status_code)));
        observer.report(MSG, ReportValue::Str(self.reason.clone()));
    }
}

/// 1回の取得結果。生のバイト列と、ステータスラインの解析結果を両方持ちます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    raw: Vec<u8>,
    status: Result<StatusLine, StatusLineError>,
}

impl Fetched {
    pub fn new(raw: Vec<u8>) -> Self {
        let status = StatusLine::parse(&raw);
        Self { raw, status }
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn status(&self) -> Result<&StatusLine, &StatusLineError> {
        self.status.as_ref()
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }
}
