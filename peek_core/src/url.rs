//! peek_core::url — `http://` URL を接続先とリクエストパスに分けるだけのパーサ
//!
//! なにをする？
//! - `http://host[:port][/path][?query]` 形式の文字列から `host` / `port` / `path` /
//!   `searchpart`（クエリ文字列）を取り出して `Url` 構造体に入れます。
//! - ネットワーク I/O は行いません。純粋に“文字列の分解”だけです。
//!
//! 注意
//! - `https` や `#fragment`、パーセントエンコードなどは扱いません。
//! - IPv6 アドレスは `http://[::1]:8080/` のように括弧付きで書きます。

use crate::error::Error;
use alloc::format;
use alloc::string::String;
use alloc::string::ToString;

const SCHEME: &str = "http://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    host: String,       // 例: "example.com" / "::1"（IPv6 は括弧を外した形）
    port: u16,          // 例: 80 / 8888
    path: String,       // 例: "index.html"（先頭のスラッシュは除いた形）
    searchpart: String, // 例: "a=1&b=2"（? の後ろ全体）
}

impl Url {
    pub fn parse(url: &str) -> Result<Self, Error> {
        let rest = url
            .strip_prefix(SCHEME)
            .ok_or_else(|| Error::UnexpectedInput("Only HTTP scheme is supported.".to_string()))?;

        // "host:port" と "path?query" を最初の '/' で分ける
        let (authority, path_and_searchpart) = rest.split_once('/').unwrap_or((rest, ""));

        // IPv6 リテラル（`[::1]:8080`）があるので、ポートは括弧の外の最後の ':' で切る
        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) if !port.contains(']') => {
                let port = port.parse::<u16>().map_err(|_| {
                    Error::UnexpectedInput(format!("invalid port {:?} in {}", port, url))
                })?;
                (host, port)
            }
            _ => (authority, crate::config::DEFAULT_PORT),
        };
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        if host.is_empty() {
            return Err(Error::UnexpectedInput(format!("missing host in {}", url)));
        }

        let (path, searchpart) = path_and_searchpart
            .split_once('?')
            .unwrap_or((path_and_searchpart, ""));

        Ok(Self {
            host: host.to_string(),
            port,
            path: path.to_string(),
            searchpart: searchpart.to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn searchpart(&self) -> &str {
        &self.searchpart
    }

    /// リクエスト行に載せる形（必ず `/` 始まり）。例: `/index.html?a=1`
    pub fn request_target(&self) -> String {
        let mut target = format!("/{}", self.path);
        if !self.searchpart.is_empty() {
            target.push('?');
            target.push_str(&self.searchpart);
        }
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_host() {
        let url = Url::parse("http://example.com").expect("failed to parse url");
        assert_eq!(url.host(), "example.com");
        assert_eq!(url.port(), 80);
        assert_eq!(url.path(), "");
        assert_eq!(url.request_target(), "/");
    }

    #[test]
    fn test_url_host_port_path() {
        let url = Url::parse("http://example.com:8888/index.html").expect("failed to parse url");
        assert_eq!(url.host(), "example.com");
        assert_eq!(url.port(), 8888);
        assert_eq!(url.path(), "index.html");
        assert_eq!(url.request_target(), "/index.html");
    }

    #[test]
    fn test_url_host_port_path_searchpart() {
        let url = Url::parse("http://example.com:8888/index.html?a=123&b=456")
            .expect("failed to parse url");
        assert_eq!(url.searchpart(), "a=123&b=456");
        assert_eq!(url.request_target(), "/index.html?a=123&b=456");
    }

    #[test]
    fn test_no_scheme() {
        let expected = Err(Error::UnexpectedInput(
            "Only HTTP scheme is supported.".to_string(),
        ));
        assert_eq!(expected, Url::parse("example.com"));
    }

    #[test]
    fn test_unsupported_scheme() {
        assert!(Url::parse("https://example.com:8888/index.html").is_err());
    }

    #[test]
    fn test_url_ipv6_literal() {
        let url = Url::parse("http://[::1]:8080/index.html").expect("failed to parse url");
        assert_eq!(url.host(), "::1");
        assert_eq!(url.port(), 8080);
        assert_eq!(url.request_target(), "/index.html");

        let url = Url::parse("http://[::1]/").expect("failed to parse url");
        assert_eq!(url.host(), "::1");
        assert_eq!(url.port(), 80);
    }

    #[test]
    fn test_invalid_port() {
        assert!(matches!(
            Url::parse("http://example.com:http/"),
            Err(Error::UnexpectedInput(_))
        ));
        assert!(Url::parse("http://:8080/").is_err());
    }
}
