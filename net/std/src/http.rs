//! net_std::http — 1回だけ読む最小 HTTP/1.1 クライアント
//!
//! 入出力（このモジュール）
//! - 入力: `HttpClient::fetch(path)` — 例: `"/index.html"`。接続先は `ClientConfig` で決まります。
//! - 出力: `Result<Vec<u8>, Error>` — 成功時は受け取った生のバイト列、失敗時は `Error::Network`。
//!
//! 実装の流れ
//! 1. `to_socket_addrs` で `host` を解決（DNS）。
//! 2. 解決できたアドレスに順に `TcpStream::connect`。
//! 3. `GET <path> HTTP/1.1\r\n\r\n` を `write_all` で送信。
//! 4. `buffer_size` バイトのバッファに `read` を1回だけ行う。
//! 5. ストリームを閉じる（エラーで抜けた場合も drop で閉じられる）。
//! 6. ステータスラインを分解できればオブザーバへ通知。
//!
//! 注意
//! - レスポンス全体を読むループはしません。大きいレスポンスは途中で切れます。
//! - タイムアウト・リトライ・TLS・リダイレクトはありません。
//! - 呼び出しごとに新しい接続を張るので、同じクライアントで何度でも `fetch` できます。

use log::debug;
use peek_core::config::ClientConfig;
use peek_core::error::Error;
use peek_core::http::{Fetched, HttpRequest};
use peek_core::observer::{NoopObserver, Observer};
use std::io::{ErrorKind, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

/// 最小限の HTTP クライアント。接続先の設定と通知先のオブザーバだけを持ちます。
pub struct HttpClient<O = NoopObserver> {
    config: ClientConfig,
    observer: O,
}

impl HttpClient<NoopObserver> {
    /// 通知先なしのクライアントを作ります。接続はこの時点では張りません。
    pub fn new(config: ClientConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: Observer> HttpClient<O> {
    pub fn with_observer(config: ClientConfig, observer: O) -> Self {
        Self { config, observer }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// `fetch("/")` と同じ。
    pub fn get(&self) -> Result<Vec<u8>, Error> {
        self.fetch("/")
    }

    /// GET を送り、1回の読み取りで得たバイト列を返します。
    ///
    /// ステータスラインの解析に失敗しても `Err` にはなりません（通知を省くだけ）。
    pub fn fetch(&self, path: &str) -> Result<Vec<u8>, Error> {
        let fetched = self.fetch_status(path)?;

        match fetched.status() {
            Ok(status) => status.report_to(&self.observer),
            Err(e) => debug!("no status line reported for {}: {}", path, e),
        }

        Ok(fetched.into_raw())
    }

    /// `fetch` と同じ通信をして、ステータスラインの解析結果もそのまま返します。
    /// オブザーバへの通知はしません。
    pub fn fetch_status(&self, path: &str) -> Result<Fetched, Error> {
        let raw = self.round_trip(path)?;
        Ok(Fetched::new(raw))
    }

    fn round_trip(&self, path: &str) -> Result<Vec<u8>, Error> {
        let mut request = HttpRequest::get(path);
        if self.config.send_host_header() {
            request = request.with_host(self.config.host());
        }

        let mut stream = self.connect()?;

        if let Err(e) = stream.write_all(&request.to_bytes()) {
            return Err(Error::Network(format!(
                "Failed to send a request to TCP stream: {}",
                e
            )));
        }
        debug!("sent GET {} to {}", path, self.authority());

        let mut received = vec![0u8; self.config.buffer_size()];
        let bytes_read = loop {
            match stream.read(&mut received) {
                Ok(bytes) => break bytes,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(Error::Network(format!(
                        "Failed to receive a response from TCP stream: {}",
                        e
                    )))
                }
            }
        };
        received.truncate(bytes_read);

        drop(stream);
        debug!(
            "received {} bytes from {}, connection closed",
            bytes_read,
            self.authority()
        );

        Ok(received)
    }

    fn connect(&self) -> Result<TcpStream, Error> {
        let addrs = match (self.config.host(), self.config.port()).to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                return Err(Error::Network(format!(
                    "Failed to find IP addresses for {}: {}",
                    self.config.host(),
                    e
                )))
            }
        };

        let mut last_error = None;
        for addr in addrs {
            match TcpStream::connect(addr) {
                Ok(stream) => {
                    debug!("connected to {}", addr);
                    return Ok(stream);
                }
                Err(e) => {
                    debug!("failed to connect to {}: {}", addr, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Err(Error::Network(format!(
                "Failed to connect to {}: {}",
                self.authority(),
                e
            ))),
            None => Err(Error::Network(format!(
                "Failed to find IP addresses for {}",
                self.config.host()
            ))),
        }
    }

    fn authority(&self) -> String {
        format!("{}:{}", self.config.host(), self.config.port())
    }
}
