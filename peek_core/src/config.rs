//! peek_core::config — クライアントの接続先と読み取り設定
//!
//! - 構築後は変更できません（フィールドは非公開、読み取りはゲッターのみ）。
//! - `with_*` は値を消費して新しい設定を返すビルダー風の書き方です。

use crate::error::Error;
use crate::url::Url;
use alloc::format;
use alloc::string::String;
use alloc::string::ToString;

pub const DEFAULT_PORT: u16 = 80;
/// 1回の `read` で受け取る最大バイト数
pub const DEFAULT_BUFFER_SIZE: usize = 1024;
/// 読み取りバッファの上限（1 MiB）。これを超える指定は拒否します。
pub const MAX_BUFFER_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    port: u16,
    buffer_size: usize,
    send_host_header: bool,
}

impl ClientConfig {
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            port: DEFAULT_PORT,
            buffer_size: DEFAULT_BUFFER_SIZE,
            send_host_header: false,
        }
    }

    pub fn from_url(url: &Url) -> Self {
        Self::new(url.host()).with_port(url.port())
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// 0 バイトと `MAX_BUFFER_SIZE` を超える指定は拒否します。
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Result<Self, Error> {
        if buffer_size == 0 {
            return Err(Error::UnexpectedInput(
                "buffer size must be greater than zero".to_string(),
            ));
        }
        if buffer_size > MAX_BUFFER_SIZE {
            return Err(Error::UnexpectedInput(format!(
                "buffer size {} exceeds the limit of {} bytes",
                buffer_size, MAX_BUFFER_SIZE
            )));
        }
        self.buffer_size = buffer_size;
        Ok(self)
    }

    pub fn with_host_header(mut self, send_host_header: bool) -> Self {
        self.send_host_header = send_host_header;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn send_host_header(&self) -> bool {
        self.send_host_header
    }
}
