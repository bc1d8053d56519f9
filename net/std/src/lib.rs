//! net_std — `std::net` のソケットを使うネットワーク層
//!
//! ここは“ソケットのやり取り”に専念し、リクエスト行の組み立てや
//! ステータスラインの分解は `peek_core::http` 側に任せます。
//!
//! ```ignore
//! use net_std::http::HttpClient;
//! use peek_core::config::ClientConfig;
//!
//! let client = HttpClient::new(ClientConfig::new("example.com"));
//! let raw = client.fetch("/index.html")?;
//! ```

pub mod http;
