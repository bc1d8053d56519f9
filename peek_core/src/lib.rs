//! peek_core — 最小 HTTP クライアントの“コア”ライブラリ（no_std）
//!
//! 目的（なにを入れる？）
//! - ソケットに依存しない純粋な処理をまとめる場所です。
//! - `no_std` + `alloc` で動くので、OS 固有の I/O は上位クレート（`net_std`）に任せます。
//!
//! モジュール構成
//! - `config`: 接続先ホスト/ポートと読み取りバッファの設定。
//! - `error`: 共有の `Error` 型と、ステータスライン解析用の `StatusLineError`。
//! - `http`: リクエスト行の組み立てと、レスポンス1行目の分解。
//! - `observer`: 解析結果を外へ知らせるためのインターフェース。
//! - `url`: `http://` URL の分解。
#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod http;
pub mod observer;
pub mod url;
