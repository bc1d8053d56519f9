//! peek_core::observer — 値を外部へ通知するための「オブザーバ」インターフェース
//!
//! 目的
//! - クライアントはステータスラインの各フィールド（`proto` / `code` / `msg`）を
//!   名前付きで外部へ知らせます。通知先の具体型には依存せず、構築時に注入します。
//! - 本番では `NoopObserver`、テストでは `RecordingObserver` を渡すのが基本です。
//! - `Fn(&str, ReportValue)` を満たすクロージャもそのままオブザーバとして使えます。
//!
//! 使い方（例）
//! ```ignore
//! use peek_core::observer::{Observer, RecordingObserver, ReportValue};
//!
//! let recorder = RecordingObserver::new();
//! recorder.report("code", ReportValue::Int(200));
//! assert_eq!(recorder.reports().len(), 1);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// ステータスラインのプロトコル名（例: "HTTP/1.1"）
pub const PROTO: &str = "proto";
/// ステータスコード（例: 200）
pub const CODE: &str = "code";
/// 理由句（例: "OK"）
pub const MSG: &str = "msg";

/// 通知される値。文字列か整数のどちらか。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Str(s) => write!(f, "{}", s),
            ReportValue::Int(i) => write!(f, "{}", i),
        }
    }
}

/// 名前付きの値を受け取るだけのインターフェース。
///
/// `&self` で受けるので、状態を持つ実装は内部可変性（`RefCell` など）を使います。
pub trait Observer {
    fn report(&self, name: &str, value: ReportValue);
}

impl<F> Observer for F
where
    F: Fn(&str, ReportValue),
{
    fn report(&self, name: &str, value: ReportValue) {
        self(name, value)
    }
}

/// 何もしないオブザーバ。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn report(&self, _name: &str, _value: ReportValue) {}
}

/// 受け取った通知を順番どおりに貯めておくオブザーバ。
#[derive(Debug, Default)]
pub struct RecordingObserver {
    reports: RefCell<Vec<(String, ReportValue)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// これまでの通知を (名前, 値) の組で返します（複製）。
    pub fn reports(&self) -> Vec<(String, ReportValue)> {
        self.reports.borrow().clone()
    }

    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }
}

impl Observer for RecordingObserver {
    fn report(&self, name: &str, value: ReportValue) {
        self.reports.borrow_mut().push((String::from(name), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_recording_keeps_order() {
        let recorder = RecordingObserver::new();
        recorder.report(PROTO, ReportValue::Str("HTTP/1.1".to_string()));
        recorder.report(CODE, ReportValue::Int(404));

        assert_eq!(
            recorder.reports(),
            alloc::vec![
                ("proto".to_string(), ReportValue::Str("HTTP/1.1".to_string())),
                ("code".to_string(), ReportValue::Int(404)),
            ]
        );

        recorder.clear();
        assert!(recorder.reports().is_empty());
    }

    #[test]
    fn test_closure_observer() {
        let seen = RefCell::new(Vec::new());
        let observer = |name: &str, value: ReportValue| {
            seen.borrow_mut().push((name.to_string(), value.to_string()));
        };
        observer.report(MSG, ReportValue::Str("OK".to_string()));
        observer.report(CODE, ReportValue::Int(200));

        assert_eq!(
            *seen.borrow(),
            alloc::vec![
                ("msg".to_string(), "OK".to_string()),
                ("code".to_string(), "200".to_string()),
            ]
        );
    }
}
