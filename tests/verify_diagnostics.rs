//! Purpose: Verify the diagnostic emitted by `ResponseDocument::verify` on each failure layer.
//! Exports: Integration tests only.
//! Role: Guard the reason text and category tag consumed by the host logging sink.
//! Invariants: Exactly one event per failed verification; none on success.
//! Notes: Captures output with a thread-local fmt subscriber writing into a shared buffer.

use backend_response::api::{ErrorCategory, ResponseDocument};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().expect("lock").clone();
        String::from_utf8(bytes).expect("utf8")
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn verify_captured(doc: &ResponseDocument, category: ErrorCategory) -> (bool, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let ok = tracing::subscriber::with_default(subscriber, || doc.verify(category));
    (ok, captured.text())
}

#[test]
fn parse_failure_is_logged_with_parser_diagnostic() {
    let doc = ResponseDocument::new(200, "", "not json");
    let (ok, log) = verify_captured(&doc, ErrorCategory::Heartbeat);
    assert!(!ok);
    assert!(log.contains("WARN"));
    assert!(log.contains("failed to parse response body"));
    assert!(log.contains(doc.parse_error_message().expect("message")));
    assert!(log.contains("category=heartbeat"));
    assert!(!log.contains("unexpected HTTP status"));
    assert!(!log.contains("API error"));
}

#[test]
fn http_failure_is_logged_with_code() {
    let doc = ResponseDocument::new(404, "", r#"{"status":0}"#);
    let (ok, log) = verify_captured(&doc, ErrorCategory::Register);
    assert!(!ok);
    assert!(log.contains("unexpected HTTP status: 404"));
    assert!(log.contains("category=register"));
    assert!(!log.contains("API error"));
}

#[test]
fn api_failure_is_logged_with_description() {
    let doc = ResponseDocument::new(200, "", r#"{"status":1,"description":"bad"}"#);
    let (ok, log) = verify_captured(&doc, ErrorCategory::PluginUpdate);
    assert!(!ok);
    assert!(log.contains("API error: 1, description: bad"));
    assert!(log.contains("category=plugin_update"));
    assert_eq!(log.lines().count(), 1);
}

#[test]
fn success_emits_nothing() {
    let doc = ResponseDocument::new(200, "", r#"{"status":0,"description":"ok"}"#);
    let (ok, log) = verify_captured(&doc, ErrorCategory::LogUpload);
    assert!(ok);
    assert!(log.is_empty());
}

#[test]
fn extraction_paths_do_not_log() {
    let body = r#"{"data":{"plugin":{"plugin":"x","md5":"0"}}}"#;
    let doc = ResponseDocument::new(200, "", body);
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let package = tracing::subscriber::with_default(subscriber, || {
        let _ = doc.build_whitelist_table("/data");
        doc.build_update_package()
    });
    assert!(package.is_none());
    assert!(captured.text().is_empty());
}
