// Layered health check for a backend response: parse, then HTTP status, then API status.
// The order is fixed; the first failing layer decides the reported reason.
use crate::core::document::ResponseDocument;
use crate::core::error::{Error, ErrorKind};
use std::fmt;
use std::sync::Arc;

/// Agent channel whose response is being checked; tags the emitted diagnostic.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorCategory {
    Register,
    Heartbeat,
    PluginUpdate,
    ConfigSync,
    LogUpload,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Register => "register",
            ErrorCategory::Heartbeat => "heartbeat",
            ErrorCategory::PluginUpdate => "plugin_update",
            ErrorCategory::ConfigSync => "config_sync",
            ErrorCategory::LogUpload => "log_upload",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResponseDocument {
    /// Runs the ordered checks without logging.
    pub fn check(&self) -> Result<(), Error> {
        if let Some(failure) = self.parse_failure() {
            let mut err = Error::new(ErrorKind::MalformedBody).with_message(format!(
                "failed to parse response body: {}",
                failure.message()
            ));
            if let Some(source) = failure.source() {
                err = err.with_source(Arc::clone(source));
            }
            return Err(err);
        }
        if !self.is_http_status_ok() {
            return Err(Error::new(ErrorKind::Transport)
                .with_message(format!("unexpected HTTP status: {}", self.http_status()))
                .with_http_status(self.http_status()));
        }
        // Absence of either field means the backend signalled no error.
        if let (Some(status), Some(description)) = (self.fetch_status(), self.fetch_description()) {
            if status != 0 {
                return Err(Error::new(ErrorKind::Application)
                    .with_message(format!("API error: {status}, description: {description}"))
                    .with_api_status(status));
            }
        }
        Ok(())
    }

    /// Runs [`ResponseDocument::check`] and emits one warning tagged with `category` on failure.
    pub fn verify(&self, category: ErrorCategory) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    category = %category,
                    kind = err.kind().as_str(),
                    "{}",
                    err.message().unwrap_or(err.kind().as_str())
                );
                false
            }
        }
    }
}
