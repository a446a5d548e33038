// Error model for response decoding: one kind per failure class plus optional context.
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    MalformedBody,
    Transport,
    Application,
    FieldAbsent,
    Integrity,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MalformedBody => "malformed-body",
            ErrorKind::Transport => "transport",
            ErrorKind::Application => "application",
            ErrorKind::FieldAbsent => "field-absent",
            ErrorKind::Integrity => "integrity",
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    path: Option<String>,
    http_status: Option<i64>,
    api_status: Option<i64>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            path: None,
            http_status: None,
            api_status: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn http_status(&self) -> Option<i64> {
        self.http_status
    }

    pub fn api_status(&self) -> Option<i64> {
        self.api_status
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_http_status(mut self, status: i64) -> Self {
        self.http_status = Some(status);
        self
    }

    pub fn with_api_status(mut self, status: i64) -> Self {
        self.api_status = Some(status);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {path})")?;
        }
        if let Some(status) = self.http_status {
            write!(f, " (http status: {status})")?;
        }
        if let Some(status) = self.api_status {
            write!(f, " (api status: {status})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}
