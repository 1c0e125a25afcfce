use dioxus::prelude::ServerFnError;
use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

const INTERNAL: u16 = 500;
const UNAUTHORIZED: u16 = 401;

/// A serializable error for client rendering.
///
/// Built from an [`eyre::Report`], keeping the context chain, plus a status
/// for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    /// The outermost error message.
    pub message: String,
    /// Messages of the source chain, outermost first.
    pub chain: Vec<String>,
    /// HTTP-like status code reported to the client.
    pub status: u16,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            chain: vec![message.clone()],
            message,
            status: INTERNAL,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: UNAUTHORIZED,
            ..Self::new(message)
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Keep the message and chain, but report the error as unauthorized.
    pub fn into_unauthorized(self) -> Self {
        self.with_status(UNAUTHORIZED)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == UNAUTHORIZED
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<eyre::Report> for Error {
    fn from(report: eyre::Report) -> Self {
        Self {
            message: report.to_string(),
            chain: report.chain().map(ToString::to_string).collect(),
            status: INTERNAL,
        }
    }
}

impl From<Error> for ServerFnError {
    fn from(error: Error) -> Self {
        ServerFnError::ServerError {
            message: error.message,
            code: error.status,
            details: Some(serde_json::json!({ "chain": error.chain })),
        }
    }
}

/// Build an [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::new(format!($($arg)*))
    };
}

/// Build an unauthorized [`Error`] from a format string.
#[macro_export]
macro_rules! unauthorized {
    ($($arg:tt)*) => {
        $crate::Error::unauthorized(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use eyre::WrapErr;

    #[test]
    fn report_keeps_context_chain() {
        let error: Error = serde_json::from_str::<u32>("nope")
            .wrap_err("failed to parse session JSON")
            .unwrap_err()
            .into();

        assert_eq!(error.message, "failed to parse session JSON");
        assert_eq!(error.chain.len(), 2);
        assert_eq!(error.chain[0], "failed to parse session JSON");
        assert!(error.chain[1].starts_with("expected value"));
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn macros_format_messages() {
        let plain = crate::err!("missing {}", "cookie");
        assert_eq!(plain.message, "missing cookie");
        assert_eq!(plain.status, 500);

        let denied = crate::unauthorized!("session expired");
        assert!(denied.is_unauthorized());
    }

    #[test]
    fn server_error_keeps_message_and_status() {
        let converted: ServerFnError = Error::unauthorized("session expired").into();

        match converted {
            ServerFnError::ServerError { message, code, .. } => {
                assert_eq!(message, "session expired");
                assert_eq!(code, 401);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
