use std::{fmt::Display, io, path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// A syntax error raised at `token`, describing the construct that was expected there.
    pub fn unexpected(token: &Token, expected: impl Into<String>) -> Self {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                kind: token.kind,
                expected: expected.into(),
            },
            token.span.start.clone(),
        )
    }

    pub fn io(path: impl Into<PathBuf>, cause: io::Error) -> Self {
        Error::new(
            ErrorImpl::Io {
                path: path.into(),
                cause: Arc::new(cause),
            },
            Position::null(),
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedToken { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::Io { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::Io { .. } => "IoError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken {
                token,
                kind,
                expected,
            } => ErrorTip::Suggestion(format!(
                "Unexpected {}, {}",
                describe_token(kind, token),
                expected
            )),
            ErrorImpl::Io { path, .. } => ErrorTip::Suggestion(format!(
                "Could not write `{}`, check the directory exists and is writable",
                path.display()
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("syntax error ({expected}): unexpected {}", describe_token(.kind, .token))]
    UnexpectedToken {
        token: String,
        kind: TokenKind,
        expected: String,
    },
    #[error("failed to write {path:?}: {cause}")]
    Io {
        path: PathBuf,
        #[source]
        cause: Arc<io::Error>,
    },
}

/// The end of input has no text of its own, and literals are told apart from
/// identifiers and keywords spelled the same way.
fn describe_token(kind: &TokenKind, token: &str) -> String {
    match kind {
        TokenKind::EOF => String::from("end of input"),
        TokenKind::String => format!("string literal {:?}", token),
        TokenKind::Char => format!("char literal '{}'", token),
        _ => format!("token `{}`", token),
    }
}
