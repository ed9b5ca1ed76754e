use crate::token::Token;
use serde::Serialize;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CompilerError {
    FileNotFound(String),
    IO(std::io::Error),
    Transpile(TranspileError),
    Serialization(serde_json::Error),
}

impl Error for CompilerError {}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompilerError::IO(err) => write!(f, "IOError: {}", err),
            CompilerError::FileNotFound(err) => write!(f, "FileNotFoundError: {}", err),
            CompilerError::Transpile(err) => write!(f, "{}", err),
            CompilerError::Serialization(err) => write!(f, "SerializationError: {}", err),
        }
    }
}

impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IO(err)
    }
}

impl From<TranspileError> for CompilerError {
    fn from(err: TranspileError) -> Self {
        CompilerError::Transpile(err)
    }
}

impl From<serde_json::Error> for CompilerError {
    fn from(err: serde_json::Error) -> Self {
        CompilerError::Serialization(err)
    }
}

/// A recoverable failure raised while tokenizing or parsing, pinned to the
/// first offending character. Rows and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranspileError {
    pub row: usize,
    pub column: usize,
    pub message: String,
}

impl Error for TranspileError {}

impl TranspileError {
    pub fn new(row: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            row,
            column,
            message: message.into(),
        }
    }

    pub fn from_token(token: &Token, message: impl Into<String>) -> Self {
        Self::new(token.row, token.column, message)
    }

    pub fn unclosed_comment(row: usize, column: usize) -> Self {
        Self::new(row, column, "multi-line comment not closed")
    }

    pub fn non_integer_literal(row: usize, column: usize) -> Self {
        Self::new(row, column, "numeric literals may only define 32-bit integers")
    }

    pub fn zero_padded_literal(row: usize, column: usize) -> Self {
        Self::new(row, column, "numeric literals may not be zero-padded")
    }

    pub fn invalid_identifier(row: usize, column: usize) -> Self {
        Self::new(
            row,
            column,
            "identifiers may use only lowercase letters, digits, and underscore",
        )
    }

    pub fn unexpected_token(row: usize, column: usize) -> Self {
        Self::new(row, column, "unexpected token")
    }

    pub fn missing_operand(operator: &Token) -> Self {
        Self::from_token(
            operator,
            format!("{} has no right-hand operand", operator.value),
        )
    }

    pub fn unclosed_group(last: &Token) -> Self {
        Self::new(last.row, last.end_column(), "group not closed")
    }

    pub fn invalid_argument_count(token: &Token) -> Self {
        Self::from_token(token, "invalid argument count")
    }
}

impl fmt::Display for TranspileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[Error] {}, {}: {}", self.row, self.column, self.message)
    }
}
