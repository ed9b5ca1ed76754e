//! Transpiler from ACT calculation scripts to Windows batch files.
//!
//! [`transpile`] is the single entry point: source text in, a
//! [`TranspileResult`] holding either the generated script or the first
//! diagnostic out.

pub mod config;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod transpiler;

pub use error::{CompilerError, TranspileError};
pub use token::{Kind, Token};
pub use transpiler::{transpile, TranspileResult, TranspileValue};
