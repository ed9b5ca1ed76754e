use crate::error::TranspileError;
use crate::lexer::Lexer;
use crate::parser::Parser;
use log::debug;
use serde::Serialize;

/// Outcome of one `transpile` call.
///
/// `success` is true exactly when `value` holds generated script text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranspileResult {
    pub success: bool,
    pub value: TranspileValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TranspileValue {
    Script(String),
    Error(TranspileError),
}

impl TranspileResult {
    pub fn succeeded(script: String) -> Self {
        Self {
            success: true,
            value: TranspileValue::Script(script),
        }
    }

    pub fn failed(error: TranspileError) -> Self {
        Self {
            success: false,
            value: TranspileValue::Error(error),
        }
    }

    pub fn script(&self) -> Option<&str> {
        match &self.value {
            TranspileValue::Script(script) => Some(script),
            TranspileValue::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&TranspileError> {
        match &self.value {
            TranspileValue::Script(_) => None,
            TranspileValue::Error(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<String, TranspileError> {
        match self.value {
            TranspileValue::Script(script) => Ok(script),
            TranspileValue::Error(error) => Err(error),
        }
    }
}

impl From<Result<String, TranspileError>> for TranspileResult {
    fn from(result: Result<String, TranspileError>) -> Self {
        match result {
            Ok(script) => Self::succeeded(script),
            Err(error) => Self::failed(error),
        }
    }
}

impl From<TranspileResult> for Result<String, TranspileError> {
    fn from(result: TranspileResult) -> Self {
        result.into_result()
    }
}

fn run(source: &str) -> Result<String, TranspileError> {
    let tokens = Lexer::new(source).tokenize()?;
    debug!("tokenizer produced {} token(s)", tokens.len());

    let script = Parser::new(tokens).parse()?;
    debug!("parser produced {} byte(s) of script", script.len());

    Ok(script)
}

/// Compiles ACT source into a batch script.
///
/// Diagnostics from either stage land in the returned envelope. Panics are
/// programming errors and are left to unwind to the caller.
pub fn transpile(source: &str) -> TranspileResult {
    let result = TranspileResult::from(run(source));
    if let Some(error) = result.error() {
        debug!("transpile failed: {}", error);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_the_script() {
        let result = transpile("1+2");
        assert!(result.success);
        assert_eq!(
            result.script(),
            Some("@ECHO OFF\nSETLOCAL\nSET /A act.@exit=1+2\nEXIT /B 0\n")
        );
    }

    #[test]
    fn failure_is_never_flagged_as_success() {
        let result = transpile("1.5");
        assert!(!result.success);
        assert_eq!(
            result.error(),
            Some(&TranspileError::non_integer_literal(1, 1))
        );
        assert_eq!(result.script(), None);
    }

    #[test]
    fn parser_failures_use_the_same_envelope() {
        let result = transpile("echo 1 2");
        assert!(!result.success);
        assert_eq!(
            result.into_result(),
            Err(TranspileError::new(1, 8, "invalid argument count"))
        );
    }

    #[test]
    fn serializes_success_as_plain_text() {
        let json = serde_json::to_value(transpile("")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "value": "@ECHO OFF\nSETLOCAL\nEXIT /B 0\n"
            })
        );
    }

    #[test]
    fn serializes_failure_as_diagnostic() {
        let json = serde_json::to_value(transpile("A")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "value": {
                    "row": 1,
                    "column": 1,
                    "message": "identifiers may use only lowercase letters, digits, and underscore"
                }
            })
        );
    }

    #[test]
    fn calls_do_not_share_state() {
        let first = transpile("(1");
        let second = transpile("2");
        assert!(!first.success);
        assert_eq!(
            second.script(),
            Some("@ECHO OFF\nSETLOCAL\nSET /A act.@exit=2\nEXIT /B 0\n")
        );
    }
}
