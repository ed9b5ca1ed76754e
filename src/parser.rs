use crate::error::TranspileError;
use crate::keyword;
use crate::token::{Kind, Token};
use log::trace;

const COMMON_PROLOGUE: &str = "@ECHO OFF\nSETLOCAL\n";
const COMMON_EPILOGUE: &str = "EXIT /B 0\n";

const EXIT_VARIABLE: &str = "act.@exit";
const FIRST_ARGUMENT_VARIABLE: &str = "act.@argument1";

/// Recognizes statements in a token list and emits the matching batch lines.
///
/// Operators are never reordered: `SET /A` evaluates them left to right,
/// which is exactly how the language defines calculation expressions.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    output: String,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            output: String::new(),
        }
    }

    fn at(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn is_eof(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn last_consumed(&self) -> Option<&Token> {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// Whether the token under the cursor sits on `row`.
    fn at_row(&self, row: usize) -> bool {
        self.at().map_or(false, |token| token.row == row)
    }

    fn unexpected_token(&self) -> TranspileError {
        match self.at().or_else(|| self.last_consumed()) {
            Some(token) => TranspileError::unexpected_token(token.row, token.column),
            None => TranspileError::unexpected_token(1, 1),
        }
    }

    pub fn parse(&mut self) -> Result<String, TranspileError> {
        while !self.is_eof() {
            if self.parse_calculation_statement()? || self.parse_echo_statement()? {
                continue;
            }
            return Err(self.unexpected_token());
        }

        let body = std::mem::take(&mut self.output);
        Ok(format!("{}{}{}", COMMON_PROLOGUE, body, COMMON_EPILOGUE))
    }

    // A calculation statement owns its whole row.
    fn parse_calculation_statement(&mut self) -> Result<bool, TranspileError> {
        if self.parse_calculation_expression()? == 0 {
            return Ok(false);
        }

        if let Some(last) = self.last_consumed() {
            if self.at_row(last.row) {
                return Err(self.unexpected_token());
            }
        }

        trace!("parsed calculation statement");
        Ok(true)
    }

    fn parse_echo_statement(&mut self) -> Result<bool, TranspileError> {
        let echo_row = match self.at() {
            Some(token) if token.kind == Kind::FunctionName && token.value == keyword::ECHO_FUNCTION => {
                token.row
            }
            _ => return Ok(false),
        };
        self.current += 1;

        if !self.at_row(echo_row) {
            self.output.push_str("ECHO;\n");
            trace!("parsed echo statement without arguments");
            return Ok(true);
        }

        let argument_start = self.current;
        let consumed = self.parse_calculation_expression()?;
        if consumed == 0 {
            return Err(self.unexpected_token());
        }

        // Anything longer than a signed literal must be wrapped in a group.
        let closed_by_group = self
            .last_consumed()
            .map_or(false, |token| token.kind == Kind::ClosingGroup);
        if consumed > 2 && !closed_by_group {
            return Err(TranspileError::invalid_argument_count(
                &self.tokens[argument_start],
            ));
        }

        if let Some(extra) = self.at() {
            if extra.row == echo_row {
                return Err(TranspileError::invalid_argument_count(extra));
            }
        }

        self.output.push_str(&format!(
            "SET {}=%{}%\nECHO %{}%\n",
            FIRST_ARGUMENT_VARIABLE, EXIT_VARIABLE, FIRST_ARGUMENT_VARIABLE
        ));
        trace!("parsed echo statement with one argument");
        Ok(true)
    }

    /// Parses `operand { binary_op operand }` on the row of the first token
    /// and returns how many tokens it consumed. Zero means there is no
    /// calculation expression at the cursor.
    fn parse_calculation_expression(&mut self) -> Result<usize, TranspileError> {
        let start = self.current;
        let row = match self.at() {
            Some(token) => token.row,
            None => return Ok(0),
        };
        let mut depth: i32 = 0;
        let mut operator: Option<usize> = None;

        loop {
            let sign = self.eat_sign(row, operator)?;

            let operand = self
                .at()
                .filter(|token| matches!(token.kind, Kind::Number | Kind::OpeningGroup))
                .map(|token| (token.kind, token.row));

            let kind = match operand {
                Some((kind, operand_row)) => {
                    if let Some(index) = operator {
                        if operand_row != row {
                            return Err(TranspileError::missing_operand(&self.tokens[index]));
                        }
                    }
                    kind
                }
                None => {
                    if let Some(index) = operator.or(sign) {
                        return Err(TranspileError::missing_operand(&self.tokens[index]));
                    }
                    break;
                }
            };
            self.current += 1;
            operator = None;

            if kind == Kind::OpeningGroup {
                depth += 1;
                continue;
            }

            while depth > 0 && self.at().map_or(false, |token| token.kind == Kind::ClosingGroup) {
                depth -= 1;
                self.current += 1;
            }

            match self.at() {
                Some(token) if keyword::is_binary_operator(&token.value) && token.row == row => {
                    operator = Some(self.current);
                    self.current += 1;
                }
                _ => break,
            }
        }

        let consumed = self.current - start;
        if consumed == 0 {
            return Ok(0);
        }
        if depth > 0 {
            return Err(TranspileError::unclosed_group(&self.tokens[self.current - 1]));
        }

        let expression: String = self.tokens[start..self.current]
            .iter()
            .map(|token| token.value.as_str())
            .collect();
        self.output
            .push_str(&format!("SET /A {}={}\n", EXIT_VARIABLE, expression));

        Ok(consumed)
    }

    /// Consumes an optional `+`/`-` sign in operand position.
    fn eat_sign(&mut self, row: usize, operator: Option<usize>) -> Result<Option<usize>, TranspileError> {
        let sign_row = match self.at() {
            Some(token) if token.kind == Kind::Operator && keyword::is_unary_operator(&token.value) => {
                token.row
            }
            _ => return Ok(None),
        };

        if let Some(index) = operator {
            if sign_row != row {
                return Err(TranspileError::missing_operand(&self.tokens[index]));
            }
        }

        self.current += 1;
        Ok(Some(self.current - 1))
    }
}

pub fn parse(tokens: Vec<Token>) -> Result<String, TranspileError> {
    Parser::new(tokens).parse()
}
