use crate::error::TranspileError;
use crate::keyword;
use crate::token::{Kind, Token};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

lazy_static! {
    static ref ZERO_PADDED: Regex = Regex::new(r"^0[0-9]").unwrap();
    static ref UPPERCASE: Regex = Regex::new(r"[A-Z]").unwrap();
}

/// Splits ACT source into positioned tokens.
///
/// Every consumed character moves the cursor, including the ones skipped
/// inside comments, so a token's row and column always match the source.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    row: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            current: 0,
            row: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    fn at(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn is_eof(&self) -> bool {
        self.current >= self.chars.len()
    }

    /// Whether `word` starts at the cursor.
    fn encounter(&self, word: &str) -> bool {
        word.chars()
            .enumerate()
            .all(|(offset, c)| self.chars.get(self.current + offset) == Some(&c))
    }

    fn advance(&mut self) {
        if let Some(ch) = self.at() {
            self.current += 1;
            if ch == '\n' {
                self.row += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn advance_over(&mut self, word: &str) {
        for _ in word.chars() {
            self.advance();
        }
    }

    fn scan_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut value = String::new();
        while let Some(ch) = self.at() {
            if !accept(ch) {
                break;
            }
            value.push(ch);
            self.advance();
        }
        value
    }

    fn push_token(&mut self, kind: Kind, value: &str) {
        self.tokens.push(Token::new(
            self.row,
            self.column,
            self.current,
            kind,
            value.to_string(),
        ));
        self.advance_over(value);
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, TranspileError> {
        while !self.is_eof() {
            if self.skip_space()
                || self.skip_line_feed()
                || self.skip_single_line_comment()
                || self.skip_multi_line_comment()?
                || self.tokenize_number_literal()?
                || self.tokenize_operator()
                || self.tokenize_grouping()
                || self.tokenize_function_name()?
            {
                continue;
            }

            return Err(TranspileError::unexpected_token(self.row, self.column));
        }

        trace!("tokenized {} token(s)", self.tokens.len());
        Ok(std::mem::take(&mut self.tokens))
    }

    fn skip_space(&mut self) -> bool {
        if !self.encounter(keyword::SPACE) {
            return false;
        }
        self.advance_over(keyword::SPACE);
        true
    }

    fn skip_line_feed(&mut self) -> bool {
        if !self.encounter(keyword::LINE_FEED) {
            return false;
        }
        self.advance_over(keyword::LINE_FEED);
        true
    }

    // Runs through the terminating line feed, or to the end of input.
    fn skip_single_line_comment(&mut self) -> bool {
        if !self.encounter(keyword::SINGLE_LINE_COMMENT) {
            return false;
        }
        self.advance_over(keyword::SINGLE_LINE_COMMENT);
        while !self.is_eof() {
            if self.skip_line_feed() {
                break;
            }
            self.advance();
        }
        true
    }

    fn skip_multi_line_comment(&mut self) -> Result<bool, TranspileError> {
        if !self.encounter(keyword::MULTI_LINE_COMMENT_OPEN) {
            return Ok(false);
        }
        self.advance_over(keyword::MULTI_LINE_COMMENT_OPEN);
        loop {
            if self.is_eof() {
                return Err(TranspileError::unclosed_comment(self.row, self.column));
            }
            if self.encounter(keyword::MULTI_LINE_COMMENT_CLOSE) {
                self.advance_over(keyword::MULTI_LINE_COMMENT_CLOSE);
                return Ok(true);
            }
            self.advance();
        }
    }

    fn tokenize_number_literal(&mut self) -> Result<bool, TranspileError> {
        let (row, column, index) = (self.row, self.column, self.current);
        let number = self.scan_while(|c| c.is_ascii_digit() || keyword::DECIMAL_POINT.starts_with(c));
        if number.is_empty() {
            return Ok(false);
        }
        if number.contains(keyword::DECIMAL_POINT) {
            return Err(TranspileError::non_integer_literal(row, column));
        }
        if ZERO_PADDED.is_match(&number) {
            return Err(TranspileError::zero_padded_literal(row, column));
        }
        self.tokens.push(Token::new(row, column, index, Kind::Number, number));
        Ok(true)
    }

    // `+` and `-` come out the same whether they end up as signs or as
    // binary operators; the parser tells them apart.
    fn tokenize_operator(&mut self) -> bool {
        let operator = keyword::BINARY_OPERATORS
            .into_iter()
            .find(|operator| self.encounter(operator));
        match operator {
            Some(operator) => {
                self.push_token(Kind::Operator, operator);
                true
            }
            None => false,
        }
    }

    fn tokenize_grouping(&mut self) -> bool {
        if self.encounter(keyword::GROUP_OPEN) {
            self.push_token(Kind::OpeningGroup, keyword::GROUP_OPEN);
            true
        } else if self.encounter(keyword::GROUP_CLOSE) {
            self.push_token(Kind::ClosingGroup, keyword::GROUP_CLOSE);
            true
        } else {
            false
        }
    }

    fn tokenize_function_name(&mut self) -> Result<bool, TranspileError> {
        let (row, column, index) = (self.row, self.column, self.current);
        let name = self.scan_while(|c| c.is_ascii_alphanumeric() || c == '_');
        if name.is_empty() {
            return Ok(false);
        }
        if UPPERCASE.is_match(&name) {
            return Err(TranspileError::invalid_identifier(row, column));
        }
        self.tokens.push(Token::new(row, column, index, Kind::FunctionName, name));
        Ok(true)
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, TranspileError> {
    Lexer::new(source).tokenize()
}
