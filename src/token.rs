use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Token {
    pub row: usize,
    pub column: usize,
    pub index: usize,
    pub kind: Kind,
    pub value: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    // Literals
    Number,       // 0, 42

    // Operators
    Operator,     // +, -, *, /, %

    // Grouping tags
    OpeningGroup, // (
    ClosingGroup, // )

    // Identifiers
    FunctionName, // echo, etc
}

impl Token {
    pub fn new(row: usize, column: usize, index: usize, kind: Kind, value: String) -> Self {
        Self {
            row,
            column,
            index,
            kind,
            value,
        }
    }

    /// Column just past the last character of this token.
    pub fn end_column(&self) -> usize {
        self.column + self.value.chars().count()
    }
}
