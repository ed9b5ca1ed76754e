// Literal spellings of every symbol the language knows about.

pub const SPACE: &str = " ";
pub const LINE_FEED: &str = "\n";

pub const SINGLE_LINE_COMMENT: &str = "#";
pub const MULTI_LINE_COMMENT_OPEN: &str = "<#";
pub const MULTI_LINE_COMMENT_CLOSE: &str = "#>";

pub const PLUS_OPERATOR: &str = "+";
pub const MINUS_OPERATOR: &str = "-";
pub const ADDITION_OPERATOR: &str = "+";
pub const SUBTRACTION_OPERATOR: &str = "-";
pub const MULTIPLICATION_OPERATOR: &str = "*";
pub const DIVISION_OPERATOR: &str = "/";
pub const REMAINDER_OPERATOR: &str = "%";

pub const GROUP_OPEN: &str = "(";
pub const GROUP_CLOSE: &str = ")";

pub const DECIMAL_POINT: &str = ".";

// Reserved for variables and assignment. Nothing in the grammar reads these yet.
pub const VARIABLE: &str = "$";
pub const ASSIGNMENT_OPERATOR: &str = "=";

/// Built-in function names recognized as statement heads.
pub const ECHO_FUNCTION: &str = "echo";

pub const BINARY_OPERATORS: [&str; 5] = [
    ADDITION_OPERATOR,
    SUBTRACTION_OPERATOR,
    MULTIPLICATION_OPERATOR,
    DIVISION_OPERATOR,
    REMAINDER_OPERATOR,
];

pub const UNARY_OPERATORS: [&str; 2] = [PLUS_OPERATOR, MINUS_OPERATOR];

pub fn is_binary_operator(value: &str) -> bool {
    BINARY_OPERATORS.contains(&value)
}

pub fn is_unary_operator(value: &str) -> bool {
    UNARY_OPERATORS.contains(&value)
}
