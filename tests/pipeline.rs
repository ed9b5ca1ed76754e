//! End-to-end tests: ACT source text in, batch script or diagnostic out.

use act_transpiler::{transpile, TranspileError};

const PROLOGUE: &str = "@ECHO OFF\nSETLOCAL\n";
const EPILOGUE: &str = "EXIT /B 0\n";
const ECHO_EXIT: &str = "SET act.@argument1=%act.@exit%\nECHO %act.@argument1%\n";

/// Helper: transpile and unwrap the generated script.
fn script(source: &str) -> String {
    transpile(source).into_result().expect("transpile failed")
}

/// Helper: transpile and unwrap the diagnostic.
fn diagnostic(source: &str) -> TranspileError {
    let result = transpile(source);
    assert!(!result.success, "expected failure for {:?}", source);
    result.into_result().expect_err("expected a diagnostic")
}

fn wrap(body: &str) -> String {
    format!("{}{}{}", PROLOGUE, body, EPILOGUE)
}

#[test]
fn simple_sum() {
    assert_eq!(
        script("1+2"),
        "@ECHO OFF\nSETLOCAL\nSET /A act.@exit=1+2\nEXIT /B 0\n"
    );
}

#[test]
fn nested_groups_and_signs() {
    assert_eq!(
        script("+1+(-2-+3*(-4/+5))%-6"),
        wrap("SET /A act.@exit=+1+(-2-+3*(-4/+5))%-6\n")
    );
}

#[test]
fn spaces_are_dropped_from_expressions() {
    assert_eq!(script("  1 +  2 * 3 "), wrap("SET /A act.@exit=1+2*3\n"));
}

#[test]
fn whitespace_and_comments_only() {
    for source in ["", "   ", "\n\n", "# just a note", "<# a\nblock #>\n# and more\n"] {
        assert_eq!(script(source), wrap(""), "source {:?}", source);
    }
}

#[test]
fn literals_round_trip() {
    for literal in ["0", "7", "42", "100", "2147483647"] {
        assert_eq!(
            script(literal),
            wrap(&format!("SET /A act.@exit={}\n", literal))
        );
    }
}

#[test]
fn program_with_comments_and_echo() {
    let source = "\
# totals
1+2
<# the next line
   prints a value #>
echo (3*4) # trailing
echo
";
    assert_eq!(
        script(source),
        wrap(&format!(
            "SET /A act.@exit=1+2\nSET /A act.@exit=(3*4)\n{}ECHO;\n",
            ECHO_EXIT
        ))
    );
}

#[test]
fn echo_single_literal() {
    assert_eq!(
        script("echo 0"),
        wrap(&format!("SET /A act.@exit=0\n{}", ECHO_EXIT))
    );
    assert_eq!(
        script("echo -5"),
        wrap(&format!("SET /A act.@exit=-5\n{}", ECHO_EXIT))
    );
}

#[test]
fn echo_argument_on_next_row_is_a_new_statement() {
    assert_eq!(
        script("echo\n5"),
        wrap("ECHO;\nSET /A act.@exit=5\n")
    );
}

#[test]
fn decimal_literal() {
    let err = diagnostic("1 + 2.5");
    assert_eq!((err.row, err.column), (1, 5));
    assert!(err.message.contains("32-bit integer"));
}

#[test]
fn zero_padded_literal() {
    let err = diagnostic("\n  09");
    assert_eq!(err, TranspileError::zero_padded_literal(2, 3));
}

#[test]
fn uppercase_identifier() {
    let err = diagnostic("Echo 1");
    assert_eq!(err, TranspileError::invalid_identifier(1, 1));
}

#[test]
fn operator_without_right_operand() {
    let err = diagnostic("1 +\n2");
    assert_eq!(err, TranspileError::new(1, 3, "+ has no right-hand operand"));
}

#[test]
fn unbalanced_group() {
    let err = diagnostic("(1+(2)");
    assert_eq!(err, TranspileError::new(1, 7, "group not closed"));
}

#[test]
fn two_statements_on_one_row() {
    let err = diagnostic("1 2");
    assert_eq!(err, TranspileError::unexpected_token(1, 3));
}

#[test]
fn echo_two_arguments() {
    let err = diagnostic("echo 0 0");
    assert_eq!(err, TranspileError::new(1, 8, "invalid argument count"));
}

#[test]
fn echo_ungrouped_expression() {
    let err = diagnostic("echo 1+2");
    assert_eq!(err, TranspileError::new(1, 6, "invalid argument count"));
}

#[test]
fn unknown_function() {
    let err = diagnostic("exit 1");
    assert_eq!(err, TranspileError::unexpected_token(1, 1));
}

#[test]
fn unclosed_block_comment_reports_final_row() {
    let source = "1\n<# first\nsecond\nthird";
    let err = diagnostic(source);
    assert_eq!(err, TranspileError::unclosed_comment(4, 6));
    assert_eq!(err.row, source.matches('\n').count() + 1);
}

#[test]
fn first_error_wins() {
    let err = diagnostic("1 +\n2.5");
    assert!(err.message.contains("32-bit integer"));
}

#[test]
fn diagnostics_render_for_display() {
    let err = diagnostic("echo 1 2");
    assert_eq!(err.to_string(), "[Error] 1, 8: invalid argument count");
}
