//! Reordering infix tokens into postfix (reverse polish) order with the
//! shunting-yard algorithm.

use crate::algebra::{
    expr::{Node, Operation},
    parse::{Token, TokenKind},
};
use smol_str::SmolStr;

/// Convert a sequence of infix tokens into postfix [`Node`]s.
///
/// Operators of equal precedence are left-associative. A function name waits
/// on the operator stack until the parenthesis closing its argument list is
/// reached.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Node>, ReorderError> {
    let mut output = Vec::new();
    let mut stack: Vec<&Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Whitespace => continue,
            TokenKind::Number | TokenKind::Variable => {
                let node = Node::scalar(token)
                    .ok_or_else(|| ReorderError::unknown(token))?;
                output.push(node);
            },
            TokenKind::Operator => {
                let incoming = operation(token)?;

                while let Some(&top) = stack.last() {
                    if top.kind != TokenKind::Operator {
                        break;
                    }

                    let top = operation(top)?;
                    if top.precedence < incoming.precedence {
                        break;
                    }

                    stack.pop();
                    output.push(Node::Operation(top));
                }

                stack.push(token);
            },
            TokenKind::Function | TokenKind::LeftParen => stack.push(token),
            TokenKind::Comma => {
                pop_until_left_paren(&mut stack, &mut output)?;
            },
            TokenKind::RightParen => {
                pop_until_left_paren(&mut stack, &mut output)?;
                // discard the "("
                stack.pop();

                // the arguments are done, so the function gets applied
                if let Some(&top) = stack.last() {
                    if top.kind == TokenKind::Function {
                        stack.pop();
                        output.push(Node::Operation(operation(top)?));
                    }
                }
            },
            TokenKind::Equals => return Err(ReorderError::unknown(token)),
        }
    }

    while let Some(top) = stack.pop() {
        match top.kind {
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(ReorderError::MismatchedParentheses);
            },
            _ => output.push(Node::Operation(operation(top)?)),
        }
    }

    Ok(output)
}

fn operation(token: &Token) -> Result<Operation, ReorderError> {
    Operation::for_token(token).ok_or_else(|| ReorderError::unknown(token))
}

/// Move operators to the output until a `(` is at the top of the stack,
/// leaving the `(` where it is.
fn pop_until_left_paren(
    stack: &mut Vec<&Token>,
    output: &mut Vec<Node>,
) -> Result<(), ReorderError> {
    loop {
        match stack.last() {
            Some(top) if top.kind == TokenKind::LeftParen => return Ok(()),
            Some(&top) => {
                stack.pop();
                output.push(Node::Operation(operation(top)?));
            },
            None => return Err(ReorderError::MismatchedParentheses),
        }
    }
}

/// Possible errors that may occur while reordering.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReorderError {
    #[error("Invalid mathematical function or operator {symbol}")]
    UnknownSymbol { symbol: SmolStr },
    #[error("Mismatched parantheses")]
    MismatchedParentheses,
}

impl ReorderError {
    fn unknown(token: &Token) -> Self {
        ReorderError::UnknownSymbol {
            symbol: token.identifier.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::parse::tokenize;

    macro_rules! postfix_test {
        ($name:ident, $src:expr, $should_be:expr) => {
            #[test]
            fn $name() {
                let tokens = tokenize($src).unwrap();

                let got: Vec<String> = to_postfix(&tokens)
                    .unwrap()
                    .iter()
                    .map(ToString::to_string)
                    .collect();

                assert_eq!(got.join(" "), $should_be);
            }
        };
    }

    postfix_test!(single_number, "42", "42");
    postfix_test!(simple_addition, "4 + 9", "4 9 +");
    postfix_test!(multiplication_binds_tighter, "1 + 2*3", "1 2 3 * +");
    postfix_test!(parentheses_group, "(1 + 2)*3", "1 2 + 3 *");
    postfix_test!(subtraction_is_left_associative, "8 - 4 - 2", "8 4 - 2 -");
    postfix_test!(division_is_left_associative, "8 / 4 / 2", "8 4 / 2 /");
    postfix_test!(mixed_same_precedence, "8 / 4 * 2", "8 4 / 2 *");
    postfix_test!(negation, "-x + 1", "x ~ 1 +");
    postfix_test!(negation_binds_tightest, "2 * -3", "2 3 ~ *");
    postfix_test!(unary_function, "sin(1)", "1 sin");
    postfix_test!(binary_function, "max(1, 2)", "1 2 max");
    postfix_test!(
        nested_functions,
        "min(15, pow(2, 3))",
        "15 2 3 pow min"
    );
    postfix_test!(
        expressions_as_arguments,
        "max(1 + 2, 3*4)",
        "1 2 + 3 4 * max"
    );
    postfix_test!(
        too_many_arguments_are_kept,
        "max(1,2,3)",
        "1 2 3 max"
    );

    fn reorder(src: &str) -> Result<Vec<Node>, ReorderError> {
        to_postfix(&tokenize(src).unwrap())
    }

    #[test]
    fn unclosed_parenthesis() {
        assert_eq!(
            reorder("(5").unwrap_err(),
            ReorderError::MismatchedParentheses
        );
    }

    #[test]
    fn unopened_parenthesis() {
        assert_eq!(
            reorder("5)").unwrap_err(),
            ReorderError::MismatchedParentheses
        );
        assert_eq!(
            reorder("1, 2").unwrap_err(),
            ReorderError::MismatchedParentheses
        );
    }

    #[test]
    fn unknown_function() {
        assert_eq!(
            reorder("lag(10)").unwrap_err(),
            ReorderError::UnknownSymbol {
                symbol: "lag".into()
            }
        );
    }

    #[test]
    fn equals_must_be_rewritten_first() {
        assert_eq!(
            reorder("x = 1").unwrap_err(),
            ReorderError::UnknownSymbol { symbol: "=".into() }
        );
    }
}
