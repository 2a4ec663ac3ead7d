use smol_str::SmolStr;
use std::{
    fmt::{self, Display, Formatter},
    ops::Range,
};

/// The only variable an expression may refer to.
pub const VARIABLE: char = 'x';

/// The identifier given to a unary minus, so it can't be confused with
/// subtraction.
pub const NEGATION: &str = "~";

/// Split some text into its [`Token`]s, stopping at the first lexical error.
///
/// Whitespace is kept in the output as [`TokenKind::Whitespace`] tokens.
pub fn tokenize(src: &str) -> Result<Vec<Token>, ParseError> {
    Tokens::new(src).collect()
}

/// The smallest lexical unit of an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub identifier: SmolStr,
    pub kind: TokenKind,
    /// Where the token came from in the original text.
    pub span: Range<usize>,
}

impl Token {
    pub fn new<S>(identifier: S, kind: TokenKind, span: Range<usize>) -> Self
    where
        S: Into<SmolStr>,
    {
        Token {
            identifier: identifier.into(),
            kind,
            span,
        }
    }

    /// Can this token be the last part of an operand?
    fn ends_operand(&self) -> bool {
        match self.kind {
            TokenKind::Number
            | TokenKind::Variable
            | TokenKind::RightParen => true,
            _ => false,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.identifier.as_str())
    }
}

/// The kinds of token that can appear in an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    Comma,
    Number,
    Operator,
    Function,
    LeftParen,
    RightParen,
    Variable,
    Equals,
}

/// What was wrong with a numeric literal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NumberDefect {
    TooManyDecimalPoints,
    /// The literal runs straight into a letter or an opening parenthesis.
    UnexpectedCharacter(char),
}

impl Display for NumberDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumberDefect::TooManyDecimalPoints => write!(f, "too many dots"),
            NumberDefect::UnexpectedCharacter(c) => {
                write!(f, "contains the invalid character '{}'", c)
            },
        }
    }
}

/// Possible errors that may occur while tokenizing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid floating number \"{text}\" at {index}: {defect}")]
    InvalidNumber {
        text: SmolStr,
        index: usize,
        defect: NumberDefect,
    },
    #[error("Invalid function definition \"{name}\" at {index}")]
    InvalidFunctionSyntax { name: SmolStr, index: usize },
    #[error("Invalid operator '{character}' at {index}")]
    InvalidOperator { character: char, index: usize },
}

/// An iterator over the [`Token`]s in some text.
///
/// The tokenizer only owns a read position into the source. It remembers
/// whether the previous token could end an operand so a `-` can be told
/// apart as either negation or subtraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Tokens<'a> {
    src: &'a str,
    cursor: usize,
    expect_operator: bool,
    failed: bool,
}

impl<'a> Tokens<'a> {
    pub fn new(src: &'a str) -> Self {
        Tokens {
            src,
            cursor: 0,
            expect_operator: false,
            failed: false,
        }
    }

    fn rest(&self) -> &'a str { &self.src[self.cursor..] }

    fn peek(&self) -> Option<char> { self.rest().chars().next() }

    fn peek_second(&self) -> Option<char> { self.rest().chars().nth(1) }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    fn chomp(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor;
        self.advance();
        let end = self.cursor;

        Token::new(&self.src[start..end], kind, start..end)
    }

    fn take_while<P>(&mut self, mut predicate: P) -> Range<usize>
    where
        P: FnMut(char) -> bool,
    {
        let start = self.cursor;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }

            self.advance();
        }

        start..self.cursor
    }

    fn chomp_number(&mut self) -> Result<Token, ParseError> {
        let span = self.take_while(|c| c.is_ascii_digit() || c == '.');
        let text = &self.src[span.clone()];

        let invalid = |defect| ParseError::InvalidNumber {
            text: text.into(),
            index: span.start,
            defect,
        };

        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '(' => {
                return Err(invalid(NumberDefect::UnexpectedCharacter(c)));
            },
            _ => {},
        }

        if text.matches('.').count() > 1 {
            return Err(invalid(NumberDefect::TooManyDecimalPoints));
        }

        Ok(Token::new(text, TokenKind::Number, span))
    }

    fn chomp_function_name(&mut self) -> Result<Token, ParseError> {
        let span = self.take_while(|c| c.is_ascii_alphabetic());
        let name = &self.src[span.clone()];

        match self.peek() {
            None | Some('(') | Some(' ') | Some('\t') => {
                Ok(Token::new(name, TokenKind::Function, span))
            },
            Some(_) => Err(ParseError::InvalidFunctionSyntax {
                name: name.into(),
                index: span.start,
            }),
        }
    }

    fn is_at_variable(&self) -> bool {
        self.peek() == Some(VARIABLE)
            && !self
                .peek_second()
                .map(|c| c.is_ascii_alphabetic())
                .unwrap_or(false)
    }

    fn next_token(&mut self, first: char) -> Result<Token, ParseError> {
        let token = match first {
            ' ' | '\t' => self.chomp(TokenKind::Whitespace),
            ',' => self.chomp(TokenKind::Comma),
            '0'..='9' => self.chomp_number()?,
            _ if self.is_at_variable() => self.chomp(TokenKind::Variable),
            c if c.is_ascii_alphabetic() => self.chomp_function_name()?,
            '(' => self.chomp(TokenKind::LeftParen),
            ')' => self.chomp(TokenKind::RightParen),
            '=' => self.chomp(TokenKind::Equals),
            '-' if !self.expect_operator => {
                let Token { span, .. } = self.chomp(TokenKind::Operator);
                Token::new(NEGATION, TokenKind::Operator, span)
            },
            '+' | '-' | '*' | '/' => self.chomp(TokenKind::Operator),
            other => {
                return Err(ParseError::InvalidOperator {
                    character: other,
                    index: self.cursor,
                })
            },
        };

        if token.kind != TokenKind::Whitespace {
            self.expect_operator = token.ends_operand();
        }

        Ok(token)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let first = self.peek()?;
        let got = self.next_token(first);
        self.failed = got.is_err();

        Some(got)
    }
}
