//! A lexer for the formula syntax.

use crate::{
    ast::{Connective, Quantifier},
    parser::ParserError,
    utils::is_symbol_character,
    Error, GentzenResult,
};
use std::{fmt, iter::Peekable, str::Chars};

/// A token in the formula syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The `(` token.
    OpenParen,

    /// The `)` token.
    CloseParen,

    /// The `,` token, separating arguments.
    Comma,

    /// An identifier: a non-empty sequence of ASCII letters, digits and underscores.
    Symbol(String),

    /// The `~` prefix operator.
    Not,

    /// A quantifier prefix, either `+` or `!`.
    Quantifier(Quantifier),

    /// An infix connective, either `->`, `\/` or `/\`.
    Connective(Connective),

    /// A signal token to indicate the end of the input.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Symbol(s) => write!(f, "{}", s),
            Token::Not => write!(f, "~"),
            Token::Quantifier(q) => write!(f, "{}", q),
            Token::Connective(c) => write!(f, "{}", c),
            Token::Eof => write!(f, "EOF"),
        }
    }
}

/// Represents a position (line and column numbers) in the source input.
pub type Position = (usize, usize);

/// A lexer for the formula syntax.
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    current_char: Option<char>,
    position: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut input = input.chars().peekable();
        let current_char = input.next();
        Lexer { input, current_char, position: (1, 1) }
    }

    /// Advances the lexer by one character, and returns the previous `current_char`.
    fn next_char(&mut self) -> Option<char> {
        let new = self.input.next();
        match self.current_char {
            Some('\n') => {
                self.position.0 += 1;
                self.position.1 = 1;
            }
            Some(_) => self.position.1 += 1,
            None => (),
        }
        std::mem::replace(&mut self.current_char, new)
    }

    /// Reads characters while the given predicate returns `true`, and stores them in a `String`.
    fn read_chars_while<P: Fn(char) -> bool>(&mut self, predicate: P) -> String {
        let mut result = String::new();
        while let Some(c) = self.current_char {
            if !predicate(c) {
                break;
            }
            result.push(c);
            self.next_char();
        }
        result
    }

    /// Consumes a two-character operator whose first character was already seen.
    fn read_operator(&mut self, second: char, token: Token) -> GentzenResult<Token> {
        self.next_char();
        match self.current_char {
            Some(c) if c == second => {
                self.next_char();
                Ok(token)
            }
            Some(other) => Err(Error::Parser(ParserError::UnexpectedChar(other), self.position)),
            None => Err(Error::Parser(ParserError::UnexpectedToken(Token::Eof), self.position)),
        }
    }

    /// Reads a token from the input source.
    pub fn next_token(&mut self) -> GentzenResult<(Token, Position)> {
        self.read_chars_while(char::is_whitespace);
        let start_position = self.position;
        let token = match self.current_char {
            Some(c @ ('(' | ')' | ',' | '~' | '+' | '!')) => {
                self.next_char();
                match c {
                    '(' => Token::OpenParen,
                    ')' => Token::CloseParen,
                    ',' => Token::Comma,
                    '~' => Token::Not,
                    '+' => Token::Quantifier(Quantifier::Forall),
                    _ => Token::Quantifier(Quantifier::Exists),
                }
            }
            Some('-') => self.read_operator('>', Token::Connective(Connective::Implies))?,
            Some('\\') => self.read_operator('/', Token::Connective(Connective::Or))?,
            Some('/') => self.read_operator('\\', Token::Connective(Connective::And))?,
            Some(c) if is_symbol_character(c) => {
                Token::Symbol(self.read_chars_while(is_symbol_character))
            }
            Some(other) => {
                return Err(Error::Parser(ParserError::UnexpectedChar(other), self.position))
            }
            None => Token::Eof,
        };
        Ok((token, start_position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str) -> GentzenResult<Vec<Token>> {
        let mut lex = Lexer::new(input);
        let mut result = Vec::new();
        loop {
            let (tk, _) = lex.next_token()?;
            if tk == Token::Eof {
                break;
            }
            result.push(tk);
        }
        Ok(result)
    }

    #[test]
    fn test_operators() {
        let input = r"( ) , ~ + ! -> \/ /\";
        let expected = vec![
            Token::OpenParen,
            Token::CloseParen,
            Token::Comma,
            Token::Not,
            Token::Quantifier(Quantifier::Forall),
            Token::Quantifier(Quantifier::Exists),
            Token::Connective(Connective::Implies),
            Token::Connective(Connective::Or),
            Token::Connective(Connective::And),
        ];
        assert_eq!(expected, lex_all(input).unwrap());
    }

    #[test]
    fn test_symbols() {
        let input = "p  foo_bar\n x1 _v3";
        let expected: Vec<_> = ["p", "foo_bar", "x1", "_v3"]
            .iter()
            .map(|s| Token::Symbol((*s).to_owned()))
            .collect();
        assert_eq!(expected, lex_all(input).unwrap());
    }

    #[test]
    fn test_positions() {
        let mut lex = Lexer::new("p ->\n  q");
        assert_eq!(lex.next_token().unwrap().1, (1, 1));
        assert_eq!(lex.next_token().unwrap().1, (1, 3));
        assert_eq!(lex.next_token().unwrap().1, (2, 3));
        assert_eq!(lex.next_token().unwrap(), (Token::Eof, (2, 4)));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            lex_all("p & q"),
            Err(Error::Parser(ParserError::UnexpectedChar('&'), (1, 3))),
        ));
        assert!(matches!(
            lex_all("p -- q"),
            Err(Error::Parser(ParserError::UnexpectedChar('-'), (1, 4))),
        ));
        assert!(matches!(
            lex_all(r"p \"),
            Err(Error::Parser(ParserError::UnexpectedToken(Token::Eof), _)),
        ));
    }
}
