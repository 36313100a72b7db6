//! A recursive-descent parser for first-order formulas.
//!
//! The grammar, from loosest to tightest binding:
//!
//! ```text
//! implication := disjunction [ "->" implication ]
//! disjunction := conjunction { "\/" conjunction }
//! conjunction := unary { "/\" unary }
//! unary       := "~" unary | ("+" | "!") unary unary | primary
//! primary     := "(" implication ")" | symbol [ "(" implication { "," implication } ")" ]
//! ```
//!
//! A symbol or application appearing where a formula is expected is read as a predicate, and
//! anywhere else (function arguments, quantifier variables) as a term.

mod error;
mod lexer;
pub(crate) mod tests;

pub use error::ParserError;
pub use lexer::{Lexer, Position, Token};

use crate::{
    ast::{Connective, ConstructionResult, Formula, Rc},
    Error, GentzenResult,
};

/// Parses a single formula from `text`.
pub fn parse(text: &str) -> GentzenResult<Rc<Formula>> {
    Parser::new(text)?.parse_formula()
}

/// A parser for the formula syntax.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    current_position: Position,
}

impl<'a> Parser<'a> {
    /// Constructs a new `Parser` over `input`.
    ///
    /// This operation can fail if there is a lexer error on the first token.
    pub fn new(input: &'a str) -> GentzenResult<Self> {
        let mut lexer = Lexer::new(input);
        let (current_token, current_position) = lexer.next_token()?;
        Ok(Parser { lexer, current_token, current_position })
    }

    /// Advances the parser one token, and returns the previous `current_token`.
    fn next_token(&mut self) -> GentzenResult<(Token, Position)> {
        use std::mem::replace;

        let (new_token, new_position) = self.lexer.next_token()?;
        let old_token = replace(&mut self.current_token, new_token);
        let old_position = replace(&mut self.current_position, new_position);
        Ok((old_token, old_position))
    }

    /// Consumes the current token if it equals `expected`. Returns an error otherwise.
    fn expect_token(&mut self, expected: Token) -> GentzenResult<()> {
        let (got, pos) = self.next_token()?;
        if got == expected {
            Ok(())
        } else {
            Err(Error::Parser(ParserError::UnexpectedToken(got), pos))
        }
    }

    /// Returns an error if there is any input left.
    fn expect_eof(&mut self) -> GentzenResult<()> {
        if self.current_token == Token::Eof {
            Ok(())
        } else {
            let (got, pos) = self.next_token()?;
            Err(Error::Parser(ParserError::UnexpectedToken(got), pos))
        }
    }

    /// Parses the whole input as a formula.
    pub fn parse_formula(&mut self) -> GentzenResult<Rc<Formula>> {
        let parsed = self.parse_implication()?;
        self.expect_eof()?;
        Ok(promote(parsed))
    }

    /// Parses the whole input as a term. Fails with a `ConstructionError` if the input is a
    /// well-formed formula that is not a term.
    pub fn parse_term(&mut self) -> GentzenResult<Rc<Formula>> {
        let start = self.current_position;
        let parsed = self.parse_implication()?;
        self.expect_eof()?;
        if parsed.is_term() {
            return Ok(parsed);
        }
        let err = crate::ast::ConstructionError::ExpectedTerm {
            name: "term".to_owned(),
            got: parsed,
        };
        Err(Error::Parser(err.into(), start))
    }

    fn parse_implication(&mut self) -> GentzenResult<Rc<Formula>> {
        let start = self.current_position;
        let left = self.parse_disjunction()?;
        if self.current_token != Token::Connective(Connective::Implies) {
            return Ok(left);
        }
        self.next_token()?;

        // Implication is right-associative
        let right = self.parse_implication()?;
        build(start, Formula::connective(Connective::Implies, promote(left), promote(right)))
    }

    fn parse_disjunction(&mut self) -> GentzenResult<Rc<Formula>> {
        self.parse_left_assoc(Connective::Or, Self::parse_conjunction)
    }

    fn parse_conjunction(&mut self) -> GentzenResult<Rc<Formula>> {
        self.parse_left_assoc(Connective::And, Self::parse_unary)
    }

    fn parse_left_assoc<F>(
        &mut self,
        connective: Connective,
        mut operand: F,
    ) -> GentzenResult<Rc<Formula>>
    where
        F: FnMut(&mut Self) -> GentzenResult<Rc<Formula>>,
    {
        let start = self.current_position;
        let mut result = operand(self)?;
        while self.current_token == Token::Connective(connective) {
            self.next_token()?;
            let right = operand(self)?;
            let built = Formula::connective(connective, promote(result), promote(right));
            result = build(start, built)?;
        }
        Ok(result)
    }

    fn parse_unary(&mut self) -> GentzenResult<Rc<Formula>> {
        let start = self.current_position;
        match self.current_token {
            Token::Not => {
                self.next_token()?;
                let argument = self.parse_unary()?;
                build(start, Formula::not(promote(argument)))
            }
            Token::Quantifier(quantifier) => {
                self.next_token()?;
                let var_position = self.current_position;
                let var = self.parse_bound_var()?;
                let body = self.parse_unary()?;
                build(var_position, Formula::quant(quantifier, &var, promote(body)))
            }
            _ => self.parse_primary(),
        }
    }

    /// Parses the variable operand of a quantifier. A symbol is always taken on its own, so that
    /// in `+ x (p(x))` the parenthesis opens the body instead of an argument list. Any other
    /// operand is parsed as usual, and later rejected if it is not an argless term.
    fn parse_bound_var(&mut self) -> GentzenResult<Rc<Formula>> {
        if let Token::Symbol(name) = &self.current_token {
            let var = Formula::var(name.clone());
            self.next_token()?;
            return Ok(var);
        }
        self.parse_unary()
    }

    fn parse_primary(&mut self) -> GentzenResult<Rc<Formula>> {
        match self.next_token()? {
            (Token::OpenParen, _) => {
                let inner = self.parse_implication()?;
                self.expect_token(Token::CloseParen)?;
                Ok(inner)
            }
            (Token::Symbol(name), pos) => {
                if self.current_token != Token::OpenParen {
                    return Ok(Formula::var(name));
                }
                self.next_token()?;
                if self.current_token == Token::CloseParen {
                    return Err(Error::Parser(ParserError::EmptyArgumentList(name), pos));
                }
                let mut args = vec![self.parse_implication()?];
                while self.current_token == Token::Comma {
                    self.next_token()?;
                    args.push(self.parse_implication()?);
                }
                self.expect_token(Token::CloseParen)?;
                build(pos, Formula::term(name, Some(args)))
            }
            (other, pos) => Err(Error::Parser(ParserError::UnexpectedToken(other), pos)),
        }
    }
}

/// Reads a term in formula position as a predicate application. Any other formula is returned
/// unchanged.
fn promote(parsed: Rc<Formula>) -> Rc<Formula> {
    match parsed.as_ref() {
        Formula::Term(name, args) => Rc::new(Formula::Atom(
            name.clone(),
            args.clone().unwrap_or_default(),
        )),
        _ => parsed,
    }
}

/// Attaches the position of the construct being built to a construction error.
fn build(
    position: Position,
    result: ConstructionResult<Rc<Formula>>,
) -> GentzenResult<Rc<Formula>> {
    result.map_err(|e| Error::Parser(e.into(), position))
}
