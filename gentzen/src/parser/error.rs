//! The types for parser errors.

use crate::{ast::ConstructionError, parser::Token};
use thiserror::Error;

/// The error type for the parser.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The lexer encountered an unexpected character.
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),

    /// The parser encountered an unexpected token.
    #[error("unexpected token: '{0}'")]
    UnexpectedToken(Token),

    /// A function or predicate application was written with an empty argument list, e.g. `f()`.
    #[error("expected at least one argument to '{0}'")]
    EmptyArgumentList(String),

    /// The parsed operands could not be assembled into a well-formed formula.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}
