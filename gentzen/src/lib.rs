#![deny(clippy::disallowed_methods)]
#![deny(clippy::self_named_module_files)]
#![warn(clippy::branches_sharing_code)]
#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::equatable_if_let)]
#![warn(clippy::explicit_into_iter_loop)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::from_iter_instead_of_collect)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::inconsistent_struct_constructor)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::items_after_statements)]
#![warn(clippy::manual_assert)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::str_to_string)]
#![warn(clippy::string_to_string)]
#![warn(clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::unnecessary_wraps)]
#![warn(clippy::unnested_or_patterns)]
#![warn(clippy::unused_self)]

#[macro_use]
pub mod ast;
pub mod parser;
pub mod prover;
mod utils;

use ast::FreshNames;
use parser::{ParserError, Position};
use prover::{Config, Prover, Verdict};
use thiserror::Error;

pub type GentzenResult<T> = Result<T, Error>;

fn wrap_parser_error_message(e: &ParserError, pos: &Position) -> String {
    format!("parser error: {} (on line {}, column {})", e, pos.0, pos.1)
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", wrap_parser_error_message(.0, .1))]
    Parser(ParserError, Position),
}

/// Parses `text` as a formula, and decides whether it is valid under the default search limits.
/// Returns `false` if the search gives up before reaching a verdict.
pub fn solve(text: &str) -> GentzenResult<bool> {
    Ok(solve_with(text, &Config::default())?.is_valid())
}

/// Parses `text` as a formula, and decides whether it is valid.
pub fn solve_with(text: &str, config: &Config) -> GentzenResult<Verdict> {
    let formula = parser::parse(text)?;
    log::debug!("solving '{}'", formula);

    let names = FreshNames::new();
    let mut prover = Prover::new(&names, config.clone());
    Ok(prover.prove(&formula))
}
