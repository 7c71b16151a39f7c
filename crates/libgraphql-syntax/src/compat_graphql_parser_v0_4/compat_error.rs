use crate::SyntaxError;
use thiserror::Error;

/// Errors from parsing GraphQL source text with `graphql_parser` and
/// converting the result.
#[derive(Debug, Error)]
pub enum CompatError {
    #[error("Failed to parse schema document: {0}")]
    SchemaParse(#[from] graphql_parser::schema::ParseError),

    #[error("Failed to parse executable document: {0}")]
    QueryParse(#[from] graphql_parser::query::ParseError),

    #[error("Failed to convert parsed document: {0}")]
    Syntax(#[from] SyntaxError),
}
