//! Conversion from the `graphql_parser` v0.4 AST.

mod compat_error;
mod from_query;
mod from_schema;
mod helpers;
mod parse;

pub use compat_error::CompatError;
pub use from_query::from_graphql_parser_query_ast;
pub use from_query::from_graphql_parser_query_ast_with_source;
pub use from_schema::from_graphql_parser_schema_ast;
pub use from_schema::from_graphql_parser_schema_ast_with_source;
pub use parse::parse_executable_document;
pub use parse::parse_schema_document;

#[cfg(test)]
mod tests;
