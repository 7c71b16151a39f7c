use crate::ast;
use crate::compat_graphql_parser_v0_4::CompatError;
use crate::compat_graphql_parser_v0_4::from_graphql_parser_query_ast_with_source;
use crate::compat_graphql_parser_v0_4::from_graphql_parser_schema_ast_with_source;

/// Parse a type system document (SDL) and convert it to an
/// [`ast::DocumentNode`].
///
/// ```rust
/// use libgraphql_syntax::compat_graphql_parser_v0_4::parse_schema_document;
///
/// let doc = parse_schema_document("type Query { me: String }").unwrap();
/// assert_eq!(doc.definitions().len(), 1);
/// ```
pub fn parse_schema_document(
    source: &str,
) -> Result<ast::DocumentNode, CompatError> {
    let gp_doc = graphql_parser::parse_schema::<String>(source)?;
    let doc = from_graphql_parser_schema_ast_with_source(&gp_doc, source)?;
    log::debug!(
        "Parsed schema document with {} definitions.",
        doc.definitions().len(),
    );
    Ok(doc)
}

/// Parse an executable document (operations and fragments) and convert it
/// to an [`ast::DocumentNode`].
pub fn parse_executable_document(
    source: &str,
) -> Result<ast::DocumentNode, CompatError> {
    let gp_doc = graphql_parser::parse_query::<String>(source)?;
    let doc = from_graphql_parser_query_ast_with_source(&gp_doc, source)?;
    log::debug!(
        "Parsed executable document with {} definitions.",
        doc.definitions().len(),
    );
    Ok(doc)
}
