use crate::ast::DefinitionNode;
use crate::ast::DirectiveDefinitionNode;
use crate::ast::DocumentNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::compat_graphql_parser_v0_4::parse_schema_document;

pub(crate) fn name(value: &str) -> NameNode {
    NameNode::new(value).unwrap()
}

pub(crate) fn named_type(value: &str) -> NamedTypeNode {
    NamedTypeNode::new(name(value))
}

pub(crate) fn parse_schema(source: &str) -> DocumentNode {
    parse_schema_document(source).unwrap()
}

/// Parses `source` and returns its single definition, which must be an
/// object type definition.
pub(crate) fn parse_object_type_definition(
    source: &str,
) -> ObjectTypeDefinitionNode {
    match parse_schema(source).definitions() {
        [DefinitionNode::ObjectTypeDefinition(def)] => def.clone(),
        other => panic!("Expected a single object type, got: {other:#?}"),
    }
}

/// Parses `source` and returns its single definition, which must be a
/// directive definition.
pub(crate) fn parse_directive_definition(
    source: &str,
) -> DirectiveDefinitionNode {
    match parse_schema(source).definitions() {
        [DefinitionNode::DirectiveDefinition(def)] => def.clone(),
        other => panic!("Expected a single directive definition, got: {other:#?}"),
    }
}
