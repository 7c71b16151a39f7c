use crate::ast;
use crate::compat_graphql_parser_v0_4::parse_executable_document;
use crate::compat_graphql_parser_v0_4::parse_schema_document;
use crate::compat_graphql_parser_v0_4::CompatError;

#[test]
fn parse_schema_document_converts_every_definition() {
    let doc = parse_schema_document(
        "scalar Date\n\
         union SearchResult = User | Post\n\
         interface Node { id: ID! }\n\
         extend enum Color { BLUE }\n\
         extend input Point { z: Int }",
    ).unwrap();

    let kinds: Vec<crate::SyntaxKind> =
        doc.definitions().iter().map(ast::DefinitionNode::kind).collect();
    assert_eq!(kinds, vec![
        crate::SyntaxKind::ScalarTypeDefinition,
        crate::SyntaxKind::UnionTypeDefinition,
        crate::SyntaxKind::InterfaceTypeDefinition,
        crate::SyntaxKind::EnumTypeExtension,
        crate::SyntaxKind::InputObjectTypeExtension,
    ]);
    let ast::DefinitionNode::UnionTypeDefinition(search_result) = &doc.definitions()[1]
    else {
        panic!("Expected a union type definition");
    };
    let members: Vec<&str> = search_result
        .types()
        .iter()
        .map(|member| member.name().value())
        .collect();
    assert_eq!(members, vec!["User", "Post"]);
}

#[test]
fn schema_locations_carry_byte_offsets() {
    let doc = parse_schema_document("type Foo {\n  bar: Int\n}").unwrap();

    let ast::DefinitionNode::ObjectTypeDefinition(foo) = &doc.definitions()[0] else {
        panic!("Expected an object type definition");
    };
    let bar = foo.fields()[0].location().unwrap().start_inclusive();
    assert_eq!((bar.line(), bar.column(), bar.byte_offset()), (1, 2, 13));
}

#[test]
fn invalid_schema_source_is_a_parse_error() {
    let err = parse_schema_document("type Foo {").unwrap_err();

    assert!(matches!(err, CompatError::SchemaParse(_)));
}

#[test]
fn invalid_query_source_is_a_parse_error() {
    let err = parse_executable_document("query {").unwrap_err();

    assert!(matches!(err, CompatError::QueryParse(_)));
}
