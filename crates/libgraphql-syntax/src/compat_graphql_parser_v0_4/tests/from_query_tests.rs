use crate::ast;
use crate::compat_graphql_parser_v0_4::parse_executable_document;
use crate::SyntaxKind;

#[test]
fn shorthand_query() {
    let doc = parse_executable_document("{ me { id } }").unwrap();

    let [ast::DefinitionNode::OperationDefinition(op)] = doc.definitions() else {
        panic!("Expected a single operation");
    };
    assert_eq!(op.operation(), ast::OperationType::Query);
    assert!(op.name().is_none());
    let [ast::SelectionNode::Field(me)] = op.selection_set().selections() else {
        panic!("Expected a single field selection");
    };
    assert_eq!(me.name().value(), "me");
    let [ast::SelectionNode::Field(id)] = me.selection_set().unwrap().selections() else {
        panic!("Expected a single nested field selection");
    };
    assert_eq!(id.name().value(), "id");
    assert!(id.selection_set().is_none());
}

#[test]
fn named_mutation_with_variables() {
    let doc = parse_executable_document(
        "mutation Rename($id: ID!, $name: String = \"anon\") {\n  \
          rename(id: $id, name: $name) @log { ok }\n}",
    ).unwrap();

    let [ast::DefinitionNode::OperationDefinition(op)] = doc.definitions() else {
        panic!("Expected a single operation");
    };
    assert_eq!(op.operation(), ast::OperationType::Mutation);
    assert_eq!(op.name().unwrap().value(), "Rename");

    let variables: Vec<&str> = op
        .variable_definitions()
        .iter()
        .map(|var_def| var_def.variable().name().value())
        .collect();
    assert_eq!(variables, vec!["id", "name"]);
    assert!(op.variable_definitions()[0].variable_type().is_non_null());
    assert!(matches!(
        op.variable_definitions()[1].default_value(),
        Some(ast::ValueNode::String(value)) if value.value() == "anon",
    ));

    let [ast::SelectionNode::Field(rename)] = op.selection_set().selections() else {
        panic!("Expected a single field selection");
    };
    let argument_names: Vec<&str> =
        rename.arguments().iter().map(|arg| arg.name().value()).collect();
    assert_eq!(argument_names, vec!["id", "name"]);
    assert_eq!(rename.arguments()[0].value().kind(), SyntaxKind::Variable);
    assert_eq!(rename.directives()[0].name().value(), "log");
}

#[test]
fn fragments_and_spreads() {
    let doc = parse_executable_document(
        "query { node { ...NodeFields ... on User { name } } }\n\
         fragment NodeFields on Node { id }",
    ).unwrap();

    assert_eq!(doc.definitions().len(), 2);
    let ast::DefinitionNode::FragmentDefinition(fragment) = &doc.definitions()[1] else {
        panic!("Expected a fragment definition");
    };
    assert_eq!(fragment.name().value(), "NodeFields");
    assert_eq!(fragment.type_condition().name().value(), "Node");

    let ast::DefinitionNode::OperationDefinition(op) = &doc.definitions()[0] else {
        panic!("Expected an operation definition");
    };
    let [ast::SelectionNode::Field(node)] = op.selection_set().selections() else {
        panic!("Expected a single field selection");
    };
    let selections = node.selection_set().unwrap().selections();
    assert!(matches!(
        &selections[0],
        ast::SelectionNode::FragmentSpread(spread) if spread.name().value() == "NodeFields",
    ));
    let ast::SelectionNode::InlineFragment(inline) = &selections[1] else {
        panic!("Expected an inline fragment");
    };
    assert_eq!(inline.type_condition().unwrap().name().value(), "User");
}

/// Names and locations are recovered from the source text, including
/// byte offsets.
#[test]
fn locations_are_zero_based_with_byte_offsets() {
    let doc = parse_executable_document("query Q {\n  me\n}").unwrap();

    let ast::DefinitionNode::OperationDefinition(op) = &doc.definitions()[0] else {
        panic!("Expected an operation definition");
    };
    let [ast::SelectionNode::Field(me)] = op.selection_set().selections() else {
        panic!("Expected a single field selection");
    };
    let start = me.location().unwrap().start_inclusive();
    assert_eq!(start.line(), 1);
    assert_eq!(start.column(), 2);
    assert_eq!(start.byte_offset(), 12);
}
