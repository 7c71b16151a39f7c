use crate::ast;
use crate::compat_graphql_parser_v0_4::from_graphql_parser_schema_ast;
use crate::SourcePosition;

use graphql_parser::query::Value as GpValue;
use graphql_parser::schema::Definition as GpDef;
use graphql_parser::schema::DirectiveDefinition as GpDirectiveDef;
use graphql_parser::schema::DirectiveLocation as GpDirLoc;
use graphql_parser::schema::Field as GpField;
use graphql_parser::schema::InputValue as GpInputValue;
use graphql_parser::schema::ObjectType as GpObject;
use graphql_parser::schema::SchemaDefinition as GpSchemaDef;
use graphql_parser::schema::Type as GpType;
use graphql_parser::schema::TypeDefinition as GpTd;

/// Shorthand for constructing a 1-based `graphql_parser::Pos`.
fn pos(line: usize, column: usize) -> graphql_parser::Pos {
    graphql_parser::Pos { line, column }
}

fn gp_named(name: &str) -> GpType<'static, String> {
    GpType::NamedType(name.to_string())
}

/// An object type keeps its name, description, interfaces and fields, and
/// positions become 0-based zero-width locations.
#[test]
fn object_type() {
    let gp_doc = graphql_parser::schema::Document {
        definitions: vec![GpDef::TypeDefinition(GpTd::Object(GpObject {
            position: pos(2, 1),
            description: Some("A user".to_string()),
            name: "User".to_string(),
            implements_interfaces: vec!["Node".to_string()],
            directives: vec![],
            fields: vec![GpField {
                position: pos(3, 3),
                description: None,
                name: "name".to_string(),
                arguments: vec![],
                field_type: GpType::NonNullType(Box::new(gp_named("String"))),
                directives: vec![],
            }],
        }))],
    };

    let doc = from_graphql_parser_schema_ast(&gp_doc).unwrap();

    let [ast::DefinitionNode::ObjectTypeDefinition(user)] = doc.definitions() else {
        panic!("Expected a single object type definition");
    };
    assert_eq!(user.name().value(), "User");
    assert_eq!(user.description().unwrap().value(), "A user");
    assert_eq!(user.interfaces()[0].name().value(), "Node");
    let location = user.location().unwrap();
    assert_eq!(location.start_inclusive(), &SourcePosition::new(1, 0, 0));
    assert!(location.is_empty());

    let field = &user.fields()[0];
    assert_eq!(field.name().value(), "name");
    assert!(field.field_type().is_non_null());
    assert_eq!(field.field_type().innermost_named_type().name().value(), "String");
    assert_eq!(
        field.location().unwrap().start_inclusive(),
        &SourcePosition::new(2, 2, 0),
    );
    assert_eq!(
        field.name().location().unwrap().start_inclusive(),
        &SourcePosition::new(2, 2, 0),
    );
}

#[test]
fn schema_definition_operation_types() {
    let gp_doc = graphql_parser::schema::Document {
        definitions: vec![GpDef::SchemaDefinition(GpSchemaDef {
            position: pos(1, 1),
            directives: vec![],
            query: Some("RootQuery".to_string()),
            mutation: None,
            subscription: Some("RootSubscription".to_string()),
        })],
    };

    let doc = from_graphql_parser_schema_ast(&gp_doc).unwrap();

    let [ast::DefinitionNode::SchemaDefinition(schema)] = doc.definitions() else {
        panic!("Expected a single schema definition");
    };
    let operation_types: Vec<(ast::OperationType, &str)> = schema
        .operation_types()
        .iter()
        .map(|op| (op.operation(), op.named_type().name().value()))
        .collect();
    assert_eq!(operation_types, vec![
        (ast::OperationType::Query, "RootQuery"),
        (ast::OperationType::Subscription, "RootSubscription"),
    ]);
}

#[test]
fn directive_definition() {
    let gp_doc = graphql_parser::schema::Document {
        definitions: vec![GpDef::DirectiveDefinition(GpDirectiveDef {
            position: pos(1, 1),
            description: None,
            name: "cached".to_string(),
            arguments: vec![GpInputValue {
                position: pos(1, 16),
                description: None,
                name: "ttl".to_string(),
                value_type: gp_named("Int"),
                default_value: Some(GpValue::Int(60.into())),
                directives: vec![],
            }],
            repeatable: true,
            locations: vec![GpDirLoc::FieldDefinition, GpDirLoc::Object],
        })],
    };

    let doc = from_graphql_parser_schema_ast(&gp_doc).unwrap();

    let [ast::DefinitionNode::DirectiveDefinition(cached)] = doc.definitions() else {
        panic!("Expected a single directive definition");
    };
    assert_eq!(cached.name().value(), "cached");
    assert!(cached.repeatable());
    let locations: Vec<&str> =
        cached.locations().iter().map(ast::NameNode::value).collect();
    assert_eq!(locations, vec!["FIELD_DEFINITION", "OBJECT"]);
    let ttl = &cached.arguments()[0];
    assert_eq!(ttl.name().value(), "ttl");
    assert!(matches!(
        ttl.default_value(),
        Some(ast::ValueNode::Int(int)) if int.value() == 60,
    ));
}
