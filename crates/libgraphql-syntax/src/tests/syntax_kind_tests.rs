use crate::ast::EnumTypeExtensionNode;
use crate::ast::IntValueNode;
use crate::ast::ListTypeNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::SchemaCoordinateNode;
use crate::tests::utils::name;
use crate::tests::utils::named_type;
use crate::SyntaxKind;

#[test]
fn kind_matches_node_type() {
    assert_eq!(name("abc").kind(), SyntaxKind::Name);
    assert_eq!(named_type("abc").kind(), SyntaxKind::NamedType);
    assert_eq!(ListTypeNode::new(named_type("abc")).kind(), SyntaxKind::ListType);
    assert_eq!(IntValueNode::new(3).kind(), SyntaxKind::IntValue);
    assert_eq!(
        ObjectTypeDefinitionNode::new(name("Foo")).kind(),
        SyntaxKind::ObjectTypeDefinition,
    );
    assert_eq!(
        EnumTypeExtensionNode::new(name("Color")).kind(),
        SyntaxKind::EnumTypeExtension,
    );
    assert_eq!(
        SchemaCoordinateNode::for_type(name("Foo")).kind(),
        SyntaxKind::SchemaCoordinate,
    );
}

#[test]
fn kind_predicates() {
    assert!(SyntaxKind::UnionTypeDefinition.is_type_definition());
    assert!(!SyntaxKind::UnionTypeExtension.is_type_definition());
    assert!(SyntaxKind::UnionTypeExtension.is_type_extension());
    assert!(!SyntaxKind::SchemaExtension.is_type_extension());
    assert!(!SyntaxKind::DirectiveDefinition.is_type_definition());
    assert!(SyntaxKind::Variable.is_value());
    assert!(!SyntaxKind::ObjectField.is_value());
    assert!(SyntaxKind::NonNullType.is_type_reference());
    assert!(!SyntaxKind::Name.is_type_reference());
}

#[test]
fn kind_display() {
    assert_eq!(SyntaxKind::InputValueDefinition.to_string(), "InputValueDefinition");
    assert_eq!(SyntaxKind::SchemaCoordinate.as_str(), "SchemaCoordinate");
}

#[test]
fn kind_survives_bincode() {
    let bytes = bincode::serde::encode_to_vec(
        SyntaxKind::FragmentSpread,
        bincode::config::standard(),
    ).unwrap();
    let (decoded, _): (SyntaxKind, usize) =
        bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
            .unwrap();

    assert_eq!(decoded, SyntaxKind::FragmentSpread);
}
