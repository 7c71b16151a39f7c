use crate::ast::EnumValueNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::ListValueNode;
use crate::ast::NonNullTypeNode;
use crate::tests::utils::name;
use crate::tests::utils::named_type;
use crate::SourceLocation;
use crate::SourcePosition;

fn location_at(line: usize) -> Option<SourceLocation> {
    Some(SourceLocation::at(SourcePosition::new(line, 0, line * 10)))
}

#[test]
fn equality_ignores_location() {
    let here = name("abc").with_location(location_at(1));
    let there = name("abc").with_location(location_at(7));

    assert_eq!(here, there);
    assert_ne!(here.location(), there.location());
}

#[test]
fn equality_ignores_nested_locations() {
    let field = |line| {
        FieldDefinitionNode::new(
            name("bar").with_location(location_at(line)),
            NonNullTypeNode::new(named_type("Int")).unwrap(),
        )
        .with_location(location_at(line))
    };

    assert_eq!(field(1), field(2));
}

#[test]
fn equality_compares_content() {
    assert_ne!(name("abc"), name("abd"));
    assert_ne!(
        ListValueNode::new(vec![EnumValueNode::new("A").into()]),
        ListValueNode::new(vec![
            EnumValueNode::new("A").into(),
            EnumValueNode::new("B").into(),
        ]),
    );
}
