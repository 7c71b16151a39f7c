use crate::ast::AstNode;
use crate::ast::DirectiveNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::FragmentSpreadNode;
use crate::ast::InputValueDefinitionNode;
use crate::ast::IntValueNode;
use crate::ast::ListTypeNode;
use crate::ast::NameNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::StringValueNode;
use crate::ast::SyntaxNode;
use crate::tests::utils::name;
use crate::tests::utils::named_type;
use crate::SyntaxKind;

fn kinds(children: &[SyntaxNode<'_>]) -> Vec<SyntaxKind> {
    children.iter().map(|child| child.kind()).collect()
}

/// A fragment spread yields its name and then each directive.
#[test]
fn fragment_spread_children() {
    let spread = FragmentSpreadNode::new(name("UserFields"))
        .with_directives(vec![
            DirectiveNode::new(name("include")),
            DirectiveNode::new(name("skip")),
        ]);

    let children = spread.children();

    assert_eq!(kinds(&children), vec![
        SyntaxKind::Name,
        SyntaxKind::Directive,
        SyntaxKind::Directive,
    ]);
    assert!(children[0].is_same(&spread.name().into()));
    assert!(children[2].is_same(&(&spread.directives()[1]).into()));
}

#[test]
fn field_definition_children_follow_declaration_order() {
    let field = FieldDefinitionNode::new(name("bar"), named_type("Int"))
        .with_description(Some(StringValueNode::new("The bar.")))
        .with_arguments(vec![InputValueDefinitionNode::new(
            name("baz"),
            named_type("String"),
        )])
        .with_directives(vec![DirectiveNode::new(name("deprecated"))]);

    assert_eq!(kinds(&field.children()), vec![
        SyntaxKind::StringValue,
        SyntaxKind::Name,
        SyntaxKind::InputValueDefinition,
        SyntaxKind::NamedType,
        SyntaxKind::Directive,
    ]);
}

/// Absent optional children are omitted rather than reported as empty.
#[test]
fn absent_children_are_omitted() {
    let object_type = ObjectTypeDefinitionNode::new(name("Foo"));

    assert_eq!(kinds(&object_type.children()), vec![SyntaxKind::Name]);
}

#[test]
fn leaf_nodes_have_no_children() {
    assert!(name("abc").children().is_empty());
    assert!(IntValueNode::new(7).children().is_empty());
}

/// `children` is derived afresh each call and always agrees with itself.
#[test]
fn children_are_rederivable() {
    let list_type = ListTypeNode::new(named_type("Int"));

    let first = list_type.children();
    let second = list_type.children();

    assert_eq!(first.len(), 1);
    assert!(first[0].is_same(&second[0]));
}

fn count_names<N: AstNode>(node: &N) -> usize {
    fn count(node: SyntaxNode<'_>) -> usize {
        let own = usize::from(node.kind() == SyntaxKind::Name);
        own + node.children().into_iter().map(count).sum::<usize>()
    }
    count(node.as_syntax_node())
}

/// Generic code can walk any node through the `AstNode` trait.
#[test]
fn generic_traversal_through_ast_node() {
    let object_type = ObjectTypeDefinitionNode::new(name("Foo"))
        .with_interfaces(vec![named_type("Node")])
        .with_fields(vec![FieldDefinitionNode::new(name("id"), named_type("ID"))]);

    assert_eq!(count_names(&object_type), 4);
    assert_eq!(count_names(&NameNode::new("x").unwrap()), 1);
}
