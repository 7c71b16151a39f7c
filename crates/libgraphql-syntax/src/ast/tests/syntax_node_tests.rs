use crate::ast::AstNode;
use crate::ast::DirectiveDefinitionNode;
use crate::ast::EnumValueDefinitionNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::SyntaxNode;
use crate::ast::UnionTypeExtensionNode;
use crate::tests::utils::name;
use crate::tests::utils::named_type;
use crate::SyntaxKind;
use crate::SyntaxPrinter;

#[test]
fn syntax_node_cast() {
    let named = named_type("Foo");
    let node = SyntaxNode::from(&named);

    assert!(std::ptr::eq(node.cast::<&NamedTypeNode>().unwrap(), &named));
    assert!(node.cast::<&NameNode>().is_none());
    assert!(node.cast::<SyntaxNode<'_>>().is_some());
}

#[test]
fn syntax_node_declared_name() {
    let field = FieldDefinitionNode::new(name("bar"), named_type("Int"));
    let extension = UnionTypeExtensionNode::new(name("SearchResult"));
    let enum_value = EnumValueDefinitionNode::new(name("RED"));
    let directive = DirectiveDefinitionNode::new(name("foo"), vec![name("FIELD")]);
    let abc = name("abc");

    let declared = |node: SyntaxNode<'_>| node.declared_name().map(|n| n.value().to_string());

    assert_eq!(declared((&field).into()), Some("bar".to_string()));
    assert_eq!(declared((&extension).into()), Some("SearchResult".to_string()));
    assert_eq!(declared((&enum_value).into()), Some("RED".to_string()));
    assert_eq!(declared((&directive).into()), Some("foo".to_string()));
    assert_eq!(declared((&abc).into()), None);
}

#[test]
fn syntax_node_location_and_kind_follow_the_node() {
    let located = name("abc").with_location(Some(crate::SourceLocation::at(
        crate::SourcePosition::new(0, 3, 3),
    )));
    let node = located.as_syntax_node();

    assert_eq!(node.kind(), SyntaxKind::Name);
    assert_eq!(node.location(), located.location());
}

/// Any `Fn(SyntaxNode, bool) -> String` works as a printer.
#[test]
fn to_text_delegates_to_the_printer() {
    let printer = |node: SyntaxNode<'_>, indented: bool| -> String {
        let text = match node {
            SyntaxNode::Name(name) => name.value().to_string(),
            SyntaxNode::NamedType(named) => named.name().value().to_string(),
            other => other.kind().to_string(),
        };
        if indented { format!("  {text}") } else { text }
    };

    assert_eq!(name("abc").to_text(&printer, false), "abc");
    assert_eq!(named_type("Int").to_text(&printer, true), "  Int");
    assert_eq!(
        FieldDefinitionNode::new(name("x"), named_type("Int"))
            .as_syntax_node()
            .to_text(&printer, false),
        "FieldDefinition",
    );
}

struct KindPrinter;

impl SyntaxPrinter for KindPrinter {
    fn render(&self, node: SyntaxNode<'_>, _indented: bool) -> String {
        node.kind().as_str().to_string()
    }
}

fn render_generic<N: AstNode>(node: &N) -> String {
    AstNode::to_text(node, &KindPrinter, false)
}

#[test]
fn to_text_through_the_trait() {
    assert_eq!(render_generic(&named_type("Int")), "NamedType");
}
