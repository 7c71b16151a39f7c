use crate::ast::FieldDefinitionNode;
use crate::ast::NonNullTypeNode;
use crate::ast::SyntaxNode;
use crate::tests::utils::name;
use crate::tests::utils::named_type;
use crate::tests::utils::parse_schema;
use crate::walk;
use crate::walk_with;
use crate::SyntaxKind;
use crate::SyntaxNavigator;
use crate::SyntaxVisitor;
use crate::VisitFlow;
use rayon::prelude::IntoParallelIterator;
use rayon::prelude::ParallelIterator;

#[derive(Debug, Eq, PartialEq)]
enum Event {
    Enter(SyntaxKind, usize),
    Leave(SyntaxKind, usize),
}

/// Records every callback with the navigator depth at the time, and
/// answers `enter` for `respond_to` with `response`.
#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
    respond_to: Option<(SyntaxKind, VisitFlow)>,
}

impl<'a> SyntaxVisitor<'a> for Recorder {
    fn enter(
        &mut self,
        node: SyntaxNode<'a>,
        navigator: &SyntaxNavigator<'a>,
    ) -> VisitFlow {
        assert!(navigator.peek().unwrap().is_same(&node));
        self.events.push(Event::Enter(node.kind(), navigator.len()));
        match self.respond_to {
            Some((kind, flow)) if kind == node.kind() => flow,
            _ => VisitFlow::Next,
        }
    }

    fn leave(
        &mut self,
        node: SyntaxNode<'a>,
        navigator: &SyntaxNavigator<'a>,
    ) -> VisitFlow {
        assert!(navigator.peek().unwrap().is_same(&node));
        self.events.push(Event::Leave(node.kind(), navigator.len()));
        VisitFlow::Next
    }
}

fn non_null_field() -> FieldDefinitionNode {
    FieldDefinitionNode::new(
        name("a"),
        NonNullTypeNode::new(named_type("String")).unwrap(),
    )
}

#[test]
fn walk_visits_depth_first_in_child_order() {
    let field = non_null_field();
    let mut recorder = Recorder::default();

    let flow = walk(&field, &mut recorder);

    assert_eq!(flow, VisitFlow::Next);
    assert_eq!(recorder.events, vec![
        Event::Enter(SyntaxKind::FieldDefinition, 1),
        Event::Enter(SyntaxKind::Name, 2),
        Event::Leave(SyntaxKind::Name, 2),
        Event::Enter(SyntaxKind::NonNullType, 2),
        Event::Enter(SyntaxKind::NamedType, 3),
        Event::Enter(SyntaxKind::Name, 4),
        Event::Leave(SyntaxKind::Name, 4),
        Event::Leave(SyntaxKind::NamedType, 3),
        Event::Leave(SyntaxKind::NonNullType, 2),
        Event::Leave(SyntaxKind::FieldDefinition, 1),
    ]);
}

/// `Skip` prunes the children of the entered node but still leaves it.
#[test]
fn walk_skip_prunes_children() {
    let field = non_null_field();
    let mut recorder = Recorder {
        respond_to: Some((SyntaxKind::NonNullType, VisitFlow::Skip)),
        ..Recorder::default()
    };

    let flow = walk(&field, &mut recorder);

    assert_eq!(flow, VisitFlow::Next);
    assert_eq!(recorder.events, vec![
        Event::Enter(SyntaxKind::FieldDefinition, 1),
        Event::Enter(SyntaxKind::Name, 2),
        Event::Leave(SyntaxKind::Name, 2),
        Event::Enter(SyntaxKind::NonNullType, 2),
        Event::Leave(SyntaxKind::NonNullType, 2),
        Event::Leave(SyntaxKind::FieldDefinition, 1),
    ]);
}

#[test]
fn walk_break_stops_immediately() {
    let field = non_null_field();
    let mut recorder = Recorder {
        respond_to: Some((SyntaxKind::NamedType, VisitFlow::Break)),
        ..Recorder::default()
    };

    let flow = walk(&field, &mut recorder);

    assert_eq!(flow, VisitFlow::Break);
    assert_eq!(recorder.events, vec![
        Event::Enter(SyntaxKind::FieldDefinition, 1),
        Event::Enter(SyntaxKind::Name, 2),
        Event::Leave(SyntaxKind::Name, 2),
        Event::Enter(SyntaxKind::NonNullType, 2),
        Event::Enter(SyntaxKind::NamedType, 3),
    ]);
}

/// A completed walk returns a caller-supplied navigator to its original
/// depth; nodes already on it act as ancestors.
#[test]
fn walk_with_restores_navigator_depth() {
    let outer = name("outer");
    let field = non_null_field();
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&outer);
    let mut recorder = Recorder::default();

    let flow = walk_with(&field, &mut navigator, &mut recorder);

    assert_eq!(flow, VisitFlow::Next);
    assert_eq!(navigator.len(), 1);
    assert!(navigator.peek().unwrap().is_same(&(&outer).into()));
    assert_eq!(recorder.events[0], Event::Enter(SyntaxKind::FieldDefinition, 2));
}

#[test]
fn walk_with_break_keeps_the_path() {
    let field = non_null_field();
    let mut navigator = SyntaxNavigator::new();
    let mut recorder = Recorder {
        respond_to: Some((SyntaxKind::NamedType, VisitFlow::Break)),
        ..Recorder::default()
    };

    let flow = walk_with(&field, &mut navigator, &mut recorder);

    assert_eq!(flow, VisitFlow::Break);
    let kinds: Vec<SyntaxKind> = navigator.iter().map(|node| node.kind()).collect();
    assert_eq!(kinds, vec![
        SyntaxKind::NamedType,
        SyntaxKind::NonNullType,
        SyntaxKind::FieldDefinition,
    ]);
}

/// Collects the coordinate of every schema element the walk enters.
#[derive(Default)]
struct CoordinateCollector {
    coordinates: Vec<String>,
}

impl<'a> SyntaxVisitor<'a> for CoordinateCollector {
    fn enter(
        &mut self,
        node: SyntaxNode<'a>,
        navigator: &SyntaxNavigator<'a>,
    ) -> VisitFlow {
        let kind = node.kind();
        let is_schema_element = kind.is_type_definition()
            || kind.is_type_extension()
            || matches!(
                kind,
                SyntaxKind::FieldDefinition
                    | SyntaxKind::InputValueDefinition
                    | SyntaxKind::EnumValueDefinition
                    | SyntaxKind::DirectiveDefinition
            );
        if is_schema_element {
            let coordinate = navigator.create_schema_coordinate().unwrap();
            self.coordinates.push(coordinate.to_string());
        }
        VisitFlow::Next
    }
}

const SCHEMA: &str = r#"
type Foo implements Node {
  bar(baz: String, qux: [Int!]): Int @deprecated(reason: "no")
}

enum Color { RED GREEN }

input Point { x: Int y: Int = 0 }

directive @foo(arg: String!) on FIELD_DEFINITION

extend type Foo { extra: Boolean }
"#;

const SCHEMA_COORDINATES: &[&str] = &[
    "Foo",
    "Foo.bar",
    "Foo.bar(baz:)",
    "Foo.bar(qux:)",
    "Color",
    "Color.RED",
    "Color.GREEN",
    "Point",
    "Point.x",
    "Point.y",
    "@foo",
    "@foo(arg:)",
    "Foo",
    "Foo.extra",
];

#[test]
fn walk_collects_schema_coordinates_in_document_order() {
    let doc = parse_schema(SCHEMA);
    let mut collector = CoordinateCollector::default();

    walk(&doc, &mut collector);

    assert_eq!(collector.coordinates, SCHEMA_COORDINATES);
}

/// One shared tree, many concurrent walks, each with its own navigator.
#[test]
fn concurrent_walks_over_a_shared_tree() {
    let doc = parse_schema(SCHEMA);

    let results: Vec<Vec<String>> = (0..16)
        .into_par_iter()
        .map(|_| {
            let mut collector = CoordinateCollector::default();
            walk(&doc, &mut collector);
            collector.coordinates
        })
        .collect();

    assert_eq!(results.len(), 16);
    for coordinates in results {
        assert_eq!(coordinates, SCHEMA_COORDINATES);
    }
}
