use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::SyntaxNode;
use crate::tests::utils::name;
use crate::tests::utils::named_type;
use crate::SyntaxError;
use crate::SyntaxErrorCategory;
use crate::SyntaxNavigator;

fn assert_same(actual: SyntaxNode<'_>, expected: SyntaxNode<'_>) {
    assert!(
        actual.is_same(&expected),
        "expected {expected:?}, got {actual:?}",
    );
}

#[test]
fn push_one() {
    let abc = name("abc");
    let mut navigator = SyntaxNavigator::new();

    navigator.push(&abc);

    assert_eq!(navigator.len(), 1);
    assert!(!navigator.is_empty());
}

#[test]
fn push_same_node_twice() {
    let abc = name("abc");
    let mut navigator = SyntaxNavigator::new();

    navigator.push(&abc);
    navigator.push(&abc);

    assert_eq!(navigator.len(), 2);
}

#[test]
fn pop_returns_the_pushed_node() {
    let abc = name("abc");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&abc);

    let popped = navigator.pop().unwrap();

    assert_same(popped, (&abc).into());
    assert!(navigator.is_empty());
}

/// Pops come back in the reverse of push order.
#[test]
fn pop_two() {
    let one = name("abc");
    let two = name("def");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);

    assert_same(navigator.pop().unwrap(), (&two).into());
    assert_same(navigator.pop().unwrap(), (&one).into());
}

#[test]
fn pop_empty() {
    let mut navigator = SyntaxNavigator::new();

    let err = navigator.pop().unwrap_err();

    assert_eq!(err, SyntaxError::EmptyNavigator { operation: "pop" });
    assert_eq!(err.category(), SyntaxErrorCategory::InvalidState);
}

/// Two distinct nodes with equal contents are still told apart by
/// identity.
#[test]
fn pop_distinguishes_equal_nodes_by_identity() {
    let first = name("abc");
    let second = name("abc");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&first);
    navigator.push(&second);

    let popped = navigator.pop().unwrap();

    assert_eq!(popped, SyntaxNode::from(&first));
    assert!(popped.is_same(&(&second).into()));
    assert!(!popped.is_same(&(&first).into()));
}

#[test]
fn parent_with_one() {
    let abc = name("abc");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&abc);

    assert_same(navigator.parent().unwrap(), (&abc).into());
}

#[test]
fn parent_with_two() {
    let one = name("abc");
    let two = name("def");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);

    assert_same(navigator.parent().unwrap(), (&two).into());
}

#[test]
fn parent_with_empty() {
    let navigator = SyntaxNavigator::new();

    assert!(navigator.parent().is_none());
}

#[test]
fn peek() {
    let abc = name("abc");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&abc);

    assert_same(navigator.peek().unwrap(), (&abc).into());
    assert_eq!(navigator.len(), 1);
}

#[test]
fn peek_two() {
    let one = name("abc");
    let two = name("def");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);

    assert_same(navigator.peek().unwrap(), (&two).into());
}

#[test]
fn peek_empty() {
    let navigator = SyntaxNavigator::new();

    assert_eq!(
        navigator.peek().unwrap_err(),
        SyntaxError::EmptyNavigator { operation: "peek" },
    );
}

/// `peek_at` counts from the top of the stack; `0` is the top.
#[test]
fn peek_at_each_depth() {
    let one = name("abc");
    let two = name("def");
    let three = name("ghi");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);
    navigator.push(&three);

    assert_same(navigator.peek_at(0).unwrap(), (&three).into());
    assert_same(navigator.peek_at(1).unwrap(), (&two).into());
    assert_same(navigator.peek_at(2).unwrap(), (&one).into());
    assert_eq!(navigator.len(), 3);
}

#[test]
fn peek_at_past_the_bottom() {
    let one = name("abc");
    let two = name("def");
    let three = name("ghi");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);
    navigator.push(&three);

    let err = navigator.peek_at(3).unwrap_err();

    assert_eq!(err, SyntaxError::PeekOutOfRange { index: 3, depth: 3 });
    assert_eq!(err.category(), SyntaxErrorCategory::InvalidState);
}

#[test]
fn peek_at_on_empty() {
    let navigator = SyntaxNavigator::new();

    assert_eq!(
        navigator.peek_at(0).unwrap_err(),
        SyntaxError::PeekOutOfRange { index: 0, depth: 0 },
    );
}

#[test]
fn ancestor() {
    let one = named_type("abc");
    let two = name("def");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);

    let ancestor = navigator.ancestor::<&NamedTypeNode>().unwrap();

    assert!(std::ptr::eq(ancestor, &one));
}

#[test]
fn ancestor_not_found() {
    let one = named_type("abc");
    let two = name("def");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);

    assert!(navigator.ancestor::<&ObjectTypeDefinitionNode>().is_none());
}

/// The top node itself counts as a match.
#[test]
fn ancestor_includes_the_top_node() {
    let one = named_type("abc");
    let two = name("def");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);

    let ancestor = navigator.ancestor::<&NameNode>().unwrap();

    assert!(std::ptr::eq(ancestor, &two));
}

#[test]
fn ancestors_nearest_first() {
    let one = named_type("abc");
    let two = name("def");
    let three = named_type("ghi");
    let four = name("jkl");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);
    navigator.push(&three);
    navigator.push(&four);

    let ancestors: Vec<&NamedTypeNode> =
        navigator.ancestors::<&NamedTypeNode>().collect();

    assert_eq!(ancestors.len(), 2);
    assert!(std::ptr::eq(ancestors[0], &three));
    assert!(std::ptr::eq(ancestors[1], &one));
}

#[test]
fn ancestors_empty() {
    let navigator = SyntaxNavigator::new();

    assert_eq!(navigator.ancestors::<SyntaxNode<'_>>().count(), 0);
}

/// A cloned `Ancestors` iterator restarts from where the clone was taken,
/// and calling `ancestors` again starts a fresh scan.
#[test]
fn ancestors_is_restartable() {
    let one = named_type("abc");
    let two = named_type("def");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);

    let mut ancestors = navigator.ancestors::<&NamedTypeNode>();
    let snapshot = ancestors.clone();
    assert!(std::ptr::eq(ancestors.next().unwrap(), &two));
    assert!(std::ptr::eq(ancestors.next().unwrap(), &one));
    assert!(ancestors.next().is_none());
    assert!(ancestors.next().is_none());

    assert_eq!(snapshot.count(), 2);
    assert_eq!(navigator.ancestors::<&NamedTypeNode>().count(), 2);
}

#[test]
fn ancestors_does_not_mutate_the_stack() {
    let one = named_type("abc");
    let two = name("def");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);

    let _ = navigator.ancestors::<SyntaxNode<'_>>().count();
    let _ = navigator.ancestor::<&NamedTypeNode>();

    assert_eq!(navigator.len(), 2);
    assert_same(navigator.peek().unwrap(), (&two).into());
}

#[test]
fn iter_runs_from_top_to_root() {
    let one = name("abc");
    let two = name("def");
    let three = name("ghi");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&two);
    navigator.push(&three);

    let values: Vec<&str> = navigator
        .iter()
        .filter_map(|node| node.cast::<&NameNode>())
        .map(NameNode::value)
        .collect();

    assert_eq!(values, vec!["ghi", "def", "abc"]);
}

#[test]
fn clear() {
    let one = name("abc");
    let mut navigator = SyntaxNavigator::new();
    navigator.push(&one);
    navigator.push(&one);

    navigator.clear();

    assert!(navigator.is_empty());
    assert!(navigator.parent().is_none());
}

/// Nodes of every kind go onto the same stack.
#[test]
fn push_mixed_kinds() {
    let named = named_type("Foo");
    let abc = name("abc");
    let mut navigator = SyntaxNavigator::new();

    navigator.push(&named);
    navigator.push(&abc);
    navigator.push(named.name());

    assert_eq!(navigator.len(), 3);
    assert_eq!(
        navigator.peek_at(2).unwrap().kind(),
        crate::SyntaxKind::NamedType,
    );
    assert_same(navigator.peek().unwrap(), named.name().into());
}
