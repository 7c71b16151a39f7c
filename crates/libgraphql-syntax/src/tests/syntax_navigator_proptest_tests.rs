use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::SyntaxNode;
use crate::tests::utils::parse_object_type_definition;
use crate::SyntaxError;
use crate::SyntaxNavigator;
use proptest::prelude::*;

fn names() -> impl Strategy<Value = Vec<NameNode>> {
    prop::collection::vec("[A-Za-z_][A-Za-z0-9_]{0,8}", 0..24).prop_map(
        |values| {
            values
                .into_iter()
                .map(|value| NameNode::new(value).unwrap())
                .collect()
        },
    )
}

proptest! {
    /// Pushing `n` nodes and then popping `n` times yields them in reverse
    /// order, and one more pop fails.
    #[test]
    fn pops_reverse_pushes(names in names()) {
        let mut navigator = SyntaxNavigator::new();
        for name in &names {
            navigator.push(name);
        }
        prop_assert_eq!(navigator.len(), names.len());

        for name in names.iter().rev() {
            let popped = navigator.pop().unwrap();
            prop_assert!(popped.is_same(&name.into()));
        }
        prop_assert!(navigator.is_empty());
        prop_assert_eq!(
            navigator.pop().unwrap_err(),
            SyntaxError::EmptyNavigator { operation: "pop" }
        );
    }

    /// Runs of names and type references before, between and after the
    /// type, field and argument never change the synthesized coordinate.
    #[test]
    fn noise_nodes_do_not_change_the_coordinate(
        gaps in prop::collection::vec(names(), 4),
    ) {
        let object_type =
            parse_object_type_definition("type Foo { bar(baz: String): Int }");
        let field = &object_type.fields()[0];
        let argument = &field.arguments()[0];
        let role_nodes: [SyntaxNode<'_>; 3] =
            [(&object_type).into(), field.into(), argument.into()];
        let named_types: Vec<Vec<NamedTypeNode>> = gaps
            .iter()
            .map(|gap| gap.iter().cloned().map(NamedTypeNode::new).collect())
            .collect();

        let mut navigator = SyntaxNavigator::new();
        for (index, gap) in gaps.iter().enumerate() {
            for (name, named_type) in gap.iter().zip(&named_types[index]) {
                navigator.push(name);
                navigator.push(named_type);
            }
            if let Some(node) = role_nodes.get(index) {
                navigator.push(*node);
            }
        }

        prop_assert_eq!(
            navigator.create_schema_coordinate().unwrap().to_string(),
            "Foo.bar(baz:)"
        );
    }

    /// `peek_at(i)` is the node pushed `i` pushes before the last one, for
    /// every `i` below the depth, and out of range at the depth.
    #[test]
    fn peek_at_indexes_from_the_top(names in names()) {
        let mut navigator = SyntaxNavigator::new();
        for name in &names {
            navigator.push(name);
        }

        for (index, name) in names.iter().rev().enumerate() {
            prop_assert!(navigator.peek_at(index).unwrap().is_same(&name.into()));
        }
        prop_assert_eq!(
            navigator.peek_at(names.len()).unwrap_err(),
            SyntaxError::PeekOutOfRange {
                index: names.len(),
                depth: names.len(),
            }
        );
        prop_assert_eq!(navigator.len(), names.len());
    }

    /// Queries never change the stack.
    #[test]
    fn queries_are_read_only(names in names()) {
        let mut navigator = SyntaxNavigator::new();
        for name in &names {
            navigator.push(name);
        }

        let _ = navigator.peek();
        let _ = navigator.parent();
        let _ = navigator.ancestor::<&NameNode>();
        let matched = navigator.ancestors::<&NameNode>().count();
        let _ = navigator.create_schema_coordinate();

        prop_assert_eq!(matched, names.len());
        prop_assert_eq!(navigator.len(), names.len());
        if let Some(last) = names.last() {
            prop_assert!(navigator.peek().unwrap().is_same(&last.into()));
        }
    }
}
