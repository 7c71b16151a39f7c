use crate::ast::SyntaxNode;
use crate::SyntaxNavigator;

/// A signal returned from [`SyntaxVisitor`] callbacks to alter the flow
/// of a traversal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VisitFlow {
    /// Continue visiting nodes as usual.
    Next,

    /// Skip the children of the current node. Only meaningful when
    /// returned from [`SyntaxVisitor::enter`].
    Skip,

    /// Abort the traversal without performing any subsequent visits.
    Break,
}

/// Callbacks invoked by [`walk`] and [`walk_with`].
///
/// While the tree is traversed depth-first, `enter` is called on the way
/// down and `leave` on the way back up. In both callbacks the navigator's
/// top is the node being visited and the rest of its stack is that node's
/// ancestor path.
///
/// Both callbacks default to a no-op that returns [`VisitFlow::Next`].
pub trait SyntaxVisitor<'a> {
    fn enter(
        &mut self,
        _node: SyntaxNode<'a>,
        _navigator: &SyntaxNavigator<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn leave(
        &mut self,
        _node: SyntaxNode<'a>,
        _navigator: &SyntaxNavigator<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
}

/// Walk `root` and all of its descendants depth-first with a fresh
/// navigator.
///
/// Returns [`VisitFlow::Break`] if the visitor aborted the traversal,
/// [`VisitFlow::Next`] otherwise.
pub fn walk<'a, V>(root: impl Into<SyntaxNode<'a>>, visitor: &mut V) -> VisitFlow
where
    V: SyntaxVisitor<'a> + ?Sized,
{
    let mut navigator = SyntaxNavigator::new();
    walk_with(root, &mut navigator, visitor)
}

/// Like [`walk`], but pushes onto a caller-supplied navigator.
///
/// Nodes already on `navigator` are treated as ancestors of `root`. When
/// the traversal completes the navigator is back to its original depth.
/// When the visitor returns [`VisitFlow::Break`] the navigator is left
/// holding the path to the node that broke off the traversal.
pub fn walk_with<'a, V>(
    root: impl Into<SyntaxNode<'a>>,
    navigator: &mut SyntaxNavigator<'a>,
    visitor: &mut V,
) -> VisitFlow
where
    V: SyntaxVisitor<'a> + ?Sized,
{
    let node = root.into();
    navigator.push(node);

    match visitor.enter(node, navigator) {
        VisitFlow::Break => return VisitFlow::Break,
        VisitFlow::Skip => (),
        VisitFlow::Next => {
            for child in node.children() {
                if walk_with(child, navigator, visitor) == VisitFlow::Break {
                    return VisitFlow::Break;
                }
            }
        },
    }

    let flow = visitor.leave(node, navigator);
    let popped = navigator.pop();
    debug_assert!(popped.is_ok_and(|popped| popped.is_same(&node)));

    match flow {
        VisitFlow::Break => VisitFlow::Break,
        VisitFlow::Next | VisitFlow::Skip => VisitFlow::Next,
    }
}
