use crate::ast::SyntaxNode;
use crate::ast::SyntaxNodes;
use crate::SourceLocation;
use crate::SyntaxKind;
use crate::SyntaxPrinter;

/// Trait implemented by all syntax node types.
///
/// All node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic consumers (printers, rewriters, validators)
/// that must not special-case every concrete node type.
pub trait AstNode {
    /// Where this node originated in source text, if known.
    fn location(&self) -> Option<&SourceLocation>;

    /// Every immediate child of this node, in declaration order.
    ///
    /// The returned collection is built fresh on each call, so it can be
    /// re-derived at any time and carries no traversal state.
    fn children(&self) -> SyntaxNodes<'_>;

    /// A borrowed, kind-tagged view of this node.
    fn as_syntax_node(&self) -> SyntaxNode<'_>;

    /// The kind tag of this node. Constant for the node's lifetime.
    fn kind(&self) -> SyntaxKind {
        self.as_syntax_node().kind()
    }

    /// Render this node as GraphQL text using `printer`.
    ///
    /// `indented` only affects whitespace; both forms describe the same
    /// node.
    fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String {
        printer.render(self.as_syntax_node(), indented)
    }
}
