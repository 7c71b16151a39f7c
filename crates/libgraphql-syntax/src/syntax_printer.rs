use crate::ast::SyntaxNode;

/// Renders syntax nodes back to GraphQL text.
///
/// This crate does not ship a printer. Nodes delegate
/// [`to_text`](crate::ast::AstNode::to_text) to whatever printer the caller
/// supplies. Implementations are expected to be deterministic, and the
/// indented and compact forms of a node must re-parse to equivalent trees.
pub trait SyntaxPrinter {
    fn render(&self, node: SyntaxNode<'_>, indented: bool) -> String;
}

impl<F> SyntaxPrinter for F
where
    F: Fn(SyntaxNode<'_>, bool) -> String,
{
    fn render(&self, node: SyntaxNode<'_>, indented: bool) -> String {
        self(node, indented)
    }
}
