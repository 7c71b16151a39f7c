use crate::ast::AstNode;
use crate::ast::SyntaxNode;
use crate::ast::SyntaxNodes;
use crate::SourceLocation;
use crate::SyntaxError;
use inherent::inherent;
use std::sync::Arc;

/// A GraphQL [name](https://spec.graphql.org/September2025/#sec-Names)
/// (identifier).
///
/// Names are used for type names, field names, argument names, directive
/// names, enum values, and more.
#[derive(Clone, Debug)]
pub struct NameNode {
    location: Option<SourceLocation>,
    value: Arc<str>,
}

impl NameNode {
    /// Fails with [`SyntaxError::EmptyName`] when `value` is empty.
    pub fn new(value: impl Into<Arc<str>>) -> Result<Self, SyntaxError> {
        let value = value.into();
        if value.is_empty() {
            return Err(SyntaxError::EmptyName);
        }
        Ok(Self {
            location: None,
            value,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_value(
        &self,
        value: impl Into<Arc<str>>,
    ) -> Result<Self, SyntaxError> {
        Ok(Self {
            location: self.location.clone(),
            ..Self::new(value)?
        })
    }
}

impl_eq_ignoring_location!(NameNode { value });

impl std::fmt::Display for NameNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

#[inherent]
impl AstNode for NameNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        SyntaxNodes::new()
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::Name(self)
    }

    pub fn kind(&self) -> crate::SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn crate::SyntaxPrinter,
        indented: bool,
    ) -> String;
}
