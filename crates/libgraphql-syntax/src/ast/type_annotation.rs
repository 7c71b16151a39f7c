use crate::ast::AstNode;
use crate::ast::NameNode;
use crate::ast::SyntaxNode;
use crate::ast::SyntaxNodes;
use crate::SourceLocation;
use crate::SyntaxError;
use crate::SyntaxKind;
use crate::SyntaxPrinter;
use inherent::inherent;
use std::sync::Arc;

/// A reference to a type, as written in field, argument and variable
/// definitions (e.g. `String`, `[Int]`, `[User!]!`).
///
/// See
/// [Type References](https://spec.graphql.org/September2025/#sec-Type-References)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeNode {
    List(ListTypeNode),
    Named(NamedTypeNode),
    NonNull(NonNullTypeNode),
}

impl TypeNode {
    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        match self {
            Self::List(node) => node.as_syntax_node(),
            Self::Named(node) => node.as_syntax_node(),
            Self::NonNull(node) => node.as_syntax_node(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.as_syntax_node().kind()
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.as_syntax_node().location()
    }

    /// The innermost named type, with all list and non-null wrappers
    /// peeled away.
    pub fn innermost_named_type(&self) -> &NamedTypeNode {
        match self {
            Self::List(node) => node.element_type().innermost_named_type(),
            Self::Named(node) => node,
            Self::NonNull(node) => node.inner_type().innermost_named_type(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

impl From<ListTypeNode> for TypeNode {
    fn from(node: ListTypeNode) -> Self {
        Self::List(node)
    }
}

impl From<NamedTypeNode> for TypeNode {
    fn from(node: NamedTypeNode) -> Self {
        Self::Named(node)
    }
}

impl From<NonNullTypeNode> for TypeNode {
    fn from(node: NonNullTypeNode) -> Self {
        Self::NonNull(node)
    }
}

/// A reference to a type by name (e.g. `String`, `User`).
#[derive(Clone, Debug)]
pub struct NamedTypeNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
}

impl NamedTypeNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            name: Arc::new(name),
        }
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_name(&self, name: NameNode) -> Self {
        Self {
            name: Arc::new(name),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(NamedTypeNode { name });

#[inherent]
impl AstNode for NamedTypeNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::NamedType(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A list type reference (e.g. `[String]`).
#[derive(Clone, Debug)]
pub struct ListTypeNode {
    location: Option<SourceLocation>,
    element_type: Arc<TypeNode>,
}

impl ListTypeNode {
    pub fn new(element_type: impl Into<TypeNode>) -> Self {
        Self {
            location: None,
            element_type: Arc::new(element_type.into()),
        }
    }

    pub fn element_type(&self) -> &TypeNode {
        &self.element_type
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_element_type(&self, element_type: impl Into<TypeNode>) -> Self {
        Self {
            element_type: Arc::new(element_type.into()),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(ListTypeNode { element_type });

#[inherent]
impl AstNode for ListTypeNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.element_type.as_syntax_node());
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::ListType(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A non-null type reference (e.g. `String!`, `[Int]!`).
///
/// The wrapped type is never itself non-null: `String!!` is not valid
/// GraphQL and cannot be constructed.
#[derive(Clone, Debug)]
pub struct NonNullTypeNode {
    location: Option<SourceLocation>,
    inner_type: Arc<TypeNode>,
}

impl NonNullTypeNode {
    /// Fails with [`SyntaxError::NestedNonNullType`] when `inner_type` is
    /// already non-null.
    pub fn new(inner_type: impl Into<TypeNode>) -> Result<Self, SyntaxError> {
        let inner_type = inner_type.into();
        if inner_type.is_non_null() {
            return Err(SyntaxError::NestedNonNullType);
        }
        Ok(Self {
            location: None,
            inner_type: Arc::new(inner_type),
        })
    }

    pub fn inner_type(&self) -> &TypeNode {
        &self.inner_type
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_inner_type(
        &self,
        inner_type: impl Into<TypeNode>,
    ) -> Result<Self, SyntaxError> {
        Ok(Self {
            location: self.location.clone(),
            ..Self::new(inner_type)?
        })
    }
}

impl_eq_ignoring_location!(NonNullTypeNode { inner_type });

#[inherent]
impl AstNode for NonNullTypeNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.inner_type.as_syntax_node());
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::NonNullType(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}
