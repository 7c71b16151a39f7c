use crate::ast::AstNode;
use crate::ast::DirectiveDefinitionNode;
use crate::ast::EnumTypeDefinitionNode;
use crate::ast::EnumTypeExtensionNode;
use crate::ast::FragmentDefinitionNode;
use crate::ast::InputObjectTypeDefinitionNode;
use crate::ast::InputObjectTypeExtensionNode;
use crate::ast::InterfaceTypeDefinitionNode;
use crate::ast::InterfaceTypeExtensionNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::ObjectTypeExtensionNode;
use crate::ast::OperationDefinitionNode;
use crate::ast::ScalarTypeDefinitionNode;
use crate::ast::ScalarTypeExtensionNode;
use crate::ast::SchemaDefinitionNode;
use crate::ast::SchemaExtensionNode;
use crate::ast::SyntaxNode;
use crate::ast::SyntaxNodes;
use crate::ast::UnionTypeDefinitionNode;
use crate::ast::UnionTypeExtensionNode;
use crate::SourceLocation;
use crate::SyntaxKind;
use crate::SyntaxPrinter;
use inherent::inherent;
use std::sync::Arc;

/// A top-level definition in a [`DocumentNode`].
///
/// Executable definitions (operations, fragments) and type system
/// definitions and extensions may be freely mixed within one document.
#[derive(Clone, Debug, PartialEq)]
pub enum DefinitionNode {
    OperationDefinition(OperationDefinitionNode),
    FragmentDefinition(FragmentDefinitionNode),
    SchemaDefinition(SchemaDefinitionNode),
    SchemaExtension(SchemaExtensionNode),
    ScalarTypeDefinition(ScalarTypeDefinitionNode),
    ObjectTypeDefinition(ObjectTypeDefinitionNode),
    InterfaceTypeDefinition(InterfaceTypeDefinitionNode),
    UnionTypeDefinition(UnionTypeDefinitionNode),
    EnumTypeDefinition(EnumTypeDefinitionNode),
    InputObjectTypeDefinition(InputObjectTypeDefinitionNode),
    DirectiveDefinition(DirectiveDefinitionNode),
    ScalarTypeExtension(ScalarTypeExtensionNode),
    ObjectTypeExtension(ObjectTypeExtensionNode),
    InterfaceTypeExtension(InterfaceTypeExtensionNode),
    UnionTypeExtension(UnionTypeExtensionNode),
    EnumTypeExtension(EnumTypeExtensionNode),
    InputObjectTypeExtension(InputObjectTypeExtensionNode),
}

impl DefinitionNode {
    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        match self {
            Self::OperationDefinition(node) => node.as_syntax_node(),
            Self::FragmentDefinition(node) => node.as_syntax_node(),
            Self::SchemaDefinition(node) => node.as_syntax_node(),
            Self::SchemaExtension(node) => node.as_syntax_node(),
            Self::ScalarTypeDefinition(node) => node.as_syntax_node(),
            Self::ObjectTypeDefinition(node) => node.as_syntax_node(),
            Self::InterfaceTypeDefinition(node) => node.as_syntax_node(),
            Self::UnionTypeDefinition(node) => node.as_syntax_node(),
            Self::EnumTypeDefinition(node) => node.as_syntax_node(),
            Self::InputObjectTypeDefinition(node) => node.as_syntax_node(),
            Self::DirectiveDefinition(node) => node.as_syntax_node(),
            Self::ScalarTypeExtension(node) => node.as_syntax_node(),
            Self::ObjectTypeExtension(node) => node.as_syntax_node(),
            Self::InterfaceTypeExtension(node) => node.as_syntax_node(),
            Self::UnionTypeExtension(node) => node.as_syntax_node(),
            Self::EnumTypeExtension(node) => node.as_syntax_node(),
            Self::InputObjectTypeExtension(node) => node.as_syntax_node(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.as_syntax_node().kind()
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.as_syntax_node().location()
    }

    /// `true` for operation and fragment definitions.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Self::OperationDefinition(_) | Self::FragmentDefinition(_)
        )
    }
}

impl From<OperationDefinitionNode> for DefinitionNode {
    fn from(node: OperationDefinitionNode) -> Self {
        Self::OperationDefinition(node)
    }
}

impl From<FragmentDefinitionNode> for DefinitionNode {
    fn from(node: FragmentDefinitionNode) -> Self {
        Self::FragmentDefinition(node)
    }
}

impl From<SchemaDefinitionNode> for DefinitionNode {
    fn from(node: SchemaDefinitionNode) -> Self {
        Self::SchemaDefinition(node)
    }
}

impl From<SchemaExtensionNode> for DefinitionNode {
    fn from(node: SchemaExtensionNode) -> Self {
        Self::SchemaExtension(node)
    }
}

impl From<ScalarTypeDefinitionNode> for DefinitionNode {
    fn from(node: ScalarTypeDefinitionNode) -> Self {
        Self::ScalarTypeDefinition(node)
    }
}

impl From<ObjectTypeDefinitionNode> for DefinitionNode {
    fn from(node: ObjectTypeDefinitionNode) -> Self {
        Self::ObjectTypeDefinition(node)
    }
}

impl From<InterfaceTypeDefinitionNode> for DefinitionNode {
    fn from(node: InterfaceTypeDefinitionNode) -> Self {
        Self::InterfaceTypeDefinition(node)
    }
}

impl From<UnionTypeDefinitionNode> for DefinitionNode {
    fn from(node: UnionTypeDefinitionNode) -> Self {
        Self::UnionTypeDefinition(node)
    }
}

impl From<EnumTypeDefinitionNode> for DefinitionNode {
    fn from(node: EnumTypeDefinitionNode) -> Self {
        Self::EnumTypeDefinition(node)
    }
}

impl From<InputObjectTypeDefinitionNode> for DefinitionNode {
    fn from(node: InputObjectTypeDefinitionNode) -> Self {
        Self::InputObjectTypeDefinition(node)
    }
}

impl From<DirectiveDefinitionNode> for DefinitionNode {
    fn from(node: DirectiveDefinitionNode) -> Self {
        Self::DirectiveDefinition(node)
    }
}

impl From<ScalarTypeExtensionNode> for DefinitionNode {
    fn from(node: ScalarTypeExtensionNode) -> Self {
        Self::ScalarTypeExtension(node)
    }
}

impl From<ObjectTypeExtensionNode> for DefinitionNode {
    fn from(node: ObjectTypeExtensionNode) -> Self {
        Self::ObjectTypeExtension(node)
    }
}

impl From<InterfaceTypeExtensionNode> for DefinitionNode {
    fn from(node: InterfaceTypeExtensionNode) -> Self {
        Self::InterfaceTypeExtension(node)
    }
}

impl From<UnionTypeExtensionNode> for DefinitionNode {
    fn from(node: UnionTypeExtensionNode) -> Self {
        Self::UnionTypeExtension(node)
    }
}

impl From<EnumTypeExtensionNode> for DefinitionNode {
    fn from(node: EnumTypeExtensionNode) -> Self {
        Self::EnumTypeExtension(node)
    }
}

impl From<InputObjectTypeExtensionNode> for DefinitionNode {
    fn from(node: InputObjectTypeExtensionNode) -> Self {
        Self::InputObjectTypeExtension(node)
    }
}

/// The root of a syntax tree: an ordered list of definitions.
///
/// See
/// [Document](https://spec.graphql.org/September2025/#sec-Document)
/// in the spec.
#[derive(Clone, Debug)]
pub struct DocumentNode {
    location: Option<SourceLocation>,
    definitions: Arc<[DefinitionNode]>,
}

impl DocumentNode {
    pub fn new(definitions: impl Into<Arc<[DefinitionNode]>>) -> Self {
        Self {
            location: None,
            definitions: definitions.into(),
        }
    }

    pub fn definitions(&self) -> &[DefinitionNode] {
        &self.definitions
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_definitions(
        &self,
        definitions: impl Into<Arc<[DefinitionNode]>>,
    ) -> Self {
        Self {
            definitions: definitions.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(DocumentNode { definitions });

#[inherent]
impl AstNode for DocumentNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.extend(self.definitions.iter().map(DefinitionNode::as_syntax_node));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::Document(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}
