use crate::ast::AstNode;
use crate::ast::DirectiveNode;
use crate::ast::EnumValueDefinitionNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::InputValueDefinitionNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::OperationTypeDefinitionNode;
use crate::ast::SyntaxNode;
use crate::ast::SyntaxNodes;
use crate::SourceLocation;
use crate::SyntaxKind;
use crate::SyntaxPrinter;
use inherent::inherent;
use std::sync::Arc;

// =========================================================
// Schema extension
// =========================================================

/// A schema extension (e.g. `extend schema @link(url: "...")`).
#[derive(Clone, Debug)]
pub struct SchemaExtensionNode {
    location: Option<SourceLocation>,
    directives: Arc<[DirectiveNode]>,
    operation_types: Arc<[OperationTypeDefinitionNode]>,
}

impl SchemaExtensionNode {
    pub fn new() -> Self {
        Self {
            location: None,
            directives: Vec::new().into(),
            operation_types: Vec::new().into(),
        }
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
    }

    pub fn operation_types(&self) -> &[OperationTypeDefinitionNode] {
        &self.operation_types
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_directives(
        &self,
        directives: impl Into<Arc<[DirectiveNode]>>,
    ) -> Self {
        Self {
            directives: directives.into(),
            ..self.clone()
        }
    }

    pub fn with_operation_types(
        &self,
        operation_types: impl Into<Arc<[OperationTypeDefinitionNode]>>,
    ) -> Self {
        Self {
            operation_types: operation_types.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(SchemaExtensionNode { directives, operation_types });

#[inherent]
impl AstNode for SchemaExtensionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.operation_types.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::SchemaExtension(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

// =========================================================
// Type extensions
// =========================================================

/// A scalar type extension (e.g. `extend scalar DateTime @specifiedBy(url: "...")`).
#[derive(Clone, Debug)]
pub struct ScalarTypeExtensionNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    directives: Arc<[DirectiveNode]>,
}

impl ScalarTypeExtensionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            name: Arc::new(name),
            directives: Vec::new().into(),
        }
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
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

    pub fn with_directives(
        &self,
        directives: impl Into<Arc<[DirectiveNode]>>,
    ) -> Self {
        Self {
            directives: directives.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(ScalarTypeExtensionNode { name, directives });

#[inherent]
impl AstNode for ScalarTypeExtensionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::ScalarTypeExtension(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An object type extension.
///
/// See
/// [Object Extensions](https://spec.graphql.org/September2025/#sec-Object-Extensions)
/// in the spec.
#[derive(Clone, Debug)]
pub struct ObjectTypeExtensionNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    interfaces: Arc<[NamedTypeNode]>,
    directives: Arc<[DirectiveNode]>,
    fields: Arc<[FieldDefinitionNode]>,
}

impl ObjectTypeExtensionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            name: Arc::new(name),
            interfaces: Vec::new().into(),
            directives: Vec::new().into(),
            fields: Vec::new().into(),
        }
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn interfaces(&self) -> &[NamedTypeNode] {
        &self.interfaces
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
    }

    pub fn fields(&self) -> &[FieldDefinitionNode] {
        &self.fields
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

    pub fn with_interfaces(
        &self,
        interfaces: impl Into<Arc<[NamedTypeNode]>>,
    ) -> Self {
        Self {
            interfaces: interfaces.into(),
            ..self.clone()
        }
    }

    pub fn with_directives(
        &self,
        directives: impl Into<Arc<[DirectiveNode]>>,
    ) -> Self {
        Self {
            directives: directives.into(),
            ..self.clone()
        }
    }

    pub fn with_fields(
        &self,
        fields: impl Into<Arc<[FieldDefinitionNode]>>,
    ) -> Self {
        Self {
            fields: fields.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(ObjectTypeExtensionNode { name, interfaces, directives, fields });

#[inherent]
impl AstNode for ObjectTypeExtensionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children.extend(self.interfaces.iter().map(SyntaxNode::from));
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.fields.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::ObjectTypeExtension(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An interface type extension.
#[derive(Clone, Debug)]
pub struct InterfaceTypeExtensionNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    interfaces: Arc<[NamedTypeNode]>,
    directives: Arc<[DirectiveNode]>,
    fields: Arc<[FieldDefinitionNode]>,
}

impl InterfaceTypeExtensionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            name: Arc::new(name),
            interfaces: Vec::new().into(),
            directives: Vec::new().into(),
            fields: Vec::new().into(),
        }
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn interfaces(&self) -> &[NamedTypeNode] {
        &self.interfaces
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
    }

    pub fn fields(&self) -> &[FieldDefinitionNode] {
        &self.fields
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

    pub fn with_interfaces(
        &self,
        interfaces: impl Into<Arc<[NamedTypeNode]>>,
    ) -> Self {
        Self {
            interfaces: interfaces.into(),
            ..self.clone()
        }
    }

    pub fn with_directives(
        &self,
        directives: impl Into<Arc<[DirectiveNode]>>,
    ) -> Self {
        Self {
            directives: directives.into(),
            ..self.clone()
        }
    }

    pub fn with_fields(
        &self,
        fields: impl Into<Arc<[FieldDefinitionNode]>>,
    ) -> Self {
        Self {
            fields: fields.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(InterfaceTypeExtensionNode { name, interfaces, directives, fields });

#[inherent]
impl AstNode for InterfaceTypeExtensionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children.extend(self.interfaces.iter().map(SyntaxNode::from));
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.fields.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::InterfaceTypeExtension(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A union type extension.
#[derive(Clone, Debug)]
pub struct UnionTypeExtensionNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    directives: Arc<[DirectiveNode]>,
    types: Arc<[NamedTypeNode]>,
}

impl UnionTypeExtensionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            name: Arc::new(name),
            directives: Vec::new().into(),
            types: Vec::new().into(),
        }
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
    }

    pub fn types(&self) -> &[NamedTypeNode] {
        &self.types
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

    pub fn with_directives(
        &self,
        directives: impl Into<Arc<[DirectiveNode]>>,
    ) -> Self {
        Self {
            directives: directives.into(),
            ..self.clone()
        }
    }

    pub fn with_types(&self, types: impl Into<Arc<[NamedTypeNode]>>) -> Self {
        Self {
            types: types.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(UnionTypeExtensionNode { name, directives, types });

#[inherent]
impl AstNode for UnionTypeExtensionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.types.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::UnionTypeExtension(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An enum type extension.
#[derive(Clone, Debug)]
pub struct EnumTypeExtensionNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    directives: Arc<[DirectiveNode]>,
    values: Arc<[EnumValueDefinitionNode]>,
}

impl EnumTypeExtensionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            name: Arc::new(name),
            directives: Vec::new().into(),
            values: Vec::new().into(),
        }
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
    }

    pub fn values(&self) -> &[EnumValueDefinitionNode] {
        &self.values
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

    pub fn with_directives(
        &self,
        directives: impl Into<Arc<[DirectiveNode]>>,
    ) -> Self {
        Self {
            directives: directives.into(),
            ..self.clone()
        }
    }

    pub fn with_values(
        &self,
        values: impl Into<Arc<[EnumValueDefinitionNode]>>,
    ) -> Self {
        Self {
            values: values.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(EnumTypeExtensionNode { name, directives, values });

#[inherent]
impl AstNode for EnumTypeExtensionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.values.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::EnumTypeExtension(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An input object type extension.
#[derive(Clone, Debug)]
pub struct InputObjectTypeExtensionNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    directives: Arc<[DirectiveNode]>,
    fields: Arc<[InputValueDefinitionNode]>,
}

impl InputObjectTypeExtensionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            name: Arc::new(name),
            directives: Vec::new().into(),
            fields: Vec::new().into(),
        }
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
    }

    pub fn fields(&self) -> &[InputValueDefinitionNode] {
        &self.fields
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

    pub fn with_directives(
        &self,
        directives: impl Into<Arc<[DirectiveNode]>>,
    ) -> Self {
        Self {
            directives: directives.into(),
            ..self.clone()
        }
    }

    pub fn with_fields(
        &self,
        fields: impl Into<Arc<[InputValueDefinitionNode]>>,
    ) -> Self {
        Self {
            fields: fields.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(InputObjectTypeExtensionNode { name, directives, fields });

#[inherent]
impl AstNode for InputObjectTypeExtensionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.fields.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::InputObjectTypeExtension(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

impl Default for SchemaExtensionNode {
    fn default() -> Self {
        Self::new()
    }
}
