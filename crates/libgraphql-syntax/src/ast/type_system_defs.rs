use crate::ast::AstNode;
use crate::ast::DirectiveNode;
use crate::ast::EnumValueDefinitionNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::InputValueDefinitionNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::OperationType;
use crate::ast::StringValueNode;
use crate::ast::SyntaxNode;
use crate::ast::SyntaxNodes;
use crate::SourceLocation;
use crate::SyntaxKind;
use crate::SyntaxPrinter;
use inherent::inherent;
use std::sync::Arc;

// =========================================================
// Schema definition
// =========================================================

/// A GraphQL schema definition.
///
/// See
/// [Schema](https://spec.graphql.org/September2025/#sec-Schema)
/// in the spec.
#[derive(Clone, Debug)]
pub struct SchemaDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    directives: Arc<[DirectiveNode]>,
    operation_types: Arc<[OperationTypeDefinitionNode]>,
}

impl SchemaDefinitionNode {
    pub fn new(
        operation_types: impl Into<Arc<[OperationTypeDefinitionNode]>>,
    ) -> Self {
        Self {
            location: None,
            description: None,
            directives: Vec::new().into(),
            operation_types: operation_types.into(),
        }
    }

    pub fn description(&self) -> Option<&StringValueNode> {
        self.description.as_deref()
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

    pub fn with_description(
        &self,
        description: Option<StringValueNode>,
    ) -> Self {
        Self {
            description: description.map(Arc::new),
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

impl_eq_ignoring_location!(SchemaDefinitionNode { description, directives, operation_types });

#[inherent]
impl AstNode for SchemaDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(description) = &self.description {
            children.push(description.as_ref().into());
        }
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.operation_types.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::SchemaDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A root operation type definition within a schema definition or
/// extension (e.g. `query: Query`).
#[derive(Clone, Debug)]
pub struct OperationTypeDefinitionNode {
    location: Option<SourceLocation>,
    operation: OperationType,
    named_type: Arc<NamedTypeNode>,
}

impl OperationTypeDefinitionNode {
    pub fn new(
        operation: OperationType,
        named_type: NamedTypeNode,
    ) -> Self {
        Self {
            location: None,
            operation,
            named_type: Arc::new(named_type),
        }
    }

    pub fn operation(&self) -> OperationType {
        self.operation
    }

    pub fn named_type(&self) -> &NamedTypeNode {
        &self.named_type
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_operation(&self, operation: OperationType) -> Self {
        Self {
            operation,
            ..self.clone()
        }
    }

    pub fn with_named_type(&self, named_type: NamedTypeNode) -> Self {
        Self {
            named_type: Arc::new(named_type),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(OperationTypeDefinitionNode { operation, named_type });

#[inherent]
impl AstNode for OperationTypeDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.named_type.as_ref().into());
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::OperationTypeDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

// =========================================================
// Type definitions
// =========================================================

/// A scalar type definition (e.g. `scalar DateTime`).
#[derive(Clone, Debug)]
pub struct ScalarTypeDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    name: Arc<NameNode>,
    directives: Arc<[DirectiveNode]>,
}

impl ScalarTypeDefinitionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            description: None,
            name: Arc::new(name),
            directives: Vec::new().into(),
        }
    }

    pub fn description(&self) -> Option<&StringValueNode> {
        self.description.as_deref()
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

    pub fn with_description(
        &self,
        description: Option<StringValueNode>,
    ) -> Self {
        Self {
            description: description.map(Arc::new),
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

impl_eq_ignoring_location!(ScalarTypeDefinitionNode { description, name, directives });

#[inherent]
impl AstNode for ScalarTypeDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(description) = &self.description {
            children.push(description.as_ref().into());
        }
        children.push(self.name.as_ref().into());
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::ScalarTypeDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An object type definition.
///
/// See
/// [Objects](https://spec.graphql.org/September2025/#sec-Objects)
/// in the spec.
#[derive(Clone, Debug)]
pub struct ObjectTypeDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    name: Arc<NameNode>,
    interfaces: Arc<[NamedTypeNode]>,
    directives: Arc<[DirectiveNode]>,
    fields: Arc<[FieldDefinitionNode]>,
}

impl ObjectTypeDefinitionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            description: None,
            name: Arc::new(name),
            interfaces: Vec::new().into(),
            directives: Vec::new().into(),
            fields: Vec::new().into(),
        }
    }

    pub fn description(&self) -> Option<&StringValueNode> {
        self.description.as_deref()
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

    pub fn with_description(
        &self,
        description: Option<StringValueNode>,
    ) -> Self {
        Self {
            description: description.map(Arc::new),
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

impl_eq_ignoring_location!(ObjectTypeDefinitionNode { description, name, interfaces, directives, fields });

#[inherent]
impl AstNode for ObjectTypeDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(description) = &self.description {
            children.push(description.as_ref().into());
        }
        children.push(self.name.as_ref().into());
        children.extend(self.interfaces.iter().map(SyntaxNode::from));
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.fields.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::ObjectTypeDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An interface type definition.
#[derive(Clone, Debug)]
pub struct InterfaceTypeDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    name: Arc<NameNode>,
    interfaces: Arc<[NamedTypeNode]>,
    directives: Arc<[DirectiveNode]>,
    fields: Arc<[FieldDefinitionNode]>,
}

impl InterfaceTypeDefinitionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            description: None,
            name: Arc::new(name),
            interfaces: Vec::new().into(),
            directives: Vec::new().into(),
            fields: Vec::new().into(),
        }
    }

    pub fn description(&self) -> Option<&StringValueNode> {
        self.description.as_deref()
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

    pub fn with_description(
        &self,
        description: Option<StringValueNode>,
    ) -> Self {
        Self {
            description: description.map(Arc::new),
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

impl_eq_ignoring_location!(InterfaceTypeDefinitionNode { description, name, interfaces, directives, fields });

#[inherent]
impl AstNode for InterfaceTypeDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(description) = &self.description {
            children.push(description.as_ref().into());
        }
        children.push(self.name.as_ref().into());
        children.extend(self.interfaces.iter().map(SyntaxNode::from));
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.fields.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::InterfaceTypeDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A union type definition (e.g. `union SearchResult = User | Post`).
#[derive(Clone, Debug)]
pub struct UnionTypeDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    name: Arc<NameNode>,
    directives: Arc<[DirectiveNode]>,
    types: Arc<[NamedTypeNode]>,
}

impl UnionTypeDefinitionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            description: None,
            name: Arc::new(name),
            directives: Vec::new().into(),
            types: Vec::new().into(),
        }
    }

    pub fn description(&self) -> Option<&StringValueNode> {
        self.description.as_deref()
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

    pub fn with_description(
        &self,
        description: Option<StringValueNode>,
    ) -> Self {
        Self {
            description: description.map(Arc::new),
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

impl_eq_ignoring_location!(UnionTypeDefinitionNode { description, name, directives, types });

#[inherent]
impl AstNode for UnionTypeDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(description) = &self.description {
            children.push(description.as_ref().into());
        }
        children.push(self.name.as_ref().into());
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.types.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::UnionTypeDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An enum type definition.
#[derive(Clone, Debug)]
pub struct EnumTypeDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    name: Arc<NameNode>,
    directives: Arc<[DirectiveNode]>,
    values: Arc<[EnumValueDefinitionNode]>,
}

impl EnumTypeDefinitionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            description: None,
            name: Arc::new(name),
            directives: Vec::new().into(),
            values: Vec::new().into(),
        }
    }

    pub fn description(&self) -> Option<&StringValueNode> {
        self.description.as_deref()
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

    pub fn with_description(
        &self,
        description: Option<StringValueNode>,
    ) -> Self {
        Self {
            description: description.map(Arc::new),
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

impl_eq_ignoring_location!(EnumTypeDefinitionNode { description, name, directives, values });

#[inherent]
impl AstNode for EnumTypeDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(description) = &self.description {
            children.push(description.as_ref().into());
        }
        children.push(self.name.as_ref().into());
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.values.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::EnumTypeDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An input object type definition.
///
/// Its fields are [`InputValueDefinitionNode`]s, the same node type used
/// for arguments.
#[derive(Clone, Debug)]
pub struct InputObjectTypeDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    name: Arc<NameNode>,
    directives: Arc<[DirectiveNode]>,
    fields: Arc<[InputValueDefinitionNode]>,
}

impl InputObjectTypeDefinitionNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            description: None,
            name: Arc::new(name),
            directives: Vec::new().into(),
            fields: Vec::new().into(),
        }
    }

    pub fn description(&self) -> Option<&StringValueNode> {
        self.description.as_deref()
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

    pub fn with_description(
        &self,
        description: Option<StringValueNode>,
    ) -> Self {
        Self {
            description: description.map(Arc::new),
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

impl_eq_ignoring_location!(InputObjectTypeDefinitionNode { description, name, directives, fields });

#[inherent]
impl AstNode for InputObjectTypeDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(description) = &self.description {
            children.push(description.as_ref().into());
        }
        children.push(self.name.as_ref().into());
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.extend(self.fields.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::InputObjectTypeDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

// =========================================================
// Directive definitions
// =========================================================

/// A directive definition
/// (e.g. `directive @cached(ttl: Int) repeatable on FIELD_DEFINITION`).
///
/// `locations` holds each location keyword as written, as a [`NameNode`].
///
/// See
/// [Type System Directives](https://spec.graphql.org/September2025/#sec-Type-System.Directives)
/// in the spec.
#[derive(Clone, Debug)]
pub struct DirectiveDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    name: Arc<NameNode>,
    arguments: Arc<[InputValueDefinitionNode]>,
    repeatable: bool,
    locations: Arc<[NameNode]>,
}

impl DirectiveDefinitionNode {
    pub fn new(
        name: NameNode,
        locations: impl Into<Arc<[NameNode]>>,
    ) -> Self {
        Self {
            location: None,
            description: None,
            name: Arc::new(name),
            arguments: Vec::new().into(),
            repeatable: false,
            locations: locations.into(),
        }
    }

    pub fn description(&self) -> Option<&StringValueNode> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn arguments(&self) -> &[InputValueDefinitionNode] {
        &self.arguments
    }

    pub fn repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[NameNode] {
        &self.locations
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_description(
        &self,
        description: Option<StringValueNode>,
    ) -> Self {
        Self {
            description: description.map(Arc::new),
            ..self.clone()
        }
    }

    pub fn with_name(&self, name: NameNode) -> Self {
        Self {
            name: Arc::new(name),
            ..self.clone()
        }
    }

    pub fn with_arguments(
        &self,
        arguments: impl Into<Arc<[InputValueDefinitionNode]>>,
    ) -> Self {
        Self {
            arguments: arguments.into(),
            ..self.clone()
        }
    }

    pub fn with_repeatable(&self, repeatable: bool) -> Self {
        Self {
            repeatable,
            ..self.clone()
        }
    }

    pub fn with_locations(
        &self,
        locations: impl Into<Arc<[NameNode]>>,
    ) -> Self {
        Self {
            locations: locations.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(DirectiveDefinitionNode {
    description,
    name,
    arguments,
    repeatable,
    locations,
});

#[inherent]
impl AstNode for DirectiveDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(description) = &self.description {
            children.push(description.as_ref().into());
        }
        children.push(self.name.as_ref().into());
        children.extend(self.arguments.iter().map(SyntaxNode::from));
        children.extend(self.locations.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::DirectiveDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}
