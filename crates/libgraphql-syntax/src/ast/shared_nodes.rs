use crate::ast::AstNode;
use crate::ast::NameNode;
use crate::ast::StringValueNode;
use crate::ast::SyntaxNode;
use crate::ast::SyntaxNodes;
use crate::ast::TypeNode;
use crate::ast::ValueNode;
use crate::SourceLocation;
use crate::SyntaxKind;
use crate::SyntaxPrinter;
use inherent::inherent;
use std::sync::Arc;

// =========================================================
// Directive annotations (applied directives)
// =========================================================

/// A directive applied to a definition, field or fragment (e.g.
/// `@deprecated(reason: "Use newField")`).
///
/// See
/// [Directives](https://spec.graphql.org/September2025/#sec-Language.Directives)
/// in the spec. This is an *applied* directive; see
/// [`DirectiveDefinitionNode`](crate::ast::DirectiveDefinitionNode) for
/// the declaration.
#[derive(Clone, Debug)]
pub struct DirectiveNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    arguments: Arc<[ArgumentNode]>,
}

impl DirectiveNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            name: Arc::new(name),
            arguments: Vec::new().into(),
        }
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn arguments(&self) -> &[ArgumentNode] {
        &self.arguments
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

    pub fn with_arguments(
        &self,
        arguments: impl Into<Arc<[ArgumentNode]>>,
    ) -> Self {
        Self {
            arguments: arguments.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(DirectiveNode { name, arguments });

#[inherent]
impl AstNode for DirectiveNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children.extend(self.arguments.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::Directive(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

// =========================================================
// Arguments
// =========================================================

/// A single `name: value` argument passed to a field or directive.
///
/// See
/// [Arguments](https://spec.graphql.org/September2025/#sec-Language.Arguments)
/// in the spec.
#[derive(Clone, Debug)]
pub struct ArgumentNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    value: Arc<ValueNode>,
}

impl ArgumentNode {
    pub fn new(name: NameNode, value: impl Into<ValueNode>) -> Self {
        Self {
            location: None,
            name: Arc::new(name),
            value: Arc::new(value.into()),
        }
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn value(&self) -> &ValueNode {
        &self.value
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

    pub fn with_value(&self, value: impl Into<ValueNode>) -> Self {
        Self {
            value: Arc::new(value.into()),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(ArgumentNode { name, value });

#[inherent]
impl AstNode for ArgumentNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children.push(self.value.as_syntax_node());
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::Argument(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

// =========================================================
// Field definitions (used in object types, interfaces)
// =========================================================

/// A field definition within an object type, interface type, or one of
/// their extensions.
///
/// See
/// [Field Definitions](https://spec.graphql.org/September2025/#FieldsDefinition)
/// in the spec.
#[derive(Clone, Debug)]
pub struct FieldDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    name: Arc<NameNode>,
    arguments: Arc<[InputValueDefinitionNode]>,
    field_type: Arc<TypeNode>,
    directives: Arc<[DirectiveNode]>,
}

impl FieldDefinitionNode {
    pub fn new(name: NameNode, field_type: impl Into<TypeNode>) -> Self {
        Self {
            location: None,
            description: None,
            name: Arc::new(name),
            arguments: Vec::new().into(),
            field_type: Arc::new(field_type.into()),
            directives: Vec::new().into(),
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

    pub fn field_type(&self) -> &TypeNode {
        &self.field_type
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

    pub fn with_arguments(
        &self,
        arguments: impl Into<Arc<[InputValueDefinitionNode]>>,
    ) -> Self {
        Self {
            arguments: arguments.into(),
            ..self.clone()
        }
    }

    pub fn with_field_type(&self, field_type: impl Into<TypeNode>) -> Self {
        Self {
            field_type: Arc::new(field_type.into()),
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

impl_eq_ignoring_location!(FieldDefinitionNode {
    description,
    name,
    arguments,
    field_type,
    directives,
});

#[inherent]
impl AstNode for FieldDefinitionNode {
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
        children.push(self.field_type.as_syntax_node());
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::FieldDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

// =========================================================
// Input value definitions (arguments, input fields)
// =========================================================

/// An input value definition, used for field arguments, directive
/// arguments and input object fields.
///
/// See
/// [Input Values Definitions](https://spec.graphql.org/September2025/#InputValueDefinition)
/// in the spec.
#[derive(Clone, Debug)]
pub struct InputValueDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    name: Arc<NameNode>,
    value_type: Arc<TypeNode>,
    default_value: Option<Arc<ValueNode>>,
    directives: Arc<[DirectiveNode]>,
}

impl InputValueDefinitionNode {
    pub fn new(name: NameNode, value_type: impl Into<TypeNode>) -> Self {
        Self {
            location: None,
            description: None,
            name: Arc::new(name),
            value_type: Arc::new(value_type.into()),
            default_value: None,
            directives: Vec::new().into(),
        }
    }

    pub fn description(&self) -> Option<&StringValueNode> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn value_type(&self) -> &TypeNode {
        &self.value_type
    }

    pub fn default_value(&self) -> Option<&ValueNode> {
        self.default_value.as_deref()
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

    pub fn with_value_type(&self, value_type: impl Into<TypeNode>) -> Self {
        Self {
            value_type: Arc::new(value_type.into()),
            ..self.clone()
        }
    }

    pub fn with_default_value(&self, default_value: Option<ValueNode>) -> Self {
        Self {
            default_value: default_value.map(Arc::new),
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

impl_eq_ignoring_location!(InputValueDefinitionNode {
    description,
    name,
    value_type,
    default_value,
    directives,
});

#[inherent]
impl AstNode for InputValueDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(description) = &self.description {
            children.push(description.as_ref().into());
        }
        children.push(self.name.as_ref().into());
        children.push(self.value_type.as_syntax_node());
        if let Some(default_value) = &self.default_value {
            children.push(default_value.as_syntax_node());
        }
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::InputValueDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

// =========================================================
// Enum value definitions
// =========================================================

/// An enum value definition within an enum type or enum type extension.
///
/// See
/// [Enum Value Definitions](https://spec.graphql.org/September2025/#EnumValuesDefinition)
/// in the spec.
#[derive(Clone, Debug)]
pub struct EnumValueDefinitionNode {
    location: Option<SourceLocation>,
    description: Option<Arc<StringValueNode>>,
    name: Arc<NameNode>,
    directives: Arc<[DirectiveNode]>,
}

impl EnumValueDefinitionNode {
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

impl_eq_ignoring_location!(EnumValueDefinitionNode { description, name, directives });

#[inherent]
impl AstNode for EnumValueDefinitionNode {
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
        SyntaxNode::EnumValueDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}
