use crate::ast::ArgumentNode;
use crate::ast::AstNode;
use crate::ast::DirectiveNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::SyntaxNode;
use crate::ast::SyntaxNodes;
use crate::ast::TypeNode;
use crate::ast::ValueNode;
use crate::ast::VariableNode;
use crate::SourceLocation;
use crate::SyntaxKind;
use crate::SyntaxPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// The kind of a GraphQL operation.
///
/// Not a syntax node of its own: it is the leading keyword of an
/// [`OperationDefinitionNode`] or [`OperationTypeDefinitionNode`](crate::ast::OperationTypeDefinitionNode).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum OperationType {
    Mutation,
    Query,
    Subscription,
}

impl OperationType {
    /// The keyword for this operation type as written in GraphQL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}

// =========================================================
// Selections
// =========================================================

/// A single selection within a [`SelectionSetNode`].
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionNode {
    Field(FieldNode),
    FragmentSpread(FragmentSpreadNode),
    InlineFragment(InlineFragmentNode),
}

impl SelectionNode {
    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        match self {
            Self::Field(node) => node.as_syntax_node(),
            Self::FragmentSpread(node) => node.as_syntax_node(),
            Self::InlineFragment(node) => node.as_syntax_node(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.as_syntax_node().kind()
    }
}

impl From<FieldNode> for SelectionNode {
    fn from(node: FieldNode) -> Self {
        Self::Field(node)
    }
}

impl From<FragmentSpreadNode> for SelectionNode {
    fn from(node: FragmentSpreadNode) -> Self {
        Self::FragmentSpread(node)
    }
}

impl From<InlineFragmentNode> for SelectionNode {
    fn from(node: InlineFragmentNode) -> Self {
        Self::InlineFragment(node)
    }
}

/// A `{ ... }` block of selections.
#[derive(Clone, Debug)]
pub struct SelectionSetNode {
    location: Option<SourceLocation>,
    selections: Arc<[SelectionNode]>,
}

impl SelectionSetNode {
    pub fn new(selections: impl Into<Arc<[SelectionNode]>>) -> Self {
        Self {
            location: None,
            selections: selections.into(),
        }
    }

    pub fn selections(&self) -> &[SelectionNode] {
        &self.selections
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_selections(
        &self,
        selections: impl Into<Arc<[SelectionNode]>>,
    ) -> Self {
        Self {
            selections: selections.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(SelectionSetNode { selections });

#[inherent]
impl AstNode for SelectionSetNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.extend(self.selections.iter().map(SelectionNode::as_syntax_node));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::SelectionSet(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A field selection, optionally aliased (e.g. `smallPic: profilePic(size: 64)`).
///
/// See
/// [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields)
/// in the spec.
#[derive(Clone, Debug)]
pub struct FieldNode {
    location: Option<SourceLocation>,
    alias: Option<Arc<NameNode>>,
    name: Arc<NameNode>,
    arguments: Arc<[ArgumentNode]>,
    directives: Arc<[DirectiveNode]>,
    selection_set: Option<Arc<SelectionSetNode>>,
}

impl FieldNode {
    pub fn new(name: NameNode) -> Self {
        Self {
            location: None,
            alias: None,
            name: Arc::new(name),
            arguments: Vec::new().into(),
            directives: Vec::new().into(),
            selection_set: None,
        }
    }

    pub fn alias(&self) -> Option<&NameNode> {
        self.alias.as_deref()
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn arguments(&self) -> &[ArgumentNode] {
        &self.arguments
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
    }

    pub fn selection_set(&self) -> Option<&SelectionSetNode> {
        self.selection_set.as_deref()
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_alias(&self, alias: Option<NameNode>) -> Self {
        Self {
            alias: alias.map(Arc::new),
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

    pub fn with_directives(
        &self,
        directives: impl Into<Arc<[DirectiveNode]>>,
    ) -> Self {
        Self {
            directives: directives.into(),
            ..self.clone()
        }
    }

    pub fn with_selection_set(
        &self,
        selection_set: Option<SelectionSetNode>,
    ) -> Self {
        Self {
            selection_set: selection_set.map(Arc::new),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(FieldNode { alias, name, arguments, directives, selection_set });

#[inherent]
impl AstNode for FieldNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(alias) = &self.alias {
            children.push(alias.as_ref().into());
        }
        children.push(self.name.as_ref().into());
        children.extend(self.arguments.iter().map(SyntaxNode::from));
        children.extend(self.directives.iter().map(SyntaxNode::from));
        if let Some(selection_set) = &self.selection_set {
            children.push(selection_set.as_ref().into());
        }
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::Field(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A named fragment spread (e.g. `...UserFields @include(if: $full)`).
///
/// See
/// [Fragment Spreads](https://spec.graphql.org/September2025/#FragmentSpread)
/// in the spec.
#[derive(Clone, Debug)]
pub struct FragmentSpreadNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    directives: Arc<[DirectiveNode]>,
}

impl FragmentSpreadNode {
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

impl_eq_ignoring_location!(FragmentSpreadNode { name, directives });

#[inherent]
impl AstNode for FragmentSpreadNode {
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
        SyntaxNode::FragmentSpread(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An inline fragment, with or without a type condition
/// (e.g. `... on User { id }`).
#[derive(Clone, Debug)]
pub struct InlineFragmentNode {
    location: Option<SourceLocation>,
    type_condition: Option<Arc<NamedTypeNode>>,
    directives: Arc<[DirectiveNode]>,
    selection_set: Arc<SelectionSetNode>,
}

impl InlineFragmentNode {
    pub fn new(selection_set: SelectionSetNode) -> Self {
        Self {
            location: None,
            type_condition: None,
            directives: Vec::new().into(),
            selection_set: Arc::new(selection_set),
        }
    }

    pub fn type_condition(&self) -> Option<&NamedTypeNode> {
        self.type_condition.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
    }

    pub fn selection_set(&self) -> &SelectionSetNode {
        &self.selection_set
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_type_condition(
        &self,
        type_condition: Option<NamedTypeNode>,
    ) -> Self {
        Self {
            type_condition: type_condition.map(Arc::new),
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

    pub fn with_selection_set(&self, selection_set: SelectionSetNode) -> Self {
        Self {
            selection_set: Arc::new(selection_set),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(InlineFragmentNode { type_condition, directives, selection_set });

#[inherent]
impl AstNode for InlineFragmentNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(type_condition) = &self.type_condition {
            children.push(type_condition.as_ref().into());
        }
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.push(self.selection_set.as_ref().into());
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::InlineFragment(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

// =========================================================
// Operations and fragments
// =========================================================

/// A query, mutation or subscription. Anonymous query shorthand
/// (`{ ... }`) is represented with `name == None` and
/// `operation == OperationType::Query`.
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// in the spec.
#[derive(Clone, Debug)]
pub struct OperationDefinitionNode {
    location: Option<SourceLocation>,
    operation: OperationType,
    name: Option<Arc<NameNode>>,
    variable_definitions: Arc<[VariableDefinitionNode]>,
    directives: Arc<[DirectiveNode]>,
    selection_set: Arc<SelectionSetNode>,
}

impl OperationDefinitionNode {
    pub fn new(
        operation: OperationType,
        selection_set: SelectionSetNode,
    ) -> Self {
        Self {
            location: None,
            operation,
            name: None,
            variable_definitions: Vec::new().into(),
            directives: Vec::new().into(),
            selection_set: Arc::new(selection_set),
        }
    }

    pub fn operation(&self) -> OperationType {
        self.operation
    }

    pub fn name(&self) -> Option<&NameNode> {
        self.name.as_deref()
    }

    pub fn variable_definitions(&self) -> &[VariableDefinitionNode] {
        &self.variable_definitions
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
    }

    pub fn selection_set(&self) -> &SelectionSetNode {
        &self.selection_set
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

    pub fn with_name(&self, name: Option<NameNode>) -> Self {
        Self {
            name: name.map(Arc::new),
            ..self.clone()
        }
    }

    pub fn with_variable_definitions(
        &self,
        variable_definitions: impl Into<Arc<[VariableDefinitionNode]>>,
    ) -> Self {
        Self {
            variable_definitions: variable_definitions.into(),
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

    pub fn with_selection_set(&self, selection_set: SelectionSetNode) -> Self {
        Self {
            selection_set: Arc::new(selection_set),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(OperationDefinitionNode {
    operation,
    name,
    variable_definitions,
    directives,
    selection_set,
});

#[inherent]
impl AstNode for OperationDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        if let Some(name) = &self.name {
            children.push(name.as_ref().into());
        }
        children.extend(self.variable_definitions.iter().map(SyntaxNode::from));
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.push(self.selection_set.as_ref().into());
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::OperationDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A variable declared by an operation (e.g. `$id: ID! = 1`).
#[derive(Clone, Debug)]
pub struct VariableDefinitionNode {
    location: Option<SourceLocation>,
    variable: Arc<VariableNode>,
    variable_type: Arc<TypeNode>,
    default_value: Option<Arc<ValueNode>>,
    directives: Arc<[DirectiveNode]>,
}

impl VariableDefinitionNode {
    pub fn new(
        variable: VariableNode,
        variable_type: impl Into<TypeNode>,
    ) -> Self {
        Self {
            location: None,
            variable: Arc::new(variable),
            variable_type: Arc::new(variable_type.into()),
            default_value: None,
            directives: Vec::new().into(),
        }
    }

    pub fn variable(&self) -> &VariableNode {
        &self.variable
    }

    pub fn variable_type(&self) -> &TypeNode {
        &self.variable_type
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

    pub fn with_variable(&self, variable: VariableNode) -> Self {
        Self {
            variable: Arc::new(variable),
            ..self.clone()
        }
    }

    pub fn with_variable_type(
        &self,
        variable_type: impl Into<TypeNode>,
    ) -> Self {
        Self {
            variable_type: Arc::new(variable_type.into()),
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

impl_eq_ignoring_location!(VariableDefinitionNode { variable, variable_type, default_value, directives });

#[inherent]
impl AstNode for VariableDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.variable.as_ref().into());
        children.push(self.variable_type.as_syntax_node());
        if let Some(default_value) = &self.default_value {
            children.push(default_value.as_syntax_node());
        }
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::VariableDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A named fragment definition (e.g. `fragment UserFields on User { id }`).
///
/// `variable_definitions` is only populated by parsers that support the
/// experimental fragment-variables syntax.
#[derive(Clone, Debug)]
pub struct FragmentDefinitionNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    variable_definitions: Arc<[VariableDefinitionNode]>,
    type_condition: Arc<NamedTypeNode>,
    directives: Arc<[DirectiveNode]>,
    selection_set: Arc<SelectionSetNode>,
}

impl FragmentDefinitionNode {
    pub fn new(
        name: NameNode,
        type_condition: NamedTypeNode,
        selection_set: SelectionSetNode,
    ) -> Self {
        Self {
            location: None,
            name: Arc::new(name),
            variable_definitions: Vec::new().into(),
            type_condition: Arc::new(type_condition),
            directives: Vec::new().into(),
            selection_set: Arc::new(selection_set),
        }
    }

    pub fn name(&self) -> &NameNode {
        &self.name
    }

    pub fn variable_definitions(&self) -> &[VariableDefinitionNode] {
        &self.variable_definitions
    }

    pub fn type_condition(&self) -> &NamedTypeNode {
        &self.type_condition
    }

    pub fn directives(&self) -> &[DirectiveNode] {
        &self.directives
    }

    pub fn selection_set(&self) -> &SelectionSetNode {
        &self.selection_set
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

    pub fn with_variable_definitions(
        &self,
        variable_definitions: impl Into<Arc<[VariableDefinitionNode]>>,
    ) -> Self {
        Self {
            variable_definitions: variable_definitions.into(),
            ..self.clone()
        }
    }

    pub fn with_type_condition(&self, type_condition: NamedTypeNode) -> Self {
        Self {
            type_condition: Arc::new(type_condition),
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

    pub fn with_selection_set(&self, selection_set: SelectionSetNode) -> Self {
        Self {
            selection_set: Arc::new(selection_set),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(FragmentDefinitionNode {
    name,
    variable_definitions,
    type_condition,
    directives,
    selection_set,
});

#[inherent]
impl AstNode for FragmentDefinitionNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children.extend(self.variable_definitions.iter().map(SyntaxNode::from));
        children.push(self.type_condition.as_ref().into());
        children.extend(self.directives.iter().map(SyntaxNode::from));
        children.push(self.selection_set.as_ref().into());
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::FragmentDefinition(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}
