use crate::ast::AstNode;
use crate::ast::NameNode;
use crate::ast::SyntaxNode;
use crate::ast::SyntaxNodes;
use crate::SourceLocation;
use crate::SyntaxKind;
use crate::SyntaxPrinter;
use inherent::inherent;
use std::sync::Arc;

// =========================================================
// Value enum
// =========================================================

/// A GraphQL input value.
///
/// Represents all possible GraphQL value literals as defined in the
/// [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values)
/// section of the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueNode {
    Boolean(BooleanValueNode),
    Enum(EnumValueNode),
    Float(FloatValueNode),
    Int(IntValueNode),
    List(ListValueNode),
    Null(NullValueNode),
    Object(ObjectValueNode),
    String(StringValueNode),
    Variable(VariableNode),
}

impl ValueNode {
    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        match self {
            Self::Boolean(node) => node.as_syntax_node(),
            Self::Enum(node) => node.as_syntax_node(),
            Self::Float(node) => node.as_syntax_node(),
            Self::Int(node) => node.as_syntax_node(),
            Self::List(node) => node.as_syntax_node(),
            Self::Null(node) => node.as_syntax_node(),
            Self::Object(node) => node.as_syntax_node(),
            Self::String(node) => node.as_syntax_node(),
            Self::Variable(node) => node.as_syntax_node(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.as_syntax_node().kind()
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.as_syntax_node().location()
    }
}

impl From<BooleanValueNode> for ValueNode {
    fn from(node: BooleanValueNode) -> Self {
        Self::Boolean(node)
    }
}

impl From<EnumValueNode> for ValueNode {
    fn from(node: EnumValueNode) -> Self {
        Self::Enum(node)
    }
}

impl From<FloatValueNode> for ValueNode {
    fn from(node: FloatValueNode) -> Self {
        Self::Float(node)
    }
}

impl From<IntValueNode> for ValueNode {
    fn from(node: IntValueNode) -> Self {
        Self::Int(node)
    }
}

impl From<ListValueNode> for ValueNode {
    fn from(node: ListValueNode) -> Self {
        Self::List(node)
    }
}

impl From<NullValueNode> for ValueNode {
    fn from(node: NullValueNode) -> Self {
        Self::Null(node)
    }
}

impl From<ObjectValueNode> for ValueNode {
    fn from(node: ObjectValueNode) -> Self {
        Self::Object(node)
    }
}

impl From<StringValueNode> for ValueNode {
    fn from(node: StringValueNode) -> Self {
        Self::String(node)
    }
}

impl From<VariableNode> for ValueNode {
    fn from(node: VariableNode) -> Self {
        Self::Variable(node)
    }
}

// =========================================================
// Variables
// =========================================================

/// A variable reference (e.g. `$id`). The stored name excludes the `$`.
#[derive(Clone, Debug)]
pub struct VariableNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
}

impl VariableNode {
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

impl_eq_ignoring_location!(VariableNode { name });

#[inherent]
impl AstNode for VariableNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::Variable(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

// =========================================================
// Scalar value types
// =========================================================

/// A GraphQL integer value.
///
/// The value is widened to `i64` so that out-of-range literals survive
/// until validation reports them.
#[derive(Clone, Debug)]
pub struct IntValueNode {
    location: Option<SourceLocation>,
    value: i64,
}

impl IntValueNode {
    pub fn new(value: i64) -> Self {
        Self {
            location: None,
            value,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_value(&self, value: i64) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(IntValueNode { value });

#[inherent]
impl AstNode for IntValueNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        SyntaxNodes::new()
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::IntValue(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A GraphQL float value (IEEE 754 double).
#[derive(Clone, Debug)]
pub struct FloatValueNode {
    location: Option<SourceLocation>,
    value: f64,
}

impl FloatValueNode {
    pub fn new(value: f64) -> Self {
        Self {
            location: None,
            value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_value(&self, value: f64) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(FloatValueNode { value });

#[inherent]
impl AstNode for FloatValueNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        SyntaxNodes::new()
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::FloatValue(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A GraphQL string value, either a regular `"..."` string or a
/// `"""..."""` block string. `value` holds the processed contents.
#[derive(Clone, Debug)]
pub struct StringValueNode {
    location: Option<SourceLocation>,
    value: Arc<str>,
    block: bool,
}

impl StringValueNode {
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self {
            location: None,
            value: value.into(),
            block: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// `true` when written as a `"""` block string.
    pub fn block(&self) -> bool {
        self.block
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_value(&self, value: impl Into<Arc<str>>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }

    pub fn with_block(&self, block: bool) -> Self {
        Self {
            block,
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(StringValueNode { value, block });

#[inherent]
impl AstNode for StringValueNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        SyntaxNodes::new()
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::StringValue(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A GraphQL boolean value (`true` or `false`).
#[derive(Clone, Debug)]
pub struct BooleanValueNode {
    location: Option<SourceLocation>,
    value: bool,
}

impl BooleanValueNode {
    pub fn new(value: bool) -> Self {
        Self {
            location: None,
            value,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_value(&self, value: bool) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(BooleanValueNode { value });

#[inherent]
impl AstNode for BooleanValueNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        SyntaxNodes::new()
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::BooleanValue(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// The GraphQL `null` literal.
#[derive(Clone, Debug)]
pub struct NullValueNode {
    location: Option<SourceLocation>,
}

impl NullValueNode {
    pub fn new() -> Self {
        Self {
            location: None,
        }
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(NullValueNode {  });

#[inherent]
impl AstNode for NullValueNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        SyntaxNodes::new()
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::NullValue(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An enum value literal (e.g. `ACTIVE`).
#[derive(Clone, Debug)]
pub struct EnumValueNode {
    location: Option<SourceLocation>,
    value: Arc<str>,
}

impl EnumValueNode {
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self {
            location: None,
            value: value.into(),
        }
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

    pub fn with_value(&self, value: impl Into<Arc<str>>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(EnumValueNode { value });

#[inherent]
impl AstNode for EnumValueNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        SyntaxNodes::new()
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::EnumValue(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

// =========================================================
// Composite value types
// =========================================================

/// A list value literal (e.g. `[1, 2, 3]`).
#[derive(Clone, Debug)]
pub struct ListValueNode {
    location: Option<SourceLocation>,
    items: Arc<[ValueNode]>,
}

impl ListValueNode {
    pub fn new(items: impl Into<Arc<[ValueNode]>>) -> Self {
        Self {
            location: None,
            items: items.into(),
        }
    }

    pub fn items(&self) -> &[ValueNode] {
        &self.items
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_items(&self, items: impl Into<Arc<[ValueNode]>>) -> Self {
        Self {
            items: items.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(ListValueNode { items });

#[inherent]
impl AstNode for ListValueNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.extend(self.items.iter().map(ValueNode::as_syntax_node));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::ListValue(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// An input object value literal (e.g. `{ lat: 1.5, lon: 2.0 }`).
#[derive(Clone, Debug)]
pub struct ObjectValueNode {
    location: Option<SourceLocation>,
    fields: Arc<[ObjectFieldNode]>,
}

impl ObjectValueNode {
    pub fn new(fields: impl Into<Arc<[ObjectFieldNode]>>) -> Self {
        Self {
            location: None,
            fields: fields.into(),
        }
    }

    pub fn fields(&self) -> &[ObjectFieldNode] {
        &self.fields
    }

    pub fn with_location(&self, location: Option<SourceLocation>) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    pub fn with_fields(
        &self,
        fields: impl Into<Arc<[ObjectFieldNode]>>,
    ) -> Self {
        Self {
            fields: fields.into(),
            ..self.clone()
        }
    }
}

impl_eq_ignoring_location!(ObjectValueNode { fields });

#[inherent]
impl AstNode for ObjectValueNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.extend(self.fields.iter().map(SyntaxNode::from));
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::ObjectValue(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

/// A single `name: value` entry within an [`ObjectValueNode`].
#[derive(Clone, Debug)]
pub struct ObjectFieldNode {
    location: Option<SourceLocation>,
    name: Arc<NameNode>,
    value: Arc<ValueNode>,
}

impl ObjectFieldNode {
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

impl_eq_ignoring_location!(ObjectFieldNode { name, value });

#[inherent]
impl AstNode for ObjectFieldNode {
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
        SyntaxNode::ObjectField(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}

impl Default for NullValueNode {
    fn default() -> Self {
        Self::new()
    }
}
