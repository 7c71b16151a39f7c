use crate::ast::*;
use crate::SourceLocation;
use crate::SyntaxKind;
use crate::SyntaxPrinter;
use smallvec::SmallVec;

/// The immediate children of a node, as returned by
/// [`AstNode::children`].
pub type SyntaxNodes<'a> = SmallVec<[SyntaxNode<'a>; 8]>;

/// A kind predicate used by typed ancestor queries.
///
/// Implemented for a reference to every concrete node type (matching
/// exactly that kind) and for [`SyntaxNode`] itself (matching any node).
pub trait FromSyntaxNode<'a>: Sized {
    fn from_syntax_node(node: SyntaxNode<'a>) -> Option<Self>;
}

impl<'a> FromSyntaxNode<'a> for SyntaxNode<'a> {
    fn from_syntax_node(node: SyntaxNode<'a>) -> Option<Self> {
        Some(node)
    }
}

macro_rules! define_syntax_node {
    ($($variant:ident($node:ident)),* $(,)?) => {
        /// A borrowed reference to any syntax node, tagged by kind.
        ///
        /// This is the polymorphic node type handed to generic consumers:
        /// it is `Copy`, borrows from the tree it was taken from, and
        /// compares by value. Use [`SyntaxNode::is_same`] for identity.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum SyntaxNode<'a> {
            $($variant(&'a $node),)*
        }

        impl<'a> SyntaxNode<'a> {
            pub fn kind(&self) -> SyntaxKind {
                match self {
                    $(Self::$variant(_) => SyntaxKind::$variant,)*
                }
            }

            pub fn location(&self) -> Option<&'a SourceLocation> {
                match *self {
                    $(Self::$variant(node) => node.location(),)*
                }
            }

            /// See [`AstNode::children`].
            pub fn children(&self) -> SyntaxNodes<'a> {
                match *self {
                    $(Self::$variant(node) => node.children(),)*
                }
            }

            fn addr(&self) -> *const () {
                match *self {
                    $(Self::$variant(node) => {
                        node as *const $node as *const ()
                    },)*
                }
            }
        }

        $(
            impl<'a> From<&'a $node> for SyntaxNode<'a> {
                fn from(node: &'a $node) -> Self {
                    Self::$variant(node)
                }
            }

            impl<'a> FromSyntaxNode<'a> for &'a $node {
                fn from_syntax_node(node: SyntaxNode<'a>) -> Option<Self> {
                    match node {
                        SyntaxNode::$variant(node) => Some(node),
                        _ => None,
                    }
                }
            }
        )*
    };
}

define_syntax_node! {
    Name(NameNode),
    Document(DocumentNode),
    OperationDefinition(OperationDefinitionNode),
    VariableDefinition(VariableDefinitionNode),
    Variable(VariableNode),
    SelectionSet(SelectionSetNode),
    Field(FieldNode),
    Argument(ArgumentNode),
    FragmentSpread(FragmentSpreadNode),
    InlineFragment(InlineFragmentNode),
    FragmentDefinition(FragmentDefinitionNode),
    IntValue(IntValueNode),
    FloatValue(FloatValueNode),
    StringValue(StringValueNode),
    BooleanValue(BooleanValueNode),
    NullValue(NullValueNode),
    EnumValue(EnumValueNode),
    ListValue(ListValueNode),
    ObjectValue(ObjectValueNode),
    ObjectField(ObjectFieldNode),
    Directive(DirectiveNode),
    NamedType(NamedTypeNode),
    ListType(ListTypeNode),
    NonNullType(NonNullTypeNode),
    SchemaDefinition(SchemaDefinitionNode),
    OperationTypeDefinition(OperationTypeDefinitionNode),
    ScalarTypeDefinition(ScalarTypeDefinitionNode),
    ObjectTypeDefinition(ObjectTypeDefinitionNode),
    FieldDefinition(FieldDefinitionNode),
    InputValueDefinition(InputValueDefinitionNode),
    InterfaceTypeDefinition(InterfaceTypeDefinitionNode),
    UnionTypeDefinition(UnionTypeDefinitionNode),
    EnumTypeDefinition(EnumTypeDefinitionNode),
    EnumValueDefinition(EnumValueDefinitionNode),
    InputObjectTypeDefinition(InputObjectTypeDefinitionNode),
    DirectiveDefinition(DirectiveDefinitionNode),
    SchemaExtension(SchemaExtensionNode),
    ScalarTypeExtension(ScalarTypeExtensionNode),
    ObjectTypeExtension(ObjectTypeExtensionNode),
    InterfaceTypeExtension(InterfaceTypeExtensionNode),
    UnionTypeExtension(UnionTypeExtensionNode),
    EnumTypeExtension(EnumTypeExtensionNode),
    InputObjectTypeExtension(InputObjectTypeExtensionNode),
    SchemaCoordinate(SchemaCoordinateNode),
}

impl<'a> SyntaxNode<'a> {
    /// `true` if `self` and `other` refer to the very same node instance.
    ///
    /// Two nodes may be equal (`==`) without being the same instance.
    pub fn is_same(&self, other: &SyntaxNode<'_>) -> bool {
        self.kind() == other.kind() && std::ptr::eq(self.addr(), other.addr())
    }

    /// Narrow this node to `T`, or `None` if the kind does not match.
    pub fn cast<T: FromSyntaxNode<'a>>(self) -> Option<T> {
        T::from_syntax_node(self)
    }

    /// The name of a node that declares or references a named schema
    /// element (type definitions and extensions, field, argument, enum
    /// value and directive definitions, named types).
    pub fn declared_name(&self) -> Option<&'a NameNode> {
        match *self {
            Self::ScalarTypeDefinition(node) => Some(node.name()),
            Self::ObjectTypeDefinition(node) => Some(node.name()),
            Self::InterfaceTypeDefinition(node) => Some(node.name()),
            Self::UnionTypeDefinition(node) => Some(node.name()),
            Self::EnumTypeDefinition(node) => Some(node.name()),
            Self::InputObjectTypeDefinition(node) => Some(node.name()),
            Self::ScalarTypeExtension(node) => Some(node.name()),
            Self::ObjectTypeExtension(node) => Some(node.name()),
            Self::InterfaceTypeExtension(node) => Some(node.name()),
            Self::UnionTypeExtension(node) => Some(node.name()),
            Self::EnumTypeExtension(node) => Some(node.name()),
            Self::InputObjectTypeExtension(node) => Some(node.name()),
            Self::FieldDefinition(node) => Some(node.name()),
            Self::InputValueDefinition(node) => Some(node.name()),
            Self::EnumValueDefinition(node) => Some(node.name()),
            Self::DirectiveDefinition(node) => Some(node.name()),
            Self::NamedType(node) => Some(node.name()),
            _ => None,
        }
    }

    /// See [`AstNode::to_text`].
    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String {
        printer.render(*self, indented)
    }
}
