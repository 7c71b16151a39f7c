//! Immutable syntax tree types for GraphQL documents.
//!
//! Every node type is an immutable value:
//!
//! - Fields are private and exposed through accessors.
//! - Children are held behind [`Arc`](std::sync::Arc), so nodes are cheap
//!   to clone and safe to share across threads.
//! - `with_*` methods return a *new* node with exactly one field replaced.
//!   Every untouched child is shared with the original rather than copied.
//!
//! Each node carries an optional [`SourceLocation`](crate::SourceLocation).
//! Locations are informational only and are ignored by `==`.
//!
//! Generic consumers work through the [`AstNode`] trait and the borrowed
//! [`SyntaxNode`] sum type rather than special-casing each node type.
//!
//! # Example
//!
//! ```rust
//! use libgraphql_syntax::ast::FieldDefinitionNode;
//! use libgraphql_syntax::ast::NameNode;
//! use libgraphql_syntax::ast::NamedTypeNode;
//! use libgraphql_syntax::SyntaxKind;
//!
//! let field = FieldDefinitionNode::new(
//!     NameNode::new("hello").unwrap(),
//!     NamedTypeNode::new(NameNode::new("String").unwrap()),
//! );
//! let renamed = field.with_name(NameNode::new("goodbye").unwrap());
//!
//! assert_eq!(renamed.kind(), SyntaxKind::FieldDefinition);
//! assert_eq!(field.name().value(), "hello");
//! assert_eq!(renamed.name().value(), "goodbye");
//! assert!(std::ptr::eq(field.field_type(), renamed.field_type()));
//! ```

/// Implements `PartialEq` for a node by comparing every listed field.
/// The node's `location` is deliberately left out of the list.
macro_rules! impl_eq_ignoring_location {
    ($node:ident { $($field:ident),* $(,)? }) => {
        impl PartialEq for $node {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)*
            }
        }
    };
}

mod ast_node;
mod document;
mod executable_defs;
mod name;
mod schema_coordinate;
mod shared_nodes;
mod syntax_node;
mod type_annotation;
mod type_extensions;
mod type_system_defs;
mod values;

pub use ast_node::AstNode;
pub use document::DefinitionNode;
pub use document::DocumentNode;
pub use executable_defs::FieldNode;
pub use executable_defs::FragmentDefinitionNode;
pub use executable_defs::FragmentSpreadNode;
pub use executable_defs::InlineFragmentNode;
pub use executable_defs::OperationDefinitionNode;
pub use executable_defs::OperationType;
pub use executable_defs::SelectionNode;
pub use executable_defs::SelectionSetNode;
pub use executable_defs::VariableDefinitionNode;
pub use name::NameNode;
pub use schema_coordinate::SchemaCoordinateNode;
pub use shared_nodes::ArgumentNode;
pub use shared_nodes::DirectiveNode;
pub use shared_nodes::EnumValueDefinitionNode;
pub use shared_nodes::FieldDefinitionNode;
pub use shared_nodes::InputValueDefinitionNode;
pub use syntax_node::FromSyntaxNode;
pub use syntax_node::SyntaxNode;
pub use syntax_node::SyntaxNodes;
pub use type_annotation::ListTypeNode;
pub use type_annotation::NamedTypeNode;
pub use type_annotation::NonNullTypeNode;
pub use type_annotation::TypeNode;
pub use type_extensions::EnumTypeExtensionNode;
pub use type_extensions::InputObjectTypeExtensionNode;
pub use type_extensions::InterfaceTypeExtensionNode;
pub use type_extensions::ObjectTypeExtensionNode;
pub use type_extensions::ScalarTypeExtensionNode;
pub use type_extensions::SchemaExtensionNode;
pub use type_extensions::UnionTypeExtensionNode;
pub use type_system_defs::DirectiveDefinitionNode;
pub use type_system_defs::EnumTypeDefinitionNode;
pub use type_system_defs::InputObjectTypeDefinitionNode;
pub use type_system_defs::InterfaceTypeDefinitionNode;
pub use type_system_defs::ObjectTypeDefinitionNode;
pub use type_system_defs::OperationTypeDefinitionNode;
pub use type_system_defs::ScalarTypeDefinitionNode;
pub use type_system_defs::SchemaDefinitionNode;
pub use type_system_defs::UnionTypeDefinitionNode;
pub use values::BooleanValueNode;
pub use values::EnumValueNode;
pub use values::FloatValueNode;
pub use values::IntValueNode;
pub use values::ListValueNode;
pub use values::NullValueNode;
pub use values::ObjectFieldNode;
pub use values::ObjectValueNode;
pub use values::StringValueNode;
pub use values::ValueNode;
pub use values::VariableNode;

#[cfg(test)]
mod tests;
