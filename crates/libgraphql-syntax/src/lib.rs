//! An immutable GraphQL syntax tree and the navigation engine used to walk
//! it.
//!
//! This crate provides:
//!
//! - [`ast`]: one immutable node type per GraphQL construct, a closed
//!   [`SyntaxKind`] tag, generic child enumeration, and structurally
//!   shared `with_*` updates.
//! - [`SyntaxNavigator`]: the ancestor stack a traversal pushes nodes onto,
//!   with typed ancestor queries and schema coordinate synthesis
//!   (`Type.field(arg:)`, `@directive(arg:)`, ...).
//! - [`walk`]: a depth-first traversal driver built on the navigator.
//! - [`compat_graphql_parser_v0_4`]: conversion from `graphql_parser`
//!   documents, so trees can be built from GraphQL source text.

pub mod ast;
pub mod compat_graphql_parser_v0_4;
mod source_location;
mod source_position;
mod syntax_error;
mod syntax_kind;
mod syntax_navigator;
mod syntax_printer;
mod syntax_walker;

pub use source_location::SourceLocation;
pub use source_position::SourcePosition;
pub use syntax_error::SyntaxError;
pub use syntax_error::SyntaxErrorCategory;
pub use syntax_kind::SyntaxKind;
pub use syntax_navigator::Ancestors;
pub use syntax_navigator::SyntaxNavigator;
pub use syntax_printer::SyntaxPrinter;
pub use syntax_walker::walk;
pub use syntax_walker::walk_with;
pub use syntax_walker::SyntaxVisitor;
pub use syntax_walker::VisitFlow;

#[cfg(test)]
mod tests;
