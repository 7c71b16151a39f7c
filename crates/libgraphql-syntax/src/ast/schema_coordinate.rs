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

/// A compact reference to a single schema element.
///
/// The five valid shapes, as rendered by `Display`:
///
/// | Shape                  | Example          |
/// |------------------------|------------------|
/// | type                   | `Foo`            |
/// | field/enum value/input field | `Foo.bar`  |
/// | field argument         | `Foo.bar(baz:)`  |
/// | directive              | `@foo`           |
/// | directive argument     | `@foo(arg:)`     |
///
/// See
/// [Schema Coordinates](https://spec.graphql.org/September2025/#sec-Schema-Coordinates)
/// in the spec.
#[derive(Clone, Debug)]
pub struct SchemaCoordinateNode {
    location: Option<SourceLocation>,
    of_directive: bool,
    name: Arc<NameNode>,
    member_name: Option<Arc<NameNode>>,
    argument_name: Option<Arc<NameNode>>,
}

impl SchemaCoordinateNode {
    /// Fails with [`SyntaxError::InvalidSchemaCoordinate`] when the parts
    /// do not form one of the shapes listed on [`SchemaCoordinateNode`]:
    /// a directive coordinate cannot name a member, and an argument needs
    /// either a member or a directive to belong to.
    pub fn new(
        of_directive: bool,
        name: NameNode,
        member_name: Option<NameNode>,
        argument_name: Option<NameNode>,
    ) -> Result<Self, SyntaxError> {
        if of_directive && member_name.is_some() {
            return Err(SyntaxError::InvalidSchemaCoordinate {
                reason: format!(
                    "directive coordinate `@{name}` cannot name a member",
                ),
            });
        }
        if !of_directive && member_name.is_none() && argument_name.is_some() {
            return Err(SyntaxError::InvalidSchemaCoordinate {
                reason: format!(
                    "argument coordinate on type `{name}` must also name a \
                    field",
                ),
            });
        }
        Ok(Self {
            location: None,
            of_directive,
            name: Arc::new(name),
            member_name: member_name.map(Arc::new),
            argument_name: argument_name.map(Arc::new),
        })
    }

    /// `Type`
    pub fn for_type(type_name: NameNode) -> Self {
        Self {
            location: None,
            of_directive: false,
            name: Arc::new(type_name),
            member_name: None,
            argument_name: None,
        }
    }

    /// `Type.member`
    pub fn for_member(type_name: NameNode, member_name: NameNode) -> Self {
        Self {
            member_name: Some(Arc::new(member_name)),
            ..Self::for_type(type_name)
        }
    }

    /// `Type.field(argument:)`
    pub fn for_field_argument(
        type_name: NameNode,
        field_name: NameNode,
        argument_name: NameNode,
    ) -> Self {
        Self {
            argument_name: Some(Arc::new(argument_name)),
            ..Self::for_member(type_name, field_name)
        }
    }

    /// `@directive`
    pub fn for_directive(directive_name: NameNode) -> Self {
        Self {
            of_directive: true,
            ..Self::for_type(directive_name)
        }
    }

    /// `@directive(argument:)`
    pub fn for_directive_argument(
        directive_name: NameNode,
        argument_name: NameNode,
    ) -> Self {
        Self {
            argument_name: Some(Arc::new(argument_name)),
            ..Self::for_directive(directive_name)
        }
    }

    /// `true` when this coordinate refers to a directive (`@name`) rather
    /// than a type.
    pub fn of_directive(&self) -> bool {
        self.of_directive
    }

    /// The type or directive name.
    pub fn name(&self) -> &NameNode {
        &self.name
    }

    /// The field, enum value or input field name.
    pub fn member_name(&self) -> Option<&NameNode> {
        self.member_name.as_deref()
    }

    pub fn argument_name(&self) -> Option<&NameNode> {
        self.argument_name.as_deref()
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

    pub fn with_of_directive(
        &self,
        of_directive: bool,
    ) -> Result<Self, SyntaxError> {
        self.revalidated(Self {
            of_directive,
            ..self.clone()
        })
    }

    pub fn with_member_name(
        &self,
        member_name: Option<NameNode>,
    ) -> Result<Self, SyntaxError> {
        self.revalidated(Self {
            member_name: member_name.map(Arc::new),
            ..self.clone()
        })
    }

    pub fn with_argument_name(
        &self,
        argument_name: Option<NameNode>,
    ) -> Result<Self, SyntaxError> {
        self.revalidated(Self {
            argument_name: argument_name.map(Arc::new),
            ..self.clone()
        })
    }

    fn revalidated(&self, candidate: Self) -> Result<Self, SyntaxError> {
        Self::new(
            candidate.of_directive,
            candidate.name().clone(),
            candidate.member_name().cloned(),
            candidate.argument_name().cloned(),
        )?;
        Ok(candidate)
    }
}

impl_eq_ignoring_location!(SchemaCoordinateNode {
    of_directive,
    name,
    member_name,
    argument_name,
});

impl std::fmt::Display for SchemaCoordinateNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.of_directive {
            f.write_str("@")?;
        }
        write!(f, "{}", self.name)?;
        if let Some(member_name) = &self.member_name {
            write!(f, ".{member_name}")?;
        }
        if let Some(argument_name) = &self.argument_name {
            write!(f, "({argument_name}:)")?;
        }
        Ok(())
    }
}

#[inherent]
impl AstNode for SchemaCoordinateNode {
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn children(&self) -> SyntaxNodes<'_> {
        let mut children = SyntaxNodes::new();
        children.push(self.name.as_ref().into());
        if let Some(member_name) = &self.member_name {
            children.push(member_name.as_ref().into());
        }
        if let Some(argument_name) = &self.argument_name {
            children.push(argument_name.as_ref().into());
        }
        children
    }

    pub fn as_syntax_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::SchemaCoordinate(self)
    }

    pub fn kind(&self) -> SyntaxKind;

    pub fn to_text(
        &self,
        printer: &dyn SyntaxPrinter,
        indented: bool,
    ) -> String;
}
