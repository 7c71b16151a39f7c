use crate::ast::FromSyntaxNode;
use crate::ast::NameNode;
use crate::ast::SchemaCoordinateNode;
use crate::ast::SyntaxNode;
use crate::SyntaxError;
use crate::SyntaxKind;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// The explicit ancestor stack of a single traversal.
///
/// A traversal driver pushes each node as it enters it and pops it on the
/// way back out, so at any point the stack holds the path from the root
/// (bottom) to the node currently being visited (top). The navigator only
/// borrows the nodes; it never owns or outlives the tree they belong to.
///
/// A navigator is mutable, single-traversal state. Concurrent traversals
/// over the same tree must each use their own navigator.
///
/// ```rust
/// use libgraphql_syntax::ast::NameNode;
/// use libgraphql_syntax::SyntaxNavigator;
///
/// let abc = NameNode::new("abc").unwrap();
/// let def = NameNode::new("def").unwrap();
///
/// let mut navigator = SyntaxNavigator::new();
/// navigator.push(&abc);
/// navigator.push(&def);
///
/// assert_eq!(navigator.len(), 2);
/// assert!(navigator.peek().unwrap().is_same(&(&def).into()));
/// assert!(navigator.peek_at(1).unwrap().is_same(&(&abc).into()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SyntaxNavigator<'a> {
    ancestors: Vec<SyntaxNode<'a>>,
}

impl<'a> SyntaxNavigator<'a> {
    pub fn new() -> Self {
        Self {
            ancestors: Vec::new(),
        }
    }

    /// The number of nodes currently on the stack.
    pub fn len(&self) -> usize {
        self.ancestors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// Push `node` on top of the stack, making it the current node.
    pub fn push(&mut self, node: impl Into<SyntaxNode<'a>>) {
        self.ancestors.push(node.into());
    }

    /// Remove and return the current (top) node.
    pub fn pop(&mut self) -> Result<SyntaxNode<'a>, SyntaxError> {
        self.ancestors.pop().ok_or(SyntaxError::EmptyNavigator {
            operation: "pop",
        })
    }

    /// Return the current (top) node without removing it.
    pub fn peek(&self) -> Result<SyntaxNode<'a>, SyntaxError> {
        self.parent().ok_or(SyntaxError::EmptyNavigator {
            operation: "peek",
        })
    }

    /// Return the node `index` positions below the top of the stack
    /// (`0` is the top).
    pub fn peek_at(&self, index: usize) -> Result<SyntaxNode<'a>, SyntaxError> {
        self.iter()
            .nth(index)
            .ok_or(SyntaxError::PeekOutOfRange {
                index,
                depth: self.len(),
            })
    }

    /// The current (top) node, or `None` when the stack is empty.
    pub fn parent(&self) -> Option<SyntaxNode<'a>> {
        self.ancestors.last().copied()
    }

    /// Every node on the stack, from the top down to the root.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = SyntaxNode<'a>> + Clone + '_ {
        self.ancestors.iter().rev().copied()
    }

    /// The nearest node on the stack (scanning from the top) that matches
    /// `T`, or `None` if no node does.
    ///
    /// ```rust
    /// use libgraphql_syntax::ast::NameNode;
    /// use libgraphql_syntax::ast::NamedTypeNode;
    /// use libgraphql_syntax::ast::ObjectTypeDefinitionNode;
    /// use libgraphql_syntax::SyntaxNavigator;
    ///
    /// let named_type = NamedTypeNode::new(NameNode::new("abc").unwrap());
    /// let name = NameNode::new("def").unwrap();
    ///
    /// let mut navigator = SyntaxNavigator::new();
    /// navigator.push(&named_type);
    /// navigator.push(&name);
    ///
    /// assert_eq!(
    ///     navigator.ancestor::<&NamedTypeNode>(),
    ///     Some(&named_type),
    /// );
    /// assert_eq!(navigator.ancestor::<&ObjectTypeDefinitionNode>(), None);
    /// ```
    pub fn ancestor<T: FromSyntaxNode<'a>>(&self) -> Option<T> {
        self.ancestors::<T>().next()
    }

    /// Every node on the stack that matches `T`, nearest first.
    ///
    /// The returned iterator borrows the navigator and can be cloned to
    /// restart the scan; calling `ancestors` again yields a fresh scan.
    pub fn ancestors<T: FromSyntaxNode<'a>>(&self) -> Ancestors<'_, 'a, T> {
        Ancestors {
            inner: self.ancestors.iter().rev(),
            _matching: PhantomData,
        }
    }

    /// Drop every node from the stack.
    pub fn clear(&mut self) {
        self.ancestors.clear();
    }

    /// Build the schema coordinate of the schema element the current path
    /// points into.
    ///
    /// The stack is scanned once from the top down. Nodes that play no
    /// part in a coordinate (names, type references, values, directives,
    /// ...) are skipped. The first input value, field, enum value,
    /// directive or type definition found fixes the coordinate's leaf;
    /// the scan then continues to the nearest node that can own that
    /// leaf:
    ///
    /// | Leaf                 | Owner                  | Result          |
    /// |----------------------|------------------------|-----------------|
    /// | input value          | field, then type       | `Type.f(arg:)`  |
    /// | input value          | directive definition   | `@dir(arg:)`    |
    /// | input value          | input object type      | `Type.field`    |
    /// | field / enum value   | type                   | `Type.member`   |
    /// | directive definition |                        | `@dir`          |
    /// | type definition      |                        | `Type`          |
    ///
    /// Type extensions count as types. Once a leaf is chosen the scan never
    /// backtracks to reconsider it.
    ///
    /// Fails with [`SyntaxError::EmptyNavigator`] on an empty stack and
    /// with [`SyntaxError::UnrecognizedCoordinatePath`] when no row of the
    /// table above matches.
    pub fn create_schema_coordinate(
        &self,
    ) -> Result<SchemaCoordinateNode, SyntaxError> {
        if self.is_empty() {
            return Err(SyntaxError::EmptyNavigator {
                operation: "create_schema_coordinate",
            });
        }

        let mut scan = CoordinateScan::Leaf;
        for node in self.iter() {
            if let Some(type_name) = type_name_of(node) {
                return match scan.into_type_coordinate(node.kind(), type_name) {
                    Ok(coordinate) => {
                        log::trace!(
                            "Created schema coordinate `{coordinate}` from a \
                            path of {} nodes.",
                            self.len(),
                        );
                        Ok(coordinate)
                    },
                    Err(reason) => {
                        log::trace!(
                            "Failed to create a schema coordinate: {reason}",
                        );
                        Err(SyntaxError::UnrecognizedCoordinatePath { reason })
                    },
                };
            }

            scan = match (scan, node) {
                (CoordinateScan::Leaf, SyntaxNode::InputValueDefinition(def)) => {
                    CoordinateScan::ArgumentOwner {
                        argument: def.name(),
                    }
                },

                (CoordinateScan::Leaf, SyntaxNode::FieldDefinition(def)) => {
                    CoordinateScan::MemberOwner {
                        member: def.name(),
                        argument: None,
                    }
                },

                (CoordinateScan::Leaf, SyntaxNode::EnumValueDefinition(def)) => {
                    CoordinateScan::MemberOwner {
                        member: def.name(),
                        argument: None,
                    }
                },

                (
                    CoordinateScan::ArgumentOwner { argument },
                    SyntaxNode::FieldDefinition(def),
                ) => CoordinateScan::MemberOwner {
                    member: def.name(),
                    argument: Some(argument),
                },

                (CoordinateScan::Leaf, SyntaxNode::DirectiveDefinition(def)) => {
                    return Ok(SchemaCoordinateNode::for_directive(
                        def.name().clone(),
                    ));
                },

                (
                    CoordinateScan::ArgumentOwner { argument },
                    SyntaxNode::DirectiveDefinition(def),
                ) => {
                    return Ok(SchemaCoordinateNode::for_directive_argument(
                        def.name().clone(),
                        argument.clone(),
                    ));
                },

                // Anything else is noise relative to the role we are
                // currently looking for.
                (scan, _) => scan,
            };
        }

        let reason = match scan {
            CoordinateScan::Leaf => format!(
                "none of the {} nodes on the stack is a type, field, \
                argument, enum value or directive definition",
                self.len(),
            ),
            CoordinateScan::ArgumentOwner { argument } => format!(
                "input value `{argument}` has no enclosing field, directive \
                or type definition",
            ),
            CoordinateScan::MemberOwner { member, .. } => format!(
                "`{member}` has no enclosing type definition",
            ),
        };
        log::trace!("Failed to create a schema coordinate: {reason}");
        Err(SyntaxError::UnrecognizedCoordinatePath { reason })
    }
}

/// Progress of a single top-down coordinate scan.
#[derive(Clone, Copy)]
enum CoordinateScan<'a> {
    /// No role-bearing node has been seen yet.
    Leaf,

    /// An input value was found; waiting for the field, directive or type
    /// that owns it.
    ArgumentOwner {
        argument: &'a NameNode,
    },

    /// A field or enum value was found; waiting for its type.
    MemberOwner {
        member: &'a NameNode,
        argument: Option<&'a NameNode>,
    },
}

impl CoordinateScan<'_> {
    /// Finish the scan at a type definition or extension of `type_kind`.
    /// On failure, returns the reason the path has no coordinate.
    fn into_type_coordinate(
        self,
        type_kind: SyntaxKind,
        type_name: &NameNode,
    ) -> Result<SchemaCoordinateNode, String> {
        let type_name = type_name.clone();
        Ok(match self {
            Self::Leaf => SchemaCoordinateNode::for_type(type_name),

            // Only an input object owns input values directly, as its fields.
            Self::ArgumentOwner { argument } => {
                if !matches!(
                    type_kind,
                    SyntaxKind::InputObjectTypeDefinition
                        | SyntaxKind::InputObjectTypeExtension
                ) {
                    return Err(format!(
                        "input value `{argument}` sits directly inside \
                        {type_kind} `{type_name}` with no enclosing field or \
                        directive definition",
                    ));
                }
                SchemaCoordinateNode::for_member(type_name, argument.clone())
            },

            Self::MemberOwner { member, argument: None } => {
                SchemaCoordinateNode::for_member(type_name, member.clone())
            },

            Self::MemberOwner { member, argument: Some(argument) } => {
                SchemaCoordinateNode::for_field_argument(
                    type_name,
                    member.clone(),
                    argument.clone(),
                )
            },
        })
    }
}

fn type_name_of<'a>(node: SyntaxNode<'a>) -> Option<&'a NameNode> {
    let kind = node.kind();
    if kind.is_type_definition() || kind.is_type_extension() {
        node.declared_name()
    } else {
        None
    }
}

/// Iterator returned by [`SyntaxNavigator::ancestors`].
pub struct Ancestors<'nav, 'a, T> {
    inner: std::iter::Rev<std::slice::Iter<'nav, SyntaxNode<'a>>>,
    _matching: PhantomData<fn() -> T>,
}

impl<T> Clone for Ancestors<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _matching: PhantomData,
        }
    }
}

impl<'a, T: FromSyntaxNode<'a>> Iterator for Ancestors<'_, 'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.by_ref().find_map(|node| T::from_syntax_node(*node))
    }
}

impl<'a, T: FromSyntaxNode<'a>> FusedIterator for Ancestors<'_, 'a, T> {}
