use crate::ast;
use crate::SourceLocation;
use crate::SourcePosition;
use crate::SyntaxError;

/// Shared state for converting `graphql_parser` documents.
///
/// `graphql_parser::Pos` only carries 1-based line and column numbers.
/// When the original source text is available, byte offsets are
/// recovered from it; otherwise they are left at 0.
pub(super) struct FromGpContext<'src> {
    source: Option<&'src str>,
    line_starts: Vec<usize>,
}

impl<'src> FromGpContext<'src> {
    pub(super) fn without_source() -> Self {
        Self {
            source: None,
            line_starts: Vec::new(),
        }
    }

    pub(super) fn with_source(source: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self {
            source: Some(source),
            line_starts,
        }
    }

    /// A zero-width location at `pos`, converted to 0-based line and
    /// column.
    pub(super) fn location_from_pos(
        &self,
        pos: graphql_parser::Pos,
    ) -> SourceLocation {
        let line = pos.line.saturating_sub(1);
        let column = pos.column.saturating_sub(1);
        SourceLocation::at(SourcePosition::new(
            line,
            column,
            self.byte_offset(line, column),
        ))
    }

    fn byte_offset(&self, line: usize, column: usize) -> usize {
        let (Some(source), Some(&line_start)) =
            (self.source, self.line_starts.get(line)) else {
            return 0;
        };
        let line_text = &source[line_start..];
        line_start + line_text
            .char_indices()
            .nth(column)
            .map(|(idx, _)| idx)
            .unwrap_or(line_text.len())
    }

    /// Convert a referenced name, which `graphql_parser` gives no position
    /// for.
    pub(super) fn name(&self, value: &str) -> Result<ast::NameNode, SyntaxError> {
        ast::NameNode::new(value)
    }

    /// Convert the declared name of a node positioned at `pos`.
    pub(super) fn name_at(
        &self,
        value: &str,
        pos: graphql_parser::Pos,
    ) -> Result<ast::NameNode, SyntaxError> {
        Ok(ast::NameNode::new(value)?
            .with_location(Some(self.location_from_pos(pos))))
    }

    pub(super) fn named_type(
        &self,
        value: &str,
    ) -> Result<ast::NamedTypeNode, SyntaxError> {
        Ok(ast::NamedTypeNode::new(self.name(value)?))
    }

    pub(super) fn named_types(
        &self,
        values: &[String],
    ) -> Result<Vec<ast::NamedTypeNode>, SyntaxError> {
        values.iter().map(|value| self.named_type(value)).collect()
    }
}

pub(super) fn gp_description_to_ast(
    description: &Option<String>,
) -> Option<ast::StringValueNode> {
    description.as_deref().map(ast::StringValueNode::new)
}

/// Convert a `graphql_parser::query::Value` to an `ast::ValueNode`.
pub(super) fn gp_value_to_ast(
    value: &graphql_parser::query::Value<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::ValueNode, SyntaxError> {
    use graphql_parser::query::Value as GpValue;
    Ok(match value {
        GpValue::Boolean(value) => ast::BooleanValueNode::new(*value).into(),
        GpValue::Enum(value) => ast::EnumValueNode::new(value.as_str()).into(),
        GpValue::Float(value) => ast::FloatValueNode::new(*value).into(),
        GpValue::Int(number) => {
            ast::IntValueNode::new(number.as_i64().unwrap_or_default()).into()
        },
        GpValue::List(items) => ast::ListValueNode::new(
            items
                .iter()
                .map(|item| gp_value_to_ast(item, ctx))
                .collect::<Result<Vec<_>, _>>()?,
        ).into(),
        GpValue::Null => ast::NullValueNode::new().into(),
        GpValue::Object(fields) => ast::ObjectValueNode::new(
            fields
                .iter()
                .map(|(name, value)| -> Result<_, SyntaxError> {
                    Ok(ast::ObjectFieldNode::new(
                        ctx.name(name)?,
                        gp_value_to_ast(value, ctx)?,
                    ))
                })
                .collect::<Result<Vec<_>, _>>()?,
        ).into(),
        GpValue::String(value) => ast::StringValueNode::new(value.as_str()).into(),
        GpValue::Variable(name) => ast::VariableNode::new(ctx.name(name)?).into(),
    })
}

/// Convert a `graphql_parser::schema::Type` to an `ast::TypeNode`.
pub(super) fn gp_type_to_ast(
    ty: &graphql_parser::schema::Type<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::TypeNode, SyntaxError> {
    use graphql_parser::schema::Type as GpType;
    Ok(match ty {
        GpType::NamedType(name) => ctx.named_type(name)?.into(),
        GpType::ListType(inner) => {
            ast::ListTypeNode::new(gp_type_to_ast(inner, ctx)?).into()
        },
        GpType::NonNullType(inner) => {
            ast::NonNullTypeNode::new(gp_type_to_ast(inner, ctx)?)?.into()
        },
    })
}

pub(super) fn gp_arguments_to_ast(
    arguments: &[(String, graphql_parser::query::Value<'_, String>)],
    ctx: &FromGpContext<'_>,
) -> Result<Vec<ast::ArgumentNode>, SyntaxError> {
    arguments
        .iter()
        .map(|(name, value)| -> Result<_, SyntaxError> {
            Ok(ast::ArgumentNode::new(
                ctx.name(name)?,
                gp_value_to_ast(value, ctx)?,
            ))
        })
        .collect()
}

/// Convert a slice of `graphql_parser` directives to
/// `Vec<ast::DirectiveNode>`.
pub(super) fn gp_directives_to_ast(
    directives: &[graphql_parser::query::Directive<'_, String>],
    ctx: &FromGpContext<'_>,
) -> Result<Vec<ast::DirectiveNode>, SyntaxError> {
    directives
        .iter()
        .map(|directive| -> Result<_, SyntaxError> {
            Ok(ast::DirectiveNode::new(ctx.name_at(&directive.name, directive.position)?)
                .with_arguments(gp_arguments_to_ast(&directive.arguments, ctx)?)
                .with_location(Some(ctx.location_from_pos(directive.position))))
        })
        .collect()
}

/// Convert a `graphql_parser::schema::InputValue` to an
/// `ast::InputValueDefinitionNode`.
pub(super) fn gp_input_value_to_ast(
    input_value: &graphql_parser::schema::InputValue<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::InputValueDefinitionNode, SyntaxError> {
    let default_value = input_value
        .default_value
        .as_ref()
        .map(|value| gp_value_to_ast(value, ctx))
        .transpose()?;
    Ok(ast::InputValueDefinitionNode::new(
        ctx.name_at(&input_value.name, input_value.position)?,
        gp_type_to_ast(&input_value.value_type, ctx)?,
    )
    .with_description(gp_description_to_ast(&input_value.description))
    .with_default_value(default_value)
    .with_directives(gp_directives_to_ast(&input_value.directives, ctx)?)
    .with_location(Some(ctx.location_from_pos(input_value.position))))
}

pub(super) fn gp_input_values_to_ast(
    input_values: &[graphql_parser::schema::InputValue<'_, String>],
    ctx: &FromGpContext<'_>,
) -> Result<Vec<ast::InputValueDefinitionNode>, SyntaxError> {
    input_values
        .iter()
        .map(|input_value| gp_input_value_to_ast(input_value, ctx))
        .collect()
}

/// Convert a `graphql_parser::schema::Field` to an
/// `ast::FieldDefinitionNode`.
pub(super) fn gp_field_def_to_ast(
    field: &graphql_parser::schema::Field<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::FieldDefinitionNode, SyntaxError> {
    Ok(ast::FieldDefinitionNode::new(
        ctx.name_at(&field.name, field.position)?,
        gp_type_to_ast(&field.field_type, ctx)?,
    )
    .with_description(gp_description_to_ast(&field.description))
    .with_arguments(gp_input_values_to_ast(&field.arguments, ctx)?)
    .with_directives(gp_directives_to_ast(&field.directives, ctx)?)
    .with_location(Some(ctx.location_from_pos(field.position))))
}

pub(super) fn gp_field_defs_to_ast(
    fields: &[graphql_parser::schema::Field<'_, String>],
    ctx: &FromGpContext<'_>,
) -> Result<Vec<ast::FieldDefinitionNode>, SyntaxError> {
    fields
        .iter()
        .map(|field| gp_field_def_to_ast(field, ctx))
        .collect()
}

/// Convert `graphql_parser::schema::EnumValue`s to
/// `ast::EnumValueDefinitionNode`s.
pub(super) fn gp_enum_values_to_ast(
    values: &[graphql_parser::schema::EnumValue<'_, String>],
    ctx: &FromGpContext<'_>,
) -> Result<Vec<ast::EnumValueDefinitionNode>, SyntaxError> {
    values
        .iter()
        .map(|value| -> Result<_, SyntaxError> {
            Ok(ast::EnumValueDefinitionNode::new(ctx.name_at(&value.name, value.position)?)
                .with_description(gp_description_to_ast(&value.description))
                .with_directives(gp_directives_to_ast(&value.directives, ctx)?)
                .with_location(Some(ctx.location_from_pos(value.position))))
        })
        .collect()
}
