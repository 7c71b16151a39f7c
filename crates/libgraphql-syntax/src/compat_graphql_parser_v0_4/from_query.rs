//! `graphql_parser` v0.4 query `Document` → libgraphql-syntax AST.

use crate::ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_arguments_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_directives_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_type_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_value_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::FromGpContext;
use crate::SyntaxError;

type GpQueryDocument<'d> = graphql_parser::query::Document<'d, String>;

/// Convert a `graphql_parser` query `Document` to an [`ast::DocumentNode`].
///
/// Shorthand operations (`{ ... }`) become `query` operations without a
/// name. Fields with an empty selection set get no selection set at all.
/// Location handling matches
/// [`from_graphql_parser_schema_ast`](super::from_graphql_parser_schema_ast).
pub fn from_graphql_parser_query_ast(
    doc: &GpQueryDocument<'_>,
) -> Result<ast::DocumentNode, SyntaxError> {
    convert_document(doc, &FromGpContext::without_source())
}

/// Like [`from_graphql_parser_query_ast`], but computes byte offsets from
/// the `source` text `doc` was parsed from.
pub fn from_graphql_parser_query_ast_with_source(
    doc: &GpQueryDocument<'_>,
    source: &str,
) -> Result<ast::DocumentNode, SyntaxError> {
    convert_document(doc, &FromGpContext::with_source(source))
}

fn convert_document(
    doc: &GpQueryDocument<'_>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::DocumentNode, SyntaxError> {
    use graphql_parser::query::Definition as GpDef;
    let definitions = doc
        .definitions
        .iter()
        .map(|def| -> Result<ast::DefinitionNode, SyntaxError> {
            Ok(match def {
                GpDef::Operation(op) => gp_operation_to_ast(op, ctx)?.into(),
                GpDef::Fragment(frag) => gp_fragment_def_to_ast(frag, ctx)?.into(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ast::DocumentNode::new(definitions))
}

fn gp_operation_to_ast(
    op: &graphql_parser::query::OperationDefinition<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::OperationDefinitionNode, SyntaxError> {
    use graphql_parser::query::OperationDefinition as GpOp;
    let (operation, position, name, variable_definitions, directives, selection_set) =
        match op {
            GpOp::SelectionSet(ss) => {
                return Ok(ast::OperationDefinitionNode::new(
                    ast::OperationType::Query,
                    gp_selection_set_to_ast(ss, ctx)?,
                )
                .with_location(Some(ctx.location_from_pos(ss.span.0))));
            },
            GpOp::Query(q) => (
                ast::OperationType::Query,
                q.position,
                &q.name,
                &q.variable_definitions,
                &q.directives,
                &q.selection_set,
            ),
            GpOp::Mutation(m) => (
                ast::OperationType::Mutation,
                m.position,
                &m.name,
                &m.variable_definitions,
                &m.directives,
                &m.selection_set,
            ),
            GpOp::Subscription(s) => (
                ast::OperationType::Subscription,
                s.position,
                &s.name,
                &s.variable_definitions,
                &s.directives,
                &s.selection_set,
            ),
        };

    let name = name
        .as_deref()
        .map(|name| ctx.name_at(name, position))
        .transpose()?;
    let variable_definitions = variable_definitions
        .iter()
        .map(|var_def| gp_variable_def_to_ast(var_def, ctx))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ast::OperationDefinitionNode::new(
        operation,
        gp_selection_set_to_ast(selection_set, ctx)?,
    )
    .with_name(name)
    .with_variable_definitions(variable_definitions)
    .with_directives(gp_directives_to_ast(directives, ctx)?)
    .with_location(Some(ctx.location_from_pos(position))))
}

fn gp_variable_def_to_ast(
    var_def: &graphql_parser::query::VariableDefinition<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::VariableDefinitionNode, SyntaxError> {
    let variable = ast::VariableNode::new(
        ctx.name_at(&var_def.name, var_def.position)?,
    )
    .with_location(Some(ctx.location_from_pos(var_def.position)));
    let default_value = var_def
        .default_value
        .as_ref()
        .map(|value| gp_value_to_ast(value, ctx))
        .transpose()?;
    Ok(ast::VariableDefinitionNode::new(
        variable,
        gp_type_to_ast(&var_def.var_type, ctx)?,
    )
    .with_default_value(default_value)
    .with_location(Some(ctx.location_from_pos(var_def.position))))
}

fn gp_fragment_def_to_ast(
    frag: &graphql_parser::query::FragmentDefinition<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::FragmentDefinitionNode, SyntaxError> {
    let graphql_parser::query::TypeCondition::On(type_name) =
        &frag.type_condition;
    Ok(ast::FragmentDefinitionNode::new(
        ctx.name_at(&frag.name, frag.position)?,
        ctx.named_type(type_name)?,
        gp_selection_set_to_ast(&frag.selection_set, ctx)?,
    )
    .with_directives(gp_directives_to_ast(&frag.directives, ctx)?)
    .with_location(Some(ctx.location_from_pos(frag.position))))
}

fn gp_selection_set_to_ast(
    ss: &graphql_parser::query::SelectionSet<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::SelectionSetNode, SyntaxError> {
    let selections = ss
        .items
        .iter()
        .map(|selection| gp_selection_to_ast(selection, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ast::SelectionSetNode::new(selections)
        .with_location(Some(ctx.location_from_pos(ss.span.0))))
}

fn gp_selection_to_ast(
    selection: &graphql_parser::query::Selection<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::SelectionNode, SyntaxError> {
    use graphql_parser::query::Selection as GpSel;
    Ok(match selection {
        GpSel::Field(field) => {
            let selection_set = if field.selection_set.items.is_empty() {
                None
            } else {
                Some(gp_selection_set_to_ast(&field.selection_set, ctx)?)
            };
            let alias = field
                .alias
                .as_deref()
                .map(|alias| ctx.name_at(alias, field.position))
                .transpose()?;
            ast::FieldNode::new(ctx.name_at(&field.name, field.position)?)
                .with_alias(alias)
                .with_arguments(gp_arguments_to_ast(&field.arguments, ctx)?)
                .with_directives(gp_directives_to_ast(&field.directives, ctx)?)
                .with_selection_set(selection_set)
                .with_location(Some(ctx.location_from_pos(field.position)))
                .into()
        },

        GpSel::FragmentSpread(spread) => ast::FragmentSpreadNode::new(
            ctx.name(&spread.fragment_name)?,
        )
        .with_directives(gp_directives_to_ast(&spread.directives, ctx)?)
        .with_location(Some(ctx.location_from_pos(spread.position)))
        .into(),

        GpSel::InlineFragment(inline) => {
            let type_condition = inline
                .type_condition
                .as_ref()
                .map(|graphql_parser::query::TypeCondition::On(type_name)| {
                    ctx.named_type(type_name)
                })
                .transpose()?;
            ast::InlineFragmentNode::new(
                gp_selection_set_to_ast(&inline.selection_set, ctx)?,
            )
            .with_type_condition(type_condition)
            .with_directives(gp_directives_to_ast(&inline.directives, ctx)?)
            .with_location(Some(ctx.location_from_pos(inline.position)))
            .into()
        },
    })
}
