//! `graphql_parser` v0.4 schema `Document` → libgraphql-syntax AST.

use crate::ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_description_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_directives_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_enum_values_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_field_defs_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::gp_input_values_to_ast;
use crate::compat_graphql_parser_v0_4::helpers::FromGpContext;
use crate::SyntaxError;

type GpSchemaDocument<'d> = graphql_parser::schema::Document<'d, String>;

/// Convert a `graphql_parser` schema `Document` to an [`ast::DocumentNode`].
///
/// The conversion is lossy:
/// - Locations are zero-width and derived from `Pos` only. Byte offsets
///   are 0; use [`from_graphql_parser_schema_ast_with_source`] to recover
///   them.
/// - Only declared names carry a location; referenced names do not.
/// - `ObjectValue` field ordering is alphabetical (from `BTreeMap`).
pub fn from_graphql_parser_schema_ast(
    doc: &GpSchemaDocument<'_>,
) -> Result<ast::DocumentNode, SyntaxError> {
    convert_document(doc, &FromGpContext::without_source())
}

/// Like [`from_graphql_parser_schema_ast`], but computes byte offsets from
/// the `source` text `doc` was parsed from.
pub fn from_graphql_parser_schema_ast_with_source(
    doc: &GpSchemaDocument<'_>,
    source: &str,
) -> Result<ast::DocumentNode, SyntaxError> {
    convert_document(doc, &FromGpContext::with_source(source))
}

fn convert_document(
    doc: &GpSchemaDocument<'_>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::DocumentNode, SyntaxError> {
    use graphql_parser::schema::Definition as GpDef;
    let definitions = doc
        .definitions
        .iter()
        .map(|def| -> Result<ast::DefinitionNode, SyntaxError> {
            Ok(match def {
                GpDef::SchemaDefinition(sd) => gp_schema_def_to_ast(sd, ctx)?.into(),
                GpDef::TypeDefinition(td) => gp_type_def_to_ast(td, ctx)?,
                GpDef::TypeExtension(te) => gp_type_ext_to_ast(te, ctx)?,
                GpDef::DirectiveDefinition(dd) => {
                    gp_directive_def_to_ast(dd, ctx)?.into()
                },
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ast::DocumentNode::new(definitions))
}

fn gp_schema_def_to_ast(
    sd: &graphql_parser::schema::SchemaDefinition<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::SchemaDefinitionNode, SyntaxError> {
    let mut operation_types = Vec::new();
    for (operation, type_name) in [
        (ast::OperationType::Query, &sd.query),
        (ast::OperationType::Mutation, &sd.mutation),
        (ast::OperationType::Subscription, &sd.subscription),
    ] {
        if let Some(type_name) = type_name {
            operation_types.push(ast::OperationTypeDefinitionNode::new(
                operation,
                ctx.named_type(type_name)?,
            ));
        }
    }
    Ok(ast::SchemaDefinitionNode::new(operation_types)
        .with_directives(gp_directives_to_ast(&sd.directives, ctx)?)
        .with_location(Some(ctx.location_from_pos(sd.position))))
}

fn gp_type_def_to_ast(
    td: &graphql_parser::schema::TypeDefinition<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::DefinitionNode, SyntaxError> {
    use graphql_parser::schema::TypeDefinition as GpTd;
    Ok(match td {
        GpTd::Scalar(st) => ast::ScalarTypeDefinitionNode::new(
            ctx.name_at(&st.name, st.position)?,
        )
        .with_description(gp_description_to_ast(&st.description))
        .with_directives(gp_directives_to_ast(&st.directives, ctx)?)
        .with_location(Some(ctx.location_from_pos(st.position)))
        .into(),

        GpTd::Object(ot) => ast::ObjectTypeDefinitionNode::new(
            ctx.name_at(&ot.name, ot.position)?,
        )
        .with_description(gp_description_to_ast(&ot.description))
        .with_interfaces(ctx.named_types(&ot.implements_interfaces)?)
        .with_directives(gp_directives_to_ast(&ot.directives, ctx)?)
        .with_fields(gp_field_defs_to_ast(&ot.fields, ctx)?)
        .with_location(Some(ctx.location_from_pos(ot.position)))
        .into(),

        GpTd::Interface(it) => ast::InterfaceTypeDefinitionNode::new(
            ctx.name_at(&it.name, it.position)?,
        )
        .with_description(gp_description_to_ast(&it.description))
        .with_interfaces(ctx.named_types(&it.implements_interfaces)?)
        .with_directives(gp_directives_to_ast(&it.directives, ctx)?)
        .with_fields(gp_field_defs_to_ast(&it.fields, ctx)?)
        .with_location(Some(ctx.location_from_pos(it.position)))
        .into(),

        GpTd::Union(ut) => ast::UnionTypeDefinitionNode::new(
            ctx.name_at(&ut.name, ut.position)?,
        )
        .with_description(gp_description_to_ast(&ut.description))
        .with_directives(gp_directives_to_ast(&ut.directives, ctx)?)
        .with_types(ctx.named_types(&ut.types)?)
        .with_location(Some(ctx.location_from_pos(ut.position)))
        .into(),

        GpTd::Enum(et) => ast::EnumTypeDefinitionNode::new(
            ctx.name_at(&et.name, et.position)?,
        )
        .with_description(gp_description_to_ast(&et.description))
        .with_directives(gp_directives_to_ast(&et.directives, ctx)?)
        .with_values(gp_enum_values_to_ast(&et.values, ctx)?)
        .with_location(Some(ctx.location_from_pos(et.position)))
        .into(),

        GpTd::InputObject(iot) => ast::InputObjectTypeDefinitionNode::new(
            ctx.name_at(&iot.name, iot.position)?,
        )
        .with_description(gp_description_to_ast(&iot.description))
        .with_directives(gp_directives_to_ast(&iot.directives, ctx)?)
        .with_fields(gp_input_values_to_ast(&iot.fields, ctx)?)
        .with_location(Some(ctx.location_from_pos(iot.position)))
        .into(),
    })
}

fn gp_type_ext_to_ast(
    te: &graphql_parser::schema::TypeExtension<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::DefinitionNode, SyntaxError> {
    use graphql_parser::schema::TypeExtension as GpTe;
    Ok(match te {
        GpTe::Scalar(ext) => ast::ScalarTypeExtensionNode::new(
            ctx.name_at(&ext.name, ext.position)?,
        )
        .with_directives(gp_directives_to_ast(&ext.directives, ctx)?)
        .with_location(Some(ctx.location_from_pos(ext.position)))
        .into(),

        GpTe::Object(ext) => ast::ObjectTypeExtensionNode::new(
            ctx.name_at(&ext.name, ext.position)?,
        )
        .with_interfaces(ctx.named_types(&ext.implements_interfaces)?)
        .with_directives(gp_directives_to_ast(&ext.directives, ctx)?)
        .with_fields(gp_field_defs_to_ast(&ext.fields, ctx)?)
        .with_location(Some(ctx.location_from_pos(ext.position)))
        .into(),

        GpTe::Interface(ext) => ast::InterfaceTypeExtensionNode::new(
            ctx.name_at(&ext.name, ext.position)?,
        )
        .with_interfaces(ctx.named_types(&ext.implements_interfaces)?)
        .with_directives(gp_directives_to_ast(&ext.directives, ctx)?)
        .with_fields(gp_field_defs_to_ast(&ext.fields, ctx)?)
        .with_location(Some(ctx.location_from_pos(ext.position)))
        .into(),

        GpTe::Union(ext) => ast::UnionTypeExtensionNode::new(
            ctx.name_at(&ext.name, ext.position)?,
        )
        .with_directives(gp_directives_to_ast(&ext.directives, ctx)?)
        .with_types(ctx.named_types(&ext.types)?)
        .with_location(Some(ctx.location_from_pos(ext.position)))
        .into(),

        GpTe::Enum(ext) => ast::EnumTypeExtensionNode::new(
            ctx.name_at(&ext.name, ext.position)?,
        )
        .with_directives(gp_directives_to_ast(&ext.directives, ctx)?)
        .with_values(gp_enum_values_to_ast(&ext.values, ctx)?)
        .with_location(Some(ctx.location_from_pos(ext.position)))
        .into(),

        GpTe::InputObject(ext) => ast::InputObjectTypeExtensionNode::new(
            ctx.name_at(&ext.name, ext.position)?,
        )
        .with_directives(gp_directives_to_ast(&ext.directives, ctx)?)
        .with_fields(gp_input_values_to_ast(&ext.fields, ctx)?)
        .with_location(Some(ctx.location_from_pos(ext.position)))
        .into(),
    })
}

fn gp_directive_def_to_ast(
    dd: &graphql_parser::schema::DirectiveDefinition<'_, String>,
    ctx: &FromGpContext<'_>,
) -> Result<ast::DirectiveDefinitionNode, SyntaxError> {
    let locations = dd
        .locations
        .iter()
        .map(|location| ctx.name(location.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ast::DirectiveDefinitionNode::new(
        ctx.name_at(&dd.name, dd.position)?,
        locations,
    )
    .with_description(gp_description_to_ast(&dd.description))
    .with_arguments(gp_input_values_to_ast(&dd.arguments, ctx)?)
    .with_repeatable(dd.repeatable)
    .with_location(Some(ctx.location_from_pos(dd.position))))
}
