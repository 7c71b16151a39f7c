use serde::Deserialize;
use serde::Serialize;

/// Discriminates the concrete variant of a syntax node.
///
/// Every node struct in [`crate::ast`] reports exactly one `SyntaxKind`
/// for its whole lifetime. The set is closed: adding a node type means
/// adding a variant here, which the compiler then forces every exhaustive
/// `match` (child enumeration, coordinate synthesis) to handle.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SyntaxKind {
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
    SchemaCoordinate,
}

impl SyntaxKind {
    /// The variant name, e.g. `"ObjectTypeDefinition"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Document => "Document",
            Self::OperationDefinition => "OperationDefinition",
            Self::VariableDefinition => "VariableDefinition",
            Self::Variable => "Variable",
            Self::SelectionSet => "SelectionSet",
            Self::Field => "Field",
            Self::Argument => "Argument",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::IntValue => "IntValue",
            Self::FloatValue => "FloatValue",
            Self::StringValue => "StringValue",
            Self::BooleanValue => "BooleanValue",
            Self::NullValue => "NullValue",
            Self::EnumValue => "EnumValue",
            Self::ListValue => "ListValue",
            Self::ObjectValue => "ObjectValue",
            Self::ObjectField => "ObjectField",
            Self::Directive => "Directive",
            Self::NamedType => "NamedType",
            Self::ListType => "ListType",
            Self::NonNullType => "NonNullType",
            Self::SchemaDefinition => "SchemaDefinition",
            Self::OperationTypeDefinition => "OperationTypeDefinition",
            Self::ScalarTypeDefinition => "ScalarTypeDefinition",
            Self::ObjectTypeDefinition => "ObjectTypeDefinition",
            Self::FieldDefinition => "FieldDefinition",
            Self::InputValueDefinition => "InputValueDefinition",
            Self::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            Self::UnionTypeDefinition => "UnionTypeDefinition",
            Self::EnumTypeDefinition => "EnumTypeDefinition",
            Self::EnumValueDefinition => "EnumValueDefinition",
            Self::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            Self::DirectiveDefinition => "DirectiveDefinition",
            Self::SchemaExtension => "SchemaExtension",
            Self::ScalarTypeExtension => "ScalarTypeExtension",
            Self::ObjectTypeExtension => "ObjectTypeExtension",
            Self::InterfaceTypeExtension => "InterfaceTypeExtension",
            Self::UnionTypeExtension => "UnionTypeExtension",
            Self::EnumTypeExtension => "EnumTypeExtension",
            Self::InputObjectTypeExtension => "InputObjectTypeExtension",
            Self::SchemaCoordinate => "SchemaCoordinate",
        }
    }

    /// `true` for the six named type definitions (scalar, object,
    /// interface, union, enum and input object).
    pub fn is_type_definition(&self) -> bool {
        matches!(
            self,
            Self::ScalarTypeDefinition
                | Self::ObjectTypeDefinition
                | Self::InterfaceTypeDefinition
                | Self::UnionTypeDefinition
                | Self::EnumTypeDefinition
                | Self::InputObjectTypeDefinition
        )
    }

    /// `true` for the six named type extensions.
    pub fn is_type_extension(&self) -> bool {
        matches!(
            self,
            Self::ScalarTypeExtension
                | Self::ObjectTypeExtension
                | Self::InterfaceTypeExtension
                | Self::UnionTypeExtension
                | Self::EnumTypeExtension
                | Self::InputObjectTypeExtension
        )
    }

    /// `true` for nodes that can appear where an input value is expected.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Self::Variable
                | Self::IntValue
                | Self::FloatValue
                | Self::StringValue
                | Self::BooleanValue
                | Self::NullValue
                | Self::EnumValue
                | Self::ListValue
                | Self::ObjectValue
        )
    }

    /// `true` for `NamedType`, `ListType` and `NonNullType`.
    pub fn is_type_reference(&self) -> bool {
        matches!(
            self,
            Self::NamedType | Self::ListType | Self::NonNullType
        )
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
