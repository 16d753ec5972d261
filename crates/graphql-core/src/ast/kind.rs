/// The kind of an executable-document [`AstNode`](crate::ast::AstNode).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Argument,
    BooleanValue,
    Directive,
    Document,
    EnumValue,
    Field,
    FloatValue,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    IntValue,
    ListType,
    ListValue,
    NamedType,
    NonNullType,
    NullValue,
    ObjectField,
    ObjectValue,
    OperationDefinition,
    SelectionSet,
    StringValue,
    Variable,
    VariableDefinition,
}
impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Argument => "Argument",
            Kind::BooleanValue => "BooleanValue",
            Kind::Directive => "Directive",
            Kind::Document => "Document",
            Kind::EnumValue => "EnumValue",
            Kind::Field => "Field",
            Kind::FloatValue => "FloatValue",
            Kind::FragmentDefinition => "FragmentDefinition",
            Kind::FragmentSpread => "FragmentSpread",
            Kind::InlineFragment => "InlineFragment",
            Kind::IntValue => "IntValue",
            Kind::ListType => "ListType",
            Kind::ListValue => "ListValue",
            Kind::NamedType => "NamedType",
            Kind::NonNullType => "NonNullType",
            Kind::NullValue => "NullValue",
            Kind::ObjectField => "ObjectField",
            Kind::ObjectValue => "ObjectValue",
            Kind::OperationDefinition => "OperationDefinition",
            Kind::SelectionSet => "SelectionSet",
            Kind::StringValue => "StringValue",
            Kind::Variable => "Variable",
            Kind::VariableDefinition => "VariableDefinition",
        }
    }
}
impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
