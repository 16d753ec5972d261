use crate::ast::query;

/// Renders a type reference the way it is written in GraphQL source
/// (`Foo`, `[Foo!]`, `[[Foo]!]!`, ...).
pub fn print_type(type_: &query::Type) -> String {
    match type_ {
        query::Type::ListType(inner) => format!("[{}]", print_type(inner)),
        query::Type::NamedType(name) => name.to_string(),
        query::Type::NonNullType(inner) => format!("{}!", print_type(inner)),
    }
}
