//! `'static`/`String` aliases over `graphql_parser`'s AST, plus a
//! kind-tagged, borrowed view of executable-document nodes ([`AstNode`]) and a
//! depth-first walker over that view ([`walk`]).

mod ast_node;
mod kind;
mod printer;
mod walk;

pub use ast_node::AstNode;
pub use graphql_parser::Pos;
pub use kind::Kind;
pub use printer::print_type;
pub use walk::AstWalker;
pub use walk::WalkFlow;
pub use walk::walk;

pub mod query {
    pub use graphql_parser::query::Number;
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
    pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
    pub type Mutation = graphql_parser::query::Mutation<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Query = graphql_parser::query::Query<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Subscription = graphql_parser::query::Subscription<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

    /// Parses an executable document (operations and fragments).
    pub fn parse(content: &str) -> Result<Document, ParseError> {
        graphql_parser::parse_query::<String>(content)
            .map(|doc| doc.into_static())
    }

    /// The name of an operation, if it has one. Shorthand (`{ ... }`)
    /// operations never do.
    pub fn operation_name(op: &OperationDefinition) -> Option<&str> {
        match op {
            OperationDefinition::Mutation(m) => m.name.as_deref(),
            OperationDefinition::Query(q) => q.name.as_deref(),
            OperationDefinition::SelectionSet(_) => None,
            OperationDefinition::Subscription(s) => s.name.as_deref(),
        }
    }

    /// The variable definitions, directives, and top-level selection set of
    /// an operation, regardless of which operation form it was written in.
    pub fn operation_parts(
        op: &OperationDefinition,
    ) -> (&[VariableDefinition], &[Directive], &SelectionSet) {
        match op {
            OperationDefinition::Mutation(m) =>
                (m.variable_definitions.as_slice(), m.directives.as_slice(), &m.selection_set),
            OperationDefinition::Query(q) =>
                (q.variable_definitions.as_slice(), q.directives.as_slice(), &q.selection_set),
            OperationDefinition::SelectionSet(sel_set) =>
                (&[][..], &[][..], sel_set),
            OperationDefinition::Subscription(s) =>
                (s.variable_definitions.as_slice(), s.directives.as_slice(), &s.selection_set),
        }
    }

    pub fn operation_position(op: &OperationDefinition) -> super::Pos {
        match op {
            OperationDefinition::Mutation(m) => m.position,
            OperationDefinition::Query(q) => q.position,
            OperationDefinition::SelectionSet(sel_set) => sel_set.span.0,
            OperationDefinition::Subscription(s) => s.position,
        }
    }
}

pub mod schema {
    pub use graphql_parser::schema::DirectiveLocation;
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumTypeExtension = graphql_parser::schema::EnumTypeExtension<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = graphql_parser::schema::InputObjectTypeExtension<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type InterfaceTypeExtension = graphql_parser::schema::InterfaceTypeExtension<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type ScalarTypeExtension = graphql_parser::schema::ScalarTypeExtension<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
    pub type UnionTypeExtension = graphql_parser::schema::UnionTypeExtension<'static, String>;
}

#[cfg(test)]
mod tests;
