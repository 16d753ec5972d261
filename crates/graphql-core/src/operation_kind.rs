use crate::ast;

/// The kind of a GraphQL operation, without any of the operation's content.
/// Useful for selecting the matching root operation type from a
/// [`Schema`](crate::schema::Schema).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The [`OperationKind`] of a parsed operation. The shorthand form
    /// (`{ ... }`) is always a query.
    pub fn from_ast(op: &ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition;
        match op {
            OperationDefinition::Mutation(_) => Self::Mutation,
            OperationDefinition::Query(_)
                | OperationDefinition::SelectionSet(_) => Self::Query,
            OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
