use graphql_core::ast::AstNode;
use graphql_core::ast::Pos;
use thiserror::Error;

/// A single rule violation found while validating a document.
///
/// Carries a human-readable message and the document nodes the violation
/// was found at, in the order the rule reported them. [`locations()`] are
/// the source positions of those nodes; node kinds `graphql_parser` doesn't
/// track positions for (arguments, values, named types) are located at the
/// nearest enclosing node that has one.
///
/// [`locations()`]: GraphQLError::locations
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct GraphQLError<'a> {
    locations: Vec<Pos>,
    message: String,
    nodes: Vec<AstNode<'a>>,
}
impl<'a> GraphQLError<'a> {
    pub fn new(
        message: impl Into<String>,
        nodes: impl IntoIterator<Item = AstNode<'a>>,
    ) -> Self {
        let nodes: Vec<AstNode<'a>> = nodes.into_iter().collect();
        let locations = nodes.iter()
            .filter_map(|node| node.position())
            .collect();
        Self {
            locations,
            message: message.into(),
            nodes,
        }
    }

    pub fn locations(&self) -> &[Pos] {
        self.locations.as_slice()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn nodes(&self) -> &[AstNode<'a>] {
        self.nodes.as_slice()
    }

    pub(crate) fn with_fallback_location(mut self, fallback: Option<Pos>) -> Self {
        if self.locations.is_empty() {
            self.locations.extend(fallback);
        }
        self
    }
}
