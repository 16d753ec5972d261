use crate::GraphQLError;
use crate::ValidationContext;
use graphql_core::ast;
use graphql_core::ast::AstNode;

/// What a [`Visitor`] wants the driver to do after handling a node.
#[derive(Clone, Debug, PartialEq)]
pub enum VisitFlow<'a> {
    /// Keep walking: descend into the node's children (on enter).
    Continue,

    /// Don't descend into the node's children, and don't call
    /// [`Visitor::leave`] for it.
    Skip,

    /// Record these errors, then behave as [`VisitFlow::Skip`].
    Errors(Vec<GraphQLError<'a>>),
}
impl<'a> From<GraphQLError<'a>> for VisitFlow<'a> {
    fn from(error: GraphQLError<'a>) -> Self {
        Self::Errors(vec![error])
    }
}

/// The per-traversal half of a [`ValidationRule`].
///
/// A fresh visitor is created for every [`validate()`](crate::validate())
/// call, so any state it keeps lives for exactly one walk over the document.
/// Both handlers see every node; rules `match` on the [`AstNode`] variants
/// they care about and return [`VisitFlow::Continue`] for the rest.
pub trait Visitor<'a> {
    fn enter(
        &mut self,
        _ctx: &ValidationContext<'a>,
        _node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        VisitFlow::Continue
    }

    fn leave(
        &mut self,
        _ctx: &ValidationContext<'a>,
        _node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        VisitFlow::Continue
    }

    /// When true, top-level fragment definitions are not visited on their
    /// own. Instead, each fragment's body is visited at every spread of it,
    /// under the type information in effect at that spread.
    fn visit_spread_fragments(&self) -> bool {
        false
    }

    /// Asked at each spread, after [`Visitor::enter`] continued into it,
    /// whether the spread fragment's body should be inlined there. The
    /// spread's own directives are visited either way. Only consulted when
    /// [`Visitor::visit_spread_fragments`] is true.
    fn inline_spread(
        &mut self,
        _ctx: &ValidationContext<'a>,
        _spread: &'a ast::query::FragmentSpread,
    ) -> bool {
        true
    }
}

/// A named validation rule. Rules themselves are stateless; everything
/// they track while walking a document lives in the [`Visitor`] they create.
pub trait ValidationRule: Sync {
    fn name(&self) -> &'static str;

    fn create_visitor<'a>(
        &self,
        ctx: &ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'a>;
}
