use crate::GraphQLError;
use crate::ValidationContext;
use crate::ValidationRule;
use crate::VisitFlow;
use crate::Visitor;
use graphql_core::ast::AstNode;

/// Every fragment spread must name a fragment defined in the document.
#[derive(Clone, Copy, Debug)]
pub struct KnownFragmentNames;
impl ValidationRule for KnownFragmentNames {
    fn name(&self) -> &'static str {
        "KnownFragmentNames"
    }

    fn create_visitor<'a>(
        &self,
        _ctx: &ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'a> {
        Box::new(KnownFragmentNamesVisitor)
    }
}

struct KnownFragmentNamesVisitor;
impl<'a> Visitor<'a> for KnownFragmentNamesVisitor {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        match node {
            AstNode::FragmentSpread(spread)
                if ctx.fragment(spread.fragment_name.as_str()).is_none() =>
                GraphQLError::new(
                    unknown_fragment_message(spread.fragment_name.as_str()),
                    [node],
                ).into(),

            _ => VisitFlow::Continue,
        }
    }
}

pub fn unknown_fragment_message(fragment_name: &str) -> String {
    format!("Unknown fragment \"{fragment_name}\".")
}
