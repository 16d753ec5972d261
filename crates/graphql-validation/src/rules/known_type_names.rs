use crate::GraphQLError;
use crate::ValidationContext;
use crate::ValidationRule;
use crate::VisitFlow;
use crate::Visitor;
use graphql_core::ast::AstNode;

/// Every type named in a document (variable types, fragment type conditions)
/// must be defined in the schema.
#[derive(Clone, Copy, Debug)]
pub struct KnownTypeNames;
impl ValidationRule for KnownTypeNames {
    fn name(&self) -> &'static str {
        "KnownTypeNames"
    }

    fn create_visitor<'a>(
        &self,
        _ctx: &ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'a> {
        Box::new(KnownTypeNamesVisitor)
    }
}

struct KnownTypeNamesVisitor;
impl<'a> Visitor<'a> for KnownTypeNamesVisitor {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        match node {
            AstNode::NamedType(type_name)
                if ctx.schema().get_type(type_name).is_none() =>
                GraphQLError::new(unknown_type_message(type_name), [node]).into(),

            _ => VisitFlow::Continue,
        }
    }
}

pub fn unknown_type_message(type_name: &str) -> String {
    format!("Unknown type \"{type_name}\".")
}
