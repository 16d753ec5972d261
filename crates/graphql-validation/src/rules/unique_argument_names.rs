use crate::GraphQLError;
use crate::ValidationContext;
use crate::ValidationRule;
use crate::VisitFlow;
use crate::Visitor;
use graphql_core::ast::AstNode;
use std::collections::HashMap;

/// No field or directive may be passed the same argument more than once.
#[derive(Clone, Copy, Debug)]
pub struct UniqueArgumentNames;
impl ValidationRule for UniqueArgumentNames {
    fn name(&self) -> &'static str {
        "UniqueArgumentNames"
    }

    fn create_visitor<'a>(
        &self,
        _ctx: &ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'a> {
        Box::new(UniqueArgumentNamesVisitor {
            known_args: HashMap::new(),
        })
    }
}

struct UniqueArgumentNamesVisitor<'a> {
    /// The first argument seen under each name, within the current field or
    /// directive.
    known_args: HashMap<&'a str, AstNode<'a>>,
}
impl<'a> Visitor<'a> for UniqueArgumentNamesVisitor<'a> {
    fn enter(
        &mut self,
        _ctx: &ValidationContext<'a>,
        node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        match node {
            AstNode::Directive(_) | AstNode::Field(_) => {
                self.known_args.clear();
                VisitFlow::Continue
            },

            AstNode::Argument((arg_name, _)) => {
                if let Some(first_arg) = self.known_args.get(arg_name.as_str()) {
                    return GraphQLError::new(
                        duplicate_arg_message(arg_name),
                        [*first_arg, node],
                    ).into();
                }
                self.known_args.insert(arg_name.as_str(), node);
                VisitFlow::Continue
            },

            _ => VisitFlow::Continue,
        }
    }
}

pub fn duplicate_arg_message(arg_name: &str) -> String {
    format!("There can be only one argument named \"{arg_name}\".")
}
