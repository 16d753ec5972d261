use crate::GraphQLError;
use crate::ValidationContext;
use crate::ValidationRule;
use crate::VisitFlow;
use crate::Visitor;
use graphql_core::ast::AstNode;

/// Every argument passed to a field or directive must be one the field or
/// directive defines.
///
/// Arguments of fields or directives that aren't themselves known are not
/// checked (`FieldsOnCorrectType` reports unknown fields).
#[derive(Clone, Copy, Debug)]
pub struct KnownArgumentNames;
impl ValidationRule for KnownArgumentNames {
    fn name(&self) -> &'static str {
        "KnownArgumentNames"
    }

    fn create_visitor<'a>(
        &self,
        _ctx: &ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'a> {
        Box::new(KnownArgumentNamesVisitor {
            arg_owners: vec![],
        })
    }
}

struct KnownArgumentNamesVisitor<'a> {
    /// The fields and directives enclosing the current node, innermost last.
    arg_owners: Vec<AstNode<'a>>,
}
impl<'a> Visitor<'a> for KnownArgumentNamesVisitor<'a> {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        match node {
            AstNode::Directive(_) | AstNode::Field(_) => {
                self.arg_owners.push(node);
                VisitFlow::Continue
            },

            AstNode::Argument((arg_name, _)) if ctx.argument().is_none() =>
                match self.arg_owners.last() {
                    Some(AstNode::Directive(_)) => match ctx.directive() {
                        Some(directive) => GraphQLError::new(
                            unknown_directive_arg_message(arg_name, directive.name()),
                            [node],
                        ).into(),
                        None => VisitFlow::Continue,
                    },

                    Some(AstNode::Field(field)) => {
                        match (ctx.field_def(), ctx.parent_type()) {
                            (Some(_), Some(parent_type)) => GraphQLError::new(
                                unknown_arg_message(
                                    arg_name,
                                    field.name.as_str(),
                                    parent_type.name(),
                                ),
                                [node],
                            ).into(),
                            _ => VisitFlow::Continue,
                        }
                    },

                    _ => VisitFlow::Continue,
                },

            _ => VisitFlow::Continue,
        }
    }

    fn leave(
        &mut self,
        _ctx: &ValidationContext<'a>,
        node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        if let AstNode::Directive(_) | AstNode::Field(_) = node {
            self.arg_owners.pop();
        }
        VisitFlow::Continue
    }
}

pub fn unknown_arg_message(arg_name: &str, field_name: &str, type_name: &str) -> String {
    format!("Unknown argument \"{arg_name}\" on field \"{field_name}\" of type \"{type_name}\".")
}

pub fn unknown_directive_arg_message(arg_name: &str, directive_name: &str) -> String {
    format!("Unknown argument \"{arg_name}\" on directive \"@{directive_name}\".")
}
