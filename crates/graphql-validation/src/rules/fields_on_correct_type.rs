use crate::GraphQLError;
use crate::ValidationContext;
use crate::ValidationRule;
use crate::VisitFlow;
use crate::Visitor;
use graphql_core::ast::AstNode;

/// A field may only be selected on a type that defines it. Fields selected
/// where the parent type isn't known are left to other rules.
#[derive(Clone, Copy, Debug)]
pub struct FieldsOnCorrectType;
impl ValidationRule for FieldsOnCorrectType {
    fn name(&self) -> &'static str {
        "FieldsOnCorrectType"
    }

    fn create_visitor<'a>(
        &self,
        _ctx: &ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'a> {
        Box::new(FieldsOnCorrectTypeVisitor)
    }
}

struct FieldsOnCorrectTypeVisitor;
impl<'a> Visitor<'a> for FieldsOnCorrectTypeVisitor {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        let AstNode::Field(field) = node else {
            return VisitFlow::Continue;
        };
        match (ctx.parent_type(), ctx.field_def()) {
            (Some(parent_type), None) => GraphQLError::new(
                undefined_field_message(field.name.as_str(), parent_type.name()),
                [node],
            ).into(),

            _ => VisitFlow::Continue,
        }
    }
}

pub fn undefined_field_message(field_name: &str, type_name: &str) -> String {
    format!("Cannot query field \"{field_name}\" on \"{type_name}\".")
}
