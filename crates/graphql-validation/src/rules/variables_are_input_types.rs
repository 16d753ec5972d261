use crate::GraphQLError;
use crate::ValidationContext;
use crate::ValidationRule;
use crate::VisitFlow;
use crate::Visitor;
use graphql_core::ast;
use graphql_core::ast::AstNode;

/// Variables can only be declared with scalar, enum, or input object types
/// (or lists and non-null wrappings of those).
#[derive(Clone, Copy, Debug)]
pub struct VariablesAreInputTypes;
impl ValidationRule for VariablesAreInputTypes {
    fn name(&self) -> &'static str {
        "VariablesAreInputTypes"
    }

    fn create_visitor<'a>(
        &self,
        _ctx: &ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'a> {
        Box::new(VariablesAreInputTypesVisitor)
    }
}

struct VariablesAreInputTypesVisitor;
impl<'a> Visitor<'a> for VariablesAreInputTypesVisitor {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        let AstNode::VariableDefinition(var_def) = node else {
            return VisitFlow::Continue;
        };

        // Unknown types are reported by `KnownTypeNames`.
        match ctx.schema().type_from_ast(&var_def.var_type) {
            Some(var_type) if !var_type.is_input_type() => GraphQLError::new(
                non_input_type_on_var_message(
                    var_def.name.as_str(),
                    ast::print_type(&var_def.var_type).as_str(),
                ),
                [AstNode::from_type(&var_def.var_type)],
            ).into(),

            _ => VisitFlow::Continue,
        }
    }
}

pub fn non_input_type_on_var_message(var_name: &str, type_str: &str) -> String {
    format!("Variable \"${var_name}\" cannot be non-input type \"{type_str}\".")
}
