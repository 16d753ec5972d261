use crate::GraphQLError;
use crate::ValidationContext;
use crate::ValidationRule;
use crate::VisitFlow;
use crate::Visitor;
use graphql_core::ast;
use graphql_core::ast::AstNode;
use std::collections::HashSet;

/// Every variable used by an operation, directly or through the fragments it
/// spreads, must be defined by that operation.
///
/// Fragments are visited at their spreads, once per operation, so a fragment
/// shared by two operations is checked against each operation's variables.
#[derive(Clone, Copy, Debug)]
pub struct NoUndefinedVariables;
impl ValidationRule for NoUndefinedVariables {
    fn name(&self) -> &'static str {
        "NoUndefinedVariables"
    }

    fn create_visitor<'a>(
        &self,
        _ctx: &ValidationContext<'a>,
    ) -> Box<dyn Visitor<'a> + 'a> {
        Box::new(NoUndefinedVariablesVisitor {
            defined_var_names: HashSet::new(),
            fragment_depth: 0,
            operation: None,
            visited_fragment_names: HashSet::new(),
        })
    }
}

struct NoUndefinedVariablesVisitor<'a> {
    defined_var_names: HashSet<&'a str>,

    /// How many inlined fragment definitions enclose the current node.
    fragment_depth: usize,

    operation: Option<&'a ast::query::OperationDefinition>,
    visited_fragment_names: HashSet<&'a str>,
}
impl<'a> Visitor<'a> for NoUndefinedVariablesVisitor<'a> {
    fn enter(
        &mut self,
        _ctx: &ValidationContext<'a>,
        node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        match node {
            AstNode::FragmentDefinition(_) => {
                self.fragment_depth += 1;
                VisitFlow::Continue
            },

            AstNode::OperationDefinition(op) => {
                self.defined_var_names.clear();
                self.operation = Some(op);
                self.visited_fragment_names.clear();
                VisitFlow::Continue
            },

            AstNode::Variable(var_name) if !self.defined_var_names.contains(var_name) => {
                let op_name = self.operation.and_then(ast::query::operation_name);
                match (self.fragment_depth > 0, self.operation, op_name) {
                    (true, Some(op), Some(op_name)) => GraphQLError::new(
                        undefined_var_by_op_message(var_name, op_name),
                        [node, AstNode::OperationDefinition(op)],
                    ).into(),
                    _ => GraphQLError::new(undefined_var_message(var_name), [node]).into(),
                }
            },

            AstNode::VariableDefinition(var_def) => {
                self.defined_var_names.insert(var_def.name.as_str());
                VisitFlow::Continue
            },

            _ => VisitFlow::Continue,
        }
    }

    fn leave(
        &mut self,
        _ctx: &ValidationContext<'a>,
        node: AstNode<'a>,
    ) -> VisitFlow<'a> {
        if let AstNode::FragmentDefinition(_) = node {
            self.fragment_depth -= 1;
        }
        VisitFlow::Continue
    }

    fn visit_spread_fragments(&self) -> bool {
        true
    }

    /// A fragment spread more than once in an operation has its body checked
    /// at the first spread only. Later spreads still have their directives
    /// checked.
    fn inline_spread(
        &mut self,
        _ctx: &ValidationContext<'a>,
        spread: &'a ast::query::FragmentSpread,
    ) -> bool {
        self.visited_fragment_names.insert(spread.fragment_name.as_str())
    }
}

pub fn undefined_var_message(var_name: &str) -> String {
    format!("Variable \"${var_name}\" is not defined.")
}

pub fn undefined_var_by_op_message(var_name: &str, op_name: &str) -> String {
    format!("Variable \"${var_name}\" is not defined by operation \"{op_name}\".")
}
