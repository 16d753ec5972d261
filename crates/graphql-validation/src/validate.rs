use crate::GraphQLError;
use crate::ValidationContext;
use crate::ValidationRule;
use crate::VisitFlow;
use crate::Visitor;
use crate::rules;
use graphql_core::ast;
use graphql_core::ast::AstNode;
use graphql_core::ast::AstWalker;
use graphql_core::ast::Pos;
use graphql_core::ast::WalkFlow;
use graphql_core::schema::Schema;

/// Validates `document` against `schema` using the
/// [specified rules](rules::specified_rules()).
///
/// Returns every error found; an empty list means the document is valid.
pub fn validate<'a>(
    schema: &'a Schema,
    document: &'a ast::query::Document,
) -> Vec<GraphQLError<'a>> {
    validate_with_rules(schema, document, rules::specified_rules())
}

/// Validates `document` against `schema` using only the given `rules`.
///
/// Each rule gets its own full walk over the document, in list order, so
/// errors come out grouped by rule and, within a rule, in the order the
/// walk reached them.
pub fn validate_with_rules<'a>(
    schema: &'a Schema,
    document: &'a ast::query::Document,
    rules: &[&dyn ValidationRule],
) -> Vec<GraphQLError<'a>> {
    let mut ctx = ValidationContext::new(schema, document);
    let mut visitors: Vec<(&'static str, Box<dyn Visitor<'a> + 'a>)> = rules.iter()
        .map(|rule| (rule.name(), rule.create_visitor(&ctx)))
        .collect();

    let mut errors = vec![];
    for (rule_name, visitor) in visitors.iter_mut() {
        let errors_before = errors.len();
        let mut traversal = RuleTraversal {
            ctx: &mut ctx,
            errors: &mut errors,
            inlining: vec![],
            located_ancestors: vec![],
            visit_spread_fragments: visitor.visit_spread_fragments(),
            visitor: visitor.as_mut(),
        };
        ast::walk(AstNode::Document(document), &mut traversal);
        tracing::debug!(
            rule = *rule_name,
            errors = errors.len() - errors_before,
            "validation rule finished"
        );
    }
    errors
}

/// One rule's walk over the document. Keeps the shared [`TypeInfo`] in step
/// with the walk and forwards every node to the rule's [`Visitor`].
///
/// [`TypeInfo`]: crate::TypeInfo
struct RuleTraversal<'r, 'a> {
    ctx: &'r mut ValidationContext<'a>,
    errors: &'r mut Vec<GraphQLError<'a>>,

    /// Names of the fragments currently being inlined, outermost first.
    inlining: Vec<&'a str>,

    /// Positions of the positioned nodes enclosing the current node.
    located_ancestors: Vec<Pos>,

    visit_spread_fragments: bool,
    visitor: &'r mut (dyn Visitor<'a> + 'a),
}
impl<'a> RuleTraversal<'_, 'a> {
    fn inline_fragment(&mut self, fragment_name: &'a str) {
        let Some(frag_def) = self.ctx.fragment(fragment_name) else {
            return;
        };
        if self.inlining.contains(&fragment_name) {
            tracing::debug!(
                fragment = fragment_name,
                "not inlining fragment into its own spread cycle"
            );
            return;
        }

        tracing::trace!(fragment = fragment_name, "inlining fragment");
        self.inlining.push(fragment_name);
        ast::walk(AstNode::FragmentDefinition(frag_def), self);
        self.inlining.pop();
    }

    /// Records errors a visitor reported while at `node`. Errors whose own
    /// nodes carry no position are located at `node`, or failing that at
    /// its nearest positioned ancestor.
    fn record(&mut self, node: AstNode<'a>, errors: Vec<GraphQLError<'a>>) {
        let fallback = node.position()
            .or_else(|| self.located_ancestors.last().copied());
        self.errors.extend(
            errors.into_iter().map(|error| error.with_fallback_location(fallback)),
        );
    }
}
impl<'a> AstWalker<'a> for RuleTraversal<'_, 'a> {
    fn enter(&mut self, node: AstNode<'a>, is_root: bool) -> WalkFlow {
        self.ctx.type_info.enter(node);

        // Top-level fragments are only visited through their spreads.
        if self.visit_spread_fragments
            && !is_root
            && matches!(node, AstNode::FragmentDefinition(_)) {
            self.ctx.type_info.leave(node);
            return WalkFlow::Skip;
        }

        match self.visitor.enter(self.ctx, node) {
            VisitFlow::Continue => (),
            VisitFlow::Errors(errors) => {
                self.record(node, errors);
                self.ctx.type_info.leave(node);
                return WalkFlow::Skip;
            },
            VisitFlow::Skip => {
                self.ctx.type_info.leave(node);
                return WalkFlow::Skip;
            },
        }

        if let Some(pos) = node.position() {
            self.located_ancestors.push(pos);
        }

        if self.visit_spread_fragments
            && let AstNode::FragmentSpread(spread) = node
            && self.visitor.inline_spread(self.ctx, spread) {
            self.inline_fragment(spread.fragment_name.as_str());
        }

        WalkFlow::Continue
    }

    fn leave(&mut self, node: AstNode<'a>) {
        if let VisitFlow::Errors(errors) = self.visitor.leave(self.ctx, node) {
            self.record(node, errors);
        }
        if node.position().is_some() {
            self.located_ancestors.pop();
        }
        self.ctx.type_info.leave(node);
    }
}
