use crate::ast::AstNode;
use crate::ast::AstWalker;
use crate::ast::Kind;
use crate::ast::WalkFlow;
use crate::ast::query;
use crate::ast::walk;

#[derive(Default)]
struct RecordingWalker {
    events: Vec<String>,
    roots: usize,
    skip_kind: Option<Kind>,
}
impl<'a> AstWalker<'a> for RecordingWalker {
    fn enter(&mut self, node: AstNode<'a>, is_root: bool) -> WalkFlow {
        if is_root {
            self.roots += 1;
        }
        self.events.push(format!("enter {}", node.kind()));
        if Some(node.kind()) == self.skip_kind {
            WalkFlow::Skip
        } else {
            WalkFlow::Continue
        }
    }

    fn leave(&mut self, node: AstNode<'a>) {
        self.events.push(format!("leave {}", node.kind()));
    }
}

#[test]
fn walks_depth_first_with_balanced_enter_leave() {
    let doc = query::parse("{ a { b } }").unwrap();
    let mut walker = RecordingWalker::default();
    walk(AstNode::Document(&doc), &mut walker);

    assert_eq!(walker.roots, 1);
    assert_eq!(walker.events, vec![
        "enter Document",
        "enter OperationDefinition",
        "enter SelectionSet",
        "enter Field",
        "enter SelectionSet",
        "enter Field",
        "leave Field",
        "leave SelectionSet",
        "leave Field",
        "leave SelectionSet",
        "leave OperationDefinition",
        "leave Document",
    ]);
}

#[test]
fn skipped_node_has_no_children_and_no_leave() {
    let doc = query::parse("{ a(x: 1) { b } }").unwrap();
    let mut walker = RecordingWalker {
        skip_kind: Some(Kind::Field),
        ..Default::default()
    };
    walk(AstNode::Document(&doc), &mut walker);

    assert_eq!(walker.events, vec![
        "enter Document",
        "enter OperationDefinition",
        "enter SelectionSet",
        "enter Field",
        "leave SelectionSet",
        "leave OperationDefinition",
        "leave Document",
    ]);
}

/// Walks every fragment definition again whenever a spread is entered.
struct ReentrantWalker<'a> {
    doc: &'a query::Document,
    entered_fields: Vec<&'a str>,
    nested_roots: usize,
}
impl<'a> AstWalker<'a> for ReentrantWalker<'a> {
    fn enter(&mut self, node: AstNode<'a>, is_root: bool) -> WalkFlow {
        match node {
            AstNode::Field(field) => self.entered_fields.push(field.name.as_str()),
            AstNode::FragmentDefinition(_) if is_root => self.nested_roots += 1,
            AstNode::FragmentDefinition(_) => return WalkFlow::Skip,
            AstNode::FragmentSpread(_) => {
                let doc = self.doc;
                for def in &doc.definitions {
                    if let query::Definition::Fragment(frag) = def {
                        walk(AstNode::FragmentDefinition(frag), self);
                    }
                }
            },
            _ => (),
        }
        WalkFlow::Continue
    }

    fn leave(&mut self, _node: AstNode<'a>) {}
}

#[test]
fn walker_may_start_nested_walks() {
    let doc = query::parse("{ a ...F c } fragment F on T { b }").unwrap();
    let mut walker = ReentrantWalker {
        doc: &doc,
        entered_fields: vec![],
        nested_roots: 0,
    };
    walk(AstNode::Document(&doc), &mut walker);

    assert_eq!(walker.entered_fields, vec!["a", "b", "c"]);
    assert_eq!(walker.nested_roots, 1);
}
