use crate::ast::AstNode;

/// What a [`AstWalker`] wants done with the node it was just handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkFlow {
    Continue,

    /// Don't descend into this node's children, and don't call
    /// [`AstWalker::leave`] for it.
    Skip,
}

pub trait AstWalker<'a> {
    /// Called before any of `node`'s children are visited. `is_root` is true
    /// only for the node a [`walk()`] call was started from.
    fn enter(&mut self, node: AstNode<'a>, is_root: bool) -> WalkFlow;

    /// Called after all of `node`'s children have been visited.
    fn leave(&mut self, node: AstNode<'a>);
}

/// Depth-first, pre-order walk of `root` and all of its descendants.
///
/// Walkers may start a nested [`walk()`] from inside
/// [`AstWalker::enter`]; the outer walk resumes once the nested one returns.
pub fn walk<'a, W: AstWalker<'a> + ?Sized>(root: AstNode<'a>, walker: &mut W) {
    walk_node(root, true, walker);
}

fn walk_node<'a, W: AstWalker<'a> + ?Sized>(
    node: AstNode<'a>,
    is_root: bool,
    walker: &mut W,
) {
    if walker.enter(node, is_root) == WalkFlow::Skip {
        return;
    }
    for child in node.children() {
        walk_node(child, false, walker);
    }
    walker.leave(node);
}
