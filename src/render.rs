use crate::syntax::Expr;

/// Stable handle for one node in a flattened tree view.
pub type NodeId = usize;

/// The read-only surface an external renderer consumes: one entry per node
/// with its display label and the ids of its children in left-to-right
/// order. Leaves have no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub id: NodeId,
    pub label: String,
    pub children: Vec<NodeId>,
}

/// Flattens the tree in pre-order, assigning ids in visit order. Two equal
/// trees always produce the same view.
pub fn view(expr: &Expr) -> Vec<NodeView> {
    let mut nodes = Vec::new();
    flatten(expr, &mut nodes);
    nodes
}

fn flatten(expr: &Expr, nodes: &mut Vec<NodeView>) -> NodeId {
    let id = nodes.len();

    match expr {
        Expr::Number(value) => nodes.push(NodeView {
            id,
            label: value.to_string(),
            children: Vec::new(),
        }),
        Expr::Binary { lhs, op, rhs } => {
            nodes.push(NodeView {
                id,
                label: op.to_string(),
                children: Vec::new(),
            });
            let lhs = flatten(lhs, nodes);
            let rhs = flatten(rhs, nodes);
            nodes[id].children = vec![lhs, rhs];
        }
    }

    id
}
