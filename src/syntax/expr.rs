use super::token::Operator;

/// The canonical expression tree every notation maps onto. Leaves are
/// numbers; every `Binary` node owns exactly two children, so a built tree
/// is finite and acyclic by construction.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Number(f64),
    Binary {
        lhs: Box<Expr>,
        op: Operator,
        rhs: Box<Expr>,
    },
}
