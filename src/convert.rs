use crate::syntax::{Assoc, Expr, Notation, Operator};

/// Writes the tree out as text in the given notation. Tokens are separated
/// by single spaces; infix output carries the minimal parentheses needed to
/// re-parse into the same tree.
pub fn convert(expr: &Expr, notation: Notation) -> String {
    match notation {
        Notation::Infix => to_infix(expr),
        Notation::Prefix => to_prefix(expr),
        Notation::Postfix => to_postfix(expr),
    }
}

/// In-order traversal: left, operator, right.
pub fn to_infix(expr: &Expr) -> String {
    match expr {
        Expr::Number(value) => value.to_string(),
        Expr::Binary { lhs, op, rhs } => {
            let lhs = infix_operand(lhs, *op, Side::Left);
            let rhs = infix_operand(rhs, *op, Side::Right);
            format!("{lhs} {op} {rhs}")
        }
    }
}

/// Pre-order traversal: operator, left, right.
pub fn to_prefix(expr: &Expr) -> String {
    match expr {
        Expr::Number(value) => value.to_string(),
        Expr::Binary { lhs, op, rhs } => {
            format!("{op} {} {}", to_prefix(lhs), to_prefix(rhs))
        }
    }
}

/// Post-order traversal: left, right, operator.
pub fn to_postfix(expr: &Expr) -> String {
    match expr {
        Expr::Number(value) => value.to_string(),
        Expr::Binary { lhs, op, rhs } => {
            format!("{} {} {op}", to_postfix(lhs), to_postfix(rhs))
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn infix_operand(child: &Expr, parent: Operator, side: Side) -> String {
    let text = to_infix(child);
    match child {
        Expr::Number(_) => text,
        Expr::Binary { op, .. } if needs_parens(*op, parent, side) => format!("({text})"),
        Expr::Binary { .. } => text,
    }
}

// A child is wrapped when its operator binds looser than its parent's, or
// equally tight while sitting on the side the parent does not associate
// towards. The right operand of a left-associative operator and the left
// operand of the right-associative `^` would regroup on re-parse otherwise.
fn needs_parens(child: Operator, parent: Operator, side: Side) -> bool {
    if child.precedence() != parent.precedence() {
        return child.precedence() < parent.precedence();
    }
    match parent.assoc() {
        Assoc::Left => side == Side::Right,
        Assoc::Right => side == Side::Left,
    }
}
