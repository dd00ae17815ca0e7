//! # Precedence Tables
//!
//! Numeric precedence levels for scalar expressions and set operations,
//! mirroring the server grammar. The SQL builder consults these to emit
//! the minimal parentheses that preserve parse shape.

use crate::ast::expr::LogicalOperator;
use crate::ast::stmt::SetOperator;
use crate::ast::{Ast, NodeData, NodeId};

/// Scalar expression binding strength; higher binds tighter. `ATOM` is
/// used for everything that never needs wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScalarPrecedence(pub u16);

impl ScalarPrecedence {
    pub const OR: ScalarPrecedence = ScalarPrecedence(10);
    pub const AND: ScalarPrecedence = ScalarPrecedence(20);
    pub const NOT: ScalarPrecedence = ScalarPrecedence(30);
    pub const IS: ScalarPrecedence = ScalarPrecedence(40);
    pub const COMPARISON: ScalarPrecedence = ScalarPrecedence(50);
    pub const PATTERN: ScalarPrecedence = ScalarPrecedence(60);
    pub const OVERLAPS: ScalarPrecedence = ScalarPrecedence(70);
    pub const BETWEEN: ScalarPrecedence = ScalarPrecedence(80);
    pub const IN: ScalarPrecedence = ScalarPrecedence(90);
    pub const GENERIC_OP: ScalarPrecedence = ScalarPrecedence(110);
    pub const ADDITION: ScalarPrecedence = ScalarPrecedence(130);
    pub const MULTIPLICATION: ScalarPrecedence = ScalarPrecedence(140);
    pub const EXPONENTIATION: ScalarPrecedence = ScalarPrecedence(150);
    pub const TIME_ZONE: ScalarPrecedence = ScalarPrecedence(160);
    pub const COLLATE: ScalarPrecedence = ScalarPrecedence(170);
    pub const UNARY_MINUS: ScalarPrecedence = ScalarPrecedence(180);
    pub const TYPECAST: ScalarPrecedence = ScalarPrecedence(190);
    pub const ATOM: ScalarPrecedence = ScalarPrecedence(666);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Binding strength and associativity of the expression node. Atoms
/// (constants, references, parenthesized forms) report `ATOM`.
pub fn scalar_precedence(ast: &Ast, id: NodeId) -> (ScalarPrecedence, Associativity) {
    match ast.data(id) {
        NodeData::Logical(n) => match n.operator {
            LogicalOperator::Or => (ScalarPrecedence::OR, Associativity::Left),
            LogicalOperator::And => (ScalarPrecedence::AND, Associativity::Left),
        },
        NodeData::Not(_) => (ScalarPrecedence::NOT, Associativity::Right),
        NodeData::Is(_) | NodeData::IsDistinctFrom(_) | NodeData::IsJson(_) => {
            (ScalarPrecedence::IS, Associativity::None)
        }
        NodeData::PatternMatching(_) => (ScalarPrecedence::PATTERN, Associativity::None),
        NodeData::Overlaps(_) => (ScalarPrecedence::OVERLAPS, Associativity::None),
        NodeData::Between(_) => (ScalarPrecedence::BETWEEN, Associativity::None),
        NodeData::In(_) => (ScalarPrecedence::IN, Associativity::None),
        NodeData::Operator(n) => {
            if n.left.is_none() {
                let prec = match n.operator.name.as_str() {
                    "+" | "-" if !n.operator.is_qualified() => ScalarPrecedence::UNARY_MINUS,
                    _ => ScalarPrecedence::GENERIC_OP,
                };
                (prec, Associativity::Right)
            } else {
                binary_operator_precedence(&n.operator.name, n.operator.is_qualified())
            }
        }
        NodeData::AtTimeZone(_) => (ScalarPrecedence::TIME_ZONE, Associativity::Left),
        NodeData::Collate(_) => (ScalarPrecedence::COLLATE, Associativity::Left),
        NodeData::Typecast(_) => (ScalarPrecedence::TYPECAST, Associativity::Left),
        _ => (ScalarPrecedence::ATOM, Associativity::None),
    }
}

fn binary_operator_precedence(name: &str, qualified: bool) -> (ScalarPrecedence, Associativity) {
    if qualified {
        return (ScalarPrecedence::GENERIC_OP, Associativity::Left);
    }
    match name {
        "=" | "<" | ">" | "<=" | ">=" | "!=" | "<>" => {
            (ScalarPrecedence::COMPARISON, Associativity::None)
        }
        "+" | "-" => (ScalarPrecedence::ADDITION, Associativity::Left),
        "*" | "/" | "%" => (ScalarPrecedence::MULTIPLICATION, Associativity::Left),
        "^" => (ScalarPrecedence::EXPONENTIATION, Associativity::Left),
        _ => (ScalarPrecedence::GENERIC_OP, Associativity::Left),
    }
}

/// Set operation binding: INTERSECT binds tighter than UNION / EXCEPT,
/// and a plain SELECT / VALUES binds tightest of all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetOpPrecedence(pub u8);

impl SetOpPrecedence {
    pub const UNION: SetOpPrecedence = SetOpPrecedence(1);
    pub const INTERSECT: SetOpPrecedence = SetOpPrecedence(2);
    pub const SELECT: SetOpPrecedence = SetOpPrecedence(3);
}

pub fn set_op_precedence(ast: &Ast, id: NodeId) -> SetOpPrecedence {
    match ast.data(id) {
        NodeData::SetOpSelect(n) => match n.operator {
            SetOperator::Union | SetOperator::UnionAll | SetOperator::Except
            | SetOperator::ExceptAll => SetOpPrecedence::UNION,
            SetOperator::Intersect | SetOperator::IntersectAll => SetOpPrecedence::INTERSECT,
        },
        _ => SetOpPrecedence::SELECT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::expr::{Constant, Operator, OperatorExpression};

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert!(ScalarPrecedence::MULTIPLICATION > ScalarPrecedence::ADDITION);
        assert!(ScalarPrecedence::AND > ScalarPrecedence::OR);
        assert!(ScalarPrecedence::TYPECAST > ScalarPrecedence::UNARY_MINUS);
    }

    #[test]
    fn unary_minus_gets_its_own_level() {
        let mut ast = Ast::new();
        let one = ast.push(NodeData::Constant(Constant::integer("1"))).unwrap();
        let neg = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("-"),
                left: None,
                right: one,
            }))
            .unwrap();
        let (prec, assoc) = scalar_precedence(&ast, neg);
        assert_eq!(prec, ScalarPrecedence::UNARY_MINUS);
        assert_eq!(assoc, Associativity::Right);
    }

    #[test]
    fn intersect_binds_tighter_than_union() {
        assert!(SetOpPrecedence::INTERSECT > SetOpPrecedence::UNION);
        assert!(SetOpPrecedence::SELECT > SetOpPrecedence::INTERSECT);
    }
}
