//! # Tree Editing Integration Tests
//!
//! Structural editing of parsed trees through the public API. Tests are
//! organized by concern and verify the ownership invariants from a user's
//! perspective:
//!
//! - Every node has at most one parent; attaching an owned node fails and
//!   leaves both trees unchanged
//! - Edits flow through `replace_child`, `remove_child`, `detach` and the
//!   list operations, never through raw payload mutation
//! - Fragments re-parsed into an arena compose with existing subtrees
//! - ParameterWalker and the in-place named parameter rewrite work on
//!   real parsed statements
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test --test tree_editing
//! ```

use pg_builder::ast::expr::{Constant, Operator, OperatorExpression};
use pg_builder::{
    replace_named_parameters, Ast, FragmentKind, NodeData, ParameterWalker, Parser, SqlBuilder,
};

fn parse(sql: &str) -> Ast {
    Parser::default()
        .parse_statement(sql)
        .unwrap_or_else(|err| panic!("{sql:?} SHOULD parse: {err}"))
}

fn build(ast: &Ast) -> String {
    SqlBuilder::new().build(ast).expect("tree SHOULD have a root")
}

fn select_data(ast: &Ast) -> &pg_builder::ast::stmt::SelectStmt {
    match ast.data(ast.root().unwrap()) {
        NodeData::Select(select) => select,
        other => panic!("expected a SELECT root, found {other:?}"),
    }
}

mod ownership_tests {
    use super::*;

    #[test]
    fn a_node_cannot_gain_a_second_parent() {
        let mut ast = Ast::new();
        let one = ast.push(NodeData::Constant(Constant::integer("1"))).unwrap();
        let two = ast.push(NodeData::Constant(Constant::integer("2"))).unwrap();
        ast.push(NodeData::Operator(OperatorExpression {
            operator: Operator::bare("+"),
            left: Some(one),
            right: two,
        }))
        .unwrap();

        let err = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("*"),
                left: Some(one),
                right: one,
            }))
            .unwrap_err();
        assert!(
            err.to_string().contains("already has a parent"),
            "got: {err}"
        );
    }

    #[test]
    fn detach_frees_a_node_for_reuse() {
        let mut ast = parse("SELECT a FROM t WHERE a > 0");
        let condition = select_data(&ast).where_clause.unwrap();

        ast.detach(condition).unwrap();
        assert_eq!(ast.parent(condition), None);
        // remove_child cleared the optional slot too
        assert_eq!(select_data(&ast).where_clause, None);
        assert_eq!(build(&ast), "SELECT a FROM t");

        // The detached subtree is free again and can gain a new owner
        let wrapped = ast
            .push(NodeData::Not(pg_builder::ast::expr::NotExpression {
                argument: condition,
            }))
            .unwrap();
        assert_eq!(ast.parent(condition), Some(wrapped));
        let mut builder = SqlBuilder::new();
        assert_eq!(builder.build_node(&ast, wrapped), "NOT a > 0");
    }

    #[test]
    fn replace_child_swaps_a_subtree() {
        let mut ast = parse("SELECT a FROM t WHERE a > 0");
        let root = ast.root().unwrap();
        let old = select_data(&ast).where_clause.unwrap();

        let new = ast
            .parse_fragment(FragmentKind::Expression, "b IS NOT NULL")
            .unwrap();
        ast.replace_child(root, old, new).unwrap();

        assert_eq!(ast.parent(new), Some(root));
        assert_eq!(ast.parent(old), None);
        assert_eq!(build(&ast), "SELECT a FROM t WHERE b IS NOT NULL");
    }

    #[test]
    fn removing_a_required_child_is_refused() {
        let mut ast = parse("SELECT a FROM t");
        let root = ast.root().unwrap();
        let targets = select_data(&ast).target_list;

        let err = ast.remove_child(root, targets).unwrap_err();
        assert!(err.to_string().contains("required child"), "got: {err}");
        assert_eq!(ast.parent(targets), Some(root));
    }

    #[test]
    fn attaching_a_node_under_its_own_descendant_is_refused() {
        let mut ast = parse("SELECT a + b");
        let targets = select_data(&ast).target_list;
        let err = ast.list_push(targets, ast.root().unwrap()).unwrap_err();
        assert!(err.to_string().contains("descendant"), "got: {err}");
    }
}

mod list_tests {
    use super::*;

    #[test]
    fn list_surgery_reorders_the_target_list() {
        let mut ast = parse("SELECT a, b, c FROM t");
        let targets = select_data(&ast).target_list;
        assert_eq!(ast.list_len(targets).unwrap(), 3);

        let b = ast.list_remove(targets, 1).unwrap();
        assert_eq!(ast.parent(b), None);
        ast.list_push(targets, b).unwrap();
        assert_eq!(build(&ast), "SELECT a, c, b FROM t");

        let fresh = ast
            .parse_fragment(FragmentKind::Expression, "d + 1")
            .unwrap();
        let element = ast
            .push(NodeData::Target(pg_builder::ast::stmt::TargetElement {
                expression: fresh,
                alias: None,
            }))
            .unwrap();
        ast.list_insert(targets, 0, element).unwrap();
        assert_eq!(build(&ast), "SELECT d + 1, a, c, b FROM t");

        let replacement_list = ast
            .parse_fragment(FragmentKind::TargetList, "e")
            .unwrap();
        let replacement = ast.list_remove(replacement_list, 0).unwrap();
        let old = ast.list_replace(targets, 1, replacement).unwrap();
        assert_eq!(ast.parent(old), None);
        assert_eq!(build(&ast), "SELECT d + 1, e, c, b FROM t");
    }

    #[test]
    fn list_merge_moves_every_element() {
        let mut ast = parse("SELECT 1");
        let first = ast
            .parse_fragment(FragmentKind::TargetList, "a, b")
            .unwrap();
        let second = ast.parse_fragment(FragmentKind::TargetList, "c").unwrap();

        ast.list_merge(first, second).unwrap();
        assert_eq!(ast.list_len(first).unwrap(), 3);
        assert_eq!(ast.list_len(second).unwrap(), 0);
        for &item in ast.list_items(first).unwrap() {
            assert_eq!(ast.parent(item), Some(first));
        }

        let orders = ast
            .parse_fragment(FragmentKind::OrderByList, "x DESC")
            .unwrap();
        let err = ast.list_merge(first, orders).unwrap_err();
        assert!(err.to_string().contains("cannot merge"), "got: {err}");
    }
}

mod subtree_tests {
    use super::*;

    #[test]
    fn clone_subtree_yields_an_independent_tree() {
        let ast = parse("SELECT a FROM t WHERE a > 0 ORDER BY a");
        let condition = select_data(&ast).where_clause.unwrap();

        let copy = ast.clone_subtree(condition).unwrap();
        let copy_root = copy.root().unwrap();
        assert!(ast.structural_eq(condition, &copy, copy_root));
        assert_eq!(copy.parent(copy_root), None);

        let mut builder = SqlBuilder::new();
        assert_eq!(builder.build_node(&copy, copy_root), "a > 0");
    }

    #[test]
    fn structural_eq_ignores_arena_numbering() {
        let a = parse("SELECT x FROM t WHERE x IN (1, 2)");
        // Same statement reached through a statement list, so the node ids
        // in the arena differ even though the subtree matches.
        let list = Parser::default()
            .parse_statement_list("SELECT 0; SELECT x FROM t WHERE x IN (1, 2)")
            .unwrap();
        let second = list.list_items(list.root().unwrap()).unwrap()[1];
        assert!(a.structural_eq(a.root().unwrap(), &list, second));

        let other = parse("SELECT x FROM t WHERE x IN (1, 3)");
        assert!(!a.structural_eq(a.root().unwrap(), &other, other.root().unwrap()));
    }
}

mod fragment_tests {
    use super::*;

    #[test]
    fn fragments_need_parser_options() {
        let mut bare = Ast::new();
        let err = bare
            .parse_fragment(FragmentKind::Expression, "1 + 1")
            .unwrap_err();
        assert!(err.to_string().contains("no parser options"), "got: {err}");

        bare.set_options(Default::default());
        let id = bare
            .parse_fragment(FragmentKind::Expression, "1 + 1")
            .unwrap();
        assert_eq!(bare.parent(id), None);
    }

    #[test]
    fn fragment_trees_compose_into_statements() {
        let mut ast = parse("SELECT a FROM t ORDER BY a");
        let root = ast.root().unwrap();

        let from = ast
            .parse_fragment(FragmentKind::FromElement, "u JOIN v USING (id)")
            .unwrap();
        let from_list = select_data(&ast).from.unwrap();
        ast.list_push(from_list, from).unwrap();

        let order = ast
            .parse_fragment(FragmentKind::OrderByList, "a DESC NULLS LAST, b")
            .unwrap();
        let old_order = select_data(&ast).order_by.unwrap();
        ast.replace_child(root, old_order, order).unwrap();

        assert_eq!(
            build(&ast),
            "SELECT a FROM t, u JOIN v USING (id) ORDER BY a DESC NULLS LAST, b"
        );
    }
}

mod parameter_tests {
    use super::*;

    #[test]
    fn parameters_flow_from_parse_to_rewrite() {
        let mut ast = parse("SELECT * FROM users WHERE id = :id AND org = :org OR id = :id");
        let root = ast.root().unwrap();

        let mut walker = ParameterWalker::new();
        walker.walk(&ast, root).unwrap();
        assert_eq!(walker.parameter_count(), 2);
        assert_eq!(walker.named_parameter_map()["id"], 0);
        assert_eq!(walker.named_parameter_map()["org"], 1);

        let map = replace_named_parameters(&mut ast, root).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            build(&ast),
            "SELECT * FROM users WHERE id = $1 AND org = $2 OR id = $1"
        );
    }

    #[test]
    fn parameter_casts_are_reported() {
        let ast = parse("SELECT :id::int4, :name");
        let root = ast.root().unwrap();

        let mut walker = ParameterWalker::new();
        walker.walk(&ast, root).unwrap();
        let types = walker.parameter_types();
        assert_eq!(types.len(), 2);
        let ty = types[0].expect("the cast parameter SHOULD carry a type");
        assert!(matches!(ast.data(ty), NodeData::TypeName(_)));
        assert_eq!(types[1], None);
    }

    #[test]
    fn mixed_parameter_styles_are_rejected_on_real_sql() {
        let ast = parse("SELECT * FROM t WHERE a = :a AND b = $1");
        let mut walker = ParameterWalker::new();
        let err = walker.walk(&ast, ast.root().unwrap()).unwrap_err();
        assert!(
            err.to_string()
                .contains("mixing named and positional parameters"),
            "got: {err}"
        );
    }
}
