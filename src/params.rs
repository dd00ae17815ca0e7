//! # Placeholder Extraction
//!
//! [`ParameterWalker`] scans a tree for `$1` style positional and `:name`
//! style named placeholders. It reports how many distinct parameters the
//! statement takes, maps each named parameter to a zero-based index in
//! first-appearance order, and records the target type wherever a
//! placeholder is the direct argument of a typecast (`:id::int4`).
//!
//! Mixing the two placeholder styles in one statement is rejected.
//! [`replace_named_parameters`] rewrites every named placeholder to its
//! positional `$n` equivalent in place, which is what a client library
//! needs before handing the SQL to the server.

use std::collections::HashMap;

use eyre::Result;

use crate::ast::expr::{NamedParameter, PositionalParameter};
use crate::ast::{Ast, NodeData, NodeId};
use crate::error::Error;
use crate::walker::{dispatch, TreeWalker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParameterStyle {
    Named,
    Positional,
}

#[derive(Debug, Default)]
pub struct ParameterWalker {
    named_indexes: HashMap<String, usize>,
    parameter_types: Vec<Option<NodeId>>,
    /// Every named placeholder occurrence, for later rewriting.
    occurrences: Vec<(NodeId, usize)>,
    style: Option<ParameterStyle>,
    positional_high_water: usize,
}

impl ParameterWalker {
    pub fn new() -> ParameterWalker {
        ParameterWalker::default()
    }

    /// Scans the subtree under `id`, accumulating into this walker.
    pub fn walk(&mut self, ast: &Ast, id: NodeId) -> Result<()> {
        dispatch(ast, id, self)
    }

    /// Number of distinct parameters the statement takes.
    pub fn parameter_count(&self) -> usize {
        match self.style {
            Some(ParameterStyle::Named) => self.named_indexes.len(),
            Some(ParameterStyle::Positional) => self.positional_high_water,
            None => 0,
        }
    }

    /// Named parameter name to zero-based index, in order of first
    /// appearance.
    pub fn named_parameter_map(&self) -> &HashMap<String, usize> {
        &self.named_indexes
    }

    /// Per-parameter cast target (a TypeName node), where one was found.
    pub fn parameter_types(&self) -> &[Option<NodeId>] {
        &self.parameter_types
    }

    fn set_style(&mut self, style: ParameterStyle) -> Result<()> {
        match self.style {
            None => {
                self.style = Some(style);
                Ok(())
            }
            Some(current) if current == style => Ok(()),
            Some(_) => Err(Error::structure(
                "mixing named and positional parameters is not allowed",
            )
            .into()),
        }
    }

    fn record_type(&mut self, ast: &Ast, id: NodeId, index: usize) {
        if self.parameter_types.len() <= index {
            self.parameter_types.resize(index + 1, None);
        }
        if self.parameter_types[index].is_some() {
            return;
        }
        if let Some(parent) = ast.parent(id) {
            if let NodeData::Typecast(cast) = ast.data(parent) {
                if cast.argument == id {
                    self.parameter_types[index] = Some(cast.type_name);
                }
            }
        }
    }

    fn descend(&mut self, ast: &Ast, id: NodeId) -> Result<()> {
        for child in ast.children(id) {
            dispatch(ast, child, self)?;
        }
        Ok(())
    }
}

/// Rewrites every `:name` placeholder under `id` to `$n`, numbering names
/// by first appearance. Returns the resulting name-to-index map.
pub fn replace_named_parameters(
    ast: &mut Ast,
    id: NodeId,
) -> Result<HashMap<String, usize>> {
    let mut walker = ParameterWalker::new();
    walker.walk(ast, id)?;
    for &(param, index) in &walker.occurrences {
        let parent = match ast.parent(param) {
            Some(parent) => parent,
            // A bare placeholder with no parent is the walked root itself
            None => {
                return Err(Error::structure(
                    "cannot replace a parameter that is the tree root",
                )
                .into())
            }
        };
        let replacement = ast.push(NodeData::PositionalParam(PositionalParameter {
            position: index as u32 + 1,
        }))?;
        ast.replace_child(parent, param, replacement)?;
    }
    Ok(walker.named_indexes)
}

macro_rules! descend_only {
    ($($method:ident: $payload:ty),* $(,)?) => {
        $(
            fn $method(&mut self, ast: &Ast, id: NodeId, _node: &$payload) -> Self::Output {
                self.descend(ast, id)
            }
        )*
    };
}

impl TreeWalker for ParameterWalker {
    type Output = Result<()>;

    fn walk_named_parameter(&mut self, ast: &Ast, id: NodeId, node: &NamedParameter)
        -> Self::Output {
        self.set_style(ParameterStyle::Named)?;
        let next = self.named_indexes.len();
        let index = *self.named_indexes.entry(node.name.clone()).or_insert(next);
        self.occurrences.push((id, index));
        self.record_type(ast, id, index);
        Ok(())
    }

    fn walk_positional_parameter(
        &mut self,
        ast: &Ast,
        id: NodeId,
        node: &PositionalParameter,
    ) -> Self::Output {
        self.set_style(ParameterStyle::Positional)?;
        if node.position == 0 {
            return Err(Error::structure("positional parameters are numbered from 1").into());
        }
        let index = node.position as usize - 1;
        self.positional_high_water = self.positional_high_water.max(node.position as usize);
        self.record_type(ast, id, index);
        Ok(())
    }

    fn walk_star(&mut self, _ast: &Ast, _id: NodeId) -> Self::Output {
        Ok(())
    }

    // Subtrees that can never hold a placeholder are not descended into.

    fn walk_column_reference(
        &mut self,
        _ast: &Ast,
        _id: NodeId,
        _node: &crate::ast::expr::ColumnReference,
    ) -> Self::Output {
        Ok(())
    }

    fn walk_qualified_name(
        &mut self,
        _ast: &Ast,
        _id: NodeId,
        _node: &crate::ast::QualifiedName,
    ) -> Self::Output {
        Ok(())
    }

    fn walk_type_name(
        &mut self,
        _ast: &Ast,
        _id: NodeId,
        _node: &crate::ast::TypeName,
    ) -> Self::Output {
        Ok(())
    }

    fn walk_locking_element(
        &mut self,
        _ast: &Ast,
        _id: NodeId,
        _node: &crate::ast::stmt::LockingElement,
    ) -> Self::Output {
        Ok(())
    }

    fn walk_relation_reference(
        &mut self,
        _ast: &Ast,
        _id: NodeId,
        _node: &crate::ast::range::RelationReference,
    ) -> Self::Output {
        Ok(())
    }

    fn walk_set_to_default(&mut self, _ast: &Ast, _id: NodeId) -> Self::Output {
        Ok(())
    }

    fn walk_merge_delete(&mut self, _ast: &Ast, _id: NodeId) -> Self::Output {
        Ok(())
    }

    descend_only! {
        walk_list: crate::ast::List,
        walk_identifier: crate::ast::Identifier,
        walk_select: crate::ast::stmt::SelectStmt,
        walk_set_op_select: crate::ast::stmt::SetOpSelectStmt,
        walk_values: crate::ast::stmt::ValuesStmt,
        walk_insert: crate::ast::stmt::InsertStmt,
        walk_update: crate::ast::stmt::UpdateStmt,
        walk_delete: crate::ast::stmt::DeleteStmt,
        walk_merge: crate::ast::stmt::MergeStmt,
        walk_with_clause: crate::ast::stmt::WithClause,
        walk_cte: crate::ast::stmt::CommonTableExpression,
        walk_search_clause: crate::ast::stmt::SearchClause,
        walk_cycle_clause: crate::ast::stmt::CycleClause,
        walk_target_element: crate::ast::stmt::TargetElement,
        walk_order_by_element: crate::ast::stmt::OrderByElement,
        walk_window_definition: crate::ast::stmt::WindowDefinition,
        walk_window_frame: crate::ast::stmt::WindowFrame,
        walk_window_frame_bound: crate::ast::stmt::WindowFrameBound,
        walk_set_target_element: crate::ast::stmt::SetTargetElement,
        walk_single_set_clause: crate::ast::stmt::SingleSetClause,
        walk_multiple_set_clause: crate::ast::stmt::MultipleSetClause,
        walk_on_conflict: crate::ast::stmt::OnConflictClause,
        walk_index_parameters: crate::ast::stmt::IndexParameters,
        walk_index_element: crate::ast::stmt::IndexElement,
        walk_merge_when: crate::ast::stmt::MergeWhenClause,
        walk_merge_insert: crate::ast::stmt::MergeInsert,
        walk_merge_update: crate::ast::stmt::MergeUpdate,
        walk_join: crate::ast::range::JoinExpression,
        walk_using_clause: crate::ast::range::UsingClause,
        walk_range_subselect: crate::ast::range::RangeSubselect,
        walk_range_function: crate::ast::range::RangeFunctionCall,
        walk_column_definition: crate::ast::range::ColumnDefinition,
        walk_xml_table: crate::ast::range::XmlTable,
        walk_xml_namespace: crate::ast::range::XmlNamespace,
        walk_xml_column: crate::ast::range::XmlColumnDefinition,
        walk_constant: crate::ast::expr::Constant,
        walk_indirection: crate::ast::expr::Indirection,
        walk_array_indexes: crate::ast::expr::ArrayIndexes,
        walk_operator: crate::ast::expr::OperatorExpression,
        walk_logical: crate::ast::expr::LogicalExpression,
        walk_not: crate::ast::expr::NotExpression,
        walk_is: crate::ast::expr::IsExpression,
        walk_is_distinct_from: crate::ast::expr::IsDistinctFromExpression,
        walk_is_json: crate::ast::expr::IsJsonExpression,
        walk_between: crate::ast::expr::BetweenExpression,
        walk_in: crate::ast::expr::InExpression,
        walk_pattern_matching: crate::ast::expr::PatternMatchingExpression,
        walk_overlaps: crate::ast::expr::OverlapsExpression,
        walk_at_time_zone: crate::ast::expr::AtTimeZoneExpression,
        walk_collate: crate::ast::expr::CollateExpression,
        walk_typecast: crate::ast::expr::TypecastExpression,
        walk_case: crate::ast::expr::CaseExpression,
        walk_when_clause: crate::ast::expr::WhenClause,
        walk_function_call: crate::ast::expr::FunctionCall,
        walk_named_argument: crate::ast::expr::NamedArgument,
        walk_sql_value_function: crate::ast::expr::SqlValueFunction,
        walk_subselect: crate::ast::expr::SubselectExpression,
        walk_array_comparison: crate::ast::expr::ArrayComparisonExpression,
        walk_array: crate::ast::expr::ArrayExpression,
        walk_row: crate::ast::expr::RowExpression,
        walk_grouping: crate::ast::expr::GroupingExpression,
        walk_grouping_element: crate::ast::expr::GroupingElement,
        walk_json_key_value: crate::ast::expr::JsonKeyValue,
        walk_json_object: crate::ast::expr::JsonObjectConstructor,
        walk_json_array: crate::ast::expr::JsonArrayConstructor,
        walk_xml_exists: crate::ast::expr::XmlExistsExpression,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::expr::*;
    use crate::ast::{Identifier, QualifiedName, TypeName};

    fn named(ast: &mut Ast, name: &str) -> NodeId {
        ast.push(NodeData::NamedParam(NamedParameter { name: name.into() }))
            .unwrap()
    }

    fn type_name(ast: &mut Ast, name: &str) -> NodeId {
        let ident = ast
            .push(NodeData::Identifier(Identifier { value: name.into() }))
            .unwrap();
        let qname = ast
            .push(NodeData::QualifiedName(QualifiedName { parts: vec![ident] }))
            .unwrap();
        ast.push(NodeData::TypeName(TypeName::plain(qname))).unwrap()
    }

    #[test]
    fn named_parameters_are_numbered_by_first_appearance() {
        let mut ast = Ast::new();
        let a = named(&mut ast, "a");
        let b = named(&mut ast, "b");
        let a2 = named(&mut ast, "a");
        let inner = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("+"),
                left: Some(a),
                right: b,
            }))
            .unwrap();
        let root = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("+"),
                left: Some(inner),
                right: a2,
            }))
            .unwrap();

        let mut walker = ParameterWalker::new();
        walker.walk(&ast, root).unwrap();
        assert_eq!(walker.parameter_count(), 2);
        assert_eq!(walker.named_parameter_map()["a"], 0);
        assert_eq!(walker.named_parameter_map()["b"], 1);
    }

    #[test]
    fn typecast_directly_over_a_parameter_records_its_type() {
        let mut ast = Ast::new();
        let param = named(&mut ast, "id");
        let ty = type_name(&mut ast, "int4");
        let cast = ast
            .push(NodeData::Typecast(TypecastExpression {
                argument: param,
                type_name: ty,
            }))
            .unwrap();

        let mut walker = ParameterWalker::new();
        walker.walk(&ast, cast).unwrap();
        assert_eq!(walker.parameter_types(), &[Some(ty)]);
    }

    #[test]
    fn mixing_styles_is_rejected() {
        let mut ast = Ast::new();
        let a = named(&mut ast, "a");
        let p = ast
            .push(NodeData::PositionalParam(PositionalParameter { position: 1 }))
            .unwrap();
        let root = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("+"),
                left: Some(a),
                right: p,
            }))
            .unwrap();

        let mut walker = ParameterWalker::new();
        let err = walker.walk(&ast, root).unwrap_err();
        assert!(err.to_string().contains("mixing named and positional"));
    }

    #[test]
    fn positional_count_follows_the_highest_position() {
        let mut ast = Ast::new();
        let p3 = ast
            .push(NodeData::PositionalParam(PositionalParameter { position: 3 }))
            .unwrap();
        let p1 = ast
            .push(NodeData::PositionalParam(PositionalParameter { position: 1 }))
            .unwrap();
        let root = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("+"),
                left: Some(p3),
                right: p1,
            }))
            .unwrap();

        let mut walker = ParameterWalker::new();
        walker.walk(&ast, root).unwrap();
        assert_eq!(walker.parameter_count(), 3);
    }

    #[test]
    fn replace_named_parameters_rewrites_in_place() {
        let mut ast = Ast::new();
        let a = named(&mut ast, "a");
        let b = named(&mut ast, "b");
        let a2 = named(&mut ast, "a");
        let inner = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("+"),
                left: Some(a),
                right: b,
            }))
            .unwrap();
        let root = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("*"),
                left: Some(inner),
                right: a2,
            }))
            .unwrap();

        let map = replace_named_parameters(&mut ast, root).unwrap();
        assert_eq!(map["a"], 0);
        assert_eq!(map["b"], 1);

        let mut builder = crate::sql_builder::SqlBuilder::new();
        assert_eq!(builder.build_node(&ast, root), "($1 + $2) * $1");
    }
}
