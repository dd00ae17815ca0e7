//! # Tree Walkers
//!
//! Double dispatch over the syntax tree: [`dispatch`] matches the node's
//! payload exhaustively and calls the corresponding [`TreeWalker`] method
//! with the typed payload. Every method is required, so a new node kind
//! does not compile until every walker in the crate (and downstream)
//! decides how to handle it.

use crate::ast::expr::*;
use crate::ast::range::*;
use crate::ast::stmt::*;
use crate::ast::{Ast, Identifier, List, NodeData, NodeId, QualifiedName, TypeName};

/// Visitor over every node kind. Implementations that only care about a
/// few kinds still list the rest, usually forwarding to a common
/// "walk children" helper.
pub trait TreeWalker {
    type Output;

    fn walk_list(&mut self, ast: &Ast, id: NodeId, node: &List) -> Self::Output;
    fn walk_identifier(&mut self, ast: &Ast, id: NodeId, node: &Identifier) -> Self::Output;
    fn walk_qualified_name(&mut self, ast: &Ast, id: NodeId, node: &QualifiedName)
        -> Self::Output;
    fn walk_star(&mut self, ast: &Ast, id: NodeId) -> Self::Output;
    fn walk_type_name(&mut self, ast: &Ast, id: NodeId, node: &TypeName) -> Self::Output;

    fn walk_select(&mut self, ast: &Ast, id: NodeId, node: &SelectStmt) -> Self::Output;
    fn walk_set_op_select(&mut self, ast: &Ast, id: NodeId, node: &SetOpSelectStmt)
        -> Self::Output;
    fn walk_values(&mut self, ast: &Ast, id: NodeId, node: &ValuesStmt) -> Self::Output;
    fn walk_insert(&mut self, ast: &Ast, id: NodeId, node: &InsertStmt) -> Self::Output;
    fn walk_update(&mut self, ast: &Ast, id: NodeId, node: &UpdateStmt) -> Self::Output;
    fn walk_delete(&mut self, ast: &Ast, id: NodeId, node: &DeleteStmt) -> Self::Output;
    fn walk_merge(&mut self, ast: &Ast, id: NodeId, node: &MergeStmt) -> Self::Output;

    fn walk_with_clause(&mut self, ast: &Ast, id: NodeId, node: &WithClause) -> Self::Output;
    fn walk_cte(&mut self, ast: &Ast, id: NodeId, node: &CommonTableExpression) -> Self::Output;
    fn walk_search_clause(&mut self, ast: &Ast, id: NodeId, node: &SearchClause) -> Self::Output;
    fn walk_cycle_clause(&mut self, ast: &Ast, id: NodeId, node: &CycleClause) -> Self::Output;
    fn walk_target_element(&mut self, ast: &Ast, id: NodeId, node: &TargetElement)
        -> Self::Output;
    fn walk_order_by_element(&mut self, ast: &Ast, id: NodeId, node: &OrderByElement)
        -> Self::Output;
    fn walk_window_definition(&mut self, ast: &Ast, id: NodeId, node: &WindowDefinition)
        -> Self::Output;
    fn walk_window_frame(&mut self, ast: &Ast, id: NodeId, node: &WindowFrame) -> Self::Output;
    fn walk_window_frame_bound(&mut self, ast: &Ast, id: NodeId, node: &WindowFrameBound)
        -> Self::Output;
    fn walk_locking_element(&mut self, ast: &Ast, id: NodeId, node: &LockingElement)
        -> Self::Output;
    fn walk_set_target_element(&mut self, ast: &Ast, id: NodeId, node: &SetTargetElement)
        -> Self::Output;
    fn walk_single_set_clause(&mut self, ast: &Ast, id: NodeId, node: &SingleSetClause)
        -> Self::Output;
    fn walk_multiple_set_clause(&mut self, ast: &Ast, id: NodeId, node: &MultipleSetClause)
        -> Self::Output;
    fn walk_set_to_default(&mut self, ast: &Ast, id: NodeId) -> Self::Output;
    fn walk_on_conflict(&mut self, ast: &Ast, id: NodeId, node: &OnConflictClause)
        -> Self::Output;
    fn walk_index_parameters(&mut self, ast: &Ast, id: NodeId, node: &IndexParameters)
        -> Self::Output;
    fn walk_index_element(&mut self, ast: &Ast, id: NodeId, node: &IndexElement) -> Self::Output;
    fn walk_merge_when(&mut self, ast: &Ast, id: NodeId, node: &MergeWhenClause) -> Self::Output;
    fn walk_merge_insert(&mut self, ast: &Ast, id: NodeId, node: &MergeInsert) -> Self::Output;
    fn walk_merge_update(&mut self, ast: &Ast, id: NodeId, node: &MergeUpdate) -> Self::Output;
    fn walk_merge_delete(&mut self, ast: &Ast, id: NodeId) -> Self::Output;

    fn walk_relation_reference(&mut self, ast: &Ast, id: NodeId, node: &RelationReference)
        -> Self::Output;
    fn walk_join(&mut self, ast: &Ast, id: NodeId, node: &JoinExpression) -> Self::Output;
    fn walk_using_clause(&mut self, ast: &Ast, id: NodeId, node: &UsingClause) -> Self::Output;
    fn walk_range_subselect(&mut self, ast: &Ast, id: NodeId, node: &RangeSubselect)
        -> Self::Output;
    fn walk_range_function(&mut self, ast: &Ast, id: NodeId, node: &RangeFunctionCall)
        -> Self::Output;
    fn walk_column_definition(&mut self, ast: &Ast, id: NodeId, node: &ColumnDefinition)
        -> Self::Output;
    fn walk_xml_table(&mut self, ast: &Ast, id: NodeId, node: &XmlTable) -> Self::Output;
    fn walk_xml_namespace(&mut self, ast: &Ast, id: NodeId, node: &XmlNamespace) -> Self::Output;
    fn walk_xml_column(&mut self, ast: &Ast, id: NodeId, node: &XmlColumnDefinition)
        -> Self::Output;

    fn walk_constant(&mut self, ast: &Ast, id: NodeId, node: &Constant) -> Self::Output;
    fn walk_named_parameter(&mut self, ast: &Ast, id: NodeId, node: &NamedParameter)
        -> Self::Output;
    fn walk_positional_parameter(&mut self, ast: &Ast, id: NodeId, node: &PositionalParameter)
        -> Self::Output;
    fn walk_column_reference(&mut self, ast: &Ast, id: NodeId, node: &ColumnReference)
        -> Self::Output;
    fn walk_indirection(&mut self, ast: &Ast, id: NodeId, node: &Indirection) -> Self::Output;
    fn walk_array_indexes(&mut self, ast: &Ast, id: NodeId, node: &ArrayIndexes) -> Self::Output;
    fn walk_operator(&mut self, ast: &Ast, id: NodeId, node: &OperatorExpression)
        -> Self::Output;
    fn walk_logical(&mut self, ast: &Ast, id: NodeId, node: &LogicalExpression) -> Self::Output;
    fn walk_not(&mut self, ast: &Ast, id: NodeId, node: &NotExpression) -> Self::Output;
    fn walk_is(&mut self, ast: &Ast, id: NodeId, node: &IsExpression) -> Self::Output;
    fn walk_is_distinct_from(&mut self, ast: &Ast, id: NodeId, node: &IsDistinctFromExpression)
        -> Self::Output;
    fn walk_is_json(&mut self, ast: &Ast, id: NodeId, node: &IsJsonExpression) -> Self::Output;
    fn walk_between(&mut self, ast: &Ast, id: NodeId, node: &BetweenExpression) -> Self::Output;
    fn walk_in(&mut self, ast: &Ast, id: NodeId, node: &InExpression) -> Self::Output;
    fn walk_pattern_matching(&mut self, ast: &Ast, id: NodeId, node: &PatternMatchingExpression)
        -> Self::Output;
    fn walk_overlaps(&mut self, ast: &Ast, id: NodeId, node: &OverlapsExpression) -> Self::Output;
    fn walk_at_time_zone(&mut self, ast: &Ast, id: NodeId, node: &AtTimeZoneExpression)
        -> Self::Output;
    fn walk_collate(&mut self, ast: &Ast, id: NodeId, node: &CollateExpression) -> Self::Output;
    fn walk_typecast(&mut self, ast: &Ast, id: NodeId, node: &TypecastExpression) -> Self::Output;
    fn walk_case(&mut self, ast: &Ast, id: NodeId, node: &CaseExpression) -> Self::Output;
    fn walk_when_clause(&mut self, ast: &Ast, id: NodeId, node: &WhenClause) -> Self::Output;
    fn walk_function_call(&mut self, ast: &Ast, id: NodeId, node: &FunctionCall) -> Self::Output;
    fn walk_named_argument(&mut self, ast: &Ast, id: NodeId, node: &NamedArgument)
        -> Self::Output;
    fn walk_sql_value_function(&mut self, ast: &Ast, id: NodeId, node: &SqlValueFunction)
        -> Self::Output;
    fn walk_subselect(&mut self, ast: &Ast, id: NodeId, node: &SubselectExpression)
        -> Self::Output;
    fn walk_array_comparison(&mut self, ast: &Ast, id: NodeId, node: &ArrayComparisonExpression)
        -> Self::Output;
    fn walk_array(&mut self, ast: &Ast, id: NodeId, node: &ArrayExpression) -> Self::Output;
    fn walk_row(&mut self, ast: &Ast, id: NodeId, node: &RowExpression) -> Self::Output;
    fn walk_grouping(&mut self, ast: &Ast, id: NodeId, node: &GroupingExpression)
        -> Self::Output;
    fn walk_grouping_element(&mut self, ast: &Ast, id: NodeId, node: &GroupingElement)
        -> Self::Output;
    fn walk_json_key_value(&mut self, ast: &Ast, id: NodeId, node: &JsonKeyValue)
        -> Self::Output;
    fn walk_json_object(&mut self, ast: &Ast, id: NodeId, node: &JsonObjectConstructor)
        -> Self::Output;
    fn walk_json_array(&mut self, ast: &Ast, id: NodeId, node: &JsonArrayConstructor)
        -> Self::Output;
    fn walk_xml_exists(&mut self, ast: &Ast, id: NodeId, node: &XmlExistsExpression)
        -> Self::Output;
}

/// Routes a node to the walker method matching its kind.
pub fn dispatch<W: TreeWalker + ?Sized>(ast: &Ast, id: NodeId, walker: &mut W) -> W::Output {
    match ast.data(id) {
        NodeData::List(n) => walker.walk_list(ast, id, n),
        NodeData::Identifier(n) => walker.walk_identifier(ast, id, n),
        NodeData::QualifiedName(n) => walker.walk_qualified_name(ast, id, n),
        NodeData::Star => walker.walk_star(ast, id),
        NodeData::TypeName(n) => walker.walk_type_name(ast, id, n),
        NodeData::Select(n) => walker.walk_select(ast, id, n),
        NodeData::SetOpSelect(n) => walker.walk_set_op_select(ast, id, n),
        NodeData::Values(n) => walker.walk_values(ast, id, n),
        NodeData::Insert(n) => walker.walk_insert(ast, id, n),
        NodeData::Update(n) => walker.walk_update(ast, id, n),
        NodeData::Delete(n) => walker.walk_delete(ast, id, n),
        NodeData::Merge(n) => walker.walk_merge(ast, id, n),
        NodeData::With(n) => walker.walk_with_clause(ast, id, n),
        NodeData::Cte(n) => walker.walk_cte(ast, id, n),
        NodeData::Search(n) => walker.walk_search_clause(ast, id, n),
        NodeData::Cycle(n) => walker.walk_cycle_clause(ast, id, n),
        NodeData::Target(n) => walker.walk_target_element(ast, id, n),
        NodeData::OrderBy(n) => walker.walk_order_by_element(ast, id, n),
        NodeData::WindowDef(n) => walker.walk_window_definition(ast, id, n),
        NodeData::WindowFrame(n) => walker.walk_window_frame(ast, id, n),
        NodeData::WindowFrameBound(n) => walker.walk_window_frame_bound(ast, id, n),
        NodeData::Locking(n) => walker.walk_locking_element(ast, id, n),
        NodeData::SetTarget(n) => walker.walk_set_target_element(ast, id, n),
        NodeData::SingleSet(n) => walker.walk_single_set_clause(ast, id, n),
        NodeData::MultipleSet(n) => walker.walk_multiple_set_clause(ast, id, n),
        NodeData::SetToDefault => walker.walk_set_to_default(ast, id),
        NodeData::OnConflict(n) => walker.walk_on_conflict(ast, id, n),
        NodeData::IndexParameters(n) => walker.walk_index_parameters(ast, id, n),
        NodeData::IndexElement(n) => walker.walk_index_element(ast, id, n),
        NodeData::MergeWhen(n) => walker.walk_merge_when(ast, id, n),
        NodeData::MergeInsert(n) => walker.walk_merge_insert(ast, id, n),
        NodeData::MergeUpdate(n) => walker.walk_merge_update(ast, id, n),
        NodeData::MergeDelete => walker.walk_merge_delete(ast, id),
        NodeData::RelationRef(n) => walker.walk_relation_reference(ast, id, n),
        NodeData::Join(n) => walker.walk_join(ast, id, n),
        NodeData::Using(n) => walker.walk_using_clause(ast, id, n),
        NodeData::RangeSubselect(n) => walker.walk_range_subselect(ast, id, n),
        NodeData::RangeFunction(n) => walker.walk_range_function(ast, id, n),
        NodeData::ColumnDef(n) => walker.walk_column_definition(ast, id, n),
        NodeData::XmlTable(n) => walker.walk_xml_table(ast, id, n),
        NodeData::XmlNamespace(n) => walker.walk_xml_namespace(ast, id, n),
        NodeData::XmlColumn(n) => walker.walk_xml_column(ast, id, n),
        NodeData::Constant(n) => walker.walk_constant(ast, id, n),
        NodeData::NamedParam(n) => walker.walk_named_parameter(ast, id, n),
        NodeData::PositionalParam(n) => walker.walk_positional_parameter(ast, id, n),
        NodeData::ColumnRef(n) => walker.walk_column_reference(ast, id, n),
        NodeData::Indirection(n) => walker.walk_indirection(ast, id, n),
        NodeData::ArrayIndexes(n) => walker.walk_array_indexes(ast, id, n),
        NodeData::Operator(n) => walker.walk_operator(ast, id, n),
        NodeData::Logical(n) => walker.walk_logical(ast, id, n),
        NodeData::Not(n) => walker.walk_not(ast, id, n),
        NodeData::Is(n) => walker.walk_is(ast, id, n),
        NodeData::IsDistinctFrom(n) => walker.walk_is_distinct_from(ast, id, n),
        NodeData::IsJson(n) => walker.walk_is_json(ast, id, n),
        NodeData::Between(n) => walker.walk_between(ast, id, n),
        NodeData::In(n) => walker.walk_in(ast, id, n),
        NodeData::PatternMatching(n) => walker.walk_pattern_matching(ast, id, n),
        NodeData::Overlaps(n) => walker.walk_overlaps(ast, id, n),
        NodeData::AtTimeZone(n) => walker.walk_at_time_zone(ast, id, n),
        NodeData::Collate(n) => walker.walk_collate(ast, id, n),
        NodeData::Typecast(n) => walker.walk_typecast(ast, id, n),
        NodeData::Case(n) => walker.walk_case(ast, id, n),
        NodeData::When(n) => walker.walk_when_clause(ast, id, n),
        NodeData::FunctionCall(n) => walker.walk_function_call(ast, id, n),
        NodeData::NamedArgument(n) => walker.walk_named_argument(ast, id, n),
        NodeData::SqlValueFunction(n) => walker.walk_sql_value_function(ast, id, n),
        NodeData::Subselect(n) => walker.walk_subselect(ast, id, n),
        NodeData::ArrayComparison(n) => walker.walk_array_comparison(ast, id, n),
        NodeData::Array(n) => walker.walk_array(ast, id, n),
        NodeData::Row(n) => walker.walk_row(ast, id, n),
        NodeData::Grouping(n) => walker.walk_grouping(ast, id, n),
        NodeData::GroupingElement(n) => walker.walk_grouping_element(ast, id, n),
        NodeData::JsonKeyValue(n) => walker.walk_json_key_value(ast, id, n),
        NodeData::JsonObject(n) => walker.walk_json_object(ast, id, n),
        NodeData::JsonArray(n) => walker.walk_json_array(ast, id, n),
        NodeData::XmlExists(n) => walker.walk_xml_exists(ast, id, n),
    }
}
