//! Statement and clause node payloads.

use super::NodeId;

/// Plain `SELECT` without set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStmt {
    pub with: Option<NodeId>,
    pub distinct: bool,
    /// `DISTINCT ON (...)` expressions, a List(Expression) node.
    pub distinct_on: Option<NodeId>,
    /// List(Target).
    pub target_list: NodeId,
    /// List(From).
    pub from: Option<NodeId>,
    pub where_clause: Option<NodeId>,
    /// List(Expression); items may be GroupingElement nodes.
    pub group_by: Option<NodeId>,
    pub group_distinct: bool,
    pub having: Option<NodeId>,
    /// List(Window) of named window definitions.
    pub window: Option<NodeId>,
    /// List(OrderBy).
    pub order_by: Option<NodeId>,
    pub limit: Option<NodeId>,
    /// `FETCH FIRST ... WITH TIES`.
    pub limit_with_ties: bool,
    pub offset: Option<NodeId>,
    /// List(Locking).
    pub locking: Option<NodeId>,
}

impl SelectStmt {
    /// A minimal SELECT with just a target list.
    pub fn simple(target_list: NodeId) -> SelectStmt {
        SelectStmt {
            with: None,
            distinct: false,
            distinct_on: None,
            target_list,
            from: None,
            where_clause: None,
            group_by: None,
            group_distinct: false,
            having: None,
            window: None,
            order_by: None,
            limit: None,
            limit_with_ties: false,
            offset: None,
            locking: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    UnionAll,
    Intersect,
    IntersectAll,
    Except,
    ExceptAll,
}

/// `left UNION/INTERSECT/EXCEPT right`, itself usable as a side of a
/// larger set operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOpSelectStmt {
    pub with: Option<NodeId>,
    pub left: NodeId,
    pub right: NodeId,
    pub operator: SetOperator,
    pub order_by: Option<NodeId>,
    pub limit: Option<NodeId>,
    pub limit_with_ties: bool,
    pub offset: Option<NodeId>,
    pub locking: Option<NodeId>,
}

/// `VALUES (...), (...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuesStmt {
    pub with: Option<NodeId>,
    /// List(Row) of RowExpression nodes.
    pub rows: NodeId,
    pub order_by: Option<NodeId>,
    pub limit: Option<NodeId>,
    pub limit_with_ties: bool,
    pub offset: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverridingKind {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStmt {
    pub with: Option<NodeId>,
    /// RelationReference target.
    pub relation: NodeId,
    /// List(SetTarget) of column names with optional indirection.
    pub columns: Option<NodeId>,
    pub overriding: Option<OverridingKind>,
    /// The query supplying rows; `None` means `DEFAULT VALUES`.
    pub values: Option<NodeId>,
    pub on_conflict: Option<NodeId>,
    /// List(Target).
    pub returning: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStmt {
    pub with: Option<NodeId>,
    pub relation: NodeId,
    /// List(SetClause).
    pub set_clause: NodeId,
    pub from: Option<NodeId>,
    pub where_clause: Option<NodeId>,
    pub returning: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStmt {
    pub with: Option<NodeId>,
    pub relation: NodeId,
    /// List(From).
    pub using: Option<NodeId>,
    pub where_clause: Option<NodeId>,
    pub returning: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStmt {
    pub with: Option<NodeId>,
    pub relation: NodeId,
    /// The data source, any FROM item.
    pub using_item: NodeId,
    pub on: NodeId,
    /// MergeWhenClause nodes, in order.
    pub when_clauses: Vec<NodeId>,
    pub returning: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithClause {
    pub recursive: bool,
    /// CommonTableExpression nodes.
    pub ctes: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonTableExpression {
    /// Identifier.
    pub name: NodeId,
    /// List(Identifier) of column aliases.
    pub column_aliases: Option<NodeId>,
    /// `Some(true)` MATERIALIZED, `Some(false)` NOT MATERIALIZED.
    pub materialized: Option<bool>,
    pub statement: NodeId,
    pub search: Option<NodeId>,
    pub cycle: Option<NodeId>,
}

/// `SEARCH BREADTH|DEPTH FIRST BY cols SET col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchClause {
    pub breadth_first: bool,
    /// List(Identifier).
    pub track_columns: NodeId,
    pub sequence_column: NodeId,
}

/// `CYCLE cols SET mark [TO v DEFAULT d] USING path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleClause {
    pub track_columns: NodeId,
    pub mark_column: NodeId,
    pub mark_value: Option<NodeId>,
    pub mark_default: Option<NodeId>,
    pub path_column: NodeId,
}

/// One element of a target list: expression plus optional alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetElement {
    pub expression: NodeId,
    pub alias: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByElement {
    pub expression: NodeId,
    pub direction: Option<SortDirection>,
    /// `USING operator` form, mutually exclusive with `direction`.
    pub using_operator: Option<crate::ast::expr::Operator>,
    pub nulls: Option<NullsOrder>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDefinition {
    /// Window name when defined in a WINDOW clause.
    pub name: Option<NodeId>,
    /// Referenced base window name.
    pub ref_name: Option<NodeId>,
    /// List(Expression).
    pub partition_by: Option<NodeId>,
    pub order_by: Option<NodeId>,
    pub frame: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrameMode {
    Range,
    Rows,
    Groups,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrameExclusion {
    CurrentRow,
    Group,
    Ties,
    NoOthers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFrame {
    pub mode: WindowFrameMode,
    pub start: NodeId,
    pub end: Option<NodeId>,
    pub exclusion: Option<WindowFrameExclusion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrameDirection {
    Preceding,
    Following,
    CurrentRow,
}

/// Frame bound: `UNBOUNDED PRECEDING/FOLLOWING` when `value` is absent
/// and direction is not `CurrentRow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFrameBound {
    pub direction: WindowFrameDirection,
    pub value: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockingStrength {
    Update,
    NoKeyUpdate,
    Share,
    KeyShare,
}

impl LockingStrength {
    pub fn as_sql(self) -> &'static str {
        match self {
            LockingStrength::Update => "UPDATE",
            LockingStrength::NoKeyUpdate => "NO KEY UPDATE",
            LockingStrength::Share => "SHARE",
            LockingStrength::KeyShare => "KEY SHARE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockingElement {
    pub strength: LockingStrength,
    /// QualifiedName nodes after OF.
    pub relations: Vec<NodeId>,
    pub no_wait: bool,
    pub skip_locked: bool,
}

/// Column name plus optional indirection, as used by INSERT column lists
/// and the left side of UPDATE assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTargetElement {
    pub name: NodeId,
    pub indirection: Vec<NodeId>,
}

/// `col = value` (value may be a SetToDefault node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSetClause {
    pub column: NodeId,
    pub value: NodeId,
}

/// `(a, b) = (...)` multiple-column assignment; value is a row
/// constructor or a subselect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleSetClause {
    /// List(SetTarget).
    pub columns: NodeId,
    pub value: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnConflictAction {
    DoNothing,
    DoUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnConflictClause {
    pub action: OnConflictAction,
    /// IndexParameters, or an Identifier when `on_constraint` is set.
    pub target: Option<NodeId>,
    pub on_constraint: bool,
    /// List(SetClause) for DO UPDATE.
    pub set_clause: Option<NodeId>,
    pub condition: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexParameters {
    /// IndexElement nodes.
    pub elements: Vec<NodeId>,
    pub where_clause: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexElement {
    pub expression: NodeId,
    /// COLLATE name, a QualifiedName node.
    pub collation: Option<NodeId>,
    /// Operator class, a QualifiedName node.
    pub op_class: Option<NodeId>,
    pub direction: Option<SortDirection>,
    pub nulls: Option<NullsOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMatchKind {
    Matched,
    NotMatchedByTarget,
    NotMatchedBySource,
}

/// One `WHEN [NOT] MATCHED ... THEN action` arm; `action` absent means
/// `DO NOTHING`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeWhenClause {
    pub matched: MergeMatchKind,
    pub condition: Option<NodeId>,
    pub action: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeInsert {
    /// List(SetTarget).
    pub columns: Option<NodeId>,
    pub overriding: Option<OverridingKind>,
    /// List(Expression) of one row's values; `None` means DEFAULT VALUES.
    pub values: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeUpdate {
    /// List(SetClause).
    pub set_clause: NodeId,
}
