//! # Node Payloads and Child Slot Enumeration
//!
//! [`NodeData`] is the closed sum type over every node kind the parser can
//! produce. Walkers dispatch over it exhaustively, so adding a variant
//! breaks every walker at compile time until it handles the new kind.
//!
//! The [`child_slots!`] macro is the single source of truth for which
//! fields of each payload are child links. Every generic tree operation
//! (child collection, replacement, removal, subtree remapping) expands
//! from it, so a new node kind only needs its slots listed once.

use super::expr::*;
use super::range::*;
use super::stmt::*;
use super::NodeId;

/// Discriminates homogeneous list nodes. List kinds are part of the tree
/// structure: replacing a list keeps its kind, and list operations check
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Scalar expressions (also function arguments and GROUP BY items).
    Expression,
    /// TargetElement nodes (SELECT list, RETURNING).
    Target,
    /// FROM items.
    From,
    /// OrderByElement nodes.
    OrderBy,
    /// WindowDefinition nodes.
    Window,
    /// Identifier nodes.
    Identifier,
    /// SingleSetClause / MultipleSetClause nodes.
    SetClause,
    /// SetTargetElement nodes.
    SetTarget,
    /// LockingElement nodes.
    Locking,
    /// RowExpression nodes (VALUES).
    Row,
    /// ColumnDefinition nodes.
    ColumnDefinition,
    /// XmlNamespace nodes.
    XmlNamespace,
    /// XmlColumnDefinition nodes.
    XmlColumn,
    /// Top-level statements.
    Statement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<NodeId>,
}

/// Bare identifier. Stored case-folded when it came from an unquoted
/// token, verbatim when it was double-quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub value: String,
}

/// Possibly schema-qualified name: a chain of Identifier nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub parts: Vec<NodeId>,
}

/// Type specification: `[SETOF] name [(modifiers)] [array bounds]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    pub setof: bool,
    /// QualifiedName.
    pub name: NodeId,
    /// List(Expression) of type modifiers.
    pub modifiers: Option<NodeId>,
    /// One entry per array dimension; `None` is an unsized `[]`.
    pub bounds: Vec<Option<u32>>,
}

impl TypeName {
    pub fn plain(name: NodeId) -> TypeName {
        TypeName {
            setof: false,
            name,
            modifiers: None,
            bounds: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    // structure
    List(List),
    Identifier(Identifier),
    QualifiedName(QualifiedName),
    Star,
    TypeName(TypeName),

    // statements
    Select(SelectStmt),
    SetOpSelect(SetOpSelectStmt),
    Values(ValuesStmt),
    Insert(InsertStmt),
    Update(UpdateStmt),
    Delete(DeleteStmt),
    Merge(MergeStmt),

    // clauses
    With(WithClause),
    Cte(CommonTableExpression),
    Search(SearchClause),
    Cycle(CycleClause),
    Target(TargetElement),
    OrderBy(OrderByElement),
    WindowDef(WindowDefinition),
    WindowFrame(WindowFrame),
    WindowFrameBound(WindowFrameBound),
    Locking(LockingElement),
    SetTarget(SetTargetElement),
    SingleSet(SingleSetClause),
    MultipleSet(MultipleSetClause),
    SetToDefault,
    OnConflict(OnConflictClause),
    IndexParameters(IndexParameters),
    IndexElement(IndexElement),
    MergeWhen(MergeWhenClause),
    MergeInsert(MergeInsert),
    MergeUpdate(MergeUpdate),
    MergeDelete,

    // FROM items
    RelationRef(RelationReference),
    Join(JoinExpression),
    Using(UsingClause),
    RangeSubselect(RangeSubselect),
    RangeFunction(RangeFunctionCall),
    ColumnDef(ColumnDefinition),
    XmlTable(XmlTable),
    XmlNamespace(XmlNamespace),
    XmlColumn(XmlColumnDefinition),

    // expressions
    Constant(Constant),
    NamedParam(NamedParameter),
    PositionalParam(PositionalParameter),
    ColumnRef(ColumnReference),
    Indirection(Indirection),
    ArrayIndexes(ArrayIndexes),
    Operator(OperatorExpression),
    Logical(LogicalExpression),
    Not(NotExpression),
    Is(IsExpression),
    IsDistinctFrom(IsDistinctFromExpression),
    IsJson(IsJsonExpression),
    Between(BetweenExpression),
    In(InExpression),
    PatternMatching(PatternMatchingExpression),
    Overlaps(OverlapsExpression),
    AtTimeZone(AtTimeZoneExpression),
    Collate(CollateExpression),
    Typecast(TypecastExpression),
    Case(CaseExpression),
    When(WhenClause),
    FunctionCall(FunctionCall),
    NamedArgument(NamedArgument),
    SqlValueFunction(SqlValueFunction),
    Subselect(SubselectExpression),
    ArrayComparison(ArrayComparisonExpression),
    Array(ArrayExpression),
    Row(RowExpression),
    Grouping(GroupingExpression),
    GroupingElement(GroupingElement),
    JsonKeyValue(JsonKeyValue),
    JsonObject(JsonObjectConstructor),
    JsonArray(JsonArrayConstructor),
    XmlExists(XmlExistsExpression),
}

impl NodeData {
    /// Stable kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeData::List(_) => "list",
            NodeData::Identifier(_) => "identifier",
            NodeData::QualifiedName(_) => "qualified name",
            NodeData::Star => "star",
            NodeData::TypeName(_) => "type name",
            NodeData::Select(_) => "select statement",
            NodeData::SetOpSelect(_) => "set operation",
            NodeData::Values(_) => "values statement",
            NodeData::Insert(_) => "insert statement",
            NodeData::Update(_) => "update statement",
            NodeData::Delete(_) => "delete statement",
            NodeData::Merge(_) => "merge statement",
            NodeData::With(_) => "with clause",
            NodeData::Cte(_) => "common table expression",
            NodeData::Search(_) => "search clause",
            NodeData::Cycle(_) => "cycle clause",
            NodeData::Target(_) => "target element",
            NodeData::OrderBy(_) => "order by element",
            NodeData::WindowDef(_) => "window definition",
            NodeData::WindowFrame(_) => "window frame",
            NodeData::WindowFrameBound(_) => "window frame bound",
            NodeData::Locking(_) => "locking element",
            NodeData::SetTarget(_) => "set target element",
            NodeData::SingleSet(_) => "set clause",
            NodeData::MultipleSet(_) => "multiple set clause",
            NodeData::SetToDefault => "default placeholder",
            NodeData::OnConflict(_) => "on conflict clause",
            NodeData::IndexParameters(_) => "index parameters",
            NodeData::IndexElement(_) => "index element",
            NodeData::MergeWhen(_) => "merge when clause",
            NodeData::MergeInsert(_) => "merge insert action",
            NodeData::MergeUpdate(_) => "merge update action",
            NodeData::MergeDelete => "merge delete action",
            NodeData::RelationRef(_) => "relation reference",
            NodeData::Join(_) => "join expression",
            NodeData::Using(_) => "using clause",
            NodeData::RangeSubselect(_) => "subselect in FROM",
            NodeData::RangeFunction(_) => "function call in FROM",
            NodeData::ColumnDef(_) => "column definition",
            NodeData::XmlTable(_) => "xmltable",
            NodeData::XmlNamespace(_) => "xml namespace",
            NodeData::XmlColumn(_) => "xmltable column",
            NodeData::Constant(_) => "constant",
            NodeData::NamedParam(_) => "named parameter",
            NodeData::PositionalParam(_) => "positional parameter",
            NodeData::ColumnRef(_) => "column reference",
            NodeData::Indirection(_) => "indirection",
            NodeData::ArrayIndexes(_) => "array subscript",
            NodeData::Operator(_) => "operator expression",
            NodeData::Logical(_) => "logical expression",
            NodeData::Not(_) => "not expression",
            NodeData::Is(_) => "is expression",
            NodeData::IsDistinctFrom(_) => "is distinct from expression",
            NodeData::IsJson(_) => "is json expression",
            NodeData::Between(_) => "between expression",
            NodeData::In(_) => "in expression",
            NodeData::PatternMatching(_) => "pattern matching expression",
            NodeData::Overlaps(_) => "overlaps expression",
            NodeData::AtTimeZone(_) => "at time zone expression",
            NodeData::Collate(_) => "collate expression",
            NodeData::Typecast(_) => "typecast expression",
            NodeData::Case(_) => "case expression",
            NodeData::When(_) => "when clause",
            NodeData::FunctionCall(_) => "function call",
            NodeData::NamedArgument(_) => "named argument",
            NodeData::SqlValueFunction(_) => "sql value function",
            NodeData::Subselect(_) => "subselect expression",
            NodeData::ArrayComparison(_) => "array comparison",
            NodeData::Array(_) => "array expression",
            NodeData::Row(_) => "row expression",
            NodeData::Grouping(_) => "grouping expression",
            NodeData::GroupingElement(_) => "grouping element",
            NodeData::JsonKeyValue(_) => "json key-value pair",
            NodeData::JsonObject(_) => "json object constructor",
            NodeData::JsonArray(_) => "json array constructor",
            NodeData::XmlExists(_) => "xmlexists expression",
        }
    }
}

/// Expands per-variant child slot handling. The callback macro receives
/// `(req, field)`, `(opt, field)` or `(vec, field)` for every child slot
/// of the matched payload; field expressions borrow according to the
/// mutability of `$data`.
macro_rules! child_slots {
    ($data:expr, $cb:ident) => {
        match $data {
            $crate::ast::NodeData::List(n) => {
                $cb!(vec, n.items);
            }
            $crate::ast::NodeData::Identifier(_)
            | $crate::ast::NodeData::Star
            | $crate::ast::NodeData::SetToDefault
            | $crate::ast::NodeData::MergeDelete
            | $crate::ast::NodeData::Constant(_)
            | $crate::ast::NodeData::NamedParam(_)
            | $crate::ast::NodeData::PositionalParam(_)
            | $crate::ast::NodeData::SqlValueFunction(_) => {}
            $crate::ast::NodeData::QualifiedName(n) => {
                $cb!(vec, n.parts);
            }
            $crate::ast::NodeData::TypeName(n) => {
                $cb!(req, n.name);
                $cb!(opt, n.modifiers);
            }
            $crate::ast::NodeData::Select(n) => {
                $cb!(opt, n.with);
                $cb!(opt, n.distinct_on);
                $cb!(req, n.target_list);
                $cb!(opt, n.from);
                $cb!(opt, n.where_clause);
                $cb!(opt, n.group_by);
                $cb!(opt, n.having);
                $cb!(opt, n.window);
                $cb!(opt, n.order_by);
                $cb!(opt, n.limit);
                $cb!(opt, n.offset);
                $cb!(opt, n.locking);
            }
            $crate::ast::NodeData::SetOpSelect(n) => {
                $cb!(opt, n.with);
                $cb!(req, n.left);
                $cb!(req, n.right);
                $cb!(opt, n.order_by);
                $cb!(opt, n.limit);
                $cb!(opt, n.offset);
                $cb!(opt, n.locking);
            }
            $crate::ast::NodeData::Values(n) => {
                $cb!(opt, n.with);
                $cb!(req, n.rows);
                $cb!(opt, n.order_by);
                $cb!(opt, n.limit);
                $cb!(opt, n.offset);
            }
            $crate::ast::NodeData::Insert(n) => {
                $cb!(opt, n.with);
                $cb!(req, n.relation);
                $cb!(opt, n.columns);
                $cb!(opt, n.values);
                $cb!(opt, n.on_conflict);
                $cb!(opt, n.returning);
            }
            $crate::ast::NodeData::Update(n) => {
                $cb!(opt, n.with);
                $cb!(req, n.relation);
                $cb!(req, n.set_clause);
                $cb!(opt, n.from);
                $cb!(opt, n.where_clause);
                $cb!(opt, n.returning);
            }
            $crate::ast::NodeData::Delete(n) => {
                $cb!(opt, n.with);
                $cb!(req, n.relation);
                $cb!(opt, n.using);
                $cb!(opt, n.where_clause);
                $cb!(opt, n.returning);
            }
            $crate::ast::NodeData::Merge(n) => {
                $cb!(opt, n.with);
                $cb!(req, n.relation);
                $cb!(req, n.using_item);
                $cb!(req, n.on);
                $cb!(vec, n.when_clauses);
                $cb!(opt, n.returning);
            }
            $crate::ast::NodeData::With(n) => {
                $cb!(vec, n.ctes);
            }
            $crate::ast::NodeData::Cte(n) => {
                $cb!(req, n.name);
                $cb!(opt, n.column_aliases);
                $cb!(req, n.statement);
                $cb!(opt, n.search);
                $cb!(opt, n.cycle);
            }
            $crate::ast::NodeData::Search(n) => {
                $cb!(req, n.track_columns);
                $cb!(req, n.sequence_column);
            }
            $crate::ast::NodeData::Cycle(n) => {
                $cb!(req, n.track_columns);
                $cb!(req, n.mark_column);
                $cb!(opt, n.mark_value);
                $cb!(opt, n.mark_default);
                $cb!(req, n.path_column);
            }
            $crate::ast::NodeData::Target(n) => {
                $cb!(req, n.expression);
                $cb!(opt, n.alias);
            }
            $crate::ast::NodeData::OrderBy(n) => {
                $cb!(req, n.expression);
            }
            $crate::ast::NodeData::WindowDef(n) => {
                $cb!(opt, n.name);
                $cb!(opt, n.ref_name);
                $cb!(opt, n.partition_by);
                $cb!(opt, n.order_by);
                $cb!(opt, n.frame);
            }
            $crate::ast::NodeData::WindowFrame(n) => {
                $cb!(req, n.start);
                $cb!(opt, n.end);
            }
            $crate::ast::NodeData::WindowFrameBound(n) => {
                $cb!(opt, n.value);
            }
            $crate::ast::NodeData::Locking(n) => {
                $cb!(vec, n.relations);
            }
            $crate::ast::NodeData::SetTarget(n) => {
                $cb!(req, n.name);
                $cb!(vec, n.indirection);
            }
            $crate::ast::NodeData::SingleSet(n) => {
                $cb!(req, n.column);
                $cb!(req, n.value);
            }
            $crate::ast::NodeData::MultipleSet(n) => {
                $cb!(req, n.columns);
                $cb!(req, n.value);
            }
            $crate::ast::NodeData::OnConflict(n) => {
                $cb!(opt, n.target);
                $cb!(opt, n.set_clause);
                $cb!(opt, n.condition);
            }
            $crate::ast::NodeData::IndexParameters(n) => {
                $cb!(vec, n.elements);
                $cb!(opt, n.where_clause);
            }
            $crate::ast::NodeData::IndexElement(n) => {
                $cb!(req, n.expression);
                $cb!(opt, n.collation);
                $cb!(opt, n.op_class);
            }
            $crate::ast::NodeData::MergeWhen(n) => {
                $cb!(opt, n.condition);
                $cb!(opt, n.action);
            }
            $crate::ast::NodeData::MergeInsert(n) => {
                $cb!(opt, n.columns);
                $cb!(opt, n.values);
            }
            $crate::ast::NodeData::MergeUpdate(n) => {
                $cb!(req, n.set_clause);
            }
            $crate::ast::NodeData::RelationRef(n) => {
                $cb!(req, n.name);
                $cb!(opt, n.alias);
                $cb!(opt, n.column_aliases);
            }
            $crate::ast::NodeData::Join(n) => {
                $cb!(req, n.left);
                $cb!(req, n.right);
                $cb!(opt, n.on);
                $cb!(opt, n.using_clause);
                $cb!(opt, n.alias);
            }
            $crate::ast::NodeData::Using(n) => {
                $cb!(req, n.columns);
                $cb!(opt, n.alias);
            }
            $crate::ast::NodeData::RangeSubselect(n) => {
                $cb!(req, n.query);
                $cb!(opt, n.alias);
                $cb!(opt, n.column_aliases);
            }
            $crate::ast::NodeData::RangeFunction(n) => {
                $cb!(req, n.function);
                $cb!(opt, n.alias);
                $cb!(opt, n.column_aliases);
                $cb!(opt, n.column_definitions);
            }
            $crate::ast::NodeData::ColumnDef(n) => {
                $cb!(req, n.name);
                $cb!(req, n.type_name);
            }
            $crate::ast::NodeData::XmlTable(n) => {
                $cb!(opt, n.namespaces);
                $cb!(req, n.row_expression);
                $cb!(req, n.document_expression);
                $cb!(req, n.columns);
                $cb!(opt, n.alias);
                $cb!(opt, n.column_aliases);
            }
            $crate::ast::NodeData::XmlNamespace(n) => {
                $cb!(req, n.xml);
                $cb!(opt, n.alias);
            }
            $crate::ast::NodeData::XmlColumn(n) => {
                $cb!(req, n.name);
                $cb!(opt, n.type_name);
                $cb!(opt, n.path);
                $cb!(opt, n.default);
            }
            $crate::ast::NodeData::ColumnRef(n) => {
                $cb!(vec, n.parts);
            }
            $crate::ast::NodeData::Indirection(n) => {
                $cb!(req, n.expression);
                $cb!(vec, n.items);
            }
            $crate::ast::NodeData::ArrayIndexes(n) => {
                $cb!(opt, n.lower);
                $cb!(opt, n.upper);
            }
            $crate::ast::NodeData::Operator(n) => {
                $cb!(opt, n.left);
                $cb!(req, n.right);
            }
            $crate::ast::NodeData::Logical(n) => {
                $cb!(vec, n.items);
            }
            $crate::ast::NodeData::Not(n) => {
                $cb!(req, n.argument);
            }
            $crate::ast::NodeData::Is(n) => {
                $cb!(req, n.argument);
            }
            $crate::ast::NodeData::IsDistinctFrom(n) => {
                $cb!(req, n.left);
                $cb!(req, n.right);
            }
            $crate::ast::NodeData::IsJson(n) => {
                $cb!(req, n.argument);
            }
            $crate::ast::NodeData::Between(n) => {
                $cb!(req, n.argument);
                $cb!(req, n.left);
                $cb!(req, n.right);
            }
            $crate::ast::NodeData::In(n) => {
                $cb!(req, n.left);
                $cb!(req, n.right);
            }
            $crate::ast::NodeData::PatternMatching(n) => {
                $cb!(req, n.argument);
                $cb!(req, n.pattern);
                $cb!(opt, n.escape);
            }
            $crate::ast::NodeData::Overlaps(n) => {
                $cb!(req, n.left);
                $cb!(req, n.right);
            }
            $crate::ast::NodeData::AtTimeZone(n) => {
                $cb!(req, n.argument);
                $cb!(opt, n.time_zone);
            }
            $crate::ast::NodeData::Collate(n) => {
                $cb!(req, n.argument);
                $cb!(req, n.collation);
            }
            $crate::ast::NodeData::Typecast(n) => {
                $cb!(req, n.argument);
                $cb!(req, n.type_name);
            }
            $crate::ast::NodeData::Case(n) => {
                $cb!(opt, n.argument);
                $cb!(vec, n.when_clauses);
                $cb!(opt, n.else_clause);
            }
            $crate::ast::NodeData::When(n) => {
                $cb!(req, n.when);
                $cb!(req, n.then);
            }
            $crate::ast::NodeData::FunctionCall(n) => {
                $cb!(req, n.name);
                $cb!(req, n.arguments);
                $cb!(opt, n.order_by);
                $cb!(opt, n.filter);
                $cb!(opt, n.over);
            }
            $crate::ast::NodeData::NamedArgument(n) => {
                $cb!(req, n.name);
                $cb!(req, n.value);
            }
            $crate::ast::NodeData::Subselect(n) => {
                $cb!(req, n.query);
            }
            $crate::ast::NodeData::ArrayComparison(n) => {
                $cb!(req, n.array);
            }
            $crate::ast::NodeData::Array(n) => {
                $cb!(vec, n.elements);
            }
            $crate::ast::NodeData::Row(n) => {
                $cb!(vec, n.elements);
            }
            $crate::ast::NodeData::Grouping(n) => {
                $cb!(vec, n.arguments);
            }
            $crate::ast::NodeData::GroupingElement(n) => {
                $cb!(vec, n.items);
            }
            $crate::ast::NodeData::JsonKeyValue(n) => {
                $cb!(req, n.key);
                $cb!(req, n.value);
            }
            $crate::ast::NodeData::JsonObject(n) => {
                $cb!(vec, n.fields);
                $cb!(opt, n.returning);
            }
            $crate::ast::NodeData::JsonArray(n) => {
                $cb!(vec, n.elements);
                $cb!(opt, n.query);
                $cb!(opt, n.returning);
            }
            $crate::ast::NodeData::XmlExists(n) => {
                $cb!(req, n.row_expression);
                $cb!(req, n.document_expression);
            }
        }
    };
}

pub(crate) use child_slots;
