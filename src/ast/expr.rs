//! Scalar expression node payloads.
//!
//! Every struct here is a payload of one [`NodeData`](super::NodeData)
//! variant. Fields typed `NodeId` / `Option<NodeId>` / `Vec<NodeId>` are
//! child slots managed by the arena; everything else is scalar data owned
//! by the node itself.

use super::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantKind {
    Integer,
    Float,
    String,
    BinaryString,
    HexString,
    NcharString,
    Boolean,
    Null,
}

/// Literal constant. The value keeps the processed token text; booleans
/// store `"true"` / `"false"`, NULL stores an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub kind: ConstantKind,
    pub value: String,
}

impl Constant {
    pub fn integer(value: impl Into<String>) -> Constant {
        Constant {
            kind: ConstantKind::Integer,
            value: value.into(),
        }
    }

    pub fn string(value: impl Into<String>) -> Constant {
        Constant {
            kind: ConstantKind::String,
            value: value.into(),
        }
    }

    pub fn boolean(value: bool) -> Constant {
        Constant {
            kind: ConstantKind::Boolean,
            value: if value { "true" } else { "false" }.into(),
        }
    }

    pub fn null() -> Constant {
        Constant {
            kind: ConstantKind::Null,
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedParameter {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalParameter {
    pub position: u32,
}

/// `foo.bar.baz` or `rel.*`: a chain of identifiers, optionally ending in
/// a star node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReference {
    pub parts: Vec<NodeId>,
}

/// Subscripting and field selection applied to an arbitrary expression:
/// `(expr).field`, `expr[1]`, `expr[2:3]`, `(expr).*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indirection {
    pub expression: NodeId,
    /// Identifier, star, or array-index items, applied left to right.
    pub items: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayIndexes {
    pub lower: Option<NodeId>,
    pub upper: Option<NodeId>,
    pub is_slice: bool,
}

/// Operator name: either a bare operator like `+` or an
/// `OPERATOR(schema.op)` qualified form. Scalar data, not a child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub schema: Vec<String>,
    pub name: String,
}

impl Operator {
    pub fn bare(name: impl Into<String>) -> Operator {
        Operator {
            schema: Vec::new(),
            name: name.into(),
        }
    }

    pub fn is_qualified(&self) -> bool {
        !self.schema.is_empty()
    }
}

/// Prefix or infix operator application. `left` is absent for prefix
/// operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorExpression {
    pub operator: Operator,
    pub left: Option<NodeId>,
    pub right: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

/// N-ary AND / OR chain, kept flat the way the grammar produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalExpression {
    pub operator: LogicalOperator,
    pub items: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotExpression {
    pub argument: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsPredicate {
    Null,
    True,
    False,
    Unknown,
    Document,
}

/// `x IS [NOT] NULL / TRUE / FALSE / UNKNOWN / DOCUMENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsExpression {
    pub argument: NodeId,
    pub predicate: IsPredicate,
    pub not: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsDistinctFromExpression {
    pub left: NodeId,
    pub right: NodeId,
    pub not: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonPredicateType {
    Value,
    Array,
    Object,
    Scalar,
}

/// `x IS [NOT] JSON [VALUE|ARRAY|OBJECT|SCALAR] [WITH|WITHOUT UNIQUE KEYS]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsJsonExpression {
    pub argument: NodeId,
    pub not: bool,
    pub json_type: Option<JsonPredicateType>,
    pub unique_keys: Option<bool>,
}

/// `arg [NOT] BETWEEN [SYMMETRIC|ASYMMETRIC] left AND right`.
/// `symmetric` is `None` for the plain form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetweenExpression {
    pub argument: NodeId,
    pub left: NodeId,
    pub right: NodeId,
    pub symmetric: Option<bool>,
    pub not: bool,
}

/// `left [NOT] IN right` where right is an expression list or a subselect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InExpression {
    pub left: NodeId,
    pub right: NodeId,
    pub not: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternPredicate {
    Like,
    Ilike,
    SimilarTo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatchingExpression {
    pub argument: NodeId,
    pub pattern: NodeId,
    pub predicate: PatternPredicate,
    pub not: bool,
    pub escape: Option<NodeId>,
}

/// `(a, b) OVERLAPS (c, d)` over two row constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapsExpression {
    pub left: NodeId,
    pub right: NodeId,
}

/// `arg AT TIME ZONE tz` or `arg AT LOCAL` when `time_zone` is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtTimeZoneExpression {
    pub argument: NodeId,
    pub time_zone: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollateExpression {
    pub argument: NodeId,
    /// QualifiedName of the collation.
    pub collation: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypecastExpression {
    pub argument: NodeId,
    /// TypeName node.
    pub type_name: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseExpression {
    pub argument: Option<NodeId>,
    /// WhenClause nodes, at least one.
    pub when_clauses: Vec<NodeId>,
    pub else_clause: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhenClause {
    pub when: NodeId,
    pub then: NodeId,
}

/// Function invocation, also covering aggregate decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// QualifiedName node.
    pub name: NodeId,
    /// List(Expression); items may be NamedArgument nodes.
    pub arguments: NodeId,
    /// `count(*)` style star argument.
    pub star: bool,
    pub distinct: bool,
    pub variadic: bool,
    /// Aggregate `ORDER BY` inside the parentheses; with `within_group`
    /// set it renders as `WITHIN GROUP (ORDER BY ...)` instead.
    pub order_by: Option<NodeId>,
    pub within_group: bool,
    /// `FILTER (WHERE condition)`.
    pub filter: Option<NodeId>,
    /// `OVER` window: a WindowDefinition node (possibly just a name).
    pub over: Option<NodeId>,
}

/// `name := value` / `name => value` inside a function argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArgument {
    pub name: NodeId,
    pub value: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlValueFunctionName {
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    LocalTime,
    LocalTimestamp,
    CurrentRole,
    CurrentUser,
    SessionUser,
    User,
    CurrentCatalog,
    CurrentSchema,
}

impl SqlValueFunctionName {
    pub fn as_str(self) -> &'static str {
        match self {
            SqlValueFunctionName::CurrentDate => "current_date",
            SqlValueFunctionName::CurrentTime => "current_time",
            SqlValueFunctionName::CurrentTimestamp => "current_timestamp",
            SqlValueFunctionName::LocalTime => "localtime",
            SqlValueFunctionName::LocalTimestamp => "localtimestamp",
            SqlValueFunctionName::CurrentRole => "current_role",
            SqlValueFunctionName::CurrentUser => "current_user",
            SqlValueFunctionName::SessionUser => "session_user",
            SqlValueFunctionName::User => "user",
            SqlValueFunctionName::CurrentCatalog => "current_catalog",
            SqlValueFunctionName::CurrentSchema => "current_schema",
        }
    }

    /// Whether the form accepts a precision modifier.
    pub fn allows_modifier(self) -> bool {
        matches!(
            self,
            SqlValueFunctionName::CurrentTime
                | SqlValueFunctionName::CurrentTimestamp
                | SqlValueFunctionName::LocalTime
                | SqlValueFunctionName::LocalTimestamp
        )
    }
}

/// Special parameterless (or precision-only) SQL syntax functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlValueFunction {
    pub name: SqlValueFunctionName,
    pub modifier: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubselectOperator {
    Exists,
    Any,
    All,
    Some,
    Array,
}

/// Subquery used as a scalar expression, optionally decorated with
/// EXISTS / ANY / ALL / SOME / ARRAY.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubselectExpression {
    pub query: NodeId,
    pub operator: Option<SubselectOperator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayComparisonKeyword {
    Any,
    All,
    Some,
}

/// Right side of `x op ANY (array_expression)` where the argument is an
/// array value rather than a subquery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayComparisonExpression {
    pub keyword: ArrayComparisonKeyword,
    pub array: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayExpression {
    pub elements: Vec<NodeId>,
}

/// `ROW(a, b)` or the implicit `(a, b)` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowExpression {
    pub elements: Vec<NodeId>,
    pub explicit_row: bool,
}

/// `GROUPING(a, b)` in a target list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingExpression {
    pub arguments: Vec<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingElementKind {
    Cube,
    Rollup,
    GroupingSets,
    Empty,
}

/// CUBE / ROLLUP / GROUPING SETS / `()` inside GROUP BY.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingElement {
    pub kind: GroupingElementKind,
    pub items: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonKeyValue {
    pub key: NodeId,
    pub value: NodeId,
}

/// `JSON_OBJECT(k : v, ...)` constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonObjectConstructor {
    /// JsonKeyValue nodes.
    pub fields: Vec<NodeId>,
    pub absent_on_null: Option<bool>,
    pub unique_keys: Option<bool>,
    /// RETURNING type, a TypeName node.
    pub returning: Option<NodeId>,
}

/// `JSON_ARRAY(...)` over a value list or a subquery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonArrayConstructor {
    pub elements: Vec<NodeId>,
    pub query: Option<NodeId>,
    pub absent_on_null: Option<bool>,
    pub returning: Option<NodeId>,
}

/// `XMLEXISTS(xpath PASSING document)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlExistsExpression {
    pub row_expression: NodeId,
    pub document_expression: NodeId,
}
