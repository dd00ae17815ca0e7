//! FROM item node payloads.

use super::NodeId;

/// Plain table reference: `[ONLY] schema.name [*] [[AS] alias (cols)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationReference {
    /// QualifiedName.
    pub name: NodeId,
    pub only: bool,
    /// Trailing `*` (explicit inheritance marker).
    pub star: bool,
    pub alias: Option<NodeId>,
    /// List(Identifier).
    pub column_aliases: Option<NodeId>,
}

impl RelationReference {
    pub fn plain(name: NodeId) -> RelationReference {
        RelationReference {
            name,
            only: false,
            star: false,
            alias: None,
            column_aliases: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Cross,
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            JoinKind::Cross => "CROSS JOIN",
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinExpression {
    pub left: NodeId,
    pub right: NodeId,
    pub kind: JoinKind,
    pub natural: bool,
    pub on: Option<NodeId>,
    /// UsingClause node.
    pub using_clause: Option<NodeId>,
    /// Parenthesized join alias: `(a JOIN b ON ...) AS j`.
    pub alias: Option<NodeId>,
}

/// `USING (cols) [AS alias]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingClause {
    /// List(Identifier).
    pub columns: NodeId,
    pub alias: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSubselect {
    pub query: NodeId,
    pub lateral: bool,
    pub alias: Option<NodeId>,
    pub column_aliases: Option<NodeId>,
}

/// Function call in FROM, with optional ordinality and column
/// definition list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeFunctionCall {
    pub function: NodeId,
    pub lateral: bool,
    pub with_ordinality: bool,
    pub alias: Option<NodeId>,
    pub column_aliases: Option<NodeId>,
    /// List(ColumnDefinition) for `AS t (col type, ...)`.
    pub column_definitions: Option<NodeId>,
}

/// `name type` inside a column definition list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: NodeId,
    pub type_name: NodeId,
}

/// `XMLTABLE([XMLNAMESPACES(...),] row_expr PASSING doc_expr COLUMNS ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlTable {
    pub lateral: bool,
    /// List(XmlNamespace).
    pub namespaces: Option<NodeId>,
    pub row_expression: NodeId,
    pub document_expression: NodeId,
    /// List(XmlColumn).
    pub columns: NodeId,
    pub alias: Option<NodeId>,
    pub column_aliases: Option<NodeId>,
}

/// One namespace declaration; `alias` absent means DEFAULT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNamespace {
    pub xml: NodeId,
    pub alias: Option<NodeId>,
}

/// Column of an XMLTABLE: either typed with optional PATH / DEFAULT /
/// nullability, or FOR ORDINALITY.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlColumnDefinition {
    pub name: NodeId,
    pub for_ordinality: bool,
    pub type_name: Option<NodeId>,
    pub path: Option<NodeId>,
    pub nullable: Option<bool>,
    pub default: Option<NodeId>,
}
