//! # SQL Generation
//!
//! [`SqlBuilder`] regenerates SQL text from a tree. Output is canonical:
//! keywords uppercase, one space between clauses, `", "` between list
//! items, and only the parentheses required to preserve the parse shape.
//! Feeding the output back through the parser yields a structurally equal
//! tree.

use crate::ast::expr::*;
use crate::ast::range::*;
use crate::ast::stmt::*;
use crate::ast::{Ast, Identifier, List, ListKind, NodeData, NodeId, QualifiedName, TypeName};
use crate::keyword::{Keyword, KeywordCategory};
use crate::precedence::{
    scalar_precedence, set_op_precedence, Associativity, ScalarPrecedence, SetOpPrecedence,
};
use crate::walker::{dispatch, TreeWalker};

#[derive(Debug, Default)]
pub struct SqlBuilder;

impl SqlBuilder {
    pub fn new() -> SqlBuilder {
        SqlBuilder
    }

    /// Renders the whole tree starting at its root.
    pub fn build(&mut self, ast: &Ast) -> Option<String> {
        ast.root().map(|root| self.build_node(ast, root))
    }

    pub fn build_node(&mut self, ast: &Ast, id: NodeId) -> String {
        dispatch(ast, id, self)
    }

    fn node(&mut self, ast: &Ast, id: NodeId) -> String {
        dispatch(ast, id, self)
    }

    fn opt_node(&mut self, ast: &Ast, id: Option<NodeId>) -> Option<String> {
        id.map(|id| self.node(ast, id))
    }

    fn join(&mut self, ast: &Ast, items: &[NodeId], sep: &str) -> String {
        items
            .iter()
            .map(|&item| self.node(ast, item))
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// Renders a child of a precedence-bearing parent, wrapping it in
    /// parentheses when re-parsing the flat text would bind differently.
    fn operand(&mut self, ast: &Ast, parent: NodeId, child: NodeId, right_side: bool) -> String {
        let text = self.node(ast, child);
        if needs_parentheses(ast, parent, child, right_side) {
            format!("({text})")
        } else {
            text
        }
    }

    /// One side of a set operation. Wraps when the side carries its own
    /// ORDER BY / LIMIT / OFFSET / locking, or when its operator binds
    /// looser than the parent (equal binding wraps the right side only).
    fn set_op_side(
        &mut self,
        ast: &Ast,
        child: NodeId,
        parent: SetOpPrecedence,
        right_side: bool,
    ) -> String {
        let child_prec = set_op_precedence(ast, child);
        let wrap = contains_common_clauses(ast, child)
            || child_prec < parent
            || (right_side && child_prec == parent);
        let text = self.node(ast, child);
        if wrap {
            format!("({text})")
        } else {
            text
        }
    }

    /// ORDER BY / LIMIT / OFFSET / locking, shared by every query form.
    fn common_select_clauses(
        &mut self,
        ast: &Ast,
        parts: &mut Vec<String>,
        order_by: Option<NodeId>,
        limit: Option<NodeId>,
        limit_with_ties: bool,
        offset: Option<NodeId>,
        locking: Option<NodeId>,
    ) {
        if let Some(order) = order_by {
            parts.push(format!("ORDER BY {}", self.node(ast, order)));
        }
        if let Some(limit) = limit {
            if limit_with_ties {
                let (prec, _) = scalar_precedence(ast, limit);
                let mut text = self.node(ast, limit);
                if prec < ScalarPrecedence::ATOM {
                    text = format!("({text})");
                }
                parts.push(format!("FETCH FIRST {text} ROWS WITH TIES"));
            } else {
                parts.push(format!("LIMIT {}", self.node(ast, limit)));
            }
        }
        if let Some(offset) = offset {
            parts.push(format!("OFFSET {}", self.node(ast, offset)));
        }
        if let Some(locking) = locking {
            parts.push(self.node(ast, locking));
        }
    }

    fn returning_clause(&mut self, ast: &Ast, parts: &mut Vec<String>, returning: Option<NodeId>) {
        if let Some(returning) = returning {
            parts.push(format!("RETURNING {}", self.node(ast, returning)));
        }
    }

    fn with_prefix(&mut self, ast: &Ast, parts: &mut Vec<String>, with: Option<NodeId>) {
        if let Some(with) = with {
            parts.push(self.node(ast, with));
        }
    }

    /// `ARRAY[...]`; nested array constructors render bare brackets.
    fn array_brackets(&mut self, ast: &Ast, elements: &[NodeId]) -> String {
        let inner = elements
            .iter()
            .map(|&element| match ast.data(element) {
                NodeData::Array(nested) => self.array_brackets(ast, &nested.elements),
                _ => self.node(ast, element),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{inner}]")
    }

    fn alias_suffix(
        &mut self,
        ast: &Ast,
        alias: Option<NodeId>,
        column_aliases: Option<NodeId>,
    ) -> String {
        match (alias, column_aliases) {
            (Some(alias), Some(columns)) => format!(
                " AS {} ({})",
                self.node(ast, alias),
                self.node(ast, columns)
            ),
            (Some(alias), None) => format!(" AS {}", self.node(ast, alias)),
            (None, Some(columns)) => format!(" AS ({})", self.node(ast, columns)),
            (None, None) => String::new(),
        }
    }
}

/// Decides wrapping for `child` rendered inside `parent`. Two parents get
/// special treatment: BETWEEN bounds admit anything down to typecasts
/// without parentheses, and indirection bases need them unless the base
/// is a parameter, a plain subquery, or (before a subscript) an atom.
fn needs_parentheses(ast: &Ast, parent: NodeId, child: NodeId, right_side: bool) -> bool {
    let (child_prec, _) = scalar_precedence(ast, child);
    match ast.data(parent) {
        NodeData::Between(_) => {
            let threshold = if right_side {
                ScalarPrecedence::TYPECAST
            } else {
                ScalarPrecedence::BETWEEN
            };
            child_prec < threshold
        }
        NodeData::Indirection(n) => {
            let subscript_first = n
                .items
                .first()
                .is_some_and(|&item| matches!(ast.data(item), NodeData::ArrayIndexes(_)));
            if subscript_first {
                child_prec < ScalarPrecedence::ATOM
            } else {
                !matches!(
                    ast.data(child),
                    NodeData::NamedParam(_)
                        | NodeData::PositionalParam(_)
                        | NodeData::Subselect(SubselectExpression { operator: None, .. })
                )
            }
        }
        _ => {
            let (parent_prec, assoc) = scalar_precedence(ast, parent);
            match assoc {
                Associativity::Right => {
                    child_prec < parent_prec || (!right_side && child_prec == parent_prec)
                }
                Associativity::Left => {
                    child_prec < parent_prec || (right_side && child_prec == parent_prec)
                }
                Associativity::None => child_prec <= parent_prec,
            }
        }
    }
}

/// Whether a query node carries ORDER BY / LIMIT / OFFSET / locking of
/// its own. Such a side of a set operation must be parenthesized.
fn contains_common_clauses(ast: &Ast, id: NodeId) -> bool {
    match ast.data(id) {
        NodeData::Select(n) => {
            n.order_by.is_some()
                || n.limit.is_some()
                || n.offset.is_some()
                || n.locking.is_some()
        }
        NodeData::SetOpSelect(n) => {
            n.order_by.is_some()
                || n.limit.is_some()
                || n.offset.is_some()
                || n.locking.is_some()
        }
        NodeData::Values(n) => n.order_by.is_some() || n.limit.is_some() || n.offset.is_some(),
        _ => false,
    }
}

/// Quotes an identifier unless it is safe to print bare: lowercase
/// identifier shape and not a keyword the grammar would claim.
/// Unreserved and column-name keywords stay bare; they are valid
/// identifiers everywhere the builder emits one.
fn quote_identifier(value: &str) -> String {
    let bare_shape = value
        .chars()
        .enumerate()
        .all(|(i, c)| match c {
            'a'..='z' | '_' => true,
            '0'..='9' | '$' => i > 0,
            _ => false,
        })
        && !value.is_empty();
    let claimed = Keyword::lookup(value).is_some_and(|kw| {
        matches!(
            kw.category(),
            KeywordCategory::Reserved | KeywordCategory::TypeFuncName
        )
    });
    if bare_shape && !claimed {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('"', "\"\""))
    }
}

fn quote_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn set_operator_sql(op: SetOperator) -> &'static str {
    match op {
        SetOperator::Union => "UNION",
        SetOperator::UnionAll => "UNION ALL",
        SetOperator::Intersect => "INTERSECT",
        SetOperator::IntersectAll => "INTERSECT ALL",
        SetOperator::Except => "EXCEPT",
        SetOperator::ExceptAll => "EXCEPT ALL",
    }
}

fn set_operator_precedence(op: SetOperator) -> SetOpPrecedence {
    match op {
        SetOperator::Intersect | SetOperator::IntersectAll => SetOpPrecedence::INTERSECT,
        _ => SetOpPrecedence::UNION,
    }
}

impl TreeWalker for SqlBuilder {
    type Output = String;

    fn walk_list(&mut self, ast: &Ast, _id: NodeId, node: &List) -> String {
        let sep = match node.kind {
            ListKind::Statement => "; ",
            // Locking clauses stack without commas: FOR UPDATE FOR SHARE ...
            ListKind::Locking => " ",
            _ => ", ",
        };
        self.join(ast, &node.items, sep)
    }

    fn walk_identifier(&mut self, _ast: &Ast, _id: NodeId, node: &Identifier) -> String {
        quote_identifier(&node.value)
    }

    fn walk_qualified_name(&mut self, ast: &Ast, _id: NodeId, node: &QualifiedName) -> String {
        self.join(ast, &node.parts, ".")
    }

    fn walk_star(&mut self, _ast: &Ast, _id: NodeId) -> String {
        "*".to_string()
    }

    fn walk_type_name(&mut self, ast: &Ast, _id: NodeId, node: &TypeName) -> String {
        let mut out = String::new();
        if node.setof {
            out.push_str("SETOF ");
        }
        out.push_str(&self.node(ast, node.name));
        if let Some(modifiers) = node.modifiers {
            out.push('(');
            out.push_str(&self.node(ast, modifiers));
            out.push(')');
        }
        for bound in &node.bounds {
            match bound {
                Some(size) => out.push_str(&format!("[{size}]")),
                None => out.push_str("[]"),
            }
        }
        out
    }

    fn walk_select(&mut self, ast: &Ast, _id: NodeId, node: &SelectStmt) -> String {
        let mut parts = Vec::new();
        self.with_prefix(ast, &mut parts, node.with);
        let mut head = String::from("SELECT");
        if let Some(on) = node.distinct_on {
            head.push_str(&format!(" DISTINCT ON ({})", self.node(ast, on)));
        } else if node.distinct {
            head.push_str(" DISTINCT");
        }
        head.push(' ');
        head.push_str(&self.node(ast, node.target_list));
        parts.push(head);
        if let Some(from) = node.from {
            parts.push(format!("FROM {}", self.node(ast, from)));
        }
        if let Some(cond) = node.where_clause {
            parts.push(format!("WHERE {}", self.node(ast, cond)));
        }
        if let Some(group) = node.group_by {
            let distinct = if node.group_distinct { "DISTINCT " } else { "" };
            parts.push(format!("GROUP BY {}{}", distinct, self.node(ast, group)));
        }
        if let Some(having) = node.having {
            parts.push(format!("HAVING {}", self.node(ast, having)));
        }
        if let Some(window) = node.window {
            parts.push(format!("WINDOW {}", self.node(ast, window)));
        }
        self.common_select_clauses(
            ast,
            &mut parts,
            node.order_by,
            node.limit,
            node.limit_with_ties,
            node.offset,
            node.locking,
        );
        parts.join(" ")
    }

    fn walk_set_op_select(&mut self, ast: &Ast, _id: NodeId, node: &SetOpSelectStmt) -> String {
        let mut parts = Vec::new();
        self.with_prefix(ast, &mut parts, node.with);
        let prec = set_operator_precedence(node.operator);
        parts.push(self.set_op_side(ast, node.left, prec, false));
        parts.push(set_operator_sql(node.operator).to_string());
        parts.push(self.set_op_side(ast, node.right, prec, true));
        self.common_select_clauses(
            ast,
            &mut parts,
            node.order_by,
            node.limit,
            node.limit_with_ties,
            node.offset,
            node.locking,
        );
        parts.join(" ")
    }

    fn walk_values(&mut self, ast: &Ast, _id: NodeId, node: &ValuesStmt) -> String {
        let mut parts = Vec::new();
        self.with_prefix(ast, &mut parts, node.with);
        // The ROW keyword is not valid directly under VALUES, so rows are
        // rendered as plain parenthesized lists here.
        let rows: Vec<NodeId> = match ast.data(node.rows) {
            NodeData::List(list) => list.items.clone(),
            _ => Vec::new(),
        };
        let rendered = rows
            .iter()
            .map(|&row| match ast.data(row) {
                NodeData::Row(r) => format!("({})", self.join(ast, &r.elements, ", ")),
                _ => self.node(ast, row),
            })
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(format!("VALUES {rendered}"));
        self.common_select_clauses(
            ast,
            &mut parts,
            node.order_by,
            node.limit,
            node.limit_with_ties,
            node.offset,
            None,
        );
        parts.join(" ")
    }

    fn walk_insert(&mut self, ast: &Ast, _id: NodeId, node: &InsertStmt) -> String {
        let mut parts = Vec::new();
        self.with_prefix(ast, &mut parts, node.with);
        parts.push(format!("INSERT INTO {}", self.node(ast, node.relation)));
        if let Some(columns) = node.columns {
            parts.push(format!("({})", self.node(ast, columns)));
        }
        if let Some(overriding) = node.overriding {
            let kind = match overriding {
                OverridingKind::System => "SYSTEM",
                OverridingKind::User => "USER",
            };
            parts.push(format!("OVERRIDING {kind} VALUE"));
        }
        match node.values {
            Some(values) => parts.push(self.node(ast, values)),
            None => parts.push("DEFAULT VALUES".to_string()),
        }
        if let Some(on_conflict) = node.on_conflict {
            parts.push(self.node(ast, on_conflict));
        }
        self.returning_clause(ast, &mut parts, node.returning);
        parts.join(" ")
    }

    fn walk_update(&mut self, ast: &Ast, _id: NodeId, node: &UpdateStmt) -> String {
        let mut parts = Vec::new();
        self.with_prefix(ast, &mut parts, node.with);
        parts.push(format!("UPDATE {}", self.node(ast, node.relation)));
        parts.push(format!("SET {}", self.node(ast, node.set_clause)));
        if let Some(from) = node.from {
            parts.push(format!("FROM {}", self.node(ast, from)));
        }
        if let Some(cond) = node.where_clause {
            parts.push(format!("WHERE {}", self.node(ast, cond)));
        }
        self.returning_clause(ast, &mut parts, node.returning);
        parts.join(" ")
    }

    fn walk_delete(&mut self, ast: &Ast, _id: NodeId, node: &DeleteStmt) -> String {
        let mut parts = Vec::new();
        self.with_prefix(ast, &mut parts, node.with);
        parts.push(format!("DELETE FROM {}", self.node(ast, node.relation)));
        if let Some(using) = node.using {
            parts.push(format!("USING {}", self.node(ast, using)));
        }
        if let Some(cond) = node.where_clause {
            parts.push(format!("WHERE {}", self.node(ast, cond)));
        }
        self.returning_clause(ast, &mut parts, node.returning);
        parts.join(" ")
    }

    fn walk_merge(&mut self, ast: &Ast, _id: NodeId, node: &MergeStmt) -> String {
        let mut parts = Vec::new();
        self.with_prefix(ast, &mut parts, node.with);
        parts.push(format!("MERGE INTO {}", self.node(ast, node.relation)));
        parts.push(format!("USING {}", self.node(ast, node.using_item)));
        parts.push(format!("ON {}", self.node(ast, node.on)));
        for &when in &node.when_clauses {
            parts.push(self.node(ast, when));
        }
        self.returning_clause(ast, &mut parts, node.returning);
        parts.join(" ")
    }

    fn walk_with_clause(&mut self, ast: &Ast, _id: NodeId, node: &WithClause) -> String {
        let recursive = if node.recursive { "RECURSIVE " } else { "" };
        format!("WITH {}{}", recursive, self.join(ast, &node.ctes, ", "))
    }

    fn walk_cte(&mut self, ast: &Ast, _id: NodeId, node: &CommonTableExpression) -> String {
        let mut out = self.node(ast, node.name);
        if let Some(columns) = node.column_aliases {
            out.push_str(&format!(" ({})", self.node(ast, columns)));
        }
        out.push_str(" AS ");
        match node.materialized {
            Some(true) => out.push_str("MATERIALIZED "),
            Some(false) => out.push_str("NOT MATERIALIZED "),
            None => {}
        }
        out.push_str(&format!("({})", self.node(ast, node.statement)));
        if let Some(search) = node.search {
            out.push(' ');
            out.push_str(&self.node(ast, search));
        }
        if let Some(cycle) = node.cycle {
            out.push(' ');
            out.push_str(&self.node(ast, cycle));
        }
        out
    }

    fn walk_search_clause(&mut self, ast: &Ast, _id: NodeId, node: &SearchClause) -> String {
        format!(
            "SEARCH {} FIRST BY {} SET {}",
            if node.breadth_first { "BREADTH" } else { "DEPTH" },
            self.node(ast, node.track_columns),
            self.node(ast, node.sequence_column)
        )
    }

    fn walk_cycle_clause(&mut self, ast: &Ast, _id: NodeId, node: &CycleClause) -> String {
        let mut out = format!(
            "CYCLE {} SET {}",
            self.node(ast, node.track_columns),
            self.node(ast, node.mark_column)
        );
        if let (Some(value), Some(default)) = (node.mark_value, node.mark_default) {
            out.push_str(&format!(
                " TO {} DEFAULT {}",
                self.node(ast, value),
                self.node(ast, default)
            ));
        }
        out.push_str(&format!(" USING {}", self.node(ast, node.path_column)));
        out
    }

    fn walk_target_element(&mut self, ast: &Ast, _id: NodeId, node: &TargetElement) -> String {
        match node.alias {
            Some(alias) => format!(
                "{} AS {}",
                self.node(ast, node.expression),
                self.node(ast, alias)
            ),
            None => self.node(ast, node.expression),
        }
    }

    fn walk_order_by_element(&mut self, ast: &Ast, _id: NodeId, node: &OrderByElement) -> String {
        let mut out = self.node(ast, node.expression);
        if let Some(op) = &node.using_operator {
            out.push_str(" USING ");
            out.push_str(&render_operator_name(op));
        } else if let Some(direction) = node.direction {
            out.push_str(match direction {
                SortDirection::Asc => " ASC",
                SortDirection::Desc => " DESC",
            });
        }
        if let Some(nulls) = node.nulls {
            out.push_str(match nulls {
                NullsOrder::First => " NULLS FIRST",
                NullsOrder::Last => " NULLS LAST",
            });
        }
        out
    }

    fn walk_window_definition(&mut self, ast: &Ast, _id: NodeId, node: &WindowDefinition)
        -> String {
        let mut body = Vec::new();
        if let Some(name) = self.opt_node(ast, node.ref_name) {
            body.push(name);
        }
        if let Some(partition) = node.partition_by {
            body.push(format!("PARTITION BY {}", self.node(ast, partition)));
        }
        if let Some(order) = node.order_by {
            body.push(format!("ORDER BY {}", self.node(ast, order)));
        }
        if let Some(frame) = node.frame {
            body.push(self.node(ast, frame));
        }
        let body = format!("({})", body.join(" "));
        match node.name {
            Some(name) => format!("{} AS {}", self.node(ast, name), body),
            None => body,
        }
    }

    fn walk_window_frame(&mut self, ast: &Ast, _id: NodeId, node: &WindowFrame) -> String {
        let mode = match node.mode {
            WindowFrameMode::Range => "RANGE",
            WindowFrameMode::Rows => "ROWS",
            WindowFrameMode::Groups => "GROUPS",
        };
        let mut out = match node.end {
            Some(end) => format!(
                "{} BETWEEN {} AND {}",
                mode,
                self.node(ast, node.start),
                self.node(ast, end)
            ),
            None => format!("{} {}", mode, self.node(ast, node.start)),
        };
        if let Some(exclusion) = node.exclusion {
            out.push_str(match exclusion {
                WindowFrameExclusion::CurrentRow => " EXCLUDE CURRENT ROW",
                WindowFrameExclusion::Group => " EXCLUDE GROUP",
                WindowFrameExclusion::Ties => " EXCLUDE TIES",
                WindowFrameExclusion::NoOthers => " EXCLUDE NO OTHERS",
            });
        }
        out
    }

    fn walk_window_frame_bound(&mut self, ast: &Ast, _id: NodeId, node: &WindowFrameBound)
        -> String {
        match (node.direction, node.value) {
            (WindowFrameDirection::CurrentRow, _) => "CURRENT ROW".to_string(),
            (WindowFrameDirection::Preceding, None) => "UNBOUNDED PRECEDING".to_string(),
            (WindowFrameDirection::Following, None) => "UNBOUNDED FOLLOWING".to_string(),
            (WindowFrameDirection::Preceding, Some(value)) => {
                format!("{} PRECEDING", self.node(ast, value))
            }
            (WindowFrameDirection::Following, Some(value)) => {
                format!("{} FOLLOWING", self.node(ast, value))
            }
        }
    }

    fn walk_locking_element(&mut self, ast: &Ast, _id: NodeId, node: &LockingElement) -> String {
        let mut out = format!("FOR {}", node.strength.as_sql());
        if !node.relations.is_empty() {
            out.push_str(&format!(" OF {}", self.join(ast, &node.relations, ", ")));
        }
        if node.no_wait {
            out.push_str(" NOWAIT");
        } else if node.skip_locked {
            out.push_str(" SKIP LOCKED");
        }
        out
    }

    fn walk_set_target_element(&mut self, ast: &Ast, _id: NodeId, node: &SetTargetElement)
        -> String {
        let mut out = self.node(ast, node.name);
        for &item in &node.indirection {
            match ast.data(item) {
                NodeData::ArrayIndexes(_) => out.push_str(&self.node(ast, item)),
                _ => {
                    out.push('.');
                    out.push_str(&self.node(ast, item));
                }
            }
        }
        out
    }

    fn walk_single_set_clause(&mut self, ast: &Ast, _id: NodeId, node: &SingleSetClause)
        -> String {
        format!(
            "{} = {}",
            self.node(ast, node.column),
            self.node(ast, node.value)
        )
    }

    fn walk_multiple_set_clause(&mut self, ast: &Ast, _id: NodeId, node: &MultipleSetClause)
        -> String {
        format!(
            "({}) = {}",
            self.node(ast, node.columns),
            self.node(ast, node.value)
        )
    }

    fn walk_set_to_default(&mut self, _ast: &Ast, _id: NodeId) -> String {
        "DEFAULT".to_string()
    }

    fn walk_on_conflict(&mut self, ast: &Ast, _id: NodeId, node: &OnConflictClause) -> String {
        let mut out = String::from("ON CONFLICT");
        if let Some(target) = node.target {
            if node.on_constraint {
                out.push_str(&format!(" ON CONSTRAINT {}", self.node(ast, target)));
            } else {
                out.push(' ');
                out.push_str(&self.node(ast, target));
            }
        }
        match node.action {
            OnConflictAction::DoNothing => out.push_str(" DO NOTHING"),
            OnConflictAction::DoUpdate => {
                out.push_str(" DO UPDATE SET ");
                if let Some(set_clause) = node.set_clause {
                    out.push_str(&self.node(ast, set_clause));
                }
                if let Some(condition) = node.condition {
                    out.push_str(&format!(" WHERE {}", self.node(ast, condition)));
                }
            }
        }
        out
    }

    fn walk_index_parameters(&mut self, ast: &Ast, _id: NodeId, node: &IndexParameters)
        -> String {
        let mut out = format!("({})", self.join(ast, &node.elements, ", "));
        if let Some(cond) = node.where_clause {
            out.push_str(&format!(" WHERE {}", self.node(ast, cond)));
        }
        out
    }

    fn walk_index_element(&mut self, ast: &Ast, _id: NodeId, node: &IndexElement) -> String {
        // Wrap anything that is not a bare column or a function call, the
        // way index definitions require.
        let mut out = match ast.data(node.expression) {
            NodeData::ColumnRef(_) | NodeData::FunctionCall(_) => self.node(ast, node.expression),
            _ => format!("({})", self.node(ast, node.expression)),
        };
        if let Some(collation) = node.collation {
            out.push_str(&format!(" COLLATE {}", self.node(ast, collation)));
        }
        if let Some(op_class) = node.op_class {
            out.push(' ');
            out.push_str(&self.node(ast, op_class));
        }
        if let Some(direction) = node.direction {
            out.push_str(match direction {
                SortDirection::Asc => " ASC",
                SortDirection::Desc => " DESC",
            });
        }
        if let Some(nulls) = node.nulls {
            out.push_str(match nulls {
                NullsOrder::First => " NULLS FIRST",
                NullsOrder::Last => " NULLS LAST",
            });
        }
        out
    }

    fn walk_merge_when(&mut self, ast: &Ast, _id: NodeId, node: &MergeWhenClause) -> String {
        let mut out = match node.matched {
            MergeMatchKind::Matched => String::from("WHEN MATCHED"),
            MergeMatchKind::NotMatchedByTarget => String::from("WHEN NOT MATCHED"),
            MergeMatchKind::NotMatchedBySource => String::from("WHEN NOT MATCHED BY SOURCE"),
        };
        if let Some(condition) = node.condition {
            out.push_str(&format!(" AND {}", self.node(ast, condition)));
        }
        out.push_str(" THEN ");
        match node.action {
            Some(action) => out.push_str(&self.node(ast, action)),
            None => out.push_str("DO NOTHING"),
        }
        out
    }

    fn walk_merge_insert(&mut self, ast: &Ast, _id: NodeId, node: &MergeInsert) -> String {
        let mut out = String::from("INSERT");
        if let Some(columns) = node.columns {
            out.push_str(&format!(" ({})", self.node(ast, columns)));
        }
        if let Some(overriding) = node.overriding {
            let kind = match overriding {
                OverridingKind::System => "SYSTEM",
                OverridingKind::User => "USER",
            };
            out.push_str(&format!(" OVERRIDING {kind} VALUE"));
        }
        match node.values {
            Some(values) => out.push_str(&format!(" VALUES ({})", self.node(ast, values))),
            None => out.push_str(" DEFAULT VALUES"),
        }
        out
    }

    fn walk_merge_update(&mut self, ast: &Ast, _id: NodeId, node: &MergeUpdate) -> String {
        format!("UPDATE SET {}", self.node(ast, node.set_clause))
    }

    fn walk_merge_delete(&mut self, _ast: &Ast, _id: NodeId) -> String {
        "DELETE".to_string()
    }

    fn walk_relation_reference(&mut self, ast: &Ast, _id: NodeId, node: &RelationReference)
        -> String {
        let mut out = String::new();
        if node.only {
            out.push_str("ONLY ");
        }
        out.push_str(&self.node(ast, node.name));
        if node.star {
            out.push_str(" *");
        }
        out.push_str(&self.alias_suffix(ast, node.alias, node.column_aliases));
        out
    }

    fn walk_join(&mut self, ast: &Ast, _id: NodeId, node: &JoinExpression) -> String {
        let left = self.node(ast, node.left);
        let right = match ast.data(node.right) {
            NodeData::Join(_) => format!("({})", self.node(ast, node.right)),
            _ => self.node(ast, node.right),
        };
        let natural = if node.natural { "NATURAL " } else { "" };
        let mut out = format!("{} {}{} {}", left, natural, node.kind.as_sql(), right);
        if let Some(on) = node.on {
            out.push_str(&format!(" ON {}", self.node(ast, on)));
        } else if let Some(using) = node.using_clause {
            out.push(' ');
            out.push_str(&self.node(ast, using));
        }
        if let Some(alias) = node.alias {
            out = format!("({}) AS {}", out, self.node(ast, alias));
        }
        out
    }

    fn walk_using_clause(&mut self, ast: &Ast, _id: NodeId, node: &UsingClause) -> String {
        let mut out = format!("USING ({})", self.node(ast, node.columns));
        if let Some(alias) = node.alias {
            out.push_str(&format!(" AS {}", self.node(ast, alias)));
        }
        out
    }

    fn walk_range_subselect(&mut self, ast: &Ast, _id: NodeId, node: &RangeSubselect) -> String {
        let lateral = if node.lateral { "LATERAL " } else { "" };
        format!(
            "{}({}){}",
            lateral,
            self.node(ast, node.query),
            self.alias_suffix(ast, node.alias, node.column_aliases)
        )
    }

    fn walk_range_function(&mut self, ast: &Ast, _id: NodeId, node: &RangeFunctionCall)
        -> String {
        let mut out = String::new();
        if node.lateral {
            out.push_str("LATERAL ");
        }
        out.push_str(&self.node(ast, node.function));
        if node.with_ordinality {
            out.push_str(" WITH ORDINALITY");
        }
        if let Some(definitions) = node.column_definitions {
            out.push_str(" AS ");
            if let Some(alias) = node.alias {
                out.push_str(&self.node(ast, alias));
                out.push(' ');
            }
            out.push_str(&format!("({})", self.node(ast, definitions)));
        } else {
            out.push_str(&self.alias_suffix(ast, node.alias, node.column_aliases));
        }
        out
    }

    fn walk_column_definition(&mut self, ast: &Ast, _id: NodeId, node: &ColumnDefinition)
        -> String {
        format!(
            "{} {}",
            self.node(ast, node.name),
            self.node(ast, node.type_name)
        )
    }

    fn walk_xml_table(&mut self, ast: &Ast, _id: NodeId, node: &XmlTable) -> String {
        let mut out = String::new();
        if node.lateral {
            out.push_str("LATERAL ");
        }
        out.push_str("XMLTABLE(");
        if let Some(namespaces) = node.namespaces {
            out.push_str(&format!("XMLNAMESPACES({}), ", self.node(ast, namespaces)));
        }
        out.push_str(&self.node(ast, node.row_expression));
        out.push_str(&format!(
            " PASSING {}",
            self.node(ast, node.document_expression)
        ));
        out.push_str(&format!(" COLUMNS {}", self.node(ast, node.columns)));
        out.push(')');
        out.push_str(&self.alias_suffix(ast, node.alias, node.column_aliases));
        out
    }

    fn walk_xml_namespace(&mut self, ast: &Ast, _id: NodeId, node: &XmlNamespace) -> String {
        match node.alias {
            Some(alias) => format!(
                "{} AS {}",
                self.node(ast, node.xml),
                self.node(ast, alias)
            ),
            None => format!("DEFAULT {}", self.node(ast, node.xml)),
        }
    }

    fn walk_xml_column(&mut self, ast: &Ast, _id: NodeId, node: &XmlColumnDefinition) -> String {
        let mut out = self.node(ast, node.name);
        if node.for_ordinality {
            out.push_str(" FOR ORDINALITY");
            return out;
        }
        if let Some(type_name) = node.type_name {
            out.push(' ');
            out.push_str(&self.node(ast, type_name));
        }
        if let Some(path) = node.path {
            out.push_str(&format!(" PATH {}", self.node(ast, path)));
        }
        if let Some(default) = node.default {
            out.push_str(&format!(" DEFAULT {}", self.node(ast, default)));
        }
        match node.nullable {
            Some(true) => out.push_str(" NULL"),
            Some(false) => out.push_str(" NOT NULL"),
            None => {}
        }
        out
    }

    fn walk_constant(&mut self, _ast: &Ast, _id: NodeId, node: &Constant) -> String {
        match node.kind {
            ConstantKind::Integer | ConstantKind::Float => node.value.clone(),
            ConstantKind::String => quote_string(&node.value),
            ConstantKind::BinaryString => format!("b'{}'", node.value),
            ConstantKind::HexString => format!("x'{}'", node.value),
            ConstantKind::NcharString => format!("n{}", quote_string(&node.value)),
            ConstantKind::Boolean => if node.value == "true" { "TRUE" } else { "FALSE" }.into(),
            ConstantKind::Null => "NULL".to_string(),
        }
    }

    fn walk_named_parameter(&mut self, _ast: &Ast, _id: NodeId, node: &NamedParameter) -> String {
        format!(":{}", node.name)
    }

    fn walk_positional_parameter(
        &mut self,
        _ast: &Ast,
        _id: NodeId,
        node: &PositionalParameter,
    ) -> String {
        format!("${}", node.position)
    }

    fn walk_column_reference(&mut self, ast: &Ast, _id: NodeId, node: &ColumnReference)
        -> String {
        self.join(ast, &node.parts, ".")
    }

    fn walk_indirection(&mut self, ast: &Ast, id: NodeId, node: &Indirection) -> String {
        let mut out = self.operand(ast, id, node.expression, false);
        for &item in &node.items {
            match ast.data(item) {
                NodeData::ArrayIndexes(_) => out.push_str(&self.node(ast, item)),
                _ => {
                    out.push('.');
                    out.push_str(&self.node(ast, item));
                }
            }
        }
        out
    }

    fn walk_array_indexes(&mut self, ast: &Ast, _id: NodeId, node: &ArrayIndexes) -> String {
        let lower = self.opt_node(ast, node.lower).unwrap_or_default();
        if node.is_slice {
            let upper = self.opt_node(ast, node.upper).unwrap_or_default();
            format!("[{lower}:{upper}]")
        } else {
            format!("[{lower}]")
        }
    }

    fn walk_operator(&mut self, ast: &Ast, id: NodeId, node: &OperatorExpression) -> String {
        let op = render_operator_name(&node.operator);
        let right = self.operand(ast, id, node.right, true);
        match node.left {
            Some(left) => format!("{} {} {}", self.operand(ast, id, left, false), op, right),
            None => format!("{op} {right}"),
        }
    }

    fn walk_logical(&mut self, ast: &Ast, id: NodeId, node: &LogicalExpression) -> String {
        let sep = match node.operator {
            LogicalOperator::And => " AND ",
            LogicalOperator::Or => " OR ",
        };
        node.items
            .iter()
            .map(|&item| self.operand(ast, id, item, false))
            .collect::<Vec<_>>()
            .join(sep)
    }

    fn walk_not(&mut self, ast: &Ast, id: NodeId, node: &NotExpression) -> String {
        format!("NOT {}", self.operand(ast, id, node.argument, true))
    }

    fn walk_is(&mut self, ast: &Ast, id: NodeId, node: &IsExpression) -> String {
        let predicate = match node.predicate {
            IsPredicate::Null => "NULL",
            IsPredicate::True => "TRUE",
            IsPredicate::False => "FALSE",
            IsPredicate::Unknown => "UNKNOWN",
            IsPredicate::Document => "DOCUMENT",
        };
        let not = if node.not { "NOT " } else { "" };
        format!(
            "{} IS {}{}",
            self.operand(ast, id, node.argument, false),
            not,
            predicate
        )
    }

    fn walk_is_distinct_from(
        &mut self,
        ast: &Ast,
        id: NodeId,
        node: &IsDistinctFromExpression,
    ) -> String {
        let not = if node.not { "NOT " } else { "" };
        format!(
            "{} IS {}DISTINCT FROM {}",
            self.operand(ast, id, node.left, false),
            not,
            self.operand(ast, id, node.right, true)
        )
    }

    fn walk_is_json(&mut self, ast: &Ast, id: NodeId, node: &IsJsonExpression) -> String {
        let mut out = format!(
            "{} IS {}JSON",
            self.operand(ast, id, node.argument, false),
            if node.not { "NOT " } else { "" }
        );
        if let Some(json_type) = node.json_type {
            out.push_str(match json_type {
                JsonPredicateType::Value => " VALUE",
                JsonPredicateType::Array => " ARRAY",
                JsonPredicateType::Object => " OBJECT",
                JsonPredicateType::Scalar => " SCALAR",
            });
        }
        match node.unique_keys {
            Some(true) => out.push_str(" WITH UNIQUE KEYS"),
            Some(false) => out.push_str(" WITHOUT UNIQUE KEYS"),
            None => {}
        }
        out
    }

    fn walk_between(&mut self, ast: &Ast, id: NodeId, node: &BetweenExpression) -> String {
        let not = if node.not { "NOT " } else { "" };
        let symmetric = match node.symmetric {
            Some(true) => "SYMMETRIC ",
            Some(false) => "ASYMMETRIC ",
            None => "",
        };
        format!(
            "{} {}BETWEEN {}{} AND {}",
            self.operand(ast, id, node.argument, false),
            not,
            symmetric,
            self.operand(ast, id, node.left, true),
            self.operand(ast, id, node.right, true)
        )
    }

    fn walk_in(&mut self, ast: &Ast, id: NodeId, node: &InExpression) -> String {
        let not = if node.not { "NOT " } else { "" };
        // The right side is always parenthesized: either an expression
        // list or a subquery.
        let right = match ast.data(node.right) {
            NodeData::Subselect(_) => self.node(ast, node.right),
            _ => format!("({})", self.node(ast, node.right)),
        };
        format!(
            "{} {}IN {}",
            self.operand(ast, id, node.left, false),
            not,
            right
        )
    }

    fn walk_pattern_matching(
        &mut self,
        ast: &Ast,
        id: NodeId,
        node: &PatternMatchingExpression,
    ) -> String {
        let predicate = match node.predicate {
            PatternPredicate::Like => "LIKE",
            PatternPredicate::Ilike => "ILIKE",
            PatternPredicate::SimilarTo => "SIMILAR TO",
        };
        let not = if node.not { "NOT " } else { "" };
        let mut out = format!(
            "{} {}{} {}",
            self.operand(ast, id, node.argument, false),
            not,
            predicate,
            self.operand(ast, id, node.pattern, true)
        );
        if let Some(escape) = node.escape {
            out.push_str(&format!(" ESCAPE {}", self.operand(ast, id, escape, true)));
        }
        out
    }

    fn walk_overlaps(&mut self, ast: &Ast, _id: NodeId, node: &OverlapsExpression) -> String {
        format!(
            "{} OVERLAPS {}",
            self.node(ast, node.left),
            self.node(ast, node.right)
        )
    }

    fn walk_at_time_zone(&mut self, ast: &Ast, id: NodeId, node: &AtTimeZoneExpression)
        -> String {
        let argument = self.operand(ast, id, node.argument, false);
        match node.time_zone {
            Some(tz) => format!("{} AT TIME ZONE {}", argument, self.operand(ast, id, tz, true)),
            None => format!("{argument} AT LOCAL"),
        }
    }

    fn walk_collate(&mut self, ast: &Ast, id: NodeId, node: &CollateExpression) -> String {
        format!(
            "{} COLLATE {}",
            self.operand(ast, id, node.argument, false),
            self.node(ast, node.collation)
        )
    }

    fn walk_typecast(&mut self, ast: &Ast, id: NodeId, node: &TypecastExpression) -> String {
        format!(
            "{}::{}",
            self.operand(ast, id, node.argument, false),
            self.node(ast, node.type_name)
        )
    }

    fn walk_case(&mut self, ast: &Ast, _id: NodeId, node: &CaseExpression) -> String {
        let mut out = String::from("CASE");
        if let Some(argument) = node.argument {
            out.push(' ');
            out.push_str(&self.node(ast, argument));
        }
        for &when in &node.when_clauses {
            out.push(' ');
            out.push_str(&self.node(ast, when));
        }
        if let Some(else_clause) = node.else_clause {
            out.push_str(&format!(" ELSE {}", self.node(ast, else_clause)));
        }
        out.push_str(" END");
        out
    }

    fn walk_when_clause(&mut self, ast: &Ast, _id: NodeId, node: &WhenClause) -> String {
        format!(
            "WHEN {} THEN {}",
            self.node(ast, node.when),
            self.node(ast, node.then)
        )
    }

    fn walk_function_call(&mut self, ast: &Ast, _id: NodeId, node: &FunctionCall) -> String {
        let mut inner = Vec::new();
        if node.distinct {
            inner.push("DISTINCT".to_string());
        }
        if node.star {
            inner.push("*".to_string());
        } else {
            let arguments = match ast.data(node.arguments) {
                NodeData::List(list) => list.items.as_slice(),
                _ => &[],
            };
            let mut rendered = Vec::with_capacity(arguments.len());
            for (i, &argument) in arguments.iter().enumerate() {
                let text = self.node(ast, argument);
                if node.variadic && i + 1 == arguments.len() {
                    rendered.push(format!("VARIADIC {text}"));
                } else {
                    rendered.push(text);
                }
            }
            if !rendered.is_empty() {
                inner.push(rendered.join(", "));
            }
        }
        if !node.within_group {
            if let Some(order) = node.order_by {
                inner.push(format!("ORDER BY {}", self.node(ast, order)));
            }
        }
        let mut out = format!("{}({})", self.node(ast, node.name), inner.join(" "));
        if node.within_group {
            if let Some(order) = node.order_by {
                out.push_str(&format!(
                    " WITHIN GROUP (ORDER BY {})",
                    self.node(ast, order)
                ));
            }
        }
        if let Some(filter) = node.filter {
            out.push_str(&format!(" FILTER (WHERE {})", self.node(ast, filter)));
        }
        if let Some(over) = node.over {
            // A window consisting of nothing but a base reference renders
            // as a bare name.
            let window = match ast.data(over) {
                NodeData::WindowDef(w)
                    if w.name.is_none()
                        && w.partition_by.is_none()
                        && w.order_by.is_none()
                        && w.frame.is_none()
                        && w.ref_name.is_some() =>
                {
                    match w.ref_name {
                        Some(ref_name) => self.node(ast, ref_name),
                        None => self.node(ast, over),
                    }
                }
                _ => self.node(ast, over),
            };
            out.push_str(&format!(" OVER {window}"));
        }
        out
    }

    fn walk_named_argument(&mut self, ast: &Ast, _id: NodeId, node: &NamedArgument) -> String {
        format!(
            "{} => {}",
            self.node(ast, node.name),
            self.node(ast, node.value)
        )
    }

    fn walk_sql_value_function(&mut self, _ast: &Ast, _id: NodeId, node: &SqlValueFunction)
        -> String {
        let name = node.name.as_str().to_ascii_uppercase();
        match node.modifier {
            Some(precision) => format!("{name}({precision})"),
            None => name,
        }
    }

    fn walk_subselect(&mut self, ast: &Ast, _id: NodeId, node: &SubselectExpression) -> String {
        let query = self.node(ast, node.query);
        match node.operator {
            Some(SubselectOperator::Exists) => format!("EXISTS({query})"),
            Some(SubselectOperator::Any) => format!("ANY({query})"),
            Some(SubselectOperator::All) => format!("ALL({query})"),
            Some(SubselectOperator::Some) => format!("SOME({query})"),
            Some(SubselectOperator::Array) => format!("ARRAY({query})"),
            None => format!("({query})"),
        }
    }

    fn walk_array_comparison(
        &mut self,
        ast: &Ast,
        _id: NodeId,
        node: &ArrayComparisonExpression,
    ) -> String {
        let keyword = match node.keyword {
            ArrayComparisonKeyword::Any => "ANY",
            ArrayComparisonKeyword::All => "ALL",
            ArrayComparisonKeyword::Some => "SOME",
        };
        format!("{}({})", keyword, self.node(ast, node.array))
    }

    fn walk_array(&mut self, ast: &Ast, _id: NodeId, node: &ArrayExpression) -> String {
        format!("ARRAY{}", self.array_brackets(ast, &node.elements))
    }

    fn walk_row(&mut self, ast: &Ast, _id: NodeId, node: &RowExpression) -> String {
        let inner = self.join(ast, &node.elements, ", ");
        if node.explicit_row || node.elements.len() < 2 {
            format!("ROW({inner})")
        } else {
            format!("({inner})")
        }
    }

    fn walk_grouping(&mut self, ast: &Ast, _id: NodeId, node: &GroupingExpression) -> String {
        format!("GROUPING({})", self.join(ast, &node.arguments, ", "))
    }

    fn walk_grouping_element(&mut self, ast: &Ast, _id: NodeId, node: &GroupingElement)
        -> String {
        let inner = self.join(ast, &node.items, ", ");
        match node.kind {
            GroupingElementKind::Cube => format!("CUBE({inner})"),
            GroupingElementKind::Rollup => format!("ROLLUP({inner})"),
            GroupingElementKind::GroupingSets => format!("GROUPING SETS({inner})"),
            GroupingElementKind::Empty => "()".to_string(),
        }
    }

    fn walk_json_key_value(&mut self, ast: &Ast, _id: NodeId, node: &JsonKeyValue) -> String {
        format!(
            "{} : {}",
            self.node(ast, node.key),
            self.node(ast, node.value)
        )
    }

    fn walk_json_object(&mut self, ast: &Ast, _id: NodeId, node: &JsonObjectConstructor)
        -> String {
        let mut inner = Vec::new();
        if !node.fields.is_empty() {
            inner.push(self.join(ast, &node.fields, ", "));
        }
        match node.absent_on_null {
            Some(true) => inner.push("ABSENT ON NULL".to_string()),
            Some(false) => inner.push("NULL ON NULL".to_string()),
            None => {}
        }
        match node.unique_keys {
            Some(true) => inner.push("WITH UNIQUE KEYS".to_string()),
            Some(false) => inner.push("WITHOUT UNIQUE KEYS".to_string()),
            None => {}
        }
        if let Some(returning) = node.returning {
            inner.push(format!("RETURNING {}", self.node(ast, returning)));
        }
        format!("JSON_OBJECT({})", inner.join(" "))
    }

    fn walk_json_array(&mut self, ast: &Ast, _id: NodeId, node: &JsonArrayConstructor) -> String {
        let mut inner = Vec::new();
        if let Some(query) = node.query {
            inner.push(self.node(ast, query));
        } else if !node.elements.is_empty() {
            inner.push(self.join(ast, &node.elements, ", "));
        }
        match node.absent_on_null {
            Some(true) => inner.push("ABSENT ON NULL".to_string()),
            Some(false) => inner.push("NULL ON NULL".to_string()),
            None => {}
        }
        if let Some(returning) = node.returning {
            inner.push(format!("RETURNING {}", self.node(ast, returning)));
        }
        format!("JSON_ARRAY({})", inner.join(" "))
    }

    fn walk_xml_exists(&mut self, ast: &Ast, _id: NodeId, node: &XmlExistsExpression) -> String {
        format!(
            "XMLEXISTS({} PASSING {})",
            self.node(ast, node.row_expression),
            self.node(ast, node.document_expression)
        )
    }
}

fn render_operator_name(operator: &Operator) -> String {
    if operator.is_qualified() {
        let mut path = operator.schema.join(".");
        path.push('.');
        path.push_str(&operator.name);
        format!("OPERATOR({path})")
    } else {
        operator.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Ast;

    fn build_expr(ast: &Ast, id: NodeId) -> String {
        SqlBuilder::new().build_node(ast, id)
    }

    fn chain(ast: &mut Ast, op: &str, left: NodeId, right: NodeId) -> NodeId {
        ast.push(NodeData::Operator(OperatorExpression {
            operator: Operator::bare(op),
            left: Some(left),
            right,
        }))
        .unwrap()
    }

    fn int(ast: &mut Ast, value: &str) -> NodeId {
        ast.push(NodeData::Constant(Constant::integer(value))).unwrap()
    }

    #[test]
    fn multiplication_inside_addition_needs_no_parentheses() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let b = int(&mut ast, "2");
        let c = int(&mut ast, "3");
        let product = chain(&mut ast, "*", b, c);
        let sum = chain(&mut ast, "+", a, product);
        assert_eq!(build_expr(&ast, sum), "1 + 2 * 3");
    }

    #[test]
    fn addition_inside_multiplication_is_wrapped() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let b = int(&mut ast, "2");
        let c = int(&mut ast, "3");
        let sum = chain(&mut ast, "+", a, b);
        let product = chain(&mut ast, "*", sum, c);
        assert_eq!(build_expr(&ast, product), "(1 + 2) * 3");
    }

    #[test]
    fn left_associative_right_operand_at_equal_precedence_is_wrapped() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let b = int(&mut ast, "2");
        let c = int(&mut ast, "3");
        let inner = chain(&mut ast, "-", b, c);
        let outer = chain(&mut ast, "-", a, inner);
        assert_eq!(build_expr(&ast, outer), "1 - (2 - 3)");
    }

    #[test]
    fn or_inside_and_is_wrapped() {
        let mut ast = Ast::new();
        let t = ast
            .push(NodeData::Constant(Constant::boolean(true)))
            .unwrap();
        let f = ast
            .push(NodeData::Constant(Constant::boolean(false)))
            .unwrap();
        let or = ast
            .push(NodeData::Logical(LogicalExpression {
                operator: LogicalOperator::Or,
                items: vec![t, f],
            }))
            .unwrap();
        let u = ast
            .push(NodeData::Constant(Constant::boolean(true)))
            .unwrap();
        let and = ast
            .push(NodeData::Logical(LogicalExpression {
                operator: LogicalOperator::And,
                items: vec![or, u],
            }))
            .unwrap();
        assert_eq!(build_expr(&ast, and), "(TRUE OR FALSE) AND TRUE");
    }

    #[test]
    fn between_bounds_allow_typecasts_unwrapped() {
        let mut ast = Ast::new();
        let arg = int(&mut ast, "5");
        let low = int(&mut ast, "1");
        let name = ast
            .push(NodeData::Identifier(Identifier { value: "int4".into() }))
            .unwrap();
        let qname = ast
            .push(NodeData::QualifiedName(QualifiedName { parts: vec![name] }))
            .unwrap();
        let ty = ast.push(NodeData::TypeName(TypeName::plain(qname))).unwrap();
        let ten = int(&mut ast, "10");
        let cast = ast
            .push(NodeData::Typecast(TypecastExpression {
                argument: ten,
                type_name: ty,
            }))
            .unwrap();
        let between = ast
            .push(NodeData::Between(BetweenExpression {
                argument: arg,
                left: low,
                right: cast,
                symmetric: None,
                not: false,
            }))
            .unwrap();
        assert_eq!(build_expr(&ast, between), "5 BETWEEN 1 AND 10::int4");
    }

    #[test]
    fn keywords_and_odd_identifiers_are_quoted() {
        assert_eq!(quote_identifier("foo"), "foo");
        assert_eq!(quote_identifier("select"), "\"select\"");
        assert_eq!(quote_identifier("binary"), "\"binary\"");
        assert_eq!(quote_identifier("Mixed"), "\"Mixed\"");
        assert_eq!(quote_identifier("has space"), "\"has space\"");
        assert_eq!(quote_identifier("qu\"ote"), "\"qu\"\"ote\"");
    }

    #[test]
    fn unreserved_and_col_name_keywords_print_bare() {
        assert_eq!(quote_identifier("substring"), "substring");
        assert_eq!(quote_identifier("position"), "position");
        assert_eq!(quote_identifier("path"), "path");
        assert_eq!(quote_identifier("version"), "version");
    }

    #[test]
    fn string_constants_double_embedded_quotes() {
        let mut ast = Ast::new();
        let s = ast
            .push(NodeData::Constant(Constant::string("it's")))
            .unwrap();
        assert_eq!(build_expr(&ast, s), "'it''s'");
    }
}
