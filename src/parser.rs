//! # Recursive Descent Parser
//!
//! Turns a lexed token stream into arena AST nodes. Every grammar rule is
//! a method on [`ParseContext`]; scalar expressions use one method per
//! precedence level, from `or_expression` down to `atom`, so the tree
//! shape encodes binding strength and the SQL builder can re-derive the
//! minimal parentheses later.
//!
//! The parser is eager and non-recovering: the first offending token
//! raises a positioned syntax error and the tokens after it are never
//! inspected. Fragment entry points ([`FragmentKind`]) expose inner
//! grammar rules so callers can parse a bare expression, a FROM element
//! or a whole statement list with the same machinery.

use eyre::Result;

use crate::ast::expr::*;
use crate::ast::range::*;
use crate::ast::stmt::*;
use crate::ast::{Ast, Identifier, List, ListKind, NodeData, NodeId, QualifiedName, TypeName};
use crate::keyword::{Keyword, KeywordCategory};
use crate::lexer::{Lexer, LexerOptions};
use crate::token::{Token, TokenStream, TokenType};

/// Options shared by the lexer and parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Mirrors the server's `standard_conforming_strings` setting: when
    /// false, backslash escapes are processed in regular string literals.
    pub standard_conforming_strings: bool,
}

impl Default for ParserOptions {
    fn default() -> ParserOptions {
        ParserOptions {
            standard_conforming_strings: true,
        }
    }
}

impl ParserOptions {
    pub(crate) fn lexer_options(&self) -> LexerOptions {
        LexerOptions {
            standard_conforming_strings: self.standard_conforming_strings,
        }
    }
}

/// Grammar entry points for parsing partial SQL. [`FragmentKind::Statement`]
/// accepts a trailing semicolon; every other kind must consume the whole
/// input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Statement,
    StatementList,
    Expression,
    ExpressionList,
    TargetList,
    FromList,
    FromElement,
    OrderByList,
    GroupByList,
    WindowDefinition,
    LockingList,
    WithClause,
    CommonTableExpression,
    TypeName,
    SetClauseList,
    OnConflict,
    MergeWhenClause,
}

impl FragmentKind {
    fn describe(self) -> &'static str {
        match self {
            FragmentKind::Statement => "statement",
            FragmentKind::StatementList => "statement list",
            FragmentKind::Expression => "expression",
            FragmentKind::ExpressionList => "expression list",
            FragmentKind::TargetList => "target list",
            FragmentKind::FromList => "FROM list",
            FragmentKind::FromElement => "FROM element",
            FragmentKind::OrderByList => "ORDER BY list",
            FragmentKind::GroupByList => "GROUP BY list",
            FragmentKind::WindowDefinition => "window definition",
            FragmentKind::LockingList => "locking list",
            FragmentKind::WithClause => "WITH clause",
            FragmentKind::CommonTableExpression => "common table expression",
            FragmentKind::TypeName => "type name",
            FragmentKind::SetClauseList => "SET clause list",
            FragmentKind::OnConflict => "ON CONFLICT clause",
            FragmentKind::MergeWhenClause => "MERGE WHEN clause",
        }
    }
}

/// The parser itself carries only options; all state lives in the token
/// stream and the tree being built, so one parser can be reused freely.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new(options: ParserOptions) -> Parser {
        Parser { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses a single statement into a fresh tree.
    pub fn parse_statement(&self, sql: &str) -> Result<Ast> {
        self.parse_fragment(FragmentKind::Statement, sql)
    }

    /// Parses semicolon-separated statements into a statement list node.
    pub fn parse_statement_list(&self, sql: &str) -> Result<Ast> {
        self.parse_fragment(FragmentKind::StatementList, sql)
    }

    /// Parses a bare scalar expression into a fresh tree.
    pub fn parse_expression(&self, sql: &str) -> Result<Ast> {
        self.parse_fragment(FragmentKind::Expression, sql)
    }

    /// Parses any fragment kind into a fresh tree and makes it the root.
    pub fn parse_fragment(&self, kind: FragmentKind, sql: &str) -> Result<Ast> {
        let mut ast = Ast::with_options(self.options.clone());
        let node = self.parse_fragment_into(&mut ast, kind, sql)?;
        ast.set_root(node);
        Ok(ast)
    }

    /// Parses a fragment into an existing tree. The returned node is
    /// parentless and ready to attach; the tree's root is not touched.
    pub fn parse_fragment_into(
        &self,
        ast: &mut Ast,
        kind: FragmentKind,
        sql: &str,
    ) -> Result<NodeId> {
        let stream = Lexer::tokenize(sql, self.options.lexer_options())?;
        let mut ctx = ParseContext { stream, ast };
        let node = match kind {
            FragmentKind::Statement => {
                let node = ctx.statement()?;
                while ctx.stream.consume_special_char(';') {}
                node
            }
            FragmentKind::StatementList => ctx.statement_list()?,
            FragmentKind::Expression => ctx.expression()?,
            FragmentKind::ExpressionList => ctx.expression_list()?,
            FragmentKind::TargetList => ctx.target_list()?,
            FragmentKind::FromList => ctx.from_list()?,
            FragmentKind::FromElement => ctx.table_reference()?,
            FragmentKind::OrderByList => ctx.order_by_list()?,
            FragmentKind::GroupByList => ctx.group_by_list()?,
            FragmentKind::WindowDefinition => ctx.over_window()?,
            FragmentKind::LockingList => ctx.locking_list()?,
            FragmentKind::WithClause => ctx.with_clause()?,
            FragmentKind::CommonTableExpression => ctx.common_table_expression()?,
            FragmentKind::TypeName => ctx.type_name()?,
            FragmentKind::SetClauseList => ctx.set_clause_list()?,
            FragmentKind::OnConflict => ctx.on_conflict_clause()?,
            FragmentKind::MergeWhenClause => ctx.merge_when_clause()?,
        };
        if !ctx.stream.is_eof() {
            return Err(ctx.stream.syntax_error(format!(
                "unexpected {} after {}",
                ctx.stream.current().describe(),
                kind.describe()
            )));
        }
        Ok(node)
    }
}

/// Shape of an upcoming parenthesized group, decided by lookahead alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParenClass {
    /// A subquery: `(SELECT ...)`, `(VALUES ...)`, `(WITH ...)`.
    Select,
    /// An implicit row constructor: a top-level comma inside the group.
    Row,
    /// A plain parenthesized scalar expression.
    Expression,
}

struct ParseContext<'a> {
    stream: TokenStream,
    ast: &'a mut Ast,
}

impl ParseContext<'_> {
    fn push(&mut self, data: NodeData) -> Result<NodeId> {
        self.ast.push(data)
    }

    fn make_list(&mut self, kind: ListKind, items: Vec<NodeId>) -> Result<NodeId> {
        self.push(NodeData::List(List { kind, items }))
    }

    // ---- statements ----

    fn statement(&mut self) -> Result<NodeId> {
        let with = self.opt_with_clause()?;
        let stmt = match self.stream.keyword() {
            Some(Keyword::Insert) => self.insert_statement()?,
            Some(Keyword::Update) => self.update_statement()?,
            Some(Keyword::Delete) => self.delete_statement()?,
            Some(Keyword::Merge) => self.merge_statement()?,
            _ => self.select_statement()?,
        };
        if let Some(with) = with {
            self.attach_with(stmt, with)?;
        }
        Ok(stmt)
    }

    fn statement_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            while self.stream.consume_special_char(';') {}
            if self.stream.is_eof() {
                break;
            }
            items.push(self.statement()?);
            if !self.stream.matches_special_char(';') {
                break;
            }
        }
        self.make_list(ListKind::Statement, items)
    }

    /// A full query expression: optional WITH plus a select chain with its
    /// trailing clauses. Used for subqueries and DML sources.
    fn query_expression(&mut self) -> Result<NodeId> {
        let with = self.opt_with_clause()?;
        let stmt = self.select_statement()?;
        if let Some(with) = with {
            self.attach_with(stmt, with)?;
        }
        Ok(stmt)
    }

    /// The WITH clause is parsed before its statement node exists, so it
    /// is linked in afterwards.
    fn attach_with(&mut self, stmt: NodeId, with: NodeId) -> Result<()> {
        let occupied = match self.ast.data(stmt) {
            NodeData::Select(n) => n.with.is_some(),
            NodeData::SetOpSelect(n) => n.with.is_some(),
            NodeData::Values(n) => n.with.is_some(),
            NodeData::Insert(n) => n.with.is_some(),
            NodeData::Update(n) => n.with.is_some(),
            NodeData::Delete(n) => n.with.is_some(),
            NodeData::Merge(n) => n.with.is_some(),
            _ => return Err(self.stream.syntax_error("WITH is not allowed here")),
        };
        if occupied {
            return Err(self
                .stream
                .syntax_error("multiple WITH clauses are not allowed"));
        }
        self.ast.link_clause(stmt, with)?;
        match self.ast.data_mut(stmt) {
            NodeData::Select(n) => n.with = Some(with),
            NodeData::SetOpSelect(n) => n.with = Some(with),
            NodeData::Values(n) => n.with = Some(with),
            NodeData::Insert(n) => n.with = Some(with),
            NodeData::Update(n) => n.with = Some(with),
            NodeData::Delete(n) => n.with = Some(with),
            NodeData::Merge(n) => n.with = Some(with),
            _ => {}
        }
        Ok(())
    }

    /// UNION / EXCEPT chain over INTERSECT chains, left associative, then
    /// the trailing ORDER BY / LIMIT / OFFSET / locking clauses.
    fn select_statement(&mut self) -> Result<NodeId> {
        let mut left = self.select_intersect()?;
        while let Some(kw) = self
            .stream
            .matches_any_keyword(&[Keyword::Union, Keyword::Except])
        {
            self.stream.next();
            let all = self.stream.consume_keyword(Keyword::All);
            if !all {
                self.stream.consume_keyword(Keyword::Distinct);
            }
            let operator = match (kw, all) {
                (Keyword::Union, false) => SetOperator::Union,
                (Keyword::Union, true) => SetOperator::UnionAll,
                (_, false) => SetOperator::Except,
                (_, true) => SetOperator::ExceptAll,
            };
            let right = self.select_intersect()?;
            left = self.push(NodeData::SetOpSelect(SetOpSelectStmt {
                with: None,
                left,
                right,
                operator,
                order_by: None,
                limit: None,
                limit_with_ties: false,
                offset: None,
                locking: None,
            }))?;
        }
        self.attach_select_clauses(left)?;
        Ok(left)
    }

    fn select_intersect(&mut self) -> Result<NodeId> {
        let mut left = self.select_primary()?;
        while self.stream.matches_keyword(Keyword::Intersect) {
            self.stream.next();
            let all = self.stream.consume_keyword(Keyword::All);
            if !all {
                self.stream.consume_keyword(Keyword::Distinct);
            }
            let operator = if all {
                SetOperator::IntersectAll
            } else {
                SetOperator::Intersect
            };
            let right = self.select_primary()?;
            left = self.push(NodeData::SetOpSelect(SetOpSelectStmt {
                with: None,
                left,
                right,
                operator,
                order_by: None,
                limit: None,
                limit_with_ties: false,
                offset: None,
                locking: None,
            }))?;
        }
        Ok(left)
    }

    fn select_primary(&mut self) -> Result<NodeId> {
        if self.stream.matches_special_char('(') {
            self.stream.next();
            let query = self.query_expression()?;
            self.stream.expect_special_char(')')?;
            return Ok(query);
        }
        if self.stream.matches_keyword(Keyword::Values) {
            return self.values_clause();
        }
        if self.stream.matches_keyword(Keyword::Table) {
            return self.table_clause();
        }
        self.simple_select()
    }

    /// `TABLE [ONLY] name [*]` is shorthand for `SELECT * FROM name`.
    fn table_clause(&mut self) -> Result<NodeId> {
        self.stream.next();
        let only = self.stream.consume_keyword(Keyword::Only);
        let name = self.qualified_name()?;
        let star = self.stream.consume_special_char('*');
        let relation = self.push(NodeData::RelationRef(RelationReference {
            name,
            only,
            star,
            alias: None,
            column_aliases: None,
        }))?;
        let from = self.make_list(ListKind::From, vec![relation])?;
        let star_node = self.push(NodeData::Star)?;
        let column = self.push(NodeData::ColumnRef(ColumnReference {
            parts: vec![star_node],
        }))?;
        let target = self.push(NodeData::Target(TargetElement {
            expression: column,
            alias: None,
        }))?;
        let target_list = self.make_list(ListKind::Target, vec![target])?;
        self.push(NodeData::Select(SelectStmt {
            with: None,
            distinct: false,
            distinct_on: None,
            target_list,
            from: Some(from),
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
        }))
    }

    /// Clauses after the select body attach to the outermost statement
    /// node, which already exists by the time they are seen.
    fn attach_select_clauses(&mut self, stmt: NodeId) -> Result<()> {
        loop {
            if self
                .stream
                .matches_keyword_sequence(&[Keyword::Order, Keyword::By])
            {
                self.stream.skip(2);
                let list = self.order_by_list()?;
                self.attach_order_by(stmt, list)?;
            } else if self.stream.matches_keyword(Keyword::Limit) {
                self.stream.next();
                let value = if self.stream.consume_keyword(Keyword::All) {
                    None
                } else {
                    Some(self.expression()?)
                };
                self.attach_limit(stmt, value, false)?;
            } else if self.stream.matches_keyword(Keyword::Fetch) {
                self.stream.next();
                self.stream
                    .expect_keyword(&[Keyword::First, Keyword::Next])?;
                let value = if self
                    .stream
                    .matches_any_keyword(&[Keyword::Row, Keyword::Rows])
                    .is_some()
                {
                    // FETCH FIRST ROW ONLY means a count of one
                    self.push(NodeData::Constant(Constant::integer("1")))?
                } else {
                    self.expression()?
                };
                self.stream.expect_keyword(&[Keyword::Row, Keyword::Rows])?;
                let with_ties = if self.stream.consume_keyword(Keyword::Only) {
                    false
                } else {
                    self.stream.expect_keyword(&[Keyword::With])?;
                    self.stream.expect_keyword(&[Keyword::Ties])?;
                    true
                };
                self.attach_limit(stmt, Some(value), with_ties)?;
            } else if self.stream.matches_keyword(Keyword::Offset) {
                self.stream.next();
                let value = self.expression()?;
                if self
                    .stream
                    .matches_any_keyword(&[Keyword::Row, Keyword::Rows])
                    .is_some()
                {
                    self.stream.next();
                }
                self.attach_offset(stmt, value)?;
            } else if self.stream.matches_keyword(Keyword::For) {
                let list = self.locking_list()?;
                self.attach_locking(stmt, list)?;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn attach_order_by(&mut self, stmt: NodeId, list: NodeId) -> Result<()> {
        let occupied = match self.ast.data(stmt) {
            NodeData::Select(n) => n.order_by.is_some(),
            NodeData::SetOpSelect(n) => n.order_by.is_some(),
            NodeData::Values(n) => n.order_by.is_some(),
            _ => return Err(self.stream.syntax_error("ORDER BY is not allowed here")),
        };
        if occupied {
            return Err(self
                .stream
                .syntax_error("multiple ORDER BY clauses are not allowed"));
        }
        self.ast.link_clause(stmt, list)?;
        match self.ast.data_mut(stmt) {
            NodeData::Select(n) => n.order_by = Some(list),
            NodeData::SetOpSelect(n) => n.order_by = Some(list),
            NodeData::Values(n) => n.order_by = Some(list),
            _ => {}
        }
        Ok(())
    }

    fn attach_limit(&mut self, stmt: NodeId, value: Option<NodeId>, with_ties: bool) -> Result<()> {
        let occupied = match self.ast.data(stmt) {
            NodeData::Select(n) => n.limit.is_some(),
            NodeData::SetOpSelect(n) => n.limit.is_some(),
            NodeData::Values(n) => n.limit.is_some(),
            _ => return Err(self.stream.syntax_error("LIMIT is not allowed here")),
        };
        if occupied {
            return Err(self
                .stream
                .syntax_error("multiple LIMIT clauses are not allowed"));
        }
        if let Some(value) = value {
            self.ast.link_clause(stmt, value)?;
        }
        match self.ast.data_mut(stmt) {
            NodeData::Select(n) => {
                n.limit = value;
                n.limit_with_ties = with_ties;
            }
            NodeData::SetOpSelect(n) => {
                n.limit = value;
                n.limit_with_ties = with_ties;
            }
            NodeData::Values(n) => {
                n.limit = value;
                n.limit_with_ties = with_ties;
            }
            _ => {}
        }
        Ok(())
    }

    fn attach_offset(&mut self, stmt: NodeId, value: NodeId) -> Result<()> {
        let occupied = match self.ast.data(stmt) {
            NodeData::Select(n) => n.offset.is_some(),
            NodeData::SetOpSelect(n) => n.offset.is_some(),
            NodeData::Values(n) => n.offset.is_some(),
            _ => return Err(self.stream.syntax_error("OFFSET is not allowed here")),
        };
        if occupied {
            return Err(self
                .stream
                .syntax_error("multiple OFFSET clauses are not allowed"));
        }
        self.ast.link_clause(stmt, value)?;
        match self.ast.data_mut(stmt) {
            NodeData::Select(n) => n.offset = Some(value),
            NodeData::SetOpSelect(n) => n.offset = Some(value),
            NodeData::Values(n) => n.offset = Some(value),
            _ => {}
        }
        Ok(())
    }

    fn attach_locking(&mut self, stmt: NodeId, list: NodeId) -> Result<()> {
        let occupied = match self.ast.data(stmt) {
            NodeData::Select(n) => n.locking.is_some(),
            NodeData::SetOpSelect(n) => n.locking.is_some(),
            NodeData::Values(_) => {
                return Err(self
                    .stream
                    .syntax_error("row-level locks are not allowed with VALUES"));
            }
            _ => return Err(self.stream.syntax_error("FOR is not allowed here")),
        };
        if occupied {
            return Err(self
                .stream
                .syntax_error("multiple locking clauses are not allowed"));
        }
        self.ast.link_clause(stmt, list)?;
        match self.ast.data_mut(stmt) {
            NodeData::Select(n) => n.locking = Some(list),
            NodeData::SetOpSelect(n) => n.locking = Some(list),
            _ => {}
        }
        Ok(())
    }

    fn simple_select(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::Select])?;
        let mut distinct = false;
        let mut distinct_on = None;
        if self.stream.consume_keyword(Keyword::Distinct) {
            if self.stream.consume_keyword(Keyword::On) {
                self.stream.expect_special_char('(')?;
                distinct_on = Some(self.expression_list()?);
                self.stream.expect_special_char(')')?;
            } else {
                distinct = true;
            }
        } else {
            self.stream.consume_keyword(Keyword::All);
        }
        let target_list = if self.starts_target_list() {
            self.target_list()?
        } else {
            self.make_list(ListKind::Target, Vec::new())?
        };
        let from = if self.stream.consume_keyword(Keyword::From) {
            Some(self.from_list()?)
        } else {
            None
        };
        let where_clause = if self.stream.consume_keyword(Keyword::Where) {
            Some(self.expression()?)
        } else {
            None
        };
        let mut group_distinct = false;
        let group_by = if self
            .stream
            .matches_keyword_sequence(&[Keyword::Group, Keyword::By])
        {
            self.stream.skip(2);
            if !self.stream.consume_keyword(Keyword::All) {
                group_distinct = self.stream.consume_keyword(Keyword::Distinct);
            }
            Some(self.group_by_list()?)
        } else {
            None
        };
        let having = if self.stream.consume_keyword(Keyword::Having) {
            Some(self.expression()?)
        } else {
            None
        };
        let window = if self.stream.consume_keyword(Keyword::Window) {
            Some(self.named_window_list()?)
        } else {
            None
        };
        self.push(NodeData::Select(SelectStmt {
            with: None,
            distinct,
            distinct_on,
            target_list,
            from,
            where_clause,
            group_by,
            group_distinct,
            having,
            window,
            order_by: None,
            limit: None,
            limit_with_ties: false,
            offset: None,
            locking: None,
        }))
    }

    /// The target list may be empty; anything that cannot begin a target
    /// element means the list was omitted.
    fn starts_target_list(&self) -> bool {
        let token = self.stream.current();
        if token.is_eof()
            || token.matches_special_char(')')
            || token.matches_special_char(';')
            || token.matches_special_char(',')
        {
            return false;
        }
        !matches!(
            token.keyword,
            Some(
                Keyword::From
                    | Keyword::Where
                    | Keyword::Group
                    | Keyword::Having
                    | Keyword::Window
                    | Keyword::Order
                    | Keyword::Limit
                    | Keyword::Offset
                    | Keyword::Fetch
                    | Keyword::For
                    | Keyword::Union
                    | Keyword::Intersect
                    | Keyword::Except
                    | Keyword::Into
                    | Keyword::Returning
            )
        )
    }

    fn named_window_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            let name = self.col_id()?;
            self.stream.expect_keyword(&[Keyword::As])?;
            let spec = self.window_specification()?;
            self.ast.link_clause(spec, name)?;
            if let NodeData::WindowDef(n) = self.ast.data_mut(spec) {
                n.name = Some(name);
            }
            items.push(spec);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.make_list(ListKind::Window, items)
    }

    fn values_clause(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::Values])?;
        let mut rows = Vec::new();
        loop {
            self.stream.expect_special_char('(')?;
            let mut elements = Vec::new();
            loop {
                elements.push(self.values_row_item()?);
                if !self.stream.consume_special_char(',') {
                    break;
                }
            }
            self.stream.expect_special_char(')')?;
            rows.push(self.push(NodeData::Row(RowExpression {
                elements,
                explicit_row: false,
            }))?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        let rows = self.make_list(ListKind::Row, rows)?;
        self.push(NodeData::Values(ValuesStmt {
            with: None,
            rows,
            order_by: None,
            limit: None,
            limit_with_ties: false,
            offset: None,
        }))
    }

    /// DEFAULT is accepted in any VALUES row; whether the statement can
    /// honor it is the caller's concern, as with the server grammar.
    fn values_row_item(&mut self) -> Result<NodeId> {
        if self.stream.matches_keyword(Keyword::Default)
            && (self.stream.look(1).matches_special_char(',')
                || self.stream.look(1).matches_special_char(')'))
        {
            self.stream.next();
            return self.push(NodeData::SetToDefault);
        }
        self.expression()
    }

    // ---- WITH and common table expressions ----

    fn opt_with_clause(&mut self) -> Result<Option<NodeId>> {
        if self.stream.matches_keyword(Keyword::With) {
            Ok(Some(self.with_clause()?))
        } else {
            Ok(None)
        }
    }

    fn with_clause(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::With])?;
        let recursive = self.stream.consume_keyword(Keyword::Recursive);
        let mut ctes = Vec::new();
        loop {
            ctes.push(self.common_table_expression()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.push(NodeData::With(WithClause { recursive, ctes }))
    }

    fn common_table_expression(&mut self) -> Result<NodeId> {
        let name = self.col_id()?;
        let column_aliases = if self.stream.matches_special_char('(') {
            self.stream.next();
            let list = self.identifier_list()?;
            self.stream.expect_special_char(')')?;
            Some(list)
        } else {
            None
        };
        self.stream.expect_keyword(&[Keyword::As])?;
        let materialized = if self.stream.consume_keyword(Keyword::Materialized) {
            Some(true)
        } else if self
            .stream
            .matches_keyword_sequence(&[Keyword::Not, Keyword::Materialized])
        {
            self.stream.skip(2);
            Some(false)
        } else {
            None
        };
        self.stream.expect_special_char('(')?;
        let statement = self.statement()?;
        self.stream.expect_special_char(')')?;
        let search = if self.stream.matches_keyword(Keyword::Search) {
            Some(self.search_clause()?)
        } else {
            None
        };
        let cycle = if self.stream.matches_keyword(Keyword::Cycle) {
            Some(self.cycle_clause()?)
        } else {
            None
        };
        self.push(NodeData::Cte(CommonTableExpression {
            name,
            column_aliases,
            materialized,
            statement,
            search,
            cycle,
        }))
    }

    fn search_clause(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::Search])?;
        let kw = self
            .stream
            .expect_keyword(&[Keyword::Breadth, Keyword::Depth])?;
        self.stream.expect_keyword(&[Keyword::First])?;
        self.stream.expect_keyword(&[Keyword::By])?;
        let track_columns = self.identifier_list()?;
        self.stream.expect_keyword(&[Keyword::Set])?;
        let sequence_column = self.col_id()?;
        self.push(NodeData::Search(SearchClause {
            breadth_first: kw == Keyword::Breadth,
            track_columns,
            sequence_column,
        }))
    }

    fn cycle_clause(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::Cycle])?;
        let track_columns = self.identifier_list()?;
        self.stream.expect_keyword(&[Keyword::Set])?;
        let mark_column = self.col_id()?;
        let (mark_value, mark_default) = if self.stream.consume_keyword(Keyword::To) {
            let value = self.expression()?;
            self.stream.expect_keyword(&[Keyword::Default])?;
            let default = self.expression()?;
            (Some(value), Some(default))
        } else {
            (None, None)
        };
        self.stream.expect_keyword(&[Keyword::Using])?;
        let path_column = self.col_id()?;
        self.push(NodeData::Cycle(CycleClause {
            track_columns,
            mark_column,
            mark_value,
            mark_default,
            path_column,
        }))
    }

    // ---- target, order by, group by, locking lists ----

    fn target_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            items.push(self.target_element()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.make_list(ListKind::Target, items)
    }

    fn target_element(&mut self) -> Result<NodeId> {
        let expression = if self.stream.matches_special_char('*') {
            self.stream.next();
            let star = self.push(NodeData::Star)?;
            self.push(NodeData::ColumnRef(ColumnReference { parts: vec![star] }))?
        } else {
            self.expression()?
        };
        let alias = if self.stream.consume_keyword(Keyword::As) {
            Some(self.col_label()?)
        } else if self.bare_label_allowed() {
            Some(self.col_label()?)
        } else {
            None
        };
        self.push(NodeData::Target(TargetElement { expression, alias }))
    }

    /// Aliases without AS only work for tokens the grammar marks as bare
    /// labels; everything else would be ambiguous.
    fn bare_label_allowed(&self) -> bool {
        let token = self.stream.current();
        if token.matches(TokenType::IDENTIFIER) {
            return true;
        }
        token.keyword.is_some_and(|kw| kw.can_be_bare_label())
    }

    fn order_by_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            items.push(self.order_by_element()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.make_list(ListKind::OrderBy, items)
    }

    fn order_by_element(&mut self) -> Result<NodeId> {
        let expression = self.expression()?;
        let mut direction = None;
        let mut using_operator = None;
        if self.stream.consume_keyword(Keyword::Asc) {
            direction = Some(SortDirection::Asc);
        } else if self.stream.consume_keyword(Keyword::Desc) {
            direction = Some(SortDirection::Desc);
        } else if self.stream.consume_keyword(Keyword::Using) {
            using_operator = Some(self.any_operator()?);
        }
        let nulls = if self.stream.consume_keyword(Keyword::Nulls) {
            match self.stream.expect_keyword(&[Keyword::First, Keyword::Last])? {
                Keyword::First => Some(NullsOrder::First),
                _ => Some(NullsOrder::Last),
            }
        } else {
            None
        };
        self.push(NodeData::OrderBy(OrderByElement {
            expression,
            direction,
            using_operator,
            nulls,
        }))
    }

    fn group_by_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            items.push(self.group_by_item()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.make_list(ListKind::Expression, items)
    }

    fn group_by_item(&mut self) -> Result<NodeId> {
        if self
            .stream
            .matches_keyword_sequence(&[Keyword::Grouping, Keyword::Sets])
        {
            self.stream.skip(2);
            self.stream.expect_special_char('(')?;
            let mut items = Vec::new();
            loop {
                items.push(self.group_by_item()?);
                if !self.stream.consume_special_char(',') {
                    break;
                }
            }
            self.stream.expect_special_char(')')?;
            return self.push(NodeData::GroupingElement(GroupingElement {
                kind: GroupingElementKind::GroupingSets,
                items,
            }));
        }
        if let Some(kw) = self
            .stream
            .matches_any_keyword(&[Keyword::Cube, Keyword::Rollup])
        {
            self.stream.next();
            self.stream.expect_special_char('(')?;
            let mut items = Vec::new();
            loop {
                items.push(self.expression()?);
                if !self.stream.consume_special_char(',') {
                    break;
                }
            }
            self.stream.expect_special_char(')')?;
            let kind = if kw == Keyword::Cube {
                GroupingElementKind::Cube
            } else {
                GroupingElementKind::Rollup
            };
            return self.push(NodeData::GroupingElement(GroupingElement { kind, items }));
        }
        if self.stream.matches_special_char('(') && self.stream.look(1).matches_special_char(')') {
            self.stream.skip(2);
            return self.push(NodeData::GroupingElement(GroupingElement {
                kind: GroupingElementKind::Empty,
                items: Vec::new(),
            }));
        }
        self.expression()
    }

    fn locking_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        while self.stream.matches_keyword(Keyword::For) {
            items.push(self.locking_element()?);
        }
        if items.is_empty() {
            return Err(self.stream.syntax_error(format!(
                "expected FOR, found {}",
                self.stream.current().describe()
            )));
        }
        self.make_list(ListKind::Locking, items)
    }

    fn locking_element(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::For])?;
        let strength = if self.stream.consume_keyword(Keyword::Update) {
            LockingStrength::Update
        } else if self.stream.consume_keyword(Keyword::Share) {
            LockingStrength::Share
        } else if self.stream.consume_keyword(Keyword::No) {
            self.stream.expect_keyword(&[Keyword::Key])?;
            self.stream.expect_keyword(&[Keyword::Update])?;
            LockingStrength::NoKeyUpdate
        } else {
            self.stream.expect_keyword(&[Keyword::Key])?;
            self.stream.expect_keyword(&[Keyword::Share])?;
            LockingStrength::KeyShare
        };
        let mut relations = Vec::new();
        if self.stream.consume_keyword(Keyword::Of) {
            loop {
                relations.push(self.qualified_name()?);
                if !self.stream.consume_special_char(',') {
                    break;
                }
            }
        }
        let mut no_wait = false;
        let mut skip_locked = false;
        if self.stream.consume_keyword(Keyword::Nowait) {
            no_wait = true;
        } else if self
            .stream
            .matches_keyword_sequence(&[Keyword::Skip, Keyword::Locked])
        {
            self.stream.skip(2);
            skip_locked = true;
        }
        self.push(NodeData::Locking(LockingElement {
            strength,
            relations,
            no_wait,
            skip_locked,
        }))
    }
}

// ---- FROM clause ----

impl ParseContext<'_> {
    fn from_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            items.push(self.table_reference()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.make_list(ListKind::From, items)
    }

    /// A table primary followed by any number of joins, left associative.
    fn table_reference(&mut self) -> Result<NodeId> {
        let mut left = self.table_primary()?;
        loop {
            let natural = self.stream.matches_keyword(Keyword::Natural)
                && matches!(
                    self.stream.look(1).keyword,
                    Some(
                        Keyword::Join
                            | Keyword::Inner
                            | Keyword::Cross
                            | Keyword::Left
                            | Keyword::Right
                            | Keyword::Full
                    )
                );
            if natural {
                self.stream.next();
            }
            let kind = if self.stream.matches_keyword(Keyword::Cross)
                && self.stream.look(1).keyword == Some(Keyword::Join)
            {
                if natural {
                    return Err(self
                        .stream
                        .syntax_error("NATURAL cannot be combined with CROSS JOIN"));
                }
                self.stream.skip(2);
                JoinKind::Cross
            } else if self.stream.consume_keyword(Keyword::Join) {
                JoinKind::Inner
            } else if self.stream.matches_keyword(Keyword::Inner)
                && self.stream.look(1).keyword == Some(Keyword::Join)
            {
                self.stream.skip(2);
                JoinKind::Inner
            } else if let Some(kw) = self
                .stream
                .matches_any_keyword(&[Keyword::Left, Keyword::Right, Keyword::Full])
            {
                let next = self.stream.look(1).keyword;
                if next == Some(Keyword::Join) {
                    self.stream.skip(2);
                } else if next == Some(Keyword::Outer)
                    && self.stream.look(2).keyword == Some(Keyword::Join)
                {
                    self.stream.skip(3);
                } else if natural {
                    return Err(self.stream.syntax_error(format!(
                        "expected JOIN, found {}",
                        self.stream.look(1).describe()
                    )));
                } else {
                    break;
                }
                match kw {
                    Keyword::Left => JoinKind::Left,
                    Keyword::Right => JoinKind::Right,
                    _ => JoinKind::Full,
                }
            } else if natural {
                return Err(self.stream.syntax_error(format!(
                    "expected a join after NATURAL, found {}",
                    self.stream.current().describe()
                )));
            } else {
                break;
            };
            let right = self.table_primary()?;
            let (on, using_clause) = if kind == JoinKind::Cross || natural {
                (None, None)
            } else if self.stream.consume_keyword(Keyword::On) {
                (Some(self.expression()?), None)
            } else if self.stream.consume_keyword(Keyword::Using) {
                self.stream.expect_special_char('(')?;
                let columns = self.identifier_list()?;
                self.stream.expect_special_char(')')?;
                let alias = if self.stream.consume_keyword(Keyword::As) {
                    Some(self.col_id()?)
                } else {
                    None
                };
                let using = self.push(NodeData::Using(UsingClause { columns, alias }))?;
                (None, Some(using))
            } else {
                return Err(self.stream.syntax_error("expected ON or USING after join"));
            };
            left = self.push(NodeData::Join(JoinExpression {
                left,
                right,
                kind,
                natural,
                on,
                using_clause,
                alias: None,
            }))?;
        }
        Ok(left)
    }

    fn table_primary(&mut self) -> Result<NodeId> {
        let lateral = self.stream.consume_keyword(Keyword::Lateral);
        if self.stream.matches_special_char('(') {
            if self.paren_class() == ParenClass::Select {
                self.stream.next();
                let query = self.query_expression()?;
                self.stream.expect_special_char(')')?;
                let (alias, column_aliases) = self.opt_alias_clause()?;
                return self.push(NodeData::RangeSubselect(RangeSubselect {
                    query,
                    lateral,
                    alias,
                    column_aliases,
                }));
            }
            if lateral {
                return Err(self
                    .stream
                    .syntax_error("LATERAL can only precede a subquery or function call"));
            }
            self.stream.next();
            let join = self.table_reference()?;
            self.stream.expect_special_char(')')?;
            let (alias, column_aliases) = self.opt_alias_clause()?;
            if alias.is_some() || column_aliases.is_some() {
                self.attach_table_alias(join, alias, column_aliases)?;
            }
            return Ok(join);
        }
        if self.stream.matches_keyword(Keyword::Xmltable)
            && self.stream.look(1).matches_special_char('(')
        {
            return self.xml_table(lateral);
        }
        if self.stream.matches_keyword(Keyword::Only) {
            if lateral {
                return Err(self
                    .stream
                    .syntax_error("LATERAL can only precede a subquery or function call"));
            }
            self.stream.next();
            return self.relation_reference(true);
        }
        if self.function_parens_follow() {
            return self.range_function(lateral);
        }
        if lateral {
            return Err(self
                .stream
                .syntax_error("LATERAL can only precede a subquery or function call"));
        }
        self.relation_reference(false)
    }

    /// A parenthesized join (or plain relation) can take an alias after
    /// the closing parenthesis; the node already exists by then.
    fn attach_table_alias(
        &mut self,
        node: NodeId,
        alias: Option<NodeId>,
        column_aliases: Option<NodeId>,
    ) -> Result<()> {
        match self.ast.data(node) {
            NodeData::Join(n) => {
                if n.alias.is_some() {
                    return Err(self.stream.syntax_error("the join already has an alias"));
                }
                if column_aliases.is_some() {
                    return Err(self
                        .stream
                        .syntax_error("column aliases are not allowed on a join alias"));
                }
                if let Some(alias) = alias {
                    self.ast.link_clause(node, alias)?;
                    if let NodeData::Join(n) = self.ast.data_mut(node) {
                        n.alias = Some(alias);
                    }
                }
            }
            NodeData::RelationRef(n) => {
                if n.alias.is_some() || n.column_aliases.is_some() {
                    return Err(self.stream.syntax_error("the table already has an alias"));
                }
                if let Some(alias) = alias {
                    self.ast.link_clause(node, alias)?;
                    if let NodeData::RelationRef(n) = self.ast.data_mut(node) {
                        n.alias = Some(alias);
                    }
                }
                if let Some(columns) = column_aliases {
                    self.ast.link_clause(node, columns)?;
                    if let NodeData::RelationRef(n) = self.ast.data_mut(node) {
                        n.column_aliases = Some(columns);
                    }
                }
            }
            _ => {
                return Err(self.stream.syntax_error("an alias is not allowed here"));
            }
        }
        Ok(())
    }

    fn relation_reference(&mut self, only: bool) -> Result<NodeId> {
        let name = self.qualified_name()?;
        let star = self.stream.consume_special_char('*');
        let (alias, column_aliases) = self.opt_alias_clause()?;
        self.push(NodeData::RelationRef(RelationReference {
            name,
            only,
            star,
            alias,
            column_aliases,
        }))
    }

    /// `[AS] alias [(col, ...)]`. A bare alias must not be a reserved or
    /// type_func_name keyword, otherwise JOIN and similar would be eaten.
    fn opt_alias_clause(&mut self) -> Result<(Option<NodeId>, Option<NodeId>)> {
        let alias = if self.stream.consume_keyword(Keyword::As) {
            Some(self.col_label()?)
        } else if self.stream.matches(TokenType::IDENTIFIER)
            || matches!(
                self.stream.keyword().map(|kw| kw.category()),
                Some(KeywordCategory::Unreserved | KeywordCategory::ColName)
            )
        {
            Some(self.col_id()?)
        } else {
            None
        };
        let column_aliases = if alias.is_some() && self.stream.matches_special_char('(') {
            self.stream.next();
            let list = self.identifier_list()?;
            self.stream.expect_special_char(')')?;
            Some(list)
        } else {
            None
        };
        Ok((alias, column_aliases))
    }

    /// True when the upcoming tokens form `name(.name)* (`, which in a
    /// FROM clause can only start a function call.
    fn function_parens_follow(&self) -> bool {
        if !self.identifier_like() {
            return false;
        }
        let mut i = 1;
        while self.stream.look(i).matches_special_char('.') {
            let part = self.stream.look(i + 1);
            if !(part.matches(TokenType::IDENTIFIER) || part.keyword.is_some()) {
                return false;
            }
            i += 2;
        }
        self.stream.look(i).matches_special_char('(')
    }

    fn range_function(&mut self, lateral: bool) -> Result<NodeId> {
        let name = self.qualified_function_name()?;
        let function = self.function_call_suffix(name)?;
        let with_ordinality = if self
            .stream
            .matches_keyword_sequence(&[Keyword::With, Keyword::Ordinality])
        {
            self.stream.skip(2);
            true
        } else {
            false
        };
        let (alias, column_aliases, column_definitions) = self.function_alias_clause()?;
        self.push(NodeData::RangeFunction(RangeFunctionCall {
            function,
            lateral,
            with_ordinality,
            alias,
            column_aliases,
            column_definitions,
        }))
    }

    fn function_alias_clause(&mut self) -> Result<(Option<NodeId>, Option<NodeId>, Option<NodeId>)> {
        if self.stream.consume_keyword(Keyword::As) {
            if self.stream.matches_special_char('(') {
                self.stream.next();
                let defs = self.column_definition_list()?;
                self.stream.expect_special_char(')')?;
                return Ok((None, None, Some(defs)));
            }
            let alias = self.col_label()?;
            let (column_aliases, column_definitions) = self.opt_function_columns()?;
            return Ok((Some(alias), column_aliases, column_definitions));
        }
        if self.stream.matches(TokenType::IDENTIFIER)
            || matches!(
                self.stream.keyword().map(|kw| kw.category()),
                Some(KeywordCategory::Unreserved | KeywordCategory::ColName)
            )
        {
            let alias = self.col_id()?;
            let (column_aliases, column_definitions) = self.opt_function_columns()?;
            return Ok((Some(alias), column_aliases, column_definitions));
        }
        Ok((None, None, None))
    }

    fn opt_function_columns(&mut self) -> Result<(Option<NodeId>, Option<NodeId>)> {
        if !self.stream.matches_special_char('(') {
            return Ok((None, None));
        }
        self.stream.next();
        let result = if self.column_definitions_follow() {
            (None, Some(self.column_definition_list()?))
        } else {
            (Some(self.identifier_list()?), None)
        };
        self.stream.expect_special_char(')')?;
        Ok(result)
    }

    /// Distinguishes `alias(col, col)` from `alias(col type, ...)` by the
    /// token after the first name.
    fn column_definitions_follow(&self) -> bool {
        let second = self.stream.look(1);
        self.token_identifier_like(self.stream.current())
            && !(second.matches_special_char(',') || second.matches_special_char(')'))
    }

    fn column_definition_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            let name = self.col_id()?;
            let type_name = self.type_name()?;
            items.push(self.push(NodeData::ColumnDef(ColumnDefinition { name, type_name }))?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.make_list(ListKind::ColumnDefinition, items)
    }

    fn xml_table(&mut self, lateral: bool) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::Xmltable])?;
        self.stream.expect_special_char('(')?;
        let namespaces = if self.stream.matches_keyword(Keyword::Xmlnamespaces) {
            self.stream.next();
            self.stream.expect_special_char('(')?;
            let mut items = Vec::new();
            loop {
                items.push(self.xml_namespace()?);
                if !self.stream.consume_special_char(',') {
                    break;
                }
            }
            self.stream.expect_special_char(')')?;
            self.stream.expect_special_char(',')?;
            Some(self.make_list(ListKind::XmlNamespace, items)?)
        } else {
            None
        };
        let row_expression = self.expression()?;
        self.stream.expect_keyword(&[Keyword::Passing])?;
        let document_expression = self.expression()?;
        self.stream.expect_keyword(&[Keyword::Columns])?;
        let mut cols = Vec::new();
        loop {
            cols.push(self.xml_column()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        let columns = self.make_list(ListKind::XmlColumn, cols)?;
        self.stream.expect_special_char(')')?;
        let (alias, column_aliases) = self.opt_alias_clause()?;
        self.push(NodeData::XmlTable(XmlTable {
            lateral,
            namespaces,
            row_expression,
            document_expression,
            columns,
            alias,
            column_aliases,
        }))
    }

    fn xml_namespace(&mut self) -> Result<NodeId> {
        if self.stream.consume_keyword(Keyword::Default) {
            let xml = self.expression()?;
            return self.push(NodeData::XmlNamespace(XmlNamespace { xml, alias: None }));
        }
        let xml = self.expression()?;
        self.stream.expect_keyword(&[Keyword::As])?;
        let alias = self.col_id()?;
        self.push(NodeData::XmlNamespace(XmlNamespace {
            xml,
            alias: Some(alias),
        }))
    }

    fn xml_column(&mut self) -> Result<NodeId> {
        let name = self.col_id()?;
        if self
            .stream
            .matches_keyword_sequence(&[Keyword::For, Keyword::Ordinality])
        {
            self.stream.skip(2);
            return self.push(NodeData::XmlColumn(XmlColumnDefinition {
                name,
                for_ordinality: true,
                type_name: None,
                path: None,
                nullable: None,
                default: None,
            }));
        }
        let type_name = Some(self.type_name()?);
        let mut path = None;
        let mut nullable = None;
        let mut default = None;
        loop {
            if self.stream.consume_keyword(Keyword::Path) {
                path = Some(self.expression()?);
            } else if self.stream.consume_keyword(Keyword::Default) {
                default = Some(self.expression()?);
            } else if self
                .stream
                .matches_keyword_sequence(&[Keyword::Not, Keyword::Null])
            {
                self.stream.skip(2);
                nullable = Some(false);
            } else if self.stream.consume_keyword(Keyword::Null) {
                nullable = Some(true);
            } else {
                break;
            }
        }
        self.push(NodeData::XmlColumn(XmlColumnDefinition {
            name,
            for_ordinality: false,
            type_name,
            path,
            nullable,
            default,
        }))
    }
}

// ---- DML statements ----

impl ParseContext<'_> {
    fn insert_statement(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::Insert])?;
        self.stream.expect_keyword(&[Keyword::Into])?;
        let name = self.qualified_name()?;
        let alias = if self.stream.consume_keyword(Keyword::As) {
            Some(self.col_id()?)
        } else {
            None
        };
        let relation = self.push(NodeData::RelationRef(RelationReference {
            name,
            only: false,
            star: false,
            alias,
            column_aliases: None,
        }))?;
        // A parenthesized subquery as the source has no column list, so
        // disambiguate by classifying the group.
        let columns = if self.stream.matches_special_char('(')
            && self.paren_class() != ParenClass::Select
        {
            self.stream.next();
            let list = self.set_target_list()?;
            self.stream.expect_special_char(')')?;
            Some(list)
        } else {
            None
        };
        let overriding = self.opt_overriding()?;
        let values = if self
            .stream
            .matches_keyword_sequence(&[Keyword::Default, Keyword::Values])
        {
            self.stream.skip(2);
            None
        } else {
            Some(self.query_expression()?)
        };
        let on_conflict = if self
            .stream
            .matches_keyword_sequence(&[Keyword::On, Keyword::Conflict])
        {
            Some(self.on_conflict_clause()?)
        } else {
            None
        };
        let returning = if self.stream.consume_keyword(Keyword::Returning) {
            Some(self.target_list()?)
        } else {
            None
        };
        self.push(NodeData::Insert(InsertStmt {
            with: None,
            relation,
            columns,
            overriding,
            values,
            on_conflict,
            returning,
        }))
    }

    fn opt_overriding(&mut self) -> Result<Option<OverridingKind>> {
        if !self.stream.consume_keyword(Keyword::Overriding) {
            return Ok(None);
        }
        let kw = self
            .stream
            .expect_keyword(&[Keyword::System, Keyword::User])?;
        self.stream.expect_keyword(&[Keyword::Value])?;
        Ok(Some(if kw == Keyword::System {
            OverridingKind::System
        } else {
            OverridingKind::User
        }))
    }

    fn on_conflict_clause(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::On])?;
        self.stream.expect_keyword(&[Keyword::Conflict])?;
        let mut target = None;
        let mut on_constraint = false;
        if self
            .stream
            .matches_keyword_sequence(&[Keyword::On, Keyword::Constraint])
        {
            self.stream.skip(2);
            target = Some(self.col_id()?);
            on_constraint = true;
        } else if self.stream.matches_special_char('(') {
            target = Some(self.index_parameters()?);
        }
        self.stream.expect_keyword(&[Keyword::Do])?;
        if self.stream.consume_keyword(Keyword::Nothing) {
            return self.push(NodeData::OnConflict(OnConflictClause {
                action: OnConflictAction::DoNothing,
                target,
                on_constraint,
                set_clause: None,
                condition: None,
            }));
        }
        self.stream.expect_keyword(&[Keyword::Update])?;
        self.stream.expect_keyword(&[Keyword::Set])?;
        let set_clause = Some(self.set_clause_list()?);
        let condition = if self.stream.consume_keyword(Keyword::Where) {
            Some(self.expression()?)
        } else {
            None
        };
        self.push(NodeData::OnConflict(OnConflictClause {
            action: OnConflictAction::DoUpdate,
            target,
            on_constraint,
            set_clause,
            condition,
        }))
    }

    fn index_parameters(&mut self) -> Result<NodeId> {
        self.stream.expect_special_char('(')?;
        let mut elements = Vec::new();
        loop {
            elements.push(self.index_element()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.stream.expect_special_char(')')?;
        let where_clause = if self.stream.consume_keyword(Keyword::Where) {
            Some(self.expression()?)
        } else {
            None
        };
        self.push(NodeData::IndexParameters(IndexParameters {
            elements,
            where_clause,
        }))
    }

    /// Conflict target element: an expression below the boolean operators
    /// so a trailing ASC or NULLS keyword is not swallowed.
    fn index_element(&mut self) -> Result<NodeId> {
        let expression = self.typecast_expression()?;
        let collation = if self.stream.consume_keyword(Keyword::Collate) {
            Some(self.qualified_name()?)
        } else {
            None
        };
        let op_class = if self.identifier_like() {
            Some(self.qualified_name()?)
        } else {
            None
        };
        let direction = if self.stream.consume_keyword(Keyword::Asc) {
            Some(SortDirection::Asc)
        } else if self.stream.consume_keyword(Keyword::Desc) {
            Some(SortDirection::Desc)
        } else {
            None
        };
        let nulls = if self.stream.consume_keyword(Keyword::Nulls) {
            match self
                .stream
                .expect_keyword(&[Keyword::First, Keyword::Last])?
            {
                Keyword::First => Some(NullsOrder::First),
                _ => Some(NullsOrder::Last),
            }
        } else {
            None
        };
        self.push(NodeData::IndexElement(IndexElement {
            expression,
            collation,
            op_class,
            direction,
            nulls,
        }))
    }

    fn set_target_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            items.push(self.set_target()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.make_list(ListKind::SetTarget, items)
    }

    fn set_target(&mut self) -> Result<NodeId> {
        let name = self.col_id()?;
        let mut indirection = Vec::new();
        loop {
            if self.stream.matches_special_char('.') {
                self.stream.next();
                indirection.push(self.col_label()?);
            } else if self.stream.matches_special_char('[') {
                indirection.push(self.array_indexes()?);
            } else {
                break;
            }
        }
        self.push(NodeData::SetTarget(SetTargetElement { name, indirection }))
    }

    fn set_clause_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            items.push(self.set_clause()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.make_list(ListKind::SetClause, items)
    }

    fn set_clause(&mut self) -> Result<NodeId> {
        if self.stream.matches_special_char('(') {
            self.stream.next();
            let columns = self.set_target_list()?;
            self.stream.expect_special_char(')')?;
            self.stream.expect_special_char('=')?;
            let value = self.expression()?;
            return self.push(NodeData::MultipleSet(MultipleSetClause { columns, value }));
        }
        let column = self.set_target()?;
        self.stream.expect_special_char('=')?;
        let value = if self.stream.consume_keyword(Keyword::Default) {
            self.push(NodeData::SetToDefault)?
        } else {
            self.expression()?
        };
        self.push(NodeData::SingleSet(SingleSetClause { column, value }))
    }

    fn update_statement(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::Update])?;
        let relation = self.dml_target()?;
        self.stream.expect_keyword(&[Keyword::Set])?;
        let set_clause = self.set_clause_list()?;
        let from = if self.stream.consume_keyword(Keyword::From) {
            Some(self.from_list()?)
        } else {
            None
        };
        let where_clause = if self.stream.consume_keyword(Keyword::Where) {
            Some(self.expression()?)
        } else {
            None
        };
        let returning = if self.stream.consume_keyword(Keyword::Returning) {
            Some(self.target_list()?)
        } else {
            None
        };
        self.push(NodeData::Update(UpdateStmt {
            with: None,
            relation,
            set_clause,
            from,
            where_clause,
            returning,
        }))
    }

    fn delete_statement(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::Delete])?;
        self.stream.expect_keyword(&[Keyword::From])?;
        let relation = self.dml_target()?;
        let using = if self.stream.consume_keyword(Keyword::Using) {
            Some(self.from_list()?)
        } else {
            None
        };
        let where_clause = if self.stream.consume_keyword(Keyword::Where) {
            Some(self.expression()?)
        } else {
            None
        };
        let returning = if self.stream.consume_keyword(Keyword::Returning) {
            Some(self.target_list()?)
        } else {
            None
        };
        self.push(NodeData::Delete(DeleteStmt {
            with: None,
            relation,
            using,
            where_clause,
            returning,
        }))
    }

    /// Relation target for UPDATE, DELETE and MERGE:
    /// `[ONLY] name [*] [[AS] alias]`. A bare SET cannot be an alias.
    fn dml_target(&mut self) -> Result<NodeId> {
        let only = self.stream.consume_keyword(Keyword::Only);
        let name = self.qualified_name()?;
        let star = self.stream.consume_special_char('*');
        let alias = if self.stream.consume_keyword(Keyword::As) {
            Some(self.col_id()?)
        } else if !self.stream.matches_keyword(Keyword::Set)
            && (self.stream.matches(TokenType::IDENTIFIER)
                || matches!(
                    self.stream.keyword().map(|kw| kw.category()),
                    Some(KeywordCategory::Unreserved | KeywordCategory::ColName)
                ))
        {
            Some(self.col_id()?)
        } else {
            None
        };
        self.push(NodeData::RelationRef(RelationReference {
            name,
            only,
            star,
            alias,
            column_aliases: None,
        }))
    }

    fn merge_statement(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::Merge])?;
        self.stream.expect_keyword(&[Keyword::Into])?;
        let relation = self.dml_target()?;
        self.stream.expect_keyword(&[Keyword::Using])?;
        let using_item = self.table_primary()?;
        self.stream.expect_keyword(&[Keyword::On])?;
        let on = self.expression()?;
        let mut when_clauses = Vec::new();
        while self.stream.matches_keyword(Keyword::When) {
            when_clauses.push(self.merge_when_clause()?);
        }
        if when_clauses.is_empty() {
            return Err(self
                .stream
                .syntax_error("MERGE requires at least one WHEN clause"));
        }
        let returning = if self.stream.consume_keyword(Keyword::Returning) {
            Some(self.target_list()?)
        } else {
            None
        };
        self.push(NodeData::Merge(MergeStmt {
            with: None,
            relation,
            using_item,
            on,
            when_clauses,
            returning,
        }))
    }

    fn merge_when_clause(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::When])?;
        let not = self.stream.consume_keyword(Keyword::Not);
        self.stream.expect_keyword(&[Keyword::Matched])?;
        let matched = if self.stream.matches_keyword(Keyword::By) {
            if !not {
                return Err(self
                    .stream
                    .syntax_error("BY is only allowed after WHEN NOT MATCHED"));
            }
            self.stream.next();
            // SOURCE and TARGET are not keywords, only names with meaning
            // in this one position.
            let token = self.stream.expect(TokenType::IDENTIFIER, None)?;
            match token.value.as_str() {
                "source" => MergeMatchKind::NotMatchedBySource,
                "target" => MergeMatchKind::NotMatchedByTarget,
                _ => {
                    return Err(self
                        .stream
                        .syntax_error("expected SOURCE or TARGET after BY"));
                }
            }
        } else if not {
            MergeMatchKind::NotMatchedByTarget
        } else {
            MergeMatchKind::Matched
        };
        let condition = if self.stream.consume_keyword(Keyword::And) {
            Some(self.expression()?)
        } else {
            None
        };
        self.stream.expect_keyword(&[Keyword::Then])?;
        let action = self.merge_action(matched)?;
        self.push(NodeData::MergeWhen(MergeWhenClause {
            matched,
            condition,
            action,
        }))
    }

    fn merge_action(&mut self, matched: MergeMatchKind) -> Result<Option<NodeId>> {
        if self
            .stream
            .matches_keyword_sequence(&[Keyword::Do, Keyword::Nothing])
        {
            self.stream.skip(2);
            return Ok(None);
        }
        if self.stream.consume_keyword(Keyword::Update) {
            if matched == MergeMatchKind::NotMatchedByTarget {
                return Err(self
                    .stream
                    .syntax_error("UPDATE is not allowed when the target row has no match"));
            }
            self.stream.expect_keyword(&[Keyword::Set])?;
            let set_clause = self.set_clause_list()?;
            return Ok(Some(
                self.push(NodeData::MergeUpdate(MergeUpdate { set_clause }))?,
            ));
        }
        if self.stream.consume_keyword(Keyword::Delete) {
            if matched == MergeMatchKind::NotMatchedByTarget {
                return Err(self
                    .stream
                    .syntax_error("DELETE is not allowed when the target row has no match"));
            }
            return Ok(Some(self.push(NodeData::MergeDelete)?));
        }
        self.stream.expect_keyword(&[Keyword::Insert])?;
        if matched != MergeMatchKind::NotMatchedByTarget {
            return Err(self
                .stream
                .syntax_error("INSERT is only allowed when the target row has no match"));
        }
        let columns = if self.stream.matches_special_char('(') {
            self.stream.next();
            let list = self.set_target_list()?;
            self.stream.expect_special_char(')')?;
            Some(list)
        } else {
            None
        };
        let overriding = self.opt_overriding()?;
        let values = if self
            .stream
            .matches_keyword_sequence(&[Keyword::Default, Keyword::Values])
        {
            self.stream.skip(2);
            None
        } else {
            self.stream.expect_keyword(&[Keyword::Values])?;
            self.stream.expect_special_char('(')?;
            let mut items = Vec::new();
            loop {
                items.push(self.values_row_item()?);
                if !self.stream.consume_special_char(',') {
                    break;
                }
            }
            self.stream.expect_special_char(')')?;
            Some(self.make_list(ListKind::Expression, items)?)
        };
        Ok(Some(self.push(NodeData::MergeInsert(MergeInsert {
            columns,
            overriding,
            values,
        }))?))
    }
}

// ---- scalar expressions ----

impl ParseContext<'_> {
    fn expression(&mut self) -> Result<NodeId> {
        self.or_expression()
    }

    fn expression_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            items.push(self.expression()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.make_list(ListKind::Expression, items)
    }

    /// OR and AND chains are kept flat rather than as nested pairs.
    fn or_expression(&mut self) -> Result<NodeId> {
        let first = self.and_expression()?;
        if !self.stream.matches_keyword(Keyword::Or) {
            return Ok(first);
        }
        let mut items = vec![first];
        while self.stream.consume_keyword(Keyword::Or) {
            items.push(self.and_expression()?);
        }
        self.push(NodeData::Logical(LogicalExpression {
            operator: LogicalOperator::Or,
            items,
        }))
    }

    fn and_expression(&mut self) -> Result<NodeId> {
        let first = self.not_expression()?;
        if !self.stream.matches_keyword(Keyword::And) {
            return Ok(first);
        }
        let mut items = vec![first];
        while self.stream.consume_keyword(Keyword::And) {
            items.push(self.not_expression()?);
        }
        self.push(NodeData::Logical(LogicalExpression {
            operator: LogicalOperator::And,
            items,
        }))
    }

    fn not_expression(&mut self) -> Result<NodeId> {
        if self.stream.consume_keyword(Keyword::Not) {
            let argument = self.not_expression()?;
            return self.push(NodeData::Not(NotExpression { argument }));
        }
        self.is_expression()
    }

    fn is_expression(&mut self) -> Result<NodeId> {
        let mut left = self.comparison_expression()?;
        loop {
            if self.stream.consume_keyword(Keyword::Isnull) {
                left = self.push(NodeData::Is(IsExpression {
                    argument: left,
                    predicate: IsPredicate::Null,
                    not: false,
                }))?;
            } else if self.stream.consume_keyword(Keyword::Notnull) {
                left = self.push(NodeData::Is(IsExpression {
                    argument: left,
                    predicate: IsPredicate::Null,
                    not: true,
                }))?;
            } else if self.stream.consume_keyword(Keyword::Is) {
                let not = self.stream.consume_keyword(Keyword::Not);
                if self.stream.consume_keyword(Keyword::Distinct) {
                    self.stream.expect_keyword(&[Keyword::From])?;
                    let right = self.comparison_expression()?;
                    left = self.push(NodeData::IsDistinctFrom(IsDistinctFromExpression {
                        left,
                        right,
                        not,
                    }))?;
                } else if self.stream.consume_keyword(Keyword::Json) {
                    left = self.is_json_expression(left, not)?;
                } else {
                    let kw = self.stream.expect_keyword(&[
                        Keyword::Null,
                        Keyword::True,
                        Keyword::False,
                        Keyword::Unknown,
                        Keyword::Document,
                    ])?;
                    let predicate = match kw {
                        Keyword::Null => IsPredicate::Null,
                        Keyword::True => IsPredicate::True,
                        Keyword::False => IsPredicate::False,
                        Keyword::Unknown => IsPredicate::Unknown,
                        _ => IsPredicate::Document,
                    };
                    left = self.push(NodeData::Is(IsExpression {
                        argument: left,
                        predicate,
                        not,
                    }))?;
                }
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn is_json_expression(&mut self, argument: NodeId, not: bool) -> Result<NodeId> {
        let json_type = if self.stream.consume_keyword(Keyword::Value) {
            Some(JsonPredicateType::Value)
        } else if self.stream.consume_keyword(Keyword::Array) {
            Some(JsonPredicateType::Array)
        } else if self.stream.consume_keyword(Keyword::Object) {
            Some(JsonPredicateType::Object)
        } else if self.stream.consume_keyword(Keyword::Scalar) {
            Some(JsonPredicateType::Scalar)
        } else {
            None
        };
        let unique_keys = self.opt_unique_keys()?;
        self.push(NodeData::IsJson(IsJsonExpression {
            argument,
            not,
            json_type,
            unique_keys,
        }))
    }

    /// Comparison operators do not associate; `a < b < c` is rejected by
    /// the caller running into the second `<`.
    fn comparison_expression(&mut self) -> Result<NodeId> {
        let left = self.pattern_expression()?;
        let is_comparison = self.stream.matches(TokenType::INEQUALITY)
            || self.stream.matches_special_char('<')
            || self.stream.matches_special_char('>')
            || self.stream.matches_special_char('=');
        if !is_comparison {
            return Ok(left);
        }
        let operator = Operator::bare(self.stream.next().value);
        let right = self.comparison_operand()?;
        self.push(NodeData::Operator(OperatorExpression {
            operator,
            left: Some(left),
            right,
        }))
    }

    fn comparison_operand(&mut self) -> Result<NodeId> {
        if let Some(node) = self.any_all_operand()? {
            return Ok(node);
        }
        self.pattern_expression()
    }

    /// ANY / ALL / SOME with a parenthesized subquery or array operand.
    fn any_all_operand(&mut self) -> Result<Option<NodeId>> {
        let Some(kw) =
            self.stream
                .matches_any_keyword(&[Keyword::Any, Keyword::All, Keyword::Some])
        else {
            return Ok(None);
        };
        if !self.stream.look(1).matches_special_char('(') {
            return Ok(None);
        }
        self.stream.next();
        if self.select_ahead() {
            self.stream.next();
            let query = self.query_expression()?;
            self.stream.expect_special_char(')')?;
            let operator = match kw {
                Keyword::Any => SubselectOperator::Any,
                Keyword::All => SubselectOperator::All,
                _ => SubselectOperator::Some,
            };
            return Ok(Some(self.push(NodeData::Subselect(SubselectExpression {
                query,
                operator: Some(operator),
            }))?));
        }
        self.stream.next();
        let array = self.expression()?;
        self.stream.expect_special_char(')')?;
        let keyword = match kw {
            Keyword::Any => ArrayComparisonKeyword::Any,
            Keyword::All => ArrayComparisonKeyword::All,
            _ => ArrayComparisonKeyword::Some,
        };
        Ok(Some(self.push(NodeData::ArrayComparison(
            ArrayComparisonExpression { keyword, array },
        ))?))
    }

    fn pattern_expression(&mut self) -> Result<NodeId> {
        let argument = self.overlaps_expression()?;
        let offset = usize::from(self.stream.matches_keyword(Keyword::Not));
        let predicate = match self.stream.look(offset).keyword {
            Some(Keyword::Like) => PatternPredicate::Like,
            Some(Keyword::Ilike) => PatternPredicate::Ilike,
            Some(Keyword::Similar)
                if self.stream.look(offset + 1).matches_keyword(Keyword::To) =>
            {
                PatternPredicate::SimilarTo
            }
            _ => return Ok(argument),
        };
        let not = offset == 1;
        self.stream.skip(offset + 1);
        if predicate == PatternPredicate::SimilarTo {
            self.stream.next();
        }
        let pattern = self.overlaps_expression()?;
        let escape = if self.stream.consume_keyword(Keyword::Escape) {
            Some(self.overlaps_expression()?)
        } else {
            None
        };
        self.push(NodeData::PatternMatching(PatternMatchingExpression {
            argument,
            pattern,
            predicate,
            not,
            escape,
        }))
    }

    fn overlaps_expression(&mut self) -> Result<NodeId> {
        let left = self.between_expression()?;
        if !self.stream.consume_keyword(Keyword::Overlaps) {
            return Ok(left);
        }
        let right = self.between_expression()?;
        self.push(NodeData::Overlaps(OverlapsExpression { left, right }))
    }

    /// BETWEEN does not associate; the bounds sit below the generic
    /// operators so the separating AND is not consumed by them.
    fn between_expression(&mut self) -> Result<NodeId> {
        let argument = self.in_expression()?;
        let offset = usize::from(self.stream.matches_keyword(Keyword::Not));
        if self.stream.look(offset).keyword != Some(Keyword::Between) {
            return Ok(argument);
        }
        let not = offset == 1;
        self.stream.skip(offset + 1);
        let symmetric = if self.stream.consume_keyword(Keyword::Symmetric) {
            Some(true)
        } else if self.stream.consume_keyword(Keyword::Asymmetric) {
            Some(false)
        } else {
            None
        };
        let left = self.generic_operator_expression()?;
        self.stream.expect_keyword(&[Keyword::And])?;
        let right = self.generic_operator_expression()?;
        self.push(NodeData::Between(BetweenExpression {
            argument,
            left,
            right,
            symmetric,
            not,
        }))
    }

    fn in_expression(&mut self) -> Result<NodeId> {
        let mut left = self.generic_operator_expression()?;
        loop {
            let offset = usize::from(self.stream.matches_keyword(Keyword::Not));
            if self.stream.look(offset).keyword != Some(Keyword::In) {
                break;
            }
            let not = offset == 1;
            self.stream.skip(offset + 1);
            self.stream.expect_special_char('(')?;
            let right = if self.select_ahead() {
                let query = self.query_expression()?;
                self.push(NodeData::Subselect(SubselectExpression {
                    query,
                    operator: None,
                }))?
            } else {
                self.expression_list()?
            };
            self.stream.expect_special_char(')')?;
            left = self.push(NodeData::In(InExpression { left, right, not }))?;
        }
        Ok(left)
    }

    /// All user-defined and multi-character operators share one
    /// precedence level, left associative.
    fn generic_operator_expression(&mut self) -> Result<NodeId> {
        let mut left = self.additive_expression()?;
        loop {
            let operator = if self.stream.matches(TokenType::OPERATOR) {
                Operator::bare(self.stream.next().value)
            } else if self.stream.matches_keyword(Keyword::Operator)
                && self.stream.look(1).matches_special_char('(')
            {
                self.qualified_operator()?
            } else {
                break;
            };
            let right = self.generic_operand()?;
            left = self.push(NodeData::Operator(OperatorExpression {
                operator,
                left: Some(left),
                right,
            }))?;
        }
        Ok(left)
    }

    fn generic_operand(&mut self) -> Result<NodeId> {
        if let Some(node) = self.any_all_operand()? {
            return Ok(node);
        }
        self.additive_expression()
    }

    fn additive_expression(&mut self) -> Result<NodeId> {
        let mut left = self.multiplicative_expression()?;
        loop {
            let name = if self.stream.matches_special_char('+') {
                "+"
            } else if self.stream.matches_special_char('-') {
                "-"
            } else {
                break;
            };
            self.stream.next();
            let right = self.multiplicative_expression()?;
            left = self.push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare(name),
                left: Some(left),
                right,
            }))?;
        }
        Ok(left)
    }

    fn multiplicative_expression(&mut self) -> Result<NodeId> {
        let mut left = self.exponent_expression()?;
        loop {
            let name = if self.stream.matches_special_char('*') {
                "*"
            } else if self.stream.matches_special_char('/') {
                "/"
            } else if self.stream.matches_special_char('%') {
                "%"
            } else {
                break;
            };
            self.stream.next();
            let right = self.exponent_expression()?;
            left = self.push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare(name),
                left: Some(left),
                right,
            }))?;
        }
        Ok(left)
    }

    fn exponent_expression(&mut self) -> Result<NodeId> {
        let mut left = self.time_zone_expression()?;
        while self.stream.matches_special_char('^') {
            self.stream.next();
            let right = self.time_zone_expression()?;
            left = self.push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("^"),
                left: Some(left),
                right,
            }))?;
        }
        Ok(left)
    }

    fn time_zone_expression(&mut self) -> Result<NodeId> {
        let mut left = self.collate_expression()?;
        loop {
            if self
                .stream
                .matches_keyword_sequence(&[Keyword::At, Keyword::Time, Keyword::Zone])
            {
                self.stream.skip(3);
                let time_zone = self.collate_expression()?;
                left = self.push(NodeData::AtTimeZone(AtTimeZoneExpression {
                    argument: left,
                    time_zone: Some(time_zone),
                }))?;
            } else if self
                .stream
                .matches_keyword_sequence(&[Keyword::At, Keyword::Local])
            {
                self.stream.skip(2);
                left = self.push(NodeData::AtTimeZone(AtTimeZoneExpression {
                    argument: left,
                    time_zone: None,
                }))?;
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn collate_expression(&mut self) -> Result<NodeId> {
        let mut left = self.unary_expression()?;
        while self.stream.consume_keyword(Keyword::Collate) {
            let collation = self.qualified_name()?;
            left = self.push(NodeData::Collate(CollateExpression {
                argument: left,
                collation,
            }))?;
        }
        Ok(left)
    }

    fn unary_expression(&mut self) -> Result<NodeId> {
        let operator = if self.stream.matches_special_char('+') {
            self.stream.next();
            Some(Operator::bare("+"))
        } else if self.stream.matches_special_char('-') {
            self.stream.next();
            Some(Operator::bare("-"))
        } else if self.stream.matches(TokenType::OPERATOR) {
            Some(Operator::bare(self.stream.next().value))
        } else if self.stream.matches_keyword(Keyword::Operator)
            && self.stream.look(1).matches_special_char('(')
        {
            Some(self.qualified_operator()?)
        } else {
            None
        };
        if let Some(operator) = operator {
            let right = self.unary_expression()?;
            return self.push(NodeData::Operator(OperatorExpression {
                operator,
                left: None,
                right,
            }));
        }
        self.typecast_expression()
    }

    fn typecast_expression(&mut self) -> Result<NodeId> {
        let mut left = self.indirection_expression()?;
        while self.stream.matches(TokenType::TYPECAST) {
            self.stream.next();
            let type_name = self.type_name()?;
            left = self.push(NodeData::Typecast(TypecastExpression {
                argument: left,
                type_name,
            }))?;
        }
        Ok(left)
    }

    fn indirection_expression(&mut self) -> Result<NodeId> {
        let expression = self.atom()?;
        let mut items = Vec::new();
        loop {
            if self.stream.matches_special_char('[') {
                items.push(self.array_indexes()?);
            } else if self.stream.matches_special_char('.') {
                if self.stream.look(1).matches_special_char('*') {
                    self.stream.skip(2);
                    items.push(self.push(NodeData::Star)?);
                    break;
                }
                self.stream.next();
                items.push(self.col_label()?);
            } else {
                break;
            }
        }
        if items.is_empty() {
            return Ok(expression);
        }
        self.push(NodeData::Indirection(Indirection { expression, items }))
    }

    /// `[expr]`, `[expr:expr]`, `[:expr]`, `[expr:]` or `[:]`. A plain
    /// subscript is carried in `lower`.
    fn array_indexes(&mut self) -> Result<NodeId> {
        self.stream.expect_special_char('[')?;
        let lower = if self.stream.matches_special_char(':')
            || self.stream.matches_special_char(']')
        {
            None
        } else {
            Some(self.expression()?)
        };
        let mut is_slice = false;
        let mut upper = None;
        if self.stream.consume_special_char(':') {
            is_slice = true;
            if !self.stream.matches_special_char(']') {
                upper = Some(self.expression()?);
            }
        }
        self.stream.expect_special_char(']')?;
        self.push(NodeData::ArrayIndexes(ArrayIndexes {
            lower,
            upper,
            is_slice,
        }))
    }

    // ---- atoms ----

    fn atom(&mut self) -> Result<NodeId> {
        if self.stream.matches(TokenType::LITERAL) {
            return self.constant();
        }
        if self.stream.matches(TokenType::NAMED_PARAM) {
            let name = self.stream.next().value;
            return self.push(NodeData::NamedParam(NamedParameter { name }));
        }
        if self.stream.matches(TokenType::POSITIONAL_PARAM) {
            let token = self.stream.next();
            let position = match token.value.parse::<u32>() {
                Ok(position) => position,
                Err(_) => return Err(self.stream.syntax_error("invalid parameter number")),
            };
            return self.push(NodeData::PositionalParam(PositionalParameter { position }));
        }
        if self.stream.matches_special_char('(') {
            return self.parenthesized_expression();
        }
        if let Some(kw) = self.stream.keyword() {
            if let Some(node) = self.keyword_atom(kw)? {
                return Ok(node);
            }
        }
        if self.identifier_like()
            || (matches!(
                self.stream.keyword().map(|kw| kw.category()),
                Some(KeywordCategory::TypeFuncName)
            ) && self.stream.look(1).matches_special_char('('))
        {
            return self.name_expression();
        }
        Err(self.stream.syntax_error(format!(
            "expected an expression, found {}",
            self.stream.current().describe()
        )))
    }

    fn constant(&mut self) -> Result<NodeId> {
        let token = self.stream.next();
        let kind = if token.matches(TokenType::INTEGER) {
            ConstantKind::Integer
        } else if token.matches(TokenType::FLOAT) {
            ConstantKind::Float
        } else if token.matches(TokenType::BINARY_STRING) {
            ConstantKind::BinaryString
        } else if token.matches(TokenType::HEX_STRING) {
            ConstantKind::HexString
        } else if token.matches(TokenType::NCHAR_STRING) {
            ConstantKind::NcharString
        } else {
            ConstantKind::String
        };
        self.push(NodeData::Constant(Constant {
            kind,
            value: token.value,
        }))
    }

    fn parenthesized_expression(&mut self) -> Result<NodeId> {
        match self.paren_class() {
            ParenClass::Select => {
                self.stream.next();
                let query = self.query_expression()?;
                self.stream.expect_special_char(')')?;
                self.push(NodeData::Subselect(SubselectExpression {
                    query,
                    operator: None,
                }))
            }
            ParenClass::Row => {
                self.stream.next();
                let mut elements = Vec::new();
                loop {
                    elements.push(self.expression()?);
                    if !self.stream.consume_special_char(',') {
                        break;
                    }
                }
                self.stream.expect_special_char(')')?;
                self.push(NodeData::Row(RowExpression {
                    elements,
                    explicit_row: false,
                }))
            }
            ParenClass::Expression => {
                // The grouping itself is not kept; the builder re-derives
                // parentheses from precedence.
                self.stream.next();
                let inner = self.expression()?;
                self.stream.expect_special_char(')')?;
                Ok(inner)
            }
        }
    }

    /// Keyword-introduced expression forms. Returns None when the keyword
    /// does not start one, leaving the stream untouched.
    fn keyword_atom(&mut self, kw: Keyword) -> Result<Option<NodeId>> {
        let paren_follows = self.stream.look(1).matches_special_char('(');
        let node = match kw {
            Keyword::True | Keyword::False => {
                self.stream.next();
                self.push(NodeData::Constant(Constant::boolean(kw == Keyword::True)))?
            }
            Keyword::Null => {
                self.stream.next();
                self.push(NodeData::Constant(Constant::null()))?
            }
            Keyword::Case => self.case_expression()?,
            Keyword::Exists if paren_follows => {
                self.stream.skip(2);
                let query = self.query_expression()?;
                self.stream.expect_special_char(')')?;
                self.push(NodeData::Subselect(SubselectExpression {
                    query,
                    operator: Some(SubselectOperator::Exists),
                }))?
            }
            Keyword::Array if paren_follows => {
                self.stream.skip(2);
                let query = self.query_expression()?;
                self.stream.expect_special_char(')')?;
                self.push(NodeData::Subselect(SubselectExpression {
                    query,
                    operator: Some(SubselectOperator::Array),
                }))?
            }
            Keyword::Array if self.stream.look(1).matches_special_char('[') => {
                self.stream.next();
                self.array_literal()?
            }
            Keyword::Row if paren_follows => {
                self.stream.skip(2);
                let mut elements = Vec::new();
                if !self.stream.matches_special_char(')') {
                    loop {
                        elements.push(self.expression()?);
                        if !self.stream.consume_special_char(',') {
                            break;
                        }
                    }
                }
                self.stream.expect_special_char(')')?;
                self.push(NodeData::Row(RowExpression {
                    elements,
                    explicit_row: true,
                }))?
            }
            Keyword::Grouping if paren_follows => {
                self.stream.skip(2);
                let mut arguments = Vec::new();
                loop {
                    arguments.push(self.expression()?);
                    if !self.stream.consume_special_char(',') {
                        break;
                    }
                }
                self.stream.expect_special_char(')')?;
                self.push(NodeData::Grouping(GroupingExpression { arguments }))?
            }
            Keyword::Cast if paren_follows => {
                self.stream.skip(2);
                let argument = self.expression()?;
                self.stream.expect_keyword(&[Keyword::As])?;
                let type_name = self.type_name()?;
                self.stream.expect_special_char(')')?;
                self.push(NodeData::Typecast(TypecastExpression {
                    argument,
                    type_name,
                }))?
            }
            Keyword::Extract if paren_follows => self.extract_function()?,
            Keyword::Position if paren_follows => self.position_function()?,
            Keyword::Substring if paren_follows => self.substring_function()?,
            Keyword::Overlay if paren_follows => self.overlay_function()?,
            Keyword::Trim if paren_follows => self.trim_function()?,
            Keyword::Nullif | Keyword::Coalesce | Keyword::Greatest | Keyword::Least
                if paren_follows =>
            {
                self.keyword_function(kw)?
            }
            Keyword::JsonObject if paren_follows => self.json_object()?,
            Keyword::JsonArray if paren_follows => self.json_array()?,
            Keyword::Xmlexists if paren_follows => self.xml_exists()?,
            Keyword::CurrentCatalog
            | Keyword::CurrentDate
            | Keyword::CurrentRole
            | Keyword::CurrentSchema
            | Keyword::CurrentTime
            | Keyword::CurrentTimestamp
            | Keyword::CurrentUser
            | Keyword::SessionUser
            | Keyword::User
            | Keyword::Localtime
            | Keyword::Localtimestamp => self.sql_value_function(kw)?,
            Keyword::Interval
            | Keyword::Int
            | Keyword::Integer
            | Keyword::Smallint
            | Keyword::Bigint
            | Keyword::Real
            | Keyword::Float
            | Keyword::Double
            | Keyword::Decimal
            | Keyword::Dec
            | Keyword::Numeric
            | Keyword::Boolean
            | Keyword::Bit
            | Keyword::Character
            | Keyword::Char
            | Keyword::Varchar
            | Keyword::National
            | Keyword::Nchar
            | Keyword::Time
            | Keyword::Timestamp => match self.typed_literal()? {
                Some(node) => node,
                None => return Ok(None),
            },
            _ => return Ok(None),
        };
        Ok(Some(node))
    }

    fn case_expression(&mut self) -> Result<NodeId> {
        self.stream.expect_keyword(&[Keyword::Case])?;
        let argument = if self.stream.matches_keyword(Keyword::When) {
            None
        } else {
            Some(self.expression()?)
        };
        let mut when_clauses = Vec::new();
        while self.stream.consume_keyword(Keyword::When) {
            let when = self.expression()?;
            self.stream.expect_keyword(&[Keyword::Then])?;
            let then = self.expression()?;
            when_clauses.push(self.push(NodeData::When(WhenClause { when, then }))?);
        }
        if when_clauses.is_empty() {
            return Err(self
                .stream
                .syntax_error("CASE requires at least one WHEN clause"));
        }
        let else_clause = if self.stream.consume_keyword(Keyword::Else) {
            Some(self.expression()?)
        } else {
            None
        };
        self.stream.expect_keyword(&[Keyword::End])?;
        self.push(NodeData::Case(CaseExpression {
            argument,
            when_clauses,
            else_clause,
        }))
    }

    /// `ARRAY[...]`; nested arrays may drop the keyword.
    fn array_literal(&mut self) -> Result<NodeId> {
        self.stream.expect_special_char('[')?;
        let mut elements = Vec::new();
        if !self.stream.matches_special_char(']') {
            loop {
                if self.stream.matches_special_char('[') {
                    elements.push(self.array_literal()?);
                } else {
                    elements.push(self.expression()?);
                }
                if !self.stream.consume_special_char(',') {
                    break;
                }
            }
        }
        self.stream.expect_special_char(']')?;
        self.push(NodeData::Array(ArrayExpression { elements }))
    }

    /// EXTRACT(field FROM source) normalizes to date_part(field, source).
    fn extract_function(&mut self) -> Result<NodeId> {
        self.stream.skip(2);
        let token = self.stream.current();
        if !(token.matches(TokenType::IDENTIFIER)
            || token.keyword.is_some()
            || token.matches(TokenType::STRING))
        {
            return Err(self.stream.syntax_error(format!(
                "expected an extract field, found {}",
                token.describe()
            )));
        }
        let value = self.stream.next().value;
        self.stream.expect_keyword(&[Keyword::From])?;
        let source = self.expression()?;
        self.stream.expect_special_char(')')?;
        let field = self.push(NodeData::Constant(Constant::string(value)))?;
        self.make_function("date_part", vec![field, source])
    }

    /// POSITION(needle IN haystack) becomes position(haystack, needle);
    /// the needle stops below IN so the keyword stays visible.
    fn position_function(&mut self) -> Result<NodeId> {
        self.stream.skip(2);
        let needle = self.generic_operator_expression()?;
        self.stream.expect_keyword(&[Keyword::In])?;
        let haystack = self.expression()?;
        self.stream.expect_special_char(')')?;
        self.make_function("position", vec![haystack, needle])
    }

    fn substring_function(&mut self) -> Result<NodeId> {
        self.stream.skip(2);
        let mut arguments = vec![self.expression()?];
        if self.stream.consume_special_char(',') {
            loop {
                arguments.push(self.expression()?);
                if !self.stream.consume_special_char(',') {
                    break;
                }
            }
        } else if self.stream.consume_keyword(Keyword::From) {
            arguments.push(self.expression()?);
            if self.stream.consume_keyword(Keyword::For) {
                arguments.push(self.expression()?);
            }
        } else if self.stream.consume_keyword(Keyword::For) {
            // SUBSTRING(s FOR n) counts from the first character
            arguments.push(self.push(NodeData::Constant(Constant::integer("1")))?);
            arguments.push(self.expression()?);
        }
        self.stream.expect_special_char(')')?;
        self.make_function("substring", arguments)
    }

    fn overlay_function(&mut self) -> Result<NodeId> {
        self.stream.skip(2);
        let source = self.expression()?;
        self.stream.expect_keyword(&[Keyword::Placing])?;
        let replacement = self.expression()?;
        self.stream.expect_keyword(&[Keyword::From])?;
        let start = self.expression()?;
        let mut arguments = vec![source, replacement, start];
        if self.stream.consume_keyword(Keyword::For) {
            arguments.push(self.expression()?);
        }
        self.stream.expect_special_char(')')?;
        self.make_function("overlay", arguments)
    }

    fn trim_function(&mut self) -> Result<NodeId> {
        self.stream.skip(2);
        let name = if self.stream.consume_keyword(Keyword::Leading) {
            "ltrim"
        } else if self.stream.consume_keyword(Keyword::Trailing) {
            "rtrim"
        } else {
            self.stream.consume_keyword(Keyword::Both);
            "btrim"
        };
        let arguments = if self.stream.consume_keyword(Keyword::From) {
            vec![self.expression()?]
        } else {
            let first = self.expression()?;
            if self.stream.consume_keyword(Keyword::From) {
                // TRIM(chars FROM source) puts the source first
                let source = self.expression()?;
                vec![source, first]
            } else if self.stream.consume_special_char(',') {
                let second = self.expression()?;
                vec![first, second]
            } else {
                vec![first]
            }
        };
        self.stream.expect_special_char(')')?;
        self.make_function(name, arguments)
    }

    /// NULLIF, COALESCE, GREATEST and LEAST parse as ordinary calls.
    fn keyword_function(&mut self, kw: Keyword) -> Result<NodeId> {
        self.stream.skip(2);
        let mut arguments = Vec::new();
        if !self.stream.matches_special_char(')') {
            loop {
                arguments.push(self.expression()?);
                if !self.stream.consume_special_char(',') {
                    break;
                }
            }
        }
        self.stream.expect_special_char(')')?;
        self.make_function(kw.as_str(), arguments)
    }

    /// JSON_OBJECT with `key : value` pairs; without a colon after the
    /// first argument it degrades to the plain json_object function.
    fn json_object(&mut self) -> Result<NodeId> {
        self.stream.skip(2);
        if self.stream.consume_special_char(')') {
            return self.push(NodeData::JsonObject(JsonObjectConstructor {
                fields: Vec::new(),
                absent_on_null: None,
                unique_keys: None,
                returning: None,
            }));
        }
        let first = self.expression()?;
        if !self.stream.matches_special_char(':') {
            let mut arguments = vec![first];
            while self.stream.consume_special_char(',') {
                arguments.push(self.expression()?);
            }
            self.stream.expect_special_char(')')?;
            return self.make_function("json_object", arguments);
        }
        self.stream.next();
        let value = self.expression()?;
        let mut fields = vec![self.push(NodeData::JsonKeyValue(JsonKeyValue {
            key: first,
            value,
        }))?];
        while self.stream.consume_special_char(',') {
            let key = self.expression()?;
            self.stream.expect_special_char(':')?;
            let value = self.expression()?;
            fields.push(self.push(NodeData::JsonKeyValue(JsonKeyValue { key, value }))?);
        }
        let absent_on_null = self.opt_on_null()?;
        let unique_keys = self.opt_unique_keys()?;
        let returning = self.opt_json_returning()?;
        self.stream.expect_special_char(')')?;
        self.push(NodeData::JsonObject(JsonObjectConstructor {
            fields,
            absent_on_null,
            unique_keys,
            returning,
        }))
    }

    fn json_array(&mut self) -> Result<NodeId> {
        self.stream.skip(2);
        if self.stream.consume_special_char(')') {
            return self.push(NodeData::JsonArray(JsonArrayConstructor {
                elements: Vec::new(),
                query: None,
                absent_on_null: None,
                returning: None,
            }));
        }
        if self.select_ahead() {
            let query = self.query_expression()?;
            let returning = self.opt_json_returning()?;
            self.stream.expect_special_char(')')?;
            return self.push(NodeData::JsonArray(JsonArrayConstructor {
                elements: Vec::new(),
                query: Some(query),
                absent_on_null: None,
                returning,
            }));
        }
        let mut elements = vec![self.expression()?];
        while self.stream.consume_special_char(',') {
            elements.push(self.expression()?);
        }
        let absent_on_null = self.opt_on_null()?;
        let returning = self.opt_json_returning()?;
        self.stream.expect_special_char(')')?;
        self.push(NodeData::JsonArray(JsonArrayConstructor {
            elements,
            query: None,
            absent_on_null,
            returning,
        }))
    }

    fn opt_on_null(&mut self) -> Result<Option<bool>> {
        if self
            .stream
            .matches_keyword_sequence(&[Keyword::Absent, Keyword::On, Keyword::Null])
        {
            self.stream.skip(3);
            return Ok(Some(true));
        }
        if self
            .stream
            .matches_keyword_sequence(&[Keyword::Null, Keyword::On, Keyword::Null])
        {
            self.stream.skip(3);
            return Ok(Some(false));
        }
        Ok(None)
    }

    fn opt_unique_keys(&mut self) -> Result<Option<bool>> {
        let unique = if self
            .stream
            .matches_keyword_sequence(&[Keyword::With, Keyword::Unique])
        {
            true
        } else if self
            .stream
            .matches_keyword_sequence(&[Keyword::Without, Keyword::Unique])
        {
            false
        } else {
            return Ok(None);
        };
        self.stream.skip(2);
        self.stream.consume_keyword(Keyword::Keys);
        Ok(Some(unique))
    }

    fn opt_json_returning(&mut self) -> Result<Option<NodeId>> {
        if self.stream.consume_keyword(Keyword::Returning) {
            Ok(Some(self.type_name()?))
        } else {
            Ok(None)
        }
    }

    fn xml_exists(&mut self) -> Result<NodeId> {
        self.stream.skip(2);
        let row_expression = self.expression()?;
        self.stream.expect_keyword(&[Keyword::Passing])?;
        let document_expression = self.expression()?;
        self.stream.expect_special_char(')')?;
        self.push(NodeData::XmlExists(XmlExistsExpression {
            row_expression,
            document_expression,
        }))
    }

    fn sql_value_function(&mut self, kw: Keyword) -> Result<NodeId> {
        self.stream.next();
        let name = match kw {
            Keyword::CurrentCatalog => SqlValueFunctionName::CurrentCatalog,
            Keyword::CurrentDate => SqlValueFunctionName::CurrentDate,
            Keyword::CurrentRole => SqlValueFunctionName::CurrentRole,
            Keyword::CurrentSchema => SqlValueFunctionName::CurrentSchema,
            Keyword::CurrentTime => SqlValueFunctionName::CurrentTime,
            Keyword::CurrentTimestamp => SqlValueFunctionName::CurrentTimestamp,
            Keyword::CurrentUser => SqlValueFunctionName::CurrentUser,
            Keyword::SessionUser => SqlValueFunctionName::SessionUser,
            Keyword::Localtime => SqlValueFunctionName::LocalTime,
            Keyword::Localtimestamp => SqlValueFunctionName::LocalTimestamp,
            _ => SqlValueFunctionName::User,
        };
        let modifier = if name.allows_modifier() && self.stream.matches_special_char('(') {
            self.stream.next();
            let token = self.stream.expect(TokenType::INTEGER, None)?;
            let value = match token.value.parse::<u32>() {
                Ok(value) => value,
                Err(_) => return Err(self.stream.syntax_error("invalid precision")),
            };
            self.stream.expect_special_char(')')?;
            Some(value)
        } else {
            None
        };
        self.push(NodeData::SqlValueFunction(SqlValueFunction { name, modifier }))
    }

    /// `timestamp '2024-01-01'` style literals. Rolled back when no string
    /// follows the type name; nodes built on the dead branch stay in the
    /// arena as unreachable orphans.
    fn typed_literal(&mut self) -> Result<Option<NodeId>> {
        let mark = self.stream.mark();
        let type_name = match self.type_name() {
            Ok(node) => node,
            Err(_) => {
                self.stream.rewind(mark);
                return Ok(None);
            }
        };
        if !self.stream.matches(TokenType::STRING) {
            self.stream.rewind(mark);
            return Ok(None);
        }
        let value = self.stream.next().value;
        let argument = self.push(NodeData::Constant(Constant::string(value)))?;
        let node = self.push(NodeData::Typecast(TypecastExpression {
            argument,
            type_name,
        }))?;
        Ok(Some(node))
    }

    /// A dotted name that resolves to a column reference, a function call
    /// or a generic typed literal depending on what follows.
    fn name_expression(&mut self) -> Result<NodeId> {
        let mut parts = vec![self.name_part()?];
        let mut star = false;
        while self.stream.matches_special_char('.') {
            if self.stream.look(1).matches_special_char('*') {
                self.stream.skip(2);
                parts.push(self.push(NodeData::Star)?);
                star = true;
                break;
            }
            self.stream.next();
            parts.push(self.col_label()?);
        }
        if !star && self.stream.matches_special_char('(') {
            let name = self.push(NodeData::QualifiedName(QualifiedName { parts }))?;
            return self.function_call_suffix(name);
        }
        if !star && self.stream.matches(TokenType::STRING) {
            let name = self.push(NodeData::QualifiedName(QualifiedName { parts }))?;
            let type_name = self.push(NodeData::TypeName(TypeName::plain(name)))?;
            let value = self.stream.next().value;
            let argument = self.push(NodeData::Constant(Constant::string(value)))?;
            return self.push(NodeData::Typecast(TypecastExpression {
                argument,
                type_name,
            }));
        }
        self.push(NodeData::ColumnRef(ColumnReference { parts }))
    }

    fn name_part(&mut self) -> Result<NodeId> {
        if self.identifier_like()
            || matches!(
                self.stream.keyword().map(|kw| kw.category()),
                Some(KeywordCategory::TypeFuncName)
            )
        {
            let value = self.stream.next().value;
            return self.push(NodeData::Identifier(Identifier { value }));
        }
        Err(self.stream.syntax_error(format!(
            "expected a name, found {}",
            self.stream.current().describe()
        )))
    }

    // ---- function calls and windows ----

    fn function_call_suffix(&mut self, name: NodeId) -> Result<NodeId> {
        self.stream.expect_special_char('(')?;
        let mut star = false;
        let mut distinct = false;
        let mut variadic = false;
        let mut items = Vec::new();
        let mut order_by = None;
        if self.stream.matches_special_char('*') && self.stream.look(1).matches_special_char(')') {
            self.stream.next();
            star = true;
        } else if !self.stream.matches_special_char(')') {
            if self.stream.consume_keyword(Keyword::Distinct) {
                distinct = true;
            } else {
                self.stream.consume_keyword(Keyword::All);
            }
            loop {
                items.push(self.function_argument(&mut variadic)?);
                if !self.stream.consume_special_char(',') {
                    break;
                }
            }
            if self
                .stream
                .matches_keyword_sequence(&[Keyword::Order, Keyword::By])
            {
                self.stream.skip(2);
                order_by = Some(self.order_by_list()?);
            }
        }
        self.stream.expect_special_char(')')?;
        let arguments = self.make_list(ListKind::Expression, items)?;
        let mut within_group = false;
        if self
            .stream
            .matches_keyword_sequence(&[Keyword::Within, Keyword::Group])
        {
            self.stream.skip(2);
            if order_by.is_some() {
                return Err(self.stream.syntax_error(
                    "WITHIN GROUP cannot be combined with an aggregate ORDER BY",
                ));
            }
            self.stream.expect_special_char('(')?;
            self.stream.expect_keyword(&[Keyword::Order])?;
            self.stream.expect_keyword(&[Keyword::By])?;
            order_by = Some(self.order_by_list()?);
            self.stream.expect_special_char(')')?;
            within_group = true;
        }
        let filter = if self.stream.consume_keyword(Keyword::Filter) {
            self.stream.expect_special_char('(')?;
            self.stream.expect_keyword(&[Keyword::Where])?;
            let condition = self.expression()?;
            self.stream.expect_special_char(')')?;
            Some(condition)
        } else {
            None
        };
        let over = if self.stream.consume_keyword(Keyword::Over) {
            Some(self.over_window()?)
        } else {
            None
        };
        self.push(NodeData::FunctionCall(FunctionCall {
            name,
            arguments,
            star,
            distinct,
            variadic,
            order_by,
            within_group,
            filter,
            over,
        }))
    }

    fn function_argument(&mut self, variadic: &mut bool) -> Result<NodeId> {
        if self.stream.consume_keyword(Keyword::Variadic) {
            *variadic = true;
        }
        if self.token_identifier_like(self.stream.current())
            && (self.stream.look(1).matches(TokenType::COLON_EQUALS)
                || self.stream.look(1).matches(TokenType::EQUALS_GREATER))
        {
            let name = self.col_id()?;
            self.stream.next();
            let value = self.expression()?;
            return self.push(NodeData::NamedArgument(NamedArgument { name, value }));
        }
        self.expression()
    }

    /// After OVER: either an inline specification or a window name.
    fn over_window(&mut self) -> Result<NodeId> {
        if self.stream.matches_special_char('(') {
            return self.window_specification();
        }
        let ref_name = self.col_id()?;
        self.push(NodeData::WindowDef(WindowDefinition {
            name: None,
            ref_name: Some(ref_name),
            partition_by: None,
            order_by: None,
            frame: None,
        }))
    }

    fn window_specification(&mut self) -> Result<NodeId> {
        self.stream.expect_special_char('(')?;
        let ref_name = if self.identifier_like()
            && !matches!(
                self.stream.keyword(),
                Some(Keyword::Partition | Keyword::Range | Keyword::Rows | Keyword::Groups)
            ) {
            Some(self.col_id()?)
        } else {
            None
        };
        let partition_by = if self
            .stream
            .matches_keyword_sequence(&[Keyword::Partition, Keyword::By])
        {
            self.stream.skip(2);
            Some(self.expression_list()?)
        } else {
            None
        };
        let order_by = if self
            .stream
            .matches_keyword_sequence(&[Keyword::Order, Keyword::By])
        {
            self.stream.skip(2);
            Some(self.order_by_list()?)
        } else {
            None
        };
        let frame = if matches!(
            self.stream.keyword(),
            Some(Keyword::Range | Keyword::Rows | Keyword::Groups)
        ) {
            Some(self.window_frame()?)
        } else {
            None
        };
        self.stream.expect_special_char(')')?;
        self.push(NodeData::WindowDef(WindowDefinition {
            name: None,
            ref_name,
            partition_by,
            order_by,
            frame,
        }))
    }

    fn window_frame(&mut self) -> Result<NodeId> {
        let mode = match self.stream.next().keyword {
            Some(Keyword::Range) => WindowFrameMode::Range,
            Some(Keyword::Rows) => WindowFrameMode::Rows,
            _ => WindowFrameMode::Groups,
        };
        let (start, end) = if self.stream.consume_keyword(Keyword::Between) {
            let start = self.window_frame_bound()?;
            self.stream.expect_keyword(&[Keyword::And])?;
            let end = self.window_frame_bound()?;
            (start, Some(end))
        } else {
            (self.window_frame_bound()?, None)
        };
        if let NodeData::WindowFrameBound(bound) = self.ast.data(start) {
            if bound.direction == WindowFrameDirection::Following {
                if bound.value.is_none() {
                    return Err(self
                        .stream
                        .syntax_error("frame start cannot be UNBOUNDED FOLLOWING"));
                }
                if end.is_none() {
                    return Err(self.stream.syntax_error(
                        "frame starting from following row cannot end with current row",
                    ));
                }
            }
        }
        if let Some(end) = end {
            if let NodeData::WindowFrameBound(bound) = self.ast.data(end) {
                if bound.direction == WindowFrameDirection::Preceding && bound.value.is_none() {
                    return Err(self
                        .stream
                        .syntax_error("frame end cannot be UNBOUNDED PRECEDING"));
                }
            }
        }
        let exclusion = if self.stream.consume_keyword(Keyword::Exclude) {
            if self
                .stream
                .matches_keyword_sequence(&[Keyword::Current, Keyword::Row])
            {
                self.stream.skip(2);
                Some(WindowFrameExclusion::CurrentRow)
            } else if self.stream.consume_keyword(Keyword::Group) {
                Some(WindowFrameExclusion::Group)
            } else if self.stream.consume_keyword(Keyword::Ties) {
                Some(WindowFrameExclusion::Ties)
            } else {
                self.stream.expect_keyword(&[Keyword::No])?;
                self.stream.expect_keyword(&[Keyword::Others])?;
                Some(WindowFrameExclusion::NoOthers)
            }
        } else {
            None
        };
        self.push(NodeData::WindowFrame(WindowFrame {
            mode,
            start,
            end,
            exclusion,
        }))
    }

    fn window_frame_bound(&mut self) -> Result<NodeId> {
        if self.stream.consume_keyword(Keyword::Unbounded) {
            let kw = self
                .stream
                .expect_keyword(&[Keyword::Preceding, Keyword::Following])?;
            let direction = if kw == Keyword::Preceding {
                WindowFrameDirection::Preceding
            } else {
                WindowFrameDirection::Following
            };
            return self.push(NodeData::WindowFrameBound(WindowFrameBound {
                direction,
                value: None,
            }));
        }
        if self
            .stream
            .matches_keyword_sequence(&[Keyword::Current, Keyword::Row])
        {
            self.stream.skip(2);
            return self.push(NodeData::WindowFrameBound(WindowFrameBound {
                direction: WindowFrameDirection::CurrentRow,
                value: None,
            }));
        }
        let value = self.expression()?;
        let kw = self
            .stream
            .expect_keyword(&[Keyword::Preceding, Keyword::Following])?;
        let direction = if kw == Keyword::Preceding {
            WindowFrameDirection::Preceding
        } else {
            WindowFrameDirection::Following
        };
        self.push(NodeData::WindowFrameBound(WindowFrameBound {
            direction,
            value: Some(value),
        }))
    }
}

// ---- type names ----

impl ParseContext<'_> {
    fn type_name(&mut self) -> Result<NodeId> {
        let setof = self.stream.consume_keyword(Keyword::Setof);
        if let Some(node) = self.standard_type_name(setof)? {
            return Ok(node);
        }
        let name = self.qualified_name()?;
        let modifiers = self.opt_type_modifiers()?;
        let bounds = self.opt_array_bounds()?;
        self.push(NodeData::TypeName(TypeName {
            setof,
            name,
            modifiers,
            bounds,
        }))
    }

    /// SQL spellings of the built-in types normalize to their catalog
    /// names, the way the server grammar resolves them.
    fn standard_type_name(&mut self, setof: bool) -> Result<Option<NodeId>> {
        let Some(kw) = self.stream.keyword() else {
            return Ok(None);
        };
        let node = match kw {
            Keyword::Int | Keyword::Integer => {
                self.stream.next();
                self.simple_type(setof, "int4", None)?
            }
            Keyword::Smallint => {
                self.stream.next();
                self.simple_type(setof, "int2", None)?
            }
            Keyword::Bigint => {
                self.stream.next();
                self.simple_type(setof, "int8", None)?
            }
            Keyword::Real => {
                self.stream.next();
                self.simple_type(setof, "float4", None)?
            }
            Keyword::Float => {
                self.stream.next();
                let name = match self.opt_integer_modifier()? {
                    Some(precision) if precision <= 24 => "float4",
                    _ => "float8",
                };
                self.simple_type(setof, name, None)?
            }
            Keyword::Double => {
                if self.stream.look(1).keyword != Some(Keyword::Precision) {
                    return Ok(None);
                }
                self.stream.skip(2);
                self.simple_type(setof, "float8", None)?
            }
            Keyword::Decimal | Keyword::Dec | Keyword::Numeric => {
                self.stream.next();
                let modifiers = self.opt_type_modifiers()?;
                self.simple_type(setof, "numeric", modifiers)?
            }
            Keyword::Boolean => {
                self.stream.next();
                self.simple_type(setof, "bool", None)?
            }
            Keyword::Bit => {
                self.stream.next();
                let varying = self.stream.consume_keyword(Keyword::Varying);
                let modifiers = self.opt_type_modifiers()?;
                self.simple_type(setof, if varying { "varbit" } else { "bit" }, modifiers)?
            }
            Keyword::Character | Keyword::Char => {
                self.stream.next();
                let varying = self.stream.consume_keyword(Keyword::Varying);
                let modifiers = self.opt_type_modifiers()?;
                self.simple_type(setof, if varying { "varchar" } else { "bpchar" }, modifiers)?
            }
            Keyword::Varchar => {
                self.stream.next();
                let modifiers = self.opt_type_modifiers()?;
                self.simple_type(setof, "varchar", modifiers)?
            }
            Keyword::National => {
                if !matches!(
                    self.stream.look(1).keyword,
                    Some(Keyword::Character | Keyword::Char)
                ) {
                    return Ok(None);
                }
                self.stream.skip(2);
                let varying = self.stream.consume_keyword(Keyword::Varying);
                let modifiers = self.opt_type_modifiers()?;
                self.simple_type(setof, if varying { "varchar" } else { "bpchar" }, modifiers)?
            }
            Keyword::Nchar => {
                self.stream.next();
                let varying = self.stream.consume_keyword(Keyword::Varying);
                let modifiers = self.opt_type_modifiers()?;
                self.simple_type(setof, if varying { "varchar" } else { "bpchar" }, modifiers)?
            }
            Keyword::Time => {
                self.stream.next();
                let modifiers = self.opt_type_modifiers()?;
                let with_zone = self.opt_time_zone_suffix();
                self.simple_type(setof, if with_zone { "timetz" } else { "time" }, modifiers)?
            }
            Keyword::Timestamp => {
                self.stream.next();
                let modifiers = self.opt_type_modifiers()?;
                let with_zone = self.opt_time_zone_suffix();
                self.simple_type(
                    setof,
                    if with_zone { "timestamptz" } else { "timestamp" },
                    modifiers,
                )?
            }
            Keyword::Interval => {
                self.stream.next();
                let modifiers = self.opt_type_modifiers()?;
                self.simple_type(setof, "interval", modifiers)?
            }
            _ => return Ok(None),
        };
        Ok(Some(node))
    }

    fn simple_type(
        &mut self,
        setof: bool,
        name: &str,
        modifiers: Option<NodeId>,
    ) -> Result<NodeId> {
        let part = self.push(NodeData::Identifier(Identifier {
            value: name.to_string(),
        }))?;
        let name = self.push(NodeData::QualifiedName(QualifiedName { parts: vec![part] }))?;
        let bounds = self.opt_array_bounds()?;
        self.push(NodeData::TypeName(TypeName {
            setof,
            name,
            modifiers,
            bounds,
        }))
    }

    fn opt_type_modifiers(&mut self) -> Result<Option<NodeId>> {
        if !self.stream.matches_special_char('(') {
            return Ok(None);
        }
        self.stream.next();
        let list = self.expression_list()?;
        self.stream.expect_special_char(')')?;
        Ok(Some(list))
    }

    fn opt_integer_modifier(&mut self) -> Result<Option<u32>> {
        if !self.stream.matches_special_char('(') {
            return Ok(None);
        }
        self.stream.next();
        let token = self.stream.expect(TokenType::INTEGER, None)?;
        let value = match token.value.parse::<u32>() {
            Ok(value) => value,
            Err(_) => return Err(self.stream.syntax_error("invalid type modifier")),
        };
        self.stream.expect_special_char(')')?;
        Ok(Some(value))
    }

    fn opt_time_zone_suffix(&mut self) -> bool {
        if self
            .stream
            .matches_keyword_sequence(&[Keyword::With, Keyword::Time, Keyword::Zone])
        {
            self.stream.skip(3);
            return true;
        }
        if self
            .stream
            .matches_keyword_sequence(&[Keyword::Without, Keyword::Time, Keyword::Zone])
        {
            self.stream.skip(3);
        }
        false
    }

    /// `ARRAY`, `ARRAY[n]`, or any number of `[n]` suffixes.
    fn opt_array_bounds(&mut self) -> Result<Vec<Option<u32>>> {
        let mut bounds = Vec::new();
        if self.stream.consume_keyword(Keyword::Array) {
            if self.stream.consume_special_char('[') {
                bounds.push(self.opt_bound_size()?);
                self.stream.expect_special_char(']')?;
            } else {
                bounds.push(None);
            }
            return Ok(bounds);
        }
        while self.stream.consume_special_char('[') {
            bounds.push(self.opt_bound_size()?);
            self.stream.expect_special_char(']')?;
        }
        Ok(bounds)
    }

    fn opt_bound_size(&mut self) -> Result<Option<u32>> {
        if !self.stream.matches(TokenType::INTEGER) {
            return Ok(None);
        }
        let token = self.stream.next();
        match token.value.parse::<u32>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(self.stream.syntax_error("invalid array bound")),
        }
    }
}

// ---- names, operators and lookahead ----

impl ParseContext<'_> {
    fn identifier_like(&self) -> bool {
        self.token_identifier_like(self.stream.current())
    }

    fn token_identifier_like(&self, token: &Token) -> bool {
        token.matches(TokenType::IDENTIFIER)
            || matches!(
                token.keyword.map(|kw| kw.category()),
                Some(KeywordCategory::Unreserved | KeywordCategory::ColName)
            )
    }

    /// A plain name position: identifiers plus the unreserved and
    /// column-name keyword classes.
    fn col_id(&mut self) -> Result<NodeId> {
        if !self.identifier_like() {
            return Err(self.stream.syntax_error(format!(
                "expected a name, found {}",
                self.stream.current().describe()
            )));
        }
        let value = self.stream.next().value;
        self.push(NodeData::Identifier(Identifier { value }))
    }

    /// A label position after AS or a dot, where any keyword works.
    fn col_label(&mut self) -> Result<NodeId> {
        let token = self.stream.current();
        if !(token.matches(TokenType::IDENTIFIER) || token.keyword.is_some()) {
            return Err(self.stream.syntax_error(format!(
                "expected a label, found {}",
                token.describe()
            )));
        }
        let value = self.stream.next().value;
        self.push(NodeData::Identifier(Identifier { value }))
    }

    fn identifier_list(&mut self) -> Result<NodeId> {
        let mut items = Vec::new();
        loop {
            items.push(self.col_id()?);
            if !self.stream.consume_special_char(',') {
                break;
            }
        }
        self.make_list(ListKind::Identifier, items)
    }

    fn qualified_name(&mut self) -> Result<NodeId> {
        let mut parts = vec![self.col_id()?];
        while self.stream.matches_special_char('.') {
            self.stream.next();
            parts.push(self.col_label()?);
        }
        self.push(NodeData::QualifiedName(QualifiedName { parts }))
    }

    /// Function names additionally admit the type_func_name keywords.
    fn qualified_function_name(&mut self) -> Result<NodeId> {
        if !(self.identifier_like()
            || matches!(
                self.stream.keyword().map(|kw| kw.category()),
                Some(KeywordCategory::TypeFuncName)
            ))
        {
            return Err(self.stream.syntax_error(format!(
                "expected a function name, found {}",
                self.stream.current().describe()
            )));
        }
        let value = self.stream.next().value;
        let first = self.push(NodeData::Identifier(Identifier { value }))?;
        let mut parts = vec![first];
        while self.stream.matches_special_char('.') {
            self.stream.next();
            parts.push(self.col_label()?);
        }
        self.push(NodeData::QualifiedName(QualifiedName { parts }))
    }

    fn any_operator(&mut self) -> Result<Operator> {
        if self.stream.matches_keyword(Keyword::Operator)
            && self.stream.look(1).matches_special_char('(')
        {
            return self.qualified_operator();
        }
        self.bare_operator()
    }

    /// `OPERATOR(schema.+)` explicit operator syntax.
    fn qualified_operator(&mut self) -> Result<Operator> {
        self.stream.expect_keyword(&[Keyword::Operator])?;
        self.stream.expect_special_char('(')?;
        let mut schema = Vec::new();
        while self.identifier_like() && self.stream.look(1).matches_special_char('.') {
            schema.push(self.stream.next().value);
            self.stream.next();
        }
        let mut operator = self.bare_operator()?;
        operator.schema = schema;
        self.stream.expect_special_char(')')?;
        Ok(operator)
    }

    fn bare_operator(&mut self) -> Result<Operator> {
        let token = self.stream.current();
        let ok = token.matches(TokenType::OPERATOR)
            || token.matches(TokenType::INEQUALITY)
            || (token.matches(TokenType::SPECIAL_CHAR)
                && matches!(
                    token.value.as_str(),
                    "+" | "-" | "*" | "/" | "%" | "^" | "<" | ">" | "="
                ));
        if !ok {
            return Err(self.stream.syntax_error(format!(
                "expected an operator, found {}",
                token.describe()
            )));
        }
        Ok(Operator::bare(self.stream.next().value))
    }

    /// Classifies the group at the current '(' without consuming tokens.
    /// Leading opening parentheses are skipped first so ((SELECT 1))
    /// still reads as a subquery while ((SELECT 1), 2) reads as a row.
    fn paren_class(&self) -> ParenClass {
        let mut open = 0;
        while self.stream.look(open).matches_special_char('(') {
            open += 1;
        }
        let select_like = matches!(
            self.stream.look(open).keyword,
            Some(Keyword::Select | Keyword::Values | Keyword::With)
        );
        if select_like && open == 1 {
            return ParenClass::Select;
        }
        let mut depth = open;
        let mut i = open;
        loop {
            let token = self.stream.look(i);
            if token.is_eof() {
                break;
            }
            if token.matches_special_char('(') {
                depth += 1;
            } else if token.matches_special_char(')') {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            } else if token.matches_special_char(',') && depth == 1 {
                return ParenClass::Row;
            } else if select_like && depth < open {
                // The inner subquery closed; what follows decides whether
                // the outer parentheses still belong to it.
                return match token.keyword {
                    Some(
                        Keyword::Union
                        | Keyword::Intersect
                        | Keyword::Except
                        | Keyword::Order
                        | Keyword::Limit
                        | Keyword::Offset
                        | Keyword::Fetch
                        | Keyword::For,
                    ) => ParenClass::Select,
                    _ => ParenClass::Expression,
                };
            }
            i += 1;
        }
        if select_like {
            ParenClass::Select
        } else {
            ParenClass::Expression
        }
    }

    /// True when a subquery starts here, with or without parentheses.
    fn select_ahead(&self) -> bool {
        if matches!(
            self.stream.keyword(),
            Some(Keyword::Select | Keyword::Values | Keyword::With)
        ) {
            return true;
        }
        self.stream.matches_special_char('(') && self.paren_class() == ParenClass::Select
    }

    fn make_function(&mut self, name: &str, arguments: Vec<NodeId>) -> Result<NodeId> {
        let part = self.push(NodeData::Identifier(Identifier {
            value: name.to_string(),
        }))?;
        let name = self.push(NodeData::QualifiedName(QualifiedName { parts: vec![part] }))?;
        let arguments = self.make_list(ListKind::Expression, arguments)?;
        self.push(NodeData::FunctionCall(FunctionCall {
            name,
            arguments,
            star: false,
            distinct: false,
            variadic: false,
            order_by: None,
            within_group: false,
            filter: None,
            over: None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql_builder::SqlBuilder;

    fn parse(sql: &str) -> Ast {
        Parser::default().parse_statement(sql).unwrap()
    }

    fn parse_expr(sql: &str) -> Ast {
        Parser::default().parse_expression(sql).unwrap()
    }

    fn rebuild(sql: &str) -> String {
        let ast = parse(sql);
        SqlBuilder::new().build(&ast).unwrap()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let ast = parse_expr("a + b * c");
        let root = ast.root().unwrap();
        let NodeData::Operator(add) = ast.data(root) else {
            panic!("the root SHOULD be the + operator, got {:?}", ast.data(root));
        };
        assert_eq!(add.operator.name, "+");
        let NodeData::Operator(mul) = ast.data(add.right) else {
            panic!("the right operand SHOULD be the * operator");
        };
        assert_eq!(mul.operator.name, "*");
    }

    #[test]
    fn intersect_binds_tighter_than_union() {
        let ast = parse("SELECT 1 UNION SELECT 2 INTERSECT SELECT 3");
        let root = ast.root().unwrap();
        let NodeData::SetOpSelect(union) = ast.data(root) else {
            panic!("the root SHOULD be the UNION node");
        };
        assert_eq!(union.operator, SetOperator::Union);
        let NodeData::SetOpSelect(intersect) = ast.data(union.right) else {
            panic!("the right side SHOULD be the INTERSECT node");
        };
        assert_eq!(intersect.operator, SetOperator::Intersect);
    }

    #[test]
    fn comparison_does_not_associate() {
        let err = Parser::default().parse_expression("a < b < c").unwrap_err();
        assert!(
            err.to_string().contains("unexpected"),
            "chained comparisons SHOULD be rejected: {err}"
        );
    }

    #[test]
    fn between_does_not_associate() {
        assert!(Parser::default()
            .parse_expression("a BETWEEN b AND c BETWEEN d AND e")
            .is_err());
    }

    #[test]
    fn not_in_parses_as_single_predicate() {
        let ast = parse_expr("a NOT IN (1, 2, 3)");
        let root = ast.root().unwrap();
        let NodeData::In(node) = ast.data(root) else {
            panic!("the root SHOULD be the IN node");
        };
        assert!(node.not);
        assert_eq!(ast.list_len(node.right).unwrap(), 3);
    }

    #[test]
    fn fetch_first_with_ties_sets_the_flag() {
        let ast = parse("SELECT a FROM t ORDER BY a FETCH FIRST 3 ROWS WITH TIES");
        let root = ast.root().unwrap();
        let NodeData::Select(select) = ast.data(root) else {
            panic!("the root SHOULD be a SELECT");
        };
        assert!(select.limit_with_ties);
        assert!(select.limit.is_some());
    }

    #[test]
    fn table_shorthand_expands_to_select_star() {
        let ast = parse("TABLE ONLY t ORDER BY 1");
        let root = ast.root().unwrap();
        let NodeData::Select(select) = ast.data(root) else {
            panic!("TABLE SHOULD expand to a SELECT");
        };
        assert!(select.order_by.is_some());
        let targets = ast.list_items(select.target_list).unwrap();
        assert_eq!(targets.len(), 1);
        let expanded = parse("SELECT * FROM ONLY t ORDER BY 1");
        assert!(ast.structural_eq(root, &expanded, expanded.root().unwrap()));
    }

    #[test]
    fn typed_literal_reads_as_a_cast() {
        let ast = parse_expr("timestamp '2024-01-01'");
        let root = ast.root().unwrap();
        assert!(
            matches!(ast.data(root), NodeData::Typecast(_)),
            "a type name before a string SHOULD become a cast"
        );
    }

    #[test]
    fn bare_type_word_is_still_a_column() {
        let ast = parse_expr("timestamp");
        let root = ast.root().unwrap();
        assert!(matches!(ast.data(root), NodeData::ColumnRef(_)));
    }

    #[test]
    fn merge_requires_a_when_clause() {
        let err = Parser::default()
            .parse_statement("MERGE INTO t USING s ON t.id = s.id")
            .unwrap_err();
        assert!(err.to_string().contains("WHEN"));
    }

    #[test]
    fn merge_by_source_takes_update_and_delete_only() {
        let ast = parse(
            "MERGE INTO t USING s ON t.id = s.id \
             WHEN NOT MATCHED BY SOURCE THEN DELETE \
             WHEN NOT MATCHED THEN INSERT VALUES (s.id)",
        );
        let root = ast.root().unwrap();
        let NodeData::Merge(merge) = ast.data(root) else {
            panic!("the root SHOULD be a MERGE");
        };
        assert_eq!(merge.when_clauses.len(), 2);
        let NodeData::MergeWhen(when) = ast.data(merge.when_clauses[0]) else {
            panic!("expected a WHEN clause node");
        };
        assert_eq!(when.matched, MergeMatchKind::NotMatchedBySource);

        assert!(Parser::default()
            .parse_statement(
                "MERGE INTO t USING s ON t.id = s.id \
                 WHEN NOT MATCHED BY SOURCE THEN INSERT VALUES (1)"
            )
            .is_err());
    }

    #[test]
    fn parenthesized_subquery_keeps_outer_clauses() {
        let ast = parse("(SELECT a FROM t) UNION (SELECT b FROM u) ORDER BY 1");
        let root = ast.root().unwrap();
        let NodeData::SetOpSelect(union) = ast.data(root) else {
            panic!("the root SHOULD be the UNION node");
        };
        assert!(union.order_by.is_some());
    }

    #[test]
    fn duplicate_order_by_is_rejected() {
        assert!(Parser::default()
            .parse_statement("SELECT 1 ORDER BY 1 ORDER BY 2")
            .is_err());
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = Parser::default().parse_expression("1 + 2 2").unwrap_err();
        assert!(err.to_string().contains("unexpected"));
    }

    #[test]
    fn statement_list_splits_on_semicolons() {
        let ast = Parser::default()
            .parse_statement_list("SELECT 1; SELECT 2;")
            .unwrap();
        let root = ast.root().unwrap();
        assert_eq!(ast.list_len(root).unwrap(), 2);
    }

    #[test]
    fn round_trip_is_structurally_stable() {
        let statements = [
            "SELECT DISTINCT ON (a) a, b AS label FROM t WHERE x = 1 ORDER BY a NULLS LAST",
            "SELECT count(*) FILTER (WHERE ok) OVER (PARTITION BY g ORDER BY ts) FROM events",
            "WITH RECURSIVE r AS (SELECT 1 UNION ALL SELECT n + 1 FROM r) SELECT * FROM r LIMIT 10",
            "INSERT INTO t (a, b) VALUES (1, DEFAULT) ON CONFLICT (a) DO UPDATE SET b = excluded.b",
            "UPDATE t SET (a, b) = (SELECT 1, 2) WHERE id = $1 RETURNING *",
            "DELETE FROM t USING u WHERE t.id = u.id",
            "SELECT a FROM t LEFT JOIN u ON t.id = u.id FOR UPDATE OF t SKIP LOCKED",
            "SELECT CASE WHEN a > 0 THEN 'pos' ELSE 'neg' END FROM t",
            "SELECT x'1f', b'01', e'a', n'x', 1.5e2, ARRAY[1, 2, 3]",
            "SELECT (a + b) * c, -d, arr[1], arr[2:3], row.f.*",
        ];
        let parser = Parser::default();
        for sql in statements {
            let first = parser.parse_statement(sql).unwrap();
            let rendered = SqlBuilder::new().build(&first).unwrap();
            let second = parser
                .parse_statement(&rendered)
                .unwrap_or_else(|err| panic!("{rendered:?} SHOULD parse again: {err}"));
            assert!(
                first.structural_eq(
                    first.root().unwrap(),
                    &second,
                    second.root().unwrap()
                ),
                "{sql:?} SHOULD survive a round trip, got {rendered:?}"
            );
        }
    }

    #[test]
    fn minimal_parentheses_in_output() {
        assert_eq!(rebuild("SELECT (a + b) * c"), "SELECT (a + b) * c");
        assert_eq!(rebuild("SELECT a + (b * c)"), "SELECT a + b * c");
        assert_eq!(rebuild("SELECT (((1)))"), "SELECT 1");
        assert_eq!(
            rebuild("SELECT NOT (a AND b) OR c"),
            "SELECT NOT (a AND b) OR c"
        );
    }

    #[test]
    fn position_arguments_are_swapped() {
        let ast = parse_expr("position('x' IN name)");
        let root = ast.root().unwrap();
        let NodeData::FunctionCall(call) = ast.data(root) else {
            panic!("POSITION SHOULD normalize to a function call");
        };
        let items = ast.list_items(call.arguments).unwrap();
        assert_eq!(items.len(), 2);
        assert!(
            matches!(ast.data(items[0]), NodeData::ColumnRef(_)),
            "the haystack SHOULD come first"
        );
    }

    #[test]
    fn fragment_entry_points_cover_partial_grammar() {
        let parser = Parser::default();
        assert!(parser
            .parse_fragment(FragmentKind::TypeName, "numeric(10, 2)[]")
            .is_ok());
        assert!(parser
            .parse_fragment(FragmentKind::FromElement, "t JOIN u USING (id)")
            .is_ok());
        assert!(parser
            .parse_fragment(FragmentKind::OrderByList, "a DESC, b NULLS FIRST")
            .is_ok());
        assert!(parser
            .parse_fragment(FragmentKind::WindowDefinition, "(PARTITION BY a)")
            .is_ok());
        assert!(parser
            .parse_fragment(FragmentKind::TargetList, "FROM t")
            .is_err());
    }

    #[test]
    fn named_parameters_keep_their_names() {
        let ast = parse_expr(":start + :finish");
        let root = ast.root().unwrap();
        let NodeData::Operator(add) = ast.data(root) else {
            panic!("the root SHOULD be the + operator");
        };
        let left = add.left.unwrap();
        let NodeData::NamedParam(param) = ast.data(left) else {
            panic!("the left operand SHOULD be a named parameter");
        };
        assert_eq!(param.name, "start");
    }
}
