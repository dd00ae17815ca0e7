//! # pg-builder - PostgreSQL SQL Parser and Builder
//!
//! pg-builder parses PostgreSQL query text into a mutable syntax tree and
//! renders trees back to canonical SQL. It is built for tools that rewrite
//! queries rather than execute them:
//!
//! - **Arena tree with strict ownership**: every node has at most one
//!   parent, so rewrites can never silently alias a subtree
//! - **Round-trip stable**: parse, build, parse again yields a
//!   structurally identical tree, with only the parentheses the
//!   precedence rules require
//! - **Named and positional parameters**: `:name` placeholders carry
//!   metadata and can be rewritten to `$n` form for the wire protocol
//!
//! ## Quick Start
//!
//! ```ignore
//! use pg_builder::{Parser, SqlBuilder};
//!
//! let parser = Parser::default();
//! let ast = parser.parse_statement("SELECT id, name FROM users WHERE id = :id")?;
//!
//! let sql = SqlBuilder::new().build(&ast).unwrap();
//! assert_eq!(sql, "SELECT id, name FROM users WHERE id = :id");
//! ```
//!
//! ## Architecture
//!
//! The pipeline is a straight line:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Lexer (eager, one pass)       │
//! ├─────────────────────────────────────┤
//! │   Parser (recursive descent, LL(k))  │
//! ├─────────────────────────────────────┤
//! │   Ast (arena, single-owner slots)    │
//! ├─────────────────────────────────────┤
//! │  TreeWalker │ SqlBuilder │ Params    │
//! └─────────────────────────────────────┘
//! ```
//!
//! The lexer tokenizes the whole input up front. The parser consumes the
//! token stream and allocates nodes into an [`ast::Ast`] arena. Anything
//! downstream is a walker: [`sql_builder::SqlBuilder`] regenerates SQL,
//! [`params::ParameterWalker`] collects placeholder metadata, and custom
//! passes implement [`walker::TreeWalker`] themselves.
//!
//! ## Module Overview
//!
//! - [`lexer`]: tokenizer for the PostgreSQL lexical syntax
//! - [`parser`]: recursive descent parser and fragment entry points
//! - [`ast`]: arena tree, node payloads, structural editing
//! - [`sql_builder`]: canonical SQL generation with minimal parentheses
//! - [`params`]: named/positional parameter analysis and rewriting
//! - [`precedence`]: the operator precedence tables both sides share

pub mod ast;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod params;
pub mod parser;
pub mod precedence;
pub mod sql_builder;
pub mod token;
pub mod walker;

pub use ast::{Ast, NodeData, NodeId};
pub use error::Error;
pub use params::{replace_named_parameters, ParameterWalker};
pub use parser::{FragmentKind, Parser, ParserOptions};
pub use sql_builder::SqlBuilder;
pub use walker::{dispatch, TreeWalker};
