//! # Syntax Tree Arena
//!
//! Nodes live in a flat arena indexed by [`NodeId`]; each slot stores the
//! node payload plus a parent back-reference. The arena enforces single
//! ownership:
//!
//! - a node has at most one parent, and attaching a node that already has
//!   one is a [`StructureError`](crate::error::Error::Structure)
//! - attaching a node underneath its own descendant is rejected (no
//!   cycles), as is attaching a node to itself
//! - replacing or removing children goes through the arena so parent
//!   links never go stale
//! - a failed structural operation leaves the tree exactly as it was
//!
//! All child links are enumerated by the [`child_slots!`](node) macro, so
//! replacement, removal, child collection and subtree cloning are generic
//! over node kinds.

pub mod expr;
pub mod node;
pub mod range;
pub mod stmt;

use std::fmt;

use eyre::Result;
use smallvec::SmallVec;

use crate::error::Error;
use crate::parser::{FragmentKind, Parser, ParserOptions};

pub use node::{Identifier, List, ListKind, NodeData, QualifiedName, TypeName};

pub(crate) use node::child_slots;

/// Handle into an [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> NodeId {
        NodeId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SlotEntry {
    parent: Option<NodeId>,
    data: NodeData,
}

/// Arena holding one parsed tree (or several fragments).
#[derive(Debug, Clone, Default)]
pub struct Ast {
    slots: Vec<SlotEntry>,
    root: Option<NodeId>,
    options: Option<ParserOptions>,
}

impl Ast {
    pub fn new() -> Ast {
        Ast::default()
    }

    /// Arena that remembers the parser options used to build it, enabling
    /// [`Ast::parse_fragment`].
    pub fn with_options(options: ParserOptions) -> Ast {
        Ast {
            slots: Vec::new(),
            root: None,
            options: Some(options),
        }
    }

    pub fn options(&self) -> Option<&ParserOptions> {
        self.options.as_ref()
    }

    pub fn set_options(&mut self, options: ParserOptions) {
        self.options = Some(options);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Root node, set by the parser entry points.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, id: NodeId) {
        debug_assert!(id.index() < self.slots.len());
        self.root = Some(id);
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.slots[id.index()].data
    }

    /// Mutable payload access for scalar fields. Child slots must be
    /// changed through [`Ast::replace_child`] and friends, or parent
    /// links go stale.
    pub fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.slots[id.index()].data
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> SmallVec<[NodeId; 8]> {
        collect_children(self.data(id))
    }

    /// Adds a node, linking its children. All listed children must exist
    /// in this arena, be distinct, and be unowned; on error nothing is
    /// linked.
    pub fn push(&mut self, data: NodeData) -> Result<NodeId> {
        let children = collect_children(&data);
        for (i, &child) in children.iter().enumerate() {
            self.check_exists(child)?;
            if self.slots[child.index()].parent.is_some() {
                return Err(self.already_owned(child));
            }
            if children[..i].contains(&child) {
                return Err(Error::structure(format!(
                    "node {child} listed as a child more than once"
                ))
                .into());
            }
        }
        let id = NodeId::new(self.slots.len());
        self.slots.push(SlotEntry { parent: None, data });
        for &child in &children {
            self.slots[child.index()].parent = Some(id);
        }
        Ok(id)
    }

    /// Replaces `old` with `new` in whichever slot of `parent` holds it.
    /// `old` becomes unowned, `new` becomes owned by `parent`.
    pub fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) -> Result<()> {
        self.check_exists(parent)?;
        self.check_exists(old)?;
        self.check_exists(new)?;
        if old == new {
            return Ok(());
        }
        if self.parent(old) != Some(parent) {
            return Err(self.not_a_child(parent, old));
        }
        self.check_attachable(parent, new)?;

        let mut replaced = false;
        let data = &mut self.slots[parent.index()].data;
        macro_rules! cb {
            (req, $e:expr) => {
                if $e == old {
                    $e = new;
                    replaced = true;
                }
            };
            (opt, $e:expr) => {
                if $e == Some(old) {
                    $e = Some(new);
                    replaced = true;
                }
            };
            (vec, $e:expr) => {
                if let Some(i) = $e.iter().position(|&x| x == old) {
                    $e[i] = new;
                    replaced = true;
                }
            };
        }
        child_slots!(data, cb);
        debug_assert!(replaced);
        self.slots[old.index()].parent = None;
        self.slots[new.index()].parent = Some(parent);
        Ok(())
    }

    /// Clears an optional slot or removes a list element. Removing a
    /// required child is a structure error.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_exists(parent)?;
        self.check_exists(child)?;
        if self.parent(child) != Some(parent) {
            return Err(self.not_a_child(parent, child));
        }
        let mut removed = false;
        let mut required = false;
        let data = &mut self.slots[parent.index()].data;
        macro_rules! cb {
            (req, $e:expr) => {
                if $e == child {
                    required = true;
                }
            };
            (opt, $e:expr) => {
                if $e == Some(child) {
                    $e = None;
                    removed = true;
                }
            };
            (vec, $e:expr) => {
                if let Some(i) = $e.iter().position(|&x| x == child) {
                    $e.remove(i);
                    removed = true;
                }
            };
        }
        child_slots!(data, cb);
        if required {
            let kind = self.data(parent).kind_name();
            return Err(Error::structure(format!(
                "cannot remove a required child of {kind} node {parent}"
            ))
            .into());
        }
        debug_assert!(removed);
        self.slots[child.index()].parent = None;
        Ok(())
    }

    /// Detaches a node from its parent, if any.
    pub fn detach(&mut self, id: NodeId) -> Result<()> {
        match self.parent(id) {
            Some(parent) => self.remove_child(parent, id),
            None => Ok(()),
        }
    }

    /// Appends `child` to the node's list-valued slot (logical chains,
    /// row elements, CTE lists and the like).
    pub fn push_element(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_exists(parent)?;
        self.check_exists(child)?;
        // Refuse a slotless parent before looking at the child at all, so
        // the caller learns about the wrong parent kind first.
        let mut has_list_slot = false;
        macro_rules! probe {
            (req, $e:expr) => {
                let _ = &$e;
            };
            (opt, $e:expr) => {
                let _ = &$e;
            };
            (vec, $e:expr) => {
                let _ = &$e;
                has_list_slot = true;
            };
        }
        child_slots!(&self.slots[parent.index()].data, probe);
        if !has_list_slot {
            let kind = self.data(parent).kind_name();
            return Err(Error::structure(format!(
                "{kind} node {parent} has no list-valued slot to append to"
            ))
            .into());
        }
        self.check_attachable(parent, child)?;
        let mut pushed = false;
        let data = &mut self.slots[parent.index()].data;
        macro_rules! cb {
            (req, $e:expr) => {
                let _ = &$e;
            };
            (opt, $e:expr) => {
                let _ = &$e;
            };
            (vec, $e:expr) => {
                if !pushed {
                    $e.push(child);
                    pushed = true;
                }
            };
        }
        child_slots!(data, cb);
        self.slots[child.index()].parent = Some(parent);
        Ok(())
    }

    fn expect_list(&self, id: NodeId) -> Result<&List> {
        match self.data(id) {
            NodeData::List(list) => Ok(list),
            other => Err(Error::structure(format!(
                "node {id} is a {}, not a list",
                other.kind_name()
            ))
            .into()),
        }
    }

    pub fn list_kind(&self, id: NodeId) -> Result<ListKind> {
        Ok(self.expect_list(id)?.kind)
    }

    pub fn list_items(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.expect_list(id)?.items)
    }

    pub fn list_len(&self, id: NodeId) -> Result<usize> {
        Ok(self.expect_list(id)?.items.len())
    }

    pub fn list_push(&mut self, list: NodeId, item: NodeId) -> Result<()> {
        self.expect_list(list)?;
        self.check_exists(item)?;
        self.check_attachable(list, item)?;
        if let NodeData::List(l) = &mut self.slots[list.index()].data {
            l.items.push(item);
        }
        self.slots[item.index()].parent = Some(list);
        Ok(())
    }

    pub fn list_insert(&mut self, list: NodeId, index: usize, item: NodeId) -> Result<()> {
        let len = self.expect_list(list)?.items.len();
        if index > len {
            return Err(Error::structure(format!(
                "index {index} out of bounds for list {list} of length {len}"
            ))
            .into());
        }
        self.check_exists(item)?;
        self.check_attachable(list, item)?;
        if let NodeData::List(l) = &mut self.slots[list.index()].data {
            l.items.insert(index, item);
        }
        self.slots[item.index()].parent = Some(list);
        Ok(())
    }

    /// Replaces the list element at `index` and returns the old element,
    /// which is left unowned.
    pub fn list_replace(&mut self, list: NodeId, index: usize, item: NodeId) -> Result<NodeId> {
        let len = self.expect_list(list)?.items.len();
        if index >= len {
            return Err(Error::structure(format!(
                "index {index} out of bounds for list {list} of length {len}"
            ))
            .into());
        }
        self.check_exists(item)?;
        if self.expect_list(list)?.items[index] == item {
            return Ok(item);
        }
        self.check_attachable(list, item)?;
        let old = match &mut self.slots[list.index()].data {
            NodeData::List(l) => std::mem::replace(&mut l.items[index], item),
            _ => unreachable!(),
        };
        self.slots[old.index()].parent = None;
        self.slots[item.index()].parent = Some(list);
        Ok(old)
    }

    /// Removes and returns the list element at `index`, leaving it
    /// unowned.
    pub fn list_remove(&mut self, list: NodeId, index: usize) -> Result<NodeId> {
        let len = self.expect_list(list)?.items.len();
        if index >= len {
            return Err(Error::structure(format!(
                "index {index} out of bounds for list {list} of length {len}"
            ))
            .into());
        }
        let removed = match &mut self.slots[list.index()].data {
            NodeData::List(l) => l.items.remove(index),
            _ => unreachable!(),
        };
        self.slots[removed.index()].parent = None;
        Ok(removed)
    }

    /// Moves every element of `src` to the end of `dst`. Both lists must
    /// have the same kind; `src` is left empty.
    pub fn list_merge(&mut self, dst: NodeId, src: NodeId) -> Result<()> {
        let dst_kind = self.list_kind(dst)?;
        let src_kind = self.list_kind(src)?;
        if dst == src {
            return Ok(());
        }
        if dst_kind != src_kind {
            return Err(Error::structure(format!(
                "cannot merge a {src_kind:?} list into a {dst_kind:?} list"
            ))
            .into());
        }
        let moved = match &mut self.slots[src.index()].data {
            NodeData::List(l) => std::mem::take(&mut l.items),
            _ => unreachable!(),
        };
        for &item in &moved {
            self.slots[item.index()].parent = Some(dst);
        }
        match &mut self.slots[dst.index()].data {
            NodeData::List(l) => l.items.extend(moved),
            _ => unreachable!(),
        }
        Ok(())
    }

    /// Copies the subtree under `id` into a fresh arena with canonical
    /// depth-first numbering. The copy keeps this arena's options.
    pub fn clone_subtree(&self, id: NodeId) -> Result<Ast> {
        self.check_exists(id)?;
        let mut dst = Ast {
            slots: Vec::new(),
            root: None,
            options: self.options.clone(),
        };
        let root = clone_rec(self, id, &mut dst)?;
        dst.root = Some(root);
        Ok(dst)
    }

    /// Structural equality of two subtrees, possibly from different
    /// arenas: both are canonicalized by [`Ast::clone_subtree`] and
    /// compared slot by slot.
    pub fn structural_eq(&self, id: NodeId, other: &Ast, other_id: NodeId) -> bool {
        match (self.clone_subtree(id), other.clone_subtree(other_id)) {
            (Ok(a), Ok(b)) => a.slots == b.slots,
            _ => false,
        }
    }

    /// Parses `sql` as a fragment of the given kind into this arena,
    /// using the options the arena was created with. An arena that
    /// carries no options refuses, since the fragment could otherwise be
    /// lexed under different rules than the surrounding tree.
    pub fn parse_fragment(&mut self, kind: FragmentKind, sql: &str) -> Result<NodeId> {
        let options = self.options.clone().ok_or_else(|| {
            Error::config(
                "cannot parse a fragment: this syntax tree carries no parser options",
            )
        })?;
        Parser::new(options).parse_fragment_into(self, kind, sql)
    }

    /// Parser-internal: records `parent` as the owner of `child` for a
    /// clause parsed after the parent node was already pushed. The caller
    /// updates the parent's payload slot itself via [`Ast::data_mut`].
    pub(crate) fn link_clause(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_exists(parent)?;
        self.check_exists(child)?;
        self.check_attachable(parent, child)?;
        self.slots[child.index()].parent = Some(parent);
        Ok(())
    }

    fn check_exists(&self, id: NodeId) -> Result<()> {
        if id.index() >= self.slots.len() {
            return Err(Error::structure(format!("node {id} does not exist in this tree")).into());
        }
        Ok(())
    }

    /// `child` must be unowned and must not sit on `parent`'s ancestor
    /// path (attaching it there would close a cycle).
    fn check_attachable(&self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.slots[child.index()].parent.is_some() {
            return Err(self.already_owned(child));
        }
        if child == parent {
            return Err(Error::structure(format!(
                "cannot attach node {child} to itself"
            ))
            .into());
        }
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(Error::structure(format!(
                    "cannot attach node {child} under its own descendant {parent}"
                ))
                .into());
            }
            cursor = self.parent(node);
        }
        Ok(())
    }

    fn already_owned(&self, child: NodeId) -> eyre::Report {
        let kind = self.data(child).kind_name();
        Error::structure(format!(
            "{kind} node {child} already has a parent; detach it first"
        ))
        .into()
    }

    fn not_a_child(&self, parent: NodeId, child: NodeId) -> eyre::Report {
        Error::structure(format!("node {child} is not a child of node {parent}")).into()
    }
}

pub(crate) fn collect_children(data: &NodeData) -> SmallVec<[NodeId; 8]> {
    let mut out: SmallVec<[NodeId; 8]> = SmallVec::new();
    macro_rules! cb {
        (req, $e:expr) => {
            out.push($e)
        };
        (opt, $e:expr) => {
            if let Some(id) = $e {
                out.push(id)
            }
        };
        (vec, $e:expr) => {
            out.extend($e.iter().copied())
        };
    }
    child_slots!(data, cb);
    out
}

fn clone_rec(src: &Ast, id: NodeId, dst: &mut Ast) -> Result<NodeId> {
    let mut data = src.data(id).clone();
    macro_rules! cb {
        (req, $e:expr) => {
            $e = clone_rec(src, $e, dst)?;
        };
        (opt, $e:expr) => {
            if let Some(old) = $e {
                $e = Some(clone_rec(src, old, dst)?);
            }
        };
        (vec, $e:expr) => {
            for item in $e.iter_mut() {
                *item = clone_rec(src, *item, dst)?;
            }
        };
    }
    child_slots!(&mut data, cb);
    dst.push(data)
}

#[cfg(test)]
mod tests {
    use super::expr::*;
    use super::*;
    use crate::error::Error;

    fn structure_error(err: eyre::Report) -> String {
        match err.downcast_ref::<Error>() {
            Some(Error::Structure(msg)) => msg.clone(),
            other => panic!("expected structure error, got {other:?}"),
        }
    }

    fn int(ast: &mut Ast, value: &str) -> NodeId {
        ast.push(NodeData::Constant(Constant::integer(value))).unwrap()
    }

    #[test]
    fn push_links_children_and_sets_parents() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let b = int(&mut ast, "2");
        let op = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("+"),
                left: Some(a),
                right: b,
            }))
            .unwrap();
        assert_eq!(ast.parent(a), Some(op));
        assert_eq!(ast.parent(b), Some(op));
        assert_eq!(ast.parent(op), None);
        assert_eq!(ast.children(op).as_slice(), &[a, b]);
    }

    #[test]
    fn attaching_an_owned_node_fails_and_changes_nothing() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let not = ast
            .push(NodeData::Not(NotExpression { argument: a }))
            .unwrap();
        // `a` is owned by `not`; a second parent must be refused
        let err = ast
            .push(NodeData::Not(NotExpression { argument: a }))
            .unwrap_err();
        assert!(structure_error(err).contains("already has a parent"));
        assert_eq!(ast.parent(a), Some(not), "ownership unchanged after failure");
        // the failed push still created no links: the rejected node data
        // never entered the arena
        assert_eq!(ast.len(), 2);
    }

    #[test]
    fn duplicate_child_in_one_node_is_rejected() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let err = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("+"),
                left: Some(a),
                right: a,
            }))
            .unwrap_err();
        assert!(structure_error(err).contains("more than once"));
        assert_eq!(ast.parent(a), None);
    }

    #[test]
    fn replace_child_rewires_both_parents() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let not = ast
            .push(NodeData::Not(NotExpression { argument: a }))
            .unwrap();
        let b = int(&mut ast, "2");
        ast.replace_child(not, a, b).unwrap();
        assert_eq!(ast.parent(a), None);
        assert_eq!(ast.parent(b), Some(not));
        match ast.data(not) {
            NodeData::Not(n) => assert_eq!(n.argument, b),
            _ => unreachable!(),
        }
    }

    #[test]
    fn replace_with_ancestor_is_a_cycle_error() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let inner = ast
            .push(NodeData::Not(NotExpression { argument: a }))
            .unwrap();
        let outer = ast
            .push(NodeData::Not(NotExpression { argument: inner }))
            .unwrap();
        // outer is an ancestor of inner's child slot: outer owns inner
        ast.detach(outer).unwrap(); // outer itself is a root, no-op
        let err = ast.replace_child(inner, a, outer).unwrap_err();
        assert!(structure_error(err).contains("descendant"));
        // nothing changed
        assert_eq!(ast.parent(a), Some(inner));
        assert_eq!(ast.parent(outer), None);
    }

    #[test]
    fn removing_a_required_child_is_refused() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let not = ast
            .push(NodeData::Not(NotExpression { argument: a }))
            .unwrap();
        let err = ast.remove_child(not, a).unwrap_err();
        assert!(structure_error(err).contains("required child"));
        assert_eq!(ast.parent(a), Some(not));
    }

    #[test]
    fn removing_an_optional_child_clears_the_slot() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let b = int(&mut ast, "2");
        let op = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("-"),
                left: Some(a),
                right: b,
            }))
            .unwrap();
        ast.remove_child(op, a).unwrap();
        assert_eq!(ast.parent(a), None);
        match ast.data(op) {
            NodeData::Operator(o) => assert_eq!(o.left, None),
            _ => unreachable!(),
        }
    }

    #[test]
    fn list_operations_maintain_ownership() {
        let mut ast = Ast::new();
        let list = ast
            .push(NodeData::List(List {
                kind: ListKind::Expression,
                items: Vec::new(),
            }))
            .unwrap();
        let a = int(&mut ast, "1");
        let b = int(&mut ast, "2");
        let c = int(&mut ast, "3");
        ast.list_push(list, a).unwrap();
        ast.list_push(list, c).unwrap();
        ast.list_insert(list, 1, b).unwrap();
        assert_eq!(ast.list_items(list).unwrap(), &[a, b, c]);
        assert_eq!(ast.parent(b), Some(list));

        let removed = ast.list_remove(list, 0).unwrap();
        assert_eq!(removed, a);
        assert_eq!(ast.parent(a), None);

        let err = ast.list_push(list, b).unwrap_err();
        assert!(structure_error(err).contains("already has a parent"));
    }

    #[test]
    fn list_merge_moves_items_and_checks_kinds() {
        let mut ast = Ast::new();
        let dst = ast
            .push(NodeData::List(List {
                kind: ListKind::Expression,
                items: Vec::new(),
            }))
            .unwrap();
        let src = ast
            .push(NodeData::List(List {
                kind: ListKind::Expression,
                items: Vec::new(),
            }))
            .unwrap();
        let a = int(&mut ast, "1");
        ast.list_push(src, a).unwrap();
        ast.list_merge(dst, src).unwrap();
        assert_eq!(ast.list_items(dst).unwrap(), &[a]);
        assert!(ast.list_items(src).unwrap().is_empty());
        assert_eq!(ast.parent(a), Some(dst));

        let other = ast
            .push(NodeData::List(List {
                kind: ListKind::Target,
                items: Vec::new(),
            }))
            .unwrap();
        let err = ast.list_merge(dst, other).unwrap_err();
        assert!(structure_error(err).contains("cannot merge"));
    }

    #[test]
    fn push_element_appends_to_logical_chain() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let b = int(&mut ast, "2");
        let and = ast
            .push(NodeData::Logical(LogicalExpression {
                operator: LogicalOperator::And,
                items: vec![a, b],
            }))
            .unwrap();
        let c = int(&mut ast, "3");
        ast.push_element(and, c).unwrap();
        assert_eq!(ast.children(and).as_slice(), &[a, b, c]);
        assert_eq!(ast.parent(c), Some(and));

        let err = ast.push_element(a, and).unwrap_err();
        assert!(structure_error(err).contains("no list-valued slot"));
    }

    #[test]
    fn clone_subtree_is_structurally_equal_but_independent() {
        let mut ast = Ast::new();
        let a = int(&mut ast, "1");
        let b = int(&mut ast, "2");
        let op = ast
            .push(NodeData::Operator(OperatorExpression {
                operator: Operator::bare("*"),
                left: Some(a),
                right: b,
            }))
            .unwrap();
        let copy = ast.clone_subtree(op).unwrap();
        let copy_root = copy.root().unwrap();
        assert!(ast.structural_eq(op, &copy, copy_root));
        assert_eq!(copy.len(), 3);

        // diverge the copy: equality must break
        let mut copy = copy;
        if let NodeData::Constant(c) = copy.data_mut(NodeId::new(0)) {
            c.value = "42".into();
        }
        assert!(!ast.structural_eq(op, &copy, copy_root));
    }

    #[test]
    fn fragment_parsing_requires_options() {
        let mut ast = Ast::new();
        let err = ast.parse_fragment(FragmentKind::Expression, "1 + 1").unwrap_err();
        match err.downcast_ref::<Error>() {
            Some(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }

        let mut ast = Ast::with_options(ParserOptions::default());
        let expr = ast.parse_fragment(FragmentKind::Expression, "1 + 1").unwrap();
        assert!(matches!(ast.data(expr), NodeData::Operator(_)));
    }
}
