//! Tree Model
//!
//! Arena-backed hierarchy the widget renders and reorders.
//! Node payloads are opaque; the widget assigns its own keys so payloads
//! never need a globally unique id.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of [`TreeModel`] generations, one per build
static GENERATION: AtomicU64 = AtomicU64::new(1);

/// Stable key of a node inside one [`TreeModel`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub(crate) usize);

/// Where a dragged node should land
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on a node (become its first child)
    Onto(NodeKey),
    /// Drop on a zone between rows (parent, index among its children)
    Between(Option<NodeKey>, usize),
}

/// One rendered row of the visible tree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Row {
    /// Generation of the model the row was taken from
    pub generation: u64,
    pub key: NodeKey,
    pub depth: usize,
    pub parent: Option<NodeKey>,
    pub index: usize,
    pub has_children: bool,
    pub collapsed: bool,
}

/// One entry of the rendered list: a node row or a drop zone
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    Node(Row),
    /// Accepts drops at `index` among the children of `parent`
    Zone {
        parent: Option<NodeKey>,
        index: usize,
        depth: usize,
    },
}

/// A validated move, not yet applied
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedMove<T> {
    pub key: NodeKey,
    pub parent: Option<NodeKey>,
    pub index: usize,
    /// Payload of the dragged node
    pub moved: T,
    /// Payload of the new parent (None = root level)
    pub target_parent: Option<T>,
}

/// Emitted after a move was applied to the model
#[derive(Clone, Debug, PartialEq)]
pub struct TreeChange<T> {
    pub moved: T,
    pub src_parent: Option<T>,
    pub target_parent: Option<T>,
    /// Children of the target parent in their new order (includes `moved`)
    pub target_children: Vec<T>,
}

#[derive(Clone, Debug, PartialEq)]
struct Slot<T> {
    data: T,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
    collapsed: bool,
}

/// Hierarchy of payloads with widget-owned keys
#[derive(Clone, Debug, PartialEq)]
pub struct TreeModel<T> {
    slots: Vec<Slot<T>>,
    roots: Vec<NodeKey>,
    /// Distinct for every built model, so rows of a reloaded tree never
    /// compare equal to rows of the previous one
    generation: u64,
}

impl<T> Default for TreeModel<T> {
    fn default() -> Self {
        Self { slots: Vec::new(), roots: Vec::new(), generation: 0 }
    }
}

impl<T: Clone> TreeModel<T> {
    /// Build from any recursive source.
    /// Nodes at `depth >= collapse_level` start collapsed.
    pub fn build<S, D, C>(sources: &[S], data: D, children: C, collapse_level: usize) -> Self
    where
        D: Fn(&S) -> T,
        C: Fn(&S) -> &[S],
    {
        fn insert<S, T, D, C>(
            model: &mut TreeModel<T>,
            source: &S,
            parent: Option<NodeKey>,
            depth: usize,
            collapse_level: usize,
            data: &D,
            children: &C,
        ) -> NodeKey
        where
            D: Fn(&S) -> T,
            C: Fn(&S) -> &[S],
        {
            let key = NodeKey(model.slots.len());
            model.slots.push(Slot {
                data: data(source),
                parent,
                children: Vec::new(),
                collapsed: depth >= collapse_level,
            });
            for child in children(source) {
                let child_key = insert(model, child, Some(key), depth + 1, collapse_level, data, children);
                model.slots[key.0].children.push(child_key);
            }
            key
        }

        let mut model = Self { generation: GENERATION.fetch_add(1, Ordering::Relaxed), ..Self::default() };
        for source in sources {
            let key = insert(&mut model, source, None, 0, collapse_level, &data, &children);
            model.roots.push(key);
        }
        model
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    pub fn get(&self, key: NodeKey) -> Option<&T> {
        self.slots.get(key.0).map(|slot| &slot.data)
    }

    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.slots.get(key.0).and_then(|slot| slot.parent)
    }

    /// Children of `parent`, or the roots when `parent` is None
    pub fn children(&self, parent: Option<NodeKey>) -> &[NodeKey] {
        match parent {
            Some(key) => self.slots.get(key.0).map(|slot| slot.children.as_slice()).unwrap_or(&[]),
            None => &self.roots,
        }
    }

    /// True when `key` is `ancestor` or lies below it
    pub fn is_within(&self, key: NodeKey, ancestor: NodeKey) -> bool {
        let mut current = Some(key);
        while let Some(k) = current {
            if k == ancestor {
                return true;
            }
            current = self.parent(k);
        }
        false
    }

    pub fn toggle_collapsed(&mut self, key: NodeKey) {
        if let Some(slot) = self.slots.get_mut(key.0) {
            slot.collapsed = !slot.collapsed;
        }
    }

    /// Rows and drop zones in display order (DFS, collapsed subtrees skipped).
    ///
    /// The list opens with the first root position. An expanded node is
    /// followed by its first-child zone, and every node's subtree is closed
    /// by the zone right after it among its siblings.
    pub fn visible_lines(&self) -> Vec<Line> {
        fn collect<T: Clone>(model: &TreeModel<T>, parent: Option<NodeKey>, depth: usize, lines: &mut Vec<Line>) {
            for (index, key) in model.children(parent).iter().enumerate() {
                let slot = &model.slots[key.0];
                let has_children = !slot.children.is_empty();
                lines.push(Line::Node(Row {
                    generation: model.generation,
                    key: *key,
                    depth,
                    parent,
                    index,
                    has_children,
                    collapsed: slot.collapsed,
                }));
                if has_children && !slot.collapsed {
                    lines.push(Line::Zone { parent: Some(*key), index: 0, depth: depth + 1 });
                    collect(model, Some(*key), depth + 1, lines);
                }
                lines.push(Line::Zone { parent, index: index + 1, depth });
            }
        }

        let mut lines = Vec::with_capacity(self.slots.len() * 2 + 1);
        lines.push(Line::Zone { parent: None, index: 0, depth: 0 });
        collect(self, None, 0, &mut lines);
        lines
    }

    /// Visible rows in display order
    pub fn visible_rows(&self) -> Vec<Row> {
        self.visible_lines()
            .into_iter()
            .filter_map(|line| match line {
                Line::Node(row) => Some(row),
                Line::Zone { .. } => None,
            })
            .collect()
    }

    /// Resolve a drop into a concrete move.
    /// Returns None for unknown keys, drops into the node's own subtree
    /// and moves that would not change anything.
    pub fn plan_move(&self, key: NodeKey, target: DropTarget) -> Option<PlannedMove<T>> {
        let moved = self.get(key)?.clone();
        let (parent, index) = match target {
            DropTarget::Onto(parent) => (Some(parent), 0),
            DropTarget::Between(parent, index) => (parent, index),
        };

        if let Some(parent) = parent {
            self.slots.get(parent.0)?;
            if self.is_within(parent, key) {
                return None;
            }
        }

        let siblings = self.children(parent);
        let mut index = index.min(siblings.len());
        let old_parent = self.parent(key);
        if old_parent == parent {
            let old_index = siblings.iter().position(|k| *k == key)?;
            if old_index < index {
                index -= 1;
            }
            if old_index == index {
                return None;
            }
        }

        Some(PlannedMove {
            key,
            parent,
            index,
            moved,
            target_parent: parent.and_then(|p| self.get(p).cloned()),
        })
    }

    /// Apply a move produced by [`plan_move`](Self::plan_move)
    pub fn apply(&mut self, plan: &PlannedMove<T>) -> TreeChange<T> {
        let old_parent = self.parent(plan.key);
        self.children_mut(old_parent).retain(|k| *k != plan.key);

        let siblings = self.children_mut(plan.parent);
        let index = plan.index.min(siblings.len());
        siblings.insert(index, plan.key);
        self.slots[plan.key.0].parent = plan.parent;
        if let Some(parent) = plan.parent {
            self.slots[parent.0].collapsed = false;
        }

        TreeChange {
            moved: plan.moved.clone(),
            src_parent: old_parent.and_then(|k| self.get(k).cloned()),
            target_parent: plan.target_parent.clone(),
            target_children: self
                .children(plan.parent)
                .iter()
                .filter_map(|k| self.get(*k).cloned())
                .collect(),
        }
    }

    /// Plan a drop, ask `confirm` with (moved, new parent) and apply it only
    /// when accepted. Invalid drops never reach `confirm`.
    pub fn try_move<F>(&mut self, key: NodeKey, target: DropTarget, confirm: F) -> Option<TreeChange<T>>
    where
        F: FnOnce(&T, Option<&T>) -> bool,
    {
        let plan = self.plan_move(key, target)?;
        if !confirm(&plan.moved, plan.target_parent.as_ref()) {
            return None;
        }
        Some(self.apply(&plan))
    }

    fn children_mut(&mut self, parent: Option<NodeKey>) -> &mut Vec<NodeKey> {
        match parent {
            Some(key) => &mut self.slots[key.0].children,
            None => &mut self.roots,
        }
    }
}
