//! Arena-backed binary sum tree
//!
//! Leaves carry an element and its weight; every internal node carries the sum
//! of the weights below it and how many leaves it covers. Nodes live in a
//! dense `Vec` and refer to each other by index. Freed slots are filled by
//! moving the last node into them, so callers holding leaf indices are told
//! about every move through a callback.

/// Index of a node in the arena
pub(super) type NodeId = usize;

#[derive(Debug, Clone)]
pub(super) enum NodeKind<E> {
    Leaf(E),
    Internal { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone)]
pub(super) struct Node<E> {
    pub weight: f32,
    pub leaves: usize,
    pub parent: Option<NodeId>,
    pub kind: NodeKind<E>,
}

#[derive(Debug, Clone)]
pub(super) struct SumTree<E> {
    nodes: Vec<Node<E>>,
    root: Option<NodeId>,
}

impl<E> SumTree<E> {
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node<E> {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn total_weight(&self) -> f32 {
        self.root.map_or(0.0, |root| self.nodes[root].weight)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Element stored at a leaf
    pub fn element(&self, id: NodeId) -> Option<&E> {
        match &self.nodes.get(id)?.kind {
            NodeKind::Leaf(element) => Some(element),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Insert a leaf under whichever subtree has fewer leaves
    ///
    /// The leaf found at the bottom of that walk is paired with the new leaf
    /// under a fresh internal node. Returns the new leaf's id.
    pub fn insert(&mut self, element: E, weight: f32) -> NodeId {
        let leaf = self.push(Node {
            weight,
            leaves: 1,
            parent: None,
            kind: NodeKind::Leaf(element),
        });

        let Some(mut target) = self.root else {
            self.root = Some(leaf);
            return leaf;
        };

        while let NodeKind::Internal { left, right } = self.nodes[target].kind {
            target = if self.nodes[left].leaves <= self.nodes[right].leaves {
                left
            } else {
                right
            };
        }

        let grandparent = self.nodes[target].parent;
        let parent = self.push(Node {
            weight: self.nodes[target].weight + weight,
            leaves: 2,
            parent: grandparent,
            kind: NodeKind::Internal {
                left: target,
                right: leaf,
            },
        });

        match grandparent {
            Some(grandparent) => self.replace_child(grandparent, target, parent),
            None => self.root = Some(parent),
        }
        self.nodes[target].parent = Some(parent);
        self.nodes[leaf].parent = Some(parent);

        self.refresh(grandparent);
        leaf
    }

    /// Remove a leaf, splicing its sibling into the parent's place
    ///
    /// `on_move` is called for every surviving leaf whose id changed.
    /// Returns `None` if `leaf` is not a leaf.
    pub fn remove_leaf(
        &mut self,
        leaf: NodeId,
        mut on_move: impl FnMut(&E, NodeId),
    ) -> Option<E> {
        if !matches!(self.nodes.get(leaf)?.kind, NodeKind::Leaf(_)) {
            return None;
        }

        let removed = match self.nodes[leaf].parent {
            None => {
                self.root = None;
                self.free(leaf, &mut on_move)
            },
            Some(parent) => {
                let NodeKind::Internal { left, right } = self.nodes[parent].kind else {
                    return None;
                };
                let sibling = if left == leaf { right } else { left };
                let grandparent = self.nodes[parent].parent;

                self.nodes[sibling].parent = grandparent;
                match grandparent {
                    Some(grandparent) => self.replace_child(grandparent, parent, sibling),
                    None => self.root = Some(sibling),
                }
                // Before freeing, while ids are still stable
                self.refresh(grandparent);

                // Free the higher index first so the lower one stays valid
                if leaf > parent {
                    let removed = self.free(leaf, &mut on_move);
                    self.free(parent, &mut on_move);
                    removed
                } else {
                    self.free(parent, &mut on_move);
                    self.free(leaf, &mut on_move)
                }
            },
        };

        match removed.kind {
            NodeKind::Leaf(element) => Some(element),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Leaf selected by a value in `[0, total_weight)`
    ///
    /// Walks left while `value` is below the left subtree's weight, otherwise
    /// subtracts that weight and walks right.
    pub fn find(&self, mut value: f32) -> Option<NodeId> {
        let mut id = self.root?;

        while let NodeKind::Internal { left, right } = self.nodes[id].kind {
            let left_weight = self.nodes[left].weight;
            if value < left_weight {
                id = left;
            } else {
                value -= left_weight;
                id = right;
            }
        }

        Some(id)
    }

    /// Longest root-to-leaf path, counted in edges
    pub fn depth(&self) -> usize {
        fn walk<E>(tree: &SumTree<E>, id: NodeId) -> usize {
            match tree.nodes[id].kind {
                NodeKind::Leaf(_) => 0,
                NodeKind::Internal { left, right } => 1 + walk(tree, left).max(walk(tree, right)),
            }
        }
        self.root.map_or(0, |root| walk(self, root))
    }

    fn push(&mut self, node: Node<E>) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Recompute sums and leaf counts from `cursor` up to the root
    ///
    /// Sums are rebuilt from the children, never adjusted by a delta.
    fn refresh(&mut self, mut cursor: Option<NodeId>) {
        while let Some(id) = cursor {
            if let NodeKind::Internal { left, right } = self.nodes[id].kind {
                let weight = self.nodes[left].weight + self.nodes[right].weight;
                let leaves = self.nodes[left].leaves + self.nodes[right].leaves;
                let node = &mut self.nodes[id];
                node.weight = weight;
                node.leaves = leaves;
            }
            cursor = self.nodes[id].parent;
        }
    }

    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if let NodeKind::Internal { left, right } = &mut self.nodes[parent].kind {
            if *left == old {
                *left = new;
            } else if *right == old {
                *right = new;
            }
        }
    }

    /// Drop a detached node, moving the last node into its slot
    fn free(&mut self, id: NodeId, on_move: &mut impl FnMut(&E, NodeId)) -> Node<E> {
        let removed = self.nodes.swap_remove(id);
        if id < self.nodes.len() {
            let from = self.nodes.len();
            self.relink(from, id, on_move);
        }
        removed
    }

    /// Point everything that referred to `from` at `to`
    fn relink(&mut self, from: NodeId, to: NodeId, on_move: &mut impl FnMut(&E, NodeId)) {
        match self.nodes[to].parent {
            Some(parent) => self.replace_child(parent, from, to),
            None => {
                if self.root == Some(from) {
                    self.root = Some(to);
                }
            },
        }

        if let NodeKind::Internal { left, right } = self.nodes[to].kind {
            self.nodes[left].parent = Some(to);
            self.nodes[right].parent = Some(to);
        } else if let NodeKind::Leaf(element) = &self.nodes[to].kind {
            on_move(element, to);
        }
    }
}
