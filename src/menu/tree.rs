//! Indexed, immutable menu tree.
//!
//! The nested declaration is flattened into an arena at construction. Key and
//! path indices are built in the same pass, so uniqueness is checked before the
//! tree is ever handed out and lookups never walk the hierarchy.

use std::collections::HashMap;

use super::node::{Icon, MenuKey, MenuNode, NodeKind};
use super::route;
use crate::error::MenuError;

/// Index of a node in the tree arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A node as stored in the tree
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub key: MenuKey,
    pub label: String,
    pub icon: Option<Icon>,
    /// Normalized path, if the node is navigable
    pub path: Option<String>,
    /// Depth level (0 = top level)
    pub depth: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl MenuEntry {
    pub fn kind(&self) -> NodeKind {
        NodeKind::classify(self.path.is_some(), !self.children.is_empty())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
    roots: Vec<NodeId>,
    by_key: HashMap<MenuKey, NodeId>,
    by_path: HashMap<String, Vec<NodeId>>,
}

impl MenuTree {
    /// Build a tree from top-level declarations.
    ///
    /// Fails on the first duplicate key (at any depth) or on a path that does
    /// not start with `/`.
    pub fn new(roots: impl IntoIterator<Item = MenuNode>) -> Result<Self, MenuError> {
        let mut tree = Self {
            entries: Vec::new(),
            roots: Vec::new(),
            by_key: HashMap::new(),
            by_path: HashMap::new(),
        };
        for node in roots {
            let id = tree.insert(node, None, 0)?;
            tree.roots.push(id);
        }
        Ok(tree)
    }

    fn insert(
        &mut self,
        node: MenuNode,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Result<NodeId, MenuError> {
        let MenuNode {
            key,
            label,
            icon,
            path,
            children,
        } = node;

        if self.by_key.contains_key(&key) {
            return Err(MenuError::DuplicateKey { key });
        }
        let path = match path {
            Some(path) if !route::is_valid_path(&path) => {
                return Err(MenuError::InvalidPath { key, path });
            }
            Some(path) => Some(route::normalize(&path)),
            None => None,
        };

        // Parent is pushed before its children so the arena is in pre-order.
        let id = NodeId(self.entries.len());
        self.by_key.insert(key.clone(), id);
        if let Some(path) = &path {
            self.by_path.entry(path.clone()).or_default().push(id);
        }
        self.entries.push(MenuEntry {
            key,
            label,
            icon,
            path,
            depth,
            parent,
            children: Vec::new(),
        });

        for child in children {
            let child_id = self.insert(child, Some(id), depth + 1)?;
            self.entries[id.0].children.push(child_id);
        }
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> &MenuEntry {
        &self.entries[id.0]
    }

    pub fn id_of(&self, key: &str) -> Option<NodeId> {
        self.by_key.get(key).copied()
    }

    pub fn find(&self, key: &str) -> Option<&MenuEntry> {
        self.id_of(key).map(|id| self.get(id))
    }

    /// Nodes whose path equals the (normalized) location, in pre-order.
    pub fn nodes_at(&self, location: &str) -> &[NodeId] {
        self.by_path
            .get(&route::normalize(location))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The chain from the top-level ancestor down to `id`, inclusive.
    pub fn lineage(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = vec![id];
        let mut current = self.get(id).parent;
        while let Some(parent) = current {
            chain.push(parent);
            current = self.get(parent).parent;
        }
        chain.reverse();
        chain
    }

    /// Depth-first pre-order traversal of every node, children in declared
    /// order. Each call starts a fresh traversal.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MenuTree {
    type Item = &'a MenuEntry;
    type IntoIter = Nodes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy pre-order walk over a [`MenuTree`]
pub struct Nodes<'a> {
    tree: &'a MenuTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a MenuEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let entry = self.tree.get(id);
        self.stack.extend(entry.children.iter().rev().copied());
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MenuNode> {
        vec![
            MenuNode::item("dash", "Dashboard", "/"),
            MenuNode::group(
                "assets",
                "Assets",
                [
                    MenuNode::item("holdings", "Holdings", "/assets"),
                    MenuNode::group("deep", "Deep", [MenuNode::item("leaf", "Leaf", "/deep/leaf")]),
                ],
            ),
            MenuNode::item("ai", "AI", "/ai-research"),
        ]
    }

    #[test]
    fn iter_is_preorder_in_declared_order() {
        let tree = MenuTree::new(sample()).unwrap();
        let keys: Vec<&str> = tree.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["dash", "assets", "holdings", "deep", "leaf", "ai"]);

        let depths: Vec<usize> = tree.iter().map(|e| e.depth).collect();
        assert_eq!(depths, [0, 0, 1, 1, 2, 0]);
    }

    #[test]
    fn iter_restarts() {
        let tree = MenuTree::new(sample()).unwrap();
        assert_eq!(tree.iter().count(), tree.len());
        assert_eq!(tree.iter().count(), 6);
        assert_eq!((&tree).into_iter().count(), 6);
    }

    #[test]
    fn duplicate_key_at_depth_is_rejected() {
        let mut nodes = sample();
        nodes.push(MenuNode::group(
            "other",
            "Other",
            [MenuNode::item("leaf", "Again", "/again")],
        ));
        let err = MenuTree::new(nodes).unwrap_err();
        assert_eq!(err, MenuError::DuplicateKey { key: "leaf".into() });
    }

    #[test]
    fn parent_and_child_may_not_share_a_key() {
        let nodes = vec![MenuNode::group("g", "G", [MenuNode::item("g", "G", "/g")])];
        assert!(matches!(
            MenuTree::new(nodes),
            Err(MenuError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn relative_or_empty_paths_are_rejected() {
        let err = MenuTree::new([MenuNode::item("t", "Trade", "trade")]).unwrap_err();
        assert_eq!(
            err,
            MenuError::InvalidPath {
                key: "t".into(),
                path: "trade".to_string()
            }
        );
        assert!(MenuTree::new([MenuNode::item("e", "Empty", "")]).is_err());
    }

    #[test]
    fn paths_are_normalized_and_indexed() {
        let tree = MenuTree::new([MenuNode::item("t", "Trade", "/trade/")]).unwrap();
        assert_eq!(tree.find("t").unwrap().path.as_deref(), Some("/trade"));
        assert_eq!(tree.nodes_at("/trade?from=menu").len(), 1);
        assert!(tree.nodes_at("/nowhere").is_empty());
    }

    #[test]
    fn shared_paths_keep_preorder() {
        let tree = MenuTree::new([
            MenuNode::item("a", "A", "/same"),
            MenuNode::group("g", "G", [MenuNode::item("b", "B", "/same")]),
        ])
        .unwrap();
        let keys: Vec<&str> = tree
            .nodes_at("/same")
            .iter()
            .map(|id| tree.get(*id).key.as_str())
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn lineage_runs_root_first() {
        let tree = MenuTree::new(sample()).unwrap();
        let leaf = tree.id_of("leaf").unwrap();
        let labels: Vec<&str> = tree
            .lineage(leaf)
            .into_iter()
            .map(|id| tree.get(id).label.as_str())
            .collect();
        assert_eq!(labels, ["Assets", "Deep", "Leaf"]);
    }

    #[test]
    fn empty_tree_is_valid() {
        let tree = MenuTree::new(Vec::new()).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().next().map(|e| e.key.clone()), None);
    }
}
